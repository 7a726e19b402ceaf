use serde::Serialize;

use super::guards::build_guards;
use super::role::Role;
use super::status;
use crate::models::{Actor, WorkItem};

/// Everything an actor may do with one work item. Each field is computed
/// independently; no field implies another. Serializes in camelCase so the
/// UI layer consumes it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_view: bool,
    pub can_comment: bool,
    pub can_edit_content: bool,
    pub can_assign_any_user: bool,
    pub can_assign_to_self: bool,
    pub can_assign_to_department_bucket: bool,
    pub can_change_department: bool,
    pub can_change_priority: bool,
    pub can_escalate_to_critical: bool,
    pub can_change_status: bool,
    pub can_mark_complete: bool,
    pub can_request_closure: bool,
    pub can_close: bool,
    pub can_reopen: bool,
    pub can_reassign: bool,
    pub can_unassign_self: bool,
    pub can_view_audit_trail: bool,
}

impl CapabilitySet {
    /// The all-false deny set.
    pub fn denied() -> Self {
        Self::default()
    }
}

/// Resolve the full capability set for one (item, actor) pair.
///
/// `actor_id` is the id from the authentication token, passed separately
/// from the directory record on purpose: a missing id denies everything
/// regardless of what the record claims.
pub fn resolve(item: &WorkItem, actor: &Actor, actor_id: &str) -> CapabilitySet {
    if actor_id.trim().is_empty() {
        tracing::debug!(item_id = %item.id, "missing actor id, denying all");
        return CapabilitySet::denied();
    }
    let Some(role) = Role::normalize(actor.role.as_deref()) else {
        tracing::debug!(item_id = %item.id, actor_id = %actor_id, "actor has no role, denying all");
        return CapabilitySet::denied();
    };

    let guards = build_guards(item, actor, actor_id);
    let closed = status::is_closed(item);
    let initial = status::is_initial(item);

    let can_view = match role {
        // The one cross-tenant role.
        Role::SuperAdmin => true,
        _ if !guards.matches_org => {
            tracing::debug!(
                item_id = %item.id,
                actor_id = %actor_id,
                role = %role,
                "tenant mismatch, item not visible"
            );
            false
        }
        Role::Admin | Role::MaintenanceLead | Role::Auditor => true,
        Role::DepartmentHead => guards.in_department_scope || guards.is_creator || guards.is_assignee,
        Role::LocationHead => guards.in_location_scope || guards.is_creator || guards.is_assignee,
        Role::Operator => guards.is_creator || guards.is_assignee || guards.in_scope,
        Role::Other(_) => false,
    };

    // Auditors are read-only, full stop: the audit trail if they can see
    // the item, nothing else.
    if role == Role::Auditor {
        return CapabilitySet {
            can_view,
            can_view_audit_trail: can_view,
            ..CapabilitySet::denied()
        };
    }

    let super_admin = role == Role::SuperAdmin;
    let admin = role == Role::Admin;
    let maintenance_lead = role == Role::MaintenanceLead;
    let department_head = role == Role::DepartmentHead;
    let location_head = role == Role::LocationHead;
    let operator = role == Role::Operator;

    // A manager acting inside their scope: admins and the maintenance lead
    // only need the org match, heads additionally need their own scope
    // dimension to hold.
    let manager_in_scope = super_admin
        || (guards.matches_org
            && (admin
                || maintenance_lead
                || (department_head && guards.in_department_scope)
                || (location_head && guards.in_location_scope)));

    let can_assign_any_user = super_admin
        || admin
        || maintenance_lead
        || (department_head && guards.matches_org && guards.in_department_scope)
        || (location_head && guards.matches_org && guards.in_location_scope);

    let creator_or_assignee = guards.is_creator || guards.is_assignee;

    let can_edit = super_admin
        || (guards.matches_org
            && (admin
                || maintenance_lead
                || (department_head && guards.in_department_scope)
                || (location_head && guards.in_location_scope)
                || (operator && creator_or_assignee)));

    let can_change_priority = manager_in_scope || (operator && can_view && creator_or_assignee);

    CapabilitySet {
        can_view,
        can_comment: can_view,
        can_edit_content: can_edit,
        can_assign_any_user,
        can_assign_to_self: if operator { can_view } else { can_assign_any_user },
        can_assign_to_department_bucket: if operator {
            can_view && !closed
        } else {
            can_assign_any_user && guards.matches_org && !closed
        },
        // Operators may only re-route an item that nobody has started on.
        can_change_department: if operator {
            can_view && initial
        } else {
            manager_in_scope
        },
        can_change_priority,
        can_escalate_to_critical: manager_in_scope && !closed,
        can_change_status: can_change_priority,
        can_mark_complete: if operator {
            can_view && guards.is_assignee
        } else {
            manager_in_scope && !closed
        },
        can_request_closure: (operator && can_view && creator_or_assignee && !closed)
            || (manager_in_scope && !closed),
        can_close: manager_in_scope && !operator && !closed,
        can_reopen: manager_in_scope && !operator,
        can_reassign: manager_in_scope && !closed,
        can_unassign_self: operator && guards.is_assignee,
        can_view_audit_trail: can_edit,
    }
}
