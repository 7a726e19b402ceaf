use crate::models::{Actor, WorkItem};

/// Boolean scope facts computed fresh for one permission query and fed to
/// the matrix. Never persisted, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guards {
    pub is_creator: bool,
    pub is_assignee: bool,
    pub in_department_scope: bool,
    pub in_location_scope: bool,
    pub in_scope: bool,
    pub matches_org: bool,
}

/// Compute the scope facts for one (item, actor) pair.
///
/// Pure function of its inputs; safe to call repeatedly and from any
/// thread. An actor with no organization set matches every organization;
/// that case only arises for system/service contexts.
pub fn build_guards(item: &WorkItem, actor: &Actor, actor_id: &str) -> Guards {
    let matches_org = match actor.organization_id.as_deref() {
        None => true,
        Some(org) => item.organization_id.as_deref() == Some(org),
    };

    // Origin and target department queues both count while a transfer is
    // in flight.
    let in_department_scope = member_of(actor.department_scope(), item.origin_department())
        || member_of(actor.department_scope(), item.target_department());

    let in_location_scope = member_of(actor.location_scope(), item.location_id.as_deref());

    let is_creator = !actor_id.is_empty() && item.created_by.as_deref() == Some(actor_id);
    let is_assignee = !actor_id.is_empty() && item.assigned_to.as_deref() == Some(actor_id);

    Guards {
        is_creator,
        is_assignee,
        in_department_scope,
        in_location_scope,
        in_scope: in_department_scope || in_location_scope,
        matches_org,
    }
}

fn member_of<'a>(mut memberships: impl Iterator<Item = &'a str>, unit: Option<&str>) -> bool {
    match unit {
        Some(unit) => memberships.any(|m| m == unit),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, WorkItem};

    #[test]
    fn org_match_is_permissive_when_actor_has_none() {
        let item = WorkItem::ticket("t-1").with_organization("org-1");
        let service = Actor::new("svc");
        assert!(build_guards(&item, &service, "svc").matches_org);

        let outsider = Actor::new("u-1").with_organization("org-2");
        assert!(!build_guards(&item, &outsider, "u-1").matches_org);
    }

    #[test]
    fn item_without_org_never_matches_a_tenant_actor() {
        let item = WorkItem::ticket("t-1");
        let actor = Actor::new("u-1").with_organization("org-1");
        assert!(!build_guards(&item, &actor, "u-1").matches_org);
    }

    #[test]
    fn department_scope_matches_origin_or_target() {
        let item = WorkItem::ticket("t-1")
            .with_origin_department("dept-1")
            .with_target_department("dept-2");

        let origin_member = Actor::new("u-1").with_department("dept-1");
        assert!(build_guards(&item, &origin_member, "u-1").in_department_scope);

        let target_member = Actor::new("u-2").with_departments(vec!["dept-2".to_string()]);
        assert!(build_guards(&item, &target_member, "u-2").in_department_scope);

        let stranger = Actor::new("u-3").with_department("dept-9");
        assert!(!build_guards(&item, &stranger, "u-3").in_department_scope);
    }

    #[test]
    fn legacy_department_field_backs_both_queues() {
        let item = WorkItem::task("m-1").with_department("dept-5");
        let actor = Actor::new("u-1").with_department("dept-5");
        let guards = build_guards(&item, &actor, "u-1");
        assert!(guards.in_department_scope);
        assert!(guards.in_scope);
    }

    #[test]
    fn location_scope_uses_multi_valued_memberships() {
        let item = WorkItem::ticket("t-1").with_location("site-2");
        let actor = Actor::new("u-1")
            .with_location("site-1")
            .with_locations(vec!["site-2".to_string()]);
        assert!(build_guards(&item, &actor, "u-1").in_location_scope);
    }

    #[test]
    fn empty_actor_id_is_never_creator_or_assignee() {
        let item = WorkItem::ticket("t-1")
            .with_created_by("")
            .with_assigned_to("");
        let actor = Actor::new("");
        let guards = build_guards(&item, &actor, "");
        assert!(!guards.is_creator);
        assert!(!guards.is_assignee);
    }

    #[test]
    fn creator_and_assignee_match_on_id() {
        let item = WorkItem::task("m-1")
            .with_created_by("u-1")
            .with_assigned_to("u-2");
        let guards = build_guards(&item, &Actor::new("u-2"), "u-2");
        assert!(!guards.is_creator);
        assert!(guards.is_assignee);
    }
}
