//! Records as the document store actually holds them: camelCase fields,
//! legacy site/department spellings, free-form Spanish statuses.

use serde_json::json;

use fixwise_authz::{resolve, Actor, WorkItem};

#[test]
fn legacy_ticket_document_resolves_for_operario() {
    let item = WorkItem::from_json(json!({
        "id": "t-100",
        "organizationId": "org-1",
        "status": "asignada",
        "createdBy": "other-user",
        "assignedTo": "u-1",
        "departmentId": "dept-1",
        "siteId": "site-1"
    }))
    .unwrap();
    let actor = Actor::from_json(json!({
        "id": "u-1",
        "organizationId": "org-1",
        "role": "Operario",
        "departmentIds": ["dept-1", "dept-4"]
    }))
    .unwrap();

    let caps = resolve(&item, &actor, "u-1");
    assert!(caps.can_view);
    assert!(caps.can_mark_complete);
    assert!(caps.can_unassign_self);
    assert!(!caps.can_close);
}

#[test]
fn closure_requested_ticket_is_not_closed() {
    let item = WorkItem::from_json(json!({
        "id": "t-101",
        "organizationId": "org-1",
        "status": "cierre_solicitado",
        "departmentId": "dept-1"
    }))
    .unwrap();
    let lead = Actor::new("u-1")
        .with_organization("org-1")
        .with_role("maintenance_lead");

    let caps = resolve(&item, &lead, "u-1");
    assert!(caps.can_close);
    assert!(caps.can_reassign);
}

#[test]
fn resolved_ticket_blocks_closure_paths() {
    let item = WorkItem::from_json(json!({
        "id": "t-102",
        "organizationId": "org-1",
        "status": "resuelta",
        "departmentId": "dept-1"
    }))
    .unwrap();
    let lead = Actor::new("u-1")
        .with_organization("org-1")
        .with_role("maintenance_lead");

    let caps = resolve(&item, &lead, "u-1");
    assert!(caps.can_view);
    assert!(!caps.can_close);
    assert!(caps.can_reopen);
}

#[test]
fn unknown_status_leaves_item_open_for_managers() {
    let item = WorkItem::from_json(json!({
        "id": "t-103",
        "organizationId": "org-1",
        "status": "esperando_repuestos",
        "departmentId": "dept-1"
    }))
    .unwrap();
    let admin = Actor::new("u-1").with_organization("org-1").with_role("admin");

    let caps = resolve(&item, &admin, "u-1");
    assert!(caps.can_close, "unrecognized status never counts as closed");
    assert!(caps.can_change_department, "managers re-route regardless of state");

    let operator = Actor::new("u-2")
        .with_organization("org-1")
        .with_role("operario")
        .with_department("dept-1");
    let caps = resolve(&item, &operator, "u-2");
    assert!(caps.can_view);
    assert!(
        !caps.can_change_department,
        "unrecognized status never counts as new either"
    );
}

#[test]
fn capability_set_serializes_camel_case_for_the_ui() {
    let item = WorkItem::ticket("t-1").with_organization("org-1");
    let admin = Actor::new("u-1").with_organization("org-1").with_role("admin");
    let value = serde_json::to_value(resolve(&item, &admin, "u-1")).unwrap();
    assert_eq!(value["canView"], json!(true));
    assert_eq!(value["canUnassignSelf"], json!(false));
    assert!(value.get("can_view").is_none());
}
