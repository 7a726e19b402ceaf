use serde::{Deserialize, Serialize};

/// Which lifecycle table applies to a work item. Tickets are incident
/// reports, tasks are planned maintenance jobs; both share the same
/// scoping and permission shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemKind {
    #[default]
    Ticket,
    Task,
}

/// A ticket or task record as stored by the persistence layer.
///
/// Field names follow the document store's camelCase spelling; the legacy
/// aliases (`siteId`, single `departmentId`) are accepted on input so old
/// documents keep working. When `originDepartmentId`/`targetDepartmentId`
/// are missing they fall back to the legacy `departmentId`. A populated
/// origin/target pair means a transfer between department queues is in
/// progress and both remain valid scope matches until it is finalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    #[serde(default)]
    pub kind: WorkItemKind,
    pub organization_id: Option<String>,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub department_id: Option<String>,
    pub origin_department_id: Option<String>,
    pub target_department_id: Option<String>,
    #[serde(alias = "siteId")]
    pub location_id: Option<String>,
}

impl WorkItem {
    pub fn new(kind: WorkItemKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            organization_id: None,
            status: None,
            created_by: None,
            assigned_to: None,
            department_id: None,
            origin_department_id: None,
            target_department_id: None,
            location_id: None,
        }
    }

    pub fn ticket(id: impl Into<String>) -> Self {
        Self::new(WorkItemKind::Ticket, id)
    }

    pub fn task(id: impl Into<String>) -> Self {
        Self::new(WorkItemKind::Task, id)
    }

    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_created_by(mut self, actor_id: impl Into<String>) -> Self {
        self.created_by = Some(actor_id.into());
        self
    }

    pub fn with_assigned_to(mut self, actor_id: impl Into<String>) -> Self {
        self.assigned_to = Some(actor_id.into());
        self
    }

    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    pub fn with_origin_department(mut self, department_id: impl Into<String>) -> Self {
        self.origin_department_id = Some(department_id.into());
        self
    }

    pub fn with_target_department(mut self, department_id: impl Into<String>) -> Self {
        self.target_department_id = Some(department_id.into());
        self
    }

    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Origin department queue, falling back to the legacy single field.
    pub fn origin_department(&self) -> Option<&str> {
        self.origin_department_id
            .as_deref()
            .or(self.department_id.as_deref())
    }

    /// Target department queue, falling back to the legacy single field.
    pub fn target_department(&self) -> Option<&str> {
        self.target_department_id
            .as_deref()
            .or(self.department_id.as_deref())
    }

    /// Deserialize a raw document-store payload.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
