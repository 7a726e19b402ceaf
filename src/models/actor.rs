use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// The authenticated subject as stored in the organizational directory.
///
/// Membership comes in two generations: a legacy single `departmentId` /
/// `siteId` and the multi-valued `departmentIds` / `locationIds`. Both are
/// kept on the record and merged by [`Actor::department_scope`] and
/// [`Actor::location_scope`] so matching logic only ever sees one canonical
/// membership set per dimension.
///
/// The `active` flag is an external gate checked at sign-in; the engine
/// carries it but never evaluates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    pub organization_id: Option<String>,
    pub role: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_ids: Vec<String>,
    #[serde(alias = "siteId")]
    pub location_id: Option<String>,
    #[serde(default, alias = "siteIds")]
    pub location_ids: Vec<String>,
}

impl Actor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organization_id: None,
            role: None,
            active: true,
            department_id: None,
            department_ids: Vec::new(),
            location_id: None,
            location_ids: Vec::new(),
        }
    }

    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    pub fn with_departments(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.department_ids = ids.into_iter().collect();
        self
    }

    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_locations(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.location_ids = ids.into_iter().collect();
        self
    }

    /// All department memberships, single legacy field included.
    pub fn department_scope(&self) -> impl Iterator<Item = &str> {
        self.department_id
            .as_deref()
            .into_iter()
            .chain(self.department_ids.iter().map(String::as_str))
    }

    /// All location memberships, single legacy field included.
    pub fn location_scope(&self) -> impl Iterator<Item = &str> {
        self.location_id
            .as_deref()
            .into_iter()
            .chain(self.location_ids.iter().map(String::as_str))
    }

    /// Deserialize a raw directory record.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
