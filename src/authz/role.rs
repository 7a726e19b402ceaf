use std::fmt;

/// Canonical role set. Free-form role strings from the directory are
/// translated here, once, at the boundary; everything downstream switches
/// exhaustively over this enum.
///
/// Unrecognized strings are carried through as [`Role::Other`] rather than
/// dropped, so a typo'd role is visible in logs but matches no permission
/// branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    Admin,
    MaintenanceLead,
    DepartmentHead,
    LocationHead,
    Operator,
    Auditor,
    Other(String),
}

impl Role {
    /// Canonicalize a free-form role string. Absent or blank input means
    /// the actor has no role at all and is denied everything downstream.
    pub fn normalize(raw: Option<&str>) -> Option<Role> {
        let raw = raw?.trim().to_lowercase();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.as_str() {
            "super_admin" | "superadmin" => Role::SuperAdmin,
            "admin" | "administrador" => Role::Admin,
            "maintenance_lead" | "maintenance" | "mantenimiento" | "jefe_mantenimiento" => {
                Role::MaintenanceLead
            }
            // The single- and multi-department legacy variants collapse
            // into one canonical role.
            "department_head"
            | "department_head_multi"
            | "department_head_single"
            | "jefe_departamento"
            | "jefe_departamento_multi"
            | "responsable_departamento" => Role::DepartmentHead,
            "location_head" | "site_head" | "jefe_sede" | "responsable_sede" => Role::LocationHead,
            "operator" | "operario" => Role::Operator,
            "auditor" | "auditoria" => Role::Auditor,
            _ => Role::Other(raw),
        })
    }

    pub fn is_manager(&self) -> bool {
        matches!(
            self,
            Role::SuperAdmin
                | Role::Admin
                | Role::MaintenanceLead
                | Role::DepartmentHead
                | Role::LocationHead
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super_admin"),
            Role::Admin => write!(f, "admin"),
            Role::MaintenanceLead => write!(f, "maintenance_lead"),
            Role::DepartmentHead => write!(f, "department_head"),
            Role::LocationHead => write!(f, "location_head"),
            Role::Operator => write!(f, "operator"),
            Role::Auditor => write!(f, "auditor"),
            Role::Other(raw) => write!(f, "{raw}"),
        }
    }
}
