use crate::models::{WorkItem, WorkItemKind};

/// Canonical ticket lifecycle. Every in-flight free-form status, the
/// explicit closure-requested one included, collapses into `InProgress`;
/// only the final closed/resolved spellings reach the terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketState {
    New,
    InProgress,
    Resolved,
    Other(String),
}

impl TicketState {
    /// Canonicalize a free-form ticket status. A ticket with no status yet
    /// is in its initial state.
    pub fn normalize(raw: Option<&str>) -> TicketState {
        let Some(raw) = raw else {
            return TicketState::New;
        };
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "" | "new" | "nueva" | "open" | "abierta" => TicketState::New,
            "in_progress" | "en_curso" | "assigned" | "asignada" | "pending" | "pendiente"
            | "closure_requested" | "cierre_solicitado" => TicketState::InProgress,
            "resolved" | "resuelta" | "closed" | "cerrada" => TicketState::Resolved,
            _ => TicketState::Other(raw),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketState::Resolved)
    }
}

/// Canonical task lifecycle. Already-canonical values pass through;
/// unrecognized ones are carried as `Other` and count as neither initial
/// nor terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    Open,
    InProgress,
    Done,
    Other(String),
}

impl TaskState {
    pub fn normalize(raw: Option<&str>) -> TaskState {
        let Some(raw) = raw else {
            return TaskState::Open;
        };
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "" | "open" | "abierta" | "new" | "nueva" => TaskState::Open,
            "in_progress" | "en_curso" => TaskState::InProgress,
            "done" | "completada" | "finalizada" | "closed" | "cerrada" => TaskState::Done,
            _ => TaskState::Other(raw),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Done)
    }
}

/// Whether the item's normalized status is the terminal one for its kind.
pub fn is_closed(item: &WorkItem) -> bool {
    match item.kind {
        WorkItemKind::Ticket => TicketState::normalize(item.status.as_deref()).is_terminal(),
        WorkItemKind::Task => TaskState::normalize(item.status.as_deref()).is_terminal(),
    }
}

/// Whether the item's normalized status is the initial ("new"/"open") one.
pub fn is_initial(item: &WorkItem) -> bool {
    match item.kind {
        WorkItemKind::Ticket => TicketState::normalize(item.status.as_deref()) == TicketState::New,
        WorkItemKind::Task => TaskState::normalize(item.status.as_deref()) == TaskState::Open,
    }
}
