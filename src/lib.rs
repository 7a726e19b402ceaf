pub mod authz;
pub mod models;

// Re-export the flat surface embedders actually use
pub use authz::{
    build_guards, filter_visible, resolve, CapabilitySet, DefaultPolicyEvaluator, Guards,
    PolicyEvaluator, Role, TaskState, TicketState,
};
pub use models::{Actor, WorkItem, WorkItemKind};
