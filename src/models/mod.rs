mod actor;
mod work_item;

pub use actor::Actor;
pub use work_item::{WorkItem, WorkItemKind};
