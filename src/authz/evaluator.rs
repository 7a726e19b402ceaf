use super::matrix::{self, CapabilitySet};
use crate::models::{Actor, WorkItem};

/// Policy evaluator seam. The UI layer and the server-side enforcement
/// layer both hold one of these so the same policy runs in both places.
pub trait PolicyEvaluator: Send + Sync {
    /// Resolve the full capability set for one (item, actor) pair.
    fn resolve(&self, item: &WorkItem, actor: &Actor, actor_id: &str) -> CapabilitySet;

    fn can_view(&self, item: &WorkItem, actor: &Actor, actor_id: &str) -> bool {
        self.resolve(item, actor, actor_id).can_view
    }
}

/// The standard role/scope matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicyEvaluator;

impl DefaultPolicyEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl PolicyEvaluator for DefaultPolicyEvaluator {
    fn resolve(&self, item: &WorkItem, actor: &Actor, actor_id: &str) -> CapabilitySet {
        matrix::resolve(item, actor, actor_id)
    }
}

/// Restrict a batch of work items to the ones the actor may view.
/// Input order is preserved; each item is decided independently.
pub fn filter_visible<'a>(items: &'a [WorkItem], actor: &Actor, actor_id: &str) -> Vec<&'a WorkItem> {
    items
        .iter()
        .filter(|item| matrix::resolve(item, actor, actor_id).can_view)
        .collect()
}
