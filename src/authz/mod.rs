//! Authorization module - capability and visibility engine
//!
//! Pure decision logic shared by the UI layer and the server-side
//! enforcement layer:
//! - Role and status normalization (legacy/Spanish spellings included)
//! - Scope guards (tenant, department, location, creator/assignee)
//! - The role x guards x lifecycle permission matrix
//! - Batch visibility filtering
//!
//! Nothing here performs I/O or holds state; every decision is a pure
//! function of the records the caller passes in, and unrecognized input
//! resolves to deny rather than to an error.

mod evaluator;
mod guards;
mod matrix;
mod role;
mod status;

pub use evaluator::{filter_visible, DefaultPolicyEvaluator, PolicyEvaluator};
pub use guards::{build_guards, Guards};
pub use matrix::{resolve, CapabilitySet};
pub use role::Role;
pub use status::{TaskState, TicketState};
