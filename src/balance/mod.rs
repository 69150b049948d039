//! Balance rules: the admission check for new transactions and the summary totals.

mod guard;
mod summary;

pub use guard::{Decision, RejectReason, current_balance, evaluate};
pub use summary::{Summary, summarize};
