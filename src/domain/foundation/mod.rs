//! Foundation module - Shared domain primitives.
//!
//! Identifiers and paging envelopes that form the vocabulary shared by
//! every resource of the Barhop API.

mod ids;
mod page;

pub use ids::{BarId, MemoId, PlanId, ReviewId, ScheduleId, UserId};
pub use page::{ListParams, Page, PageParams};
