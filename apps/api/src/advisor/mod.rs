//! Advisory operations: the three model-backed calls behind the product,
//! pathway generation, skill-gap analysis, and the career coach chat.
//!
//! Each operation is a stateless request/response: build prompt → one
//! provider call → parse/validate → typed result or classified error.
//! No retry, no dedup, no cancellation; concurrent invocations may resolve
//! out of order.

pub mod coach;
pub mod handlers;
pub mod pathway;
pub mod prompts;
pub mod skill_gap;
pub mod validation;
