//! Pure label policy evaluation (no IO).
//!
//! Input: a validated [`policy::LabelPolicy`] and the labels of one resource.
//! Output: a [`report::Decision`] listing every violated rule category.

#![forbid(unsafe_code)]

pub mod model;
pub mod pattern;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use model::LabelMap;
pub use pattern::LabelPattern;
pub use policy::LabelPolicy;
pub use report::{Decision, Violation, ViolationKind};
