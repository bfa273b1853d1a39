//! Assignment policy: which order goes out next

pub mod selector;

pub use selector::{Assignment, AssignmentSelector, is_eligible};
