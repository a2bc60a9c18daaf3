//! Controllers driving the explorer from user triggers.

pub mod detail;
pub mod list;

pub use detail::DetailController;
pub use list::{ListController, ListOptions, ListStatus, ListView};
