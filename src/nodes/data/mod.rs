//! Data nodes - sources of values

pub mod input;
pub mod list;

pub use input::InputNode;
pub use list::ListNode;
