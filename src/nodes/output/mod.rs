//! Output nodes - sinks

pub mod print;

pub use print::PrintNode;
