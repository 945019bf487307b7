//! Math nodes - binary arithmetic operations

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

pub use add::AddNode;
pub use divide::DivideNode;
pub use multiply::MultiplyNode;
pub use subtract::SubtractNode;
