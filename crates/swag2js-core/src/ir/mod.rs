pub mod operations;
pub mod types;

pub use operations::*;
pub use types::{ClientInfo, ClientSpec, OperationFunction, TypeDefinition};
