//! Run-time support: values, namespaces, and evaluation.

pub mod error;
pub mod function;
pub mod machine;
pub mod namespace;
pub mod value;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use function::Function;
pub use machine::Machine;
pub use namespace::{Namespace, NamespaceTable};
pub use value::Value;
