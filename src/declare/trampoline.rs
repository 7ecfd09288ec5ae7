//! Run-time side of an installed keyword.

use std::rc::Rc;

use crate::runtime::Value;

/// Function called by a rewritten declaration with the resolved name and the
/// value of its block.
pub type Trampoline = Rc<dyn Fn(&str, Value) -> Value>;

/// Returns the resolved name and ignores the block's value.
pub fn default_trampoline() -> Trampoline {
    Rc::new(|name: &str, _block: Value| Value::String(name.to_string()))
}
