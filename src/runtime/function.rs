//! Callable values bound in namespaces.

use std::fmt;
use std::rc::Rc;

use crate::declare::Trampoline;
use crate::runtime::error::RuntimeError;
use crate::runtime::value::Value;

type NativeBody = dyn Fn(Vec<Value>) -> Result<Value, RuntimeError>;

/// A named native function.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Rc<NativeBody>,
}

impl Function {
    /// Wraps a native closure.
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(Vec<Value>) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// Adapts a keyword trampoline to a two-argument function taking the
    /// resolved name and the block value.
    pub fn from_trampoline(name: impl Into<String>, trampoline: Trampoline) -> Self {
        let name = name.into();
        let label = name.clone();
        Self::new(name, move |args| {
            let [resolved, block]: [Value; 2] = args
                .try_into()
                .map_err(|args: Vec<Value>| RuntimeError::arity(&label, 2, args.len()))?;
            Ok(trampoline(&resolved.as_string(), block))
        })
    }

    /// Name the function was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, RuntimeError> {
        (self.body)(args)
    }

    /// Returns `true` when both handles share one body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.name).finish()
    }
}
