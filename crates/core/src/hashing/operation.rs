//! A prepared, repeatable hash computation

use std::fmt;

use hashcost_domain::InvocationError;

type Invocation = Box<dyn FnMut() -> Result<(), InvocationError> + Send>;

/// One hash computation with every parameter and salt already bound.
///
/// Built by a [`HashAlgorithm`](super::ports::HashAlgorithm) factory. Each
/// call to [`invoke`](Self::invoke) performs exactly one hash and discards
/// the output. Salt and parameter precomputation happened at construction
/// and are owned by the callable, so repeated invocations cost the same and
/// touch no state outside the operation.
pub struct HashOperation {
    name: String,
    invoke: Invocation,
}

impl HashOperation {
    /// Wrap a callable that performs one hash per call.
    pub fn new<F>(name: impl Into<String>, invoke: F) -> Self
    where
        F: FnMut() -> Result<(), InvocationError> + Send + 'static,
    {
        Self { name: name.into(), invoke: Box::new(invoke) }
    }

    /// Algorithm name shown in reports and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Perform one hash computation.
    pub fn invoke(&mut self) -> Result<(), InvocationError> {
        (self.invoke)()
    }
}

impl fmt::Debug for HashOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashOperation").field("name", &self.name).finish_non_exhaustive()
    }
}
