use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hashcost_common::MockClock;
use hashcost_core::hashing::{HashAlgorithm, HashOperation, SaltSource};
use hashcost_domain::{InvocationError, Result as DomainResult};

/// Builds `HashOperation`s that count their invocations.
///
/// Optionally fails on the k-th invocation (1-based). The counter includes
/// the failing call.
#[derive(Clone, Default)]
pub struct CountingOperation {
    calls: Arc<AtomicU32>,
}

impl CountingOperation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// An operation that always succeeds.
    pub fn operation(&self, name: &str) -> HashOperation {
        self.build(name, None)
    }

    /// An operation whose `fail_on`-th invocation returns an error.
    pub fn failing_on(&self, name: &str, fail_on: u32) -> HashOperation {
        self.build(name, Some(fail_on))
    }

    fn build(&self, name: &str, fail_on: Option<u32>) -> HashOperation {
        let calls = Arc::clone(&self.calls);
        HashOperation::new(name, move || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if Some(call) == fail_on {
                return Err(InvocationError::new(format!("stub failure on call {call}")));
            }
            Ok(())
        })
    }
}

/// `HashAlgorithm` stub handing out counting operations.
///
/// Draws one 16-byte salt per `prepare`, like the real salted factories.
pub struct CountingAlgorithm {
    name: String,
    counter: CountingOperation,
    fail_on: Option<u32>,
}

impl CountingAlgorithm {
    pub fn new(name: &str, counter: CountingOperation) -> Self {
        Self { name: name.to_string(), counter, fail_on: None }
    }

    pub fn failing_on(mut self, fail_on: u32) -> Self {
        self.fail_on = Some(fail_on);
        self
    }
}

impl HashAlgorithm for CountingAlgorithm {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, _secret: &[u8], salts: &dyn SaltSource) -> DomainResult<HashOperation> {
        let mut salt = [0u8; 16];
        salts.fill(&mut salt)?;
        Ok(match self.fail_on {
            Some(k) => self.counter.failing_on(&self.name, k),
            None => self.counter.operation(&self.name),
        })
    }
}

/// An operation that advances `clock` by `per_call` on every invocation.
pub fn ticking_operation(name: &str, clock: &MockClock, per_call: Duration) -> HashOperation {
    let clock = clock.clone();
    HashOperation::new(name, move || {
        clock.advance(per_call);
        Ok(())
    })
}
