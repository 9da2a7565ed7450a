use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use hashcost_core::hashing::{OsSaltSource, SaltSource};
use hashcost_domain::{BenchError, Result as DomainResult};

/// Delegates to the OS source and counts `fill` calls.
#[derive(Clone, Default)]
pub struct CountingSaltSource {
    fills: Arc<AtomicU32>,
}

impl CountingSaltSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> u32 {
        self.fills.load(Ordering::SeqCst)
    }
}

impl SaltSource for CountingSaltSource {
    fn fill(&self, buf: &mut [u8]) -> DomainResult<()> {
        self.fills.fetch_add(1, Ordering::SeqCst);
        OsSaltSource.fill(buf)
    }
}

/// Delegates to the OS source and keeps a copy of every salt handed out.
#[derive(Clone, Default)]
pub struct RecordingSaltSource {
    salts: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingSaltSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn salts(&self) -> Vec<Vec<u8>> {
        self.salts.lock().unwrap().clone()
    }
}

impl SaltSource for RecordingSaltSource {
    fn fill(&self, buf: &mut [u8]) -> DomainResult<()> {
        OsSaltSource.fill(buf)?;
        self.salts.lock().unwrap().push(buf.to_vec());
        Ok(())
    }
}

/// Fails every draw, like an exhausted entropy source.
#[derive(Clone, Copy, Default)]
pub struct FailingSaltSource;

impl SaltSource for FailingSaltSource {
    fn fill(&self, _buf: &mut [u8]) -> DomainResult<()> {
        Err(BenchError::Entropy("entropy source unavailable".to_string()))
    }
}
