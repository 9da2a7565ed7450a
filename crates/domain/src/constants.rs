//! Application constants
//!
//! Compiled-in defaults for every benchmark tunable. `BenchConfig::default()`
//! is built from these; environment overrides are optional.

// Benchmark input
pub const DEFAULT_SECRET: &[u8] = b"correct horse battery staple";
pub const DEFAULT_REPETITIONS: u32 = 100;

// bcrypt (log2 rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 12;
pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

// scrypt, roughly "moderate"
pub const DEFAULT_SCRYPT_N: u64 = 1 << 14; // CPU/memory cost
pub const DEFAULT_SCRYPT_R: u32 = 8; // block size
pub const DEFAULT_SCRYPT_P: u32 = 1; // parallelization
pub const SCRYPT_OUTPUT_LEN: usize = 64;

// Argon2id
pub const DEFAULT_ARGON2_TIME_COST: u32 = 2; // passes over memory
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 64_000; // in KiB, about 64 MB
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1; // lanes
pub const ARGON2_OUTPUT_LEN: usize = 32;

// Salt material
pub const SALT_LEN: usize = 16;

// Upper bound on the working buffer a memory-hard hash may ask for, in bytes.
// Larger settings are rejected at setup rather than failing to allocate
// mid-run.
pub const MAX_WORKING_MEMORY: u64 = 4 << 30;
