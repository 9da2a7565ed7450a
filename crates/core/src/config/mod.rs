//! Configuration loading
//!
//! The configuration types live in `hashcost-domain`; this module only
//! knows where overrides come from.

pub mod loader;

pub use loader::load_from_env;
