//! Wire protocol encoders.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `writer`: cursor-based byte assembly
//! - `frame`: domain-level encoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Encoders are pure and contain no I/O; transports live outside this crate.

pub mod rdm;
