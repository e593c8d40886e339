// All extern "C" ABI exports are plain value-in/value-out math calls; the
// one pointer parameter (modf) is null-checked at the boundary.
#![allow(clippy::missing_safety_doc)]
//! # softlibm-abi
//!
//! ABI-compatible `extern "C"` boundary layer for softlibm.
//!
//! This crate produces a `cdylib` (`libm.so`) exposing the `<math.h>`
//! call surface via `extern "C"` symbols. Each entrypoint delegates to
//! the safe implementations in `softlibm-core` and translates their
//! `Result`s into the C convention: on failure the thread-local errno is
//! set and the sentinel `0.0` is returned.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> core impl -> errno + return
//! ```

pub mod errno_abi;
pub mod math_abi;
