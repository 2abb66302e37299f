//! ggpatch: fixed-size hostname patcher for GG client executables.
//!
//! Every occurrence of a known `*.gadu-gadu.pl` hostname, stored either as a
//! narrow (single-byte) or wide (UTF-16LE) string, is overwritten in place
//! with a replacement address, zero-padded so the file size never changes.
//!
//! The crate provides:
//! - The patch engine (`engine`) built on `encoding`, `scan` and `rewrite`
//! - Input/output checks around the engine (`validate`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use ggpatch::validate::patch_bytes;
//!
//! let mut exe = b"MZ....".to_vec();
//! exe.extend_from_slice(b"www.gadu-gadu.pl");
//!
//! let patched = patch_bytes(exe, "my.server.net").unwrap();
//! assert!(patched.data.ends_with(b"my.server.net\0\0\0"));
//! assert_eq!(patched.report.totals().ascii_replacements, 1);
//! ```

pub mod encoding;
pub mod engine;
pub mod error;
pub mod hostnames;
pub mod io;
pub mod rewrite;
pub mod scan;
pub mod validate;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::{PatchReport, PatchResult, patch_binary};
pub use error::PatchError;
pub use hostnames::{HOSTNAMES, MAX_DOMAIN_LENGTH};
