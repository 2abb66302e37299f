// File-level helpers for patching executables.
//
// Provides `patch_file()`, which reads the whole input into memory, runs the
// checked patch, and writes the result unchanged to a sibling file named
// after the input. Optionally computes SHA-256 digests of both files
// (feature-gated behind `file-io`).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "file-io")]
use sha2::Digest;

use log::info;

use crate::engine::{PatchReport, PatchResult};
use crate::error::PatchError;
use crate::validate::{self, Patched};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `patch_file()`.
#[derive(Debug, Clone)]
pub struct PatchStats {
    /// Input file size in bytes.
    pub input_size: u64,
    /// Output size in bytes (always equal to `input_size`).
    pub output_size: u64,
    /// Aggregate replacement counts.
    pub result: PatchResult,
    /// Per-hostname breakdown.
    pub report: PatchReport,
    /// Where the output was written, if it was.
    pub output_path: Option<PathBuf>,
    /// SHA-256 of the input file (if `file-io` feature is enabled).
    pub input_sha256: Option<[u8; 32]>,
    /// SHA-256 of the patched output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

const EXE_SUFFIX: &str = ".exe";
const PATCHED_SUFFIX: &str = "_patched.exe";

/// Derive the output file name: strip a trailing `.exe` (any case) and
/// append `_patched.exe`.
pub fn output_file_name(input_name: &str) -> String {
    let stem = match input_name.len().checked_sub(EXE_SUFFIX.len()) {
        Some(cut)
            if input_name.is_char_boundary(cut)
                && input_name[cut..].eq_ignore_ascii_case(EXE_SUFFIX) =>
        {
            &input_name[..cut]
        }
        _ => input_name,
    };
    format!("{stem}{PATCHED_SUFFIX}")
}

/// Output path next to `input`, named by [`output_file_name`].
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(output_file_name(&name))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, PatchError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PatchError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => PatchError::ReadFailure {
            path: path.to_path_buf(),
            source,
        },
    })
}

// ---------------------------------------------------------------------------
// patch_file
// ---------------------------------------------------------------------------

/// Patch `input` with `address`, writing the result to `output`.
///
/// Checks run in order: input file, address, patch result, then the output
/// path. With `output == None` every check still runs but nothing is
/// written. An existing output file is only replaced when `force` is set.
pub fn patch_file(
    input: &Path,
    output: Option<&Path>,
    address: &str,
    force: bool,
) -> Result<PatchStats, PatchError> {
    let (patched, mut stats) = load_and_patch(input, address)?;

    if let Some(path) = output {
        if path.exists() && !force {
            return Err(PatchError::OutputExists {
                path: path.to_path_buf(),
            });
        }
        write_output(path, &patched.data)?;
        info!("wrote {}", path.display());
        stats.output_path = Some(path.to_path_buf());
    }

    Ok(stats)
}

/// Patch `input` with `address`, streaming the result into `writer`.
pub fn patch_to_writer<W: Write>(
    input: &Path,
    writer: &mut W,
    address: &str,
) -> Result<PatchStats, PatchError> {
    let (patched, stats) = load_and_patch(input, address)?;
    writer
        .write_all(&patched.data)
        .and_then(|()| writer.flush())
        .map_err(|source| PatchError::WriteFailure {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    Ok(stats)
}

fn load_and_patch(input: &Path, address: &str) -> Result<(Patched, PatchStats), PatchError> {
    let data = read_input(input)?;
    let input_size = data.len() as u64;

    #[cfg(feature = "file-io")]
    let input_sha256 = Some(sha256(&data));
    #[cfg(not(feature = "file-io"))]
    let input_sha256: Option<[u8; 32]> = None;

    let patched = validate::patch_bytes(data, address)?;

    #[cfg(feature = "file-io")]
    let output_sha256 = Some(sha256(&patched.data));
    #[cfg(not(feature = "file-io"))]
    let output_sha256: Option<[u8; 32]> = None;

    let stats = PatchStats {
        input_size,
        output_size: patched.data.len() as u64,
        result: patched.report.totals(),
        report: patched.report.clone(),
        output_path: None,
        input_sha256,
        output_sha256,
    };
    Ok((patched, stats))
}

/// Write `data` to `path` as-is.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), PatchError> {
    let wrap = |source| PatchError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::with_capacity(BUF_SIZE, file);
    writer.write_all(data).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

#[cfg(feature = "file-io")]
fn sha256(data: &[u8]) -> [u8; 32] {
    let mut h = sha2::Sha256::new();
    h.update(data);
    h.finalize().into()
}

/// Lowercase hex rendering of a digest.
pub fn hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
