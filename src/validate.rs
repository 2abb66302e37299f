// Checks around the patch engine.
//
// `validate_address` runs before the engine is ever called. `patch_bytes`
// wraps one engine run: it first checks the address fits over every hostname
// the run would rewrite, then re-verifies the buffer length afterwards and treats
// a run with no replacements as a failure.

use log::{info, warn};

use crate::encoding::Encoding;
use crate::engine::{self, PatchReport};
use crate::error::PatchError;
use crate::hostnames::{HOSTNAMES, MAX_DOMAIN_LENGTH};
use crate::{rewrite, scan};

/// Trim `raw` and check it is a usable replacement address.
///
/// Returns the trimmed address.
pub fn validate_address(raw: &str) -> Result<&str, PatchError> {
    let address = raw.trim();
    if address.is_empty() {
        return Err(PatchError::MissingAddress);
    }

    let actual = address.chars().count();
    if actual > MAX_DOMAIN_LENGTH {
        return Err(PatchError::AddressTooLong {
            max: MAX_DOMAIN_LENGTH,
            actual,
        });
    }

    if let Some(ch) = address.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(PatchError::InvalidAddress { ch });
    }

    Ok(address)
}

/// Reject an address longer than any hostname the engine would rewrite.
///
/// `validate_address` bounds the address by the longest table entry; a
/// shorter entry would otherwise be overwritten with a truncated address.
/// Earlier rewrites can plant a shorter hostname (the address itself may
/// contain one), so the table is replayed over a scratch copy in engine
/// order and each shorter hostname is checked against the live bytes.
pub fn check_fit(data: &[u8], address: &str) -> Result<(), PatchError> {
    let actual = address.chars().count();
    if HOSTNAMES.iter().all(|h| h.len() >= actual) {
        return Ok(());
    }

    let mut scratch = data.to_vec();
    for &hostname in HOSTNAMES {
        for enc in Encoding::ALL {
            let pattern = enc.encode(hostname);
            if hostname.len() < actual && scan::count(&scratch, &pattern) > 0 {
                return Err(PatchError::AddressTooLongForHost {
                    hostname,
                    max: hostname.len(),
                    actual,
                });
            }
            rewrite::replace_all(&mut scratch, &pattern, &enc.encode(address));
        }
    }
    Ok(())
}

/// A successfully patched buffer.
#[derive(Debug, Clone)]
pub struct Patched {
    pub data: Vec<u8>,
    pub report: PatchReport,
}

/// Validate `raw_address`, patch `data`, and check the result.
///
/// On error the buffer is dropped; a partially trusted output is never
/// handed back.
pub fn patch_bytes(mut data: Vec<u8>, raw_address: &str) -> Result<Patched, PatchError> {
    let address = validate_address(raw_address)?;
    check_fit(&data, address)?;
    let expected = data.len();

    let report = engine::patch_binary_report(&mut data, address);
    check_size(expected, data.len())?;

    let totals = report.totals();
    if totals.is_empty() {
        return Err(PatchError::NoMatchesFound);
    }

    info!(
        "patched {} -> {address}: ASCII {}x, UTF-16 {}x",
        expected, totals.ascii_replacements, totals.utf16_replacements
    );
    Ok(Patched { data, report })
}

fn check_size(expected: usize, actual: usize) -> Result<(), PatchError> {
    if expected != actual {
        warn!("size drift after patch: {expected} -> {actual}");
        return Err(PatchError::SizeMismatch { expected, actual });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
