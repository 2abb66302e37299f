// Patch engine: ties the hostname table, encoders and rewriter together.
//
// For every hostname, in table order, the single-byte pattern is rewritten
// first and the UTF-16LE pattern second. Every hostname is attempted in both
// encodings even when nothing matches. The engine has no failure mode; the
// caller validates the address (see `validate`).

use log::{debug, trace};

use crate::encoding::Encoding;
use crate::hostnames::HOSTNAMES;
use crate::{rewrite, scan};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Aggregate replacement counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchResult {
    /// Occurrences rewritten in single-byte form.
    pub ascii_replacements: usize,
    /// Occurrences rewritten in UTF-16LE form.
    pub utf16_replacements: usize,
}

impl PatchResult {
    pub fn total(&self) -> usize {
        self.ascii_replacements + self.utf16_replacements
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn add(&mut self, encoding: Encoding, n: usize) {
        match encoding {
            Encoding::SingleByte => self.ascii_replacements += n,
            Encoding::Utf16Le => self.utf16_replacements += n,
        }
    }
}

/// Occurrences of one hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostHits {
    pub hostname: &'static str,
    pub ascii: usize,
    pub utf16: usize,
}

impl HostHits {
    fn new(hostname: &'static str) -> Self {
        Self {
            hostname,
            ascii: 0,
            utf16: 0,
        }
    }

    fn set(&mut self, encoding: Encoding, n: usize) {
        match encoding {
            Encoding::SingleByte => self.ascii = n,
            Encoding::Utf16Le => self.utf16 = n,
        }
    }
}

/// Per-hostname breakdown of a run, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub hosts: Vec<HostHits>,
}

impl PatchReport {
    /// Sum the per-hostname counts into a [`PatchResult`].
    pub fn totals(&self) -> PatchResult {
        let mut result = PatchResult::default();
        for h in &self.hosts {
            result.add(Encoding::SingleByte, h.ascii);
            result.add(Encoding::Utf16Le, h.utf16);
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Patching
// ---------------------------------------------------------------------------

/// Rewrite every known hostname in `buf` with `new_address`.
///
/// `new_address` must be non-empty and at most
/// [`MAX_DOMAIN_LENGTH`](crate::hostnames::MAX_DOMAIN_LENGTH) characters;
/// see [`validate::patch_bytes`](crate::validate::patch_bytes) for the
/// checked entry point. The buffer length never changes.
pub fn patch_binary(buf: &mut [u8], new_address: &str) -> PatchResult {
    patch_binary_report(buf, new_address).totals()
}

/// Same as [`patch_binary`], returning counts per hostname.
pub fn patch_binary_report(buf: &mut [u8], new_address: &str) -> PatchReport {
    let replacements = Encoding::ALL.map(|enc| enc.encode(new_address));
    let mut report = PatchReport {
        hosts: Vec::with_capacity(HOSTNAMES.len()),
    };

    for &hostname in HOSTNAMES {
        let mut hits = HostHits::new(hostname);
        for (enc, replacement) in Encoding::ALL.iter().zip(&replacements) {
            let pattern = enc.encode(hostname);
            let n = rewrite::replace_all(buf, &pattern, replacement);
            debug!("{hostname} ({enc}): {n} replaced");
            hits.set(*enc, n);
        }
        report.hosts.push(hits);
    }

    trace!("patch totals: {:?}", report.totals());
    report
}

/// Count occurrences of every known hostname without modifying `buf`.
pub fn survey(buf: &[u8]) -> PatchReport {
    let hosts = HOSTNAMES
        .iter()
        .map(|&hostname| {
            let mut hits = HostHits::new(hostname);
            for enc in Encoding::ALL {
                hits.set(enc, scan::count(buf, &enc.encode(hostname)));
            }
            hits
        })
        .collect();
    PatchReport { hosts }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
