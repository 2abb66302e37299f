// Known GG server hostnames.
//
// The table order is the order in which the engine rewrites patterns. The
// longest entry bounds the replacement address so that every rewrite fits
// inside the original hostname's bytes.

/// Hostnames embedded in the original client, in rewrite order.
pub const HOSTNAMES: &[&str] = &[
    "appmsg.gadu-gadu.pl",   // hub
    "register.gadu-gadu.pl", // registration
    "adserver.gadu-gadu.pl", // ads
    "update.gadu-gadu.pl",   // auto-update
    "www.gadu-gadu.pl",      // website
    "pubdir.gadu-gadu.pl",   // public directory
    "retr.gadu-gadu.pl",     // retrieval
    "smsat.gadu-gadu.pl",    // SMS gateway
];

/// Length in characters of the longest entry in [`HOSTNAMES`] (21).
///
/// Every table entry is ASCII, so byte length equals character count.
pub const MAX_DOMAIN_LENGTH: usize = longest(HOSTNAMES);

const fn longest(table: &[&str]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < table.len() {
        if table[i].len() > max {
            max = table[i].len();
        }
        i += 1;
    }
    max
}

/// Length of the shortest entry; the tightest fit for a replacement.
pub const MIN_DOMAIN_LENGTH: usize = shortest(HOSTNAMES);

const fn shortest(table: &[&str]) -> usize {
    let mut min = usize::MAX;
    let mut i = 0;
    while i < table.len() {
        if table[i].len() < min {
            min = table[i].len();
        }
        i += 1;
    }
    min
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
