// Exact byte-pattern scanner.
//
// Brute force: every start offset is tested against the full pattern and the
// cursor always advances by one byte, so overlapping occurrences are all
// reported. Patterns are at most 42 bytes, which keeps O(n*m) cheap.

/// Iterator over every start offset at which `pattern` occurs in `haystack`.
pub struct Occurrences<'a> {
    haystack: &'a [u8],
    pattern: &'a [u8],
    pos: usize,
}

impl<'a> Occurrences<'a> {
    pub fn new(haystack: &'a [u8], pattern: &'a [u8]) -> Self {
        debug_assert!(!pattern.is_empty(), "empty scan pattern");
        Self {
            haystack,
            pattern,
            pos: 0,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();
        if m == 0 || m > self.haystack.len() {
            return None;
        }
        let last = self.haystack.len() - m;
        while self.pos <= last {
            let i = self.pos;
            self.pos += 1;
            if &self.haystack[i..i + m] == self.pattern {
                return Some(i);
            }
        }
        None
    }
}

/// All start offsets of `pattern` in `haystack`, ascending.
pub fn find_all(haystack: &[u8], pattern: &[u8]) -> Vec<usize> {
    Occurrences::new(haystack, pattern).collect()
}

/// Number of occurrences of `pattern` in `haystack` (overlaps included).
pub fn count(haystack: &[u8], pattern: &[u8]) -> usize {
    Occurrences::new(haystack, pattern).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
