use ggpatch::encoding::{encode_single_byte, encode_utf16_le};
use ggpatch::engine::{patch_binary, patch_binary_report, survey};
use ggpatch::rewrite::replace_all;
use ggpatch::validate::{patch_bytes, validate_address};
use ggpatch::{HOSTNAMES, MAX_DOMAIN_LENGTH, PatchError};

fn filler(n: usize, seed: u8) -> Vec<u8> {
    (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed) | 0x80).collect()
}

#[test]
fn single_ascii_www() {
    let mut buf = filler(40, 1);
    buf.extend_from_slice(b"www.gadu-gadu.pl");
    buf.extend_from_slice(&filler(40, 2));
    let len = buf.len();

    let result = patch_binary(&mut buf, "my.server.net");
    assert_eq!(result.ascii_replacements, 1);
    assert_eq!(result.utf16_replacements, 0);
    assert_eq!(buf.len(), len);
    assert_eq!(&buf[40..53], b"my.server.net");
    assert_eq!(&buf[53..56], &[0, 0, 0]);
    assert_eq!(&buf[56..], &filler(40, 2)[..]);
}

#[test]
fn unrecognised_input_reports_no_matches() {
    let mut buf = filler(4096, 9);
    let result = patch_binary(&mut buf, "gg.example.org");
    assert_eq!(result.ascii_replacements, 0);
    assert_eq!(result.utf16_replacements, 0);

    assert!(matches!(
        patch_bytes(filler(4096, 9), "gg.example.org"),
        Err(PatchError::NoMatchesFound)
    ));
}

#[test]
fn address_one_over_max_is_rejected_up_front() {
    let address = "x".repeat(MAX_DOMAIN_LENGTH + 1);
    assert!(matches!(
        validate_address(&address),
        Err(PatchError::AddressTooLong {
            max: 21,
            actual: 22
        })
    ));

    let mut input = filler(16, 3);
    input.extend_from_slice(b"retr.gadu-gadu.pl");
    assert!(matches!(
        patch_bytes(input, &address),
        Err(PatchError::AddressTooLong { .. })
    ));
}

#[test]
fn utf16_retr_twice() {
    let wide = encode_utf16_le("retr.gadu-gadu.pl");
    let mut buf = filler(10, 4);
    buf.extend_from_slice(&wide);
    buf.extend_from_slice(&filler(10, 5));
    buf.extend_from_slice(&wide);

    let result = patch_binary(&mut buf, "gg.local");
    assert_eq!(result.utf16_replacements, 2);
    assert_eq!(result.ascii_replacements, 0);

    let replacement = encode_utf16_le("gg.local");
    for start in [10, 10 + wide.len() + 10] {
        let region = &buf[start..start + wide.len()];
        assert_eq!(&region[..replacement.len()], &replacement[..]);
        assert!(region[replacement.len()..].iter().all(|&b| b == 0));
    }
}

#[test]
fn overlapping_occurrences_later_offset_wins() {
    // "abcab" occurs at 0 and 3; the second write lands in the first
    // block's zero tail and overwrites it.
    let mut buf = b"abcabcab".to_vec();
    let n = replace_all(&mut buf, b"abcab", b"XY");
    assert_eq!(n, 2);
    // After write at 0: XY\0\0\0cab. After write at 3: XY\0XY\0\0\0.
    assert_eq!(buf, b"XY\0XY\0\0\0");
}

#[test]
fn adjacent_hostnames_are_each_rewritten() {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"www.gadu-gadu.pl");
    buf.extend_from_slice(b"appmsg.gadu-gadu.pl");
    let result = patch_binary(&mut buf, "a.b");
    assert_eq!(result.ascii_replacements, 2);
    let mut expected = b"a.b".to_vec();
    expected.resize(16, 0);
    expected.extend_from_slice(b"a.b");
    expected.resize(35, 0);
    assert_eq!(buf, expected);
}

#[test]
fn earlier_rewrites_feed_later_hostnames() {
    // Table order matters: rewriting appmsg.* into www.* makes the later
    // www.* pass match that region too.
    let mut buf = b"appmsg.gadu-gadu.pl".to_vec();
    let report = patch_binary_report(&mut buf, "www.gadu-gadu.pl");
    assert_eq!(report.hosts[0].ascii, 1);
    assert_eq!(report.hosts[4].ascii, 1);
    assert_eq!(report.totals().ascii_replacements, 2);
    assert_eq!(&buf[..16], b"www.gadu-gadu.pl");
    assert_eq!(&buf[16..], &[0, 0, 0]);
}

#[test]
fn planted_shorter_hostname_is_not_truncated() {
    // The register rewrite plants www.* inside the longer address; the www
    // pass could only write a clipped copy over it, so the run is refused.
    let input = b"register.gadu-gadu.pl".to_vec();
    assert!(matches!(
        patch_bytes(input.clone(), "xwww.gadu-gadu.pl"),
        Err(PatchError::AddressTooLongForHost {
            hostname: "www.gadu-gadu.pl",
            max: 16,
            actual: 17
        })
    ));

    // An address that fits every hostname it can land on still goes through.
    let patched = patch_bytes(input, "www.gadu-gadu.pl").unwrap();
    assert_eq!(patched.data, b"www.gadu-gadu.pl\0\0\0\0\0");
    assert_eq!(patched.report.totals().ascii_replacements, 2);
}

#[test]
fn every_hostname_in_both_encodings() {
    let mut buf = Vec::new();
    for h in HOSTNAMES {
        buf.extend_from_slice(&encode_single_byte(h));
        buf.push(0);
        buf.extend_from_slice(&encode_utf16_le(h));
        buf.extend_from_slice(&[0, 0]);
    }
    let before = survey(&buf);
    assert!(before.hosts.iter().all(|h| h.ascii == 1 && h.utf16 == 1));

    let len = buf.len();
    let result = patch_binary(&mut buf, "gg.example.com");
    assert_eq!(buf.len(), len);
    assert_eq!(result.ascii_replacements, HOSTNAMES.len());
    assert_eq!(result.utf16_replacements, HOSTNAMES.len());
    assert!(survey(&buf).totals().is_empty());
}

#[test]
fn longest_address_needs_room_in_every_present_host() {
    assert!(validate_address("abcdefghijklmnopqrstu").is_ok());

    let mut input = b"register.gadu-gadu.pl\0".to_vec();
    input.extend_from_slice(&encode_utf16_le("www.gadu-gadu.pl"));
    assert!(matches!(
        patch_bytes(input.clone(), "abcdefghijklmnopqrstu"),
        Err(PatchError::AddressTooLongForHost {
            hostname: "www.gadu-gadu.pl",
            max: 16,
            actual: 21
        })
    ));

    let patched = patch_bytes(input, "abcdefghijklmnop").unwrap();
    let totals = patched.report.totals();
    assert_eq!(totals.ascii_replacements, 1);
    assert_eq!(totals.utf16_replacements, 1);
}
