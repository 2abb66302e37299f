#![no_main]
use libfuzzer_sys::fuzz_target;
use ggpatch::MAX_DOMAIN_LENGTH;
use ggpatch::validate::validate_address;

// Tokens the ggpatch command line understands, so most inputs reach past
// clap's first rejection into option resolution.
const VOCAB: &[&str] = &[
    "patch", "scan", "hosts", "-s", "--server", "--output", "-c", "--stdout",
    "--check-only", "-f", "--force", "-q", "--quiet", "-v", "-vv", "-vvv", "--json",
    "gg.exe", "gg_patched.exe", "-",
];

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Even bytes pick a known token; odd bytes pass the next raw word through.
    let mut words = text.split_whitespace();
    let mut args = Vec::<String>::new();
    for &b in data.iter().take(32) {
        if b % 2 == 0 {
            args.push(VOCAB[(b as usize / 2) % VOCAB.len()].to_string());
        } else if let Some(w) = words.next() {
            args.push(w.to_string());
        }
    }
    ggpatch::cli::fuzz_try_parse_args(&args);

    // Any accepted address is trimmed, bounded and printable ASCII.
    if let Ok(address) = validate_address(&text) {
        assert!(!address.is_empty());
        assert!(address.chars().count() <= MAX_DOMAIN_LENGTH);
        assert!(address.bytes().all(|b| b.is_ascii_graphic()));
    }
});
