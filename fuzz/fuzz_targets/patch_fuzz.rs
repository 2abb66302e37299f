#![no_main]
use libfuzzer_sys::fuzz_target;
use ggpatch::engine::{patch_binary, survey};
use ggpatch::validate::patch_bytes;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the address length, the next bytes form the address.
    let addr_len = (data[0] as usize % 24).min(data.len() - 1);
    let address: String = data[1..1 + addr_len]
        .iter()
        .map(|&b| (b'a' + b % 26) as char)
        .collect();
    let payload = &data[1 + addr_len..];

    // The checked path never panics and never changes size.
    if let Ok(patched) = patch_bytes(payload.to_vec(), &address) {
        assert_eq!(patched.data.len(), payload.len());
        assert!(!patched.report.totals().is_empty());
    }

    // The raw engine is total for any non-empty address.
    if !address.is_empty() {
        let mut buf = payload.to_vec();
        let expected = survey(&buf).totals();
        let result = patch_binary(&mut buf, &address);
        assert_eq!(buf.len(), payload.len());
        assert_eq!(result, expected);
    }
});
