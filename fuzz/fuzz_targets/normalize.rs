#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_text::{first_difference, normalize};

fuzz_target!(|data: &[u8]| {
    // Captured stdout is decoded lossily, so fuzz the same way
    let raw = String::from_utf8_lossy(data);
    let once = normalize(&raw);

    assert_eq!(normalize(&once), once, "normalize must be idempotent");
    assert!(!once.contains('\r') && !once.contains('\0'));
    assert_eq!(first_difference(&once, &once), None);
});
