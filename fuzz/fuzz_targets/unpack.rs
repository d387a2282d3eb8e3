#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(out) = wordpack::unpack(Vec::new(), data) {
        assert_eq!(out.len() % wordpack::WORD_SIZE, 0);
    }
});
