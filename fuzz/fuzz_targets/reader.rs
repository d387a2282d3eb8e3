#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Read;
use wordpack::Reader;

fuzz_target!(|data: &[u8]| {
    let mut decoder = Reader::new(data);
    let mut buf = [0u8; 13];
    while let Ok(n) = decoder.read(&mut buf) {
        if n == 0 {
            break;
        }
    }
});
