#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(upc) = upcean::Upc::parse(s) {
            assert_eq!(upc.to_string(), s);
            let _ = upc.decode();
        }
    }
});
