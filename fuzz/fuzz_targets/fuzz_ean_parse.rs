#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ean) = upcean::Ean::parse(s) {
            assert_eq!(ean.to_string(), s);
            if let Some(upc) = ean.to_upc() {
                assert_eq!(upc.check_digit(), ean.check_digit());
            }
        }
    }
});
