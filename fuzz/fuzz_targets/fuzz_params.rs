#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_http_header::{list, params, token};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for (key, _) in params(s) {
            assert!(!key.is_empty());
            assert_eq!(key, key.to_ascii_lowercase());
        }

        let _ = token(s);

        for element in list(s) {
            assert!(!element.is_empty());
            assert!(!element.contains(','));
        }
    }
});
