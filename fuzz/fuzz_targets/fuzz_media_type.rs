#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_http_header::{content_type, media_type};

fuzz_target!(|data: &[u8]| {
    // UTF-8 文字列として解釈できる場合のみテスト
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mt) = media_type(s) {
            let _ = mt.mime_type();
            let _ = mt.charset();
            let _ = mt.boundary();
            let _ = mt.qvalue();
            let _ = mt.is_wildcard();

            if mt.media_type() == "*" {
                assert_eq!(mt.subtype(), "*");
            }

            // 正規形は再パースしても同じ結果になる
            let displayed = mt.to_string();
            assert_eq!(media_type(&displayed), Ok(mt.clone()));

            match content_type(s) {
                Ok(ct) => assert_eq!(ct, mt),
                Err(_) => assert!(mt.is_wildcard()),
            }
        } else {
            assert!(content_type(s).is_err());
        }
    }
});
