#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_http_header::{accept, media_type, media_type_list};

#[derive(Debug, Arbitrary)]
struct Input {
    candidates: Vec<String>,
    header: String,
    sort: bool,
}

fuzz_target!(|input: Input| {
    let parsed = media_type_list(&input.candidates, input.sort);
    for mt in &parsed {
        assert_eq!(media_type(&mt.to_string()), Ok(mt.clone()));
    }
    if input.sort {
        for pair in parsed.windows(2) {
            assert!(pair[0].qvalue() >= pair[1].qvalue());
        }
    }

    let _ = accept(&input.header, input.sort);
});
