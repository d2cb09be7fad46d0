#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_http_header::validate_utf8;

fuzz_target!(|data: &[u8]| {
    match (validate_utf8(data, "fuzz"), std::str::from_utf8(data)) {
        (Ok(()), Ok(_)) => {}
        (Err(e), Err(std_error)) => {
            assert_eq!(e.byte(), data[std_error.valid_up_to()]);
            assert_eq!(e.context(), "fuzz");
        }
        (ours, theirs) => panic!("mismatch: {:?} vs {:?}", ours, theirs),
    }
});
