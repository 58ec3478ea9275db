#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_tree::{is_valid, parse};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mt) = parse(s) {
            let _ = is_valid(&mt);

            // A rendered media type always parses again
            let rendered = mt.to_string();
            assert!(parse(&rendered).is_ok(), "{:?} rendered as {:?}", s, rendered);
        }
    }
});
