#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen::highlight::{Segment, segments};
use lumen::report::{CheckOutcome, check};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let report = check(s);
        assert!(!matches!(report.outcome, CheckOutcome::Unknown { .. }));

        for pair in report.tokens.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
        let joined: String = segments(s, &report.tokens, report.outcome.error_span())
            .iter()
            .map(Segment::text)
            .collect();
        assert_eq!(joined, s);
    }
});
