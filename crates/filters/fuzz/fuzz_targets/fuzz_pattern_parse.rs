#![no_main]

use filters::FilterSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let set = FilterSet::parse(text);
    let rebuilt = set.to_pattern_string();
    let reparsed = FilterSet::parse(&rebuilt);

    assert_eq!(set, reparsed, "reconstruction of {text:?} changed the rule list");
    assert_eq!(rebuilt, reparsed.to_pattern_string());

    let _ = set.allows(text);
});
