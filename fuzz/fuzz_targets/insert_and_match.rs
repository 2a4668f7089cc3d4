#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<String>, String)| {
    let mut tree = charmux::Node::new();

    for pattern in data.0 {
        if tree.insert(pattern.as_str(), pattern.clone()).is_err() {
            return;
        }
    }

    if let Ok(pattern) = tree.at(&data.1) {
        let _ = charmux::Params::from_match(&data.1, pattern);
    }
});
