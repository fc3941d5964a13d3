// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Sift Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;

// The first line is the filter expression, the rest is matched against it
// as both a path and a rule ID.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (filter, candidate) = s.split_once('\n').unwrap_or((s, ""));
        if let Ok(patterns) = sift_core::compile_patterns(filter) {
            let _ = sift_core::match_path_and_rule(candidate, candidate, &patterns);
        }
        let _ = sift_core::filter::matches(filter, candidate);
    }
});
