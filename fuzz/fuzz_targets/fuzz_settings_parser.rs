//! Fuzz target for settings parsing and validation.
//!
//! Goal: the settings check should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_settings_parser
//! ```

#![no_main]

use labelguard_settings::SettingsLocation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let response = labelguard_app::validate_settings(data);

    // The library check and the entry point must agree.
    let parsed = labelguard_settings::parse_settings_json(data, SettingsLocation::Root)
        .and_then(|policy| labelguard_settings::validate_policy(&policy));
    assert_eq!(response.valid, parsed.is_ok());
});
