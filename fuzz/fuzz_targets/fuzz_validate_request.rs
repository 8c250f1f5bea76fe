//! Fuzz target for the `validate` entry point.
//!
//! Goal: validation should **never panic** on any payload.
//! Garbage must come back as a rejection, never as a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate_request
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let response = labelguard_app::validate(data);

    // Accepted responses never carry a message or code.
    if response.accepted {
        assert!(response.message.is_none());
        assert!(response.code.is_none());
    }
});
