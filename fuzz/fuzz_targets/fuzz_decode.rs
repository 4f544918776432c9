//! Fuzzes strict packet decoding for every schema generation.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decode
#![no_main]
use f1_udp_telemetry::{SchemaGeneration, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for generation in SchemaGeneration::ALL {
        // Arbitrary bytes may be rejected but must never panic; accepted
        // packets must re-encode to the same length.
        if let Ok(packet) = decode(data, generation) {
            assert_eq!(packet.to_bytes().len(), data.len());
        }
    }
});
