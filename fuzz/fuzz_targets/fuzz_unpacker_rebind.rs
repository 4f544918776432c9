//! Fuzzes a bound unpacker whose generation is switched by the input.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_unpacker_rebind
#![no_main]
use f1_udp_telemetry::{SchemaGeneration, Unpacker};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((selector, packet)) = data.split_first() else {
        return;
    };
    let unpacker = Unpacker::default();
    let generation = if selector & 1 == 0 {
        SchemaGeneration::F1_22
    } else {
        SchemaGeneration::F1_23
    };
    unpacker.rebind(generation);
    if let Ok(decoded) = unpacker.decode(packet) {
        assert_eq!(decoded.generation(), generation);
    }
});
