//! Fuzzes the bounds-latching little-endian reader.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_byte_reader
#![no_main]
use f1_udp_wire::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    while !reader.is_overrun() {
        reader.u8();
        reader.u16_le();
        reader.f32_le();
        reader.u64_le();
    }
    assert_eq!(reader.remaining(), 0);
});
