//! Shared packet builders for the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use f1_udp_telemetry::{SchemaGeneration, f1_22, f1_23};
use f1_udp_wire::ByteWriter;

pub const SESSION_UID: u64 = 0x0123_4567_89AB_CDEF;
pub const FRAME: u32 = 4_096;

/// Element-wise float comparison with a fixed tolerance.
pub fn assert_f32s(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-6, "[{i}] {a} != {e}");
    }
}

/// 24-byte F1 22 header for `packet_id`.
pub fn f1_22_header(packet_id: u8) -> Vec<u8> {
    let mut w = ByteWriter::with_capacity(f1_22::HEADER_SIZE);
    w.u16_le(f1_22::PACKET_FORMAT)
        .u8(1) // game major
        .u8(18) // game minor
        .u8(f1_22::PACKET_VERSION)
        .u8(packet_id)
        .u64_le(SESSION_UID)
        .f32_le(754.25)
        .u32_le(FRAME)
        .u8(0)
        .u8(255);
    w.into_inner()
}

/// 29-byte F1 23 header for `packet_id`.
pub fn f1_23_header(packet_id: u8) -> Vec<u8> {
    let mut w = ByteWriter::with_capacity(f1_23::HEADER_SIZE);
    w.u16_le(f1_23::PACKET_FORMAT)
        .u8(23) // game year
        .u8(1)
        .u8(5)
        .u8(f1_23::PACKET_VERSION)
        .u8(packet_id)
        .u64_le(SESSION_UID)
        .f32_le(754.25)
        .u32_le(FRAME)
        .u32_le(FRAME + 10)
        .u8(3)
        .u8(255);
    w.into_inner()
}

pub fn header_for(generation: SchemaGeneration, packet_id: u8) -> Vec<u8> {
    match generation {
        SchemaGeneration::F1_22 => f1_22_header(packet_id),
        SchemaGeneration::F1_23 => f1_23_header(packet_id),
    }
}

/// Exact packet size registered for `packet_id`.
pub fn packet_size(generation: SchemaGeneration, packet_id: u8) -> Option<usize> {
    let sizes = match generation {
        SchemaGeneration::F1_22 => f1_22::PACKET_SIZES,
        SchemaGeneration::F1_23 => f1_23::PACKET_SIZES,
    };
    sizes
        .iter()
        .find(|(id, _)| *id == packet_id)
        .map(|(_, size)| *size)
}

/// Header followed by a zero body, padded to `len` bytes in total.
pub fn build_packet(generation: SchemaGeneration, packet_id: u8, len: usize) -> Vec<u8> {
    let mut bytes = header_for(generation, packet_id);
    bytes.resize(len, 0);
    bytes
}

/// Header followed by a deterministic non-zero body pattern.
pub fn build_patterned_packet(generation: SchemaGeneration, packet_id: u8, len: usize) -> Vec<u8> {
    let mut bytes = header_for(generation, packet_id);
    let start = bytes.len();
    bytes.extend((start..len).map(|i| (i.wrapping_mul(31).wrapping_add(7) % 251).to_le_bytes()[0]));
    bytes
}

/// Event packet with `code` and `details` zero-padded to 12 bytes.
pub fn build_event(generation: SchemaGeneration, code: &[u8; 4], details: &[u8]) -> Vec<u8> {
    let mut w = ByteWriter::new();
    w.put(&header_for(generation, 3)).put(code).put(details);
    w.zeros(12usize.saturating_sub(details.len()));
    w.into_inner()
}

/// One 60-byte CarMotionData record with recognisable values for car `i`.
pub fn car_motion_bytes(w: &mut ByteWriter, i: u8) {
    let base = f32::from(i);
    w.f32_le(base * 10.0) // world_position_x
        .f32_le(base * -2.0)
        .f32_le(0.5)
        .f32_le(80.0 + base) // world_velocity_x
        .f32_le(0.0)
        .f32_le(-1.0)
        .i16_le(32767)
        .i16_le(0)
        .i16_le(-1)
        .i16_le(0)
        .i16_le(i16::from(i))
        .i16_le(-32767)
        .f32_le(1.5) // g_force_lateral
        .f32_le(-3.25)
        .f32_le(0.75)
        .f32_le(0.1 * base) // yaw
        .f32_le(0.0)
        .f32_le(0.0);
}

/// Full 1464-byte F1 22 Motion packet.
pub fn build_f1_22_motion() -> Vec<u8> {
    let mut w = ByteWriter::new();
    w.put(&f1_22_header(0));
    for i in 0..22u8 {
        car_motion_bytes(&mut w, i);
    }
    for wheel in 0..20u8 {
        w.f32_le(f32::from(wheel)); // five [f32; 4] wheel arrays
    }
    for extra in 0..10u8 {
        w.f32_le(f32::from(extra) * 0.5); // local / angular, front_wheels_angle
    }
    w.into_inner()
}

/// Full 1349-byte F1 23 Motion packet.
pub fn build_f1_23_motion() -> Vec<u8> {
    let mut w = ByteWriter::new();
    w.put(&f1_23_header(0));
    for i in 0..22u8 {
        car_motion_bytes(&mut w, i);
    }
    w.into_inner()
}

/// 56-byte F1 22 ParticipantData.
pub fn f1_22_participant(w: &mut ByteWriter, name: &str, team_id: u8, race_number: u8) {
    let mut raw = [0u8; 48];
    for (dst, src) in raw.iter_mut().zip(name.as_bytes()) {
        *dst = *src;
    }
    w.u8(0) // ai_controlled
        .u8(9) // driver_id
        .u8(255) // network_id
        .u8(team_id)
        .u8(0)
        .u8(race_number)
        .u8(10) // nationality
        .put(&raw)
        .u8(1);
}

/// Every registered `(packet_id, size)` pair of `generation`.
pub fn registered(generation: SchemaGeneration) -> &'static [(u8, usize)] {
    match generation {
        SchemaGeneration::F1_22 => f1_22::PACKET_SIZES,
        SchemaGeneration::F1_23 => f1_23::PACKET_SIZES,
    }
}
