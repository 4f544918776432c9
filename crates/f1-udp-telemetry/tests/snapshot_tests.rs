//! Snapshot tests for error text, field listings and dispatch tables.

use f1_udp_telemetry::{
    DecodeError, DispatchKey, Layout, PacketKind, SchemaGeneration, decode, f1_22,
};
use f1_udp_wire::ByteWriter;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn fastest_lap_event() -> Vec<u8> {
    let mut w = ByteWriter::new();
    w.u16_le(2022)
        .u8(1)
        .u8(18)
        .u8(1)
        .u8(3)
        .u64_le(7)
        .f32_le(12.5)
        .u32_le(600)
        .u8(0)
        .u8(255)
        .put(b"FTLP")
        .u8(7)
        .f32_le(83.5)
        .zeros(7);
    w.into_inner()
}

// ── Error text ───────────────────────────────────────────────────────────────

#[test]
fn snapshot_too_short_error() {
    let err = DecodeError::TooShortForHeader {
        actual_len: 10,
        header_size: 24,
    };
    insta::assert_snapshot!(err.to_string(), @"Packet too short for header: got 10 bytes, header needs 24");
}

#[test]
fn snapshot_unknown_kind_error() {
    let err = DecodeError::UnknownPacketKind {
        key: DispatchKey::new(2022, 1, 200),
    };
    insta::assert_snapshot!(err.to_string(), @"Unknown packet kind: no shape registered for format=2022 version=1 id=200");
}

#[test]
fn snapshot_size_mismatch_error() {
    let err = DecodeError::SizeMismatch {
        kind: PacketKind::Event,
        expected_size: 40,
        actual_len: 41,
    };
    insta::assert_snapshot!(err.to_string(), @"Size mismatch for Event packet: expected 40 bytes, got 41");
}

#[test]
fn snapshot_invalid_generation_error() {
    let err = "f1_19".parse::<SchemaGeneration>().err().map(|e| e.to_string());
    insta::assert_snapshot!(err.unwrap_or_default(), @r#"Invalid schema generation: "f1_19""#);
}

// ── Field listings ───────────────────────────────────────────────────────────

#[test]
fn snapshot_fastest_lap_event_fields() -> TestResult {
    let packet = decode(&fastest_lap_event(), SchemaGeneration::F1_22)?;
    insta::assert_snapshot!(packet.fields().to_string().trim_end(), @r#"
    header.packet_format=2022
    header.game_major_version=1
    header.game_minor_version=18
    header.packet_version=1
    header.packet_id=3
    header.session_uid=7
    header.session_time=12.5
    header.frame_identifier=600
    header.player_car_index=0
    header.secondary_player_car_index=255
    event_string_code="FTLP"
    event_details.vehicle_idx=7
    event_details.lap_time=83.5
    "#);
    Ok(())
}

#[test]
fn snapshot_fastest_lap_json() -> TestResult {
    let record = f1_22::FastestLap {
        vehicle_idx: 7,
        lap_time: 83.5,
    };
    let json = serde_json::to_string(&record.fields())?;
    insta::assert_snapshot!(json, @r#"[{"path":"vehicle_idx","value":7},{"path":"lap_time","value":83.5}]"#);
    Ok(())
}

// ── Dispatch tables ──────────────────────────────────────────────────────────

#[test]
fn snapshot_f1_22_dispatch_table() {
    let listing: Vec<String> = SchemaGeneration::F1_22
        .schema()
        .table()
        .shapes()
        .map(|s| format!("{} {} {} {}", s.key, s.kind, s.name, s.size))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    format=2022 version=1 id=0 Motion PacketMotionData 1464
    format=2022 version=1 id=1 Session PacketSessionData 632
    format=2022 version=1 id=2 LapData PacketLapData 972
    format=2022 version=1 id=3 Event PacketEventData 40
    format=2022 version=1 id=4 Participants PacketParticipantsData 1257
    format=2022 version=1 id=5 CarSetups PacketCarSetupData 1102
    format=2022 version=1 id=6 CarTelemetry PacketCarTelemetryData 1347
    format=2022 version=1 id=7 CarStatus PacketCarStatusData 1058
    format=2022 version=1 id=8 FinalClassification PacketFinalClassificationData 1015
    format=2022 version=1 id=9 LobbyInfo PacketLobbyInfoData 1191
    format=2022 version=1 id=10 CarDamage PacketCarDamageData 948
    format=2022 version=1 id=11 SessionHistory PacketSessionHistoryData 1155
    ");
}

#[test]
fn snapshot_f1_23_header_layout() {
    let listing: Vec<String> = f1_udp_telemetry::f1_23::PacketHeader::FIELDS
        .iter()
        .map(|f| format!("{}: {} ({})", f.name, f.type_name, f.size))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    packet_format: u16 (2)
    game_year: u8 (1)
    game_major_version: u8 (1)
    game_minor_version: u8 (1)
    packet_version: u8 (1)
    packet_id: u8 (1)
    session_uid: u64 (8)
    session_time: f32 (4)
    frame_identifier: u32 (4)
    overall_frame_identifier: u32 (4)
    player_car_index: u8 (1)
    secondary_player_car_index: u8 (1)
    ");
}
