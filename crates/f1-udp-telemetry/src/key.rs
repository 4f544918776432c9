//! Dispatch key and packet kind discriminant.

use std::fmt;

use serde::Serialize;

/// The `(packetFormat, packetVersion, packetId)` triple that selects a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DispatchKey {
    pub packet_format: u16,
    pub packet_version: u8,
    pub packet_id: u8,
}

impl DispatchKey {
    pub const fn new(packet_format: u16, packet_version: u8, packet_id: u8) -> Self {
        Self {
            packet_format,
            packet_version,
            packet_id,
        }
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={} version={} id={}",
            self.packet_format, self.packet_version, self.packet_id
        )
    }
}

/// Which kind of packet a decoded record is.
///
/// Not every generation registers every kind: `TyreSets` and `MotionEx`
/// only exist from F1 23 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PacketKind {
    Motion,
    Session,
    LapData,
    Event,
    Participants,
    CarSetups,
    CarTelemetry,
    CarStatus,
    FinalClassification,
    LobbyInfo,
    CarDamage,
    SessionHistory,
    TyreSets,
    MotionEx,
}

impl PacketKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PacketKind::Motion => "Motion",
            PacketKind::Session => "Session",
            PacketKind::LapData => "LapData",
            PacketKind::Event => "Event",
            PacketKind::Participants => "Participants",
            PacketKind::CarSetups => "CarSetups",
            PacketKind::CarTelemetry => "CarTelemetry",
            PacketKind::CarStatus => "CarStatus",
            PacketKind::FinalClassification => "FinalClassification",
            PacketKind::LobbyInfo => "LobbyInfo",
            PacketKind::CarDamage => "CarDamage",
            PacketKind::SessionHistory => "SessionHistory",
            PacketKind::TyreSets => "TyreSets",
            PacketKind::MotionEx => "MotionEx",
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
