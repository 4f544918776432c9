//! F1 23 wire format (packet format 2023).
//!
//! The header grows to 29 bytes (`game_year`, `overall_frame_identifier`),
//! player-only motion detail moves into its own `MotionEx` packet, and a
//! `TyreSets` packet is added.
//!
//! | Packet ID | Kind                | Size |
//! |-----------|---------------------|------|
//! | 0         | Motion              | 1349 |
//! | 1         | Session             | 644  |
//! | 2         | LapData             | 1131 |
//! | 3         | Event               | 45   |
//! | 4         | Participants        | 1306 |
//! | 5         | CarSetups           | 1107 |
//! | 6         | CarTelemetry        | 1352 |
//! | 7         | CarStatus           | 1239 |
//! | 8         | FinalClassification | 1020 |
//! | 9         | LobbyInfo           | 1218 |
//! | 10        | CarDamage           | 953  |
//! | 11        | SessionHistory      | 1460 |
//! | 12        | TyreSets            | 231  |
//! | 13        | MotionEx            | 217  |

use std::sync::OnceLock;

use crate::dispatch::DispatchTable;
use crate::registry::packet_registry;
use crate::schema::{Schema, SchemaGeneration};

mod event;
mod header;
mod packets;

pub use event::*;
pub use header::{HEADER_SIZE, PacketHeader};
pub use packets::*;

pub const PACKET_FORMAT: u16 = 2023;
pub const PACKET_VERSION: u8 = 1;

packet_registry! {
    generation: F1_23,
    header: PacketHeader,
    packets: {
        0 => Motion(PacketMotionData) = 1349,
        1 => Session(PacketSessionData) = 644,
        2 => LapData(PacketLapData) = 1131,
        3 => Event(PacketEventData) = 45,
        4 => Participants(PacketParticipantsData) = 1306,
        5 => CarSetups(PacketCarSetupData) = 1107,
        6 => CarTelemetry(PacketCarTelemetryData) = 1352,
        7 => CarStatus(PacketCarStatusData) = 1239,
        8 => FinalClassification(PacketFinalClassificationData) = 1020,
        9 => LobbyInfo(PacketLobbyInfoData) = 1218,
        10 => CarDamage(PacketCarDamageData) = 953,
        11 => SessionHistory(PacketSessionHistoryData) = 1460,
        12 => TyreSets(PacketTyreSetsData) = 231,
        13 => MotionEx(PacketMotionExData) = 217,
    }
}

/// The F1 23 header model and dispatch table, built on first use.
pub fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            SchemaGeneration::F1_23,
            HEADER_SIZE,
            header::read_key,
            DispatchTable::new(shapes()),
        )
    })
}
