//! F1 22 wire format (packet format 2022).
//!
//! | Packet ID | Kind                | Size |
//! |-----------|---------------------|------|
//! | 0         | Motion              | 1464 |
//! | 1         | Session             | 632  |
//! | 2         | LapData             | 972  |
//! | 3         | Event               | 40   |
//! | 4         | Participants        | 1257 |
//! | 5         | CarSetups           | 1102 |
//! | 6         | CarTelemetry        | 1347 |
//! | 7         | CarStatus           | 1058 |
//! | 8         | FinalClassification | 1015 |
//! | 9         | LobbyInfo           | 1191 |
//! | 10        | CarDamage           | 948  |
//! | 11        | SessionHistory      | 1155 |

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

pub const PACKET_FORMAT: u16 = 2022;
pub const PACKET_VERSION: u8 = 1;

packet_registry! {
    generation: F1_22,
    header: PacketHeader,
    packets: {
        0 => Motion(PacketMotionData) = 1464,
        1 => Session(PacketSessionData) = 632,
        2 => LapData(PacketLapData) = 972,
        3 => Event(PacketEventData) = 40,
        4 => Participants(PacketParticipantsData) = 1257,
        5 => CarSetups(PacketCarSetupData) = 1102,
        6 => CarTelemetry(PacketCarTelemetryData) = 1347,
        7 => CarStatus(PacketCarStatusData) = 1058,
        8 => FinalClassification(PacketFinalClassificationData) = 1015,
        9 => LobbyInfo(PacketLobbyInfoData) = 1191,
        10 => CarDamage(PacketCarDamageData) = 948,
        11 => SessionHistory(PacketSessionHistoryData) = 1155,
    }
}

/// The F1 22 header model and dispatch table, built on first use.
pub fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            SchemaGeneration::F1_22,
            HEADER_SIZE,
            header::read_key,
            DispatchTable::new(shapes()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::DispatchKey;

    #[test]
    fn table_registers_twelve_kinds() {
        let table = schema().table();
        assert_eq!(table.len(), 12);
        assert_eq!(table.len(), PACKET_SIZES.len());
        for (id, size) in PACKET_SIZES {
            let shape = table
                .lookup(&DispatchKey::new(PACKET_FORMAT, PACKET_VERSION, *id))
                .map(|s| s.size);
            assert_eq!(shape, Some(*size), "packet id {id}");
        }
    }

    #[test]
    fn read_key_needs_full_header() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[0..2].copy_from_slice(&PACKET_FORMAT.to_le_bytes());
        bytes[4] = PACKET_VERSION;
        bytes[5] = 6;
        assert_eq!(
            schema().read_key(&bytes),
            Some(DispatchKey::new(2022, 1, 6))
        );
        assert_eq!(schema().read_key(&bytes[..HEADER_SIZE - 1]), None);
    }
}
