use f1_udp_wire::{Layout, Wire, wire_struct};

use crate::key::DispatchKey;

wire_struct! {
    /// Leading 29 bytes of every F1 23 packet.
    pub struct PacketHeader {
        /// Always 2023.
        pub packet_format: u16,
        /// Last two digits of the game year, e.g. 23.
        pub game_year: u8,
        pub game_major_version: u8,
        pub game_minor_version: u8,
        pub packet_version: u8,
        pub packet_id: u8,
        pub session_uid: u64,
        pub session_time: f32,
        /// Frame the data was retrieved on.
        pub frame_identifier: u32,
        /// Like `frame_identifier`, but does not go back after flashbacks.
        pub overall_frame_identifier: u32,
        pub player_car_index: u8,
        pub secondary_player_car_index: u8,
    }
}

pub const HEADER_SIZE: usize = PacketHeader::SIZE;

const _: () = assert!(HEADER_SIZE == 29);

impl PacketHeader {
    pub fn dispatch_key(&self) -> DispatchKey {
        DispatchKey::new(self.packet_format, self.packet_version, self.packet_id)
    }
}

pub(super) fn read_key(bytes: &[u8]) -> Option<DispatchKey> {
    bytes
        .get(..HEADER_SIZE)
        .and_then(PacketHeader::decode_exact)
        .map(|h| h.dispatch_key())
}
