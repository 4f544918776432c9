use f1_udp_wire::{Layout, Wire, wire_struct};

use crate::key::DispatchKey;

wire_struct! {
    /// Leading 24 bytes of every F1 22 packet.
    pub struct PacketHeader {
        /// Always 2022.
        pub packet_format: u16,
        pub game_major_version: u8,
        pub game_minor_version: u8,
        pub packet_version: u8,
        pub packet_id: u8,
        pub session_uid: u64,
        /// Seconds since the session started.
        pub session_time: f32,
        pub frame_identifier: u32,
        pub player_car_index: u8,
        /// 255 when there is no second player.
        pub secondary_player_car_index: u8,
    }
}

pub const HEADER_SIZE: usize = PacketHeader::SIZE;

const _: () = assert!(HEADER_SIZE == 24);

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
