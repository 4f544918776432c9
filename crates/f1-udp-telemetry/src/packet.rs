use f1_udp_wire::FieldList;

use crate::key::{DispatchKey, PacketKind};
use crate::schema::SchemaGeneration;
use crate::{f1_22, f1_23};

/// A decoded packet of any supported generation.
///
/// Generations are kept apart: match on the variant to reach the
/// generation's own record types.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    F1_22(f1_22::Packet),
    F1_23(f1_23::Packet),
}

impl Packet {
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::F1_22(p) => p.kind(),
            Packet::F1_23(p) => p.kind(),
        }
    }

    pub fn generation(&self) -> SchemaGeneration {
        match self {
            Packet::F1_22(_) => SchemaGeneration::F1_22,
            Packet::F1_23(_) => SchemaGeneration::F1_23,
        }
    }

    /// The dispatch key read from the packet's header.
    pub fn key(&self) -> DispatchKey {
        match self {
            Packet::F1_22(p) => p.header().dispatch_key(),
            Packet::F1_23(p) => p.header().dispatch_key(),
        }
    }

    pub fn session_uid(&self) -> u64 {
        match self {
            Packet::F1_22(p) => p.header().session_uid,
            Packet::F1_23(p) => p.header().session_uid,
        }
    }

    pub fn frame_identifier(&self) -> u32 {
        match self {
            Packet::F1_22(p) => p.header().frame_identifier,
            Packet::F1_23(p) => p.header().frame_identifier,
        }
    }

    /// Ordered `path -> value` listing of every field.
    pub fn fields(&self) -> FieldList {
        match self {
            Packet::F1_22(p) => p.fields(),
            Packet::F1_23(p) => p.fields(),
        }
    }

    /// Re-encode to wire bytes. Event padding bytes come back as zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Packet::F1_22(p) => p.to_bytes(),
            Packet::F1_23(p) => p.to_bytes(),
        }
    }
}
