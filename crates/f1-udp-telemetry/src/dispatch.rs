//! Immutable `DispatchKey -> shape` tables.

use std::collections::BTreeMap;
use std::fmt;

use crate::key::{DispatchKey, PacketKind};
use crate::packet::Packet;

/// Decodes a buffer of exactly the shape's size. Returns `None` only when
/// the slice length is wrong.
pub type DecodeFn = fn(&[u8]) -> Option<Packet>;

/// Registry entry for one packet shape.
#[derive(Clone, Copy)]
pub struct ShapeDescriptor {
    pub key: DispatchKey,
    pub kind: PacketKind,
    /// Rust type name of the record, e.g. `PacketMotionData`.
    pub name: &'static str,
    /// Exact encoded size in bytes, header included.
    pub size: usize,
    decode: DecodeFn,
}

impl ShapeDescriptor {
    pub const fn new(
        key: DispatchKey,
        kind: PacketKind,
        name: &'static str,
        size: usize,
        decode: DecodeFn,
    ) -> Self {
        Self {
            key,
            kind,
            name,
            size,
            decode,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Option<Packet> {
        (self.decode)(bytes)
    }
}

impl fmt::Debug for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Exact-match lookup from dispatch key to shape. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    shapes: BTreeMap<DispatchKey, ShapeDescriptor>,
}

impl DispatchTable {
    pub fn new(shapes: impl IntoIterator<Item = ShapeDescriptor>) -> Self {
        Self {
            shapes: shapes.into_iter().map(|s| (s.key, s)).collect(),
        }
    }

    pub fn lookup(&self, key: &DispatchKey) -> Option<&ShapeDescriptor> {
        self.shapes.get(key)
    }

    /// Registered keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = DispatchKey> + '_ {
        self.shapes.keys().copied()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDescriptor> + '_ {
        self.shapes.values()
    }

    /// First shape registered for `kind`, if any.
    pub fn shape_for(&self, kind: PacketKind) -> Option<&ShapeDescriptor> {
        self.shapes.values().find(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &[u8]) -> Option<Packet> {
        None
    }

    fn table() -> DispatchTable {
        DispatchTable::new([
            ShapeDescriptor::new(
                DispatchKey::new(2022, 1, 3),
                PacketKind::Event,
                "PacketEventData",
                40,
                never,
            ),
            ShapeDescriptor::new(
                DispatchKey::new(2022, 1, 0),
                PacketKind::Motion,
                "PacketMotionData",
                1464,
                never,
            ),
        ])
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let t = table();
        assert!(t.lookup(&DispatchKey::new(2022, 1, 3)).is_some());
        assert!(t.lookup(&DispatchKey::new(2022, 2, 3)).is_none());
        assert!(t.lookup(&DispatchKey::new(2023, 1, 3)).is_none());
    }

    #[test]
    fn keys_are_sorted() {
        let ids: Vec<u8> = table().keys().map(|k| k.packet_id).collect();
        assert_eq!(ids, [0, 3]);
    }

    #[test]
    fn shape_for_finds_by_kind() {
        let t = table();
        assert_eq!(t.shape_for(PacketKind::Motion).map(|s| s.size), Some(1464));
        assert!(t.shape_for(PacketKind::TyreSets).is_none());
    }
}
