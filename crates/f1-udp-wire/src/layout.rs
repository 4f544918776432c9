//! Static shape metadata and exact-size decoding.

use crate::fields::FieldList;
use crate::reader::{ByteReader, ByteWriter};
use crate::wire::Wire;

/// One declared field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub type_name: &'static str,
    pub size: usize,
}

/// A named record shape with a fixed field list.
///
/// Implemented by [`wire_struct!`](crate::wire_struct); `SIZE` and `FIELDS`
/// are derived from the same declaration.
pub trait Layout: Wire {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDef];

    /// Decode from a slice of exactly [`Wire::SIZE`] bytes.
    fn decode_exact(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        let mut r = ByteReader::new(bytes);
        let value = Self::read(&mut r);
        (!r.is_overrun() && r.remaining() == 0).then_some(value)
    }

    fn encode(&self) -> Vec<u8> {
        let mut w = ByteWriter::with_capacity(Self::SIZE);
        self.write(&mut w);
        w.into_inner()
    }

    fn fields(&self) -> FieldList {
        let mut out = FieldList::new();
        self.visit("", &mut out);
        out
    }
}

/// Sum of the declared field widths.
pub const fn total_size(fields: &[FieldDef]) -> usize {
    let mut total = 0;
    let mut rest = fields;
    while let [first, tail @ ..] = rest {
        total += first.size;
        rest = tail;
    }
    total
}
