//! Packed little-endian wire primitives for fixed-layout UDP telemetry.
//!
//! The packet formats this crate serves have no length prefixes, tags or
//! padding inside a body: every field offset follows purely from the widths
//! of the fields before it. The crate therefore models a record as a flat,
//! ordered list of fixed-width fields:
//!
//! - [`ByteReader`] / [`ByteWriter`]: cursor-style little-endian access.
//! - [`Wire`]: a value with a constant encoded width (scalars, `[T; N]`,
//!   [`FixedStr`]).
//! - [`wire_struct!`]: declares a record once and derives its size,
//!   decoder, encoder and field listing from that single declaration.
//! - [`Layout`]: static per-shape metadata plus exact-size decoding.
//! - [`FieldList`]: generic `path -> value` listing of any decoded record.

#![deny(static_mut_refs)]

mod fields;
mod layout;
mod macros;
mod reader;
mod wire;

pub use fields::{Field, FieldList, FieldValue, join_path};
pub use layout::{FieldDef, Layout, total_size};
pub use reader::{ByteReader, ByteWriter};
pub use wire::{FixedStr, Wire};
