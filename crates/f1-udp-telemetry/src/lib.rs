//! Strict decoder for the F1 games' UDP telemetry packets.
//!
//! Every datagram starts with a fixed header whose `(packet_format,
//! packet_version, packet_id)` triple selects one fixed-size packet shape.
//! Decoding is all-or-nothing:
//!
//! 1. the buffer must hold at least a full header,
//! 2. the header's key must be registered for the selected generation,
//! 3. the buffer length must equal that shape's exact size.
//!
//! Only then are the fields extracted, by fixed offsets.
//!
//! ## Supported generations
//!
//! | Generation | Packet format | Header | Packet kinds |
//! |------------|---------------|--------|--------------|
//! | F1 22      | 2022          | 24 B   | 12           |
//! | F1 23      | 2023          | 29 B   | 14           |
//!
//! Same-named records of different generations are distinct types in
//! [`f1_22`] and [`f1_23`]; nothing is shared between them.
//!
//! ## Example
//!
//! ```
//! use f1_udp_telemetry::{DecodeError, SchemaGeneration, Unpacker};
//!
//! let unpacker = Unpacker::with_generation_id("f1_22")?;
//! assert_eq!(unpacker.generation(), SchemaGeneration::F1_22);
//!
//! let err = unpacker.decode(&[]).unwrap_err();
//! assert!(matches!(err, DecodeError::TooShortForHeader { header_size: 24, .. }));
//! # Ok::<(), DecodeError>(())
//! ```
//!
//! ## Logging
//!
//! Decodes are reported through `tracing`: successes at `TRACE`, rejections
//! at `DEBUG` and schema rebinding at `INFO`. No subscriber is installed.

#![deny(static_mut_refs)]

mod buttons;
mod config;
mod dispatch;
mod error;
mod key;
mod packet;
mod registry;
mod schema;
mod unpacker;

pub mod f1_22;
pub mod f1_23;

pub use buttons::ButtonFlags;
pub use config::{ENV_SCHEMA_GENERATION, UnpackerConfig};
pub use dispatch::{DecodeFn, DispatchTable, ShapeDescriptor};
pub use error::{ConfigError, DecodeError, DecodeResult};
pub use key::{DispatchKey, PacketKind};
pub use packet::Packet;
pub use schema::{ReadKeyFn, Schema, SchemaGeneration};
pub use unpacker::{Unpacker, decode, decode_with_schema};

pub use f1_udp_wire::{Field, FieldList, FieldValue, FixedStr, Layout, Wire};
