//! Length-checked, header-dispatched packet decoding.

use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::config::UnpackerConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::packet::Packet;
use crate::schema::{Schema, SchemaGeneration};

/// Decode one complete datagram using `generation`'s header model and
/// dispatch table.
///
/// # Errors
///
/// - [`DecodeError::TooShortForHeader`] if `bytes` is shorter than the header.
/// - [`DecodeError::UnknownPacketKind`] if the header's key is not registered.
/// - [`DecodeError::SizeMismatch`] if the length is not the shape's exact size.
pub fn decode(bytes: &[u8], generation: SchemaGeneration) -> DecodeResult<Packet> {
    decode_with_schema(generation.schema(), bytes)
}

/// Decode against an explicit schema.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_with_schema(schema: &Schema, bytes: &[u8]) -> DecodeResult<Packet> {
    let result = unpack(schema, bytes);
    match &result {
        Ok(packet) => trace!(
            generation = %schema.generation(),
            kind = %packet.kind(),
            len = bytes.len(),
            "Decoded packet"
        ),
        Err(err) => log_rejection(schema.generation(), bytes.len(), err),
    }
    result
}

fn unpack(schema: &Schema, bytes: &[u8]) -> DecodeResult<Packet> {
    let actual_len = bytes.len();
    let header_size = schema.header_size();
    if actual_len < header_size {
        return Err(DecodeError::TooShortForHeader {
            actual_len,
            header_size,
        });
    }

    let key = schema
        .read_key(bytes)
        .ok_or(DecodeError::TooShortForHeader {
            actual_len,
            header_size,
        })?;

    let shape = schema
        .table()
        .lookup(&key)
        .ok_or(DecodeError::UnknownPacketKind { key })?;

    let size_mismatch = DecodeError::SizeMismatch {
        kind: shape.kind,
        expected_size: shape.size,
        actual_len,
    };
    if actual_len != shape.size {
        return Err(size_mismatch);
    }

    shape.decode(bytes).ok_or(size_mismatch)
}

fn log_rejection(generation: SchemaGeneration, len: usize, err: &DecodeError) {
    match err {
        DecodeError::TooShortForHeader { header_size, .. } => debug!(
            %generation,
            reason = err.code(),
            len,
            header_size,
            "Rejected packet"
        ),
        DecodeError::UnknownPacketKind { key } => debug!(
            %generation,
            reason = err.code(),
            len,
            packet_format = key.packet_format,
            packet_version = key.packet_version,
            packet_id = key.packet_id,
            "Rejected packet"
        ),
        DecodeError::SizeMismatch {
            kind,
            expected_size,
            ..
        } => debug!(
            %generation,
            reason = err.code(),
            len,
            %kind,
            expected_size,
            "Rejected packet"
        ),
        _ => debug!(%generation, reason = err.code(), len, "Rejected packet"),
    }
}

/// Decoder bound to one schema generation.
///
/// The binding is a single reference to a static [`Schema`], so the header
/// model and the dispatch table always change together. Each
/// [`Unpacker::decode`] call snapshots the binding once at entry; a
/// concurrent [`Unpacker::rebind`] affects later calls only.
#[derive(Debug)]
pub struct Unpacker {
    schema: RwLock<&'static Schema>,
}

impl Unpacker {
    pub fn new(generation: SchemaGeneration) -> Self {
        Self {
            schema: RwLock::new(generation.schema()),
        }
    }

    /// Bind to a generation given by identifier (`"22"`, `"f1_23"`, ...).
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSchemaGeneration`] for identifiers that name no
    /// supported generation.
    pub fn with_generation_id(id: &str) -> DecodeResult<Self> {
        Ok(Self::new(id.parse()?))
    }

    pub fn from_config(config: &UnpackerConfig) -> Self {
        Self::new(config.schema_generation)
    }

    pub fn generation(&self) -> SchemaGeneration {
        self.schema.read().generation()
    }

    /// The schema currently bound.
    pub fn schema(&self) -> &'static Schema {
        *self.schema.read()
    }

    /// Swap the binding to `generation`, returning the previous generation.
    pub fn rebind(&self, generation: SchemaGeneration) -> SchemaGeneration {
        let previous = {
            let mut binding = self.schema.write();
            let previous = binding.generation();
            *binding = generation.schema();
            previous
        };
        if previous != generation {
            info!(from = %previous, to = %generation, "Rebound unpacker schema");
        }
        previous
    }

    /// [`Unpacker::rebind`] by identifier. The binding is left untouched on
    /// error.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSchemaGeneration`] for unknown identifiers.
    pub fn rebind_id(&self, id: &str) -> DecodeResult<SchemaGeneration> {
        let generation = id.parse()?;
        Ok(self.rebind(generation))
    }

    /// Decode one datagram with the current binding.
    ///
    /// # Errors
    ///
    /// Same as [`decode`].
    pub fn decode(&self, bytes: &[u8]) -> DecodeResult<Packet> {
        let schema = self.schema();
        decode_with_schema(schema, bytes)
    }
}

impl Default for Unpacker {
    fn default() -> Self {
        Self::new(SchemaGeneration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{DispatchKey, PacketKind};
    use tracing_test::traced_test;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn f1_22_header(packet_id: u8, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        if let Some(format) = bytes.get_mut(0..2) {
            format.copy_from_slice(&2022u16.to_le_bytes());
        }
        if let Some(version) = bytes.get_mut(4) {
            *version = 1;
        }
        if let Some(id) = bytes.get_mut(5) {
            *id = packet_id;
        }
        bytes
    }

    #[test]
    fn empty_buffer_is_too_short() {
        assert_eq!(
            decode(&[], SchemaGeneration::F1_22),
            Err(DecodeError::TooShortForHeader {
                actual_len: 0,
                header_size: 24,
            })
        );
    }

    #[test]
    fn header_width_follows_generation() {
        let bytes = f1_22_header(3, 26);
        assert!(matches!(
            decode(&bytes, SchemaGeneration::F1_23),
            Err(DecodeError::TooShortForHeader {
                actual_len: 26,
                header_size: 29,
            })
        ));
    }

    #[test]
    fn unregistered_id_is_unknown_kind() {
        let bytes = f1_22_header(12, 24);
        assert_eq!(
            decode(&bytes, SchemaGeneration::F1_22),
            Err(DecodeError::UnknownPacketKind {
                key: DispatchKey::new(2022, 1, 12),
            })
        );
    }

    #[test]
    fn no_fallback_across_generations() {
        let bytes = f1_22_header(3, 40);
        let err = decode(&bytes, SchemaGeneration::F1_23);
        assert!(matches!(err, Err(DecodeError::UnknownPacketKind { .. })));
    }

    #[test]
    fn event_one_byte_too_long_is_size_mismatch() {
        let bytes = f1_22_header(3, 41);
        assert_eq!(
            decode(&bytes, SchemaGeneration::F1_22),
            Err(DecodeError::SizeMismatch {
                kind: PacketKind::Event,
                expected_size: 40,
                actual_len: 41,
            })
        );
    }

    #[test]
    fn exact_size_decodes() -> TestResult {
        let bytes = f1_22_header(3, 40);
        let packet = decode(&bytes, SchemaGeneration::F1_22)?;
        assert_eq!(packet.kind(), PacketKind::Event);
        assert_eq!(packet.generation(), SchemaGeneration::F1_22);
        assert_eq!(packet.key(), DispatchKey::new(2022, 1, 3));
        Ok(())
    }

    #[test]
    fn rebind_swaps_generation() {
        let unpacker = Unpacker::default();
        assert_eq!(unpacker.generation(), SchemaGeneration::F1_22);
        assert_eq!(unpacker.rebind(SchemaGeneration::F1_23), SchemaGeneration::F1_22);
        assert_eq!(unpacker.generation(), SchemaGeneration::F1_23);
        assert_eq!(unpacker.schema().header_size(), 29);
    }

    #[test]
    fn rebind_id_rejects_unknown_and_keeps_binding() {
        let unpacker = Unpacker::new(SchemaGeneration::F1_23);
        let err = unpacker.rebind_id("f1_19");
        assert_eq!(
            err,
            Err(DecodeError::InvalidSchemaGeneration {
                value: "f1_19".to_owned()
            })
        );
        assert_eq!(unpacker.generation(), SchemaGeneration::F1_23);
    }

    #[test]
    fn construction_rejects_unknown_identifier() {
        assert!(matches!(
            Unpacker::with_generation_id("f1 2021"),
            Err(DecodeError::InvalidSchemaGeneration { .. })
        ));
    }

    #[test]
    fn unpacker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Unpacker>();
        assert_send_sync::<Packet>();
    }

    #[test]
    #[traced_test]
    fn rejection_is_logged_at_debug() {
        let bytes = f1_22_header(3, 41);
        let result = decode(&bytes, SchemaGeneration::F1_22);
        assert!(matches!(result, Err(DecodeError::SizeMismatch { .. })));
        assert!(logs_contain("Rejected packet"));
        assert!(logs_contain("reason=\"size_mismatch\""));
        assert!(logs_contain("expected_size=40"));
    }

    #[test]
    #[traced_test]
    fn short_and_unknown_rejections_name_their_reason() {
        let short = decode(&[0u8; 10], SchemaGeneration::F1_22);
        assert!(matches!(short, Err(DecodeError::TooShortForHeader { .. })));
        assert!(logs_contain("reason=\"too_short_for_header\""));
        assert!(logs_contain("header_size=24"));

        let unknown = decode(&f1_22_header(200, 40), SchemaGeneration::F1_22);
        assert!(matches!(unknown, Err(DecodeError::UnknownPacketKind { .. })));
        assert!(logs_contain("reason=\"unknown_packet_kind\""));
        assert!(logs_contain("packet_id=200"));
    }

    #[test]
    #[traced_test]
    fn success_is_logged_at_trace() {
        let bytes = f1_22_header(3, 40);
        let result = decode(&bytes, SchemaGeneration::F1_22);
        assert!(matches!(result, Ok(Packet::F1_22(_))));
        assert!(logs_contain("Decoded packet"));
        assert!(logs_contain("kind=Event"));
    }

    #[test]
    #[traced_test]
    fn rebind_is_logged_only_on_change() {
        let unpacker = Unpacker::new(SchemaGeneration::F1_22);
        unpacker.rebind(SchemaGeneration::F1_22);
        assert!(!logs_contain("Rebound unpacker schema"));
        unpacker.rebind(SchemaGeneration::F1_23);
        assert!(logs_contain("Rebound unpacker schema"));
        assert!(logs_contain("to=f1_23"));
    }
}
