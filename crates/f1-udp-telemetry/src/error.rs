//! Error types for decoding and configuration.

use thiserror::Error;

use crate::key::{DispatchKey, PacketKind};

/// Errors returned by packet decoding and schema selection.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried and no partial record is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Packet too short for header: got {actual_len} bytes, header needs {header_size}")]
    TooShortForHeader { actual_len: usize, header_size: usize },

    #[error("Unknown packet kind: no shape registered for {key}")]
    UnknownPacketKind { key: DispatchKey },

    #[error("Size mismatch for {kind} packet: expected {expected_size} bytes, got {actual_len}")]
    SizeMismatch {
        kind: PacketKind,
        expected_size: usize,
        actual_len: usize,
    },

    #[error("Invalid schema generation: {value:?}")]
    InvalidSchemaGeneration { value: String },
}

impl DecodeError {
    /// Stable snake_case name of the variant, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::TooShortForHeader { .. } => "too_short_for_header",
            DecodeError::UnknownPacketKind { .. } => "unknown_packet_kind",
            DecodeError::SizeMismatch { .. } => "size_mismatch",
            DecodeError::InvalidSchemaGeneration { .. } => "invalid_schema_generation",
        }
    }

    pub(crate) fn invalid_generation(value: impl Into<String>) -> Self {
        DecodeError::InvalidSchemaGeneration {
            value: value.into(),
        }
    }
}

/// Convenience result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while building an [`UnpackerConfig`](crate::UnpackerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    InvalidSchemaGeneration(#[from] DecodeError),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_structured_detail() {
        let err = DecodeError::SizeMismatch {
            kind: PacketKind::Event,
            expected_size: 40,
            actual_len: 41,
        };
        assert_eq!(
            err.to_string(),
            "Size mismatch for Event packet: expected 40 bytes, got 41"
        );
        assert_eq!(err.code(), "size_mismatch");
    }

    #[test]
    fn unknown_kind_names_the_key() {
        let err = DecodeError::UnknownPacketKind {
            key: DispatchKey::new(2022, 1, 42),
        };
        assert_eq!(
            err.to_string(),
            "Unknown packet kind: no shape registered for format=2022 version=1 id=42"
        );
    }

    #[test]
    fn config_error_wraps_generation_error() {
        let err: ConfigError = DecodeError::invalid_generation("f1_99").into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid schema generation: \"f1_99\""
        );
    }
}
