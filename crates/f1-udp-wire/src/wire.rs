//! The [`Wire`] trait and its implementations for primitives, fixed arrays
//! and fixed-width strings.

use std::borrow::Cow;
use std::fmt;

use crate::fields::{FieldList, FieldValue};
use crate::reader::{ByteReader, ByteWriter};

/// A packed, little-endian value with a constant encoded width.
///
/// `read` consumes exactly [`Wire::SIZE`] bytes and `write` emits exactly
/// [`Wire::SIZE`] bytes. There is no padding anywhere in the format, so the
/// size of a composite value is the sum of the sizes of its parts.
pub trait Wire: Sized {
    const SIZE: usize;

    fn read(r: &mut ByteReader<'_>) -> Self;

    fn write(&self, w: &mut ByteWriter);

    /// Append every leaf value under `path` to `out`, in wire order.
    fn visit(&self, path: &str, out: &mut FieldList);
}

macro_rules! impl_wire_scalar {
    ($($ty:ty => $read:ident, $write:ident, $variant:ident;)*) => {
        $(
            impl Wire for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn read(r: &mut ByteReader<'_>) -> Self {
                    r.$read()
                }

                #[inline]
                fn write(&self, w: &mut ByteWriter) {
                    w.$write(*self);
                }

                fn visit(&self, path: &str, out: &mut FieldList) {
                    out.push(path, FieldValue::$variant(*self));
                }
            }
        )*
    };
}

impl_wire_scalar! {
    u8 => u8, u8, U8;
    i8 => i8, i8, I8;
    u16 => u16_le, u16_le, U16;
    i16 => i16_le, i16_le, I16;
    u32 => u32_le, u32_le, U32;
    u64 => u64_le, u64_le, U64;
    f32 => f32_le, f32_le, F32;
    f64 => f64_le, f64_le, F64;
}

impl<T: Wire, const N: usize> Wire for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn read(r: &mut ByteReader<'_>) -> Self {
        std::array::from_fn(|_| T::read(r))
    }

    fn write(&self, w: &mut ByteWriter) {
        for item in self {
            item.write(w);
        }
    }

    fn visit(&self, path: &str, out: &mut FieldList) {
        for (i, item) in self.iter().enumerate() {
            item.visit(&format!("{path}[{i}]"), out);
        }
    }
}

/// NUL-padded UTF-8 text stored in exactly `N` bytes.
///
/// The raw bytes are kept so that a decoded value re-encodes to the same
/// wire bytes, including anything after the terminator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Build from text, truncating to `N` bytes and zero-filling the rest.
    pub fn from_text(text: &str) -> Self {
        let mut bytes = [0u8; N];
        for (dst, src) in bytes.iter_mut().zip(text.as_bytes()) {
            *dst = *src;
        }
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Text up to the first NUL; invalid UTF-8 is replaced.
    pub fn as_str(&self) -> Cow<'_, str> {
        let text = self.bytes.split(|&b| b == 0).next().unwrap_or_default();
        String::from_utf8_lossy(text)
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self { bytes: [0u8; N] }
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedStr<{N}>({:?})", self.as_str())
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl<const N: usize> Wire for FixedStr<N> {
    const SIZE: usize = N;

    fn read(r: &mut ByteReader<'_>) -> Self {
        Self { bytes: r.take::<N>() }
    }

    fn write(&self, w: &mut ByteWriter) {
        w.put(&self.bytes);
    }

    fn visit(&self, path: &str, out: &mut FieldList) {
        out.push(path, FieldValue::Text(self.as_str().into_owned()));
    }
}
