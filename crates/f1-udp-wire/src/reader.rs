//! Cursor-style little-endian reader and writer.

/// Cursor over a borrowed byte slice.
///
/// Reads never panic. A read past the end yields zeroed bytes and latches
/// [`ByteReader::is_overrun`]; callers that validated the slice length up
/// front never observe that state.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    overrun: bool,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            overrun: false,
        }
    }

    /// Current offset from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// `true` once any read ran past the end of the slice.
    pub fn is_overrun(&self) -> bool {
        self.overrun
    }

    /// Read the next `N` bytes verbatim.
    #[inline]
    pub fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        let window = self
            .pos
            .checked_add(N)
            .and_then(|end| self.data.get(self.pos..end));
        match window {
            Some(bytes) => {
                out.copy_from_slice(bytes);
                self.pos = self.pos.saturating_add(N);
            }
            None => {
                self.overrun = true;
                self.pos = self.data.len();
            }
        }
        out
    }

    #[inline]
    pub fn u8(&mut self) -> u8 {
        let [b] = self.take::<1>();
        b
    }

    #[inline]
    pub fn i8(&mut self) -> i8 {
        i8::from_le_bytes(self.take::<1>())
    }

    #[inline]
    pub fn u16_le(&mut self) -> u16 {
        u16::from_le_bytes(self.take::<2>())
    }

    #[inline]
    pub fn i16_le(&mut self) -> i16 {
        i16::from_le_bytes(self.take::<2>())
    }

    #[inline]
    pub fn u32_le(&mut self) -> u32 {
        u32::from_le_bytes(self.take::<4>())
    }

    #[inline]
    pub fn u64_le(&mut self) -> u64 {
        u64::from_le_bytes(self.take::<8>())
    }

    /// Raw IEEE-754 value; non-finite payloads are kept as sent.
    #[inline]
    pub fn f32_le(&mut self) -> f32 {
        f32::from_le_bytes(self.take::<4>())
    }

    #[inline]
    pub fn f64_le(&mut self) -> f64 {
        f64::from_le_bytes(self.take::<8>())
    }

    pub fn skip(&mut self, n: usize) {
        match self.pos.checked_add(n) {
            Some(end) if end <= self.data.len() => self.pos = end,
            _ => {
                self.overrun = true;
                self.pos = self.data.len();
            }
        }
    }
}

/// Growable little-endian writer used to build wire fixtures.
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn i8(&mut self, value: i8) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn u16_le(&mut self, value: u16) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn i16_le(&mut self, value: i16) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn u32_le(&mut self, value: u32) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn u64_le(&mut self, value: u64) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn f32_le(&mut self, value: f32) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn f64_le(&mut self, value: f64) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    /// Append `n` zero bytes.
    pub fn zeros(&mut self, n: usize) -> &mut Self {
        self.buf.resize(self.buf.len().saturating_add(n), 0);
        self
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
