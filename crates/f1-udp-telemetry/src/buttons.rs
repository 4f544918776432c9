//! Controller button bit set carried by the `BUTN` event.

use bitflags::bitflags;
use f1_udp_wire::{ByteReader, ByteWriter, FieldList, FieldValue, Wire};

bitflags! {
    /// Buttons held at the time of the event.
    ///
    /// Bits the game adds in later releases are kept as-is.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonFlags: u32 {
        /// Cross or A
        const CROSS = 0x0000_0001;
        /// Triangle or Y
        const TRIANGLE = 0x0000_0002;
        /// Circle or B
        const CIRCLE = 0x0000_0004;
        /// Square or X
        const SQUARE = 0x0000_0008;
        const D_PAD_LEFT = 0x0000_0010;
        const D_PAD_RIGHT = 0x0000_0020;
        const D_PAD_UP = 0x0000_0040;
        const D_PAD_DOWN = 0x0000_0080;
        /// Options or Menu
        const OPTIONS = 0x0000_0100;
        const L1 = 0x0000_0200;
        const R1 = 0x0000_0400;
        const L2 = 0x0000_0800;
        const R2 = 0x0000_1000;
        const LEFT_STICK_CLICK = 0x0000_2000;
        const RIGHT_STICK_CLICK = 0x0000_4000;
        const RIGHT_STICK_LEFT = 0x0000_8000;
        const RIGHT_STICK_RIGHT = 0x0001_0000;
        const RIGHT_STICK_UP = 0x0002_0000;
        const RIGHT_STICK_DOWN = 0x0004_0000;
        const SPECIAL = 0x0008_0000;
        const UDP_ACTION_1 = 0x0010_0000;
        const UDP_ACTION_2 = 0x0020_0000;
        const UDP_ACTION_3 = 0x0040_0000;
        const UDP_ACTION_4 = 0x0080_0000;
        const UDP_ACTION_5 = 0x0100_0000;
        const UDP_ACTION_6 = 0x0200_0000;
        const UDP_ACTION_7 = 0x0400_0000;
        const UDP_ACTION_8 = 0x0800_0000;
        const UDP_ACTION_9 = 0x1000_0000;
        const UDP_ACTION_10 = 0x2000_0000;
        const UDP_ACTION_11 = 0x4000_0000;
        const UDP_ACTION_12 = 0x8000_0000;
    }
}

impl Wire for ButtonFlags {
    const SIZE: usize = 4;

    fn read(r: &mut ByteReader<'_>) -> Self {
        ButtonFlags::from_bits_retain(r.u32_le())
    }

    fn write(&self, w: &mut ByteWriter) {
        w.u32_le(self.bits());
    }

    fn visit(&self, path: &str, out: &mut FieldList) {
        out.push(path, FieldValue::Bits(self.bits()));
    }
}
