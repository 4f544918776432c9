//! Per-generation packet enum and dispatch shapes, generated from one list
//! of `(packet id, kind, record type, exact size)` rows.

/// Expands inside a generation module that defines `PACKET_FORMAT`,
/// `PACKET_VERSION` and a header type. Every row gets a compile-time check
/// that the record's computed size and its field-width sum both equal the
/// declared size.
macro_rules! packet_registry {
    (
        generation: $generation:ident,
        header: $header:ty,
        packets: {
            $( $id:literal => $kind:ident($ty:ty) = $size:literal, )*
        }
    ) => {
        /// One decoded packet of this generation, tagged by kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Packet {
            $( $kind(Box<$ty>), )*
        }

        impl Packet {
            pub fn kind(&self) -> $crate::PacketKind {
                match self {
                    $( Packet::$kind(_) => $crate::PacketKind::$kind, )*
                }
            }

            pub fn header(&self) -> &$header {
                match self {
                    $( Packet::$kind(p) => &p.header, )*
                }
            }

            /// Every leaf field in wire order.
            pub fn fields(&self) -> f1_udp_wire::FieldList {
                match self {
                    $( Packet::$kind(p) => f1_udp_wire::Layout::fields(p.as_ref()), )*
                }
            }

            /// Re-encode to wire bytes.
            pub fn to_bytes(&self) -> Vec<u8> {
                match self {
                    $( Packet::$kind(p) => f1_udp_wire::Layout::encode(p.as_ref()), )*
                }
            }
        }

        $(
            const _: () = assert!(<$ty as f1_udp_wire::Wire>::SIZE == $size);
            const _: () = assert!(
                f1_udp_wire::total_size(<$ty as f1_udp_wire::Layout>::FIELDS) == $size
            );
        )*

        /// `(packet id, exact size)` for every registered packet.
        pub const PACKET_SIZES: &[(u8, usize)] = &[ $( ($id, $size), )* ];

        fn shapes() -> Vec<$crate::ShapeDescriptor> {
            vec![
                $(
                    $crate::ShapeDescriptor::new(
                        $crate::DispatchKey::new(PACKET_FORMAT, PACKET_VERSION, $id),
                        $crate::PacketKind::$kind,
                        <$ty as f1_udp_wire::Layout>::NAME,
                        $size,
                        |bytes| {
                            <$ty as f1_udp_wire::Layout>::decode_exact(bytes).map(|p| {
                                $crate::Packet::$generation(Packet::$kind(Box::new(p)))
                            })
                        },
                    ),
                )*
            ]
        }
    };
}

pub(crate) use packet_registry;
