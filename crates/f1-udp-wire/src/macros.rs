/// Declare a packed wire record.
///
/// Fields are laid out in declaration order with no padding. The macro
/// emits the struct itself plus [`Wire`](crate::Wire) and
/// [`Layout`](crate::Layout) impls, so the byte size, the decoder, the
/// encoder and the field listing all come from one declaration.
///
/// ```
/// use f1_udp_wire::{Layout, Wire, wire_struct};
///
/// wire_struct! {
///     pub struct TyreStint {
///         pub end_lap: u8,
///         pub compound: u8,
///         pub wear: [f32; 4],
///     }
/// }
///
/// assert_eq!(TyreStint::SIZE, 18);
/// let stint = TyreStint::decode_exact(&[0u8; 18]);
/// assert!(stint.is_some());
/// ```
#[macro_export]
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Wire for $name {
            const SIZE: usize = 0 $(+ <$ty as $crate::Wire>::SIZE)*;

            fn read(r: &mut $crate::ByteReader<'_>) -> Self {
                Self {
                    $( $field: <$ty as $crate::Wire>::read(r), )*
                }
            }

            fn write(&self, w: &mut $crate::ByteWriter) {
                $( $crate::Wire::write(&self.$field, w); )*
            }

            fn visit(&self, prefix: &str, out: &mut $crate::FieldList) {
                $(
                    $crate::Wire::visit(
                        &self.$field,
                        &$crate::join_path(prefix, stringify!($field)),
                        out,
                    );
                )*
            }
        }

        impl $crate::Layout for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::FieldDef] = &[
                $(
                    $crate::FieldDef {
                        name: stringify!($field),
                        type_name: stringify!($ty),
                        size: <$ty as $crate::Wire>::SIZE,
                    },
                )*
            ];
        }
    };
}
