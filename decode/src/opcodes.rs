/// Declares an instruction type enum and its attribute table from a single
/// list, so a type can never lose its record or point at another one.
///
/// ```ignore
/// opcodes! {
///     pub enum ArmType: OpAttrs in ARM_ATTRS {
///         Undefined = OpAttrs::new("UNDEFINED", "%m"),
///         AndImm = dp_imm("AND", Dp::Binary),
///     }
/// }
/// ```
///
/// expands to the enum (variants in list order), a `static` slice of
/// records in the same order, `ALL` and `attrs()`.
macro_rules! opcodes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $attrs:ident in $table:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $record:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        static $table: &[$attrs] = &[ $( $record, )* ];

        impl $name {
            /// Every type, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// The attribute record of this type.
            #[must_use]
            pub fn attrs(self) -> &'static $attrs {
                &$table[self as usize]
            }
        }
    };
}
