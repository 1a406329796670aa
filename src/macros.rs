/// Declares a wire type: the struct, its schema and its marshal/unmarshal code,
/// all from one field list.
///
/// ```ignore
/// wire_object! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct ServerSelector in "server" {
///         pub by: ServerBy = attr("by"),
///         pub key: String = text,
///     }
/// }
/// ```
///
/// Each field names a placement from `core::codec`: `attr`, `text`, `elem`,
/// `child`, `list`, `wrapped` or `wrapped_required`. Top-level messages add
/// `in ADMIN_NAMESPACE` after the element name.
#[macro_export]
macro_rules! wire_object {
    (@ns) => { ::core::option::Option::None };
    (@ns $ns:path) => { ::core::option::Option::Some($ns) };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $element:literal $(in $ns:path)? {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty = $placement:ident $( ( $($arg:expr),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::core::WireObject for $name {
            const ELEMENT: &'static str = $element;
            const NAMESPACE: ::core::option::Option<&'static str> = $crate::wire_object!(@ns $($ns)?);
            const SCHEMA: &'static [$crate::core::FieldSpec] = &[
                $(
                    $crate::core::codec::$placement::spec::<$ty>(
                        ::core::stringify!($field) $( $(, $arg)* )?
                    ),
                )*
            ];

            #[allow(unused_variables)]
            fn write_fields(&self, element: &mut $crate::core::Element) {
                $(
                    $crate::core::codec::$placement::write(&self.$field, element $( $(, $arg)* )?);
                )*
            }

            #[allow(unused_variables)]
            fn read_fields(element: &$crate::core::Element) -> $crate::Result<Self> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: $crate::core::codec::$placement::read(element $( $(, $arg)* )?)?,
                    )*
                })
            }
        }

        impl $crate::core::codec::ObjectSlot for $name {
            type Object = Self;
            const REQUIRED: bool = true;

            fn object(&self) -> ::core::option::Option<&Self> {
                ::core::option::Option::Some(self)
            }

            fn from_object(object: ::core::option::Option<Self>) -> ::core::option::Option<Self> {
                object
            }
        }
    };
}

/// Declares a closed vocabulary carried as a string on the wire.
///
/// `from_wire` is exact on case and spelling. Adding `listing` after the
/// label makes lookup failures enumerate the accepted values.
#[macro_export]
macro_rules! wire_enum {
    (@listing) => { false };
    (@listing listing) => { true };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal $(, $listing:ident)?) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            pub const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            pub fn from_wire(value: &str) -> $crate::Result<Self> {
                match value {
                    $($wire => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err($crate::SoapError::InvalidEnumValue {
                        kind: $label,
                        value: value.to_string(),
                        valid: if $crate::wire_enum!(@listing $($listing)?) {
                            ::core::option::Option::Some(Self::WIRE_VALUES)
                        } else {
                            ::core::option::Option::None
                        },
                    }),
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::SoapError;

            fn from_str(value: &str) -> $crate::Result<Self> {
                Self::from_wire(value)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::core::WireScalar for $name {
            const KIND: $crate::core::FieldKind = $crate::core::FieldKind::Enum(Self::WIRE_VALUES);

            fn to_value(&self) -> $crate::core::Value {
                $crate::core::Value::Str(self.as_str().to_string())
            }

            fn from_value(value: &$crate::core::Value, _field: &str) -> $crate::Result<Self> {
                Self::from_wire(&value.to_xml_text())
            }
        }

        $crate::impl_scalar_slot!($name);
    };
}
