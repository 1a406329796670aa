//! Field codecs, one module per wire placement.
//!
//! `wire_object!` expands every field into calls to `codec::<placement>::{spec, write, read}`,
//! so each placement rule lives here exactly once.

use crate::core::element::{Element, Value};
use crate::core::schema::FieldKind;
use crate::core::wire::WireObject;
use crate::utils::error::{Result, SoapError};

/// A single value that fits in an attribute or in text content.
pub trait WireScalar: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    fn from_value(value: &Value, field: &str) -> Result<Self>;
}

/// How a scalar field sits in its struct: required `T` or optional `Option<T>`.
pub trait ScalarSlot: Sized {
    type Scalar: WireScalar;
    const REQUIRED: bool;
    const KIND: FieldKind;

    fn scalar(&self) -> Option<&Self::Scalar>;

    /// `None` when a required slot is given nothing.
    fn from_scalar(scalar: Option<Self::Scalar>) -> Option<Self>;
}

impl<T: WireScalar> ScalarSlot for Option<T> {
    type Scalar = T;
    const REQUIRED: bool = false;
    const KIND: FieldKind = T::KIND.optional();

    fn scalar(&self) -> Option<&T> {
        self.as_ref()
    }

    fn from_scalar(scalar: Option<T>) -> Option<Self> {
        Some(scalar)
    }
}

/// Makes a `WireScalar` usable directly as a required field.
#[macro_export]
macro_rules! impl_scalar_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::codec::ScalarSlot for $ty {
                type Scalar = $ty;
                const REQUIRED: bool = true;
                const KIND: $crate::core::FieldKind = <$ty as $crate::core::WireScalar>::KIND;

                fn scalar(&self) -> ::core::option::Option<&$ty> {
                    ::core::option::Option::Some(self)
                }

                fn from_scalar(scalar: ::core::option::Option<$ty>) -> ::core::option::Option<Self> {
                    scalar
                }
            }
        )+
    };
}

/// How a nested object sits in its struct: required `T` or optional `Option<T>`.
pub trait ObjectSlot: Sized {
    type Object: WireObject;
    const REQUIRED: bool;

    fn object(&self) -> Option<&Self::Object>;

    fn from_object(object: Option<Self::Object>) -> Option<Self>;
}

impl<T: WireObject> ObjectSlot for Option<T> {
    type Object = T;
    const REQUIRED: bool = false;

    fn object(&self) -> Option<&T> {
        self.as_ref()
    }

    fn from_object(object: Option<T>) -> Option<Self> {
        Some(object)
    }
}

/// Lists of nested objects.
pub trait ObjectList {
    type Item: WireObject;
}

impl<T: WireObject> ObjectList for Vec<T> {
    type Item = T;
}

impl WireScalar for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    fn from_value(value: &Value, _field: &str) -> Result<Self> {
        Ok(value.to_xml_text().into_owned())
    }
}

impl WireScalar for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value, field: &str) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(1) => Ok(true),
            Value::Int(0) => Ok(false),
            Value::Str(s) if s == "1" || s.eq_ignore_ascii_case("true") => Ok(true),
            Value::Str(s) if s == "0" || s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(SoapError::InvalidValue {
                field: field.to_string(),
                value: other.to_xml_text().into_owned(),
                expected: "boolean (1, 0, true or false)",
            }),
        }
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),+) => {
        $(
            impl WireScalar for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn from_value(value: &Value, field: &str) -> Result<Self> {
                    let parsed = match value {
                        Value::Int(i) => <$ty>::try_from(*i).ok(),
                        Value::Str(s) => s.trim().parse::<$ty>().ok(),
                        Value::Bool(_) => None,
                    };
                    parsed.ok_or_else(|| SoapError::InvalidValue {
                        field: field.to_string(),
                        value: value.to_xml_text().into_owned(),
                        expected: stringify!($ty),
                    })
                }
            }
        )+
    };
}

impl_integer_scalar!(i16, i32, i64, u16, u32);
impl_scalar_slot!(String, bool, i16, i32, i64, u16, u32);

/// Attribute value, falling back to a same-named child element's text.
fn lookup_scalar(element: &Element, wire: &str) -> Option<Value> {
    element.attr(wire).cloned().or_else(|| {
        element
            .child(wire)
            .map(|child| Value::Str(child.text().unwrap_or_default().to_string()))
    })
}

fn decode_scalar<S: ScalarSlot>(
    element: &Element,
    wire: &str,
    value: Option<Value>,
    what: &'static str,
) -> Result<S> {
    let scalar = value
        .map(|v| S::Scalar::from_value(&v, wire))
        .transpose()?;
    S::from_scalar(scalar).ok_or_else(|| SoapError::missing(element.name(), wire, what))
}

pub mod attr {
    use super::*;
    use crate::core::schema::{FieldSpec, Placement};

    pub const fn spec<S: ScalarSlot>(field: &'static str, wire: &'static str) -> FieldSpec {
        FieldSpec {
            field,
            wire,
            placement: Placement::Attribute,
            required: S::REQUIRED,
            kind: S::KIND,
        }
    }

    pub fn write<S: ScalarSlot>(slot: &S, element: &mut Element, wire: &'static str) {
        if let Some(scalar) = slot.scalar() {
            element.set_attr(wire, scalar.to_value());
        }
    }

    pub fn read<S: ScalarSlot>(element: &Element, wire: &'static str) -> Result<S> {
        decode_scalar(element, wire, lookup_scalar(element, wire), "attribute")
    }
}

pub mod text {
    use super::*;
    use crate::core::schema::{FieldSpec, Placement};

    pub const fn spec<S: ScalarSlot>(field: &'static str) -> FieldSpec {
        FieldSpec {
            field,
            wire: "#text",
            placement: Placement::Text,
            required: S::REQUIRED,
            kind: S::KIND,
        }
    }

    pub fn write<S: ScalarSlot>(slot: &S, element: &mut Element) {
        if let Some(scalar) = slot.scalar() {
            element.set_text(scalar.to_value().to_xml_text());
        }
    }

    /// Missing text on a required slot reads as the empty string.
    pub fn read<S: ScalarSlot>(element: &Element) -> Result<S> {
        let value = match element.text() {
            Some(text) => Some(Value::Str(text.to_string())),
            None if S::REQUIRED => Some(Value::Str(String::new())),
            None => None,
        };
        decode_scalar(element, "#text", value, "text content")
    }
}

pub mod elem {
    use super::*;
    use crate::core::schema::{FieldSpec, Placement};

    pub const fn spec<S: ScalarSlot>(field: &'static str, wire: &'static str) -> FieldSpec {
        FieldSpec {
            field,
            wire,
            placement: Placement::Element,
            required: S::REQUIRED,
            kind: S::KIND,
        }
    }

    pub fn write<S: ScalarSlot>(slot: &S, element: &mut Element, wire: &'static str) {
        if let Some(scalar) = slot.scalar() {
            element.push_child(Element::new(wire).with_text(scalar.to_value().to_xml_text()));
        }
    }

    /// Child text first; a plain attribute is accepted too since JSON flattens
    /// text-only children into keys.
    pub fn read<S: ScalarSlot>(element: &Element, wire: &'static str) -> Result<S> {
        let value = element
            .child(wire)
            .map(|child| Value::Str(child.text().unwrap_or_default().to_string()))
            .or_else(|| element.attr(wire).cloned());
        decode_scalar(element, wire, value, "element")
    }
}

pub mod child {
    use super::*;
    use crate::core::schema::{FieldSpec, Placement};

    pub const fn spec<S: ObjectSlot>(field: &'static str, wire: &'static str) -> FieldSpec {
        FieldSpec {
            field,
            wire,
            placement: Placement::Child,
            required: S::REQUIRED,
            kind: FieldKind::Object {
                element: <S::Object as WireObject>::ELEMENT,
                schema: <S::Object as WireObject>::SCHEMA,
            },
        }
    }

    pub fn write<S: ObjectSlot>(slot: &S, element: &mut Element, wire: &'static str) {
        if let Some(object) = slot.object() {
            element.push_child(object.to_element_named(wire));
        }
    }

    pub fn read<S: ObjectSlot>(element: &Element, wire: &'static str) -> Result<S> {
        let object = element
            .child(wire)
            .map(S::Object::from_element)
            .transpose()?;
        S::from_object(object).ok_or_else(|| SoapError::missing(element.name(), wire, "element"))
    }
}

pub mod list {
    use super::*;
    use crate::core::schema::{FieldSpec, Placement};

    pub const fn spec<L: ObjectList>(field: &'static str, wire: &'static str) -> FieldSpec {
        FieldSpec {
            field,
            wire,
            placement: Placement::List,
            required: false,
            kind: FieldKind::Object {
                element: <L::Item as WireObject>::ELEMENT,
                schema: <L::Item as WireObject>::SCHEMA,
            },
        }
    }

    pub fn write<T: WireObject>(items: &[T], element: &mut Element, wire: &'static str) {
        for item in items {
            element.push_child(item.to_element_named(wire));
        }
    }

    pub fn read<T: WireObject>(element: &Element, wire: &'static str) -> Result<Vec<T>> {
        element.children_named(wire).map(T::from_element).collect()
    }
}

// Shared by `wrapped` and `wrapped_required`.
fn write_wrapped<T: WireObject>(
    items: &[T],
    element: &mut Element,
    wrapper: &'static str,
    item: &'static str,
) {
    let mut container = Element::new(wrapper);
    for entry in items {
        container.push_child(entry.to_element_named(item));
    }
    element.push_child(container);
}

fn read_wrapped<T: WireObject>(container: &Element, item: &'static str) -> Result<Vec<T>> {
    container.children_named(item).map(T::from_element).collect()
}

pub mod wrapped {
    use super::*;
    use crate::core::schema::FieldSpec;

    pub const fn spec<L: ObjectList>(
        field: &'static str,
        wrapper: &'static str,
        item: &'static str,
    ) -> FieldSpec {
        FieldSpec {
            field,
            wire: wrapper,
            placement: crate::core::schema::Placement::WrappedList { item },
            required: false,
            kind: FieldKind::Object {
                element: <L::Item as WireObject>::ELEMENT,
                schema: <L::Item as WireObject>::SCHEMA,
            },
        }
    }

    /// The container is left out entirely when there is nothing to wrap.
    pub fn write<T: WireObject>(
        items: &[T],
        element: &mut Element,
        wrapper: &'static str,
        item: &'static str,
    ) {
        if !items.is_empty() {
            write_wrapped(items, element, wrapper, item);
        }
    }

    pub fn read<T: WireObject>(
        element: &Element,
        wrapper: &'static str,
        item: &'static str,
    ) -> Result<Vec<T>> {
        match element.child(wrapper) {
            Some(container) => read_wrapped(container, item),
            None => Ok(Vec::new()),
        }
    }
}

pub mod wrapped_required {
    use super::*;
    use crate::core::schema::FieldSpec;

    pub const fn spec<L: ObjectList>(
        field: &'static str,
        wrapper: &'static str,
        item: &'static str,
    ) -> FieldSpec {
        FieldSpec {
            required: true,
            ..wrapped::spec::<L>(field, wrapper, item)
        }
    }

    /// The container is always emitted, even when empty.
    pub fn write<T: WireObject>(
        items: &[T],
        element: &mut Element,
        wrapper: &'static str,
        item: &'static str,
    ) {
        write_wrapped(items, element, wrapper, item);
    }

    pub fn read<T: WireObject>(
        element: &Element,
        wrapper: &'static str,
        item: &'static str,
    ) -> Result<Vec<T>> {
        let container = element
            .child(wrapper)
            .ok_or_else(|| SoapError::missing(element.name(), wrapper, "element"))?;
        read_wrapped(container, item)
    }
}
