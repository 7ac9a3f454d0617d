//! Minimal runtime reflection for check operands.
//!
//! Every operand handed to a check implements [`Inspect`], which exposes its
//! dynamic [`Kind`], its concrete type identity and whether it currently holds
//! a nil-like value. [`Nil`] is the untyped absence-of-value: it has no type
//! information at all.

mod impls;

use std::any::{Any, TypeId};
use std::fmt;

pub use impls::Interface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Array,
    Slice,
    Map,
    Chan,
    Func,
    Ptr,
    Interface,
    Struct,
}

impl Kind {
    /// Kinds whose values can represent "no value", plus `Invalid` for operands
    /// without any type information.
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Invalid
                | Kind::Chan
                | Kind::Func
                | Kind::Map
                | Kind::Ptr
                | Kind::Interface
                | Kind::Slice
        )
    }

    pub fn has_len(self) -> bool {
        matches!(
            self,
            Kind::Array | Kind::Chan | Kind::Map | Kind::Slice | Kind::String
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Chan => "chan",
            Kind::Func => "func",
            Kind::Ptr => "ptr",
            Kind::Interface => "interface",
            Kind::Struct => "struct",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete type identity of an operand. Equality only looks at the `TypeId`.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub trait Inspect: fmt::Debug {
    fn kind(&self) -> Kind;

    /// `None` only for the untyped absence-of-value.
    fn type_info(&self) -> Option<TypeInfo>;

    /// Whether a nilable value currently holds its nil state.
    fn is_nil(&self) -> bool {
        false
    }

    fn length(&self) -> Option<usize> {
        None
    }

    fn as_any(&self) -> Option<&dyn Any>;

    /// Structural equality: same concrete type and equal contents.
    fn deep_eq(&self, other: &dyn Inspect) -> bool;
}

/// The untyped absence-of-value.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<nil>")
    }
}

impl Inspect for Nil {
    fn kind(&self) -> Kind {
        Kind::Invalid
    }

    fn type_info(&self) -> Option<TypeInfo> {
        None
    }

    fn is_nil(&self) -> bool {
        true
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        other.type_info().is_none()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn type_info(&self) -> Option<TypeInfo> {
        (**self).type_info()
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn length(&self) -> Option<usize> {
        (**self).length()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        (**self).as_any()
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        (**self).deep_eq(other)
    }
}

/// Compares `this` against `other` when both share the concrete type `T`.
pub fn partial_eq<T: PartialEq + 'static>(this: &T, other: &dyn Inspect) -> bool {
    other
        .as_any()
        .and_then(|other| other.downcast_ref::<T>())
        .is_some_and(|other| this == other)
}

pub fn is_nilable(value: &dyn Inspect) -> bool {
    value.kind().is_nilable()
}

/// Operand text for failure messages. Strings are written as-is, everything
/// else through `Debug`.
pub fn display(value: &dyn Inspect) -> String {
    let text = value
        .as_any()
        .filter(|_| value.kind() == Kind::String)
        .and_then(|any| {
            any.downcast_ref::<&'static str>()
                .map(|s| s.to_string())
                .or_else(|| any.downcast_ref::<String>().cloned())
        });
    text.unwrap_or_else(|| format!("{:?}", value))
}

/// Name used when reporting the dynamic type of an operand.
pub fn type_name_of(value: &dyn Inspect) -> &'static str {
    value.type_info().map_or("<nil>", |info| info.name())
}

/// Implements [`Inspect`] for user types compared through `PartialEq`.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Celsius(i32);
///
/// verity::inspectable!(Celsius);
/// ```
#[macro_export]
macro_rules! inspectable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn kind(&self) -> $crate::inspect::Kind {
                    $crate::inspect::Kind::Struct
                }

                fn type_info(&self) -> ::core::option::Option<$crate::inspect::TypeInfo> {
                    ::core::option::Option::Some($crate::inspect::TypeInfo::of::<$ty>())
                }

                fn as_any(&self) -> ::core::option::Option<&dyn ::core::any::Any> {
                    ::core::option::Option::Some(self)
                }

                fn deep_eq(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                    $crate::inspect::partial_eq(self, other)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Meters(u32);

    crate::inspectable!(Meters);

    #[test]
    fn test_nilable_kinds() {
        let nilable = [
            Kind::Invalid,
            Kind::Chan,
            Kind::Func,
            Kind::Map,
            Kind::Ptr,
            Kind::Interface,
            Kind::Slice,
        ];
        for kind in nilable {
            assert!(kind.is_nilable(), "{} should be nilable", kind);
        }

        let concrete = [
            Kind::Bool,
            Kind::Int,
            Kind::Uint,
            Kind::Float,
            Kind::Char,
            Kind::String,
            Kind::Array,
            Kind::Struct,
        ];
        for kind in concrete {
            assert!(!kind.is_nilable(), "{} should not be nilable", kind);
        }
    }

    #[test]
    fn test_is_nilable_values() {
        assert!(is_nilable(&Nil));
        assert!(is_nilable(&Option::<i32>::None));
        assert!(is_nilable(&vec![1i32, 2]));
        assert!(!is_nilable(&0i32));
        assert!(!is_nilable(&"text"));
        assert!(!is_nilable(&[1i32, 2, 3]));
        assert!(!is_nilable(&Meters(3)));
    }

    #[test]
    fn test_type_info_equality_ignores_name() {
        assert_eq!(TypeInfo::of::<i32>(), TypeInfo::of::<i32>());
        assert_ne!(TypeInfo::of::<i32>(), TypeInfo::of::<i64>());
        assert_eq!(TypeInfo::of::<i32>().name(), "i32");
    }

    #[test]
    fn test_nil_has_no_type() {
        assert!(Nil.type_info().is_none());
        assert!(Nil.is_nil());
        assert_eq!(type_name_of(&Nil), "<nil>");
        assert_eq!(format!("{:?}", Nil), "<nil>");
    }

    #[test]
    fn test_references_are_transparent() {
        let value = 5u8;
        let borrowed = &value;
        assert_eq!(borrowed.kind(), Kind::Uint);
        assert_eq!(borrowed.type_info(), value.type_info());
        assert!(borrowed.deep_eq(&value));
    }

    #[test]
    fn test_inspectable_macro() {
        assert_eq!(Meters(1).kind(), Kind::Struct);
        assert!(Meters(1).deep_eq(&Meters(1)));
        assert!(!Meters(1).deep_eq(&Meters(2)));
        assert!(!Meters(1).deep_eq(&1u32));
        assert!(type_name_of(&Meters(1)).ends_with("Meters"));
    }

    #[test]
    fn test_display_writes_strings_unquoted() {
        assert_eq!(display(&"a"), "a");
        assert_eq!(display(&String::from("b c")), "b c");
        assert_eq!(display(&Interface::new("held")), "held");
        assert_eq!(display(&Some("a")), "Some(\"a\")");
        assert_eq!(display(&12i32), "12");
        assert_eq!(display(&Nil), "<nil>");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Ptr.to_string(), "ptr");
        assert_eq!(Kind::Invalid.to_string(), "invalid");
        assert!(Kind::String.has_len());
        assert!(!Kind::Int.has_len());
    }
}
