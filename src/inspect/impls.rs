use super::{partial_eq, Inspect, Kind, TypeInfo};
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! scalar {
    ($kind:ident => $($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn type_info(&self) -> Option<TypeInfo> {
                    Some(TypeInfo::of::<$ty>())
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    Some(self)
                }

                fn deep_eq(&self, other: &dyn Inspect) -> bool {
                    partial_eq(self, other)
                }
            }
        )+
    };
}

scalar!(Int => i8, i16, i32, i64, i128, isize);
scalar!(Uint => u8, u16, u32, u64, u128, usize);
scalar!(Float => f32, f64);
scalar!(Bool => bool);
scalar!(Char => char);
scalar!(Struct => ());

impl Inspect for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn type_info(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<String>())
    }

    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        partial_eq(self, other)
    }
}

impl Inspect for &'static str {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn type_info(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<&'static str>())
    }

    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        partial_eq(self, other)
    }
}

impl<T> Inspect for Option<T>
where
    T: fmt::Debug + PartialEq + 'static,
{
    fn kind(&self) -> Kind {
        Kind::Ptr
    }

    fn type_info(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<Option<T>>())
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        partial_eq(self, other)
    }
}

macro_rules! pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T> Inspect for $ptr<T>
            where
                T: fmt::Debug + PartialEq + 'static,
            {
                fn kind(&self) -> Kind {
                    Kind::Ptr
                }

                fn type_info(&self) -> Option<TypeInfo> {
                    Some(TypeInfo::of::<$ptr<T>>())
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    Some(self)
                }

                fn deep_eq(&self, other: &dyn Inspect) -> bool {
                    partial_eq(self, other)
                }
            }
        )+
    };
}

pointer!(Box, Rc, Arc);

macro_rules! collection {
    ($kind:ident => $($ty:ty where [$($bounds:tt)*]),+ $(,)?) => {
        $(
            impl<$($bounds)*> Inspect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn type_info(&self) -> Option<TypeInfo> {
                    Some(TypeInfo::of::<$ty>())
                }

                fn length(&self) -> Option<usize> {
                    Some(self.len())
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    Some(self)
                }

                fn deep_eq(&self, other: &dyn Inspect) -> bool {
                    partial_eq(self, other)
                }
            }
        )+
    };
}

collection!(Slice =>
    Vec<T> where [T: fmt::Debug + PartialEq + 'static],
    VecDeque<T> where [T: fmt::Debug + PartialEq + 'static],
);

collection!(Map =>
    HashMap<K, V, S> where [
        K: fmt::Debug + Eq + Hash + 'static,
        V: fmt::Debug + PartialEq + 'static,
        S: BuildHasher + 'static
    ],
    BTreeMap<K, V> where [
        K: fmt::Debug + PartialEq + 'static,
        V: fmt::Debug + PartialEq + 'static
    ],
    HashSet<T, S> where [
        T: fmt::Debug + Eq + Hash + 'static,
        S: BuildHasher + 'static
    ],
    BTreeSet<T> where [T: fmt::Debug + PartialEq + 'static],
);

impl<T, const N: usize> Inspect for [T; N]
where
    T: fmt::Debug + PartialEq + 'static,
{
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn type_info(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<[T; N]>())
    }

    fn length(&self) -> Option<usize> {
        Some(N)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        partial_eq(self, other)
    }
}

// Channels compare by identity: two handles are equal only when they share
// the same underlying channel.
macro_rules! channel {
    ($($chan:ident),+) => {
        $(
            impl<T: 'static> Inspect for crossbeam_channel::$chan<T> {
                fn kind(&self) -> Kind {
                    Kind::Chan
                }

                fn type_info(&self) -> Option<TypeInfo> {
                    Some(TypeInfo::of::<crossbeam_channel::$chan<T>>())
                }

                fn length(&self) -> Option<usize> {
                    Some(self.len())
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    Some(self)
                }

                fn deep_eq(&self, other: &dyn Inspect) -> bool {
                    other
                        .as_any()
                        .and_then(|other| other.downcast_ref::<crossbeam_channel::$chan<T>>())
                        .is_some_and(|other| self.same_channel(other))
                }
            }
        )+
    };
}

channel!(Sender, Receiver);

// Function values are never deep-equal, not even to themselves.
macro_rules! function {
    ($($arg:ident),*) => {
        impl<R: 'static, $($arg: 'static),*> Inspect for fn($($arg),*) -> R {
            fn kind(&self) -> Kind {
                Kind::Func
            }

            fn type_info(&self) -> Option<TypeInfo> {
                Some(TypeInfo::of::<fn($($arg),*) -> R>())
            }

            fn as_any(&self) -> Option<&dyn Any> {
                Some(self)
            }

            fn deep_eq(&self, _other: &dyn Inspect) -> bool {
                false
            }
        }
    };
}

function!();
function!(A);
function!(A, B);
function!(A, B, C);

/// A type-erased operand holder.
///
/// An `Interface` reports whatever it holds; an empty one behaves exactly like
/// [`Nil`](super::Nil).
pub struct Interface(Option<Box<dyn Inspect>>);

impl Interface {
    pub fn new<V: Inspect + 'static>(value: V) -> Self {
        Self(Some(Box::new(value)))
    }

    pub fn nil() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<&dyn Inspect> {
        self.0.as_deref()
    }
}

impl fmt::Debug for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(inner) => fmt::Debug::fmt(inner, f),
            None => f.write_str("<nil>"),
        }
    }
}

impl Inspect for Interface {
    fn kind(&self) -> Kind {
        self.get().map_or(Kind::Invalid, |inner| inner.kind())
    }

    fn type_info(&self) -> Option<TypeInfo> {
        self.get().and_then(|inner| inner.type_info())
    }

    fn is_nil(&self) -> bool {
        self.get().map_or(true, |inner| inner.is_nil())
    }

    fn length(&self) -> Option<usize> {
        self.get().and_then(|inner| inner.length())
    }

    fn as_any(&self) -> Option<&dyn Any> {
        self.get().and_then(|inner| inner.as_any())
    }

    fn deep_eq(&self, other: &dyn Inspect) -> bool {
        match self.get() {
            Some(inner) => inner.deep_eq(other),
            None => other.type_info().is_none(),
        }
    }
}
