//! Static descriptions of a type's layout.
//!
//! A [`Shape`] is everything the validator needs to know about a type: its
//! name, what kind of type it is, and for records, the ordered list of named
//! fields with their own kinds. Shapes are plain `Copy` data so they can live
//! in `const` items, be produced by `#[derive(Reflect)]`, or be assembled by
//! hand for records described outside Rust's type system.

use core::fmt;

/// Coarse classification of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`.
    Bool,
    /// Signed or unsigned integer.
    Integer,
    /// `f32` / `f64`.
    Float,
    /// `char`.
    Char,
    /// String types (`str`, `String`).
    Str,
    /// `()` or a unit struct.
    Unit,
    /// Tuple or tuple struct.
    Tuple,
    /// Arrays, slices, vectors.
    Sequence,
    /// References, boxes and other smart pointers.
    Indirection,
    /// Enums, including `Option`.
    Enum,
    /// Struct with named fields.
    Record,
}

impl Kind {
    /// Lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::Str => "string",
            Kind::Unit => "unit",
            Kind::Tuple => "tuple",
            Kind::Sequence => "sequence",
            Kind::Indirection => "indirection",
            Kind::Enum => "enum",
            Kind::Record => "record",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named field of a record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field<'a> {
    name: &'a str,
    ty: &'a str,
    kind: Kind,
}

impl<'a> Field<'a> {
    /// Describes a field by hand.
    #[inline]
    pub const fn new(name: &'a str, ty: &'a str, kind: Kind) -> Self {
        Self { name, ty, kind }
    }

    /// Describes a field whose type is `T`.
    ///
    /// ```
    /// use named_flags::{Field, Kind};
    ///
    /// const SAM: Field<'static> = Field::of::<u32>("sam");
    /// assert_eq!(SAM.ty(), "u32");
    /// assert_eq!(SAM.kind(), Kind::Integer);
    /// ```
    #[inline]
    pub const fn of<T: Reflect + ?Sized>(name: &'a str) -> Self {
        Self {
            name,
            ty: T::SHAPE.name,
            kind: T::SHAPE.kind,
        }
    }

    /// Field name as declared.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Name of the field's type.
    #[inline]
    pub const fn ty(&self) -> &'a str {
        self.ty
    }

    /// Kind of the field's type.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }
}

/// Layout of a type as seen by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape<'a> {
    name: &'a str,
    kind: Kind,
    fields: &'a [Field<'a>],
}

impl<'a> Shape<'a> {
    /// A type with no fields of its own (primitives, collections, enums...).
    #[inline]
    pub const fn leaf(name: &'a str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            fields: &[],
        }
    }

    /// A struct with named fields, in declaration order.
    #[inline]
    pub const fn record(name: &'a str, fields: &'a [Field<'a>]) -> Self {
        Self {
            name,
            kind: Kind::Record,
            fields,
        }
    }

    /// Type name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// What kind of type this is.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Fields in declaration order. Empty for non-records.
    #[inline]
    pub const fn fields(&self) -> &'a [Field<'a>] {
        self.fields
    }

    /// Number of fields; zero for non-records.
    #[inline]
    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Types that can describe their own [`Shape`].
///
/// Implemented here for primitives and common containers; derive it with
/// `#[derive(Reflect)]` for your own structs and enums. Deriving never fails:
/// eligibility for flag encoding is decided later by
/// [`validate`](crate::validate).
pub trait Reflect {
    /// The type's static shape.
    const SHAPE: Shape<'static>;
}

macro_rules! impl_reflect_leaf {
    ($kind:ident => $($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                const SHAPE: Shape<'static> = Shape::leaf(stringify!($ty), Kind::$kind);
            }
        )*
    };
}

impl_reflect_leaf!(Bool => bool);
impl_reflect_leaf!(Integer => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_reflect_leaf!(Float => f32, f64);
impl_reflect_leaf!(Char => char);
impl_reflect_leaf!(Str => str);
impl_reflect_leaf!(Unit => ());

macro_rules! impl_reflect_tuple {
    ($(($($name:ident),+)),*) => {
        $(
            impl<$($name),+> Reflect for ($($name,)+) {
                const SHAPE: Shape<'static> = Shape::leaf("(..)", Kind::Tuple);
            }
        )*
    };
}

impl_reflect_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L)
);

impl<T: ?Sized> Reflect for &T {
    const SHAPE: Shape<'static> = Shape::leaf("&_", Kind::Indirection);
}

impl<T: ?Sized> Reflect for &mut T {
    const SHAPE: Shape<'static> = Shape::leaf("&mut _", Kind::Indirection);
}

impl<T> Reflect for [T] {
    const SHAPE: Shape<'static> = Shape::leaf("[_]", Kind::Sequence);
}

impl<T, const N: usize> Reflect for [T; N] {
    const SHAPE: Shape<'static> = Shape::leaf("[_; N]", Kind::Sequence);
}

impl<T> Reflect for Option<T> {
    const SHAPE: Shape<'static> = Shape::leaf("Option<_>", Kind::Enum);
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::{Kind, Reflect, Shape};
    use alloc::borrow::{Cow, ToOwned};
    use alloc::rc::Rc;
    #[cfg(target_has_atomic = "ptr")]
    use alloc::sync::Arc;
    use alloc::{boxed::Box, string::String, vec::Vec};

    impl Reflect for String {
        const SHAPE: Shape<'static> = Shape::leaf("String", Kind::Str);
    }

    impl<T> Reflect for Vec<T> {
        const SHAPE: Shape<'static> = Shape::leaf("Vec<_>", Kind::Sequence);
    }

    impl<T: ?Sized> Reflect for Box<T> {
        const SHAPE: Shape<'static> = Shape::leaf("Box<_>", Kind::Indirection);
    }

    impl<T: ?Sized> Reflect for Rc<T> {
        const SHAPE: Shape<'static> = Shape::leaf("Rc<_>", Kind::Indirection);
    }

    #[cfg(target_has_atomic = "ptr")]
    impl<T: ?Sized> Reflect for Arc<T> {
        const SHAPE: Shape<'static> = Shape::leaf("Arc<_>", Kind::Indirection);
    }

    impl<B: ToOwned + ?Sized> Reflect for Cow<'_, B> {
        const SHAPE: Shape<'static> = Shape::leaf("Cow<_>", Kind::Indirection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_shapes() {
        assert_eq!(bool::SHAPE, Shape::leaf("bool", Kind::Bool));
        assert_eq!(u64::SHAPE.kind(), Kind::Integer);
        assert_eq!(<str as Reflect>::SHAPE.kind(), Kind::Str);
        assert_eq!(<&str as Reflect>::SHAPE.kind(), Kind::Indirection);
        assert_eq!(<[u8; 4] as Reflect>::SHAPE.kind(), Kind::Sequence);
        assert_eq!(<(u8, bool) as Reflect>::SHAPE.kind(), Kind::Tuple);
        assert_eq!(
            <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, bool) as Reflect>::SHAPE.kind(),
            Kind::Tuple
        );
        assert_eq!(<Option<bool> as Reflect>::SHAPE.kind(), Kind::Enum);
        assert_eq!(u64::SHAPE.field_count(), 0);
    }

    #[test]
    fn hand_built_record() {
        const FIELDS: &[Field<'static>] =
            &[Field::of::<bool>("frodo"), Field::of::<bool>("sam")];
        const SHAPE: Shape<'static> = Shape::record("Hobbits", FIELDS);

        assert_eq!(SHAPE.kind(), Kind::Record);
        assert_eq!(SHAPE.field_count(), 2);
        assert_eq!(SHAPE.fields()[1].name(), "sam");
        assert_eq!(SHAPE.fields()[1].kind(), Kind::Bool);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn smart_pointer_shapes() {
        use alloc::borrow::Cow;
        use alloc::rc::Rc;
        use alloc::sync::Arc;

        assert_eq!(<Rc<bool> as Reflect>::SHAPE.kind(), Kind::Indirection);
        assert_eq!(<Arc<str> as Reflect>::SHAPE.kind(), Kind::Indirection);
        assert_eq!(<Cow<'_, str> as Reflect>::SHAPE.name(), "Cow<_>");
    }

    #[test]
    fn kind_display() {
        use alloc::string::ToString;

        assert_eq!(Kind::Str.to_string(), "string");
        assert_eq!(Kind::Record.to_string(), "record");
    }
}
