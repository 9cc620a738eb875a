//! The capability a type needs to be encoded as named flags.

use crate::shape::Reflect;

/// A struct of named `bool` fields whose declaration order is its bit order.
///
/// Usually derived with `#[derive(NamedFlags)]`, which also checks at compile
/// time that the struct only has `bool` fields and fits in a
/// [`Word`](crate::Word). Hand-written impls must keep [`Reflect::SHAPE`]
/// and the accessors in agreement: field `i` of the shape is the field read
/// by `flag(i)` and written by `set_flag(i, ..)`.
///
/// Field order is part of the encoding. Reordering fields changes the
/// meaning of every integer encoded before the change.
///
/// # Deriving
///
/// Fields are checked by type, not by spelling, so aliases of `bool` work:
///
/// ```
/// use named_flags::{NamedFlags, encode};
///
/// type Enabled = bool;
///
/// #[derive(NamedFlags)]
/// struct Features {
///     tls: Enabled,
///     gzip: core::primitive::bool,
/// }
///
/// assert_eq!(encode(&Features { tls: true, gzip: false }), Ok(1));
/// ```
///
/// Anything that is not a struct of named `bool` fields fails to compile.
/// Enums:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// enum Side {
///     Buy,
///     Sell,
/// }
/// ```
///
/// Tuple structs:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// struct Pair(bool, bool);
/// ```
///
/// Unit structs:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// struct Marker;
/// ```
///
/// Generic structs:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// struct Tagged<T> {
///     flag: bool,
///     tag: core::marker::PhantomData<T>,
/// }
/// ```
///
/// Non-`bool` fields:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// struct Hobbits {
///     frodo: bool,
///     sam: String,
/// }
/// ```
///
/// More fields than a [`Word`](crate::Word) has bits:
///
/// ```compile_fail
/// use named_flags::NamedFlags;
///
/// #[derive(NamedFlags)]
/// struct TooWide {
///     b0: bool, b1: bool, b2: bool, b3: bool, b4: bool, b5: bool, b6: bool, b7: bool,
///     b8: bool, b9: bool, b10: bool, b11: bool, b12: bool, b13: bool, b14: bool, b15: bool,
///     b16: bool, b17: bool, b18: bool, b19: bool, b20: bool, b21: bool, b22: bool, b23: bool,
///     b24: bool, b25: bool, b26: bool, b27: bool, b28: bool, b29: bool, b30: bool, b31: bool,
///     b32: bool, b33: bool, b34: bool, b35: bool, b36: bool, b37: bool, b38: bool, b39: bool,
///     b40: bool, b41: bool, b42: bool, b43: bool, b44: bool, b45: bool, b46: bool, b47: bool,
///     b48: bool, b49: bool, b50: bool, b51: bool, b52: bool, b53: bool, b54: bool, b55: bool,
///     b56: bool, b57: bool, b58: bool, b59: bool, b60: bool, b61: bool, b62: bool, b63: bool,
///     b64: bool,
/// }
/// ```
pub trait FlagRecord: Reflect + Sized {
    /// Value with every field `false`.
    fn cleared() -> Self;

    /// Value of the field at declaration index `index`.
    ///
    /// Returns `false` for indices past the last field.
    fn flag(&self, index: usize) -> bool;

    /// Overwrites the field at declaration index `index`.
    ///
    /// Indices past the last field are ignored.
    fn set_flag(&mut self, index: usize, value: bool);

    /// Number of declared fields.
    #[inline]
    fn field_count() -> usize {
        Self::SHAPE.field_count()
    }

    /// Name of the field at declaration index `index`.
    #[inline]
    fn field_name(index: usize) -> Option<&'static str> {
        Self::SHAPE.fields().get(index).map(|field| field.name())
    }
}
