//! Structural validation of record shapes.

use crate::error::{FieldCountError, FieldTypeError, ShapeError, ValidationError};
use crate::shape::{Kind, Reflect, Shape};
use crate::word::WORD_BITS;

/// Checks that `shape` can be encoded as named flags.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. the shape must be a record ([`ShapeError`]),
/// 2. it may have at most [`WORD_BITS`] fields ([`FieldCountError`]),
/// 3. every field must be `bool` ([`FieldTypeError`], naming the first
///    offending field).
///
/// Only the shape is inspected, never a value, so the result for a given
/// type never changes. Being `const`, it also works in `const` contexts.
///
/// ```
/// use named_flags::{validate, Field, Kind, Shape, ValidationError};
///
/// const FIELDS: &[Field<'static>] = &[
///     Field::new("frodo", "bool", Kind::Bool),
///     Field::new("sam", "String", Kind::Str),
/// ];
///
/// let err = validate(&Shape::record("Hobbits", FIELDS)).unwrap_err();
/// match err {
///     ValidationError::FieldType(err) => assert_eq!(err.field, "sam"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub const fn validate<'a>(shape: &Shape<'a>) -> Result<(), ValidationError<'a>> {
    if !matches!(shape.kind(), Kind::Record) {
        return Err(ValidationError::Shape(ShapeError {
            type_name: shape.name(),
            kind: shape.kind(),
        }));
    }

    let fields = shape.fields();
    if fields.len() > WORD_BITS {
        return Err(ValidationError::FieldCount(FieldCountError {
            count: fields.len(),
            max: WORD_BITS,
        }));
    }

    let mut i = 0;
    while i < fields.len() {
        let field = &fields[i];
        if !matches!(field.kind(), Kind::Bool) {
            return Err(ValidationError::FieldType(FieldTypeError {
                field: field.name(),
                ty: field.ty(),
            }));
        }
        i += 1;
    }

    Ok(())
}

/// Validates the static shape of `T`.
///
/// ```
/// use named_flags::{validate_type, ValidationError};
///
/// assert!(matches!(validate_type::<bool>(), Err(ValidationError::Shape(_))));
/// ```
#[inline]
pub const fn validate_type<T: Reflect + ?Sized>() -> Result<(), ValidationError<'static>> {
    validate(&T::SHAPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Field;

    const BOOL: Field<'static> = Field::new("flag", "bool", Kind::Bool);

    #[test]
    fn empty_record_is_valid() {
        assert_eq!(validate(&Shape::record("Empty", &[])), Ok(()));
    }

    #[test]
    fn full_word_is_valid() {
        let fields = [BOOL; WORD_BITS];
        assert_eq!(validate(&Shape::record("Full", &fields)), Ok(()));
    }

    #[test]
    fn one_past_word_is_rejected() {
        let fields = [BOOL; WORD_BITS + 1];
        assert_eq!(
            validate(&Shape::record("Overfull", &fields)),
            Err(ValidationError::FieldCount(FieldCountError {
                count: WORD_BITS + 1,
                max: WORD_BITS,
            }))
        );
    }

    #[test]
    fn count_checked_before_field_types() {
        let fields = [Field::new("n", "u8", Kind::Integer); WORD_BITS + 1];
        assert!(matches!(
            validate(&Shape::record("Overfull", &fields)),
            Err(ValidationError::FieldCount(_))
        ));
    }

    #[test]
    fn first_bad_field_reported() {
        let fields = [
            BOOL,
            Field::new("count", "u32", Kind::Integer),
            Field::new("name", "String", Kind::Str),
        ];
        assert_eq!(
            validate(&Shape::record("Mixed", &fields)),
            Err(ValidationError::FieldType(FieldTypeError {
                field: "count",
                ty: "u32",
            }))
        );
    }

    #[test]
    fn nested_record_field_rejected() {
        let fields = [BOOL, Field::new("inner", "Inner", Kind::Record)];
        assert!(matches!(
            validate(&Shape::record("Outer", &fields)),
            Err(ValidationError::FieldType(FieldTypeError {
                field: "inner",
                ..
            }))
        ));
    }

    #[test]
    fn leaf_shapes_rejected() {
        let shapes = [
            bool::SHAPE,
            i32::SHAPE,
            <str as Reflect>::SHAPE,
            <[u8] as Reflect>::SHAPE,
        ];
        for shape in shapes {
            assert_eq!(
                validate(&shape),
                Err(ValidationError::Shape(ShapeError {
                    type_name: shape.name(),
                    kind: shape.kind(),
                }))
            );
        }
    }

    #[test]
    fn runs_in_const_context() {
        const OK: bool = validate(&Shape::record("Pair", &[BOOL, BOOL])).is_ok();
        const NOT_OK: bool = validate_type::<u8>().is_err();
        assert!(OK);
        assert!(NOT_OK);
    }
}
