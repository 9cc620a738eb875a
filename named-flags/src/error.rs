//! Error types for structural validation.

use core::fmt;

use crate::shape::Kind;

/// Type is not a struct with named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError<'a> {
    /// Name of the rejected type.
    pub type_name: &'a str,
    /// What the type actually is.
    pub kind: Kind,
}

impl fmt::Display for ShapeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a record, got {} `{}`",
            self.kind, self.type_name
        )
    }
}

/// Record has more fields than a word has bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountError {
    /// Number of fields the record declares.
    pub count: usize,
    /// Maximum allowed, i.e. [`WORD_BITS`](crate::WORD_BITS).
    pub max: usize,
}

impl fmt::Display for FieldCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record can not have more than {} fields: has {}",
            self.max, self.count
        )
    }
}

/// A record field is not `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeError<'a> {
    /// Name of the offending field.
    pub field: &'a str,
    /// Name of the field's actual type.
    pub ty: &'a str,
}

impl fmt::Display for FieldTypeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record can only have bool fields: field '{}' is `{}`",
            self.field, self.ty
        )
    }
}

/// Why a type can not be encoded as named flags.
///
/// Each variant is a static property of the type, so retrying never helps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError<'a> {
    /// Not a record.
    Shape(ShapeError<'a>),
    /// Too many fields.
    FieldCount(FieldCountError),
    /// A field is not `bool`.
    FieldType(FieldTypeError<'a>),
}

impl fmt::Display for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Shape(err) => err.fmt(f),
            ValidationError::FieldCount(err) => err.fmt(f),
            ValidationError::FieldType(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for ShapeError<'_> {}
impl core::error::Error for FieldCountError {}
impl core::error::Error for FieldTypeError<'_> {}
impl core::error::Error for ValidationError<'_> {}

impl<'a> From<ShapeError<'a>> for ValidationError<'a> {
    fn from(err: ShapeError<'a>) -> Self {
        ValidationError::Shape(err)
    }
}

impl From<FieldCountError> for ValidationError<'_> {
    fn from(err: FieldCountError) -> Self {
        ValidationError::FieldCount(err)
    }
}

impl<'a> From<FieldTypeError<'a>> for ValidationError<'a> {
    fn from(err: FieldTypeError<'a>) -> Self {
        ValidationError::FieldType(err)
    }
}
