//! Named flags: structs of `bool` fields packed into a native word.
//!
//! `named-flags` converts between a struct whose fields are all `bool` and
//! a [`Word`] (`usize`) bitmask, so a set of options can be human readable
//! in code and compact on disk, on the wire, or in a flag register.
//!
//! Field `i` in declaration order maps to bit `i`. That mapping is the
//! whole encoding, and changing field order changes the meaning of
//! previously encoded integers.
//!
//! # Example
//!
//! ```
//! use named_flags::{NamedFlags, decode, encode};
//!
//! #[derive(NamedFlags, Debug, Clone, Copy, PartialEq, Eq)]
//! struct Fellowship {
//!     frodo: bool, // bit 0
//!     sam: bool,   // bit 1
//!     gandalf: bool,
//! }
//!
//! let f = Fellowship { frodo: true, sam: false, gandalf: true };
//! let bits = encode(&f).unwrap();
//! assert_eq!(bits, 0b101);
//!
//! // Bits past the last field are ignored.
//! assert_eq!(decode::<Fellowship>(bits | 0b1000).unwrap(), f);
//! ```
//!
//! # Validation
//!
//! A type is eligible when it is a record (struct with named fields), has at
//! most [`WORD_BITS`] fields, and every field is `bool`. `#[derive(NamedFlags)]`
//! enforces this at compile time. [`validate`] checks any [`Shape`] at runtime,
//! including shapes produced by `#[derive(Reflect)]` or assembled by hand,
//! and every codec call runs it before touching bits.
//!
//! ```
//! use named_flags::{Reflect, ValidationError, validate_type};
//!
//! #[derive(Reflect)]
//! struct Mixed {
//!     frodo: bool,
//!     sam: String,
//! }
//!
//! match validate_type::<Mixed>() {
//!     Err(ValidationError::FieldType(err)) => {
//!         assert_eq!(err.field, "sam");
//!         assert_eq!(err.ty, "String");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Features
//!
//! - `derive` (default): the `NamedFlags` and `Reflect` derive macros.
//! - `alloc` (default): [`Reflect`] for `String`, `Vec`, `Box`, `Rc`, `Arc`
//!   and `Cow`.
//! - `log`: log rejected and completed conversions through the `log` facade.

#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

// Lets derive output, which names `::named_flags`, resolve inside this crate.
#[cfg(feature = "derive")]
extern crate self as named_flags;

mod bit;
mod codec;
mod error;
mod record;
mod shape;
mod validate;
mod word;

pub use bit::Bit;
pub use codec::{decode, decode_into, encode, mask};
pub use error::{FieldCountError, FieldTypeError, ShapeError, ValidationError};
pub use record::FlagRecord;
pub use shape::{Field, Kind, Reflect, Shape};
pub use validate::{validate, validate_type};
pub use word::{WORD_BITS, Word, low_mask};

#[cfg(feature = "derive")]
pub use named_flags_derive::{NamedFlags, Reflect};
