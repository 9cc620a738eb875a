//! Conversions between flag records and words.
//!
//! Every call validates the record type before touching any bit, so a
//! hand-written [`FlagRecord`] impl with an ineligible shape is rejected at
//! runtime instead of producing a corrupt word.

use crate::bit::Bit;
use crate::error::ValidationError;
use crate::record::FlagRecord;
use crate::validate::validate;
use crate::word::{Word, low_mask};

#[inline]
fn check<R: FlagRecord>() -> Result<(), ValidationError<'static>> {
    let res = validate(&R::SHAPE);
    #[cfg(feature = "log")]
    if let Err(err) = &res {
        log::debug!("rejected `{}` for flag encoding: {}", R::SHAPE.name(), err);
    }
    res
}

/// Builds a record from `bits`.
///
/// Field `i` is `true` iff bit `i` of `bits` is set. Bits at or above the
/// record's field count are ignored, so decoding never fails because of the
/// value of `bits`; it only fails when `R` itself is not a valid flag record.
///
/// ```
/// use named_flags::{NamedFlags, decode};
///
/// #[derive(NamedFlags, Debug, PartialEq)]
/// struct Hobbits {
///     frodo: bool,
///     sam: bool,
/// }
///
/// let h: Hobbits = decode(0b1).unwrap();
/// assert_eq!(h, Hobbits { frodo: true, sam: false });
/// ```
pub fn decode<R: FlagRecord>(bits: Word) -> Result<R, ValidationError<'static>> {
    check::<R>()?;
    let mut record = R::cleared();
    write_fields(&mut record, bits);
    Ok(record)
}

/// Overwrites every field of `record` from `bits`.
///
/// Same rules as [`decode`]. On error `record` is left untouched.
pub fn decode_into<R: FlagRecord>(
    record: &mut R,
    bits: Word,
) -> Result<(), ValidationError<'static>> {
    check::<R>()?;
    write_fields(record, bits);
    Ok(())
}

fn write_fields<R: FlagRecord>(record: &mut R, bits: Word) {
    let count = R::field_count();
    for i in 0..count {
        record.set_flag(i, Bit::new(i).is_set(bits));
    }
    #[cfg(feature = "log")]
    log::trace!(
        "decoded {:#x} into `{}`",
        bits & low_mask(count),
        R::SHAPE.name()
    );
}

/// Packs `record` into a word, field `i` into bit `i`.
///
/// ```
/// use named_flags::{NamedFlags, encode};
///
/// #[derive(NamedFlags)]
/// struct Hobbits {
///     frodo: bool,
///     sam: bool,
/// }
///
/// assert_eq!(encode(&Hobbits { frodo: true, sam: true }).unwrap(), 3);
/// ```
pub fn encode<R: FlagRecord>(record: &R) -> Result<Word, ValidationError<'static>> {
    check::<R>()?;
    let mut bits: Word = 0;
    for i in 0..R::field_count() {
        bits = Bit::new(i).write(bits, record.flag(i));
    }
    #[cfg(feature = "log")]
    log::trace!("encoded `{}` as {:#x}", R::SHAPE.name(), bits);
    Ok(bits)
}

/// Bits a record type can represent: the low `field_count` bits.
///
/// `encode(&decode::<R>(b)?)? == b & mask::<R>()?` for every `b`.
pub fn mask<R: FlagRecord>() -> Result<Word, ValidationError<'static>> {
    check::<R>()?;
    Ok(low_mask(R::field_count()))
}
