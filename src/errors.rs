use std::error::Error;
use std::fmt::Display;

/// What went wrong while decoding.
///
/// Unknown attribute *names* are not represented here: they are preserved as
/// [`Unknown`](crate::attributes::Unknown) attributes instead of failing the
/// decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeCause {
    /// A read ran past the end of the buffer or of a bounded sub-region.
    UnexpectedEof,
    /// The first four bytes were not `0xCAFEBABE`.
    BadMagic(u32),
    /// A constant-pool entry's tag byte is not one of the defined values.
    InvalidConstantTag { tag: u8, slot: u16 },
    /// A pool index was zero, out of range, or named the phantom slot after
    /// a `Long`/`Double`.
    InvalidIndex(u16),
    /// A pool index resolved, but not to the kind of entry required here
    /// (e.g. an attribute name index that is not `Utf8`).
    WrongKind(u16),
    /// An `element_value` tag outside `B C D F I J S Z s e c @ [`.
    InvalidElementValueTag(u8),
    /// A `frame_type` byte in the reserved range 128..=246.
    InvalidStackMapFrameType(u8),
    /// A `VerificationTypeInfo` tag outside 0..=8.
    InvalidVerificationTag(u8),
    /// A type-annotation `target_type` byte with no defined `target_info`.
    InvalidTargetType(u8),
    /// A recognized attribute whose body did not decode within its declared
    /// length, or left declared bytes unread.
    MalformedAttribute(String),
    /// A `Deprecated` attribute declaring a non-zero length.
    DeprecatedNonZeroLength,
}

impl Display for DecodeCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeCause::UnexpectedEof => write!(f, "UnexpectedEof"),
            DecodeCause::BadMagic(magic) => write!(f, "BadMagic: {magic:#010X}"),
            DecodeCause::InvalidConstantTag { tag, slot } => {
                write!(f, "InvalidConstantTag: {tag} in slot {slot}")
            }
            DecodeCause::InvalidIndex(index) => write!(f, "InvalidIndex: {index}"),
            DecodeCause::WrongKind(index) => write!(f, "WrongKind: {index}"),
            DecodeCause::InvalidElementValueTag(tag) => {
                write!(f, "InvalidElementValueTag: {tag}")
            }
            DecodeCause::InvalidStackMapFrameType(tag) => {
                write!(f, "InvalidStackMapFrameType: {tag}")
            }
            DecodeCause::InvalidVerificationTag(tag) => {
                write!(f, "InvalidVerificationTag: {tag}")
            }
            DecodeCause::InvalidTargetType(tag) => write!(f, "InvalidTargetType: {tag:#04X}"),
            DecodeCause::MalformedAttribute(name) => write!(f, "MalformedAttribute: {name}"),
            DecodeCause::DeprecatedNonZeroLength => write!(f, "DeprecatedNonZeroLength"),
        }
    }
}

impl Error for DecodeCause {}

/// A decode failure plus the byte offset (into the input buffer) at which
/// the failing read began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeError {
    cause: DecodeCause,
    offset: usize,
}

impl DecodeError {
    pub fn new(cause: DecodeCause, offset: usize) -> DecodeError {
        DecodeError { cause, offset }
    }

    pub fn cause(&self) -> &DecodeCause {
        &self.cause
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Error for DecodeError {}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "decode error at byte {:#06X}: {}", self.offset, self.cause)
    }
}
