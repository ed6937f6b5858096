//! Read-only decoder for the JVM class-file format.
//!
//! [`decode`] turns a class-file byte image into a [`ClassFile`] tree:
//! constant pool, access flags, fields, methods, and the full attribute
//! catalogue (Code, StackMapTable, annotations, Module, Record, nests,
//! permitted subclasses, debug tables). The model borrows string and code
//! bytes from the input buffer and resolves pool indices lazily; bytecode
//! inside `Code` stays a raw byte run. Corrupt input fails the whole decode
//! with the offending byte offset; only *unknown attribute names* are
//! tolerated, and preserved verbatim.

pub mod access_flags;
pub mod attributes;
pub mod class_file;
pub mod constants;
pub mod cursor;
pub mod descriptors;
pub mod errors;

pub use class_file::ClassFile;
pub use errors::{DecodeCause, DecodeError};

/// Decode a class file from its byte image.
pub fn decode(bytes: &[u8]) -> Result<ClassFile<'_>, DecodeError> {
    ClassFile::from_bytes(bytes)
}
