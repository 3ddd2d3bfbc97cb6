//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Wrapper for [`std::io::Error`], except end-of-input which becomes
    /// [`Error::TruncatedInput`]
    #[error(transparent)]
    IOError(std::io::Error),

    /// Wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(binrw::Error),

    /// input ended before the scene structure was complete
    #[error("input ended before the scene structure was complete")]
    TruncatedInput(#[source] std::io::Error),

    /// scene structure is malformed
    #[error("scene file is malformed")]
    Format(#[from] FormatError),

    /// a field the format fixes to a constant held something else
    #[error("size mismatch")]
    SizeMismatch(#[from] SizeMismatchError),

    /// the scene uses a fragment type this reader refuses to guess at
    #[error("fragment {index} at offset 0x{offset:x} is a skeleton hierarchy, which this reader does not support")]
    UnsupportedFeature {
        /// Position of the fragment in the scene
        index: usize,
        /// Byte offset of the fragment's payload
        offset: u64,
    },

    /// positional wrapper for failures while decoding one fragment
    #[error("fragment {index} (type 0x{type_id:02x}) at offset 0x{offset:x}")]
    Fragment {
        /// Position of the fragment in the scene
        index: usize,
        /// Type id from the record header
        type_id: i32,
        /// Byte offset of the fragment's payload
        offset: u64,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

/// Error type describing malformed scene structure
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    /// wrong scene signature
    #[error("bad signature: expected 0x54503d02, found 0x{found:08x}")]
    BadMagic {
        /// Value found where the signature was expected
        found: u32,
    },

    /// unrecognized format identifier
    #[error("unknown format identifier 0x{found:08x}")]
    UnknownIdentifier {
        /// Value found where the identifier was expected
        found: u32,
    },
}

/// Error type describing format-mandated constants that did not hold
#[derive(Error, Diagnostic, Debug)]
pub enum SizeMismatchError {
    /// a constant field held the wrong value
    #[error("{field} must be {expected}, found {found}")]
    Constant {
        /// Which field failed
        field: &'static str,
        /// The mandated value
        expected: u32,
        /// The value read
        found: u32,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::TruncatedInput(err),
            _ => Error::IOError(err),
        }
    }
}

impl From<binrw::Error> for Error {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Io(io) => io.into(),
            other => Error::BinRWError(other),
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
