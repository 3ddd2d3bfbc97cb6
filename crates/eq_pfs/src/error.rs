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

    /// input ended before the archive structure was complete
    #[error("input ended before the archive structure was complete")]
    TruncatedInput(#[source] std::io::Error),

    /// archive structure is malformed
    #[error("archive is malformed")]
    Format(#[from] FormatError),

    /// a declared size does not match the data
    #[error("size mismatch")]
    SizeMismatch(#[from] SizeMismatchError),

    /// unable to find requested file
    #[error("unable to find requested file")]
    FileNotFound(#[from] FileNotFoundError),

    /// positional wrapper for failures while handling one entry
    #[error("entry {index} at offset 0x{offset:x}")]
    Entry {
        /// Directory position of the failing entry
        index: usize,
        /// Data offset of the failing entry
        offset: u64,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

/// Error type describing malformed archive structure
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    /// wrong archive signature
    #[error("bad signature: expected 0x20534650, found 0x{found:08x}")]
    BadMagic {
        /// Value found where the signature was expected
        found: u32,
    },

    /// the directory holds no entries
    #[error("directory holds no entries")]
    EmptyArchive,

    /// the name table is shorter than the entry list
    #[error("entry {index} has no name-table entry")]
    MissingName {
        /// Offset-order position of the nameless entry
        index: usize,
    },

    /// two entry names hash to the same value
    #[error("entries {first:?} and {second:?} share the name hash 0x{hash:08x}")]
    DuplicateHash {
        /// Name of the first colliding entry
        first: String,
        /// Name of the second colliding entry
        second: String,
        /// The shared hash value
        hash: u32,
    },

    /// an entry name hashes to a value the format reserves
    #[error("name {name:?} hashes to the reserved value 0x{hash:08x}")]
    ReservedHash {
        /// The offending entry name
        name: String,
        /// The reserved value it collides with
        hash: u32,
    },
}

/// Error type describing declared sizes that do not match the data
#[derive(Error, Diagnostic, Debug)]
pub enum SizeMismatchError {
    /// a chunk inflated to a different length than declared
    #[error("chunk declared {declared} inflated bytes but produced {actual}")]
    ChunkInflate {
        /// Inflated size from the chunk header
        declared: u32,
        /// Bytes the zlib stream actually produced
        actual: u32,
    },

    /// chunks accumulated past the entry's declared size
    #[error("entry declared {declared} bytes but chunks accumulated to {actual}")]
    EntryOverrun {
        /// Uncompressed size from the directory record
        declared: u32,
        /// Accumulated inflated length
        actual: u32,
    },
}

/// Error type to provide further information when a file has not been found
#[derive(Error, Diagnostic, Debug)]
#[error("unable to find requested file")]
pub enum FileNotFoundError {
    /// at index {0}
    #[error("at index {0}")]
    Index(usize),

    /// by name {0}
    #[error("by name {0}")]
    Name(String),
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
