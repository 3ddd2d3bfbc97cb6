//! This library handles reading from and creating **PFS** archives used by a legacy 3D engine.
//!
//! # PFS Archive Format Documentation
//!
//! This crate provides utilities to read and extract data from the **PFS** archive format, a
//! custom binary container that stores named game assets within a single file. PFS archives are
//! typically identified with the `.s3d` extension.
//!
//! ## File Structure
//!
//! A PFS file consists of a header, a run of chunk-compressed data blocks, a directory block, and
//! a footer. Unusually, the directory comes *after* the data it describes, and the header's first
//! field points at it.
//!
//! | Offset (bytes) | Field            | Description                                           |
//! |----------------|------------------|-------------------------------------------------------|
//! | 0x0000         | Directory Offset | 4 bytes: Offset to the directory block                |
//! | 0x0004         | Magic number     | 4 bytes: 0x20534650 ("PFS ")                          |
//! | 0x0008         | Version          | 4 bytes: Fixed value 0x00020000                       |
//!
//! ### Data Blocks
//!
//! Each entry's data is split into blocks of at most 8192 bytes, and every block is compressed
//! independently with zlib. A compressed block is stored as a chunk record:
//!
//! | Field          | Description                                  |
//! |----------------|----------------------------------------------|
//! | Deflated Size  | 4 bytes: Size of the compressed block        |
//! | Inflated Size  | 4 bytes: Size of the block when decompressed |
//! | Data           | Deflated Size bytes of zlib stream           |
//!
//! Chunk records for one entry are stored back to back. There is no count field; a reader knows
//! it is done when the inflated sizes accumulate to the entry's uncompressed size from the
//! directory.
//!
//! ### Directory Block
//!
//! The directory starts with a 4-byte entry count, followed by one record per entry:
//!
//! | Field             | Description                                          |
//! |-------------------|------------------------------------------------------|
//! | Name Hash         | 4 bytes: CRC-32 hash of the entry's lowercased name  |
//! | Data Offset       | 4 bytes: Offset to the entry's first chunk record    |
//! | Uncompressed Size | 4 bytes: Size of the entry's data when decompressed  |
//!
//! One record carries the reserved hash `0x61580AC9`: its data is not a file but the name table,
//! a 4-byte name count followed by length-prefixed, NUL-terminated names. Names correspond to the
//! remaining entries in ascending data-offset order. The directory records themselves are laid
//! out in ascending name-hash order, so the two orderings are distinct views of one entry set.
//!
//! ### Footer
//!
//! After the directory: a 4-byte sentinel `0xFFFFFFFF`, the name table's data offset, the sum of
//! all uncompressed entry sizes, the ASCII marker `"STEVE"`, and a 4-byte trailer value.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.s3d` (also seen as `.eqg`, `.pfs`, `.pak`)
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod compression;
pub mod error;
pub mod hash;
pub mod read;
pub mod types;
pub mod write;

pub use hash::filename_hash;
pub use read::PfsArchive;
pub use write::PfsWriter;
