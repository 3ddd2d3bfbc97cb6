//! Chunked zlib compression and decompression handling.

use std::io::{Read, Seek, Write};

use binrw::BinRead;
use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use tracing::instrument;

use crate::error::{Error, Result, SizeMismatchError};
use crate::types::ChunkHeader;

/// Largest uncompressed block size. Entry data is split at this boundary and every block is
/// compressed on its own, with no dictionary carried between blocks.
pub const CHUNK_SIZE: usize = 8192;

/// One independently compressed block of an entry's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Size of [`Chunk::data`]
    pub deflated_size: u32,

    /// Size of the block before compression
    pub inflated_size: u32,

    /// The compressed bytes
    pub data: Vec<u8>,
}

impl Chunk {
    /// The chunk record header matching this chunk.
    pub fn header(&self) -> ChunkHeader {
        ChunkHeader {
            deflated_size: self.deflated_size,
            inflated_size: self.inflated_size,
        }
    }
}

/// Compress `input` into chunk records of at most [`CHUNK_SIZE`] uncompressed bytes each.
///
/// Empty input produces no chunks. The inflated sizes of the returned chunks always sum to
/// `input.len()` exactly.
#[instrument(skip(input), fields(size = input.len()), err)]
pub fn deflate_chunks(input: &[u8]) -> Result<Vec<Chunk>> {
    input
        .chunks(CHUNK_SIZE)
        .map(|block| {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(block)?;
            let data = encoder.finish()?;
            Ok(Chunk {
                deflated_size: data.len() as u32,
                inflated_size: block.len() as u32,
                data,
            })
        })
        .collect()
}

/// Read chunk records from `reader` until exactly `uncompressed_size` bytes have been inflated.
///
/// Fails with a size mismatch if a chunk inflates to a length other than its header declares, or
/// if the accumulated data would run past `uncompressed_size`. Running out of input first is a
/// truncation error.
#[instrument(skip(reader), err)]
pub fn inflate_chunks<R: Read + Seek>(reader: &mut R, uncompressed_size: u32) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(uncompressed_size as usize);

    while (out.len() as u32) < uncompressed_size {
        let header = ChunkHeader::read(reader)?;

        let mut compressed = vec![0u8; header.deflated_size as usize];
        reader.read_exact(&mut compressed)?;

        let before = out.len();
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut out)?;
        let inflated = (out.len() - before) as u32;

        if inflated != header.inflated_size {
            return Err(SizeMismatchError::ChunkInflate {
                declared: header.inflated_size,
                actual: inflated,
            }
            .into());
        }

        if out.len() as u32 > uncompressed_size {
            return Err(SizeMismatchError::EntryOverrun {
                declared: uncompressed_size,
                actual: out.len() as u32,
            }
            .into());
        }
    }

    Ok(out)
}

/// Bytes the chunk records for `chunks` occupy on disk, headers included.
///
/// A chunkless entry still gets one empty chunk record written, so it counts 8 header bytes.
pub(crate) fn stored_size(chunks: &[Chunk]) -> u32 {
    let headers = 8 * (chunks.len().max(1) as u32);
    headers + chunks.iter().map(|c| c.deflated_size).sum::<u32>()
}
