use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Animation track definition (type 0x12).
///
/// Only the header fields are modeled; the per-frame transform data that follows is skipped by
/// the record loop's resync.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    /// Number of transform frames in the track
    pub frame_count: u32,
}

impl Track {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
            frame_count: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// Reference binding a track definition into a skeleton (type 0x13).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced track fragment
    pub reference: u32,

    pub flags: u32,

    /// Milliseconds per frame, present when bit 0 of `flags` is set
    pub frame_ms: Option<u32>,
}

impl TrackReference {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let reference = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;

        let frame_ms = if flags & 1 != 0 {
            Some(reader.read_u32::<LittleEndian>()?)
        } else {
            None
        };

        Ok(Self {
            hash_index,
            reference,
            flags,
            frame_ms,
        })
    }
}
