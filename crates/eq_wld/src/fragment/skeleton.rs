use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Reference to a skeleton hierarchy (type 0x11).
///
/// The hierarchy itself is type 0x10, which this reader refuses; the reference still appears in
/// otherwise-supported scenes and decodes fine.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced skeleton fragment
    pub reference: u32,

    pub flags: u32,

    /// Milliseconds per animation frame, present when bit 0 of `flags` is set
    pub frame_ms: Option<u32>,
}

impl SkeletonReference {
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
