use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Baked per-vertex lighting for one object instance (type 0x32).
#[derive(Debug, Clone, PartialEq)]
pub struct VertexColor {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub data1: u32,

    pub data2: u32,

    pub data3: u32,

    pub data4: u32,

    /// One RGBA word per vertex of the tinted mesh
    pub colors: Vec<u32>,
}

impl VertexColor {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let data1 = reader.read_u32::<LittleEndian>()?;
        let color_count = reader.read_u32::<LittleEndian>()?;
        let data2 = reader.read_u32::<LittleEndian>()?;
        let data3 = reader.read_u32::<LittleEndian>()?;
        let data4 = reader.read_u32::<LittleEndian>()?;

        let mut colors = Vec::with_capacity(color_count as usize);
        for _ in 0..color_count {
            colors.push(reader.read_u32::<LittleEndian>()?);
        }

        Ok(Self {
            hash_index,
            data1,
            data2,
            data3,
            data4,
            colors,
        })
    }
}

/// Reference binding vertex colors to an object instance (type 0x33).
#[derive(Debug, Clone, PartialEq)]
pub struct VertexColorReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced vertex color fragment
    pub reference: u32,

    pub flags: u32,
}

impl VertexColorReference {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            reference: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
        })
    }
}
