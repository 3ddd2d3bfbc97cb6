use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// First-generation mesh definition (type 0x2C).
///
/// Only the counts are modeled; the vertex, texture-coordinate, normal, color, and polygon
/// arrays that follow are left to the record loop's resync.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyMesh {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    pub vertex_count: u32,

    pub tex_coord_count: u32,

    pub normal_count: u32,

    pub color_count: u32,

    pub polygon_count: u32,
}

impl LegacyMesh {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
            vertex_count: reader.read_u32::<LittleEndian>()?,
            tex_coord_count: reader.read_u32::<LittleEndian>()?,
            normal_count: reader.read_u32::<LittleEndian>()?,
            color_count: reader.read_u32::<LittleEndian>()?,
            polygon_count: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// Reference binding a mesh definition into the scene (type 0x2D).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced mesh fragment
    pub reference: u32,

    pub flags: u32,
}

impl MeshReference {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            reference: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
        })
    }
}
