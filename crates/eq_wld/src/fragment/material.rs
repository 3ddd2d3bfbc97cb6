use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Material definition (type 0x30).
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    /// Render method word; the low bits select the shading path
    pub render_method: u32,

    /// Flat pen color in the engine's BGRA encoding
    pub rgb_pen: u32,

    pub brightness: f32,

    pub scaled_ambient: f32,

    /// Index of the texture reference fragment, zero when untextured
    pub sprite_reference: u32,

    /// Extra parameter pair, present when bit 1 of `flags` is set
    pub pair: Option<(u32, f32)>,
}

impl Material {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let render_method = reader.read_u32::<LittleEndian>()?;
        let rgb_pen = reader.read_u32::<LittleEndian>()?;
        let brightness = reader.read_f32::<LittleEndian>()?;
        let scaled_ambient = reader.read_f32::<LittleEndian>()?;
        let sprite_reference = reader.read_u32::<LittleEndian>()?;

        let pair = if flags & 0x02 != 0 {
            Some((
                reader.read_u32::<LittleEndian>()?,
                reader.read_f32::<LittleEndian>()?,
            ))
        } else {
            None
        };

        Ok(Self {
            hash_index,
            flags,
            render_method,
            rgb_pen,
            brightness,
            scaled_ambient,
            sprite_reference,
            pair,
        })
    }
}

/// Ordered list of the materials a mesh draws with (type 0x31).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialList {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    /// Indices of the material fragments, in draw order
    pub references: Vec<u32>,
}

impl MaterialList {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let count = reader.read_u32::<LittleEndian>()?;

        let mut references = Vec::with_capacity(count as usize);
        for _ in 0..count {
            references.push(reader.read_u32::<LittleEndian>()?);
        }

        Ok(Self {
            hash_index,
            flags,
            references,
        })
    }
}
