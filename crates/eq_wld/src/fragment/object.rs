use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Placement of an object in the scene (type 0x15).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInstance {
    /// Byte offset of the placed object's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    /// Index of the bounding-sphere fragment, zero when absent
    pub sphere_reference: u32,

    pub position: [f32; 3],

    /// Euler rotation in the engine's degree encoding
    pub rotation: [f32; 3],

    pub scale: [f32; 3],

    /// Index of a vertex-color fragment tinting this instance, zero when absent
    pub vertex_color_reference: u32,
}

impl ObjectInstance {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let sphere_reference = reader.read_u32::<LittleEndian>()?;

        let mut position = [0f32; 3];
        for value in &mut position {
            *value = reader.read_f32::<LittleEndian>()?;
        }
        let mut rotation = [0f32; 3];
        for value in &mut rotation {
            *value = reader.read_f32::<LittleEndian>()?;
        }
        let mut scale = [0f32; 3];
        for value in &mut scale {
            *value = reader.read_f32::<LittleEndian>()?;
        }

        let vertex_color_reference = reader.read_u32::<LittleEndian>()?;

        Ok(Self {
            hash_index,
            flags,
            sphere_reference,
            position,
            rotation,
            scale,
            vertex_color_reference,
        })
    }
}
