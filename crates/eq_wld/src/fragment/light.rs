use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

use crate::error::Result;

/// Light source definition (type 0x1B).
///
/// Everything past the frame count is flag-conditioned:
/// bit 0 - current frame
/// bit 1 - sleep interval
/// bit 2 - per-frame light levels
/// bit 4 - per-frame colors
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    pub frame_count: u32,

    /// Frame the light starts on, present when bit 0 of `flags` is set
    pub current_frame: Option<u32>,

    /// Milliseconds between frames, present when bit 1 of `flags` is set
    pub sleep_ms: Option<u32>,

    /// One intensity per frame, present when bit 2 of `flags` is set
    pub light_levels: Vec<f32>,

    /// One RGB triple per frame, present when bit 4 of `flags` is set
    pub colors: Vec<[f32; 3]>,
}

impl LightSource {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let frame_count = reader.read_u32::<LittleEndian>()?;

        let current_frame = if flags & 0x01 != 0 {
            Some(reader.read_u32::<LittleEndian>()?)
        } else {
            None
        };

        let sleep_ms = if flags & 0x02 != 0 {
            Some(reader.read_u32::<LittleEndian>()?)
        } else {
            None
        };

        let mut light_levels = Vec::new();
        if flags & 0x04 != 0 {
            for _ in 0..frame_count {
                light_levels.push(reader.read_f32::<LittleEndian>()?);
            }
        }

        let mut colors = Vec::new();
        if flags & 0x10 != 0 {
            for _ in 0..frame_count {
                let mut color = [0f32; 3];
                for channel in &mut color {
                    *channel = reader.read_f32::<LittleEndian>()?;
                }
                colors.push(color);
            }
        }

        Ok(Self {
            hash_index,
            flags,
            frame_count,
            current_frame,
            sleep_ms,
            light_levels,
            colors,
        })
    }
}

/// Reference to a light source definition (type 0x1C).
#[derive(Debug, Clone, PartialEq)]
pub struct LightSourceReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced light source fragment
    pub reference: u32,

    pub flags: u32,
}

impl LightSourceReference {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            reference: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// A light placed in the scene (type 0x28).
#[derive(Debug, Clone, PartialEq)]
pub struct LightInstance {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced light source reference fragment
    pub reference: u32,

    pub flags: u32,

    pub position: [f32; 3],

    pub radius: f32,
}

impl LightInstance {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let reference = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;

        let mut position = [0f32; 3];
        for value in &mut position {
            *value = reader.read_f32::<LittleEndian>()?;
        }
        let radius = reader.read_f32::<LittleEndian>()?;

        Ok(Self {
            hash_index,
            reference,
            flags,
            position,
            radius,
        })
    }
}
