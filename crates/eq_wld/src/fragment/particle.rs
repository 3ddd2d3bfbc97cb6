use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use crate::error::{Result, SizeMismatchError};

/// Particle sprite definition (type 0x26).
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSprite {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub flags: u32,

    /// Index of the texture fragment the sprite is blitted from
    pub sprite_reference: u32,
}

impl ParticleSprite {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash_index: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
            sprite_reference: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// Reference to a particle sprite definition (type 0x27).
///
/// The payload ends in a constant the original tooling always writes as 8; anything else means
/// the record is not what it claims to be.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpriteReference {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// Index of the referenced particle sprite fragment
    pub reference: u32,
}

impl ParticleSpriteReference {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let reference = reader.read_u32::<LittleEndian>()?;

        let constant = reader.read_u32::<LittleEndian>()?;
        if constant != 8 {
            return Err(SizeMismatchError::Constant {
                field: "particle sprite reference trailer",
                expected: 8,
                found: constant,
            }
            .into());
        }

        Ok(Self {
            hash_index,
            reference,
        })
    }
}

/// Particle emitter definition (type 0x34).
///
/// The spawn block between the emitter settings and the sprite reference is fixed-width;
/// reserved words inside it are skipped rather than modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCloud {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    pub setting_one: u32,

    pub setting_two: u32,

    /// Emitter shape: 1 sphere, 3 plane, 4 circle
    pub movement: u32,

    pub flags: u32,

    pub simultaneous_particles: u32,

    pub spawn_radius: f32,

    pub spawn_angle: f32,

    pub spawn_lifespan: u32,

    pub spawn_velocity: f32,

    pub spawn_normal: [f32; 3],

    pub spawn_rate: u32,

    pub spawn_scale: f32,

    /// Tint in the engine's BGRA encoding
    pub color: u32,

    /// Index of the referenced particle sprite reference fragment
    pub sprite_reference: u32,
}

impl ParticleCloud {
    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let setting_one = reader.read_u32::<LittleEndian>()?;
        let setting_two = reader.read_u32::<LittleEndian>()?;
        let movement = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let simultaneous_particles = reader.read_u32::<LittleEndian>()?;

        // Five reserved words.
        reader.seek(SeekFrom::Current(20))?;

        let spawn_radius = reader.read_f32::<LittleEndian>()?;
        let spawn_angle = reader.read_f32::<LittleEndian>()?;
        let spawn_lifespan = reader.read_u32::<LittleEndian>()?;
        let spawn_velocity = reader.read_f32::<LittleEndian>()?;

        let mut spawn_normal = [0f32; 3];
        for value in &mut spawn_normal {
            *value = reader.read_f32::<LittleEndian>()?;
        }

        let spawn_rate = reader.read_u32::<LittleEndian>()?;
        let spawn_scale = reader.read_f32::<LittleEndian>()?;
        let color = reader.read_u32::<LittleEndian>()?;
        let sprite_reference = reader.read_u32::<LittleEndian>()?;

        Ok(Self {
            hash_index,
            setting_one,
            setting_two,
            movement,
            flags,
            simultaneous_particles,
            spawn_radius,
            spawn_angle,
            spawn_lifespan,
            spawn_velocity,
            spawn_normal,
            spawn_rate,
            spawn_scale,
            color,
            sprite_reference,
        })
    }
}
