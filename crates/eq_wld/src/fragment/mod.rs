//! Per-type fragment decoders and the dispatch over them.
//!
//! Every decoder reads its own fields and nothing more; the record loop in
//! [`crate::read`] owns the boundaries and seeks to each record's declared end
//! no matter how much of the payload a decoder consumed.

mod bsp;
mod light;
mod material;
mod mesh;
mod object;
mod particle;
mod skeleton;
mod track;
mod vertex_color;

pub use bsp::BspRegion;
pub use light::{LightInstance, LightSource, LightSourceReference};
pub use material::{Material, MaterialList};
pub use mesh::{LegacyMesh, MeshReference};
pub use object::ObjectInstance;
pub use particle::{ParticleCloud, ParticleSprite, ParticleSpriteReference};
pub use skeleton::SkeletonReference;
pub use track::{Track, TrackReference};
pub use vertex_color::{VertexColor, VertexColorReference};

use std::io::{Read, Seek};

use crate::error::Result;

/// Type id of the skeleton hierarchy fragment, which this reader refuses.
pub const SKELETON_HIERARCHY: i32 = 0x10;

/// One decoded scene fragment.
///
/// The variant set is closed: every modeled type id maps to one variant, and any other id is
/// preserved as [`Fragment::Unknown`] instead of failing the decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    SkeletonReference(SkeletonReference),
    Track(Track),
    TrackReference(TrackReference),
    ObjectInstance(ObjectInstance),
    LightSource(LightSource),
    LightSourceReference(LightSourceReference),
    BspRegion(BspRegion),
    ParticleSprite(ParticleSprite),
    ParticleSpriteReference(ParticleSpriteReference),
    LightInstance(LightInstance),
    LegacyMesh(LegacyMesh),
    MeshReference(MeshReference),
    Material(Material),
    MaterialList(MaterialList),
    VertexColor(VertexColor),
    VertexColorReference(VertexColorReference),
    ParticleCloud(ParticleCloud),
    /// A record no decoder recognizes; its payload was skipped whole.
    Unknown {
        /// Type id from the record header
        type_id: i32,
        /// Declared payload size that was skipped
        skipped: u32,
    },
}

impl Fragment {
    /// Human-readable label for the fragment's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::SkeletonReference(_) => "skeleton reference",
            Fragment::Track(_) => "track",
            Fragment::TrackReference(_) => "track reference",
            Fragment::ObjectInstance(_) => "object instance",
            Fragment::LightSource(_) => "light source",
            Fragment::LightSourceReference(_) => "light source reference",
            Fragment::BspRegion(_) => "bsp region",
            Fragment::ParticleSprite(_) => "particle sprite",
            Fragment::ParticleSpriteReference(_) => "particle sprite reference",
            Fragment::LightInstance(_) => "light instance",
            Fragment::LegacyMesh(_) => "legacy mesh",
            Fragment::MeshReference(_) => "mesh reference",
            Fragment::Material(_) => "material",
            Fragment::MaterialList(_) => "material list",
            Fragment::VertexColor(_) => "vertex color",
            Fragment::VertexColorReference(_) => "vertex color reference",
            Fragment::ParticleCloud(_) => "particle cloud",
            Fragment::Unknown { .. } => "unknown",
        }
    }
}

/// Dispatch a record's type id to its decoder.
///
/// Returns `Ok(None)` for type ids no decoder claims; the caller records those as
/// [`Fragment::Unknown`].
pub(crate) fn decode<R: Read + Seek>(type_id: i32, reader: &mut R) -> Result<Option<Fragment>> {
    let fragment = match type_id {
        0x11 => Fragment::SkeletonReference(SkeletonReference::decode(reader)?),
        0x12 => Fragment::Track(Track::decode(reader)?),
        0x13 => Fragment::TrackReference(TrackReference::decode(reader)?),
        0x15 => Fragment::ObjectInstance(ObjectInstance::decode(reader)?),
        0x1B => Fragment::LightSource(LightSource::decode(reader)?),
        0x1C => Fragment::LightSourceReference(LightSourceReference::decode(reader)?),
        0x22 => Fragment::BspRegion(BspRegion::decode(reader)?),
        0x26 => Fragment::ParticleSprite(ParticleSprite::decode(reader)?),
        0x27 => Fragment::ParticleSpriteReference(ParticleSpriteReference::decode(reader)?),
        0x28 => Fragment::LightInstance(LightInstance::decode(reader)?),
        0x2C => Fragment::LegacyMesh(LegacyMesh::decode(reader)?),
        0x2D => Fragment::MeshReference(MeshReference::decode(reader)?),
        0x30 => Fragment::Material(Material::decode(reader)?),
        0x31 => Fragment::MaterialList(MaterialList::decode(reader)?),
        0x32 => Fragment::VertexColor(VertexColor::decode(reader)?),
        0x33 => Fragment::VertexColorReference(VertexColorReference::decode(reader)?),
        0x34 => Fragment::ParticleCloud(ParticleCloud::decode(reader)?),
        _ => return Ok(None),
    };

    Ok(Some(fragment))
}
