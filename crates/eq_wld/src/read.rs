//! Types for reading WLD scene files
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};
use tracing::warn;

use crate::{
    error::{Error, FormatError, Result},
    fragment::{self, Fragment},
    types::{FormatVariant, StringTable, WldHeader, IDENTIFIER_LEGACY, IDENTIFIER_MODERN, WLD_MAGIC},
};

/// Record of one fragment whose type id no decoder recognized.
///
/// These accumulate on the decoded scene instead of failing it: the record loop trusts declared
/// sizes, not decoders, so an unknown record costs nothing but its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFragment {
    /// Position of the fragment in the scene
    pub index: usize,

    /// Type id from the record header
    pub type_id: i32,

    /// Declared payload size that was skipped
    pub declared_size: u32,

    /// Byte offset of the fragment's payload
    pub offset: u64,
}

/// A decoded WLD scene file
///
/// The whole scene is decoded up front and immutable afterwards. Fragments appear in record
/// order; unknown-type records are preserved in place as [`Fragment::Unknown`] and also listed
/// in [`Wld::unknown_fragments`].
///
/// ```no_run
/// fn count_regions(reader: impl std::io::Read + std::io::Seek) -> eq_wld::error::Result<()> {
///     let wld = eq_wld::Wld::new(reader)?;
///
///     println!("{} fragments, {} regions", wld.fragments.len(), wld.region_count);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Wld {
    /// Which format generation the file declares
    pub variant: FormatVariant,

    /// Fragment count from the header
    pub fragment_count: u32,

    /// BSP region count from the header
    pub region_count: u32,

    /// The shared name blob
    pub strings: StringTable,

    /// Every fragment record, in file order
    pub fragments: Vec<Fragment>,

    /// Non-fatal events for records whose type id no decoder recognized
    pub unknown_fragments: Vec<UnknownFragment>,
}

impl Wld {
    /// Read a WLD scene file.
    pub fn new<R: Read + Seek>(mut reader: R) -> Result<Wld> {
        Self::parse(&mut reader)
    }

    fn parse<R: Read + Seek>(reader: &mut R) -> Result<Wld> {
        let header = WldHeader::read(reader)?;
        if header.magic != WLD_MAGIC {
            return Err(FormatError::BadMagic {
                found: header.magic,
            }
            .into());
        }

        let variant = match header.identifier {
            IDENTIFIER_LEGACY => FormatVariant::Legacy,
            IDENTIFIER_MODERN => FormatVariant::Modern,
            other => return Err(FormatError::UnknownIdentifier { found: other }.into()),
        };

        let mut blob = vec![0u8; header.string_blob_size as usize];
        reader.read_exact(&mut blob)?;
        let strings = StringTable::new(blob);

        let mut fragments = Vec::with_capacity(header.fragment_count as usize);
        let mut unknown_fragments = Vec::new();

        for index in 0..header.fragment_count as usize {
            let declared_size = reader.read_u32::<LittleEndian>()?;
            let type_id = reader.read_i32::<LittleEndian>()?;
            let start = reader.stream_position()?;

            if type_id == fragment::SKELETON_HIERARCHY {
                return Err(Error::UnsupportedFeature {
                    index,
                    offset: start,
                });
            }

            let decoded =
                fragment::decode(type_id, reader).map_err(|source| Error::Fragment {
                    index,
                    type_id,
                    offset: start,
                    source: Box::new(source),
                })?;

            match decoded {
                Some(fragment) => fragments.push(fragment),
                None => {
                    warn!(type_id, index, declared_size, "skipping unrecognized fragment");
                    unknown_fragments.push(UnknownFragment {
                        index,
                        type_id,
                        declared_size,
                        offset: start,
                    });
                    fragments.push(Fragment::Unknown {
                        type_id,
                        skipped: declared_size,
                    });
                }
            }

            // Record boundaries come from the declared size, never from what a decoder
            // consumed. Seek unconditionally so partially modeled types stay in sync.
            reader.seek(SeekFrom::Start(start + declared_size as u64))?;
        }

        Ok(Wld {
            variant,
            fragment_count: header.fragment_count,
            region_count: header.region_count,
            strings,
            fragments,
            unknown_fragments,
        })
    }
}
