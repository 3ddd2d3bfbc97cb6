//! Base types for structure of WLD scene files.

use binrw::BinRead;

/// Scene signature.
pub const WLD_MAGIC: u32 = 0x5450_3D02;

/// Identifier value marking the legacy format generation.
pub const IDENTIFIER_LEGACY: u32 = 0x0001_5500;

/// Identifier value marking the modern format generation.
pub const IDENTIFIER_MODERN: u32 = 0x1000_C800;

/// WLD file header
///
/// All data is stored in little endian format. The two reserved fields carry values the engine
/// never reads back; they are retained so the header struct matches the on-disk layout.
#[derive(BinRead, Debug, Copy, Clone, PartialEq)]
#[br(little)]
pub struct WldHeader {
    /// The scene signature, always [`WLD_MAGIC`]
    pub magic: u32,

    /// Selects the format generation, [`IDENTIFIER_LEGACY`] or [`IDENTIFIER_MODERN`]
    pub identifier: u32,

    /// The number of fragment records that follow the string blob
    pub fragment_count: u32,

    /// The number of BSP regions in the scene
    pub region_count: u32,

    /// Reserved
    pub reserved_a: u32,

    /// The size of the shared string blob in bytes
    pub string_blob_size: u32,

    /// Reserved
    pub reserved_b: u32,
}

/// Which generation of the format a scene file was written with.
///
/// The two generations share the container layout; the difference matters to fragment payloads
/// (coordinate scaling, a handful of field meanings) and to which fragment types appear at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatVariant {
    /// Identifier 0x00015500
    Legacy,
    /// Identifier 0x1000C800
    Modern,
}

/// The scene's shared name blob.
///
/// Names are stored back to back, each terminated by a NUL byte. Fragments address a name by the
/// byte offset at which it starts, so the blob is kept verbatim and tokenized on NUL separators
/// without stripping them; collapsing the NULs first would destroy the offsets every hash-index
/// field relies on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringTable {
    blob: Vec<u8>,
}

impl StringTable {
    pub(crate) fn new(blob: Vec<u8>) -> Self {
        Self { blob }
    }

    /// The name starting at byte `offset`, up to its NUL terminator.
    ///
    /// Returns `None` when the offset lies outside the blob or the run is not valid UTF-8.
    /// Offsets into the middle of a stored name return the tail of that name, which is exactly
    /// what the on-disk addressing does.
    pub fn name_at(&self, offset: u32) -> Option<&str> {
        let start = offset as usize;
        if start >= self.blob.len() {
            return None;
        }
        let rest = &self.blob[start..];
        let end = rest.iter().position(|byte| *byte == 0).unwrap_or(rest.len());
        std::str::from_utf8(&rest[..end]).ok()
    }

    /// Size of the blob in bytes.
    pub fn len(&self) -> usize {
        self.blob.len()
    }

    /// Whether the scene carries no names at all.
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinRead;
    use pretty_assertions::assert_eq;

    use crate::error::Result;
    use crate::types::{StringTable, WldHeader, IDENTIFIER_LEGACY, WLD_MAGIC};

    #[test]
    fn read_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x02, 0x3D, 0x50, 0x54,
            0x00, 0x55, 0x01, 0x00,
            0x05, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);

        let expected = WldHeader {
            magic: WLD_MAGIC,
            identifier: IDENTIFIER_LEGACY,
            fragment_count: 5,
            region_count: 2,
            reserved_a: 0,
            string_blob_size: 16,
            reserved_b: 0,
        };

        assert_eq!(WldHeader::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn names_keep_their_offsets() {
        let table = StringTable::new(b"\0lamp.wld\0torch\0".to_vec());

        assert_eq!(table.name_at(0), Some(""));
        assert_eq!(table.name_at(1), Some("lamp.wld"));
        assert_eq!(table.name_at(10), Some("torch"));

        // Mid-name offsets address the tail, as on disk.
        assert_eq!(table.name_at(6), Some("wld"));
    }

    #[test]
    fn out_of_range_offset() {
        let table = StringTable::new(b"lamp\0".to_vec());

        assert_eq!(table.name_at(5), None);
        assert_eq!(table.name_at(400), None);
    }

    #[test]
    fn unterminated_tail_is_still_a_name() {
        let table = StringTable::new(b"lamp".to_vec());

        assert_eq!(table.name_at(0), Some("lamp"));
    }
}
