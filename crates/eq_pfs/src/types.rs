//! Base types for structure of PFS file.

use binrw::{BinRead, BinWrite};

/// Archive signature, the ASCII bytes "PFS ".
pub const PFS_MAGIC: u32 = 0x2053_4650;

/// Archive format version.
pub const PFS_VERSION: u32 = 0x0002_0000;

/// Reserved name hash marking the directory record that carries the name table
/// instead of file data.
pub const NAME_TABLE_HASH: u32 = 0x6158_0AC9;

/// Sentinel hash opening the footer, directly after the last directory record.
pub const FOOTER_SENTINEL: u32 = 0xFFFF_FFFF;

/// ASCII marker closing the footer.
pub const FOOTER_MARKER: &[u8; 5] = b"STEVE";

/// Fixed value written after the footer marker.
pub const FOOTER_STAMP: u32 = 69;

/// PFS file header
///
/// Defines the header of the PFS file. The directory offset comes first and points past all data
/// blocks; the signature only follows at offset 4. All data is stored in little endian format.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct PfsHeader {
    /// The offset from the beginning of the file where the directory starts
    pub directory_offset: u32,

    /// The archive signature, always [`PFS_MAGIC`]
    pub magic: u32,

    /// The archive version, always [`PFS_VERSION`]
    pub version: u32,
}

impl Default for PfsHeader {
    fn default() -> Self {
        Self {
            directory_offset: 12,
            magic: PFS_MAGIC,
            version: PFS_VERSION,
        }
    }
}

/// PFS directory record
///
/// Describes one entry in the archive. Records are stored in ascending `name_hash` order.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct DirectoryRecord {
    /// Hash of the entry's lowercased name, see [`crate::hash::filename_hash`]
    pub name_hash: u32,

    /// The offset to the entry's first chunk record from the start of the file
    pub data_offset: u32,

    /// The size of the entry's data before compression
    pub uncompressed_size: u32,
}

/// Chunk record header
///
/// Prefixes every compressed block of an entry's data.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct ChunkHeader {
    /// The size of the block after compression
    pub deflated_size: u32,

    /// The size of the block before compression
    pub inflated_size: u32,
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinRead;
    use binrw::BinWrite;
    use pretty_assertions::assert_eq;

    use crate::error::Result;
    use crate::types::DirectoryRecord;
    use crate::types::PfsHeader;

    #[test]
    fn read_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x0C, 0x00, 0x00, 0x00,
            0x50, 0x46, 0x53, 0x20,
            0x00, 0x00, 0x02, 0x00,
        ]);

        let expected = PfsHeader {
            directory_offset: 12,
            ..Default::default()
        };

        assert_eq!(PfsHeader::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn write_header() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x47, 0x00, 0x00, 0x00,
            0x50, 0x46, 0x53, 0x20,
            0x00, 0x00, 0x02, 0x00,
        ];

        let header = PfsHeader {
            directory_offset: 0x47,
            ..Default::default()
        };

        let mut actual = Vec::new();
        header.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn read_record() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0xE5, 0x2B, 0xC4, 0xD0,
            0x0C, 0x00, 0x00, 0x00,
            0x0B, 0x00, 0x00, 0x00,
        ]);

        let expected = DirectoryRecord {
            name_hash: 0xD0C42BE5,
            data_offset: 12,
            uncompressed_size: 11,
        };

        assert_eq!(DirectoryRecord::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn write_record() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            0xE5, 0x2B, 0xC4, 0xD0,
            0x0C, 0x00, 0x00, 0x00,
            0x0B, 0x00, 0x00, 0x00,
        ];

        let record = DirectoryRecord {
            name_hash: 0xD0C42BE5,
            data_offset: 12,
            uncompressed_size: 11,
        };

        let mut actual = Vec::new();
        record.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }
}
