//! Types for reading PFS archives
//!

use byteorder::{LittleEndian, ReadBytesExt};
use indexmap::IndexMap;
use std::io::{Cursor, Read, Seek, SeekFrom};

use binrw::BinRead;

use crate::{
    compression,
    error::{Error, FileNotFoundError, FormatError, Result},
    types::{DirectoryRecord, PfsHeader, NAME_TABLE_HASH, PFS_MAGIC},
};

/// One decoded archive entry.
///
/// Entries are fully decompressed while the archive is read; the name-table record the archive
/// uses to carry names never appears here.
#[derive(Debug, Clone, PartialEq)]
pub struct PfsEntry {
    /// Name of the file
    ///
    /// # Warnings
    ///
    /// It is dangerous to use this name directly when extracting an archive. It may contain an
    /// absolute path (`/etc/shadow`), or break out of the current directory (`../runtime`).
    /// Carelessly writing to these paths allows an attacker to craft a PFS archive that will
    /// overwrite critical files.
    pub name: Box<str>,

    /// Hash of the lowercased name, as stored in the directory
    pub hash: u32,

    /// The entry's decompressed data
    pub data: Vec<u8>,

    /// Offset of the entry's first chunk record in the source file
    pub source_offset: u32,
}

/// PFS archive reader
///
/// The entire archive is decoded up front: the directory is walked once, every entry's chunks are
/// decompressed, and names are matched to entries. The result is immutable.
///
/// ```no_run
/// fn list_pfs_contents(reader: impl std::io::Read + std::io::Seek) -> eq_pfs::error::Result<()> {
///     let pfs = eq_pfs::PfsArchive::new(reader)?;
///
///     for entry in pfs.files() {
///         println!("{}: {} bytes", entry.name, entry.data.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PfsArchive {
    files: IndexMap<Box<str>, PfsEntry>,
}

impl PfsArchive {
    /// Read a PFS archive, collecting the files it contains.
    pub fn new<R: Read + Seek>(mut reader: R) -> Result<PfsArchive> {
        Self::parse(&mut reader)
    }

    /// Number of entries contained in this archive.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether this archive contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all the file names in this archive, in data-offset order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_ref())
    }

    /// Returns an iterator over the entries, in data-offset order.
    pub fn files(&self) -> impl Iterator<Item = &PfsEntry> {
        self.files.values()
    }

    /// Total size of the files in the archive, if it can be known.
    pub fn decompressed_size(&self) -> Option<u128> {
        let mut total = 0u128;
        for file in self.files.values() {
            total = total.checked_add(file.data.len() as u128)?;
        }
        Some(total)
    }

    /// Get the index of a file entry by name, if it's present.
    #[inline(always)]
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        self.files.get_index_of(name)
    }

    /// Search for a file entry by name
    pub fn by_name(&self, name: &str) -> Result<&PfsEntry> {
        self.files
            .get(name)
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))
    }

    /// Get a contained file by index
    pub fn by_index(&self, file_number: usize) -> Result<&PfsEntry> {
        self.files
            .get_index(file_number)
            .map(|(_, entry)| entry)
            .ok_or(Error::FileNotFound(FileNotFoundError::Index(file_number)))
    }

    fn parse<R: Read + Seek>(reader: &mut R) -> Result<PfsArchive> {
        let header = PfsHeader::read(reader)?;
        if header.magic != PFS_MAGIC {
            return Err(FormatError::BadMagic {
                found: header.magic,
            }
            .into());
        }

        reader.seek(SeekFrom::Start(header.directory_offset as u64))?;
        let file_count = reader.read_u32::<LittleEndian>()?;
        if file_count == 0 {
            return Err(FormatError::EmptyArchive.into());
        }

        let mut names = Vec::new();
        let mut entries = Vec::new();

        for index in 0..file_count as usize {
            let record = DirectoryRecord::read(reader)?;
            let directory_position = reader.stream_position()?;

            reader.seek(SeekFrom::Start(record.data_offset as u64))?;
            let data = compression::inflate_chunks(reader, record.uncompressed_size).map_err(
                |source| Error::Entry {
                    index,
                    offset: record.data_offset as u64,
                    source: Box::new(source),
                },
            )?;

            if record.name_hash == NAME_TABLE_HASH {
                names = Self::parse_name_table(&data).map_err(|source| Error::Entry {
                    index,
                    offset: record.data_offset as u64,
                    source: Box::new(source),
                })?;
            } else {
                entries.push(PfsEntry {
                    name: Box::default(),
                    hash: record.name_hash,
                    data,
                    source_offset: record.data_offset,
                });
            }

            reader.seek(SeekFrom::Start(directory_position))?;
        }

        // Names correspond to entries in ascending data-offset order, which is not
        // the order the directory lists them in.
        entries.sort_by_key(|entry| entry.source_offset);

        let mut files = IndexMap::with_capacity(entries.len());
        for (index, mut entry) in entries.into_iter().enumerate() {
            let name = names
                .get(index)
                .ok_or(FormatError::MissingName { index })?;
            entry.name = name.clone();
            files.insert(entry.name.clone(), entry);
        }

        Ok(PfsArchive { files })
    }

    fn parse_name_table(data: &[u8]) -> Result<Vec<Box<str>>> {
        let mut reader = Cursor::new(data);
        let name_count = reader.read_u32::<LittleEndian>()?;

        (0..name_count)
            .map(|_| {
                let length = reader.read_u32::<LittleEndian>()?;
                let mut raw = vec![0u8; length as usize];
                reader.read_exact(&mut raw)?;
                raw.retain(|byte| *byte != 0);
                Ok(String::from_utf8_lossy(&raw).into())
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    use crate::{
        error::{Error, FormatError, Result},
        read::PfsArchive,
    };

    // A complete single-file archive: "hello.txt" containing "Hello World", plus the
    // name-table entry and footer.
    #[rustfmt::skip]
    const HELLO_ARCHIVE: &[u8] = &[
        // Header
        0x47, 0x00, 0x00, 0x00,
        0x50, 0x46, 0x53, 0x20,
        0x00, 0x00, 0x02, 0x00,
        // hello.txt chunk record (19 deflated, 11 inflated)
        0x13, 0x00, 0x00, 0x00,
        0x0B, 0x00, 0x00, 0x00,
        0x78, 0x9C, 0xF3, 0x48, 0xCD, 0xC9, 0xC9, 0x57, 0x08, 0xCF, 0x2F, 0xCA, 0x49, 0x01,
        0x00, 0x18, 0x0B, 0x04, 0x1D,
        // name table chunk record (24 deflated, 18 inflated)
        0x18, 0x00, 0x00, 0x00,
        0x12, 0x00, 0x00, 0x00,
        0x78, 0x9C, 0x63, 0x64, 0x60, 0x60, 0xE0, 0x02, 0xE2, 0x8C, 0xD4, 0x9C, 0x9C, 0x7C,
        0xBD, 0x92, 0x8A, 0x12, 0x06, 0x00, 0x16, 0x41, 0x03, 0xAE,
        // Directory
        0x02, 0x00, 0x00, 0x00,
        0xE5, 0x2B, 0xC4, 0xD0, 0x0C, 0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00,
        0xC9, 0x0A, 0x58, 0x61, 0x27, 0x00, 0x00, 0x00, 0x12, 0x00, 0x00, 0x00,
        // Footer
        0xFF, 0xFF, 0xFF, 0xFF, 0x27, 0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00,
        0x53, 0x54, 0x45, 0x56, 0x45,
        0x45, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn read_single_entry_archive() -> Result<()> {
        let pfs = PfsArchive::new(Cursor::new(HELLO_ARCHIVE))?;

        assert_eq!(pfs.len(), 1);

        let entry = pfs.by_name("hello.txt")?;
        assert_eq!(entry.data, b"Hello World");
        assert_eq!(entry.hash, 0xD0C42BE5);
        assert_eq!(entry.source_offset, 12);

        Ok(())
    }

    #[test]
    fn name_table_entry_is_hidden() -> Result<()> {
        let pfs = PfsArchive::new(Cursor::new(HELLO_ARCHIVE))?;

        assert_eq!(pfs.file_names().collect::<Vec<_>>(), vec!["hello.txt"]);
        assert!(pfs.files().all(|e| e.hash != crate::types::NAME_TABLE_HASH));

        Ok(())
    }

    #[test]
    fn read_invalid_magic() {
        #[rustfmt::skip]
        let input = [
            0x0C, 0x00, 0x00, 0x00,
            0x50, 0x46, 0x53, 0x21, // not "PFS "
            0x00, 0x00, 0x02, 0x00,
            0x01, 0x00, 0x00, 0x00,
        ];

        let result = PfsArchive::new(Cursor::new(input));
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::BadMagic { found: 0x21534650 }))
        ));
    }

    #[test]
    fn read_empty_directory() {
        #[rustfmt::skip]
        let input = [
            0x0C, 0x00, 0x00, 0x00,
            0x50, 0x46, 0x53, 0x20,
            0x00, 0x00, 0x02, 0x00,
            0x00, 0x00, 0x00, 0x00, // zero entries
        ];

        let result = PfsArchive::new(Cursor::new(input));
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::EmptyArchive))
        ));
    }

    #[test]
    fn read_truncated_directory() {
        // Directory offset points past the end of the input.
        #[rustfmt::skip]
        let input = [
            0x40, 0x00, 0x00, 0x00,
            0x50, 0x46, 0x53, 0x20,
            0x00, 0x00, 0x02, 0x00,
        ];

        let result = PfsArchive::new(Cursor::new(input));
        assert!(matches!(result, Err(Error::TruncatedInput(_))));
    }

    #[test]
    fn missing_name_is_fatal() {
        // Same archive, but the name table claims zero names.
        let mut input = HELLO_ARCHIVE.to_vec();

        // Replace the name-table chunk with an empty table (count = 0).
        #[rustfmt::skip]
        let empty_table = [
            0x0C, 0x00, 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
            0x78, 0x9C, 0x63, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x04, 0x00, 0x01,
        ];
        input.splice(39..71, empty_table.iter().copied());

        // Fix up the directory to match: it now starts 12 bytes earlier and the
        // table record inflates to 4 bytes.
        let directory_offset: u32 = 12 + 27 + 20;
        input[0..4].copy_from_slice(&directory_offset.to_le_bytes());
        let table_record = 12 + 27 + 20 + 4 + 12;
        input[table_record + 4..table_record + 8].copy_from_slice(&39u32.to_le_bytes());
        input[table_record + 8..table_record + 12].copy_from_slice(&4u32.to_le_bytes());

        let result = PfsArchive::new(Cursor::new(input));
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::MissingName { index: 0 }))
        ));
    }
}
