//! Types for writing PFS archives
//!

use binrw::BinWrite;
use bon::Builder;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Seek, Write};

use tracing::instrument;

use crate::compression::{self, Chunk};
use crate::error::{FormatError, Result};
use crate::hash::filename_hash;
use crate::types::{
    ChunkHeader, DirectoryRecord, PfsHeader, FOOTER_MARKER, FOOTER_SENTINEL, FOOTER_STAMP,
    NAME_TABLE_HASH,
};

/// Options for how the PFS file should be written
#[derive(Debug, Clone, Copy, Builder)]
pub struct PfsWriterOptions {
    /// The hash function used to key directory records.
    ///
    /// Must match the reader's hash bit for bit or the written names will not line up with the
    /// directory. Injected as a plain function value so the writer holds no global state.
    #[builder(default = filename_hash)]
    pub hash: fn(&str) -> u32,
}

struct PendingEntry {
    name: Box<str>,
    data: Vec<u8>,
}

struct SealedEntry {
    name: Box<str>,
    hash: u32,
    uncompressed_size: u32,
    chunks: Vec<Chunk>,
    file_pointer: u32,
}

/// PFS archive generator
///
/// Entries are buffered in memory; the whole archive is laid out and written by
/// [`PfsWriter::finish`], since the header's directory offset depends on every entry's compressed
/// size.
///
/// ```
/// # fn doit() -> eq_pfs::error::Result<()>
/// # {
/// # use eq_pfs::PfsWriter;
/// use std::io::Write;
/// use eq_pfs::write::PfsWriterOptions;
///
/// // We use a buffer here, though you'd normally use a `File`
/// let mut pfs = PfsWriter::new(
///     std::io::Cursor::new(Vec::new()),
///     PfsWriterOptions::builder().build(),
/// );
///
/// pfs.start_file("hello_world.txt")?;
/// pfs.write(b"Hello, World!")?;
///
/// // Apply the changes you've made.
/// pfs.finish()?;
///
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct PfsWriter<W: Write + Seek> {
    inner: W,
    options: PfsWriterOptions,
    writing_to_file: bool,
    entries: Vec<PendingEntry>,
}

impl<W: Write + Seek> PfsWriter<W> {
    /// Initializes the archive.
    ///
    /// Before writing to this object, the [`PfsWriter::start_file`] function should be called.
    pub fn new(inner: W, options: PfsWriterOptions) -> PfsWriter<W> {
        PfsWriter {
            inner,
            options,
            writing_to_file: false,
            entries: Vec::new(),
        }
    }

    /// Returns true if a file is currently open for writing.
    pub const fn is_writing_file(&self) -> bool {
        self.writing_to_file
    }

    /// Start a new file entry. Data written afterwards belongs to it.
    #[instrument(skip(self, name))]
    pub fn start_file(&mut self, name: impl ToString) -> Result<()> {
        self.entries.push(PendingEntry {
            name: name.to_string().into(),
            data: Vec::new(),
        });
        self.writing_to_file = true;

        Ok(())
    }

    /// Compress every entry, lay the archive out, and write it.
    ///
    /// This will return the writer, but one should normally not append any data to the end of
    /// the file.
    #[instrument(skip(self), err)]
    pub fn finish(mut self) -> Result<W> {
        let mut sealed = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            sealed.push(SealedEntry {
                hash: (self.options.hash)(&entry.name),
                uncompressed_size: entry.data.len() as u32,
                chunks: compression::deflate_chunks(&entry.data)?,
                name: entry.name,
                file_pointer: 0,
            });
        }

        // Physical layout is hash order. Decode re-sorts by data offset, which lands on
        // this same order, so names assigned positionally line up again.
        sealed.sort_by_key(|entry| entry.hash);
        Self::check_hashes(&sealed)?;

        let name_table = Self::build_name_table(&sealed);
        let table_chunks = compression::deflate_chunks(&name_table)?;

        let mut directory_offset = 12;
        for entry in &sealed {
            directory_offset += compression::stored_size(&entry.chunks);
        }
        directory_offset += compression::stored_size(&table_chunks);

        let header = PfsHeader {
            directory_offset,
            ..Default::default()
        };
        header.write(&mut self.inner)?;

        for entry in &mut sealed {
            entry.file_pointer = self.inner.stream_position()? as u32;
            Self::write_chunks(&mut self.inner, &entry.chunks)?;
        }

        let table_pointer = self.inner.stream_position()? as u32;
        Self::write_chunks(&mut self.inner, &table_chunks)?;

        self.inner
            .write_u32::<LittleEndian>(sealed.len() as u32 + 1)?;
        for entry in &sealed {
            DirectoryRecord {
                name_hash: entry.hash,
                data_offset: entry.file_pointer,
                uncompressed_size: entry.uncompressed_size,
            }
            .write(&mut self.inner)?;
        }
        DirectoryRecord {
            name_hash: NAME_TABLE_HASH,
            data_offset: table_pointer,
            uncompressed_size: name_table.len() as u32,
        }
        .write(&mut self.inner)?;

        self.inner.write_u32::<LittleEndian>(FOOTER_SENTINEL)?;
        self.inner.write_u32::<LittleEndian>(table_pointer)?;
        let total: u32 = sealed.iter().map(|e| e.uncompressed_size).sum();
        self.inner.write_u32::<LittleEndian>(total)?;
        self.inner.write_all(FOOTER_MARKER)?;
        self.inner.write_u32::<LittleEndian>(FOOTER_STAMP)?;

        Ok(self.inner)
    }

    /// Name table payload: a count, then each name length-prefixed and NUL-terminated,
    /// in the same order the entries are laid out.
    fn build_name_table(entries: &[SealedEntry]) -> Vec<u8> {
        let mut table = Vec::new();
        table.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        for entry in entries {
            table.extend_from_slice(&(entry.name.len() as u32 + 1).to_le_bytes());
            table.extend_from_slice(entry.name.as_bytes());
            table.push(0);
        }
        table
    }

    /// Every name hash must be unique, and none may collide with the values the
    /// format reserves. `entries` must already be sorted by hash.
    fn check_hashes(entries: &[SealedEntry]) -> Result<()> {
        for entry in entries {
            if entry.hash == NAME_TABLE_HASH || entry.hash == FOOTER_SENTINEL {
                return Err(FormatError::ReservedHash {
                    name: entry.name.to_string(),
                    hash: entry.hash,
                }
                .into());
            }
        }

        for pair in entries.windows(2) {
            if pair[0].hash == pair[1].hash {
                return Err(FormatError::DuplicateHash {
                    first: pair[0].name.to_string(),
                    second: pair[1].name.to_string(),
                    hash: pair[0].hash,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Write an entry's chunk records. An entry with no chunks still gets one empty
    /// record, so the directory-offset arithmetic stays honest.
    fn write_chunks(writer: &mut W, chunks: &[Chunk]) -> Result<()> {
        if chunks.is_empty() {
            ChunkHeader::default().write(writer)?;
            return Ok(());
        }

        for chunk in chunks {
            chunk.header().write(writer)?;
            writer.write_all(&chunk.data)?;
        }

        Ok(())
    }
}

impl<W: Write + Seek> Write for PfsWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.writing_to_file {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "No file has been started",
            ));
        }
        let entry = self
            .entries
            .last_mut()
            .expect("an entry is always present while writing_to_file is set");
        entry.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::error::{Error, FormatError, Result};
    use crate::types::NAME_TABLE_HASH;
    use crate::write::{PfsWriter, PfsWriterOptions};
    use std::io::{Cursor, Write};

    #[traced_test]
    #[test]
    fn single_entry_layout() -> Result<()> {
        let mut writer = PfsWriter::new(
            Cursor::new(Vec::new()),
            PfsWriterOptions::builder().build(),
        );
        writer.start_file("hello.txt")?;
        writer.write_all(b"Hello World")?;

        let result = writer.finish()?.into_inner();

        // Header fields.
        assert_eq!(&result[4..8], b"PFS ");
        assert_eq!(&result[8..12], &[0x00, 0x00, 0x02, 0x00]);

        // The directory offset lands on the entry count.
        let directory_offset = u32::from_le_bytes(result[0..4].try_into().unwrap()) as usize;
        let count = u32::from_le_bytes(
            result[directory_offset..directory_offset + 4]
                .try_into()
                .unwrap(),
        );
        assert_eq!(count, 2); // one file plus the name table

        // Last directory record is the name table.
        let table_record = directory_offset + 4 + 12;
        let table_hash =
            u32::from_le_bytes(result[table_record..table_record + 4].try_into().unwrap());
        assert_eq!(table_hash, NAME_TABLE_HASH);

        // Footer closes the file.
        assert_eq!(&result[result.len() - 9..result.len() - 4], b"STEVE");
        assert_eq!(&result[result.len() - 4..], &[0x45, 0x00, 0x00, 0x00]);

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_without_start_is_rejected() {
        let mut writer = PfsWriter::new(
            Cursor::new(Vec::new()),
            PfsWriterOptions::builder().build(),
        );

        assert!(!writer.is_writing_file());
        assert!(writer.write(b"orphan bytes").is_err());
    }

    #[traced_test]
    #[test]
    fn reserved_hash_is_rejected() -> Result<()> {
        // Force the injected hash to collide with the name-table value.
        let mut writer = PfsWriter::new(
            Cursor::new(Vec::new()),
            PfsWriterOptions::builder().hash(|_| NAME_TABLE_HASH).build(),
        );
        writer.start_file("innocent.bmp")?;

        let result = writer.finish();
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::ReservedHash { .. }))
        ));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn duplicate_hash_is_rejected() -> Result<()> {
        let mut writer = PfsWriter::new(
            Cursor::new(Vec::new()),
            PfsWriterOptions::builder().hash(|_| 7).build(),
        );
        writer.start_file("first.bmp")?;
        writer.start_file("second.bmp")?;

        let result = writer.finish();
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::DuplicateHash { .. }))
        ));

        Ok(())
    }
}
