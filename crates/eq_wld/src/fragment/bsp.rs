use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

/// One leaf region of the scene's BSP tree (type 0x22).
///
/// Most of the payload is navigation data this reader skips over: nearby-region lists, the
/// encoded visibility set, and padding the original tooling emits. What survives decoding is
/// the region's flags and, for regions that carry geometry, the mesh reference at the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct BspRegion {
    /// Byte offset of the fragment's name in the string blob
    pub hash_index: u32,

    /// 0x181 - regions with polygons
    /// 0x81 - regions without
    /// Bit 5 - visibility set is words
    /// Bit 7 - visibility set is bytes
    pub flags: u32,

    /// Index of the region's mesh fragment, present only when `flags` is exactly 0x181
    pub mesh_reference: Option<u32>,
}

impl BspRegion {
    /// Whether this region carries polygon geometry.
    pub fn has_polygons(&self) -> bool {
        self.flags == 0x181
    }

    pub(crate) fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let hash_index = reader.read_u32::<LittleEndian>()?;
        let flags = reader.read_u32::<LittleEndian>()?;
        let has_polygons = flags == 0x181;

        let _unknown1 = reader.read_u32::<LittleEndian>()?;
        let data1_size = reader.read_u32::<LittleEndian>()?;
        let data2_size = reader.read_u32::<LittleEndian>()?;
        let _unknown2 = reader.read_u32::<LittleEndian>()?;
        let data3_size = reader.read_u32::<LittleEndian>()?;
        // data4 entries are not walked; the record loop's resync covers whatever
        // they occupy past the fields read here.
        let _data4_size = reader.read_u32::<LittleEndian>()?;
        let _unknown3 = reader.read_u32::<LittleEndian>()?;
        let data5_size = reader.read_u32::<LittleEndian>()?;
        let _data6_size = reader.read_u32::<LittleEndian>()?;

        reader.seek(SeekFrom::Current(12 * (data1_size as i64 + data2_size as i64)))?;

        for _ in 0..data3_size {
            let _flags = reader.read_u32::<LittleEndian>()?;
            let count = reader.read_u32::<LittleEndian>()?;
            reader.seek(SeekFrom::Current(count as i64 * 4))?;
        }

        for _ in 0..data5_size {
            reader.seek(SeekFrom::Current(7 * 4))?;
        }

        let visibility_size = reader.read_u16::<LittleEndian>()?;
        reader.seek(SeekFrom::Current(visibility_size as i64))?;

        let _bytes = reader.read_u32::<LittleEndian>()?;
        reader.seek(SeekFrom::Current(16))?;

        let mesh_reference = if has_polygons {
            Some(reader.read_u32::<LittleEndian>()?)
        } else {
            None
        };

        Ok(Self {
            hash_index,
            flags,
            mesh_reference,
        })
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::BspRegion;
    use crate::error::Result;

    fn minimal_payload(flags: u32, mesh_reference: Option<u32>) -> Vec<u8> {
        let mut out = Vec::new();
        for word in [9u32, flags, 0, 0, 0, 0, 0, 0, 0, 0, 0] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&0u16.to_le_bytes()); // empty visibility set
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&[0u8; 16]);
        if let Some(reference) = mesh_reference {
            out.extend_from_slice(&reference.to_le_bytes());
        }
        out
    }

    #[test]
    fn polygon_region_carries_mesh_reference() -> Result<()> {
        let payload = minimal_payload(0x181, Some(42));
        let region = BspRegion::decode(&mut Cursor::new(payload))?;

        assert!(region.has_polygons());
        assert_eq!(region.mesh_reference, Some(42));

        Ok(())
    }

    #[test]
    fn bare_region_has_no_mesh_reference() -> Result<()> {
        let payload = minimal_payload(0x81, None);
        let region = BspRegion::decode(&mut Cursor::new(payload))?;

        assert!(!region.has_polygons());
        assert_eq!(region.mesh_reference, None);

        Ok(())
    }
}
