//! Name hash used to key directory records.

use crc::{Algorithm, Crc};

/// CRC-32 variant used for directory name hashes: the standard polynomial fed
/// most-significant-bit first, zero initial value, no reflection, no final xor.
const FILENAME: Algorithm<u32> = Algorithm {
    width: 32,
    poly: 0x04c11db7,
    init: 0x00000000,
    refin: false,
    refout: false,
    xorout: 0x00000000,
    check: 0x89a1897f,
    residue: 0x00000000,
};

const FILENAME_CRC: Crc<u32> = Crc::<u32>::new(&FILENAME);

/// Hash an entry name the way the directory stores it.
///
/// The name is ASCII-lowercased and hashed including one trailing NUL, so hashes are
/// case-insensitive and match the on-disk directory for any spelling of the name.
pub fn filename_hash(name: &str) -> u32 {
    let mut bytes = name.to_ascii_lowercase().into_bytes();
    bytes.push(0);
    FILENAME_CRC.checksum(&bytes)
}

#[cfg(test)]
mod test {
    use super::filename_hash;

    #[test]
    fn known_names() {
        let checks: &[(&str, u32)] = &[
            ("1dirt.bmp", 248793860),
            ("arena.wld", 1894535152),
            ("claw.bmp", 64377157),
            ("lights.wld", 3698793545),
            ("mtfloor.bmp", 1379956244),
            ("mtinwall.bmp", 2948166389),
            ("objects.wld", 1630624230),
            ("palette.bmp", 4073721515),
            ("rrock.bmp", 1351749524),
            ("rrock2drt1.bmp", 3795167928),
            ("nexus.wld", 2852726279),
            ("blackgoo0001.dds", 1706639300),
            ("blackgoo0002.dds", 1220618316),
            ("blackgoo0010.dds", 835082925),
            ("collide.dds", 628439601),
            ("landing.dds", 2452430868),
            ("nexbannstertrim.dds", 3865848291),
            ("nexcaveroof301.dds", 1958875512),
            ("nexfloor301.dds", 2822020761),
            ("nexsteptop.dds", 3615015223),
            ("nexwall305c.dds", 53256616),
            ("pillar1odus.dds", 1317575600),
        ];

        for (name, expected) in checks {
            assert_eq!(
                filename_hash(name),
                *expected,
                "{name} hashed to the wrong value"
            );
        }
    }

    #[test]
    fn case_folded() {
        assert_eq!(filename_hash("ARENA.WLD"), filename_hash("arena.wld"));
        assert_eq!(filename_hash("Arena.Wld"), 1894535152);
    }
}
