use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};

use eq_pfs::error::Result;
use eq_pfs::write::PfsWriterOptions;
use eq_pfs::{filename_hash, PfsArchive, PfsWriter};
use tracing_test::traced_test;

fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + seed as usize) as u8).collect()
}

fn write_archive(entries: &[(&str, Vec<u8>)]) -> Result<Cursor<Vec<u8>>> {
    let mut writer = PfsWriter::new(
        Cursor::new(Vec::new()),
        PfsWriterOptions::builder().build(),
    );

    for (name, data) in entries {
        writer.start_file(*name)?;
        writer.write_all(data)?;
    }

    let mut out = writer.finish()?;
    out.rewind()?;
    Ok(out)
}

#[traced_test]
#[test]
fn entry_set_survives_round_trip() -> Result<()> {
    // Sizes deliberately cover one block exactly, a non-multiple of the block
    // size, several blocks, and an empty entry.
    let entries: Vec<(&str, Vec<u8>)> = vec![
        ("arena.wld", pattern(8192, 3)),
        ("1dirt.bmp", pattern(8193, 5)),
        ("claw.bmp", pattern(20000, 7)),
        ("palette.bmp", pattern(1, 11)),
        ("notes.txt", Vec::new()),
    ];

    let pfs = PfsArchive::new(write_archive(&entries)?)?;
    assert_eq!(pfs.len(), entries.len());

    let expected: BTreeMap<&str, &[u8]> = entries
        .iter()
        .map(|(name, data)| (*name, data.as_slice()))
        .collect();
    let actual: BTreeMap<&str, &[u8]> = pfs
        .files()
        .map(|entry| (entry.name.as_ref(), entry.data.as_slice()))
        .collect();

    assert_eq!(actual, expected);

    Ok(())
}

#[traced_test]
#[test]
fn decoded_entries_carry_directory_hashes() -> Result<()> {
    let entries: Vec<(&str, Vec<u8>)> = vec![
        ("lights.wld", pattern(100, 1)),
        ("objects.wld", pattern(200, 2)),
    ];

    let pfs = PfsArchive::new(write_archive(&entries)?)?;

    for (name, _) in &entries {
        assert_eq!(pfs.by_name(name)?.hash, filename_hash(name));
    }

    Ok(())
}

#[traced_test]
#[test]
fn decode_orders_by_offset() -> Result<()> {
    let entries: Vec<(&str, Vec<u8>)> = vec![
        ("zzz.bmp", pattern(64, 9)),
        ("aaa.bmp", pattern(64, 4)),
        ("mmm.bmp", pattern(64, 6)),
    ];

    let pfs = PfsArchive::new(write_archive(&entries)?)?;

    let offsets: Vec<u32> = pfs.files().map(|e| e.source_offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);

    // Physical layout is hash order, a different ordering than insertion.
    let hashes: Vec<u32> = pfs.files().map(|e| e.hash).collect();
    let mut hashes_sorted = hashes.clone();
    hashes_sorted.sort_unstable();
    assert_eq!(hashes, hashes_sorted);

    Ok(())
}

#[traced_test]
#[test]
fn decompressed_size_sums_entries() -> Result<()> {
    let entries: Vec<(&str, Vec<u8>)> = vec![
        ("collide.dds", pattern(123, 1)),
        ("landing.dds", pattern(456, 2)),
    ];

    let pfs = PfsArchive::new(write_archive(&entries)?)?;
    assert_eq!(pfs.decompressed_size(), Some(579));

    Ok(())
}
