use std::io::Cursor;

use pngchunk::*;
use walkdir::WalkDir;

fn tiny_apng(num_plays: u32) -> Vec<u8> {
  let mut png = PNG_SIGNATURE.to_vec();
  png.extend(encode_chunk(ChunkType::IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]).unwrap());
  png.extend(encode_chunk(ChunkType::acTL, &acTL::new(5, num_plays).to_payload()).unwrap());
  png.extend(encode_chunk(ChunkType::tEXt, b"Comment\0hello").unwrap());
  png.extend(encode_chunk(ChunkType::IDAT, &[0x78, 0x9C, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01]).unwrap());
  png.extend(encode_chunk(ChunkType::IEND, &[]).unwrap());
  png
}

#[test]
fn test_ChunkReader_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in open_chunk_stream(Cursor::new(&v)) {
      //
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let results: Vec<_> = open_chunk_stream(Cursor::new(&v)).collect();
    assert!(matches!(results[..], [Err(PngChunkError::NoPngSignature)]) || v[..8] == PNG_SIGNATURE);
  }
  // and neither should random data after a good signature.
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    let results: Vec<_> = open_chunk_stream(Cursor::new(&v)).collect();
    assert!(results.iter().filter(|r| r.is_err()).count() <= 1);
  }
}

#[test]
fn test_rewrite_loop_count_round_trip() {
  let png = tiny_apng(0);
  let mut once = Vec::new();
  let report = rewrite_loop_count(Cursor::new(&png), &mut once, 12).unwrap();
  assert_eq!(report.matches, 1);
  assert_eq!(once, tiny_apng(12));

  let mut twice = Vec::new();
  rewrite_loop_count(Cursor::new(&once), &mut twice, 0).unwrap();
  assert_eq!(twice, png);
}

#[test]
fn test_rewrite_loop_count_non_apng_is_copied() {
  let mut png = PNG_SIGNATURE.to_vec();
  png.extend(encode_chunk(ChunkType::IHDR, &[0; 13]).unwrap());
  png.extend(encode_chunk(ChunkType::IEND, &[]).unwrap());
  for count in [0, 1, u32::MAX] {
    let mut out = Vec::new();
    let report = rewrite_loop_count(Cursor::new(&png), &mut out, count).unwrap();
    assert_eq!(report.matches, 0);
    assert_eq!(report.warnings, [RewriteWarning::NotAnimated]);
    assert_eq!(out, png);
  }
}

#[test]
fn test_rewrite_loop_count_bad_signature_writes_nothing() {
  let mut png = tiny_apng(1);
  png[1] = b'p';
  let mut out = Vec::new();
  let err = rewrite_loop_count(Cursor::new(&png), &mut out, 3).unwrap_err();
  assert!(matches!(err, PngChunkError::NoPngSignature));
  assert!(out.is_empty());
}

#[test]
fn test_split_to_dir() {
  let dir = super::temp_dir("split");
  let png = tiny_apng(2);
  let paths = split_to_dir(Cursor::new(&png), &dir).unwrap();
  let names: Vec<_> =
    paths.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
  assert_eq!(
    names,
    ["0000.bin", "0001-IHDR.bin", "0002-acTL.bin", "0003-tEXt.bin", "0004-IDAT.bin", "0005-IEND.bin"]
  );
  let joined: Vec<u8> = paths.iter().flat_map(|p| std::fs::read(p).unwrap()).collect();
  assert_eq!(joined, png);
  assert_eq!(std::fs::read(&paths[0]).unwrap(), PNG_SIGNATURE);

  // a second split into the same place is refused before reading anything
  let mut source = Cursor::new(&png);
  let err = split_to_dir(&mut source, &dir).unwrap_err();
  assert!(matches!(err, PngChunkError::DestinationNotEmpty { .. }));
  assert!(err.is_resource_error());
  assert_eq!(source.position(), 0);

  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_split_to_dir_creates_nested_dir() {
  let root = super::temp_dir("nested");
  let dir = root.join("a").join("b");
  let paths = split_to_dir(Cursor::new(&tiny_apng(0)), &dir).unwrap();
  assert_eq!(paths.len(), 6);
  assert!(paths.iter().all(|p| p.starts_with(&dir)));
  std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_split_to_dir_truncated_keeps_earlier_files() {
  let dir = super::temp_dir("truncated");
  let png = tiny_apng(0);
  let err = split_to_dir(Cursor::new(&png[..png.len() - 5]), &dir).unwrap_err();
  assert!(matches!(err, PngChunkError::UnexpectedEndOfInput { field: ChunkField::ChunkType }));
  assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 5);
  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_list_chunks() {
  let summaries = list_chunks(Cursor::new(&tiny_apng(4))).unwrap();
  let types: Vec<String> = summaries.iter().map(|s| s.chunk_type.to_string()).collect();
  assert_eq!(types, ["IHDR", "acTL", "tEXt", "IDAT", "IEND"]);
  assert!(summaries.iter().all(ChunkSummary::crc_ok));
  assert_eq!(summaries[1].to_string(), format!("0002 acTL len=8 crc={:08X}", summaries[1].declared_crc));
}
