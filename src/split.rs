//! Writing each record of a stream out to its own file.

use std::{
  fs::{self, File},
  io::{BufWriter, Read, Write},
  path::{Path, PathBuf},
};

use crate::*;

/// The file name used for the record at `index`.
///
/// The index is zero padded to 4 digits, and chunks also get their sanitized
/// type: `0000.bin` for the signature, then `0001-IHDR.bin` and so on.
#[must_use]
pub fn chunk_file_name(index: usize, record: &Record) -> String {
  match record {
    Record::Signature(_) => format!("{index:04}.bin"),
    Record::Chunk(chunk) => format!("{index:04}-{}.bin", chunk.chunk_type.sanitized()),
  }
}

/// Splits a PNG stream into one file per record inside `dir`.
///
/// `dir` is created if it doesn't exist. If it exists it has to be empty, and
/// that's checked before anything is read from `source`.
///
/// Returns the paths written, in stream order. On a format error the files
/// for the records before the bad one are left in place.
pub fn split_to_dir<R: Read>(source: R, dir: &Path) -> PngChunkResult<Vec<PathBuf>> {
  prepare_destination(dir)?;
  let mut written = Vec::new();
  for (index, record) in open_chunk_stream(source).enumerate() {
    let record = record?;
    let path = dir.join(chunk_file_name(index, &record));
    let mut w = BufWriter::new(File::create(&path)?);
    record.write_to(&mut w)?;
    w.flush()?;
    tracing::debug!(path = %path.display(), "wrote record");
    written.push(path);
  }
  Ok(written)
}

fn prepare_destination(dir: &Path) -> PngChunkResult<()> {
  if dir.exists() {
    if fs::read_dir(dir)?.next().is_some() {
      return Err(PngChunkError::DestinationNotEmpty { path: dir.to_path_buf() });
    }
  } else {
    fs::create_dir_all(dir)?;
  }
  Ok(())
}
