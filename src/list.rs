use std::io::Read;

use crate::*;

/// A one line description of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSummary {
  /// Position in the stream, the signature is index 0.
  pub index: usize,
  pub chunk_type: ChunkType,
  pub length: u32,
  pub declared_crc: u32,
  pub actual_crc: u32,
}
impl ChunkSummary {
  #[inline]
  #[must_use]
  pub const fn crc_ok(&self) -> bool {
    self.declared_crc == self.actual_crc
  }
}
impl core::fmt::Display for ChunkSummary {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{:04} {} len={} crc={:08X}{}",
      self.index,
      self.chunk_type,
      self.length,
      self.declared_crc,
      if self.crc_ok() { String::new() } else { format!(" (actual {:08X})", self.actual_crc) }
    )
  }
}

/// Reads the whole stream and describes every chunk in it.
///
/// This is the only place that compares declared CRCs against the data, and a
/// mismatch is only reported, never an error.
pub fn list_chunks<R: Read>(source: R) -> PngChunkResult<Vec<ChunkSummary>> {
  let mut out = Vec::new();
  for (index, record) in open_chunk_stream(source).enumerate() {
    if let Record::Chunk(chunk) = record? {
      out.push(ChunkSummary {
        index,
        chunk_type: chunk.chunk_type,
        length: chunk.length,
        declared_crc: chunk.declared_crc,
        actual_crc: chunk.compute_actual_crc(),
      });
    }
  }
  Ok(out)
}
