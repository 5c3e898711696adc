use std::io::Write;

use crate::*;

/// The 8 bytes that every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// One element of a chunk stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
  /// The bare signature, always the first record of a stream.
  Signature([u8; 8]),
  /// A full length / type / data / crc chunk.
  Chunk(RawChunk),
}
impl Record {
  /// The exact bytes this record occupied on the wire.
  #[must_use]
  pub fn to_bytes(&self) -> Vec<u8> {
    match self {
      Record::Signature(sig) => sig.to_vec(),
      Record::Chunk(chunk) => chunk.to_bytes(),
    }
  }

  /// Writes the exact bytes this record occupied on the wire.
  pub fn write_to<W: Write>(&self, w: &mut W) -> PngChunkResult<()> {
    match self {
      Record::Signature(sig) => w.write_all(sig)?,
      Record::Chunk(chunk) => chunk.write_to(w)?,
    }
    Ok(())
  }

  #[inline]
  #[must_use]
  pub fn chunk_type(&self) -> Option<ChunkType> {
    match self {
      Record::Signature(_) => None,
      Record::Chunk(chunk) => Some(chunk.chunk_type),
    }
  }
}

/// An unparsed chunk, exactly as it was read.
///
/// The declared CRC is kept verbatim. Nothing checks it unless you call
/// [`crc_matches`](Self::crc_matches).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawChunk {
  pub length: u32,
  pub chunk_type: ChunkType,
  pub data: Vec<u8>,
  pub declared_crc: u32,
}
impl core::fmt::Debug for RawChunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("length", &self.length)
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl RawChunk {
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    png_crc(self.chunk_type, &self.data)
  }

  #[inline]
  #[must_use]
  pub fn crc_matches(&self) -> bool {
    self.compute_actual_crc() == self.declared_crc
  }

  /// Size of the chunk on the wire, framing included.
  #[inline]
  #[must_use]
  pub fn wire_len(&self) -> usize {
    12 + self.data.len()
  }

  #[must_use]
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.wire_len());
    out.extend_from_slice(&self.length.to_be_bytes());
    out.extend_from_slice(self.chunk_type.as_bytes());
    out.extend_from_slice(&self.data);
    out.extend_from_slice(&self.declared_crc.to_be_bytes());
    out
  }

  /// Writes the chunk back out with its original length and CRC.
  pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
    w.write_all(&self.length.to_be_bytes())?;
    w.write_all(self.chunk_type.as_bytes())?;
    w.write_all(&self.data)?;
    w.write_all(&self.declared_crc.to_be_bytes())
  }
}
