use crc32fast::Hasher;

use crate::ChunkType;

/// CRC-32 (ISO-HDLC) of a chunk's type tag followed by its payload.
///
/// This is the value stored in the trailer of every PNG chunk.
#[inline]
#[must_use]
pub fn png_crc(chunk_type: ChunkType, data: &[u8]) -> u32 {
  let mut hasher = Hasher::new();
  hasher.update(chunk_type.as_bytes());
  hasher.update(data);
  hasher.finalize()
}
