use std::io::Write;

use crate::*;

/// Builds the wire bytes of a chunk: length, type, data, then the CRC of the
/// type and data.
///
/// ## Failure
/// * [`PayloadTooLarge`](PngChunkError::PayloadTooLarge) if `payload` has more
///   than `u32::MAX` bytes.
pub fn encode_chunk(chunk_type: ChunkType, payload: &[u8]) -> PngChunkResult<Vec<u8>> {
  let mut out = Vec::with_capacity(12 + payload.len());
  write_chunk(&mut out, chunk_type, payload)?;
  Ok(out)
}

/// Like [`encode_chunk`], but writes straight into `w`.
///
/// The length is checked before anything is written.
pub fn write_chunk<W: Write>(
  w: &mut W, chunk_type: ChunkType, payload: &[u8],
) -> PngChunkResult<()> {
  let length: u32 =
    payload.len().try_into().map_err(|_| PngChunkError::PayloadTooLarge { len: payload.len() })?;
  w.write_all(&length.to_be_bytes())?;
  w.write_all(chunk_type.as_bytes())?;
  w.write_all(payload)?;
  w.write_all(&png_crc(chunk_type, payload).to_be_bytes())?;
  Ok(())
}
