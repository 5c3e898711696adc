//! Pulls records off of a byte source one at a time.

use std::io::{ErrorKind, Read};

use crate::*;

/// The part of a record being read when the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkField {
  Signature,
  Length,
  ChunkType,
  Data,
  Crc,
}
impl core::fmt::Display for ChunkField {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      ChunkField::Signature => "signature",
      ChunkField::Length => "chunk length",
      ChunkField::ChunkType => "chunk type",
      ChunkField::Data => "chunk data",
      ChunkField::Crc => "chunk crc",
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
  Signature,
  Chunks,
  Done,
}

/// An iterator that produces successive [`Record`]s from a PNG byte source.
///
/// * The first item is always the [`Record::Signature`], and a bad signature
///   is an error before any chunk is read.
/// * After that you get one [`Record::Chunk`] per call.
/// * The iterator stops after yielding an `IEND` chunk. Any bytes after it
///   are never read.
/// * Running out of bytes anywhere before `IEND` is an
///   [`UnexpectedEndOfInput`](PngChunkError::UnexpectedEndOfInput) error.
/// * After any error the iterator is finished.
///
/// Declared CRC values are passed through without being checked.
#[derive(Debug)]
pub struct ChunkReader<R> {
  source: R,
  state: ReaderState,
}
impl<R: Read> ChunkReader<R> {
  #[inline]
  #[must_use]
  pub const fn new(source: R) -> Self {
    Self { source, state: ReaderState::Signature }
  }

  /// Gives back the source, positioned after the last record read.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> R {
    self.source
  }

  fn read_array<const N: usize>(&mut self, field: ChunkField) -> PngChunkResult<[u8; N]> {
    let mut buf = [0_u8; N];
    read_exact_or_eof(&mut self.source, &mut buf, field)?;
    Ok(buf)
  }

  fn read_signature(&mut self) -> PngChunkResult<Record> {
    let sig: [u8; 8] = self.read_array(ChunkField::Signature)?;
    if sig == PNG_SIGNATURE {
      Ok(Record::Signature(sig))
    } else {
      Err(PngChunkError::NoPngSignature)
    }
  }

  fn read_chunk(&mut self) -> PngChunkResult<RawChunk> {
    let length = u32::from_be_bytes(self.read_array(ChunkField::Length)?);
    let chunk_type = ChunkType(self.read_array(ChunkField::ChunkType)?);
    // Grow the buffer as bytes actually arrive, a bogus length shouldn't
    // allocate 4GB up front.
    let mut data = Vec::new();
    (&mut self.source).take(u64::from(length)).read_to_end(&mut data)?;
    if data.len() != length as usize {
      return Err(PngChunkError::UnexpectedEndOfInput { field: ChunkField::Data });
    }
    let declared_crc = u32::from_be_bytes(self.read_array(ChunkField::Crc)?);
    Ok(RawChunk { length, chunk_type, data, declared_crc })
  }
}
impl<R: Read> Iterator for ChunkReader<R> {
  type Item = PngChunkResult<Record>;

  fn next(&mut self) -> Option<Self::Item> {
    let result = match self.state {
      ReaderState::Done => return None,
      ReaderState::Signature => self.read_signature().map(|sig| {
        self.state = ReaderState::Chunks;
        sig
      }),
      ReaderState::Chunks => self.read_chunk().map(|chunk| {
        tracing::debug!(chunk_type = %chunk.chunk_type, length = chunk.length, "read chunk");
        if chunk.chunk_type == ChunkType::IEND {
          self.state = ReaderState::Done;
        }
        Record::Chunk(chunk)
      }),
    };
    if result.is_err() {
      self.state = ReaderState::Done;
    }
    Some(result)
  }
}
impl<R: Read> core::iter::FusedIterator for ChunkReader<R> {}

/// Starts reading records from `source`.
///
/// Nothing is read until the first call to `next`.
#[inline]
#[must_use]
pub fn open_chunk_stream<R: Read>(source: R) -> ChunkReader<R> {
  ChunkReader::new(source)
}

fn read_exact_or_eof<R: Read>(
  source: &mut R, buf: &mut [u8], field: ChunkField,
) -> PngChunkResult<()> {
  match source.read_exact(buf) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
      Err(PngChunkError::UnexpectedEndOfInput { field })
    }
    Err(e) => Err(e.into()),
  }
}
