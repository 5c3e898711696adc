use std::{io, path::PathBuf};

use crate::ChunkField;

/// Shorthand for results from this crate.
pub type PngChunkResult<T> = Result<T, PngChunkError>;

/// An error from the `pngchunk` crate.
///
/// Variants fall into two groups: problems with the bytes being read (see
/// [`is_format_error`](Self::is_format_error)) and problems with the
/// environment the operation runs in (see
/// [`is_resource_error`](Self::is_resource_error)).
#[derive(Debug, thiserror::Error)]
pub enum PngChunkError {
  /// The underlying reader or writer failed.
  #[error("i/o error: {0}")]
  Io(#[from] io::Error),

  /// The first 8 bytes of the stream were not the PNG signature.
  #[error("not a PNG stream: bad signature")]
  NoPngSignature,

  /// The stream ended part way through a record.
  #[error("premature end of stream while reading the {field}")]
  UnexpectedEndOfInput {
    /// Which part of the record was being read.
    field: ChunkField,
  },

  /// A chunk payload can't be described by a 32-bit length.
  #[error("chunk payload of {len} bytes is too large to encode")]
  PayloadTooLarge {
    /// Length of the rejected payload.
    len: usize,
  },

  /// An `acTL` chunk whose payload isn't exactly 8 bytes.
  #[error("acTL payload must be 8 bytes, found {len}")]
  MalformedAnimationControl {
    /// Length of the payload that was found.
    len: usize,
  },

  /// The output directory already has something in it.
  #[error("destination `{}` exists and is not empty", .path.display())]
  DestinationNotEmpty {
    /// The rejected directory.
    path: PathBuf,
  },
}

impl PngChunkError {
  /// The input bytes are not a well formed chunk stream.
  #[inline]
  #[must_use]
  pub const fn is_format_error(&self) -> bool {
    matches!(
      self,
      Self::NoPngSignature
        | Self::UnexpectedEndOfInput { .. }
        | Self::PayloadTooLarge { .. }
        | Self::MalformedAnimationControl { .. }
    )
  }

  /// The environment (file system, pipes) prevented the operation.
  #[inline]
  #[must_use]
  pub const fn is_resource_error(&self) -> bool {
    matches!(self, Self::Io(_) | Self::DestinationNotEmpty { .. })
  }
}
