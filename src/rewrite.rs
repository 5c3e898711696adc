//! Changing how many times an APNG plays.

use std::io::{Read, Write};

use crate::*;

/// Something questionable about an input that didn't stop the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewriteWarning {
  /// No `acTL` chunk was found, the output is an unchanged copy.
  NotAnimated,
  /// More than one `acTL` chunk was found. They were all rewritten, but the
  /// input wasn't a conforming APNG, so the output might not be either.
  MultipleAnimationControl {
    /// How many `acTL` chunks were seen.
    count: usize,
  },
}
impl core::fmt::Display for RewriteWarning {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      RewriteWarning::NotAnimated => f.write_str("input is not an animated PNG, no acTL chunk found"),
      RewriteWarning::MultipleAnimationControl { count } => write!(
        f,
        "input has {count} acTL chunks but at most one is allowed, output may not be valid"
      ),
    }
  }
}

/// What happened during [`rewrite_loop_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
  /// Number of `acTL` chunks that were rewritten.
  pub matches: usize,
  pub warnings: Vec<RewriteWarning>,
}

/// Copies a PNG from `source` to `sink`, setting the play count of every
/// `acTL` chunk to `new_loop_count` (0 means loop forever).
///
/// Each record is written as soon as it's read. Chunks other than `acTL` are
/// copied byte for byte, CRC included. `acTL` chunks keep their frame count
/// and are re-encoded with a fresh CRC.
///
/// If this returns an error, whatever was read before the error has already
/// been written to `sink`.
///
/// Warnings go into the returned report and are also logged.
pub fn rewrite_loop_count<R: Read, W: Write>(
  source: R, mut sink: W, new_loop_count: u32,
) -> PngChunkResult<RewriteReport> {
  let mut matches = 0_usize;
  for record in open_chunk_stream(source) {
    match record? {
      Record::Chunk(chunk) if chunk.chunk_type == ChunkType::acTL => {
        let mut actl = acTL::from_payload(&chunk.data)?;
        tracing::debug!(
          num_frames = actl.num_frames(),
          old_plays = actl.num_plays(),
          new_plays = new_loop_count,
          "rewriting acTL"
        );
        actl.set_num_plays(new_loop_count);
        write_chunk(&mut sink, ChunkType::acTL, &actl.to_payload())?;
        matches += 1;
      }
      other => other.write_to(&mut sink)?,
    }
  }
  sink.flush()?;

  let warnings = match matches {
    0 => vec![RewriteWarning::NotAnimated],
    1 => Vec::new(),
    count => vec![RewriteWarning::MultipleAnimationControl { count }],
  };
  for warning in &warnings {
    tracing::warn!("{warning}");
  }
  Ok(RewriteReport { matches, warnings })
}
