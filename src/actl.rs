use crate::*;

/// The payload of an `acTL` (animation control) chunk.
///
/// An APNG has exactly one of these, before the first `IDAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
#[allow(nonstandard_style)]
pub struct acTL {
  num_frames: U32BE,
  num_plays: U32BE,
}
impl acTL {
  #[inline]
  #[must_use]
  pub const fn new(num_frames: u32, num_plays: u32) -> Self {
    Self { num_frames: U32BE::from_u32(num_frames), num_plays: U32BE::from_u32(num_plays) }
  }

  /// Reads the payload bytes of an `acTL` chunk.
  ///
  /// ## Failure
  /// * [`MalformedAnimationControl`](PngChunkError::MalformedAnimationControl)
  ///   unless `data` is exactly 8 bytes.
  #[inline]
  pub fn from_payload(data: &[u8]) -> PngChunkResult<Self> {
    bytemuck::try_pod_read_unaligned(data)
      .map_err(|_| PngChunkError::MalformedAnimationControl { len: data.len() })
  }

  #[inline]
  #[must_use]
  pub fn to_payload(self) -> [u8; 8] {
    bytemuck::cast(self)
  }

  /// Number of frames in the animation.
  #[inline]
  #[must_use]
  pub const fn num_frames(self) -> u32 {
    self.num_frames.to_u32()
  }

  /// How many times to play the animation, 0 is forever.
  #[inline]
  #[must_use]
  pub const fn num_plays(self) -> u32 {
    self.num_plays.to_u32()
  }

  #[inline]
  pub fn set_num_plays(&mut self, num_plays: u32) {
    self.num_plays = U32BE::from_u32(num_plays);
  }
}
