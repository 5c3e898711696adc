use core::fmt::Write;

/// The 4-byte tag that says what a chunk holds.
///
/// PNG tags are meant to be ascii letters, and the case of each letter is a
/// property bit. Nothing here enforces that: any 4 bytes are accepted, and the
/// `Debug` and `Display` impls just `as` cast each byte into a character.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);

#[allow(nonstandard_style)]
impl ChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  /// The terminal marker. Reading stops after this chunk.
  pub const IEND: Self = Self(*b"IEND");
  /// Animation control, the chunk that marks a PNG as an APNG.
  pub const acTL: Self = Self(*b"acTL");
  pub const fcTL: Self = Self(*b"fcTL");
  pub const fdAT: Self = Self(*b"fdAT");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const zTXt: Self = Self(*b"zTXt");
  pub const iTXt: Self = Self(*b"iTXt");
  pub const tRNS: Self = Self(*b"tRNS");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const sRGB: Self = Self(*b"sRGB");
}

impl ChunkType {
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks have an uppercase first letter.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }

  /// Public chunks have an uppercase second letter.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }

  /// The third letter must be uppercase in the current PNG standard.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 32) == 0
  }

  /// Safe-to-copy chunks have a lowercase fourth letter.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }

  /// The tag with every byte that isn't an ascii letter or digit replaced by
  /// `_`, so that it can go into a file name.
  #[must_use]
  pub fn sanitized(&self) -> String {
    self.0.iter().map(|&b| if b.is_ascii_alphanumeric() { b as char } else { '_' }).collect()
  }
}

impl From<[u8; 4]> for ChunkType {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}

impl core::fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')?;
    Ok(())
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
