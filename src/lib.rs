#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for taking PNG data streams apart chunk by chunk, and putting them
//! back together.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//! * [APNG Specification][apng-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//! [apng-spec]: https://wiki.mozilla.org/APNG_Specification
//!
//! ## Reading
//!
//! A PNG is an 8 byte signature followed by a series of chunks. Each chunk is
//! a big-endian `u32` length, a 4 byte type, that many bytes of data, and a
//! big-endian CRC-32 of the type and data. The `IEND` chunk ends the stream.
//!
//! [`open_chunk_stream`] gives you an iterator over the [`Record`]s of any
//! [`Read`](std::io::Read) source. The data is read as you go, only one
//! record is held in memory at a time.
//!
//! ```no_run
//! use pngchunk::*;
//! # fn main() -> PngChunkResult<()> {
//! let file = std::fs::File::open("animated.png")?;
//! for record in open_chunk_stream(std::io::BufReader::new(file)) {
//!   match record? {
//!     Record::Signature(_) => println!("signature"),
//!     Record::Chunk(chunk) => println!("{} ({} bytes)", chunk.chunk_type, chunk.length),
//!   }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Checksums
//!
//! The reader does **not** check the CRC of each chunk. The declared value is
//! kept exactly as read so that unchanged chunks can be written back out
//! unchanged, damaged CRC and all. Call [`RawChunk::crc_matches`] if you want
//! to know, or use [`list_chunks`] to get a report for the whole stream.
//! Chunks built with [`encode_chunk`] always get a correct CRC.
//!
//! ## Writing
//!
//! * [`encode_chunk`] and [`write_chunk`] build a chunk from its type and data.
//! * [`rewrite_loop_count`] copies a stream while changing the play count of
//!   the APNG `acTL` chunk.
//! * [`split_to_dir`] writes every record of a stream to its own file.

mod error;
pub use error::*;

mod chunk_type;
pub use chunk_type::*;

mod int_endian;
pub use int_endian::*;

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod reader;
pub use reader::*;

mod encode;
pub use encode::*;

mod actl;
pub use actl::*;

mod rewrite;
pub use rewrite::*;

mod split;
pub use split::*;

mod list;
pub use list::*;
