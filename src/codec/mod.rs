pub mod parse;
pub mod reader;
pub mod section;
pub mod serialize;
pub mod writer;

pub use parse::parse;
pub use reader::Reader;
pub use section::Section;
pub use serialize::serialize;
pub use writer::Writer;

/// Signature at the start of the TYPE section payload.
pub const MAGIC: [u8; 10] = *b"WAR2 MAP\0\0";

/// Words in the obsolete UDTA block, preserved across round-trips.
pub const UDTA_OBSOLETE_WORDS: usize = 508;

/// Bytes in one serialized unit record.
pub const UNIT_RECORD_SIZE: usize = 8;
