use crate::codec::Section;
use crate::model::Player;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not a PUD file: bad magic in TYPE section")]
    InvalidFormat,

    #[error("corrupt {section} section: decoded size does not match declared length")]
    CorruptSection { section: Section },

    #[error("unexpected end of data")]
    TruncatedInput,

    #[error("mandatory section {section} missing")]
    MissingSection { section: Section },

    #[error("buffer overflow: need {need} bytes, have {have}")]
    BufferOverflow { need: usize, have: usize },

    #[error("file was opened read-only")]
    ReadOnly,

    #[error("file was opened write-only")]
    WriteOnly,

    #[error("position ({x}, {y}) outside a {w}x{h} map")]
    OutOfBounds { x: u16, y: u16, w: u16, h: u16 },

    #[error("map is not initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Playability violation reported by [`crate::Pud::check`].
///
/// Informational: the model stays usable for further editing after a
/// failed check. At most one violation is reported per call; callers
/// re-run after each fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Validation {
    #[error("map is not initialized")]
    NotInitialized,

    #[error("not enough start locations: {count} (need at least 2)")]
    NotEnoughStartLocations { count: u32 },

    #[error("too many start locations: {count} (at most 8)")]
    TooManyStartLocations { count: u32 },

    #[error("map has no start location")]
    NoStartLocation,

    #[error("unit {unit} belongs to invalid player {owner:#04x}")]
    InvalidPlayer { unit: usize, owner: u8 },

    #[error("player {player:?} owns units but is configured as nobody")]
    EmptyPlayer { player: Player },
}
