mod cipher;
mod container;
mod error;
mod ext;
mod header;
mod keys;

pub use {
    cipher::Cipher,
    container::{Entity, ShapesBuilder, ShapesReader, ShapesWriter},
    error::Error,
    ext::Endian,
    header::Header,
};

/// Size in bytes of one keystream block.
pub const BLOCK_SIZE: usize = 64;

/// Entity counts above this are treated as a wrong seed or a corrupt file.
/// The format carries no integrity check, so an implausible count is the
/// first (and often only) signal that the stream decoded to garbage.
pub const MAX_ENTITIES: u32 = 1_000_000;

/// Version byte actually written to the shapes file
#[repr(u16)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Debug,
    strum::Display,
    strum::FromRepr,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Version {
    V2 = 2, // legacy big-endian, stored in the clear when the seed is 0
    V3 = 3, // legacy big-endian, always encrypted
    V4 = 4, // header layout changed, little-endian from here on
    V5 = 5,
    V6 = 6,
    V7 = 7, // current
}

impl Version {
    pub fn iter() -> VersionIter {
        <Version as strum::IntoEnumIterator>::iter()
    }

    /// Byte order of every multi-byte field after the 4 raw header bytes.
    pub fn endian(self) -> Endian {
        if (self as u16) >= 4 {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}
