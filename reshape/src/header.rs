use crate::{Endian, Error, Version};

/// The 4 raw leading bytes of a shapes file, classified.
///
/// The header is the only part of the file that is never encrypted; it has
/// to be, since it carries the seed the cipher is keyed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub seed: u8,
}

impl Header {
    /// Classifies 4 header bytes without knowing the version in advance.
    ///
    /// New-layout files store the version in the first byte and the seed in
    /// the third; legacy files store the version in the fourth byte and the
    /// seed in the second. A legacy first byte is always below 4, so
    /// `b1 >= 4` selects the new layout. The engine's own loader notes the
    /// boundary value 4 "might be 5 as well"; the heuristic is kept exactly
    /// as shipped rather than second-guessed.
    pub fn parse(bytes: [u8; 4]) -> Result<Self, Error> {
        let [b1, b2, b3, b4] = bytes;
        let (version, seed) = if b1 >= 4 {
            (u16::from(b1), b3)
        } else if b4 == 2 || b4 == 3 {
            (u16::from(b4), b2)
        } else {
            return Err(Error::UnrecognizedHeader(bytes));
        };
        let version = Version::from_repr(version).ok_or(Error::UnsupportedVersion(version))?;
        Ok(Header { version, seed })
    }

    pub fn endian(&self) -> Endian {
        self.version.endian()
    }

    /// Version-2 files written before the cipher existed carry seed 0 and
    /// are stored in the clear. The scan is identical either way; only the
    /// scalar and payload primitives switch.
    pub fn is_encrypted(&self) -> bool {
        self.version != Version::V2 && self.seed != 0
    }

    pub(crate) fn to_bytes(self) -> [u8; 4] {
        let version = self.version as u16 as u8;
        if version >= 4 {
            [version, 0, self.seed, 0]
        } else {
            [0, self.seed, 0, version]
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_layout() {
        let header = Header::parse([5, 0, 17, 0]).unwrap();
        assert_eq!(header.version, Version::V5);
        assert_eq!(header.seed, 17);
        assert_eq!(header.endian(), Endian::Little);
        assert!(header.is_encrypted());
    }

    #[test]
    fn old_layout() {
        let header = Header::parse([0, 42, 0, 3]).unwrap();
        assert_eq!(header.version, Version::V3);
        assert_eq!(header.seed, 42);
        assert_eq!(header.endian(), Endian::Big);
        assert!(header.is_encrypted());
    }

    #[test]
    fn legacy_unencrypted() {
        let header = Header::parse([0, 0, 0, 2]).unwrap();
        assert_eq!(header.version, Version::V2);
        assert!(!header.is_encrypted());
    }

    #[test]
    fn unknown_shape_is_distinct_from_bad_version() {
        assert!(matches!(
            Header::parse([0, 0, 0, 0]),
            Err(Error::UnrecognizedHeader([0, 0, 0, 0]))
        ));
        assert!(matches!(
            Header::parse([9, 0, 1, 0]),
            Err(Error::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn round_trips_through_bytes() {
        for version in Version::iter() {
            let header = Header { version, seed: 0x5C };
            assert_eq!(Header::parse(header.to_bytes()).unwrap(), header);
        }
    }
}
