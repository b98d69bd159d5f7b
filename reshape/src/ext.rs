use byteorder::{ReadBytesExt, WriteBytesExt, BE, LE};

/// Byte order of the scalar fields in a shapes file. Picked once when the
/// header is classified, never per call site.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub(crate) fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Big => u32::from_be_bytes(bytes),
            Endian::Little => u32::from_le_bytes(bytes),
        }
    }

    pub(crate) fn u32_to(self, value: u32) -> [u8; 4] {
        match self {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        }
    }
}

pub(crate) trait ReadExt {
    /// Reads the next 4 bytes verbatim; interpretation is the caller's
    /// problem since the bytes may still be ciphertext.
    fn read_quad(&mut self) -> Result<[u8; 4], super::Error>;
    fn read_len(&mut self, len: usize) -> Result<Vec<u8>, super::Error>;
    fn read_u32_endian(&mut self, endian: Endian) -> Result<u32, super::Error>;
}

pub(crate) trait WriteExt {
    fn write_u32_endian(&mut self, endian: Endian, value: u32) -> Result<(), super::Error>;
}

impl<R: std::io::Read> ReadExt for R {
    fn read_quad(&mut self) -> Result<[u8; 4], super::Error> {
        let mut quad = [0; 4];
        self.read_exact(&mut quad)?;
        Ok(quad)
    }

    fn read_len(&mut self, len: usize) -> Result<Vec<u8>, super::Error> {
        let mut buf = vec![0; len];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_u32_endian(&mut self, endian: Endian) -> Result<u32, super::Error> {
        Ok(match endian {
            Endian::Big => self.read_u32::<BE>()?,
            Endian::Little => self.read_u32::<LE>()?,
        })
    }
}

impl<W: std::io::Write> WriteExt for W {
    fn write_u32_endian(&mut self, endian: Endian, value: u32) -> Result<(), super::Error> {
        match endian {
            Endian::Big => self.write_u32::<BE>(value)?,
            Endian::Little => self.write_u32::<LE>(value)?,
        }
        Ok(())
    }
}
