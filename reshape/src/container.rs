use std::io::{self, Read, Seek, Write};

use tracing::{debug, trace};

use crate::cipher::{blocks_for, Cipher};
use crate::ext::{Endian, ReadExt, WriteExt};
use crate::header::Header;
use crate::{Error, Version, MAX_ENTITIES};

/// One directory record: a typed payload blob somewhere in the file.
///
/// `offset` is the absolute file position of the payload's first byte;
/// `block_index` is where its keystream resumes. Both are fixed by the scan
/// and never change, which is what makes payload reads a pure function of
/// the entity -- any handle, any order, any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    /// Engine type tag of the payload (shape, spline, nav mesh, ...).
    pub ty: u32,
    /// Payload length in bytes.
    pub size: u32,
    /// Absolute file offset of the payload's first byte.
    pub offset: u64,
    /// Keystream block index to decrypt the payload at.
    pub block_index: u64,
}

#[derive(Debug, Default)]
pub struct ShapesBuilder {
    seed_override: Option<u8>,
}

impl ShapesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `seed` instead of the one stored in the header. Version and
    /// endian detection are unaffected; useful when recovering files whose
    /// seed byte was stomped.
    pub fn seed(mut self, seed: u8) -> Self {
        self.seed_override = Some(seed);
        self
    }

    pub fn reader<R: Read + Seek>(self, reader: &mut R) -> Result<ShapesReader, Error> {
        ShapesReader::new_inner(reader, self.seed_override)
    }

    pub fn writer<W: Write>(self, writer: W, version: Version, seed: u8) -> ShapesWriter<W> {
        ShapesWriter::new_inner(writer, version, seed)
    }
}

#[derive(Debug)]
pub struct ShapesReader {
    header: Header,
    seed: u8,
    endian: Endian,
    cipher: Option<Cipher>,
    entities: Vec<Entity>,
}

impl ShapesReader {
    fn new_inner<R: Read + Seek>(reader: &mut R, seed_override: Option<u8>) -> Result<Self, Error> {
        let file_len = reader.seek(io::SeekFrom::End(0))?;
        reader.seek(io::SeekFrom::Start(0))?;

        let header = Header::parse(reader.read_quad()?)?;
        let seed = seed_override.unwrap_or(header.seed);
        let endian = header.endian();
        // an override feeds the cipher but never the layout heuristic
        let encrypted = header.version != Version::V2 && seed != 0;
        debug!(version = %header.version, seed, encrypted, "classified shapes header");

        let cipher = encrypted.then(|| Cipher::new(seed));
        let mut scan = Scan {
            reader,
            cipher: cipher.as_ref(),
            endian,
            block_index: 0,
            file_len,
        };

        let count = scan.read_scalar()?;
        if count > MAX_ENTITIES {
            // nothing cryptographic catches a wrong seed; this bound does
            return Err(Error::Decryption);
        }

        let mut entities = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let ty = scan.read_scalar()?;
            let size = scan.read_scalar()?;
            let offset = scan.reader.stream_position()?;
            let block_index = scan.block_index;
            scan.skip_payload(size)?;
            trace!(ty, size, offset, block_index, "directory record");
            entities.push(Entity {
                ty,
                size,
                offset,
                block_index,
            });
        }
        debug!(count, "directory scan complete");

        Ok(ShapesReader {
            header,
            seed,
            endian,
            cipher,
            entities,
        })
    }

    pub fn version(&self) -> Version {
        self.header.version
    }

    /// The seed the cipher was actually keyed from (override included).
    pub fn seed(&self) -> u8 {
        self.seed
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn is_encrypted(&self) -> bool {
        self.cipher.is_some()
    }

    /// Entities in file order, as produced by the single directory pass.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Fetches one payload. Independent of the scan and of every other
    /// payload read; callers on separate threads just need their own handle.
    ///
    /// A short read fails only this entity -- the scanned directory stays
    /// valid, and callers routinely skip entities they cannot decode.
    pub fn read_payload<R: Read + Seek>(
        &self,
        entity: &Entity,
        reader: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let end = reader.seek(io::SeekFrom::End(0))?;
        let available = end.saturating_sub(entity.offset);
        if available < u64::from(entity.size) {
            return Err(Error::TruncatedPayload {
                size: entity.size,
                available,
            });
        }
        reader.seek(io::SeekFrom::Start(entity.offset))?;
        let mut payload = reader.read_len(entity.size as usize)?;
        if let Some(cipher) = &self.cipher {
            // a fresh decrypt from the recorded index, not a continuation
            // of anything; the returned next-index is meaningless here
            cipher.apply(&mut payload, entity.block_index);
        }
        Ok(payload)
    }
}

/// The one-pass directory scan: a shared file cursor plus the running
/// keystream block index. "Read scalar" and "skip payload" must not
/// interleave with any other user of the handle.
struct Scan<'r, 'c, R> {
    reader: &'r mut R,
    cipher: Option<&'c Cipher>,
    endian: Endian,
    block_index: u64,
    file_len: u64,
}

impl<R: Read + Seek> Scan<'_, '_, R> {
    /// One 4-byte field through the cipher. Burns a whole keystream block
    /// regardless of the 4 meaningful bytes; every consumer of the stream
    /// counts it that way or everything after it decodes to garbage.
    fn read_scalar(&mut self) -> Result<u32, Error> {
        match self.cipher {
            Some(cipher) => {
                let mut quad = self.reader.read_quad().map_err(structural)?;
                self.block_index = cipher.apply(&mut quad, self.block_index);
                Ok(self.endian.u32_from(quad))
            }
            None => {
                // clear files advance the same accounting so the scan shape
                // is identical either way
                self.block_index += 1;
                self.reader.read_u32_endian(self.endian).map_err(structural)
            }
        }
    }

    /// Reserves the payload's keystream blocks and steps over its bytes
    /// without materializing them.
    fn skip_payload(&mut self, size: u32) -> Result<(), Error> {
        let pos = self.reader.stream_position()?;
        if pos + u64::from(size) > self.file_len {
            return Err(Error::Decryption);
        }
        self.reader.seek(io::SeekFrom::Current(i64::from(size)))?;
        self.block_index += blocks_for(u64::from(size));
        Ok(())
    }
}

/// A structural read hitting end-of-file means the stream decoded to
/// garbage, not that the disk failed; report the uniform condition.
fn structural(err: Error) -> Error {
    match err {
        Error::Io(io) if io.kind() == io::ErrorKind::UnexpectedEof => Error::Decryption,
        other => other,
    }
}

/// Writes a shapes container with the exact block accounting the scanner
/// expects. Records are buffered until [`ShapesWriter::finish`] because the
/// entity count is the first encrypted field in the file.
#[derive(Debug)]
pub struct ShapesWriter<W: Write> {
    writer: W,
    header: Header,
    records: Vec<(u32, Vec<u8>)>,
}

impl<W: Write> ShapesWriter<W> {
    fn new_inner(writer: W, version: Version, seed: u8) -> Self {
        ShapesWriter {
            writer,
            header: Header { version, seed },
            records: Vec::new(),
        }
    }

    pub fn write_entity(&mut self, ty: u32, payload: impl Into<Vec<u8>>) {
        self.records.push((ty, payload.into()));
    }

    pub fn finish(mut self) -> Result<W, Error> {
        let endian = self.header.endian();
        let cipher = self.header.is_encrypted().then(|| Cipher::new(self.header.seed));

        self.writer.write_all(&self.header.to_bytes())?;

        let mut block_index = put_scalar(
            &mut self.writer,
            cipher.as_ref(),
            endian,
            self.records.len() as u32,
            0,
        )?;
        for (ty, payload) in &mut self.records {
            block_index = put_scalar(&mut self.writer, cipher.as_ref(), endian, *ty, block_index)?;
            block_index = put_scalar(
                &mut self.writer,
                cipher.as_ref(),
                endian,
                payload.len() as u32,
                block_index,
            )?;
            block_index = match &cipher {
                Some(cipher) => cipher.apply(payload, block_index),
                None => block_index + blocks_for(payload.len() as u64),
            };
            self.writer.write_all(payload)?;
        }

        Ok(self.writer)
    }
}

fn put_scalar<W: Write>(
    writer: &mut W,
    cipher: Option<&Cipher>,
    endian: Endian,
    value: u32,
    block_index: u64,
) -> Result<u64, Error> {
    match cipher {
        Some(cipher) => {
            let mut quad = endian.u32_to(value);
            let next = cipher.apply(&mut quad, block_index);
            writer.write_all(&quad)?;
            Ok(next)
        }
        None => {
            writer.write_u32_endian(endian, value)?;
            Ok(block_index + 1)
        }
    }
}
