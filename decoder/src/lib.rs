//! Shared behaviour required between decoder crates.

use std::fmt::Write;

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
#[error("{kind} after {size} byte(s)")]
pub struct Error {
    /// What kind of error happened in decoding an instruction.
    pub kind: ErrorKind,

    /// How many bytes in the stream did the invalid instruction consume.
    size: u8,
}

impl Error {
    pub fn new(kind: ErrorKind, size: usize) -> Self {
        Self {
            kind,
            size: size as u8,
        }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum ErrorKind {
    /// Opcode in instruction has no mapping in any table.
    #[error("unmapped opcode")]
    InvalidOpcode,

    /// Recognized encoding with bits or prefixes that make it illegal.
    #[error("illegal encoding")]
    InvalidEncoding,

    /// There weren't any bytes left in the stream to decode.
    #[error("input exhausted")]
    ExhaustedInput,

    /// Impossibly long instruction (x86/64 specific).
    #[error("instruction too long")]
    TooLong,
}

/// A sequential supplier of bytes.
///
/// End of stream and "not enough bytes" are the same thing to a decoder, so there is only one
/// way to signal either: returning `None`.
pub trait ByteSource {
    fn read_u8(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_u8(&mut self) -> Option<u8> {
        (**self).read_u8()
    }
}

pub trait Decodable {
    type Instruction;

    /// Decode the next instruction, moving past every byte it consumed even if it fails.
    fn try_decode(&mut self) -> Result<Self::Instruction, Error>;

    /// The longest instruction this decoder can produce, in bytes.
    fn max_width(&self) -> usize;
}

#[derive(Debug, Clone)]
pub struct Reader<'data> {
    data: &'data [u8],
    position: usize,
}

impl<'data> Reader<'data> {
    pub fn new(data: &'data [u8]) -> Self {
        Self {
            data,
            position: 0,
        }
    }

    #[inline]
    pub fn next(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    /// bytes that haven't been read yet.
    #[inline]
    pub fn remaining(&self) -> &'data [u8] {
        &self.data[self.position..]
    }
}

impl ByteSource for Reader<'_> {
    #[inline]
    fn read_u8(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Encode bytes as 2 digit hex number separated by a space.
pub fn encode_hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (idx, byte) in bytes.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parse whitespace-separated (or packed) hex digits into bytes.
///
/// Returns `None` on an odd number of digits or a non-hex character.
pub fn decode_hex_bytes(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            Some((hi << 4 | lo) as u8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_hex_bytes() {
        assert_eq!(super::encode_hex_bytes(&[0x10, 0x12, 0x3]), "10 12 03");
        assert_eq!(super::encode_hex_bytes(&[0x10]), "10");
        assert_eq!(super::encode_hex_bytes(&[]), "");
        assert_eq!(super::encode_hex_bytes(&[0xff, 0x1, 0x1, 0x1]), "ff 01 01 01");
    }

    #[test]
    fn decode_hex_bytes() {
        assert_eq!(super::decode_hex_bytes("66 68 5AA51234"), Some(vec![0x66, 0x68, 0x5a, 0xa5, 0x12, 0x34]));
        assert_eq!(super::decode_hex_bytes(""), Some(vec![]));
        assert_eq!(super::decode_hex_bytes("6"), None);
        assert_eq!(super::decode_hex_bytes("zz"), None);
    }

    #[test]
    fn reader_stops_at_the_end() {
        let mut reader = Reader::new(&[1, 2, 3]);
        assert_eq!(reader.next(), Some(1));
        assert_eq!(reader.remaining(), &[2, 3]);

        assert_eq!(reader.read_u8(), Some(2));
        assert_eq!(reader.read_u8(), Some(3));
        assert_eq!(reader.read_u8(), None);
        assert_eq!(reader.remaining(), &[] as &[u8]);
    }

    #[test]
    fn error_display() {
        let err = Error::new(ErrorKind::TooLong, 15);
        assert_eq!(err.size(), 15);
        assert_eq!(err.to_string(), "instruction too long after 15 byte(s)");
    }
}
