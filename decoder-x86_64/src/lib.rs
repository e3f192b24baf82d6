//! # `x86_64`, a decoder for the x86 family in 16-, 32- and 64-bit modes
//!
//! [`Decoder`] reads instructions from any [`ByteSource`](::decoder::ByteSource) and produces [`Instruction`]s:
//! a [`Code`] naming the instruction and the shape of its operands, up to five [`Operand`]s, and
//! the prefixes and EVEX decorations that applied. legacy, VEX, EVEX, XOP and 3DNow! encodings are
//! all understood.
//!
//! decoding never fails loudly. bytes that aren't an instruction, that break an encoding rule, or
//! that run out early decode to an instruction with [`Code::Invalid`], and the decoder moves past
//! them. [`Decoder::try_decode`] says which of those it was.
//!
//! ```
//! use decoder::Reader;
//! use x86_64::{Bitness, Code, Decoder, DecoderOptions, Operand, RegSpec};
//!
//! let bytes = [0xf6, 0x00, 0x5a];
//! let mut decoder = Decoder::new(Bitness::Bits16, Reader::new(&bytes), DecoderOptions::empty());
//! let instr = decoder.decode();
//!
//! assert_eq!(instr.code(), Code::TestRm8Imm8);
//! let mem = instr.op(0).mem().unwrap();
//! assert_eq!((mem.base, mem.index, mem.segment), (Some(RegSpec::bx()), Some(RegSpec::si()), RegSpec::ds()));
//! assert!(matches!(instr.op(1), Operand::Immediate(imm) if imm.value == 0x5a));
//! ```

mod code;
mod decoder;
mod dispatch;
mod instruction;
mod modrm;
mod operand;
mod operands;
mod options;
mod prefix;
mod register;
mod tables;
mod validity;

mod tests;

pub use crate::code::Code;
pub use crate::decoder::{Decoder, MAX_INSTRUCTION_LEN};
pub use crate::instruction::{EncodingKind, Instruction};
pub use crate::operand::{ImmKind, Immediate, MemoryOperand, Operand, RoundingControl};
pub use crate::options::DecoderOptions;
pub use crate::register::{RegSpec, RegisterBank};

/// the processor mode instructions are decoded for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bitness {
    Bits16,
    Bits32,
    Bits64,
}

impl Bitness {
    pub fn bits(self) -> u32 {
        match self {
            Bitness::Bits16 => 16,
            Bitness::Bits32 => 32,
            Bitness::Bits64 => 64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported bitness {0}, expected 16, 32 or 64")]
pub struct UnsupportedBitness(pub u32);

impl TryFrom<u32> for Bitness {
    type Error = UnsupportedBitness;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(Bitness::Bits16),
            32 => Ok(Bitness::Bits32),
            64 => Ok(Bitness::Bits64),
            other => Err(UnsupportedBitness(other)),
        }
    }
}
