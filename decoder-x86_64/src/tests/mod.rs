#![cfg(test)]

use decoder::{Error, ErrorKind, Reader};

use crate::{Bitness, Decoder, DecoderOptions, Instruction};

mod evex;
mod legacy;
mod memory;
mod options;
mod prefixes;
mod props;
mod templates;
mod two_byte;
mod vex;

fn bytes(hex: &str) -> Vec<u8> {
    decoder::decode_hex_bytes(hex).unwrap_or_else(|| panic!("bad hex in test: {hex:?}"))
}

fn try_decode_at(bitness: Bitness, hex: &str, options: DecoderOptions, ip: u64) -> Result<Instruction, Error> {
    let data = bytes(hex);
    let mut decoder = Decoder::new(bitness, Reader::new(&data), options);
    decoder.set_ip(ip);
    decoder.try_decode()
}

fn try_decode_with(bitness: Bitness, hex: &str, options: DecoderOptions) -> Result<Instruction, Error> {
    try_decode_at(bitness, hex, options, 0)
}

/// decode `hex`, which must be exactly one valid instruction.
fn decode(bitness: Bitness, hex: &str) -> Instruction {
    decode_with(bitness, hex, DecoderOptions::empty())
}

fn decode_with(bitness: Bitness, hex: &str, options: DecoderOptions) -> Instruction {
    let instr = try_decode_with(bitness, hex, options)
        .unwrap_or_else(|err| panic!("failed to decode {hex} in {} bits: {err}", bitness.bits()));

    assert_eq!(
        instr.len(),
        bytes(hex).len(),
        "instruction length is incorrect for {hex}, decoded {:?}",
        instr.code()
    );
    instr
}

/// decode `hex`, which must be rejected. returns why, and how many bytes were consumed.
fn reject(bitness: Bitness, hex: &str) -> (ErrorKind, usize) {
    reject_with(bitness, hex, DecoderOptions::empty())
}

fn reject_with(bitness: Bitness, hex: &str, options: DecoderOptions) -> (ErrorKind, usize) {
    match try_decode_with(bitness, hex, options) {
        Ok(instr) => panic!("{hex} decoded to {:?} in {} bits, expected an error", instr.code(), bitness.bits()),
        Err(err) => (err.kind, err.size()),
    }
}
