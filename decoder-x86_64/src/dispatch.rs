//! walking the opcode maps from the first opcode byte to an instruction template.
//!
//! C4, C5, 62 and 8F lead VEX, EVEX and XOP prefixes. outside 64-bit mode the first three are
//! also `les`, `lds` and `bound`, which can only have a memory operand, so a following byte with
//! ModRM.mod of 3 marks the prefix. 8F is XOP when the would-be ModRM.rm/reg bits name map 8 or
//! higher, and `pop r/m` otherwise. when the byte turns out to be a ModRM byte it is kept as one.

use decoder::{ByteSource, ErrorKind};
use once_cell::sync::Lazy;

use crate::decoder::{Bytes, State};
use crate::instruction::EncodingKind;
use crate::prefix::MandatoryPrefix;
use crate::tables::{evex, legacy, legacy_map, vex, xop, Entry, OpCodeInfo, Table};

pub(crate) fn walk<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    opcode: u8,
) -> Result<&'static OpCodeInfo, ErrorKind> {
    state.opcode = opcode;
    let mut entry: &'static Entry = &legacy::ONE_BYTE[opcode as usize];

    loop {
        entry = match *entry {
            Entry::Invalid => return Err(ErrorKind::InvalidOpcode),
            Entry::Op(ref info) => return Ok(info),
            Entry::Group(group) => {
                let modrm = state.modrm(bytes)?;
                &group[((modrm >> 3) & 7) as usize]
            }
            Entry::RmGroup(group) => {
                let modrm = state.modrm(bytes)?;
                &group[(modrm & 7) as usize]
            }
            Entry::RegMem(reg, mem) => {
                let modrm = state.modrm(bytes)?;
                if modrm >> 6 == 3 {
                    reg
                } else {
                    mem
                }
            }
            Entry::Mandatory(row) => {
                let prefix = state.mandatory();
                state.consume(prefix);
                &row[prefix.index()]
            }
            Entry::F3(with, otherwise) => {
                if state.mandatory() == MandatoryPrefix::PF3 {
                    state.consume(MandatoryPrefix::PF3);
                    with
                } else {
                    otherwise
                }
            }
            Entry::F2(with, otherwise) => {
                if state.mandatory() == MandatoryPrefix::PF2 {
                    state.consume(MandatoryPrefix::PF2);
                    with
                } else {
                    otherwise
                }
            }
            Entry::W(row) => &row[state.w as usize],
            Entry::L(row) => {
                let len = vector_len(state)?;
                &row[len]
            }
            Entry::LenEr(row) => {
                state.modrm(bytes)?;
                if state.evex_er() {
                    state.vl = 2;
                    &row[2]
                } else {
                    let len = vector_len(state)?;
                    &row[len]
                }
            }
            Entry::Mode(outside, long) => {
                if state.is_64() {
                    long
                } else {
                    outside
                }
            }
            Entry::Opt(opts, on, off) => {
                if state.options.contains(opts) {
                    on
                } else {
                    off
                }
            }
            Entry::RexB(without, with) => {
                if state.ext_b != 0 {
                    with
                } else {
                    without
                }
            }
            Entry::Escape(map) => next_opcode(bytes, state, legacy_map(map))?,
            Entry::Vex2(fallback) => {
                let b1 = bytes.next()?;
                if !state.is_64() && b1 >> 6 != 3 {
                    state.modrm = Some(b1);
                    fallback
                } else {
                    vex2(state, b1);
                    next_opcode(bytes, state, &vex::VEX_0F)?
                }
            }
            Entry::Vex3(fallback) => {
                let b1 = bytes.next()?;
                if !state.is_64() && b1 >> 6 != 3 {
                    state.modrm = Some(b1);
                    fallback
                } else {
                    let b2 = bytes.next()?;
                    let table = match vex3(state, b1, b2, EncodingKind::Vex) {
                        1 => &vex::VEX_0F,
                        2 => &vex::VEX_0F38,
                        3 => &vex::VEX_0F3A,
                        _ => return Err(ErrorKind::InvalidOpcode),
                    };
                    next_opcode(bytes, state, table)?
                }
            }
            Entry::Xop(fallback) => {
                let b1 = bytes.next()?;
                if b1 & 0x1f < 8 {
                    state.modrm = Some(b1);
                    fallback
                } else {
                    let b2 = bytes.next()?;
                    let table = match vex3(state, b1, b2, EncodingKind::Xop) {
                        8 => &xop::XOP_8,
                        9 => &xop::XOP_9,
                        10 => &xop::XOP_A,
                        _ => return Err(ErrorKind::InvalidOpcode),
                    };
                    if state.pp != 0 {
                        return Err(ErrorKind::InvalidOpcode);
                    }
                    next_opcode(bytes, state, table)?
                }
            }
            Entry::Evex(fallback) => {
                let p0 = bytes.next()?;
                if !state.is_64() && p0 >> 6 != 3 {
                    state.modrm = Some(p0);
                    fallback
                } else {
                    let p1 = bytes.next()?;
                    let p2 = bytes.next()?;
                    let table = match evex_prefix(state, p0, p1, p2)? {
                        1 => &evex::EVEX_0F,
                        2 => &evex::EVEX_0F38,
                        3 => &evex::EVEX_0F3A,
                        _ => return Err(ErrorKind::InvalidOpcode),
                    };
                    next_opcode(bytes, state, table)?
                }
            }
        };
    }
}

fn next_opcode<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    table: &'static Lazy<Table>,
) -> Result<&'static Entry, ErrorKind> {
    let opcode = bytes.next()?;
    state.opcode = opcode;
    Ok(&table[opcode as usize])
}

/// the slot of a vector-length row. EVEX L'L of 3 only exists as a rounding mode.
fn vector_len(state: &mut State) -> Result<usize, ErrorKind> {
    if state.ll > 2 {
        return Err(ErrorKind::InvalidOpcode);
    }
    state.vl = state.ll;
    Ok(state.ll as usize)
}

fn begin_extended(state: &mut State, encoding: EncodingKind) {
    if state.prefixes.blocks_extended_encoding() {
        state.violation = true;
    }
    state.encoding = encoding;
    state.w = false;
    state.ext_r = 0;
    state.ext_x = 0;
    state.ext_b = 0;
}

/// inverted field bit `mask` of `byte` as a register number offset.
fn inverted(byte: u8, mask: u8, offset: u8) -> u8 {
    if byte & mask == 0 {
        offset
    } else {
        0
    }
}

/// `C5 RvvvvLpp`.
fn vex2(state: &mut State, b1: u8) {
    begin_extended(state, EncodingKind::Vex);
    if state.is_64() {
        state.ext_r = inverted(b1, 0x80, 8);
    }
    state.vvvv = (!b1 >> 3) & 0xf;
    state.ll = (b1 >> 2) & 1;
    state.vl = state.ll;
    state.pp = b1 & 3;
}

/// `C4 RXBmmmmm WvvvvLpp`, and XOP's `8F` with the same layout. returns the map number.
fn vex3(state: &mut State, b1: u8, b2: u8, encoding: EncodingKind) -> u8 {
    begin_extended(state, encoding);
    if state.is_64() {
        state.ext_r = inverted(b1, 0x80, 8);
        state.ext_x = inverted(b1, 0x40, 8);
        state.ext_b = inverted(b1, 0x20, 8);
    }
    state.w = b2 & 0x80 != 0;
    state.vvvv = (!b2 >> 3) & 0xf;
    state.ll = (b2 >> 2) & 1;
    state.vl = state.ll;
    state.pp = b2 & 3;
    b1 & 0x1f
}

/// `62 RXBR'00mm Wvvvv1pp zL'LbV'aaa`. returns the map number.
///
/// the fixed bits are checked here and are never subject to `NO_INVALID_CHECK`: a clear bit 2 of
/// P1 is MVEX, which only Knights Corner understood.
fn evex_prefix(state: &mut State, p0: u8, p1: u8, p2: u8) -> Result<u8, ErrorKind> {
    if p1 & 0x04 == 0 || p0 & 0x0c != 0 {
        return Err(ErrorKind::InvalidEncoding);
    }

    begin_extended(state, EncodingKind::Evex);
    if state.is_64() {
        state.ext_r = inverted(p0, 0x80, 8);
        state.ext_x = inverted(p0, 0x40, 8);
        state.ext_x_rm = inverted(p0, 0x40, 16);
        state.ext_b = inverted(p0, 0x20, 8);
        state.ext_r2 = inverted(p0, 0x10, 16);
        state.ext_v2 = inverted(p2, 0x08, 16);
    }

    state.w = p1 & 0x80 != 0;
    state.vvvv = (!p1 >> 3) & 0xf;
    state.pp = p1 & 3;

    state.z = p2 & 0x80 != 0;
    state.ll = (p2 >> 5) & 3;
    state.vl = state.ll.min(2);
    state.b = p2 & 0x10 != 0;
    state.aaa = p2 & 7;

    if state.z && state.aaa == 0 {
        state.violation = true;
    }

    Ok(p0 & 3)
}
