//! turning a template's operand list into operands.
//!
//! operands are resolved in two passes. everything located by ModRM (registers, memory, SIB and
//! displacement) comes first, then everything read from the bytes after the displacement, in
//! template order. templates list operands in Intel order, which doesn't always match the order
//! their bytes appear in.

use decoder::{ByteSource, ErrorKind};

use crate::decoder::{Bytes, OpSize, State};
use crate::modrm::{self, gpr};
use crate::operand::{ImmKind, Immediate, MemoryOperand, Operand};
use crate::options::DecoderOptions;
use crate::register::{RegSpec, RegisterBank};
use crate::tables::{OpCodeInfo, OpSpec, RegKind};

pub(crate) fn resolve<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    info: &OpCodeInfo,
    operands: &mut [Operand; 5],
) -> Result<(), ErrorKind> {
    for (idx, spec) in info.ops.iter().enumerate() {
        if !spec.reads_trailing_bytes() {
            operands[idx] = resolve_one(bytes, state, info, idx, *spec)?;
        }
    }
    for (idx, spec) in info.ops.iter().enumerate() {
        if spec.reads_trailing_bytes() {
            operands[idx] = resolve_one(bytes, state, info, idx, *spec)?;
        }
    }
    Ok(())
}

fn resolve_one<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    info: &OpCodeInfo,
    idx: usize,
    spec: OpSpec,
) -> Result<Operand, ErrorKind> {
    let operand = match spec {
        OpSpec::Reg(kind) => {
            let modrm = state.modrm(bytes)?;
            Operand::Register(reg_field(state, kind, (modrm >> 3) & 7, idx)?)
        }
        OpSpec::Rm(kind) => {
            let modrm = state.modrm(bytes)?;
            if modrm >> 6 == 3 {
                Operand::Register(rm_field(state, kind, modrm & 7))
            } else {
                Operand::Memory(modrm::read_memory(bytes, state, None, info.tuple)?)
            }
        }
        OpSpec::RmReg(kind) => {
            let modrm = state.modrm(bytes)?;
            Operand::Register(rm_field(state, kind, modrm & 7))
        }
        OpSpec::Mem | OpSpec::Vsib(_) => {
            let modrm = state.modrm(bytes)?;
            if modrm >> 6 == 3 {
                return Err(ErrorKind::InvalidOpcode);
            }
            let vsib = match spec {
                OpSpec::Vsib(kind) => Some(kind),
                _ => None,
            };
            Operand::Memory(modrm::read_memory(bytes, state, vsib, info.tuple)?)
        }
        OpSpec::OpReg(kind) => {
            let num = (state.opcode & 7) | state.ext_b;
            Operand::Register(register(state, kind, num))
        }
        OpSpec::Vvvv(kind) => Operand::Register(vvvv_field(state, kind)),
        OpSpec::Is4(kind) => {
            let imm = bytes.next()?;
            let num = if state.is_64() { imm >> 4 } else { (imm >> 4) & 7 };
            Operand::Register(register(state, kind, num))
        }
        OpSpec::Implicit(num, kind) => Operand::Register(register(state, kind, num)),
        OpSpec::Imm8 => immediate(bytes, ImmKind::Imm8)?,
        OpSpec::Imm8Sx => {
            let kind = match state.osize {
                OpSize::S16 => ImmKind::Imm8To16,
                OpSize::S32 => ImmKind::Imm8To32,
                OpSize::S64 => ImmKind::Imm8To64,
            };
            immediate(bytes, kind)?
        }
        OpSpec::Imm16 => immediate(bytes, ImmKind::Imm16)?,
        OpSpec::ImmZ => {
            let kind = match state.osize {
                OpSize::S16 => ImmKind::Imm16,
                OpSize::S32 => ImmKind::Imm32,
                OpSize::S64 => ImmKind::Imm32To64,
            };
            immediate(bytes, kind)?
        }
        OpSpec::ImmV => {
            let kind = match state.osize {
                OpSize::S16 => ImmKind::Imm16,
                OpSize::S32 => ImmKind::Imm32,
                OpSize::S64 => ImmKind::Imm64,
            };
            immediate(bytes, kind)?
        }
        OpSpec::Imm32 => immediate(bytes, ImmKind::Imm32)?,
        OpSpec::ImmOne => Operand::Immediate(Immediate::extend(1, ImmKind::Imm8)),
        OpSpec::Imm8Second => immediate(bytes, ImmKind::Imm8Second)?,
        // the displacement is kept as the target until the instruction's length is known.
        OpSpec::Rel8 => {
            let disp = bytes.next()? as i8 as i64;
            Operand::NearBranch { target: disp as u64, size: state.osize.bytes() }
        }
        OpSpec::RelZ => {
            let disp = match state.osize {
                OpSize::S16 => bytes.read_num(2)? as u16 as i16 as i64,
                _ => bytes.read_num(4)? as u32 as i32 as i64,
            };
            Operand::NearBranch { target: disp as u64, size: state.osize.bytes() }
        }
        OpSpec::FarPtr => {
            let size = if state.osize == OpSize::S16 { 2 } else { 4 };
            let offset = bytes.read_num(size)? as u32;
            let selector = bytes.read_num(2)? as u16;
            Operand::FarBranch { selector, offset, size }
        }
        OpSpec::Moffs => {
            let width = state.asize.bytes();
            let address = bytes.read_num(width)?;
            let segment = state.segment_or(RegSpec::ds());
            Operand::Memory(MemoryOperand::absolute(segment, address, width, width))
        }
        OpSpec::StrSrc => Operand::Memory(string_operand(state, state.segment_or(RegSpec::ds()), 6)),
        // es:[rdi] can't be overridden.
        OpSpec::StrDst => Operand::Memory(string_operand(state, RegSpec::es(), 7)),
        OpSpec::Xlat => Operand::Memory(MemoryOperand {
            index: Some(RegSpec::al()),
            ..string_operand(state, state.segment_or(RegSpec::ds()), 3)
        }),
    };

    Ok(operand)
}

fn immediate<S: ByteSource>(bytes: &mut Bytes<'_, S>, kind: ImmKind) -> Result<Operand, ErrorKind> {
    let raw = bytes.read_num(kind.encoded_width())?;
    Ok(Operand::Immediate(Immediate::extend(raw, kind)))
}

/// `seg:[base]` with the base sized by the address size.
fn string_operand(state: &State, segment: RegSpec, base: u8) -> MemoryOperand {
    MemoryOperand {
        segment,
        base: Some(gpr(base, state.asize)),
        index: None,
        scale: 1,
        displacement: 0,
        disp_size: 0,
        address_size: state.asize.bytes(),
        vsib: false,
    }
}

/// register `num` of class `kind`, with register extensions already applied to `num`.
fn register(state: &mut State, kind: RegKind, num: u8) -> RegSpec {
    match kind {
        RegKind::Byte => RegSpec::gp_byte(num, state.prefixes.rex().present()),
        RegKind::Word => gpr(num, OpSize::S16),
        RegKind::Dword => gpr(num, OpSize::S32),
        RegKind::Qword => gpr(num, OpSize::S64),
        RegKind::V => gpr(num, state.osize),
        RegKind::Y if state.osize == OpSize::S64 => gpr(num, OpSize::S64),
        RegKind::Y => gpr(num, OpSize::S32),
        RegKind::Z if state.osize == OpSize::S16 => gpr(num, OpSize::S16),
        RegKind::Z => gpr(num, OpSize::S32),
        RegKind::Mm => RegSpec::from_parts(num & 7, RegisterBank::MM),
        RegKind::Xmm => RegSpec::from_parts(num, RegisterBank::X),
        RegKind::Ymm => RegSpec::from_parts(num, RegisterBank::Y),
        RegKind::Zmm => RegSpec::from_parts(num, RegisterBank::Z),
        RegKind::Vx => {
            let bank = match state.vl {
                0 => RegisterBank::X,
                1 => RegisterBank::Y,
                _ => RegisterBank::Z,
            };
            RegSpec::from_parts(num, bank)
        }
        RegKind::K => RegSpec::from_parts(num & 7, RegisterBank::K),
        RegKind::St => RegSpec::from_parts(num & 7, RegisterBank::ST),
        RegKind::Bnd => {
            if num > 3 {
                state.violation = true;
            }
            RegSpec::from_parts(num & 3, RegisterBank::BND)
        }
        RegKind::Seg => RegSpec::from_parts(num, RegisterBank::S),
        RegKind::Cr => RegSpec::from_parts(num, RegisterBank::CR),
        RegKind::Dr => RegSpec::from_parts(num, RegisterBank::DR),
        RegKind::Tr => RegSpec::from_parts(num & 7, RegisterBank::TR),
    }
}

/// a register named by ModRM.reg.
fn reg_field(state: &mut State, kind: RegKind, reg: u8, idx: usize) -> Result<RegSpec, ErrorKind> {
    let spec = match kind {
        RegKind::Mm | RegKind::St | RegKind::Tr => register(state, kind, reg),
        RegKind::K => {
            if state.ext_r != 0 || state.ext_r2 != 0 {
                state.violation = true;
            }
            register(state, kind, reg)
        }
        RegKind::Seg => {
            // there is no sreg 6 or 7.
            if reg > 5 {
                return Err(ErrorKind::InvalidOpcode);
            }
            // `mov cs, r/m16`
            if idx == 0 && reg == 1 {
                state.violation = true;
            }
            register(state, kind, reg)
        }
        RegKind::Cr => {
            let mut num = reg | state.ext_r;
            // AMD spells cr8 as `lock mov cr0`.
            if num == 0 && state.prefixes.lock() && !state.options.contains(DecoderOptions::NO_LOCK_MOV_CR0) {
                num = 8;
                state.lock_used = true;
            }
            if !matches!(num, 0 | 2 | 3 | 4 | 8) {
                state.violation = true;
            }
            register(state, kind, num)
        }
        RegKind::Dr => {
            if state.ext_r != 0 {
                state.violation = true;
            }
            register(state, kind, reg)
        }
        RegKind::Bnd => {
            let num = reg | state.ext_r;
            register(state, kind, num)
        }
        kind if kind.is_vector() => {
            let num = reg | state.ext_r | state.ext_r2;
            register(state, kind, num)
        }
        kind => {
            if state.ext_r2 != 0 {
                state.violation = true;
            }
            let num = reg | state.ext_r;
            register(state, kind, num)
        }
    };
    Ok(spec)
}

/// a register named by ModRM.rm with ModRM.mod of 3.
fn rm_field(state: &mut State, kind: RegKind, rm: u8) -> RegSpec {
    match kind {
        RegKind::Mm | RegKind::St | RegKind::K | RegKind::Tr => register(state, kind, rm),
        kind if kind.is_vector() => {
            let num = rm | state.ext_b | state.ext_x_rm;
            register(state, kind, num)
        }
        kind => {
            let num = rm | state.ext_b;
            register(state, kind, num)
        }
    }
}

/// a register named by VEX/EVEX/XOP vvvv.
fn vvvv_field(state: &mut State, kind: RegKind) -> RegSpec {
    let num = state.vvvv_reg();
    match kind {
        RegKind::K => {
            if num > 7 || state.ext_v2 != 0 {
                state.violation = true;
            }
            register(state, kind, num)
        }
        kind if kind.is_vector() => {
            let num = num | state.ext_v2;
            register(state, kind, num)
        }
        kind => register(state, kind, num),
    }
}
