//! memory operands: ModRM, SIB and displacement.

use decoder::{ByteSource, ErrorKind};

use crate::decoder::{Bytes, OpSize, State};
use crate::instruction::EncodingKind;
use crate::operand::MemoryOperand;
use crate::register::{RegSpec, RegisterBank};
use crate::tables::{RegKind, TupleType};

/// base and index of each 16-bit ModRM.rm value.
#[rustfmt::skip]
const ADDR16: [(u8, Option<u8>); 8] = [
    (3, Some(6)), (3, Some(7)), // [bx+si], [bx+di]
    (5, Some(6)), (5, Some(7)), // [bp+si], [bp+di]
    (6, None), (7, None),       // [si], [di]
    (5, None), (3, None),       // [bp], [bx]
];

pub(crate) fn gpr(num: u8, size: OpSize) -> RegSpec {
    let bank = match size {
        OpSize::S16 => RegisterBank::W,
        OpSize::S32 => RegisterBank::D,
        OpSize::S64 => RegisterBank::Q,
    };
    RegSpec::from_parts(num, bank)
}

/// the memory operand named by ModRM.rm. the caller has made sure ModRM.mod isn't 3.
///
/// `vsib` is the register class of a vector index, for gathers and scatters. `tuple` scales an
/// EVEX disp8.
pub(crate) fn read_memory<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    vsib: Option<RegKind>,
    tuple: TupleType,
) -> Result<MemoryOperand, ErrorKind> {
    let modrm = state.modrm(bytes)?;
    let mem = if state.asize == OpSize::S16 {
        if vsib.is_some() {
            state.violation = true;
        }
        read_m16(bytes, state, modrm, tuple)?
    } else {
        read_m32(bytes, state, modrm, vsib, tuple)?
    };

    Ok(mem)
}

fn read_m16<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &State,
    modrm: u8,
    tuple: TupleType,
) -> Result<MemoryOperand, ErrorKind> {
    let mode = modrm >> 6;
    let rm = modrm & 7;

    if mode == 0 && rm == 6 {
        let disp = bytes.read_num(2)?;
        return Ok(MemoryOperand::absolute(state.segment_or(RegSpec::ds()), disp, 2, 2));
    }

    let (base, index) = ADDR16[rm as usize];
    let base = RegSpec::w(base);
    let (disp, disp_size) = match mode {
        0 => (0, 0),
        1 => (disp8(bytes, state, tuple)?, 1),
        _ => (bytes.read_num(2)? as u16 as i16 as i64, 2),
    };

    let default = if base.is_stack_frame() { RegSpec::ss() } else { RegSpec::ds() };
    Ok(MemoryOperand {
        segment: state.segment_or(default),
        base: Some(base),
        index: index.map(RegSpec::w),
        scale: 1,
        displacement: disp as u16 as u64,
        disp_size,
        address_size: 2,
        vsib: false,
    })
}

fn read_m32<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    state: &mut State,
    modrm: u8,
    vsib: Option<RegKind>,
    tuple: TupleType,
) -> Result<MemoryOperand, ErrorKind> {
    let mode = modrm >> 6;
    let rm = modrm & 7;
    let asize = state.asize;

    let mut base = None;
    let mut index = None;
    let mut scale = 1;
    let mut ip_relative = false;
    // disp32 with no base register, either from SIB or from `mod=0 rm=5`.
    let mut absolute = false;

    if rm == 4 {
        let sib = bytes.next()?;
        scale = 1 << (sib >> 6);

        let idx = ((sib >> 3) & 7) | state.ext_x;
        index = match vsib {
            Some(kind) => Some(vector_index(state, kind, idx)),
            // `rsp` can't be an index: 4 means there isn't one.
            None if idx == 4 => None,
            None => Some(gpr(idx, asize)),
        };

        if sib & 7 == 5 && mode == 0 {
            absolute = true;
        } else {
            base = Some(gpr((sib & 7) | state.ext_b, asize));
        }
    } else {
        if vsib.is_some() {
            state.violation = true;
        }
        if rm == 5 && mode == 0 {
            if state.is_64() {
                ip_relative = true;
                base = Some(if asize == OpSize::S64 { RegSpec::rip() } else { RegSpec::eip() });
            } else {
                absolute = true;
            }
        } else {
            base = Some(gpr(rm | state.ext_b, asize));
        }
    }

    let (disp, disp_size) = match mode {
        0 if absolute || ip_relative => (bytes.read_num(4)? as u32 as i32 as i64, 4),
        0 => (0, 0),
        1 => (disp8(bytes, state, tuple)?, 1),
        _ => (bytes.read_num(4)? as u32 as i32 as i64, 4),
    };

    let displacement = if ip_relative || asize == OpSize::S64 {
        disp as u64
    } else {
        disp as u32 as u64
    };

    let default = match base {
        Some(base) if base.is_stack_frame() => RegSpec::ss(),
        _ => RegSpec::ds(),
    };

    Ok(MemoryOperand {
        segment: state.segment_or(default),
        base,
        index,
        scale,
        displacement,
        disp_size,
        address_size: asize.bytes(),
        vsib: vsib.is_some(),
    })
}

/// a VSIB index. EVEX V' selects the upper sixteen.
fn vector_index(state: &State, kind: RegKind, idx: u8) -> RegSpec {
    let num = idx | state.ext_v2;
    let bank = match kind {
        RegKind::Ymm => RegisterBank::Y,
        RegKind::Zmm => RegisterBank::Z,
        _ => RegisterBank::X,
    };
    RegSpec::from_parts(num, bank)
}

/// a sign-extended disp8, scaled by the access size under EVEX.
fn disp8<S: ByteSource>(bytes: &mut Bytes<'_, S>, state: &State, tuple: TupleType) -> Result<i64, ErrorKind> {
    let disp = bytes.next()? as i8 as i64;
    Ok(disp * disp8_scale(state, tuple))
}

/// the compressed displacement factor N of an EVEX memory operand.
pub(crate) fn disp8_scale(state: &State, tuple: TupleType) -> i64 {
    if state.encoding != EncodingKind::Evex {
        return 1;
    }

    let vector: i64 = 16 << state.vl;
    let element: i64 = if state.w { 8 } else { 4 };
    match tuple {
        TupleType::None => 1,
        TupleType::Full if state.b => element,
        TupleType::Full | TupleType::FullMem => vector,
        TupleType::Half if state.b => 4,
        TupleType::Half | TupleType::HalfMem => vector / 2,
        TupleType::QuarterMem => vector / 4,
        TupleType::EighthMem => vector / 8,
        TupleType::Mem128 => 16,
        TupleType::Movddup if state.vl == 0 => 8,
        TupleType::Movddup => vector,
        TupleType::Tuple1Scalar => element,
        TupleType::Tuple1Scalar1 => 1,
        TupleType::Tuple1Scalar2 => 2,
        TupleType::Tuple1Scalar4 => 4,
        TupleType::Tuple1Scalar8 => 8,
        TupleType::Tuple2 => element * 2,
        TupleType::Tuple4 => element * 4,
        TupleType::Tuple8 => element * 8,
    }
}
