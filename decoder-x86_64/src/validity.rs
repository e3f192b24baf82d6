//! encoding rules that don't affect what an instruction decodes to, only whether it's legal.
//!
//! every broken rule sets `State::violation`. the decoder turns that into `InvalidEncoding` unless
//! it was built with `NO_INVALID_CHECK`.

use crate::decoder::{OpSize, State};
use crate::instruction::EncodingKind;
use crate::operand::Operand;
use crate::register::RegisterBank;
use crate::tables::{InfoFlags, LBit, OpCodeInfo, WBit};

pub(crate) fn check(state: &mut State, info: &OpCodeInfo, ops: &[Operand]) {
    let broken = lock(state, info, ops)
        || mpx(state, info, ops)
        || extended(state, info)
        || evex(state, info, ops)
        || vsib(ops);

    if broken {
        state.violation = true;
    }
}

fn has_memory(ops: &[Operand]) -> bool {
    ops.iter().any(Operand::is_memory)
}

/// `lock` needs a lockable instruction writing to memory.
fn lock(state: &State, info: &OpCodeInfo, ops: &[Operand]) -> bool {
    if !state.prefixes.lock() || state.lock_used {
        return false;
    }
    let dest_is_memory = ops.first().map_or(false, Operand::is_memory);
    !(info.flags.contains(InfoFlags::LOCK) && dest_is_memory)
}

/// bound registers take no 16-bit addresses.
fn mpx(state: &State, info: &OpCodeInfo, ops: &[Operand]) -> bool {
    info.flags.contains(InfoFlags::MPX) && state.asize == OpSize::S16 && has_memory(ops)
}

/// vvvv, W and L of VEX, EVEX and XOP.
fn extended(state: &State, info: &OpCodeInfo) -> bool {
    if !matches!(state.encoding, EncodingKind::Vex | EncodingKind::Evex | EncodingKind::Xop) {
        return false;
    }

    if !info.uses_vvvv() {
        // the high bit of vvvv and V' don't exist outside 64-bit mode.
        if state.vvvv & 7 != 0 {
            return true;
        }
        if state.is_64() && (state.vvvv & 8 != 0 || (state.ext_v2 != 0 && !info.is_vsib())) {
            return true;
        }
    }

    let w_ok = match info.req.w {
        WBit::Any => true,
        WBit::W0 => !state.w,
        WBit::W1 => state.w,
    };

    // with embedded rounding, L'L is the rounding mode.
    let rounding = state.evex_er() && info.flags.intersects(InfoFlags::SAE | InfoFlags::ROUNDING);
    let l_ok = rounding
        || match info.req.l {
            LBit::Any => true,
            LBit::L0 => state.ll == 0,
            LBit::L1 => state.ll == 1,
            LBit::L2 => state.ll == 2,
        };

    !(w_ok && l_ok)
}

/// opmask, zeroing, broadcast and L'L.
fn evex(state: &State, info: &OpCodeInfo, ops: &[Operand]) -> bool {
    if state.encoding != EncodingKind::Evex {
        return false;
    }
    let flags = info.flags;

    if state.aaa != 0 && !flags.contains(InfoFlags::OPMASK) {
        return true;
    }
    if state.aaa == 0 && flags.contains(InfoFlags::REQUIRE_OPMASK) {
        return true;
    }
    if state.z {
        let dest_is_memory = ops.first().map_or(false, Operand::is_memory);
        if !flags.contains(InfoFlags::ZEROING) || dest_is_memory {
            return true;
        }
    }

    let er = state.evex_er();
    if state.b {
        let allowed = if er {
            flags.intersects(InfoFlags::SAE | InfoFlags::ROUNDING)
        } else {
            flags.contains(InfoFlags::BROADCAST) && has_memory(ops)
        };
        if !allowed {
            return true;
        }
    }

    state.ll == 3 && !er
}

/// a gather's destination, index and VEX mask must all differ. scatters have no such rule.
fn vsib(ops: &[Operand]) -> bool {
    if ops.first().map_or(true, Operand::is_memory) {
        return false;
    }
    let Some(index) = ops.iter().filter_map(Operand::mem).find(|mem| mem.vsib).and_then(|mem| mem.index) else {
        return false;
    };

    let vectors = ops
        .iter()
        .filter_map(Operand::reg)
        .filter(|reg| matches!(reg.bank(), RegisterBank::X | RegisterBank::Y | RegisterBank::Z));

    let mut seen = [false; 32];
    seen[index.num() as usize] = true;
    for reg in vectors {
        let num = reg.num() as usize;
        if seen[num] {
            return true;
        }
        seen[num] = true;
    }

    false
}
