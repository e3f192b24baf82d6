use decoder::ErrorKind;

use super::{decode, reject};
use crate::{Bitness, Code, EncodingKind, Operand, RegSpec};

fn regs(regs: &[RegSpec]) -> Vec<Operand> {
    regs.iter().copied().map(Operand::Register).collect()
}

#[test]
fn two_byte_prefix() {
    let instr = decode(Bitness::Bits64, "C5 F8 58 C1");
    assert_eq!(instr.code(), Code::VexVaddpsXmm);
    assert_eq!(instr.encoding(), EncodingKind::Vex);
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(0), RegSpec::xmm(1)]));

    let instr = decode(Bitness::Bits64, "C5 FC 58 C1");
    assert_eq!(instr.code(), Code::VexVaddpsYmm);
    assert_eq!(instr.ops(), regs(&[RegSpec::ymm(0), RegSpec::ymm(0), RegSpec::ymm(1)]));

    let instr = decode(Bitness::Bits64, "C5 F9 58 C1");
    assert_eq!(instr.code(), Code::VexVaddpdXmm);
}

#[test]
fn vvvv_and_rex_bits() {
    let instr = decode(Bitness::Bits64, "C5 B0 58 C1");
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(9), RegSpec::xmm(1)]));

    let instr = decode(Bitness::Bits64, "C4 C1 78 58 C1");
    assert_eq!(instr.code(), Code::VexVaddpsXmm);
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(0), RegSpec::xmm(9)]));

    let instr = decode(Bitness::Bits64, "C5 78 58 C1");
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::xmm(8)));
}

#[test]
fn w_is_ignored_where_unused() {
    let w0 = decode(Bitness::Bits64, "C4 E1 78 58 C1");
    let w1 = decode(Bitness::Bits64, "C4 E1 F8 58 C1");
    assert_eq!(w0.code(), w1.code());
    assert_eq!(w0.ops(), w1.ops());
}

#[test]
fn w_widens_general_purpose_destinations() {
    let instr = decode(Bitness::Bits64, "C4 E1 78 50 C1");
    assert_eq!(instr.code(), Code::VexVmovmskpsR32Xmm);
    assert_eq!(instr.ops(), regs(&[RegSpec::eax(), RegSpec::xmm(1)]));

    let instr = decode(Bitness::Bits64, "C4 E1 F8 50 C1");
    assert_eq!(instr.code(), Code::VexVmovmskpsR64Xmm);
    assert_eq!(instr.ops(), regs(&[RegSpec::rax(), RegSpec::xmm(1)]));
    assert_eq!(decode(Bitness::Bits64, "C4 E1 FC 50 C1").code(), Code::VexVmovmskpsR64Ymm);
    assert_eq!(decode(Bitness::Bits64, "C4 E1 FD D7 C1").code(), Code::VexVpmovmskbR64Ymm);

    let instr = decode(Bitness::Bits64, "C4 E3 F9 14 C8 05");
    assert_eq!(instr.code(), Code::VexVpextrbR64m8XmmImm8);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::rax()));
    assert_eq!(decode(Bitness::Bits64, "C4 E3 F9 15 C8 05").code(), Code::VexVpextrwR64m16XmmImm8);
    assert_eq!(decode(Bitness::Bits64, "C4 E3 F1 20 C0 05").code(), Code::VexVpinsrbXmmXmmR64m8Imm8);

    // W means nothing outside 64-bit mode.
    let instr = decode(Bitness::Bits32, "C4 E1 F8 50 C1");
    assert_eq!(instr.code(), Code::VexVmovmskpsR32Xmm);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::eax()));
}

#[test]
fn scalar_forms_ignore_l() {
    assert_eq!(decode(Bitness::Bits64, "C5 FA 58 C1").code(), Code::VexVaddssXmmXmmXmmm32);
    assert_eq!(decode(Bitness::Bits64, "C5 FE 58 C1").code(), Code::VexVaddssXmmXmmXmmm32);
}

#[test]
fn vzeroupper_and_vzeroall() {
    let instr = decode(Bitness::Bits64, "C5 F8 77");
    assert_eq!(instr.code(), Code::VexVzeroupper);
    assert_eq!(instr.op_count(), 0);
    assert_eq!(decode(Bitness::Bits64, "C5 FC 77").code(), Code::VexVzeroall);

    // vvvv must be unused.
    assert_eq!(reject(Bitness::Bits64, "C5 F0 77"), (ErrorKind::InvalidEncoding, 3));
}

#[test]
fn outside_64_bit_mode() {
    let instr = decode(Bitness::Bits32, "C5 F8 58 C1");
    assert_eq!(instr.code(), Code::VexVaddpsXmm);
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(0), RegSpec::xmm(1)]));

    // inverted R, X and B are ignored outside 64-bit mode.
    let instr = decode(Bitness::Bits32, "C4 E1 78 58 C1");
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(0), RegSpec::xmm(1)]));

    let mem = *decode(Bitness::Bits16, "C5 F8 58 07").op(2).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::bx()));
}

#[test]
fn mask_registers() {
    let instr = decode(Bitness::Bits64, "C5 F8 90 C1");
    assert_eq!(instr.code(), Code::VexKmovwKrKm16);
    assert_eq!(instr.ops(), regs(&[RegSpec::mask(0), RegSpec::mask(1)]));

    assert_eq!(decode(Bitness::Bits64, "C4 E1 F8 90 C1").code(), Code::VexKmovqKrKm64);
    assert_eq!(reject(Bitness::Bits64, "C5 FC 90 C1").0, ErrorKind::InvalidEncoding);
}

#[test]
fn gathers() {
    let instr = decode(Bitness::Bits64, "C4 E2 69 92 04 48");
    assert_eq!(instr.code(), Code::VexVgatherdpsXmm);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::xmm(0)));
    let mem = instr.op(1).mem().unwrap();
    assert!(mem.vsib);
    assert_eq!((mem.base, mem.index, mem.scale), (Some(RegSpec::rax()), Some(RegSpec::xmm(1)), 2));
    assert_eq!(instr.op(2), &Operand::Register(RegSpec::xmm(2)));

    // the index can't also be the destination.
    assert_eq!(reject(Bitness::Bits64, "C4 E2 69 92 04 40").0, ErrorKind::InvalidEncoding);
    // nor can a gather have a register operand.
    assert_eq!(reject(Bitness::Bits64, "C4 E2 69 92 C0").0, ErrorKind::InvalidOpcode);
}

#[test]
fn unknown_maps() {
    assert_eq!(reject(Bitness::Bits64, "C4 E0 78 58 C1"), (ErrorKind::InvalidOpcode, 3));
    assert_eq!(reject(Bitness::Bits64, "C4 E4 78 58 C1"), (ErrorKind::InvalidOpcode, 3));
}

#[test]
fn truncated() {
    assert_eq!(reject(Bitness::Bits64, "C5"), (ErrorKind::ExhaustedInput, 1));
    assert_eq!(reject(Bitness::Bits64, "C5 F8"), (ErrorKind::ExhaustedInput, 2));
    assert_eq!(reject(Bitness::Bits64, "C4 E1 78 58"), (ErrorKind::ExhaustedInput, 4));
}

#[test]
fn xop() {
    let instr = decode(Bitness::Bits64, "8F E8 78 C0 C1 05");
    assert_eq!(instr.code(), Code::XopVprotbImm8);
    assert_eq!(instr.encoding(), EncodingKind::Xop);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::xmm(1)));
    assert_eq!(instr.op(2).imm().unwrap().value, 5);

    // the fourth register lives in the high nibble of the trailing byte.
    let instr = decode(Bitness::Bits64, "8F E8 78 95 C1 20");
    assert_eq!(instr.code(), Code::XopVpmacsww);
    assert_eq!(instr.ops(), regs(&[RegSpec::xmm(0), RegSpec::xmm(0), RegSpec::xmm(1), RegSpec::xmm(2)]));

    // XOP has no mandatory prefixes.
    assert_eq!(reject(Bitness::Bits64, "8F E8 79 C0 C1 05"), (ErrorKind::InvalidOpcode, 3));
}
