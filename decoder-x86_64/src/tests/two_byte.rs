use decoder::ErrorKind;

use super::{decode, decode_with, reject, reject_with};
use crate::{Bitness, Code, DecoderOptions, EncodingKind, Operand, RegSpec, RegisterBank};

#[test]
fn multi_byte_nops() {
    assert_eq!(decode(Bitness::Bits32, "0F 1F 44 00 00").code(), Code::NopRm32);
    assert_eq!(decode(Bitness::Bits32, "66 0F 1F 44 00 00").code(), Code::NopRm16);
    assert_eq!(decode(Bitness::Bits64, "66 2E 0F 1F 84 00 00000000").code(), Code::NopRm16);
    assert_eq!(decode(Bitness::Bits64, "48 0F 1F 00").code(), Code::NopRm64);
}

#[test]
fn groups_selected_by_modrm_rm() {
    assert_eq!(decode(Bitness::Bits64, "0F 01 D0").code(), Code::Xgetbv);
    assert_eq!(decode(Bitness::Bits64, "0F 01 CA").code(), Code::Clac);
    assert_eq!(decode(Bitness::Bits64, "0F 01 F8").code(), Code::Swapgs);
    assert_eq!(reject(Bitness::Bits32, "0F 01 F8"), (ErrorKind::InvalidOpcode, 3));
    assert_eq!(reject(Bitness::Bits64, "0F 01 C5"), (ErrorKind::InvalidOpcode, 3));
}

#[test]
fn enclv_leads_the_vmx_row() {
    for bitness in [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64] {
        let instr = decode(bitness, "0F 01 C0");
        assert_eq!(instr.code(), Code::Enclv);
        assert_eq!(instr.op_count(), 0);
    }
    assert_eq!(decode(Bitness::Bits64, "0F 01 C1").code(), Code::Vmcall);
}

#[test]
fn no_operands() {
    for (hex, code) in [("0F A2", Code::Cpuid), ("0F 31", Code::Rdtsc), ("0F 0B", Code::Ud2)] {
        let instr = decode(Bitness::Bits64, hex);
        assert_eq!(instr.code(), code);
        assert_eq!(instr.op_count(), 0);
        assert_eq!(instr.op(0), &Operand::Nothing);
    }
}

#[test]
fn cmpxchg8b() {
    assert_eq!(decode(Bitness::Bits32, "0F C7 08").code(), Code::Cmpxchg8bM64);
    assert_eq!(decode(Bitness::Bits64, "48 0F C7 08").code(), Code::Cmpxchg16bM128);
    assert!(decode(Bitness::Bits32, "F0 0F C7 08").has_lock());
}

#[test]
fn near_jcc() {
    let instr = decode(Bitness::Bits32, "0F 84 00010000");
    assert_eq!(instr.code(), Code::JeRel32);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x106, size: 4 });

    let instr = decode(Bitness::Bits16, "0F 84 0001");
    assert_eq!(instr.code(), Code::JeRel16);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x104, size: 2 });
}

#[test]
fn zero_and_sign_extension() {
    let instr = decode(Bitness::Bits32, "0F B6 C1");
    assert_eq!(instr.code(), Code::MovzxR32Rm8);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::eax()), Operand::Register(RegSpec::cl())]);

    let instr = decode(Bitness::Bits64, "48 0F BF C1");
    assert_eq!(instr.code(), Code::MovsxR64Rm16);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::cx()));
}

#[test]
fn control_and_debug_registers() {
    let instr = decode(Bitness::Bits32, "0F 20 C0");
    assert_eq!(instr.code(), Code::MovR32Cr);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::eax()), Operand::Register(RegSpec::cr0())]);

    let instr = decode(Bitness::Bits32, "0F 22 D8");
    assert_eq!(instr.code(), Code::MovCrR32);
    let cr = instr.op(0).reg().unwrap();
    assert_eq!((cr.bank(), cr.num()), (RegisterBank::CR, 3));

    // mod is ignored: these are always register forms.
    assert_eq!(decode(Bitness::Bits32, "0F 20 00").op(0), &Operand::Register(RegSpec::eax()));

    let instr = decode(Bitness::Bits64, "44 0F 20 C0");
    assert_eq!(instr.code(), Code::MovR64Cr);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::cr8()));

    assert_eq!(reject(Bitness::Bits32, "0F 20 C8").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "44 0F 21 C0").0, ErrorKind::InvalidEncoding);

    let dr = decode(Bitness::Bits32, "0F 21 F8").op(1).reg().unwrap();
    assert_eq!((dr.bank(), dr.num()), (RegisterBank::DR, 7));
}

#[test]
fn sse_by_mandatory_prefix() {
    let instr = decode(Bitness::Bits64, "0F 58 C1");
    assert_eq!(instr.code(), Code::AddpsXmmXmmm128);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::xmm(0)), Operand::Register(RegSpec::xmm(1))]);

    assert_eq!(decode(Bitness::Bits64, "66 0F 58 C1").code(), Code::AddpdXmmXmmm128);
    assert_eq!(decode(Bitness::Bits64, "F3 0F 58 C1").code(), Code::AddssXmmXmmm32);
    assert_eq!(decode(Bitness::Bits64, "F2 0F 58 C1").code(), Code::AddsdXmmXmmm64);
    // F3 and F2 outrank 66.
    assert_eq!(decode(Bitness::Bits64, "66 F2 0F 58 C1").code(), Code::AddsdXmmXmmm64);

    let instr = decode(Bitness::Bits64, "45 0F 58 C1");
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::xmm(8)), Operand::Register(RegSpec::xmm(9))]);

    assert_eq!(reject(Bitness::Bits64, "F3 0F 28 C1").0, ErrorKind::InvalidOpcode);
}

#[test]
fn three_byte_maps() {
    let instr = decode(Bitness::Bits32, "0F 38 00 C1");
    assert_eq!(instr.code(), Code::PshufbMmMmm64);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::mm(0)));

    let instr = decode(Bitness::Bits32, "66 0F 3A 0F C1 08");
    assert_eq!(instr.code(), Code::PalignrXmmXmmm128Imm8);
    assert_eq!(instr.op(2).imm().unwrap().value, 8);
}

#[test]
fn three_d_now() {
    let instr = decode(Bitness::Bits32, "0F 0F C1 9E");
    assert_eq!(instr.code(), Code::PfaddMmMmm64);
    assert_eq!(instr.encoding(), EncodingKind::D3Now);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::mm(0)), Operand::Register(RegSpec::mm(1))]);

    // the suffix follows the displacement.
    let instr = decode(Bitness::Bits32, "0F 0F 40 10 B4");
    assert_eq!(instr.code(), Code::PfmulMmMmm64);
    assert_eq!(instr.op(1).mem().unwrap().displacement, 0x10);

    assert_eq!(reject(Bitness::Bits32, "0F 0F C1 00"), (ErrorKind::InvalidOpcode, 4));
    assert_eq!(reject(Bitness::Bits32, "0F 0F C1"), (ErrorKind::ExhaustedInput, 3));
}

#[test]
fn bit_scan_and_count() {
    assert_eq!(decode(Bitness::Bits32, "0F BC C1").code(), Code::BsfR32Rm32);
    assert_eq!(decode(Bitness::Bits32, "F3 0F BC C1").code(), Code::TzcntR32Rm32);

    let instr = decode_with(Bitness::Bits32, "F3 0F BC C1", DecoderOptions::NO_MPFX_0FBC);
    assert_eq!(instr.code(), Code::BsfR32Rm32);
    assert!(instr.has_rep());

    assert_eq!(decode(Bitness::Bits32, "F3 0F BD C1").code(), Code::LzcntR32Rm32);
    assert_eq!(decode_with(Bitness::Bits32, "F3 0F BD C1", DecoderOptions::NO_MPFX_0FBD).code(), Code::BsrR32Rm32);
}

#[test]
fn unmapped() {
    assert_eq!(reject(Bitness::Bits32, "0F 04"), (ErrorKind::InvalidOpcode, 2));
    // NO_INVALID_CHECK doesn't make an unmapped opcode mean anything.
    assert_eq!(reject_with(Bitness::Bits32, "0F 04", DecoderOptions::NO_INVALID_CHECK), (ErrorKind::InvalidOpcode, 2));
    assert_eq!(reject(Bitness::Bits32, "0F"), (ErrorKind::ExhaustedInput, 1));
}
