use decoder::ErrorKind;

use super::{decode, decode_with, reject};
use crate::{Bitness, Code, DecoderOptions, ImmKind, Operand, RegSpec};

#[test]
fn operand_size_flips_push_immediate() {
    let instr = decode(Bitness::Bits16, "66 68 5AA51234");
    assert_eq!(instr.code(), Code::PushdImm32);
    assert_eq!(instr.op_count(), 1);
    assert_eq!(instr.len(), 6);

    let imm = instr.op(0).imm().unwrap();
    assert_eq!(imm.value, 0x3412a55a);
    assert_eq!(imm.kind, ImmKind::Imm32);

    let instr = decode(Bitness::Bits16, "68 5AA5");
    assert_eq!(instr.code(), Code::PushImm16);
    assert_eq!(instr.op(0).imm().unwrap().value, 0xa55a);
}

#[test]
fn fifteen_bytes_is_the_limit() {
    let valid = format!("{}90", "66 ".repeat(14));
    let instr = decode(Bitness::Bits16, &valid);
    assert_eq!(instr.code(), Code::Nop);
    assert_eq!(instr.len(), 15);

    let overlong = format!("{}90", "66 ".repeat(15));
    assert_eq!(reject(Bitness::Bits16, &overlong), (ErrorKind::TooLong, 15));

    // a long instruction that isn't all prefixes.
    let long = format!("{}8B 84 88 78563412", "26 ".repeat(8));
    assert_eq!(decode(Bitness::Bits32, &long).len(), 15);
    let longer = format!("{}8B 84 88 78563412", "26 ".repeat(9));
    assert_eq!(reject(Bitness::Bits32, &longer), (ErrorKind::TooLong, 15));
}

#[test]
fn lock_on_memory_destination() {
    let plain = decode(Bitness::Bits16, "F6 10");
    let locked = decode(Bitness::Bits16, "F0 F6 10");
    assert_eq!(plain.code(), Code::NotRm8);
    assert_eq!(locked.code(), Code::NotRm8);
    assert!(!plain.has_lock());
    assert!(locked.has_lock());
    assert_eq!(locked.op(0), plain.op(0));
}

#[test]
fn lock_on_register_destination() {
    assert_eq!(reject(Bitness::Bits16, "F0 F6 D0"), (ErrorKind::InvalidEncoding, 3));

    let instr = decode_with(Bitness::Bits16, "F0 F6 D0", DecoderOptions::NO_INVALID_CHECK);
    assert_eq!(instr.code(), Code::NotRm8);
    assert!(instr.has_lock());
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::al()));
}

#[test]
fn lock_on_unlockable_instruction() {
    // `cmp` never writes its destination.
    assert_eq!(reject(Bitness::Bits32, "F0 38 00").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "F0 90").0, ErrorKind::InvalidEncoding);
    assert!(decode(Bitness::Bits32, "F0 00 00").has_lock());
}

#[test]
fn rep_prefixes() {
    let instr = decode(Bitness::Bits32, "F3 A4");
    assert_eq!(instr.code(), Code::MovsbM8M8);
    assert!(instr.has_rep());
    assert!(!instr.has_repne());

    let dst = instr.op(0).mem().unwrap();
    assert_eq!((dst.segment, dst.base), (RegSpec::es(), Some(RegSpec::edi())));
    let src = instr.op(1).mem().unwrap();
    assert_eq!((src.segment, src.base), (RegSpec::ds(), Some(RegSpec::esi())));

    // the later of F2 and F3 is the one that counts.
    let instr = decode(Bitness::Bits32, "F3 F2 A4");
    assert!(instr.has_repne());
    assert!(!instr.has_rep());
}

#[test]
fn string_source_takes_segment_override() {
    let instr = decode(Bitness::Bits16, "26 A4");
    assert_eq!(instr.op(0).mem().unwrap().segment, RegSpec::es());
    assert_eq!(instr.op(1).mem().unwrap().segment, RegSpec::es());
    assert_eq!(instr.op(1).mem().unwrap().base, Some(RegSpec::si()));

    let instr = decode(Bitness::Bits64, "67 AA");
    assert_eq!(instr.code(), Code::StosbM8Al);
    assert_eq!(instr.op(0).mem().unwrap().base, Some(RegSpec::edi()));
}

#[test]
fn mandatory_prefix_is_not_a_rep() {
    let instr = decode(Bitness::Bits32, "F3 0F 10 C1");
    assert_eq!(instr.code(), Code::MovssXmmXmmm32);
    assert!(!instr.has_rep());

    // 66 selecting the SSE form doesn't also shrink the operand size.
    let instr = decode(Bitness::Bits32, "66 0F 38 00 C1");
    assert_eq!(instr.code(), Code::PshufbXmmXmmm128);

    let instr = decode(Bitness::Bits32, "66 F3 0F B8 C1");
    assert_eq!(instr.code(), Code::PopcntR16Rm16);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::ax()));
}

#[test]
fn hardware_lock_elision() {
    let instr = decode(Bitness::Bits32, "F2 F0 87 03");
    assert_eq!(instr.code(), Code::XchgRm32R32);
    assert!(instr.has_xacquire());
    assert!(instr.has_lock());
    assert!(!instr.has_repne());

    // xchg with memory is implicitly locked.
    assert!(decode(Bitness::Bits32, "F2 87 03").has_xacquire());

    let instr = decode(Bitness::Bits32, "F3 88 03");
    assert_eq!(instr.code(), Code::MovRm8R8);
    assert!(instr.has_xrelease());

    // mov only knows xrelease.
    let instr = decode(Bitness::Bits32, "F2 88 03");
    assert!(!instr.has_xacquire());
    assert!(instr.has_repne());

    // a register destination can't be elided.
    let instr = decode(Bitness::Bits32, "F2 87 C3");
    assert!(!instr.has_xacquire());
    assert!(instr.has_repne());
}

#[test]
fn segment_overrides() {
    let instr = decode(Bitness::Bits32, "2E 8B 00");
    assert_eq!(instr.segment_prefix(), Some(RegSpec::cs()));
    assert_eq!(instr.op(1).mem().unwrap().segment, RegSpec::cs());

    let instr = decode(Bitness::Bits32, "8B 00");
    assert_eq!(instr.segment_prefix(), None);
    assert_eq!(instr.op(1).mem().unwrap().segment, RegSpec::ds());

    let instr = decode(Bitness::Bits64, "64 2E 8B 00");
    assert_eq!(instr.op(1).mem().unwrap().segment, RegSpec::fs());

    let instr = decode(Bitness::Bits32, "64 2E 8B 00");
    assert_eq!(instr.op(1).mem().unwrap().segment, RegSpec::cs());
}

#[test]
fn rex_prefix() {
    let instr = decode(Bitness::Bits64, "48 89 C8");
    assert_eq!(instr.code(), Code::MovRm64R64);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::rax()));
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::rcx()));

    // a rex prefix followed by another prefix is ignored.
    let instr = decode(Bitness::Bits64, "48 66 89 C8");
    assert_eq!(instr.code(), Code::MovRm16R16);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::ax()));

    let instr = decode(Bitness::Bits64, "4D 89 C8");
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::r8()));
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::r9()));
}

#[test]
fn rex_renames_byte_registers() {
    let instr = decode(Bitness::Bits64, "88 E0");
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::al()));
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::ah()));

    let instr = decode(Bitness::Bits64, "40 88 E0");
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::al()));
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::spl()));

    let instr = decode(Bitness::Bits64, "44 88 E0");
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::r12b()));
}

#[test]
fn rex_bytes_are_opcodes_outside_64_bit_mode() {
    let instr = decode(Bitness::Bits32, "48");
    assert_eq!(instr.code(), Code::DecR32);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::eax()));
}

#[test]
fn extended_encodings_reject_legacy_prefixes() {
    assert_eq!(decode(Bitness::Bits64, "C5 F8 58 C1").code(), Code::VexVaddpsXmm);
    assert_eq!(reject(Bitness::Bits64, "66 C5 F8 58 C1").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "F3 C5 F8 58 C1").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "48 C5 F8 58 C1").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "66 62 F1 74 48 58 C2").0, ErrorKind::InvalidEncoding);

    // segment and address size prefixes are fine.
    assert_eq!(decode(Bitness::Bits64, "2E 67 C5 F8 58 00").code(), Code::VexVaddpsXmm);
}
