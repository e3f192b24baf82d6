use decoder::ErrorKind;

use super::{decode, decode_with, reject, reject_with, try_decode_at};
use crate::{Bitness, Code, DecoderOptions, ImmKind, Operand, RegSpec};

#[test]
fn test_memory_with_immediate() {
    let instr = decode(Bitness::Bits16, "F6 00 5A");
    assert_eq!(instr.code(), Code::TestRm8Imm8);
    assert_eq!(instr.op_count(), 2);
    assert_eq!(instr.len(), 3);

    let mem = instr.op(0).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::bx()));
    assert_eq!(mem.index, Some(RegSpec::si()));
    assert_eq!(mem.segment, RegSpec::ds());
    assert_eq!(mem.address_size, 2);
    assert_eq!(instr.op(1).imm().unwrap().value, 0x5a);

    // /1 is an undocumented alias.
    assert_eq!(decode(Bitness::Bits16, "F6 08 5A").code(), Code::TestRm8Imm8Alt);
}

#[test]
fn arithmetic_by_operand_size() {
    let instr = decode(Bitness::Bits32, "01 D8");
    assert_eq!(instr.code(), Code::AddRm32R32);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::eax()), Operand::Register(RegSpec::ebx())]);

    assert_eq!(decode(Bitness::Bits16, "01 D8").code(), Code::AddRm16R16);
    assert_eq!(decode(Bitness::Bits32, "66 01 D8").code(), Code::AddRm16R16);
    assert_eq!(decode(Bitness::Bits64, "01 D8").code(), Code::AddRm32R32);
    assert_eq!(decode(Bitness::Bits64, "48 01 D8").code(), Code::AddRm64R64);
    // W beats 66.
    assert_eq!(decode(Bitness::Bits64, "66 48 01 D8").code(), Code::AddRm64R64);
}

#[test]
fn immediates_are_extended() {
    let instr = decode(Bitness::Bits32, "83 C0 FF");
    assert_eq!(instr.code(), Code::AddRm32Imm8);
    let imm = instr.op(1).imm().unwrap();
    assert_eq!(imm.value, 0xffff_ffff);
    assert_eq!(imm.kind, ImmKind::Imm8To32);

    let instr = decode(Bitness::Bits64, "48 81 C0 00000080");
    assert_eq!(instr.code(), Code::AddRm64Imm32);
    assert_eq!(instr.op(1).imm().unwrap().value, 0xffff_ffff_8000_0000);

    let instr = decode(Bitness::Bits64, "48 B8 1122334455667788");
    assert_eq!(instr.code(), Code::MovR64Imm64);
    assert_eq!(instr.op(1).imm().unwrap().value, 0x8877_6655_4433_2211);

    let instr = decode(Bitness::Bits32, "6A 80");
    assert_eq!(instr.code(), Code::PushdImm8);
    assert_eq!(instr.op(0).imm().unwrap().signed(), -128);
}

#[test]
fn enter_has_two_immediates() {
    let instr = decode(Bitness::Bits32, "C8 1000 01");
    assert_eq!(instr.code(), Code::EnterdImm16Imm8);
    assert_eq!(instr.op(0).imm().unwrap().value, 0x10);
    assert_eq!(instr.op(1).imm().unwrap().kind, ImmKind::Imm8Second);
    assert_eq!(instr.op(1).imm().unwrap().value, 1);
}

#[test]
fn stack_operations_default_to_64_bits() {
    let instr = decode(Bitness::Bits64, "50");
    assert_eq!(instr.code(), Code::PushR64);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::rax()));

    assert_eq!(decode(Bitness::Bits64, "66 50").code(), Code::PushR16);
    assert_eq!(decode(Bitness::Bits64, "41 50").op(0), &Operand::Register(RegSpec::r8()));
    assert_eq!(decode(Bitness::Bits32, "50").code(), Code::PushR32);
    assert_eq!(decode(Bitness::Bits64, "68 00000000").code(), Code::PushqImm32);
}

#[test]
fn near_branch_targets() {
    let instr = try_decode_at(Bitness::Bits32, "EB FE", DecoderOptions::empty(), 0x1000).unwrap();
    assert_eq!(instr.code(), Code::JmpRel8);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x1000, size: 4 });

    let instr = try_decode_at(Bitness::Bits64, "E8 00000000", DecoderOptions::empty(), 0x7fff_0000_0000).unwrap();
    assert_eq!(instr.code(), Code::CallRel64);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x7fff_0000_0005, size: 8 });

    let instr = try_decode_at(Bitness::Bits32, "70 10", DecoderOptions::empty(), 0x2000).unwrap();
    assert_eq!(instr.code(), Code::JoRel8);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x2012, size: 4 });
}

#[test]
fn near_branch_targets_wrap() {
    let instr = decode(Bitness::Bits16, "EB 80");
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0xff82, size: 2 });

    let instr = decode(Bitness::Bits16, "E9 FDFF");
    assert_eq!(instr.code(), Code::JmpRel16);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0, size: 2 });

    let instr = try_decode_at(Bitness::Bits32, "E9 00000000", DecoderOptions::empty(), 0xffff_fffe).unwrap();
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 3, size: 4 });
}

#[test]
fn operand_size_on_64_bit_branches() {
    let instr = decode(Bitness::Bits64, "66 E8 10000000");
    assert_eq!(instr.code(), Code::CallRel64);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x16, size: 8 });

    let instr = decode_with(Bitness::Bits64, "66 E8 1000", DecoderOptions::AMD);
    assert_eq!(instr.code(), Code::CallRel16);
    assert_eq!(instr.op(0), &Operand::NearBranch { target: 0x14, size: 2 });
}

#[test]
fn loops_take_their_code_from_address_size() {
    assert_eq!(decode(Bitness::Bits32, "E2 FE").code(), Code::LoopRel8Ecx);
    assert_eq!(decode(Bitness::Bits32, "67 E2 FE").code(), Code::LoopRel8Cx);
    assert_eq!(decode(Bitness::Bits64, "E3 FE").code(), Code::JrcxzRel8);
    assert_eq!(decode(Bitness::Bits64, "67 E3 FE").code(), Code::JecxzRel8);
}

#[test]
fn far_pointer() {
    let instr = decode(Bitness::Bits16, "EA 3412 00F0");
    assert_eq!(instr.code(), Code::JmpfPtr1616);
    assert_eq!(instr.op(0), &Operand::FarBranch { selector: 0xf000, offset: 0x1234, size: 2 });

    let instr = decode(Bitness::Bits32, "9A 78563412 0800");
    assert_eq!(instr.code(), Code::CallfPtr1632);
    assert_eq!(instr.op(0), &Operand::FarBranch { selector: 8, offset: 0x1234_5678, size: 4 });

    assert_eq!(reject(Bitness::Bits64, "EA 3412 00F0").0, ErrorKind::InvalidOpcode);
}

#[test]
fn memory_offsets() {
    let instr = decode(Bitness::Bits32, "A1 78563412");
    assert_eq!(instr.code(), Code::MovEaxMoffs32);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::eax()));
    let mem = instr.op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index, mem.displacement), (None, None, 0x1234_5678));

    let instr = decode(Bitness::Bits64, "48 A3 0800000000000080");
    assert_eq!(instr.code(), Code::MovMoffs64Rax);
    assert_eq!(instr.op(0).mem().unwrap().displacement, 0x8000_0000_0000_0008);

    let instr = decode(Bitness::Bits64, "67 A0 44332211");
    assert_eq!(instr.op(1).mem().unwrap().displacement, 0x1122_3344);
}

#[test]
fn x87() {
    let instr = decode(Bitness::Bits32, "D9 C1");
    assert_eq!(instr.code(), Code::FldSt0Sti);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::st0()), Operand::Register(RegSpec::st(1))]);

    let instr = decode(Bitness::Bits32, "D8 00");
    assert_eq!(instr.code(), Code::FaddM32fp);
    assert!(instr.op(0).is_memory());
}

#[test]
fn lead_bytes_outside_64_bit_mode() {
    // with a memory ModRM these are `les`, `lds`, `bound` and `pop`.
    assert_eq!(decode(Bitness::Bits32, "C4 06").code(), Code::LesR32M1632);
    assert_eq!(decode(Bitness::Bits16, "C5 06 3412").code(), Code::LdsR16M1616);
    assert_eq!(decode(Bitness::Bits32, "62 00").code(), Code::BoundR32M3232);
    assert_eq!(decode(Bitness::Bits32, "8F C0").code(), Code::PopRm32);
    assert_eq!(decode(Bitness::Bits64, "8F C0").code(), Code::PopRm64);
}

#[test]
fn legacy_only_opcodes() {
    assert_eq!(decode(Bitness::Bits32, "06").code(), Code::PushdEs);
    assert_eq!(reject(Bitness::Bits64, "06"), (ErrorKind::InvalidOpcode, 1));
    assert_eq!(decode(Bitness::Bits16, "27").code(), Code::Daa);
    assert_eq!(reject(Bitness::Bits64, "D6"), (ErrorKind::InvalidOpcode, 1));

    let instr = decode(Bitness::Bits64, "63 C1");
    assert_eq!(instr.code(), Code::MovsxdR32Rm32);
    assert_eq!(decode(Bitness::Bits32, "63 C1").code(), Code::ArplRm16R16);
}

#[test]
fn lea_has_no_register_form() {
    assert_eq!(decode(Bitness::Bits64, "48 8D 04 24").code(), Code::LeaR64M);
    assert_eq!(reject(Bitness::Bits64, "48 8D C0"), (ErrorKind::InvalidOpcode, 3));
}

#[test]
fn segment_register_moves() {
    let instr = decode(Bitness::Bits32, "8E D8");
    assert_eq!(instr.code(), Code::MovSregR32m16);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::ds()));

    // cs can't be loaded, and there's no seventh segment register.
    assert_eq!(reject(Bitness::Bits32, "8E C8").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits32, "8C F0"), (ErrorKind::InvalidOpcode, 2));
    assert_eq!(decode(Bitness::Bits32, "8C C8").op(1), &Operand::Register(RegSpec::cs()));
}

#[test]
fn missing_segment_registers_stay_invalid_without_checks() {
    let opts = DecoderOptions::NO_INVALID_CHECK;
    assert_eq!(reject_with(Bitness::Bits16, "8E F0", opts), (ErrorKind::InvalidOpcode, 2));
    assert_eq!(reject_with(Bitness::Bits32, "8C F8", opts), (ErrorKind::InvalidOpcode, 2));
    assert_eq!(reject_with(Bitness::Bits64, "8E F8", opts), (ErrorKind::InvalidOpcode, 2));
    assert_eq!(reject_with(Bitness::Bits64, "44 8C F0", opts), (ErrorKind::InvalidOpcode, 3));

    // loading cs is only an encoding rule.
    let instr = decode_with(Bitness::Bits32, "8E C8", opts);
    assert_eq!(instr.code(), Code::MovSregR32m16);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::cs()));
}

#[test]
fn xchg_with_accumulator() {
    let instr = decode(Bitness::Bits64, "91");
    assert_eq!(instr.code(), Code::XchgR32Eax);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::ecx()), Operand::Register(RegSpec::eax())]);

    // 90 is nop unless rex.b makes it r8.
    assert_eq!(decode(Bitness::Bits64, "90").code(), Code::Nop);
    let instr = decode(Bitness::Bits64, "49 90");
    assert_eq!(instr.code(), Code::XchgR64Rax);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::r8()));
}

#[test]
fn truncated_instructions() {
    assert_eq!(reject(Bitness::Bits32, "8B"), (ErrorKind::ExhaustedInput, 1));
    assert_eq!(reject(Bitness::Bits32, "8B 04"), (ErrorKind::ExhaustedInput, 2));
    assert_eq!(reject(Bitness::Bits32, "8B 80 0000"), (ErrorKind::ExhaustedInput, 4));
    assert_eq!(reject(Bitness::Bits16, "66 68 5AA5"), (ErrorKind::ExhaustedInput, 4));
    assert_eq!(reject(Bitness::Bits64, ""), (ErrorKind::ExhaustedInput, 0));
}
