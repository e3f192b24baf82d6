use super::{decode, try_decode_at};
use crate::{Bitness, Code, DecoderOptions, RegSpec};

#[test]
fn sixteen_bit_addressing() {
    let instr = decode(Bitness::Bits16, "8B 46 FE");
    assert_eq!(instr.code(), Code::MovR16Rm16);
    let mem = instr.op(1).mem().unwrap();
    assert_eq!(mem.segment, RegSpec::ss());
    assert_eq!(mem.base, Some(RegSpec::bp()));
    assert_eq!(mem.index, None);
    assert_eq!(mem.displacement, 0xfffe);
    assert_eq!(mem.disp_size, 1);

    let mem = *decode(Bitness::Bits16, "8B 06 3412").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (None, None));
    assert_eq!((mem.displacement, mem.disp_size), (0x1234, 2));
    assert_eq!(mem.segment, RegSpec::ds());

    let mem = *decode(Bitness::Bits16, "8B 83 0080").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (Some(RegSpec::bp()), Some(RegSpec::di())));
    assert_eq!(mem.segment, RegSpec::ss());
    assert_eq!(mem.displacement, 0x8000);
}

#[test]
fn address_size_override() {
    let mem = *decode(Bitness::Bits16, "67 8B 04 24").op(1).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::esp()));
    assert_eq!(mem.address_size, 4);

    let mem = *decode(Bitness::Bits32, "67 8B 00").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (Some(RegSpec::bx()), Some(RegSpec::si())));
    assert_eq!(mem.address_size, 2);
}

#[test]
fn sib_forms() {
    let mem = *decode(Bitness::Bits32, "8B 04 24").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (Some(RegSpec::esp()), None));
    assert_eq!(mem.segment, RegSpec::ss());

    // no base: disp32 with a scaled index.
    let mem = *decode(Bitness::Bits32, "8B 04 8D 00100000").op(1).mem().unwrap();
    assert_eq!(mem.base, None);
    assert_eq!(mem.index, Some(RegSpec::ecx()));
    assert_eq!(mem.scale, 4);
    assert_eq!((mem.displacement, mem.disp_size), (0x1000, 4));
    assert_eq!(mem.segment, RegSpec::ds());

    let instr = decode(Bitness::Bits64, "4C 8B 44 8D 08");
    assert_eq!(instr.code(), Code::MovR64Rm64);
    assert_eq!(instr.op(0).reg(), Some(RegSpec::r8()));
    let mem = instr.op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index, mem.scale), (Some(RegSpec::rbp()), Some(RegSpec::rcx()), 4));
    assert_eq!(mem.displacement, 8);
    assert_eq!(mem.segment, RegSpec::ss());
}

#[test]
fn rex_extends_sib() {
    // index 4 is "no index" until rex.x makes it r12.
    let mem = *decode(Bitness::Bits64, "48 8B 04 20").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (Some(RegSpec::rax()), None));

    let mem = *decode(Bitness::Bits64, "4A 8B 04 20").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (Some(RegSpec::rax()), Some(RegSpec::r12())));

    // base 5 with mod 0 is disp32 even as r13.
    let mem = *decode(Bitness::Bits64, "49 8B 04 25 00100000").op(1).mem().unwrap();
    assert_eq!((mem.base, mem.index), (None, None));
    assert_eq!(mem.displacement, 0x1000);

    let mem = *decode(Bitness::Bits64, "49 8B 45 00").op(1).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::r13()));
    assert_eq!(mem.disp_size, 1);
}

#[test]
fn displacements_wrap_to_address_size() {
    let mem = *decode(Bitness::Bits32, "8B 45 F8").op(1).mem().unwrap();
    assert_eq!(mem.displacement, 0xffff_fff8);

    let mem = *decode(Bitness::Bits64, "8B 45 F8").op(1).mem().unwrap();
    assert_eq!(mem.displacement, 0xffff_ffff_ffff_fff8);

    let mem = *decode(Bitness::Bits64, "67 8B 45 F8").op(1).mem().unwrap();
    assert_eq!(mem.displacement, 0xffff_fff8);
}

#[test]
fn ip_relative() {
    let instr = try_decode_at(Bitness::Bits64, "8B 05 10000000", DecoderOptions::empty(), 0x1000).unwrap();
    let mem = instr.op(1).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::rip()));
    assert!(mem.is_ip_relative());
    assert_eq!(instr.ip_rel_memory_address(), Some(0x1016));

    let instr = decode(Bitness::Bits64, "67 8B 05 F0FFFFFF");
    let mem = instr.op(1).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::eip()));
    assert_eq!(mem.displacement, 0xffff_ffff_ffff_fff0);
    assert_eq!(instr.ip_rel_memory_address(), Some(0xffff_fff7));

    // outside 64-bit mode the same encoding is an absolute address.
    let mem = *decode(Bitness::Bits32, "8B 05 10000000").op(1).mem().unwrap();
    assert_eq!(mem.base, None);
    assert!(!mem.is_ip_relative());
}

#[test]
fn immediate_after_displacement() {
    // the immediate follows ModRM, SIB and displacement even though it's the second operand.
    let instr = decode(Bitness::Bits32, "C7 44 24 08 78563412");
    assert_eq!(instr.code(), Code::MovRm32Imm32);
    let mem = instr.op(0).mem().unwrap();
    assert_eq!((mem.base, mem.displacement), (Some(RegSpec::esp()), 8));
    assert_eq!(instr.op(1).imm().unwrap().value, 0x1234_5678);

    let instr = try_decode_at(Bitness::Bits64, "C7 05 08000000 01000000", DecoderOptions::empty(), 0).unwrap();
    // rip-relative addresses are relative to the end of the immediate.
    assert_eq!(instr.ip_rel_memory_address(), Some(10 + 8));
}
