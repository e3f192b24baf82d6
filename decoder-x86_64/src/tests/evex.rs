use decoder::ErrorKind;

use super::{decode, reject, reject_with};
use crate::{Bitness, Code, DecoderOptions, EncodingKind, Operand, RegSpec, RoundingControl};

#[test]
fn packed_add() {
    let instr = decode(Bitness::Bits64, "62 F1 74 48 58 C2");
    assert_eq!(instr.code(), Code::EvexVaddpsZmm);
    assert_eq!(instr.encoding(), EncodingKind::Evex);
    assert_eq!(instr.len(), 6);
    assert_eq!(
        instr.ops(),
        &[
            Operand::Register(RegSpec::zmm(0)),
            Operand::Register(RegSpec::zmm(1)),
            Operand::Register(RegSpec::zmm(2)),
        ]
    );
    assert_eq!(instr.op_mask(), None);
    assert!(!instr.zeroing());
    assert_eq!(instr.rounding(), None);

    assert_eq!(decode(Bitness::Bits64, "62 F1 74 08 58 C2").code(), Code::EvexVaddpsXmm);
    assert_eq!(decode(Bitness::Bits64, "62 F1 74 28 58 C2").code(), Code::EvexVaddpsYmm);
    assert_eq!(decode(Bitness::Bits64, "62 F1 F5 48 58 C2").code(), Code::EvexVaddpdZmm);
}

#[test]
fn upper_sixteen_registers() {
    // R' extends reg, V' extends vvvv.
    assert_eq!(decode(Bitness::Bits64, "62 E1 74 48 58 C2").op(0), &Operand::Register(RegSpec::zmm(16)));
    assert_eq!(decode(Bitness::Bits64, "62 F1 74 40 58 C2").op(1), &Operand::Register(RegSpec::zmm(17)));
}

#[test]
fn opmask_and_zeroing() {
    let instr = decode(Bitness::Bits64, "62 F1 74 49 58 C2");
    assert_eq!(instr.op_mask(), Some(RegSpec::mask(1)));
    assert!(!instr.zeroing());

    let instr = decode(Bitness::Bits64, "62 F1 74 C9 58 C2");
    assert_eq!(instr.op_mask(), Some(RegSpec::mask(1)));
    assert!(instr.zeroing());

    // zeroing without a mask.
    assert_eq!(reject(Bitness::Bits64, "62 F1 74 C8 58 C2"), (ErrorKind::InvalidEncoding, 6));
}

#[test]
fn embedded_rounding() {
    let instr = decode(Bitness::Bits64, "62 F1 74 38 58 C2");
    assert_eq!(instr.code(), Code::EvexVaddpsZmm);
    assert_eq!(instr.rounding(), Some(RoundingControl::RoundDown));
    assert!(instr.suppress_all_exceptions());
    assert!(!instr.broadcast());

    let instr = decode(Bitness::Bits64, "62 F1 74 78 58 C2");
    assert_eq!(instr.rounding(), Some(RoundingControl::RoundTowardZero));

    let instr = decode(Bitness::Bits64, "62 F1 76 38 58 C2");
    assert_eq!(instr.code(), Code::EvexVaddssXmmXmmXmmm32);
    assert_eq!(instr.rounding(), Some(RoundingControl::RoundDown));
}

#[test]
fn broadcast_and_compressed_displacement() {
    let instr = decode(Bitness::Bits64, "62 F1 74 58 58 02");
    assert_eq!(instr.code(), Code::EvexVaddpsZmm);
    assert!(instr.broadcast());
    assert_eq!(instr.rounding(), None);
    assert_eq!(instr.op(2).mem().unwrap().base, Some(RegSpec::rdx()));

    // disp8 counts in vectors, or in elements when broadcasting.
    let mem = *decode(Bitness::Bits64, "62 F1 74 48 58 42 01").op(2).mem().unwrap();
    assert_eq!((mem.displacement, mem.disp_size), (64, 1));
    let mem = *decode(Bitness::Bits64, "62 F1 74 08 58 42 01").op(2).mem().unwrap();
    assert_eq!(mem.displacement, 16);
    let mem = *decode(Bitness::Bits64, "62 F1 74 58 58 42 01").op(2).mem().unwrap();
    assert_eq!(mem.displacement, 4);
    let mem = *decode(Bitness::Bits64, "62 F1 F5 58 58 42 FF").op(2).mem().unwrap();
    assert_eq!(mem.displacement, (-8i64) as u64);

    // scalars count in elements.
    let mem = *decode(Bitness::Bits64, "62 F1 76 08 58 42 02").op(2).mem().unwrap();
    assert_eq!(mem.displacement, 8);

    // disp32 is never scaled.
    let mem = *decode(Bitness::Bits64, "62 F1 74 48 58 82 01000000").op(2).mem().unwrap();
    assert_eq!(mem.displacement, 1);
}

#[test]
fn fixed_bits() {
    for hex in ["62 F5 74 48 58 C2", "62 F1 70 48 58 C2"] {
        assert_eq!(reject(Bitness::Bits64, hex), (ErrorKind::InvalidEncoding, 4));
        assert_eq!(reject_with(Bitness::Bits64, hex, DecoderOptions::NO_INVALID_CHECK), (ErrorKind::InvalidEncoding, 4));
    }
}

#[test]
fn encoding_violations() {
    // packed single is W0.
    assert_eq!(reject(Bitness::Bits64, "62 F1 F4 48 58 C2").0, ErrorKind::InvalidEncoding);
    // broadcast needs a memory operand to broadcast, or rounding to mean.
    assert_eq!(reject(Bitness::Bits64, "62 F1 7C 18 10 C2").0, ErrorKind::InvalidEncoding);
    // L'L of 3 without rounding.
    assert_eq!(reject(Bitness::Bits64, "62 F1 74 68 58 C2"), (ErrorKind::InvalidOpcode, 6));
}

#[test]
fn outside_64_bit_mode() {
    let instr = decode(Bitness::Bits32, "62 F1 74 48 58 C2");
    assert_eq!(instr.code(), Code::EvexVaddpsZmm);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::zmm(1)));

    // with a memory operand it's still `bound`.
    assert_eq!(decode(Bitness::Bits32, "62 00").code(), Code::BoundR32M3232);
}

#[test]
fn gathers_need_a_mask() {
    let instr = decode(Bitness::Bits64, "62 F2 7D 49 90 04 48");
    assert_eq!(instr.code(), Code::EvexVpgatherddZmm);
    assert_eq!(instr.op_mask(), Some(RegSpec::mask(1)));
    let mem = instr.op(1).mem().unwrap();
    assert!(mem.vsib);
    assert_eq!((mem.index, mem.scale), (Some(RegSpec::zmm(1)), 2));
    // Tuple1 scalar: disp8 counts in dwords.
    let mem = *decode(Bitness::Bits64, "62 F2 7D 49 90 44 48 01").op(1).mem().unwrap();
    assert_eq!(mem.displacement, 4);

    assert_eq!(reject(Bitness::Bits64, "62 F2 7D 48 90 04 48").0, ErrorKind::InvalidEncoding);
    assert_eq!(reject(Bitness::Bits64, "62 F2 7D 49 90 04 40").0, ErrorKind::InvalidEncoding);
}
