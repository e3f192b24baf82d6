use decoder::{ErrorKind, Reader};

use super::{decode, decode_with, reject, reject_with};
use crate::{Bitness, Code, Decoder, DecoderOptions, Operand, RegSpec, RegisterBank};

#[test]
fn no_invalid_check() {
    let opts = DecoderOptions::NO_INVALID_CHECK;

    assert_eq!(reject(Bitness::Bits64, "C5 F0 77").0, ErrorKind::InvalidEncoding);
    assert_eq!(decode_with(Bitness::Bits64, "C5 F0 77", opts).code(), Code::VexVzeroupper);

    let instr = decode_with(Bitness::Bits32, "0F 20 C8", opts);
    assert_eq!(instr.code(), Code::MovR32Cr);
    let cr = instr.op(1).reg().unwrap();
    assert_eq!((cr.bank(), cr.num()), (RegisterBank::CR, 1));

    // only legality rules are skipped.
    assert_eq!(reject_with(Bitness::Bits64, "D6", opts).0, ErrorKind::InvalidOpcode);
    assert_eq!(reject_with(Bitness::Bits64, "8B", opts).0, ErrorKind::ExhaustedInput);
}

#[test]
fn loadall() {
    assert_eq!(decode(Bitness::Bits32, "0F 05").code(), Code::Syscall);
    assert_eq!(decode_with(Bitness::Bits32, "0F 05", DecoderOptions::LOADALL286).code(), Code::Loadall286);
    assert_eq!(decode_with(Bitness::Bits64, "0F 05", DecoderOptions::LOADALL286).code(), Code::Syscall);
    assert_eq!(decode_with(Bitness::Bits16, "0F 07", DecoderOptions::LOADALL386).code(), Code::Loadall386);
}

#[test]
fn xbts_and_early_cmpxchg() {
    assert_eq!(reject(Bitness::Bits32, "0F A6 C1").0, ErrorKind::InvalidOpcode);

    let instr = decode_with(Bitness::Bits32, "0F A6 C1", DecoderOptions::XBTS);
    assert_eq!(instr.code(), Code::XbtsR32Rm32);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::eax()), Operand::Register(RegSpec::ecx())]);

    let instr = decode_with(Bitness::Bits32, "0F A6 C1", DecoderOptions::CMPXCHG486A);
    assert_eq!(instr.code(), Code::Cmpxchg486Rm8R8);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::cl()), Operand::Register(RegSpec::al())]);

    // xbts wins when both are asked for.
    let both = DecoderOptions::XBTS | DecoderOptions::CMPXCHG486A;
    assert_eq!(decode_with(Bitness::Bits32, "0F A6 C1", both).code(), Code::XbtsR32Rm32);

    assert_eq!(reject_with(Bitness::Bits64, "0F A6 C1", both).0, ErrorKind::InvalidOpcode);
}

#[test]
fn pause() {
    let instr = decode(Bitness::Bits64, "F3 90");
    assert_eq!(instr.code(), Code::Pause);
    assert!(!instr.has_rep());

    let instr = decode_with(Bitness::Bits64, "F3 90", DecoderOptions::NO_PAUSE);
    assert_eq!(instr.code(), Code::Nop);
    assert!(instr.has_rep());
}

#[test]
fn wbnoinvd() {
    assert_eq!(decode(Bitness::Bits64, "0F 09").code(), Code::Wbinvd);
    assert_eq!(decode(Bitness::Bits64, "F3 0F 09").code(), Code::Wbnoinvd);
    assert_eq!(decode_with(Bitness::Bits64, "F3 0F 09", DecoderOptions::NO_WBNOINVD).code(), Code::Wbinvd);
}

#[test]
fn lock_mov_cr0() {
    let instr = decode(Bitness::Bits32, "F0 0F 20 C0");
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::cr8()));
    assert!(!instr.has_lock());

    let opts = DecoderOptions::NO_LOCK_MOV_CR0;
    assert_eq!(reject_with(Bitness::Bits32, "F0 0F 20 C0", opts).0, ErrorKind::InvalidEncoding);

    let instr = decode_with(Bitness::Bits32, "F0 0F 20 C0", opts | DecoderOptions::NO_INVALID_CHECK);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::cr0()));
    assert!(instr.has_lock());
}

#[test]
fn lahf_sahf() {
    assert_eq!(decode(Bitness::Bits64, "9F").code(), Code::Lahf);
    assert_eq!(reject_with(Bitness::Bits64, "9F", DecoderOptions::NO_LAHF_SAHF_64), (ErrorKind::InvalidOpcode, 1));
    assert_eq!(decode_with(Bitness::Bits32, "9F", DecoderOptions::NO_LAHF_SAHF_64).code(), Code::Lahf);
}

#[test]
fn mpx() {
    let instr = decode(Bitness::Bits32, "F3 0F 1A C1");
    assert_eq!(instr.code(), Code::Reservednop0F1ARm32R32);
    assert!(instr.has_rep());

    let opts = DecoderOptions::MPX;
    let instr = decode_with(Bitness::Bits32, "F3 0F 1A C1", opts);
    assert_eq!(instr.code(), Code::BndclBndRm32);
    assert!(!instr.has_rep());
    let bnd = instr.op(0).reg().unwrap();
    assert_eq!((bnd.bank(), bnd.num()), (RegisterBank::BND, 0));
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::ecx()));

    let instr = decode_with(Bitness::Bits64, "F3 0F 1A C1", opts);
    assert_eq!(instr.code(), Code::BndclBndRm64);
    assert_eq!(instr.op(1), &Operand::Register(RegSpec::rcx()));

    assert_eq!(decode_with(Bitness::Bits64, "66 0F 1A C1", opts).code(), Code::BndmovBndBndm128);

    // 67 can't shrink a bound register's address in 64-bit mode.
    let mem = *decode_with(Bitness::Bits64, "67 F3 0F 1A 00", opts).op(1).mem().unwrap();
    assert_eq!(mem.base, Some(RegSpec::rax()));
    assert_eq!(mem.address_size, 8);

    // and there are no 16-bit bound addresses.
    assert_eq!(reject_with(Bitness::Bits16, "F3 0F 1A 00", opts).0, ErrorKind::InvalidEncoding);
    assert_eq!(reject_with(Bitness::Bits32, "67 F3 0F 1A 00", opts).0, ErrorKind::InvalidEncoding);
}

#[test]
fn umov() {
    assert_eq!(decode(Bitness::Bits32, "0F 10 C1").code(), Code::MovupsXmmXmmm128);

    let opts = DecoderOptions::UMOV;
    let instr = decode_with(Bitness::Bits32, "0F 10 C1", opts);
    assert_eq!(instr.code(), Code::UmovRm8R8);
    assert_eq!(instr.ops(), &[Operand::Register(RegSpec::cl()), Operand::Register(RegSpec::al())]);

    assert_eq!(decode_with(Bitness::Bits32, "66 0F 10 C1", opts).code(), Code::MovupdXmmXmmm128);
    assert_eq!(reject_with(Bitness::Bits64, "0F 10 C1", opts).0, ErrorKind::InvalidOpcode);
}

#[test]
fn test_registers() {
    assert_eq!(reject(Bitness::Bits32, "0F 24 F0").0, ErrorKind::InvalidOpcode);

    let instr = decode_with(Bitness::Bits32, "0F 24 F0", DecoderOptions::MOV_TR);
    assert_eq!(instr.code(), Code::MovR32Tr);
    assert_eq!(instr.op(0), &Operand::Register(RegSpec::eax()));
    let tr = instr.op(1).reg().unwrap();
    assert_eq!((tr.bank(), tr.num()), (RegisterBank::TR, 6));
}

#[test]
fn jmpe() {
    assert_eq!(reject(Bitness::Bits32, "0F B8 00100000").0, ErrorKind::InvalidOpcode);
    let instr = decode_with(Bitness::Bits32, "0F B8 00100000", DecoderOptions::JMPE);
    assert_eq!(instr.code(), Code::JmpeDisp32);
    // F3 still selects popcnt.
    assert_eq!(decode_with(Bitness::Bits32, "F3 0F B8 C1", DecoderOptions::JMPE).code(), Code::PopcntR32Rm32);
}

#[test]
fn pcommit() {
    assert_eq!(decode(Bitness::Bits64, "0F AE F8").code(), Code::Sfence);
    assert_eq!(reject(Bitness::Bits64, "66 0F AE F8").0, ErrorKind::InvalidOpcode);
    assert_eq!(decode_with(Bitness::Bits64, "66 0F AE F8", DecoderOptions::PCOMMIT).code(), Code::Pcommit);
}

#[test]
fn new_decoders_are_logged() {
    let opts = DecoderOptions::UMOV | DecoderOptions::MOV_TR | DecoderOptions::PCOMMIT;
    let expected = "x86 decoder: 16 bits, options [UMOV | MOV_TR | PCOMMIT]";

    // other tests log concurrently and the log only keeps the most recent lines.
    let found = (0..10).any(|_| {
        let _decoder = Decoder::new(Bitness::Bits16, Reader::new(&[]), opts);
        let logger = log::LOGGER.lock().unwrap();
        let found = logger.lines().any(|(line, level)| line == expected && *level == log::Level::Trace);
        found
    });
    assert!(found, "no log line {expected:?}");
}
