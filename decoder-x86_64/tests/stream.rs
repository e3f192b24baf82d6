use decoder::{Decodable, ErrorKind, Reader};
use x86_64::{Bitness, Code, Decoder, DecoderOptions, Instruction, MAX_INSTRUCTION_LEN};

fn decode_all(bitness: Bitness, bytes: &[u8]) -> Vec<Instruction> {
    Decoder::new(bitness, Reader::new(bytes), DecoderOptions::empty()).collect()
}

#[test]
fn iterates_until_input_ends() {
    let instrs = decode_all(Bitness::Bits64, &[0x90, 0x90, 0xc3]);
    let codes: Vec<Code> = instrs.iter().map(Instruction::code).collect();
    assert_eq!(codes, [Code::Nop, Code::Nop, Code::Retnq]);

    let ips: Vec<u64> = instrs.iter().map(Instruction::ip).collect();
    assert_eq!(ips, [0, 1, 2]);

    assert!(decode_all(Bitness::Bits64, &[]).is_empty());
}

#[test]
fn invalid_bytes_dont_stop_the_stream() {
    // `push es` doesn't exist in 64-bit mode.
    let instrs = decode_all(Bitness::Bits64, &[0x90, 0x06, 0x90]);
    assert_eq!(instrs.len(), 3);
    assert_eq!(instrs[1].code(), Code::Invalid);
    assert!(instrs[1].is_invalid());
    assert_eq!(instrs[1].len(), 1);
    assert_eq!(instrs[1].op_count(), 0);
    assert_eq!(instrs[2].code(), Code::Nop);
    assert_eq!(instrs[2].ip(), 2);

    let instrs = decode_all(Bitness::Bits32, &[0x90, 0x06, 0x90]);
    assert_eq!(instrs[1].code(), Code::PushdEs);
}

#[test]
fn truncated_tail_is_one_invalid_instruction() {
    let instrs = decode_all(Bitness::Bits32, &[0x90, 0x8b]);
    assert_eq!(instrs.len(), 2);
    assert!(instrs[1].is_invalid());
    assert_eq!(instrs[1].len(), 1);

    let mut decoder = Decoder::new(Bitness::Bits32, Reader::new(&[0x90, 0x8b]), DecoderOptions::empty());
    assert_eq!(decoder.decode().code(), Code::Nop);
    let err = decoder.try_decode().unwrap_err();
    assert_eq!((err.kind, err.size()), (ErrorKind::ExhaustedInput, 1));
    assert_eq!(err.to_string(), "input exhausted after 1 byte(s)");

    // nothing left at all.
    let err = decoder.try_decode().unwrap_err();
    assert_eq!((err.kind, err.size()), (ErrorKind::ExhaustedInput, 0));
}

#[test]
fn instruction_pointer() {
    let bytes = [0xeb, 0xfe, 0xe8, 0x00, 0x00, 0x00, 0x00];
    let mut decoder = Decoder::new(Bitness::Bits32, Reader::new(&bytes), DecoderOptions::empty());
    decoder.set_ip(0x40_1000);

    let jmp = decoder.decode();
    assert_eq!(jmp.code(), Code::JmpRel8);
    assert_eq!((jmp.ip(), jmp.next_ip()), (0x40_1000, 0x40_1002));
    assert_eq!(jmp.op(0), &x86_64::Operand::NearBranch { target: 0x40_1000, size: 4 });
    assert_eq!(decoder.ip(), 0x40_1002);

    let call = decoder.decode();
    assert_eq!(call.code(), Code::CallRel32);
    assert_eq!(call.op(0), &x86_64::Operand::NearBranch { target: 0x40_1007, size: 4 });
    assert_eq!(decoder.ip(), 0x40_1007);
}

#[test]
fn borrowed_sources_keep_their_position() {
    let bytes = [0x48, 0x89, 0xc8, 0xcc];
    let mut reader = Reader::new(&bytes);

    let instr = Decoder::new(Bitness::Bits64, &mut reader, DecoderOptions::empty()).decode();
    assert_eq!(instr.code(), Code::MovRm64R64);
    assert_eq!(reader.remaining(), &[0xcc]);
}

#[test]
fn decodable() {
    fn decode_n<D: Decodable>(decoder: &mut D, n: usize) -> Vec<Result<D::Instruction, decoder::Error>> {
        (0..n).map(|_| decoder.try_decode()).collect()
    }

    let bytes = [0x90; 8];
    let mut decoder = Decoder::new(Bitness::Bits16, Reader::new(&bytes), DecoderOptions::AMD);
    assert!(decode_n(&mut decoder, 3).iter().all(Result::is_ok));
    assert_eq!(Decodable::max_width(&decoder), MAX_INSTRUCTION_LEN);
    assert_eq!(decoder.ip(), 3);
    assert_eq!(decoder.bitness(), Bitness::Bits16);
    assert_eq!(decoder.options(), DecoderOptions::AMD);
}

#[test]
fn bitness_from_bits() {
    assert_eq!(Bitness::try_from(16u32), Ok(Bitness::Bits16));
    assert_eq!(Bitness::try_from(32u32), Ok(Bitness::Bits32));
    assert_eq!(Bitness::try_from(64u32).map(Bitness::bits), Ok(64));

    let err = Bitness::try_from(8u32).unwrap_err();
    assert_eq!(err, x86_64::UnsupportedBitness(8));
    assert_eq!(err.to_string(), "unsupported bitness 8, expected 16, 32 or 64");
}
