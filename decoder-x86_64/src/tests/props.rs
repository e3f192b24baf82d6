use decoder::{Error, ErrorKind, Reader};
use proptest::prelude::*;

use crate::{Bitness, Code, Decoder, DecoderOptions, Instruction, Operand, MAX_INSTRUCTION_LEN};

fn bitness() -> impl Strategy<Value = Bitness> {
    prop_oneof![Just(Bitness::Bits16), Just(Bitness::Bits32), Just(Bitness::Bits64)]
}

fn options() -> impl Strategy<Value = DecoderOptions> {
    any::<u32>().prop_map(DecoderOptions::from_bits_truncate)
}

fn decode_bytes(bitness: Bitness, bytes: &[u8], options: DecoderOptions, ip: u64) -> Result<Instruction, Error> {
    let mut decoder = Decoder::new(bitness, Reader::new(bytes), options);
    decoder.set_ip(ip);
    decoder.try_decode()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4000))]

    #[test]
    fn decoding_is_deterministic(
        bitness in bitness(),
        opts in options(),
        bytes in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let first = decode_bytes(bitness, &bytes, opts, 0x1000);
        let second = decode_bytes(bitness, &bytes, opts, 0x1000);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lengths_stay_in_bounds(
        bitness in bitness(),
        opts in options(),
        bytes in prop::collection::vec(any::<u8>(), 1..24),
    ) {
        match decode_bytes(bitness, &bytes, opts, 0) {
            Ok(instr) => {
                prop_assert!(instr.len() >= 1);
                prop_assert!(instr.len() <= MAX_INSTRUCTION_LEN);
                prop_assert!(instr.len() <= bytes.len());
                prop_assert!(instr.code() != Code::Invalid);
            }
            Err(err) => {
                prop_assert!(err.size() >= 1, "{:?} consumed nothing of {}", err, decoder::encode_hex_bytes(&bytes));
                prop_assert!(err.size() <= MAX_INSTRUCTION_LEN.min(bytes.len()));
                if err.kind == ErrorKind::TooLong {
                    prop_assert_eq!(err.size(), MAX_INSTRUCTION_LEN);
                }
            }
        }
    }

    #[test]
    fn operands_are_well_formed(
        bitness in bitness(),
        bytes in prop::collection::vec(any::<u8>(), 1..24),
        ip in any::<u64>(),
    ) {
        let Ok(instr) = decode_bytes(bitness, &bytes, DecoderOptions::empty(), ip) else {
            return Ok(());
        };

        prop_assert_eq!(instr.ip(), ip);
        prop_assert_eq!(instr.next_ip(), ip.wrapping_add(instr.len() as u64));
        prop_assert!(instr.op_count() <= 5);
        for idx in instr.op_count()..5 {
            prop_assert_eq!(instr.op(idx), &Operand::Nothing);
        }

        for op in instr.ops() {
            match *op {
                Operand::Nothing => prop_assert!(false, "hole in the operands of {:?}", instr.code()),
                Operand::NearBranch { target, size } => match size {
                    2 => prop_assert!(target <= 0xffff),
                    4 => prop_assert!(target <= 0xffff_ffff),
                    _ => prop_assert_eq!(size, 8),
                },
                Operand::Memory(mem) if !mem.is_ip_relative() => {
                    prop_assert!(matches!(mem.address_size, 2 | 4 | 8));
                    if mem.address_size < 8 {
                        prop_assert!(mem.displacement < 1 << (mem.address_size * 8));
                    }
                }
                _ => {}
            }
        }
    }

    /// `NO_INVALID_CHECK` only ever turns `InvalidEncoding` into an instruction.
    #[test]
    fn no_invalid_check_only_relaxes_legality(
        bitness in bitness(),
        bytes in prop::collection::vec(any::<u8>(), 1..24),
    ) {
        let strict = decode_bytes(bitness, &bytes, DecoderOptions::empty(), 0);
        let relaxed = decode_bytes(bitness, &bytes, DecoderOptions::NO_INVALID_CHECK, 0);

        match strict {
            Err(err) if err.kind == ErrorKind::InvalidEncoding => {}
            strict => prop_assert_eq!(strict, relaxed),
        }
    }

    #[test]
    fn streams_cover_every_byte(
        bitness in bitness(),
        bytes in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        let mut decoder = Decoder::new(bitness, Reader::new(&bytes), DecoderOptions::empty());
        let mut expected_ip = 0;
        for instr in decoder.by_ref() {
            prop_assert_eq!(instr.ip(), expected_ip);
            prop_assert!(!instr.is_empty());
            expected_ip = instr.next_ip();
        }
        prop_assert_eq!(expected_ip, bytes.len() as u64);
        prop_assert_eq!(decoder.ip(), bytes.len() as u64);
    }

    /// a segment override never changes which instruction a byte sequence is.
    #[test]
    fn redundant_ds_override_keeps_the_code(
        bytes in prop::collection::vec(any::<u8>(), 1..14),
    ) {
        let Ok(plain) = decode_bytes(Bitness::Bits32, &bytes, DecoderOptions::empty(), 0) else {
            return Ok(());
        };
        let mut prefixed = vec![0x3e];
        prefixed.extend_from_slice(&bytes);
        if let Ok(instr) = decode_bytes(Bitness::Bits32, &prefixed, DecoderOptions::empty(), 0) {
            prop_assert_eq!(instr.code(), plain.code());
            prop_assert_eq!(instr.len(), plain.len() + 1);
        }
    }

    /// P0[3:2] must be clear and P1[2] set, or there's no EVEX instruction at all.
    #[test]
    fn evex_fixed_bits_are_never_relaxed(
        p0 in any::<u8>(),
        p1 in any::<u8>(),
        p2 in any::<u8>(),
        opts in options(),
        tail in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        prop_assume!(p0 & 0x0c != 0 || p1 & 0x04 == 0);

        let mut bytes = vec![0x62, p0, p1, p2];
        bytes.extend_from_slice(&tail);
        let err = decode_bytes(Bitness::Bits64, &bytes, opts, 0).unwrap_err();
        prop_assert_eq!((err.kind, err.size()), (ErrorKind::InvalidEncoding, 4));
    }

    /// `lock not` needs a memory destination, whatever the addressing form.
    #[test]
    fn lock_needs_memory(
        bitness in bitness(),
        mod_ in 0u8..4,
        rm in 0u8..8,
        tail in prop::collection::vec(any::<u8>(), 6),
    ) {
        let mut bytes = vec![0xf0, 0xf6, mod_ << 6 | 2 << 3 | rm];
        bytes.extend_from_slice(&tail);

        match decode_bytes(bitness, &bytes, DecoderOptions::empty(), 0) {
            Ok(instr) => {
                prop_assert!(mod_ != 3);
                prop_assert_eq!(instr.code(), Code::NotRm8);
                prop_assert!(instr.has_lock());
                prop_assert!(instr.op(0).is_memory());
            }
            Err(err) => {
                prop_assert_eq!(mod_, 3);
                prop_assert_eq!((err.kind, err.size()), (ErrorKind::InvalidEncoding, 3));
            }
        }
    }

    /// VEX `vaddps` ignores W and takes its width from L.
    #[test]
    fn vex_w_and_l(w in any::<bool>(), l in any::<bool>(), vvvv in 0u8..16) {
        let b2 = (w as u8) << 7 | (!vvvv & 0xf) << 3 | (l as u8) << 2;
        let instr = decode_bytes(Bitness::Bits64, &[0xc4, 0xe1, b2, 0x58, 0xc1], DecoderOptions::empty(), 0).unwrap();

        let (code, second) = if l {
            (Code::VexVaddpsYmm, crate::RegSpec::ymm(vvvv))
        } else {
            (Code::VexVaddpsXmm, crate::RegSpec::xmm(vvvv))
        };
        prop_assert_eq!(instr.code(), code);
        prop_assert_eq!(instr.op(1), &Operand::Register(second));
    }

    /// EVEX `vaddps` requires W0, and L'L of 3 is no vector length.
    #[test]
    fn evex_w_and_ll(w in any::<bool>(), ll in 0u8..4, aaa in 0u8..8) {
        let p1 = (w as u8) << 7 | 0x74;
        let p2 = ll << 5 | 0x08 | aaa;
        let result = decode_bytes(Bitness::Bits64, &[0x62, 0xf1, p1, p2, 0x58, 0xc2], DecoderOptions::empty(), 0);

        match result {
            Err(err) if ll == 3 => prop_assert_eq!(err.kind, ErrorKind::InvalidOpcode),
            Err(err) if w => prop_assert_eq!(err.kind, ErrorKind::InvalidEncoding),
            Ok(instr) if ll < 3 && !w => {
                let codes = [Code::EvexVaddpsXmm, Code::EvexVaddpsYmm, Code::EvexVaddpsZmm];
                prop_assert_eq!(instr.code(), codes[ll as usize]);
                prop_assert_eq!(instr.op_mask().is_some(), aaa != 0);
            }
            other => prop_assert!(false, "w={} ll={} decoded to {:?}", w, ll, other),
        }
    }
}
