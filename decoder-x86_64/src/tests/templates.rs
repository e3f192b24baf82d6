//! every VEX, EVEX and XOP template, encoded once and then again with W and L flipped.

use decoder::{Error, ErrorKind, Reader};

use crate::tables::{evex, vex, xop, Codes, Entry, InfoFlags, LBit, OpCodeInfo, OpSpec, Table, WBit};
use crate::{Bitness, Decoder, DecoderOptions, Instruction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lead {
    Vex,
    Xop,
    Evex,
}

/// the selectors passed on the way from an opcode slot to a template.
#[derive(Copy, Clone, Debug, Default)]
struct Path {
    reg: u8,
    rm: Option<u8>,
    memory: Option<bool>,
    pp: u8,
    w: Option<u8>,
    ll: Option<u8>,
    w_row: Option<&'static [Entry; 2]>,
    l_row: Option<&'static [Entry; 3]>,
}

fn walk(entry: &'static Entry, path: Path, found: &mut Vec<(Path, &'static OpCodeInfo)>) {
    match *entry {
        Entry::Invalid => {}
        Entry::Op(ref info) => found.push((path, info)),
        Entry::Group(row) => {
            for (reg, next) in row.iter().enumerate() {
                walk(next, Path { reg: reg as u8, ..path }, found);
            }
        }
        Entry::RmGroup(row) => {
            for (rm, next) in row.iter().enumerate() {
                walk(next, Path { rm: Some(rm as u8), memory: Some(false), ..path }, found);
            }
        }
        Entry::RegMem(reg, mem) => {
            walk(reg, Path { memory: Some(false), ..path }, found);
            walk(mem, Path { memory: Some(true), ..path }, found);
        }
        Entry::Mandatory(row) => {
            for (pp, next) in row.iter().enumerate() {
                walk(next, Path { pp: pp as u8, ..path }, found);
            }
        }
        Entry::W(row) => {
            for (w, next) in row.iter().enumerate() {
                walk(next, Path { w: Some(w as u8), w_row: Some(row), ..path }, found);
            }
        }
        Entry::L(row) | Entry::LenEr(row) => {
            for (ll, next) in row.iter().enumerate() {
                walk(next, Path { ll: Some(ll as u8), l_row: Some(row), ..path }, found);
            }
        }
        ref other => panic!("{other:?} has no place below a VEX, EVEX or XOP opcode"),
    }
}

/// `opcode` with ModRM, SIB and room for any immediate. register operands are numbered so that
/// ModRM.reg, vvvv and ModRM.rm all name different registers.
fn encode(lead: Lead, map: u8, opcode: u8, path: &Path, info: &OpCodeInfo, w: u8, ll: u8) -> Vec<u8> {
    let vvvv = if info.uses_vvvv() { 2 } else { 0 };
    let vvvv_bits = (!vvvv & 0xf) << 3;

    let mut bytes = match lead {
        Lead::Vex => vec![0xc4, 0xe0 | map, w << 7 | vvvv_bits | ll << 2 | path.pp],
        Lead::Xop => vec![0x8f, 0xe0 | map, w << 7 | vvvv_bits | ll << 2],
        Lead::Evex => {
            let aaa = info.flags.contains(InfoFlags::OPMASK) as u8;
            vec![0x62, 0xf0 | map, w << 7 | vvvv_bits | 0x04 | path.pp, ll << 5 | 0x08 | aaa]
        }
    };
    bytes.push(opcode);

    let memory = path
        .memory
        .unwrap_or_else(|| info.ops.iter().any(|op| matches!(op, OpSpec::Mem | OpSpec::Vsib(_))));
    if info.is_vsib() {
        // [rax + xmm1*2]
        bytes.extend_from_slice(&[path.reg << 3 | 4, 0x48]);
    } else if memory {
        bytes.push(path.reg << 3);
    } else {
        bytes.push(0xc0 | path.reg << 3 | path.rm.unwrap_or(1));
    }

    bytes.extend_from_slice(&[0; 4]);
    bytes
}

fn decode(bytes: &[u8]) -> Result<Instruction, Error> {
    Decoder::new(Bitness::Bits64, Reader::new(bytes), DecoderOptions::empty()).try_decode()
}

/// the flipped bit picked another template, or a combination the template doesn't allow.
fn rejected_or_another(flipped: &Result<Instruction, Error>, base: &Instruction) -> bool {
    match flipped {
        Ok(instr) => instr.code() != base.code(),
        Err(err) => matches!(err.kind, ErrorKind::InvalidEncoding | ErrorKind::InvalidOpcode),
    }
}

fn check(lead: Lead, map: u8, opcode: u8, path: &Path, info: &OpCodeInfo, failures: &mut Vec<String>) {
    let w = path.w.unwrap_or(match info.req.w {
        WBit::W1 => 1,
        _ => 0,
    });
    let ll = path.ll.unwrap_or(match info.req.l {
        LBit::L1 => 1,
        LBit::L2 => 2,
        _ => 0,
    });

    let bytes = encode(lead, map, opcode, path, info, w, ll);
    let base = match decode(&bytes) {
        Ok(instr) => instr,
        Err(err) => {
            failures.push(format!("{:?}: {} doesn't decode: {err}", info.code, decoder::encode_hex_bytes(&bytes)));
            return;
        }
    };

    // W
    let flipped_bytes = encode(lead, map, opcode, path, info, w ^ 1, ll);
    let flipped = decode(&flipped_bytes);
    let w_selects = path.w_row.map_or(false, |row| row[0] != row[1]);
    let w_ok = if w_selects || info.req.w != WBit::Any {
        rejected_or_another(&flipped, &base)
    } else {
        match info.code {
            Codes::One(_) => flipped.as_ref() == Ok(&base),
            // 64-bit mode: W is the operand size.
            Codes::Sized(codes) => {
                let code = codes[if w == 0 { 2 } else { 1 }];
                flipped.as_ref().map_or(false, |instr| instr.code() == code)
            }
        }
    };
    if !w_ok {
        failures.push(format!(
            "{:?}: W flipped from {} gave {:?} for {}",
            info.code,
            w,
            flipped.map(|instr| instr.code()),
            decoder::encode_hex_bytes(&flipped_bytes)
        ));
    }

    // L, and L' for EVEX
    let flips: &[u8] = if lead == Lead::Evex { &[1, 2] } else { &[1] };
    for flip in flips {
        let other = ll ^ flip;
        let flipped_bytes = encode(lead, map, opcode, path, info, w, other);
        let flipped = decode(&flipped_bytes);
        let l_selects = path.l_row.map_or(false, |row| other > 2 || row[other as usize] != row[ll as usize]);
        let l_ok = if l_selects || info.req.l != LBit::Any {
            rejected_or_another(&flipped, &base)
        } else {
            flipped.as_ref() == Ok(&base)
        };
        if !l_ok {
            failures.push(format!(
                "{:?}: L'L {} -> {} gave {:?} for {}",
                info.code,
                ll,
                other,
                flipped.map(|instr| instr.code()),
                decoder::encode_hex_bytes(&flipped_bytes)
            ));
        }
    }
}

#[test]
fn w_and_l_match_what_each_template_declares() {
    let maps: [(Lead, u8, &'static Table); 9] = [
        (Lead::Vex, 1, &*vex::VEX_0F),
        (Lead::Vex, 2, &*vex::VEX_0F38),
        (Lead::Vex, 3, &*vex::VEX_0F3A),
        (Lead::Xop, 8, &*xop::XOP_8),
        (Lead::Xop, 9, &*xop::XOP_9),
        (Lead::Xop, 10, &*xop::XOP_A),
        (Lead::Evex, 1, &*evex::EVEX_0F),
        (Lead::Evex, 2, &*evex::EVEX_0F38),
        (Lead::Evex, 3, &*evex::EVEX_0F3A),
    ];

    let mut checked = 0;
    let mut failures = Vec::new();
    for (lead, map, table) in maps {
        for (opcode, entry) in table.iter().enumerate() {
            let mut found = Vec::new();
            walk(entry, Path::default(), &mut found);
            for (path, info) in &found {
                check(lead, map, opcode as u8, path, info, &mut failures);
            }
            checked += found.len();
        }
    }

    assert!(checked > 200, "only {checked} templates reached");
    assert!(failures.is_empty(), "{} of {checked} templates:\n{}", failures.len(), failures.join("\n"));
}
