use decoder::{ByteSource, Decodable, Error, ErrorKind};

use crate::instruction::{EncodingKind, Instruction, PrefixFlags};
use crate::operand::{Operand, RoundingControl};
use crate::options::DecoderOptions;
use crate::prefix::{self, MandatoryPrefix, Prefixes};
use crate::register::RegSpec;
use crate::tables::{self, Codes, InfoFlags, OpCodeInfo};
use crate::{dispatch, operands, validity, Bitness};

/// no x86 instruction is longer than this, whatever its prefixes.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// the bytes of one instruction, counted as they're read.
pub(crate) struct Bytes<'s, S: ByteSource> {
    source: &'s mut S,
    len: u8,
}

impl<'s, S: ByteSource> Bytes<'s, S> {
    pub(crate) fn new(source: &'s mut S) -> Self {
        Self { source, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub(crate) fn next(&mut self) -> Result<u8, ErrorKind> {
        if self.len as usize >= MAX_INSTRUCTION_LEN {
            return Err(ErrorKind::TooLong);
        }
        let byte = self.source.read_u8().ok_or(ErrorKind::ExhaustedInput)?;
        self.len += 1;
        Ok(byte)
    }

    /// a little-endian number of `width` bytes.
    pub(crate) fn read_num(&mut self, width: u8) -> Result<u64, ErrorKind> {
        let mut buf = [0u8; 8];
        for byte in &mut buf[..width as usize] {
            *byte = self.next()?;
        }
        Ok(u64::from_le_bytes(buf))
    }
}

/// an operand or address size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpSize {
    S16,
    S32,
    S64,
}

impl OpSize {
    /// position in a `[16, 32, 64]` row.
    pub(crate) fn index(self) -> usize {
        match self {
            OpSize::S16 => 0,
            OpSize::S32 => 1,
            OpSize::S64 => 2,
        }
    }

    pub(crate) fn bytes(self) -> u8 {
        match self {
            OpSize::S16 => 2,
            OpSize::S32 => 4,
            OpSize::S64 => 8,
        }
    }
}

/// everything learned about the instruction being decoded. lives for one decode.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) bitness: Bitness,
    pub(crate) options: DecoderOptions,
    pub(crate) prefixes: Prefixes,
    pub(crate) encoding: EncodingKind,
    /// the last opcode byte read.
    pub(crate) opcode: u8,
    pub(crate) modrm: Option<u8>,
    /// R, X and B as register number offsets: 0 or 8.
    pub(crate) ext_r: u8,
    pub(crate) ext_x: u8,
    pub(crate) ext_b: u8,
    /// EVEX R' and V': 0 or 16.
    pub(crate) ext_r2: u8,
    pub(crate) ext_v2: u8,
    /// EVEX X, extending a register r/m to 16..=31.
    pub(crate) ext_x_rm: u8,
    /// vvvv, already inverted.
    pub(crate) vvvv: u8,
    pub(crate) w: bool,
    /// VEX L or EVEX L'L, as encoded.
    pub(crate) ll: u8,
    /// vector length the instruction operates on: 0, 1 or 2 for 128, 256 or 512 bits.
    pub(crate) vl: u8,
    pub(crate) pp: u8,
    pub(crate) aaa: u8,
    pub(crate) z: bool,
    pub(crate) b: bool,
    pub(crate) osize: OpSize,
    pub(crate) asize: OpSize,
    used_66: bool,
    used_f3: bool,
    used_f2: bool,
    /// lock was spent selecting `cr8`.
    pub(crate) lock_used: bool,
    /// an encoding rule was broken. the instruction is still decoded to its end.
    pub(crate) violation: bool,
}

impl State {
    pub(crate) fn new(bitness: Bitness, options: DecoderOptions, prefixes: Prefixes) -> Self {
        let rex = prefixes.rex();
        let ext = |bit: bool| if bit { 8 } else { 0 };
        Self {
            bitness,
            options,
            prefixes,
            encoding: EncodingKind::Legacy,
            opcode: 0,
            modrm: None,
            ext_r: ext(rex.r()),
            ext_x: ext(rex.x()),
            ext_b: ext(rex.b()),
            ext_r2: 0,
            ext_v2: 0,
            ext_x_rm: 0,
            vvvv: 0,
            w: rex.w(),
            ll: 0,
            vl: 0,
            pp: 0,
            aaa: 0,
            z: false,
            b: false,
            osize: OpSize::S32,
            asize: OpSize::S32,
            used_66: false,
            used_f3: false,
            used_f2: false,
            lock_used: false,
            violation: false,
        }
    }

    #[inline]
    pub(crate) fn is_64(&self) -> bool {
        self.bitness == Bitness::Bits64
    }

    /// the ModRM byte, read on first use.
    pub(crate) fn modrm<S: ByteSource>(&mut self, bytes: &mut Bytes<'_, S>) -> Result<u8, ErrorKind> {
        match self.modrm {
            Some(modrm) => Ok(modrm),
            None => {
                let modrm = bytes.next()?;
                self.modrm = Some(modrm);
                Ok(modrm)
            }
        }
    }

    /// ModRM.mod is 3.
    pub(crate) fn register_form(&self) -> bool {
        matches!(self.modrm, Some(modrm) if modrm >> 6 == 3)
    }

    /// an EVEX register form with `b` set: embedded rounding or sae.
    pub(crate) fn evex_er(&self) -> bool {
        self.encoding == EncodingKind::Evex && self.b && self.register_form()
    }

    /// vvvv as a register number. only 64-bit mode has the high bit.
    pub(crate) fn vvvv_reg(&self) -> u8 {
        if self.is_64() {
            self.vvvv
        } else {
            self.vvvv & 7
        }
    }

    pub(crate) fn mandatory(&self) -> MandatoryPrefix {
        match self.encoding {
            EncodingKind::Legacy | EncodingKind::D3Now => self.prefixes.mandatory(),
            _ => MandatoryPrefix::from_pp(self.pp),
        }
    }

    /// a legacy prefix was taken as a mandatory prefix, and no longer means what it otherwise would.
    pub(crate) fn consume(&mut self, prefix: MandatoryPrefix) {
        if self.encoding != EncodingKind::Legacy {
            return;
        }
        match prefix {
            MandatoryPrefix::None => {}
            MandatoryPrefix::P66 => self.used_66 = true,
            MandatoryPrefix::PF3 => self.used_f3 = true,
            MandatoryPrefix::PF2 => self.used_f2 = true,
        }
    }

    /// effective operand and address sizes, once the template is known.
    pub(crate) fn resolve_sizes(&mut self, flags: InfoFlags) {
        let p66 = self.prefixes.operand_size() && !self.used_66;
        self.osize = match self.encoding {
            EncodingKind::Legacy | EncodingKind::D3Now => match self.bitness {
                Bitness::Bits16 if p66 => OpSize::S32,
                Bitness::Bits16 => OpSize::S16,
                Bitness::Bits32 if p66 => OpSize::S16,
                Bitness::Bits32 => OpSize::S32,
                Bitness::Bits64 => {
                    if self.w {
                        OpSize::S64
                    } else if flags.contains(InfoFlags::FORCE64) {
                        if p66 && self.options.contains(DecoderOptions::AMD) {
                            OpSize::S16
                        } else {
                            OpSize::S64
                        }
                    } else if p66 {
                        OpSize::S16
                    } else if flags.contains(InfoFlags::DEFAULT64) {
                        OpSize::S64
                    } else {
                        OpSize::S32
                    }
                }
            },
            _ if self.w && self.is_64() => OpSize::S64,
            _ => OpSize::S32,
        };

        let p67 = self.prefixes.address_size();
        self.asize = match self.bitness {
            Bitness::Bits16 if p67 => OpSize::S32,
            Bitness::Bits16 => OpSize::S16,
            Bitness::Bits32 if p67 => OpSize::S16,
            Bitness::Bits32 => OpSize::S32,
            Bitness::Bits64 if p67 && !flags.contains(InfoFlags::MPX) => OpSize::S32,
            Bitness::Bits64 => OpSize::S64,
        };
    }

    /// the segment a memory operand uses when `default` isn't overridden.
    pub(crate) fn segment_or(&self, default: RegSpec) -> RegSpec {
        self.prefixes.segment().unwrap_or(default)
    }

    fn prefix_flags(&self, info: &OpCodeInfo, has_memory: bool) -> PrefixFlags {
        let prefixes = &self.prefixes;
        let mut flags = PrefixFlags::empty();

        if prefixes.lock() && !self.lock_used {
            flags |= PrefixFlags::LOCK;
        }

        let hle = has_memory && (prefixes.lock() || info.flags.contains(InfoFlags::HLE_NOLOCK));
        if prefixes.repnz() && !self.used_f2 {
            if hle && info.flags.contains(InfoFlags::XACQUIRE) {
                flags |= PrefixFlags::XACQUIRE;
            } else {
                flags |= PrefixFlags::REPNE;
            }
        }
        if prefixes.rep() && !self.used_f3 {
            if hle && info.flags.contains(InfoFlags::XRELEASE) {
                flags |= PrefixFlags::XRELEASE;
            } else {
                flags |= PrefixFlags::REP;
            }
        }

        if self.encoding == EncodingKind::Evex {
            if self.z {
                flags |= PrefixFlags::ZEROING;
            }
            if self.b && has_memory {
                flags |= PrefixFlags::BROADCAST;
            }
            if self.evex_er() && info.flags.intersects(InfoFlags::SAE | InfoFlags::ROUNDING) {
                flags |= PrefixFlags::SAE;
            }
        }

        flags
    }
}

/// decode one instruction from `bytes`. on error, `bytes.len()` is how far decoding got.
fn decode_one<S: ByteSource>(
    bytes: &mut Bytes<'_, S>,
    bitness: Bitness,
    options: DecoderOptions,
    ip: u64,
) -> Result<Instruction, ErrorKind> {
    let (prefixes, opcode) = prefix::scan(bytes, bitness)?;
    let mut state = State::new(bitness, options, prefixes);

    let info = dispatch::walk(bytes, &mut state, opcode)?;
    state.resolve_sizes(info.flags);

    let mut code = match info.code {
        Codes::One(code) => code,
        Codes::Sized(codes) if info.flags.contains(InfoFlags::ASIZE_CODE) => codes[state.asize.index()],
        Codes::Sized(codes) => codes[state.osize.index()],
    };

    let mut operands = [Operand::Nothing; 5];
    operands::resolve(bytes, &mut state, info, &mut operands)?;

    if info.flags.contains(InfoFlags::D3NOW) {
        let suffix = bytes.next()?;
        code = tables::d3now::lookup(suffix).ok_or(ErrorKind::InvalidOpcode)?;
        state.encoding = EncodingKind::D3Now;
    }

    let op_count = info.ops.len();
    validity::check(&mut state, info, &operands[..op_count]);
    if state.violation && !options.contains(DecoderOptions::NO_INVALID_CHECK) {
        return Err(ErrorKind::InvalidEncoding);
    }

    let len = bytes.len();
    let next_ip = ip.wrapping_add(len as u64);
    for op in operands[..op_count].iter_mut() {
        if let Operand::NearBranch { target, size } = op {
            *target = wrap(next_ip.wrapping_add(*target), *size);
        }
    }

    let has_memory = operands.iter().any(Operand::is_memory);
    let evex = state.encoding == EncodingKind::Evex;
    let rounding = if evex && state.evex_er() && info.flags.contains(InfoFlags::ROUNDING) {
        Some(RoundingControl::from_bits(state.ll))
    } else {
        None
    };

    Ok(Instruction {
        code,
        len: len as u8,
        op_count: op_count as u8,
        operands,
        ip,
        code_size: bitness,
        encoding: state.encoding,
        segment_prefix: state.prefixes.segment(),
        prefixes: state.prefix_flags(info, has_memory),
        op_mask: (evex && state.aaa != 0).then(|| RegSpec::mask(state.aaa)),
        rounding,
    })
}

fn wrap(address: u64, size: u8) -> u64 {
    match size {
        2 => address as u16 as u64,
        4 => address as u32 as u64,
        _ => address,
    }
}

/// an x86 decoder for one bitness, reading instructions from a byte source.
///
/// ```
/// use decoder::Reader;
/// use x86_64::{Bitness, Code, Decoder, DecoderOptions};
///
/// let bytes = [0x66, 0x68, 0x5a, 0xa5, 0x12, 0x34];
/// let mut decoder = Decoder::new(Bitness::Bits16, Reader::new(&bytes), DecoderOptions::empty());
/// let instr = decoder.decode();
///
/// assert_eq!(instr.code(), Code::PushdImm32);
/// assert_eq!(instr.len(), 6);
/// assert_eq!(instr.op(0).imm().map(|imm| imm.value), Some(0x3412a55a));
/// assert_eq!(decoder.ip(), 6);
/// ```
///
/// the opcode maps are shared between all decoders. a decoder itself is only the byte source, the
/// instruction pointer and its configuration, so decoders on separate threads never interact.
#[derive(Debug)]
pub struct Decoder<S: ByteSource> {
    source: S,
    ip: u64,
    bitness: Bitness,
    options: DecoderOptions,
}

impl<S: ByteSource> Decoder<S> {
    pub fn new(bitness: Bitness, source: S, options: DecoderOptions) -> Self {
        log::trace!("x86 decoder: {} bits, options [{}]", bitness.bits(), options);

        Self {
            source,
            ip: 0,
            bitness,
            options,
        }
    }

    /// decode the next instruction.
    ///
    /// this never fails: bytes that don't form a valid instruction decode to an instruction with
    /// [`Code::Invalid`] whose length is the number of bytes consumed. the instruction pointer moves
    /// past those bytes either way, so decoding can simply continue.
    pub fn decode(&mut self) -> Instruction {
        let ip = self.ip;
        match self.try_decode() {
            Ok(instr) => instr,
            Err(err) => Instruction::invalid(ip, err.size(), self.bitness),
        }
    }

    /// decode the next instruction, reporting why it's invalid if it is.
    pub fn try_decode(&mut self) -> Result<Instruction, Error> {
        let ip = self.ip;
        let mut bytes = Bytes::new(&mut self.source);
        let result = decode_one(&mut bytes, self.bitness, self.options, ip);
        let len = bytes.len();

        self.ip = ip.wrapping_add(len as u64);
        result.map_err(|kind| Error::new(kind, len))
    }

    /// address of the next instruction to be decoded.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }
}

impl<S: ByteSource> Iterator for Decoder<S> {
    type Item = Instruction;

    /// the next instruction, or `None` once the source ends between instructions.
    fn next(&mut self) -> Option<Instruction> {
        let ip = self.ip;
        match self.try_decode() {
            Ok(instr) => Some(instr),
            Err(err) if err.kind == ErrorKind::ExhaustedInput && err.size() == 0 => None,
            Err(err) => Some(Instruction::invalid(ip, err.size(), self.bitness)),
        }
    }
}

impl<S: ByteSource> Decodable for Decoder<S> {
    type Instruction = Instruction;

    fn try_decode(&mut self) -> Result<Instruction, Error> {
        Decoder::try_decode(self)
    }

    fn max_width(&self) -> usize {
        MAX_INSTRUCTION_LEN
    }
}
