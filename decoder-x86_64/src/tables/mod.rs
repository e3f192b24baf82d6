//! opcode maps.
//!
//! every map is a sparse list of `(opcode byte, Entry)` pairs, expanded once into a dense
//! 256-slot array the first time it's used. entries either carry an instruction template
//! ([`OpCodeInfo`]) or select among further entries by some field of the encoding: ModRM.reg,
//! ModRM.rm, register-vs-memory form, mandatory prefix, W, L, bitness or a decoder option.
//!
//! the maps are never mutated after construction and are shared by all decoders.

use once_cell::sync::Lazy;

use crate::code::Code;
use crate::options::DecoderOptions;

/// register class an operand is drawn from. sized classes (`V`, `Y`, `Z`, `Vx`) resolve
/// against the effective operand size or vector length of the instruction being decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RegKind {
    Byte,
    Word,
    Dword,
    Qword,
    /// 16, 32 or 64 bits, by operand size.
    V,
    /// 32 bits, or 64 with a 64-bit operand size.
    Y,
    /// 16 or 32 bits, by operand size. never 64.
    Z,
    Mm,
    Xmm,
    Ymm,
    Zmm,
    /// xmm, ymm or zmm, by vector length.
    Vx,
    K,
    St,
    Bnd,
    Seg,
    Cr,
    Dr,
    Tr,
}

impl RegKind {
    pub(crate) fn is_vector(self) -> bool {
        matches!(self, RegKind::Xmm | RegKind::Ymm | RegKind::Zmm | RegKind::Vx)
    }

    pub(crate) fn is_gpr(self) -> bool {
        matches!(
            self,
            RegKind::Byte
                | RegKind::Word
                | RegKind::Dword
                | RegKind::Qword
                | RegKind::V
                | RegKind::Y
                | RegKind::Z
        )
    }
}

/// where an operand comes from, and how it's interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpSpec {
    /// ModRM.reg.
    Reg(RegKind),
    /// ModRM.rm, as a register or memory.
    Rm(RegKind),
    /// ModRM.rm as a register, whatever ModRM.mod says.
    RmReg(RegKind),
    /// ModRM.rm, memory only.
    Mem,
    /// vector-indexed memory, with the index drawn from the given vector class.
    Vsib(RegKind),
    /// low three bits of the opcode byte, extended by REX.B.
    OpReg(RegKind),
    /// VEX/EVEX/XOP vvvv.
    Vvvv(RegKind),
    /// register number in the high nibble of the trailing immediate byte.
    Is4(RegKind),
    /// a register not named by any field of the encoding.
    Implicit(u8, RegKind),
    Imm8,
    /// imm8 sign-extended to the operand size.
    Imm8Sx,
    Imm16,
    /// imm16 or imm32, by operand size. sign-extended with a 64-bit operand size.
    ImmZ,
    /// imm16, imm32 or imm64, by operand size.
    ImmV,
    Imm32,
    /// the constant 1 of the shift-by-one forms.
    ImmOne,
    /// an imm8 following another immediate.
    Imm8Second,
    Rel8,
    /// rel16 or rel32, by operand size.
    RelZ,
    /// `ptr16:16` or `ptr16:32`.
    FarPtr,
    /// absolute memory offset sized by the address size.
    Moffs,
    /// string source, `seg:[rSI]`.
    StrSrc,
    /// string destination, `es:[rDI]`.
    StrDst,
    /// `[rBX+al]`.
    Xlat,
}

impl OpSpec {
    /// operands whose bytes follow ModRM, SIB and displacement.
    pub(crate) fn reads_trailing_bytes(self) -> bool {
        matches!(
            self,
            OpSpec::Is4(_)
                | OpSpec::Imm8
                | OpSpec::Imm8Sx
                | OpSpec::Imm16
                | OpSpec::ImmZ
                | OpSpec::ImmV
                | OpSpec::Imm32
                | OpSpec::Imm8Second
                | OpSpec::Rel8
                | OpSpec::RelZ
                | OpSpec::FarPtr
                | OpSpec::Moffs
        )
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct InfoFlags: u32 {
        const LOCK = 1 << 0;
        const XACQUIRE = 1 << 1;
        const XRELEASE = 1 << 2;
        /// xacquire/xrelease are recognized without a lock prefix.
        const HLE_NOLOCK = 1 << 3;
        /// 64-bit operand size by default in 64-bit mode. 66 selects 16 bits.
        const DEFAULT64 = 1 << 4;
        /// 64-bit operand size in 64-bit mode. 66 selects 16 bits only with `AMD`.
        const FORCE64 = 1 << 5;
        /// the `Code` is chosen by address size, not operand size.
        const ASIZE_CODE = 1 << 6;
        const BROADCAST = 1 << 7;
        const OPMASK = 1 << 8;
        const ZEROING = 1 << 9;
        const REQUIRE_OPMASK = 1 << 10;
        const SAE = 1 << 11;
        const ROUNDING = 1 << 12;
        /// bound register addressing: 64-bit addresses in 64-bit mode, no 16-bit addressing.
        const MPX = 1 << 13;
        /// the `Code` is chosen by a trailing suffix byte.
        const D3NOW = 1 << 14;
    }
}

pub(crate) const NONE: InfoFlags = InfoFlags::empty();
pub(crate) const LK: InfoFlags = InfoFlags::LOCK.union(InfoFlags::XACQUIRE).union(InfoFlags::XRELEASE);
pub(crate) const HLE_XCHG: InfoFlags = LK.union(InfoFlags::HLE_NOLOCK);
pub(crate) const HLE_MOV: InfoFlags = InfoFlags::XRELEASE.union(InfoFlags::HLE_NOLOCK);
pub(crate) const D64: InfoFlags = InfoFlags::DEFAULT64;
pub(crate) const F64: InfoFlags = InfoFlags::FORCE64;
pub(crate) const JCX: InfoFlags = InfoFlags::ASIZE_CODE.union(InfoFlags::FORCE64);
pub(crate) const BND: InfoFlags = InfoFlags::MPX;

pub(crate) const K: InfoFlags = InfoFlags::OPMASK;
pub(crate) const KZ: InfoFlags = K.union(InfoFlags::ZEROING);
pub(crate) const KZB: InfoFlags = KZ.union(InfoFlags::BROADCAST);
pub(crate) const KZB_ER: InfoFlags = KZB.union(InfoFlags::ROUNDING);
pub(crate) const KZB_SAE: InfoFlags = KZB.union(InfoFlags::SAE);
pub(crate) const KZ_ER: InfoFlags = KZ.union(InfoFlags::ROUNDING);
pub(crate) const KZ_SAE: InfoFlags = KZ.union(InfoFlags::SAE);
pub(crate) const KB: InfoFlags = K.union(InfoFlags::BROADCAST);
pub(crate) const KB_SAE: InfoFlags = KB.union(InfoFlags::SAE);
pub(crate) const K_SAE: InfoFlags = K.union(InfoFlags::SAE);
pub(crate) const GATHER: InfoFlags = K.union(InfoFlags::REQUIRE_OPMASK);

/// compressed displacement class of an EVEX memory operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TupleType {
    None,
    /// whole vector, or one element when broadcasting.
    Full,
    /// half vector, or one dword when broadcasting.
    Half,
    FullMem,
    HalfMem,
    QuarterMem,
    EighthMem,
    Mem128,
    Movddup,
    /// one element, 4 or 8 bytes by W.
    Tuple1Scalar,
    Tuple1Scalar1,
    Tuple1Scalar2,
    Tuple1Scalar4,
    Tuple1Scalar8,
    Tuple2,
    Tuple4,
    Tuple8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum WBit {
    Any,
    W0,
    W1,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LBit {
    Any,
    L0,
    L1,
    L2,
}

/// the W and L values a template was defined for. `Any` bits are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Req {
    pub w: WBit,
    pub l: LBit,
}

pub(crate) const ANY: Req = Req { w: WBit::Any, l: LBit::Any };
pub(crate) const W0: Req = Req { w: WBit::W0, l: LBit::Any };
pub(crate) const W1: Req = Req { w: WBit::W1, l: LBit::Any };
pub(crate) const L0: Req = Req { w: WBit::Any, l: LBit::L0 };
pub(crate) const L1: Req = Req { w: WBit::Any, l: LBit::L1 };
pub(crate) const W0L0: Req = Req { w: WBit::W0, l: LBit::L0 };
pub(crate) const W1L0: Req = Req { w: WBit::W1, l: LBit::L0 };
pub(crate) const W0L1: Req = Req { w: WBit::W0, l: LBit::L1 };
pub(crate) const W1L1: Req = Req { w: WBit::W1, l: LBit::L1 };
pub(crate) const W0L2: Req = Req { w: WBit::W0, l: LBit::L2 };
pub(crate) const W1L2: Req = Req { w: WBit::W1, l: LBit::L2 };

/// one `Code`, or one per operand size (or address size, with `ASIZE_CODE`): 16, 32, 64.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Codes {
    One(Code),
    Sized([Code; 3]),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpCodeInfo {
    pub code: Codes,
    pub ops: &'static [OpSpec],
    pub flags: InfoFlags,
    pub tuple: TupleType,
    pub req: Req,
}

impl OpCodeInfo {
    pub(crate) fn uses_vvvv(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, OpSpec::Vvvv(_)))
    }

    pub(crate) fn is_vsib(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, OpSpec::Vsib(_)))
    }
}

/// a slot of an opcode map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Entry {
    Invalid,
    Op(OpCodeInfo),
    /// indexed by ModRM.reg.
    Group(&'static [Entry; 8]),
    /// indexed by ModRM.rm.
    RmGroup(&'static [Entry; 8]),
    /// (register form, memory form).
    RegMem(&'static Entry, &'static Entry),
    /// indexed by mandatory prefix: none, 66, F3, F2.
    Mandatory(&'static [Entry; 4]),
    /// (with F3, otherwise). 66 and F2 keep their ordinary meaning.
    F3(&'static Entry, &'static Entry),
    /// (with F2, otherwise).
    F2(&'static Entry, &'static Entry),
    /// indexed by W.
    W(&'static [Entry; 2]),
    /// indexed by vector length. L'L of 3 has no entry.
    L(&'static [Entry; 3]),
    /// indexed by vector length, with register forms using embedded rounding or sae taking
    /// the 512-bit slot.
    LenEr(&'static [Entry; 3]),
    /// (16/32-bit mode, 64-bit mode).
    Mode(&'static Entry, &'static Entry),
    /// (option set, option clear).
    Opt(DecoderOptions, &'static Entry, &'static Entry),
    /// (without REX.B, with REX.B).
    RexB(&'static Entry, &'static Entry),
    Escape(Map),
    /// a VEX, EVEX or XOP lead byte. the entry is what the byte means when it isn't one.
    Vex2(&'static Entry),
    Vex3(&'static Entry),
    Evex(&'static Entry),
    Xop(&'static Entry),
}

/// the maps reached by escape bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Map {
    M0F,
    M0F38,
    M0F3A,
}

pub(crate) type Table = [Entry; 256];

macro_rules! or_none {
    () => {
        NONE
    };
    ($flags:expr) => {
        $flags
    };
}

macro_rules! or_any {
    () => {
        ANY
    };
    ($req:expr) => {
        $req
    };
}

/// a template with one `Code`.
macro_rules! op {
    ($code:ident $(, $spec:expr)*) => {
        op!(@ $code [$($spec),*] [] [])
    };
    ($code:ident $(, $spec:expr)*; $flags:expr) => {
        op!(@ $code [$($spec),*] [$flags] [])
    };
    ($code:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        op!(@ $code [$($spec),*] [$flags] [$req])
    };
    (@ $code:ident [$($spec:expr),*] [$($flags:expr)?] [$($req:expr)?]) => {
        Entry::Op(OpCodeInfo {
            code: Codes::One(Code::$code),
            ops: &[$($spec),*],
            flags: or_none!($($flags)?),
            tuple: TupleType::None,
            req: or_any!($($req)?),
        })
    };
}

/// a template with a `Code` per operand size: 16, 32, 64.
macro_rules! opv {
    ($c16:ident $c32:ident $c64:ident $(, $spec:expr)*) => {
        opv!(@ $c16 $c32 $c64 [$($spec),*] [] [])
    };
    ($c16:ident $c32:ident $c64:ident $(, $spec:expr)*; $flags:expr) => {
        opv!(@ $c16 $c32 $c64 [$($spec),*] [$flags] [])
    };
    ($c16:ident $c32:ident $c64:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        opv!(@ $c16 $c32 $c64 [$($spec),*] [$flags] [$req])
    };
    (@ $c16:ident $c32:ident $c64:ident [$($spec:expr),*] [$($flags:expr)?] [$($req:expr)?]) => {
        Entry::Op(OpCodeInfo {
            code: Codes::Sized([Code::$c16, Code::$c32, Code::$c64]),
            ops: &[$($spec),*],
            flags: or_none!($($flags)?),
            tuple: TupleType::None,
            req: or_any!($($req)?),
        })
    };
}

/// an EVEX template, with the tuple type its compressed displacement uses.
macro_rules! ev {
    ($code:ident / $tuple:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        Entry::Op(OpCodeInfo {
            code: Codes::One(Code::$code),
            ops: &[$($spec),*],
            flags: $flags,
            tuple: TupleType::$tuple,
            req: $req,
        })
    };
}

/// an EVEX template with a `Code` per operand size, as `opv!`.
macro_rules! evv {
    ($c16:ident $c32:ident $c64:ident / $tuple:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        Entry::Op(OpCodeInfo {
            code: Codes::Sized([Code::$c16, Code::$c32, Code::$c64]),
            ops: &[$($spec),*],
            flags: $flags,
            tuple: TupleType::$tuple,
            req: $req,
        })
    };
}

/// an entry that only exists outside 64-bit mode.
macro_rules! not64 {
    ($entry:expr) => {
        Entry::Mode(&$entry, &Entry::Invalid)
    };
}

/// an entry that only exists in 64-bit mode.
macro_rules! only64 {
    ($entry:expr) => {
        Entry::Mode(&Entry::Invalid, &$entry)
    };
}

/// an entry with only a memory form.
macro_rules! mem {
    ($entry:expr) => {
        Entry::RegMem(&Entry::Invalid, &$entry)
    };
}

/// an entry with only a register form.
macro_rules! reg {
    ($entry:expr) => {
        Entry::RegMem(&$entry, &Entry::Invalid)
    };
}

/// an MMX instruction without a mandatory prefix, its SSE2 twin with 66.
macro_rules! mmx_sse {
    ($mm:ident, $xmm:ident) => {
        Entry::Mandatory(&[op!($mm, PQ, QQ), op!($xmm, VX, WX), Entry::Invalid, Entry::Invalid])
    };
    ($mm:ident, $xmm:ident, $imm:expr) => {
        Entry::Mandatory(&[op!($mm, PQ, QQ, $imm), op!($xmm, VX, WX, $imm), Entry::Invalid, Entry::Invalid])
    };
}

/// packed single, packed double, scalar single, scalar double.
macro_rules! sse {
    ($ps:ident, $pd:ident) => {
        Entry::Mandatory(&[op!($ps, VX, WX), op!($pd, VX, WX), Entry::Invalid, Entry::Invalid])
    };
    ($ps:ident, $pd:ident, $ss:ident, $sd:ident) => {
        Entry::Mandatory(&[op!($ps, VX, WX), op!($pd, VX, WX), op!($ss, VX, WX), op!($sd, VX, WX)])
    };
}

/// a 66-only SSE instruction.
macro_rules! sse66 {
    ($code:ident $(, $spec:expr)*) => {
        Entry::Mandatory(&[Entry::Invalid, op!($code $(, $spec)*), Entry::Invalid, Entry::Invalid])
    };
}

/// an entry that only exists without a mandatory prefix.
macro_rules! np {
    ($entry:expr) => {
        Entry::Mandatory(&[$entry, Entry::Invalid, Entry::Invalid, Entry::Invalid])
    };
}

/// an entry that only exists with a 66 mandatory prefix (VEX/EVEX pp=1).
macro_rules! p66 {
    ($entry:expr) => {
        Entry::Mandatory(&[Entry::Invalid, $entry, Entry::Invalid, Entry::Invalid])
    };
}

pub(crate) mod d3now;
pub(crate) mod evex;
pub(crate) mod legacy;
pub(crate) mod map0f;
pub(crate) mod map0f38;
pub(crate) mod vex;
pub(crate) mod x87;
pub(crate) mod xop;

// ModRM.reg operands
pub(crate) const GB: OpSpec = OpSpec::Reg(RegKind::Byte);
pub(crate) const GW: OpSpec = OpSpec::Reg(RegKind::Word);
pub(crate) const GD: OpSpec = OpSpec::Reg(RegKind::Dword);
pub(crate) const GQ: OpSpec = OpSpec::Reg(RegKind::Qword);
pub(crate) const GV: OpSpec = OpSpec::Reg(RegKind::V);
pub(crate) const GY: OpSpec = OpSpec::Reg(RegKind::Y);
pub(crate) const SREG: OpSpec = OpSpec::Reg(RegKind::Seg);
pub(crate) const CR: OpSpec = OpSpec::Reg(RegKind::Cr);
pub(crate) const DR: OpSpec = OpSpec::Reg(RegKind::Dr);
pub(crate) const TR: OpSpec = OpSpec::Reg(RegKind::Tr);
pub(crate) const PQ: OpSpec = OpSpec::Reg(RegKind::Mm);
pub(crate) const VX: OpSpec = OpSpec::Reg(RegKind::Xmm);
pub(crate) const VY: OpSpec = OpSpec::Reg(RegKind::Ymm);
pub(crate) const VZ: OpSpec = OpSpec::Reg(RegKind::Zmm);
pub(crate) const VL: OpSpec = OpSpec::Reg(RegKind::Vx);
pub(crate) const KR: OpSpec = OpSpec::Reg(RegKind::K);
pub(crate) const BR: OpSpec = OpSpec::Reg(RegKind::Bnd);

// ModRM.rm operands
pub(crate) const EB: OpSpec = OpSpec::Rm(RegKind::Byte);
pub(crate) const EW: OpSpec = OpSpec::Rm(RegKind::Word);
pub(crate) const ED: OpSpec = OpSpec::Rm(RegKind::Dword);
pub(crate) const EQ: OpSpec = OpSpec::Rm(RegKind::Qword);
pub(crate) const EV: OpSpec = OpSpec::Rm(RegKind::V);
pub(crate) const EY: OpSpec = OpSpec::Rm(RegKind::Y);
pub(crate) const RD: OpSpec = OpSpec::RmReg(RegKind::Dword);
pub(crate) const RQ: OpSpec = OpSpec::RmReg(RegKind::Qword);
pub(crate) const RV: OpSpec = OpSpec::RmReg(RegKind::V);
pub(crate) const RY: OpSpec = OpSpec::RmReg(RegKind::Y);
pub(crate) const M: OpSpec = OpSpec::Mem;
pub(crate) const STI: OpSpec = OpSpec::RmReg(RegKind::St);
pub(crate) const QQ: OpSpec = OpSpec::Rm(RegKind::Mm);
pub(crate) const NQ: OpSpec = OpSpec::RmReg(RegKind::Mm);
pub(crate) const WX: OpSpec = OpSpec::Rm(RegKind::Xmm);
pub(crate) const WY: OpSpec = OpSpec::Rm(RegKind::Ymm);
pub(crate) const WZ: OpSpec = OpSpec::Rm(RegKind::Zmm);
pub(crate) const WL: OpSpec = OpSpec::Rm(RegKind::Vx);
pub(crate) const UX: OpSpec = OpSpec::RmReg(RegKind::Xmm);
pub(crate) const UL: OpSpec = OpSpec::RmReg(RegKind::Vx);
pub(crate) const KM: OpSpec = OpSpec::Rm(RegKind::K);
pub(crate) const KN: OpSpec = OpSpec::RmReg(RegKind::K);
pub(crate) const BM: OpSpec = OpSpec::Rm(RegKind::Bnd);
pub(crate) const VSIBX: OpSpec = OpSpec::Vsib(RegKind::Xmm);
pub(crate) const VSIBY: OpSpec = OpSpec::Vsib(RegKind::Ymm);
pub(crate) const VSIBZ: OpSpec = OpSpec::Vsib(RegKind::Zmm);

// vvvv and is4 operands
pub(crate) const HX: OpSpec = OpSpec::Vvvv(RegKind::Xmm);
pub(crate) const HY: OpSpec = OpSpec::Vvvv(RegKind::Ymm);
pub(crate) const HZ: OpSpec = OpSpec::Vvvv(RegKind::Zmm);
pub(crate) const HL: OpSpec = OpSpec::Vvvv(RegKind::Vx);
pub(crate) const KH: OpSpec = OpSpec::Vvvv(RegKind::K);
pub(crate) const BY: OpSpec = OpSpec::Vvvv(RegKind::Y);
pub(crate) const LX: OpSpec = OpSpec::Is4(RegKind::Xmm);
pub(crate) const LL: OpSpec = OpSpec::Is4(RegKind::Vx);

// opcode-embedded registers
pub(crate) const ZB: OpSpec = OpSpec::OpReg(RegKind::Byte);
pub(crate) const ZV: OpSpec = OpSpec::OpReg(RegKind::V);

// implicit registers
pub(crate) const AL: OpSpec = OpSpec::Implicit(0, RegKind::Byte);
pub(crate) const CL: OpSpec = OpSpec::Implicit(1, RegKind::Byte);
pub(crate) const DX: OpSpec = OpSpec::Implicit(2, RegKind::Word);
pub(crate) const RAX: OpSpec = OpSpec::Implicit(0, RegKind::V);
pub(crate) const EAX_IO: OpSpec = OpSpec::Implicit(0, RegKind::Z);
pub(crate) const ST0: OpSpec = OpSpec::Implicit(0, RegKind::St);
pub(crate) const XMM0: OpSpec = OpSpec::Implicit(0, RegKind::Xmm);
pub(crate) const ES: OpSpec = OpSpec::Implicit(0, RegKind::Seg);
pub(crate) const CS: OpSpec = OpSpec::Implicit(1, RegKind::Seg);
pub(crate) const SS: OpSpec = OpSpec::Implicit(2, RegKind::Seg);
pub(crate) const DS: OpSpec = OpSpec::Implicit(3, RegKind::Seg);
pub(crate) const FS: OpSpec = OpSpec::Implicit(4, RegKind::Seg);
pub(crate) const GS: OpSpec = OpSpec::Implicit(5, RegKind::Seg);

// immediates, branches and implicit memory
pub(crate) const IB: OpSpec = OpSpec::Imm8;
pub(crate) const IBS: OpSpec = OpSpec::Imm8Sx;
pub(crate) const IW: OpSpec = OpSpec::Imm16;
pub(crate) const IZ: OpSpec = OpSpec::ImmZ;
pub(crate) const IV: OpSpec = OpSpec::ImmV;
pub(crate) const ID: OpSpec = OpSpec::Imm32;
pub(crate) const IB2: OpSpec = OpSpec::Imm8Second;
pub(crate) const ONE: OpSpec = OpSpec::ImmOne;
pub(crate) const JB: OpSpec = OpSpec::Rel8;
pub(crate) const JZ: OpSpec = OpSpec::RelZ;
pub(crate) const AP: OpSpec = OpSpec::FarPtr;
pub(crate) const MOFFS: OpSpec = OpSpec::Moffs;
pub(crate) const XS: OpSpec = OpSpec::StrSrc;
pub(crate) const YD: OpSpec = OpSpec::StrDst;
pub(crate) const XLAT: OpSpec = OpSpec::Xlat;

/// expand a sparse map into its dense form.
pub(crate) fn build(name: &str, slots: &[(u8, Entry)]) -> Table {
    let mut table = [Entry::Invalid; 256];
    let mut seen = [false; 256];

    for &(byte, entry) in slots {
        debug_assert!(!seen[byte as usize], "{name}: slot {byte:#04x} defined twice");
        seen[byte as usize] = true;
        table[byte as usize] = entry;
    }

    let populated = table.iter().filter(|entry| **entry != Entry::Invalid).count();
    log::trace!("opcode map {name}: {populated} populated slots");
    table
}

/// the map an escape sequence leads to, for legacy encodings.
pub(crate) fn legacy_map(map: Map) -> &'static Lazy<Table> {
    match map {
        Map::M0F => &map0f::TWO_BYTE,
        Map::M0F38 => &map0f38::MAP_0F38,
        Map::M0F3A => &map0f38::MAP_0F3A,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_are_populated() {
        let legacy: usize = [&legacy::ONE_BYTE, &map0f::TWO_BYTE, &map0f38::MAP_0F38, &map0f38::MAP_0F3A]
            .iter()
            .map(|table| table.iter().filter(|e| **e != Entry::Invalid).count())
            .sum();
        assert!(legacy > 400, "only {legacy} legacy slots");

        for table in [&vex::VEX_0F, &vex::VEX_0F38, &vex::VEX_0F3A, &evex::EVEX_0F, &evex::EVEX_0F38] {
            assert!(table.iter().any(|e| *e != Entry::Invalid));
        }
    }

    #[test]
    fn escapes_are_wired() {
        assert_eq!(legacy::ONE_BYTE[0x0f], Entry::Escape(Map::M0F));
        assert_eq!(map0f::TWO_BYTE[0x38], Entry::Escape(Map::M0F38));
        assert_eq!(map0f::TWO_BYTE[0x3a], Entry::Escape(Map::M0F3A));
    }

    #[test]
    fn table_construction_is_logged() {
        // other tests log concurrently and the log only keeps the most recent lines.
        let found = (0..10).any(|_| {
            let table = build("scratch", &[(0x90, op!(Nop)), (0x91, Entry::Escape(Map::M0F))]);
            assert_eq!(table[0x91], Entry::Escape(Map::M0F));

            let logger = log::LOGGER.lock().unwrap();
            let found = logger.lines().any(|(line, _)| line == "opcode map scratch: 2 populated slots");
            found
        });
        assert!(found);
    }
}
