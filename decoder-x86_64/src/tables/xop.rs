//! AMD XOP maps 8, 9 and 10.
//!
//! XOP has no mandatory prefixes (`pp` must be zero). map 8 instructions end in an imm8, which
//! often names a fourth register in its high nibble. map 10 carries 32-bit immediates.

use once_cell::sync::Lazy;

use super::*;

pub(crate) static XOP_8: Lazy<Table> = Lazy::new(|| build("xop map 8", SLOTS_8));
pub(crate) static XOP_9: Lazy<Table> = Lazy::new(|| build("xop map 9", SLOTS_9));
pub(crate) static XOP_A: Lazy<Table> = Lazy::new(|| build("xop map 10", SLOTS_A));

const INV: Entry = Entry::Invalid;

/// the 128-bit and 256-bit forms of an XOP instruction.
macro_rules! vlx {
    ($x:ident $y:ident $(, $spec:expr)*) => {
        vlx!($x $y $(, $spec)*; NONE; ANY)
    };
    ($x:ident $y:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        Entry::L(&[op!($x $(, $spec)*; $flags; $req), op!($y $(, $spec)*; $flags; $req), Entry::Invalid])
    };
}

/// a four-operand multiply-accumulate: xmm, xmm (vvvv), xmm/m128, xmm (is4).
macro_rules! macc {
    ($code:ident) => {
        op!($code, VX, HX, WX, LX; NONE; W0L0)
    };
}

/// a compare with the predicate in imm8.
macro_rules! com {
    ($code:ident) => {
        op!($code, VX, HX, WX, IB; NONE; W0L0)
    };
}

/// W0 shifts by vvvv (`xmm, xmm/m128, xmm`), W1 by r/m (`xmm, xmm, xmm/m128`).
macro_rules! shift {
    ($w0:ident $w1:ident) => {
        Entry::W(&[op!($w0, VX, WX, HX; NONE; L0), op!($w1, VX, HX, WX; NONE; L0)])
    };
}

static SLOTS_8: &[(u8, Entry)] = &[
    (0x85, macc!(XopVpmacssww)),
    (0x86, macc!(XopVpmacsswd)),
    (0x87, macc!(XopVpmacssdql)),
    (0x8e, macc!(XopVpmacssdd)),
    (0x8f, macc!(XopVpmacssdqh)),
    (0x95, macc!(XopVpmacsww)),
    (0x96, macc!(XopVpmacswd)),
    (0x97, macc!(XopVpmacsdql)),
    (0x9e, macc!(XopVpmacsdd)),
    (0x9f, macc!(XopVpmacsdqh)),
    (
        0xa2,
        Entry::W(&[
            vlx!(XopVpcmovXmm XopVpcmovYmm, VL, HL, WL, LL),
            vlx!(XopVpcmovXmmAlt XopVpcmovYmmAlt, VL, HL, LL, WL),
        ]),
    ),
    (
        0xa3,
        Entry::W(&[
            op!(XopVpperm, VX, HX, WX, LX; NONE; L0),
            op!(XopVppermAlt, VX, HX, LX, WX; NONE; L0),
        ]),
    ),
    (0xa6, macc!(XopVpmadcsswd)),
    (0xb6, macc!(XopVpmadcswd)),
    (0xc0, op!(XopVprotbImm8, VX, WX, IB; NONE; W0L0)),
    (0xc1, op!(XopVprotwImm8, VX, WX, IB; NONE; W0L0)),
    (0xc2, op!(XopVprotdImm8, VX, WX, IB; NONE; W0L0)),
    (0xc3, op!(XopVprotqImm8, VX, WX, IB; NONE; W0L0)),
    (0xcc, com!(XopVpcomb)),
    (0xcd, com!(XopVpcomw)),
    (0xce, com!(XopVpcomd)),
    (0xcf, com!(XopVpcomq)),
    (0xec, com!(XopVpcomub)),
    (0xed, com!(XopVpcomuw)),
    (0xee, com!(XopVpcomud)),
    (0xef, com!(XopVpcomuq)),
];

// TBM: the destination is vvvv.
static TBM_GROUP1: [Entry; 8] = [
    INV,
    opv!(XopBlcfillR32Rm32 XopBlcfillR32Rm32 XopBlcfillR64Rm64, BY, EY; NONE; L0),
    opv!(XopBlsfillR32Rm32 XopBlsfillR32Rm32 XopBlsfillR64Rm64, BY, EY; NONE; L0),
    opv!(XopBlcsR32Rm32 XopBlcsR32Rm32 XopBlcsR64Rm64, BY, EY; NONE; L0),
    opv!(XopTzmskR32Rm32 XopTzmskR32Rm32 XopTzmskR64Rm64, BY, EY; NONE; L0),
    opv!(XopBlcicR32Rm32 XopBlcicR32Rm32 XopBlcicR64Rm64, BY, EY; NONE; L0),
    opv!(XopBlsicR32Rm32 XopBlsicR32Rm32 XopBlsicR64Rm64, BY, EY; NONE; L0),
    opv!(XopT1mskcR32Rm32 XopT1mskcR32Rm32 XopT1mskcR64Rm64, BY, EY; NONE; L0),
];

static TBM_GROUP2: [Entry; 8] = [
    INV,
    opv!(XopBlcmskR32Rm32 XopBlcmskR32Rm32 XopBlcmskR64Rm64, BY, EY; NONE; L0),
    INV,
    INV,
    INV,
    INV,
    opv!(XopBlciR32Rm32 XopBlciR32Rm32 XopBlciR64Rm64, BY, EY; NONE; L0),
    INV,
];

static LWP_GROUP: [Entry; 8] = [
    opv!(XopLlwpcbR32 XopLlwpcbR32 XopLlwpcbR64, RY; NONE; L0),
    opv!(XopSlwpcbR32 XopSlwpcbR32 XopSlwpcbR64, RY; NONE; L0),
    INV,
    INV,
    INV,
    INV,
    INV,
    INV,
];

static SLOTS_9: &[(u8, Entry)] = &[
    (0x01, Entry::Group(&TBM_GROUP1)),
    (0x02, Entry::Group(&TBM_GROUP2)),
    (0x12, reg!(Entry::Group(&LWP_GROUP))),
    (0x80, vlx!(XopVfrczpsXmm XopVfrczpsYmm, VL, WL; NONE; W0)),
    (0x81, vlx!(XopVfrczpdXmm XopVfrczpdYmm, VL, WL; NONE; W0)),
    (0x82, op!(XopVfrczssXmmXmmm32, VX, WX; NONE; W0L0)),
    (0x83, op!(XopVfrczsdXmmXmmm64, VX, WX; NONE; W0L0)),
    (0x90, shift!(XopVprotb XopVprotbAlt)),
    (0x91, shift!(XopVprotw XopVprotwAlt)),
    (0x92, shift!(XopVprotd XopVprotdAlt)),
    (0x93, shift!(XopVprotq XopVprotqAlt)),
    (0x94, shift!(XopVpshlb XopVpshlbAlt)),
    (0x95, shift!(XopVpshlw XopVpshlwAlt)),
    (0x96, shift!(XopVpshld XopVpshldAlt)),
    (0x97, shift!(XopVpshlq XopVpshlqAlt)),
    (0x98, shift!(XopVpshab XopVpshabAlt)),
    (0x99, shift!(XopVpshaw XopVpshawAlt)),
    (0x9a, shift!(XopVpshad XopVpshadAlt)),
    (0x9b, shift!(XopVpshaq XopVpshaqAlt)),
    (0xc1, op!(XopVphaddbw, VX, WX; NONE; W0L0)),
    (0xc2, op!(XopVphaddbd, VX, WX; NONE; W0L0)),
    (0xc3, op!(XopVphaddbq, VX, WX; NONE; W0L0)),
    (0xc6, op!(XopVphaddwd, VX, WX; NONE; W0L0)),
    (0xc7, op!(XopVphaddwq, VX, WX; NONE; W0L0)),
    (0xcb, op!(XopVphadddq, VX, WX; NONE; W0L0)),
    (0xd1, op!(XopVphaddubw, VX, WX; NONE; W0L0)),
    (0xd2, op!(XopVphaddubd, VX, WX; NONE; W0L0)),
    (0xd3, op!(XopVphaddubq, VX, WX; NONE; W0L0)),
    (0xd6, op!(XopVphadduwd, VX, WX; NONE; W0L0)),
    (0xd7, op!(XopVphadduwq, VX, WX; NONE; W0L0)),
    (0xdb, op!(XopVphaddudq, VX, WX; NONE; W0L0)),
    (0xe1, op!(XopVphsubbw, VX, WX; NONE; W0L0)),
    (0xe2, op!(XopVphsubwd, VX, WX; NONE; W0L0)),
    (0xe3, op!(XopVphsubdq, VX, WX; NONE; W0L0)),
];

static LWP_IMM_GROUP: [Entry; 8] = [
    opv!(XopLwpinsR32Rm32Imm32 XopLwpinsR32Rm32Imm32 XopLwpinsR64Rm32Imm32, BY, ED, ID; NONE; L0),
    opv!(XopLwpvalR32Rm32Imm32 XopLwpvalR32Rm32Imm32 XopLwpvalR64Rm32Imm32, BY, ED, ID; NONE; L0),
    INV,
    INV,
    INV,
    INV,
    INV,
    INV,
];

static SLOTS_A: &[(u8, Entry)] = &[
    (0x10, opv!(XopBextrR32Rm32Imm32 XopBextrR32Rm32Imm32 XopBextrR64Rm64Imm32, GY, EY, ID; NONE; L0)),
    (0x12, Entry::Group(&LWP_IMM_GROUP)),
];
