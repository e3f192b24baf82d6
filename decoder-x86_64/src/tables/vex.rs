//! VEX maps 1, 2 and 3 (`0F`, `0F38`, `0F3A`).
//!
//! the mandatory prefix of a VEX instruction is its `pp` field, so most slots are `Mandatory`
//! entries indexed by it. instructions with a 128-bit and a 256-bit form select between them
//! with `L`.

use once_cell::sync::Lazy;

use super::*;

pub(crate) static VEX_0F: Lazy<Table> = Lazy::new(|| build("vex 0f", SLOTS_0F));
pub(crate) static VEX_0F38: Lazy<Table> = Lazy::new(|| build("vex 0f38", SLOTS_0F38));
pub(crate) static VEX_0F3A: Lazy<Table> = Lazy::new(|| build("vex 0f3a", SLOTS_0F3A));

/// the 128-bit and 256-bit forms of an instruction.
macro_rules! vl {
    ($x:ident $y:ident $(, $spec:expr)*) => {
        vl!($x $y $(, $spec)*; NONE; ANY)
    };
    ($x:ident $y:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        Entry::L(&[op!($x $(, $spec)*; $flags; $req), op!($y $(, $spec)*; $flags; $req), Entry::Invalid])
    };
}

/// as `vl!`, with a 32-bit and a 64-bit general purpose register picked by W.
macro_rules! vly {
    ($x32:ident $x64:ident, $y32:ident $y64:ident $(, $spec:expr)*) => {
        Entry::L(&[opv!($x32 $x32 $x64 $(, $spec)*), opv!($y32 $y32 $y64 $(, $spec)*), Entry::Invalid])
    };
}

const INV: Entry = Entry::Invalid;

// k-register instructions: none/66 by pp, then byte/word/dword/qword by W.
const KMOV_LOAD: Entry = Entry::Mandatory(&[
    Entry::W(&[op!(VexKmovwKrKm16, KR, KM; NONE; L0), op!(VexKmovqKrKm64, KR, KM; NONE; L0)]),
    Entry::W(&[op!(VexKmovbKrKm8, KR, KM; NONE; L0), op!(VexKmovdKrKm32, KR, KM; NONE; L0)]),
    INV,
    INV,
]);

const KMOV_STORE: Entry = mem!(Entry::Mandatory(&[
    Entry::W(&[op!(VexKmovwM16Kr, M, KR; NONE; L0), op!(VexKmovqM64Kr, M, KR; NONE; L0)]),
    Entry::W(&[op!(VexKmovbM8Kr, M, KR; NONE; L0), op!(VexKmovdM32Kr, M, KR; NONE; L0)]),
    INV,
    INV,
]));

const KMOV_FROM_GPR: Entry = reg!(Entry::Mandatory(&[
    op!(VexKmovwKrR32, KR, RD; NONE; W0L0),
    op!(VexKmovbKrR32, KR, RD; NONE; W0L0),
    INV,
    Entry::W(&[op!(VexKmovdKrR32, KR, RD; NONE; L0), op!(VexKmovqKrR64, KR, RQ; NONE; L0)]),
]));

const KMOV_TO_GPR: Entry = reg!(Entry::Mandatory(&[
    op!(VexKmovwR32Kr, GD, KN; NONE; W0L0),
    op!(VexKmovbR32Kr, GD, KN; NONE; W0L0),
    INV,
    Entry::W(&[op!(VexKmovdR32Kr, GD, KN; NONE; L0), op!(VexKmovqR64Kr, GQ, KN; NONE; L0)]),
]));

/// a three-operand k-register instruction (`kand` and friends): L1, register form only.
macro_rules! kop3 {
    ($w:ident $q:ident $b:ident $d:ident) => {
        reg!(Entry::Mandatory(&[
            Entry::W(&[op!($w, KR, KH, KN; NONE; L1), op!($q, KR, KH, KN; NONE; L1)]),
            Entry::W(&[op!($b, KR, KH, KN; NONE; L1), op!($d, KR, KH, KN; NONE; L1)]),
            Entry::Invalid,
            Entry::Invalid,
        ]))
    };
}

/// a two-operand k-register instruction (`knot`, `kortest`, `ktest`): L0, register form only.
macro_rules! kop2 {
    ($w:ident $q:ident $b:ident $d:ident) => {
        reg!(Entry::Mandatory(&[
            Entry::W(&[op!($w, KR, KN; NONE; L0), op!($q, KR, KN; NONE; L0)]),
            Entry::W(&[op!($b, KR, KN; NONE; L0), op!($d, KR, KN; NONE; L0)]),
            Entry::Invalid,
            Entry::Invalid,
        ]))
    };
}

static GROUP12: [Entry; 8] = [
    INV,
    INV,
    vl!(VexVpsrlwXmmXmmImm8 VexVpsrlwYmmYmmImm8, HL, UL, IB),
    INV,
    vl!(VexVpsrawXmmXmmImm8 VexVpsrawYmmYmmImm8, HL, UL, IB),
    INV,
    vl!(VexVpsllwXmmXmmImm8 VexVpsllwYmmYmmImm8, HL, UL, IB),
    INV,
];

static GROUP13: [Entry; 8] = [
    INV,
    INV,
    vl!(VexVpsrldXmmXmmImm8 VexVpsrldYmmYmmImm8, HL, UL, IB),
    INV,
    vl!(VexVpsradXmmXmmImm8 VexVpsradYmmYmmImm8, HL, UL, IB),
    INV,
    vl!(VexVpslldXmmXmmImm8 VexVpslldYmmYmmImm8, HL, UL, IB),
    INV,
];

static GROUP14: [Entry; 8] = [
    INV,
    INV,
    vl!(VexVpsrlqXmmXmmImm8 VexVpsrlqYmmYmmImm8, HL, UL, IB),
    vl!(VexVpsrldqXmmXmmImm8 VexVpsrldqYmmYmmImm8, HL, UL, IB),
    INV,
    INV,
    vl!(VexVpsllqXmmXmmImm8 VexVpsllqYmmYmmImm8, HL, UL, IB),
    vl!(VexVpslldqXmmXmmImm8 VexVpslldqYmmYmmImm8, HL, UL, IB),
];

static GROUP15: [Entry; 8] = [
    INV,
    INV,
    op!(VexVldmxcsrM32, M; NONE; L0),
    op!(VexVstmxcsrM32, M; NONE; L0),
    INV,
    INV,
    INV,
    INV,
];

static BMI_GROUP17: [Entry; 8] = [
    INV,
    opv!(VexBlsrR32Rm32 VexBlsrR32Rm32 VexBlsrR64Rm64, BY, EY; NONE; L0),
    opv!(VexBlsmskR32Rm32 VexBlsmskR32Rm32 VexBlsmskR64Rm64, BY, EY; NONE; L0),
    opv!(VexBlsiR32Rm32 VexBlsiR32Rm32 VexBlsiR64Rm64, BY, EY; NONE; L0),
    INV,
    INV,
    INV,
    INV,
];

static SLOTS_0F: &[(u8, Entry)] = &[
    (
        0x10,
        Entry::Mandatory(&[
            vl!(VexVmovupsXmmXmmm128 VexVmovupsYmmYmmm256, VL, WL),
            vl!(VexVmovupdXmmXmmm128 VexVmovupdYmmYmmm256, VL, WL),
            Entry::RegMem(&op!(VexVmovssXmmXmmXmm, VX, HX, UX), &op!(VexVmovssXmmM32, VX, M)),
            Entry::RegMem(&op!(VexVmovsdXmmXmmXmm, VX, HX, UX), &op!(VexVmovsdXmmM64, VX, M)),
        ]),
    ),
    (
        0x11,
        Entry::Mandatory(&[
            vl!(VexVmovupsXmmm128Xmm VexVmovupsYmmm256Ymm, WL, VL),
            vl!(VexVmovupdXmmm128Xmm VexVmovupdYmmm256Ymm, WL, VL),
            Entry::RegMem(&op!(VexVmovssXmmXmmXmmAlt, UX, HX, VX), &op!(VexVmovssM32Xmm, M, VX)),
            Entry::RegMem(&op!(VexVmovsdXmmXmmXmmAlt, UX, HX, VX), &op!(VexVmovsdM64Xmm, M, VX)),
        ]),
    ),
    (
        0x12,
        Entry::Mandatory(&[
            Entry::RegMem(
                &op!(VexVmovhlpsXmmXmmXmm, VX, HX, UX; NONE; L0),
                &op!(VexVmovlpsXmmXmmM64, VX, HX, M; NONE; L0),
            ),
            mem!(op!(VexVmovlpdXmmXmmM64, VX, HX, M; NONE; L0)),
            vl!(VexVmovsldupXmmXmmm128 VexVmovsldupYmmYmmm256, VL, WL),
            vl!(VexVmovddupXmmXmmm64 VexVmovddupYmmYmmm256, VL, WL),
        ]),
    ),
    (
        0x13,
        Entry::Mandatory(&[
            mem!(op!(VexVmovlpsM64Xmm, M, VX; NONE; L0)),
            mem!(op!(VexVmovlpdM64Xmm, M, VX; NONE; L0)),
            INV,
            INV,
        ]),
    ),
    (
        0x14,
        Entry::Mandatory(&[
            vl!(VexVunpcklpsXmm VexVunpcklpsYmm, VL, HL, WL),
            vl!(VexVunpcklpdXmm VexVunpcklpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x15,
        Entry::Mandatory(&[
            vl!(VexVunpckhpsXmm VexVunpckhpsYmm, VL, HL, WL),
            vl!(VexVunpckhpdXmm VexVunpckhpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x16,
        Entry::Mandatory(&[
            Entry::RegMem(
                &op!(VexVmovlhpsXmmXmmXmm, VX, HX, UX; NONE; L0),
                &op!(VexVmovhpsXmmXmmM64, VX, HX, M; NONE; L0),
            ),
            mem!(op!(VexVmovhpdXmmXmmM64, VX, HX, M; NONE; L0)),
            vl!(VexVmovshdupXmmXmmm128 VexVmovshdupYmmYmmm256, VL, WL),
            INV,
        ]),
    ),
    (
        0x17,
        Entry::Mandatory(&[
            mem!(op!(VexVmovhpsM64Xmm, M, VX; NONE; L0)),
            mem!(op!(VexVmovhpdM64Xmm, M, VX; NONE; L0)),
            INV,
            INV,
        ]),
    ),
    (
        0x28,
        Entry::Mandatory(&[
            vl!(VexVmovapsXmmXmmm128 VexVmovapsYmmYmmm256, VL, WL),
            vl!(VexVmovapdXmmXmmm128 VexVmovapdYmmYmmm256, VL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x29,
        Entry::Mandatory(&[
            vl!(VexVmovapsXmmm128Xmm VexVmovapsYmmm256Ymm, WL, VL),
            vl!(VexVmovapdXmmm128Xmm VexVmovapdYmmm256Ymm, WL, VL),
            INV,
            INV,
        ]),
    ),
    (
        0x2a,
        Entry::Mandatory(&[
            INV,
            INV,
            opv!(VexVcvtsi2ssXmmXmmRm32 VexVcvtsi2ssXmmXmmRm32 VexVcvtsi2ssXmmXmmRm64, VX, HX, EY),
            opv!(VexVcvtsi2sdXmmXmmRm32 VexVcvtsi2sdXmmXmmRm32 VexVcvtsi2sdXmmXmmRm64, VX, HX, EY),
        ]),
    ),
    (
        0x2b,
        mem!(Entry::Mandatory(&[
            vl!(VexVmovntpsM128Xmm VexVmovntpsM256Ymm, M, VL),
            vl!(VexVmovntpdM128Xmm VexVmovntpdM256Ymm, M, VL),
            INV,
            INV,
        ])),
    ),
    (
        0x2c,
        Entry::Mandatory(&[
            INV,
            INV,
            opv!(VexVcvttss2siR32Xmmm32 VexVcvttss2siR32Xmmm32 VexVcvttss2siR64Xmmm32, GY, WX),
            opv!(VexVcvttsd2siR32Xmmm64 VexVcvttsd2siR32Xmmm64 VexVcvttsd2siR64Xmmm64, GY, WX),
        ]),
    ),
    (
        0x2d,
        Entry::Mandatory(&[
            INV,
            INV,
            opv!(VexVcvtss2siR32Xmmm32 VexVcvtss2siR32Xmmm32 VexVcvtss2siR64Xmmm32, GY, WX),
            opv!(VexVcvtsd2siR32Xmmm64 VexVcvtsd2siR32Xmmm64 VexVcvtsd2siR64Xmmm64, GY, WX),
        ]),
    ),
    (0x2e, Entry::Mandatory(&[op!(VexVucomissXmmXmmm32, VX, WX), op!(VexVucomisdXmmXmmm64, VX, WX), INV, INV])),
    (0x2f, Entry::Mandatory(&[op!(VexVcomissXmmXmmm32, VX, WX), op!(VexVcomisdXmmXmmm64, VX, WX), INV, INV])),
    (0x41, kop3!(VexKandw VexKandq VexKandb VexKandd)),
    (0x42, kop3!(VexKandnw VexKandnq VexKandnb VexKandnd)),
    (0x44, kop2!(VexKnotw VexKnotq VexKnotb VexKnotd)),
    (0x45, kop3!(VexKorw VexKorq VexKorb VexKord)),
    (0x46, kop3!(VexKxnorw VexKxnorq VexKxnorb VexKxnord)),
    (0x47, kop3!(VexKxorw VexKxorq VexKxorb VexKxord)),
    (0x4a, kop3!(VexKaddw VexKaddq VexKaddb VexKaddd)),
    (
        0x4b,
        reg!(Entry::Mandatory(&[
            Entry::W(&[op!(VexKunpckwd, KR, KH, KN; NONE; L1), op!(VexKunpckdq, KR, KH, KN; NONE; L1)]),
            op!(VexKunpckbw, KR, KH, KN; NONE; W0L1),
            INV,
            INV,
        ])),
    ),
    (
        0x50,
        reg!(Entry::Mandatory(&[
            vly!(VexVmovmskpsR32Xmm VexVmovmskpsR64Xmm, VexVmovmskpsR32Ymm VexVmovmskpsR64Ymm, GY, UL),
            vly!(VexVmovmskpdR32Xmm VexVmovmskpdR64Xmm, VexVmovmskpdR32Ymm VexVmovmskpdR64Ymm, GY, UL),
            INV,
            INV,
        ])),
    ),
    (
        0x51,
        Entry::Mandatory(&[
            vl!(VexVsqrtpsXmm VexVsqrtpsYmm, VL, WL),
            vl!(VexVsqrtpdXmm VexVsqrtpdYmm, VL, WL),
            op!(VexVsqrtssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVsqrtsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x54,
        Entry::Mandatory(&[
            vl!(VexVandpsXmm VexVandpsYmm, VL, HL, WL),
            vl!(VexVandpdXmm VexVandpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x55,
        Entry::Mandatory(&[
            vl!(VexVandnpsXmm VexVandnpsYmm, VL, HL, WL),
            vl!(VexVandnpdXmm VexVandnpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x56,
        Entry::Mandatory(&[
            vl!(VexVorpsXmm VexVorpsYmm, VL, HL, WL),
            vl!(VexVorpdXmm VexVorpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x57,
        Entry::Mandatory(&[
            vl!(VexVxorpsXmm VexVxorpsYmm, VL, HL, WL),
            vl!(VexVxorpdXmm VexVxorpdYmm, VL, HL, WL),
            INV,
            INV,
        ]),
    ),
    (
        0x58,
        Entry::Mandatory(&[
            vl!(VexVaddpsXmm VexVaddpsYmm, VL, HL, WL),
            vl!(VexVaddpdXmm VexVaddpdYmm, VL, HL, WL),
            op!(VexVaddssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVaddsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x59,
        Entry::Mandatory(&[
            vl!(VexVmulpsXmm VexVmulpsYmm, VL, HL, WL),
            vl!(VexVmulpdXmm VexVmulpdYmm, VL, HL, WL),
            op!(VexVmulssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVmulsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x5a,
        Entry::Mandatory(&[
            vl!(VexVcvtps2pdXmmXmmm64 VexVcvtps2pdYmmXmmm128, VL, WX),
            vl!(VexVcvtpd2psXmmXmmm128 VexVcvtpd2psXmmYmmm256, VX, WL),
            op!(VexVcvtss2sdXmmXmmXmmm32, VX, HX, WX),
            op!(VexVcvtsd2ssXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x5b,
        Entry::Mandatory(&[
            vl!(VexVcvtdq2psXmm VexVcvtdq2psYmm, VL, WL),
            vl!(VexVcvtps2dqXmm VexVcvtps2dqYmm, VL, WL),
            vl!(VexVcvttps2dqXmm VexVcvttps2dqYmm, VL, WL),
            INV,
        ]),
    ),
    (
        0x5c,
        Entry::Mandatory(&[
            vl!(VexVsubpsXmm VexVsubpsYmm, VL, HL, WL),
            vl!(VexVsubpdXmm VexVsubpdYmm, VL, HL, WL),
            op!(VexVsubssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVsubsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x5d,
        Entry::Mandatory(&[
            vl!(VexVminpsXmm VexVminpsYmm, VL, HL, WL),
            vl!(VexVminpdXmm VexVminpdYmm, VL, HL, WL),
            op!(VexVminssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVminsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x5e,
        Entry::Mandatory(&[
            vl!(VexVdivpsXmm VexVdivpsYmm, VL, HL, WL),
            vl!(VexVdivpdXmm VexVdivpdYmm, VL, HL, WL),
            op!(VexVdivssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVdivsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (
        0x5f,
        Entry::Mandatory(&[
            vl!(VexVmaxpsXmm VexVmaxpsYmm, VL, HL, WL),
            vl!(VexVmaxpdXmm VexVmaxpdYmm, VL, HL, WL),
            op!(VexVmaxssXmmXmmXmmm32, VX, HX, WX),
            op!(VexVmaxsdXmmXmmXmmm64, VX, HX, WX),
        ]),
    ),
    (0x60, p66!(vl!(VexVpunpcklbwXmm VexVpunpcklbwYmm, VL, HL, WL))),
    (0x61, p66!(vl!(VexVpunpcklwdXmm VexVpunpcklwdYmm, VL, HL, WL))),
    (0x62, p66!(vl!(VexVpunpckldqXmm VexVpunpckldqYmm, VL, HL, WL))),
    (0x63, p66!(vl!(VexVpacksswbXmm VexVpacksswbYmm, VL, HL, WL))),
    (0x64, p66!(vl!(VexVpcmpgtbXmm VexVpcmpgtbYmm, VL, HL, WL))),
    (0x65, p66!(vl!(VexVpcmpgtwXmm VexVpcmpgtwYmm, VL, HL, WL))),
    (0x66, p66!(vl!(VexVpcmpgtdXmm VexVpcmpgtdYmm, VL, HL, WL))),
    (0x67, p66!(vl!(VexVpackuswbXmm VexVpackuswbYmm, VL, HL, WL))),
    (0x68, p66!(vl!(VexVpunpckhbwXmm VexVpunpckhbwYmm, VL, HL, WL))),
    (0x69, p66!(vl!(VexVpunpckhwdXmm VexVpunpckhwdYmm, VL, HL, WL))),
    (0x6a, p66!(vl!(VexVpunpckhdqXmm VexVpunpckhdqYmm, VL, HL, WL))),
    (0x6b, p66!(vl!(VexVpackssdwXmm VexVpackssdwYmm, VL, HL, WL))),
    (0x6c, p66!(vl!(VexVpunpcklqdqXmm VexVpunpcklqdqYmm, VL, HL, WL))),
    (0x6d, p66!(vl!(VexVpunpckhqdqXmm VexVpunpckhqdqYmm, VL, HL, WL))),
    (0x6e, p66!(opv!(VexVmovdXmmRm32 VexVmovdXmmRm32 VexVmovqXmmRm64, VX, EY; NONE; L0))),
    (
        0x6f,
        Entry::Mandatory(&[
            INV,
            vl!(VexVmovdqaXmmXmmm128 VexVmovdqaYmmYmmm256, VL, WL),
            vl!(VexVmovdquXmmXmmm128 VexVmovdquYmmYmmm256, VL, WL),
            INV,
        ]),
    ),
    (
        0x70,
        Entry::Mandatory(&[
            INV,
            vl!(VexVpshufdXmmXmmm128Imm8 VexVpshufdYmmYmmm256Imm8, VL, WL, IB),
            vl!(VexVpshufhwXmmXmmm128Imm8 VexVpshufhwYmmYmmm256Imm8, VL, WL, IB),
            vl!(VexVpshuflwXmmXmmm128Imm8 VexVpshuflwYmmYmmm256Imm8, VL, WL, IB),
        ]),
    ),
    (0x71, p66!(reg!(Entry::Group(&GROUP12)))),
    (0x72, p66!(reg!(Entry::Group(&GROUP13)))),
    (0x73, p66!(reg!(Entry::Group(&GROUP14)))),
    (0x74, p66!(vl!(VexVpcmpeqbXmm VexVpcmpeqbYmm, VL, HL, WL))),
    (0x75, p66!(vl!(VexVpcmpeqwXmm VexVpcmpeqwYmm, VL, HL, WL))),
    (0x76, p66!(vl!(VexVpcmpeqdXmm VexVpcmpeqdYmm, VL, HL, WL))),
    (0x77, np!(Entry::L(&[op!(VexVzeroupper), op!(VexVzeroall), INV]))),
    (
        0x7e,
        Entry::Mandatory(&[
            INV,
            opv!(VexVmovdRm32Xmm VexVmovdRm32Xmm VexVmovqRm64Xmm, EY, VX; NONE; L0),
            op!(VexVmovqXmmXmmm64, VX, WX; NONE; L0),
            INV,
        ]),
    ),
    (
        0x7f,
        Entry::Mandatory(&[
            INV,
            vl!(VexVmovdqaXmmm128Xmm VexVmovdqaYmmm256Ymm, WL, VL),
            vl!(VexVmovdquXmmm128Xmm VexVmovdquYmmm256Ymm, WL, VL),
            INV,
        ]),
    ),
    (0x90, KMOV_LOAD),
    (0x91, KMOV_STORE),
    (0x92, KMOV_FROM_GPR),
    (0x93, KMOV_TO_GPR),
    (0x98, kop2!(VexKortestw VexKortestq VexKortestb VexKortestd)),
    (0x99, kop2!(VexKtestw VexKtestq VexKtestb VexKtestd)),
    (0xae, np!(mem!(Entry::Group(&GROUP15)))),
    (
        0xc2,
        Entry::Mandatory(&[
            vl!(VexVcmppsXmmImm8 VexVcmppsYmmImm8, VL, HL, WL, IB),
            vl!(VexVcmppdXmmImm8 VexVcmppdYmmImm8, VL, HL, WL, IB),
            op!(VexVcmpssXmmXmmXmmm32Imm8, VX, HX, WX, IB),
            op!(VexVcmpsdXmmXmmXmmm64Imm8, VX, HX, WX, IB),
        ]),
    ),
    (0xc4, p66!(op!(VexVpinsrwXmmXmmR32m16Imm8, VX, HX, ED, IB; NONE; L0))),
    (0xc5, p66!(reg!(op!(VexVpextrwR32XmmImm8, GD, UX, IB; NONE; L0)))),
    (
        0xc6,
        Entry::Mandatory(&[
            vl!(VexVshufpsXmmImm8 VexVshufpsYmmImm8, VL, HL, WL, IB),
            vl!(VexVshufpdXmmImm8 VexVshufpdYmmImm8, VL, HL, WL, IB),
            INV,
            INV,
        ]),
    ),
    (0xd1, p66!(vl!(VexVpsrlwXmm VexVpsrlwYmm, VL, HL, WX))),
    (0xd2, p66!(vl!(VexVpsrldXmm VexVpsrldYmm, VL, HL, WX))),
    (0xd3, p66!(vl!(VexVpsrlqXmm VexVpsrlqYmm, VL, HL, WX))),
    (0xd4, p66!(vl!(VexVpaddqXmm VexVpaddqYmm, VL, HL, WL))),
    (0xd5, p66!(vl!(VexVpmullwXmm VexVpmullwYmm, VL, HL, WL))),
    (0xd6, p66!(op!(VexVmovqXmmm64Xmm, WX, VX; NONE; L0))),
    (
        0xd7,
        p66!(reg!(vly!(VexVpmovmskbR32Xmm VexVpmovmskbR64Xmm, VexVpmovmskbR32Ymm VexVpmovmskbR64Ymm, GY, UL))),
    ),
    (0xd8, p66!(vl!(VexVpsubusbXmm VexVpsubusbYmm, VL, HL, WL))),
    (0xd9, p66!(vl!(VexVpsubuswXmm VexVpsubuswYmm, VL, HL, WL))),
    (0xda, p66!(vl!(VexVpminubXmm VexVpminubYmm, VL, HL, WL))),
    (0xdb, p66!(vl!(VexVpandXmm VexVpandYmm, VL, HL, WL))),
    (0xdc, p66!(vl!(VexVpaddusbXmm VexVpaddusbYmm, VL, HL, WL))),
    (0xdd, p66!(vl!(VexVpadduswXmm VexVpadduswYmm, VL, HL, WL))),
    (0xde, p66!(vl!(VexVpmaxubXmm VexVpmaxubYmm, VL, HL, WL))),
    (0xdf, p66!(vl!(VexVpandnXmm VexVpandnYmm, VL, HL, WL))),
    (0xe0, p66!(vl!(VexVpavgbXmm VexVpavgbYmm, VL, HL, WL))),
    (0xe1, p66!(vl!(VexVpsrawXmm VexVpsrawYmm, VL, HL, WX))),
    (0xe2, p66!(vl!(VexVpsradXmm VexVpsradYmm, VL, HL, WX))),
    (0xe3, p66!(vl!(VexVpavgwXmm VexVpavgwYmm, VL, HL, WL))),
    (0xe4, p66!(vl!(VexVpmulhuwXmm VexVpmulhuwYmm, VL, HL, WL))),
    (0xe5, p66!(vl!(VexVpmulhwXmm VexVpmulhwYmm, VL, HL, WL))),
    (
        0xe6,
        Entry::Mandatory(&[
            INV,
            vl!(VexVcvttpd2dqXmmXmmm128 VexVcvttpd2dqXmmYmmm256, VX, WL),
            vl!(VexVcvtdq2pdXmmXmmm64 VexVcvtdq2pdYmmXmmm128, VL, WX),
            vl!(VexVcvtpd2dqXmmXmmm128 VexVcvtpd2dqXmmYmmm256, VX, WL),
        ]),
    ),
    (0xe7, p66!(mem!(vl!(VexVmovntdqM128Xmm VexVmovntdqM256Ymm, M, VL)))),
    (0xe8, p66!(vl!(VexVpsubsbXmm VexVpsubsbYmm, VL, HL, WL))),
    (0xe9, p66!(vl!(VexVpsubswXmm VexVpsubswYmm, VL, HL, WL))),
    (0xea, p66!(vl!(VexVpminswXmm VexVpminswYmm, VL, HL, WL))),
    (0xeb, p66!(vl!(VexVporXmm VexVporYmm, VL, HL, WL))),
    (0xec, p66!(vl!(VexVpaddsbXmm VexVpaddsbYmm, VL, HL, WL))),
    (0xed, p66!(vl!(VexVpaddswXmm VexVpaddswYmm, VL, HL, WL))),
    (0xee, p66!(vl!(VexVpmaxswXmm VexVpmaxswYmm, VL, HL, WL))),
    (0xef, p66!(vl!(VexVpxorXmm VexVpxorYmm, VL, HL, WL))),
    (
        0xf0,
        Entry::Mandatory(&[INV, INV, INV, mem!(vl!(VexVlddquXmmM128 VexVlddquYmmM256, VL, M))]),
    ),
    (0xf1, p66!(vl!(VexVpsllwXmm VexVpsllwYmm, VL, HL, WX))),
    (0xf2, p66!(vl!(VexVpslldXmm VexVpslldYmm, VL, HL, WX))),
    (0xf3, p66!(vl!(VexVpsllqXmm VexVpsllqYmm, VL, HL, WX))),
    (0xf4, p66!(vl!(VexVpmuludqXmm VexVpmuludqYmm, VL, HL, WL))),
    (0xf5, p66!(vl!(VexVpmaddwdXmm VexVpmaddwdYmm, VL, HL, WL))),
    (0xf6, p66!(vl!(VexVpsadbwXmm VexVpsadbwYmm, VL, HL, WL))),
    (0xf7, p66!(reg!(op!(VexVmaskmovdquXmmXmm, VX, UX; NONE; L0)))),
    (0xf8, p66!(vl!(VexVpsubbXmm VexVpsubbYmm, VL, HL, WL))),
    (0xf9, p66!(vl!(VexVpsubwXmm VexVpsubwYmm, VL, HL, WL))),
    (0xfa, p66!(vl!(VexVpsubdXmm VexVpsubdYmm, VL, HL, WL))),
    (0xfb, p66!(vl!(VexVpsubqXmm VexVpsubqYmm, VL, HL, WL))),
    (0xfc, p66!(vl!(VexVpaddbXmm VexVpaddbYmm, VL, HL, WL))),
    (0xfd, p66!(vl!(VexVpaddwXmm VexVpaddwYmm, VL, HL, WL))),
    (0xfe, p66!(vl!(VexVpadddXmm VexVpadddYmm, VL, HL, WL))),
];

/// a gather: destination, vector-indexed memory, mask. W selects the element size.
macro_rules! gather {
    ($x:ident $y:ident, $dx:expr, $ix:expr, $mx:expr, $dy:expr, $iy:expr, $my:expr; $req:expr) => {
        Entry::L(&[op!($x, $dx, $ix, $mx; NONE; $req), op!($y, $dy, $iy, $my; NONE; $req), Entry::Invalid])
    };
}

/// the packed single and packed double forms of an FMA instruction, by W.
macro_rules! fma {
    ($ps:ident $ps256:ident $pd:ident $pd256:ident) => {
        p66!(Entry::W(&[
            vl!($ps $ps256, VL, HL, WL; NONE; W0),
            vl!($pd $pd256, VL, HL, WL; NONE; W1),
        ]))
    };
}

/// the scalar forms of an FMA instruction, by W.
macro_rules! fma_scalar {
    ($ss:ident $sd:ident) => {
        p66!(Entry::W(&[op!($ss, VX, HX, WX; NONE; W0), op!($sd, VX, HX, WX; NONE; W1)]))
    };
}

static SLOTS_0F38: &[(u8, Entry)] = &[
    (0x00, p66!(vl!(VexVpshufbXmm VexVpshufbYmm, VL, HL, WL))),
    (0x01, p66!(vl!(VexVphaddwXmm VexVphaddwYmm, VL, HL, WL))),
    (0x02, p66!(vl!(VexVphadddXmm VexVphadddYmm, VL, HL, WL))),
    (0x03, p66!(vl!(VexVphaddswXmm VexVphaddswYmm, VL, HL, WL))),
    (0x04, p66!(vl!(VexVpmaddubswXmm VexVpmaddubswYmm, VL, HL, WL))),
    (0x05, p66!(vl!(VexVphsubwXmm VexVphsubwYmm, VL, HL, WL))),
    (0x06, p66!(vl!(VexVphsubdXmm VexVphsubdYmm, VL, HL, WL))),
    (0x07, p66!(vl!(VexVphsubswXmm VexVphsubswYmm, VL, HL, WL))),
    (0x08, p66!(vl!(VexVpsignbXmm VexVpsignbYmm, VL, HL, WL))),
    (0x09, p66!(vl!(VexVpsignwXmm VexVpsignwYmm, VL, HL, WL))),
    (0x0a, p66!(vl!(VexVpsigndXmm VexVpsigndYmm, VL, HL, WL))),
    (0x0b, p66!(vl!(VexVpmulhrswXmm VexVpmulhrswYmm, VL, HL, WL))),
    (0x0c, p66!(vl!(VexVpermilpsXmm VexVpermilpsYmm, VL, HL, WL; NONE; W0))),
    (0x0d, p66!(vl!(VexVpermilpdXmm VexVpermilpdYmm, VL, HL, WL; NONE; W0))),
    (0x0e, p66!(vl!(VexVtestpsXmm VexVtestpsYmm, VL, WL; NONE; W0))),
    (0x0f, p66!(vl!(VexVtestpdXmm VexVtestpdYmm, VL, WL; NONE; W0))),
    (0x13, p66!(vl!(VexVcvtph2psXmmXmmm64 VexVcvtph2psYmmXmmm128, VL, WX; NONE; W0))),
    (0x16, p66!(op!(VexVpermpsYmmYmmYmmm256, VY, HY, WY; NONE; W0L1))),
    (0x17, p66!(vl!(VexVptestXmm VexVptestYmm, VL, WL))),
    (0x18, p66!(vl!(VexVbroadcastssXmmXmmm32 VexVbroadcastssYmmXmmm32, VL, WX; NONE; W0))),
    (0x19, p66!(op!(VexVbroadcastsdYmmXmmm64, VY, WX; NONE; W0L1))),
    (0x1a, p66!(mem!(op!(VexVbroadcastf128YmmM128, VY, M; NONE; W0L1)))),
    (0x1c, p66!(vl!(VexVpabsbXmm VexVpabsbYmm, VL, WL))),
    (0x1d, p66!(vl!(VexVpabswXmm VexVpabswYmm, VL, WL))),
    (0x1e, p66!(vl!(VexVpabsdXmm VexVpabsdYmm, VL, WL))),
    (0x20, p66!(vl!(VexVpmovsxbwXmmXmmm64 VexVpmovsxbwYmmXmmm128, VL, WX))),
    (0x21, p66!(vl!(VexVpmovsxbdXmmXmmm32 VexVpmovsxbdYmmXmmm64, VL, WX))),
    (0x22, p66!(vl!(VexVpmovsxbqXmmXmmm16 VexVpmovsxbqYmmXmmm32, VL, WX))),
    (0x23, p66!(vl!(VexVpmovsxwdXmmXmmm64 VexVpmovsxwdYmmXmmm128, VL, WX))),
    (0x24, p66!(vl!(VexVpmovsxwqXmmXmmm32 VexVpmovsxwqYmmXmmm64, VL, WX))),
    (0x25, p66!(vl!(VexVpmovsxdqXmmXmmm64 VexVpmovsxdqYmmXmmm128, VL, WX))),
    (0x28, p66!(vl!(VexVpmuldqXmm VexVpmuldqYmm, VL, HL, WL))),
    (0x29, p66!(vl!(VexVpcmpeqqXmm VexVpcmpeqqYmm, VL, HL, WL))),
    (0x2a, p66!(mem!(vl!(VexVmovntdqaXmmM128 VexVmovntdqaYmmM256, VL, M)))),
    (0x2b, p66!(vl!(VexVpackusdwXmm VexVpackusdwYmm, VL, HL, WL))),
    (0x2c, p66!(mem!(vl!(VexVmaskmovpsXmmXmmM128 VexVmaskmovpsYmmYmmM256, VL, HL, M; NONE; W0)))),
    (0x2d, p66!(mem!(vl!(VexVmaskmovpdXmmXmmM128 VexVmaskmovpdYmmYmmM256, VL, HL, M; NONE; W0)))),
    (0x2e, p66!(mem!(vl!(VexVmaskmovpsM128XmmXmm VexVmaskmovpsM256YmmYmm, M, HL, VL; NONE; W0)))),
    (0x2f, p66!(mem!(vl!(VexVmaskmovpdM128XmmXmm VexVmaskmovpdM256YmmYmm, M, HL, VL; NONE; W0)))),
    (0x30, p66!(vl!(VexVpmovzxbwXmmXmmm64 VexVpmovzxbwYmmXmmm128, VL, WX))),
    (0x31, p66!(vl!(VexVpmovzxbdXmmXmmm32 VexVpmovzxbdYmmXmmm64, VL, WX))),
    (0x32, p66!(vl!(VexVpmovzxbqXmmXmmm16 VexVpmovzxbqYmmXmmm32, VL, WX))),
    (0x33, p66!(vl!(VexVpmovzxwdXmmXmmm64 VexVpmovzxwdYmmXmmm128, VL, WX))),
    (0x34, p66!(vl!(VexVpmovzxwqXmmXmmm32 VexVpmovzxwqYmmXmmm64, VL, WX))),
    (0x35, p66!(vl!(VexVpmovzxdqXmmXmmm64 VexVpmovzxdqYmmXmmm128, VL, WX))),
    (0x36, p66!(op!(VexVpermdYmmYmmYmmm256, VY, HY, WY; NONE; W0L1))),
    (0x37, p66!(vl!(VexVpcmpgtqXmm VexVpcmpgtqYmm, VL, HL, WL))),
    (0x38, p66!(vl!(VexVpminsbXmm VexVpminsbYmm, VL, HL, WL))),
    (0x39, p66!(vl!(VexVpminsdXmm VexVpminsdYmm, VL, HL, WL))),
    (0x3a, p66!(vl!(VexVpminuwXmm VexVpminuwYmm, VL, HL, WL))),
    (0x3b, p66!(vl!(VexVpminudXmm VexVpminudYmm, VL, HL, WL))),
    (0x3c, p66!(vl!(VexVpmaxsbXmm VexVpmaxsbYmm, VL, HL, WL))),
    (0x3d, p66!(vl!(VexVpmaxsdXmm VexVpmaxsdYmm, VL, HL, WL))),
    (0x3e, p66!(vl!(VexVpmaxuwXmm VexVpmaxuwYmm, VL, HL, WL))),
    (0x3f, p66!(vl!(VexVpmaxudXmm VexVpmaxudYmm, VL, HL, WL))),
    (0x40, p66!(vl!(VexVpmulldXmm VexVpmulldYmm, VL, HL, WL))),
    (0x41, p66!(op!(VexVphminposuwXmmXmmm128, VX, WX; NONE; L0))),
    (
        0x45,
        p66!(Entry::W(&[
            vl!(VexVpsrlvdXmm VexVpsrlvdYmm, VL, HL, WL; NONE; W0),
            vl!(VexVpsrlvqXmm VexVpsrlvqYmm, VL, HL, WL; NONE; W1),
        ])),
    ),
    (0x46, p66!(vl!(VexVpsravdXmm VexVpsravdYmm, VL, HL, WL; NONE; W0))),
    (
        0x47,
        p66!(Entry::W(&[
            vl!(VexVpsllvdXmm VexVpsllvdYmm, VL, HL, WL; NONE; W0),
            vl!(VexVpsllvqXmm VexVpsllvqYmm, VL, HL, WL; NONE; W1),
        ])),
    ),
    (0x58, p66!(vl!(VexVpbroadcastdXmmXmmm32 VexVpbroadcastdYmmXmmm32, VL, WX; NONE; W0))),
    (0x59, p66!(vl!(VexVpbroadcastqXmmXmmm64 VexVpbroadcastqYmmXmmm64, VL, WX; NONE; W0))),
    (0x5a, p66!(mem!(op!(VexVbroadcasti128YmmM128, VY, M; NONE; W0L1)))),
    (0x78, p66!(vl!(VexVpbroadcastbXmmXmmm8 VexVpbroadcastbYmmXmmm8, VL, WX; NONE; W0))),
    (0x79, p66!(vl!(VexVpbroadcastwXmmXmmm16 VexVpbroadcastwYmmXmmm16, VL, WX; NONE; W0))),
    (
        0x8c,
        p66!(mem!(Entry::W(&[
            vl!(VexVpmaskmovdXmmXmmM128 VexVpmaskmovdYmmYmmM256, VL, HL, M; NONE; W0),
            vl!(VexVpmaskmovqXmmXmmM128 VexVpmaskmovqYmmYmmM256, VL, HL, M; NONE; W1),
        ]))),
    ),
    (
        0x8e,
        p66!(mem!(Entry::W(&[
            vl!(VexVpmaskmovdM128XmmXmm VexVpmaskmovdM256YmmYmm, M, HL, VL; NONE; W0),
            vl!(VexVpmaskmovqM128XmmXmm VexVpmaskmovqM256YmmYmm, M, HL, VL; NONE; W1),
        ]))),
    ),
    (
        0x90,
        p66!(mem!(Entry::W(&[
            gather!(VexVpgatherddXmm VexVpgatherddYmm, VX, VSIBX, HX, VY, VSIBY, HY; W0),
            gather!(VexVpgatherdqXmm VexVpgatherdqYmm, VX, VSIBX, HX, VY, VSIBX, HY; W1),
        ]))),
    ),
    (
        0x91,
        p66!(mem!(Entry::W(&[
            gather!(VexVpgatherqdXmm VexVpgatherqdYmm, VX, VSIBX, HX, VX, VSIBY, HX; W0),
            gather!(VexVpgatherqqXmm VexVpgatherqqYmm, VX, VSIBX, HX, VY, VSIBY, HY; W1),
        ]))),
    ),
    (
        0x92,
        p66!(mem!(Entry::W(&[
            gather!(VexVgatherdpsXmm VexVgatherdpsYmm, VX, VSIBX, HX, VY, VSIBY, HY; W0),
            gather!(VexVgatherdpdXmm VexVgatherdpdYmm, VX, VSIBX, HX, VY, VSIBX, HY; W1),
        ]))),
    ),
    (
        0x93,
        p66!(mem!(Entry::W(&[
            gather!(VexVgatherqpsXmm VexVgatherqpsYmm, VX, VSIBX, HX, VX, VSIBY, HX; W0),
            gather!(VexVgatherqpdXmm VexVgatherqpdYmm, VX, VSIBX, HX, VY, VSIBY, HY; W1),
        ]))),
    ),
    (0x98, fma!(VexVfmadd132psXmm VexVfmadd132psYmm VexVfmadd132pdXmm VexVfmadd132pdYmm)),
    (0x99, fma_scalar!(VexVfmadd132ssXmm VexVfmadd132sdXmm)),
    (0x9a, fma!(VexVfmsub132psXmm VexVfmsub132psYmm VexVfmsub132pdXmm VexVfmsub132pdYmm)),
    (0x9b, fma_scalar!(VexVfmsub132ssXmm VexVfmsub132sdXmm)),
    (0x9c, fma!(VexVfnmadd132psXmm VexVfnmadd132psYmm VexVfnmadd132pdXmm VexVfnmadd132pdYmm)),
    (0x9d, fma_scalar!(VexVfnmadd132ssXmm VexVfnmadd132sdXmm)),
    (0xa8, fma!(VexVfmadd213psXmm VexVfmadd213psYmm VexVfmadd213pdXmm VexVfmadd213pdYmm)),
    (0xa9, fma_scalar!(VexVfmadd213ssXmm VexVfmadd213sdXmm)),
    (0xaa, fma!(VexVfmsub213psXmm VexVfmsub213psYmm VexVfmsub213pdXmm VexVfmsub213pdYmm)),
    (0xab, fma_scalar!(VexVfmsub213ssXmm VexVfmsub213sdXmm)),
    (0xac, fma!(VexVfnmadd213psXmm VexVfnmadd213psYmm VexVfnmadd213pdXmm VexVfnmadd213pdYmm)),
    (0xad, fma_scalar!(VexVfnmadd213ssXmm VexVfnmadd213sdXmm)),
    (0xb8, fma!(VexVfmadd231psXmm VexVfmadd231psYmm VexVfmadd231pdXmm VexVfmadd231pdYmm)),
    (0xb9, fma_scalar!(VexVfmadd231ssXmm VexVfmadd231sdXmm)),
    (0xba, fma!(VexVfmsub231psXmm VexVfmsub231psYmm VexVfmsub231pdXmm VexVfmsub231pdYmm)),
    (0xbb, fma_scalar!(VexVfmsub231ssXmm VexVfmsub231sdXmm)),
    (0xbc, fma!(VexVfnmadd231psXmm VexVfnmadd231psYmm VexVfnmadd231pdXmm VexVfnmadd231pdYmm)),
    (0xbd, fma_scalar!(VexVfnmadd231ssXmm VexVfnmadd231sdXmm)),
    (0xdb, p66!(op!(VexVaesimcXmmXmmm128, VX, WX; NONE; L0))),
    (0xdc, p66!(vl!(VexVaesencXmm VexVaesencYmm, VL, HL, WL))),
    (0xdd, p66!(vl!(VexVaesenclastXmm VexVaesenclastYmm, VL, HL, WL))),
    (0xde, p66!(vl!(VexVaesdecXmm VexVaesdecYmm, VL, HL, WL))),
    (0xdf, p66!(vl!(VexVaesdeclastXmm VexVaesdeclastYmm, VL, HL, WL))),
    (0xf2, np!(opv!(VexAndnR32R32Rm32 VexAndnR32R32Rm32 VexAndnR64R64Rm64, GY, BY, EY; NONE; L0))),
    (0xf3, np!(Entry::Group(&BMI_GROUP17))),
    (
        0xf5,
        Entry::Mandatory(&[
            opv!(VexBzhiR32Rm32R32 VexBzhiR32Rm32R32 VexBzhiR64Rm64R64, GY, EY, BY; NONE; L0),
            INV,
            opv!(VexPextR32R32Rm32 VexPextR32R32Rm32 VexPextR64R64Rm64, GY, BY, EY; NONE; L0),
            opv!(VexPdepR32R32Rm32 VexPdepR32R32Rm32 VexPdepR64R64Rm64, GY, BY, EY; NONE; L0),
        ]),
    ),
    (
        0xf6,
        Entry::Mandatory(&[
            INV,
            INV,
            INV,
            opv!(VexMulxR32R32Rm32 VexMulxR32R32Rm32 VexMulxR64R64Rm64, GY, BY, EY; NONE; L0),
        ]),
    ),
    (
        0xf7,
        Entry::Mandatory(&[
            opv!(VexBextrR32Rm32R32 VexBextrR32Rm32R32 VexBextrR64Rm64R64, GY, EY, BY; NONE; L0),
            opv!(VexShlxR32Rm32R32 VexShlxR32Rm32R32 VexShlxR64Rm64R64, GY, EY, BY; NONE; L0),
            opv!(VexSarxR32Rm32R32 VexSarxR32Rm32R32 VexSarxR64Rm64R64, GY, EY, BY; NONE; L0),
            opv!(VexShrxR32Rm32R32 VexShrxR32Rm32R32 VexShrxR64Rm64R64, GY, EY, BY; NONE; L0),
        ]),
    ),
];

static SLOTS_0F3A: &[(u8, Entry)] = &[
    (0x00, p66!(op!(VexVpermqYmmYmmm256Imm8, VY, WY, IB; NONE; W1L1))),
    (0x01, p66!(op!(VexVpermpdYmmYmmm256Imm8, VY, WY, IB; NONE; W1L1))),
    (0x02, p66!(vl!(VexVpblenddXmmImm8 VexVpblenddYmmImm8, VL, HL, WL, IB; NONE; W0))),
    (0x04, p66!(vl!(VexVpermilpsXmmImm8 VexVpermilpsYmmImm8, VL, WL, IB; NONE; W0))),
    (0x05, p66!(vl!(VexVpermilpdXmmImm8 VexVpermilpdYmmImm8, VL, WL, IB; NONE; W0))),
    (0x06, p66!(op!(VexVperm2f128YmmYmmYmmm256Imm8, VY, HY, WY, IB; NONE; W0L1))),
    (0x08, p66!(vl!(VexVroundpsXmmImm8 VexVroundpsYmmImm8, VL, WL, IB))),
    (0x09, p66!(vl!(VexVroundpdXmmImm8 VexVroundpdYmmImm8, VL, WL, IB))),
    (0x0a, p66!(op!(VexVroundssXmmXmmXmmm32Imm8, VX, HX, WX, IB))),
    (0x0b, p66!(op!(VexVroundsdXmmXmmXmmm64Imm8, VX, HX, WX, IB))),
    (0x0c, p66!(vl!(VexVblendpsXmmImm8 VexVblendpsYmmImm8, VL, HL, WL, IB))),
    (0x0d, p66!(vl!(VexVblendpdXmmImm8 VexVblendpdYmmImm8, VL, HL, WL, IB))),
    (0x0e, p66!(vl!(VexVpblendwXmmImm8 VexVpblendwYmmImm8, VL, HL, WL, IB))),
    (0x0f, p66!(vl!(VexVpalignrXmmImm8 VexVpalignrYmmImm8, VL, HL, WL, IB))),
    (0x14, p66!(opv!(VexVpextrbR32m8XmmImm8 VexVpextrbR32m8XmmImm8 VexVpextrbR64m8XmmImm8, EY, VX, IB; NONE; L0))),
    (0x15, p66!(opv!(VexVpextrwR32m16XmmImm8 VexVpextrwR32m16XmmImm8 VexVpextrwR64m16XmmImm8, EY, VX, IB; NONE; L0))),
    (0x16, p66!(opv!(VexVpextrdRm32XmmImm8 VexVpextrdRm32XmmImm8 VexVpextrqRm64XmmImm8, EY, VX, IB; NONE; L0))),
    (0x17, p66!(op!(VexVextractpsRm32XmmImm8, ED, VX, IB; NONE; L0))),
    (0x18, p66!(op!(VexVinsertf128YmmYmmXmmm128Imm8, VY, HY, WX, IB; NONE; W0L1))),
    (0x19, p66!(op!(VexVextractf128Xmmm128YmmImm8, WX, VY, IB; NONE; W0L1))),
    (0x1d, p66!(vl!(VexVcvtps2phXmmm64XmmImm8 VexVcvtps2phXmmm128YmmImm8, WX, VL, IB; NONE; W0))),
    (
        0x20,
        p66!(opv!(VexVpinsrbXmmXmmR32m8Imm8 VexVpinsrbXmmXmmR32m8Imm8 VexVpinsrbXmmXmmR64m8Imm8, VX, HX, EY, IB; NONE; L0)),
    ),
    (0x21, p66!(op!(VexVinsertpsXmmXmmXmmm32Imm8, VX, HX, WX, IB; NONE; L0))),
    (
        0x22,
        p66!(opv!(VexVpinsrdXmmXmmRm32Imm8 VexVpinsrdXmmXmmRm32Imm8 VexVpinsrqXmmXmmRm64Imm8, VX, HX, EY, IB; NONE; L0)),
    ),
    (
        0x30,
        p66!(reg!(Entry::W(&[
            op!(VexKshiftrbKrKrImm8, KR, KN, IB; NONE; L0),
            op!(VexKshiftrwKrKrImm8, KR, KN, IB; NONE; L0),
        ]))),
    ),
    (
        0x31,
        p66!(reg!(Entry::W(&[
            op!(VexKshiftrdKrKrImm8, KR, KN, IB; NONE; L0),
            op!(VexKshiftrqKrKrImm8, KR, KN, IB; NONE; L0),
        ]))),
    ),
    (
        0x32,
        p66!(reg!(Entry::W(&[
            op!(VexKshiftlbKrKrImm8, KR, KN, IB; NONE; L0),
            op!(VexKshiftlwKrKrImm8, KR, KN, IB; NONE; L0),
        ]))),
    ),
    (
        0x33,
        p66!(reg!(Entry::W(&[
            op!(VexKshiftldKrKrImm8, KR, KN, IB; NONE; L0),
            op!(VexKshiftlqKrKrImm8, KR, KN, IB; NONE; L0),
        ]))),
    ),
    (0x38, p66!(op!(VexVinserti128YmmYmmXmmm128Imm8, VY, HY, WX, IB; NONE; W0L1))),
    (0x39, p66!(op!(VexVextracti128Xmmm128YmmImm8, WX, VY, IB; NONE; W0L1))),
    (0x40, p66!(vl!(VexVdppsXmmImm8 VexVdppsYmmImm8, VL, HL, WL, IB))),
    (0x41, p66!(op!(VexVdppdXmmXmmXmmm128Imm8, VX, HX, WX, IB; NONE; L0))),
    (0x42, p66!(vl!(VexVmpsadbwXmmImm8 VexVmpsadbwYmmImm8, VL, HL, WL, IB))),
    (0x44, p66!(vl!(VexVpclmulqdqXmmImm8 VexVpclmulqdqYmmImm8, VL, HL, WL, IB))),
    (0x46, p66!(op!(VexVperm2i128YmmYmmYmmm256Imm8, VY, HY, WY, IB; NONE; W0L1))),
    (0x4a, p66!(vl!(VexVblendvpsXmm VexVblendvpsYmm, VL, HL, WL, LL; NONE; W0))),
    (0x4b, p66!(vl!(VexVblendvpdXmm VexVblendvpdYmm, VL, HL, WL, LL; NONE; W0))),
    (0x4c, p66!(vl!(VexVpblendvbXmm VexVpblendvbYmm, VL, HL, WL, LL; NONE; W0))),
    (0x60, p66!(op!(VexVpcmpestrmXmmXmmm128Imm8, VX, WX, IB; NONE; L0))),
    (0x61, p66!(op!(VexVpcmpestriXmmXmmm128Imm8, VX, WX, IB; NONE; L0))),
    (0x62, p66!(op!(VexVpcmpistrmXmmXmmm128Imm8, VX, WX, IB; NONE; L0))),
    (0x63, p66!(op!(VexVpcmpistriXmmXmmm128Imm8, VX, WX, IB; NONE; L0))),
    (0xdf, p66!(op!(VexVaeskeygenassistXmmXmmm128Imm8, VX, WX, IB; NONE; L0))),
    (
        0xf0,
        Entry::Mandatory(&[
            INV,
            INV,
            INV,
            opv!(VexRorxR32Rm32Imm8 VexRorxR32Rm32Imm8 VexRorxR64Rm64Imm8, GY, EY, IB; NONE; L0),
        ]),
    ),
];
