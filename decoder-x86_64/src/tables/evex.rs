//! EVEX maps 1, 2 and 3.
//!
//! vector length selects the 128, 256 or 512-bit `Code`. templates with embedded rounding or
//! `{sae}` sit behind `LenEr`, so a register form with `b` set lands on the 512-bit template
//! whatever `L'L` says. `L'L` is the rounding mode there.

use once_cell::sync::Lazy;

use super::*;

pub(crate) static EVEX_0F: Lazy<Table> = Lazy::new(|| build("evex 0f", SLOTS_0F));
pub(crate) static EVEX_0F38: Lazy<Table> = Lazy::new(|| build("evex 0f38", SLOTS_0F38));
pub(crate) static EVEX_0F3A: Lazy<Table> = Lazy::new(|| build("evex 0f3a", SLOTS_0F3A));

const INV: Entry = Entry::Invalid;

/// the 128, 256 and 512-bit forms of an instruction.
macro_rules! evl {
    ($x:ident $y:ident $z:ident / $tuple:ident $(, $spec:expr)*; $flags:expr; $req:expr) => {
        Entry::L(&[
            ev!($x / $tuple $(, $spec)*; $flags; $req),
            ev!($y / $tuple $(, $spec)*; $flags; $req),
            ev!($z / $tuple $(, $spec)*; $flags; $req),
        ])
    };
}

/// as `evl!`, with rounding or `{sae}` (`$zflags`) on the 512-bit form only.
macro_rules! evl_er {
    ($x:ident $y:ident $z:ident / $tuple:ident $(, $spec:expr)*; $flags:expr, $zflags:expr; $req:expr) => {
        Entry::LenEr(&[
            ev!($x / $tuple $(, $spec)*; $flags; $req),
            ev!($y / $tuple $(, $spec)*; $flags; $req),
            ev!($z / $tuple $(, $spec)*; $zflags; $req),
        ])
    };
}

/// packed single (W0), packed double (W1), scalar single (F3, W0) and scalar double (F2, W1)
/// forms of an arithmetic instruction.
macro_rules! arith {
    (
        $psx:ident $psy:ident $psz:ident,
        $pdx:ident $pdy:ident $pdz:ident,
        $ss:ident $sd:ident;
        $zflags:expr, $sflags:expr
    ) => {
        Entry::Mandatory(&[
            evl_er!($psx $psy $psz / Full, VL, HL, WL; KZB, $zflags; W0),
            evl_er!($pdx $pdy $pdz / Full, VL, HL, WL; KZB, $zflags; W1),
            ev!($ss / Tuple1Scalar, VX, HX, WX; $sflags; W0),
            ev!($sd / Tuple1Scalar, VX, HX, WX; $sflags; W1),
        ])
    };
}

/// a dword (W0) / qword (W1) pair of integer instructions.
macro_rules! dq {
    ($dx:ident $dy:ident $dz:ident, $qx:ident $qy:ident $qz:ident $(, $spec:expr)*; $flags:expr) => {
        p66!(Entry::W(&[
            evl!($dx $dy $dz / Full $(, $spec)*; $flags; W0),
            evl!($qx $qy $qz / Full $(, $spec)*; $flags; W1),
        ]))
    };
}

// (128, 256, 512) forms for shift-by-immediate groups, destination in vvvv.
static GROUP72: [Entry; 8] = [
    Entry::W(&[
        evl!(EvexVprordXmmImm8 EvexVprordYmmImm8 EvexVprordZmmImm8 / Full, HL, WL, IB; KZB; W0),
        evl!(EvexVprorqXmmImm8 EvexVprorqYmmImm8 EvexVprorqZmmImm8 / Full, HL, WL, IB; KZB; W1),
    ]),
    Entry::W(&[
        evl!(EvexVproldXmmImm8 EvexVproldYmmImm8 EvexVproldZmmImm8 / Full, HL, WL, IB; KZB; W0),
        evl!(EvexVprolqXmmImm8 EvexVprolqYmmImm8 EvexVprolqZmmImm8 / Full, HL, WL, IB; KZB; W1),
    ]),
    evl!(EvexVpsrldXmmImm8 EvexVpsrldYmmImm8 EvexVpsrldZmmImm8 / Full, HL, WL, IB; KZB; W0),
    INV,
    Entry::W(&[
        evl!(EvexVpsradXmmImm8 EvexVpsradYmmImm8 EvexVpsradZmmImm8 / Full, HL, WL, IB; KZB; W0),
        evl!(EvexVpsraqXmmImm8 EvexVpsraqYmmImm8 EvexVpsraqZmmImm8 / Full, HL, WL, IB; KZB; W1),
    ]),
    INV,
    evl!(EvexVpslldXmmImm8 EvexVpslldYmmImm8 EvexVpslldZmmImm8 / Full, HL, WL, IB; KZB; W0),
    INV,
];

static SLOTS_0F: &[(u8, Entry)] = &[
    (
        0x10,
        Entry::Mandatory(&[
            evl!(EvexVmovupsXmmXmmm128 EvexVmovupsYmmYmmm256 EvexVmovupsZmmZmmm512 / FullMem, VL, WL; KZ; W0),
            evl!(EvexVmovupdXmmXmmm128 EvexVmovupdYmmYmmm256 EvexVmovupdZmmZmmm512 / FullMem, VL, WL; KZ; W1),
            Entry::RegMem(
                &ev!(EvexVmovssXmmXmmXmm / None, VX, HX, UX; KZ; W0),
                &ev!(EvexVmovssXmmM32 / Tuple1Scalar, VX, M; KZ; W0),
            ),
            Entry::RegMem(
                &ev!(EvexVmovsdXmmXmmXmm / None, VX, HX, UX; KZ; W1),
                &ev!(EvexVmovsdXmmM64 / Tuple1Scalar, VX, M; KZ; W1),
            ),
        ]),
    ),
    (
        0x11,
        Entry::Mandatory(&[
            evl!(EvexVmovupsXmmm128Xmm EvexVmovupsYmmm256Ymm EvexVmovupsZmmm512Zmm / FullMem, WL, VL; KZ; W0),
            evl!(EvexVmovupdXmmm128Xmm EvexVmovupdYmmm256Ymm EvexVmovupdZmmm512Zmm / FullMem, WL, VL; KZ; W1),
            Entry::RegMem(
                &ev!(EvexVmovssXmmXmmXmmAlt / None, UX, HX, VX; KZ; W0),
                &ev!(EvexVmovssM32Xmm / Tuple1Scalar, M, VX; K; W0),
            ),
            Entry::RegMem(
                &ev!(EvexVmovsdXmmXmmXmmAlt / None, UX, HX, VX; KZ; W1),
                &ev!(EvexVmovsdM64Xmm / Tuple1Scalar, M, VX; K; W1),
            ),
        ]),
    ),
    (
        0x14,
        Entry::Mandatory(&[
            evl!(EvexVunpcklpsXmm EvexVunpcklpsYmm EvexVunpcklpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVunpcklpdXmm EvexVunpcklpdYmm EvexVunpcklpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x15,
        Entry::Mandatory(&[
            evl!(EvexVunpckhpsXmm EvexVunpckhpsYmm EvexVunpckhpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVunpckhpdXmm EvexVunpckhpdYmm EvexVunpckhpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x28,
        Entry::Mandatory(&[
            evl!(EvexVmovapsXmmXmmm128 EvexVmovapsYmmYmmm256 EvexVmovapsZmmZmmm512 / FullMem, VL, WL; KZ; W0),
            evl!(EvexVmovapdXmmXmmm128 EvexVmovapdYmmYmmm256 EvexVmovapdZmmZmmm512 / FullMem, VL, WL; KZ; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x29,
        Entry::Mandatory(&[
            evl!(EvexVmovapsXmmm128Xmm EvexVmovapsYmmm256Ymm EvexVmovapsZmmm512Zmm / FullMem, WL, VL; KZ; W0),
            evl!(EvexVmovapdXmmm128Xmm EvexVmovapdYmmm256Ymm EvexVmovapdZmmm512Zmm / FullMem, WL, VL; KZ; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x51,
        Entry::Mandatory(&[
            evl_er!(EvexVsqrtpsXmm EvexVsqrtpsYmm EvexVsqrtpsZmm / Full, VL, WL; KZB, KZB_ER; W0),
            evl_er!(EvexVsqrtpdXmm EvexVsqrtpdYmm EvexVsqrtpdZmm / Full, VL, WL; KZB, KZB_ER; W1),
            ev!(EvexVsqrtssXmmXmmXmmm32 / Tuple1Scalar, VX, HX, WX; KZ_ER; W0),
            ev!(EvexVsqrtsdXmmXmmXmmm64 / Tuple1Scalar, VX, HX, WX; KZ_ER; W1),
        ]),
    ),
    (
        0x54,
        Entry::Mandatory(&[
            evl!(EvexVandpsXmm EvexVandpsYmm EvexVandpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVandpdXmm EvexVandpdYmm EvexVandpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x55,
        Entry::Mandatory(&[
            evl!(EvexVandnpsXmm EvexVandnpsYmm EvexVandnpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVandnpdXmm EvexVandnpdYmm EvexVandnpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x56,
        Entry::Mandatory(&[
            evl!(EvexVorpsXmm EvexVorpsYmm EvexVorpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVorpdXmm EvexVorpdYmm EvexVorpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x57,
        Entry::Mandatory(&[
            evl!(EvexVxorpsXmm EvexVxorpsYmm EvexVxorpsZmm / Full, VL, HL, WL; KZB; W0),
            evl!(EvexVxorpdXmm EvexVxorpdYmm EvexVxorpdZmm / Full, VL, HL, WL; KZB; W1),
            INV,
            INV,
        ]),
    ),
    (
        0x58,
        arith!(
            EvexVaddpsXmm EvexVaddpsYmm EvexVaddpsZmm,
            EvexVaddpdXmm EvexVaddpdYmm EvexVaddpdZmm,
            EvexVaddssXmmXmmXmmm32 EvexVaddsdXmmXmmXmmm64;
            KZB_ER, KZ_ER
        ),
    ),
    (
        0x59,
        arith!(
            EvexVmulpsXmm EvexVmulpsYmm EvexVmulpsZmm,
            EvexVmulpdXmm EvexVmulpdYmm EvexVmulpdZmm,
            EvexVmulssXmmXmmXmmm32 EvexVmulsdXmmXmmXmmm64;
            KZB_ER, KZ_ER
        ),
    ),
    (
        0x5b,
        Entry::Mandatory(&[
            evl_er!(EvexVcvtdq2psXmm EvexVcvtdq2psYmm EvexVcvtdq2psZmm / Full, VL, WL; KZB, KZB_ER; W0),
            evl_er!(EvexVcvtps2dqXmm EvexVcvtps2dqYmm EvexVcvtps2dqZmm / Full, VL, WL; KZB, KZB_ER; W0),
            evl_er!(EvexVcvttps2dqXmm EvexVcvttps2dqYmm EvexVcvttps2dqZmm / Full, VL, WL; KZB, KZB_SAE; W0),
            INV,
        ]),
    ),
    (
        0x5c,
        arith!(
            EvexVsubpsXmm EvexVsubpsYmm EvexVsubpsZmm,
            EvexVsubpdXmm EvexVsubpdYmm EvexVsubpdZmm,
            EvexVsubssXmmXmmXmmm32 EvexVsubsdXmmXmmXmmm64;
            KZB_ER, KZ_ER
        ),
    ),
    (
        0x5d,
        arith!(
            EvexVminpsXmm EvexVminpsYmm EvexVminpsZmm,
            EvexVminpdXmm EvexVminpdYmm EvexVminpdZmm,
            EvexVminssXmmXmmXmmm32 EvexVminsdXmmXmmXmmm64;
            KZB_SAE, KZ_SAE
        ),
    ),
    (
        0x5e,
        arith!(
            EvexVdivpsXmm EvexVdivpsYmm EvexVdivpsZmm,
            EvexVdivpdXmm EvexVdivpdYmm EvexVdivpdZmm,
            EvexVdivssXmmXmmXmmm32 EvexVdivsdXmmXmmXmmm64;
            KZB_ER, KZ_ER
        ),
    ),
    (
        0x5f,
        arith!(
            EvexVmaxpsXmm EvexVmaxpsYmm EvexVmaxpsZmm,
            EvexVmaxpdXmm EvexVmaxpdYmm EvexVmaxpdZmm,
            EvexVmaxssXmmXmmXmmm32 EvexVmaxsdXmmXmmXmmm64;
            KZB_SAE, KZ_SAE
        ),
    ),
    (
        0x6e,
        p66!(evv!(EvexVmovdXmmRm32 EvexVmovdXmmRm32 EvexVmovqXmmRm64 / Tuple1Scalar, VX, EY; NONE; L0)),
    ),
    (
        0x6f,
        Entry::Mandatory(&[
            INV,
            Entry::W(&[
                evl!(EvexVmovdqa32Xmm EvexVmovdqa32Ymm EvexVmovdqa32Zmm / FullMem, VL, WL; KZ; W0),
                evl!(EvexVmovdqa64Xmm EvexVmovdqa64Ymm EvexVmovdqa64Zmm / FullMem, VL, WL; KZ; W1),
            ]),
            Entry::W(&[
                evl!(EvexVmovdqu32Xmm EvexVmovdqu32Ymm EvexVmovdqu32Zmm / FullMem, VL, WL; KZ; W0),
                evl!(EvexVmovdqu64Xmm EvexVmovdqu64Ymm EvexVmovdqu64Zmm / FullMem, VL, WL; KZ; W1),
            ]),
            Entry::W(&[
                evl!(EvexVmovdqu8Xmm EvexVmovdqu8Ymm EvexVmovdqu8Zmm / FullMem, VL, WL; KZ; W0),
                evl!(EvexVmovdqu16Xmm EvexVmovdqu16Ymm EvexVmovdqu16Zmm / FullMem, VL, WL; KZ; W1),
            ]),
        ]),
    ),
    (0x72, p66!(Entry::Group(&GROUP72))),
    (
        0x74,
        p66!(evl!(EvexVpcmpeqbKrXmm EvexVpcmpeqbKrYmm EvexVpcmpeqbKrZmm / FullMem, KR, HL, WL; K; ANY)),
    ),
    (
        0x75,
        p66!(evl!(EvexVpcmpeqwKrXmm EvexVpcmpeqwKrYmm EvexVpcmpeqwKrZmm / FullMem, KR, HL, WL; K; ANY)),
    ),
    (
        0x76,
        p66!(evl!(EvexVpcmpeqdKrXmm EvexVpcmpeqdKrYmm EvexVpcmpeqdKrZmm / Full, KR, HL, WL; KB; W0)),
    ),
    (
        0x7e,
        Entry::Mandatory(&[
            INV,
            evv!(EvexVmovdRm32Xmm EvexVmovdRm32Xmm EvexVmovqRm64Xmm / Tuple1Scalar, EY, VX; NONE; L0),
            ev!(EvexVmovqXmmXmmm64 / Tuple1Scalar, VX, WX; NONE; W1L0),
            INV,
        ]),
    ),
    (
        0x7f,
        Entry::Mandatory(&[
            INV,
            Entry::W(&[
                evl!(EvexVmovdqa32Xmmm128Xmm EvexVmovdqa32Ymmm256Ymm EvexVmovdqa32Zmmm512Zmm / FullMem, WL, VL; KZ; W0),
                evl!(EvexVmovdqa64Xmmm128Xmm EvexVmovdqa64Ymmm256Ymm EvexVmovdqa64Zmmm512Zmm / FullMem, WL, VL; KZ; W1),
            ]),
            Entry::W(&[
                evl!(EvexVmovdqu32Xmmm128Xmm EvexVmovdqu32Ymmm256Ymm EvexVmovdqu32Zmmm512Zmm / FullMem, WL, VL; KZ; W0),
                evl!(EvexVmovdqu64Xmmm128Xmm EvexVmovdqu64Ymmm256Ymm EvexVmovdqu64Zmmm512Zmm / FullMem, WL, VL; KZ; W1),
            ]),
            Entry::W(&[
                evl!(EvexVmovdqu8Xmmm128Xmm EvexVmovdqu8Ymmm256Ymm EvexVmovdqu8Zmmm512Zmm / FullMem, WL, VL; KZ; W0),
                evl!(EvexVmovdqu16Xmmm128Xmm EvexVmovdqu16Ymmm256Ymm EvexVmovdqu16Zmmm512Zmm / FullMem, WL, VL; KZ; W1),
            ]),
        ]),
    ),
    (
        0xc2,
        Entry::Mandatory(&[
            evl_er!(EvexVcmppsKrXmmImm8 EvexVcmppsKrYmmImm8 EvexVcmppsKrZmmImm8 / Full, KR, HL, WL, IB; KB, KB_SAE; W0),
            evl_er!(EvexVcmppdKrXmmImm8 EvexVcmppdKrYmmImm8 EvexVcmppdKrZmmImm8 / Full, KR, HL, WL, IB; KB, KB_SAE; W1),
            ev!(EvexVcmpssKrXmmXmmm32Imm8 / Tuple1Scalar, KR, HX, WX, IB; K_SAE; W0),
            ev!(EvexVcmpsdKrXmmXmmm64Imm8 / Tuple1Scalar, KR, HX, WX, IB; K_SAE; W1),
        ]),
    ),
    (0xd4, p66!(evl!(EvexVpaddqXmm EvexVpaddqYmm EvexVpaddqZmm / Full, VL, HL, WL; KZB; W1))),
    (
        0xdb,
        dq!(EvexVpanddXmm EvexVpanddYmm EvexVpanddZmm, EvexVpandqXmm EvexVpandqYmm EvexVpandqZmm, VL, HL, WL; KZB),
    ),
    (
        0xdf,
        dq!(EvexVpandndXmm EvexVpandndYmm EvexVpandndZmm, EvexVpandnqXmm EvexVpandnqYmm EvexVpandnqZmm, VL, HL, WL; KZB),
    ),
    (
        0xe6,
        Entry::Mandatory(&[
            INV,
            INV,
            Entry::W(&[
                evl!(EvexVcvtdq2pdXmmXmmm64 EvexVcvtdq2pdYmmXmmm128 EvexVcvtdq2pdZmmYmmm256 / Half, VL, WX; KZB; W0),
                INV,
            ]),
            INV,
        ]),
    ),
    (
        0xeb,
        dq!(EvexVpordXmm EvexVpordYmm EvexVpordZmm, EvexVporqXmm EvexVporqYmm EvexVporqZmm, VL, HL, WL; KZB),
    ),
    (
        0xef,
        dq!(EvexVpxordXmm EvexVpxordYmm EvexVpxordZmm, EvexVpxorqXmm EvexVpxorqYmm EvexVpxorqZmm, VL, HL, WL; KZB),
    ),
    (0xf4, p66!(evl!(EvexVpmuludqXmm EvexVpmuludqYmm EvexVpmuludqZmm / Full, VL, HL, WL; KZB; W1))),
    (0xfa, p66!(evl!(EvexVpsubdXmm EvexVpsubdYmm EvexVpsubdZmm / Full, VL, HL, WL; KZB; W0))),
    (0xfb, p66!(evl!(EvexVpsubqXmm EvexVpsubqYmm EvexVpsubqZmm / Full, VL, HL, WL; KZB; W1))),
    (0xfc, p66!(evl!(EvexVpaddbXmm EvexVpaddbYmm EvexVpaddbZmm / FullMem, VL, HL, WL; KZ; ANY))),
    (0xfd, p66!(evl!(EvexVpaddwXmm EvexVpaddwYmm EvexVpaddwZmm / FullMem, VL, HL, WL; KZ; ANY))),
    (0xfe, p66!(evl!(EvexVpadddXmm EvexVpadddYmm EvexVpadddZmm / Full, VL, HL, WL; KZB; W0))),
];

/// an FMA instruction: packed forms by W, with rounding on the 512-bit form.
macro_rules! fma {
    ($psx:ident $psy:ident $psz:ident, $pdx:ident $pdy:ident $pdz:ident) => {
        p66!(Entry::W(&[
            evl_er!($psx $psy $psz / Full, VL, HL, WL; KZB, KZB_ER; W0),
            evl_er!($pdx $pdy $pdz / Full, VL, HL, WL; KZB, KZB_ER; W1),
        ]))
    };
}

macro_rules! fma_scalar {
    ($ss:ident $sd:ident) => {
        p66!(Entry::W(&[
            ev!($ss / Tuple1Scalar, VX, HX, WX; KZ_ER; W0),
            ev!($sd / Tuple1Scalar, VX, HX, WX; KZ_ER; W1),
        ]))
    };
}

static SLOTS_0F38: &[(u8, Entry)] = &[
    (
        0x18,
        p66!(evl!(EvexVbroadcastssXmmXmmm32 EvexVbroadcastssYmmXmmm32 EvexVbroadcastssZmmXmmm32 / Tuple1Scalar, VL, WX; KZ; W0)),
    ),
    (
        0x19,
        p66!(Entry::L(&[
            INV,
            ev!(EvexVbroadcastsdYmmXmmm64 / Tuple1Scalar, VY, WX; KZ; W1),
            ev!(EvexVbroadcastsdZmmXmmm64 / Tuple1Scalar, VZ, WX; KZ; W1),
        ])),
    ),
    (0x1c, p66!(evl!(EvexVpabsbXmm EvexVpabsbYmm EvexVpabsbZmm / FullMem, VL, WL; KZ; ANY))),
    (0x1d, p66!(evl!(EvexVpabswXmm EvexVpabswYmm EvexVpabswZmm / FullMem, VL, WL; KZ; ANY))),
    (0x1e, p66!(evl!(EvexVpabsdXmm EvexVpabsdYmm EvexVpabsdZmm / Full, VL, WL; KZB; W0))),
    (0x1f, p66!(evl!(EvexVpabsqXmm EvexVpabsqYmm EvexVpabsqZmm / Full, VL, WL; KZB; W1))),
    (
        0x36,
        p66!(Entry::W(&[
            Entry::L(&[
                INV,
                ev!(EvexVpermdYmm / Full, VY, HY, WY; KZB; W0),
                ev!(EvexVpermdZmm / Full, VZ, HZ, WZ; KZB; W0),
            ]),
            Entry::L(&[
                INV,
                ev!(EvexVpermqYmm / Full, VY, HY, WY; KZB; W1),
                ev!(EvexVpermqZmm / Full, VZ, HZ, WZ; KZB; W1),
            ]),
        ])),
    ),
    (
        0x40,
        dq!(EvexVpmulldXmm EvexVpmulldYmm EvexVpmulldZmm, EvexVpmullqXmm EvexVpmullqYmm EvexVpmullqZmm, VL, HL, WL; KZB),
    ),
    (
        0x58,
        p66!(evl!(EvexVpbroadcastdXmmXmmm32 EvexVpbroadcastdYmmXmmm32 EvexVpbroadcastdZmmXmmm32 / Tuple1Scalar, VL, WX; KZ; W0)),
    ),
    (
        0x59,
        p66!(evl!(EvexVpbroadcastqXmmXmmm64 EvexVpbroadcastqYmmXmmm64 EvexVpbroadcastqZmmXmmm64 / Tuple1Scalar, VL, WX; KZ; W1)),
    ),
    (
        0x64,
        dq!(EvexVpblendmdXmm EvexVpblendmdYmm EvexVpblendmdZmm, EvexVpblendmqXmm EvexVpblendmqYmm EvexVpblendmqZmm, VL, HL, WL; KZB),
    ),
    (
        0x65,
        dq!(EvexVblendmpsXmm EvexVblendmpsYmm EvexVblendmpsZmm, EvexVblendmpdXmm EvexVblendmpdYmm EvexVblendmpdZmm, VL, HL, WL; KZB),
    ),
    (
        0x90,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVpgatherddXmm / Tuple1Scalar, VX, VSIBX; GATHER; W0),
                ev!(EvexVpgatherddYmm / Tuple1Scalar, VY, VSIBY; GATHER; W0),
                ev!(EvexVpgatherddZmm / Tuple1Scalar, VZ, VSIBZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVpgatherdqXmm / Tuple1Scalar, VX, VSIBX; GATHER; W1),
                ev!(EvexVpgatherdqYmm / Tuple1Scalar, VY, VSIBX; GATHER; W1),
                ev!(EvexVpgatherdqZmm / Tuple1Scalar, VZ, VSIBY; GATHER; W1),
            ]),
        ]))),
    ),
    (
        0x91,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVpgatherqdXmm / Tuple1Scalar, VX, VSIBX; GATHER; W0),
                ev!(EvexVpgatherqdYmm / Tuple1Scalar, VX, VSIBY; GATHER; W0),
                ev!(EvexVpgatherqdZmm / Tuple1Scalar, VY, VSIBZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVpgatherqqXmm / Tuple1Scalar, VX, VSIBX; GATHER; W1),
                ev!(EvexVpgatherqqYmm / Tuple1Scalar, VY, VSIBY; GATHER; W1),
                ev!(EvexVpgatherqqZmm / Tuple1Scalar, VZ, VSIBZ; GATHER; W1),
            ]),
        ]))),
    ),
    (
        0x92,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVgatherdpsXmm / Tuple1Scalar, VX, VSIBX; GATHER; W0),
                ev!(EvexVgatherdpsYmm / Tuple1Scalar, VY, VSIBY; GATHER; W0),
                ev!(EvexVgatherdpsZmm / Tuple1Scalar, VZ, VSIBZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVgatherdpdXmm / Tuple1Scalar, VX, VSIBX; GATHER; W1),
                ev!(EvexVgatherdpdYmm / Tuple1Scalar, VY, VSIBX; GATHER; W1),
                ev!(EvexVgatherdpdZmm / Tuple1Scalar, VZ, VSIBY; GATHER; W1),
            ]),
        ]))),
    ),
    (
        0x93,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVgatherqpsXmm / Tuple1Scalar, VX, VSIBX; GATHER; W0),
                ev!(EvexVgatherqpsYmm / Tuple1Scalar, VX, VSIBY; GATHER; W0),
                ev!(EvexVgatherqpsZmm / Tuple1Scalar, VY, VSIBZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVgatherqpdXmm / Tuple1Scalar, VX, VSIBX; GATHER; W1),
                ev!(EvexVgatherqpdYmm / Tuple1Scalar, VY, VSIBY; GATHER; W1),
                ev!(EvexVgatherqpdZmm / Tuple1Scalar, VZ, VSIBZ; GATHER; W1),
            ]),
        ]))),
    ),
    (0x98, fma!(EvexVfmadd132psXmm EvexVfmadd132psYmm EvexVfmadd132psZmm, EvexVfmadd132pdXmm EvexVfmadd132pdYmm EvexVfmadd132pdZmm)),
    (0x99, fma_scalar!(EvexVfmadd132ssXmm EvexVfmadd132sdXmm)),
    (
        0xa0,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVpscatterddXmm / Tuple1Scalar, VSIBX, VX; GATHER; W0),
                ev!(EvexVpscatterddYmm / Tuple1Scalar, VSIBY, VY; GATHER; W0),
                ev!(EvexVpscatterddZmm / Tuple1Scalar, VSIBZ, VZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVpscatterdqXmm / Tuple1Scalar, VSIBX, VX; GATHER; W1),
                ev!(EvexVpscatterdqYmm / Tuple1Scalar, VSIBX, VY; GATHER; W1),
                ev!(EvexVpscatterdqZmm / Tuple1Scalar, VSIBY, VZ; GATHER; W1),
            ]),
        ]))),
    ),
    (
        0xa2,
        p66!(mem!(Entry::W(&[
            Entry::L(&[
                ev!(EvexVscatterdpsXmm / Tuple1Scalar, VSIBX, VX; GATHER; W0),
                ev!(EvexVscatterdpsYmm / Tuple1Scalar, VSIBY, VY; GATHER; W0),
                ev!(EvexVscatterdpsZmm / Tuple1Scalar, VSIBZ, VZ; GATHER; W0),
            ]),
            Entry::L(&[
                ev!(EvexVscatterdpdXmm / Tuple1Scalar, VSIBX, VX; GATHER; W1),
                ev!(EvexVscatterdpdYmm / Tuple1Scalar, VSIBX, VY; GATHER; W1),
                ev!(EvexVscatterdpdZmm / Tuple1Scalar, VSIBY, VZ; GATHER; W1),
            ]),
        ]))),
    ),
    (0xa8, fma!(EvexVfmadd213psXmm EvexVfmadd213psYmm EvexVfmadd213psZmm, EvexVfmadd213pdXmm EvexVfmadd213pdYmm EvexVfmadd213pdZmm)),
    (0xa9, fma_scalar!(EvexVfmadd213ssXmm EvexVfmadd213sdXmm)),
    (0xb8, fma!(EvexVfmadd231psXmm EvexVfmadd231psYmm EvexVfmadd231psZmm, EvexVfmadd231pdXmm EvexVfmadd231pdYmm EvexVfmadd231pdZmm)),
    (0xb9, fma_scalar!(EvexVfmadd231ssXmm EvexVfmadd231sdXmm)),
];

/// 128-bit lane insert/extract, by W: 32x4 / 64x2 and 32x8 / 64x4.
macro_rules! lanes {
    ($l4y:ident $l4z:ident $l2y:ident $l2z:ident, $($spec:expr),*) => {
        p66!(Entry::W(&[
            Entry::L(&[INV, ev!($l4y / Tuple4, $($spec),*; KZ; W0), ev!($l4z / Tuple4, $($spec),*; KZ; W0)]),
            Entry::L(&[INV, ev!($l2y / Tuple2, $($spec),*; KZ; W1), ev!($l2z / Tuple2, $($spec),*; KZ; W1)]),
        ]))
    };
}

macro_rules! lanes256 {
    ($l8:ident $l4:ident, $($spec:expr),*) => {
        p66!(Entry::W(&[
            Entry::L(&[INV, INV, ev!($l8 / Tuple8, $($spec),*; KZ; W0)]),
            Entry::L(&[INV, INV, ev!($l4 / Tuple4, $($spec),*; KZ; W1)]),
        ]))
    };
}

static SLOTS_0F3A: &[(u8, Entry)] = &[
    (
        0x03,
        dq!(EvexValigndXmmImm8 EvexValigndYmmImm8 EvexValigndZmmImm8, EvexValignqXmmImm8 EvexValignqYmmImm8 EvexValignqZmmImm8, VL, HL, WL, IB; KZB),
    ),
    (
        0x18,
        lanes!(EvexVinsertf32x4Ymm EvexVinsertf32x4Zmm EvexVinsertf64x2Ymm EvexVinsertf64x2Zmm, VL, HL, WX, IB),
    ),
    (
        0x19,
        lanes!(EvexVextractf32x4Ymm EvexVextractf32x4Zmm EvexVextractf64x2Ymm EvexVextractf64x2Zmm, WX, VL, IB),
    ),
    (0x1a, lanes256!(EvexVinsertf32x8Zmm EvexVinsertf64x4Zmm, VZ, HZ, WY, IB)),
    (0x1b, lanes256!(EvexVextractf32x8Zmm EvexVextractf64x4Zmm, WY, VZ, IB)),
    (
        0x1e,
        p66!(Entry::W(&[
            evl!(EvexVpcmpudKrXmmImm8 EvexVpcmpudKrYmmImm8 EvexVpcmpudKrZmmImm8 / Full, KR, HL, WL, IB; KB; W0),
            evl!(EvexVpcmpuqKrXmmImm8 EvexVpcmpuqKrYmmImm8 EvexVpcmpuqKrZmmImm8 / Full, KR, HL, WL, IB; KB; W1),
        ])),
    ),
    (
        0x1f,
        p66!(Entry::W(&[
            evl!(EvexVpcmpdKrXmmImm8 EvexVpcmpdKrYmmImm8 EvexVpcmpdKrZmmImm8 / Full, KR, HL, WL, IB; KB; W0),
            evl!(EvexVpcmpqKrXmmImm8 EvexVpcmpqKrYmmImm8 EvexVpcmpqKrZmmImm8 / Full, KR, HL, WL, IB; KB; W1),
        ])),
    ),
    (
        0x25,
        dq!(EvexVpternlogdXmmImm8 EvexVpternlogdYmmImm8 EvexVpternlogdZmmImm8, EvexVpternlogqXmmImm8 EvexVpternlogqYmmImm8 EvexVpternlogqZmmImm8, VL, HL, WL, IB; KZB),
    ),
    (
        0x38,
        lanes!(EvexVinserti32x4Ymm EvexVinserti32x4Zmm EvexVinserti64x2Ymm EvexVinserti64x2Zmm, VL, HL, WX, IB),
    ),
    (
        0x39,
        lanes!(EvexVextracti32x4Ymm EvexVextracti32x4Zmm EvexVextracti64x2Ymm EvexVextracti64x2Zmm, WX, VL, IB),
    ),
    (0x3a, lanes256!(EvexVinserti32x8Zmm EvexVinserti64x4Zmm, VZ, HZ, WY, IB)),
    (0x3b, lanes256!(EvexVextracti32x8Zmm EvexVextracti64x4Zmm, WY, VZ, IB)),
    (
        0x3e,
        p66!(Entry::W(&[
            evl!(EvexVpcmpubKrXmmImm8 EvexVpcmpubKrYmmImm8 EvexVpcmpubKrZmmImm8 / FullMem, KR, HL, WL, IB; K; W0),
            evl!(EvexVpcmpuwKrXmmImm8 EvexVpcmpuwKrYmmImm8 EvexVpcmpuwKrZmmImm8 / FullMem, KR, HL, WL, IB; K; W1),
        ])),
    ),
    (
        0x3f,
        p66!(Entry::W(&[
            evl!(EvexVpcmpbKrXmmImm8 EvexVpcmpbKrYmmImm8 EvexVpcmpbKrZmmImm8 / FullMem, KR, HL, WL, IB; K; W0),
            evl!(EvexVpcmpwKrXmmImm8 EvexVpcmpwKrYmmImm8 EvexVpcmpwKrZmmImm8 / FullMem, KR, HL, WL, IB; K; W1),
        ])),
    ),
];
