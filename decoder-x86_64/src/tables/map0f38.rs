//! the three-byte `0F 38` and `0F 3A` maps.

use once_cell::sync::Lazy;

use super::*;

pub(crate) static MAP_0F38: Lazy<Table> = Lazy::new(|| build("0f38", SLOTS_0F38));
pub(crate) static MAP_0F3A: Lazy<Table> = Lazy::new(|| build("0f3a", SLOTS_0F3A));

const INV: Entry = Entry::Invalid;

const MOVBE_LOAD: Entry = mem!(opv!(MovbeR16M16 MovbeR32M32 MovbeR64M64, GV, M));
const MOVBE_STORE: Entry = mem!(opv!(MovbeM16R16 MovbeM32R32 MovbeM64R64, M, GV));

static SLOTS_0F38: &[(u8, Entry)] = &[
    (0x00, mmx_sse!(PshufbMmMmm64, PshufbXmmXmmm128)),
    (0x01, mmx_sse!(PhaddwMmMmm64, PhaddwXmmXmmm128)),
    (0x02, mmx_sse!(PhadddMmMmm64, PhadddXmmXmmm128)),
    (0x03, mmx_sse!(PhaddswMmMmm64, PhaddswXmmXmmm128)),
    (0x04, mmx_sse!(PmaddubswMmMmm64, PmaddubswXmmXmmm128)),
    (0x05, mmx_sse!(PhsubwMmMmm64, PhsubwXmmXmmm128)),
    (0x06, mmx_sse!(PhsubdMmMmm64, PhsubdXmmXmmm128)),
    (0x07, mmx_sse!(PhsubswMmMmm64, PhsubswXmmXmmm128)),
    (0x08, mmx_sse!(PsignbMmMmm64, PsignbXmmXmmm128)),
    (0x09, mmx_sse!(PsignwMmMmm64, PsignwXmmXmmm128)),
    (0x0a, mmx_sse!(PsigndMmMmm64, PsigndXmmXmmm128)),
    (0x0b, mmx_sse!(PmulhrswMmMmm64, PmulhrswXmmXmmm128)),
    (0x10, sse66!(PblendvbXmmXmmm128, VX, WX, XMM0)),
    (0x14, sse66!(BlendvpsXmmXmmm128, VX, WX, XMM0)),
    (0x15, sse66!(BlendvpdXmmXmmm128, VX, WX, XMM0)),
    (0x17, sse66!(PtestXmmXmmm128, VX, WX)),
    (0x1c, mmx_sse!(PabsbMmMmm64, PabsbXmmXmmm128)),
    (0x1d, mmx_sse!(PabswMmMmm64, PabswXmmXmmm128)),
    (0x1e, mmx_sse!(PabsdMmMmm64, PabsdXmmXmmm128)),
    (0x20, sse66!(PmovsxbwXmmXmmm64, VX, WX)),
    (0x21, sse66!(PmovsxbdXmmXmmm32, VX, WX)),
    (0x22, sse66!(PmovsxbqXmmXmmm16, VX, WX)),
    (0x23, sse66!(PmovsxwdXmmXmmm64, VX, WX)),
    (0x24, sse66!(PmovsxwqXmmXmmm32, VX, WX)),
    (0x25, sse66!(PmovsxdqXmmXmmm64, VX, WX)),
    (0x28, sse66!(PmuldqXmmXmmm128, VX, WX)),
    (0x29, sse66!(PcmpeqqXmmXmmm128, VX, WX)),
    (0x2a, Entry::Mandatory(&[INV, mem!(op!(MovntdqaXmmM128, VX, M)), INV, INV])),
    (0x2b, sse66!(PackusdwXmmXmmm128, VX, WX)),
    (0x30, sse66!(PmovzxbwXmmXmmm64, VX, WX)),
    (0x31, sse66!(PmovzxbdXmmXmmm32, VX, WX)),
    (0x32, sse66!(PmovzxbqXmmXmmm16, VX, WX)),
    (0x33, sse66!(PmovzxwdXmmXmmm64, VX, WX)),
    (0x34, sse66!(PmovzxwqXmmXmmm32, VX, WX)),
    (0x35, sse66!(PmovzxdqXmmXmmm64, VX, WX)),
    (0x37, sse66!(PcmpgtqXmmXmmm128, VX, WX)),
    (0x38, sse66!(PminsbXmmXmmm128, VX, WX)),
    (0x39, sse66!(PminsdXmmXmmm128, VX, WX)),
    (0x3a, sse66!(PminuwXmmXmmm128, VX, WX)),
    (0x3b, sse66!(PminudXmmXmmm128, VX, WX)),
    (0x3c, sse66!(PmaxsbXmmXmmm128, VX, WX)),
    (0x3d, sse66!(PmaxsdXmmXmmm128, VX, WX)),
    (0x3e, sse66!(PmaxuwXmmXmmm128, VX, WX)),
    (0x3f, sse66!(PmaxudXmmXmmm128, VX, WX)),
    (0x40, sse66!(PmulldXmmXmmm128, VX, WX)),
    (0x41, sse66!(PhminposuwXmmXmmm128, VX, WX)),
    (
        0x80,
        Entry::Mandatory(&[INV, mem!(Entry::Mode(&op!(InveptR32M128, GD, M), &op!(InveptR64M128, GQ, M))), INV, INV]),
    ),
    (
        0x81,
        Entry::Mandatory(&[INV, mem!(Entry::Mode(&op!(InvvpidR32M128, GD, M), &op!(InvvpidR64M128, GQ, M))), INV, INV]),
    ),
    (
        0x82,
        Entry::Mandatory(&[INV, mem!(Entry::Mode(&op!(InvpcidR32M128, GD, M), &op!(InvpcidR64M128, GQ, M))), INV, INV]),
    ),
    (0xc8, Entry::Mandatory(&[op!(Sha1nexteXmmXmmm128, VX, WX), INV, INV, INV])),
    (0xc9, Entry::Mandatory(&[op!(Sha1msg1XmmXmmm128, VX, WX), INV, INV, INV])),
    (0xca, Entry::Mandatory(&[op!(Sha1msg2XmmXmmm128, VX, WX), INV, INV, INV])),
    (0xcb, Entry::Mandatory(&[op!(Sha256rnds2XmmXmmm128, VX, WX, XMM0), INV, INV, INV])),
    (0xcc, Entry::Mandatory(&[op!(Sha256msg1XmmXmmm128, VX, WX), INV, INV, INV])),
    (0xcd, Entry::Mandatory(&[op!(Sha256msg2XmmXmmm128, VX, WX), INV, INV, INV])),
    (0xdb, sse66!(AesimcXmmXmmm128, VX, WX)),
    (0xdc, sse66!(AesencXmmXmmm128, VX, WX)),
    (0xdd, sse66!(AesenclastXmmXmmm128, VX, WX)),
    (0xde, sse66!(AesdecXmmXmmm128, VX, WX)),
    (0xdf, sse66!(AesdeclastXmmXmmm128, VX, WX)),
    // 66 is an operand size prefix for movbe and crc32
    (0xf0, Entry::F2(&opv!(Crc32R32Rm8 Crc32R32Rm8 Crc32R64Rm8, GY, EB), &MOVBE_LOAD)),
    (0xf1, Entry::F2(&opv!(Crc32R32Rm16 Crc32R32Rm32 Crc32R64Rm64, GY, EV), &MOVBE_STORE)),
    (
        0xf6,
        Entry::Mandatory(&[
            INV,
            opv!(AdcxR32Rm32 AdcxR32Rm32 AdcxR64Rm64, GY, EY),
            opv!(AdoxR32Rm32 AdoxR32Rm32 AdoxR64Rm64, GY, EY),
            INV,
        ]),
    ),
];

static SLOTS_0F3A: &[(u8, Entry)] = &[
    (0x08, sse66!(RoundpsXmmXmmm128Imm8, VX, WX, IB)),
    (0x09, sse66!(RoundpdXmmXmmm128Imm8, VX, WX, IB)),
    (0x0a, sse66!(RoundssXmmXmmm32Imm8, VX, WX, IB)),
    (0x0b, sse66!(RoundsdXmmXmmm64Imm8, VX, WX, IB)),
    (0x0c, sse66!(BlendpsXmmXmmm128Imm8, VX, WX, IB)),
    (0x0d, sse66!(BlendpdXmmXmmm128Imm8, VX, WX, IB)),
    (0x0e, sse66!(PblendwXmmXmmm128Imm8, VX, WX, IB)),
    (0x0f, mmx_sse!(PalignrMmMmm64Imm8, PalignrXmmXmmm128Imm8, IB)),
    (
        0x14,
        Entry::Mandatory(&[INV, opv!(PextrbR32m8XmmImm8 PextrbR32m8XmmImm8 PextrbR64m8XmmImm8, EY, VX, IB), INV, INV]),
    ),
    (
        0x15,
        Entry::Mandatory(&[INV, opv!(PextrwR32m16XmmImm8 PextrwR32m16XmmImm8 PextrwR64m16XmmImm8, EY, VX, IB), INV, INV]),
    ),
    (
        0x16,
        Entry::Mandatory(&[INV, opv!(PextrdRm32XmmImm8 PextrdRm32XmmImm8 PextrqRm64XmmImm8, EY, VX, IB), INV, INV]),
    ),
    (0x17, sse66!(ExtractpsRm32XmmImm8, ED, VX, IB)),
    (
        0x20,
        Entry::Mandatory(&[INV, opv!(PinsrbXmmR32m8Imm8 PinsrbXmmR32m8Imm8 PinsrbXmmR64m8Imm8, VX, EY, IB), INV, INV]),
    ),
    (0x21, sse66!(InsertpsXmmXmmm32Imm8, VX, WX, IB)),
    (
        0x22,
        Entry::Mandatory(&[INV, opv!(PinsrdXmmRm32Imm8 PinsrdXmmRm32Imm8 PinsrqXmmRm64Imm8, VX, EY, IB), INV, INV]),
    ),
    (0x40, sse66!(DppsXmmXmmm128Imm8, VX, WX, IB)),
    (0x41, sse66!(DppdXmmXmmm128Imm8, VX, WX, IB)),
    (0x42, sse66!(MpsadbwXmmXmmm128Imm8, VX, WX, IB)),
    (0x44, sse66!(PclmulqdqXmmXmmm128Imm8, VX, WX, IB)),
    (0x60, sse66!(PcmpestrmXmmXmmm128Imm8, VX, WX, IB)),
    (0x61, sse66!(PcmpestriXmmXmmm128Imm8, VX, WX, IB)),
    (0x62, sse66!(PcmpistrmXmmXmmm128Imm8, VX, WX, IB)),
    (0x63, sse66!(PcmpistriXmmXmmm128Imm8, VX, WX, IB)),
    (0xcc, Entry::Mandatory(&[op!(Sha1rnds4XmmXmmm128Imm8, VX, WX, IB), INV, INV, INV])),
    (0xdf, sse66!(AeskeygenassistXmmXmmm128Imm8, VX, WX, IB)),
];
