//! the one-byte opcode map.

use once_cell::sync::Lazy;

use super::x87;
use super::*;

pub(crate) static ONE_BYTE: Lazy<Table> = Lazy::new(|| {
    let mut slots = PRIMARY.to_vec();
    for row in [&ADD, &OR, &ADC, &SBB, &AND, &SUB, &XOR, &CMP] {
        slots.extend_from_slice(row);
    }
    build("primary", &slots)
});

macro_rules! alu {
    (@v [$c16:ident $c32:ident $c64:ident], $a:expr, $b:expr, $lock:expr) => {
        opv!($c16 $c32 $c64, $a, $b; $lock)
    };
    ($base:literal, $eb_gb:ident, $ev_gv:tt, $gb_eb:ident, $gv_ev:tt, $al:ident, $rax:tt, $lock:expr) => {
        [
            ($base, op!($eb_gb, EB, GB; $lock)),
            ($base + 1, alu!(@v $ev_gv, EV, GV, $lock)),
            ($base + 2, op!($gb_eb, GB, EB)),
            ($base + 3, alu!(@v $gv_ev, GV, EV, NONE)),
            ($base + 4, op!($al, AL, IB)),
            ($base + 5, alu!(@v $rax, RAX, IZ, NONE)),
        ]
    };
}

static ADD: [(u8, Entry); 6] = alu!(0x00, AddRm8R8, [AddRm16R16 AddRm32R32 AddRm64R64], AddR8Rm8, [AddR16Rm16 AddR32Rm32 AddR64Rm64], AddAlImm8, [AddAxImm16 AddEaxImm32 AddRaxImm32], LK);
static OR: [(u8, Entry); 6] = alu!(0x08, OrRm8R8, [OrRm16R16 OrRm32R32 OrRm64R64], OrR8Rm8, [OrR16Rm16 OrR32Rm32 OrR64Rm64], OrAlImm8, [OrAxImm16 OrEaxImm32 OrRaxImm32], LK);
static ADC: [(u8, Entry); 6] = alu!(0x10, AdcRm8R8, [AdcRm16R16 AdcRm32R32 AdcRm64R64], AdcR8Rm8, [AdcR16Rm16 AdcR32Rm32 AdcR64Rm64], AdcAlImm8, [AdcAxImm16 AdcEaxImm32 AdcRaxImm32], LK);
static SBB: [(u8, Entry); 6] = alu!(0x18, SbbRm8R8, [SbbRm16R16 SbbRm32R32 SbbRm64R64], SbbR8Rm8, [SbbR16Rm16 SbbR32Rm32 SbbR64Rm64], SbbAlImm8, [SbbAxImm16 SbbEaxImm32 SbbRaxImm32], LK);
static AND: [(u8, Entry); 6] = alu!(0x20, AndRm8R8, [AndRm16R16 AndRm32R32 AndRm64R64], AndR8Rm8, [AndR16Rm16 AndR32Rm32 AndR64Rm64], AndAlImm8, [AndAxImm16 AndEaxImm32 AndRaxImm32], LK);
static SUB: [(u8, Entry); 6] = alu!(0x28, SubRm8R8, [SubRm16R16 SubRm32R32 SubRm64R64], SubR8Rm8, [SubR16Rm16 SubR32Rm32 SubR64Rm64], SubAlImm8, [SubAxImm16 SubEaxImm32 SubRaxImm32], LK);
static XOR: [(u8, Entry); 6] = alu!(0x30, XorRm8R8, [XorRm16R16 XorRm32R32 XorRm64R64], XorR8Rm8, [XorR16Rm16 XorR32Rm32 XorR64Rm64], XorAlImm8, [XorAxImm16 XorEaxImm32 XorRaxImm32], LK);
static CMP: [(u8, Entry); 6] = alu!(0x38, CmpRm8R8, [CmpRm16R16 CmpRm32R32 CmpRm64R64], CmpR8Rm8, [CmpR16Rm16 CmpR32Rm32 CmpR64Rm64], CmpAlImm8, [CmpAxImm16 CmpEaxImm32 CmpRaxImm32], NONE);

static GROUP1_EB_IB: [Entry; 8] = [
    op!(AddRm8Imm8, EB, IB; LK),
    op!(OrRm8Imm8, EB, IB; LK),
    op!(AdcRm8Imm8, EB, IB; LK),
    op!(SbbRm8Imm8, EB, IB; LK),
    op!(AndRm8Imm8, EB, IB; LK),
    op!(SubRm8Imm8, EB, IB; LK),
    op!(XorRm8Imm8, EB, IB; LK),
    op!(CmpRm8Imm8, EB, IB),
];

static GROUP1_EV_IZ: [Entry; 8] = [
    opv!(AddRm16Imm16 AddRm32Imm32 AddRm64Imm32, EV, IZ; LK),
    opv!(OrRm16Imm16 OrRm32Imm32 OrRm64Imm32, EV, IZ; LK),
    opv!(AdcRm16Imm16 AdcRm32Imm32 AdcRm64Imm32, EV, IZ; LK),
    opv!(SbbRm16Imm16 SbbRm32Imm32 SbbRm64Imm32, EV, IZ; LK),
    opv!(AndRm16Imm16 AndRm32Imm32 AndRm64Imm32, EV, IZ; LK),
    opv!(SubRm16Imm16 SubRm32Imm32 SubRm64Imm32, EV, IZ; LK),
    opv!(XorRm16Imm16 XorRm32Imm32 XorRm64Imm32, EV, IZ; LK),
    opv!(CmpRm16Imm16 CmpRm32Imm32 CmpRm64Imm32, EV, IZ),
];

// 82: 80 again, outside 64-bit mode
static GROUP1_EB_IB_ALT: [Entry; 8] = [
    op!(AddRm8Imm8Alt, EB, IB; LK),
    op!(OrRm8Imm8Alt, EB, IB; LK),
    op!(AdcRm8Imm8Alt, EB, IB; LK),
    op!(SbbRm8Imm8Alt, EB, IB; LK),
    op!(AndRm8Imm8Alt, EB, IB; LK),
    op!(SubRm8Imm8Alt, EB, IB; LK),
    op!(XorRm8Imm8Alt, EB, IB; LK),
    op!(CmpRm8Imm8Alt, EB, IB),
];

static GROUP1_EV_IB: [Entry; 8] = [
    opv!(AddRm16Imm8 AddRm32Imm8 AddRm64Imm8, EV, IBS; LK),
    opv!(OrRm16Imm8 OrRm32Imm8 OrRm64Imm8, EV, IBS; LK),
    opv!(AdcRm16Imm8 AdcRm32Imm8 AdcRm64Imm8, EV, IBS; LK),
    opv!(SbbRm16Imm8 SbbRm32Imm8 SbbRm64Imm8, EV, IBS; LK),
    opv!(AndRm16Imm8 AndRm32Imm8 AndRm64Imm8, EV, IBS; LK),
    opv!(SubRm16Imm8 SubRm32Imm8 SubRm64Imm8, EV, IBS; LK),
    opv!(XorRm16Imm8 XorRm32Imm8 XorRm64Imm8, EV, IBS; LK),
    opv!(CmpRm16Imm8 CmpRm32Imm8 CmpRm64Imm8, EV, IBS),
];

macro_rules! shifts {
    ($name:ident, $src:expr, [$($b:ident)*], [$($c16:ident $c32:ident $c64:ident),*]) => {
        static $name: [[Entry; 8]; 2] = [
            [$(op!($b, EB, $src)),*],
            [$(opv!($c16 $c32 $c64, EV, $src)),*],
        ];
    };
}

shifts!(
    GROUP2_IB,
    IB,
    [RolRm8Imm8 RorRm8Imm8 RclRm8Imm8 RcrRm8Imm8 ShlRm8Imm8 ShrRm8Imm8 SalRm8Imm8 SarRm8Imm8],
    [
        RolRm16Imm8 RolRm32Imm8 RolRm64Imm8,
        RorRm16Imm8 RorRm32Imm8 RorRm64Imm8,
        RclRm16Imm8 RclRm32Imm8 RclRm64Imm8,
        RcrRm16Imm8 RcrRm32Imm8 RcrRm64Imm8,
        ShlRm16Imm8 ShlRm32Imm8 ShlRm64Imm8,
        ShrRm16Imm8 ShrRm32Imm8 ShrRm64Imm8,
        SalRm16Imm8 SalRm32Imm8 SalRm64Imm8,
        SarRm16Imm8 SarRm32Imm8 SarRm64Imm8
    ]
);

shifts!(
    GROUP2_ONE,
    ONE,
    [RolRm81 RorRm81 RclRm81 RcrRm81 ShlRm81 ShrRm81 SalRm81 SarRm81],
    [
        RolRm161 RolRm321 RolRm641,
        RorRm161 RorRm321 RorRm641,
        RclRm161 RclRm321 RclRm641,
        RcrRm161 RcrRm321 RcrRm641,
        ShlRm161 ShlRm321 ShlRm641,
        ShrRm161 ShrRm321 ShrRm641,
        SalRm161 SalRm321 SalRm641,
        SarRm161 SarRm321 SarRm641
    ]
);

shifts!(
    GROUP2_CL,
    CL,
    [RolRm8Cl RorRm8Cl RclRm8Cl RcrRm8Cl ShlRm8Cl ShrRm8Cl SalRm8Cl SarRm8Cl],
    [
        RolRm16Cl RolRm32Cl RolRm64Cl,
        RorRm16Cl RorRm32Cl RorRm64Cl,
        RclRm16Cl RclRm32Cl RclRm64Cl,
        RcrRm16Cl RcrRm32Cl RcrRm64Cl,
        ShlRm16Cl ShlRm32Cl ShlRm64Cl,
        ShrRm16Cl ShrRm32Cl ShrRm64Cl,
        SalRm16Cl SalRm32Cl SalRm64Cl,
        SarRm16Cl SarRm32Cl SarRm64Cl
    ]
);

static GROUP3_EB: [Entry; 8] = [
    op!(TestRm8Imm8, EB, IB),
    op!(TestRm8Imm8Alt, EB, IB),
    op!(NotRm8, EB; LK),
    op!(NegRm8, EB; LK),
    op!(MulRm8, EB),
    op!(ImulRm8, EB),
    op!(DivRm8, EB),
    op!(IdivRm8, EB),
];

static GROUP3_EV: [Entry; 8] = [
    opv!(TestRm16Imm16 TestRm32Imm32 TestRm64Imm32, EV, IZ),
    opv!(TestRm16Imm16Alt TestRm32Imm32Alt TestRm64Imm32Alt, EV, IZ),
    opv!(NotRm16 NotRm32 NotRm64, EV; LK),
    opv!(NegRm16 NegRm32 NegRm64, EV; LK),
    opv!(MulRm16 MulRm32 MulRm64, EV),
    opv!(ImulRm16 ImulRm32 ImulRm64, EV),
    opv!(DivRm16 DivRm32 DivRm64, EV),
    opv!(IdivRm16 IdivRm32 IdivRm64, EV),
];

static GROUP4: [Entry; 8] = [
    op!(IncRm8, EB; LK),
    op!(DecRm8, EB; LK),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
];

static GROUP5: [Entry; 8] = [
    opv!(IncRm16 IncRm32 IncRm64, EV; LK),
    opv!(DecRm16 DecRm32 DecRm64, EV; LK),
    opv!(CallRm16 CallRm32 CallRm64, EV; F64),
    mem!(opv!(CallfM1616 CallfM1632 CallfM1664, M)),
    opv!(JmpRm16 JmpRm32 JmpRm64, EV; F64),
    mem!(opv!(JmpfM1616 JmpfM1632 JmpfM1664, M)),
    opv!(PushRm16 PushRm32 PushRm64, EV; D64),
    Entry::Invalid,
];

static GROUP1A: [Entry; 8] = [
    opv!(PopRm16 PopRm32 PopRm64, EV; D64),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
];

static XABORT: [Entry; 8] = [
    op!(XabortImm8, IB),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
];

static XBEGIN: [Entry; 8] = [
    opv!(XbeginRel16 XbeginRel32 XbeginRel32, JZ; D64),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
];

static GROUP11_EB: [Entry; 8] = [
    op!(MovRm8Imm8, EB, IB; HLE_MOV),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    reg!(Entry::RmGroup(&XABORT)),
];

static GROUP11_EV: [Entry; 8] = [
    opv!(MovRm16Imm16 MovRm32Imm32 MovRm64Imm32, EV, IZ; HLE_MOV),
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    Entry::Invalid,
    reg!(Entry::RmGroup(&XBEGIN)),
];

const NOP: Entry = op!(Nop);
const PAUSE: Entry = op!(Pause);

static PRIMARY: &[(u8, Entry)] = &[
    (0x06, not64!(opv!(PushwEs PushdEs PushdEs, ES))),
    (0x07, not64!(opv!(PopwEs PopdEs PopdEs, ES))),
    (0x0e, not64!(opv!(PushwCs PushdCs PushdCs, CS))),
    (0x0f, Entry::Escape(Map::M0F)),
    (0x16, not64!(opv!(PushwSs PushdSs PushdSs, SS))),
    (0x17, not64!(opv!(PopwSs PopdSs PopdSs, SS))),
    (0x1e, not64!(opv!(PushwDs PushdDs PushdDs, DS))),
    (0x1f, not64!(opv!(PopwDs PopdDs PopdDs, DS))),
    (0x27, not64!(op!(Daa))),
    (0x2f, not64!(op!(Das))),
    (0x37, not64!(op!(Aaa))),
    (0x3f, not64!(op!(Aas))),
    (0x40, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x41, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x42, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x43, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x44, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x45, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x46, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x47, not64!(opv!(IncR16 IncR32 IncR32, ZV))),
    (0x48, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x49, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4a, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4b, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4c, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4d, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4e, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x4f, not64!(opv!(DecR16 DecR32 DecR32, ZV))),
    (0x50, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x51, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x52, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x53, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x54, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x55, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x56, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x57, opv!(PushR16 PushR32 PushR64, ZV; D64)),
    (0x58, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x59, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5a, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5b, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5c, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5d, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5e, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x5f, opv!(PopR16 PopR32 PopR64, ZV; D64)),
    (0x60, not64!(opv!(Pushaw Pushad Pushad))),
    (0x61, not64!(opv!(Popaw Popad Popad))),
    (0x62, Entry::Evex(&not64!(opv!(BoundR16M1616 BoundR32M3232 BoundR32M3232, GV, M)))),
    (
        0x63,
        Entry::Mode(
            &op!(ArplRm16R16, EW, GW),
            &opv!(MovsxdR16Rm32 MovsxdR32Rm32 MovsxdR64Rm32, GV, ED),
        ),
    ),
    (0x68, opv!(PushImm16 PushdImm32 PushqImm32, IZ; D64)),
    (0x69, opv!(ImulR16Rm16Imm16 ImulR32Rm32Imm32 ImulR64Rm64Imm32, GV, EV, IZ)),
    (0x6a, opv!(PushImm8 PushdImm8 PushqImm8, IBS; D64)),
    (0x6b, opv!(ImulR16Rm16Imm8 ImulR32Rm32Imm8 ImulR64Rm64Imm8, GV, EV, IBS)),
    (0x6c, op!(InsbM8Dx, YD, DX)),
    (0x6d, opv!(InswM16Dx InsdM32Dx InsdM32Dx, YD, DX)),
    (0x6e, op!(OutsbDxM8, DX, XS)),
    (0x6f, opv!(OutswDxM16 OutsdDxM32 OutsdDxM32, DX, XS)),
    (0x70, op!(JoRel8, JB; F64)),
    (0x71, op!(JnoRel8, JB; F64)),
    (0x72, op!(JbRel8, JB; F64)),
    (0x73, op!(JaeRel8, JB; F64)),
    (0x74, op!(JeRel8, JB; F64)),
    (0x75, op!(JneRel8, JB; F64)),
    (0x76, op!(JbeRel8, JB; F64)),
    (0x77, op!(JaRel8, JB; F64)),
    (0x78, op!(JsRel8, JB; F64)),
    (0x79, op!(JnsRel8, JB; F64)),
    (0x7a, op!(JpRel8, JB; F64)),
    (0x7b, op!(JnpRel8, JB; F64)),
    (0x7c, op!(JlRel8, JB; F64)),
    (0x7d, op!(JgeRel8, JB; F64)),
    (0x7e, op!(JleRel8, JB; F64)),
    (0x7f, op!(JgRel8, JB; F64)),
    (0x80, Entry::Group(&GROUP1_EB_IB)),
    (0x81, Entry::Group(&GROUP1_EV_IZ)),
    (0x82, not64!(Entry::Group(&GROUP1_EB_IB_ALT))),
    (0x83, Entry::Group(&GROUP1_EV_IB)),
    (0x84, op!(TestRm8R8, EB, GB)),
    (0x85, opv!(TestRm16R16 TestRm32R32 TestRm64R64, EV, GV)),
    (0x86, op!(XchgRm8R8, EB, GB; HLE_XCHG)),
    (0x87, opv!(XchgRm16R16 XchgRm32R32 XchgRm64R64, EV, GV; HLE_XCHG)),
    (0x88, op!(MovRm8R8, EB, GB; HLE_MOV)),
    (0x89, opv!(MovRm16R16 MovRm32R32 MovRm64R64, EV, GV; HLE_MOV)),
    (0x8a, op!(MovR8Rm8, GB, EB)),
    (0x8b, opv!(MovR16Rm16 MovR32Rm32 MovR64Rm64, GV, EV)),
    (0x8c, opv!(MovRm16Sreg MovR32m16Sreg MovR64m16Sreg, EV, SREG)),
    (0x8d, mem!(opv!(LeaR16M LeaR32M LeaR64M, GV, M))),
    (0x8e, opv!(MovSregRm16 MovSregR32m16 MovSregR64m16, SREG, EV)),
    (0x8f, Entry::Xop(&Entry::Group(&GROUP1A))),
    (
        0x90,
        Entry::RexB(
            &Entry::Opt(DecoderOptions::NO_PAUSE, &NOP, &Entry::F3(&PAUSE, &NOP)),
            &opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX),
        ),
    ),
    (0x91, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x92, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x93, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x94, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x95, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x96, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x97, opv!(XchgR16Ax XchgR32Eax XchgR64Rax, ZV, RAX)),
    (0x98, opv!(Cbw Cwde Cdqe)),
    (0x99, opv!(Cwd Cdq Cqo)),
    (0x9a, not64!(opv!(CallfPtr1616 CallfPtr1632 CallfPtr1632, AP))),
    (0x9b, op!(Wait)),
    (0x9c, opv!(Pushfw Pushfd Pushfq; D64)),
    (0x9d, opv!(Popfw Popfd Popfq; D64)),
    (
        0x9e,
        Entry::Mode(
            &op!(Sahf),
            &Entry::Opt(DecoderOptions::NO_LAHF_SAHF_64, &Entry::Invalid, &op!(Sahf)),
        ),
    ),
    (
        0x9f,
        Entry::Mode(
            &op!(Lahf),
            &Entry::Opt(DecoderOptions::NO_LAHF_SAHF_64, &Entry::Invalid, &op!(Lahf)),
        ),
    ),
    (0xa0, op!(MovAlMoffs8, AL, MOFFS)),
    (0xa1, opv!(MovAxMoffs16 MovEaxMoffs32 MovRaxMoffs64, RAX, MOFFS)),
    (0xa2, op!(MovMoffs8Al, MOFFS, AL)),
    (0xa3, opv!(MovMoffs16Ax MovMoffs32Eax MovMoffs64Rax, MOFFS, RAX)),
    (0xa4, op!(MovsbM8M8, YD, XS)),
    (0xa5, opv!(MovswM16M16 MovsdM32M32 MovsqM64M64, YD, XS)),
    (0xa6, op!(CmpsbM8M8, XS, YD)),
    (0xa7, opv!(CmpswM16M16 CmpsdM32M32 CmpsqM64M64, XS, YD)),
    (0xa8, op!(TestAlImm8, AL, IB)),
    (0xa9, opv!(TestAxImm16 TestEaxImm32 TestRaxImm32, RAX, IZ)),
    (0xaa, op!(StosbM8Al, YD, AL)),
    (0xab, opv!(StoswM16Ax StosdM32Eax StosqM64Rax, YD, RAX)),
    (0xac, op!(LodsbAlM8, AL, XS)),
    (0xad, opv!(LodswAxM16 LodsdEaxM32 LodsqRaxM64, RAX, XS)),
    (0xae, op!(ScasbAlM8, AL, YD)),
    (0xaf, opv!(ScaswAxM16 ScasdEaxM32 ScasqRaxM64, RAX, YD)),
    (0xb0, op!(MovR8Imm8, ZB, IB)),
    (0xb1, op!(MovR8Imm8, ZB, IB)),
    (0xb2, op!(MovR8Imm8, ZB, IB)),
    (0xb3, op!(MovR8Imm8, ZB, IB)),
    (0xb4, op!(MovR8Imm8, ZB, IB)),
    (0xb5, op!(MovR8Imm8, ZB, IB)),
    (0xb6, op!(MovR8Imm8, ZB, IB)),
    (0xb7, op!(MovR8Imm8, ZB, IB)),
    (0xb8, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xb9, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xba, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xbb, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xbc, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xbd, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xbe, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xbf, opv!(MovR16Imm16 MovR32Imm32 MovR64Imm64, ZV, IV)),
    (0xc0, Entry::Group(&GROUP2_IB[0])),
    (0xc1, Entry::Group(&GROUP2_IB[1])),
    (0xc2, opv!(RetnwImm16 RetndImm16 RetnqImm16, IW; F64)),
    (0xc3, opv!(Retnw Retnd Retnq; F64)),
    (0xc4, Entry::Vex3(&not64!(mem!(opv!(LesR16M1616 LesR32M1632 LesR32M1632, GV, M))))),
    (0xc5, Entry::Vex2(&not64!(mem!(opv!(LdsR16M1616 LdsR32M1632 LdsR32M1632, GV, M))))),
    (0xc6, Entry::Group(&GROUP11_EB)),
    (0xc7, Entry::Group(&GROUP11_EV)),
    (0xc8, opv!(EnterwImm16Imm8 EnterdImm16Imm8 EnterqImm16Imm8, IW, IB2; D64)),
    (0xc9, opv!(Leavew Leaved Leaveq; D64)),
    (0xca, opv!(RetfwImm16 RetfdImm16 RetfqImm16, IW)),
    (0xcb, opv!(Retfw Retfd Retfq)),
    (0xcc, op!(Int3)),
    (0xcd, op!(IntImm8, IB)),
    (0xce, not64!(op!(Into))),
    (0xcf, opv!(Iretw Iretd Iretq)),
    (0xd0, Entry::Group(&GROUP2_ONE[0])),
    (0xd1, Entry::Group(&GROUP2_ONE[1])),
    (0xd2, Entry::Group(&GROUP2_CL[0])),
    (0xd3, Entry::Group(&GROUP2_CL[1])),
    (0xd4, not64!(op!(AamImm8, IB))),
    (0xd5, not64!(op!(AadImm8, IB))),
    (0xd6, not64!(op!(Salc))),
    (0xd7, op!(XlatM8, XLAT)),
    (0xd8, Entry::RegMem(&x87::D8_REG, &x87::D8_MEM)),
    (0xd9, Entry::RegMem(&x87::D9_REG, &x87::D9_MEM)),
    (0xda, Entry::RegMem(&x87::DA_REG, &x87::DA_MEM)),
    (0xdb, Entry::RegMem(&x87::DB_REG, &x87::DB_MEM)),
    (0xdc, Entry::RegMem(&x87::DC_REG, &x87::DC_MEM)),
    (0xdd, Entry::RegMem(&x87::DD_REG, &x87::DD_MEM)),
    (0xde, Entry::RegMem(&x87::DE_REG, &x87::DE_MEM)),
    (0xdf, Entry::RegMem(&x87::DF_REG, &x87::DF_MEM)),
    (0xe0, opv!(LoopneRel8Cx LoopneRel8Ecx LoopneRel8Rcx, JB; JCX)),
    (0xe1, opv!(LoopeRel8Cx LoopeRel8Ecx LoopeRel8Rcx, JB; JCX)),
    (0xe2, opv!(LoopRel8Cx LoopRel8Ecx LoopRel8Rcx, JB; JCX)),
    (0xe3, opv!(JcxzRel8 JecxzRel8 JrcxzRel8, JB; JCX)),
    (0xe4, op!(InAlImm8, AL, IB)),
    (0xe5, opv!(InAxImm8 InEaxImm8 InEaxImm8, EAX_IO, IB)),
    (0xe6, op!(OutImm8Al, IB, AL)),
    (0xe7, opv!(OutImm8Ax OutImm8Eax OutImm8Eax, IB, EAX_IO)),
    (0xe8, opv!(CallRel16 CallRel32 CallRel64, JZ; F64)),
    (0xe9, opv!(JmpRel16 JmpRel32 JmpRel64, JZ; F64)),
    (0xea, not64!(opv!(JmpfPtr1616 JmpfPtr1632 JmpfPtr1632, AP))),
    (0xeb, op!(JmpRel8, JB; F64)),
    (0xec, op!(InAlDx, AL, DX)),
    (0xed, opv!(InAxDx InEaxDx InEaxDx, EAX_IO, DX)),
    (0xee, op!(OutDxAl, DX, AL)),
    (0xef, opv!(OutDxAx OutDxEax OutDxEax, DX, EAX_IO)),
    (0xf1, op!(Int1)),
    (0xf4, op!(Hlt)),
    (0xf5, op!(Cmc)),
    (0xf6, Entry::Group(&GROUP3_EB)),
    (0xf7, Entry::Group(&GROUP3_EV)),
    (0xf8, op!(Clc)),
    (0xf9, op!(Stc)),
    (0xfa, op!(Cli)),
    (0xfb, op!(Sti)),
    (0xfc, op!(Cld)),
    (0xfd, op!(Std)),
    (0xfe, Entry::Group(&GROUP4)),
    (0xff, Entry::Group(&GROUP5)),
];
