//! the `0F` map.

use once_cell::sync::Lazy;

use super::*;

pub(crate) static TWO_BYTE: Lazy<Table> = Lazy::new(|| build("0f", SLOTS));

const INV: Entry = Entry::Invalid;

static GROUP6: [Entry; 8] = [
    opv!(SldtRm16 SldtR32m16 SldtR64m16, EV),
    opv!(StrRm16 StrR32m16 StrR64m16, EV),
    op!(LldtRm16, EW),
    op!(LtrRm16, EW),
    op!(VerrRm16, EW),
    op!(VerwRm16, EW),
    Entry::Opt(DecoderOptions::JMPE, &not64!(opv!(JmpeRm16 JmpeRm32 JmpeRm32, EV)), &INV),
    INV,
];

static GROUP7_MEM: [Entry; 8] = [
    op!(SgdtM, M),
    op!(SidtM, M),
    op!(LgdtM, M),
    op!(LidtM, M),
    opv!(SmswRm16 SmswR32m16 SmswR64m16, EV),
    INV,
    op!(LmswRm16, EW),
    op!(InvlpgM, M),
];

static GROUP7_REG: [Entry; 8] = [
    Entry::RmGroup(&[op!(Enclv), op!(Vmcall), op!(Vmlaunch), op!(Vmresume), op!(Vmxoff), INV, INV, INV]),
    Entry::RmGroup(&[op!(Monitor), op!(Mwait), op!(Clac), op!(Stac), INV, INV, INV, op!(Encls)]),
    Entry::RmGroup(&[op!(Xgetbv), op!(Xsetbv), INV, INV, op!(Vmfunc), op!(Xend), op!(Xtest), op!(Enclu)]),
    Entry::RmGroup(&[
        op!(Vmrun),
        op!(Vmmcall),
        op!(Vmload),
        op!(Vmsave),
        op!(Stgi),
        op!(Clgi),
        op!(Skinit),
        op!(Invlpga),
    ]),
    opv!(SmswRm16 SmswR32m16 SmswR64m16, EV),
    Entry::RmGroup(&[op!(Serialize), INV, INV, INV, INV, INV, op!(Rdpkru), op!(Wrpkru)]),
    op!(LmswRm16, EW),
    Entry::RmGroup(&[
        only64!(op!(Swapgs)),
        op!(Rdtscp),
        op!(Monitorx),
        op!(Mwaitx),
        op!(Clzero),
        INV,
        INV,
        INV,
    ]),
];

static PREFETCH_MEM: [Entry; 8] = [
    op!(PrefetchntaM8, M),
    op!(Prefetcht0M8, M),
    op!(Prefetcht1M8, M),
    op!(Prefetcht2M8, M),
    opv!(Reservednop0F18Rm16R16 Reservednop0F18Rm32R32 Reservednop0F18Rm64R64, EV, GV),
    opv!(Reservednop0F18Rm16R16 Reservednop0F18Rm32R32 Reservednop0F18Rm64R64, EV, GV),
    opv!(Reservednop0F18Rm16R16 Reservednop0F18Rm32R32 Reservednop0F18Rm64R64, EV, GV),
    opv!(Reservednop0F18Rm16R16 Reservednop0F18Rm32R32 Reservednop0F18Rm64R64, EV, GV),
];

static PREFETCHW_MEM: [Entry; 8] = [
    op!(PrefetchM8, M),
    op!(PrefetchwM8, M),
    op!(Prefetchwt1M8, M),
    opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
    opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
    opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
    opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
    opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
];

const RESERVED_0F1E: Entry = opv!(Reservednop0F1ERm16R16 Reservednop0F1ERm32R32 Reservednop0F1ERm64R64, EV, GV);

static ENDBR: [Entry; 8] = [
    RESERVED_0F1E,
    RESERVED_0F1E,
    op!(Endbr64),
    op!(Endbr32),
    RESERVED_0F1E,
    RESERVED_0F1E,
    RESERVED_0F1E,
    RESERVED_0F1E,
];

static NOP_0F1F: [Entry; 8] = [
    opv!(NopRm16 NopRm32 NopRm64, EV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
    opv!(Reservednop0F1FRm16R16 Reservednop0F1FRm32R32 Reservednop0F1FRm64R64, EV, GV),
];

// bound registers
const MPX_1A: Entry = Entry::Mandatory(&[
    mem!(op!(BndldxBndMib, BR, M; BND)),
    op!(BndmovBndBndm128, BR, BM; BND),
    Entry::Mode(&op!(BndclBndRm32, BR, ED; BND), &op!(BndclBndRm64, BR, EQ; BND)),
    Entry::Mode(&op!(BndcuBndRm32, BR, ED; BND), &op!(BndcuBndRm64, BR, EQ; BND)),
]);

const MPX_1B: Entry = Entry::Mandatory(&[
    mem!(op!(BndstxMibBnd, M, BR; BND)),
    op!(BndmovBndm128Bnd, BM, BR; BND),
    mem!(Entry::Mode(&op!(BndmkBndM32, BR, M; BND), &op!(BndmkBndM64, BR, M; BND))),
    Entry::Mode(&op!(BndcnBndRm32, BR, ED; BND), &op!(BndcnBndRm64, BR, EQ; BND)),
]);

const UMOV_10: Entry = Entry::Opt(DecoderOptions::UMOV, &not64!(op!(UmovRm8R8, EB, GB)), &op!(MovupsXmmXmmm128, VX, WX));
const UMOV_11: Entry = Entry::Opt(
    DecoderOptions::UMOV,
    &not64!(opv!(UmovRm16R16 UmovRm32R32 UmovRm32R32, EV, GV)),
    &op!(MovupsXmmm128Xmm, WX, VX),
);
const UMOV_12: Entry = Entry::Opt(
    DecoderOptions::UMOV,
    &not64!(op!(UmovR8Rm8, GB, EB)),
    &Entry::RegMem(&op!(MovhlpsXmmXmm, VX, UX), &op!(MovlpsXmmM64, VX, M)),
);
const UMOV_13: Entry = Entry::Opt(
    DecoderOptions::UMOV,
    &not64!(opv!(UmovR16Rm16 UmovR32Rm32 UmovR32Rm32, GV, EV)),
    &mem!(op!(MovlpsM64Xmm, M, VX)),
);

static GROUP12: [Entry; 8] = [
    INV,
    INV,
    Entry::Mandatory(&[op!(PsrlwMmImm8, NQ, IB), op!(PsrlwXmmImm8, UX, IB), INV, INV]),
    INV,
    Entry::Mandatory(&[op!(PsrawMmImm8, NQ, IB), op!(PsrawXmmImm8, UX, IB), INV, INV]),
    INV,
    Entry::Mandatory(&[op!(PsllwMmImm8, NQ, IB), op!(PsllwXmmImm8, UX, IB), INV, INV]),
    INV,
];

static GROUP13: [Entry; 8] = [
    INV,
    INV,
    Entry::Mandatory(&[op!(PsrldMmImm8, NQ, IB), op!(PsrldXmmImm8, UX, IB), INV, INV]),
    INV,
    Entry::Mandatory(&[op!(PsradMmImm8, NQ, IB), op!(PsradXmmImm8, UX, IB), INV, INV]),
    INV,
    Entry::Mandatory(&[op!(PslldMmImm8, NQ, IB), op!(PslldXmmImm8, UX, IB), INV, INV]),
    INV,
];

static GROUP14: [Entry; 8] = [
    INV,
    INV,
    Entry::Mandatory(&[op!(PsrlqMmImm8, NQ, IB), op!(PsrlqXmmImm8, UX, IB), INV, INV]),
    sse66!(PsrldqXmmImm8, UX, IB),
    INV,
    INV,
    Entry::Mandatory(&[op!(PsllqMmImm8, NQ, IB), op!(PsllqXmmImm8, UX, IB), INV, INV]),
    sse66!(PslldqXmmImm8, UX, IB),
];

static EXTRQ_GROUP: [Entry; 8] = [op!(ExtrqXmmImm8Imm8, UX, IB, IB2), INV, INV, INV, INV, INV, INV, INV];

static GROUP15_MEM: [Entry; 8] = [
    opv!(FxsaveM FxsaveM Fxsave64M, M),
    opv!(FxrstorM FxrstorM Fxrstor64M, M),
    op!(LdmxcsrM32, M),
    op!(StmxcsrM32, M),
    opv!(XsaveM XsaveM Xsave64M, M),
    opv!(XrstorM XrstorM Xrstor64M, M),
    Entry::Mandatory(&[opv!(XsaveoptM XsaveoptM Xsaveopt64M, M), op!(ClwbM8, M), INV, INV]),
    Entry::Mandatory(&[op!(ClflushM8, M), op!(ClflushoptM8, M), INV, INV]),
];

static GROUP15_REG: [Entry; 8] = [
    Entry::Mandatory(&[INV, INV, only64!(opv!(RdfsbaseR32 RdfsbaseR32 RdfsbaseR64, RY)), INV]),
    Entry::Mandatory(&[INV, INV, only64!(opv!(RdgsbaseR32 RdgsbaseR32 RdgsbaseR64, RY)), INV]),
    Entry::Mandatory(&[INV, INV, only64!(opv!(WrfsbaseR32 WrfsbaseR32 WrfsbaseR64, RY)), INV]),
    Entry::Mandatory(&[INV, INV, only64!(opv!(WrgsbaseR32 WrgsbaseR32 WrgsbaseR64, RY)), INV]),
    INV,
    Entry::Mandatory(&[op!(Lfence), INV, INV, INV]),
    Entry::Mandatory(&[op!(Mfence), INV, INV, INV]),
    Entry::Mandatory(&[
        op!(Sfence),
        Entry::Opt(
            DecoderOptions::PCOMMIT,
            &Entry::RmGroup(&[op!(Pcommit), INV, INV, INV, INV, INV, INV, INV]),
            &INV,
        ),
        INV,
        INV,
    ]),
];

static GROUP8: [Entry; 8] = [
    INV,
    INV,
    INV,
    INV,
    opv!(BtRm16Imm8 BtRm32Imm8 BtRm64Imm8, EV, IB),
    opv!(BtsRm16Imm8 BtsRm32Imm8 BtsRm64Imm8, EV, IB; LK),
    opv!(BtrRm16Imm8 BtrRm32Imm8 BtrRm64Imm8, EV, IB; LK),
    opv!(BtcRm16Imm8 BtcRm32Imm8 BtcRm64Imm8, EV, IB; LK),
];

static GROUP9_MEM: [Entry; 8] = [
    INV,
    opv!(Cmpxchg8bM64 Cmpxchg8bM64 Cmpxchg16bM128, M; LK),
    INV,
    opv!(XrstorsM XrstorsM Xrstors64M, M),
    opv!(XsavecM XsavecM Xsavec64M, M),
    opv!(XsavesM XsavesM Xsaves64M, M),
    Entry::Mandatory(&[op!(VmptrldM64, M), op!(VmclearM64, M), op!(VmxonM64, M), INV]),
    Entry::Mandatory(&[op!(VmptrstM64, M), INV, INV, INV]),
];

static GROUP9_REG: [Entry; 8] = [
    INV,
    INV,
    INV,
    INV,
    INV,
    INV,
    Entry::Mandatory(&[opv!(RdrandR16 RdrandR32 RdrandR64, RV), INV, INV, INV]),
    Entry::Mandatory(&[
        opv!(RdseedR16 RdseedR32 RdseedR64, RV),
        INV,
        Entry::Mode(&op!(RdpidR32, RD), &op!(RdpidR64, RQ)),
        INV,
    ]),
];

const BSF: Entry = opv!(BsfR16Rm16 BsfR32Rm32 BsfR64Rm64, GV, EV);
const BSR: Entry = opv!(BsrR16Rm16 BsrR32Rm32 BsrR64Rm64, GV, EV);

static SLOTS: &[(u8, Entry)] = &[
    (0x00, Entry::Group(&GROUP6)),
    (0x01, Entry::RegMem(&Entry::Group(&GROUP7_REG), &Entry::Group(&GROUP7_MEM))),
    (0x02, opv!(LarR16Rm16 LarR32R32m16 LarR64R64m16, GV, EV)),
    (0x03, opv!(LslR16Rm16 LslR32R32m16 LslR64R64m16, GV, EV)),
    (
        0x05,
        Entry::Mode(
            &Entry::Opt(DecoderOptions::LOADALL286, &op!(Loadall286), &op!(Syscall)),
            &op!(Syscall),
        ),
    ),
    (0x06, op!(Clts)),
    (
        0x07,
        Entry::Mode(
            &Entry::Opt(DecoderOptions::LOADALL386, &op!(Loadall386), &opv!(Sysretd Sysretd Sysretq)),
            &opv!(Sysretd Sysretd Sysretq),
        ),
    ),
    (0x08, op!(Invd)),
    (
        0x09,
        Entry::Opt(
            DecoderOptions::NO_WBNOINVD,
            &op!(Wbinvd),
            &Entry::F3(&op!(Wbnoinvd), &op!(Wbinvd)),
        ),
    ),
    (0x0b, op!(Ud2)),
    (
        0x0d,
        Entry::RegMem(
            &opv!(Reservednop0F0DRm16R16 Reservednop0F0DRm32R32 Reservednop0F0DRm64R64, EV, GV),
            &Entry::Group(&PREFETCHW_MEM),
        ),
    ),
    (0x0e, op!(Femms)),
    (0x0f, op!(Invalid, PQ, QQ; InfoFlags::D3NOW)),
    (
        0x10,
        Entry::Mandatory(&[UMOV_10, op!(MovupdXmmXmmm128, VX, WX), op!(MovssXmmXmmm32, VX, WX), op!(MovsdXmmXmmm64, VX, WX)]),
    ),
    (
        0x11,
        Entry::Mandatory(&[UMOV_11, op!(MovupdXmmm128Xmm, WX, VX), op!(MovssXmmm32Xmm, WX, VX), op!(MovsdXmmm64Xmm, WX, VX)]),
    ),
    (
        0x12,
        Entry::Mandatory(&[
            UMOV_12,
            mem!(op!(MovlpdXmmM64, VX, M)),
            op!(MovsldupXmmXmmm128, VX, WX),
            op!(MovddupXmmXmmm64, VX, WX),
        ]),
    ),
    (0x13, Entry::Mandatory(&[UMOV_13, mem!(op!(MovlpdM64Xmm, M, VX)), INV, INV])),
    (0x14, sse!(UnpcklpsXmmXmmm128, UnpcklpdXmmXmmm128)),
    (0x15, sse!(UnpckhpsXmmXmmm128, UnpckhpdXmmXmmm128)),
    (
        0x16,
        Entry::Mandatory(&[
            Entry::RegMem(&op!(MovlhpsXmmXmm, VX, UX), &op!(MovhpsXmmM64, VX, M)),
            mem!(op!(MovhpdXmmM64, VX, M)),
            op!(MovshdupXmmXmmm128, VX, WX),
            INV,
        ]),
    ),
    (0x17, Entry::Mandatory(&[mem!(op!(MovhpsM64Xmm, M, VX)), mem!(op!(MovhpdM64Xmm, M, VX)), INV, INV])),
    (
        0x18,
        Entry::RegMem(
            &opv!(Reservednop0F18Rm16R16 Reservednop0F18Rm32R32 Reservednop0F18Rm64R64, EV, GV),
            &Entry::Group(&PREFETCH_MEM),
        ),
    ),
    (0x19, opv!(Reservednop0F19Rm16R16 Reservednop0F19Rm32R32 Reservednop0F19Rm64R64, EV, GV)),
    (
        0x1a,
        Entry::Opt(
            DecoderOptions::MPX,
            &MPX_1A,
            &opv!(Reservednop0F1ARm16R16 Reservednop0F1ARm32R32 Reservednop0F1ARm64R64, EV, GV),
        ),
    ),
    (
        0x1b,
        Entry::Opt(
            DecoderOptions::MPX,
            &MPX_1B,
            &opv!(Reservednop0F1BRm16R16 Reservednop0F1BRm32R32 Reservednop0F1BRm64R64, EV, GV),
        ),
    ),
    (0x1c, opv!(Reservednop0F1CRm16R16 Reservednop0F1CRm32R32 Reservednop0F1CRm64R64, EV, GV)),
    (0x1d, opv!(Reservednop0F1DRm16R16 Reservednop0F1DRm32R32 Reservednop0F1DRm64R64, EV, GV)),
    (
        0x1e,
        Entry::F3(
            &Entry::RegMem(
                &Entry::Group(&[
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    RESERVED_0F1E,
                    Entry::RmGroup(&ENDBR),
                ]),
                &RESERVED_0F1E,
            ),
            &RESERVED_0F1E,
        ),
    ),
    (0x1f, Entry::Group(&NOP_0F1F)),
    (0x20, Entry::Mode(&op!(MovR32Cr, RD, CR), &op!(MovR64Cr, RQ, CR))),
    (0x21, Entry::Mode(&op!(MovR32Dr, RD, DR), &op!(MovR64Dr, RQ, DR))),
    (0x22, Entry::Mode(&op!(MovCrR32, CR, RD), &op!(MovCrR64, CR, RQ))),
    (0x23, Entry::Mode(&op!(MovDrR32, DR, RD), &op!(MovDrR64, DR, RQ))),
    (0x24, Entry::Opt(DecoderOptions::MOV_TR, &not64!(op!(MovR32Tr, RD, TR)), &INV)),
    (0x26, Entry::Opt(DecoderOptions::MOV_TR, &not64!(op!(MovTrR32, TR, RD)), &INV)),
    (0x28, sse!(MovapsXmmXmmm128, MovapdXmmXmmm128)),
    (
        0x29,
        Entry::Mandatory(&[op!(MovapsXmmm128Xmm, WX, VX), op!(MovapdXmmm128Xmm, WX, VX), INV, INV]),
    ),
    (
        0x2a,
        Entry::Mandatory(&[
            op!(Cvtpi2psXmmMmm64, VX, QQ),
            op!(Cvtpi2pdXmmMmm64, VX, QQ),
            opv!(Cvtsi2ssXmmRm32 Cvtsi2ssXmmRm32 Cvtsi2ssXmmRm64, VX, EY),
            opv!(Cvtsi2sdXmmRm32 Cvtsi2sdXmmRm32 Cvtsi2sdXmmRm64, VX, EY),
        ]),
    ),
    (0x2b, Entry::Mandatory(&[mem!(op!(MovntpsM128Xmm, M, VX)), mem!(op!(MovntpdM128Xmm, M, VX)), INV, INV])),
    (
        0x2c,
        Entry::Mandatory(&[
            op!(Cvttps2piMmXmmm64, PQ, WX),
            op!(Cvttpd2piMmXmmm128, PQ, WX),
            opv!(Cvttss2siR32Xmmm32 Cvttss2siR32Xmmm32 Cvttss2siR64Xmmm32, GY, WX),
            opv!(Cvttsd2siR32Xmmm64 Cvttsd2siR32Xmmm64 Cvttsd2siR64Xmmm64, GY, WX),
        ]),
    ),
    (
        0x2d,
        Entry::Mandatory(&[
            op!(Cvtps2piMmXmmm64, PQ, WX),
            op!(Cvtpd2piMmXmmm128, PQ, WX),
            opv!(Cvtss2siR32Xmmm32 Cvtss2siR32Xmmm32 Cvtss2siR64Xmmm32, GY, WX),
            opv!(Cvtsd2siR32Xmmm64 Cvtsd2siR32Xmmm64 Cvtsd2siR64Xmmm64, GY, WX),
        ]),
    ),
    (0x2e, sse!(UcomissXmmXmmm32, UcomisdXmmXmmm64)),
    (0x2f, sse!(ComissXmmXmmm32, ComisdXmmXmmm64)),
    (0x30, op!(Wrmsr)),
    (0x31, op!(Rdtsc)),
    (0x32, op!(Rdmsr)),
    (0x33, op!(Rdpmc)),
    (0x34, op!(Sysenter)),
    (0x35, opv!(Sysexitd Sysexitd Sysexitq)),
    (0x37, op!(Getsec)),
    (0x38, Entry::Escape(Map::M0F38)),
    (0x3a, Entry::Escape(Map::M0F3A)),
    (0x40, opv!(CmovoR16Rm16 CmovoR32Rm32 CmovoR64Rm64, GV, EV)),
    (0x41, opv!(CmovnoR16Rm16 CmovnoR32Rm32 CmovnoR64Rm64, GV, EV)),
    (0x42, opv!(CmovbR16Rm16 CmovbR32Rm32 CmovbR64Rm64, GV, EV)),
    (0x43, opv!(CmovaeR16Rm16 CmovaeR32Rm32 CmovaeR64Rm64, GV, EV)),
    (0x44, opv!(CmoveR16Rm16 CmoveR32Rm32 CmoveR64Rm64, GV, EV)),
    (0x45, opv!(CmovneR16Rm16 CmovneR32Rm32 CmovneR64Rm64, GV, EV)),
    (0x46, opv!(CmovbeR16Rm16 CmovbeR32Rm32 CmovbeR64Rm64, GV, EV)),
    (0x47, opv!(CmovaR16Rm16 CmovaR32Rm32 CmovaR64Rm64, GV, EV)),
    (0x48, opv!(CmovsR16Rm16 CmovsR32Rm32 CmovsR64Rm64, GV, EV)),
    (0x49, opv!(CmovnsR16Rm16 CmovnsR32Rm32 CmovnsR64Rm64, GV, EV)),
    (0x4a, opv!(CmovpR16Rm16 CmovpR32Rm32 CmovpR64Rm64, GV, EV)),
    (0x4b, opv!(CmovnpR16Rm16 CmovnpR32Rm32 CmovnpR64Rm64, GV, EV)),
    (0x4c, opv!(CmovlR16Rm16 CmovlR32Rm32 CmovlR64Rm64, GV, EV)),
    (0x4d, opv!(CmovgeR16Rm16 CmovgeR32Rm32 CmovgeR64Rm64, GV, EV)),
    (0x4e, opv!(CmovleR16Rm16 CmovleR32Rm32 CmovleR64Rm64, GV, EV)),
    (0x4f, opv!(CmovgR16Rm16 CmovgR32Rm32 CmovgR64Rm64, GV, EV)),
    (
        0x50,
        Entry::Mandatory(&[
            reg!(opv!(MovmskpsR32Xmm MovmskpsR32Xmm MovmskpsR64Xmm, GY, UX)),
            reg!(opv!(MovmskpdR32Xmm MovmskpdR32Xmm MovmskpdR64Xmm, GY, UX)),
            INV,
            INV,
        ]),
    ),
    (0x51, sse!(SqrtpsXmmXmmm128, SqrtpdXmmXmmm128, SqrtssXmmXmmm32, SqrtsdXmmXmmm64)),
    (0x52, Entry::Mandatory(&[op!(RsqrtpsXmmXmmm128, VX, WX), INV, op!(RsqrtssXmmXmmm32, VX, WX), INV])),
    (0x53, Entry::Mandatory(&[op!(RcppsXmmXmmm128, VX, WX), INV, op!(RcpssXmmXmmm32, VX, WX), INV])),
    (0x54, sse!(AndpsXmmXmmm128, AndpdXmmXmmm128)),
    (0x55, sse!(AndnpsXmmXmmm128, AndnpdXmmXmmm128)),
    (0x56, sse!(OrpsXmmXmmm128, OrpdXmmXmmm128)),
    (0x57, sse!(XorpsXmmXmmm128, XorpdXmmXmmm128)),
    (0x58, sse!(AddpsXmmXmmm128, AddpdXmmXmmm128, AddssXmmXmmm32, AddsdXmmXmmm64)),
    (0x59, sse!(MulpsXmmXmmm128, MulpdXmmXmmm128, MulssXmmXmmm32, MulsdXmmXmmm64)),
    (0x5a, sse!(Cvtps2pdXmmXmmm64, Cvtpd2psXmmXmmm128, Cvtss2sdXmmXmmm32, Cvtsd2ssXmmXmmm64)),
    (
        0x5b,
        Entry::Mandatory(&[
            op!(Cvtdq2psXmmXmmm128, VX, WX),
            op!(Cvtps2dqXmmXmmm128, VX, WX),
            op!(Cvttps2dqXmmXmmm128, VX, WX),
            INV,
        ]),
    ),
    (0x5c, sse!(SubpsXmmXmmm128, SubpdXmmXmmm128, SubssXmmXmmm32, SubsdXmmXmmm64)),
    (0x5d, sse!(MinpsXmmXmmm128, MinpdXmmXmmm128, MinssXmmXmmm32, MinsdXmmXmmm64)),
    (0x5e, sse!(DivpsXmmXmmm128, DivpdXmmXmmm128, DivssXmmXmmm32, DivsdXmmXmmm64)),
    (0x5f, sse!(MaxpsXmmXmmm128, MaxpdXmmXmmm128, MaxssXmmXmmm32, MaxsdXmmXmmm64)),
    (0x60, mmx_sse!(PunpcklbwMmMmm32, PunpcklbwXmmXmmm128)),
    (0x61, mmx_sse!(PunpcklwdMmMmm32, PunpcklwdXmmXmmm128)),
    (0x62, mmx_sse!(PunpckldqMmMmm32, PunpckldqXmmXmmm128)),
    (0x63, mmx_sse!(PacksswbMmMmm64, PacksswbXmmXmmm128)),
    (0x64, mmx_sse!(PcmpgtbMmMmm64, PcmpgtbXmmXmmm128)),
    (0x65, mmx_sse!(PcmpgtwMmMmm64, PcmpgtwXmmXmmm128)),
    (0x66, mmx_sse!(PcmpgtdMmMmm64, PcmpgtdXmmXmmm128)),
    (0x67, mmx_sse!(PackuswbMmMmm64, PackuswbXmmXmmm128)),
    (0x68, mmx_sse!(PunpckhbwMmMmm64, PunpckhbwXmmXmmm128)),
    (0x69, mmx_sse!(PunpckhwdMmMmm64, PunpckhwdXmmXmmm128)),
    (0x6a, mmx_sse!(PunpckhdqMmMmm64, PunpckhdqXmmXmmm128)),
    (0x6b, mmx_sse!(PackssdwMmMmm64, PackssdwXmmXmmm128)),
    (0x6c, sse66!(PunpcklqdqXmmXmmm128, VX, WX)),
    (0x6d, sse66!(PunpckhqdqXmmXmmm128, VX, WX)),
    (
        0x6e,
        Entry::Mandatory(&[
            opv!(MovdMmRm32 MovdMmRm32 MovqMmRm64, PQ, EY),
            opv!(MovdXmmRm32 MovdXmmRm32 MovqXmmRm64, VX, EY),
            INV,
            INV,
        ]),
    ),
    (
        0x6f,
        Entry::Mandatory(&[
            op!(MovqMmMmm64, PQ, QQ),
            op!(MovdqaXmmXmmm128, VX, WX),
            op!(MovdquXmmXmmm128, VX, WX),
            INV,
        ]),
    ),
    (
        0x70,
        Entry::Mandatory(&[
            op!(PshufwMmMmm64Imm8, PQ, QQ, IB),
            op!(PshufdXmmXmmm128Imm8, VX, WX, IB),
            op!(PshufhwXmmXmmm128Imm8, VX, WX, IB),
            op!(PshuflwXmmXmmm128Imm8, VX, WX, IB),
        ]),
    ),
    (0x71, reg!(Entry::Group(&GROUP12))),
    (0x72, reg!(Entry::Group(&GROUP13))),
    (0x73, reg!(Entry::Group(&GROUP14))),
    (0x74, mmx_sse!(PcmpeqbMmMmm64, PcmpeqbXmmXmmm128)),
    (0x75, mmx_sse!(PcmpeqwMmMmm64, PcmpeqwXmmXmmm128)),
    (0x76, mmx_sse!(PcmpeqdMmMmm64, PcmpeqdXmmXmmm128)),
    (0x77, op!(Emms)),
    (
        0x78,
        Entry::Mandatory(&[
            Entry::Mode(&op!(VmreadRm32R32, ED, GD), &op!(VmreadRm64R64, EQ, GQ)),
            reg!(Entry::Group(&EXTRQ_GROUP)),
            INV,
            reg!(op!(InsertqXmmXmmImm8Imm8, VX, UX, IB, IB2)),
        ]),
    ),
    (
        0x79,
        Entry::Mandatory(&[
            Entry::Mode(&op!(VmwriteR32Rm32, GD, ED), &op!(VmwriteR64Rm64, GQ, EQ)),
            reg!(op!(ExtrqXmmXmm, VX, UX)),
            INV,
            reg!(op!(InsertqXmmXmm, VX, UX)),
        ]),
    ),
    (0x7c, Entry::Mandatory(&[INV, op!(HaddpdXmmXmmm128, VX, WX), INV, op!(HaddpsXmmXmmm128, VX, WX)])),
    (0x7d, Entry::Mandatory(&[INV, op!(HsubpdXmmXmmm128, VX, WX), INV, op!(HsubpsXmmXmmm128, VX, WX)])),
    (
        0x7e,
        Entry::Mandatory(&[
            opv!(MovdRm32Mm MovdRm32Mm MovqRm64Mm, EY, PQ),
            opv!(MovdRm32Xmm MovdRm32Xmm MovqRm64Xmm, EY, VX),
            op!(MovqXmmXmmm64, VX, WX),
            INV,
        ]),
    ),
    (
        0x7f,
        Entry::Mandatory(&[
            op!(MovqMmm64Mm, QQ, PQ),
            op!(MovdqaXmmm128Xmm, WX, VX),
            op!(MovdquXmmm128Xmm, WX, VX),
            INV,
        ]),
    ),
    (0x80, opv!(JoRel16 JoRel32 JoRel64, JZ; F64)),
    (0x81, opv!(JnoRel16 JnoRel32 JnoRel64, JZ; F64)),
    (0x82, opv!(JbRel16 JbRel32 JbRel64, JZ; F64)),
    (0x83, opv!(JaeRel16 JaeRel32 JaeRel64, JZ; F64)),
    (0x84, opv!(JeRel16 JeRel32 JeRel64, JZ; F64)),
    (0x85, opv!(JneRel16 JneRel32 JneRel64, JZ; F64)),
    (0x86, opv!(JbeRel16 JbeRel32 JbeRel64, JZ; F64)),
    (0x87, opv!(JaRel16 JaRel32 JaRel64, JZ; F64)),
    (0x88, opv!(JsRel16 JsRel32 JsRel64, JZ; F64)),
    (0x89, opv!(JnsRel16 JnsRel32 JnsRel64, JZ; F64)),
    (0x8a, opv!(JpRel16 JpRel32 JpRel64, JZ; F64)),
    (0x8b, opv!(JnpRel16 JnpRel32 JnpRel64, JZ; F64)),
    (0x8c, opv!(JlRel16 JlRel32 JlRel64, JZ; F64)),
    (0x8d, opv!(JgeRel16 JgeRel32 JgeRel64, JZ; F64)),
    (0x8e, opv!(JleRel16 JleRel32 JleRel64, JZ; F64)),
    (0x8f, opv!(JgRel16 JgRel32 JgRel64, JZ; F64)),
    (0x90, op!(SetoRm8, EB)),
    (0x91, op!(SetnoRm8, EB)),
    (0x92, op!(SetbRm8, EB)),
    (0x93, op!(SetaeRm8, EB)),
    (0x94, op!(SeteRm8, EB)),
    (0x95, op!(SetneRm8, EB)),
    (0x96, op!(SetbeRm8, EB)),
    (0x97, op!(SetaRm8, EB)),
    (0x98, op!(SetsRm8, EB)),
    (0x99, op!(SetnsRm8, EB)),
    (0x9a, op!(SetpRm8, EB)),
    (0x9b, op!(SetnpRm8, EB)),
    (0x9c, op!(SetlRm8, EB)),
    (0x9d, op!(SetgeRm8, EB)),
    (0x9e, op!(SetleRm8, EB)),
    (0x9f, op!(SetgRm8, EB)),
    (0xa0, opv!(PushwFs PushdFs PushqFs, FS; D64)),
    (0xa1, opv!(PopwFs PopdFs PopqFs, FS; D64)),
    (0xa2, op!(Cpuid)),
    (0xa3, opv!(BtRm16R16 BtRm32R32 BtRm64R64, EV, GV)),
    (0xa4, opv!(ShldRm16R16Imm8 ShldRm32R32Imm8 ShldRm64R64Imm8, EV, GV, IB)),
    (0xa5, opv!(ShldRm16R16Cl ShldRm32R32Cl ShldRm64R64Cl, EV, GV, CL)),
    (
        0xa6,
        Entry::Opt(
            DecoderOptions::XBTS,
            &not64!(opv!(XbtsR16Rm16 XbtsR32Rm32 XbtsR32Rm32, GV, EV)),
            &Entry::Opt(DecoderOptions::CMPXCHG486A, &not64!(op!(Cmpxchg486Rm8R8, EB, GB; LK)), &INV),
        ),
    ),
    (
        0xa7,
        Entry::Opt(
            DecoderOptions::XBTS,
            &not64!(opv!(IbtsRm16R16 IbtsRm32R32 IbtsRm32R32, EV, GV)),
            &Entry::Opt(
                DecoderOptions::CMPXCHG486A,
                &not64!(opv!(Cmpxchg486Rm16R16 Cmpxchg486Rm32R32 Cmpxchg486Rm32R32, EV, GV; LK)),
                &INV,
            ),
        ),
    ),
    (0xa8, opv!(PushwGs PushdGs PushqGs, GS; D64)),
    (0xa9, opv!(PopwGs PopdGs PopqGs, GS; D64)),
    (0xaa, op!(Rsm)),
    (0xab, opv!(BtsRm16R16 BtsRm32R32 BtsRm64R64, EV, GV; LK)),
    (0xac, opv!(ShrdRm16R16Imm8 ShrdRm32R32Imm8 ShrdRm64R64Imm8, EV, GV, IB)),
    (0xad, opv!(ShrdRm16R16Cl ShrdRm32R32Cl ShrdRm64R64Cl, EV, GV, CL)),
    (0xae, Entry::RegMem(&Entry::Group(&GROUP15_REG), &Entry::Group(&GROUP15_MEM))),
    (0xaf, opv!(ImulR16Rm16 ImulR32Rm32 ImulR64Rm64, GV, EV)),
    (0xb0, op!(CmpxchgRm8R8, EB, GB; LK)),
    (0xb1, opv!(CmpxchgRm16R16 CmpxchgRm32R32 CmpxchgRm64R64, EV, GV; LK)),
    (0xb2, mem!(opv!(LssR16M1616 LssR32M1632 LssR64M1664, GV, M))),
    (0xb3, opv!(BtrRm16R16 BtrRm32R32 BtrRm64R64, EV, GV; LK)),
    (0xb4, mem!(opv!(LfsR16M1616 LfsR32M1632 LfsR64M1664, GV, M))),
    (0xb5, mem!(opv!(LgsR16M1616 LgsR32M1632 LgsR64M1664, GV, M))),
    (0xb6, opv!(MovzxR16Rm8 MovzxR32Rm8 MovzxR64Rm8, GV, EB)),
    (0xb7, opv!(MovzxR16Rm16 MovzxR32Rm16 MovzxR64Rm16, GV, EW)),
    (
        0xb8,
        Entry::F3(
            &opv!(PopcntR16Rm16 PopcntR32Rm32 PopcntR64Rm64, GV, EV),
            &Entry::Opt(DecoderOptions::JMPE, &not64!(opv!(JmpeDisp16 JmpeDisp32 JmpeDisp32, JZ)), &INV),
        ),
    ),
    (0xb9, opv!(Ud1R16Rm16 Ud1R32Rm32 Ud1R64Rm64, GV, EV)),
    (0xba, Entry::Group(&GROUP8)),
    (0xbb, opv!(BtcRm16R16 BtcRm32R32 BtcRm64R64, EV, GV; LK)),
    (
        0xbc,
        Entry::Opt(
            DecoderOptions::NO_MPFX_0FBC,
            &BSF,
            &Entry::F3(&opv!(TzcntR16Rm16 TzcntR32Rm32 TzcntR64Rm64, GV, EV), &BSF),
        ),
    ),
    (
        0xbd,
        Entry::Opt(
            DecoderOptions::NO_MPFX_0FBD,
            &BSR,
            &Entry::F3(&opv!(LzcntR16Rm16 LzcntR32Rm32 LzcntR64Rm64, GV, EV), &BSR),
        ),
    ),
    (0xbe, opv!(MovsxR16Rm8 MovsxR32Rm8 MovsxR64Rm8, GV, EB)),
    (0xbf, opv!(MovsxR16Rm16 MovsxR32Rm16 MovsxR64Rm16, GV, EW)),
    (0xc0, op!(XaddRm8R8, EB, GB; LK)),
    (0xc1, opv!(XaddRm16R16 XaddRm32R32 XaddRm64R64, EV, GV; LK)),
    (
        0xc2,
        Entry::Mandatory(&[
            op!(CmppsXmmXmmm128Imm8, VX, WX, IB),
            op!(CmppdXmmXmmm128Imm8, VX, WX, IB),
            op!(CmpssXmmXmmm32Imm8, VX, WX, IB),
            op!(CmpsdXmmXmmm64Imm8, VX, WX, IB),
        ]),
    ),
    (0xc3, Entry::Mandatory(&[mem!(opv!(MovntiM32R32 MovntiM32R32 MovntiM64R64, M, GY)), INV, INV, INV])),
    (
        0xc4,
        Entry::Mandatory(&[
            opv!(PinsrwMmR32m16Imm8 PinsrwMmR32m16Imm8 PinsrwMmR64m16Imm8, PQ, EY, IB),
            opv!(PinsrwXmmR32m16Imm8 PinsrwXmmR32m16Imm8 PinsrwXmmR64m16Imm8, VX, EY, IB),
            INV,
            INV,
        ]),
    ),
    (
        0xc5,
        Entry::Mandatory(&[
            reg!(opv!(PextrwR32MmImm8 PextrwR32MmImm8 PextrwR64MmImm8, GY, NQ, IB)),
            reg!(opv!(PextrwR32XmmImm8 PextrwR32XmmImm8 PextrwR64XmmImm8, GY, UX, IB)),
            INV,
            INV,
        ]),
    ),
    (
        0xc6,
        Entry::Mandatory(&[op!(ShufpsXmmXmmm128Imm8, VX, WX, IB), op!(ShufpdXmmXmmm128Imm8, VX, WX, IB), INV, INV]),
    ),
    (0xc7, Entry::RegMem(&Entry::Group(&GROUP9_REG), &Entry::Group(&GROUP9_MEM))),
    (0xc8, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xc9, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xca, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xcb, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xcc, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xcd, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xce, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xcf, opv!(BswapR16 BswapR32 BswapR64, ZV)),
    (0xd0, Entry::Mandatory(&[INV, op!(AddsubpdXmmXmmm128, VX, WX), INV, op!(AddsubpsXmmXmmm128, VX, WX)])),
    (0xd1, mmx_sse!(PsrlwMmMmm64, PsrlwXmmXmmm128)),
    (0xd2, mmx_sse!(PsrldMmMmm64, PsrldXmmXmmm128)),
    (0xd3, mmx_sse!(PsrlqMmMmm64, PsrlqXmmXmmm128)),
    (0xd4, mmx_sse!(PaddqMmMmm64, PaddqXmmXmmm128)),
    (0xd5, mmx_sse!(PmullwMmMmm64, PmullwXmmXmmm128)),
    (
        0xd6,
        Entry::Mandatory(&[
            INV,
            op!(MovqXmmm64Xmm, WX, VX),
            reg!(op!(Movq2dqXmmMm, VX, NQ)),
            reg!(op!(Movdq2qMmXmm, PQ, UX)),
        ]),
    ),
    (
        0xd7,
        Entry::Mandatory(&[
            reg!(opv!(PmovmskbR32Mm PmovmskbR32Mm PmovmskbR64Mm, GY, NQ)),
            reg!(opv!(PmovmskbR32Xmm PmovmskbR32Xmm PmovmskbR64Xmm, GY, UX)),
            INV,
            INV,
        ]),
    ),
    (0xd8, mmx_sse!(PsubusbMmMmm64, PsubusbXmmXmmm128)),
    (0xd9, mmx_sse!(PsubuswMmMmm64, PsubuswXmmXmmm128)),
    (0xda, mmx_sse!(PminubMmMmm64, PminubXmmXmmm128)),
    (0xdb, mmx_sse!(PandMmMmm64, PandXmmXmmm128)),
    (0xdc, mmx_sse!(PaddusbMmMmm64, PaddusbXmmXmmm128)),
    (0xdd, mmx_sse!(PadduswMmMmm64, PadduswXmmXmmm128)),
    (0xde, mmx_sse!(PmaxubMmMmm64, PmaxubXmmXmmm128)),
    (0xdf, mmx_sse!(PandnMmMmm64, PandnXmmXmmm128)),
    (0xe0, mmx_sse!(PavgbMmMmm64, PavgbXmmXmmm128)),
    (0xe1, mmx_sse!(PsrawMmMmm64, PsrawXmmXmmm128)),
    (0xe2, mmx_sse!(PsradMmMmm64, PsradXmmXmmm128)),
    (0xe3, mmx_sse!(PavgwMmMmm64, PavgwXmmXmmm128)),
    (0xe4, mmx_sse!(PmulhuwMmMmm64, PmulhuwXmmXmmm128)),
    (0xe5, mmx_sse!(PmulhwMmMmm64, PmulhwXmmXmmm128)),
    (
        0xe6,
        Entry::Mandatory(&[
            INV,
            op!(Cvttpd2dqXmmXmmm128, VX, WX),
            op!(Cvtdq2pdXmmXmmm64, VX, WX),
            op!(Cvtpd2dqXmmXmmm128, VX, WX),
        ]),
    ),
    (0xe7, Entry::Mandatory(&[mem!(op!(MovntqM64Mm, M, PQ)), mem!(op!(MovntdqM128Xmm, M, VX)), INV, INV])),
    (0xe8, mmx_sse!(PsubsbMmMmm64, PsubsbXmmXmmm128)),
    (0xe9, mmx_sse!(PsubswMmMmm64, PsubswXmmXmmm128)),
    (0xea, mmx_sse!(PminswMmMmm64, PminswXmmXmmm128)),
    (0xeb, mmx_sse!(PorMmMmm64, PorXmmXmmm128)),
    (0xec, mmx_sse!(PaddsbMmMmm64, PaddsbXmmXmmm128)),
    (0xed, mmx_sse!(PaddswMmMmm64, PaddswXmmXmmm128)),
    (0xee, mmx_sse!(PmaxswMmMmm64, PmaxswXmmXmmm128)),
    (0xef, mmx_sse!(PxorMmMmm64, PxorXmmXmmm128)),
    (0xf0, Entry::Mandatory(&[INV, INV, INV, mem!(op!(LddquXmmM128, VX, M))])),
    (0xf1, mmx_sse!(PsllwMmMmm64, PsllwXmmXmmm128)),
    (0xf2, mmx_sse!(PslldMmMmm64, PslldXmmXmmm128)),
    (0xf3, mmx_sse!(PsllqMmMmm64, PsllqXmmXmmm128)),
    (0xf4, mmx_sse!(PmuludqMmMmm64, PmuludqXmmXmmm128)),
    (0xf5, mmx_sse!(PmaddwdMmMmm64, PmaddwdXmmXmmm128)),
    (0xf6, mmx_sse!(PsadbwMmMmm64, PsadbwXmmXmmm128)),
    (
        0xf7,
        Entry::Mandatory(&[reg!(op!(MaskmovqRdiMmMm, PQ, NQ)), reg!(op!(MaskmovdquRdiXmmXmm, VX, UX)), INV, INV]),
    ),
    (0xf8, mmx_sse!(PsubbMmMmm64, PsubbXmmXmmm128)),
    (0xf9, mmx_sse!(PsubwMmMmm64, PsubwXmmXmmm128)),
    (0xfa, mmx_sse!(PsubdMmMmm64, PsubdXmmXmmm128)),
    (0xfb, mmx_sse!(PsubqMmMmm64, PsubqXmmXmmm128)),
    (0xfc, mmx_sse!(PaddbMmMmm64, PaddbXmmXmmm128)),
    (0xfd, mmx_sse!(PaddwMmMmm64, PaddwXmmXmmm128)),
    (0xfe, mmx_sse!(PadddMmMmm64, PadddXmmXmmm128)),
    (0xff, opv!(Ud0R16Rm16 Ud0R32Rm32 Ud0R64Rm64, GV, EV)),
];
