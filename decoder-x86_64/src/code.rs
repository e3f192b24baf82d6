//! every instruction form the decoder knows, one variant per opcode and operand shape.

/// an instruction and the shape of its operands.
///
/// legacy variants are named after the mnemonic followed by the operands, so `AddRm32Imm8` is
/// `add r/m32, imm8`. VEX, EVEX and XOP forms carry their encoding as a prefix and the vector length
/// as a suffix, as in `EvexVaddpsZmm`. a second encoding of an existing form ends in `Alt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    /// not an instruction.
    Invalid,

    // one-byte opcodes
    AddRm8R8,
    AddRm16R16,
    AddRm32R32,
    AddRm64R64,
    AddR8Rm8,
    AddR16Rm16,
    AddR32Rm32,
    AddR64Rm64,
    AddAlImm8,
    AddAxImm16,
    AddEaxImm32,
    AddRaxImm32,
    OrRm8R8,
    OrRm16R16,
    OrRm32R32,
    OrRm64R64,
    OrR8Rm8,
    OrR16Rm16,
    OrR32Rm32,
    OrR64Rm64,
    OrAlImm8,
    OrAxImm16,
    OrEaxImm32,
    OrRaxImm32,
    AdcRm8R8,
    AdcRm16R16,
    AdcRm32R32,
    AdcRm64R64,
    AdcR8Rm8,
    AdcR16Rm16,
    AdcR32Rm32,
    AdcR64Rm64,
    AdcAlImm8,
    AdcAxImm16,
    AdcEaxImm32,
    AdcRaxImm32,
    SbbRm8R8,
    SbbRm16R16,
    SbbRm32R32,
    SbbRm64R64,
    SbbR8Rm8,
    SbbR16Rm16,
    SbbR32Rm32,
    SbbR64Rm64,
    SbbAlImm8,
    SbbAxImm16,
    SbbEaxImm32,
    SbbRaxImm32,
    AndRm8R8,
    AndRm16R16,
    AndRm32R32,
    AndRm64R64,
    AndR8Rm8,
    AndR16Rm16,
    AndR32Rm32,
    AndR64Rm64,
    AndAlImm8,
    AndAxImm16,
    AndEaxImm32,
    AndRaxImm32,
    SubRm8R8,
    SubRm16R16,
    SubRm32R32,
    SubRm64R64,
    SubR8Rm8,
    SubR16Rm16,
    SubR32Rm32,
    SubR64Rm64,
    SubAlImm8,
    SubAxImm16,
    SubEaxImm32,
    SubRaxImm32,
    XorRm8R8,
    XorRm16R16,
    XorRm32R32,
    XorRm64R64,
    XorR8Rm8,
    XorR16Rm16,
    XorR32Rm32,
    XorR64Rm64,
    XorAlImm8,
    XorAxImm16,
    XorEaxImm32,
    XorRaxImm32,
    CmpRm8R8,
    CmpRm16R16,
    CmpRm32R32,
    CmpRm64R64,
    CmpR8Rm8,
    CmpR16Rm16,
    CmpR32Rm32,
    CmpR64Rm64,
    CmpAlImm8,
    CmpAxImm16,
    CmpEaxImm32,
    CmpRaxImm32,
    AddRm8Imm8,
    OrRm8Imm8,
    AdcRm8Imm8,
    SbbRm8Imm8,
    AndRm8Imm8,
    SubRm8Imm8,
    XorRm8Imm8,
    CmpRm8Imm8,
    AddRm16Imm16,
    AddRm32Imm32,
    AddRm64Imm32,
    OrRm16Imm16,
    OrRm32Imm32,
    OrRm64Imm32,
    AdcRm16Imm16,
    AdcRm32Imm32,
    AdcRm64Imm32,
    SbbRm16Imm16,
    SbbRm32Imm32,
    SbbRm64Imm32,
    AndRm16Imm16,
    AndRm32Imm32,
    AndRm64Imm32,
    SubRm16Imm16,
    SubRm32Imm32,
    SubRm64Imm32,
    XorRm16Imm16,
    XorRm32Imm32,
    XorRm64Imm32,
    CmpRm16Imm16,
    CmpRm32Imm32,
    CmpRm64Imm32,
    AddRm8Imm8Alt,
    OrRm8Imm8Alt,
    AdcRm8Imm8Alt,
    SbbRm8Imm8Alt,
    AndRm8Imm8Alt,
    SubRm8Imm8Alt,
    XorRm8Imm8Alt,
    CmpRm8Imm8Alt,
    AddRm16Imm8,
    AddRm32Imm8,
    AddRm64Imm8,
    OrRm16Imm8,
    OrRm32Imm8,
    OrRm64Imm8,
    AdcRm16Imm8,
    AdcRm32Imm8,
    AdcRm64Imm8,
    SbbRm16Imm8,
    SbbRm32Imm8,
    SbbRm64Imm8,
    AndRm16Imm8,
    AndRm32Imm8,
    AndRm64Imm8,
    SubRm16Imm8,
    SubRm32Imm8,
    SubRm64Imm8,
    XorRm16Imm8,
    XorRm32Imm8,
    XorRm64Imm8,
    CmpRm16Imm8,
    CmpRm32Imm8,
    CmpRm64Imm8,
    RolRm8Imm8,
    RorRm8Imm8,
    RclRm8Imm8,
    RcrRm8Imm8,
    ShlRm8Imm8,
    ShrRm8Imm8,
    SalRm8Imm8,
    SarRm8Imm8,
    RolRm16Imm8,
    RolRm32Imm8,
    RolRm64Imm8,
    RorRm16Imm8,
    RorRm32Imm8,
    RorRm64Imm8,
    RclRm16Imm8,
    RclRm32Imm8,
    RclRm64Imm8,
    RcrRm16Imm8,
    RcrRm32Imm8,
    RcrRm64Imm8,
    ShlRm16Imm8,
    ShlRm32Imm8,
    ShlRm64Imm8,
    ShrRm16Imm8,
    ShrRm32Imm8,
    ShrRm64Imm8,
    SalRm16Imm8,
    SalRm32Imm8,
    SalRm64Imm8,
    SarRm16Imm8,
    SarRm32Imm8,
    SarRm64Imm8,
    RolRm81,
    RorRm81,
    RclRm81,
    RcrRm81,
    ShlRm81,
    ShrRm81,
    SalRm81,
    SarRm81,
    RolRm161,
    RolRm321,
    RolRm641,
    RorRm161,
    RorRm321,
    RorRm641,
    RclRm161,
    RclRm321,
    RclRm641,
    RcrRm161,
    RcrRm321,
    RcrRm641,
    ShlRm161,
    ShlRm321,
    ShlRm641,
    ShrRm161,
    ShrRm321,
    ShrRm641,
    SalRm161,
    SalRm321,
    SalRm641,
    SarRm161,
    SarRm321,
    SarRm641,
    RolRm8Cl,
    RorRm8Cl,
    RclRm8Cl,
    RcrRm8Cl,
    ShlRm8Cl,
    ShrRm8Cl,
    SalRm8Cl,
    SarRm8Cl,
    RolRm16Cl,
    RolRm32Cl,
    RolRm64Cl,
    RorRm16Cl,
    RorRm32Cl,
    RorRm64Cl,
    RclRm16Cl,
    RclRm32Cl,
    RclRm64Cl,
    RcrRm16Cl,
    RcrRm32Cl,
    RcrRm64Cl,
    ShlRm16Cl,
    ShlRm32Cl,
    ShlRm64Cl,
    ShrRm16Cl,
    ShrRm32Cl,
    ShrRm64Cl,
    SalRm16Cl,
    SalRm32Cl,
    SalRm64Cl,
    SarRm16Cl,
    SarRm32Cl,
    SarRm64Cl,
    TestRm8Imm8,
    TestRm8Imm8Alt,
    NotRm8,
    NegRm8,
    MulRm8,
    ImulRm8,
    DivRm8,
    IdivRm8,
    TestRm16Imm16,
    TestRm32Imm32,
    TestRm64Imm32,
    TestRm16Imm16Alt,
    TestRm32Imm32Alt,
    TestRm64Imm32Alt,
    NotRm16,
    NotRm32,
    NotRm64,
    NegRm16,
    NegRm32,
    NegRm64,
    MulRm16,
    MulRm32,
    MulRm64,
    ImulRm16,
    ImulRm32,
    ImulRm64,
    DivRm16,
    DivRm32,
    DivRm64,
    IdivRm16,
    IdivRm32,
    IdivRm64,
    IncRm8,
    DecRm8,
    IncRm16,
    IncRm32,
    IncRm64,
    DecRm16,
    DecRm32,
    DecRm64,
    CallRm16,
    CallRm32,
    CallRm64,
    CallfM1616,
    CallfM1632,
    CallfM1664,
    JmpRm16,
    JmpRm32,
    JmpRm64,
    JmpfM1616,
    JmpfM1632,
    JmpfM1664,
    PushRm16,
    PushRm32,
    PushRm64,
    PopRm16,
    PopRm32,
    PopRm64,
    XabortImm8,
    XbeginRel16,
    XbeginRel32,
    MovRm8Imm8,
    MovRm16Imm16,
    MovRm32Imm32,
    MovRm64Imm32,
    Nop,
    Pause,
    PushwEs,
    PushdEs,
    PopwEs,
    PopdEs,
    PushwCs,
    PushdCs,
    PushwSs,
    PushdSs,
    PopwSs,
    PopdSs,
    PushwDs,
    PushdDs,
    PopwDs,
    PopdDs,
    Daa,
    Das,
    Aaa,
    Aas,
    IncR16,
    IncR32,
    DecR16,
    DecR32,
    PushR16,
    PushR32,
    PushR64,
    PopR16,
    PopR32,
    PopR64,
    Pushaw,
    Pushad,
    Popaw,
    Popad,
    BoundR16M1616,
    BoundR32M3232,
    ArplRm16R16,
    MovsxdR16Rm32,
    MovsxdR32Rm32,
    MovsxdR64Rm32,
    PushImm16,
    PushdImm32,
    PushqImm32,
    ImulR16Rm16Imm16,
    ImulR32Rm32Imm32,
    ImulR64Rm64Imm32,
    PushImm8,
    PushdImm8,
    PushqImm8,
    ImulR16Rm16Imm8,
    ImulR32Rm32Imm8,
    ImulR64Rm64Imm8,
    InsbM8Dx,
    InswM16Dx,
    InsdM32Dx,
    OutsbDxM8,
    OutswDxM16,
    OutsdDxM32,
    JoRel8,
    JnoRel8,
    JbRel8,
    JaeRel8,
    JeRel8,
    JneRel8,
    JbeRel8,
    JaRel8,
    JsRel8,
    JnsRel8,
    JpRel8,
    JnpRel8,
    JlRel8,
    JgeRel8,
    JleRel8,
    JgRel8,
    TestRm8R8,
    TestRm16R16,
    TestRm32R32,
    TestRm64R64,
    XchgRm8R8,
    XchgRm16R16,
    XchgRm32R32,
    XchgRm64R64,
    MovRm8R8,
    MovRm16R16,
    MovRm32R32,
    MovRm64R64,
    MovR8Rm8,
    MovR16Rm16,
    MovR32Rm32,
    MovR64Rm64,
    MovRm16Sreg,
    MovR32m16Sreg,
    MovR64m16Sreg,
    LeaR16M,
    LeaR32M,
    LeaR64M,
    MovSregRm16,
    MovSregR32m16,
    MovSregR64m16,
    XchgR16Ax,
    XchgR32Eax,
    XchgR64Rax,
    Cbw,
    Cwde,
    Cdqe,
    Cwd,
    Cdq,
    Cqo,
    CallfPtr1616,
    CallfPtr1632,
    Wait,
    Pushfw,
    Pushfd,
    Pushfq,
    Popfw,
    Popfd,
    Popfq,
    Sahf,
    Lahf,
    MovAlMoffs8,
    MovAxMoffs16,
    MovEaxMoffs32,
    MovRaxMoffs64,
    MovMoffs8Al,
    MovMoffs16Ax,
    MovMoffs32Eax,
    MovMoffs64Rax,
    MovsbM8M8,
    MovswM16M16,
    MovsdM32M32,
    MovsqM64M64,
    CmpsbM8M8,
    CmpswM16M16,
    CmpsdM32M32,
    CmpsqM64M64,
    TestAlImm8,
    TestAxImm16,
    TestEaxImm32,
    TestRaxImm32,
    StosbM8Al,
    StoswM16Ax,
    StosdM32Eax,
    StosqM64Rax,
    LodsbAlM8,
    LodswAxM16,
    LodsdEaxM32,
    LodsqRaxM64,
    ScasbAlM8,
    ScaswAxM16,
    ScasdEaxM32,
    ScasqRaxM64,
    MovR8Imm8,
    MovR16Imm16,
    MovR32Imm32,
    MovR64Imm64,
    RetnwImm16,
    RetndImm16,
    RetnqImm16,
    Retnw,
    Retnd,
    Retnq,
    LesR16M1616,
    LesR32M1632,
    LdsR16M1616,
    LdsR32M1632,
    EnterwImm16Imm8,
    EnterdImm16Imm8,
    EnterqImm16Imm8,
    Leavew,
    Leaved,
    Leaveq,
    RetfwImm16,
    RetfdImm16,
    RetfqImm16,
    Retfw,
    Retfd,
    Retfq,
    Int3,
    IntImm8,
    Into,
    Iretw,
    Iretd,
    Iretq,
    AamImm8,
    AadImm8,
    Salc,
    XlatM8,
    LoopneRel8Cx,
    LoopneRel8Ecx,
    LoopneRel8Rcx,
    LoopeRel8Cx,
    LoopeRel8Ecx,
    LoopeRel8Rcx,
    LoopRel8Cx,
    LoopRel8Ecx,
    LoopRel8Rcx,
    JcxzRel8,
    JecxzRel8,
    JrcxzRel8,
    InAlImm8,
    InAxImm8,
    InEaxImm8,
    OutImm8Al,
    OutImm8Ax,
    OutImm8Eax,
    CallRel16,
    CallRel32,
    CallRel64,
    JmpRel16,
    JmpRel32,
    JmpRel64,
    JmpfPtr1616,
    JmpfPtr1632,
    JmpRel8,
    InAlDx,
    InAxDx,
    InEaxDx,
    OutDxAl,
    OutDxAx,
    OutDxEax,
    Int1,
    Hlt,
    Cmc,
    Clc,
    Stc,
    Cli,
    Sti,
    Cld,
    Std,

    // x87
    FaddM32fp,
    FmulM32fp,
    FcomM32fp,
    FcompM32fp,
    FsubM32fp,
    FsubrM32fp,
    FdivM32fp,
    FdivrM32fp,
    FaddSt0Sti,
    FmulSt0Sti,
    FcomSt0Sti,
    FcompSt0Sti,
    FsubSt0Sti,
    FsubrSt0Sti,
    FdivSt0Sti,
    FdivrSt0Sti,
    FldM32fp,
    FstM32fp,
    FstpM32fp,
    FldenvM,
    FldcwM2byte,
    FnstenvM,
    FnstcwM2byte,
    FldSt0Sti,
    FxchSt0Sti,
    Fnop,
    Fchs,
    Fabs,
    Ftst,
    Fxam,
    Fld1,
    Fldl2t,
    Fldl2e,
    Fldpi,
    Fldlg2,
    Fldln2,
    Fldz,
    F2xm1,
    Fyl2x,
    Fptan,
    Fpatan,
    Fxtract,
    Fprem1,
    Fdecstp,
    Fincstp,
    Fprem,
    Fyl2xp1,
    Fsqrt,
    Fsincos,
    Frndint,
    Fscale,
    Fsin,
    Fcos,
    FiaddM32int,
    FimulM32int,
    FicomM32int,
    FicompM32int,
    FisubM32int,
    FisubrM32int,
    FidivM32int,
    FidivrM32int,
    FcmovbSt0Sti,
    FcmoveSt0Sti,
    FcmovbeSt0Sti,
    FcmovuSt0Sti,
    Fucompp,
    FildM32int,
    FisttpM32int,
    FistM32int,
    FistpM32int,
    FldM80fp,
    FstpM80fp,
    FcmovnbSt0Sti,
    FcmovneSt0Sti,
    FcmovnbeSt0Sti,
    FcmovnuSt0Sti,
    Fneni,
    Fndisi,
    Fnclex,
    Fninit,
    Fnsetpm,
    FucomiSt0Sti,
    FcomiSt0Sti,
    FaddM64fp,
    FmulM64fp,
    FcomM64fp,
    FcompM64fp,
    FsubM64fp,
    FsubrM64fp,
    FdivM64fp,
    FdivrM64fp,
    FaddStiSt0,
    FmulStiSt0,
    FsubrStiSt0,
    FsubStiSt0,
    FdivrStiSt0,
    FdivStiSt0,
    FldM64fp,
    FisttpM64int,
    FstM64fp,
    FstpM64fp,
    FrstorM,
    FnsaveM,
    FnstswM2byte,
    FfreeSti,
    FstSti,
    FstpSti,
    FucomSt0Sti,
    FucompSt0Sti,
    FiaddM16int,
    FimulM16int,
    FicomM16int,
    FicompM16int,
    FisubM16int,
    FisubrM16int,
    FidivM16int,
    FidivrM16int,
    FaddpStiSt0,
    FmulpStiSt0,
    Fcompp,
    FsubrpStiSt0,
    FsubpStiSt0,
    FdivrpStiSt0,
    FdivpStiSt0,
    FildM16int,
    FisttpM16int,
    FistM16int,
    FistpM16int,
    FbldM80bcd,
    FildM64int,
    FbstpM80bcd,
    FistpM64int,
    FfreepSti,
    FnstswAx,
    FucomipSt0Sti,
    FcomipSt0Sti,

    // 0F
    SldtRm16,
    SldtR32m16,
    SldtR64m16,
    StrRm16,
    StrR32m16,
    StrR64m16,
    LldtRm16,
    LtrRm16,
    VerrRm16,
    VerwRm16,
    JmpeRm16,
    JmpeRm32,
    SgdtM,
    SidtM,
    LgdtM,
    LidtM,
    SmswRm16,
    SmswR32m16,
    SmswR64m16,
    LmswRm16,
    InvlpgM,
    Enclv,
    Vmcall,
    Vmlaunch,
    Vmresume,
    Vmxoff,
    Monitor,
    Mwait,
    Clac,
    Stac,
    Encls,
    Xgetbv,
    Xsetbv,
    Vmfunc,
    Xend,
    Xtest,
    Enclu,
    Vmrun,
    Vmmcall,
    Vmload,
    Vmsave,
    Stgi,
    Clgi,
    Skinit,
    Invlpga,
    Serialize,
    Rdpkru,
    Wrpkru,
    Swapgs,
    Rdtscp,
    Monitorx,
    Mwaitx,
    Clzero,
    PrefetchntaM8,
    Prefetcht0M8,
    Prefetcht1M8,
    Prefetcht2M8,
    Reservednop0F18Rm16R16,
    Reservednop0F18Rm32R32,
    Reservednop0F18Rm64R64,
    PrefetchM8,
    PrefetchwM8,
    Prefetchwt1M8,
    Reservednop0F0DRm16R16,
    Reservednop0F0DRm32R32,
    Reservednop0F0DRm64R64,
    Reservednop0F1ERm16R16,
    Reservednop0F1ERm32R32,
    Reservednop0F1ERm64R64,
    Endbr64,
    Endbr32,
    NopRm16,
    NopRm32,
    NopRm64,
    Reservednop0F1FRm16R16,
    Reservednop0F1FRm32R32,
    Reservednop0F1FRm64R64,
    BndldxBndMib,
    BndmovBndBndm128,
    BndclBndRm32,
    BndclBndRm64,
    BndcuBndRm32,
    BndcuBndRm64,
    BndstxMibBnd,
    BndmovBndm128Bnd,
    BndmkBndM32,
    BndmkBndM64,
    BndcnBndRm32,
    BndcnBndRm64,
    UmovRm8R8,
    MovupsXmmXmmm128,
    UmovRm16R16,
    UmovRm32R32,
    MovupsXmmm128Xmm,
    UmovR8Rm8,
    MovhlpsXmmXmm,
    MovlpsXmmM64,
    UmovR16Rm16,
    UmovR32Rm32,
    MovlpsM64Xmm,
    PsrlwMmImm8,
    PsrlwXmmImm8,
    PsrawMmImm8,
    PsrawXmmImm8,
    PsllwMmImm8,
    PsllwXmmImm8,
    PsrldMmImm8,
    PsrldXmmImm8,
    PsradMmImm8,
    PsradXmmImm8,
    PslldMmImm8,
    PslldXmmImm8,
    PsrlqMmImm8,
    PsrlqXmmImm8,
    PsrldqXmmImm8,
    PsllqMmImm8,
    PsllqXmmImm8,
    PslldqXmmImm8,
    ExtrqXmmImm8Imm8,
    FxsaveM,
    Fxsave64M,
    FxrstorM,
    Fxrstor64M,
    LdmxcsrM32,
    StmxcsrM32,
    XsaveM,
    Xsave64M,
    XrstorM,
    Xrstor64M,
    XsaveoptM,
    Xsaveopt64M,
    ClwbM8,
    ClflushM8,
    ClflushoptM8,
    RdfsbaseR32,
    RdfsbaseR64,
    RdgsbaseR32,
    RdgsbaseR64,
    WrfsbaseR32,
    WrfsbaseR64,
    WrgsbaseR32,
    WrgsbaseR64,
    Lfence,
    Mfence,
    Sfence,
    Pcommit,
    BtRm16Imm8,
    BtRm32Imm8,
    BtRm64Imm8,
    BtsRm16Imm8,
    BtsRm32Imm8,
    BtsRm64Imm8,
    BtrRm16Imm8,
    BtrRm32Imm8,
    BtrRm64Imm8,
    BtcRm16Imm8,
    BtcRm32Imm8,
    BtcRm64Imm8,
    Cmpxchg8bM64,
    Cmpxchg16bM128,
    XrstorsM,
    Xrstors64M,
    XsavecM,
    Xsavec64M,
    XsavesM,
    Xsaves64M,
    VmptrldM64,
    VmclearM64,
    VmxonM64,
    VmptrstM64,
    RdrandR16,
    RdrandR32,
    RdrandR64,
    RdseedR16,
    RdseedR32,
    RdseedR64,
    RdpidR32,
    RdpidR64,
    BsfR16Rm16,
    BsfR32Rm32,
    BsfR64Rm64,
    BsrR16Rm16,
    BsrR32Rm32,
    BsrR64Rm64,
    LarR16Rm16,
    LarR32R32m16,
    LarR64R64m16,
    LslR16Rm16,
    LslR32R32m16,
    LslR64R64m16,
    Loadall286,
    Syscall,
    Clts,
    Loadall386,
    Sysretd,
    Sysretq,
    Invd,
    Wbinvd,
    Wbnoinvd,
    Ud2,
    Femms,
    MovupdXmmXmmm128,
    MovssXmmXmmm32,
    MovsdXmmXmmm64,
    MovupdXmmm128Xmm,
    MovssXmmm32Xmm,
    MovsdXmmm64Xmm,
    MovlpdXmmM64,
    MovsldupXmmXmmm128,
    MovddupXmmXmmm64,
    MovlpdM64Xmm,
    UnpcklpsXmmXmmm128,
    UnpcklpdXmmXmmm128,
    UnpckhpsXmmXmmm128,
    UnpckhpdXmmXmmm128,
    MovlhpsXmmXmm,
    MovhpsXmmM64,
    MovhpdXmmM64,
    MovshdupXmmXmmm128,
    MovhpsM64Xmm,
    MovhpdM64Xmm,
    Reservednop0F19Rm16R16,
    Reservednop0F19Rm32R32,
    Reservednop0F19Rm64R64,
    Reservednop0F1ARm16R16,
    Reservednop0F1ARm32R32,
    Reservednop0F1ARm64R64,
    Reservednop0F1BRm16R16,
    Reservednop0F1BRm32R32,
    Reservednop0F1BRm64R64,
    Reservednop0F1CRm16R16,
    Reservednop0F1CRm32R32,
    Reservednop0F1CRm64R64,
    Reservednop0F1DRm16R16,
    Reservednop0F1DRm32R32,
    Reservednop0F1DRm64R64,
    MovR32Cr,
    MovR64Cr,
    MovR32Dr,
    MovR64Dr,
    MovCrR32,
    MovCrR64,
    MovDrR32,
    MovDrR64,
    MovR32Tr,
    MovTrR32,
    MovapsXmmXmmm128,
    MovapdXmmXmmm128,
    MovapsXmmm128Xmm,
    MovapdXmmm128Xmm,
    Cvtpi2psXmmMmm64,
    Cvtpi2pdXmmMmm64,
    Cvtsi2ssXmmRm32,
    Cvtsi2ssXmmRm64,
    Cvtsi2sdXmmRm32,
    Cvtsi2sdXmmRm64,
    MovntpsM128Xmm,
    MovntpdM128Xmm,
    Cvttps2piMmXmmm64,
    Cvttpd2piMmXmmm128,
    Cvttss2siR32Xmmm32,
    Cvttss2siR64Xmmm32,
    Cvttsd2siR32Xmmm64,
    Cvttsd2siR64Xmmm64,
    Cvtps2piMmXmmm64,
    Cvtpd2piMmXmmm128,
    Cvtss2siR32Xmmm32,
    Cvtss2siR64Xmmm32,
    Cvtsd2siR32Xmmm64,
    Cvtsd2siR64Xmmm64,
    UcomissXmmXmmm32,
    UcomisdXmmXmmm64,
    ComissXmmXmmm32,
    ComisdXmmXmmm64,
    Wrmsr,
    Rdtsc,
    Rdmsr,
    Rdpmc,
    Sysenter,
    Sysexitd,
    Sysexitq,
    Getsec,
    CmovoR16Rm16,
    CmovoR32Rm32,
    CmovoR64Rm64,
    CmovnoR16Rm16,
    CmovnoR32Rm32,
    CmovnoR64Rm64,
    CmovbR16Rm16,
    CmovbR32Rm32,
    CmovbR64Rm64,
    CmovaeR16Rm16,
    CmovaeR32Rm32,
    CmovaeR64Rm64,
    CmoveR16Rm16,
    CmoveR32Rm32,
    CmoveR64Rm64,
    CmovneR16Rm16,
    CmovneR32Rm32,
    CmovneR64Rm64,
    CmovbeR16Rm16,
    CmovbeR32Rm32,
    CmovbeR64Rm64,
    CmovaR16Rm16,
    CmovaR32Rm32,
    CmovaR64Rm64,
    CmovsR16Rm16,
    CmovsR32Rm32,
    CmovsR64Rm64,
    CmovnsR16Rm16,
    CmovnsR32Rm32,
    CmovnsR64Rm64,
    CmovpR16Rm16,
    CmovpR32Rm32,
    CmovpR64Rm64,
    CmovnpR16Rm16,
    CmovnpR32Rm32,
    CmovnpR64Rm64,
    CmovlR16Rm16,
    CmovlR32Rm32,
    CmovlR64Rm64,
    CmovgeR16Rm16,
    CmovgeR32Rm32,
    CmovgeR64Rm64,
    CmovleR16Rm16,
    CmovleR32Rm32,
    CmovleR64Rm64,
    CmovgR16Rm16,
    CmovgR32Rm32,
    CmovgR64Rm64,
    MovmskpsR32Xmm,
    MovmskpsR64Xmm,
    MovmskpdR32Xmm,
    MovmskpdR64Xmm,
    SqrtpsXmmXmmm128,
    SqrtpdXmmXmmm128,
    SqrtssXmmXmmm32,
    SqrtsdXmmXmmm64,
    RsqrtpsXmmXmmm128,
    RsqrtssXmmXmmm32,
    RcppsXmmXmmm128,
    RcpssXmmXmmm32,
    AndpsXmmXmmm128,
    AndpdXmmXmmm128,
    AndnpsXmmXmmm128,
    AndnpdXmmXmmm128,
    OrpsXmmXmmm128,
    OrpdXmmXmmm128,
    XorpsXmmXmmm128,
    XorpdXmmXmmm128,
    AddpsXmmXmmm128,
    AddpdXmmXmmm128,
    AddssXmmXmmm32,
    AddsdXmmXmmm64,
    MulpsXmmXmmm128,
    MulpdXmmXmmm128,
    MulssXmmXmmm32,
    MulsdXmmXmmm64,
    Cvtps2pdXmmXmmm64,
    Cvtpd2psXmmXmmm128,
    Cvtss2sdXmmXmmm32,
    Cvtsd2ssXmmXmmm64,
    Cvtdq2psXmmXmmm128,
    Cvtps2dqXmmXmmm128,
    Cvttps2dqXmmXmmm128,
    SubpsXmmXmmm128,
    SubpdXmmXmmm128,
    SubssXmmXmmm32,
    SubsdXmmXmmm64,
    MinpsXmmXmmm128,
    MinpdXmmXmmm128,
    MinssXmmXmmm32,
    MinsdXmmXmmm64,
    DivpsXmmXmmm128,
    DivpdXmmXmmm128,
    DivssXmmXmmm32,
    DivsdXmmXmmm64,
    MaxpsXmmXmmm128,
    MaxpdXmmXmmm128,
    MaxssXmmXmmm32,
    MaxsdXmmXmmm64,
    PunpcklbwMmMmm32,
    PunpcklbwXmmXmmm128,
    PunpcklwdMmMmm32,
    PunpcklwdXmmXmmm128,
    PunpckldqMmMmm32,
    PunpckldqXmmXmmm128,
    PacksswbMmMmm64,
    PacksswbXmmXmmm128,
    PcmpgtbMmMmm64,
    PcmpgtbXmmXmmm128,
    PcmpgtwMmMmm64,
    PcmpgtwXmmXmmm128,
    PcmpgtdMmMmm64,
    PcmpgtdXmmXmmm128,
    PackuswbMmMmm64,
    PackuswbXmmXmmm128,
    PunpckhbwMmMmm64,
    PunpckhbwXmmXmmm128,
    PunpckhwdMmMmm64,
    PunpckhwdXmmXmmm128,
    PunpckhdqMmMmm64,
    PunpckhdqXmmXmmm128,
    PackssdwMmMmm64,
    PackssdwXmmXmmm128,
    PunpcklqdqXmmXmmm128,
    PunpckhqdqXmmXmmm128,
    MovdMmRm32,
    MovqMmRm64,
    MovdXmmRm32,
    MovqXmmRm64,
    MovqMmMmm64,
    MovdqaXmmXmmm128,
    MovdquXmmXmmm128,
    PshufwMmMmm64Imm8,
    PshufdXmmXmmm128Imm8,
    PshufhwXmmXmmm128Imm8,
    PshuflwXmmXmmm128Imm8,
    PcmpeqbMmMmm64,
    PcmpeqbXmmXmmm128,
    PcmpeqwMmMmm64,
    PcmpeqwXmmXmmm128,
    PcmpeqdMmMmm64,
    PcmpeqdXmmXmmm128,
    Emms,
    VmreadRm32R32,
    VmreadRm64R64,
    InsertqXmmXmmImm8Imm8,
    VmwriteR32Rm32,
    VmwriteR64Rm64,
    ExtrqXmmXmm,
    InsertqXmmXmm,
    HaddpdXmmXmmm128,
    HaddpsXmmXmmm128,
    HsubpdXmmXmmm128,
    HsubpsXmmXmmm128,
    MovdRm32Mm,
    MovqRm64Mm,
    MovdRm32Xmm,
    MovqRm64Xmm,
    MovqXmmXmmm64,
    MovqMmm64Mm,
    MovdqaXmmm128Xmm,
    MovdquXmmm128Xmm,
    JoRel16,
    JoRel32,
    JoRel64,
    JnoRel16,
    JnoRel32,
    JnoRel64,
    JbRel16,
    JbRel32,
    JbRel64,
    JaeRel16,
    JaeRel32,
    JaeRel64,
    JeRel16,
    JeRel32,
    JeRel64,
    JneRel16,
    JneRel32,
    JneRel64,
    JbeRel16,
    JbeRel32,
    JbeRel64,
    JaRel16,
    JaRel32,
    JaRel64,
    JsRel16,
    JsRel32,
    JsRel64,
    JnsRel16,
    JnsRel32,
    JnsRel64,
    JpRel16,
    JpRel32,
    JpRel64,
    JnpRel16,
    JnpRel32,
    JnpRel64,
    JlRel16,
    JlRel32,
    JlRel64,
    JgeRel16,
    JgeRel32,
    JgeRel64,
    JleRel16,
    JleRel32,
    JleRel64,
    JgRel16,
    JgRel32,
    JgRel64,
    SetoRm8,
    SetnoRm8,
    SetbRm8,
    SetaeRm8,
    SeteRm8,
    SetneRm8,
    SetbeRm8,
    SetaRm8,
    SetsRm8,
    SetnsRm8,
    SetpRm8,
    SetnpRm8,
    SetlRm8,
    SetgeRm8,
    SetleRm8,
    SetgRm8,
    PushwFs,
    PushdFs,
    PushqFs,
    PopwFs,
    PopdFs,
    PopqFs,
    Cpuid,
    BtRm16R16,
    BtRm32R32,
    BtRm64R64,
    ShldRm16R16Imm8,
    ShldRm32R32Imm8,
    ShldRm64R64Imm8,
    ShldRm16R16Cl,
    ShldRm32R32Cl,
    ShldRm64R64Cl,
    XbtsR16Rm16,
    XbtsR32Rm32,
    Cmpxchg486Rm8R8,
    IbtsRm16R16,
    IbtsRm32R32,
    Cmpxchg486Rm16R16,
    Cmpxchg486Rm32R32,
    PushwGs,
    PushdGs,
    PushqGs,
    PopwGs,
    PopdGs,
    PopqGs,
    Rsm,
    BtsRm16R16,
    BtsRm32R32,
    BtsRm64R64,
    ShrdRm16R16Imm8,
    ShrdRm32R32Imm8,
    ShrdRm64R64Imm8,
    ShrdRm16R16Cl,
    ShrdRm32R32Cl,
    ShrdRm64R64Cl,
    ImulR16Rm16,
    ImulR32Rm32,
    ImulR64Rm64,
    CmpxchgRm8R8,
    CmpxchgRm16R16,
    CmpxchgRm32R32,
    CmpxchgRm64R64,
    LssR16M1616,
    LssR32M1632,
    LssR64M1664,
    BtrRm16R16,
    BtrRm32R32,
    BtrRm64R64,
    LfsR16M1616,
    LfsR32M1632,
    LfsR64M1664,
    LgsR16M1616,
    LgsR32M1632,
    LgsR64M1664,
    MovzxR16Rm8,
    MovzxR32Rm8,
    MovzxR64Rm8,
    MovzxR16Rm16,
    MovzxR32Rm16,
    MovzxR64Rm16,
    PopcntR16Rm16,
    PopcntR32Rm32,
    PopcntR64Rm64,
    JmpeDisp16,
    JmpeDisp32,
    Ud1R16Rm16,
    Ud1R32Rm32,
    Ud1R64Rm64,
    BtcRm16R16,
    BtcRm32R32,
    BtcRm64R64,
    TzcntR16Rm16,
    TzcntR32Rm32,
    TzcntR64Rm64,
    LzcntR16Rm16,
    LzcntR32Rm32,
    LzcntR64Rm64,
    MovsxR16Rm8,
    MovsxR32Rm8,
    MovsxR64Rm8,
    MovsxR16Rm16,
    MovsxR32Rm16,
    MovsxR64Rm16,
    XaddRm8R8,
    XaddRm16R16,
    XaddRm32R32,
    XaddRm64R64,
    CmppsXmmXmmm128Imm8,
    CmppdXmmXmmm128Imm8,
    CmpssXmmXmmm32Imm8,
    CmpsdXmmXmmm64Imm8,
    MovntiM32R32,
    MovntiM64R64,
    PinsrwMmR32m16Imm8,
    PinsrwMmR64m16Imm8,
    PinsrwXmmR32m16Imm8,
    PinsrwXmmR64m16Imm8,
    PextrwR32MmImm8,
    PextrwR64MmImm8,
    PextrwR32XmmImm8,
    PextrwR64XmmImm8,
    ShufpsXmmXmmm128Imm8,
    ShufpdXmmXmmm128Imm8,
    BswapR16,
    BswapR32,
    BswapR64,
    AddsubpdXmmXmmm128,
    AddsubpsXmmXmmm128,
    PsrlwMmMmm64,
    PsrlwXmmXmmm128,
    PsrldMmMmm64,
    PsrldXmmXmmm128,
    PsrlqMmMmm64,
    PsrlqXmmXmmm128,
    PaddqMmMmm64,
    PaddqXmmXmmm128,
    PmullwMmMmm64,
    PmullwXmmXmmm128,
    MovqXmmm64Xmm,
    Movq2dqXmmMm,
    Movdq2qMmXmm,
    PmovmskbR32Mm,
    PmovmskbR64Mm,
    PmovmskbR32Xmm,
    PmovmskbR64Xmm,
    PsubusbMmMmm64,
    PsubusbXmmXmmm128,
    PsubuswMmMmm64,
    PsubuswXmmXmmm128,
    PminubMmMmm64,
    PminubXmmXmmm128,
    PandMmMmm64,
    PandXmmXmmm128,
    PaddusbMmMmm64,
    PaddusbXmmXmmm128,
    PadduswMmMmm64,
    PadduswXmmXmmm128,
    PmaxubMmMmm64,
    PmaxubXmmXmmm128,
    PandnMmMmm64,
    PandnXmmXmmm128,
    PavgbMmMmm64,
    PavgbXmmXmmm128,
    PsrawMmMmm64,
    PsrawXmmXmmm128,
    PsradMmMmm64,
    PsradXmmXmmm128,
    PavgwMmMmm64,
    PavgwXmmXmmm128,
    PmulhuwMmMmm64,
    PmulhuwXmmXmmm128,
    PmulhwMmMmm64,
    PmulhwXmmXmmm128,
    Cvttpd2dqXmmXmmm128,
    Cvtdq2pdXmmXmmm64,
    Cvtpd2dqXmmXmmm128,
    MovntqM64Mm,
    MovntdqM128Xmm,
    PsubsbMmMmm64,
    PsubsbXmmXmmm128,
    PsubswMmMmm64,
    PsubswXmmXmmm128,
    PminswMmMmm64,
    PminswXmmXmmm128,
    PorMmMmm64,
    PorXmmXmmm128,
    PaddsbMmMmm64,
    PaddsbXmmXmmm128,
    PaddswMmMmm64,
    PaddswXmmXmmm128,
    PmaxswMmMmm64,
    PmaxswXmmXmmm128,
    PxorMmMmm64,
    PxorXmmXmmm128,
    LddquXmmM128,
    PsllwMmMmm64,
    PsllwXmmXmmm128,
    PslldMmMmm64,
    PslldXmmXmmm128,
    PsllqMmMmm64,
    PsllqXmmXmmm128,
    PmuludqMmMmm64,
    PmuludqXmmXmmm128,
    PmaddwdMmMmm64,
    PmaddwdXmmXmmm128,
    PsadbwMmMmm64,
    PsadbwXmmXmmm128,
    MaskmovqRdiMmMm,
    MaskmovdquRdiXmmXmm,
    PsubbMmMmm64,
    PsubbXmmXmmm128,
    PsubwMmMmm64,
    PsubwXmmXmmm128,
    PsubdMmMmm64,
    PsubdXmmXmmm128,
    PsubqMmMmm64,
    PsubqXmmXmmm128,
    PaddbMmMmm64,
    PaddbXmmXmmm128,
    PaddwMmMmm64,
    PaddwXmmXmmm128,
    PadddMmMmm64,
    PadddXmmXmmm128,
    Ud0R16Rm16,
    Ud0R32Rm32,
    Ud0R64Rm64,

    // 0F 38 and 0F 3A
    MovbeR16M16,
    MovbeR32M32,
    MovbeR64M64,
    MovbeM16R16,
    MovbeM32R32,
    MovbeM64R64,
    PshufbMmMmm64,
    PshufbXmmXmmm128,
    PhaddwMmMmm64,
    PhaddwXmmXmmm128,
    PhadddMmMmm64,
    PhadddXmmXmmm128,
    PhaddswMmMmm64,
    PhaddswXmmXmmm128,
    PmaddubswMmMmm64,
    PmaddubswXmmXmmm128,
    PhsubwMmMmm64,
    PhsubwXmmXmmm128,
    PhsubdMmMmm64,
    PhsubdXmmXmmm128,
    PhsubswMmMmm64,
    PhsubswXmmXmmm128,
    PsignbMmMmm64,
    PsignbXmmXmmm128,
    PsignwMmMmm64,
    PsignwXmmXmmm128,
    PsigndMmMmm64,
    PsigndXmmXmmm128,
    PmulhrswMmMmm64,
    PmulhrswXmmXmmm128,
    PblendvbXmmXmmm128,
    BlendvpsXmmXmmm128,
    BlendvpdXmmXmmm128,
    PtestXmmXmmm128,
    PabsbMmMmm64,
    PabsbXmmXmmm128,
    PabswMmMmm64,
    PabswXmmXmmm128,
    PabsdMmMmm64,
    PabsdXmmXmmm128,
    PmovsxbwXmmXmmm64,
    PmovsxbdXmmXmmm32,
    PmovsxbqXmmXmmm16,
    PmovsxwdXmmXmmm64,
    PmovsxwqXmmXmmm32,
    PmovsxdqXmmXmmm64,
    PmuldqXmmXmmm128,
    PcmpeqqXmmXmmm128,
    MovntdqaXmmM128,
    PackusdwXmmXmmm128,
    PmovzxbwXmmXmmm64,
    PmovzxbdXmmXmmm32,
    PmovzxbqXmmXmmm16,
    PmovzxwdXmmXmmm64,
    PmovzxwqXmmXmmm32,
    PmovzxdqXmmXmmm64,
    PcmpgtqXmmXmmm128,
    PminsbXmmXmmm128,
    PminsdXmmXmmm128,
    PminuwXmmXmmm128,
    PminudXmmXmmm128,
    PmaxsbXmmXmmm128,
    PmaxsdXmmXmmm128,
    PmaxuwXmmXmmm128,
    PmaxudXmmXmmm128,
    PmulldXmmXmmm128,
    PhminposuwXmmXmmm128,
    InveptR32M128,
    InveptR64M128,
    InvvpidR32M128,
    InvvpidR64M128,
    InvpcidR32M128,
    InvpcidR64M128,
    Sha1nexteXmmXmmm128,
    Sha1msg1XmmXmmm128,
    Sha1msg2XmmXmmm128,
    Sha256rnds2XmmXmmm128,
    Sha256msg1XmmXmmm128,
    Sha256msg2XmmXmmm128,
    AesimcXmmXmmm128,
    AesencXmmXmmm128,
    AesenclastXmmXmmm128,
    AesdecXmmXmmm128,
    AesdeclastXmmXmmm128,
    Crc32R32Rm8,
    Crc32R64Rm8,
    Crc32R32Rm16,
    Crc32R32Rm32,
    Crc32R64Rm64,
    AdcxR32Rm32,
    AdcxR64Rm64,
    AdoxR32Rm32,
    AdoxR64Rm64,
    RoundpsXmmXmmm128Imm8,
    RoundpdXmmXmmm128Imm8,
    RoundssXmmXmmm32Imm8,
    RoundsdXmmXmmm64Imm8,
    BlendpsXmmXmmm128Imm8,
    BlendpdXmmXmmm128Imm8,
    PblendwXmmXmmm128Imm8,
    PalignrMmMmm64Imm8,
    PalignrXmmXmmm128Imm8,
    PextrbR32m8XmmImm8,
    PextrbR64m8XmmImm8,
    PextrwR32m16XmmImm8,
    PextrwR64m16XmmImm8,
    PextrdRm32XmmImm8,
    PextrqRm64XmmImm8,
    ExtractpsRm32XmmImm8,
    PinsrbXmmR32m8Imm8,
    PinsrbXmmR64m8Imm8,
    InsertpsXmmXmmm32Imm8,
    PinsrdXmmRm32Imm8,
    PinsrqXmmRm64Imm8,
    DppsXmmXmmm128Imm8,
    DppdXmmXmmm128Imm8,
    MpsadbwXmmXmmm128Imm8,
    PclmulqdqXmmXmmm128Imm8,
    PcmpestrmXmmXmmm128Imm8,
    PcmpestriXmmXmmm128Imm8,
    PcmpistrmXmmXmmm128Imm8,
    PcmpistriXmmXmmm128Imm8,
    Sha1rnds4XmmXmmm128Imm8,
    AeskeygenassistXmmXmmm128Imm8,

    // 3DNow!
    Pi2fwMmMmm64,
    Pi2fdMmMmm64,
    Pf2iwMmMmm64,
    Pf2idMmMmm64,
    PfrcpvMmMmm64,
    PfrsqrtvMmMmm64,
    PfnaccMmMmm64,
    PfpnaccMmMmm64,
    PfcmpgeMmMmm64,
    PfminMmMmm64,
    PfrcpMmMmm64,
    PfrsqrtMmMmm64,
    PfsubMmMmm64,
    PfaddMmMmm64,
    PfcmpgtMmMmm64,
    PfmaxMmMmm64,
    Pfrcpit1MmMmm64,
    Pfrsqit1MmMmm64,
    PfsubrMmMmm64,
    PfaccMmMmm64,
    PfcmpeqMmMmm64,
    PfmulMmMmm64,
    Pfrcpit2MmMmm64,
    PmulhrwMmMmm64,
    PswapdMmMmm64,
    PavgusbMmMmm64,

    // VEX
    VexKmovwKrKm16,
    VexKmovqKrKm64,
    VexKmovbKrKm8,
    VexKmovdKrKm32,
    VexKmovwM16Kr,
    VexKmovqM64Kr,
    VexKmovbM8Kr,
    VexKmovdM32Kr,
    VexKmovwKrR32,
    VexKmovbKrR32,
    VexKmovdKrR32,
    VexKmovqKrR64,
    VexKmovwR32Kr,
    VexKmovbR32Kr,
    VexKmovdR32Kr,
    VexKmovqR64Kr,
    VexVpsrlwXmmXmmImm8,
    VexVpsrlwYmmYmmImm8,
    VexVpsrawXmmXmmImm8,
    VexVpsrawYmmYmmImm8,
    VexVpsllwXmmXmmImm8,
    VexVpsllwYmmYmmImm8,
    VexVpsrldXmmXmmImm8,
    VexVpsrldYmmYmmImm8,
    VexVpsradXmmXmmImm8,
    VexVpsradYmmYmmImm8,
    VexVpslldXmmXmmImm8,
    VexVpslldYmmYmmImm8,
    VexVpsrlqXmmXmmImm8,
    VexVpsrlqYmmYmmImm8,
    VexVpsrldqXmmXmmImm8,
    VexVpsrldqYmmYmmImm8,
    VexVpsllqXmmXmmImm8,
    VexVpsllqYmmYmmImm8,
    VexVpslldqXmmXmmImm8,
    VexVpslldqYmmYmmImm8,
    VexVldmxcsrM32,
    VexVstmxcsrM32,
    VexBlsrR32Rm32,
    VexBlsrR64Rm64,
    VexBlsmskR32Rm32,
    VexBlsmskR64Rm64,
    VexBlsiR32Rm32,
    VexBlsiR64Rm64,
    VexVmovupsXmmXmmm128,
    VexVmovupsYmmYmmm256,
    VexVmovupdXmmXmmm128,
    VexVmovupdYmmYmmm256,
    VexVmovssXmmXmmXmm,
    VexVmovssXmmM32,
    VexVmovsdXmmXmmXmm,
    VexVmovsdXmmM64,
    VexVmovupsXmmm128Xmm,
    VexVmovupsYmmm256Ymm,
    VexVmovupdXmmm128Xmm,
    VexVmovupdYmmm256Ymm,
    VexVmovssXmmXmmXmmAlt,
    VexVmovssM32Xmm,
    VexVmovsdXmmXmmXmmAlt,
    VexVmovsdM64Xmm,
    VexVmovhlpsXmmXmmXmm,
    VexVmovlpsXmmXmmM64,
    VexVmovlpdXmmXmmM64,
    VexVmovsldupXmmXmmm128,
    VexVmovsldupYmmYmmm256,
    VexVmovddupXmmXmmm64,
    VexVmovddupYmmYmmm256,
    VexVmovlpsM64Xmm,
    VexVmovlpdM64Xmm,
    VexVunpcklpsXmm,
    VexVunpcklpsYmm,
    VexVunpcklpdXmm,
    VexVunpcklpdYmm,
    VexVunpckhpsXmm,
    VexVunpckhpsYmm,
    VexVunpckhpdXmm,
    VexVunpckhpdYmm,
    VexVmovlhpsXmmXmmXmm,
    VexVmovhpsXmmXmmM64,
    VexVmovhpdXmmXmmM64,
    VexVmovshdupXmmXmmm128,
    VexVmovshdupYmmYmmm256,
    VexVmovhpsM64Xmm,
    VexVmovhpdM64Xmm,
    VexVmovapsXmmXmmm128,
    VexVmovapsYmmYmmm256,
    VexVmovapdXmmXmmm128,
    VexVmovapdYmmYmmm256,
    VexVmovapsXmmm128Xmm,
    VexVmovapsYmmm256Ymm,
    VexVmovapdXmmm128Xmm,
    VexVmovapdYmmm256Ymm,
    VexVcvtsi2ssXmmXmmRm32,
    VexVcvtsi2ssXmmXmmRm64,
    VexVcvtsi2sdXmmXmmRm32,
    VexVcvtsi2sdXmmXmmRm64,
    VexVmovntpsM128Xmm,
    VexVmovntpsM256Ymm,
    VexVmovntpdM128Xmm,
    VexVmovntpdM256Ymm,
    VexVcvttss2siR32Xmmm32,
    VexVcvttss2siR64Xmmm32,
    VexVcvttsd2siR32Xmmm64,
    VexVcvttsd2siR64Xmmm64,
    VexVcvtss2siR32Xmmm32,
    VexVcvtss2siR64Xmmm32,
    VexVcvtsd2siR32Xmmm64,
    VexVcvtsd2siR64Xmmm64,
    VexVucomissXmmXmmm32,
    VexVucomisdXmmXmmm64,
    VexVcomissXmmXmmm32,
    VexVcomisdXmmXmmm64,
    VexKandw,
    VexKandq,
    VexKandb,
    VexKandd,
    VexKandnw,
    VexKandnq,
    VexKandnb,
    VexKandnd,
    VexKnotw,
    VexKnotq,
    VexKnotb,
    VexKnotd,
    VexKorw,
    VexKorq,
    VexKorb,
    VexKord,
    VexKxnorw,
    VexKxnorq,
    VexKxnorb,
    VexKxnord,
    VexKxorw,
    VexKxorq,
    VexKxorb,
    VexKxord,
    VexKaddw,
    VexKaddq,
    VexKaddb,
    VexKaddd,
    VexKunpckwd,
    VexKunpckdq,
    VexKunpckbw,
    VexVmovmskpsR32Xmm,
    VexVmovmskpsR64Xmm,
    VexVmovmskpsR32Ymm,
    VexVmovmskpsR64Ymm,
    VexVmovmskpdR32Xmm,
    VexVmovmskpdR64Xmm,
    VexVmovmskpdR32Ymm,
    VexVmovmskpdR64Ymm,
    VexVsqrtpsXmm,
    VexVsqrtpsYmm,
    VexVsqrtpdXmm,
    VexVsqrtpdYmm,
    VexVsqrtssXmmXmmXmmm32,
    VexVsqrtsdXmmXmmXmmm64,
    VexVandpsXmm,
    VexVandpsYmm,
    VexVandpdXmm,
    VexVandpdYmm,
    VexVandnpsXmm,
    VexVandnpsYmm,
    VexVandnpdXmm,
    VexVandnpdYmm,
    VexVorpsXmm,
    VexVorpsYmm,
    VexVorpdXmm,
    VexVorpdYmm,
    VexVxorpsXmm,
    VexVxorpsYmm,
    VexVxorpdXmm,
    VexVxorpdYmm,
    VexVaddpsXmm,
    VexVaddpsYmm,
    VexVaddpdXmm,
    VexVaddpdYmm,
    VexVaddssXmmXmmXmmm32,
    VexVaddsdXmmXmmXmmm64,
    VexVmulpsXmm,
    VexVmulpsYmm,
    VexVmulpdXmm,
    VexVmulpdYmm,
    VexVmulssXmmXmmXmmm32,
    VexVmulsdXmmXmmXmmm64,
    VexVcvtps2pdXmmXmmm64,
    VexVcvtps2pdYmmXmmm128,
    VexVcvtpd2psXmmXmmm128,
    VexVcvtpd2psXmmYmmm256,
    VexVcvtss2sdXmmXmmXmmm32,
    VexVcvtsd2ssXmmXmmXmmm64,
    VexVcvtdq2psXmm,
    VexVcvtdq2psYmm,
    VexVcvtps2dqXmm,
    VexVcvtps2dqYmm,
    VexVcvttps2dqXmm,
    VexVcvttps2dqYmm,
    VexVsubpsXmm,
    VexVsubpsYmm,
    VexVsubpdXmm,
    VexVsubpdYmm,
    VexVsubssXmmXmmXmmm32,
    VexVsubsdXmmXmmXmmm64,
    VexVminpsXmm,
    VexVminpsYmm,
    VexVminpdXmm,
    VexVminpdYmm,
    VexVminssXmmXmmXmmm32,
    VexVminsdXmmXmmXmmm64,
    VexVdivpsXmm,
    VexVdivpsYmm,
    VexVdivpdXmm,
    VexVdivpdYmm,
    VexVdivssXmmXmmXmmm32,
    VexVdivsdXmmXmmXmmm64,
    VexVmaxpsXmm,
    VexVmaxpsYmm,
    VexVmaxpdXmm,
    VexVmaxpdYmm,
    VexVmaxssXmmXmmXmmm32,
    VexVmaxsdXmmXmmXmmm64,
    VexVpunpcklbwXmm,
    VexVpunpcklbwYmm,
    VexVpunpcklwdXmm,
    VexVpunpcklwdYmm,
    VexVpunpckldqXmm,
    VexVpunpckldqYmm,
    VexVpacksswbXmm,
    VexVpacksswbYmm,
    VexVpcmpgtbXmm,
    VexVpcmpgtbYmm,
    VexVpcmpgtwXmm,
    VexVpcmpgtwYmm,
    VexVpcmpgtdXmm,
    VexVpcmpgtdYmm,
    VexVpackuswbXmm,
    VexVpackuswbYmm,
    VexVpunpckhbwXmm,
    VexVpunpckhbwYmm,
    VexVpunpckhwdXmm,
    VexVpunpckhwdYmm,
    VexVpunpckhdqXmm,
    VexVpunpckhdqYmm,
    VexVpackssdwXmm,
    VexVpackssdwYmm,
    VexVpunpcklqdqXmm,
    VexVpunpcklqdqYmm,
    VexVpunpckhqdqXmm,
    VexVpunpckhqdqYmm,
    VexVmovdXmmRm32,
    VexVmovqXmmRm64,
    VexVmovdqaXmmXmmm128,
    VexVmovdqaYmmYmmm256,
    VexVmovdquXmmXmmm128,
    VexVmovdquYmmYmmm256,
    VexVpshufdXmmXmmm128Imm8,
    VexVpshufdYmmYmmm256Imm8,
    VexVpshufhwXmmXmmm128Imm8,
    VexVpshufhwYmmYmmm256Imm8,
    VexVpshuflwXmmXmmm128Imm8,
    VexVpshuflwYmmYmmm256Imm8,
    VexVpcmpeqbXmm,
    VexVpcmpeqbYmm,
    VexVpcmpeqwXmm,
    VexVpcmpeqwYmm,
    VexVpcmpeqdXmm,
    VexVpcmpeqdYmm,
    VexVzeroupper,
    VexVzeroall,
    VexVmovdRm32Xmm,
    VexVmovqRm64Xmm,
    VexVmovqXmmXmmm64,
    VexVmovdqaXmmm128Xmm,
    VexVmovdqaYmmm256Ymm,
    VexVmovdquXmmm128Xmm,
    VexVmovdquYmmm256Ymm,
    VexKortestw,
    VexKortestq,
    VexKortestb,
    VexKortestd,
    VexKtestw,
    VexKtestq,
    VexKtestb,
    VexKtestd,
    VexVcmppsXmmImm8,
    VexVcmppsYmmImm8,
    VexVcmppdXmmImm8,
    VexVcmppdYmmImm8,
    VexVcmpssXmmXmmXmmm32Imm8,
    VexVcmpsdXmmXmmXmmm64Imm8,
    VexVpinsrwXmmXmmR32m16Imm8,
    VexVpextrwR32XmmImm8,
    VexVshufpsXmmImm8,
    VexVshufpsYmmImm8,
    VexVshufpdXmmImm8,
    VexVshufpdYmmImm8,
    VexVpsrlwXmm,
    VexVpsrlwYmm,
    VexVpsrldXmm,
    VexVpsrldYmm,
    VexVpsrlqXmm,
    VexVpsrlqYmm,
    VexVpaddqXmm,
    VexVpaddqYmm,
    VexVpmullwXmm,
    VexVpmullwYmm,
    VexVmovqXmmm64Xmm,
    VexVpmovmskbR32Xmm,
    VexVpmovmskbR64Xmm,
    VexVpmovmskbR32Ymm,
    VexVpmovmskbR64Ymm,
    VexVpsubusbXmm,
    VexVpsubusbYmm,
    VexVpsubuswXmm,
    VexVpsubuswYmm,
    VexVpminubXmm,
    VexVpminubYmm,
    VexVpandXmm,
    VexVpandYmm,
    VexVpaddusbXmm,
    VexVpaddusbYmm,
    VexVpadduswXmm,
    VexVpadduswYmm,
    VexVpmaxubXmm,
    VexVpmaxubYmm,
    VexVpandnXmm,
    VexVpandnYmm,
    VexVpavgbXmm,
    VexVpavgbYmm,
    VexVpsrawXmm,
    VexVpsrawYmm,
    VexVpsradXmm,
    VexVpsradYmm,
    VexVpavgwXmm,
    VexVpavgwYmm,
    VexVpmulhuwXmm,
    VexVpmulhuwYmm,
    VexVpmulhwXmm,
    VexVpmulhwYmm,
    VexVcvttpd2dqXmmXmmm128,
    VexVcvttpd2dqXmmYmmm256,
    VexVcvtdq2pdXmmXmmm64,
    VexVcvtdq2pdYmmXmmm128,
    VexVcvtpd2dqXmmXmmm128,
    VexVcvtpd2dqXmmYmmm256,
    VexVmovntdqM128Xmm,
    VexVmovntdqM256Ymm,
    VexVpsubsbXmm,
    VexVpsubsbYmm,
    VexVpsubswXmm,
    VexVpsubswYmm,
    VexVpminswXmm,
    VexVpminswYmm,
    VexVporXmm,
    VexVporYmm,
    VexVpaddsbXmm,
    VexVpaddsbYmm,
    VexVpaddswXmm,
    VexVpaddswYmm,
    VexVpmaxswXmm,
    VexVpmaxswYmm,
    VexVpxorXmm,
    VexVpxorYmm,
    VexVlddquXmmM128,
    VexVlddquYmmM256,
    VexVpsllwXmm,
    VexVpsllwYmm,
    VexVpslldXmm,
    VexVpslldYmm,
    VexVpsllqXmm,
    VexVpsllqYmm,
    VexVpmuludqXmm,
    VexVpmuludqYmm,
    VexVpmaddwdXmm,
    VexVpmaddwdYmm,
    VexVpsadbwXmm,
    VexVpsadbwYmm,
    VexVmaskmovdquXmmXmm,
    VexVpsubbXmm,
    VexVpsubbYmm,
    VexVpsubwXmm,
    VexVpsubwYmm,
    VexVpsubdXmm,
    VexVpsubdYmm,
    VexVpsubqXmm,
    VexVpsubqYmm,
    VexVpaddbXmm,
    VexVpaddbYmm,
    VexVpaddwXmm,
    VexVpaddwYmm,
    VexVpadddXmm,
    VexVpadddYmm,
    VexVpshufbXmm,
    VexVpshufbYmm,
    VexVphaddwXmm,
    VexVphaddwYmm,
    VexVphadddXmm,
    VexVphadddYmm,
    VexVphaddswXmm,
    VexVphaddswYmm,
    VexVpmaddubswXmm,
    VexVpmaddubswYmm,
    VexVphsubwXmm,
    VexVphsubwYmm,
    VexVphsubdXmm,
    VexVphsubdYmm,
    VexVphsubswXmm,
    VexVphsubswYmm,
    VexVpsignbXmm,
    VexVpsignbYmm,
    VexVpsignwXmm,
    VexVpsignwYmm,
    VexVpsigndXmm,
    VexVpsigndYmm,
    VexVpmulhrswXmm,
    VexVpmulhrswYmm,
    VexVpermilpsXmm,
    VexVpermilpsYmm,
    VexVpermilpdXmm,
    VexVpermilpdYmm,
    VexVtestpsXmm,
    VexVtestpsYmm,
    VexVtestpdXmm,
    VexVtestpdYmm,
    VexVcvtph2psXmmXmmm64,
    VexVcvtph2psYmmXmmm128,
    VexVpermpsYmmYmmYmmm256,
    VexVptestXmm,
    VexVptestYmm,
    VexVbroadcastssXmmXmmm32,
    VexVbroadcastssYmmXmmm32,
    VexVbroadcastsdYmmXmmm64,
    VexVbroadcastf128YmmM128,
    VexVpabsbXmm,
    VexVpabsbYmm,
    VexVpabswXmm,
    VexVpabswYmm,
    VexVpabsdXmm,
    VexVpabsdYmm,
    VexVpmovsxbwXmmXmmm64,
    VexVpmovsxbwYmmXmmm128,
    VexVpmovsxbdXmmXmmm32,
    VexVpmovsxbdYmmXmmm64,
    VexVpmovsxbqXmmXmmm16,
    VexVpmovsxbqYmmXmmm32,
    VexVpmovsxwdXmmXmmm64,
    VexVpmovsxwdYmmXmmm128,
    VexVpmovsxwqXmmXmmm32,
    VexVpmovsxwqYmmXmmm64,
    VexVpmovsxdqXmmXmmm64,
    VexVpmovsxdqYmmXmmm128,
    VexVpmuldqXmm,
    VexVpmuldqYmm,
    VexVpcmpeqqXmm,
    VexVpcmpeqqYmm,
    VexVmovntdqaXmmM128,
    VexVmovntdqaYmmM256,
    VexVpackusdwXmm,
    VexVpackusdwYmm,
    VexVmaskmovpsXmmXmmM128,
    VexVmaskmovpsYmmYmmM256,
    VexVmaskmovpdXmmXmmM128,
    VexVmaskmovpdYmmYmmM256,
    VexVmaskmovpsM128XmmXmm,
    VexVmaskmovpsM256YmmYmm,
    VexVmaskmovpdM128XmmXmm,
    VexVmaskmovpdM256YmmYmm,
    VexVpmovzxbwXmmXmmm64,
    VexVpmovzxbwYmmXmmm128,
    VexVpmovzxbdXmmXmmm32,
    VexVpmovzxbdYmmXmmm64,
    VexVpmovzxbqXmmXmmm16,
    VexVpmovzxbqYmmXmmm32,
    VexVpmovzxwdXmmXmmm64,
    VexVpmovzxwdYmmXmmm128,
    VexVpmovzxwqXmmXmmm32,
    VexVpmovzxwqYmmXmmm64,
    VexVpmovzxdqXmmXmmm64,
    VexVpmovzxdqYmmXmmm128,
    VexVpermdYmmYmmYmmm256,
    VexVpcmpgtqXmm,
    VexVpcmpgtqYmm,
    VexVpminsbXmm,
    VexVpminsbYmm,
    VexVpminsdXmm,
    VexVpminsdYmm,
    VexVpminuwXmm,
    VexVpminuwYmm,
    VexVpminudXmm,
    VexVpminudYmm,
    VexVpmaxsbXmm,
    VexVpmaxsbYmm,
    VexVpmaxsdXmm,
    VexVpmaxsdYmm,
    VexVpmaxuwXmm,
    VexVpmaxuwYmm,
    VexVpmaxudXmm,
    VexVpmaxudYmm,
    VexVpmulldXmm,
    VexVpmulldYmm,
    VexVphminposuwXmmXmmm128,
    VexVpsrlvdXmm,
    VexVpsrlvdYmm,
    VexVpsrlvqXmm,
    VexVpsrlvqYmm,
    VexVpsravdXmm,
    VexVpsravdYmm,
    VexVpsllvdXmm,
    VexVpsllvdYmm,
    VexVpsllvqXmm,
    VexVpsllvqYmm,
    VexVpbroadcastdXmmXmmm32,
    VexVpbroadcastdYmmXmmm32,
    VexVpbroadcastqXmmXmmm64,
    VexVpbroadcastqYmmXmmm64,
    VexVbroadcasti128YmmM128,
    VexVpbroadcastbXmmXmmm8,
    VexVpbroadcastbYmmXmmm8,
    VexVpbroadcastwXmmXmmm16,
    VexVpbroadcastwYmmXmmm16,
    VexVpmaskmovdXmmXmmM128,
    VexVpmaskmovdYmmYmmM256,
    VexVpmaskmovqXmmXmmM128,
    VexVpmaskmovqYmmYmmM256,
    VexVpmaskmovdM128XmmXmm,
    VexVpmaskmovdM256YmmYmm,
    VexVpmaskmovqM128XmmXmm,
    VexVpmaskmovqM256YmmYmm,
    VexVpgatherddXmm,
    VexVpgatherddYmm,
    VexVpgatherdqXmm,
    VexVpgatherdqYmm,
    VexVpgatherqdXmm,
    VexVpgatherqdYmm,
    VexVpgatherqqXmm,
    VexVpgatherqqYmm,
    VexVgatherdpsXmm,
    VexVgatherdpsYmm,
    VexVgatherdpdXmm,
    VexVgatherdpdYmm,
    VexVgatherqpsXmm,
    VexVgatherqpsYmm,
    VexVgatherqpdXmm,
    VexVgatherqpdYmm,
    VexVfmadd132psXmm,
    VexVfmadd132psYmm,
    VexVfmadd132pdXmm,
    VexVfmadd132pdYmm,
    VexVfmadd132ssXmm,
    VexVfmadd132sdXmm,
    VexVfmsub132psXmm,
    VexVfmsub132psYmm,
    VexVfmsub132pdXmm,
    VexVfmsub132pdYmm,
    VexVfmsub132ssXmm,
    VexVfmsub132sdXmm,
    VexVfnmadd132psXmm,
    VexVfnmadd132psYmm,
    VexVfnmadd132pdXmm,
    VexVfnmadd132pdYmm,
    VexVfnmadd132ssXmm,
    VexVfnmadd132sdXmm,
    VexVfmadd213psXmm,
    VexVfmadd213psYmm,
    VexVfmadd213pdXmm,
    VexVfmadd213pdYmm,
    VexVfmadd213ssXmm,
    VexVfmadd213sdXmm,
    VexVfmsub213psXmm,
    VexVfmsub213psYmm,
    VexVfmsub213pdXmm,
    VexVfmsub213pdYmm,
    VexVfmsub213ssXmm,
    VexVfmsub213sdXmm,
    VexVfnmadd213psXmm,
    VexVfnmadd213psYmm,
    VexVfnmadd213pdXmm,
    VexVfnmadd213pdYmm,
    VexVfnmadd213ssXmm,
    VexVfnmadd213sdXmm,
    VexVfmadd231psXmm,
    VexVfmadd231psYmm,
    VexVfmadd231pdXmm,
    VexVfmadd231pdYmm,
    VexVfmadd231ssXmm,
    VexVfmadd231sdXmm,
    VexVfmsub231psXmm,
    VexVfmsub231psYmm,
    VexVfmsub231pdXmm,
    VexVfmsub231pdYmm,
    VexVfmsub231ssXmm,
    VexVfmsub231sdXmm,
    VexVfnmadd231psXmm,
    VexVfnmadd231psYmm,
    VexVfnmadd231pdXmm,
    VexVfnmadd231pdYmm,
    VexVfnmadd231ssXmm,
    VexVfnmadd231sdXmm,
    VexVaesimcXmmXmmm128,
    VexVaesencXmm,
    VexVaesencYmm,
    VexVaesenclastXmm,
    VexVaesenclastYmm,
    VexVaesdecXmm,
    VexVaesdecYmm,
    VexVaesdeclastXmm,
    VexVaesdeclastYmm,
    VexAndnR32R32Rm32,
    VexAndnR64R64Rm64,
    VexBzhiR32Rm32R32,
    VexBzhiR64Rm64R64,
    VexPextR32R32Rm32,
    VexPextR64R64Rm64,
    VexPdepR32R32Rm32,
    VexPdepR64R64Rm64,
    VexMulxR32R32Rm32,
    VexMulxR64R64Rm64,
    VexBextrR32Rm32R32,
    VexBextrR64Rm64R64,
    VexShlxR32Rm32R32,
    VexShlxR64Rm64R64,
    VexSarxR32Rm32R32,
    VexSarxR64Rm64R64,
    VexShrxR32Rm32R32,
    VexShrxR64Rm64R64,
    VexVpermqYmmYmmm256Imm8,
    VexVpermpdYmmYmmm256Imm8,
    VexVpblenddXmmImm8,
    VexVpblenddYmmImm8,
    VexVpermilpsXmmImm8,
    VexVpermilpsYmmImm8,
    VexVpermilpdXmmImm8,
    VexVpermilpdYmmImm8,
    VexVperm2f128YmmYmmYmmm256Imm8,
    VexVroundpsXmmImm8,
    VexVroundpsYmmImm8,
    VexVroundpdXmmImm8,
    VexVroundpdYmmImm8,
    VexVroundssXmmXmmXmmm32Imm8,
    VexVroundsdXmmXmmXmmm64Imm8,
    VexVblendpsXmmImm8,
    VexVblendpsYmmImm8,
    VexVblendpdXmmImm8,
    VexVblendpdYmmImm8,
    VexVpblendwXmmImm8,
    VexVpblendwYmmImm8,
    VexVpalignrXmmImm8,
    VexVpalignrYmmImm8,
    VexVpextrbR32m8XmmImm8,
    VexVpextrbR64m8XmmImm8,
    VexVpextrwR32m16XmmImm8,
    VexVpextrwR64m16XmmImm8,
    VexVpextrdRm32XmmImm8,
    VexVpextrqRm64XmmImm8,
    VexVextractpsRm32XmmImm8,
    VexVinsertf128YmmYmmXmmm128Imm8,
    VexVextractf128Xmmm128YmmImm8,
    VexVcvtps2phXmmm64XmmImm8,
    VexVcvtps2phXmmm128YmmImm8,
    VexVpinsrbXmmXmmR32m8Imm8,
    VexVpinsrbXmmXmmR64m8Imm8,
    VexVinsertpsXmmXmmXmmm32Imm8,
    VexVpinsrdXmmXmmRm32Imm8,
    VexVpinsrqXmmXmmRm64Imm8,
    VexKshiftrbKrKrImm8,
    VexKshiftrwKrKrImm8,
    VexKshiftrdKrKrImm8,
    VexKshiftrqKrKrImm8,
    VexKshiftlbKrKrImm8,
    VexKshiftlwKrKrImm8,
    VexKshiftldKrKrImm8,
    VexKshiftlqKrKrImm8,
    VexVinserti128YmmYmmXmmm128Imm8,
    VexVextracti128Xmmm128YmmImm8,
    VexVdppsXmmImm8,
    VexVdppsYmmImm8,
    VexVdppdXmmXmmXmmm128Imm8,
    VexVmpsadbwXmmImm8,
    VexVmpsadbwYmmImm8,
    VexVpclmulqdqXmmImm8,
    VexVpclmulqdqYmmImm8,
    VexVperm2i128YmmYmmYmmm256Imm8,
    VexVblendvpsXmm,
    VexVblendvpsYmm,
    VexVblendvpdXmm,
    VexVblendvpdYmm,
    VexVpblendvbXmm,
    VexVpblendvbYmm,
    VexVpcmpestrmXmmXmmm128Imm8,
    VexVpcmpestriXmmXmmm128Imm8,
    VexVpcmpistrmXmmXmmm128Imm8,
    VexVpcmpistriXmmXmmm128Imm8,
    VexVaeskeygenassistXmmXmmm128Imm8,
    VexRorxR32Rm32Imm8,
    VexRorxR64Rm64Imm8,

    // EVEX
    EvexVprordXmmImm8,
    EvexVprordYmmImm8,
    EvexVprordZmmImm8,
    EvexVprorqXmmImm8,
    EvexVprorqYmmImm8,
    EvexVprorqZmmImm8,
    EvexVproldXmmImm8,
    EvexVproldYmmImm8,
    EvexVproldZmmImm8,
    EvexVprolqXmmImm8,
    EvexVprolqYmmImm8,
    EvexVprolqZmmImm8,
    EvexVpsrldXmmImm8,
    EvexVpsrldYmmImm8,
    EvexVpsrldZmmImm8,
    EvexVpsradXmmImm8,
    EvexVpsradYmmImm8,
    EvexVpsradZmmImm8,
    EvexVpsraqXmmImm8,
    EvexVpsraqYmmImm8,
    EvexVpsraqZmmImm8,
    EvexVpslldXmmImm8,
    EvexVpslldYmmImm8,
    EvexVpslldZmmImm8,
    EvexVmovupsXmmXmmm128,
    EvexVmovupsYmmYmmm256,
    EvexVmovupsZmmZmmm512,
    EvexVmovupdXmmXmmm128,
    EvexVmovupdYmmYmmm256,
    EvexVmovupdZmmZmmm512,
    EvexVmovssXmmXmmXmm,
    EvexVmovssXmmM32,
    EvexVmovsdXmmXmmXmm,
    EvexVmovsdXmmM64,
    EvexVmovupsXmmm128Xmm,
    EvexVmovupsYmmm256Ymm,
    EvexVmovupsZmmm512Zmm,
    EvexVmovupdXmmm128Xmm,
    EvexVmovupdYmmm256Ymm,
    EvexVmovupdZmmm512Zmm,
    EvexVmovssXmmXmmXmmAlt,
    EvexVmovssM32Xmm,
    EvexVmovsdXmmXmmXmmAlt,
    EvexVmovsdM64Xmm,
    EvexVunpcklpsXmm,
    EvexVunpcklpsYmm,
    EvexVunpcklpsZmm,
    EvexVunpcklpdXmm,
    EvexVunpcklpdYmm,
    EvexVunpcklpdZmm,
    EvexVunpckhpsXmm,
    EvexVunpckhpsYmm,
    EvexVunpckhpsZmm,
    EvexVunpckhpdXmm,
    EvexVunpckhpdYmm,
    EvexVunpckhpdZmm,
    EvexVmovapsXmmXmmm128,
    EvexVmovapsYmmYmmm256,
    EvexVmovapsZmmZmmm512,
    EvexVmovapdXmmXmmm128,
    EvexVmovapdYmmYmmm256,
    EvexVmovapdZmmZmmm512,
    EvexVmovapsXmmm128Xmm,
    EvexVmovapsYmmm256Ymm,
    EvexVmovapsZmmm512Zmm,
    EvexVmovapdXmmm128Xmm,
    EvexVmovapdYmmm256Ymm,
    EvexVmovapdZmmm512Zmm,
    EvexVsqrtpsXmm,
    EvexVsqrtpsYmm,
    EvexVsqrtpsZmm,
    EvexVsqrtpdXmm,
    EvexVsqrtpdYmm,
    EvexVsqrtpdZmm,
    EvexVsqrtssXmmXmmXmmm32,
    EvexVsqrtsdXmmXmmXmmm64,
    EvexVandpsXmm,
    EvexVandpsYmm,
    EvexVandpsZmm,
    EvexVandpdXmm,
    EvexVandpdYmm,
    EvexVandpdZmm,
    EvexVandnpsXmm,
    EvexVandnpsYmm,
    EvexVandnpsZmm,
    EvexVandnpdXmm,
    EvexVandnpdYmm,
    EvexVandnpdZmm,
    EvexVorpsXmm,
    EvexVorpsYmm,
    EvexVorpsZmm,
    EvexVorpdXmm,
    EvexVorpdYmm,
    EvexVorpdZmm,
    EvexVxorpsXmm,
    EvexVxorpsYmm,
    EvexVxorpsZmm,
    EvexVxorpdXmm,
    EvexVxorpdYmm,
    EvexVxorpdZmm,
    EvexVaddpsXmm,
    EvexVaddpsYmm,
    EvexVaddpsZmm,
    EvexVaddpdXmm,
    EvexVaddpdYmm,
    EvexVaddpdZmm,
    EvexVaddssXmmXmmXmmm32,
    EvexVaddsdXmmXmmXmmm64,
    EvexVmulpsXmm,
    EvexVmulpsYmm,
    EvexVmulpsZmm,
    EvexVmulpdXmm,
    EvexVmulpdYmm,
    EvexVmulpdZmm,
    EvexVmulssXmmXmmXmmm32,
    EvexVmulsdXmmXmmXmmm64,
    EvexVcvtdq2psXmm,
    EvexVcvtdq2psYmm,
    EvexVcvtdq2psZmm,
    EvexVcvtps2dqXmm,
    EvexVcvtps2dqYmm,
    EvexVcvtps2dqZmm,
    EvexVcvttps2dqXmm,
    EvexVcvttps2dqYmm,
    EvexVcvttps2dqZmm,
    EvexVsubpsXmm,
    EvexVsubpsYmm,
    EvexVsubpsZmm,
    EvexVsubpdXmm,
    EvexVsubpdYmm,
    EvexVsubpdZmm,
    EvexVsubssXmmXmmXmmm32,
    EvexVsubsdXmmXmmXmmm64,
    EvexVminpsXmm,
    EvexVminpsYmm,
    EvexVminpsZmm,
    EvexVminpdXmm,
    EvexVminpdYmm,
    EvexVminpdZmm,
    EvexVminssXmmXmmXmmm32,
    EvexVminsdXmmXmmXmmm64,
    EvexVdivpsXmm,
    EvexVdivpsYmm,
    EvexVdivpsZmm,
    EvexVdivpdXmm,
    EvexVdivpdYmm,
    EvexVdivpdZmm,
    EvexVdivssXmmXmmXmmm32,
    EvexVdivsdXmmXmmXmmm64,
    EvexVmaxpsXmm,
    EvexVmaxpsYmm,
    EvexVmaxpsZmm,
    EvexVmaxpdXmm,
    EvexVmaxpdYmm,
    EvexVmaxpdZmm,
    EvexVmaxssXmmXmmXmmm32,
    EvexVmaxsdXmmXmmXmmm64,
    EvexVmovdXmmRm32,
    EvexVmovqXmmRm64,
    EvexVmovdqa32Xmm,
    EvexVmovdqa32Ymm,
    EvexVmovdqa32Zmm,
    EvexVmovdqa64Xmm,
    EvexVmovdqa64Ymm,
    EvexVmovdqa64Zmm,
    EvexVmovdqu32Xmm,
    EvexVmovdqu32Ymm,
    EvexVmovdqu32Zmm,
    EvexVmovdqu64Xmm,
    EvexVmovdqu64Ymm,
    EvexVmovdqu64Zmm,
    EvexVmovdqu8Xmm,
    EvexVmovdqu8Ymm,
    EvexVmovdqu8Zmm,
    EvexVmovdqu16Xmm,
    EvexVmovdqu16Ymm,
    EvexVmovdqu16Zmm,
    EvexVpcmpeqbKrXmm,
    EvexVpcmpeqbKrYmm,
    EvexVpcmpeqbKrZmm,
    EvexVpcmpeqwKrXmm,
    EvexVpcmpeqwKrYmm,
    EvexVpcmpeqwKrZmm,
    EvexVpcmpeqdKrXmm,
    EvexVpcmpeqdKrYmm,
    EvexVpcmpeqdKrZmm,
    EvexVmovdRm32Xmm,
    EvexVmovqRm64Xmm,
    EvexVmovqXmmXmmm64,
    EvexVmovdqa32Xmmm128Xmm,
    EvexVmovdqa32Ymmm256Ymm,
    EvexVmovdqa32Zmmm512Zmm,
    EvexVmovdqa64Xmmm128Xmm,
    EvexVmovdqa64Ymmm256Ymm,
    EvexVmovdqa64Zmmm512Zmm,
    EvexVmovdqu32Xmmm128Xmm,
    EvexVmovdqu32Ymmm256Ymm,
    EvexVmovdqu32Zmmm512Zmm,
    EvexVmovdqu64Xmmm128Xmm,
    EvexVmovdqu64Ymmm256Ymm,
    EvexVmovdqu64Zmmm512Zmm,
    EvexVmovdqu8Xmmm128Xmm,
    EvexVmovdqu8Ymmm256Ymm,
    EvexVmovdqu8Zmmm512Zmm,
    EvexVmovdqu16Xmmm128Xmm,
    EvexVmovdqu16Ymmm256Ymm,
    EvexVmovdqu16Zmmm512Zmm,
    EvexVcmppsKrXmmImm8,
    EvexVcmppsKrYmmImm8,
    EvexVcmppsKrZmmImm8,
    EvexVcmppdKrXmmImm8,
    EvexVcmppdKrYmmImm8,
    EvexVcmppdKrZmmImm8,
    EvexVcmpssKrXmmXmmm32Imm8,
    EvexVcmpsdKrXmmXmmm64Imm8,
    EvexVpaddqXmm,
    EvexVpaddqYmm,
    EvexVpaddqZmm,
    EvexVpanddXmm,
    EvexVpanddYmm,
    EvexVpanddZmm,
    EvexVpandqXmm,
    EvexVpandqYmm,
    EvexVpandqZmm,
    EvexVpandndXmm,
    EvexVpandndYmm,
    EvexVpandndZmm,
    EvexVpandnqXmm,
    EvexVpandnqYmm,
    EvexVpandnqZmm,
    EvexVcvtdq2pdXmmXmmm64,
    EvexVcvtdq2pdYmmXmmm128,
    EvexVcvtdq2pdZmmYmmm256,
    EvexVpordXmm,
    EvexVpordYmm,
    EvexVpordZmm,
    EvexVporqXmm,
    EvexVporqYmm,
    EvexVporqZmm,
    EvexVpxordXmm,
    EvexVpxordYmm,
    EvexVpxordZmm,
    EvexVpxorqXmm,
    EvexVpxorqYmm,
    EvexVpxorqZmm,
    EvexVpmuludqXmm,
    EvexVpmuludqYmm,
    EvexVpmuludqZmm,
    EvexVpsubdXmm,
    EvexVpsubdYmm,
    EvexVpsubdZmm,
    EvexVpsubqXmm,
    EvexVpsubqYmm,
    EvexVpsubqZmm,
    EvexVpaddbXmm,
    EvexVpaddbYmm,
    EvexVpaddbZmm,
    EvexVpaddwXmm,
    EvexVpaddwYmm,
    EvexVpaddwZmm,
    EvexVpadddXmm,
    EvexVpadddYmm,
    EvexVpadddZmm,
    EvexVbroadcastssXmmXmmm32,
    EvexVbroadcastssYmmXmmm32,
    EvexVbroadcastssZmmXmmm32,
    EvexVbroadcastsdYmmXmmm64,
    EvexVbroadcastsdZmmXmmm64,
    EvexVpabsbXmm,
    EvexVpabsbYmm,
    EvexVpabsbZmm,
    EvexVpabswXmm,
    EvexVpabswYmm,
    EvexVpabswZmm,
    EvexVpabsdXmm,
    EvexVpabsdYmm,
    EvexVpabsdZmm,
    EvexVpabsqXmm,
    EvexVpabsqYmm,
    EvexVpabsqZmm,
    EvexVpermdYmm,
    EvexVpermdZmm,
    EvexVpermqYmm,
    EvexVpermqZmm,
    EvexVpmulldXmm,
    EvexVpmulldYmm,
    EvexVpmulldZmm,
    EvexVpmullqXmm,
    EvexVpmullqYmm,
    EvexVpmullqZmm,
    EvexVpbroadcastdXmmXmmm32,
    EvexVpbroadcastdYmmXmmm32,
    EvexVpbroadcastdZmmXmmm32,
    EvexVpbroadcastqXmmXmmm64,
    EvexVpbroadcastqYmmXmmm64,
    EvexVpbroadcastqZmmXmmm64,
    EvexVpblendmdXmm,
    EvexVpblendmdYmm,
    EvexVpblendmdZmm,
    EvexVpblendmqXmm,
    EvexVpblendmqYmm,
    EvexVpblendmqZmm,
    EvexVblendmpsXmm,
    EvexVblendmpsYmm,
    EvexVblendmpsZmm,
    EvexVblendmpdXmm,
    EvexVblendmpdYmm,
    EvexVblendmpdZmm,
    EvexVpgatherddXmm,
    EvexVpgatherddYmm,
    EvexVpgatherddZmm,
    EvexVpgatherdqXmm,
    EvexVpgatherdqYmm,
    EvexVpgatherdqZmm,
    EvexVpgatherqdXmm,
    EvexVpgatherqdYmm,
    EvexVpgatherqdZmm,
    EvexVpgatherqqXmm,
    EvexVpgatherqqYmm,
    EvexVpgatherqqZmm,
    EvexVgatherdpsXmm,
    EvexVgatherdpsYmm,
    EvexVgatherdpsZmm,
    EvexVgatherdpdXmm,
    EvexVgatherdpdYmm,
    EvexVgatherdpdZmm,
    EvexVgatherqpsXmm,
    EvexVgatherqpsYmm,
    EvexVgatherqpsZmm,
    EvexVgatherqpdXmm,
    EvexVgatherqpdYmm,
    EvexVgatherqpdZmm,
    EvexVfmadd132psXmm,
    EvexVfmadd132psYmm,
    EvexVfmadd132psZmm,
    EvexVfmadd132pdXmm,
    EvexVfmadd132pdYmm,
    EvexVfmadd132pdZmm,
    EvexVfmadd132ssXmm,
    EvexVfmadd132sdXmm,
    EvexVpscatterddXmm,
    EvexVpscatterddYmm,
    EvexVpscatterddZmm,
    EvexVpscatterdqXmm,
    EvexVpscatterdqYmm,
    EvexVpscatterdqZmm,
    EvexVscatterdpsXmm,
    EvexVscatterdpsYmm,
    EvexVscatterdpsZmm,
    EvexVscatterdpdXmm,
    EvexVscatterdpdYmm,
    EvexVscatterdpdZmm,
    EvexVfmadd213psXmm,
    EvexVfmadd213psYmm,
    EvexVfmadd213psZmm,
    EvexVfmadd213pdXmm,
    EvexVfmadd213pdYmm,
    EvexVfmadd213pdZmm,
    EvexVfmadd213ssXmm,
    EvexVfmadd213sdXmm,
    EvexVfmadd231psXmm,
    EvexVfmadd231psYmm,
    EvexVfmadd231psZmm,
    EvexVfmadd231pdXmm,
    EvexVfmadd231pdYmm,
    EvexVfmadd231pdZmm,
    EvexVfmadd231ssXmm,
    EvexVfmadd231sdXmm,
    EvexValigndXmmImm8,
    EvexValigndYmmImm8,
    EvexValigndZmmImm8,
    EvexValignqXmmImm8,
    EvexValignqYmmImm8,
    EvexValignqZmmImm8,
    EvexVinsertf32x4Ymm,
    EvexVinsertf32x4Zmm,
    EvexVinsertf64x2Ymm,
    EvexVinsertf64x2Zmm,
    EvexVextractf32x4Ymm,
    EvexVextractf32x4Zmm,
    EvexVextractf64x2Ymm,
    EvexVextractf64x2Zmm,
    EvexVinsertf32x8Zmm,
    EvexVinsertf64x4Zmm,
    EvexVextractf32x8Zmm,
    EvexVextractf64x4Zmm,
    EvexVpcmpudKrXmmImm8,
    EvexVpcmpudKrYmmImm8,
    EvexVpcmpudKrZmmImm8,
    EvexVpcmpuqKrXmmImm8,
    EvexVpcmpuqKrYmmImm8,
    EvexVpcmpuqKrZmmImm8,
    EvexVpcmpdKrXmmImm8,
    EvexVpcmpdKrYmmImm8,
    EvexVpcmpdKrZmmImm8,
    EvexVpcmpqKrXmmImm8,
    EvexVpcmpqKrYmmImm8,
    EvexVpcmpqKrZmmImm8,
    EvexVpternlogdXmmImm8,
    EvexVpternlogdYmmImm8,
    EvexVpternlogdZmmImm8,
    EvexVpternlogqXmmImm8,
    EvexVpternlogqYmmImm8,
    EvexVpternlogqZmmImm8,
    EvexVinserti32x4Ymm,
    EvexVinserti32x4Zmm,
    EvexVinserti64x2Ymm,
    EvexVinserti64x2Zmm,
    EvexVextracti32x4Ymm,
    EvexVextracti32x4Zmm,
    EvexVextracti64x2Ymm,
    EvexVextracti64x2Zmm,
    EvexVinserti32x8Zmm,
    EvexVinserti64x4Zmm,
    EvexVextracti32x8Zmm,
    EvexVextracti64x4Zmm,
    EvexVpcmpubKrXmmImm8,
    EvexVpcmpubKrYmmImm8,
    EvexVpcmpubKrZmmImm8,
    EvexVpcmpuwKrXmmImm8,
    EvexVpcmpuwKrYmmImm8,
    EvexVpcmpuwKrZmmImm8,
    EvexVpcmpbKrXmmImm8,
    EvexVpcmpbKrYmmImm8,
    EvexVpcmpbKrZmmImm8,
    EvexVpcmpwKrXmmImm8,
    EvexVpcmpwKrYmmImm8,
    EvexVpcmpwKrZmmImm8,

    // XOP
    XopVpmacssww,
    XopVpmacsswd,
    XopVpmacssdql,
    XopVpmacssdd,
    XopVpmacssdqh,
    XopVpmacsww,
    XopVpmacswd,
    XopVpmacsdql,
    XopVpmacsdd,
    XopVpmacsdqh,
    XopVpcmovXmm,
    XopVpcmovYmm,
    XopVpcmovXmmAlt,
    XopVpcmovYmmAlt,
    XopVpperm,
    XopVppermAlt,
    XopVpmadcsswd,
    XopVpmadcswd,
    XopVprotbImm8,
    XopVprotwImm8,
    XopVprotdImm8,
    XopVprotqImm8,
    XopVpcomb,
    XopVpcomw,
    XopVpcomd,
    XopVpcomq,
    XopVpcomub,
    XopVpcomuw,
    XopVpcomud,
    XopVpcomuq,
    XopBlcfillR32Rm32,
    XopBlcfillR64Rm64,
    XopBlsfillR32Rm32,
    XopBlsfillR64Rm64,
    XopBlcsR32Rm32,
    XopBlcsR64Rm64,
    XopTzmskR32Rm32,
    XopTzmskR64Rm64,
    XopBlcicR32Rm32,
    XopBlcicR64Rm64,
    XopBlsicR32Rm32,
    XopBlsicR64Rm64,
    XopT1mskcR32Rm32,
    XopT1mskcR64Rm64,
    XopBlcmskR32Rm32,
    XopBlcmskR64Rm64,
    XopBlciR32Rm32,
    XopBlciR64Rm64,
    XopLlwpcbR32,
    XopLlwpcbR64,
    XopSlwpcbR32,
    XopSlwpcbR64,
    XopVfrczpsXmm,
    XopVfrczpsYmm,
    XopVfrczpdXmm,
    XopVfrczpdYmm,
    XopVfrczssXmmXmmm32,
    XopVfrczsdXmmXmmm64,
    XopVprotb,
    XopVprotbAlt,
    XopVprotw,
    XopVprotwAlt,
    XopVprotd,
    XopVprotdAlt,
    XopVprotq,
    XopVprotqAlt,
    XopVpshlb,
    XopVpshlbAlt,
    XopVpshlw,
    XopVpshlwAlt,
    XopVpshld,
    XopVpshldAlt,
    XopVpshlq,
    XopVpshlqAlt,
    XopVpshab,
    XopVpshabAlt,
    XopVpshaw,
    XopVpshawAlt,
    XopVpshad,
    XopVpshadAlt,
    XopVpshaq,
    XopVpshaqAlt,
    XopVphaddbw,
    XopVphaddbd,
    XopVphaddbq,
    XopVphaddwd,
    XopVphaddwq,
    XopVphadddq,
    XopVphaddubw,
    XopVphaddubd,
    XopVphaddubq,
    XopVphadduwd,
    XopVphadduwq,
    XopVphaddudq,
    XopVphsubbw,
    XopVphsubwd,
    XopVphsubdq,
    XopLwpinsR32Rm32Imm32,
    XopLwpinsR64Rm32Imm32,
    XopLwpvalR32Rm32Imm32,
    XopLwpvalR64Rm32Imm32,
    XopBextrR32Rm32Imm32,
    XopBextrR64Rm64Imm32,
}

impl Code {
    pub fn is_invalid(self) -> bool {
        self == Code::Invalid
    }
}
