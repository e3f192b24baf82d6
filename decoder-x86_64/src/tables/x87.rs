//! x87 escapes, `D8` through `DF`.
//!
//! memory forms are selected by ModRM.reg alone. register forms select by ModRM.reg and, for
//! the rows of operand-less instructions, by ModRM.rm as well.

use super::*;

const INV: Entry = Entry::Invalid;

pub(crate) static D8_MEM: Entry = Entry::Group(&[
    op!(FaddM32fp, M),
    op!(FmulM32fp, M),
    op!(FcomM32fp, M),
    op!(FcompM32fp, M),
    op!(FsubM32fp, M),
    op!(FsubrM32fp, M),
    op!(FdivM32fp, M),
    op!(FdivrM32fp, M),
]);

pub(crate) static D8_REG: Entry = Entry::Group(&[
    op!(FaddSt0Sti, ST0, STI),
    op!(FmulSt0Sti, ST0, STI),
    op!(FcomSt0Sti, ST0, STI),
    op!(FcompSt0Sti, ST0, STI),
    op!(FsubSt0Sti, ST0, STI),
    op!(FsubrSt0Sti, ST0, STI),
    op!(FdivSt0Sti, ST0, STI),
    op!(FdivrSt0Sti, ST0, STI),
]);

pub(crate) static D9_MEM: Entry = Entry::Group(&[
    op!(FldM32fp, M),
    INV,
    op!(FstM32fp, M),
    op!(FstpM32fp, M),
    op!(FldenvM, M),
    op!(FldcwM2byte, M),
    op!(FnstenvM, M),
    op!(FnstcwM2byte, M),
]);

pub(crate) static D9_REG: Entry = Entry::Group(&[
    op!(FldSt0Sti, ST0, STI),
    op!(FxchSt0Sti, ST0, STI),
    Entry::RmGroup(&[op!(Fnop), INV, INV, INV, INV, INV, INV, INV]),
    INV,
    Entry::RmGroup(&[op!(Fchs), op!(Fabs), INV, INV, op!(Ftst), op!(Fxam), INV, INV]),
    Entry::RmGroup(&[
        op!(Fld1),
        op!(Fldl2t),
        op!(Fldl2e),
        op!(Fldpi),
        op!(Fldlg2),
        op!(Fldln2),
        op!(Fldz),
        INV,
    ]),
    Entry::RmGroup(&[
        op!(F2xm1),
        op!(Fyl2x),
        op!(Fptan),
        op!(Fpatan),
        op!(Fxtract),
        op!(Fprem1),
        op!(Fdecstp),
        op!(Fincstp),
    ]),
    Entry::RmGroup(&[
        op!(Fprem),
        op!(Fyl2xp1),
        op!(Fsqrt),
        op!(Fsincos),
        op!(Frndint),
        op!(Fscale),
        op!(Fsin),
        op!(Fcos),
    ]),
]);

pub(crate) static DA_MEM: Entry = Entry::Group(&[
    op!(FiaddM32int, M),
    op!(FimulM32int, M),
    op!(FicomM32int, M),
    op!(FicompM32int, M),
    op!(FisubM32int, M),
    op!(FisubrM32int, M),
    op!(FidivM32int, M),
    op!(FidivrM32int, M),
]);

pub(crate) static DA_REG: Entry = Entry::Group(&[
    op!(FcmovbSt0Sti, ST0, STI),
    op!(FcmoveSt0Sti, ST0, STI),
    op!(FcmovbeSt0Sti, ST0, STI),
    op!(FcmovuSt0Sti, ST0, STI),
    INV,
    Entry::RmGroup(&[INV, op!(Fucompp), INV, INV, INV, INV, INV, INV]),
    INV,
    INV,
]);

pub(crate) static DB_MEM: Entry = Entry::Group(&[
    op!(FildM32int, M),
    op!(FisttpM32int, M),
    op!(FistM32int, M),
    op!(FistpM32int, M),
    INV,
    op!(FldM80fp, M),
    INV,
    op!(FstpM80fp, M),
]);

pub(crate) static DB_REG: Entry = Entry::Group(&[
    op!(FcmovnbSt0Sti, ST0, STI),
    op!(FcmovneSt0Sti, ST0, STI),
    op!(FcmovnbeSt0Sti, ST0, STI),
    op!(FcmovnuSt0Sti, ST0, STI),
    Entry::RmGroup(&[op!(Fneni), op!(Fndisi), op!(Fnclex), op!(Fninit), op!(Fnsetpm), INV, INV, INV]),
    op!(FucomiSt0Sti, ST0, STI),
    op!(FcomiSt0Sti, ST0, STI),
    INV,
]);

pub(crate) static DC_MEM: Entry = Entry::Group(&[
    op!(FaddM64fp, M),
    op!(FmulM64fp, M),
    op!(FcomM64fp, M),
    op!(FcompM64fp, M),
    op!(FsubM64fp, M),
    op!(FsubrM64fp, M),
    op!(FdivM64fp, M),
    op!(FdivrM64fp, M),
]);

// the destination is st(i). the sub and div rows swap their reversed forms relative to D8.
pub(crate) static DC_REG: Entry = Entry::Group(&[
    op!(FaddStiSt0, STI, ST0),
    op!(FmulStiSt0, STI, ST0),
    INV,
    INV,
    op!(FsubrStiSt0, STI, ST0),
    op!(FsubStiSt0, STI, ST0),
    op!(FdivrStiSt0, STI, ST0),
    op!(FdivStiSt0, STI, ST0),
]);

pub(crate) static DD_MEM: Entry = Entry::Group(&[
    op!(FldM64fp, M),
    op!(FisttpM64int, M),
    op!(FstM64fp, M),
    op!(FstpM64fp, M),
    op!(FrstorM, M),
    INV,
    op!(FnsaveM, M),
    op!(FnstswM2byte, M),
]);

pub(crate) static DD_REG: Entry = Entry::Group(&[
    op!(FfreeSti, STI),
    INV,
    op!(FstSti, STI),
    op!(FstpSti, STI),
    op!(FucomSt0Sti, ST0, STI),
    op!(FucompSt0Sti, ST0, STI),
    INV,
    INV,
]);

pub(crate) static DE_MEM: Entry = Entry::Group(&[
    op!(FiaddM16int, M),
    op!(FimulM16int, M),
    op!(FicomM16int, M),
    op!(FicompM16int, M),
    op!(FisubM16int, M),
    op!(FisubrM16int, M),
    op!(FidivM16int, M),
    op!(FidivrM16int, M),
]);

pub(crate) static DE_REG: Entry = Entry::Group(&[
    op!(FaddpStiSt0, STI, ST0),
    op!(FmulpStiSt0, STI, ST0),
    INV,
    Entry::RmGroup(&[INV, op!(Fcompp), INV, INV, INV, INV, INV, INV]),
    op!(FsubrpStiSt0, STI, ST0),
    op!(FsubpStiSt0, STI, ST0),
    op!(FdivrpStiSt0, STI, ST0),
    op!(FdivpStiSt0, STI, ST0),
]);

pub(crate) static DF_MEM: Entry = Entry::Group(&[
    op!(FildM16int, M),
    op!(FisttpM16int, M),
    op!(FistM16int, M),
    op!(FistpM16int, M),
    op!(FbldM80bcd, M),
    op!(FildM64int, M),
    op!(FbstpM80bcd, M),
    op!(FistpM64int, M),
]);

pub(crate) static DF_REG: Entry = Entry::Group(&[
    op!(FfreepSti, STI),
    INV,
    INV,
    INV,
    Entry::RmGroup(&[op!(FnstswAx, OpSpec::Implicit(0, RegKind::Word)), INV, INV, INV, INV, INV, INV, INV]),
    op!(FucomipSt0Sti, ST0, STI),
    op!(FcomipSt0Sti, ST0, STI),
    INV,
]);
