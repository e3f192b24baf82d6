use std::fmt;

/// an `x86` register, by its number inside a register bank.
///
/// ```
/// use x86_64::{RegSpec, RegisterBank};
///
/// assert_eq!(RegSpec::ecx().num(), 1);
/// assert_eq!(RegSpec::ecx().bank(), RegisterBank::D);
/// assert_eq!(RegSpec::xmm(17).name(), "xmm17");
/// ```
///
/// byte registers come in two banks. without any `rex` prefix, numbers 4 through 7 name `ah`,
/// `ch`, `dh` and `bh` (bank `B`). once a `rex` prefix is present, they name `spl`, `bpl`, `sil`
/// and `dil` and the bank is `rB`. `al` through `bl` are always reported in bank `B`.
#[derive(Copy, Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub struct RegSpec {
    pub(crate) num: u8,
    pub(crate) bank: RegisterBank,
}

#[rustfmt::skip]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RegisterBank {
    Q, D, W, B, rB,  // Quadword, Dword, Word, Byte
    CR, DR, TR, S,   // Control reg, Debug reg, Test reg, Selector
    RIP, EIP,
    X, Y, Z,         // XMM, YMM, ZMM
    ST, MM,          // ST, MM regs (x87, mmx)
    K,               // AVX512 mask registers
    BND,             // MPX bound registers
}

macro_rules! register {
    ($bank:ident, $name:ident => $num:expr, $($tail:tt)+) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }

        register!($bank, $($tail)*);
    };
    ($bank:ident, $name:ident => $num:expr) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }
    };
}

impl RegSpec {
    /// the number of this register in its bank.
    ///
    /// for general purpose registers the first eight are `rax`, `rcx`, `rdx`, `rbx`, `rsp`,
    /// `rbp`, `rsi` and `rdi` (or their narrower forms), followed by `r8` through `r15`.
    pub const fn num(&self) -> u8 {
        self.num
    }

    pub const fn bank(&self) -> RegisterBank {
        self.bank
    }

    #[inline]
    pub(crate) const fn from_parts(num: u8, bank: RegisterBank) -> RegSpec {
        RegSpec { num, bank }
    }

    /// a general purpose byte register, honoring the `rex`-dependent meaning of 4..=7.
    #[inline]
    pub(crate) const fn gp_byte(num: u8, rex: bool) -> RegSpec {
        if rex && num >= 4 {
            RegSpec { num, bank: RegisterBank::rB }
        } else {
            RegSpec { num, bank: RegisterBank::B }
        }
    }

    /// the width of this register in bytes, `None` for registers with no meaningful width.
    pub const fn width(&self) -> Option<u8> {
        Some(match self.bank {
            RegisterBank::Q | RegisterBank::RIP | RegisterBank::MM | RegisterBank::K => 8,
            RegisterBank::D | RegisterBank::EIP | RegisterBank::TR => 4,
            RegisterBank::W | RegisterBank::S => 2,
            RegisterBank::B | RegisterBank::rB => 1,
            RegisterBank::X | RegisterBank::BND => 16,
            RegisterBank::Y => 32,
            RegisterBank::Z => 64,
            RegisterBank::ST => 10,
            RegisterBank::CR | RegisterBank::DR => return None,
        })
    }

    /// return a human-friendly name for this register.
    pub fn name(&self) -> &'static str {
        let names: &[&'static str] = match self.bank {
            RegisterBank::Q => &Q_NAMES,
            RegisterBank::D => &D_NAMES,
            RegisterBank::W => &W_NAMES,
            RegisterBank::B => &B_NAMES,
            RegisterBank::rB => &RB_NAMES,
            RegisterBank::CR => &CR_NAMES,
            RegisterBank::DR => &DR_NAMES,
            RegisterBank::TR => &TR_NAMES,
            RegisterBank::S => &S_NAMES,
            RegisterBank::RIP => &["rip"],
            RegisterBank::EIP => &["eip"],
            RegisterBank::X => &X_NAMES,
            RegisterBank::Y => &Y_NAMES,
            RegisterBank::Z => &Z_NAMES,
            RegisterBank::ST => &ST_NAMES,
            RegisterBank::MM => &MM_NAMES,
            RegisterBank::K => &K_NAMES,
            RegisterBank::BND => &BND_NAMES,
        };

        names.get(self.num as usize).copied().unwrap_or("BUG")
    }

    /// `true` for registers whose memory accesses default to the `ss` segment.
    pub(crate) const fn is_stack_frame(&self) -> bool {
        matches!(self.bank, RegisterBank::Q | RegisterBank::D | RegisterBank::W)
            && (self.num == 4 || self.num == 5)
    }

    /// construct a `RegSpec` for x87 register `st(num)`
    #[inline]
    pub fn st(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid x87 reg st({})", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::ST,
        }
    }

    /// construct a `RegSpec` for xmm reg `num`
    #[inline]
    pub fn xmm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 xmm reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::X,
        }
    }

    /// construct a `RegSpec` for ymm reg `num`
    #[inline]
    pub fn ymm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 ymm reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::Y,
        }
    }

    /// construct a `RegSpec` for zmm reg `num`
    #[inline]
    pub fn zmm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 zmm reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::Z,
        }
    }

    /// construct a `RegSpec` for mask reg `num`
    #[inline]
    pub fn mask(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid x86 mask reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::K,
        }
    }

    /// construct a `RegSpec` for mmx reg `num`
    #[inline]
    pub fn mm(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid x86 mmx reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::MM,
        }
    }

    /// construct a `RegSpec` for word reg `num`
    #[inline]
    pub fn w(num: u8) -> RegSpec {
        if num >= 16 {
            panic!("invalid x86 word reg {}", num);
        }

        RegSpec {
            num,
            bank: RegisterBank::W,
        }
    }

    register!(RIP, rip => 0);
    register!(EIP, eip => 0);

    register!(S, es => 0, cs => 1, ss => 2, ds => 3, fs => 4, gs => 5);

    register!(Q,
        rax => 0, rcx => 1, rdx => 2, rbx => 3,
        rsp => 4, rbp => 5, rsi => 6, rdi => 7,
        r8 => 8, r9 => 9, r10 => 10, r11 => 11,
        r12 => 12, r13 => 13, r14 => 14, r15 => 15
    );

    register!(D,
        eax => 0, ecx => 1, edx => 2, ebx => 3,
        esp => 4, ebp => 5, esi => 6, edi => 7,
        r8d => 8, r9d => 9, r10d => 10, r11d => 11,
        r12d => 12, r13d => 13, r14d => 14, r15d => 15
    );

    register!(W,
        ax => 0, cx => 1, dx => 2, bx => 3,
        sp => 4, bp => 5, si => 6, di => 7,
        r8w => 8, r9w => 9, r10w => 10, r11w => 11,
        r12w => 12, r13w => 13, r14w => 14, r15w => 15
    );

    register!(B,
        al => 0, cl => 1, dl => 2, bl => 3,
        ah => 4, ch => 5, dh => 6, bh => 7
    );

    register!(rB,
        spl => 4, bpl => 5, sil => 6, dil => 7,
        r8b => 8, r9b => 9, r10b => 10, r11b => 11,
        r12b => 12, r13b => 13, r14b => 14, r15b => 15
    );

    register!(ST, st0 => 0);
    register!(X, xmm0 => 0);
    register!(K, k0 => 0);
    register!(CR, cr0 => 0, cr8 => 8);
}

impl fmt::Display for RegSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[rustfmt::skip]
const Q_NAMES: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi",
    "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15",
];

#[rustfmt::skip]
const D_NAMES: [&str; 16] = [
    "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi",
    "r8d", "r9d", "r10d", "r11d", "r12d", "r13d", "r14d", "r15d",
];

#[rustfmt::skip]
const W_NAMES: [&str; 16] = [
    "ax", "cx", "dx", "bx", "sp", "bp", "si", "di",
    "r8w", "r9w", "r10w", "r11w", "r12w", "r13w", "r14w", "r15w",
];

const B_NAMES: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];

#[rustfmt::skip]
const RB_NAMES: [&str; 16] = [
    "al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil",
    "r8b", "r9b", "r10b", "r11b", "r12b", "r13b", "r14b", "r15b",
];

#[rustfmt::skip]
const CR_NAMES: [&str; 16] = [
    "cr0", "cr1", "cr2", "cr3", "cr4", "cr5", "cr6", "cr7",
    "cr8", "cr9", "cr10", "cr11", "cr12", "cr13", "cr14", "cr15",
];

#[rustfmt::skip]
const DR_NAMES: [&str; 16] = [
    "dr0", "dr1", "dr2", "dr3", "dr4", "dr5", "dr6", "dr7",
    "dr8", "dr9", "dr10", "dr11", "dr12", "dr13", "dr14", "dr15",
];

const TR_NAMES: [&str; 8] = ["tr0", "tr1", "tr2", "tr3", "tr4", "tr5", "tr6", "tr7"];
const S_NAMES: [&str; 6] = ["es", "cs", "ss", "ds", "fs", "gs"];

#[rustfmt::skip]
const X_NAMES: [&str; 32] = [
    "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7",
    "xmm8", "xmm9", "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
    "xmm16", "xmm17", "xmm18", "xmm19", "xmm20", "xmm21", "xmm22", "xmm23",
    "xmm24", "xmm25", "xmm26", "xmm27", "xmm28", "xmm29", "xmm30", "xmm31",
];

#[rustfmt::skip]
const Y_NAMES: [&str; 32] = [
    "ymm0", "ymm1", "ymm2", "ymm3", "ymm4", "ymm5", "ymm6", "ymm7",
    "ymm8", "ymm9", "ymm10", "ymm11", "ymm12", "ymm13", "ymm14", "ymm15",
    "ymm16", "ymm17", "ymm18", "ymm19", "ymm20", "ymm21", "ymm22", "ymm23",
    "ymm24", "ymm25", "ymm26", "ymm27", "ymm28", "ymm29", "ymm30", "ymm31",
];

#[rustfmt::skip]
const Z_NAMES: [&str; 32] = [
    "zmm0", "zmm1", "zmm2", "zmm3", "zmm4", "zmm5", "zmm6", "zmm7",
    "zmm8", "zmm9", "zmm10", "zmm11", "zmm12", "zmm13", "zmm14", "zmm15",
    "zmm16", "zmm17", "zmm18", "zmm19", "zmm20", "zmm21", "zmm22", "zmm23",
    "zmm24", "zmm25", "zmm26", "zmm27", "zmm28", "zmm29", "zmm30", "zmm31",
];

#[rustfmt::skip]
const ST_NAMES: [&str; 8] = [
    "st(0)", "st(1)", "st(2)", "st(3)", "st(4)", "st(5)", "st(6)", "st(7)",
];

const MM_NAMES: [&str; 8] = ["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"];
const K_NAMES: [&str; 8] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];
const BND_NAMES: [&str; 4] = ["bnd0", "bnd1", "bnd2", "bnd3"];
