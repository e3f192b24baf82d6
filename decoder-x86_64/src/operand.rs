use std::fmt;

use crate::register::RegSpec;

/// a single decoded operand.
///
/// the fixed-size operand array of an [`Instruction`](crate::Instruction) holds
/// `Operand::Nothing` in every slot past [`op_count`](crate::Instruction::op_count).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operand {
    #[default]
    Nothing,
    Register(RegSpec),
    Memory(MemoryOperand),
    Immediate(Immediate),
    /// a near branch, with its target already computed from the next instruction's address.
    /// `size` is the width in bytes the target was wrapped to.
    NearBranch { target: u64, size: u8 },
    /// a far pointer, `selector:offset`. `size` is the width of `offset` in bytes.
    FarBranch { selector: u16, offset: u32, size: u8 },
}

impl Operand {
    pub fn is_memory(&self) -> bool {
        matches!(self, Operand::Memory(_))
    }

    pub fn is_register(&self) -> bool {
        matches!(self, Operand::Register(_))
    }

    pub fn reg(&self) -> Option<RegSpec> {
        match self {
            Operand::Register(reg) => Some(*reg),
            _ => None,
        }
    }

    pub fn mem(&self) -> Option<&MemoryOperand> {
        match self {
            Operand::Memory(mem) => Some(mem),
            _ => None,
        }
    }

    pub fn imm(&self) -> Option<Immediate> {
        match self {
            Operand::Immediate(imm) => Some(*imm),
            _ => None,
        }
    }
}

/// the components of a memory reference.
///
/// `displacement` is already sign-extended and wrapped to the address size, so `[bp-2]` in
/// 16-bit addressing has a displacement of `0xfffe`. rip/eip-relative operands keep a
/// sign-extended 64-bit displacement instead. see
/// [`Instruction::ip_rel_memory_address`](crate::Instruction::ip_rel_memory_address).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemoryOperand {
    pub segment: RegSpec,
    pub base: Option<RegSpec>,
    pub index: Option<RegSpec>,
    /// one of 1, 2, 4 or 8.
    pub scale: u8,
    pub displacement: u64,
    /// how many bytes the displacement occupied in the encoding: 0, 1, 2, 4 or 8.
    pub disp_size: u8,
    /// the address size in bytes: 2, 4 or 8.
    pub address_size: u8,
    /// `true` if `index` is a vector register (gather/scatter addressing).
    pub vsib: bool,
}

impl MemoryOperand {
    pub(crate) fn absolute(segment: RegSpec, displacement: u64, disp_size: u8, address_size: u8) -> Self {
        Self {
            segment,
            base: None,
            index: None,
            scale: 1,
            displacement,
            disp_size,
            address_size,
            vsib: false,
        }
    }

    /// `true` for `[rip + disp]` and `[eip + disp]` forms.
    pub fn is_ip_relative(&self) -> bool {
        matches!(self.base, Some(base) if base == RegSpec::rip() || base == RegSpec::eip())
    }
}

impl fmt::Display for MemoryOperand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:[", self.segment)?;
        let mut first = true;
        if let Some(base) = self.base {
            write!(f, "{base}")?;
            first = false;
        }
        if let Some(index) = self.index {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{index}")?;
            if self.scale != 1 {
                write!(f, "*{}", self.scale)?;
            }
            first = false;
        }
        if self.disp_size != 0 || first {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{:#x}", self.displacement)?;
        }
        f.write_str("]")
    }
}

/// how an immediate was encoded, and what width it was extended to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImmKind {
    Imm8,
    Imm16,
    Imm32,
    Imm64,
    /// imm8 sign-extended to 16 bits.
    Imm8To16,
    /// imm8 sign-extended to 32 bits.
    Imm8To32,
    /// imm8 sign-extended to 64 bits.
    Imm8To64,
    /// imm32 sign-extended to 64 bits.
    Imm32To64,
    /// the second imm8 of `enter`, `extrq` and `insertq`.
    Imm8Second,
}

impl ImmKind {
    /// width in bytes of the value after extension.
    pub fn width(self) -> u8 {
        match self {
            ImmKind::Imm8 | ImmKind::Imm8Second => 1,
            ImmKind::Imm16 | ImmKind::Imm8To16 => 2,
            ImmKind::Imm32 | ImmKind::Imm8To32 => 4,
            ImmKind::Imm64 | ImmKind::Imm8To64 | ImmKind::Imm32To64 => 8,
        }
    }

    /// width in bytes of the value as it was encoded.
    pub fn encoded_width(self) -> u8 {
        match self {
            ImmKind::Imm8
            | ImmKind::Imm8Second
            | ImmKind::Imm8To16
            | ImmKind::Imm8To32
            | ImmKind::Imm8To64 => 1,
            ImmKind::Imm16 => 2,
            ImmKind::Imm32 | ImmKind::Imm32To64 => 4,
            ImmKind::Imm64 => 8,
        }
    }
}

/// an immediate, stored already extended to its final width and masked to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Immediate {
    pub value: u64,
    pub kind: ImmKind,
}

impl Immediate {
    /// build an immediate from its raw encoded bits, applying the kind's sign extension.
    pub(crate) fn extend(raw: u64, kind: ImmKind) -> Self {
        let value = match kind {
            ImmKind::Imm8 | ImmKind::Imm8Second => raw as u8 as u64,
            ImmKind::Imm16 => raw as u16 as u64,
            ImmKind::Imm32 => raw as u32 as u64,
            ImmKind::Imm64 => raw,
            ImmKind::Imm8To16 => raw as u8 as i8 as i16 as u16 as u64,
            ImmKind::Imm8To32 => raw as u8 as i8 as i32 as u32 as u64,
            ImmKind::Imm8To64 => raw as u8 as i8 as i64 as u64,
            ImmKind::Imm32To64 => raw as u32 as i32 as i64 as u64,
        };

        Self { value, kind }
    }

    /// the value reinterpreted as signed at its final width.
    pub fn signed(&self) -> i64 {
        match self.kind.width() {
            1 => self.value as u8 as i8 as i64,
            2 => self.value as u16 as i16 as i64,
            4 => self.value as u32 as i32 as i64,
            _ => self.value as i64,
        }
    }
}

/// embedded rounding selected by EVEX `L'L` on register forms with `b` set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingControl {
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    pub(crate) fn from_bits(ll: u8) -> Self {
        match ll & 3 {
            0 => RoundingControl::RoundToNearest,
            1 => RoundingControl::RoundDown,
            2 => RoundingControl::RoundUp,
            _ => RoundingControl::RoundTowardZero,
        }
    }
}

impl fmt::Display for RoundingControl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RoundingControl::RoundToNearest => "{rn-sae}",
            RoundingControl::RoundDown => "{rd-sae}",
            RoundingControl::RoundUp => "{ru-sae}",
            RoundingControl::RoundTowardZero => "{rz-sae}",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediates_extend_at_resolution() {
        let imm = Immediate::extend(0xff, ImmKind::Imm8To32);
        assert_eq!(imm.value, 0xffff_ffff);
        assert_eq!(imm.signed(), -1);

        let imm = Immediate::extend(0x8000_0000, ImmKind::Imm32To64);
        assert_eq!(imm.value, 0xffff_ffff_8000_0000);
        assert_eq!(imm.kind.encoded_width(), 4);
        assert_eq!(imm.kind.width(), 8);

        let imm = Immediate::extend(0x7f, ImmKind::Imm8To16);
        assert_eq!(imm.value, 0x7f);
    }

    #[test]
    fn memory_display() {
        let mem = MemoryOperand {
            segment: RegSpec::ds(),
            base: Some(RegSpec::bx()),
            index: Some(RegSpec::si()),
            scale: 1,
            displacement: 0,
            disp_size: 0,
            address_size: 2,
            vsib: false,
        };
        assert_eq!(mem.to_string(), "ds:[bx+si]");

        let mem = MemoryOperand::absolute(RegSpec::ds(), 0x1234, 2, 2);
        assert_eq!(mem.to_string(), "ds:[0x1234]");
        assert!(!mem.is_ip_relative());
    }
}
