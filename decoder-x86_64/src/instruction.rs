use crate::code::Code;
use crate::operand::{MemoryOperand, Operand, RoundingControl};
use crate::register::RegSpec;
use crate::Bitness;

/// which prefix scheme an instruction was encoded with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    Legacy,
    Vex,
    Evex,
    Xop,
    D3Now,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct PrefixFlags: u8 {
        const LOCK = 1 << 0;
        const REP = 1 << 1;
        const REPNE = 1 << 2;
        const XACQUIRE = 1 << 3;
        const XRELEASE = 1 << 4;
        const BROADCAST = 1 << 5;
        const ZEROING = 1 << 6;
        const SAE = 1 << 7;
    }
}

/// a decoded instruction.
///
/// instructions are plain values: they are produced by [`Decoder::decode`](crate::Decoder::decode)
/// and never change afterwards. operands beyond `op_count()` are `Operand::Nothing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub(crate) code: Code,
    pub(crate) len: u8,
    pub(crate) op_count: u8,
    pub(crate) operands: [Operand; 5],
    pub(crate) ip: u64,
    pub(crate) code_size: Bitness,
    pub(crate) encoding: EncodingKind,
    pub(crate) segment_prefix: Option<RegSpec>,
    pub(crate) prefixes: PrefixFlags,
    pub(crate) op_mask: Option<RegSpec>,
    pub(crate) rounding: Option<RoundingControl>,
}

impl Instruction {
    pub(crate) fn invalid(ip: u64, len: usize, code_size: Bitness) -> Self {
        Self {
            code: Code::Invalid,
            len: len as u8,
            op_count: 0,
            operands: [Operand::Nothing; 5],
            ip,
            code_size,
            encoding: EncodingKind::Legacy,
            segment_prefix: None,
            prefixes: PrefixFlags::empty(),
            op_mask: None,
            rounding: None,
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn is_invalid(&self) -> bool {
        self.code == Code::Invalid
    }

    /// length of the instruction in bytes, including prefixes.
    ///
    /// for an invalid instruction this is the number of bytes that were consumed before decoding
    /// gave up, which is never more than 15.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// `true` only for an invalid instruction decoded from an already-exhausted source.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn op_count(&self) -> usize {
        self.op_count as usize
    }

    /// the operand in slot `idx`. slots past `op_count()` hold `Operand::Nothing`.
    ///
    /// # Panics
    ///
    /// if `idx` is 5 or more.
    pub fn op(&self, idx: usize) -> &Operand {
        &self.operands[idx]
    }

    pub fn ops(&self) -> &[Operand] {
        &self.operands[..self.op_count as usize]
    }

    /// address this instruction was decoded at.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// address of the byte following this instruction.
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64)
    }

    /// the bitness the instruction was decoded for.
    pub fn code_size(&self) -> Bitness {
        self.code_size
    }

    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    pub fn has_lock(&self) -> bool {
        self.prefixes.contains(PrefixFlags::LOCK)
    }

    pub fn has_rep(&self) -> bool {
        self.prefixes.contains(PrefixFlags::REP)
    }

    pub fn has_repne(&self) -> bool {
        self.prefixes.contains(PrefixFlags::REPNE)
    }

    pub fn has_xacquire(&self) -> bool {
        self.prefixes.contains(PrefixFlags::XACQUIRE)
    }

    pub fn has_xrelease(&self) -> bool {
        self.prefixes.contains(PrefixFlags::XRELEASE)
    }

    /// the segment override prefix in effect, if any.
    pub fn segment_prefix(&self) -> Option<RegSpec> {
        self.segment_prefix
    }

    /// the EVEX opmask register, `None` when unmasked (`k0`).
    pub fn op_mask(&self) -> Option<RegSpec> {
        self.op_mask
    }

    /// `true` for zeroing-masking (`{z}`), `false` for merge-masking.
    pub fn zeroing(&self) -> bool {
        self.prefixes.contains(PrefixFlags::ZEROING)
    }

    /// `true` if the memory operand is an EVEX embedded broadcast (`{1toN}`).
    pub fn broadcast(&self) -> bool {
        self.prefixes.contains(PrefixFlags::BROADCAST)
    }

    /// `true` for `{sae}`, also implied by any embedded rounding control.
    pub fn suppress_all_exceptions(&self) -> bool {
        self.prefixes.contains(PrefixFlags::SAE)
    }

    pub fn rounding(&self) -> Option<RoundingControl> {
        self.rounding
    }

    /// the first memory operand, if there is one.
    pub fn memory_operand(&self) -> Option<&MemoryOperand> {
        self.ops().iter().find_map(Operand::mem)
    }

    /// the absolute address referenced by a rip/eip-relative memory operand.
    pub fn ip_rel_memory_address(&self) -> Option<u64> {
        let mem = self.memory_operand().filter(|mem| mem.is_ip_relative())?;
        let address = self.next_ip().wrapping_add(mem.displacement);

        if mem.base == Some(RegSpec::eip()) {
            Some(address as u32 as u64)
        } else {
            Some(address)
        }
    }
}
