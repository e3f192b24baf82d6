//! legacy prefixes and `rex`.

use decoder::{ByteSource, ErrorKind};

use crate::decoder::Bytes;
use crate::register::RegSpec;
use crate::Bitness;

/// the legacy prefixes that preceded an opcode.
///
/// segment and size overrides follow "last wins". F2 and F3 are mutually exclusive here: the later
/// of the two is the one that counts, both for mandatory-prefix selection and as a `rep` prefix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Prefixes {
    bits: u8,
    rex: PrefixRex,
    segment: Option<RegSpec>,
}

/// which prefix picks among the entries of a mandatory-prefix slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum MandatoryPrefix {
    None,
    P66,
    PF3,
    PF2,
}

impl MandatoryPrefix {
    /// position in a `[none, 66, F3, F2]` row. VEX and EVEX `pp` uses the same order.
    pub(crate) fn index(self) -> usize {
        match self {
            MandatoryPrefix::None => 0,
            MandatoryPrefix::P66 => 1,
            MandatoryPrefix::PF3 => 2,
            MandatoryPrefix::PF2 => 3,
        }
    }

    pub(crate) fn from_pp(pp: u8) -> Self {
        match pp & 3 {
            0 => MandatoryPrefix::None,
            1 => MandatoryPrefix::P66,
            2 => MandatoryPrefix::PF3,
            _ => MandatoryPrefix::PF2,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct PrefixRex {
    bits: u8,
}

impl PrefixRex {
    #[inline]
    pub(crate) fn present(&self) -> bool {
        self.bits & 0x40 == 0x40
    }
    #[inline]
    pub(crate) fn w(&self) -> bool {
        self.bits & 0x08 == 0x08
    }
    #[inline]
    pub(crate) fn r(&self) -> bool {
        self.bits & 0x04 == 0x04
    }
    #[inline]
    pub(crate) fn x(&self) -> bool {
        self.bits & 0x02 == 0x02
    }
    #[inline]
    pub(crate) fn b(&self) -> bool {
        self.bits & 0x01 == 0x01
    }
}

impl Prefixes {
    pub(crate) fn new() -> Prefixes {
        Prefixes {
            bits: 0,
            rex: PrefixRex { bits: 0 },
            segment: None,
        }
    }
    #[inline]
    pub(crate) fn operand_size(&self) -> bool {
        self.bits & 0x01 == 0x01
    }
    #[inline]
    fn set_operand_size(&mut self) {
        self.bits |= 0x01
    }
    #[inline]
    pub(crate) fn address_size(&self) -> bool {
        self.bits & 0x02 == 0x02
    }
    #[inline]
    fn set_address_size(&mut self) {
        self.bits |= 0x02
    }
    #[inline]
    pub(crate) fn lock(&self) -> bool {
        self.bits & 0x04 == 0x04
    }
    #[inline]
    fn set_lock(&mut self) {
        self.bits |= 0x04
    }
    #[inline]
    pub(crate) fn rep(&self) -> bool {
        self.bits & 0x30 == 0x10
    }
    #[inline]
    fn set_rep(&mut self) {
        self.bits = (self.bits & 0xcf) | 0x10
    }
    #[inline]
    pub(crate) fn repnz(&self) -> bool {
        self.bits & 0x30 == 0x30
    }
    #[inline]
    fn set_repnz(&mut self) {
        self.bits = (self.bits & 0xcf) | 0x30
    }
    #[inline]
    pub(crate) fn rex(&self) -> PrefixRex {
        self.rex
    }
    #[inline]
    fn rex_from(&mut self, bits: u8) {
        self.rex.bits = bits;
    }
    #[inline]
    pub(crate) fn segment(&self) -> Option<RegSpec> {
        self.segment
    }

    /// 66, F2, F3 or `rex` seen. VEX, EVEX and XOP may not follow any of them.
    pub(crate) fn blocks_extended_encoding(&self) -> bool {
        self.operand_size() || self.rep() || self.repnz() || self.rex.present()
    }

    /// the mandatory prefix this prefix set selects with: the later of F2/F3, then 66.
    pub(crate) fn mandatory(&self) -> MandatoryPrefix {
        if self.rep() {
            MandatoryPrefix::PF3
        } else if self.repnz() {
            MandatoryPrefix::PF2
        } else if self.operand_size() {
            MandatoryPrefix::P66
        } else {
            MandatoryPrefix::None
        }
    }

    fn set_segment(&mut self, segment: RegSpec, bitness: Bitness) {
        // in 64-bit mode only fs and gs mean anything, and a later es/cs/ss/ds can't displace them.
        let locked = bitness == Bitness::Bits64
            && matches!(self.segment, Some(seg) if seg == RegSpec::fs() || seg == RegSpec::gs());
        let strong = segment == RegSpec::fs() || segment == RegSpec::gs();
        if !locked || strong {
            self.segment = Some(segment);
        }
    }
}

/// read prefixes up to the first byte that isn't one. returns the prefixes and that byte.
///
/// `rex` only counts when it's the last prefix: any prefix after it discards it.
pub(crate) fn scan<S: ByteSource>(bytes: &mut Bytes<'_, S>, bitness: Bitness) -> Result<(Prefixes, u8), ErrorKind> {
    let mut prefixes = Prefixes::new();

    loop {
        let b = bytes.next()?;
        match b {
            0x40..=0x4f if bitness == Bitness::Bits64 => {
                prefixes.rex_from(b);
                continue;
            }
            0x26 => prefixes.set_segment(RegSpec::es(), bitness),
            0x2e => prefixes.set_segment(RegSpec::cs(), bitness),
            0x36 => prefixes.set_segment(RegSpec::ss(), bitness),
            0x3e => prefixes.set_segment(RegSpec::ds(), bitness),
            0x64 => prefixes.set_segment(RegSpec::fs(), bitness),
            0x65 => prefixes.set_segment(RegSpec::gs(), bitness),
            0x66 => prefixes.set_operand_size(),
            0x67 => prefixes.set_address_size(),
            0xf0 => prefixes.set_lock(),
            0xf2 => prefixes.set_repnz(),
            0xf3 => prefixes.set_rep(),
            _ => return Ok((prefixes, b)),
        }
        prefixes.rex_from(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder::Reader;

    fn scan_hex(data: &[u8], bitness: Bitness) -> Result<(Prefixes, u8), ErrorKind> {
        let mut reader = Reader::new(data);
        let mut bytes = Bytes::new(&mut reader);
        scan(&mut bytes, bitness)
    }

    #[test]
    fn rex_must_be_last() {
        let (prefixes, opc) = scan_hex(&[0x48, 0x89, 0xc0], Bitness::Bits64).unwrap();
        assert!(prefixes.rex().w());
        assert_eq!(opc, 0x89);

        let (prefixes, _) = scan_hex(&[0x48, 0x66, 0x89, 0xc0], Bitness::Bits64).unwrap();
        assert!(!prefixes.rex().present());
        assert!(prefixes.operand_size());
    }

    #[test]
    fn rex_is_an_opcode_outside_64_bit_mode() {
        let (prefixes, opc) = scan_hex(&[0x48, 0x90], Bitness::Bits32).unwrap();
        assert!(!prefixes.rex().present());
        assert_eq!(opc, 0x48);
    }

    #[test]
    fn later_rep_prefix_wins() {
        let (prefixes, _) = scan_hex(&[0xf2, 0xf3, 0xa4], Bitness::Bits32).unwrap();
        assert!(prefixes.rep());
        assert!(!prefixes.repnz());
        assert_eq!(prefixes.mandatory(), MandatoryPrefix::PF3);

        let (prefixes, _) = scan_hex(&[0xf3, 0x66, 0xf2, 0x0f], Bitness::Bits32).unwrap();
        assert_eq!(prefixes.mandatory(), MandatoryPrefix::PF2);
    }

    #[test]
    fn segment_overrides() {
        let (prefixes, _) = scan_hex(&[0x2e, 0x36, 0x8b, 0x00], Bitness::Bits32).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::ss()));

        let (prefixes, _) = scan_hex(&[0x64, 0x2e, 0x8b, 0x00], Bitness::Bits64).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::fs()));

        let (prefixes, _) = scan_hex(&[0x64, 0x65, 0x8b, 0x00], Bitness::Bits64).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::gs()));
    }

    #[test]
    fn prefixes_alone_exhaust_input() {
        assert_eq!(scan_hex(&[0x66, 0x67], Bitness::Bits16), Err(ErrorKind::ExhaustedInput));
        assert_eq!(scan_hex(&[0x66; 16], Bitness::Bits16), Err(ErrorKind::TooLong));
    }
}
