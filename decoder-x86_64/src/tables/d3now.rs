//! 3DNow! (`0F 0F /r ib`). the instruction is named by the byte after the operands.

use crate::code::Code;

pub(crate) fn lookup(suffix: u8) -> Option<Code> {
    Some(match suffix {
        0x0c => Code::Pi2fwMmMmm64,
        0x0d => Code::Pi2fdMmMmm64,
        0x1c => Code::Pf2iwMmMmm64,
        0x1d => Code::Pf2idMmMmm64,
        0x86 => Code::PfrcpvMmMmm64,
        0x87 => Code::PfrsqrtvMmMmm64,
        0x8a => Code::PfnaccMmMmm64,
        0x8e => Code::PfpnaccMmMmm64,
        0x90 => Code::PfcmpgeMmMmm64,
        0x94 => Code::PfminMmMmm64,
        0x96 => Code::PfrcpMmMmm64,
        0x97 => Code::PfrsqrtMmMmm64,
        0x9a => Code::PfsubMmMmm64,
        0x9e => Code::PfaddMmMmm64,
        0xa0 => Code::PfcmpgtMmMmm64,
        0xa4 => Code::PfmaxMmMmm64,
        0xa6 => Code::Pfrcpit1MmMmm64,
        0xa7 => Code::Pfrsqit1MmMmm64,
        0xaa => Code::PfsubrMmMmm64,
        0xae => Code::PfaccMmMmm64,
        0xb0 => Code::PfcmpeqMmMmm64,
        0xb4 => Code::PfmulMmMmm64,
        0xb6 => Code::Pfrcpit2MmMmm64,
        0xb7 => Code::PmulhrwMmMmm64,
        0xbb => Code::PswapdMmMmm64,
        0xbf => Code::PavgusbMmMmm64,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(lookup(0x9e), Some(Code::PfaddMmMmm64));
        assert_eq!(lookup(0xbf), Some(Code::PavgusbMmMmm64));
        assert_eq!(lookup(0x00), None);
        assert_eq!((0..=255u8).filter_map(lookup).count(), 26);
    }
}
