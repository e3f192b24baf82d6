use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// decoder configuration, fixed for the lifetime of a [`Decoder`](crate::Decoder).
    ///
    /// apart from `NO_INVALID_CHECK`, every flag turns one family of rare, legacy or
    /// vendor-specific table entries on or off. flags that name an instruction which doesn't
    /// exist in the decoder's bitness have no effect.
    ///
    /// ```
    /// use x86_64::DecoderOptions;
    ///
    /// let opts: DecoderOptions = "NO_INVALID_CHECK | LOADALL286".parse().unwrap();
    /// assert!(opts.contains(DecoderOptions::NO_INVALID_CHECK));
    /// assert_eq!(opts.to_string(), "NO_INVALID_CHECK | LOADALL286");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DecoderOptions: u32 {
        /// decode encodings that break a legality rule instead of rejecting them.
        /// unmapped opcodes, truncated input and overlong instructions are still rejected.
        const NO_INVALID_CHECK = 1 << 0;
        /// AMD branch semantics: in 64-bit mode a 66 prefix shrinks near branches to 16 bits.
        const AMD = 1 << 1;
        /// `F3 90` is `nop` with a rep prefix.
        const NO_PAUSE = 1 << 2;
        /// `F3 0F 09` is `wbinvd`.
        const NO_WBNOINVD = 1 << 3;
        /// `lahf`/`sahf` are unmapped in 64-bit mode.
        const NO_LAHF_SAHF_64 = 1 << 4;
        /// `F3 0F BC` is `bsf`.
        const NO_MPFX_0FBC = 1 << 5;
        /// `F3 0F BD` is `bsr`.
        const NO_MPFX_0FBD = 1 << 6;
        /// `lock mov` to or from a control register is illegal instead of naming `cr8`.
        const NO_LOCK_MOV_CR0 = 1 << 7;
        /// `0F 05` is the 286 `loadall`.
        const LOADALL286 = 1 << 8;
        /// `0F 07` is the 386 `loadall`.
        const LOADALL386 = 1 << 9;
        /// `0F A6`/`0F A7` are the early 486 `cmpxchg`.
        const CMPXCHG486A = 1 << 10;
        /// `0F A6`/`0F A7` are `xbts`/`ibts`.
        const XBTS = 1 << 11;
        /// `0F 10`..`0F 13` without a mandatory prefix are `umov`.
        const UMOV = 1 << 12;
        /// `0F 24`/`0F 26` move to and from test registers.
        const MOV_TR = 1 << 13;
        /// `jmpe` (IA-64 mode switch).
        const JMPE = 1 << 14;
        /// `0F 1A`/`0F 1B` are MPX instructions instead of reserved nops.
        const MPX = 1 << 15;
        /// `66 0F AE F8` is `pcommit`.
        const PCOMMIT = 1 << 16;
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions::empty()
    }
}

impl fmt::Display for DecoderOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl FromStr for DecoderOptions {
    type Err = bitflags::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bitflags::parser::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let opts = DecoderOptions::XBTS | DecoderOptions::CMPXCHG486A;
        assert_eq!(opts.to_string(), "CMPXCHG486A | XBTS");
        assert_eq!("CMPXCHG486A | XBTS".parse::<DecoderOptions>().unwrap(), opts);
        assert_eq!("".parse::<DecoderOptions>().unwrap(), DecoderOptions::empty());
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!("NO_SUCH_FLAG".parse::<DecoderOptions>().is_err());
    }
}
