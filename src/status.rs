/*
    Status and rounding control
*/

use bitflags::bitflags;

/// IEEE-754 rounding modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    NearestEven,
    /// Round toward zero (truncate).
    ToZero,
    /// Round toward negative infinity.
    ToNegative,
    /// Round toward positive infinity.
    ToPositive,
}

impl RoundingMode {
    /// Returns the addend applied to a significand whose rounding window
    /// is `mask` (all ones below the result's least significant bit).
    /// Nearest-even adds half an ULP; the directed modes add a full
    /// ULP-minus-one on their own side of zero and nothing on the other.
    pub(crate) fn increment_for(self, sign: bool, mask: u64) -> u64 {
        match self {
            RoundingMode::NearestEven => (mask >> 1) + 1,
            RoundingMode::ToZero => 0,
            RoundingMode::ToNegative => {
                if sign {
                    mask
                } else {
                    0
                }
            }
            RoundingMode::ToPositive => {
                if sign {
                    0
                } else {
                    mask
                }
            }
        }
    }

    /// Increment decision when the rounding window lives in a separate
    /// extra word: `extra`'s top bit is the half-ULP bit and the rest is
    /// sticky.
    pub(crate) fn increment_for_extra(self, sign: bool, extra: u64) -> bool {
        match self {
            RoundingMode::NearestEven => (extra as i64) < 0,
            RoundingMode::ToZero => false,
            RoundingMode::ToNegative => sign && extra != 0,
            RoundingMode::ToPositive => !sign && extra != 0,
        }
    }
}

/// Rounding-precision control for the extended-precision kernel. With
/// [`RoundingPrecision::Single`] or [`RoundingPrecision::Double`] the
/// 80-bit operations deliver results rounded to 24 or 53 significand
/// bits, still stored in the 80-bit encoding with the low bits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPrecision {
    Single,
    Double,
    #[default]
    Extended,
}

/// When underflow tininess is detected: before or after the result has
/// been rounded. Both are IEEE-permitted; they differ only in whether a
/// value that rounds up into the normal range still counts as tiny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TininessMode {
    BeforeRounding,
    #[default]
    AfterRounding,
}

bitflags! {
    /// Cumulative IEEE-754 exception flags. Operations OR flags into the
    /// status; they are never cleared implicitly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        const INVALID     = 0x01;
        /// A subnormal operand was consumed.
        const DENORMAL    = 0x02;
        const DIV_BY_ZERO = 0x04;
        const OVERFLOW    = 0x08;
        const UNDERFLOW   = 0x10;
        const INEXACT     = 0x20;
    }
}

/// Result of a three-way comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Less,
    Equal,
    Greater,
    /// At least one operand was a NaN.
    Unordered,
}

/// Rounding configuration and accumulated exception flags.
///
/// A `Status` is created by the caller and passed by mutable reference
/// through every operation. Keeping it a plain value (rather than
/// process-wide state) lets re-entrant callers, such as an emulator with
/// one guest CPU per thread, stay naturally isolated.
#[derive(Debug, Clone, Default)]
pub struct Status {
    rounding_mode: RoundingMode,
    rounding_precision: RoundingPrecision,
    tininess: TininessMode,
    flush_underflow_to_zero: bool,
    flags: Flags,
}

impl Status {
    /// Creates a status with round-to-nearest-even, full extended
    /// precision, tininess detected after rounding, no flushing, and no
    /// flags raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rounding mode.
    pub fn with_rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rounding_mode = rm;
        self
    }

    /// Sets the rounding precision used by the extended-format kernel.
    pub fn with_rounding_precision(mut self, precision: RoundingPrecision) -> Self {
        self.rounding_precision = precision;
        self
    }

    /// Sets the underflow tininess detection policy.
    pub fn with_tininess(mut self, tininess: TininessMode) -> Self {
        self.tininess = tininess;
        self
    }

    /// Sets whether tiny results are flushed to zero instead of being
    /// delivered as subnormals.
    pub fn with_flush_underflow_to_zero(mut self, flush: bool) -> Self {
        self.flush_underflow_to_zero = flush;
        self
    }

    /// Returns the current rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Returns the current extended-format rounding precision.
    pub fn rounding_precision(&self) -> RoundingPrecision {
        self.rounding_precision
    }

    /// Returns the tininess detection policy.
    pub fn tininess(&self) -> TininessMode {
        self.tininess
    }

    /// Returns true if tiny results are flushed to zero.
    pub fn flush_underflow_to_zero(&self) -> bool {
        self.flush_underflow_to_zero
    }

    /// Returns the flags accumulated so far.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns true if all of `flags` are currently raised.
    pub fn test(&self, flags: Flags) -> bool {
        self.flags.contains(flags)
    }

    /// ORs `flags` into the accumulated set.
    pub fn raise(&mut self, flags: Flags) {
        self.flags |= flags;
    }

    /// Clears every accumulated flag.
    pub fn clear_flags(&mut self) {
        self.flags = Flags::empty();
    }
}
