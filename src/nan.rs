/*
    NaN policy
*/

//! Target conventions for NaNs: how signaling NaNs are told apart from
//! quiet ones, the default quiet NaN of each format, the neutral form
//! used when a NaN crosses formats, and which operand's NaN an
//! operation propagates. The arithmetic kernels call in here and stay
//! agnostic of the convention.
//!
//! The convention implemented is the x86 one: the quiet bit is the most
//! significant fraction bit (bit 62 of the extended significand), and
//! the default NaNs are negative with only the quiet bit set.

use crate::extended::Floatx80;
use crate::status::{Flags, Status};
use crate::{Float32, Float64};

/// Default quiet NaN returned for invalid single-precision operations.
pub const FLOAT32_DEFAULT_NAN: Float32 = 0xFFC0_0000;

/// Default quiet NaN returned for invalid double-precision operations.
pub const FLOAT64_DEFAULT_NAN: Float64 = 0xFFF8_0000_0000_0000;

/// Default quiet NaN returned for invalid extended-precision operations.
pub const FLOATX80_DEFAULT_NAN: Floatx80 = Floatx80 {
    exp: 0xFFFF,
    fraction: 0xC000_0000_0000_0000,
};

/// Returns true if `a` is a NaN of either kind.
pub fn float32_is_nan(a: Float32) -> bool {
    (a << 1) > 0xFF00_0000
}

/// Returns true if `a` is a signaling NaN: maximum exponent, quiet bit
/// clear, nonzero payload.
pub fn float32_is_signaling_nan(a: Float32) -> bool {
    ((a >> 22) & 0x1FF) == 0x1FE && (a & 0x003F_FFFF) != 0
}

/// Returns true if `a` is a NaN of either kind.
pub fn float64_is_nan(a: Float64) -> bool {
    (a << 1) > 0xFFE0_0000_0000_0000
}

/// Returns true if `a` is a signaling NaN.
pub fn float64_is_signaling_nan(a: Float64) -> bool {
    ((a >> 51) & 0xFFF) == 0xFFE && (a & 0x0007_FFFF_FFFF_FFFF) != 0
}

/// Returns true if `a` is a NaN of either kind.
pub fn floatx80_is_nan(a: Floatx80) -> bool {
    (a.exp & 0x7FFF) == 0x7FFF && (a.fraction << 1) != 0
}

/// Returns true if `a` is a signaling NaN.
pub fn floatx80_is_signaling_nan(a: Floatx80) -> bool {
    (a.exp & 0x7FFF) == 0x7FFF
        && (a.fraction & 0x4000_0000_0000_0000) == 0
        && (a.fraction & 0x3FFF_FFFF_FFFF_FFFF) != 0
}

/// A NaN detached from any particular format: a sign and the payload
/// left-aligned in 64 bits. The widening and narrowing conversions pass
/// NaNs through this form so payload bits survive where they fit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommonNan {
    pub sign: bool,
    pub payload: u64,
}

pub(crate) fn float32_to_common_nan(a: Float32, status: &mut Status) -> CommonNan {
    if float32_is_signaling_nan(a) {
        status.raise(Flags::INVALID);
    }
    CommonNan {
        sign: (a >> 31) != 0,
        payload: (a as u64) << 41,
    }
}

pub(crate) fn common_nan_to_float32(a: CommonNan) -> Float32 {
    ((a.sign as u32) << 31) | 0x7FC0_0000 | (a.payload >> 41) as u32
}

pub(crate) fn float64_to_common_nan(a: Float64, status: &mut Status) -> CommonNan {
    if float64_is_signaling_nan(a) {
        status.raise(Flags::INVALID);
    }
    CommonNan {
        sign: (a >> 63) != 0,
        payload: a << 12,
    }
}

pub(crate) fn common_nan_to_float64(a: CommonNan) -> Float64 {
    ((a.sign as u64) << 63) | 0x7FF8_0000_0000_0000 | (a.payload >> 12)
}

pub(crate) fn floatx80_to_common_nan(a: Floatx80, status: &mut Status) -> CommonNan {
    if floatx80_is_signaling_nan(a) {
        status.raise(Flags::INVALID);
    }
    CommonNan {
        sign: (a.exp >> 15) != 0,
        payload: a.fraction << 1,
    }
}

pub(crate) fn common_nan_to_floatx80(a: CommonNan) -> Floatx80 {
    Floatx80 {
        exp: ((a.sign as u16) << 15) | 0x7FFF,
        fraction: 0xC000_0000_0000_0000 | (a.payload >> 1),
    }
}

/// Chooses the NaN to deliver when one or both operands of a
/// single-precision operation are NaNs. Signaling inputs raise
/// `invalid` and are quieted; a quiet input wins over a freshly quieted
/// signaling one; between two of the same kind the larger significand
/// wins.
pub(crate) fn propagate_float32_nan(a: Float32, b: Float32, status: &mut Status) -> Float32 {
    let a_is_nan = float32_is_nan(a);
    let a_is_signaling = float32_is_signaling_nan(a);
    let b_is_nan = float32_is_nan(b);
    let b_is_signaling = float32_is_signaling_nan(b);
    let a = a | 0x0040_0000;
    let b = b | 0x0040_0000;
    if a_is_signaling || b_is_signaling {
        status.raise(Flags::INVALID);
    }
    if a_is_signaling {
        if !b_is_signaling {
            return if b_is_nan { b } else { a };
        }
    } else if a_is_nan {
        if b_is_signaling || !b_is_nan {
            return a;
        }
    } else {
        return b;
    }
    // Both NaNs of the same kind: larger significand, then smaller word.
    if (a << 1) < (b << 1) {
        b
    } else if (b << 1) < (a << 1) {
        a
    } else if a < b {
        a
    } else {
        b
    }
}

/// Double-precision analogue of [`propagate_float32_nan`].
pub(crate) fn propagate_float64_nan(a: Float64, b: Float64, status: &mut Status) -> Float64 {
    let a_is_nan = float64_is_nan(a);
    let a_is_signaling = float64_is_signaling_nan(a);
    let b_is_nan = float64_is_nan(b);
    let b_is_signaling = float64_is_signaling_nan(b);
    let a = a | 0x0008_0000_0000_0000;
    let b = b | 0x0008_0000_0000_0000;
    if a_is_signaling || b_is_signaling {
        status.raise(Flags::INVALID);
    }
    if a_is_signaling {
        if !b_is_signaling {
            return if b_is_nan { b } else { a };
        }
    } else if a_is_nan {
        if b_is_signaling || !b_is_nan {
            return a;
        }
    } else {
        return b;
    }
    if (a << 1) < (b << 1) {
        b
    } else if (b << 1) < (a << 1) {
        a
    } else if a < b {
        a
    } else {
        b
    }
}

/// Extended-precision analogue of [`propagate_float32_nan`].
pub(crate) fn propagate_floatx80_nan(a: Floatx80, b: Floatx80, status: &mut Status) -> Floatx80 {
    let a_is_nan = floatx80_is_nan(a);
    let a_is_signaling = floatx80_is_signaling_nan(a);
    let b_is_nan = floatx80_is_nan(b);
    let b_is_signaling = floatx80_is_signaling_nan(b);
    let a = Floatx80 {
        exp: a.exp,
        fraction: a.fraction | 0xC000_0000_0000_0000,
    };
    let b = Floatx80 {
        exp: b.exp,
        fraction: b.fraction | 0xC000_0000_0000_0000,
    };
    if a_is_signaling || b_is_signaling {
        status.raise(Flags::INVALID);
    }
    if a_is_signaling {
        if !b_is_signaling {
            return if b_is_nan { b } else { a };
        }
    } else if a_is_nan {
        if b_is_signaling || !b_is_nan {
            return a;
        }
    } else {
        return b;
    }
    if (a.fraction << 1) < (b.fraction << 1) {
        b
    } else if (b.fraction << 1) < (a.fraction << 1) {
        a
    } else if a.exp < b.exp {
        a
    } else {
        b
    }
}
