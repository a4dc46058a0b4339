/*
    Integer rounding
*/

//! Shared round-and-pack steps for float-to-integer conversions. Each
//! format module shifts its significand into a fixed-point form and
//! hands it here for the mode-dependent increment, the range check, and
//! the inexact flag.

use crate::status::{Flags, RoundingMode, Status};

/// Rounds a 64-bit fixed-point magnitude with its binary point between
/// bits 6 and 7 to a signed 32-bit integer, negating when `z_sign` is
/// set. Bit 63 of `abs_z` must be clear. Out-of-range values raise
/// `invalid` and saturate to the signed extreme; otherwise any nonzero
/// round bits raise `inexact`.
pub(crate) fn round_and_pack_i32(z_sign: bool, mut abs_z: u64, status: &mut Status) -> i32 {
    let rounding_mode = status.rounding_mode();
    let round_nearest_even = rounding_mode == RoundingMode::NearestEven;
    let round_increment = rounding_mode.increment_for(z_sign, 0x7F);
    let round_bits = abs_z & 0x7F;
    abs_z = (abs_z + round_increment) >> 7;
    if round_nearest_even && round_bits == 0x40 {
        abs_z &= !1;
    }
    let mut z = abs_z as i32;
    if z_sign {
        z = z.wrapping_neg();
    }
    if (abs_z >> 32) != 0 || (z != 0 && ((z < 0) != z_sign)) {
        status.raise(Flags::INVALID);
        return if z_sign { i32::MIN } else { i32::MAX };
    }
    if round_bits != 0 {
        status.raise(Flags::INEXACT);
    }
    z
}

/// Rounds the 128-bit fixed-point magnitude `abs_z0:abs_z1`, with its
/// binary point between the two words, to a signed 64-bit integer.
/// Negates when `z_sign` is set; saturates with `invalid` on overflow;
/// raises `inexact` when the extra word was nonzero.
pub(crate) fn round_and_pack_i64(
    z_sign: bool,
    mut abs_z0: u64,
    abs_z1: u64,
    status: &mut Status,
) -> i64 {
    let rounding_mode = status.rounding_mode();
    let round_nearest_even = rounding_mode == RoundingMode::NearestEven;
    let increment = rounding_mode.increment_for_extra(z_sign, abs_z1);
    let mut overflowed = false;
    if increment {
        abs_z0 = abs_z0.wrapping_add(1);
        if abs_z0 == 0 {
            overflowed = true;
        } else if round_nearest_even && (abs_z1 << 1) == 0 {
            abs_z0 &= !1;
        }
    }
    let mut z = abs_z0 as i64;
    if z_sign {
        z = z.wrapping_neg();
    }
    if overflowed || (z != 0 && ((z < 0) != z_sign)) {
        status.raise(Flags::INVALID);
        return if z_sign { i64::MIN } else { i64::MAX };
    }
    if abs_z1 != 0 {
        status.raise(Flags::INEXACT);
    }
    z
}
