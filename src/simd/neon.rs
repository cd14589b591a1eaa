//! NEON backend: 128-bit vectors, four 32-bit lanes

use std::arch::aarch64::{
    int32x4_t, vaddq_s32, vaddv_u8, vdupq_n_s32, vget_high_u8, vget_low_u8, vld1q_s32, vld1q_u8,
    vmulq_u8, vreinterpretq_u8_s32, vshrq_n_u8,
};

pub const NAME: &str = "neon";

pub type Vector = int32x4_t;

/// Per-byte bit weights for synthesizing a movemask, repeated per half.
const MASK_WEIGHTS: [u8; 16] = [1, 2, 4, 8, 16, 32, 64, 128, 1, 2, 4, 8, 16, 32, 64, 128];

/// Additive identity
#[inline(always)]
pub fn zero() -> Vector {
    // SAFETY: NEON is baseline on every aarch64 target
    unsafe { vdupq_n_s32(0) }
}

/// 32-bit-lane-wise wrapping addition
#[inline(always)]
pub fn add(a: Vector, b: Vector) -> Vector {
    unsafe { vaddq_s32(a, b) }
}

/// Aligned 128-bit load; the reference guarantees 16-byte alignment
#[inline(always)]
pub fn load(src: &Vector) -> Vector {
    unsafe { vld1q_s32(src as *const Vector as *const i32) }
}

/// One bit per byte lane, set when that byte's sign bit is set.
///
/// NEON has no native movemask: each byte's sign bit is shifted down to a
/// 0/1 flag, multiplied by its lane's bit weight, and the halves are
/// collapsed with horizontal adds into a 16-bit mask.
#[inline(always)]
pub fn movemask(v: Vector) -> u32 {
    unsafe {
        let flags = vshrq_n_u8::<7>(vreinterpretq_u8_s32(v));
        let weighted = vmulq_u8(flags, vld1q_u8(MASK_WEIGHTS.as_ptr()));
        let low = u32::from(vaddv_u8(vget_low_u8(weighted)));
        let high = u32::from(vaddv_u8(vget_high_u8(weighted)));
        (high << 8) | low
    }
}
