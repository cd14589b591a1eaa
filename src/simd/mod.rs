//! Vector abstraction layer for the streaming kernel
//!
//! Exposes a fixed-width integer vector with exactly four operations:
//! [`zero`], [`add`], [`load`], and [`movemask`]. The measurement loop is
//! written once against this contract; one concrete backend is selected at
//! build time, widest first:
//!
//! 1. `avx2` — 256-bit vectors on x86_64 built with AVX2
//! 2. `sse2` — 128-bit vectors on x86_64 (baseline)
//! 3. `neon` — 128-bit vectors on aarch64
//! 4. `scalar` — portable four-lane array fallback
//!
//! `add` exists to chain loads into a data dependency and `movemask` to make
//! the chained value observable, so the optimizer cannot discard the loads.
//! The mask is one bit per byte lane; its exact value is never consumed
//! beyond that, so backends only have to agree on the zero and all-sign-bits
//! cases, not bit-for-bit.

pub mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod avx2;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse2",
    not(target_feature = "avx2")
))]
mod sse2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use avx2::{add, load, movemask, zero, Vector, NAME};
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse2",
    not(target_feature = "avx2")
))]
pub use sse2::{add, load, movemask, zero, Vector, NAME};
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub use neon::{add, load, movemask, zero, Vector, NAME};
#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub use scalar::{add, load, movemask, zero, Vector, NAME};

/// Bytes per vector register for the active backend.
pub const VECTOR_WIDTH: usize = std::mem::size_of::<Vector>();
