//! Adaptive-duration streaming measurement
//!
//! The timed loop streams the whole buffer with paired vector loads feeding
//! two independent accumulator chains, re-checking elapsed time only between
//! batches. Compiler fences around the passes and a final opaque observation
//! of the accumulators keep the optimizer from proving the loads dead and
//! deleting the work being measured.

use std::sync::atomic::{compiler_fence, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::bench::buffer::AlignedBuffer;
use crate::core::types::{BenchResult, Measurement};
use crate::simd;

/// Bytes targeted per timing batch. Pass counts scale inversely with buffer
/// size so small buffers run long enough to amortize loop overhead.
pub const STREAM_TARGET_BYTES: u64 = 16 * 1024 * 1024;

/// Compiler-level fence: emits no instructions, but the optimizer must
/// treat all prior memory contents as unknown afterwards.
#[inline(always)]
fn memory_barrier() {
    compiler_fence(Ordering::SeqCst);
}

/// Fill seed from the wall clock, so repeated runs dirty the buffer with
/// different contents.
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Streams through a freshly allocated `size_kib` KiB buffer until at least
/// `min_duration` has elapsed, returning the achieved totals.
///
/// The only failure is the initial allocation; the timed region itself has
/// no error paths. Elapsed time may overrun the minimum by up to one batch,
/// since termination is only checked between batches.
pub fn measure(size_kib: u64, min_duration: Duration) -> BenchResult<Measurement> {
    let byte_size = (size_kib as usize) << 10;
    let mut buffer = AlignedBuffer::zeroed(byte_size)?;

    buffer.fill_pseudo_random(wall_clock_seed());
    memory_barrier();
    debug!(bytes = byte_size, "buffer filled");

    let vectors = buffer.as_vectors();
    let outer_iters = (STREAM_TARGET_BYTES / byte_size as u64).max(1);
    let min_ns = min_duration.as_nanos() as u64;

    let mut tot1 = simd::zero();
    let mut tot2 = simd::zero();
    let mut total_bytes: u64 = 0;

    let start = Instant::now();
    let elapsed_ns = loop {
        for _ in 0..outer_iters {
            // Two independent dependency chains over adjacent vectors
            for pair in vectors.chunks_exact(2) {
                tot1 = simd::add(tot1, simd::load(&pair[0]));
                tot2 = simd::add(tot2, simd::load(&pair[1]));
            }
            memory_barrier();
        }

        total_bytes += byte_size as u64 * outer_iters;

        let ns = start.elapsed().as_nanos() as u64;
        if ns >= min_ns {
            break ns;
        }
    };

    // Observe the combined accumulators so the loads cannot be discarded;
    // the mask value itself is meaningless
    std::hint::black_box(simd::movemask(simd::add(tot1, tot2)));

    debug!(total_bytes, elapsed_ns, "measurement complete");
    Ok(Measurement::new(byte_size as u64, total_bytes, elapsed_ns))
}
