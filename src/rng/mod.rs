//! Random number generation backed by the OS CSPRNG.

mod pool;

pub use pool::OsEntropy;

use crate::error::Result;

/// Source of uniformly distributed 64-bit values.
pub trait EntropySource {
    fn next_u64(&mut self) -> Result<u64>;
}

// =============================================================================
// Uniform sampling
// =============================================================================

/// Draw an index uniformly from `0..n`. `n` must be non-zero.
///
/// The top `2^64 mod n` values of the 64-bit range would favour the low
/// residues, so draws landing there are discarded and redrawn.
pub fn below<E: EntropySource + ?Sized>(source: &mut E, n: usize) -> Result<usize> {
    debug_assert!(n > 0, "cannot sample from an empty range");
    let n = n as u64;
    let tail = (u64::MAX % n + 1) % n;
    let ceiling = u64::MAX - tail;

    loop {
        let x = source.next_u64()?;
        if x <= ceiling {
            return Ok((x % n) as usize);
        }
    }
}
