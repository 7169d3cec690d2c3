//! OS entropy pool - reads the system CSPRNG in blocks and hands out u64s.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::EntropySource;
use crate::error::Result;

const POOL_SIZE: usize = 512;

/// Buffered reader over `OsRng`. Consumed bytes are zeroed immediately and
/// the whole pool is zeroed on refill and drop.
pub struct OsEntropy {
    pool: [u8; POOL_SIZE],
    pos: usize,
}

impl OsEntropy {
    pub fn new() -> Self {
        Self {
            pool: [0; POOL_SIZE],
            pos: POOL_SIZE,
        }
    }

    #[cold]
    #[inline(never)]
    fn refill(&mut self) -> Result<()> {
        self.pool.zeroize();
        OsRng.try_fill_bytes(&mut self.pool)?;
        self.pos = 0;
        log::trace!("entropy pool refilled ({POOL_SIZE} bytes)");
        Ok(())
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsEntropy {
    #[inline]
    fn next_u64(&mut self) -> Result<u64> {
        if self.pos + 8 > POOL_SIZE {
            self.refill()?;
        }

        let chunk = &mut self.pool[self.pos..self.pos + 8];
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        chunk.zeroize();
        self.pos += 8;

        let value = u64::from_le_bytes(bytes);
        bytes.zeroize();
        Ok(value)
    }
}

impl Drop for OsEntropy {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refills_across_pool_boundary() {
        let mut src = OsEntropy::new();
        let draws = POOL_SIZE / 8 * 3 + 1;
        let values: Vec<u64> = (0..draws).map(|_| src.next_u64().unwrap()).collect();
        assert_eq!(values.len(), draws);
        // 193 draws of 64 bits all equal would mean the pool is not being read.
        assert!(values.iter().any(|&v| v != values[0]));
    }

    #[test]
    fn consumed_bytes_are_zeroed() {
        let mut src = OsEntropy::new();
        src.next_u64().unwrap();
        src.next_u64().unwrap();
        assert!(src.pool[..16].iter().all(|&b| b == 0));
        assert_eq!(src.pos, 16);
    }
}
