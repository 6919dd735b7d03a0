//! MurmurHash1, Austin Appleby's original 32-bit hash.

use crate::{le_u32, le_u64_0_8};

const MURMUR1_M: u32 = 0xc6a4a793;
const MURMUR1_R: u32 = 16;

/// Returns the 32-bit MurmurHash1 of `buf`.
pub fn murmur1(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    let buf = buf.as_ref();
    let mut h = seed ^ (buf.len() as u32).wrapping_mul(MURMUR1_M);

    let mut blocks = buf.chunks_exact(4);
    for block in &mut blocks {
        h = h.wrapping_add(le_u32(block));
        h = h.wrapping_mul(MURMUR1_M);
        h ^= h >> 16;
    }

    // Tail bytes occupy distinct byte lanes, so adding them one by one is the same
    // as adding their little-endian value.
    let tail = blocks.remainder();
    if !tail.is_empty() {
        h = h.wrapping_add(le_u64_0_8(tail) as u32);
        h = h.wrapping_mul(MURMUR1_M);
        h ^= h >> MURMUR1_R;
    }

    h = h.wrapping_mul(MURMUR1_M);
    h ^= h >> 10;
    h = h.wrapping_mul(MURMUR1_M);
    h ^= h >> 17;
    h
}

/// MurmurHash1Aligned. The reference variant only changes how words are loaded from
/// unaligned memory and always agrees with [`murmur1`].
#[inline]
pub fn murmur1_aligned(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    murmur1(buf, seed)
}
