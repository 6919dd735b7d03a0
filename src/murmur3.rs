//! MurmurHash3: the 32-bit x86 hash and the two 128-bit hashes.
//!
//! The 128-bit functions return `(low, high)`. `low` is the first eight bytes of the
//! reference output buffer read little-endian and `high` the last eight; the
//! `_bytes` forms return the buffer itself. The x86 and x64 128-bit hashes are
//! different functions and never agree.

use crate::{le_u32, le_u64, le_u64_0_8};

const X86_32_C1: u32 = 0xcc9e2d51;
const X86_32_C2: u32 = 0x1b873593;

const X86_128_C1: u32 = 0x239b961b;
const X86_128_C2: u32 = 0xab0e9789;
const X86_128_C3: u32 = 0x38b34ae5;
const X86_128_C4: u32 = 0xa1e38b93;

const X64_128_C1: u64 = 0x87c37b91114253d5;
const X64_128_C2: u64 = 0x4cf5ad432745937f;

#[inline(always)]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^ (h >> 16)
}

#[inline(always)]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}

/// Pre-mixes a 32-bit lane word: multiply, rotate, multiply.
#[inline(always)]
fn scramble32(k: u32, c1: u32, r: u32, c2: u32) -> u32 {
    k.wrapping_mul(c1).rotate_left(r).wrapping_mul(c2)
}

#[inline(always)]
fn scramble64(k: u64, c1: u64, r: u32, c2: u64) -> u64 {
    k.wrapping_mul(c1).rotate_left(r).wrapping_mul(c2)
}

/// Returns the 32-bit MurmurHash3 (`MurmurHash3_x86_32`) of `buf`.
pub fn murmur3_x86_32(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    let buf = buf.as_ref();
    let mut h1 = seed;

    let mut blocks = buf.chunks_exact(4);
    for block in &mut blocks {
        h1 ^= scramble32(le_u32(block), X86_32_C1, 15, X86_32_C2);
        h1 = h1.rotate_left(13).wrapping_mul(5).wrapping_add(0xe6546b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        h1 ^= scramble32(le_u64_0_8(tail) as u32, X86_32_C1, 15, X86_32_C2);
    }

    fmix32(h1 ^ buf.len() as u32)
}

/// Returns the 128-bit `MurmurHash3_x86_128` of `buf` as `(low, high)`.
pub fn murmur3_x86_128(buf: impl AsRef<[u8]>, seed: u32) -> (u64, u64) {
    let [h1, h2, h3, h4] = x86_128(buf.as_ref(), seed);
    (
        (h1 as u64) | ((h2 as u64) << 32),
        (h3 as u64) | ((h4 as u64) << 32),
    )
}

/// Returns the 16-byte output buffer of `MurmurHash3_x86_128`.
pub fn murmur3_x86_128_bytes(buf: impl AsRef<[u8]>, seed: u32) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (dst, h) in out.chunks_exact_mut(4).zip(x86_128(buf.as_ref(), seed)) {
        dst.copy_from_slice(&h.to_le_bytes());
    }
    out
}

fn x86_128(buf: &[u8], seed: u32) -> [u32; 4] {
    let (mut h1, mut h2, mut h3, mut h4) = (seed, seed, seed, seed);

    let mut blocks = buf.chunks_exact(16);
    for block in &mut blocks {
        h1 ^= scramble32(le_u32(block), X86_128_C1, 15, X86_128_C2);
        h1 = h1.rotate_left(19).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x561ccd1b);

        h2 ^= scramble32(le_u32(&block[4..]), X86_128_C2, 16, X86_128_C3);
        h2 = h2.rotate_left(17).wrapping_add(h3);
        h2 = h2.wrapping_mul(5).wrapping_add(0x0bcaa747);

        h3 ^= scramble32(le_u32(&block[8..]), X86_128_C3, 17, X86_128_C4);
        h3 = h3.rotate_left(15).wrapping_add(h4);
        h3 = h3.wrapping_mul(5).wrapping_add(0x96cd1c35);

        h4 ^= scramble32(le_u32(&block[12..]), X86_128_C4, 18, X86_128_C1);
        h4 = h4.rotate_left(13).wrapping_add(h1);
        h4 = h4.wrapping_mul(5).wrapping_add(0x32ac3b17);
    }

    // Each lane of the tail is mixed only when at least one of its bytes is present.
    let tail = blocks.remainder();
    let lane = |i: usize| {
        let lo = (4 * i).min(tail.len());
        let hi = (4 * i + 4).min(tail.len());
        le_u64_0_8(&tail[lo..hi]) as u32
    };
    if tail.len() > 12 {
        h4 ^= scramble32(lane(3), X86_128_C4, 18, X86_128_C1);
    }
    if tail.len() > 8 {
        h3 ^= scramble32(lane(2), X86_128_C3, 17, X86_128_C4);
    }
    if tail.len() > 4 {
        h2 ^= scramble32(lane(1), X86_128_C2, 16, X86_128_C3);
    }
    if !tail.is_empty() {
        h1 ^= scramble32(lane(0), X86_128_C1, 15, X86_128_C2);
    }

    let len = buf.len() as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    [h1, h2, h3, h4]
}

/// Returns the 128-bit `MurmurHash3_x64_128` of `buf` as `(low, high)`.
///
/// The reference takes a 32-bit seed; any seed below `2^32` gives identical output.
pub fn murmur3_x64_128(buf: impl AsRef<[u8]>, seed: u64) -> (u64, u64) {
    let buf = buf.as_ref();
    let (mut h1, mut h2) = (seed, seed);

    let mut blocks = buf.chunks_exact(16);
    for block in &mut blocks {
        h1 ^= scramble64(le_u64(block), X64_128_C1, 31, X64_128_C2);
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= scramble64(le_u64(&block[8..]), X64_128_C2, 33, X64_128_C1);
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    let tail = blocks.remainder();
    if tail.len() > 8 {
        h2 ^= scramble64(le_u64_0_8(&tail[8..]), X64_128_C2, 33, X64_128_C1);
    }
    if !tail.is_empty() {
        let k1 = le_u64_0_8(&tail[..tail.len().min(8)]);
        h1 ^= scramble64(k1, X64_128_C1, 31, X64_128_C2);
    }

    let len = buf.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// Returns the 16-byte output buffer of `MurmurHash3_x64_128`.
pub fn murmur3_x64_128_bytes(buf: impl AsRef<[u8]>, seed: u64) -> [u8; 16] {
    let (low, high) = murmur3_x64_128(buf, seed);
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&low.to_le_bytes());
    out[8..].copy_from_slice(&high.to_le_bytes());
    out
}
