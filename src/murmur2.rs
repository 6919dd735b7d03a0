//! MurmurHash2 family: the 32-bit hash and its 2A, neutral and aligned variants,
//! plus the 64-bit MurmurHash64A and MurmurHash64B.

use core::hash::{BuildHasherDefault, Hasher};

use crate::{le_u32, le_u64, le_u64_0_8};

const MURMUR2_M: u32 = 0x5bd1e995;
const MURMUR2_R: u32 = 24;

const MURMUR64A_M: u64 = 0xc6a4a7935bd1e995;
const MURMUR64A_R: u32 = 47;

#[inline(always)]
fn mix32(k: u32) -> u32 {
    let mut k = k.wrapping_mul(MURMUR2_M);
    k ^= k >> MURMUR2_R;
    k.wrapping_mul(MURMUR2_M)
}

/// Folds one word into `h` the way MurmurHash2 and 2A do (`mmix`).
#[inline(always)]
fn mmix(h: u32, k: u32) -> u32 {
    h.wrapping_mul(MURMUR2_M) ^ mix32(k)
}

#[inline(always)]
fn fmix2(mut h: u32) -> u32 {
    h ^= h >> 13;
    h = h.wrapping_mul(MURMUR2_M);
    h ^ (h >> 15)
}

/// Returns the 32-bit MurmurHash2 of `buf`.
pub fn murmur2(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    let buf = buf.as_ref();
    let mut h = seed ^ buf.len() as u32;

    let mut blocks = buf.chunks_exact(4);
    for block in &mut blocks {
        h = mmix(h, le_u32(block));
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        h ^= le_u64_0_8(tail) as u32;
        h = h.wrapping_mul(MURMUR2_M);
    }

    fmix2(h)
}

/// MurmurHashNeutral2, the endian- and alignment-neutral rendition of MurmurHash2.
/// Blocks are always read little-endian here, so it agrees with [`murmur2`].
#[inline]
pub fn murmur2_neutral(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    murmur2(buf, seed)
}

/// MurmurHashAligned2, the aligned-read rendition of MurmurHash2. It agrees with
/// [`murmur2`].
#[inline]
pub fn murmur2_aligned(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    murmur2(buf, seed)
}

/// Returns the 32-bit MurmurHash2A of `buf`.
///
/// 2A mixes the tail and the length in as ordinary words (a Merkle-Damgard style
/// construction), which is what makes [`Murmur2AHasher`] possible.
pub fn murmur2a(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    let buf = buf.as_ref();
    let mut h = seed;

    let mut blocks = buf.chunks_exact(4);
    for block in &mut blocks {
        h = mmix(h, le_u32(block));
    }

    h = mmix(h, le_u64_0_8(blocks.remainder()) as u32);
    h = mmix(h, buf.len() as u32);
    fmix2(h)
}

/// Returns the 64-bit MurmurHash64A of `buf`, the variant tuned for 64-bit platforms.
pub fn murmur64a(buf: impl AsRef<[u8]>, seed: u64) -> u64 {
    let buf = buf.as_ref();
    let mut h = seed ^ (buf.len() as u64).wrapping_mul(MURMUR64A_M);

    let mut blocks = buf.chunks_exact(8);
    for block in &mut blocks {
        let mut k = le_u64(block).wrapping_mul(MURMUR64A_M);
        k ^= k >> MURMUR64A_R;
        k = k.wrapping_mul(MURMUR64A_M);
        h ^= k;
        h = h.wrapping_mul(MURMUR64A_M);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        h ^= le_u64_0_8(tail);
        h = h.wrapping_mul(MURMUR64A_M);
    }

    h ^= h >> MURMUR64A_R;
    h = h.wrapping_mul(MURMUR64A_M);
    h ^ (h >> MURMUR64A_R)
}

/// Returns the 64-bit MurmurHash64B of `buf`, the variant built from two interleaved
/// 32-bit lanes for 32-bit platforms. Its output differs from [`murmur64a`].
pub fn murmur64b(buf: impl AsRef<[u8]>, seed: u64) -> u64 {
    let buf = buf.as_ref();
    let mut h1 = (seed as u32) ^ buf.len() as u32;
    let mut h2 = (seed >> 32) as u32;

    let mut blocks = buf.chunks_exact(8);
    for block in &mut blocks {
        h1 = mmix(h1, le_u32(block));
        h2 = mmix(h2, le_u32(&block[4..]));
    }

    let mut tail = blocks.remainder();
    if tail.len() >= 4 {
        h1 = mmix(h1, le_u32(tail));
        tail = &tail[4..];
    }
    if !tail.is_empty() {
        h2 ^= le_u64_0_8(tail) as u32;
        h2 = h2.wrapping_mul(MURMUR2_M);
    }

    h1 ^= h2 >> 18;
    h1 = h1.wrapping_mul(MURMUR2_M);
    h2 ^= h1 >> 22;
    h2 = h2.wrapping_mul(MURMUR2_M);
    h1 ^= h2 >> 17;
    h1 = h1.wrapping_mul(MURMUR2_M);
    h2 ^= h1 >> 19;
    h2 = h2.wrapping_mul(MURMUR2_M);

    ((h1 as u64) << 32) | h2 as u64
}

/// Incremental MurmurHash2A.
///
/// Feeding a byte sequence in any number of fragments yields the same digest as
/// [`murmur2a`] over the whole sequence.
///
/// ```
/// use murmurhash::{murmur2a, Murmur2AHasher};
///
/// let mut hasher = Murmur2AHasher::with_seed(42);
/// hasher.update(b"Hello, ");
/// hasher.update(b"world!");
/// assert_eq!(hasher.finish32(), murmur2a(b"Hello, world!", 42));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Murmur2AHasher {
    hash: u32,
    tail: u32,
    count: u32,
    size: u32,
}

/// `BuildHasher` for `HashMap`s keyed with [`Murmur2AHasher`] and seed 0.
pub type Murmur2ABuildHasher = BuildHasherDefault<Murmur2AHasher>;

impl Murmur2AHasher {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            hash: seed,
            ..Self::default()
        }
    }

    /// Appends `buf` to the hashed sequence.
    pub fn update(&mut self, buf: impl AsRef<[u8]>) {
        let mut buf = buf.as_ref();
        self.size = self.size.wrapping_add(buf.len() as u32);

        // Complete a word left partial by the previous fragment.
        while self.count != 0 {
            match buf.split_first() {
                Some((&byte, rest)) => {
                    self.push_tail(byte);
                    buf = rest;
                }
                None => return,
            }
        }

        let mut blocks = buf.chunks_exact(4);
        for block in &mut blocks {
            self.hash = mmix(self.hash, le_u32(block));
        }
        for &byte in blocks.remainder() {
            self.push_tail(byte);
        }
    }

    #[inline(always)]
    fn push_tail(&mut self, byte: u8) {
        self.tail |= (byte as u32) << (self.count * 8);
        self.count += 1;
        if self.count == 4 {
            self.hash = mmix(self.hash, self.tail);
            self.tail = 0;
            self.count = 0;
        }
    }

    /// Returns the digest of everything appended so far. The state is left intact,
    /// so more data may follow.
    pub fn finish32(&self) -> u32 {
        let h = mmix(self.hash, self.tail);
        fmix2(mmix(h, self.size))
    }
}

impl Hasher for Murmur2AHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.finish32() as u64
    }
}
