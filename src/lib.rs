//! MurmurHash1, MurmurHash2 and MurmurHash3 hash functions.
//!
//! Every function is a stateless `(bytes, seed) -> digest` transform that reproduces
//! the published reference algorithms bit for bit, so values computed here can be
//! compared with values stored by other implementations.
//!
//! Input words are always read little-endian. Results therefore match the reference
//! code running on little-endian hardware, whatever the target.
//!
//! MurmurHash is not a cryptographic hash and offers no resistance to adversarial
//! collisions.
//!
//! ## Features
//!
//! - `murmur1` - MurmurHash1.
//! - `murmur2` - MurmurHash2 (32-bit, 2A, neutral, aligned), MurmurHash64A/64B and the
//!   incremental [`Murmur2AHasher`].
//! - `murmur3` - MurmurHash3 x86_32, x86_128 and x64_128.
//!
//! All three are enabled by default.
//!
//! ```
//! # #[cfg(feature = "murmur3")] {
//! assert_eq!(murmurhash::murmur3_x86_32(b"test", 0), 0xba6bd213);
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "murmur1")]
pub mod murmur1;
#[cfg(feature = "murmur2")]
pub mod murmur2;
#[cfg(feature = "murmur3")]
pub mod murmur3;

#[cfg(feature = "murmur1")]
pub use murmur1::{murmur1, murmur1_aligned};
#[cfg(feature = "murmur2")]
pub use murmur2::{
    murmur2, murmur2_aligned, murmur2_neutral, murmur2a, murmur64a, murmur64b,
    Murmur2ABuildHasher, Murmur2AHasher,
};
#[cfg(feature = "murmur3")]
pub use murmur3::{
    murmur3_x64_128, murmur3_x64_128_bytes, murmur3_x86_128, murmur3_x86_128_bytes,
    murmur3_x86_32,
};

#[allow(dead_code)]
#[inline(always)]
fn le_u32(buf: &[u8]) -> u32 {
    let mut tmp = [0u8; 4];
    tmp.copy_from_slice(&buf[..4]);
    u32::from_le_bytes(tmp)
}

#[allow(dead_code)]
#[inline(always)]
fn le_u64(buf: &[u8]) -> u64 {
    let mut tmp = [0u8; 8];
    tmp.copy_from_slice(&buf[..8]);
    u64::from_le_bytes(tmp)
}

/// Zero-extended little-endian load of a 0..=8 byte tail.
#[allow(dead_code)]
#[inline(always)]
fn le_u64_0_8(buf: &[u8]) -> u64 {
    let mut tmp = [0u8; 8];
    tmp[..buf.len()].copy_from_slice(buf);
    u64::from_le_bytes(tmp)
}
