#![cfg(all(feature = "murmur1", feature = "murmur2", feature = "murmur3"))]

use murmurhash::*;

struct Variant {
    name: &'static str,
    bits: u32,
    hash: fn(&[u8], u32) -> u128,
}

fn wide_seed(seed: u32) -> u64 {
    ((seed as u64) << 32) | seed as u64
}

fn pack((low, high): (u64, u64)) -> u128 {
    ((high as u128) << 64) | low as u128
}

fn variants() -> Vec<Variant> {
    vec![
        Variant {
            name: "murmur1",
            bits: 32,
            hash: |b, s| murmur1(b, s) as u128,
        },
        Variant {
            name: "murmur2",
            bits: 32,
            hash: |b, s| murmur2(b, s) as u128,
        },
        Variant {
            name: "murmur2a",
            bits: 32,
            hash: |b, s| murmur2a(b, s) as u128,
        },
        Variant {
            name: "murmur64a",
            bits: 64,
            hash: |b, s| murmur64a(b, wide_seed(s)) as u128,
        },
        Variant {
            name: "murmur64b",
            bits: 64,
            hash: |b, s| murmur64b(b, wide_seed(s)) as u128,
        },
        Variant {
            name: "murmur3_x86_32",
            bits: 32,
            hash: |b, s| murmur3_x86_32(b, s) as u128,
        },
        Variant {
            name: "murmur3_x86_128",
            bits: 128,
            hash: |b, s| pack(murmur3_x86_128(b, s)),
        },
        Variant {
            name: "murmur3_x64_128",
            bits: 128,
            hash: |b, s| pack(murmur3_x64_128(b, s as u64)),
        },
    ]
}

/// SplitMix64, so every run sees the same inputs.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_u64() as u8).collect()
    }
}

#[test]
fn deterministic() {
    let mut rng = SplitMix64(1);
    for v in variants() {
        for len in [0, 1, 3, 4, 7, 8, 15, 16, 17, 31, 32, 33, 100, 1000] {
            let data = rng.bytes(len);
            let seed = rng.next_u64() as u32;
            assert_eq!((v.hash)(&data, seed), (v.hash)(&data, seed), "{}", v.name);
        }
    }
}

#[test]
fn seed_changes_digest() {
    for v in variants() {
        let mut seen: Vec<u128> = (0..16).map(|seed| (v.hash)(b"hello world", seed)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 16, "{} ignores its seed", v.name);
    }
}

#[test]
fn digests_use_full_width() {
    let mut rng = SplitMix64(2);
    for v in variants() {
        let mask = if v.bits == 128 {
            u128::MAX
        } else {
            (1u128 << v.bits) - 1
        };
        let mut seen = 0u128;
        for len in 0..=64 {
            let data = rng.bytes(len);
            let h = (v.hash)(&data, 1);
            assert_eq!(h & !mask, 0, "{} wider than {} bits", v.name, v.bits);
            seen |= h;
        }
        assert_eq!(seen, mask, "{} leaves output bits unused", v.name);
    }
}

#[test]
fn avalanche() {
    const TRIALS: usize = 4000;
    for v in variants() {
        let mut rng = SplitMix64(3);
        let mut flipped = 0.0;
        for _ in 0..TRIALS {
            let len = 1 + rng.below(64);
            let mut data = rng.bytes(len);
            let seed = rng.next_u64() as u32;
            let bit = rng.below(len * 8);

            let before = (v.hash)(&data, seed);
            data[bit / 8] ^= 1 << (bit % 8);
            let after = (v.hash)(&data, seed);
            flipped += (before ^ after).count_ones() as f64 / v.bits as f64;
        }
        let mean = flipped / TRIALS as f64;
        assert!(
            (0.47..=0.53).contains(&mean),
            "{}: mean flip rate {}",
            v.name,
            mean
        );
    }
}

#[test]
fn prefix_rehash_matches_one_shot() {
    let mut rng = SplitMix64(4);
    let full = rng.bytes(200);
    for v in variants() {
        let mut acc = Vec::new();
        let mut grown = Vec::new();
        for &byte in &full {
            acc.push(byte);
            grown.push((v.hash)(&acc, 7));
            // Unrelated calls in between must not disturb later results.
            (v.hash)(b"noise", 8);
        }
        for (i, &h) in grown.iter().enumerate() {
            assert_eq!(h, (v.hash)(&full[..i + 1], 7), "{} at len {}", v.name, i + 1);
        }
    }
}

#[test]
fn incremental_murmur2a_matches_one_shot() {
    let mut rng = SplitMix64(5);
    for _ in 0..100 {
        let len = rng.below(300);
        let data = rng.bytes(len);
        let seed = rng.next_u64() as u32;
        let mut hasher = Murmur2AHasher::with_seed(seed);
        let mut rest = &data[..];
        while !rest.is_empty() {
            let n = 1 + rng.below(rest.len().min(9));
            hasher.update(&rest[..n]);
            rest = &rest[n..];
        }
        assert_eq!(hasher.finish32(), murmur2a(&data, seed));
    }
}

#[test]
fn murmur2a_build_hasher() {
    use std::collections::HashMap;
    use std::hash::{BuildHasher, Hash, Hasher};

    let mut map: HashMap<&str, u32, Murmur2ABuildHasher> = HashMap::default();
    map.insert("alpha", 1);
    map.insert("beta", 2);
    assert_eq!(map.get("alpha"), Some(&1));
    assert_eq!(map.get("beta"), Some(&2));

    let build = Murmur2ABuildHasher::default();
    let mut a = build.build_hasher();
    let mut b = build.build_hasher();
    "key".hash(&mut a);
    "key".hash(&mut b);
    assert_eq!(a.finish(), b.finish());
    assert!(a.finish() <= u32::MAX as u64);
}

#[test]
fn concurrent_callers_agree() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i * 31) as u8).collect();
    let expected: Vec<u128> = variants().iter().map(|v| (v.hash)(&data, 42)).collect();
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let got: Vec<u128> = variants().iter().map(|v| (v.hash)(&data, 42)).collect();
                assert_eq!(got, expected);
            });
        }
    });
}
