use murmurhash::{murmur2, murmur3_x64_128, murmur3_x86_32};

fn main() {
    let data = b"Hello, world!";

    // Seed 0 is the conventional default
    let hash = murmur3_x86_32(data, 0);
    println!("MurmurHash3 x86_32 of {:?}: 0x{:08x}", data, hash);

    let (low, high) = murmur3_x64_128(data, 0);
    println!("MurmurHash3 x64_128: 0x{:016x}{:016x}", high, low);

    // The families are distinct functions, not truncations of each other
    println!("MurmurHash2: 0x{:08x}", murmur2(data, 0));

    // Values are stable across calls, runs and platforms
    assert_eq!(murmur3_x86_32("test", 0), 0xba6bd213);
    assert_eq!(hash, murmur3_x86_32(data, 0), "Hashes should be stable!");
    println!("Hash stability verified!");
}
