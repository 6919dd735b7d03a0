use murmurhash::murmur3_x86_32;

fn main() {
    let data = b"Important message";

    // Each seed selects an independent hash function over the same data.
    // This is useful for Bloom filters, count-min sketches and the like.
    println!("Hashing {:?} with different seeds:", data);
    for seed in 0..5 {
        println!("  Seed {}: 0x{:08x}", seed, murmur3_x86_32(data, seed));
    }

    println!("\nSimple bloom filter example:");
    let num_bits = 64;
    let mut bloom_filter = vec![false; num_bits];

    let item = b"example@email.com";
    for k in 0..3 {
        let bit_index = murmur3_x86_32(item, k) as usize % num_bits;
        bloom_filter[bit_index] = true;
        println!("  Set bit {} for hash function {}", bit_index, k);
    }

    let present = (0..3).all(|k| bloom_filter[murmur3_x86_32(item, k) as usize % num_bits]);
    assert!(present);
    println!("  {:?} is (probably) in the set", item);
}
