use bitset_compat::{Backend, BitArray, Codec};

fn main() {
    println!("=== Bitset Compat Examples ===\n");

    // Example 1: Encoding a set of bits
    example_encode();

    // Example 2: Decoding bytes
    example_decode();

    // Example 3: Comparing backends
    let _ = example_backends();
}

fn example_encode() {
    println!("Example 1: Encoding a set of bits");

    let bits: BitArray = [0, 7, 8, 21].into_iter().collect();
    let bytes = bits.to_bytes();

    println!("  Bits:   {:?}", bits.iter().collect::<Vec<_>>());
    println!("  Length: {}", bits.len());
    println!("  Bytes:  {:02x?}", bytes);
    println!();
}

fn example_decode() {
    println!("Example 2: Decoding bytes");

    let bytes = [0x03, 0x00, 0x80, 0x00];
    let bits = BitArray::from_bytes(&bytes);

    println!("  Bytes:      {:02x?}", bytes);
    println!("  Set bits:   {:?}", bits.iter().collect::<Vec<_>>());
    println!("  Re-encoded: {:02x?} (trailing zero byte dropped)", bits.to_bytes());
    println!();
}

fn example_backends() -> Result<(), bitset_compat::CodecError> {
    println!("Example 3: Backends");

    let detected = Codec::new();
    println!("  Detected backend: {:?}", detected.backend());

    let fallback = Codec::with_backend(Backend::Bitwise)?;
    let bytes: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(29)).collect();

    let a = detected.decode(&bytes);
    let b = fallback.decode(&bytes);
    println!("  Backends agree: {}", a == b);

    match Codec::with_backend(Backend::Native) {
        Ok(_) => println!("  Native backend available"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
