use bit_array::{BitArray, BitArrayError};

fn main() -> Result<(), BitArrayError> {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Feature flags shared through a URL
    example_url_flags()?;

    // Example 2: Restoring from a short payload
    example_short_payload()?;

    // Example 3: Rejected input
    example_errors();

    Ok(())
}

fn example_url_flags() -> Result<(), BitArrayError> {
    println!("Example 1: Feature flags in a query string");

    let mut flags = BitArray::new(20);
    flags.set(0)?; // dark mode
    flags.set(3)?; // beta search
    flags.set(19)?; // compact layout

    let token = flags.to_base64_url_safe()?;
    println!("  Bits:   {}", flags.to_binary_string());
    println!("  Token:  ?flags={}", token);

    let mut restored = BitArray::new(20);
    restored.from_base64_url_safe(&token)?;
    println!("  Restored matches: {}", restored == flags);
    println!();

    Ok(())
}

fn example_short_payload() -> Result<(), BitArrayError> {
    println!("Example 2: Decoding into a larger array");

    let mut small = BitArray::new(8);
    small.set(7)?;
    let encoded = small.to_base64()?;

    let mut large = BitArray::new(16);
    large.from_base64(&encoded)?;
    println!("  {} -> {}", encoded, large.to_binary_string());
    println!();

    Ok(())
}

fn example_errors() {
    println!("Example 3: Errors");

    let mut bits = BitArray::new(4);
    if let Err(e) = bits.set(4) {
        println!("  set(4): {}", e);
    }
    if let Err(e) = bits.from_base64("%%%") {
        println!("  from_base64(\"%%%\"): {}", e);
    }
    println!();
}
