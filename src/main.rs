use tracing_subscriber::EnvFilter;

use card_validator::{is_valid_luhn, normalize};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn verdict(raw: &str) -> &'static str {
    match is_valid_luhn(&normalize(raw)) {
        Ok(true) => "VALID",
        Ok(false) => "INVALID",
        Err(_) => "ERROR",
    }
}

fn main() {
    init_tracing();

    println!("Card Number Validator - Luhn Algorithm");
    println!("{}", "=".repeat(40));

    let card_number = "4111-1111-4555-1141";
    println!("Testing card number: {card_number}");

    let cleaned = normalize(card_number);
    println!("Cleaned card number: {cleaned}");

    match is_valid_luhn(&cleaned) {
        Ok(true) => println!("VALID! This card number passes the Luhn check."),
        Ok(false) => println!("INVALID! This card number fails the Luhn check."),
        Err(e) => println!("Cannot validate: {e}"),
    }

    println!();
    println!("Sample cards:");
    let samples = [
        ("4532015112830366", "Valid Visa"),
        ("4111111111111111", "Valid Visa (test card)"),
        ("4111111111111112", "Invalid Visa"),
        ("5555555555554444", "Valid Mastercard (test card)"),
        ("1234567890123456", "Invalid number"),
    ];
    for (card, description) in samples {
        println!("{description}: {card} -> {}", verdict(card));
    }

    println!();
    println!("Note: this checks the number format only, not whether the card exists.");
}
