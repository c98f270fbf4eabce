//! Replays a few keypad sessions headlessly and prints each display.
//!
//! Run with: cargo run --example calculator_replay

use keypad_calculator::prelude::*;

const SESSIONS: &[&str] = &[
    "2 + 3 =",
    "2 + 3 × 4 =",
    "5 ÷ 0 =",
    ". 1 + . 2 =",
    "1 2 3 DEL ↩",
    "9 × 9 AC",
];

fn main() -> Result<(), CalcError> {
    for session in SESSIONS {
        let mut driver = EngineDriver::new();
        driver.press_sequence(session)?;
        let display = driver.display();
        println!("{session:<16} | {:>8} | {}", display.previous, display.current);
    }
    Ok(())
}
