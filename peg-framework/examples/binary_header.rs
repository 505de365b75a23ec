//! Binary header example.
//!
//! Demonstrates the binary terminals of peg-framework:
//! 1. Match a fixed signature.
//! 2. Read fixed-size fields into caller-owned cells.
//! 3. Read a variable-length table of values.
//!
//! The format is a made-up "sample block": the bytes `SMPL`, a `u16`
//! version, a `u32` sample rate, and a table of `f32` samples up to the end.

use peg_framework::{bin, end, parse_slice, sequence, slice_lit, var};
use std::cell::{Cell, RefCell};

fn encode_block(version: u16, rate: u32, samples: &[f32]) -> Vec<u8> {
    let mut bytes = b"SMPL".to_vec();
    bytes.extend_from_slice(&version.to_ne_bytes());
    bytes.extend_from_slice(&rate.to_ne_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_ne_bytes());
    }
    bytes
}

fn main() {
    let version = Cell::new(0u16);
    let rate = Cell::new(0u32);
    let samples = RefCell::new(Vec::<f32>::new());

    // Version 1 blocks carry no samples; later versions carry at least one.
    let header = slice_lit(*b"SMPL")
        & ((bin(1u16) & var(&rate) & end())
            | (var(&version) & var(&rate) & sequence(&samples, 1, usize::MAX)));

    let inputs = [
        encode_block(1, 8_000, &[]),
        encode_block(2, 44_100, &[0.0, 0.5, -0.25]),
        encode_block(2, 48_000, &[]),
        b"RIFF....".to_vec(),
    ];

    for input in &inputs {
        version.set(1);
        rate.set(0);
        samples.borrow_mut().clear();
        match parse_slice(&header, input) {
            Ok(consumed) => println!(
                "block v{} @ {} Hz, {} samples ({} bytes): {:?}",
                version.get(),
                rate.get(),
                samples.borrow().len(),
                consumed,
                samples.borrow()
            ),
            Err(err) => println!("rejected: {}", err),
        }
    }
}
