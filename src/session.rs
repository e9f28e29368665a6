// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Display-only access codes shown in the header bar. These are not
// credentials and carry no security weight.

use rand::Rng;
use wasm_bindgen::prelude::*;

pub const SESSION_CODE_PREFIX: &str = "PDS";

/// `PDS-NNNNNN` from 24 random bits, reduced mod 10^6 and zero padded.
pub fn generate_session_code<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 3];
    rng.fill(&mut bytes);
    let num = (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);
    format!("{}-{:06}", SESSION_CODE_PREFIX, num % 1_000_000)
}

#[wasm_bindgen]
pub fn new_session_code() -> String {
    generate_session_code(&mut rand::thread_rng())
}
