use anchor_lang::prelude::*;

/// Bytes Anchor prepends to every account for its type discriminator.
pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Company names double as PDA seeds, which are capped at 32 bytes.
pub const MAX_COMPANY_NAME_LEN: usize = 32;

#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

#[constant]
pub const SCHEDULE_SEED: &[u8] = b"schedule";
