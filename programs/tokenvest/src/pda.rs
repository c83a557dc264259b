//! Program-derived addresses for every account the program owns.
//!
//! All derivations go through `Pubkey::find_program_address`, which scans the
//! bump from 255 downward and keeps the first off-curve result, so a seed tuple
//! always maps to the same `(address, bump)` pair.

use anchor_lang::prelude::*;

use crate::constants::{SCHEDULE_SEED, TREASURY_SEED};

pub fn derive_vesting_account(company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[company_name.as_bytes()], &crate::ID)
}

pub fn derive_treasury_token_account(company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED, company_name.as_bytes()], &crate::ID)
}

pub fn derive_employee_account(beneficiary: &Pubkey, vesting_account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SCHEDULE_SEED, beneficiary.as_ref(), vesting_account.as_ref()],
        &crate::ID,
    )
}

/// Seeds that sign for the treasury token account, which is its own authority.
pub fn treasury_signer_seeds<'a>(
    company_name: &'a str,
    treasury_bump: &'a [u8; 1],
) -> [&'a [u8]; 3] {
    [TREASURY_SEED, company_name.as_bytes(), treasury_bump]
}
