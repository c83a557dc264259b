use anchor_lang::prelude::*;

use crate::VestingStatus;

#[event]
pub struct TokensClaimed {
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    /// Amount moved out of the treasury by this claim
    pub amount: u64,
    /// Running total after this claim
    pub total_claimed: u64,
    /// Still locked or unclaimed after this claim
    pub remaining: u64,
    pub status: VestingStatus,
    pub time: i64,
}
