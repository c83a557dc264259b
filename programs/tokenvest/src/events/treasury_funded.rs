use anchor_lang::prelude::*;

#[event]
pub struct TreasuryFunded {
    pub vesting_account: Pubkey,
    pub amount: u64,
    /// Treasury balance after the deposit
    pub treasury_balance: u64,
}
