use anchor_lang::prelude::*;

/// Per-company vesting program. Seeds: `[company_name]`.
#[account]
#[derive(InitSpace)]
pub struct VestingAccount {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    #[max_len(32)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl VestingAccount {
    /// A freshly allocated account is all zeroes until the owner is written.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }
}
