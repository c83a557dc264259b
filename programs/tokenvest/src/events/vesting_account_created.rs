use anchor_lang::prelude::*;

#[event]
pub struct VestingAccountCreated {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub company_name: String,
}
