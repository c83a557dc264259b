use anchor_lang::prelude::*;

/// One beneficiary's schedule under a vesting account.
/// Seeds: `[b"schedule", beneficiary, vesting_account]`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct EmployeeAccount {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingStatus {
    Created,
    PartiallyClaimed,
    FullyClaimed,
}

impl EmployeeAccount {
    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    pub fn status(&self) -> VestingStatus {
        if self.total_claimed == 0 {
            VestingStatus::Created
        } else if self.total_claimed < self.total_amount {
            VestingStatus::PartiallyClaimed
        } else {
            VestingStatus::FullyClaimed
        }
    }

    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.total_claimed)
    }
}
