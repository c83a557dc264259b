#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

#[program]
pub mod tokenvest {
    use super::*;

    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        create_vesting_account::create_vesting_account_handler(ctx, company_name)
    }

    pub fn fund_treasury(
        ctx: Context<FundTreasury>,
        company_name: String,
        amount: u64,
    ) -> Result<()> {
        fund_treasury::fund_treasury_handler(ctx, company_name, amount)
    }

    pub fn create_employee_account(
        ctx: Context<CreateEmployeeAccount>,
        start_time: i64,
        end_time: i64,
        cliff_time: i64,
        total_amount: u64,
    ) -> Result<()> {
        create_employee_account::create_employee_account_handler(
            ctx,
            start_time,
            end_time,
            cliff_time,
            total_amount,
        )
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        claim_tokens::claim_tokens_handler(ctx, company_name)
    }

    pub fn estimate_claimable(ctx: Context<ReadOnlyClaim>) -> Result<u64> {
        estimate_claimable::estimate_claimable_handler(ctx)
    }
}
