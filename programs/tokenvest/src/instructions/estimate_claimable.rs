use anchor_lang::prelude::*;

use crate::EmployeeAccount;

#[derive(Accounts)]
pub struct ReadOnlyClaim<'info> {
    #[account()]
    pub employee_account: Account<'info, EmployeeAccount>,
}

pub fn estimate_claimable_handler(ctx: Context<ReadOnlyClaim>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;

    crate::utils::calculate_claimable_amount(&ctx.accounts.employee_account, now)
}
