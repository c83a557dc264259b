use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::events::EmployeeAccountCreated;
use crate::state::*;
use crate::utils;

#[derive(Accounts)]
pub struct CreateEmployeeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(has_one = owner @ VestingError::Unauthorized)]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + EmployeeAccount::INIT_SPACE,
        seeds = [SCHEDULE_SEED, beneficiary.key().as_ref(), vesting_account.key().as_ref()],
        bump,
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub system_program: Program<'info, System>,
}

pub fn create_employee_account_handler(
    ctx: Context<CreateEmployeeAccount>,
    start_time: i64,
    end_time: i64,
    cliff_time: i64,
    total_amount: u64,
) -> Result<()> {
    utils::validate_schedule(start_time, cliff_time, end_time, total_amount)?;
    require!(
        !ctx.accounts.employee_account.is_initialized(),
        VestingError::DuplicateSchedule
    );

    let employee_key = ctx.accounts.employee_account.key();
    let vesting_key = ctx.accounts.vesting_account.key();
    let beneficiary = ctx.accounts.beneficiary.key();

    ctx.accounts.employee_account.set_inner(EmployeeAccount {
        beneficiary,
        vesting_account: vesting_key,
        start_time,
        cliff_time,
        end_time,
        total_amount,
        total_claimed: 0,
        bump: ctx.bumps.employee_account,
    });

    emit!(EmployeeAccountCreated {
        employee_account: employee_key,
        vesting_account: vesting_key,
        beneficiary,
        start_time,
        cliff_time,
        end_time,
        total_amount,
    });

    Ok(())
}
