use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::*, events::TokensClaimed, pda, utils, EmployeeAccount, VestingAccount};

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    // Seeded by the stored beneficiary; the signer is checked in settle_claim.
    #[account(
        mut,
        seeds = [SCHEDULE_SEED, employee_account.beneficiary.as_ref(), vesting_account.key().as_ref()],
        bump = employee_account.bump,
        has_one = vesting_account,
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    #[account(
        seeds = [company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = treasury_token_account,
        has_one = mint,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Moves `amount` from the treasury, which signs for itself with the seeds
/// stored on the vesting account.
fn transfer_from_treasury<'info>(
    vesting_account: &VestingAccount,
    treasury_token_account: &InterfaceAccount<'info, TokenAccount>,
    employee_token_account: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let treasury_bump = [vesting_account.treasury_bump];
    let seeds = pda::treasury_signer_seeds(&vesting_account.company_name, &treasury_bump);
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: treasury_token_account.to_account_info(),
        mint: mint.to_account_info(),
        to: employee_token_account.to_account_info(),
        authority: treasury_token_account.to_account_info(),
    };
    let cpi_ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds);

    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

pub fn claim_tokens_handler(ctx: Context<ClaimTokens>, _company_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let caller = accounts.beneficiary.key();
    let treasury_balance = accounts.treasury_token_account.amount;

    let amount = utils::settle_claim(
        &mut accounts.employee_account,
        &caller,
        now,
        treasury_balance,
        |amount| {
            transfer_from_treasury(
                &accounts.vesting_account,
                &accounts.treasury_token_account,
                &accounts.employee_token_account,
                &accounts.mint,
                &accounts.token_program,
                amount,
            )
        },
    )?;

    let employee_account = &accounts.employee_account;
    msg!(
        "Claimed {} ({}/{})",
        amount,
        employee_account.total_claimed,
        employee_account.total_amount
    );

    emit!(TokensClaimed {
        employee_account: employee_account.key(),
        beneficiary: caller,
        amount,
        total_claimed: employee_account.total_claimed,
        remaining: employee_account.remaining(),
        status: employee_account.status(),
        time: now,
    });

    Ok(())
}
