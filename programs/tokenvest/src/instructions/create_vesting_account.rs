use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    // An existing registry is rejected in the handler with DuplicateRegistry.
    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + VestingAccount::INIT_SPACE,
        seeds = [company_name.as_bytes()],
        bump,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        token::mint = mint,
        token::authority = treasury_token_account,
        token::token_program = token_program,
        seeds = [TREASURY_SEED, company_name.as_bytes()],
        bump,
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn create_vesting_account_handler(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    require!(
        !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
        VestingError::InvalidCompanyName
    );
    require!(
        !ctx.accounts.vesting_account.is_initialized(),
        VestingError::DuplicateRegistry
    );

    let vesting_key = ctx.accounts.vesting_account.key();
    let treasury_key = ctx.accounts.treasury_token_account.key();

    ctx.accounts.vesting_account.set_inner(VestingAccount {
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        treasury_token_account: treasury_key,
        company_name: company_name.clone(),
        treasury_bump: ctx.bumps.treasury_token_account,
        bump: ctx.bumps.vesting_account,
    });

    msg!("Vesting account created for {}", company_name);

    emit!(VestingAccountCreated {
        vesting_account: vesting_key,
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        treasury_token_account: treasury_key,
        company_name,
    });

    Ok(())
}
