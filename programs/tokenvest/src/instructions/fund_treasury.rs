use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::error::*;
use crate::events::TreasuryFunded;
use crate::state::VestingAccount;

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct FundTreasury<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = owner @ VestingError::Unauthorized,
        has_one = mint,
        has_one = treasury_token_account,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl FundTreasury<'_> {
    fn deposit(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.source_token_account.to_account_info(),
            to: self.treasury_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.owner.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn fund_treasury_handler(
    ctx: Context<FundTreasury>,
    _company_name: String,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    ctx.accounts.deposit(amount)?;
    ctx.accounts.treasury_token_account.reload()?;

    emit!(TreasuryFunded {
        vesting_account: ctx.accounts.vesting_account.key(),
        amount,
        treasury_balance: ctx.accounts.treasury_token_account.amount,
    });

    Ok(())
}
