use anchor_lang::prelude::*;

#[event]
pub struct EmployeeAccountCreated {
    pub employee_account: Pubkey,
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}
