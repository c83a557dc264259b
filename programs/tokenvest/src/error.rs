use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("A vesting account already exists for this company.")]
    DuplicateRegistry,
    #[msg("This beneficiary already has a schedule under this vesting account.")]
    DuplicateSchedule,
    #[msg("Invalid schedule: expected start <= cliff < end and a positive amount.")]
    InvalidSchedule,
    #[msg("Signer is not allowed to perform this action.")]
    Unauthorized,
    #[msg("Nothing to claim.")]
    NothingToClaim,
    #[msg("Treasury balance is below the claimable amount.")]
    InsufficientTreasury,
    #[msg("Company name must be between 1 and 32 bytes.")]
    InvalidCompanyName,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Math overflow.")]
    MathOverflow,
}
