use anchor_lang::prelude::*;

use crate::{EmployeeAccount, VestingError};

/// Rejects schedules that cannot be interpolated: the ramp from start to end
/// must be non-empty and the cliff must land strictly before the end.
pub fn validate_schedule(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
) -> Result<()> {
    require!(start_time <= cliff_time, VestingError::InvalidSchedule);
    require!(cliff_time < end_time, VestingError::InvalidSchedule);
    require!(total_amount > 0, VestingError::InvalidSchedule);
    Ok(())
}

/// Amount vested to date, ignoring what has already been claimed.
pub fn calculate_unlocked_amount(schedule: &EmployeeAccount, now: i64) -> Result<u64> {
    if now < schedule.cliff_time {
        return Ok(0);
    }

    if now >= schedule.end_time {
        return Ok(schedule.total_amount);
    }

    // Widened to i128: end - start may not fit in i64.
    let elapsed = now as i128 - schedule.start_time as i128;
    let duration = schedule.end_time as i128 - schedule.start_time as i128;
    require!(duration > 0, VestingError::InvalidSchedule);

    let elapsed = u128::try_from(elapsed).map_err(|_| VestingError::InvalidSchedule)?;
    let vested = (schedule.total_amount as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;

    u64::try_from(vested).map_err(|_| error!(VestingError::MathOverflow))
}

pub fn calculate_claimable_amount(schedule: &EmployeeAccount, now: i64) -> Result<u64> {
    let unlocked = calculate_unlocked_amount(schedule, now)?;
    Ok(unlocked.saturating_sub(schedule.total_claimed))
}

/// Pays out everything claimable at `now` through `transfer` and books it on
/// the schedule. `total_claimed` only moves once `transfer` has succeeded.
pub fn settle_claim<F>(
    schedule: &mut EmployeeAccount,
    caller: &Pubkey,
    now: i64,
    treasury_balance: u64,
    transfer: F,
) -> Result<u64>
where
    F: FnOnce(u64) -> Result<()>,
{
    require_keys_eq!(*caller, schedule.beneficiary, VestingError::Unauthorized);

    let claimable = calculate_claimable_amount(schedule, now)?;
    require!(claimable > 0, VestingError::NothingToClaim);
    require!(
        treasury_balance >= claimable,
        VestingError::InsufficientTreasury
    );

    let total_claimed = schedule
        .total_claimed
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    transfer(claimable)?;
    schedule.total_claimed = total_claimed;

    Ok(claimable)
}
