pub mod employee_account_created;
pub mod tokens_claimed;
pub mod treasury_funded;
pub mod vesting_account_created;

pub use employee_account_created::*;
pub use tokens_claimed::*;
pub use treasury_funded::*;
pub use vesting_account_created::*;
