use anchor_lang::prelude::*;

#[error_code]
pub enum LoanError {
    #[msg("Collateral amount must be greater than zero")]
    InvalidCollateralAmount,

    #[msg("Duration is out of range")]
    InvalidDuration,

    #[msg("Loan already funded")]
    AlreadyFunded,

    #[msg("Incorrect loan amount")]
    IncorrectAmount,

    #[msg("Loan is not funded")]
    LoanNotFunded,

    #[msg("Loan is already closed")]
    LoanClosed,

    #[msg("Only the borrower can repay the loan")]
    NotBorrower,

    #[msg("Only the lender can claim the collateral")]
    NotLender,

    #[msg("Insufficient repayment amount")]
    InsufficientRepayment,

    #[msg("Loan has not expired yet")]
    NotExpired,

    #[msg("Borrower account does not match loan")]
    InvalidBorrowerAccount,

    #[msg("Lender account does not match loan")]
    InvalidLenderAccount,

    #[msg("Loan account holds less than the collateral owed")]
    InsufficientCustody,

    #[msg("Math overflow")]
    MathOverflow,
}
