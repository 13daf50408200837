use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::LoanInfo;

declare_id!("7cLoAnKqV3QmZ8xYbPj4rTgW2hNdFsE9uC6vR1aH5LzM");

#[program]
pub mod collateralized_loan {
    use super::*;

    /// deploy time, once
    pub fn initialize_loan_book(ctx: Context<InitializeLoanBook>) -> Result<()> {
        initialize_loan_book_handler(ctx)
    }

    /// borrower, deposits collateral and returns the new loan id
    pub fn request_loan(
        ctx: Context<RequestLoan>,
        interest_rate_bps: u64,
        duration: u64,
        collateral_amount: u64,
    ) -> Result<u64> {
        request_loan_handler(ctx, interest_rate_bps, duration, collateral_amount)
    }

    /// lender, pays exactly the loan amount to the borrower
    pub fn fund_loan(ctx: Context<FundLoan>, loan_id: u64, amount: u64) -> Result<()> {
        fund_loan_handler(ctx, loan_id, amount)
    }

    /// borrower
    pub fn repay_loan(ctx: Context<RepayLoan>, loan_id: u64, amount: u64) -> Result<()> {
        repay_loan_handler(ctx, loan_id, amount)
    }

    /// lender, only once the loan has expired unpaid
    pub fn claim_collateral(ctx: Context<ClaimCollateral>, loan_id: u64) -> Result<()> {
        claim_collateral_handler(ctx, loan_id)
    }

    pub fn get_loan(ctx: Context<GetLoan>, loan_id: u64) -> Result<LoanInfo> {
        get_loan_handler(ctx, loan_id)
    }
}
