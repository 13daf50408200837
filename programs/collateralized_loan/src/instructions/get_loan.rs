use anchor_lang::prelude::*;
use crate::state::{Loan, LoanBook, LoanInfo};

#[derive(Accounts)]
#[instruction(loan_id: u64)]
pub struct GetLoan<'info> {
    #[account(
        seeds = [LoanBook::SEED],
        bump = loan_book.bump,
    )]
    pub loan_book: Account<'info, LoanBook>,

    #[account(
        seeds = [
            Loan::SEED,
            loan_book.key().as_ref(),
            loan_id.to_le_bytes().as_ref()
        ],
        bump = loan.bump,
    )]
    pub loan: Account<'info, Loan>,
}

pub fn get_loan_handler(ctx: Context<GetLoan>, _loan_id: u64) -> Result<LoanInfo> {
    Ok(ctx.accounts.loan.to_info())
}
