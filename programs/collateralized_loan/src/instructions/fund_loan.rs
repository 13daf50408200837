use anchor_lang::prelude::*;
use crate::error::LoanError;
use crate::events::LoanFunded;
use crate::state::{Loan, LoanBook};
use crate::utils::transfer_lamports;

#[derive(Accounts)]
#[instruction(loan_id: u64)]
pub struct FundLoan<'info> {
    #[account(mut)]
    pub lender: Signer<'info>,

    #[account(
        seeds = [LoanBook::SEED],
        bump = loan_book.bump,
    )]
    pub loan_book: Account<'info, LoanBook>,

    #[account(
        mut,
        seeds = [
            Loan::SEED,
            loan_book.key().as_ref(),
            loan_id.to_le_bytes().as_ref()
        ],
        bump = loan.bump,
    )]
    pub loan: Account<'info, Loan>,

    /// CHECK: Validated as borrower from loan
    #[account(
        mut,
        constraint = borrower.key() == loan.borrower @ LoanError::InvalidBorrowerAccount,
    )]
    pub borrower: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn fund_loan_handler(ctx: Context<FundLoan>, loan_id: u64, amount: u64) -> Result<()> {
    let lender = ctx.accounts.lender.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.loan.fund(lender, amount, now)?;

    // Loan amount goes straight to the borrower
    transfer_lamports(
        &ctx.accounts.lender.to_account_info(),
        &ctx.accounts.borrower.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    let loan = &ctx.accounts.loan;
    emit!(LoanFunded {
        loan_id,
        lender,
        borrower: loan.borrower,
        amount,
        start_time: loan.start_time,
    });
    msg!("Loan {} funded by {}, expires at {}", loan_id, lender, loan.expires_at());

    Ok(())
}
