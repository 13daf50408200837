use anchor_lang::prelude::*;
use crate::events::LoanRequested;
use crate::state::{Loan, LoanBook};
use crate::utils::transfer_lamports;

#[derive(Accounts)]
pub struct RequestLoan<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        mut,
        seeds = [LoanBook::SEED],
        bump = loan_book.bump,
    )]
    pub loan_book: Account<'info, LoanBook>,

    #[account(
        init,
        payer = borrower,
        space = 8 + Loan::INIT_SPACE,
        seeds = [
            Loan::SEED,
            loan_book.key().as_ref(),
            loan_book.loan_count.to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub loan: Account<'info, Loan>,

    pub system_program: Program<'info, System>,
}

/// 1. Take the next id from the loan book
/// 2. Record the loan, loan amount = collateral
/// 3. Move the collateral into the loan account
pub fn request_loan_handler(
    ctx: Context<RequestLoan>,
    interest_rate_bps: u64,
    duration: u64,
    collateral_amount: u64,
) -> Result<u64> {
    let borrower = ctx.accounts.borrower.key();
    let loan_id = ctx.accounts.loan_book.next_loan_id()?;

    let loan = Loan::open(
        loan_id,
        borrower,
        collateral_amount,
        interest_rate_bps,
        duration,
        ctx.bumps.loan,
    )?;
    ctx.accounts.loan.set_inner(loan);

    transfer_lamports(
        &ctx.accounts.borrower.to_account_info(),
        &ctx.accounts.loan.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        collateral_amount,
    )?;

    emit!(LoanRequested {
        loan_id,
        borrower,
        collateral_amount,
        interest_rate_bps,
        duration,
    });
    msg!(
        "Loan {} requested: {} lamports at {} bps for {} seconds",
        loan_id,
        collateral_amount,
        interest_rate_bps,
        duration
    );

    Ok(loan_id)
}
