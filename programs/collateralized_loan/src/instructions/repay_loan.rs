use anchor_lang::prelude::*;
use crate::error::LoanError;
use crate::events::LoanRepaid;
use crate::state::{Loan, LoanBook};
use crate::utils::{release_lamports, transfer_lamports};

#[derive(Accounts)]
#[instruction(loan_id: u64)]
pub struct RepayLoan<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

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

    /// CHECK: Validated as lender from loan in handler, after the state checks
    #[account(mut)]
    pub lender: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// 1. Check state, caller and amount
/// 2. Pay the lender everything the borrower sent
/// 3. Hand the collateral back to the borrower
pub fn repay_loan_handler(ctx: Context<RepayLoan>, loan_id: u64, amount: u64) -> Result<()> {
    let borrower = ctx.accounts.borrower.key();

    let collateral = ctx.accounts.loan.repay(borrower, amount)?;
    let lender = ctx.accounts.loan.lender;
    require_keys_eq!(
        ctx.accounts.lender.key(),
        lender,
        LoanError::InvalidLenderAccount
    );

    transfer_lamports(
        &ctx.accounts.borrower.to_account_info(),
        &ctx.accounts.lender.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    release_lamports(
        &ctx.accounts.loan.to_account_info(),
        &ctx.accounts.borrower.to_account_info(),
        collateral,
    )?;

    emit!(LoanRepaid {
        loan_id,
        borrower,
        lender,
        amount,
        collateral_returned: collateral,
    });
    msg!(
        "Loan {} repaid with {} lamports, {} lamports collateral returned",
        loan_id,
        amount,
        collateral
    );

    Ok(())
}
