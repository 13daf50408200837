use anchor_lang::prelude::*;
use crate::events::CollateralClaimed;
use crate::state::{Loan, LoanBook};
use crate::utils::release_lamports;

#[derive(Accounts)]
#[instruction(loan_id: u64)]
pub struct ClaimCollateral<'info> {
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
}

pub fn claim_collateral_handler(ctx: Context<ClaimCollateral>, loan_id: u64) -> Result<()> {
    let lender = ctx.accounts.lender.key();
    let now = Clock::get()?.unix_timestamp;

    let collateral = ctx.accounts.loan.claim_collateral(lender, now)?;

    release_lamports(
        &ctx.accounts.loan.to_account_info(),
        &ctx.accounts.lender.to_account_info(),
        collateral,
    )?;

    emit!(CollateralClaimed {
        loan_id,
        lender,
        collateral_amount: collateral,
        claimed_at: now,
    });
    msg!("Loan {} defaulted, {} lamports collateral claimed", loan_id, collateral);

    Ok(())
}
