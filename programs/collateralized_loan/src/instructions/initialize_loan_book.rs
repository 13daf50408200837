use anchor_lang::prelude::*;
use crate::state::LoanBook;

#[derive(Accounts)]
pub struct InitializeLoanBook<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + LoanBook::INIT_SPACE,
        seeds = [LoanBook::SEED],
        bump,
    )]
    pub loan_book: Account<'info, LoanBook>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_loan_book_handler(ctx: Context<InitializeLoanBook>) -> Result<()> {
    let loan_book = &mut ctx.accounts.loan_book;
    loan_book.loan_count = 0;
    loan_book.bump = ctx.bumps.loan_book;

    msg!("Loan book {} initialized", loan_book.key());
    Ok(())
}
