use anchor_lang::prelude::*;
use crate::error::LoanError;

/// Append-only index of loans. Loan `n` lives at
/// `[Loan::SEED, loan_book, n.to_le_bytes()]` for every `n < loan_count`.
#[account]
#[derive(InitSpace)]
pub struct LoanBook {
    pub loan_count: u64,
    pub bump: u8,
}

impl LoanBook {
    pub const SEED: &'static [u8] = b"loan_book";

    /// Hands out the next sequential id.
    pub fn next_loan_id(&mut self) -> Result<u64> {
        let loan_id = self.loan_count;
        self.loan_count = loan_id
            .checked_add(1)
            .ok_or(error!(LoanError::MathOverflow))?;
        Ok(loan_id)
    }
}
