use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::error::LoanError;

/// Moves lamports out of a signer's wallet through the system program.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program_account: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.clone(),
        to: to.clone(),
    };
    let cpi_ctx = CpiContext::new(system_program_account.clone(), cpi_accounts);
    system_program::transfer(cpi_ctx, amount)
}

/// Releases lamports held by a program owned account. The account keeps
/// at least its rent exempt minimum.
pub fn release_lamports<'info>(
    custody: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(custody.data_len());

    let remaining = custody
        .lamports()
        .checked_sub(amount)
        .ok_or(error!(LoanError::InsufficientCustody))?;
    require_gte!(remaining, rent_floor, LoanError::InsufficientCustody);

    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(error!(LoanError::MathOverflow))?;

    **custody.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}
