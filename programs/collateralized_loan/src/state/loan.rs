use anchor_lang::prelude::*;
use crate::constants::BASIS_POINTS_DIVISOR;
use crate::error::LoanError;

/// Requested -> Funded -> Repaid | Defaulted
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum LoanState {
    Requested,
    Funded,
    Repaid,
    Defaulted,
}

impl LoanState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanState::Repaid | LoanState::Defaulted)
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Loan {
    pub id: u64,
    pub borrower: Pubkey,
    pub lender: Pubkey,           // Pubkey::default() until funded
    pub collateral_amount: u64,   // lamports held by this account on top of rent
    pub loan_amount: u64,         // 1:1 with collateral
    pub interest_rate_bps: u64,   // 500 = 5%, flat for the whole loan
    pub duration: u64,            // seconds after funding
    pub start_time: i64,          // 0 until funded
    pub state: LoanState,
    pub bump: u8,
}

/// Flattened read view, numeric fields in raw units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LoanInfo {
    pub id: u64,
    pub borrower: Pubkey,
    pub lender: Pubkey,
    pub collateral_amount: u64,
    pub loan_amount: u64,
    pub interest_rate_bps: u64,
    pub duration: u64,
    pub start_time: i64,
    pub state: LoanState,
    pub is_funded: bool,
    /// Set by both repayment and collateral claim, see `state` to tell them apart.
    pub is_repaid: bool,
}

impl Loan {
    pub const SEED: &'static [u8] = b"loan";

    pub fn open(
        id: u64,
        borrower: Pubkey,
        collateral_amount: u64,
        interest_rate_bps: u64,
        duration: u64,
        bump: u8,
    ) -> Result<Self> {
        require!(collateral_amount > 0, LoanError::InvalidCollateralAmount);
        // expiry is compared against i64 clock time
        require!(duration <= i64::MAX as u64, LoanError::InvalidDuration);

        Ok(Self {
            id,
            borrower,
            lender: Pubkey::default(),
            collateral_amount,
            loan_amount: collateral_amount,
            interest_rate_bps,
            duration,
            start_time: 0,
            state: LoanState::Requested,
            bump,
        })
    }

    pub fn is_funded(&self) -> bool {
        self.state != LoanState::Requested
    }

    pub fn is_repaid(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn fund(&mut self, lender: Pubkey, amount: u64, now: i64) -> Result<()> {
        require!(self.state == LoanState::Requested, LoanError::AlreadyFunded);
        require_eq!(amount, self.loan_amount, LoanError::IncorrectAmount);

        self.lender = lender;
        self.start_time = now;
        self.state = LoanState::Funded;
        Ok(())
    }

    /// floor(loan_amount * interest_rate_bps / 10_000)
    pub fn interest(&self) -> Result<u64> {
        let interest = (self.loan_amount as u128)
            .checked_mul(self.interest_rate_bps as u128)
            .ok_or(error!(LoanError::MathOverflow))?
            / BASIS_POINTS_DIVISOR;

        u64::try_from(interest).map_err(|_| error!(LoanError::MathOverflow))
    }

    /// Minimum amount the borrower has to send to close the loan.
    pub fn amount_due(&self) -> Result<u64> {
        self.loan_amount
            .checked_add(self.interest()?)
            .ok_or(error!(LoanError::MathOverflow))
    }

    /// First instant at which the lender may claim the collateral.
    pub fn expires_at(&self) -> i64 {
        self.start_time.saturating_add(self.duration as i64)
    }

    /// Closes the loan as repaid and returns the collateral owed back to the borrower.
    pub fn repay(&mut self, caller: Pubkey, amount: u64) -> Result<u64> {
        self.require_active()?;
        require_keys_eq!(caller, self.borrower, LoanError::NotBorrower);
        require_gte!(amount, self.amount_due()?, LoanError::InsufficientRepayment);

        self.state = LoanState::Repaid;
        Ok(self.collateral_amount)
    }

    /// Closes the loan as defaulted and returns the collateral forfeited to the lender.
    pub fn claim_collateral(&mut self, caller: Pubkey, now: i64) -> Result<u64> {
        self.require_active()?;
        require_keys_eq!(caller, self.lender, LoanError::NotLender);
        require_gte!(now, self.expires_at(), LoanError::NotExpired);

        self.state = LoanState::Defaulted;
        Ok(self.collateral_amount)
    }

    pub fn to_info(&self) -> LoanInfo {
        LoanInfo {
            id: self.id,
            borrower: self.borrower,
            lender: self.lender,
            collateral_amount: self.collateral_amount,
            loan_amount: self.loan_amount,
            interest_rate_bps: self.interest_rate_bps,
            duration: self.duration,
            start_time: self.start_time,
            state: self.state,
            is_funded: self.is_funded(),
            is_repaid: self.is_repaid(),
        }
    }

    fn require_active(&self) -> Result<()> {
        match self.state {
            LoanState::Requested => err!(LoanError::LoanNotFunded),
            LoanState::Funded => Ok(()),
            LoanState::Repaid | LoanState::Defaulted => err!(LoanError::LoanClosed),
        }
    }
}
