use anchor_lang::prelude::*;

#[event]
pub struct LoanRequested {
    pub loan_id: u64,
    pub borrower: Pubkey,
    pub collateral_amount: u64,
    pub interest_rate_bps: u64,
    pub duration: u64,
}

#[event]
pub struct LoanFunded {
    pub loan_id: u64,
    pub lender: Pubkey,
    pub borrower: Pubkey,
    pub amount: u64,
    pub start_time: i64,
}

#[event]
pub struct LoanRepaid {
    pub loan_id: u64,
    pub borrower: Pubkey,
    pub lender: Pubkey,
    pub amount: u64,
    pub collateral_returned: u64,
}

#[event]
pub struct CollateralClaimed {
    pub loan_id: u64,
    pub lender: Pubkey,
    pub collateral_amount: u64,
    pub claimed_at: i64,
}
