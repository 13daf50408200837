pub mod initialize_loan_book;
pub mod request_loan;
pub mod fund_loan;
pub mod repay_loan;
pub mod claim_collateral;
pub mod get_loan;

pub use initialize_loan_book::*;
pub use request_loan::*;
pub use fund_loan::*;
pub use repay_loan::*;
pub use claim_collateral::*;
pub use get_loan::*;
