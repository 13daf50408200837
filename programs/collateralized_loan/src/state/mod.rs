pub mod loan;
pub mod loan_book;

pub use loan::*;
pub use loan_book::*;
