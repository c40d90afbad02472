//! # Bank Deposit
//!
//! Interactive calculator for the total interest paid on a set of bank deposits.
//!
//! The user is asked for a bank name, the number of deposits, the size of one
//! deposit and the interest rate in percent. Each answer is validated and the
//! question repeats until a valid value is entered. The result is
//! `amount * (size * rate / 100)`.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let input = Cursor::new("MyBank\n5\n2000\n10\n");
//! let record = bank_deposit::session::run(input, &mut output).unwrap();
//!
//! assert_eq!(record.total_payment(), 1000.0);
//! assert!(String::from_utf8(output).unwrap().contains("bank name MyBank"));
//! ```

pub mod deposit;
pub mod error;
pub mod input;
pub mod session;

pub use deposit::DepositRecord;
pub use error::{DepositError, InvalidInput, Result};
pub use input::InputReader;
