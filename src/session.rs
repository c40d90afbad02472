//! The interactive dialogue: four prompts in fixed order, then the summary.

use crate::deposit::DepositRecord;
use crate::error::Result;
use crate::input::InputReader;
use log::info;
use std::io::{BufRead, Write};

pub const BANK_NAME_PROMPT: &str = "Введите название банка : ";
pub const DEPOSIT_AMOUNT_PROMPT: &str = "Введите количество вкладов : ";
pub const DEPOSIT_SIZE_PROMPT: &str = "Введите размер депозита : ";
pub const BANK_RATE_PROMPT: &str = "Введите размер процентной ставки : ";

/// Shown after every rejected answer.
pub const RETRY_MESSAGE: &str = "Введите корректное значение : ";

pub const BANK_NAME_LABEL: &str = "bank name";
pub const TOTAL_PAYMENT_LABEL: &str = "Размер общей выплаты по процентам:";

pub const MIN_DEPOSIT_AMOUNT: i64 = 1;
pub const MIN_DEPOSIT_SIZE: i64 = 1;
pub const MIN_BANK_RATE: i64 = 1;
pub const MAX_BANK_RATE: i64 = 1000;

/// Reads the bank name, deposit amount, deposit size and bank rate, in that order.
pub fn collect_deposit<R: BufRead, W: Write>(
    reader: &mut InputReader<R, W>,
) -> Result<DepositRecord> {
    let mut record = DepositRecord::new();

    record.set_bank_name(reader.read_string(BANK_NAME_PROMPT, RETRY_MESSAGE)?);
    record.set_deposit_amount(reader.read_int(
        DEPOSIT_AMOUNT_PROMPT,
        RETRY_MESSAGE,
        MIN_DEPOSIT_AMOUNT,
        i64::MAX,
    )?);
    record.set_deposit_size(reader.read_int(
        DEPOSIT_SIZE_PROMPT,
        RETRY_MESSAGE,
        MIN_DEPOSIT_SIZE,
        i64::MAX,
    )?);
    record.set_bank_rate(reader.read_int(
        BANK_RATE_PROMPT,
        RETRY_MESSAGE,
        MIN_BANK_RATE,
        MAX_BANK_RATE,
    )?);

    info!(
        "Collected deposit: bank={:?} amount={} size={} rate={}%",
        record.bank_name(),
        record.deposit_amount(),
        record.deposit_size(),
        record.bank_rate()
    );
    Ok(record)
}

/// Renders a payment the way floating-point amounts are shown to the user:
/// always with a fractional part, e.g. `1000.0` or `12.5`.
pub fn format_payment(value: f64) -> String {
    format!("{:?}", value)
}

/// Writes a blank line followed by the bank name and total payment lines.
pub fn write_summary<W: Write>(mut writer: W, record: &DepositRecord) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{} {}", BANK_NAME_LABEL, record.bank_name())?;
    writeln!(
        writer,
        "{} {}",
        TOTAL_PAYMENT_LABEL,
        format_payment(record.total_payment())
    )?;
    writer.flush()?;
    Ok(())
}

/// Runs the whole dialogue over the given input and output.
///
/// Returns the populated record after its summary has been written.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<DepositRecord> {
    let mut reader = InputReader::new(input, output);
    let record = collect_deposit(&mut reader)?;
    write_summary(reader.output(), &record)?;
    Ok(record)
}
