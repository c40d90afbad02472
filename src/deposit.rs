//! Deposit record and interest computation.

/// Parameters of a bank deposit as entered by the user.
///
/// The record does no validation of its own; the input reader enforces the
/// bounds before values are stored. A default record has every field zeroed,
/// so [`DepositRecord::total_payment`] returns `0.0` until it is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositRecord {
    bank_name: String,
    deposit_amount: i64,
    deposit_size: i64,
    bank_rate: i64,
}

impl DepositRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    pub fn set_bank_name(&mut self, name: impl Into<String>) {
        self.bank_name = name.into();
    }

    /// Number of deposits held at the bank.
    pub fn deposit_amount(&self) -> i64 {
        self.deposit_amount
    }

    pub fn set_deposit_amount(&mut self, amount: i64) {
        self.deposit_amount = amount;
    }

    /// Monetary size of a single deposit.
    pub fn deposit_size(&self) -> i64 {
        self.deposit_size
    }

    pub fn set_deposit_size(&mut self, size: i64) {
        self.deposit_size = size;
    }

    /// Interest rate as a whole percentage.
    pub fn bank_rate(&self) -> i64 {
        self.bank_rate
    }

    pub fn set_bank_rate(&mut self, rate: i64) {
        self.bank_rate = rate;
    }

    /// Total interest paid across all deposits:
    /// `deposit_amount * (deposit_size * bank_rate / 100)`.
    ///
    /// The rate fraction is computed in floating point, so rates that do not
    /// divide evenly into 100 keep their fractional part.
    ///
    /// # Examples
    ///
    /// ```
    /// use bank_deposit::DepositRecord;
    ///
    /// let mut record = DepositRecord::new();
    /// record.set_deposit_amount(10);
    /// record.set_deposit_size(1000);
    /// record.set_bank_rate(5);
    /// assert_eq!(record.total_payment(), 500.0);
    /// ```
    pub fn total_payment(&self) -> f64 {
        let per_deposit = self.deposit_size as f64 * self.bank_rate as f64 / 100.0;
        self.deposit_amount as f64 * per_deposit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: i64, size: i64, rate: i64) -> DepositRecord {
        let mut record = DepositRecord::new();
        record.set_bank_name("Test");
        record.set_deposit_amount(amount);
        record.set_deposit_size(size);
        record.set_bank_rate(rate);
        record
    }

    #[test]
    fn test_default_record_pays_nothing() {
        let record = DepositRecord::new();
        assert_eq!(record.bank_name(), "");
        assert_eq!(record.deposit_amount(), 0);
        assert_eq!(record.total_payment(), 0.0);
    }

    #[test]
    fn test_accessors_round_trip_values() {
        let record = record(3, 250, 12);
        assert_eq!(record.bank_name(), "Test");
        assert_eq!(record.deposit_amount(), 3);
        assert_eq!(record.deposit_size(), 250);
        assert_eq!(record.bank_rate(), 12);
    }

    #[test]
    fn test_total_payment_whole_result() {
        assert_eq!(record(10, 1000, 5).total_payment(), 500.0);
        assert_eq!(record(5, 2000, 10).total_payment(), 1000.0);
    }

    #[test]
    fn test_total_payment_keeps_fraction() {
        // 10 * 5 / 100 = 0.5 must not truncate to 0
        assert_eq!(record(1, 10, 5).total_payment(), 0.5);
        assert_eq!(record(2, 25, 25).total_payment(), 12.5);
    }

    #[test]
    fn test_total_payment_at_max_rate() {
        assert_eq!(record(1, 100, 1000).total_payment(), 1000.0);
    }
}
