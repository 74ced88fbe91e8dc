use crate::config::TrackerConfig;
use crate::domain::{TransactionKind, TransactionRecord};

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Symbol-prefixed amounts with `,` grouping and up to three fraction
/// digits, trailing zeros dropped (`1234.5` renders as `$1,234.5`).
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    symbol: String,
}

impl AmountFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.currency_symbol.clone())
    }

    /// Magnitude only, as shown on the income and expense cards.
    pub fn magnitude(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, group_digits(amount.abs()))
    }

    /// Balance header: negative totals keep their sign.
    pub fn balance(&self, total: f64) -> String {
        let rendered = self.magnitude(total);
        if total < 0.0 && rendered_is_nonzero(total) {
            format!("-{rendered}")
        } else {
            rendered
        }
    }

    /// List row amount with the direction sign (`+$3,000`, `-$5.5`).
    pub fn signed(&self, record: &TransactionRecord) -> String {
        let sign = match record.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        format!("{sign}{}", self.magnitude(record.amount))
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new(TrackerConfig::default_currency_symbol())
    }
}

impl CurrencyFormatter for AmountFormatter {
    fn format_amount(&self, amount: f64) -> String {
        self.balance(amount)
    }
}

fn rendered_is_nonzero(value: f64) -> bool {
    group_digits(value.abs()) != "0"
}

fn group_digits(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
