//! Money and date presentation. Values are formatted once, after aggregation.

use chrono::{DateTime, Datelike, Utc};
use gofin_domain::{CurrencyCode, Locale, NegativeStyle};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Decimal) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: DateTime<Utc>) -> String;
}

/// Locale-aware formatter for amounts, dates and the highlight captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    pub locale: Locale,
    pub currency: CurrencyCode,
    pub negative_style: NegativeStyle,
}

impl MoneyFormatter {
    pub fn new(locale: Locale, currency: CurrencyCode) -> Self {
        Self {
            locale,
            currency,
            negative_style: NegativeStyle::Sign,
        }
    }

    pub fn with_negative_style(mut self, style: NegativeStyle) -> Self {
        self.negative_style = style;
        self
    }

    pub fn last_entry_label(&self, date: DateTime<Utc>) -> String {
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("Última entrada dia {} de {}", date.day(), month),
            Locale::EnUs => format!("Last entry on {} {}", month, date.day()),
        }
    }

    pub fn last_expense_label(&self, date: DateTime<Utc>) -> String {
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("Última saída dia {} de {}", date.day(), month),
            Locale::EnUs => format!("Last expense on {} {}", month, date.day()),
        }
    }

    /// Interval from the first of the month up to `date`.
    pub fn total_interval_label(&self, date: DateTime<Utc>) -> String {
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("01 à {} de {}", date.day(), month),
            Locale::EnUs => format!("{} 1 to {}", month, date.day()),
        }
    }

    /// Caption used when a highlight has no contributing transaction.
    pub fn empty_label(&self) -> String {
        match self.locale {
            Locale::PtBr => "Nenhuma transação".into(),
            Locale::EnUs => "No transactions".into(),
        }
    }

    pub fn format_percent(&self, percent: Decimal) -> String {
        let rounded = percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}%", rounded.normalize())
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), CurrencyCode::default())
    }
}

impl CurrencyFormatter for MoneyFormatter {
    fn format_amount(&self, amount: Decimal) -> String {
        let precision = self.currency.minor_units();
        let rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
        let body = format_number(self.locale, rounded.abs(), precision);
        let symbol = self.currency.symbol();
        let spaced = self.locale == Locale::PtBr || symbol.chars().all(char::is_alphabetic);
        let rendered = if spaced {
            format!("{} {}", symbol, body)
        } else {
            format!("{}{}", symbol, body)
        };
        if rounded.is_sign_negative() && !rounded.is_zero() {
            match self.negative_style {
                NegativeStyle::Sign => format!("-{}", rendered),
                NegativeStyle::Parentheses => format!("({})", rendered),
            }
        } else {
            rendered
        }
    }
}

impl DateFormatter for MoneyFormatter {
    fn format_date(&self, date: DateTime<Utc>) -> String {
        match self.locale {
            Locale::PtBr => date.format("%d/%m/%Y").to_string(),
            Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }
}

/// Renders a non-negative value with `precision` fraction digits and locale separators.
pub fn format_number(locale: Locale, value: Decimal, precision: u32) -> String {
    let mut scaled = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(precision);
    let raw = scaled.to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };
    let mut body = group_digits(int_part, locale.grouping_separator());
    if let Some(frac) = frac_part {
        body.push(locale.decimal_separator());
        body.push_str(frac);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && idx % 3 == lead {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
