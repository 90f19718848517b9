use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Formats a calendar date as the `MM-DD` axis/tooltip label.
#[must_use]
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}
