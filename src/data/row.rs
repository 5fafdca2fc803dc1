use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::DataPoint;

/// One CSV record before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRentRow {
    pub date: String,
    pub rent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("invalid date `{value}`")]
    InvalidDate { value: String },

    #[error("invalid rent `{value}`")]
    InvalidRent { value: String },

    #[error("negative rent `{value}`")]
    NegativeRent { value: String },

    #[error("malformed record: {message}")]
    Malformed { message: String },
}

pub fn parse_row(raw: &RawRentRow, date_format: &str) -> Result<DataPoint, RowParseError> {
    let date_text = raw.date.trim();
    let date = NaiveDate::parse_from_str(date_text, date_format).map_err(|_| {
        RowParseError::InvalidDate {
            value: date_text.to_owned(),
        }
    })?;

    let rent_text = raw.rent.trim();
    let invalid_rent = || RowParseError::InvalidRent {
        value: rent_text.to_owned(),
    };
    let rent = Decimal::from_str(rent_text)
        .or_else(|_| Decimal::from_scientific(rent_text))
        .map_err(|_| invalid_rent())?;
    if rent.is_sign_negative() && !rent.is_zero() {
        return Err(RowParseError::NegativeRent {
            value: rent_text.to_owned(),
        });
    }

    DataPoint::from_decimal_rent(date, rent).map_err(|_| invalid_rent())
}
