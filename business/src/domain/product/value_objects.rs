use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use super::errors::ProductError;

/// Non-negative product price.
#[derive(Debug, Clone, PartialEq)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(value: BigDecimal) -> Result<Self, ProductError> {
        if value < BigDecimal::zero() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(Self(value))
    }

    /// Parses a form value. A missing or blank value means zero.
    pub fn parse(raw: Option<&str>) -> Result<Self, ProductError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self(BigDecimal::zero())),
            Some(s) => {
                let value = BigDecimal::from_str(s).map_err(|_| ProductError::InvalidPrice)?;
                Self::new(value)
            }
        }
    }

    /// Constructor for values already persisted in the repository (no validation).
    pub fn from_repository(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Non-negative count of units in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock(i32);

impl Stock {
    pub fn new(value: i32) -> Result<Self, ProductError> {
        if value < 0 {
            return Err(ProductError::InvalidStock);
        }
        Ok(Self(value))
    }

    /// Parses a form value. A missing or blank value means zero.
    pub fn parse(raw: Option<&str>) -> Result<Self, ProductError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self(0)),
            Some(s) => {
                let value = s.parse::<i32>().map_err(|_| ProductError::InvalidStock)?;
                Self::new(value)
            }
        }
    }

    /// Constructor for values already persisted in the repository (no validation).
    pub fn from_repository(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Parses the optional category reference of a product form.
pub fn parse_category_id(raw: Option<&str>) -> Result<Option<Uuid>, ProductError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| ProductError::InvalidCategory),
    }
}
