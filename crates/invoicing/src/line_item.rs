use serde::Serialize;

use gstinvoice_core::{DomainError, DomainResult, ValueObject};

/// Unit assigned to freshly added lines.
pub const DEFAULT_UNIT: &str = "NOS";

/// One product line of an invoice.
///
/// Quantity and rate are always finite and non-negative, and so is their
/// product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    description: String,
    hsn_code: String,
    quantity: f64,
    unit: String,
    /// Price per unit in Rupees.
    rate: f64,
}

impl ValueObject for LineItem {}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            hsn_code: String::new(),
            quantity: 1.0,
            unit: DEFAULT_UNIT.to_string(),
            rate: 0.0,
        }
    }
}

impl LineItem {
    /// Build a line from already-validated numbers.
    ///
    /// Rejects negative or non-finite quantity and rate.
    pub fn new(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        rate: f64,
    ) -> DomainResult<Self> {
        ensure_non_negative("quantity", quantity)?;
        ensure_non_negative("rate", rate)?;
        ensure_finite_amount(quantity, rate)?;
        Ok(Self {
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity,
            unit: unit.into(),
            rate,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hsn_code(&self) -> &str {
        &self.hsn_code
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Line amount (`quantity × rate`), unrounded.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_hsn_code(&mut self, hsn_code: impl Into<String>) {
        self.hsn_code = hsn_code.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    /// Replace the quantity; on error the line is unchanged.
    pub fn set_quantity(&mut self, quantity: f64) -> DomainResult<()> {
        ensure_non_negative("quantity", quantity)?;
        ensure_finite_amount(quantity, self.rate)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Replace the rate; on error the line is unchanged.
    pub fn set_rate(&mut self, rate: f64) -> DomainResult<()> {
        ensure_non_negative("rate", rate)?;
        ensure_finite_amount(self.quantity, rate)?;
        self.rate = rate;
        Ok(())
    }
}

fn ensure_finite_amount(quantity: f64, rate: f64) -> DomainResult<()> {
    if (quantity * rate).is_finite() {
        Ok(())
    } else {
        Err(DomainError::validation("line amount is too large"))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Permissive coercion of a form's numeric field.
///
/// Blank or non-numeric text counts as `0`; negative numbers are rejected.
pub fn coerce_amount(text: &str) -> DomainResult<f64> {
    let value = parse_number(text).unwrap_or(0.0);
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "negative amount not allowed: {}",
            text.trim()
        )));
    }
    // Normalise -0.0 so it displays as "0".
    Ok(value + 0.0)
}

/// Strict quantity parse: must be a number greater than zero.
pub fn parse_quantity(text: &str) -> DomainResult<f64> {
    let value = parse_number(text)
        .ok_or_else(|| DomainError::validation(format!("quantity is not a number: {text:?}")))?;
    if value <= 0.0 {
        return Err(DomainError::validation("quantity must be positive"));
    }
    Ok(value)
}

/// Strict rate parse: must be a number, zero or more.
pub fn parse_rate(text: &str) -> DomainResult<f64> {
    let value = parse_number(text)
        .ok_or_else(|| DomainError::validation(format!("rate is not a number: {text:?}")))?;
    ensure_non_negative("rate", value)?;
    Ok(value + 0.0)
}
