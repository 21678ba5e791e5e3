//! GST regimes and tax computation.

use serde::{Deserialize, Serialize};

use gstinvoice_core::ValueObject;

/// Integrated GST rate (inter-state supply).
pub const IGST_RATE: f64 = 0.12;

/// Combined SGST + CGST rate (intra-state supply), split in two equal halves.
pub const SGST_CGST_RATE: f64 = 0.18;

/// Active tax regime of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    #[default]
    #[serde(rename = "IGST")]
    Igst,
    #[serde(rename = "SGST", alias = "SGST_CGST")]
    SgstCgst,
}

impl TaxRegime {
    /// Combined rate charged under this regime.
    pub fn rate(self) -> f64 {
        match self {
            TaxRegime::Igst => IGST_RATE,
            TaxRegime::SgstCgst => SGST_CGST_RATE,
        }
    }

    /// Selector caption.
    pub fn label(self) -> &'static str {
        match self {
            TaxRegime::Igst => "IGST (12%)",
            TaxRegime::SgstCgst => "SGST/CGST (9% each)",
        }
    }

    /// Apply this regime to `subtotal`.
    pub fn apply(self, subtotal: f64) -> TaxBreakdown {
        match self {
            TaxRegime::Igst => {
                let tax = subtotal * IGST_RATE;
                TaxBreakdown {
                    regime: self,
                    lines: vec![TaxLine::new(TaxKind::Igst, tax)],
                    total: tax,
                }
            }
            TaxRegime::SgstCgst => {
                let half = subtotal * SGST_CGST_RATE / 2.0;
                TaxBreakdown {
                    regime: self,
                    lines: vec![
                        TaxLine::new(TaxKind::Sgst, half),
                        TaxLine::new(TaxKind::Cgst, half),
                    ],
                    // From the unrounded halves, never from their display values.
                    total: half * 2.0,
                }
            }
        }
    }
}

impl core::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// GST component printed on its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxKind {
    Igst,
    Sgst,
    Cgst,
}

impl TaxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TaxKind::Igst => "IGST",
            TaxKind::Sgst => "SGST",
            TaxKind::Cgst => "CGST",
        }
    }

    /// Rate of this component alone, in percent.
    pub fn rate_percent(self) -> u32 {
        match self {
            TaxKind::Igst => 12,
            TaxKind::Sgst | TaxKind::Cgst => 9,
        }
    }
}

/// One tax row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub kind: TaxKind,
    /// Unrounded amount in Rupees.
    pub amount: f64,
}

impl TaxLine {
    fn new(kind: TaxKind, amount: f64) -> Self {
        Self { kind, amount }
    }

    /// Row caption, e.g. `"SGST @9%"`.
    pub fn label(&self) -> String {
        format!("{} @{}%", self.kind.as_str(), self.kind.rate_percent())
    }
}

/// Tax rows for a subtotal under one regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub regime: TaxRegime,
    pub lines: Vec<TaxLine>,
    /// Sum of all rows at full precision.
    pub total: f64,
}

impl ValueObject for TaxBreakdown {}
