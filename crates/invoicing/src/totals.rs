//! Invoice totals (derived, never stored).

use gstinvoice_core::{DomainResult, ValueObject};

use crate::aggregate::subtotal;
use crate::line_item::LineItem;
use crate::tax::{TaxBreakdown, TaxRegime};
use crate::words::{AmountInWords, amount_in_words};

/// Subtotal, tax rows and grand total for a set of line items.
///
/// Always recomputed from its inputs; values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: TaxBreakdown,
    pub grand_total: f64,
}

impl ValueObject for InvoiceTotals {}

impl InvoiceTotals {
    pub fn compute<'a, I>(items: I, regime: TaxRegime) -> Self
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        let subtotal = subtotal(items);
        let tax = regime.apply(subtotal);
        let grand_total = subtotal + tax.total;
        Self {
            subtotal,
            tax,
            grand_total,
        }
    }

    pub fn tax_total(&self) -> f64 {
        self.tax.total
    }

    /// Grand total in words, without the trailing "Only".
    pub fn amount_in_words(&self) -> DomainResult<AmountInWords> {
        amount_in_words(self.grand_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new("Flat belt", "5910", 2.0, "NOS", 100.0).unwrap(),
            LineItem::new("Fastener", "7318", 1.0, "NOS", 50.50).unwrap(),
        ]
    }

    #[test]
    fn worked_example_under_igst() {
        let totals = InvoiceTotals::compute(&items(), TaxRegime::Igst);

        assert_eq!(format!("{:.2}", totals.subtotal), "250.50");
        assert_eq!(format!("{:.2}", totals.tax_total()), "30.06");
        assert_eq!(format!("{:.2}", totals.grand_total), "280.56");
        assert_eq!(
            totals.amount_in_words().unwrap().as_str(),
            "Two Hundred and Eighty Rupees and Fifty Six Paise"
        );
    }

    #[test]
    fn worked_example_under_sgst_cgst() {
        let totals = InvoiceTotals::compute(&items(), TaxRegime::SgstCgst);

        assert_eq!(totals.tax.lines.len(), 2);
        assert_eq!(totals.tax.lines[0].amount, totals.tax.lines[1].amount);
        assert_eq!(format!("{:.2}", totals.tax_total()), "45.09");
        assert_eq!(format!("{:.2}", totals.grand_total), "295.59");
        assert_eq!(
            totals.amount_in_words().unwrap().as_str(),
            "Two Hundred and Ninety Five Rupees and Fifty Nine Paise"
        );
    }

    #[test]
    fn recomputation_is_stable() {
        let a = InvoiceTotals::compute(&items(), TaxRegime::SgstCgst);
        let b = InvoiceTotals::compute(&items(), TaxRegime::SgstCgst);
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: grand total is subtotal plus tax under both regimes.
        #[test]
        fn grand_total_is_subtotal_plus_tax(
            lines in prop::collection::vec((0.0f64..1_000.0, 0.0f64..10_000.0), 1..10),
            igst in any::<bool>()
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(q, r)| LineItem::new("x", "", q, "NOS", r).unwrap())
                .collect();
            let regime = if igst { TaxRegime::Igst } else { TaxRegime::SgstCgst };

            let totals = InvoiceTotals::compute(&items, regime);

            let tolerance = 1e-9 * totals.subtotal.max(1.0);
            prop_assert!((totals.grand_total - (totals.subtotal + totals.tax.total)).abs() < 1e-9);
            prop_assert!((totals.tax.total - totals.subtotal * regime.rate()).abs() <= tolerance);
            prop_assert!(totals.amount_in_words().is_ok());
        }
    }
}
