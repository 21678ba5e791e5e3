//! Invoicing domain module.
//!
//! This crate contains the invoice calculation rules (line aggregation, GST,
//! amount in words) and the editable invoice draft, implemented purely as
//! deterministic domain logic (no IO, no rendering, no storage).

pub mod aggregate;
pub mod draft;
pub mod line_item;
pub mod tax;
pub mod totals;
pub mod words;

pub use aggregate::subtotal;
pub use draft::{DraftAction, InvoiceDraft, LineItemField, MissingField, TransportDetails};
pub use line_item::{LineItem, coerce_amount, parse_quantity, parse_rate};
pub use tax::{TaxBreakdown, TaxKind, TaxLine, TaxRegime};
pub use totals::InvoiceTotals;
pub use words::{AmountInWords, MAX_WORDS_VALUE, OVERFLOW, amount_in_words, number_to_words};
