//! Display model of the invoice preview.

use chrono::NaiveDate;

use gstinvoice_core::DomainResult;
use gstinvoice_invoicing::{AmountInWords, InvoiceDraft, TransportDetails};

use crate::seller::SellerProfile;

/// Heading printed above the letterhead.
pub const DOCUMENT_HEADING: &str = "Tax Invoice";

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Rupee amount with two decimals, e.g. `"₹ 280.56"`.
pub fn format_rupees(amount: f64) -> String {
    format!("₹ {amount:.2}")
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Buyer and delivery block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerBlock {
    pub name: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub gstin: String,
}

/// Invoice and purchase-order references; dates are `dd/mm/yyyy` or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceMeta {
    pub invoice_no: String,
    pub invoice_date: String,
    pub po_no: String,
    pub po_date: String,
}

/// One product row of the items table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub serial: usize,
    pub description: String,
    pub hsn_code: String,
    pub quantity: String,
    pub unit: String,
    pub rate: String,
    pub amount: String,
}

/// Labelled amount below the items (total, tax rows, grand total).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub amount: String,
}

/// Everything the preview shows, as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Print/export title, `Invoice_<no>` (`Invoice_Untitled` when unnumbered).
    pub document_title: String,
    pub heading: String,
    pub seller: SellerProfile,
    pub buyer: BuyerBlock,
    pub meta: InvoiceMeta,
    pub rows: Vec<DocumentRow>,
    pub summary: Vec<SummaryRow>,
    /// `"<words> Only"`, or the bare overflow sentinel.
    pub amount_in_words: String,
    pub transport: TransportDetails,
}

impl InvoiceDocument {
    /// Compute the display model for `draft`.
    pub fn build(draft: &InvoiceDraft, seller: &SellerProfile) -> DomainResult<Self> {
        let totals = draft.totals();

        let rows = draft
            .line_items()
            .iter()
            .enumerate()
            .map(|(idx, line)| DocumentRow {
                serial: idx + 1,
                description: line.description().to_string(),
                hsn_code: line.hsn_code().to_string(),
                quantity: line.quantity().to_string(),
                unit: line.unit().to_string(),
                rate: format_rupees(line.rate()),
                amount: format_rupees(line.amount()),
            })
            .collect();

        let mut summary = Vec::with_capacity(totals.tax.lines.len() + 2);
        summary.push(SummaryRow {
            label: "Total".to_string(),
            amount: format_rupees(totals.subtotal),
        });
        summary.extend(totals.tax.lines.iter().map(|line| SummaryRow {
            label: line.label(),
            amount: format_rupees(line.amount),
        }));
        summary.push(SummaryRow {
            label: "Grand Total".to_string(),
            amount: format_rupees(totals.grand_total),
        });

        let amount_in_words = match totals.amount_in_words()? {
            AmountInWords::Words(words) => format!("{words} Only"),
            overflow @ AmountInWords::Overflow => overflow.to_string(),
        };

        let invoice_no = draft.invoice_no().trim();
        let document_title = if invoice_no.is_empty() {
            "Invoice_Untitled".to_string()
        } else {
            format!("Invoice_{invoice_no}")
        };

        let buyer = draft.buyer();
        Ok(Self {
            document_title,
            heading: DOCUMENT_HEADING.to_string(),
            seller: seller.clone(),
            buyer: BuyerBlock {
                name: buyer.name.clone(),
                billing_address: buyer.address.clone(),
                shipping_address: draft.shipping_address().to_string(),
                gstin: buyer.gstin.clone(),
            },
            meta: InvoiceMeta {
                invoice_no: draft.invoice_no().to_string(),
                invoice_date: format_date(draft.invoice_date()),
                po_no: draft.po_no().to_string(),
                po_date: format_date(draft.po_date()),
            },
            rows,
            summary,
            amount_in_words,
            transport: draft.transport().clone(),
        })
    }
}
