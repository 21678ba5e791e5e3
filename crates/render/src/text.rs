//! Plain-text layout for terminals and logs.

use std::fmt::Write as _;

use crate::document::InvoiceDocument;
use crate::{RenderError, Renderer};

/// Monospace rendering of the invoice, `width` columns wide.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 80 }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrowest layout is 72 columns.
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(72),
        }
    }

    fn centered(&self, out: &mut String, text: &str) -> std::fmt::Result {
        writeln!(out, "{text:^width$}", width = self.width)
    }

    fn rule(&self, out: &mut String, c: char) -> std::fmt::Result {
        writeln!(out, "{}", c.to_string().repeat(self.width))
    }

    fn write_document(&self, out: &mut String, doc: &InvoiceDocument) -> std::fmt::Result {
        let seller = &doc.seller;
        // S.No | Description | HSN | Qty | Unit | Rate | Amount
        let desc_width = self.width - (5 + 10 + 8 + 6 + 14 + 14 + 6);

        self.centered(out, &doc.heading)?;
        self.centered(out, &seller.name)?;
        for line in &seller.address_lines {
            self.centered(out, line)?;
        }
        self.centered(out, &seller.contact_line())?;
        self.rule(out, '=')?;

        writeln!(out, "M/S: {}", doc.buyer.name)?;
        writeln!(out, "Billing Address: {}", doc.buyer.billing_address)?;
        writeln!(out, "Shipping Address: {}", doc.buyer.shipping_address)?;
        writeln!(out, "GSTIN: {}", doc.buyer.gstin)?;
        writeln!(
            out,
            "Invoice No: {}    Invoice Date: {}",
            doc.meta.invoice_no, doc.meta.invoice_date
        )?;
        writeln!(out, "PO No: {}    PO Date: {}", doc.meta.po_no, doc.meta.po_date)?;
        self.rule(out, '-')?;

        writeln!(
            out,
            "{:<5} {:<desc_width$} {:<10} {:>8} {:<6} {:>14} {:>14}",
            "S.No.", "Description", "HSN Code", "Qty", "Unit", "Rate", "Amount"
        )?;
        self.rule(out, '-')?;
        for row in &doc.rows {
            writeln!(
                out,
                "{:<5} {:<desc_width$} {:<10} {:>8} {:<6} {:>14} {:>14}",
                row.serial,
                truncate(&row.description, desc_width),
                truncate(&row.hsn_code, 10),
                row.quantity,
                truncate(&row.unit, 6),
                row.rate,
                row.amount
            )?;
        }
        self.rule(out, '-')?;
        let label_width = self.width - 15;
        for row in &doc.summary {
            writeln!(out, "{:>label_width$} {:>14}", row.label, row.amount)?;
        }
        self.rule(out, '=')?;

        writeln!(out, "Amount in Words: {}", doc.amount_in_words)?;
        writeln!(out)?;
        writeln!(out, "Transporter: {}", doc.transport.transporter_name)?;
        writeln!(out, "Transporter ID: {}", doc.transport.transporter_id)?;
        writeln!(out, "Vehicle No.: {}", doc.transport.vehicle_no)?;
        writeln!(out)?;
        writeln!(out, "Bank Details:")?;
        writeln!(out, "  Bank: {}", seller.bank.bank)?;
        writeln!(out, "  Branch: {}", seller.bank.branch)?;
        writeln!(out, "  Account No.: {}", seller.bank.account_no)?;
        writeln!(out, "  IFSC Code: {}", seller.bank.ifsc)?;
        writeln!(out)?;
        writeln!(out, "Terms & Conditions:")?;
        for (idx, term) in seller.terms.iter().enumerate() {
            writeln!(out, "  {}. {}", idx + 1, term)?;
        }
        writeln!(out)?;
        writeln!(out, "{:>width$}", format!("For {}", seller.name), width = self.width)?;
        writeln!(out)?;
        writeln!(out, "{:>width$}", seller.signatory, width = self.width)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

impl Renderer for TextRenderer {
    fn render(&self, document: &InvoiceDocument) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_document(&mut out, document)?;
        tracing::debug!(title = %document.document_title, "rendered text invoice");
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BuyerBlock, DocumentRow, InvoiceMeta, SummaryRow};
    use crate::seller::SellerProfile;
    use gstinvoice_invoicing::TransportDetails;

    fn document() -> InvoiceDocument {
        InvoiceDocument {
            document_title: "Invoice_7".to_string(),
            heading: "Tax Invoice".to_string(),
            seller: SellerProfile::default(),
            buyer: BuyerBlock {
                name: "Acme Textiles".to_string(),
                billing_address: "Plot 4".to_string(),
                shipping_address: "Gate 2".to_string(),
                gstin: "07AAACA1234A1Z5".to_string(),
            },
            meta: InvoiceMeta {
                invoice_no: "7".to_string(),
                invoice_date: "05/04/2024".to_string(),
                po_no: "PO-1".to_string(),
                po_date: String::new(),
            },
            rows: vec![DocumentRow {
                serial: 1,
                description: "A very long product description that cannot fit the column"
                    .to_string(),
                hsn_code: "5910".to_string(),
                quantity: "2".to_string(),
                unit: "NOS".to_string(),
                rate: "₹ 100.00".to_string(),
                amount: "₹ 200.00".to_string(),
            }],
            summary: vec![SummaryRow {
                label: "Grand Total".to_string(),
                amount: "₹ 224.00".to_string(),
            }],
            amount_in_words: "Two Hundred and Twenty Four Rupees Only".to_string(),
            transport: TransportDetails {
                transporter_name: "Speed Cargo".to_string(),
                transporter_id: "T-9".to_string(),
                vehicle_no: "UP16 AB 1234".to_string(),
            },
        }
    }

    #[test]
    fn renders_every_section() {
        let text = TextRenderer::new().render(&document()).unwrap();

        assert!(text.contains("Tax Invoice"));
        assert!(text.contains("SAI BELTING"));
        assert!(text.contains("M/S: Acme Textiles"));
        assert!(text.contains("Invoice No: 7    Invoice Date: 05/04/2024"));
        assert!(text.contains("Grand Total"));
        assert!(text.contains("Amount in Words: Two Hundred and Twenty Four Rupees Only"));
        assert!(text.contains("Vehicle No.: UP16 AB 1234"));
        assert!(text.contains("  3. Subject to G.B. Nagar jurisdiction only."));
        assert!(text.contains("(Authorized Signatory)"));
    }

    #[test]
    fn long_descriptions_are_truncated_to_the_column() {
        let text = TextRenderer::new().render(&document()).unwrap();
        assert!(text.contains('…'));
        assert!(!text.contains("cannot fit the column"));
    }

    #[test]
    fn width_has_a_floor() {
        let narrow = TextRenderer::with_width(10).render(&document()).unwrap();
        let rule = narrow.lines().find(|l| l.starts_with('=')).unwrap();
        assert_eq!(rule.chars().count(), 72);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("NOS", 6), "NOS");
        assert_eq!(truncate("METRES", 6), "METRES");
        assert_eq!(truncate("KILOGRAM", 6), "KILOG…");
    }
}
