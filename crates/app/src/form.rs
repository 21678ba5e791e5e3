//! JSON invoice form accepted by the command line.
//!
//! Field names follow the stored form state (`invoiceNo`, `buyer`,
//! `products`, `taxType`, ...). Quantity and rate may be given as numbers or
//! as the raw text typed into the form.

use serde::Deserialize;

use gstinvoice_invoicing::{DraftAction, LineItemField, TaxRegime};
use gstinvoice_parties::BuyerRecord;

/// A numeric input as either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Text handed to the draft's lenient numeric coercion.
    pub fn as_input(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(text) => text.clone(),
        }
    }
}

/// One product row of the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductEntry {
    pub description: String,
    pub hsn: String,
    pub qty: FormValue,
    pub unit: String,
    pub rate: FormValue,
}

impl Default for ProductEntry {
    fn default() -> Self {
        Self {
            description: String::new(),
            hsn: String::new(),
            qty: FormValue::Number(1.0),
            unit: "NOS".to_string(),
            rate: FormValue::Number(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceForm {
    pub invoice_no: String,
    /// `YYYY-MM-DD`.
    pub invoice_date: String,
    pub po_no: String,
    pub po_date: String,
    pub buyer: BuyerRecord,
    pub shipping_address: String,
    pub transport_name: String,
    #[serde(rename = "transportID")]
    pub transport_id: String,
    pub vehicle_no: String,
    pub products: Vec<ProductEntry>,
    pub tax_type: TaxRegime,
}

impl InvoiceForm {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Edits that turn a fresh draft into this form, in form order.
    ///
    /// Buyer address and GSTIN are only set when given, so a blank value
    /// keeps whatever autocompletion filled in.
    pub fn actions(&self) -> Vec<DraftAction> {
        let mut actions = vec![
            DraftAction::SetInvoiceNo(self.invoice_no.clone()),
            DraftAction::SetInvoiceDate(self.invoice_date.clone()),
            DraftAction::SetPoNo(self.po_no.clone()),
            DraftAction::SetPoDate(self.po_date.clone()),
            DraftAction::SetBuyerName(self.buyer.name.clone()),
        ];
        if !self.buyer.address.trim().is_empty() {
            actions.push(DraftAction::SetBuyerAddress(self.buyer.address.clone()));
        }
        if !self.buyer.gstin.trim().is_empty() {
            actions.push(DraftAction::SetBuyerGstin(self.buyer.gstin.clone()));
        }
        actions.push(DraftAction::SetShippingAddress(self.shipping_address.clone()));

        for (index, product) in self.products.iter().enumerate() {
            if index > 0 {
                actions.push(DraftAction::AddLineItem);
            }
            let fields = [
                LineItemField::Description(product.description.clone()),
                LineItemField::HsnCode(product.hsn.clone()),
                LineItemField::Quantity(product.qty.as_input()),
                LineItemField::Unit(product.unit.clone()),
                LineItemField::Rate(product.rate.as_input()),
            ];
            actions.extend(
                fields
                    .into_iter()
                    .map(|field| DraftAction::UpdateLineItem { index, field }),
            );
        }

        actions.extend([
            DraftAction::SelectTaxRegime(self.tax_type),
            DraftAction::SetTransporterName(self.transport_name.clone()),
            DraftAction::SetTransporterId(self.transport_id.clone()),
            DraftAction::SetVehicleNo(self.vehicle_no.clone()),
        ]);
        actions
    }
}
