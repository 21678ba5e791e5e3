//! Editable invoice draft driven by pure reducer actions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gstinvoice_core::{DomainError, DomainResult, Reducer};
use gstinvoice_parties::BuyerRecord;

use crate::line_item::{LineItem, coerce_amount};
use crate::tax::TaxRegime;
use crate::totals::InvoiceTotals;

/// Format of the form's date inputs.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Transporter block of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDetails {
    pub transporter_name: String,
    pub transporter_id: String,
    pub vehicle_no: String,
}

/// The invoice being edited.
///
/// Immutable: every change goes through [`Reducer::reduce`], which returns a
/// new draft. Invariant: there is always at least one line item.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    invoice_no: String,
    invoice_date: Option<NaiveDate>,
    po_no: String,
    po_date: Option<NaiveDate>,
    buyer: BuyerRecord,
    shipping_address: String,
    transport: TransportDetails,
    line_items: Vec<LineItem>,
    tax_regime: TaxRegime,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Single field edit on a line item; numeric fields carry the raw input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItemField {
    Description(String),
    HsnCode(String),
    Quantity(String),
    Unit(String),
    Rate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftAction {
    SetInvoiceNo(String),
    /// `YYYY-MM-DD`; blank clears the date.
    SetInvoiceDate(String),
    SetPoNo(String),
    /// `YYYY-MM-DD`; blank clears the date.
    SetPoDate(String),
    SetBuyerName(String),
    SetBuyerAddress(String),
    /// Stored upper-cased.
    SetBuyerGstin(String),
    /// Replace the whole buyer block, e.g. from a directory match.
    SelectBuyer(BuyerRecord),
    SetShippingAddress(String),
    SetTransporterName(String),
    SetTransporterId(String),
    SetVehicleNo(String),
    AddLineItem,
    /// Remove the line at this index; a no-op when it is the only line.
    RemoveLineItem(usize),
    UpdateLineItem { index: usize, field: LineItemField },
    SelectTaxRegime(TaxRegime),
}

/// Required form field left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    BuyerName,
    BillingAddress,
    ShippingAddress,
    /// Description of the line with this serial number (1-based).
    LineDescription(usize),
}

impl core::fmt::Display for MissingField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MissingField::BuyerName => f.write_str("buyer name"),
            MissingField::BillingAddress => f.write_str("billing address"),
            MissingField::ShippingAddress => f.write_str("shipping address"),
            MissingField::LineDescription(serial) => write!(f, "description of item {serial}"),
        }
    }
}

fn parse_date(field: &str, text: &str) -> DomainResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|e| DomainError::validation(format!("{field} {text:?}: {e}")))
}

impl InvoiceDraft {
    /// Blank draft with one fresh line item and IGST selected.
    pub fn new() -> Self {
        Self {
            invoice_no: String::new(),
            invoice_date: None,
            po_no: String::new(),
            po_date: None,
            buyer: BuyerRecord::default(),
            shipping_address: String::new(),
            transport: TransportDetails::default(),
            line_items: vec![LineItem::default()],
            tax_regime: TaxRegime::default(),
        }
    }

    pub fn invoice_no(&self) -> &str {
        &self.invoice_no
    }

    pub fn invoice_date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    pub fn po_no(&self) -> &str {
        &self.po_no
    }

    pub fn po_date(&self) -> Option<NaiveDate> {
        self.po_date
    }

    pub fn buyer(&self) -> &BuyerRecord {
        &self.buyer
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn transport(&self) -> &TransportDetails {
        &self.transport
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn tax_regime(&self) -> TaxRegime {
        self.tax_regime
    }

    /// Totals for the current lines and regime, computed fresh.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::compute(&self.line_items, self.tax_regime)
    }

    /// Required fields that are still blank, in form order.
    pub fn check_required(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.buyer.name.trim().is_empty() {
            missing.push(MissingField::BuyerName);
        }
        if self.buyer.address.trim().is_empty() {
            missing.push(MissingField::BillingAddress);
        }
        if self.shipping_address.trim().is_empty() {
            missing.push(MissingField::ShippingAddress);
        }
        for (idx, line) in self.line_items.iter().enumerate() {
            if line.description().trim().is_empty() {
                missing.push(MissingField::LineDescription(idx + 1));
            }
        }
        missing
    }

    fn edit_line(&self, index: usize, field: &LineItemField) -> DomainResult<Self> {
        let mut next = self.clone();
        let line = next
            .line_items
            .get_mut(index)
            .ok_or_else(DomainError::not_found)?;

        match field {
            LineItemField::Description(text) => line.set_description(text.as_str()),
            LineItemField::HsnCode(text) => line.set_hsn_code(text.as_str()),
            LineItemField::Unit(text) => line.set_unit(text.as_str()),
            LineItemField::Quantity(text) => line.set_quantity(coerce_amount(text)?)?,
            LineItemField::Rate(text) => line.set_rate(coerce_amount(text)?)?,
        }

        // Each line is finite on its own; their sum and the tax on it must be too.
        if !next.totals().grand_total.is_finite() {
            return Err(DomainError::validation("invoice total is too large"));
        }
        Ok(next)
    }

    fn remove_line(&self, index: usize) -> DomainResult<Self> {
        if index >= self.line_items.len() {
            return Err(DomainError::not_found());
        }
        let mut next = self.clone();
        if next.line_items.len() > 1 {
            next.line_items.remove(index);
        }
        Ok(next)
    }
}

impl Reducer for InvoiceDraft {
    type Action = DraftAction;
    type Error = DomainError;

    fn reduce(&self, action: &Self::Action) -> Result<Self, Self::Error> {
        match action {
            DraftAction::RemoveLineItem(index) => return self.remove_line(*index),
            DraftAction::UpdateLineItem { index, field } => return self.edit_line(*index, field),
            _ => {}
        }

        let mut next = self.clone();
        match action {
            DraftAction::SetInvoiceNo(text) => next.invoice_no = text.clone(),
            DraftAction::SetInvoiceDate(text) => {
                next.invoice_date = parse_date("invoice date", text)?;
            }
            DraftAction::SetPoNo(text) => next.po_no = text.clone(),
            DraftAction::SetPoDate(text) => next.po_date = parse_date("PO date", text)?,
            DraftAction::SetBuyerName(text) => next.buyer.name = text.clone(),
            DraftAction::SetBuyerAddress(text) => next.buyer.address = text.clone(),
            DraftAction::SetBuyerGstin(text) => next.buyer.gstin = text.to_uppercase(),
            DraftAction::SelectBuyer(record) => {
                next.buyer = BuyerRecord {
                    gstin: record.gstin.to_uppercase(),
                    ..record.clone()
                };
            }
            DraftAction::SetShippingAddress(text) => next.shipping_address = text.clone(),
            DraftAction::SetTransporterName(text) => {
                next.transport.transporter_name = text.clone();
            }
            DraftAction::SetTransporterId(text) => next.transport.transporter_id = text.clone(),
            DraftAction::SetVehicleNo(text) => next.transport.vehicle_no = text.clone(),
            DraftAction::AddLineItem => next.line_items.push(LineItem::default()),
            DraftAction::SelectTaxRegime(regime) => next.tax_regime = *regime,
            DraftAction::RemoveLineItem(_) | DraftAction::UpdateLineItem { .. } => {}
        }
        Ok(next)
    }
}
