//! Printable HTML layout.

use askama::Template;

use crate::document::InvoiceDocument;
use crate::{RenderError, Renderer};

/// Page template; askama escapes every interpolated value.
#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoicePage<'a> {
    doc: &'a InvoiceDocument,
    /// Address lines, joined with `<br />` in the page.
    billing_lines: Vec<&'a str>,
    shipping_lines: Vec<&'a str>,
}

impl<'a> InvoicePage<'a> {
    fn new(doc: &'a InvoiceDocument) -> Self {
        Self {
            doc,
            billing_lines: doc.buyer.billing_address.lines().collect(),
            shipping_lines: doc.buyer.shipping_address.lines().collect(),
        }
    }
}

/// Standalone HTML page mirroring the on-screen preview, ready to print.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &InvoiceDocument) -> Result<String, RenderError> {
        let out = InvoicePage::new(document).render()?;
        tracing::debug!(
            title = %document.document_title,
            bytes = out.len(),
            "rendered html invoice"
        );
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
