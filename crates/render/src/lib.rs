//! Printable invoice output.
//!
//! [`InvoiceDocument`] holds every display string of the preview, computed
//! once from a draft; [`Renderer`] implementations only lay it out. The HTML
//! page is an askama template under `templates/`.

pub mod document;
pub mod html;
pub mod seller;
pub mod text;

pub use document::{BuyerBlock, DocumentRow, InvoiceDocument, InvoiceMeta, SummaryRow};
pub use html::HtmlRenderer;
pub use seller::{BankDetails, SellerProfile};
pub use text::TextRenderer;

/// Failure while laying out a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invoice template failed: {0}")]
    Template(#[from] askama::Error),
    #[error("invoice layout failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Lays out an already-computed invoice document.
pub trait Renderer {
    /// Render `document` into the target format.
    fn render(&self, document: &InvoiceDocument) -> Result<String, RenderError>;

    /// File extension for the rendered output.
    fn extension(&self) -> &'static str;
}
