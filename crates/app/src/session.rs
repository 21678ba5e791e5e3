//! Edit/preview session around one invoice draft.

use gstinvoice_core::Reducer;
use gstinvoice_invoicing::{DraftAction, InvoiceDraft, InvoiceTotals};
use gstinvoice_parties::{BuyerDirectory, BuyerRepository};
use gstinvoice_render::{InvoiceDocument, Renderer, SellerProfile};

use crate::error::AppError;
use crate::form::InvoiceForm;

/// Which view of the invoice is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Edit,
    Preview,
}

/// A single invoice being edited, previewed and printed.
///
/// The buyer directory is read once on open and written back on every
/// successful submit.
#[derive(Debug)]
pub struct Session<R: BuyerRepository> {
    repository: R,
    directory: BuyerDirectory,
    seller: SellerProfile,
    draft: InvoiceDraft,
    page: Page,
}

impl<R: BuyerRepository> Session<R> {
    pub fn open(repository: R, seller: SellerProfile) -> Result<Self, AppError> {
        let directory = BuyerDirectory::new(repository.load()?);
        tracing::info!(buyers = directory.len(), "invoice session opened");

        Ok(Self {
            repository,
            directory,
            seller,
            draft: InvoiceDraft::new(),
            page: Page::Edit,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn directory(&self) -> &BuyerDirectory {
        &self.directory
    }

    pub fn seller(&self) -> &SellerProfile {
        &self.seller
    }

    /// Apply one edit. A rejected action leaves the draft untouched.
    ///
    /// Typing a name that exactly matches a known buyer fills in its address
    /// and GSTIN.
    pub fn dispatch(&mut self, action: DraftAction) -> Result<(), AppError> {
        let mut next = self.draft.reduce(&action).inspect_err(|err| {
            tracing::warn!(?action, error = %err, "draft action rejected");
        })?;

        if let DraftAction::SetBuyerName(name) = &action
            && let Some(known) = self.directory.find(name)
        {
            tracing::debug!(buyer = %known.name, "autocompleted known buyer");
            next = next.reduce(&DraftAction::SelectBuyer(known.clone()))?;
        }

        self.draft = next;
        Ok(())
    }

    /// Replay a whole form into the draft, stopping at the first rejection.
    pub fn fill(&mut self, form: &InvoiceForm) -> Result<(), AppError> {
        for action in form.actions() {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Known buyer names matching `query`.
    pub fn buyer_suggestions(&self, query: &str) -> Vec<&str> {
        self.directory.suggestions(query)
    }

    /// Live totals of the current draft.
    pub fn totals(&self) -> InvoiceTotals {
        self.draft.totals()
    }

    /// Validate required fields, remember the buyer and switch to preview.
    pub fn submit(&mut self) -> Result<InvoiceDocument, AppError> {
        let missing = self.draft.check_required();
        if !missing.is_empty() {
            tracing::warn!(missing = missing.len(), "invoice submit blocked");
            return Err(AppError::MissingFields(missing));
        }

        let document = InvoiceDocument::build(&self.draft, &self.seller)?;

        if self.directory.remember(self.draft.buyer()) {
            tracing::info!(buyer = %self.draft.buyer().name, "new buyer remembered");
        }
        self.repository.save(self.directory.records())?;

        self.page = Page::Preview;
        tracing::info!(
            title = %document.document_title,
            lines = document.rows.len(),
            "invoice submitted"
        );
        Ok(document)
    }

    /// Return to editing with every field intact.
    pub fn back_to_edit(&mut self) {
        self.page = Page::Edit;
    }

    /// Document of the submitted invoice.
    pub fn preview(&self) -> Result<InvoiceDocument, AppError> {
        if self.page != Page::Preview {
            return Err(AppError::NotInPreview);
        }
        Ok(InvoiceDocument::build(&self.draft, &self.seller)?)
    }

    /// Print the previewed invoice with `renderer`.
    pub fn render<T>(&self, renderer: &T) -> Result<String, AppError>
    where
        T: Renderer + ?Sized,
    {
        let document = self.preview()?;
        Ok(renderer.render(&document)?)
    }
}
