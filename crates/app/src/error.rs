use gstinvoice_core::DomainError;
use gstinvoice_invoicing::MissingField;
use gstinvoice_parties::RepositoryError;
use gstinvoice_render::RenderError;

/// Application-level error returned by [`crate::Session`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("required fields missing: {}", join_fields(.0))]
    MissingFields(Vec<MissingField>),
    #[error("invoice has not been submitted for preview")]
    NotInPreview,
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
