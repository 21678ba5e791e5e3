//! Invoice generator application: configuration, the edit/preview session,
//! and the JSON form the command line feeds into it.

pub mod config;
pub mod error;
pub mod form;
pub mod session;

pub use config::AppConfig;
pub use error::AppError;
pub use form::{FormValue, InvoiceForm, ProductEntry};
pub use session::{Page, Session};
