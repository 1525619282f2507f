mod error;
pub mod form;
mod store;
mod submission;
mod types;

pub use error::*;
pub use form::{ContactForm, Reply, SubmitOutcome, Submitter, Toast, ToastVariant};
pub use store::*;
pub use submission::*;
pub use types::*;
