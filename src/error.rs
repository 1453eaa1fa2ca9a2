use thiserror::Error;

/// Reasons the application could not be attached to the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no element with id `{id}` found in the document")]
    MissingRoot { id: String },
    #[error("element `{id}` is not an HTML element")]
    NotHtmlElement { id: String },
}
