//! Contact form: validation, submission status and delivery endpoints

mod endpoint;
mod form;

pub use endpoint::{create_endpoint, ContactEndpoint, HttpEndpoint, SimulatedEndpoint};
pub use form::{
    ContactField, ContactForm, ContactMessage, FieldErrors, SubmitStatus, MIN_MESSAGE_CHARS,
};
