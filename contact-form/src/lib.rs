pub mod app;
pub mod error;
pub mod form;
pub mod validation;
pub mod view;

pub use app::ContactApp;
pub use error::AppError;
pub use form::{Field, FieldPhase, FormState, Submission};
