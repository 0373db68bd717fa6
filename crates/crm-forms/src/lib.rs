//! # crm-forms
//!
//! Stateful side of the CRM validation layer. Each screen builds a [`Form`]
//! out of [`FieldBinding`]s; a binding owns one field's value and error and
//! runs its rules on change, blur and submit. Submitting hands the assembled
//! values to an external API call through a cancellable [`PendingSubmit`].
//!
//! ```rust,ignore
//! use crm_forms::{presets, ApiError};
//!
//! let mut form = presets::login_form();
//! form.change("email", "admin@company.com");
//! form.change("password", "secret1");
//!
//! let session = form
//!     .submit(|values| async move { api.login(values).await })
//!     .await?;
//! ```

pub mod config;
pub mod error_state;
pub mod feedback;
pub mod field;
pub mod form;
pub mod invoice;
pub mod presets;

pub use config::{FormsConfig, InvoiceConfig, TaskConfig};
pub use error_state::FormErrorState;
pub use feedback::{ApiError, ErrorTranslator};
pub use field::{ChangeOutcome, ChangePolicy, FieldBinding, FieldState};
pub use form::{Form, FormValues, PendingSubmit, Settled, SubmitError, SubmitOutcome};
pub use invoice::{InvoiceDraft, InvoiceError, InvoicePayload, LineItem, PayloadPolicy, Totals};

// Re-export the engine so screens only need one dependency
pub use crm_validation_core as validation;
