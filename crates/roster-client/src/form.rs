//! Create/edit form controller.
//!
//! Tracks raw values, touched fields, and inline errors. A field is
//! validated on blur and, once touched, on every change. Submission
//! validates the whole form and only reaches the gateway when every rule
//! passes.

use std::collections::BTreeSet;
use std::future::Future;

use tracing::{info, warn};

use crate::api::UsersGateway;
use crate::record::{FieldName, UserRecord};
use crate::schema::descriptor;
use crate::validation::{FormValues, ValidationErrors, validate, validate_field};

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit issues a create.
    Create,
    /// Submit updates the record with this id.
    Edit(u64),
}

impl FormMode {
    /// Form heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Create => "Add New User",
            Self::Edit(_) => "Edit User",
        }
    }
}

/// Result of [`UserForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; see [`UserForm::errors`].
    Invalid,
    /// The service accepted the request. `None` when an edited record no
    /// longer exists.
    Saved(Option<UserRecord>),
    /// The request failed; the message is suitable for an alert.
    Failed(String),
}

/// State of one create or edit form.
#[derive(Debug, Clone)]
pub struct UserForm {
    mode: FormMode,
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: ValidationErrors,
}

impl UserForm {
    /// Blank form for a new record.
    #[must_use]
    pub fn create() -> Self {
        Self::with_values(FormMode::Create, FormValues::new())
    }

    /// Form prefilled from `record`.
    #[must_use]
    pub fn edit(record: &UserRecord) -> Self {
        Self::with_values(FormMode::Edit(record.id), FormValues::from_record(record))
    }

    fn with_values(mode: FormMode, values: FormValues) -> Self {
        Self {
            mode,
            values,
            touched: BTreeSet::new(),
            errors: ValidationErrors::default(),
        }
    }

    /// Create or edit.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current raw value of `field`.
    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    /// Whether `field` has lost focus at least once.
    #[must_use]
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Inline error for `field`.
    #[must_use]
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// All inline errors.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Record new input for `field`, revalidating it once touched.
    ///
    /// Input passes through the field's [`crate::InputKind::mask`] first.
    pub fn change(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        let masked = match descriptor(field) {
            Some(descriptor) => descriptor.kind.mask(&value),
            None => value,
        };
        self.values.set(field, masked);
        if self.is_touched(field) {
            self.validate_one(field);
        }
    }

    /// Mark `field` as touched and validate it.
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.validate_one(field);
    }

    fn validate_one(&mut self, field: FieldName) {
        if let Some(descriptor) = descriptor(field) {
            let outcome = validate_field(descriptor, self.values.get(field)).map(|_| ());
            self.errors.record(field, outcome);
        }
    }

    /// Validate and send the form.
    ///
    /// On success `on_saved` runs before returning, so the caller's list is
    /// reloaded from the service. Nothing is sent while any field is invalid.
    pub async fn submit<G, F, Fut>(&mut self, gateway: &G, on_saved: F) -> SubmitOutcome
    where
        G: UsersGateway + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.touched.extend(FieldName::ALL);
        let input = match validate(&self.values) {
            Ok(input) => input,
            Err(errors) => {
                info!(invalid_fields = errors.len(), "user form rejected");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors = ValidationErrors::default();

        let saved = match self.mode {
            FormMode::Create => gateway.create_user(&input).await.map(Some),
            FormMode::Edit(id) => gateway.update_user(id, &input).await,
        };
        match saved {
            Ok(record) => {
                on_saved().await;
                SubmitOutcome::Saved(record)
            }
            Err(err) => {
                warn!(error = %err, mode = ?self.mode, "saving user failed");
                SubmitOutcome::Failed(format!("Error saving user: {err}"))
            }
        }
    }
}
