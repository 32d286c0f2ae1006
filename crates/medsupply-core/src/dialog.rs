//! Add and edit form state.
//!
//! Each dialog owns a [`SupplyForm`] and commits through a borrowed
//! [`SupplyStore`]. A rejected submission leaves the dialog open with the
//! typed values intact and the failing fields flagged.

use thiserror::Error;
use tracing::warn;

use medsupply_model::{SupplyError, SupplyField, SupplyId, SupplyItem};
use medsupply_validate::{FormErrors, SupplyForm};

use crate::store::SupplyStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid supply form: {0}")]
    Invalid(#[from] FormErrors),
    #[error(transparent)]
    Store(#[from] SupplyError),
    #[error("no supply item is being edited")]
    NothingToEdit,
}

/// State of the "add new supply" form.
#[derive(Debug, Clone, Default)]
pub struct AddSupplyDialog {
    open: bool,
    form: SupplyForm,
    errors: Option<FormErrors>,
}

impl AddSupplyDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting. Typed values are kept for the next open.
    pub fn cancel(&mut self) {
        self.open = false;
        self.errors = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &SupplyForm {
        &self.form
    }

    pub fn set_field(&mut self, field: SupplyField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Replace the whole form, as when values arrive in one batch.
    pub fn fill(&mut self, form: SupplyForm) {
        self.form = form;
    }

    /// Failures from the last rejected submission.
    pub fn errors(&self) -> Option<&FormErrors> {
        self.errors.as_ref()
    }

    /// Validate and add to `store`. On success the form is cleared and the
    /// dialog closes.
    ///
    /// # Errors
    ///
    /// `Invalid` when any field fails validation; nothing is added.
    pub fn submit(&mut self, store: &mut SupplyStore) -> Result<SupplyItem, SubmitError> {
        let input = match self.form.validate() {
            Ok(input) => input,
            Err(errors) => {
                warn!(fields = ?errors.fields(), "add supply rejected");
                self.errors = Some(errors.clone());
                return Err(errors.into());
            }
        };
        let item = store.add(input)?;
        self.form.reset();
        self.errors = None;
        self.open = false;
        Ok(item)
    }
}

/// State of the "edit supply" form.
#[derive(Debug, Clone, Default)]
pub struct EditSupplyDialog {
    target: Option<SupplyId>,
    open: bool,
    form: SupplyForm,
    errors: Option<FormErrors>,
}

impl EditSupplyDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog for `item`, seeding every field from it.
    ///
    /// Opening a different item while one is displayed re-seeds the form.
    pub fn open(&mut self, item: &SupplyItem) {
        self.target = Some(item.id);
        self.form = SupplyForm::from_item(item);
        self.errors = None;
        self.open = true;
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.errors = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the item the form was seeded from.
    pub fn target(&self) -> Option<SupplyId> {
        self.target
    }

    pub fn form(&self) -> &SupplyForm {
        &self.form
    }

    pub fn set_field(&mut self, field: SupplyField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        self.errors.as_ref()
    }

    /// Validate and replace the target item in `store`. On success the
    /// dialog closes; the form keeps its values.
    ///
    /// # Errors
    ///
    /// `NothingToEdit` before any item was opened, `Invalid` for field
    /// failures, and `Store(NotFound)` when the item has since been deleted.
    pub fn submit(&mut self, store: &mut SupplyStore) -> Result<SupplyItem, SubmitError> {
        let id = self.target.ok_or(SubmitError::NothingToEdit)?;
        let input = match self.form.validate() {
            Ok(input) => input,
            Err(errors) => {
                warn!(id = %id, fields = ?errors.fields(), "edit supply rejected");
                self.errors = Some(errors.clone());
                return Err(errors.into());
            }
        };
        let item = store.update(id, input)?;
        self.errors = None;
        self.open = false;
        Ok(item)
    }
}
