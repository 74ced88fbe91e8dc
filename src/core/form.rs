//! Entry form state: `Editing` until a valid submit commits and resets it.

use crate::core::services::Submission;
use crate::core::tracker::Tracker;
use crate::domain::{Category, TransactionInput, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Committed,
}

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    input: TransactionInput,
    state: FormState,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.input.description = description.into();
    }

    pub fn set_amount_text(&mut self, amount_text: impl Into<String>) {
        self.input.amount_text = amount_text.into();
    }

    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.input.kind = kind;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.input.category_id = category.map(|c| c.id().to_string());
    }

    /// Submits the current fields. A committed submission clears the form;
    /// a rejected one leaves every field as typed.
    pub fn submit(&mut self, tracker: &mut Tracker) -> Submission {
        let submission = tracker.submit_transaction(&self.input);
        if submission.is_committed() {
            self.reset();
            self.state = FormState::Committed;
        } else {
            self.state = FormState::Editing;
        }
        submission
    }

    /// Opens the form again after a commit.
    pub fn reopen(&mut self) {
        self.state = FormState::Editing;
    }

    /// Restores the default fields (empty text, expense, no category).
    pub fn reset(&mut self) {
        self.input = TransactionInput::default();
        self.state = FormState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn invalid_submit_stays_editing_with_fields_intact() {
        let mut tracker = Tracker::default();
        let mut form = EntryForm::new();
        form.set_description("Lunch");
        form.set_amount_text("abc");

        let submission = form.submit(&mut tracker);
        assert_eq!(
            submission.error(),
            Some(&ValidationError::InvalidAmount("abc".into()))
        );
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.input().description, "Lunch");
        assert_eq!(form.input().amount_text, "abc");
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn valid_submit_commits_and_resets() {
        let mut tracker = Tracker::default();
        let mut form = EntryForm::new();
        form.set_description("Salary");
        form.set_amount_text("3000");
        form.set_kind(TransactionKind::Income);

        let submission = form.submit(&mut tracker);
        assert!(submission.is_committed());
        assert_eq!(form.state(), FormState::Committed);
        assert_eq!(form.input(), &TransactionInput::default());
        assert_eq!(tracker.store().len(), 1);

        form.reopen();
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn reset_restores_default_fields() {
        let mut form = EntryForm::new();
        form.set_description("Cinema");
        form.set_amount_text("14");
        form.set_kind(TransactionKind::Income);
        form.set_category(Some(Category::Entertainment));

        form.reset();
        assert_eq!(form.input(), &TransactionInput::default());
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn category_selection_is_carried_into_record() {
        let mut tracker = Tracker::default();
        let mut form = EntryForm::new();
        form.set_description("Bus");
        form.set_amount_text("2.5");
        form.set_category(Some(Category::Transport));

        let submission = form.submit(&mut tracker);
        let record = submission.record().expect("committed");
        assert_eq!(record.category, Some(Category::Transport));
    }
}
