//! Detection form editing and submission bookkeeping

use taxguard_core::{FormField, FormRecord, ModelType};
use tokio::sync::watch;

/// Identifies one submit attempt so late completions can be discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request in flight.
///
/// Dropping this value drops the cancel sender, which the request task
/// observes and aborts on.
#[derive(Debug)]
struct PendingSubmission {
    id: SubmissionId,
    cancel: watch::Sender<bool>,
}

impl PendingSubmission {
    fn cancel(self) {
        let _ = self.cancel.send(true);
    }
}

/// Row that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Model,
    Submit,
}

impl FormFocus {
    /// All focusable rows, top to bottom
    pub fn rows() -> impl Iterator<Item = FormFocus> {
        FormField::ALL
            .into_iter()
            .map(FormFocus::Field)
            .chain([FormFocus::Model, FormFocus::Submit])
    }

    fn index(self) -> usize {
        Self::rows().position(|r| r == self).unwrap_or(0)
    }

    fn count() -> usize {
        FormField::ALL.len() + 2
    }

    fn at(index: usize) -> Self {
        Self::rows().nth(index).unwrap_or(FormFocus::Submit)
    }
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FormField::IncomeDeclared)
    }
}

/// Why a submit attempt did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already outstanding
    InFlight,
    /// The named entry is empty
    Missing(&'static str),
}

/// State of the detection screen
#[derive(Debug, Default)]
pub struct DetectionForm {
    pub record: FormRecord,
    pub focus: FormFocus,
    /// Inline validation hint, cleared on the next edit
    pub hint: Option<String>,
    pending: Option<PendingSubmission>,
}

impl DetectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = FormFocus::at((self.focus.index() + 1) % FormFocus::count());
    }

    pub fn focus_prev(&mut self) {
        let count = FormFocus::count();
        self.focus = FormFocus::at((self.focus.index() + count - 1) % count);
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_loading() {
            return;
        }
        if let FormFocus::Field(field) = self.focus {
            let mut value = self.record.get(field).to_string();
            value.push(c);
            self.record.update_field(field, value);
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.is_loading() {
            return;
        }
        if let FormFocus::Field(field) = self.focus {
            let mut value = self.record.get(field).to_string();
            value.pop();
            self.record.update_field(field, value);
            self.hint = None;
        }
    }

    pub fn clear_field(&mut self) {
        if self.is_loading() {
            return;
        }
        if let FormFocus::Field(field) = self.focus {
            self.record.update_field(field, "");
            self.hint = None;
        }
    }

    /// Step the model selector. The first step from "unselected" picks the
    /// first (or last) model.
    pub fn cycle_model(&mut self, forward: bool) {
        if self.is_loading() {
            return;
        }
        let model = match (self.record.model_type, forward) {
            (Some(m), true) => m.next(),
            (Some(m), false) => m.prev(),
            (None, true) => ModelType::ALL[0],
            (None, false) => ModelType::ALL[ModelType::ALL.len() - 1],
        };
        self.record.select_model(model);
        self.hint = None;
    }

    /// Start a submission if the form is complete and idle.
    ///
    /// Returns a snapshot of the record plus the receiver the request task
    /// watches for cancellation.
    pub fn begin_submit(
        &mut self,
        id: SubmissionId,
    ) -> Result<(FormRecord, ModelType, watch::Receiver<bool>), SubmitBlocked> {
        if self.is_loading() {
            return Err(SubmitBlocked::InFlight);
        }

        let model = match (self.record.first_missing(), self.record.model_type) {
            (Some(label), _) => {
                self.hint = Some(format!("{label} is required"));
                return Err(SubmitBlocked::Missing(label));
            }
            (None, Some(model)) => model,
            (None, None) => {
                // first_missing covers an unset model
                return Err(SubmitBlocked::Missing(taxguard_core::MODEL_LABEL));
            }
        };

        let (cancel, cancel_rx) = watch::channel(false);
        self.pending = Some(PendingSubmission { id, cancel });
        self.hint = None;
        Ok((self.record.clone(), model, cancel_rx))
    }

    /// Abort the outstanding request, if any
    pub fn cancel_pending(&mut self) -> Option<SubmissionId> {
        let pending = self.pending.take()?;
        let id = pending.id;
        pending.cancel();
        Some(id)
    }

    /// Clear the pending slot if `id` is the outstanding request.
    ///
    /// Returns false for stale or unknown ids.
    pub fn finish(&mut self, id: SubmissionId) -> bool {
        match &self.pending {
            Some(p) if p.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
