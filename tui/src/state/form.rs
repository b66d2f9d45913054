use estimator::{
    EstimateError, Estimator, Field, PredictionResult, RawInput, validation::BEDROOM_OPTIONS,
};
use log::debug;

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet.
    Pending,
    /// The last submission failed validation.
    Invalid(Vec<String>),
    /// The last submission produced a price.
    Estimated(PredictionResult),
    /// The model could not produce a usable price.
    Failed(String),
}

/// The property form: what has been typed, which field has focus and the
/// outcome of the last submission.
#[derive(Debug, Clone)]
pub struct FormState {
    input: RawInput,
    focus: Field,
    outcome: Outcome,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            input: RawInput::default(),
            focus: Field::BedroomCount,
            outcome: Outcome::Pending,
        }
    }

    pub fn input(&self) -> &RawInput {
        &self.input
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let i = self.focus_index();
        self.focus = Field::ALL[(i + 1) % Field::ALL.len()];
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let i = self.focus_index();
        self.focus = Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    /// Steps the bedroom selection up. An empty selection starts at the lowest option.
    pub fn select_next(&mut self) {
        if !self.focus.is_selection() {
            return;
        }
        let next = match self.input.bedroom_count {
            None => *BEDROOM_OPTIONS.start(),
            Some(n) => (n + 1).min(*BEDROOM_OPTIONS.end()),
        };
        self.input.bedroom_count = Some(next);
    }

    /// Steps the bedroom selection down. Going below the lowest option clears it.
    pub fn select_prev(&mut self) {
        if !self.focus.is_selection() {
            return;
        }
        self.input.bedroom_count = match self.input.bedroom_count {
            Some(n) if n > *BEDROOM_OPTIONS.start() => Some(n - 1),
            _ => None,
        };
    }

    /// Types a character into the focused text field.
    pub fn push(&mut self, c: char) {
        if let Some(text) = self.input.text_mut(self.focus) {
            text.push(c);
        }
    }

    /// Deletes the last character of the focused field, or clears the selection.
    pub fn backspace(&mut self) {
        match self.input.text_mut(self.focus) {
            Some(text) => {
                text.pop();
            }
            None => self.input.bedroom_count = None,
        }
    }

    /// Submits the form.
    ///
    /// # Returns
    /// The new outcome.
    pub fn submit(&mut self, estimator: &Estimator) -> &Outcome {
        self.outcome = match estimator.estimate(&self.input) {
            Ok(price) => Outcome::Estimated(price),
            Err(EstimateError::Invalid(errors)) => {
                debug!("submission rejected with {} message(s)", errors.messages().len());
                Outcome::Invalid(errors.into_messages())
            }
            Err(EstimateError::Predict(e)) => Outcome::Failed(e.to_string()),
        };
        &self.outcome
    }

    fn focus_index(&self) -> usize {
        Field::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or_default()
    }
}
