use tracing::{debug, info, warn};

use crate::batch::{Score, ScoreBatch, Subject, parse_count, split_tokens};
use crate::config::{BestScope, FormConfig, Mode, defaults};
use crate::error::{Error, PersistenceWarning, Result};
use crate::export::format_submission;
use crate::grade::grade;
use crate::storage::{GradeLog, RecordSink};

use super::{FormEvent, FormState, GradeRecord, Presenter, ScoreSlot, Submission};

/// Drives one grading session.
///
/// Holds the text the user has entered, the materialized score slots and
/// every record graded since the last reset. Rendering goes through the
/// [`Presenter`] passed to each operation.
pub struct FormController {
    config: FormConfig,
    state: FormState,
    name: String,
    count_text: String,
    raw_scores: String,
    slots: Vec<ScoreSlot>,
    records: Vec<GradeRecord>,
    sink: Option<Box<dyn RecordSink>>,
}

impl FormController {
    /// Create a controller, attaching a [`GradeLog`] if the config names one.
    pub fn new(config: FormConfig) -> Self {
        let sink = config
            .log_path
            .as_ref()
            .map(|path| Box::new(GradeLog::new(path)) as Box<dyn RecordSink>);
        Self::with_sink(config, sink)
    }

    pub fn with_sink(config: FormConfig, sink: Option<Box<dyn RecordSink>>) -> Self {
        Self {
            config,
            state: FormState::Idle,
            name: String::new(),
            count_text: String::new(),
            raw_scores: String::new(),
            slots: Vec::new(),
            records: Vec::new(),
            sink,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    pub fn raw_scores(&self) -> &str {
        &self.raw_scores
    }

    pub fn slots(&self) -> &[ScoreSlot] {
        &self.slots
    }

    pub fn records(&self) -> &[GradeRecord] {
        &self.records
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_count_text(&mut self, text: &str) {
        self.count_text = text.to_string();
    }

    pub fn set_raw_scores(&mut self, text: &str) {
        self.raw_scores = text.to_string();
    }

    /// Type into one slot (1-based).
    pub fn set_slot_text(&mut self, index: usize, text: &str) -> Result<()> {
        let count = self.slots.len();
        let slot = index
            .checked_sub(1)
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(Error::UnknownSlot { index, count })?;
        slot.text = text.trim().to_string();
        Ok(())
    }

    /// Enter several scores at once.
    ///
    /// With slots, the tokens fill them in order and must match their
    /// number. Without slots the class form keeps the text for a raw submit.
    pub fn enter_scores(&mut self, text: &str) -> Result<()> {
        if self.slots.is_empty() {
            return match self.config.mode {
                Mode::Class => {
                    self.raw_scores = text.to_string();
                    Ok(())
                }
                Mode::Student => Err(Error::NotConfigured),
            };
        }

        let tokens = split_tokens(text);
        if tokens.len() != self.slots.len() {
            return Err(Error::Cardinality {
                expected: self.slots.len(),
                actual: tokens.len(),
            });
        }
        for (slot, token) in self.slots.iter_mut().zip(tokens) {
            slot.text = token.to_string();
        }
        Ok(())
    }

    /// Replace the score slots with `count_text` new empty ones.
    ///
    /// On a bad count nothing changes and the error is reported.
    pub fn configure_fields<P: Presenter + ?Sized>(
        &mut self,
        count_text: &str,
        presenter: &mut P,
    ) -> Result<usize> {
        let count = match parse_count(count_text, self.config.max_scores) {
            Ok(count) => count,
            Err(e) => {
                debug!("Rejected score count {:?}: {}", count_text, e);
                presenter.show_error(&e);
                return Err(e);
            }
        };

        self.count_text = count_text.trim().to_string();
        self.clear_slots(presenter);
        self.slots = (1..=count).map(ScoreSlot::new).collect();
        presenter.materialize_slots(&self.slots);
        self.transition(FormEvent::ConfigureFields);

        debug!("Configured {} score slots", count);
        Ok(count)
    }

    /// Validate the entered scores, grade them and record the result.
    ///
    /// Validation failures leave the form untouched. A failed log append
    /// is reported as a warning; the records stay committed.
    pub fn submit<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<Submission> {
        let event = self.submit_event();
        let graded = match self.state.next(event) {
            Some(_) => self.grade_input(),
            None => Err(Error::NotConfigured),
        };

        let (records, best) = match graded {
            Ok(graded) => graded,
            Err(e) => {
                debug!("Submit rejected in state {}: {}", self.state, e);
                presenter.show_error(&e);
                return Err(e);
            }
        };

        self.records.extend(records.iter().cloned());
        let warning = self.append_to_log(&records);
        self.transition(event);

        info!(
            "Submitted {} record(s), best score {}, session total {}",
            records.len(),
            best,
            self.records.len()
        );

        let submission = Submission {
            records,
            best,
            warning,
        };
        presenter.show_result(&format_submission(self.config.mode, &submission));
        if let Some(warning) = &submission.warning {
            presenter.show_warning(warning);
        }
        Ok(submission)
    }

    /// Clear every input, slot and record and return to `Idle`.
    pub fn reset<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        self.name.clear();
        self.count_text.clear();
        self.raw_scores.clear();
        self.clear_slots(presenter);
        self.records.clear();
        presenter.show_result(defaults::RESULT_PLACEHOLDER);
        self.transition(FormEvent::Reset);
        debug!("Form reset");
    }

    fn clear_slots<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        self.slots.clear();
        presenter.clear_slots();
    }

    fn submit_event(&self) -> FormEvent {
        let raw = self.slots.is_empty()
            && self.config.mode == Mode::Class
            && !self.raw_scores.trim().is_empty();
        if raw {
            FormEvent::SubmitRaw
        } else {
            FormEvent::Submit
        }
    }

    fn transition(&mut self, event: FormEvent) {
        match self.state.next(event) {
            Some(next) => self.state = next,
            None => warn!(
                "Invalid form transition: {:?} from {}, keeping {}",
                event, self.state, self.state
            ),
        }
    }

    fn grade_input(&self) -> Result<(Vec<GradeRecord>, Score)> {
        match self.config.mode {
            Mode::Student => self.grade_student(),
            Mode::Class => self.grade_class(),
        }
    }

    fn slot_tokens(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.text.as_str()).collect()
    }

    fn grade_student(&self) -> Result<(Vec<GradeRecord>, Score)> {
        let subject = Subject::named(&self.name)?;
        if self.slots.is_empty() {
            return Err(Error::NotConfigured);
        }
        let batch = ScoreBatch::parse(&self.slot_tokens(), self.slots.len())?;

        let best = self.best_of(&batch);
        let average = batch.average();
        let letter = grade(average, i32::from(best.value()));
        let average = (batch.scores().len() > 1).then_some(average);
        let record = GradeRecord::new(subject, batch.scores().to_vec(), average, letter);
        Ok((vec![record], best))
    }

    fn grade_class(&self) -> Result<(Vec<GradeRecord>, Score)> {
        let batch = if self.slots.is_empty() {
            let expected = parse_count(&self.count_text, self.config.max_scores)?;
            ScoreBatch::parse(&split_tokens(&self.raw_scores), expected)?
        } else {
            ScoreBatch::parse(&self.slot_tokens(), self.slots.len())?
        };

        let best = self.best_of(&batch);
        let records = batch
            .scores()
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let against = match self.config.scope() {
                    BestScope::Subject => score,
                    BestScope::Batch | BestScope::Session => best,
                };
                let letter = grade(f64::from(score.value()), i32::from(against.value()));
                GradeRecord::new(Subject::Index(i + 1), vec![score], None, letter)
            })
            .collect();
        Ok((records, best))
    }

    /// Best score of the configured comparison set.
    fn best_of(&self, batch: &ScoreBatch) -> Score {
        let own = batch.best();
        match self.config.scope() {
            BestScope::Subject | BestScope::Batch => own,
            BestScope::Session => self
                .records
                .iter()
                .flat_map(|record| record.scores.iter().copied())
                .fold(own, Score::max),
        }
    }

    fn append_to_log(&mut self, records: &[GradeRecord]) -> Option<PersistenceWarning> {
        let sink = self.sink.as_mut()?;
        for record in records {
            if let Err(e) = sink.append(record) {
                let warning = PersistenceWarning {
                    path: sink.location(),
                    message: e.to_string(),
                };
                warn!("{}", warning);
                return Some(warning);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::form::{PresenterEvent, RecordingPresenter};
    use crate::grade::Letter;

    fn student_form() -> FormController {
        FormController::with_sink(FormConfig::student(), None)
    }

    fn class_form() -> FormController {
        FormController::with_sink(FormConfig::class(), None)
    }

    #[test]
    fn test_configure_fields_replaces_slots() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();

        assert_eq!(form.configure_fields("3", &mut ui).unwrap(), 3);
        assert_eq!(form.configure_fields("5", &mut ui).unwrap(), 5);

        assert_eq!(form.slots().len(), 5);
        assert_eq!(ui.visible_slots(), 5);
        assert_eq!(form.state(), FormState::FieldsConfigured);
        let indices: Vec<usize> = form.slots().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_configure_fields_rejects_bad_count() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();

        assert!(matches!(
            form.configure_fields("11", &mut ui),
            Err(Error::CountRange { count: 11, max: 10 })
        ));
        assert!(matches!(
            form.configure_fields("two", &mut ui),
            Err(Error::Parse { .. })
        ));
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.slots().is_empty());
        assert_eq!(ui.errors(), vec![ErrorKind::Range, ErrorKind::Parse]);
        // Nothing was created or destroyed
        assert!(
            !ui.events
                .iter()
                .any(|e| matches!(e, PresenterEvent::Materialized(_) | PresenterEvent::Cleared))
        );
    }

    #[test]
    fn test_failed_reconfigure_keeps_existing_slots() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.configure_fields("2", &mut ui).unwrap();
        form.set_slot_text(1, "80").unwrap();

        assert!(form.configure_fields("0", &mut ui).is_err());
        assert_eq!(form.slots().len(), 2);
        assert_eq!(form.slots()[0].text, "80");
        assert_eq!(form.state(), FormState::FieldsConfigured);
    }

    #[test]
    fn test_fixed_form_bound() {
        let mut form = FormController::with_sink(FormConfig::fixed_student(), None);
        let mut ui = RecordingPresenter::new();
        assert!(form.configure_fields("4", &mut ui).is_ok());
        assert!(matches!(
            form.configure_fields("5", &mut ui),
            Err(Error::CountRange { count: 5, max: 4 })
        ));
    }

    #[test]
    fn test_submit_student_average() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("  Ada ");
        form.configure_fields("4", &mut ui).unwrap();
        form.enter_scores("70 85 95 60").unwrap();

        let submission = form.submit(&mut ui).unwrap();
        let record = &submission.records[0];
        assert_eq!(submission.best.value(), 95);
        assert_eq!(record.average, Some(77.5));
        assert_eq!(record.letter, Letter::B);
        assert_eq!(record.subject, Subject::Named("Ada".into()));
        assert_eq!(form.state(), FormState::Submitted);
        assert_eq!(form.records().len(), 1);
        assert_eq!(
            ui.last_result(),
            Some("Student: Ada\nScores: [70, 85, 95, 60]\nAverage: 77.50\nFinal Grade: B")
        );
    }

    #[test]
    fn test_submit_requires_name() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("   ");
        form.configure_fields("1", &mut ui).unwrap();
        form.set_slot_text(1, "90").unwrap();

        assert!(matches!(form.submit(&mut ui), Err(Error::Identity)));
        assert!(form.records().is_empty());
        assert_eq!(form.state(), FormState::FieldsConfigured);
    }

    #[test]
    fn test_submit_with_bad_token_keeps_records() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("Ada");
        form.configure_fields("2", &mut ui).unwrap();
        form.enter_scores("90 80").unwrap();
        form.submit(&mut ui).unwrap();

        form.set_slot_text(2, "eighty").unwrap();
        let err = form.submit(&mut ui).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(form.records().len(), 1);
        assert_eq!(ui.errors(), vec![ErrorKind::Parse]);
    }

    #[test]
    fn test_submit_empty_slot_is_parse_error() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("Ada");
        form.configure_fields("2", &mut ui).unwrap();
        form.set_slot_text(1, "90").unwrap();

        assert!(matches!(form.submit(&mut ui), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_submit_out_of_range() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("Ada");
        form.configure_fields("1", &mut ui).unwrap();
        form.set_slot_text(1, "101").unwrap();

        assert!(matches!(form.submit(&mut ui), Err(Error::Range { value: 101 })));
        assert!(form.records().is_empty());
    }

    #[test]
    fn test_submit_from_idle_is_rejected() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("Ada");

        assert!(matches!(form.submit(&mut ui), Err(Error::NotConfigured)));
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn test_enter_scores_cardinality() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.configure_fields("3", &mut ui).unwrap();

        assert!(matches!(
            form.enter_scores("1 2"),
            Err(Error::Cardinality {
                expected: 3,
                actual: 2
            })
        ));
        assert!(form.slots().iter().all(|s| s.text.is_empty()));
    }

    #[test]
    fn test_set_slot_text_unknown_slot() {
        let mut form = student_form();
        let mut ui = RecordingPresenter::new();
        form.configure_fields("2", &mut ui).unwrap();

        assert!(matches!(
            form.set_slot_text(3, "50"),
            Err(Error::UnknownSlot { index: 3, count: 2 })
        ));
        assert!(matches!(
            form.set_slot_text(0, "50"),
            Err(Error::UnknownSlot { index: 0, .. })
        ));
    }

    #[test]
    fn test_class_raw_submit_from_idle() {
        let mut form = class_form();
        let mut ui = RecordingPresenter::new();
        form.set_count_text("3");
        form.enter_scores("90, 70, 50").unwrap();

        let submission = form.submit(&mut ui).unwrap();
        let letters: Vec<Letter> = submission.records.iter().map(|r| r.letter).collect();
        assert_eq!(letters, vec![Letter::A, Letter::B, Letter::D]);
        assert_eq!(submission.best.value(), 90);
        assert!(submission.records.iter().all(|r| r.average.is_none()));
        assert_eq!(form.state(), FormState::Submitted);
    }

    #[test]
    fn test_class_raw_submit_cardinality() {
        let mut form = class_form();
        let mut ui = RecordingPresenter::new();
        form.set_count_text("4");
        form.set_raw_scores("90 70 50");

        assert!(matches!(
            form.submit(&mut ui),
            Err(Error::Cardinality {
                expected: 4,
                actual: 3
            })
        ));
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn test_class_raw_submit_needs_count() {
        let mut form = class_form();
        let mut ui = RecordingPresenter::new();
        form.set_raw_scores("90 70 50");

        assert!(matches!(form.submit(&mut ui), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_class_subject_scope_grades_each_alone() {
        let config = FormConfig {
            best_scope: Some(BestScope::Subject),
            ..FormConfig::class()
        };
        let mut form = FormController::with_sink(config, None);
        let mut ui = RecordingPresenter::new();
        form.configure_fields("3", &mut ui).unwrap();
        form.enter_scores("90 70 10").unwrap();

        let submission = form.submit(&mut ui).unwrap();
        assert!(submission.records.iter().all(|r| r.letter == Letter::A));
    }

    #[test]
    fn test_batch_scope_ignores_earlier_students() {
        let config = FormConfig {
            best_scope: Some(BestScope::Batch),
            ..FormConfig::fixed_student()
        };
        let mut form = FormController::with_sink(config, None);
        let mut ui = RecordingPresenter::new();

        form.set_name("Ada");
        form.configure_fields("1", &mut ui).unwrap();
        form.set_slot_text(1, "100").unwrap();
        form.submit(&mut ui).unwrap();

        form.set_name("Bob");
        form.set_slot_text(1, "75").unwrap();
        let submission = form.submit(&mut ui).unwrap();
        assert_eq!(submission.best.value(), 75);
        assert_eq!(submission.records[0].letter, Letter::A);
    }

    #[test]
    fn test_class_batches_graded_separately() {
        let mut form = class_form();
        let mut ui = RecordingPresenter::new();

        form.configure_fields("3", &mut ui).unwrap();
        form.enter_scores("90 70 50").unwrap();
        form.submit(&mut ui).unwrap();

        form.configure_fields("3", &mut ui).unwrap();
        form.enter_scores("60 50 40").unwrap();
        let submission = form.submit(&mut ui).unwrap();

        assert_eq!(submission.best.value(), 60);
        let letters: Vec<Letter> = submission.records.iter().map(|r| r.letter).collect();
        assert_eq!(letters, vec![Letter::A, Letter::B, Letter::C]);
        assert!(ui.last_result().unwrap().starts_with("Best score: 60\n"));
        assert_eq!(form.records().len(), 6);
    }

    #[test]
    fn test_session_scope_uses_session_records() {
        let config = FormConfig {
            best_scope: Some(BestScope::Session),
            ..FormConfig::fixed_student()
        };
        let mut form = FormController::with_sink(config, None);
        let mut ui = RecordingPresenter::new();

        form.set_name("Ada");
        form.configure_fields("1", &mut ui).unwrap();
        form.set_slot_text(1, "100").unwrap();
        form.submit(&mut ui).unwrap();

        form.set_name("Bob");
        form.set_slot_text(1, "75").unwrap();
        let submission = form.submit(&mut ui).unwrap();
        assert_eq!(submission.best.value(), 100);
        assert_eq!(submission.records[0].letter, Letter::C);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = class_form();
        let mut ui = RecordingPresenter::new();
        form.set_name("ignored");
        form.configure_fields("2", &mut ui).unwrap();
        form.enter_scores("60 40").unwrap();
        form.submit(&mut ui).unwrap();

        form.reset(&mut ui);
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.slots().is_empty());
        assert!(form.records().is_empty());
        assert!(form.name().is_empty());
        assert!(form.count_text().is_empty());
        assert!(form.raw_scores().is_empty());
        assert_eq!(ui.visible_slots(), 0);
        assert_eq!(ui.last_result(), Some("Grades will be displayed here."));
    }
}
