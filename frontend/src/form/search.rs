//! Receipt search form.

use chrono::NaiveDate;

use super::{format_long_date, Diagnostic, Effect, FormPhase, ReceiptFields};
use crate::{FormAction, Notification, ReceiptQuery};

/// State of the search form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    fields: ReceiptFields,
    phase: FormPhase,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipt_id(&self) -> &str {
        &self.fields.receipt_id
    }

    pub fn transaction_date(&self) -> Option<NaiveDate> {
        self.fields.transaction_date
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Replace the identifier. Validation waits until submit.
    pub fn set_receipt_id(&mut self, receipt_id: impl Into<String>) {
        self.fields.receipt_id = receipt_id.into();
        self.phase = FormPhase::Editing;
    }

    pub fn set_transaction_date(&mut self, date: Option<NaiveDate>) {
        self.fields.transaction_date = date;
        self.phase = FormPhase::Editing;
    }

    /// Validate and announce the search. No request is sent.
    pub fn submit_search(&mut self) -> Vec<Effect> {
        let date = match self.fields.validate() {
            Ok(date) => date,
            Err(e) => {
                log::debug!("Search rejected: {}", e);
                self.phase = FormPhase::ValidationFailed;
                return vec![Effect::Notify(e.to_notification(FormAction::Search))];
            }
        };

        self.phase = FormPhase::Submitted;
        let query = ReceiptQuery {
            receipt_id: self.fields.receipt_id.clone(),
            transaction_date: date,
        };

        vec![
            Effect::Notify(Notification::info(
                "Search Initiated",
                format!(
                    "Searching for receipt {} from {}",
                    query.receipt_id,
                    format_long_date(date)
                ),
            )),
            Effect::Record(Diagnostic::Search(query)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn titles(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(n) => Some(n.title.as_str()),
                Effect::Record(_) => None,
            })
            .collect()
    }

    fn has_record(effects: &[Effect]) -> bool {
        effects.iter().any(|e| matches!(e, Effect::Record(_)))
    }

    #[test]
    fn test_blank_id_rejected_regardless_of_date() {
        for date in [None, Some(jan_15())] {
            for id in ["", "   ", "\t\n"] {
                let mut form = SearchForm::new();
                form.set_receipt_id(id);
                form.set_transaction_date(date);

                let effects = form.submit_search();
                assert_eq!(titles(&effects), vec!["Receipt ID Required"]);
                assert!(!has_record(&effects));
                assert_eq!(form.phase(), FormPhase::ValidationFailed);
            }
        }
    }

    #[test]
    fn test_missing_date_rejected() {
        let mut form = SearchForm::new();
        form.set_receipt_id("RCP-12345");

        let effects = form.submit_search();
        assert_eq!(titles(&effects), vec!["Date Required"]);
        match &effects[0] {
            Effect::Notify(n) => {
                assert_eq!(n.severity, Severity::Destructive);
                assert_eq!(n.description, "Please select a date to search.");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_valid_search_notifies_and_records() {
        let mut form = SearchForm::new();
        form.set_receipt_id("RCP-12345");
        form.set_transaction_date(Some(jan_15()));

        let effects = form.submit_search();
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::Notify(Notification::info(
                "Search Initiated",
                "Searching for receipt RCP-12345 from January 15th, 2024"
            ))
        );
        assert_eq!(
            effects[1],
            Effect::Record(Diagnostic::Search(ReceiptQuery {
                receipt_id: "RCP-12345".to_string(),
                transaction_date: jan_15(),
            }))
        );
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_failed_submit_keeps_state() {
        let mut form = SearchForm::new();
        form.set_transaction_date(Some(jan_15()));
        let before = form.clone();

        form.submit_search();
        assert_eq!(form.receipt_id(), before.receipt_id());
        assert_eq!(form.transaction_date(), before.transaction_date());
    }

    #[test]
    fn test_phase_transitions() {
        let mut form = SearchForm::new();
        assert_eq!(form.phase(), FormPhase::Empty);

        form.submit_search();
        assert_eq!(form.phase(), FormPhase::ValidationFailed);

        form.set_receipt_id("RCP-1");
        assert_eq!(form.phase(), FormPhase::Editing);

        form.set_transaction_date(Some(jan_15()));
        form.submit_search();
        assert_eq!(form.phase(), FormPhase::Submitted);

        // Submitted is not terminal
        let effects = form.submit_search();
        assert_eq!(titles(&effects), vec!["Search Initiated"]);
        form.set_receipt_id("RCP-2");
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
