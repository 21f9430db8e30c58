use crate::identity::Identity;
use crate::models::{Dataset, default_volume};
use crate::store::{RecordStore, StoreError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Viewing,
    ConfirmOverwrite,
    Editing,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Viewing => "viewing",
            Phase::ConfirmOverwrite => "confirm_overwrite",
            Phase::Editing => "editing",
        }
    }
}

/// What an edit request resolved to. `NeedsIdentity` means the caller has to
/// run the capture dialog and come back; the session itself does not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    NeedsIdentity,
    ConfirmOverwrite,
    Editing,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please provide your email first.")]
    IdentityRequired,
    #[error("no field at index {index}")]
    UnknownField { index: usize },
    #[error("{event} is not available right now")]
    OutOfPhase { event: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Permissive-input policy for the edit grid: whatever does not parse as an
/// integer becomes 0. Every raw input value goes through here and nowhere
/// else; tightening this into a validation error would change saved data.
pub fn coerce_value(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// The edit flow for the one editable chart.
///
/// `committed` is what the page shows outside of editing, `working` is the
/// draft behind the input grid, and `previous` is the committed series from
/// one save ago. `previous` exists only to gate the overwrite prompt.
#[derive(Debug)]
pub struct EditSession {
    phase: Phase,
    committed: Dataset,
    working: Dataset,
    previous: Option<Dataset>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(default_volume())
    }
}

impl EditSession {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            phase: Phase::Viewing,
            working: dataset.clone(),
            committed: dataset,
            previous: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn committed(&self) -> &Dataset {
        &self.committed
    }

    pub fn working(&self) -> &Dataset {
        &self.working
    }

    pub fn previous(&self) -> Option<&Dataset> {
        self.previous.as_ref()
    }

    /// The series the page should render right now.
    pub fn display(&self) -> &Dataset {
        match self.phase {
            Phase::Editing => &self.working,
            _ => &self.committed,
        }
    }

    /// A record loaded for a freshly captured identity replaces the default
    /// series entirely. `previous` is armed too: a persisted record already
    /// exists, so the next edit request must go through the overwrite prompt.
    pub fn adopt_loaded(&mut self, dataset: Dataset) {
        self.previous = Some(dataset.clone());
        self.working = dataset.clone();
        self.committed = dataset;
    }

    pub fn request_edit(
        &mut self,
        identity: Option<&Identity>,
    ) -> Result<EditOutcome, SessionError> {
        if identity.is_none() {
            return Ok(EditOutcome::NeedsIdentity);
        }
        if self.phase != Phase::Viewing {
            return Err(SessionError::OutOfPhase { event: "edit" });
        }

        if self.previous.is_some() {
            self.phase = Phase::ConfirmOverwrite;
            Ok(EditOutcome::ConfirmOverwrite)
        } else {
            self.working = self.committed.clone();
            self.phase = Phase::Editing;
            Ok(EditOutcome::Editing)
        }
    }

    pub fn confirm_overwrite(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::ConfirmOverwrite {
            return Err(SessionError::OutOfPhase { event: "confirm" });
        }
        self.working = self.committed.clone();
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Leaves the overwrite prompt or the edit grid without touching
    /// committed data. The draft is reset so a later edit starts clean.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::ConfirmOverwrite | Phase::Editing => {
                self.working = self.committed.clone();
                self.phase = Phase::Viewing;
                Ok(())
            }
            Phase::Viewing => Err(SessionError::OutOfPhase { event: "cancel" }),
        }
    }

    /// Updates a single draft value from raw input. Labels and every other
    /// index stay untouched.
    pub fn edit_field(&mut self, index: usize, raw: &str) -> Result<(), SessionError> {
        if self.phase != Phase::Editing {
            return Err(SessionError::OutOfPhase { event: "edit" });
        }
        let point = self
            .working
            .get_mut(index)
            .ok_or(SessionError::UnknownField { index })?;
        point.value = coerce_value(raw);
        Ok(())
    }

    /// Persists the draft. On success the old committed series becomes
    /// `previous` and the draft becomes committed. On a store failure nothing
    /// changes and the caller stays in the grid with the draft intact.
    pub async fn save(
        &mut self,
        identity: Option<&Identity>,
        store: &dyn RecordStore,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Editing {
            return Err(SessionError::OutOfPhase { event: "save" });
        }
        let identity = identity.ok_or(SessionError::IdentityRequired)?;

        store.upsert(identity, &self.working).await?;

        self.previous = Some(std::mem::replace(
            &mut self.committed,
            self.working.clone(),
        ));
        self.phase = Phase::Viewing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataPoint;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<BTreeMap<String, Dataset>>,
        fail_upserts: bool,
        upsert_calls: AtomicUsize,
    }

    impl MemoryStore {
        fn failing() -> Self {
            Self {
                fail_upserts: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn query(&self, identity: &Identity) -> Result<Option<crate::models::UserRecord>, StoreError> {
            let records = self.records.lock().unwrap();
            Ok(records.get(identity.as_str()).map(|dataset| crate::models::UserRecord {
                email: identity.as_str().to_string(),
                dataset: dataset.clone(),
            }))
        }

        async fn upsert(&self, identity: &Identity, dataset: &Dataset) -> Result<(), StoreError> {
            self.upsert_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_upserts {
                return Err(StoreError::UpsertFailed("store offline".to_string()));
            }
            let mut records = self.records.lock().unwrap();
            records.insert(identity.as_str().to_string(), dataset.clone());
            Ok(())
        }
    }

    fn identity() -> Identity {
        Identity::parse("user@example.com").unwrap()
    }

    fn two_days() -> Dataset {
        vec![
            DataPoint {
                label: "Mon".to_string(),
                value: 245,
            },
            DataPoint {
                label: "Tue".to_string(),
                value: 312,
            },
        ]
    }

    #[test]
    fn coerce_value_parses_integers_and_zeroes_the_rest() {
        assert_eq!(coerce_value("42"), 42);
        assert_eq!(coerce_value("-3"), -3);
        assert_eq!(coerce_value(" 7 "), 7);
        assert_eq!(coerce_value("abc"), 0);
        assert_eq!(coerce_value("3.5"), 0);
        assert_eq!(coerce_value(""), 0);
    }

    #[test]
    fn edit_request_without_identity_does_not_move() {
        let mut session = EditSession::default();
        let outcome = session.request_edit(None).unwrap();
        assert_eq!(outcome, EditOutcome::NeedsIdentity);
        assert_eq!(session.phase(), Phase::Viewing);
    }

    #[test]
    fn entering_the_grid_copies_committed_into_the_draft() {
        let mut session = EditSession::new(two_days());
        let id = identity();

        let outcome = session.request_edit(Some(&id)).unwrap();
        assert_eq!(outcome, EditOutcome::Editing);
        assert_eq!(session.working(), session.committed());

        session.edit_field(0, "999").unwrap();
        assert_eq!(session.working()[0].value, 999);
        assert_eq!(session.committed()[0].value, 245);
    }

    #[test]
    fn overwrite_prompt_appears_iff_a_previous_snapshot_exists() {
        let mut session = EditSession::new(two_days());
        let id = identity();

        assert_eq!(
            session.request_edit(Some(&id)).unwrap(),
            EditOutcome::Editing
        );
        session.cancel().unwrap();

        session.adopt_loaded(two_days());
        assert_eq!(
            session.request_edit(Some(&id)).unwrap(),
            EditOutcome::ConfirmOverwrite
        );
        assert_eq!(session.phase(), Phase::ConfirmOverwrite);
    }

    #[test]
    fn edit_field_updates_only_the_targeted_index() {
        let mut session = EditSession::new(two_days());
        let id = identity();
        session.request_edit(Some(&id)).unwrap();

        session.edit_field(0, "300").unwrap();
        assert_eq!(session.working()[0].value, 300);
        assert_eq!(session.working()[1].value, 312);

        session.edit_field(1, "abc").unwrap();
        assert_eq!(session.working()[0].value, 300);
        assert_eq!(session.working()[1].value, 0);
    }

    #[test]
    fn edit_field_rejects_unknown_indexes() {
        let mut session = EditSession::new(two_days());
        let id = identity();
        session.request_edit(Some(&id)).unwrap();

        let err = session.edit_field(7, "1").unwrap_err();
        assert!(matches!(err, SessionError::UnknownField { index: 7 }));
        assert_eq!(session.working(), &two_days());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut session = EditSession::new(two_days());
        let id = identity();
        session.request_edit(Some(&id)).unwrap();
        session.edit_field(0, "300").unwrap();

        session.cancel().unwrap();
        assert_eq!(session.phase(), Phase::Viewing);
        assert_eq!(session.display(), &two_days());
        assert!(session.previous().is_none());
    }

    #[tokio::test]
    async fn save_promotes_the_draft_and_keeps_one_snapshot() {
        let store = MemoryStore::default();
        let mut session = EditSession::new(two_days());
        let id = identity();

        session.request_edit(Some(&id)).unwrap();
        session.edit_field(0, "300").unwrap();
        session.save(Some(&id), &store).await.unwrap();

        assert_eq!(session.phase(), Phase::Viewing);
        assert_eq!(session.committed()[0].value, 300);
        assert_eq!(session.committed()[1].value, 312);
        let previous = session.previous().expect("snapshot missing");
        assert_eq!(previous[0].value, 245);
        assert_eq!(previous[1].value, 312);

        let stored = store.query(&id).await.unwrap().expect("record missing");
        assert_eq!(stored.dataset[0].value, 300);
    }

    #[tokio::test]
    async fn failed_save_changes_nothing_and_stays_in_the_grid() {
        let store = MemoryStore::failing();
        let mut session = EditSession::new(two_days());
        let id = identity();

        session.request_edit(Some(&id)).unwrap();
        session.edit_field(0, "300").unwrap();

        let err = session.save(Some(&id), &store).await.unwrap_err();
        assert!(matches!(err, SessionError::Store(_)));
        assert_eq!(session.phase(), Phase::Editing);
        assert_eq!(session.working()[0].value, 300);
        assert_eq!(session.committed()[0].value, 245);
        assert!(session.previous().is_none());
    }

    #[tokio::test]
    async fn save_without_identity_fails_closed() {
        let store = MemoryStore::default();
        let mut session = EditSession::new(two_days());
        let id = identity();

        session.request_edit(Some(&id)).unwrap();
        let err = session.save(None, &store).await.unwrap_err();

        assert!(matches!(err, SessionError::IdentityRequired));
        assert_eq!(store.upsert_calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.phase(), Phase::Editing);
    }

    #[test]
    fn adopting_a_loaded_record_arms_the_prompt() {
        let mut session = EditSession::default();
        let id = identity();

        let mut loaded = two_days();
        loaded[0].value = 500;
        session.adopt_loaded(loaded.clone());

        assert_eq!(session.committed(), &loaded);
        assert_eq!(session.previous(), Some(&loaded));
        assert_eq!(
            session.request_edit(Some(&id)).unwrap(),
            EditOutcome::ConfirmOverwrite
        );
    }

    #[tokio::test]
    async fn second_save_tracks_one_snapshot_only() {
        // previous tracks one save ago, not the first-ever series
        let store = MemoryStore::default();
        let mut session = EditSession::new(two_days());
        let id = identity();

        session.request_edit(Some(&id)).unwrap();
        session.edit_field(0, "300").unwrap();
        session.save(Some(&id), &store).await.unwrap();

        session.request_edit(Some(&id)).unwrap();
        session.confirm_overwrite().unwrap();
        session.edit_field(0, "400").unwrap();
        session.save(Some(&id), &store).await.unwrap();

        assert_eq!(session.previous().unwrap()[0].value, 300);
        assert_eq!(session.committed()[0].value, 400);
    }

    #[test]
    fn out_of_phase_events_are_rejected() {
        let mut session = EditSession::new(two_days());
        assert!(matches!(
            session.confirm_overwrite().unwrap_err(),
            SessionError::OutOfPhase { .. }
        ));
        assert!(matches!(
            session.cancel().unwrap_err(),
            SessionError::OutOfPhase { .. }
        ));
        assert!(matches!(
            session.edit_field(0, "1").unwrap_err(),
            SessionError::OutOfPhase { .. }
        ));
    }
}
