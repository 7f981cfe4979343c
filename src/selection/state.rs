//! Selection state and result panel transitions

use crate::horoscope::{HoroscopeDate, HoroscopeRequest, HoroscopeResponse, HoroscopeResult};
use crate::riders::{Rider, RiderDirectory};

/// What the result panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView<'a> {
    /// Nothing selected yet
    Idle,
    /// A lookup for the current selection is outstanding
    Loading,
    /// The horoscope for the current selection
    Found(&'a HoroscopeResult),
    /// The lookup settled without a horoscope
    NotFound,
}

/// Query, candidates, selection and horoscope of one session
///
/// Invariants:
/// - `candidates` are the directory positions whose rider matches `query`,
///   in directory order
/// - `horoscope` is `None` or belongs to `selected`
/// - `is_loading` implies `selected.is_some()`
#[derive(Debug, Clone)]
pub struct SelectionState {
    directory: RiderDirectory,
    query: String,
    candidates: Vec<usize>,
    selected: Option<Rider>,
    selected_date: Option<HoroscopeDate>,
    horoscope: Option<HoroscopeResult>,
    is_loading: bool,
    ticket: u64,
}

impl SelectionState {
    /// Start a session over `directory` with an empty query
    #[must_use]
    pub fn new(directory: RiderDirectory) -> Self {
        let candidates = directory.filter_indices("");
        Self {
            directory,
            query: String::new(),
            candidates,
            selected: None,
            selected_date: None,
            horoscope: None,
            is_loading: false,
            ticket: 0,
        }
    }

    /// Replace the query and recompute candidates
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_candidates();
    }

    /// Clear the query, showing the whole directory again
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Select the candidate at `position` for `date`
    ///
    /// Returns the lookup to perform, or `None` if `position` is out of range
    /// or the same rider is already selected for the same day.
    pub fn select(&mut self, position: usize, date: HoroscopeDate) -> Option<HoroscopeRequest> {
        let rider = self.candidate(position)?.clone();
        self.select_rider(rider, date)
    }

    /// Select a rider directly
    ///
    /// The query always shows the rider's name afterwards, even when the
    /// selection is unchanged and no lookup is issued.
    pub fn select_rider(&mut self, rider: Rider, date: HoroscopeDate) -> Option<HoroscopeRequest> {
        let unchanged = self.selected.as_ref().is_some_and(|current| current.id == rider.id)
            && self.selected_date == Some(date);
        if unchanged {
            self.query.clone_from(&rider.name);
            self.refresh_candidates();
            return None;
        }

        self.ticket += 1;
        self.horoscope = None;
        self.is_loading = true;
        self.selected_date = Some(date);
        self.query.clone_from(&rider.name);
        self.selected = Some(rider.clone());
        self.refresh_candidates();

        tracing::debug!(ticket = self.ticket, rider = %rider.name, "rider selected");
        Some(HoroscopeRequest {
            ticket: self.ticket,
            rider,
            date,
        })
    }

    /// Settle the outstanding lookup
    ///
    /// Responses for an older ticket or a different rider are ignored and
    /// `false` is returned.
    pub fn apply_response(&mut self, response: HoroscopeResponse) -> bool {
        let current = self
            .selected
            .as_ref()
            .is_some_and(|rider| rider.id == response.rider_id);
        if !self.is_loading || response.ticket != self.ticket || !current {
            tracing::debug!(
                ticket = response.ticket,
                current = self.ticket,
                "discarding stale horoscope response"
            );
            return false;
        }

        self.horoscope = response.result;
        self.is_loading = false;
        self.sync_card();
        true
    }

    /// Keep the card title in line with the selected rider's current record
    fn sync_card(&mut self) {
        if let (Some(rider), Some(result)) = (&self.selected, &mut self.horoscope) {
            result.rider_name.clone_from(&rider.name);
            result.sign.clone_from(&rider.zodiac_sign);
        }
    }

    /// Swap in a newly loaded directory
    ///
    /// Candidates are recomputed for the current query. The selected rider is
    /// refreshed from the new directory when it is still present, and so is
    /// the title of a settled card.
    pub fn replace_directory(&mut self, directory: RiderDirectory) {
        self.directory = directory;
        if let Some(selected) = &mut self.selected
            && let Some(fresh) = self.directory.get(&selected.id)
        {
            *selected = fresh.clone();
        }
        self.sync_card();
        self.refresh_candidates();
    }

    fn refresh_candidates(&mut self) {
        self.candidates = self.directory.filter_indices(&self.query);
    }

    /// Current panel content
    #[must_use]
    pub fn panel(&self) -> PanelView<'_> {
        match (&self.selected, self.is_loading, &self.horoscope) {
            (None, _, _) => PanelView::Idle,
            (Some(_), true, _) => PanelView::Loading,
            (Some(_), false, Some(result)) => PanelView::Found(result),
            (Some(_), false, None) => PanelView::NotFound,
        }
    }

    /// Candidate rider at a list position
    #[must_use]
    pub fn candidate(&self, position: usize) -> Option<&Rider> {
        self.candidates
            .get(position)
            .and_then(|&idx| self.directory.rider(idx))
    }

    /// Candidate riders in display order
    pub fn candidates(&self) -> impl Iterator<Item = &Rider> {
        self.candidates
            .iter()
            .filter_map(|&idx| self.directory.rider(idx))
    }

    /// Number of candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The directory being browsed
    #[must_use]
    pub const fn directory(&self) -> &RiderDirectory {
        &self.directory
    }

    /// The current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected rider
    #[must_use]
    pub const fn selected(&self) -> Option<&Rider> {
        self.selected.as_ref()
    }

    /// The settled horoscope for the selected rider
    #[must_use]
    pub const fn horoscope(&self) -> Option<&HoroscopeResult> {
        self.horoscope.as_ref()
    }

    /// Whether a lookup for the selected rider is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Ticket of the latest selection
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        self.ticket
    }
}
