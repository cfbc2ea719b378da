use std::io::Read;
use std::path::Path;

use tablebook_hours::parse::PeriodParser;

use crate::dataset::{self, DatasetRow};
use crate::error::{ServiceError, ServiceResult};
use crate::request::BookingRequest;
use crate::venue::Venue;

/// All venues from one dataset load, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    venues: Vec<Venue>,
}

impl AvailabilityIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self { venues: Vec::new() }
    }

    #[must_use]
    pub const fn from_venues(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// ## Summary
    /// Builds a fresh index from the dataset file at `path`.
    ///
    /// ## Errors
    /// See [`load_path`](Self::load_path).
    pub fn from_path(path: &Path, parser: &PeriodParser) -> ServiceResult<Self> {
        let mut index = Self::new();
        index.load_path(path, parser)?;
        Ok(index)
    }

    /// ## Summary
    /// Replaces the contents of this index with the venues in the dataset
    /// file at `path`.
    ///
    /// The new venue list is built in full before the old one is dropped, so
    /// on error the index keeps whatever it held before.
    ///
    /// ## Errors
    /// Returns `Load` if the file cannot be read, `MalformedRow` for a
    /// record without an hours field, and `Row` if a period clause in any
    /// record carries an invalid time or weekday.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load_path(&mut self, path: &Path, parser: &PeriodParser) -> ServiceResult<()> {
        let rows = dataset::read_path(path)?;
        self.replace_with(rows, parser)
    }

    /// ## Summary
    /// Like [`load_path`](Self::load_path) but reads from any byte source.
    ///
    /// ## Errors
    /// See [`load_path`](Self::load_path).
    pub fn load_reader<R: Read>(&mut self, source: R, parser: &PeriodParser) -> ServiceResult<()> {
        let rows = dataset::read_from(source)?;
        self.replace_with(rows, parser)
    }

    fn replace_with(&mut self, rows: Vec<DatasetRow>, parser: &PeriodParser) -> ServiceResult<()> {
        let venues = rows
            .into_iter()
            .map(|row| build_venue(row, parser))
            .collect::<ServiceResult<Vec<_>>>()?;

        tracing::debug!(
            venues = venues.len(),
            policy = %parser.policy(),
            "Loaded availability index"
        );
        self.venues = venues;
        Ok(())
    }

    /// ## Summary
    /// Returns the venues that can take `request`, in dataset order.
    #[must_use]
    pub fn query(&self, request: &BookingRequest) -> Vec<&Venue> {
        let matches: Vec<&Venue> = self
            .venues
            .iter()
            .filter(|venue| venue.accepts(request))
            .collect();

        tracing::trace!(request = %request, matches = matches.len(), "Queried availability");
        matches
    }

    /// ## Summary
    /// Validates raw caller input, then runs [`query`](Self::query).
    ///
    /// ## Errors
    /// Returns `InvalidInput` if the input does not form a valid request.
    pub fn query_text(
        &self,
        weekday_text: &str,
        start_text: &str,
        duration_text: &str,
    ) -> ServiceResult<Vec<&Venue>> {
        let request = BookingRequest::parse(weekday_text, start_text, duration_text)?;
        Ok(self.query(&request))
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

fn build_venue(row: DatasetRow, parser: &PeriodParser) -> ServiceResult<Venue> {
    let periods = parser
        .parse(&row.periods_text)
        .map_err(|source| ServiceError::Row {
            line: row.line,
            venue: row.name.clone(),
            source,
        })?;

    if periods.is_empty() {
        tracing::warn!(line = row.line, venue = %row.name, "No reservable periods recognised");
    }

    let mut venue = Venue::new(row.name);
    venue.set_periods(periods);
    Ok(venue)
}
