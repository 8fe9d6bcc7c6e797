//! Record lookup over SenML packs
//!
//! Every lookup selects a record by matching the *raw* pack, then returns
//! that record as it looks after normalization. The pack itself is never
//! modified; each call resolves a private copy. Nothing is cached between
//! calls, packs are expected to be small.
//!
//! Absence is always reported as `None`, whether no record matched or the
//! matched record lacks the requested field.

pub mod matcher;

use time::OffsetDateTime;

use crate::normalize::Normalizer;
use crate::{SenMLPack, SenMLRecord, units};

pub use matcher::{
    And, ByName, ByNormalizedName, ByUnit, MatcherExt, Not, Or, RecordMatcher, by_name,
    by_normalized_name, by_unit,
};

impl SenMLPack {
    /// First record matching `matcher`, with all base fields resolved
    pub fn find_record<M: RecordMatcher>(&self, matcher: M) -> Option<SenMLRecord> {
        self.find_record_with(&Normalizer::default(), matcher)
    }

    /// Like [`Self::find_record`], resolving with a specific normalizer.
    ///
    /// If the matched raw record is a base-only carrier and the normalizer
    /// drops carriers, there is nothing to return and the result is `None`.
    pub fn find_record_with<M: RecordMatcher>(
        &self,
        normalizer: &Normalizer,
        matcher: M,
    ) -> Option<SenMLRecord> {
        let Some(index) = self.records.iter().position(|record| matcher.matches(record)) else {
            tracing::debug!("No record matched in pack of {}", self.len());
            return None;
        };

        let resolved = normalizer
            .normalize_indexed(self)
            .into_iter()
            .find_map(|(source, record)| (source == index).then_some(record));

        if resolved.is_none() {
            tracing::debug!(index, "Matched record was dropped by normalization");
        }
        resolved
    }

    /// Every record matching `matcher`, resolved, in pack order
    pub fn find_all<M: RecordMatcher>(&self, matcher: M) -> Vec<SenMLRecord> {
        let selected: Vec<bool> = self.records.iter().map(|r| matcher.matches(r)).collect();
        if !selected.contains(&true) {
            return Vec::new();
        }

        Normalizer::default()
            .normalize_indexed(self)
            .into_iter()
            .filter(|(source, _)| selected[*source])
            .map(|(_, record)| record)
            .collect()
    }

    /// Resolved numeric value of the first match
    pub fn find_value<M: RecordMatcher>(&self, matcher: M) -> Option<f64> {
        self.find_record(matcher)?.numeric_value()
    }

    /// Resolved numeric value and unit of the first match.
    ///
    /// The unit is empty when neither the record nor a base record set one.
    pub fn find_value_with_unit<M: RecordMatcher>(&self, matcher: M) -> Option<(f64, String)> {
        let record = self.find_record(matcher)?;
        let value = record.v?;
        Some((value, record.u.unwrap_or_default()))
    }

    /// Boolean value of the first match
    pub fn find_bool_value<M: RecordMatcher>(&self, matcher: M) -> Option<bool> {
        self.find_record(matcher)?.vb
    }

    /// String value of the first match.
    ///
    /// A matched record without a string value yields an empty string.
    pub fn find_string_value<M: RecordMatcher>(&self, matcher: M) -> Option<String> {
        self.find_record(matcher)
            .map(|record| record.vs.unwrap_or_default())
    }

    /// Absolute time of the first match.
    ///
    /// Any matched record has a time: a resolved time of zero is the epoch.
    /// Fractional seconds are kept rather than truncated to whole seconds,
    /// so `-1.5` reads as 1.5 seconds before the epoch.
    pub fn find_time<M: RecordMatcher>(&self, matcher: M) -> Option<OffsetDateTime> {
        self.find_record(matcher).map(|record| record.timestamp())
    }

    /// Resolved sum of the first match
    pub fn find_sum<M: RecordMatcher>(&self, matcher: M) -> Option<f64> {
        self.find_record(matcher)?.s
    }

    /// Latitude and longitude from the first `lat` and `lon` unit records.
    ///
    /// Longitude is only looked up once a latitude value was found.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        let lat = self.find_value(by_unit(units::LAT))?;
        let lon = self.find_value(by_unit(units::LON))?;
        Some((lat, lon))
    }
}
