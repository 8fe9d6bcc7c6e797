//! SenML Pack - ordered collection of SenML records

use serde::{Deserialize, Serialize};

use crate::SenMLRecord;
use crate::config::NormalizeConfig;
use crate::normalize::Normalizer;

/// A SenML Pack is an ordered batch of records sharing one inheritance scope.
///
/// Base fields (`bn`, `bt`, `bu`, `bv`, `bs`) set on a record apply to that
/// record and every following one until another record overrides them, so
/// record order is significant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenMLPack {
    /// Array of SenML records
    pub records: Vec<SenMLRecord>,
}

impl SenMLPack {
    /// Create a new empty pack
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record to this pack
    pub fn add_record(&mut self, record: SenMLRecord) {
        self.records.push(record);
    }

    /// Add multiple records to this pack
    pub fn add_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = SenMLRecord>,
    {
        self.records.extend(records);
    }

    /// Get the number of records in this pack
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this pack is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in this pack
    pub fn iter(&self) -> impl Iterator<Item = &SenMLRecord> {
        self.records.iter()
    }

    /// Check if any record in this pack sets a base field
    pub fn has_base_values(&self) -> bool {
        self.records.iter().any(SenMLRecord::has_base_fields)
    }

    /// Resolve all base fields into a new pack, keeping one row per input
    /// record. `self` is left untouched.
    pub fn normalize(&self) -> SenMLPack {
        Normalizer::default().normalize(self)
    }

    /// Resolve all base fields using an explicit configuration
    pub fn normalize_with(&self, config: &NormalizeConfig) -> SenMLPack {
        Normalizer::new(config.clone()).normalize(self)
    }
}

impl From<Vec<SenMLRecord>> for SenMLPack {
    fn from(records: Vec<SenMLRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<SenMLRecord> for SenMLPack {
    fn from_iter<I: IntoIterator<Item = SenMLRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SenMLPack {
    type Item = SenMLRecord;
    type IntoIter = std::vec::IntoIter<SenMLRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SenMLPack {
    type Item = &'a SenMLRecord;
    type IntoIter = std::slice::Iter<'a, SenMLRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pack_creation() {
        let pack = SenMLPack::new();
        assert!(pack.is_empty());
        assert_eq!(pack.len(), 0);
        assert!(!pack.has_base_values());
    }

    #[test]
    fn test_pack_with_records() {
        let mut pack = SenMLPack::new();
        pack.add_record(SenMLRecord::with_value("temperature", 22.5));
        pack.add_records([
            SenMLRecord::with_value("humidity", 45.0),
            SenMLRecord::new().with_base_name("dev1/"),
        ]);

        assert_eq!(pack.len(), 3);
        assert!(pack.has_base_values());
    }

    #[test]
    fn test_pack_iteration() {
        let records = vec![
            SenMLRecord::with_value("temp", 20.0),
            SenMLRecord::with_value("humidity", 50.0),
        ];
        let pack: SenMLPack = records.into_iter().collect();

        let mut count = 0;
        for record in &pack {
            count += 1;
            assert!(record.has_value());
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_normalize_leaves_source_untouched() {
        let pack = SenMLPack::from(vec![
            SenMLRecord::new().with_base_name("dev1/").with_base_value(10.0),
            SenMLRecord::with_value("temp", 1.5),
        ]);
        let before = pack.clone();

        let mut resolved = pack.normalize();
        resolved.records[1].v = Some(-1.0);

        assert_eq!(pack, before);
    }
}
