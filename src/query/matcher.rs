//! Record matchers used to select records from a pack

use crate::SenMLRecord;

/// Selects records from a pack.
///
/// Matchers look at the raw record as it appears in the pack, before any
/// base fields are resolved. Any `Fn(&SenMLRecord) -> bool` closure is a
/// matcher, and [`MatcherExt`] combines matchers.
pub trait RecordMatcher {
    fn matches(&self, record: &SenMLRecord) -> bool;
}

impl<F> RecordMatcher for F
where
    F: Fn(&SenMLRecord) -> bool,
{
    fn matches(&self, record: &SenMLRecord) -> bool {
        self(record)
    }
}

/// Case-insensitive match on the record name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByName {
    name: String,
}

impl ByName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl RecordMatcher for ByName {
    fn matches(&self, record: &SenMLRecord) -> bool {
        eq_fold(record.n.as_deref().unwrap_or_default(), &self.name)
    }
}

/// Case-insensitive match on the raw base name and name, concatenated.
///
/// This compares `bn + n` as written on the record itself, not the name
/// inherited from earlier base records, so the split between base name and
/// name has to match the one used in the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByNormalizedName {
    full_name: String,
}

impl ByNormalizedName {
    pub fn new(base_name: &str, name: &str) -> Self {
        Self {
            full_name: format!("{}{}", base_name, name),
        }
    }
}

impl RecordMatcher for ByNormalizedName {
    fn matches(&self, record: &SenMLRecord) -> bool {
        let bn = record.bn.as_deref().unwrap_or_default();
        let n = record.n.as_deref().unwrap_or_default();
        let joined = bn.chars().chain(n.chars()).flat_map(char::to_lowercase);
        joined.eq(self.full_name.chars().flat_map(char::to_lowercase))
    }
}

/// Exact, case-sensitive match on the record unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByUnit {
    unit: String,
}

impl ByUnit {
    pub fn new<S: Into<String>>(unit: S) -> Self {
        Self { unit: unit.into() }
    }
}

impl RecordMatcher for ByUnit {
    fn matches(&self, record: &SenMLRecord) -> bool {
        record.u.as_deref().unwrap_or_default() == self.unit
    }
}

/// Matches records accepted by both matchers
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

impl<A: RecordMatcher, B: RecordMatcher> RecordMatcher for And<A, B> {
    fn matches(&self, record: &SenMLRecord) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }
}

/// Matches records accepted by either matcher
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

impl<A: RecordMatcher, B: RecordMatcher> RecordMatcher for Or<A, B> {
    fn matches(&self, record: &SenMLRecord) -> bool {
        self.0.matches(record) || self.1.matches(record)
    }
}

/// Matches records the inner matcher rejects
#[derive(Debug, Clone)]
pub struct Not<M>(M);

impl<M: RecordMatcher> RecordMatcher for Not<M> {
    fn matches(&self, record: &SenMLRecord) -> bool {
        !self.0.matches(record)
    }
}

/// Combinators available on every matcher
pub trait MatcherExt: RecordMatcher + Sized {
    fn and<M: RecordMatcher>(self, other: M) -> And<Self, M> {
        And(self, other)
    }

    fn or<M: RecordMatcher>(self, other: M) -> Or<Self, M> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<M: RecordMatcher> MatcherExt for M {}

/// Match records by name, ignoring case
pub fn by_name<S: Into<String>>(name: S) -> ByName {
    ByName::new(name)
}

/// Match records by their own `bn + n`, ignoring case
pub fn by_normalized_name(base_name: &str, name: &str) -> ByNormalizedName {
    ByNormalizedName::new(base_name, name)
}

/// Match records by exact unit
pub fn by_unit<S: Into<String>>(unit: S) -> ByUnit {
    ByUnit::new(unit)
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_ignores_case() {
        let matcher = by_name("Temp");
        assert!(matcher.matches(&SenMLRecord::with_value("temp", 1.0)));
        assert!(matcher.matches(&SenMLRecord::with_value("TEMP", 1.0)));
        assert!(!matcher.matches(&SenMLRecord::with_value("humidity", 1.0)));
        assert!(!matcher.matches(&SenMLRecord::new()));
    }

    #[test]
    fn test_by_name_non_ascii() {
        assert!(by_name("TEMPÉRATURE").matches(&SenMLRecord::with_value("température", 1.0)));
    }

    #[test]
    fn test_by_normalized_name_uses_raw_fields() {
        let record = SenMLRecord::with_value("temp", 1.0).with_base_name("urn:dev:1/");
        assert!(by_normalized_name("URN:DEV:1/", "Temp").matches(&record));
        // Only the concatenation matters
        assert!(by_normalized_name("urn:dev:1/te", "mp").matches(&record));

        // A base name inherited from another record is not visible here
        let inherited = SenMLRecord::with_value("temp", 1.0);
        assert!(!by_normalized_name("urn:dev:1/", "temp").matches(&inherited));
        assert!(by_normalized_name("", "temp").matches(&inherited));
    }

    #[test]
    fn test_by_unit_is_case_sensitive() {
        let record = SenMLRecord::with_value("temp", 1.0).with_unit("Cel");
        assert!(by_unit("Cel").matches(&record));
        assert!(!by_unit("cel").matches(&record));
        assert!(!by_unit("Cel").matches(&SenMLRecord::with_value("temp", 1.0)));
    }

    #[test]
    fn test_closure_matcher() {
        let has_sum = |record: &SenMLRecord| record.s.is_some();
        assert!(has_sum.matches(&SenMLRecord::new().with_sum(1.0)));
        assert!(!has_sum.matches(&SenMLRecord::new()));
    }

    #[test]
    fn test_combinators() {
        let celsius_temp = by_name("temp").and(by_unit("Cel"));
        let record = SenMLRecord::with_value("temp", 1.0).with_unit("Cel");
        assert!(celsius_temp.matches(&record));
        assert!(!celsius_temp.matches(&SenMLRecord::with_value("temp", 1.0).with_unit("K")));

        let either = by_name("temp").or(by_name("hum"));
        assert!(either.matches(&SenMLRecord::with_value("hum", 1.0)));
        assert!(!either.matches(&SenMLRecord::with_value("co2", 1.0)));

        let not_temp = by_name("temp").not();
        assert!(not_temp.matches(&SenMLRecord::with_value("hum", 1.0)));
        assert!(!not_temp.matches(&record));
    }
}
