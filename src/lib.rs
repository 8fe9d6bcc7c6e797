//! # SenML Resolve - base-value resolution and lookup for SenML packs
//!
//! Works on [RFC 8428](https://tools.ietf.org/html/rfc8428) Sensor Measurement
//! Lists that have already been decoded into a [`SenMLPack`].
//!
//! SenML records may leave out their base name, base time, base unit and
//! base value and inherit them from earlier records in the same pack. This
//! crate resolves those inherited fields into self-contained records, and
//! looks records up by name or unit returning their resolved values.
//!
//! ## Features
//!
//! - **Normalization**: resolve every record of a pack into absolute form
//!   without touching the original
//! - **Lookup**: find records with composable matchers and extract typed
//!   values (numeric, boolean, string, sum, time, lat/lon)
//! - **Builder Pattern**: ergonomic API for creating SenML data
//!
//! ## Quick Start
//!
//! ```rust
//! use senml_resolve::{SenMLBuilder, query::by_name};
//!
//! let pack = SenMLBuilder::new()
//!     .base_name("urn:dev:sensor1/")
//!     .base_time(1_640_995_200.0)
//!     .base_unit("Cel")
//!     .add_measurement("temperature", 22.5, 5.0)
//!     .build();
//!
//! let (value, unit) = pack.find_value_with_unit(by_name("temperature")).unwrap();
//! assert_eq!(value, 22.5);
//! assert_eq!(unit, "Cel");
//!
//! let time = pack.find_time(by_name("temperature")).unwrap();
//! assert_eq!(time.unix_timestamp(), 1_640_995_205);
//! ```
//!
//! ## Resolution rules
//!
//! - **Base name / base unit**: replaced by every later record that sets one
//! - **Base time / base value / base sum**: added onto the running total
//! - Lookups select records on their raw fields and return them resolved;
//!   the caller's pack is never modified
//!
//! Missing fields resolve against zero instead of failing. That keeps lookups
//! total on partially valid packs; validate beforehand when strictness matters.

pub mod builder;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pack;
pub mod query;
pub mod record;

// Re-export main types
pub use builder::{SenMLBuilder, TimeSeriesBuilder};
pub use config::{CarrierPolicy, NormalizeConfig};
pub use error::{Result, SenMLError};
pub use normalize::{Normalizer, normalize};
pub use pack::SenMLPack;
pub use query::RecordMatcher;
pub use record::SenMLRecord;

/// SenML registered unit strings
pub mod units {
    /// Degrees latitude
    pub const LAT: &str = "lat";
    /// Degrees longitude
    pub const LON: &str = "lon";
    /// Degrees Celsius
    pub const CELSIUS: &str = "Cel";
    /// Relative humidity
    pub const PERCENT_RH: &str = "%RH";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::by_name;

    #[test]
    fn test_basic_senml_creation() {
        let pack = SenMLBuilder::new()
            .base_name("urn:dev:sensor1/")
            .add_value("temperature", 22.5)
            .build();

        assert_eq!(pack.records.len(), 2); // Base record + measurement record
        assert_eq!(pack.records[0].bn, Some("urn:dev:sensor1/".to_string()));
        assert_eq!(pack.find_value(by_name("temperature")), Some(22.5));
    }

    #[test]
    fn test_records_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SenMLPack>();
        assert_send_sync::<SenMLRecord>();
    }
}
