//! Builder pattern for creating SenML packs

use crate::{SenMLPack, SenMLRecord};

/// Builder for creating SenML packs with a fluent API
///
/// Base values set on the builder are emitted as a leading base-only record.
/// Further base records can be placed mid-pack with [`Self::rebase`].
#[derive(Debug, Default)]
pub struct SenMLBuilder {
    base_name: Option<String>,
    base_time: Option<f64>,
    base_unit: Option<String>,
    base_value: Option<f64>,
    base_sum: Option<f64>,
    records: Vec<SenMLRecord>,
}

impl SenMLBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base name for all records
    pub fn base_name<S: Into<String>>(mut self, name: S) -> Self {
        self.base_name = Some(name.into());
        self
    }

    /// Set the base time for all records
    pub fn base_time(mut self, time: f64) -> Self {
        self.base_time = Some(time);
        self
    }

    /// Set the base unit for all records
    pub fn base_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base_unit = Some(unit.into());
        self
    }

    /// Set the base value to add to all numeric values
    pub fn base_value(mut self, value: f64) -> Self {
        self.base_value = Some(value);
        self
    }

    /// Set the base sum value
    pub fn base_sum(mut self, sum: f64) -> Self {
        self.base_sum = Some(sum);
        self
    }

    /// Add a record with a numeric value
    pub fn add_value<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.records.push(SenMLRecord::with_value(name, value));
        self
    }

    /// Add a record with a string value
    pub fn add_string_value<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.records.push(SenMLRecord::with_string_value(name, value));
        self
    }

    /// Add a record with a boolean value
    pub fn add_bool_value<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.records.push(SenMLRecord::with_bool_value(name, value));
        self
    }

    /// Add a measurement with timestamp
    pub fn add_measurement<S: Into<String>>(mut self, name: S, value: f64, time: f64) -> Self {
        self.records
            .push(SenMLRecord::with_value(name, value).with_time(time));
        self
    }

    /// Add a measurement with unit and timestamp
    pub fn add_measurement_with_unit<S: Into<String>, U: Into<String>>(
        mut self,
        name: S,
        value: f64,
        unit: U,
        time: f64,
    ) -> Self {
        self.records.push(
            SenMLRecord::with_value(name, value)
                .with_unit(unit)
                .with_time(time),
        );
        self
    }

    /// Add a sum measurement
    pub fn add_sum<S: Into<String>>(mut self, name: S, sum: f64, time: f64) -> Self {
        self.records.push(
            SenMLRecord::new()
                .with_name(name)
                .with_sum(sum)
                .with_time(time),
        );
        self
    }

    /// Start a new base record at the current position.
    ///
    /// `f` receives an empty record and sets its base fields; base time,
    /// value and sum add onto earlier bases, name and unit replace them.
    pub fn rebase<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SenMLRecord) -> SenMLRecord,
    {
        self.records.push(f(SenMLRecord::new()));
        self
    }

    /// Add an existing record
    pub fn add_record(mut self, record: SenMLRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add multiple records at once
    pub fn add_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = SenMLRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Build the SenML pack
    pub fn build(self) -> SenMLPack {
        let mut records = Vec::with_capacity(self.records.len() + 1);

        if self.has_base_values() {
            records.push(SenMLRecord {
                bn: self.base_name,
                bt: self.base_time,
                bu: self.base_unit,
                bv: self.base_value,
                bs: self.base_sum,
                ..Default::default()
            });
        }

        records.extend(self.records);

        SenMLPack { records }
    }

    /// Check if we have any base values set
    fn has_base_values(&self) -> bool {
        self.base_name.is_some()
            || self.base_time.is_some()
            || self.base_unit.is_some()
            || self.base_value.is_some()
            || self.base_sum.is_some()
    }
}

/// Specialized builder for a single sensor's time series.
///
/// Produces one base record naming the sensor, followed by one unnamed
/// record per sample with its time relative to the base time.
#[derive(Debug)]
pub struct TimeSeriesBuilder {
    base_name: String,
    base_time: f64,
    base_unit: Option<String>,
    measurements: Vec<(f64, f64)>, // (relative_time, value)
}

impl TimeSeriesBuilder {
    /// Create a new time series builder
    pub fn new<S: Into<String>>(base_name: S, base_time: f64) -> Self {
        Self {
            base_name: base_name.into(),
            base_time,
            base_unit: None,
            measurements: Vec::new(),
        }
    }

    /// Set the unit for all measurements
    pub fn unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base_unit = Some(unit.into());
        self
    }

    /// Add a measurement at a relative time
    pub fn measurement(mut self, relative_time: f64, value: f64) -> Self {
        self.measurements.push((relative_time, value));
        self
    }

    /// Add measurements from an iterator
    pub fn measurements<I>(mut self, measurements: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.measurements.extend(measurements);
        self
    }

    /// Build the time series pack
    pub fn build(self) -> SenMLPack {
        let mut builder = SenMLBuilder::new()
            .base_name(self.base_name)
            .base_time(self.base_time);

        if let Some(unit) = self.base_unit {
            builder = builder.base_unit(unit);
        }

        builder
            .add_records(self.measurements.into_iter().map(|(time, value)| SenMLRecord {
                v: Some(value),
                t: Some(time),
                ..Default::default()
            }))
            .build()
    }
}
