//! SenML Record type and record-level accessors

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Result, SenMLError};

/// A SenML Record represents a single sensor measurement, a base-value
/// carrier, or both.
///
/// Field names follow the RFC 8428 JSON labels. Every field is optional and
/// absence is always `None`: a value of `0.0` is a real measurement, never a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SenMLRecord {
    /// Base Name - prepended to the names of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn: Option<String>,

    /// Base Time - added to the times of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bt: Option<f64>,

    /// Base Unit - used when a record has no unit of its own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bu: Option<String>,

    /// Base Value - added to numeric record values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bv: Option<f64>,

    /// Base Sum - added to sum values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<f64>,

    /// Base Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bver: Option<i32>,

    /// Name - identifies the sensor or parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// Unit - SenML registered unit string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,

    /// Value - numeric measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,

    /// String Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,

    /// Boolean Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vb: Option<bool>,

    /// Data Value - base64-encoded binary data, carried through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vd: Option<String>,

    /// Sum - integrated sum of values over time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,

    /// Time - seconds since the epoch, or an offset from the base time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,

    /// Update Time - maximum time before next update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ut: Option<f64>,
}

impl SenMLRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a numeric value
    pub fn with_value<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            n: Some(name.into()),
            v: Some(value),
            ..Default::default()
        }
    }

    /// Create a record with a string value
    pub fn with_string_value<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self {
            n: Some(name.into()),
            vs: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create a record with a boolean value
    pub fn with_bool_value<S: Into<String>>(name: S, value: bool) -> Self {
        Self {
            n: Some(name.into()),
            vb: Some(value),
            ..Default::default()
        }
    }

    /// Set the name of this record
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.n = Some(name.into());
        self
    }

    /// Set the unit for this record
    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.u = Some(unit.into());
        self
    }

    /// Set the timestamp for this record
    pub fn with_time(mut self, time: f64) -> Self {
        self.t = Some(time);
        self
    }

    /// Set the sum value for this record
    pub fn with_sum(mut self, sum: f64) -> Self {
        self.s = Some(sum);
        self
    }

    /// Set the base name carried by this record
    pub fn with_base_name<S: Into<String>>(mut self, base_name: S) -> Self {
        self.bn = Some(base_name.into());
        self
    }

    /// Set the base time carried by this record
    pub fn with_base_time(mut self, base_time: f64) -> Self {
        self.bt = Some(base_time);
        self
    }

    /// Set the base unit carried by this record
    pub fn with_base_unit<S: Into<String>>(mut self, base_unit: S) -> Self {
        self.bu = Some(base_unit.into());
        self
    }

    /// Set the base value carried by this record
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.bv = Some(base_value);
        self
    }

    /// Set the base sum carried by this record
    pub fn with_base_sum(mut self, base_sum: f64) -> Self {
        self.bs = Some(base_sum);
        self
    }

    /// Check if this record has a value
    pub fn has_value(&self) -> bool {
        self.v.is_some() || self.vs.is_some() || self.vb.is_some() || self.vd.is_some()
    }

    /// Check if this record sets any base field
    pub fn has_base_fields(&self) -> bool {
        self.bn.is_some()
            || self.bt.is_some()
            || self.bu.is_some()
            || self.bv.is_some()
            || self.bs.is_some()
            || self.bver.is_some()
    }

    /// A record that only carries base fields: no name, no value of any
    /// kind and no sum. It feeds inheritance but is not an observation.
    pub fn is_base_only(&self) -> bool {
        self.has_base_fields() && self.n.is_none() && !self.has_value() && self.s.is_none()
    }

    /// Get the name of this record, resolving with base name if needed
    pub fn resolved_name(&self, base_name: Option<&str>) -> Option<String> {
        match (&self.n, base_name) {
            (Some(name), Some(base)) => Some(format!("{}{}", base, name)),
            (Some(name), None) => Some(name.clone()),
            (None, Some(base)) => Some(base.to_string()),
            (None, None) => None,
        }
    }

    /// Numeric value of this record, `None` if `v` is absent
    pub fn numeric_value(&self) -> Option<f64> {
        self.v
    }

    /// Absolute timestamp of this record.
    ///
    /// An absent time reads as the epoch. Zero is a valid instant, so this
    /// always yields a timestamp; values the `time` crate cannot represent
    /// also degrade to the epoch. Use [`Self::try_timestamp`] to see those.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.try_timestamp().unwrap_or_else(|err| {
            tracing::warn!("Unrepresentable record time {:?}: {}", self.t, err);
            OffsetDateTime::UNIX_EPOCH
        })
    }

    /// Absolute timestamp of this record with nanosecond precision
    pub fn try_timestamp(&self) -> Result<OffsetDateTime> {
        let t = self.t.unwrap_or(0.0);
        if !t.is_finite() {
            return Err(SenMLError::invalid_field_value("t", t.to_string()));
        }

        let nanos = (t * 1e9).round() as i128;
        Ok(OffsetDateTime::from_unix_timestamp_nanos(nanos)?)
    }
}
