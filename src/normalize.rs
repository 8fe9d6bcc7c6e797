//! SenML normalization - converting packs to resolved form
//!
//! Normalization walks a pack front to back, folding base fields into a
//! running [`BaseContext`] and emitting a self-contained copy of each record:
//!
//! - name: current base name followed by the record name
//! - time: accumulated base time plus the record time (always present)
//! - unit: record unit, falling back to the current base unit
//! - value / sum: accumulated base value / base sum plus the record's own,
//!   only when the record carries one
//!
//! Base names and units replace the previous ones. Base times, values and
//! sums add onto what earlier base records set. Missing or odd fields simply
//! resolve against zero, so normalization never fails.

use crate::config::{CarrierPolicy, NormalizeConfig};
use crate::{SenMLPack, SenMLRecord};

/// Running base state while walking a pack
#[derive(Debug, Clone, Default, PartialEq)]
struct BaseContext {
    name: String,
    time: f64,
    unit: String,
    value: f64,
    sum: f64,
}

impl BaseContext {
    /// Fold the base fields of `record` into the running state
    fn absorb(&mut self, record: &SenMLRecord) {
        if let Some(bn) = &record.bn {
            self.name.clone_from(bn);
        }
        if let Some(bt) = record.bt {
            self.time += bt;
        }
        if let Some(bu) = &record.bu {
            self.unit.clone_from(bu);
        }
        if let Some(bv) = record.bv {
            self.value += bv;
        }
        if let Some(bs) = record.bs {
            self.sum += bs;
        }
    }

    /// Build the resolved copy of `record` against the current state
    fn resolve(&self, record: &SenMLRecord) -> SenMLRecord {
        let name = record
            .resolved_name(Some(self.name.as_str()))
            .filter(|name| !name.is_empty());

        let unit = match record.u.as_deref() {
            Some(u) if !u.is_empty() => Some(u.to_string()),
            _ if !self.unit.is_empty() => Some(self.unit.clone()),
            _ => None,
        };

        SenMLRecord {
            n: name,
            u: unit,
            v: record.v.map(|v| self.value + v),
            vs: record.vs.clone(),
            vb: record.vb,
            vd: record.vd.clone(),
            s: record.s.map(|s| self.sum + s),
            t: Some(self.time + record.t.unwrap_or(0.0)),
            ut: record.ut,
            ..Default::default()
        }
    }
}

/// Resolves base fields of a pack according to a [`NormalizeConfig`]
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a normalizer with the given configuration
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Resolve `pack` into a new, independent pack
    pub fn normalize(&self, pack: &SenMLPack) -> SenMLPack {
        self.normalize_indexed(pack)
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Resolve `pack`, pairing every emitted record with the index of the
    /// source record it came from.
    ///
    /// With [`CarrierPolicy::Retain`] the indices are `0..pack.len()`. With
    /// [`CarrierPolicy::Drop`] the indices of base-only records are skipped.
    pub fn normalize_indexed(&self, pack: &SenMLPack) -> Vec<(usize, SenMLRecord)> {
        let mut context = BaseContext::default();
        let mut resolved = Vec::with_capacity(pack.len());

        for (index, record) in pack.records.iter().enumerate() {
            context.absorb(record);

            if record.is_base_only() {
                tracing::trace!(index, "Base-only record ({:?})", self.config.carrier_policy);
                if self.config.carrier_policy == CarrierPolicy::Drop {
                    continue;
                }
            }

            resolved.push((index, context.resolve(record)));
        }

        resolved
    }
}

/// Resolve `pack` with the default configuration
pub fn normalize(pack: &SenMLPack) -> SenMLPack {
    Normalizer::default().normalize(pack)
}
