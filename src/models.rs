//! Core data structures for parsed DFQ files.
//!
//! A [`ParsedFile`] owns an ordered sequence of [`Part`] entities, each part
//! owns its [`Characteristic`]s and each characteristic owns its ordered
//! [`Measurement`] values. The whole graph is read-only after parsing;
//! mutators are crate-private.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Read-only key-value access shared by [`Part`] and [`Characteristic`].
///
/// An absent key yields `None` and is never conflated with a key that is
/// present with an empty value.
pub trait KeyValueRecord {
    /// Look up the value stored for a key code, if any
    fn get(&self, key: &str) -> Option<&str>;

    /// Key codes present in this record, in sorted order
    fn keys(&self) -> Vec<&str>;
}

/// Key code to value mapping for one DFQ entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueData {
    entries: BTreeMap<String, String>,
}

impl KeyValueData {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite an entry. Repeated keys keep the last value seen.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

/// A single recorded data point: numeric value plus optional timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub timestamp: Option<NaiveDateTime>,
}

impl Measurement {
    pub fn new(value: f64, timestamp: Option<NaiveDateTime>) -> Self {
        Self { value, timestamp }
    }
}

/// One measured quantity under a part, identified by K2xxx keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Characteristic {
    data: KeyValueData,
    measurements: Vec<Measurement>,
}

impl Characteristic {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up a key code value, e.g. "K2002" for the characteristic name
    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }

    /// Key codes present in this characteristic's mapping
    pub fn get_data_keys(&self) -> Vec<&str> {
        self.data.keys()
    }

    /// Measurements in recorded order
    pub fn get_measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    /// Measurement values without their timestamps, in recorded order
    pub fn values(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.value).collect()
    }

    pub(crate) fn insert_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key, value);
    }

    pub(crate) fn push_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub(crate) fn measurements_mut(&mut self) -> &mut [Measurement] {
        &mut self.measurements
    }
}

impl KeyValueRecord for Characteristic {
    fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.data.keys()
    }
}

/// One inspected physical object, identified by K1xxx keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Part {
    data: KeyValueData,
    characteristics: Vec<Characteristic>,
}

impl Part {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up a key code value, e.g. "K1001" for the part name
    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }

    /// Key codes present in this part's mapping
    pub fn get_data_keys(&self) -> Vec<&str> {
        self.data.keys()
    }

    /// Characteristics in file order
    pub fn get_characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    /// Characteristic by zero-based index
    pub fn get_characteristic(&self, index: usize) -> Option<&Characteristic> {
        self.characteristics.get(index)
    }

    pub fn characteristic_count(&self) -> usize {
        self.characteristics.len()
    }

    /// Total number of measurements across all characteristics
    pub fn total_measurement_count(&self) -> usize {
        self.characteristics
            .iter()
            .map(Characteristic::measurement_count)
            .sum()
    }

    pub(crate) fn insert_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key, value);
    }

    pub(crate) fn push_characteristic(&mut self, characteristic: Characteristic) {
        self.characteristics.push(characteristic);
    }

    pub(crate) fn last_characteristic_mut(&mut self) -> Option<&mut Characteristic> {
        self.characteristics.last_mut()
    }

    pub(crate) fn characteristics_mut(&mut self) -> &mut [Characteristic] {
        &mut self.characteristics
    }
}

impl KeyValueRecord for Part {
    fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.data.keys()
    }
}

/// Root container for one parsed DFQ file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    parts: Vec<Part>,
}

impl ParsedFile {
    pub(crate) fn from_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Number of parts in the file. Zero for structurally empty input.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Part by zero-based index
    pub fn get_part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Parts in file order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total number of measurements across all parts
    pub fn total_measurement_count(&self) -> usize {
        self.parts.iter().map(Part::total_measurement_count).sum()
    }

    pub(crate) fn parts_mut(&mut self) -> &mut [Part] {
        &mut self.parts
    }
}
