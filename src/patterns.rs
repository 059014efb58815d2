//! Pattern Dictionary: named segment patterns loaded from `patterns.json`
//!
//! The dictionary keeps the key order `Object.keys` gives for the JSON object
//! it was parsed from. Matching is first-hit in that order, so the order is
//! part of the data.
//!
//! Like `Object.keys`, names that are canonical array indices (`"0"`, `"12"`,
//! no leading zeros, below 2^32 - 1) come first in ascending numeric order;
//! every other name follows in file order.
//!
//! Segment values are not validated: they are read with JavaScript truthiness,
//! so `true`, `1` or `"yes"` light a segment and `false`, `0`, `""` or `null`
//! leave it dark.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::LoadError;

// =============================================================================
// SegmentMap
// =============================================================================

/// Lit state per segment identifier, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentMap {
    entries: Vec<(String, bool)>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a segment's lit state. Re-setting an id keeps its original position.
    pub fn set(&mut self, segment_id: impl Into<String>, lit: bool) {
        let segment_id = segment_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == segment_id) {
            Some(entry) => entry.1 = lit,
            None => self.entries.push((segment_id, lit)),
        }
    }

    /// Absent identifiers are unlit
    pub fn is_lit(&self, segment_id: &str) -> bool {
        self.entries
            .iter()
            .find(|(id, _)| id == segment_id)
            .map(|(_, lit)| *lit)
            .unwrap_or(false)
    }

    /// Identifiers of lit segments, in file order
    pub fn lit_segments(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, lit)| *lit)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, bool); N]> for SegmentMap {
    fn from(pairs: [(&str, bool); N]) -> Self {
        let mut map = SegmentMap::new();
        for (id, lit) in pairs {
            map.set(id, lit);
        }
        map
    }
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<'de> Deserialize<'de> for SegmentMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SegmentMapVisitor;

        impl<'de> Visitor<'de> for SegmentMapVisitor {
            type Value = SegmentMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping segment ids to lit states")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SegmentMap, A::Error> {
                let mut map = SegmentMap::new();
                while let Some((id, value)) = access.next_entry::<String, Value>()? {
                    map.set(id, is_truthy(&value));
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(SegmentMapVisitor)
    }
}

impl Serialize for SegmentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, lit) in &self.entries {
            map.serialize_entry(id, lit)?;
        }
        map.end()
    }
}

// =============================================================================
// PatternDictionary
// =============================================================================

/// Ordered pattern name -> segment map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternDictionary {
    entries: Vec<(String, SegmentMap)>,
}

impl PatternDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `patterns.json` body
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Parse {
            path: "patterns.json".to_string(),
            reason: e.to_string(),
        })
    }

    /// Insert a pattern. A repeated name replaces the value in place,
    /// matching how `JSON.parse` treats duplicate keys. Array-index names are
    /// placed among the leading index names by numeric value.
    pub fn insert(&mut self, name: impl Into<String>, segments: SegmentMap) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = segments;
            return;
        }

        match array_index(&name) {
            Some(index) => {
                let position = self
                    .entries
                    .iter()
                    .position(|(n, _)| array_index(n).map_or(true, |other| other > index))
                    .unwrap_or(self.entries.len());
                self.entries.insert(position, (name, segments));
            }
            None => self.entries.push((name, segments)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SegmentMap> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Pattern names in iteration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SegmentMap)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy with names in ascending code point order
    pub fn sorted(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Serialize with 4-space indentation, the layout `patterns.json` is kept in
    pub fn to_pretty_json(&self) -> Result<String, LoadError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|e| LoadError::Parse {
            path: "patterns.json".to_string(),
            reason: e.to_string(),
        })?;
        String::from_utf8(buf).map_err(|e| LoadError::Parse {
            path: "patterns.json".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Numeric value of a canonical array-index key, as JS objects order them
fn array_index(name: &str) -> Option<u32> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

impl<'de> Deserialize<'de> for PatternDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictionaryVisitor;

        impl<'de> Visitor<'de> for DictionaryVisitor {
            type Value = PatternDictionary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping pattern names to segment maps")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<PatternDictionary, A::Error> {
                let mut dict = PatternDictionary::new();
                while let Some((name, segments)) = access.next_entry::<String, SegmentMap>()? {
                    dict.insert(name, segments);
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_map(DictionaryVisitor)
    }
}

impl Serialize for PatternDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, segments) in &self.entries {
            map.serialize_entry(name, segments)?;
        }
        map.end()
    }
}

// =============================================================================
// Tests
// =============================================================================
