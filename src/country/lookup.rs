use super::{extract::extract_country_names, record::CountryRecord};
use crate::{
    prelude::*,
    region::{alpha2::Alpha2Code, resolver::Alpha2Resolver},
};
use itertools::Itertools;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::{HashMap, HashSet};

/// Country name -> alpha-2 code for a single request. Iterates in the order names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryLookupTable {
    entries: Vec<(String, Alpha2Code)>,
    index: HashMap<String, usize>,
}

impl CountryLookupTable {
    /// First code recorded for a name wins.
    fn insert(&mut self, name: &str, code: Alpha2Code) {
        if self.index.contains_key(name) {
            return;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), code));
    }

    pub fn get(&self, name: &str) -> Option<Alpha2Code> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Alpha2Code)> {
        self.entries.iter().map(|(name, code)| (name.as_str(), *code))
    }
}

impl Serialize for CountryLookupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, code) in &self.entries {
            map.serialize_entry(name, code)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOutcome {
    pub table: CountryLookupTable,
    pub unresolved: Vec<String>,
}

pub fn build_lookup<S: AsRef<str>>(names: &[S], resolver: &Alpha2Resolver) -> LookupOutcome {
    let mut outcome = LookupOutcome::default();
    let mut seen_unresolved: HashSet<&str> = HashSet::new();

    for name in names {
        let name: &str = name.as_ref();
        if outcome.table.contains(name) || seen_unresolved.contains(name) {
            continue;
        }

        match resolver.resolve(name) {
            Ok(code) => outcome.table.insert(name, code),
            Err(e) => {
                tracing::debug!("{}", e);
                seen_unresolved.insert(name);
                outcome.unresolved.push(name.to_string());
            }
        }
    }

    if !outcome.unresolved.is_empty() {
        tracing::info!(
            "{} of {} country names unresolved: {}",
            outcome.unresolved.len(),
            outcome.table.len() + outcome.unresolved.len(),
            outcome.unresolved.iter().join(", ")
        );
    }

    outcome
}

pub fn build_lookup_from_records(
    records: &[CountryRecord],
    resolver: &Alpha2Resolver,
) -> Result<LookupOutcome> {
    let names = extract_country_names(records)?;
    Ok(build_lookup(&names, resolver))
}
