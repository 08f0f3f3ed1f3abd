use super::{
    alpha2::Alpha2Code,
    iso3166::{ALIASES, SHORT_NAMES},
};
use crate::prelude::*;
use once_cell::sync::Lazy;
use std::{collections::HashMap, str::FromStr};
use unidecode::unidecode;

static ISO_3166: Lazy<ReferenceTable> = Lazy::new(|| {
    let mut table = ReferenceTable::default();
    for (name, code) in SHORT_NAMES.iter().chain(ALIASES.iter()) {
        if let Err(e) = table.insert(name, code) {
            tracing::error!("Skipping reference entry {}: {}", name, e);
        }
    }
    tracing::debug!("Loaded {} ISO 3166-1 reference names", table.len());
    table
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-for-byte comparison against the reference names.
    #[default]
    Exact,
    /// Trimmed, transliterated, lowercased and whitespace-collapsed on both sides.
    Normalized,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(mode: &str) -> std::result::Result<Self, Self::Err> {
        match mode.trim().to_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "normalized" => Ok(MatchMode::Normalized),
            other => Err(format!("Unknown match mode: {}", other)),
        }
    }
}

/// Immutable name -> alpha-2 mapping. Several names may share a code; one name never has two.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    exact: HashMap<String, Alpha2Code>,
    normalized: HashMap<String, Alpha2Code>,
}

impl ReferenceTable {
    /// The process-wide ISO 3166-1 table, built on first use.
    pub fn iso3166() -> &'static ReferenceTable {
        &ISO_3166
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = ReferenceTable::default();
        for (name, code) in pairs {
            table.insert(name, code)?;
        }

        Ok(table)
    }

    fn insert(&mut self, name: &str, code: &str) -> Result<()> {
        let code = Alpha2Code::from_str(code)?;
        check_conflict(&self.exact, name, code)?;
        let key = normalize(name);
        check_conflict(&self.normalized, &key, code)?;

        self.exact.insert(name.to_string(), code);
        self.normalized.insert(key, code);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    fn get(&self, name: &str, mode: MatchMode) -> Option<Alpha2Code> {
        match mode {
            MatchMode::Exact => self.exact.get(name).copied(),
            MatchMode::Normalized => self.normalized.get(&normalize(name)).copied(),
        }
    }
}

fn check_conflict(map: &HashMap<String, Alpha2Code>, key: &str, code: Alpha2Code) -> Result<()> {
    match map.get(key) {
        Some(existing) if *existing != code => Err(CountryError::ConflictingReference {
            name: key.to_string(),
            existing: existing.to_string(),
            code: code.to_string(),
        }),
        _ => Ok(()),
    }
}

pub fn normalize(name: &str) -> String {
    unidecode(name.trim())
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Resolves country names against a reference table. Cheap to copy; holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Alpha2Resolver<'t> {
    table: &'t ReferenceTable,
    mode: MatchMode,
}

impl Default for Alpha2Resolver<'static> {
    fn default() -> Self {
        Alpha2Resolver::new(ReferenceTable::iso3166(), MatchMode::Exact)
    }
}

impl<'t> Alpha2Resolver<'t> {
    pub fn new(table: &'t ReferenceTable, mode: MatchMode) -> Self {
        Alpha2Resolver { table, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `UnknownCountry` for names the table does not carry. Callers decide whether that is fatal.
    pub fn resolve(&self, name: &str) -> Result<Alpha2Code> {
        match self.table.get(name, self.mode) {
            Some(code) => Ok(code),
            None => Err(CountryError::UnknownCountry(name.to_string())),
        }
    }
}
