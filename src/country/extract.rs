use super::record::CountryRecord;
use crate::prelude::*;

/// One name per record, in input order. The first nameless record fails the whole batch.
pub fn extract_country_names(records: &[CountryRecord]) -> Result<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| match record.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => {
                tracing::error!("Country record at index {} has no name", index);
                Err(CountryError::MalformedRecord { index })
            }
        })
        .collect()
}
