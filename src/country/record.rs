use crate::prelude::*;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One raw country entry from the upstream API. Only `name` matters here; the rest rides along.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: Option<String>,
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for CountryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::deserialize(deserializer).map(CountryRecord::from_object)
    }
}

impl CountryRecord {
    pub fn named(name: &str) -> Self {
        CountryRecord {
            name: Some(name.to_string()),
            fields: Map::new(),
        }
    }

    /// Non-string or empty names are kept out of `name` so extraction flags them.
    fn from_object(mut object: Map<String, Value>) -> Self {
        let name = match object.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => Some(name),
            Some(other) => {
                object.insert("name".to_string(), other);
                None
            }
            None => None,
        };

        CountryRecord {
            name,
            fields: object,
        }
    }
}

/// Records plus whatever else sat at the top level of the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryPayload {
    pub records: Vec<CountryRecord>,
    pub metadata: Map<String, Value>,
}

/// Accepts either a bare array of records or an object with a `countries` array.
pub fn records_from_payload(payload: Value) -> Result<CountryPayload> {
    let (items, metadata) = match payload {
        Value::Array(items) => (items, Map::new()),
        Value::Object(mut object) => match object.remove("countries") {
            Some(Value::Array(items)) => (items, object),
            _ => {
                let err = "Payload object has no \"countries\" array";
                tracing::error!("{}", err);
                return Err(CountryError::InvalidPayload(err.to_string()));
            }
        },
        other => {
            let err = format!("Expected a JSON array or object, got {}", json_kind(&other));
            tracing::error!("{}", err);
            return Err(CountryError::InvalidPayload(err));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(object) => records.push(CountryRecord::from_object(object)),
            other => {
                tracing::error!("Country record at index {} is a {}", index, json_kind(&other));
                return Err(CountryError::MalformedRecord { index });
            }
        }
    }

    Ok(CountryPayload { records, metadata })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_bare_array() {
        let payload = records_from_payload(json!([
            {"name": "Argentina", "capital": "Buenos Aires"},
            {"name": "Belize", "capital": "Belmopan"},
        ]))
        .unwrap();

        assert_eq!(payload.records.len(), 2);
        assert_eq!(payload.records[0].name.as_deref(), Some("Argentina"));
        assert_eq!(payload.records[1].fields["capital"], "Belmopan");
        assert!(payload.metadata.is_empty());
    }

    #[test]
    fn reads_wrapped_array_and_keeps_metadata() {
        let payload = records_from_payload(json!({
            "base": "EUR",
            "date": "2020-05-04",
            "countries": [{"name": "Bolivia"}],
        }))
        .unwrap();

        assert_eq!(payload.records, vec![CountryRecord::named("Bolivia")]);
        assert_eq!(payload.metadata["base"], "EUR");
        assert_eq!(payload.metadata["date"], "2020-05-04");
    }

    #[test]
    fn odd_names_are_left_for_extraction_to_flag() {
        let payload = records_from_payload(json!([{"name": 12}, {"name": ""}, {"capital": "Sucre"}])).unwrap();
        assert!(payload.records.iter().all(|r| r.name.is_none()));
        assert_eq!(payload.records[0].fields["name"], 12);
    }

    #[test]
    fn serde_agrees_with_payload_reader() {
        let raw = json!([
            {"name": "Argentina", "capital": "Buenos Aires"},
            {"name": 12},
            {"name": ""},
            {"capital": "Sucre"},
        ]);
        let via_serde: Vec<CountryRecord> = serde_json::from_value(raw.clone()).unwrap();
        let via_payload = records_from_payload(raw).unwrap().records;

        assert_eq!(via_serde, via_payload);
        assert!(via_serde[1].name.is_none());
        assert!(via_serde[2].name.is_none());
    }

    #[test]
    fn rejects_unusable_shapes() {
        assert!(matches!(
            records_from_payload(json!({"rates": {"USD": 1.08}})),
            Err(CountryError::InvalidPayload(_))
        ));
        assert!(matches!(
            records_from_payload(json!("Argentina")),
            Err(CountryError::InvalidPayload(_))
        ));
        assert!(matches!(
            records_from_payload(json!([{"name": "Argentina"}, "Belize"])),
            Err(CountryError::MalformedRecord { index: 1 })
        ));
    }
}
