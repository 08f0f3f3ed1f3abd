pub mod country {
    pub mod extract;
    pub mod lookup;
    pub mod record;
}
pub mod fetch {
    pub mod http;
}
pub mod region {
    pub mod alpha2;
    mod iso3166;
    pub mod resolver;
}
pub mod service {
    pub mod response;
    pub mod var_service;
}
pub mod util {
    pub mod log_service;
}
pub mod error;
pub mod prelude;

pub use country::{
    extract::extract_country_names,
    lookup::{build_lookup, build_lookup_from_records, CountryLookupTable, LookupOutcome},
    record::{records_from_payload, CountryPayload, CountryRecord},
};
pub use error::CountryError;
pub use fetch::http::{DataFetcher, HttpFetcher};
pub use region::{
    alpha2::Alpha2Code,
    resolver::{Alpha2Resolver, MatchMode, ReferenceTable},
};
pub use service::response::{assemble_response, get_country_lookup, CountryResponse};
