pub use crate::error::CountryError;

pub type Result<T, E = CountryError> = std::result::Result<T, E>;
