//! Field validation for form input.
//!
//! Each entity has a pure `validate_*` function taking the raw field map a
//! form handler collected and returning a map of field name to error
//! message. An empty map means the input is valid. Validators never fail in
//! any other way: bad input is data, not an error condition.

mod client;
mod medicine;
mod pet;
mod product;
mod provider;
mod vet;

pub use client::validate_client;
pub use medicine::validate_medicine;
pub use pet::validate_pet;
pub use product::validate_product;
pub use provider::validate_provider;
pub use vet::validate_vet;

pub(crate) use pet::BIRTHDAY_FORMAT;

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Raw form input: field name to submitted value. A missing key and a blank
/// value are treated identically everywhere.
pub type FieldMap = HashMap<String, String>;

/// Validation result: field name to a single message, in field declaration
/// order so templates can render the list as-is.
pub type Errors = IndexMap<&'static str, &'static str>;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern must compile"));

/// Fetch a field, treating absence as the empty string.
pub fn field<'a>(data: &'a FieldMap, key: &str) -> &'a str {
    data.get(key).map(String::as_str).unwrap_or("")
}

/// Name fields accept only letters and whitespace, over the whole string.
pub(crate) fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Digit-string check used for client phones and medicine doses.
pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
