//! Pet field validation.

use chrono::{Local, NaiveDate};

use super::{field, is_valid_name, Errors, FieldMap};

/// Date format pets submit their birthday in.
pub(crate) const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Validate the raw form fields for a pet.
///
/// The birthday must be a `YYYY-MM-DD` date strictly before today; today
/// itself is rejected.
pub fn validate_pet(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let breed = field(data, "breed");
    let birthday = field(data, "birthday");

    if name.is_empty() {
        errors.insert("name", "Por favor ingrese un nombre");
    } else if !is_valid_name(name) {
        errors.insert("name", "El nombre debe contener solo letras y espacios");
    }

    if breed.is_empty() {
        errors.insert("breed", "Por favor ingrese una raza");
    }

    let today = Local::now().date_naive();
    match NaiveDate::parse_from_str(birthday, BIRTHDAY_FORMAT) {
        Ok(date) if date < today => {}
        _ => {
            errors.insert(
                "birthday",
                "Por favor ingrese una fecha de nacimiento valida y anterior a la de hoy",
            );
        }
    }

    errors
}
