//! Medicine field validation.

use super::{field, is_digits, is_valid_name, Errors, FieldMap};

/// Validate the raw form fields for a medicine.
///
/// The dose must be a digit-only string before the 1..=10 range is ever
/// looked at, so "4.1" reports the integer message and never the range one.
pub fn validate_medicine(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let description = field(data, "description");
    let dose = field(data, "dose");

    if name.is_empty() {
        errors.insert("name", "Por favor, ingrese un nombre de la medicina");
    } else if !is_valid_name(name) {
        errors.insert("name", "El nombre debe contener solo letras y espacios");
    }

    if description.is_empty() {
        errors.insert(
            "description",
            "Por favor, ingrese una descripcion de la medicina",
        );
    }

    if dose.is_empty() {
        errors.insert(
            "dose",
            "Por favor, ingrese una cantidad de la dosis de la medicina",
        );
    } else if !is_digits(dose) {
        errors.insert("dose", "La dosis debe ser un numero entero");
    } else {
        // Digit-only strings too long for i64 fall out of range like any
        // other out-of-range dose.
        match dose.parse::<i64>() {
            Ok(value) if (1..=10).contains(&value) => {}
            _ => {
                errors.insert("dose", "La dosis debe estar entre 1 y 10");
            }
        }
    }

    errors
}
