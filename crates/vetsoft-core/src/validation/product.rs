//! Product field validation.

use super::{field, is_valid_name, Errors, FieldMap};

/// Validate the raw form fields for a product.
///
/// The price must parse as a float and be strictly positive. Zero and
/// negative values both report the greater-than-zero message; only text that
/// fails to parse at all reports the invalid-price message.
pub fn validate_product(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let kind = field(data, "type");
    let price = field(data, "price");

    if name.is_empty() {
        errors.insert("name", "Por favor ingrese un nombre");
    } else if !is_valid_name(name) {
        errors.insert("name", "El nombre debe contener solo letras y espacios");
    }

    if kind.is_empty() {
        errors.insert("type", "Por favor ingrese un tipo");
    }

    if price.is_empty() {
        errors.insert("price", "Por favor ingrese un precio");
    } else {
        match price.parse::<f64>() {
            Ok(value) if value <= 0.0 => {
                errors.insert("price", "Por favor ingrese un precio mayor a cero");
            }
            Ok(_) => {}
            Err(_) => {
                errors.insert("price", "Por favor ingrese un precio válido");
            }
        }
    }

    errors
}
