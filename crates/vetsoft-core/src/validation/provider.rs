//! Provider field validation.

use super::{field, is_valid_name, Errors, FieldMap};

/// Validate the raw form fields for a provider.
///
/// Unlike clients, provider emails only need to contain an `@`; any domain
/// is accepted.
pub fn validate_provider(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let email = field(data, "email");
    let city = field(data, "city");

    if name.is_empty() {
        errors.insert("name", "Por favor ingrese un nombre");
    } else if !is_valid_name(name) {
        errors.insert("name", "El nombre debe contener solo letras y espacios");
    }

    if email.is_empty() {
        errors.insert("email", "Por favor ingrese un email");
    } else if !email.contains('@') {
        errors.insert("email", "Por favor ingrese un email valido");
    }

    if city.is_empty() {
        errors.insert("city", "Por favor seleccione una ciudad");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_provider_has_no_errors() {
        let input = data(&[
            ("name", "Farmacity"),
            ("email", "ventas@farmacity.com"),
            ("city", "Berisso"),
        ]);
        assert!(validate_provider(&input).is_empty());
    }

    #[test]
    fn test_any_domain_is_accepted() {
        let input = data(&[
            ("name", "Farmacity"),
            ("email", "ventas@gmail.com"),
            ("city", "Berisso"),
        ]);
        assert!(validate_provider(&input).is_empty());
    }

    #[test]
    fn test_empty_map_flags_every_field() {
        let errors = validate_provider(&FieldMap::new());
        assert_eq!(errors["name"], "Por favor ingrese un nombre");
        assert_eq!(errors["email"], "Por favor ingrese un email");
        assert_eq!(errors["city"], "Por favor seleccione una ciudad");
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let input = data(&[("name", "Farmacity"), ("email", "ventas"), ("city", "Berisso")]);
        let errors = validate_provider(&input);
        assert_eq!(errors.get("email"), Some(&"Por favor ingrese un email valido"));
    }

    #[test]
    fn test_name_with_punctuation_is_rejected() {
        let input = data(&[
            ("name", "Farmacity S.A."),
            ("email", "ventas@farmacity.com"),
            ("city", "Berisso"),
        ]);
        let errors = validate_provider(&input);
        assert_eq!(
            errors.get("name"),
            Some(&"El nombre debe contener solo letras y espacios")
        );
    }
}
