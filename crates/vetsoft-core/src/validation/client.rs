//! Client field validation.

use super::{field, is_digits, is_valid_name, Errors, FieldMap};

/// Validate the raw form fields for a client.
///
/// Checks name format, the "54" phone prefix over an all-digit phone, and
/// that the email is a single-`@` address on the clinic domain. Returns one
/// message per failing field.
pub fn validate_client(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let phone = field(data, "phone");
    let email = field(data, "email");
    let city = field(data, "city");

    if name.is_empty() {
        errors.insert("name", "Por favor ingrese un nombre");
    } else if !is_valid_name(name) {
        errors.insert("name", "El nombre debe contener solo letras y espacios");
    }

    if phone.is_empty() {
        errors.insert("phone", "Por favor ingrese un teléfono");
    } else if !is_digits(phone) {
        errors.insert("phone", "El teléfono debe ser un número");
    } else if !phone.starts_with("54") {
        errors.insert("phone", "El teléfono debe empezar con el prefijo 54");
    }

    if email.is_empty() {
        errors.insert("email", "Por favor ingrese un email");
    } else if email.contains(' ') {
        errors.insert("email", "Por favor ingrese un email sin espacios en blanco");
    } else if email.matches('@').count() != 1 {
        errors.insert("email", "Por favor ingrese un email valido");
    } else if !email.ends_with("@vetsoft.com") {
        errors.insert(
            "email",
            "Por favor ingrese un email que incluya '@vetsoft.com'",
        );
    } else if email == "@vetsoft.com" {
        errors.insert(
            "email",
            "Por favor ingrese un email válido, no solo '@vetsoft.com'",
        );
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

    fn valid_client() -> FieldMap {
        data(&[
            ("name", "Juan Sebastian Veron"),
            ("phone", "54221555232"),
            ("email", "brujita75@vetsoft.com"),
            ("city", "LaPlata"),
        ])
    }

    #[test]
    fn test_valid_client_has_no_errors() {
        assert!(validate_client(&valid_client()).is_empty());
    }

    #[test]
    fn test_empty_map_flags_every_field_in_order() {
        let errors = validate_client(&FieldMap::new());

        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(fields, vec!["name", "phone", "email", "city"]);
        assert_eq!(errors["name"], "Por favor ingrese un nombre");
        assert_eq!(errors["phone"], "Por favor ingrese un teléfono");
        assert_eq!(errors["email"], "Por favor ingrese un email");
        assert_eq!(errors["city"], "Por favor seleccione una ciudad");
    }

    #[test]
    fn test_name_with_digits_is_rejected() {
        let mut input = valid_client();
        input.insert("name".into(), "Juan 2".into());

        let errors = validate_client(&input);
        assert_eq!(
            errors.get("name"),
            Some(&"El nombre debe contener solo letras y espacios")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_phone_with_letters_is_not_a_number() {
        let mut input = valid_client();
        input.insert("phone".into(), "ee21".into());

        let errors = validate_client(&input);
        assert_eq!(errors.get("phone"), Some(&"El teléfono debe ser un número"));
    }

    #[test]
    fn test_phone_without_54_prefix_is_rejected() {
        let mut input = valid_client();
        input.insert("phone".into(), "11221555232".into());

        let errors = validate_client(&input);
        assert_eq!(
            errors.get("phone"),
            Some(&"El teléfono debe empezar con el prefijo 54")
        );
    }

    #[test]
    fn test_email_with_spaces_is_rejected() {
        let mut input = valid_client();
        input.insert("email".into(), "brujita 75@vetsoft.com".into());

        let errors = validate_client(&input);
        assert_eq!(
            errors.get("email"),
            Some(&"Por favor ingrese un email sin espacios en blanco")
        );
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut input = valid_client();
        input.insert("email".into(), "brujita75".into());

        let errors = validate_client(&input);
        assert_eq!(errors.get("email"), Some(&"Por favor ingrese un email valido"));
    }

    #[test]
    fn test_email_with_two_ats_is_rejected() {
        let mut input = valid_client();
        input.insert("email".into(), "a@b@vetsoft.com".into());

        let errors = validate_client(&input);
        assert_eq!(errors.get("email"), Some(&"Por favor ingrese un email valido"));
    }

    #[test]
    fn test_email_on_wrong_domain_is_rejected() {
        let mut input = valid_client();
        input.insert("email".into(), "brujita75@gmail.com".into());

        let errors = validate_client(&input);
        assert_eq!(
            errors.get("email"),
            Some(&"Por favor ingrese un email que incluya '@vetsoft.com'")
        );
    }

    #[test]
    fn test_bare_suffix_is_not_an_address() {
        let mut input = valid_client();
        input.insert("email".into(), "@vetsoft.com".into());

        let errors = validate_client(&input);
        assert_eq!(
            errors.get("email"),
            Some(&"Por favor ingrese un email válido, no solo '@vetsoft.com'")
        );
    }

    #[test]
    fn test_one_message_per_field() {
        // An empty name gets the required message only; the format message
        // never stacks on top.
        let mut input = valid_client();
        input.insert("name".into(), "".into());

        let errors = validate_client(&input);
        assert_eq!(errors.get("name"), Some(&"Por favor ingrese un nombre"));
        assert_eq!(errors.len(), 1);
    }
}
