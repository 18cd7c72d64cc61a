//! Vet field validation.

use super::{field, is_valid_name, Errors, FieldMap};

/// Validate the raw form fields for a vet.
///
/// Vet phones only check presence and the "54" prefix; a phone containing
/// letters after the prefix clears validation. That permissiveness is part
/// of the contract, not an oversight to fix here.
pub fn validate_vet(data: &FieldMap) -> Errors {
    let mut errors = Errors::new();

    let name = field(data, "name");
    let email = field(data, "email");
    let phone = field(data, "phone");
    let speciality = field(data, "speciality");

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

    if phone.is_empty() {
        errors.insert("phone", "Por favor ingrese un teléfono");
    } else if !phone.starts_with("54") {
        errors.insert("phone", "El teléfono debe empezar con el prefijo 54");
    }

    if speciality.is_empty() {
        errors.insert("speciality", "Por favor seleccione una especialidad");
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

    fn valid_vet() -> FieldMap {
        data(&[
            ("name", "Juan Sebastian Veron"),
            ("email", "brujita75@hotmail.com"),
            ("phone", "54221555232"),
            ("speciality", "Urgencias"),
        ])
    }

    #[test]
    fn test_valid_vet_has_no_errors() {
        assert!(validate_vet(&valid_vet()).is_empty());
    }

    #[test]
    fn test_empty_map_flags_every_field() {
        let errors = validate_vet(&FieldMap::new());
        assert_eq!(errors["name"], "Por favor ingrese un nombre");
        assert_eq!(errors["email"], "Por favor ingrese un email");
        assert_eq!(errors["phone"], "Por favor ingrese un teléfono");
        assert_eq!(errors["speciality"], "Por favor seleccione una especialidad");
    }

    #[test]
    fn test_phone_without_prefix_is_rejected() {
        let mut input = valid_vet();
        input.insert("phone".into(), "11221555232".into());
        let errors = validate_vet(&input);
        assert_eq!(
            errors.get("phone"),
            Some(&"El teléfono debe empezar con el prefijo 54")
        );
    }

    #[test]
    fn test_phone_with_letters_after_prefix_is_accepted() {
        // No digit re-check for vets; only the prefix matters.
        let mut input = valid_vet();
        input.insert("phone".into(), "54abc".into());
        assert!(validate_vet(&input).is_empty());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut input = valid_vet();
        input.insert("email".into(), "brujita75".into());
        let errors = validate_vet(&input);
        assert_eq!(errors.get("email"), Some(&"Por favor ingrese un email valido"));
    }

    #[test]
    fn test_any_nonblank_speciality_is_accepted() {
        // Membership in the Speciality enum is the rendering layer's job.
        let mut input = valid_vet();
        input.insert("speciality".into(), "Dermatologia".into());
        assert!(validate_vet(&input).is_empty());
    }
}
