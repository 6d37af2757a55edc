/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("El correo es obligatorio".to_string());
    }
    if trimmed.len() > 254 {
        return Some("El correo debe tener como máximo 254 caracteres".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("El correo debe ser una dirección válida".to_string());
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} debe tener como máximo {max_len} caracteres"));
    }
    None
}

/// Validate a value against a closed set of choices.
pub fn validate_choice(value: &str, field_name: &str, choices: &[&str]) -> Option<String> {
    if choices.contains(&value) {
        None
    } else {
        Some(format!("{field_name} no es válido"))
    }
}
