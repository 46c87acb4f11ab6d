//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos:
//! matrículas, direcciones MAC y campos de texto.

use regex::Regex;
use validator::ValidationError;

/// Normalizar una matrícula: sin espacios alrededor y en mayúsculas
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar formato de matrícula de vehículo
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-'], "");
    if clean_plate.len() < 4 || clean_plate.len() > 20 {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    if !clean_plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de dirección MAC (AA:BB:CC:DD:EE:FF)
pub fn validate_mac_address(value: &str) -> Result<(), ValidationError> {
    let pattern = Regex::new(r"^[0-9A-Fa-f]{2}(:[0-9A-Fa-f]{2}){5}$")
        .expect("invalid MAC regex");
    if !pattern.is_match(value) {
        let mut error = ValidationError::new("mac_address");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"AA:BB:CC:DD:EE:FF".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email (básico)
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  kda 123b "), "KDA 123B");
        assert_eq!(normalize_plate("kda123b"), "KDA123B");
    }

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("KDA 123B").is_ok());
        assert!(validate_plate("GK-001A").is_ok());
        assert!(validate_plate("A1").is_err());
        assert!(validate_plate("PLACA!!").is_err());
        assert!(validate_plate(&"A".repeat(25)).is_err());
    }

    #[test]
    fn test_validate_mac_address() {
        assert!(validate_mac_address("AA:BB:CC:DD:EE:FF").is_ok());
        assert!(validate_mac_address("aa:bb:cc:dd:ee:ff").is_ok());
        assert!(validate_mac_address("AA:BB:CC:DD:EE").is_err());
        assert!(validate_mac_address("AA-BB-CC-DD-EE-FF").is_err());
        assert!(validate_mac_address("ZZ:BB:CC:DD:EE:FF").is_err());
        assert!(validate_mac_address("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("valor").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@judiciary.go.ke").is_ok());
        assert!(validate_email("sin-arroba").is_err());
    }
}
