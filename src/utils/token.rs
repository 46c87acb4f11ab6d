//! Generación de tokens opacos
//!
//! Tokens URL-safe para dispositivos autorizados y resets de contraseña.
//! Se codifican en base64 sin padding para poder viajar en query strings.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

/// Bytes de entropía para tokens de dispositivo
pub const DEVICE_TOKEN_BYTES: usize = 32;

/// Bytes de entropía para tokens de reset de contraseña
pub const RESET_TOKEN_BYTES: usize = 16;

/// Generar un token aleatorio URL-safe con `n_bytes` de entropía
pub fn urlsafe_token(n_bytes: usize) -> String {
    let mut bytes = vec![0u8; n_bytes];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        // 32 bytes -> 43 caracteres base64 sin padding
        let token = urlsafe_token(DEVICE_TOKEN_BYTES);
        assert_eq!(token.len(), 43);

        let token = urlsafe_token(RESET_TOKEN_BYTES);
        assert_eq!(token.len(), 22);
    }

    #[test]
    fn test_token_is_urlsafe() {
        let token = urlsafe_token(DEVICE_TOKEN_BYTES);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = urlsafe_token(DEVICE_TOKEN_BYTES);
        let b = urlsafe_token(DEVICE_TOKEN_BYTES);
        assert_ne!(a, b);
    }
}
