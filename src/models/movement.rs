//! Modelo de Movement
//!
//! Eventos de entrada/salida por la barrera. Tabla append-only: solo se
//! borra en bloque con la acción administrativa protegida por contraseña.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Movement principal - mapea exactamente a la tabla movements
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movement {
    pub id: Uuid,
    pub plate: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// Acción registrada en la barrera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementAction {
    Entry,
    Exit,
}

impl MovementAction {
    /// Parsear la acción desde el path del endpoint de tracking
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entry" => Some(MovementAction::Entry),
            "exit" => Some(MovementAction::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementAction::Entry => "entry",
            MovementAction::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_actions() {
        assert_eq!(MovementAction::parse("entry"), Some(MovementAction::Entry));
        assert_eq!(MovementAction::parse("exit"), Some(MovementAction::Exit));
    }

    #[test]
    fn test_parse_rejects_unknown_actions() {
        assert_eq!(MovementAction::parse("Entry"), None);
        assert_eq!(MovementAction::parse("salida"), None);
        assert_eq!(MovementAction::parse(""), None);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for action in [MovementAction::Entry, MovementAction::Exit] {
            assert_eq!(MovementAction::parse(action.as_str()), Some(action));
        }
    }
}
