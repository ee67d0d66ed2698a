//! Opaque, URL-safe handles for games.
//!
//! A handle is the unpadded URL-safe base64 of `game:<id>`. Clients only
//! ever see handles; ids stay internal.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::errors::domain::{DomainError, ValidationKind};

const PREFIX: &str = "game:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameHandle(pub i64);

impl GameHandle {
    pub fn encode(id: i64) -> String {
        URL_SAFE_NO_PAD.encode(format!("{PREFIX}{id}"))
    }

    pub fn decode(handle: &str) -> Result<i64, DomainError> {
        let invalid = || {
            DomainError::validation(
                ValidationKind::InvalidGameHandle,
                format!("Invalid game key: {handle}"),
            )
        };

        let bytes = URL_SAFE_NO_PAD.decode(handle.trim()).map_err(|_| invalid())?;
        let text = std::str::from_utf8(&bytes).map_err(|_| invalid())?;
        let digits = text.strip_prefix(PREFIX).ok_or_else(invalid)?;
        // Reject "+7", "007" and the like so each id has exactly one handle.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(invalid());
        }
        digits.parse::<i64>().map_err(|_| invalid())
    }

    pub fn id(self) -> i64 {
        self.0
    }
}
