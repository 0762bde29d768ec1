//! Role authentication against a session's credential pair

use crate::config::SessionConfig;
use macrodeck_core::{Error, Result, Role};

pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() { return false; }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Absent credentials compare as the empty string.
pub(crate) fn credential_matches(expected: &str, presented: Option<&str>) -> bool {
    constant_time_eq(expected.as_bytes(), presented.unwrap_or_default().as_bytes())
}

impl SessionConfig {
    /// Role granted by a presented credential. The GM credential wins.
    pub fn authenticate(&self, presented: Option<&str>) -> Result<Role> {
        if self.gm_password_matches(presented) {
            return Ok(Role::Gm);
        }
        if self.player_password_matches(presented) {
            return Ok(Role::Player);
        }
        match presented {
            None => Err(Error::auth_failed("credential required")),
            Some(_) => Err(Error::auth_failed("invalid credential")),
        }
    }
}
