//! GM and player credentials for a hosted session.

use crate::auth::credential_matches;
use crate::random::SharedRng;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use tracing::debug;

/// Appended to the player credential when it collides with the GM's.
pub const COLLISION_MARKER: char = '!';

const CREDENTIAL_BYTES: usize = 12;

/// A pair of role credentials. The two are never equal.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CredentialPair {
    gm: String,
    player: String,
}

impl CredentialPair {
    /// Two fresh random credentials.
    pub fn generate(rng: &SharedRng) -> Self {
        Self::generate_with(|| random_credential(rng))
    }

    /// Draw the GM credential, then the player credential, from `next`.
    pub fn generate_with(mut next: impl FnMut() -> String) -> Self {
        let gm = next();
        let player = next();
        Self::from_parts(gm, player)
    }

    pub fn from_parts(gm: String, mut player: String) -> Self {
        if player == gm {
            debug!("Player credential collided with GM credential, marking it");
            player.push(COLLISION_MARKER);
        }
        Self { gm, player }
    }

    pub fn gm(&self) -> &str {
        &self.gm
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn gm_matches(&self, presented: Option<&str>) -> bool {
        credential_matches(&self.gm, presented)
    }

    pub fn player_matches(&self, presented: Option<&str>) -> bool {
        credential_matches(&self.player, presented)
    }
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("gm", &"<redacted>")
            .field("player", &"<redacted>")
            .finish()
    }
}

/// 12 random bytes, URL-safe base64 without padding.
pub fn random_credential(rng: &SharedRng) -> String {
    let mut bytes = [0u8; CREDENTIAL_BYTES];
    rng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
