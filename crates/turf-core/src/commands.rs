//! Commands sent from the renderer or collaborators to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::records::OfferChoice;
use crate::types::Millis;

/// All possible inputs to the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Defense session ---
    /// Open a new defense session on the default map.
    StartSession,
    /// Leave the current session (any phase).
    EndSession,
    /// Launch the first wave from `Preparing`.
    StartWave,
    /// Close the shop and launch the next wave.
    NextWave,

    // --- Avatar ---
    /// Movement input for this frame. The direction is normalized.
    MovePlayer { dx: f32, dy: f32 },
    /// Basic attack against the nearest enemy in reach.
    Attack,
    UseAbility { ability: AbilityKind },

    // --- Shop ---
    /// Buy an item. Placeables land at `at`, or at the avatar when omitted.
    Purchase {
        item: ShopItem,
        #[serde(default)]
        at: Option<Vec2>,
    },

    // --- Visitor ---
    AcceptOffer { choice: OfferChoice },
    RefuseVisitor,

    // --- Collaborator updates ---
    /// Heat/economy collaborator reports the current global heat.
    SetGlobalHeat { heat: f64 },
    /// City collaborator starts (`Some`) or lifts (`None`) a lockdown.
    SetLockdown { until: Option<Millis> },
}
