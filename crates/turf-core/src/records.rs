//! Player-global economy records shared with the heat/economy collaborator,
//! plus the Visitor's offer vocabulary.

use serde::{Deserialize, Serialize};

use crate::constants::{HEAT_MAX, HEAT_MIN};
use crate::types::Millis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub daily_income: u64,
}

/// The global player record. `cash` is unsigned, so it can never go negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub cash: u64,
    pub weapons: Vec<Weapon>,
    pub properties: Vec<Property>,
    /// Suspicion meter, always within [0, 100].
    pub global_heat: f64,
}

impl PlayerRecord {
    pub fn set_heat(&mut self, heat: f64) {
        self.global_heat = clamp_heat(heat);
    }
}

pub fn clamp_heat(heat: f64) -> f64 {
    if heat.is_nan() {
        return HEAT_MIN;
    }
    heat.clamp(HEAT_MIN, HEAT_MAX)
}

/// City-wide state owned by an external collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityState {
    pub lockdown: bool,
    pub lockdown_until: Option<Millis>,
}

impl CityState {
    /// Identifier of the lockdown episode in force at `now`, if any.
    /// The episode's end timestamp doubles as its id.
    pub fn lockdown_id(&self, now: Millis) -> Option<Millis> {
        match (self.lockdown, self.lockdown_until) {
            (true, Some(until)) if now < until => Some(until),
            _ => None,
        }
    }
}

/// A trade offered by the Visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Offer {
    Cash { cost: u64, heat_reduction: u32 },
    Weapons { count: u32, heat_reduction: u32 },
    Property { property_id: u32, name: String, heat_reduction: u32 },
}

impl Offer {
    pub fn heat_reduction(&self) -> u32 {
        match self {
            Offer::Cash { heat_reduction, .. }
            | Offer::Weapons { heat_reduction, .. }
            | Offer::Property { heat_reduction, .. } => *heat_reduction,
        }
    }

    pub fn matches(&self, choice: &OfferChoice) -> bool {
        match (self, choice) {
            (Offer::Cash { .. }, OfferChoice::Cash) => true,
            (Offer::Weapons { .. }, OfferChoice::Weapons) => true,
            (Offer::Property { property_id, .. }, OfferChoice::Property { property_id: chosen }) => {
                property_id == chosen
            }
            _ => false,
        }
    }
}

/// The player's pick among the current offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferChoice {
    Cash,
    Weapons,
    Property { property_id: u32 },
}
