//! Offer math for the Visitor.

use serde::{Deserialize, Serialize};

use turf_core::constants::*;
use turf_core::records::{Offer, PlayerRecord, Property};

/// Immutable capture of the player's holdings at staging time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldingsSnapshot {
    pub cash: u64,
    pub weapon_count: u32,
    pub properties: Vec<Property>,
    pub heat: f64,
}

impl HoldingsSnapshot {
    pub fn capture(player: &PlayerRecord) -> Self {
        Self {
            cash: player.cash,
            weapon_count: player.weapons.len() as u32,
            properties: player.properties.clone(),
            heat: player.global_heat,
        }
    }
}

/// Share of cash the Visitor asks for. Grows with wealth, within 10%..35%.
pub fn cash_offer_pct(cash: u64) -> f64 {
    let pct = VISITOR_CASH_PCT_MIN + (cash as f64 / VISITOR_CASH_SCALE) * VISITOR_CASH_PCT_STEP;
    pct.clamp(VISITOR_CASH_PCT_MIN, VISITOR_CASH_PCT_MAX)
}

pub fn cash_offer(cash: u64, heat: f64) -> Offer {
    let pct = cash_offer_pct(cash);
    let reduction = (heat * pct).floor().max(0.0) as u32;
    Offer::Cash {
        cost: (cash as f64 * pct).floor() as u64,
        heat_reduction: reduction.clamp(VISITOR_CASH_HEAT_MIN, VISITOR_CASH_HEAT_MAX),
    }
}

pub fn weapons_offer(count: u32) -> Offer {
    Offer::Weapons {
        count,
        heat_reduction: count
            .saturating_mul(VISITOR_HEAT_PER_WEAPON)
            .clamp(VISITOR_WEAPONS_HEAT_MIN, VISITOR_WEAPONS_HEAT_MAX),
    }
}

pub fn property_offer(property: &Property) -> Offer {
    let reduction = (property.daily_income / VISITOR_PROPERTY_INCOME_DIVISOR).min(u32::MAX as u64) as u32;
    Offer::Property {
        property_id: property.id,
        name: property.name.clone(),
        heat_reduction: reduction.clamp(VISITOR_PROPERTY_HEAT_MIN, VISITOR_PROPERTY_HEAT_MAX),
    }
}

/// All trades on the table for a snapshot. Cash and weapons are only offered
/// when the player has some; each property is offered separately.
pub fn compute_offers(snapshot: &HoldingsSnapshot) -> Vec<Offer> {
    let mut offers = Vec::new();
    if snapshot.cash > 0 {
        offers.push(cash_offer(snapshot.cash, snapshot.heat));
    }
    if snapshot.weapon_count > 0 {
        offers.push(weapons_offer(snapshot.weapon_count));
    }
    offers.extend(snapshot.properties.iter().map(property_offer));
    offers
}
