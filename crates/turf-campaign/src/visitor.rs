//! The Visitor: a cooldown-gated, one-shot negotiation that trades player
//! resources for heat.
//!
//! idle -> staged (`maybe_auto_stage`) -> resolved (`apply` / `end`) -> idle
//! once the cooldown has passed.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use turf_core::constants::{VISITOR_COOLDOWN_MS, VISITOR_HEAT_THRESHOLD};
use turf_core::enums::InterventionReason;
use turf_core::records::{CityState, Offer, OfferChoice, PlayerRecord};
use turf_core::types::Millis;

use crate::offers::{compute_offers, HoldingsSnapshot};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorState {
    pub active: bool,
    /// Waiting on the player. Implies `active`.
    pub pending_choice: bool,
    pub reason: Option<InterventionReason>,
    pub triggered_at: Option<Millis>,
    /// Lockdown episode the last staging was for.
    pub lockdown_id: Option<Millis>,
    pub snapshot: Option<HoldingsSnapshot>,
    pub offers: Vec<Offer>,
    pub last_resolved_at: Option<Millis>,
    pub last_resolved_lockdown_id: Option<Millis>,
    pub cooldown_until: Millis,
}

impl VisitorState {
    /// Stage an intervention if the trigger conditions hold. Returns whether
    /// one was staged.
    pub fn maybe_auto_stage(&mut self, player: &PlayerRecord, city: &CityState, now: Millis) -> bool {
        if self.active || self.pending_choice {
            return false;
        }
        if now < self.cooldown_until {
            return false;
        }

        let lockdown = city.lockdown_id(now);
        let reason = match lockdown {
            Some(id) => {
                if self.lockdown_id == Some(id) || self.last_resolved_lockdown_id == Some(id) {
                    return false;
                }
                InterventionReason::Lockdown
            }
            None => {
                if player.global_heat < VISITOR_HEAT_THRESHOLD {
                    return false;
                }
                let rested = self
                    .last_resolved_at
                    .map_or(true, |at| now.saturating_sub(at) >= VISITOR_COOLDOWN_MS);
                if !rested {
                    return false;
                }
                InterventionReason::Heat
            }
        };

        let snapshot = HoldingsSnapshot::capture(player);
        self.offers = compute_offers(&snapshot);
        self.snapshot = Some(snapshot);
        self.active = true;
        self.pending_choice = true;
        self.reason = Some(reason);
        self.triggered_at = Some(now);
        if lockdown.is_some() {
            self.lockdown_id = lockdown;
        }
        info!(?reason, offers = self.offers.len(), heat = player.global_heat, "visitor staged");
        true
    }

    /// Accept one of the current offers. The choice must match an offer on
    /// the table; the player's current holdings are mutated, not the snapshot.
    pub fn apply(&mut self, choice: OfferChoice, player: &mut PlayerRecord, now: Millis) -> bool {
        if !self.pending_choice {
            warn!(?choice, "visitor offer accepted with nothing pending");
            return false;
        }
        let Some(offer) = self.offers.iter().find(|o| o.matches(&choice)).cloned() else {
            warn!(?choice, "visitor choice does not match any offer");
            return false;
        };

        match &offer {
            Offer::Cash { cost, .. } => {
                player.cash = player.cash.saturating_sub(*cost);
            }
            Offer::Weapons { .. } => {
                player.weapons.clear();
            }
            Offer::Property { property_id, .. } => {
                let Some(idx) = player.properties.iter().position(|p| p.id == *property_id) else {
                    warn!(property_id, "offered property is no longer owned");
                    return false;
                };
                player.properties.remove(idx);
            }
        }
        player.set_heat(player.global_heat - offer.heat_reduction() as f64);

        info!(?choice, heat = player.global_heat, "visitor trade accepted");
        self.close(now);
        true
    }

    /// Dismiss the intervention without a trade.
    pub fn end(&mut self, now: Millis) -> bool {
        if !self.active {
            return false;
        }
        info!("visitor dismissed");
        self.close(now);
        true
    }

    /// Repair a loaded state that waits on a choice without being active.
    /// Returns whether anything changed.
    pub fn normalize(&mut self) -> bool {
        if self.active || !self.pending_choice {
            return false;
        }
        warn!("dropping pending visitor choice with no active visit");
        self.pending_choice = false;
        self.offers.clear();
        self.snapshot = None;
        true
    }

    fn close(&mut self, now: Millis) {
        self.active = false;
        self.pending_choice = false;
        self.offers.clear();
        self.snapshot = None;
        self.last_resolved_at = Some(now);
        self.last_resolved_lockdown_id = self.lockdown_id;
        self.cooldown_until = now + VISITOR_COOLDOWN_MS;
    }
}
