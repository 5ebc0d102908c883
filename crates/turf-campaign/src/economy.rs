use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use turf_core::constants::{KILL_CASH_FRACTION, WAVE_CLEAR_BONUS_PER_WAVE};
use turf_core::enums::ShopItem;

/// Price and purchase cap of a shop item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub cost: u32,
    /// `None` for consumables that can be bought any number of times.
    pub max_purchases: Option<u32>,
}

pub fn item_spec(item: ShopItem) -> ItemSpec {
    let (cost, max_purchases) = match item {
        ShopItem::Health => (50, None),
        ShopItem::DamageBoost => (100, Some(4)),
        ShopItem::SpeedBoost => (80, Some(3)),
        ShopItem::Turret => (150, Some(4)),
        ShopItem::Barricade => (75, Some(6)),
        ShopItem::RepairBase => (100, None),
    };
    ItemSpec { cost, max_purchases }
}

/// Why a purchase did not go through. State is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRejection {
    InsufficientFunds { have: u32, need: u32 },
    SoldOut,
    /// The effect had nothing to do (e.g. healing at full hp).
    NotApplicable,
}

impl PurchaseRejection {
    pub fn message(&self, item: ShopItem) -> String {
        match self {
            Self::InsufficientFunds { have, need } => {
                format!("Not enough cash for {}: have {}, need {}", item.as_str(), have, need)
            }
            Self::SoldOut => format!("{} is sold out", item.as_str()),
            Self::NotApplicable => format!("{} would have no effect", item.as_str()),
        }
    }
}

/// Per-session purchase counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopLedger {
    purchases: BTreeMap<ShopItem, u32>,
}

impl ShopLedger {
    pub fn count(&self, item: ShopItem) -> u32 {
        self.purchases.get(&item).copied().unwrap_or(0)
    }

    pub fn has_capacity(&self, item: ShopItem) -> bool {
        match item_spec(item).max_purchases {
            Some(cap) => self.count(item) < cap,
            None => true,
        }
    }

    fn record(&mut self, item: ShopItem) {
        *self.purchases.entry(item).or_insert(0) += 1;
    }
}

/// Attempt a purchase. Funds and cap are checked first, then `apply` runs the
/// effect and reports whether it did anything. Cash is deducted and the ledger
/// incremented only when it did. Returns the cost paid.
pub fn try_purchase(
    ledger: &mut ShopLedger,
    cash: &mut u32,
    item: ShopItem,
    apply: impl FnOnce() -> bool,
) -> Result<u32, PurchaseRejection> {
    let spec = item_spec(item);
    if *cash < spec.cost {
        return Err(PurchaseRejection::InsufficientFunds {
            have: *cash,
            need: spec.cost,
        });
    }
    if !ledger.has_capacity(item) {
        return Err(PurchaseRejection::SoldOut);
    }
    if !apply() {
        return Err(PurchaseRejection::NotApplicable);
    }
    *cash -= spec.cost;
    ledger.record(item);
    debug!(item = item.as_str(), cost = spec.cost, remaining = *cash, "purchase recorded");
    Ok(spec.cost)
}

/// Shop cash for a kill: `round(score * 0.5 * loot)`.
pub fn kill_reward(score_value: u32, loot_multiplier: f32) -> u32 {
    (score_value as f32 * KILL_CASH_FRACTION * loot_multiplier).round() as u32
}

pub fn wave_clear_bonus(wave: u32) -> u32 {
    WAVE_CLEAR_BONUS_PER_WAVE * wave
}
