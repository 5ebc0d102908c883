use serde::{Deserialize, Serialize};
use turf_core::enums::EnemyKind;

/// One line of a wave's composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveEntry {
    pub kind: EnemyKind,
    pub count: u32,
}

/// Hand-tuned opening waves: thug, runner, shooter, tank, demolisher.
const OPENING_WAVES: [[u32; 5]; 8] = [
    [5, 0, 0, 0, 0],
    [6, 2, 0, 0, 0],
    [6, 3, 1, 0, 0],
    [5, 4, 2, 0, 1],
    [6, 4, 3, 1, 1],
    [6, 5, 3, 2, 2],
    [7, 6, 4, 2, 2],
    [8, 6, 5, 3, 3],
];

/// Waves past this number stop growing.
const SCALING_CAP: u32 = 20;

/// Compose the enemy multiset for a wave. Wave 0 is treated as wave 1.
///
/// Waves 1-8 come from the opening table. Later waves scale with the wave
/// number (capped at 20) and drop thugs entirely. Zero-count entries from
/// the formula are kept; spawning them is a no-op.
pub fn compose_wave(wave: u32) -> Vec<WaveEntry> {
    let wave = wave.max(1);

    if let Some(row) = OPENING_WAVES.get(wave as usize - 1) {
        return EnemyKind::ALL
            .iter()
            .zip(row.iter())
            .filter(|(_, &count)| count > 0)
            .map(|(&kind, &count)| WaveEntry { kind, count })
            .collect();
    }

    let base = wave.min(SCALING_CAP) as f64;
    let scaled = |share: f64| (base * share).floor() as u32;
    vec![
        WaveEntry { kind: EnemyKind::Runner, count: scaled(0.30) },
        WaveEntry { kind: EnemyKind::Shooter, count: scaled(0.25) },
        WaveEntry { kind: EnemyKind::Tank, count: scaled(0.25) },
        WaveEntry { kind: EnemyKind::Demolisher, count: scaled(0.20) },
    ]
}

pub fn total_enemies(entries: &[WaveEntry]) -> u32 {
    entries.iter().map(|e| e.count).sum()
}
