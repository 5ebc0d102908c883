#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::records::*;
    use crate::state::GameStateSnapshot;
    use crate::types::{cooldown_ready, Bounds};

    #[test]
    fn test_enemy_kind_serde_is_snake_case() {
        let json = serde_json::to_string(&EnemyKind::Demolisher).unwrap();
        assert_eq!(json, "\"demolisher\"");
        for kind in EnemyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
            assert_eq!(EnemyKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(EnemyKind::parse("ninja"), None);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSession,
            PlayerCommand::MovePlayer { dx: 1.0, dy: -0.5 },
            PlayerCommand::UseAbility {
                ability: AbilityKind::Grenade,
            },
            PlayerCommand::Purchase {
                item: ShopItem::Turret,
                at: Some(Vec2::new(10.0, 20.0)),
            },
            PlayerCommand::AcceptOffer {
                choice: OfferChoice::Property { property_id: 3 },
            },
            PlayerCommand::SetLockdown { until: Some(99) },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_purchase_command_position_is_optional() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Purchase","item":"barricade"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::Purchase {
                item: ShopItem::Barricade,
                at: None
            }
        );
    }

    #[test]
    fn test_offer_choice_matching() {
        let offer = Offer::Property {
            property_id: 7,
            name: "Laundromat".into(),
            heat_reduction: 12,
        };
        assert!(offer.matches(&OfferChoice::Property { property_id: 7 }));
        assert!(!offer.matches(&OfferChoice::Property { property_id: 8 }));
        assert!(!offer.matches(&OfferChoice::Cash));
        assert_eq!(offer.heat_reduction(), 12);
    }

    #[test]
    fn test_lockdown_id_only_inside_window() {
        let city = CityState {
            lockdown: true,
            lockdown_until: Some(5_000),
        };
        assert_eq!(city.lockdown_id(4_999), Some(5_000));
        assert_eq!(city.lockdown_id(5_000), None);

        let lifted = CityState {
            lockdown: false,
            lockdown_until: Some(5_000),
        };
        assert_eq!(lifted.lockdown_id(1_000), None);
    }

    #[test]
    fn test_heat_is_clamped() {
        let mut player = PlayerRecord::default();
        player.set_heat(140.0);
        assert_eq!(player.global_heat, 100.0);
        player.set_heat(-3.0);
        assert_eq!(player.global_heat, 0.0);
        player.set_heat(f64::NAN);
        assert_eq!(player.global_heat, 0.0);
    }

    #[test]
    fn test_player_record_tolerates_missing_fields() {
        let player: PlayerRecord = serde_json::from_str(r#"{"cash": 1200}"#).unwrap();
        assert_eq!(player.cash, 1200);
        assert!(player.weapons.is_empty());
        assert_eq!(player.global_heat, 0.0);
    }

    #[test]
    fn test_wave_state_defaults() {
        let wave: WaveState = serde_json::from_str("{}").unwrap();
        assert_eq!(wave.phase, WavePhase::Preparing);
        assert_eq!(wave.player_hp, 100);
        assert_eq!(wave.damage_multiplier, 1.0);
    }

    #[test]
    fn test_defense_spec_is_tagged() {
        let defense = PlacedDefense {
            id: 1,
            position: Vec2::new(5.0, 5.0),
            hp: 150.0,
            max_hp: 150.0,
            spec: DefenseSpec::Barricade(Barricade {
                width: 80.0,
                height: 20.0,
                slow_factor: 0.3,
            }),
        };
        let json = serde_json::to_string(&defense).unwrap();
        assert!(json.contains("\"type\":\"barricade\""));
        let back: PlacedDefense = serde_json::from_str(&json).unwrap();
        assert_eq!(defense, back);
    }

    #[test]
    fn test_cooldown_gate() {
        assert!(cooldown_ready(None, 0, 1_000));
        assert!(!cooldown_ready(Some(500), 1_499, 1_000));
        assert!(cooldown_ready(Some(500), 1_500, 1_000));
        // A clock that went backwards never underflows.
        assert!(!cooldown_ready(Some(2_000), 1_000, 1));
    }

    #[test]
    fn test_bounds_helpers() {
        let b = Bounds::centered(Vec2::new(100.0, 100.0), Vec2::new(80.0, 20.0)).padded(10.0);
        assert!(b.contains(Vec2::new(145.0, 115.0)));
        assert!(!b.contains(Vec2::new(151.0, 100.0)));
        assert_eq!(b.clamp(Vec2::new(0.0, 300.0)), Vec2::new(50.0, 120.0));
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"session\":null"));
        let events = vec![GameEvent::warning("Not enough cash")];
        let json = serde_json::to_string(&events).unwrap();
        assert!(json.contains("Notification"));
    }
}
