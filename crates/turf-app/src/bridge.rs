//! Line protocol on stdin: one JSON `PlayerCommand` per line, plus the bare
//! words `save` and `quit`.

use tracing::warn;

use crate::state::GameLoopCommand;

/// Parse one input line. Blank and malformed lines yield `None`; malformed
/// ones are logged.
pub fn parse_line(line: &str) -> Option<GameLoopCommand> {
    let line = line.trim();
    match line {
        "" => None,
        "save" => Some(GameLoopCommand::Save),
        "quit" | "exit" => Some(GameLoopCommand::Shutdown),
        json => match serde_json::from_str(json) {
            Ok(cmd) => Some(GameLoopCommand::Player(cmd)),
            Err(err) => {
                warn!(%err, line = json, "skipping malformed command");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turf_core::commands::PlayerCommand;
    use turf_core::enums::AbilityKind;

    #[test]
    fn parses_player_commands() {
        assert!(matches!(
            parse_line(r#"{"type":"StartSession"}"#),
            Some(GameLoopCommand::Player(PlayerCommand::StartSession))
        ));
        assert!(matches!(
            parse_line(r#"  {"type":"UseAbility","ability":"grenade"}  "#),
            Some(GameLoopCommand::Player(PlayerCommand::UseAbility { ability: AbilityKind::Grenade }))
        ));
    }

    #[test]
    fn control_words() {
        assert!(matches!(parse_line("save"), Some(GameLoopCommand::Save)));
        assert!(matches!(parse_line("quit\n"), Some(GameLoopCommand::Shutdown)));
    }

    #[test]
    fn junk_is_skipped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("{not json").is_none());
        assert!(parse_line(r#"{"type":"Teleport"}"#).is_none());
    }
}
