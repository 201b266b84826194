/// Game blacklist applied before a runner is displayed
///
/// Matching follows the SRL blacklist: an entry excludes any game whose title
/// contains it, ignoring case. Channels with no declared game are shown.
use regex::RegexSet;
use std::sync::LazyLock;

pub struct BlacklistEntry {
    pub game: &'static str,
    /// Runner allowed to stream this game anyway
    pub allowed_runner: Option<&'static str>,
}

const fn banned(game: &'static str) -> BlacklistEntry {
    BlacklistEntry {
        game,
        allowed_runner: None,
    }
}

pub const BLACKLIST: &[BlacklistEntry] = &[
    banned("Age of Empires"),
    banned("Audiosurf"),
    banned("beatmania"),
    banned("Dance Dance Revolution"),
    banned("DayZ"),
    banned("Diablo"),
    banned("Dota 2"),
    banned("Guild Wars"),
    banned("Guitar Hero"),
    banned("Heroes of Newerth"),
    banned("iDOLM@STER"),
    banned("M@STER"),
    banned("Idolmaster"),
    banned("League of Legends"),
    banned("Mario Party"),
    banned("Minecraft"),
    banned("Osu!"),
    banned("Ragnarok Online"),
    banned("Rock Band"),
    banned("RuneScape"),
    BlacklistEntry {
        game: "Starcraft",
        allowed_runner: Some("Raelcun"),
    },
    banned("StepMania"),
    banned("Super Smash Bros"),
    banned("Team Fortress"),
    banned("Terraria"),
    banned("Total Annihilation"),
    banned("Warcraft"),
    banned("Worms"),
];

static BLACKLIST_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(
        BLACKLIST
            .iter()
            .map(|entry| format!("(?i){}", regex::escape(entry.game))),
    )
    .expect("blacklist patterns are escaped literals")
});

/// Decide whether a channel playing `game` should be hidden
pub fn is_excluded(game: Option<&str>, runner_name: &str) -> bool {
    let Some(game) = game else {
        return false;
    };

    BLACKLIST_SET
        .matches(game)
        .iter()
        .any(|index| BLACKLIST[index].allowed_runner != Some(runner_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_excluded() {
        for entry in BLACKLIST {
            assert!(
                is_excluded(Some(entry.game), "somebody"),
                "{} should be excluded",
                entry.game
            );
        }
    }

    #[test]
    fn test_starcraft_exception() {
        assert!(!is_excluded(Some("Starcraft"), "Raelcun"));
        assert!(!is_excluded(Some("StarCraft: Brood War"), "Raelcun"));
        assert!(is_excluded(Some("Starcraft"), "raelcun"));
        assert!(is_excluded(Some("Starcraft"), "someone_else"));
    }

    #[test]
    fn test_exception_does_not_cover_other_entries() {
        assert!(is_excluded(Some("Warcraft III"), "Raelcun"));
    }

    #[test]
    fn test_null_game_is_shown() {
        assert!(!is_excluded(None, "anyone"));
        assert!(!is_excluded(None, "Raelcun"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(is_excluded(Some("MINECRAFT"), "runner"));
        assert!(is_excluded(Some("Super Mario Party"), "runner"));
        assert!(is_excluded(Some("Diablo II: Lord of Destruction"), "runner"));
    }

    #[test]
    fn test_allowed_games() {
        assert!(!is_excluded(Some("Super Mario 64"), "runner"));
        assert!(!is_excluded(Some("The Legend of Zelda: Ocarina of Time"), "runner"));
        assert!(!is_excluded(Some(""), "runner"));
    }
}
