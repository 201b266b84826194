/// Stream list snapshot: filtering and ordering of fetched channels
use crate::channel::ChannelRecord;
use crate::game_filter::is_excluded;
use std::cmp::Reverse;

/// Channels from one fetch, blacklist applied, most viewers first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamListSnapshot {
    channels: Vec<ChannelRecord>,
}

impl StreamListSnapshot {
    /// Build a snapshot from channels in payload order.
    ///
    /// The sort is stable, so channels with equal viewer counts keep the
    /// order the API listed them in.
    pub fn build(channels: Vec<ChannelRecord>) -> Self {
        let mut channels: Vec<ChannelRecord> = channels
            .into_iter()
            .filter(|channel| !is_excluded(channel.game.as_deref(), &channel.name))
            .collect();

        channels.sort_by_key(|channel| Reverse(channel.current_viewers));

        StreamListSnapshot { channels }
    }

    pub fn channels(&self) -> &[ChannelRecord] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelImage;

    fn create_test_channel(name: &str, viewers: u32, game: Option<&str>) -> ChannelRecord {
        ChannelRecord {
            name: name.to_string(),
            display_name: name.to_uppercase(),
            title: String::new(),
            current_viewers: viewers,
            game: game.map(str::to_string),
            image: ChannelImage::default(),
            api: "twitch".to_string(),
        }
    }

    fn names(snapshot: &StreamListSnapshot) -> Vec<&str> {
        snapshot.channels().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_viewers_descending() {
        let snapshot = StreamListSnapshot::build(vec![
            create_test_channel("small", 50, Some("Super Metroid")),
            create_test_channel("big", 200, Some("Super Metroid")),
        ]);

        assert_eq!(names(&snapshot), vec!["big", "small"]);
    }

    #[test]
    fn test_ties_keep_payload_order() {
        let snapshot = StreamListSnapshot::build(vec![
            create_test_channel("first", 10, None),
            create_test_channel("top", 99, None),
            create_test_channel("second", 10, None),
            create_test_channel("third", 10, None),
        ]);

        assert_eq!(names(&snapshot), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_excluded_games_removed() {
        let snapshot = StreamListSnapshot::build(vec![
            create_test_channel("crafter", 500, Some("Minecraft")),
            create_test_channel("runner", 20, Some("Super Mario Bros.")),
            create_test_channel("nogame", 5, None),
        ]);

        assert_eq!(names(&snapshot), vec!["runner", "nogame"]);
    }

    #[test]
    fn test_empty_input() {
        let snapshot = StreamListSnapshot::build(Vec::new());

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
