/// Map a snapshot to the list items shown in the popup
use crate::linkify::title_markup;
use crate::snapshot::StreamListSnapshot;

/// Everything the list needs to draw and activate one streamer
#[derive(Debug, Clone, PartialEq)]
pub struct StreamItem {
    pub name: String,
    pub api: String,
    pub display_name: String,
    pub avatar_url: String,
    pub viewers_label: String,
    /// Escaped, linkified title; safe to mount as markup
    pub title_html: String,
}

pub fn render(snapshot: &StreamListSnapshot) -> Vec<StreamItem> {
    snapshot
        .channels()
        .iter()
        .map(|channel| StreamItem {
            name: channel.name.clone(),
            api: channel.api.clone(),
            display_name: channel.label().to_string(),
            avatar_url: channel.avatar_url().to_string(),
            viewers_label: format!("{} viewers", channel.current_viewers),
            title_html: title_markup(&channel.title),
        })
        .collect()
}

pub fn runner_count_label(count: usize) -> String {
    match count {
        1 => "1 runner currently streaming".to_string(),
        n => format!("{} runners currently streaming", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::StreamsPayload;

    const FIXTURE: &str = r#"{
        "channels": [
            {"channel": {"name": "lowrunner", "display_name": "LowRunner", "title": "pb attempts",
                         "current_viewers": 10, "meta_game": "Super Metroid",
                         "image": {"size70": "https://img/low.png"}}},
            {"channel": {"name": "dancer", "display_name": "Dancer", "title": "ddr",
                         "current_viewers": 300, "meta_game": "Dance Dance Revolution",
                         "image": {"size70": "https://img/ddr.png"}}},
            {"channel": {"name": "highrunner", "display_name": "HighRunner",
                         "title": "rules at example.com", "current_viewers": 90,
                         "meta_game": "Ocarina of Time",
                         "image": {"size70": "https://img/high.png"}}}
        ]
    }"#;

    fn fixture_items() -> Vec<StreamItem> {
        let payload: StreamsPayload = serde_json::from_str(FIXTURE).unwrap();
        render(&StreamListSnapshot::build(payload.into_channels()))
    }

    #[test]
    fn test_render_filters_and_orders() {
        let items = fixture_items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "highrunner");
        assert_eq!(items[1].name, "lowrunner");
        assert!(items.iter().all(|item| item.name != "dancer"));
    }

    #[test]
    fn test_render_item_fields() {
        let items = fixture_items();
        let high = &items[0];

        assert_eq!(high.display_name, "HighRunner");
        assert_eq!(high.avatar_url, "https://img/high.png");
        assert_eq!(high.viewers_label, "90 viewers");
        assert_eq!(high.api, "twitch");
        assert_eq!(
            high.title_html,
            "<p>rules at <a href='http://example.com'>example.com</a></p>"
        );
    }

    #[test]
    fn test_runner_count_label() {
        assert_eq!(runner_count_label(0), "0 runners currently streaming");
        assert_eq!(runner_count_label(1), "1 runner currently streaming");
        assert_eq!(runner_count_label(12), "12 runners currently streaming");
    }
}
