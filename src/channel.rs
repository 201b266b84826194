/// Data structures for the SpeedRunsLive streams payload
use serde::{Deserialize, Deserializer, Serialize};

/// One live broadcast as reported by the streams endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_viewers: u32,
    #[serde(default, rename = "meta_game")]
    pub game: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: ChannelImage,
    #[serde(default = "default_api", deserialize_with = "api_or_default")]
    pub api: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub size70: String,
}

fn default_api() -> String {
    "twitch".to_string()
}

// The API sends `null` for fields it has no value for; read those as absent.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn api_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_api))
}

impl ChannelRecord {
    /// Display name, falling back to the login name when the API sends none
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    pub fn avatar_url(&self) -> &str {
        &self.image.size70
    }
}

/// The two payload shapes the streams endpoint has served.
///
/// Variants are tried in order; a body matching neither is a decode error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StreamsPayload {
    /// `{"_source": {"channels": [{...}]}}` from `/frontend/streams`
    Indexed {
        #[serde(rename = "_source")]
        source: ChannelList,
    },
    /// `{"channels": [{"channel": {...}}]}` from the older `/test/team`
    Team { channels: Vec<TeamEntry> },
}

#[derive(Debug, Deserialize)]
pub struct ChannelList {
    pub channels: Vec<ChannelRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub channel: ChannelRecord,
}

impl StreamsPayload {
    /// Flatten either shape into channels, preserving payload order
    pub fn into_channels(self) -> Vec<ChannelRecord> {
        match self {
            StreamsPayload::Indexed { source } => source.channels,
            StreamsPayload::Team { channels } => {
                channels.into_iter().map(|entry| entry.channel).collect()
            }
        }
    }
}
