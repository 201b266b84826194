/// Resolve clicks in the stream list to tab URLs
use crate::settings::{LinkTarget, Preferences};
use url::Url;

pub const TWITCH_BASE: &str = "https://www.twitch.tv/";
pub const HITBOX_BASE: &str = "https://www.hitbox.tv/";
/// SpeedRunsLive's in-site stream page, addressed through the fragment
pub const SRL_STREAM_BASE: &str = "http://www.speedrunslive.com/#!/";

const POPOUT_SUFFIX: &str = "/popout/";

/// Streaming site a channel lives on, from its `api` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSite {
    Twitch,
    Hitbox,
}

impl StreamSite {
    pub fn from_api(api: &str) -> StreamSite {
        match api.to_ascii_lowercase().as_str() {
            "twitch" => StreamSite::Twitch,
            "hitbox" => StreamSite::Hitbox,
            other => {
                log::warn!("Unknown stream api '{}', treating as twitch", other);
                StreamSite::Twitch
            }
        }
    }

    fn base(&self) -> &'static str {
        match self {
            StreamSite::Twitch => TWITCH_BASE,
            StreamSite::Hitbox => HITBOX_BASE,
        }
    }

    fn supports_popout(&self) -> bool {
        matches!(self, StreamSite::Twitch)
    }
}

/// What the user clicked
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// A streamer row
    Streamer { name: String, api: String },
    /// An anchor inside a stream title
    TextLink { href: String },
}

/// URL to open for an activation, or `None` for links that are not web pages
pub fn resolve_target(activation: &Activation, prefs: &Preferences) -> Option<String> {
    match activation {
        Activation::Streamer { name, api } => Some(streamer_url(name, StreamSite::from_api(api), prefs)),
        Activation::TextLink { href } => Url::parse(href)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .map(String::from),
    }
}

fn streamer_url(name: &str, site: StreamSite, prefs: &Preferences) -> String {
    let popout = match prefs.open_links_with {
        LinkTarget::Srl => return format!("{}{}", SRL_STREAM_BASE, name),
        LinkTarget::Popout => true,
        LinkTarget::Twitch => prefs.fullscreen,
    };

    if popout && site.supports_popout() {
        format!("{}{}{}", site.base(), name, POPOUT_SUFFIX)
    } else {
        format!("{}{}", site.base(), name)
    }
}

/// Opens URLs in the extension's stream tab
pub trait TabOpener {
    fn open_url(&self, url: &str);
}

pub struct LinkDispatcher<O> {
    opener: O,
}

impl<O: TabOpener> LinkDispatcher<O> {
    pub fn new(opener: O) -> Self {
        LinkDispatcher { opener }
    }

    /// Open the tab for a click. Returns the URL opened, if any.
    pub fn activate(&self, activation: &Activation, prefs: &Preferences) -> Option<String> {
        let Some(url) = resolve_target(activation, prefs) else {
            log::warn!("Ignoring activation with no openable target: {:?}", activation);
            return None;
        };

        log::debug!("Opening {}", url);
        self.opener.open_url(&url);
        Some(url)
    }
}
