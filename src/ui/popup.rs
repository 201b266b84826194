/// Popup UI for the stream viewer extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::bridge::BrowserBridge;
use crate::config::ApiConfig;
use crate::dispatcher::{Activation, LinkDispatcher};
use crate::error::FetchError;
use crate::fetcher::StreamerFetcher;
use crate::renderer::render;
use crate::settings::{LinkTarget, Preferences, SettingsStore};
use crate::snapshot::StreamListSnapshot;
use crate::ui::components::{FetchErrorNotice, RunnerCount, SettingsPanel};
use crate::ui::stream_list::StreamList;
use patternfly_yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum AppState {
    Loading,
    Loaded(StreamListSnapshot),
    Error(FetchError),
}

impl From<Result<StreamListSnapshot, FetchError>> for AppState {
    fn from(result: Result<StreamListSnapshot, FetchError>) -> Self {
        match result {
            Ok(snapshot) => AppState::Loaded(snapshot),
            Err(e) => {
                log::warn!("Stream fetch failed: {}", e);
                AppState::Error(e)
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading);
    let prefs = use_state(Preferences::default);
    let offer_insecure_link = use_state(|| true);
    let fetcher = use_memo((), |_| StreamerFetcher::new(ApiConfig::default()));

    // Fetch the stream list on open
    {
        let state = state.clone();
        let fetcher = fetcher.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                state.set(AppState::from(fetcher.fetch(&BrowserBridge).await));
            });
            || ()
        });
    }

    // Reflect stored preferences into the controls
    {
        let prefs = prefs.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = SettingsStore::new(BrowserBridge).load().await;
                prefs.set(loaded);
            });
            || ()
        });
    }

    let on_fullscreen = {
        let prefs = prefs.clone();
        Callback::from(move |fullscreen: bool| {
            prefs.set(Preferences { fullscreen, ..*prefs });
            spawn_local(async move {
                SettingsStore::new(BrowserBridge).set_fullscreen(fullscreen).await;
            });
        })
    };

    let on_link_target = {
        let prefs = prefs.clone();
        Callback::from(move |open_links_with: LinkTarget| {
            prefs.set(Preferences { open_links_with, ..*prefs });
            spawn_local(async move {
                SettingsStore::new(BrowserBridge).set_open_links_with(open_links_with).await;
            });
        })
    };

    let on_activate = {
        let prefs = prefs.clone();
        Callback::from(move |activation: Activation| {
            LinkDispatcher::new(BrowserBridge).activate(&activation, &prefs);
        })
    };

    let on_open_endpoint = {
        let offer_insecure_link = offer_insecure_link.clone();
        Callback::from(move |endpoint: String| {
            offer_insecure_link.set(false);
            LinkDispatcher::new(BrowserBridge).activate(&Activation::TextLink { href: endpoint }, &Preferences::default());
        })
    };

    html! {
        <div id="wrap">
            <div id="main">
                <div class="container">
                    <SettingsPanel prefs={*prefs} on_fullscreen={on_fullscreen} on_link_target={on_link_target} />
                    {match &*state {
                        AppState::Loading => html! {
                            <div class="loading-text-center">
                                <Spinner />
                                <p class="loading-text">{"Loading streams..."}</p>
                            </div>
                        },
                        AppState::Loaded(snapshot) => html! {
                            <>
                                <RunnerCount count={snapshot.len()} />
                                <StreamList items={render(snapshot)} on_activate={on_activate} />
                            </>
                        },
                        AppState::Error(err) => html! {
                            <FetchErrorNotice
                                error={err.clone()}
                                offer_insecure_link={*offer_insecure_link}
                                on_open_endpoint={on_open_endpoint}
                            />
                        },
                    }}
                </div>
            </div>
        </div>
    }
}
