/// Reusable UI components

use yew::prelude::*;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::error::FetchError;
use crate::renderer::runner_count_label;
use crate::settings::{LinkTarget, Preferences};

#[derive(Properties, PartialEq)]
pub struct RunnerCountProps {
    pub count: usize,
}

#[function_component(RunnerCount)]
pub fn runner_count(props: &RunnerCountProps) -> Html {
    html! {
        <div id="runnerCount">
            <h2>{runner_count_label(props.count)}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub prefs: Preferences,
    pub on_fullscreen: Callback<bool>,
    pub on_link_target: Callback<LinkTarget>,
}

/// Fullscreen checkbox plus the "open links with" radio group
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let on_fullscreen_change = {
        let on_fullscreen = props.on_fullscreen.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_fullscreen.emit(input.checked());
            }
        })
    };

    html! {
        <div class="settings">
            <label id="fullscreen">
                {"Fullscreen"}
                <input
                    id="fsButton"
                    type="checkbox"
                    checked={props.prefs.fullscreen}
                    onchange={on_fullscreen_change}
                />
            </label>
            <div class="open-links-with">
                {for LinkTarget::ALL.iter().map(|target| {
                    let target = *target;
                    let on_link_target = props.on_link_target.clone();
                    html! {
                        <label class="link-target">
                            <input
                                id={target.id()}
                                type="radio"
                                name="openLinksWith"
                                checked={props.prefs.open_links_with == target}
                                onchange={Callback::from(move |_: Event| on_link_target.emit(target))}
                            />
                            {target.label()}
                        </label>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FetchErrorNoticeProps {
    pub error: FetchError,
    /// Shown once; cleared after the user follows it
    pub offer_insecure_link: bool,
    pub on_open_endpoint: Callback<String>,
}

#[function_component(FetchErrorNotice)]
pub fn fetch_error_notice(props: &FetchErrorNoticeProps) -> Html {
    let prompt = props
        .error
        .insecure_endpoint()
        .filter(|_| props.offer_insecure_link)
        .map(|endpoint| {
            let endpoint = endpoint.to_string();
            let on_open_endpoint = props.on_open_endpoint.clone();
            let onclick = {
                let endpoint = endpoint.clone();
                Callback::from(move |_| on_open_endpoint.emit(endpoint.clone()))
            };
            html! {
                <div class="insecure-prompt">
                    <p class="message-text">
                        {"The stream list is served over plain HTTP and may be blocked. \
                          Open it directly to allow the connection, then reopen this popup."}
                    </p>
                    <Button onclick={onclick} variant={ButtonVariant::Secondary} block={true}>
                        {format!("Open {}", endpoint)}
                    </Button>
                </div>
            }
        });

    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Danger} title={"Could not load streams"} inline={true}>
                {props.error.to_string()}
            </Alert>
            {for prompt}
        </div>
    }
}
