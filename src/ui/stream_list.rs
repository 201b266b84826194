/// The streamer list mounted into `#streamList`

use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;
use crate::dispatcher::Activation;
use crate::renderer::StreamItem;

#[derive(Properties, PartialEq)]
pub struct StreamListProps {
    pub items: Vec<StreamItem>,
    pub on_activate: Callback<Activation>,
}

#[function_component(StreamList)]
pub fn stream_list(props: &StreamListProps) -> Html {
    html! {
        <div id="streamList">
            {for props.items.iter().map(|item| html! {
                <Streamer key={item.name.clone()} item={item.clone()} on_activate={props.on_activate.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StreamerProps {
    pub item: StreamItem,
    pub on_activate: Callback<Activation>,
}

#[function_component(Streamer)]
fn streamer(props: &StreamerProps) -> Html {
    let on_streamer_click = {
        let on_activate = props.on_activate.clone();
        let name = props.item.name.clone();
        let api = props.item.api.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_activate.emit(Activation::Streamer {
                name: name.clone(),
                api: api.clone(),
            });
        })
    };

    // Links inside the title open on their own and must not reach the row.
    let on_title_click = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            let href = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlAnchorElement>().ok())
                .map(|anchor| anchor.href());

            if let Some(href) = href {
                e.prevent_default();
                e.stop_propagation();
                on_activate.emit(Activation::TextLink { href });
            }
        })
    };

    let item = &props.item;

    html! {
        <div class="twitchstreamer" onclick={on_streamer_click}>
            <img class="ava" src={item.avatar_url.clone()} />
            <div class="streamerinfo">
                <span class="name">{&item.display_name}</span>
                <span class="viewers">{&item.viewers_label}<br /></span>
                <span class="description" onclick={on_title_click}>
                    {Html::from_html_unchecked(AttrValue::from(item.title_html.clone()))}
                </span>
            </div>
        </div>
    }
}
