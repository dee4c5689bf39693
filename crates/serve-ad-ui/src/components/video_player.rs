//! Video player component.
//!
//! Every instance reads the application-wide `PlayerOptions` installed by the
//! video player plugin, so views only pass the sources to play.

use leptos::html::Video;
use leptos::prelude::*;
use serve_ad_core::{PlayerOptions, VideoSource};

/// An HTML5 video player configured from the global player options.
#[component]

pub fn VideoPlayer(
    /// Sources to offer, in order of preference.
    sources: Vec<VideoSource>,
    /// Optional caption shown above the player.
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let options = use_context::<PlayerOptions>().unwrap_or_else(|| {
        leptos::logging::warn!("Video player plugin not registered, using defaults");
        PlayerOptions::default()
    });
    let video_ref = NodeRef::<Video>::new();

    let on_rate_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<f64>() {
            Ok(rate) => {
                if let Some(video) = video_ref.get() {
                    video.set_playback_rate(rate);
                }
            }
            Err(_) => leptos::logging::warn!("Ignoring invalid playback rate: {}", value),
        }
    };

    let rates = options.playback_rates.clone();

    view! {
        <div class="video-player" class:fluid=options.fluid data-testid="video-player">
            {title.map(|title| view! { <h3 class="video-player-title">{title}</h3> })}
            <video
                node_ref=video_ref
                controls=options.controls
                autoplay=options.autoplay
                muted=options.muted
                loop=options.loop_playback
                playsinline=true
                preload=options.preload.as_attr()
                poster=options.poster.clone()
            >
                {sources
                    .into_iter()
                    .map(|source| view! { <source src=source.src type=source.mime_type /> })
                    .collect_view()}
                "Your browser does not support HTML5 video."
            </video>
            <label class="video-player-rate">
                "Speed "
                <select on:change=on_rate_change>
                    {rates
                        .into_iter()
                        .map(|rate| {
                            let is_normal_speed = (rate - 1.0).abs() < f64::EPSILON;
                            view! {
                                <option value=rate.to_string() selected=is_normal_speed>
                                    {format!("{rate}x")}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
