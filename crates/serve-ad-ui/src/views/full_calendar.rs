//! Video playlist page.

use leptos::prelude::*;
use serve_ad_core::VideoSource;

use crate::components::VideoPlayer;
use crate::routing::use_router;

/// Media file played by the playlist page, relative to the base path.
const PLAYLIST_MEDIA: &str = "media/playlist.mp4";

/// Playlist / calendar view with the global video player.
#[component]

pub fn FullCalendar() -> impl IntoView {
    let router = use_router();
    let src = format!("{}{PLAYLIST_MEDIA}", router.router().base());

    view! {
        <section class="page page-full-calendar" data-testid="view-full-calendar">
            <h1 class="page-title">"Video playlist"</h1>
            <VideoPlayer sources=vec![VideoSource::mp4(src)] title="Now playing" />
        </section>
    }
}
