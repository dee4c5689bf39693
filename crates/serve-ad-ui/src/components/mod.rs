//! Reusable UI components.

mod layout;
mod link;
mod video_player;

pub use layout::{Layout, NavBar};
pub use link::Link;
pub use video_player::VideoPlayer;
