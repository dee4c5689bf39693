//! Media-playback plugin.
//!
//! Registers default video player options as a global capability. Views
//! render the UI crate's player component, which picks these options up from
//! context, so no view configures playback on its own.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::plugin::{Capabilities, Plugin};

/// Default playback rates offered by the player.
pub const DEFAULT_PLAYBACK_RATES: [f64; 5] = [0.5, 1.0, 1.25, 1.5, 2.0];

/// How much of a video the browser should load ahead of playback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    /// Load the whole resource.
    #[default]
    Auto,
    /// Load metadata only.
    Metadata,
    /// Load nothing until playback starts.
    None,
}

impl Preload {
    /// The HTML `preload` attribute value.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Metadata => "metadata",
            Self::None => "none",
        }
    }
}

/// A playable media source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSource {
    /// Media URL.
    pub src: String,
    /// MIME type, e.g. `video/mp4`.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl VideoSource {
    /// Create a source.
    #[must_use]
    pub fn new(src: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Create an MP4 source.
    #[must_use]
    pub fn mp4(src: impl Into<String>) -> Self {
        Self::new(src, "video/mp4")
    }
}

/// Player options shared by every player instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerOptions {
    /// Show the native controls.
    pub controls: bool,
    /// Start playing as soon as possible.
    pub autoplay: bool,
    /// Start muted. Browsers only allow muted autoplay.
    pub muted: bool,
    /// Restart at the end.
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    /// Scale to the container width.
    pub fluid: bool,
    /// Preload strategy.
    pub preload: Preload,
    /// Playback rates offered to the viewer.
    pub playback_rates: Vec<f64>,
    /// Poster image shown before playback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            controls: true,
            autoplay: false,
            muted: false,
            loop_playback: false,
            fluid: true,
            preload: Preload::Auto,
            playback_rates: DEFAULT_PLAYBACK_RATES.to_vec(),
            poster: None,
        }
    }
}

impl PlayerOptions {
    /// Enable autoplay. Autoplay implies muted, as browsers require.
    #[must_use]
    pub const fn with_autoplay(mut self) -> Self {
        self.autoplay = true;
        self.muted = true;
        self
    }

    /// Set the poster image.
    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<()> {
        if self.playback_rates.is_empty() {
            return Err(Error::Configuration(
                "player.playback_rates must not be empty".to_string(),
            ));
        }
        if let Some(rate) = self
            .playback_rates
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0)
        {
            return Err(Error::Configuration(format!(
                "player.playback_rates contains invalid rate {rate}"
            )));
        }
        if self.autoplay && !self.muted {
            return Err(Error::Configuration(
                "player.autoplay requires player.muted".to_string(),
            ));
        }
        Ok(())
    }
}

/// Plugin registering [`PlayerOptions`] for every view.
#[derive(Debug, Clone, Default)]
pub struct VideoPlayerPlugin {
    options: PlayerOptions,
}

impl VideoPlayerPlugin {
    /// Create the plugin with the given defaults.
    #[must_use]
    pub const fn new(options: PlayerOptions) -> Self {
        Self { options }
    }
}

impl Plugin for VideoPlayerPlugin {
    fn name(&self) -> &'static str {
        "video-player"
    }

    fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
        self.options.validate()?;
        info!(
            controls = self.options.controls,
            autoplay = self.options.autoplay,
            preload = self.options.preload.as_attr(),
            "Installing video player"
        );
        capabilities.provide(self.options.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PlayerOptions::default();
        assert!(options.controls);
        assert!(!options.autoplay);
        assert_eq!(options.preload, Preload::Auto);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_autoplay_implies_muted() {
        let options = PlayerOptions::default().with_autoplay();
        assert!(options.muted);
        assert!(options.validate().is_ok());

        let options = PlayerOptions {
            autoplay: true,
            muted: false,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_invalid_rates() {
        let empty = PlayerOptions {
            playback_rates: vec![],
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let negative = PlayerOptions {
            playback_rates: vec![1.0, -1.0],
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: PlayerOptions =
            serde_json::from_str(r#"{"autoplay": true, "muted": true, "loop": true}"#)
                .expect("Should deserialize");
        assert!(options.loop_playback);
        assert!(options.controls);
        assert_eq!(options.playback_rates, DEFAULT_PLAYBACK_RATES.to_vec());
    }

    #[test]
    fn test_plugin_installs_options() {
        let mut caps = Capabilities::new();
        let plugin = VideoPlayerPlugin::new(PlayerOptions::default().with_poster("/poster.png"));
        plugin.install(&mut caps).expect("install");
        let options = caps.require::<PlayerOptions>().expect("options present");
        assert_eq!(options.poster.as_deref(), Some("/poster.png"));
    }

    #[test]
    fn test_plugin_rejects_invalid_options() {
        let mut caps = Capabilities::new();
        let plugin = VideoPlayerPlugin::new(PlayerOptions {
            playback_rates: vec![],
            ..Default::default()
        });
        assert!(plugin.install(&mut caps).is_err());
        assert!(caps.is_empty());
    }

    #[test]
    fn test_source_serde() {
        let json = serde_json::to_string(&VideoSource::mp4("/a.mp4")).expect("serialize");
        assert_eq!(json, r#"{"src":"/a.mp4","type":"video/mp4"}"#);
    }
}
