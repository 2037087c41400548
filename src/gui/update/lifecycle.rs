//! gui/update/lifecycle.rs
//! Screen lifetime: boot (restore + acquire sound) and close (save + release).

use std::path::Path;

use iced::{Task, window};
use tracing::{debug, info, warn};

use super::super::state::{Contest, Message};
use crate::config::ContestConfig;
use crate::core::bundle::Bundle;
use crate::core::playback::{SoundAsset, VictoryPlayer};
use crate::core::score::ScoreController;

/// Build the initial state. Never fails: a bad bundle starts at 0, a bad
/// sound runs muted.
pub(crate) fn boot(config: &ContestConfig) -> Contest {
    info!("Screen created");

    let saved = if config.fresh {
        None
    } else {
        match Bundle::load(&config.state_file) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(
                    "Ignoring saved state at {}: {e}",
                    config.state_file.display()
                );
                None
            }
        }
    };

    let sound = if config.mute {
        info!("Victory sound muted");
        None
    } else {
        load_victory_sound(config.sound.as_deref())
    };

    Contest {
        controller: ScoreController::restore(saved.as_ref(), sound),
        state_file: config.state_file.clone(),
    }
}

fn load_victory_sound(path: Option<&Path>) -> Option<VictoryPlayer> {
    let asset = match path {
        Some(p) => SoundAsset::from_file(p),
        None => Ok(SoundAsset::bundled()),
    };

    match asset.and_then(VictoryPlayer::spawn) {
        Ok(player) => Some(player),
        Err(e) => {
            warn!("Victory sound unavailable, running muted: {e}");
            None
        }
    }
}

pub(crate) fn drain_sound_events(state: &mut Contest) -> Task<Message> {
    if let Some(player) = state.controller.sound_mut() {
        player.drain_events();
    }
    Task::none()
}

/// Save the bundle, release the sound, then exit.
pub(crate) fn close_requested(state: &mut Contest, id: window::Id) -> Task<Message> {
    debug!(?id, "Close requested");

    let mut bundle = Bundle::new();
    state.controller.save_instance_state(&mut bundle);
    if let Err(e) = bundle.store(&state.state_file) {
        warn!(
            "Could not save state to {}: {e}",
            state.state_file.display()
        );
    }

    state.controller.release_sound();
    iced::exit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::{MAX_SCORE, Phase, SCORE_KEY};

    fn config(dir: &tempfile::TempDir) -> ContestConfig {
        ContestConfig {
            state_file: dir.path().join("state.json"),
            sound: None,
            mute: true,
            fresh: false,
        }
    }

    #[test]
    fn boot_without_bundle_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let state = boot(&config(&dir));
        assert_eq!(state.controller.board().score(), 0);
        assert!(state.controller.sound().is_none());
    }

    #[test]
    fn boot_restores_saved_score() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let mut bundle = Bundle::new();
        bundle.put_int(SCORE_KEY, 7);
        bundle.store(&config.state_file).unwrap();

        let state = boot(&config);
        assert_eq!(state.controller.board().score(), 7);
        assert_eq!(state.controller.board().display(), "7");
    }

    #[test]
    fn boot_restores_a_win_as_locked() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let mut bundle = Bundle::new();
        bundle.put_int(SCORE_KEY, i32::from(MAX_SCORE));
        bundle.store(&config.state_file).unwrap();

        let state = boot(&config);
        assert_eq!(state.controller.board().phase(), Phase::Won);
        assert!(!state.controller.board().controls_enabled());
    }

    #[test]
    fn fresh_ignores_saved_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        let mut bundle = Bundle::new();
        bundle.put_int(SCORE_KEY, 7);
        bundle.store(&config.state_file).unwrap();
        config.fresh = true;

        assert_eq!(boot(&config).controller.board().score(), 0);
    }

    #[test]
    fn corrupt_bundle_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        std::fs::write(&config.state_file, "garbage").unwrap();

        assert_eq!(boot(&config).controller.board().score(), 0);
    }

    #[test]
    fn undecodable_sound_file_runs_muted() {
        let dir = tempfile::tempdir().unwrap();
        let sound = dir.path().join("victory.wav");
        std::fs::write(&sound, b"not a sound").unwrap();

        assert!(load_victory_sound(Some(&sound)).is_none());
        assert!(load_victory_sound(Some(&dir.path().join("missing.wav"))).is_none());
    }
}
