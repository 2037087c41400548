//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;

use iced::window;

use crate::core::playback::VictoryPlayer;
use crate::core::score::{ScoreController, Step};

/// App state: one controller for the one screen.
pub(crate) struct Contest {
    pub controller: ScoreController<VictoryPlayer>,

    /// Where the recreation bundle is written on close.
    pub state_file: PathBuf,
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Buttons
    Step(Step),
    Restart,

    // Sound engine polling (only while the fanfare plays)
    TickSound,

    // Window is about to go away: save + release
    CloseRequested(window::Id),
}
