//! gui/subscription.rs
//! Always listen for close requests; poll sound events only while the fanfare plays.

use iced::{Subscription, time, window};
use std::time::Duration;

use super::state::{Contest, Message};
use crate::core::score::VictorySound;

const SOUND_POLL_MS: u64 = 200;

pub(crate) fn subscription(state: &Contest) -> Subscription<Message> {
    let close = window::close_requests().map(Message::CloseRequested);

    let playing = state
        .controller
        .sound()
        .is_some_and(VictorySound::is_playing);
    if !playing {
        return close;
    }

    Subscription::batch([
        close,
        time::every(Duration::from_millis(SOUND_POLL_MS)).map(|_| Message::TickSound),
    ])
}
