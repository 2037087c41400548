//! gui/update/score.rs
//! Button handlers. All rules live in `ScoreController`; this just forwards.

use iced::Task;

use super::super::state::{Contest, Message};
use crate::core::score::Step;

pub(crate) fn step(state: &mut Contest, step: Step) -> Task<Message> {
    state.controller.step(step);
    Task::none()
}

pub(crate) fn restart(state: &mut Contest) -> Task<Message> {
    state.controller.reset();
    Task::none()
}
