//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Contest, Message};

mod lifecycle;
mod score;

pub(crate) use lifecycle::boot;

pub(crate) fn update(state: &mut Contest, message: Message) -> Task<Message> {
    match message {
        // Buttons
        Message::Step(step) => score::step(state, step),
        Message::Restart => score::restart(state),

        // Sound
        Message::TickSound => lifecycle::drain_sound_events(state),

        // Window
        Message::CloseRequested(id) => lifecycle::close_requested(state, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bundle::Bundle;
    use crate::core::score::{MAX_SCORE, Phase, SCORE_KEY, ScoreController, Step, Tint};
    use iced::window;

    fn contest(dir: &tempfile::TempDir) -> Contest {
        Contest {
            controller: ScoreController::new(None),
            state_file: dir.path().join("state.json"),
        }
    }

    #[test]
    fn step_messages_drive_the_controller() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = contest(&dir);

        let _ = update(&mut state, Message::Step(Step::Add));
        let _ = update(&mut state, Message::Step(Step::Add));
        let _ = update(&mut state, Message::Step(Step::Subtract));

        assert_eq!(state.controller.board().score(), 1);
        assert_eq!(state.controller.board().display(), "1");
    }

    #[test]
    fn fifteen_adds_then_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = contest(&dir);

        for _ in 0..MAX_SCORE {
            let _ = update(&mut state, Message::Step(Step::Add));
        }
        assert_eq!(state.controller.board().phase(), Phase::Won);
        assert!(!state.controller.board().controls_enabled());

        let _ = update(&mut state, Message::Restart);
        assert_eq!(state.controller.board().score(), 0);
        assert_eq!(state.controller.board().tint(), Tint::Reset);
        assert!(state.controller.board().controls_enabled());
    }

    #[test]
    fn tick_without_sound_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = contest(&dir);
        let _ = update(&mut state, Message::TickSound);
        assert_eq!(state.controller.board().score(), 0);
    }

    #[test]
    fn close_request_writes_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = contest(&dir);
        for _ in 0..7 {
            let _ = update(&mut state, Message::Step(Step::Add));
        }

        let _ = update(&mut state, Message::CloseRequested(window::Id::unique()));

        let saved = Bundle::load(&state.state_file).unwrap().unwrap();
        assert_eq!(saved.get_int(SCORE_KEY, -1), 7);

        let recreated: ScoreController<crate::core::playback::VictoryPlayer> =
            ScoreController::restore(Some(&saved), None);
        assert_eq!(recreated.board().display(), "7");
    }
}
