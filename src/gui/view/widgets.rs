//! Small widgets for the single screen.

use iced::widget::{Button, Row, Text, button, container, row, text};
use iced::{Alignment, Color, Length};

use super::super::state::Message;
use super::constants::{
    BUTTON_TEXT, LABEL_TEXT, RESTART_BUTTON_W, SCORE_TEXT, STEP_BUTTON_W,
};
use crate::core::score::{ScoreBoard, Step, Tint};

pub(crate) fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Normal => Color::BLACK,
        Tint::Win => Color::from_rgb(0.0, 1.0, 0.0),
        Tint::Reset => Color::from_rgb(0.0, 0.0, 1.0),
    }
}

pub(crate) fn score_label() -> Text<'static> {
    text("Score").size(LABEL_TEXT)
}

pub(crate) fn score_value(board: &ScoreBoard) -> Text<'_> {
    text(board.display())
        .size(SCORE_TEXT)
        .color(tint_color(board.tint()))
}

/// "−" and "+". Both lose their on_press once the board is won.
pub(crate) fn step_buttons(board: &ScoreBoard) -> Row<'static, Message> {
    let subtract = step_button("−", Step::Subtract, board.controls_enabled());
    let add = step_button("+", Step::Add, board.controls_enabled());

    row![subtract, add]
        .spacing(24)
        .align_y(Alignment::Center)
}

fn centered_label(label: &'static str) -> iced::widget::Container<'static, Message> {
    container(text(label).size(BUTTON_TEXT)).center_x(Length::Fill)
}

fn step_button(label: &'static str, step: Step, enabled: bool) -> Button<'static, Message> {
    let btn = button(centered_label(label)).width(Length::Fixed(STEP_BUTTON_W));

    if enabled {
        btn.on_press(Message::Step(step))
    } else {
        btn
    }
}

pub(crate) fn restart_button() -> Button<'static, Message> {
    button(centered_label("Restart"))
        .width(Length::Fixed(RESTART_BUTTON_W))
        .on_press(Message::Restart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_map_to_black_green_blue() {
        assert_eq!(tint_color(Tint::Normal), Color::BLACK);
        assert_eq!(tint_color(Tint::Win), Color::from_rgb(0.0, 1.0, 0.0));
        assert_eq!(tint_color(Tint::Reset), Color::from_rgb(0.0, 0.0, 1.0));
    }
}
