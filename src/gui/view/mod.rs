//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod widgets;

use iced::widget::{Container, column, container};
use iced::{Alignment, Length};

use super::state::{Contest, Message};
use constants::{PADDING, SECTION_SPACING};

pub(crate) fn view(state: &Contest) -> Container<'_, Message> {
    let board = state.controller.board();

    let content = column![
        widgets::score_label(),
        widgets::score_value(board),
        widgets::step_buttons(board),
        widgets::restart_button(),
    ]
    .spacing(SECTION_SPACING)
    .align_x(Alignment::Center);

    container(content)
        .padding(PADDING)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
}
