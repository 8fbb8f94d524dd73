mod data_block;
mod load_error;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Question(question) => quiz::render(frame, area, question),
        Screen::Results(results) => result::render(frame, area, results),
        Screen::LoadFailed(message) => load_error::render(frame, area, message),
    }
}
