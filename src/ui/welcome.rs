use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

const KEY_HINTS: [(&str, &str); 4] = [
    ("j/k ↑/↓", "choose an option"),
    ("1-9", "jump to an option"),
    ("enter", "submit, then continue"),
    ("q", "quit at any time"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [_, panel, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12 + KEY_HINTS.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, panel, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(64),
        Constraint::Fill(1),
    ])
    .areas(panel);

    let mut lines = vec![
        Line::from(""),
        Line::from(app.title().to_uppercase()).style(Style::default().fg(Color::Cyan).bold()),
        Line::from(""),
        Line::from(format!(
            "{} questions across {} units",
            app.question_count(),
            app.unit_count()
        ))
        .style(Style::default().fg(Color::Gray)),
        Line::from("Questions that share a table or dataset are asked together.")
            .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
    ];
    lines.extend(KEY_HINTS.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("{keys:>8}  "), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::DarkGray)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ENTER to begin",
        Style::default().fg(Color::Green).bold(),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, panel);
}
