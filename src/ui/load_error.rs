use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Min(9),
        Constraint::Percentage(30),
    ])
    .margin(2)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ERROR LOADING QUIZ DATA",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::LightRed))),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Q] to exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, chunks[1]);
}
