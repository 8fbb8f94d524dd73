//! Shared dataset panel shown above the questions of a group.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Row, Table, Wrap},
};

use crate::models::{DataBlock, SharedData};

const MAX_TEXT_LINES: u16 = 6;

/// Rows needed to draw `data`, borders included. Zero when there is nothing to show.
pub fn height(data: Option<&SharedData>) -> u16 {
    let Some(block) = data.and_then(SharedData::block) else {
        return 0;
    };

    let inner = match &block {
        DataBlock::FrequencyTable { rows, note, .. } => {
            // header row + its bottom margin + body + optional note
            let body = u16::try_from(rows.len()).unwrap_or(u16::MAX);
            2u16.saturating_add(body)
                .saturating_add(u16::from(note.is_some()))
        }
        DataBlock::RawValues { .. } => 2,
        DataBlock::Text { content, .. } => {
            let lines = u16::try_from(content.lines().count()).unwrap_or(u16::MAX);
            lines.clamp(1, MAX_TEXT_LINES)
        }
    };
    inner.saturating_add(2)
}

pub fn render(frame: &mut Frame, area: Rect, data: &SharedData) {
    let Some(block) = data.block() else {
        return;
    };

    match block {
        DataBlock::FrequencyTable {
            title,
            headers,
            rows,
            note,
        } => render_table(frame, area, title, &headers, &rows, note),
        DataBlock::RawValues { title, values } => {
            let widget = Paragraph::new(values.join(", "))
                .wrap(Wrap { trim: true })
                .fg(Color::Yellow)
                .block(panel(title));
            frame.render_widget(widget, area);
        }
        DataBlock::Text { title, content } => {
            let widget = Paragraph::new(content)
                .wrap(Wrap { trim: true })
                .fg(Color::Gray)
                .block(panel(title));
            frame.render_widget(widget, area);
        }
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: &[String],
    rows: &[Vec<String>],
    note: Option<&str>,
) {
    let outer = panel(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(u16::from(note.is_some())),
    ])
    .split(inner);

    let columns = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0))
        .max(1);
    let widths = vec![Constraint::Fill(1); columns];

    let header = Row::new(headers.iter().map(String::as_str))
        .style(Style::default().fg(Color::Cyan).bold())
        .bottom_margin(1);
    let body: Vec<Row> = rows
        .iter()
        .map(|row| Row::new(row.iter().map(String::as_str)).style(Style::default().fg(Color::White)))
        .collect();

    frame.render_widget(Table::new(body, widths).header(header), chunks[0]);

    if let Some(note) = note {
        let widget = Paragraph::new(note).italic().fg(Color::DarkGray);
        frame.render_widget(widget, chunks[1]);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}
