use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::ResultsScreen;
use crate::results::{AnswerRecord, Grade, QuizResults};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, screen: &ResultsScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &screen.results);
    render_question_breakdown(frame, chunks[2], &screen.results, screen.scroll);
    render_controls(frame, chunks[3]);
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::A => Color::Green,
        Grade::B => Color::Cyan,
        Grade::C => Color::Yellow,
        Grade::D => Color::LightRed,
        Grade::F => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, results: &QuizResults) {
    let color = grade_color(results.grade);
    let missed = results.total - results.score;

    let content = vec![
        Line::from(""),
        Line::from("QUIZ COMPLETE").style(Style::default().fg(Color::Cyan).bold()),
        Line::from(""),
        Line::from(format!("{:.1}%  ·  Grade {}", results.percentage, results.grade))
            .style(Style::default().fg(color).bold()),
        Line::from(vec![
            Span::styled(format!("{} correct", results.score), Style::default().fg(Color::Green)),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{missed} missed"), Style::default().fg(Color::Red)),
            Span::styled(
                format!("  ·  {} total", results.total),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn breakdown_line(answer: &AnswerRecord) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:>3}. ", answer.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<width$}", truncate_question(&answer.prompt), width = QUESTION_PREVIEW_LENGTH + 3),
            Style::default().fg(Color::Gray),
        ),
    ];
    if answer.is_correct {
        spans.push(Span::styled(
            format!("  ✓ {}", option_letter(answer.selected)),
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(
            format!("  ✗ {}", option_letter(answer.selected)),
            Style::default().fg(Color::Red),
        ));
        if let Some(correct) = answer.correct {
            spans.push(Span::styled(
                format!(" → {}", option_letter(correct)),
                Style::default().fg(Color::Green),
            ));
        }
    }
    Line::from(spans)
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, results: &QuizResults, scroll: usize) {
    let lines: Vec<Line> = if results.answers.is_empty() {
        vec![Line::from("No questions were answered.").style(Style::default().fg(Color::DarkGray))]
    } else {
        results.answers.iter().map(breakdown_line).collect()
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Answers ")
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

/// `0` → `A`, `1` → `B`, falling back to the number past `Z`.
fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
