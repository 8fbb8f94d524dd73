use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::QuestionScreen;
use crate::session::{AnswerFeedback, QuestionStep};

use super::data_block;

const OPTION_LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

pub fn render(frame: &mut Frame, area: Rect, screen: &QuestionScreen) {
    let step = screen.session.current_step();
    let feedback = screen.session.feedback();
    let has_footer = feedback.is_some() || screen.notice.is_some();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(data_block::height(step.data)),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(if has_footer { 5 } else { 0 }),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], &step);
    if let Some(data) = step.data {
        data_block::render(frame, chunks[1], data);
    }
    render_question_header(frame, chunks[2], &step);
    render_options(frame, chunks[3], step.options, screen.selected, feedback);

    if let Some(feedback) = feedback {
        render_feedback(frame, chunks[4], feedback);
    } else if let Some(notice) = &screen.notice {
        render_notice(frame, chunks[4], notice);
    }

    render_controls(frame, chunks[5], feedback, screen.notice.is_some());
}

fn render_progress(frame: &mut Frame, area: Rect, step: &QuestionStep<'_>) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    if let Some(label) = group_label(step) {
        frame.render_widget(Paragraph::new(label).fg(Color::Yellow), left);
    }

    let progress = format!("Question {} of {}", step.number, step.total);
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, right);
}

/// Marks the first question of a group that shares a dataset.
fn group_label(step: &QuestionStep<'_>) -> Option<&'static str> {
    (step.opens_group && step.data.is_some()).then_some("New dataset")
}

fn render_question_header(frame: &mut Frame, area: Rect, step: &QuestionStep<'_>) {
    let mut title = vec![Span::styled(
        format!("Q{}: {}", step.number, step.prompt),
        Style::default().fg(Color::White).bold(),
    )];
    if let Some(difficulty) = step.difficulty {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!("[{}]", difficulty.to_uppercase()),
            Style::default().fg(difficulty_color(difficulty)),
        ));
    }

    let content = vec![
        Line::from(Span::styled(step.unit, Style::default().fg(Color::Magenta))),
        Line::from(title),
    ];

    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: usize,
    feedback: Option<&AnswerFeedback>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let (marker, style) = option_style(index, selected, feedback);
        let label = OPTION_LABELS
            .get(index)
            .map_or_else(|| (index + 1).to_string(), char::to_string);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn option_style(index: usize, selected: usize, feedback: Option<&AnswerFeedback>) -> (&'static str, Style) {
    match feedback {
        Some(feedback) if feedback.correct_index == Some(index) => {
            ("✓", Style::default().fg(Color::Green).bold())
        }
        Some(feedback) if index == feedback.selected => ("✗", Style::default().fg(Color::Red).bold()),
        Some(_) => (" ", Style::default().fg(Color::DarkGray)),
        None if index == selected => (">", Style::default().fg(Color::Cyan).bold()),
        None => (" ", Style::default().fg(Color::Gray)),
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &AnswerFeedback) {
    let (heading, color) = if feedback.is_correct {
        ("Correct!", Color::Green)
    } else {
        ("Wrong!", Color::Red)
    };

    let widget = Paragraph::new(feedback.explanation.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {heading} "))
                .title_style(Style::default().fg(color).bold())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let widget = Paragraph::new(notice)
        .wrap(Wrap { trim: true })
        .fg(Color::Yellow)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, feedback: Option<&AnswerFeedback>, skippable: bool) {
    let hint = match feedback {
        Some(feedback) if feedback.is_last => "enter see final results  ·  q quit",
        Some(_) => "enter next question  ·  q quit",
        None if skippable => "enter skip question  ·  q quit",
        None => "j/k navigate  ·  enter select  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn difficulty_color(difficulty: &str) -> Color {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" => Color::Green,
        "medium" => Color::Yellow,
        "hard" => Color::Red,
        _ => Color::Blue,
    }
}
