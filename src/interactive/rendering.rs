//! TUI rendering with ratatui
//!
//! Panels for the ladder so far, the move budget, obstacles and hints.

use super::app::{App, InputMode, MessageStyle};
use crate::core::letter_change;
use crate::output::formatters::{ladder_line, obstacle_summary};
use crate::session::{GameStatus, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.snapshot.as_ref().map_or_else(
        || "🪜 WORD LADDER".to_string(),
        |s| {
            format!(
                "🪜 WORD LADDER  {} → {}",
                s.start_word.to_uppercase(),
                s.target_word.to_uppercase()
            )
        },
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Ladder word with the letter changed from `previous` in bold yellow
fn ladder_word(previous: Option<&str>, word: &str, step: usize) -> Line<'static> {
    let changed = previous
        .and_then(|prev| letter_change(prev, word))
        .map(|change| change.position);

    let mut spans = vec![Span::styled(
        format!("{step:>2}. "),
        Style::default().fg(Color::DarkGray),
    )];
    spans.extend(word.to_uppercase().chars().enumerate().map(|(i, c)| {
        if Some(i) == changed {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(c.to_string())
        }
    }));
    Line::from(spans)
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let Some(snapshot) = &app.snapshot else {
        let paragraph = Paragraph::new("Press 1, 2 or 3 to start a puzzle").block(
            Block::default()
                .title(" Ladder ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = snapshot
        .path
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let previous = i.checked_sub(1).map(|p| snapshot.path[p].as_str());
            ladder_word(previous, word, i)
        })
        .collect();

    if snapshot.status == GameStatus::Playing {
        lines.push(Line::from(Span::styled(
            "     ⋮",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(vec![
            Span::styled("Target: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.target_word.to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let color = match snapshot.status {
        GameStatus::Playing => Color::White,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Ladder ({}) ", snapshot.status))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Moves gauge
            Constraint::Length(4),      // Obstacles
            Constraint::Percentage(40), // Hint
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    if let Some(snapshot) = &app.snapshot {
        render_moves(f, snapshot, chunks[0]);
        render_obstacles(f, snapshot, chunks[1]);
    }
    render_hint(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_moves(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let percent = if snapshot.max_moves == 0 {
        100
    } else {
        (snapshot.moves_used * 100 / snapshot.max_moves).min(100) as u16
    };
    let color = if snapshot.moves_remaining() <= 1 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Moves ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{}/{} used | {} left",
            snapshot.moves_used,
            snapshot.max_moves,
            snapshot.moves_remaining()
        ));
    f.render_widget(gauge, area);
}

fn render_obstacles(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let summary = obstacle_summary(&snapshot.banned_words, &snapshot.restricted_letters);
    let paragraph = Paragraph::new(summary)
        .style(Style::default().fg(Color::Magenta))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Obstacles ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = app.last_hint.as_ref().map_or_else(
        || vec![Line::from("Press ? for a hint, ! for the full ladder")],
        |hint| {
            let mut lines = vec![Line::from(vec![
                Span::raw("Next: "),
                Span::styled(
                    hint.next_word
                        .as_deref()
                        .map_or_else(|| "-".to_string(), str::to_uppercase),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];
            lines.push(Line::from(hint.explanation.clone()));
            if let Some(path) = &hint.full_path {
                lines.push(Line::from(ladder_line(path.words())));
            }
            lines
        },
    );

    let title = format!(" Hint ({}) ", app.game.hint_algorithm().label());
    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::Finished => (
            " Press 'n' for a new game, 1/2/3 to pick a tier, or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Typing => (
            " Type the next word and press Enter ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

    let tier = Paragraph::new(format!("Tier: {}", app.difficulty)).alignment(Alignment::Center);
    f.render_widget(tier, chunks[0]);

    let algorithm = Paragraph::new(format!("Hints: {}", app.game.hint_algorithm().name()))
        .alignment(Alignment::Center);
    f.render_widget(algorithm, chunks[1]);

    let stats = app.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        if stats.total_games > 0 {
            stats.games_won as f64 / stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc: Quit | ?/!: Hint | Tab: Algorithm | 1-3: New")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
