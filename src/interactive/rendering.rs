//! TUI rendering with ratatui
//!
//! Layout for the guessing game: history, proximity meter, best scores.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Difficulty, Proximity, Trend, Verdict, closeness_percent};
use crate::output::formatters::proximity_icon;
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

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // History
            Constraint::Percentage(50), // Meter, scores, messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎲 GUESS THE NUMBER - {} (1-{})",
        app.difficulty,
        app.session.max_range()
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

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let (arrow, color) = match entry.verdict {
                Verdict::TooLow => ("⬆ higher", Color::Yellow),
                Verdict::TooHigh => ("⬇ lower", Color::Magenta),
                Verdict::Correct => ("✔ correct", Color::Green),
            };
            let proximity = Proximity::classify(entry.difference, app.session.max_range());

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>4}", entry.guess),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("{arrow:<10}"), Style::default().fg(color)),
                Span::raw(format!(
                    "{} {} away",
                    proximity_icon(proximity),
                    entry.difference
                )),
            ]))
        })
        .collect();

    let title = format!(" History ({} guesses) ", app.history.len());
    let history = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Proximity meter
            Constraint::Length(3), // Trend
            Constraint::Length(5), // Best scores
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_meter(f, app, chunks[0]);
    render_trend(f, app, chunks[1]);
    render_best_scores(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_meter(f: &mut Frame, app: &App, area: Rect) {
    let max_range = app.session.max_range();
    let (percent, label) = app.last_outcome.map_or_else(
        || (0, "No guesses yet".to_string()),
        |outcome| {
            let proximity = Proximity::classify(outcome.difference, max_range);
            (
                closeness_percent(outcome.difference, max_range),
                format!("{} {proximity}", proximity_icon(proximity)),
            )
        },
    );

    let color = match app.last_outcome.map(|o| Proximity::classify(o.difference, max_range)) {
        Some(Proximity::Exact) => Color::Green,
        Some(Proximity::VeryClose) => Color::Red,
        Some(Proximity::Close) => Color::Yellow,
        Some(Proximity::Far) | None => Color::Blue,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Proximity ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_trend(f: &mut Frame, app: &App, area: Rect) {
    let trend = app.trend();
    let (text, color) = match trend {
        Trend::Closer | Trend::Further | Trend::Same => (
            trend.message().unwrap_or_default().to_string(),
            if trend == Trend::Closer {
                Color::Red
            } else {
                Color::Cyan
            },
        ),
        Trend::Unknown => ("Make two guesses to see a trend".to_string(), Color::DarkGray),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().title(" Trend ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_best_scores(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let best = app
                .store
                .best(difficulty)
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            let style = if difficulty == app.difficulty {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{:<7} {best:>4}", difficulty.label()),
                style,
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Best Scores ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
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
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new round or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Your guess (1-{}) | Enter to submit ",
                app.session.max_range()
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Difficulty: {}", app.difficulty))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let attempts = Paragraph::new(format!("Attempts: {}", app.session.attempt_count()))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let average = if app.stats.rounds_won > 0 {
        format!(
            "Won: {} | Avg: {:.1}",
            app.stats.rounds_won,
            app.stats.total_attempts as f64 / app.stats.rounds_won as f64
        )
    } else {
        "Won: 0".to_string()
    };
    let stats = Paragraph::new(average).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round | TAB: Difficulty",
        InputMode::Guessing => "q: Quit | h: Hint | n: New | TAB: Difficulty",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::GameSession;
    use crate::scores::ScoreStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_round_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::new(Difficulty::Easy, dir.path().join("scores.json"))
            .with_seed(Some(5));
        let mut store = ScoreStore::new();
        store.record_win(Difficulty::Easy, 4);

        let mut app = App::new(config, store);
        app.session = GameSession::with_secret(50, 20);
        for code in [KeyCode::Char('3'), KeyCode::Char('0'), KeyCode::Enter] {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("GUESS THE NUMBER"));
        assert!(text.contains("History (1 guesses)"));
        assert!(text.contains("lower"));
        assert!(text.contains("Best Scores"));
        assert!(text.contains("Attempts: 1"));
    }
}
