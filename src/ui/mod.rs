use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NOTICE, TITLE, WELCOME};
use crate::theme::Theme;

// Resolve the palette once at first draw; overrides come from the config
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme(app: &App) -> &'static Theme {
    THEME.get_or_init(|| Theme::from_config(&app.config.theme))
}

/// Widest the card gets, matching the original's narrow centered column.
const CARD_MAX_WIDTH: u16 = 72;

pub fn draw(f: &mut Frame, app: &App) {
    let theme = theme(app);
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card, centered
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_card(f, theme, chunks[0]);
    draw_footer(f, theme, chunks[1]);
}

fn draw_card(f: &mut Frame, theme: &Theme, area: Rect) {
    let card_width = area.width.saturating_sub(4).min(CARD_MAX_WIDTH).max(20);
    let text_width = card_width.saturating_sub(4); // border + inner padding

    let welcome_rows = wrapped_rows(WELCOME, text_width);
    let notice_rows = wrapped_rows(NOTICE, text_width.saturating_sub(4));

    // borders + heading + spacer + welcome + spacer + notice box
    let card_height = 2 + 1 + 1 + welcome_rows + 1 + (notice_rows + 2);
    let card_area = centered_rect(area, card_width, card_height);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    f.render_widget(card, card_area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .vertical_margin(1)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(1),                // Heading
            Constraint::Length(1),                // Spacer
            Constraint::Length(welcome_rows),     // Welcome sentence
            Constraint::Length(1),                // Spacer
            Constraint::Length(notice_rows + 2),  // Status notice box
        ])
        .split(card_area);

    let heading = Paragraph::new(Span::styled(
        TITLE,
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(heading, inner[0]);

    let welcome = Paragraph::new(Span::styled(WELCOME, Style::default().fg(theme.text)))
        .wrap(Wrap { trim: true });
    f.render_widget(welcome, inner[2]);

    draw_notice_box(f, theme, inner[4]);
}

fn draw_notice_box(f: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.notice));

    let notice = Paragraph::new(Span::styled(NOTICE, Style::default().fg(theme.notice)))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(notice, area);
}

fn draw_footer(f: &mut Frame, theme: &Theme, area: Rect) {
    let hints: Vec<(&str, &str)> = vec![("q", "Quit"), ("Esc", "Quit")];

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows a greedily word-wrapped `text` occupies at `width` columns.
/// Callers size against a width slightly narrower than the real paragraph,
/// which absorbs the extra column of wide graphemes like the rocket.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    let mut rows: u16 = 1;
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if col == 0 {
            col = len.min(width);
        } else if col + 1 + len <= width {
            col += 1 + len;
        } else {
            rows += 1;
            col = len.min(width);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn test_app() -> App {
        App {
            config: AppConfig::default(),
        }
    }

    fn render(width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        terminal.draw(|f| draw(f, &app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_card_copy() {
        let text = buffer_text(&render(100, 30));
        assert!(text.contains("Life Rhythm"));
        assert!(text.contains(
            "Welcome to your personal task and event tracking application."
        ));
        assert!(text.contains("🚀"));
        assert!(text.contains("Project initialized successfully! Ready for development."));
    }

    #[test]
    fn renders_copy_on_small_terminal() {
        // Sentences wrap, but every word still lands in the buffer
        let text = buffer_text(&render(40, 20));
        assert!(text.contains("Life Rhythm"));
        for word in WELCOME.split_whitespace() {
            assert!(text.contains(word), "missing {:?}", word);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();

        terminal.draw(|f| draw(f, &app)).unwrap();
        let first = terminal.backend().buffer().clone();

        terminal.draw(|f| draw(f, &app)).unwrap();
        let second = terminal.backend().buffer().clone();

        assert_eq!(first, second);
    }

    #[test]
    fn wrapped_rows_counts_greedy_wrap() {
        assert_eq!(wrapped_rows("one two three", 20), 1);
        assert_eq!(wrapped_rows("one two three", 7), 2);
        assert_eq!(wrapped_rows("one two three", 3), 3);
        assert_eq!(wrapped_rows(WELCOME, 68), 1);
    }
}
