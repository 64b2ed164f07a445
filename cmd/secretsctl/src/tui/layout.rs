//! Panel layout.
//!
//! ```text
//! ┌ Secret Management System ────────────────────── Last refresh: 12:00:01 ┐
//! ├ Create Secret Request ─────────────────────────────────────────────────┤
//! │  Secret Name    db-prod                                                │
//! │  Type           < Database >                                           │
//! │  Justification  nightly backups                                        │
//! │  [ Create Request ]                                                    │
//! ├ Secret Requests ───────────────────────────────────────────────────────┤
//! │  ID  Secret Name  Type      Status   Created                           │
//! │  1   db-prod      database  pending  2024-01-01 00:00:00               │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use pkg_types::table::{HEADERS, rows};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use super::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Form
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_form(frame, chunks[1], app);
    render_table(frame, chunks[2], app);
    render_footer(frame, chunks[3]);
}

fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        " Secret Management System ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let status = match app.last_refresh {
        Some(time) => format!(" Last refresh: {} ", time.format("%H:%M:%S")),
        None => " No data ".to_string(),
    };
    let status = Span::styled(status, Style::default().fg(Color::DarkGray));

    let padding = area
        .width
        .saturating_sub((title.content.len() + status.content.len() + 2) as u16);
    let line = Line::from(vec![title, Span::raw(" ".repeat(padding as usize)), status]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border()),
    );
    frame.render_widget(header, area);
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!(" {:<15}", label), style)
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let draft = app.panel.draft();
    let focus = app.focus;
    let cursor = |f: Focus| if focus == f { "_" } else { "" };

    let type_value = if focus == Focus::SecretType {
        format!("< {} >", draft.secret_type.label())
    } else {
        draft.secret_type.label().to_string()
    };

    let submit_style = if focus == Focus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let lines = vec![
        Line::from(vec![
            field_label("Secret Name", focus == Focus::SecretName),
            Span::raw(format!("{}{}", draft.secret_name, cursor(Focus::SecretName))),
        ]),
        Line::from(vec![
            field_label("Type", focus == Focus::SecretType),
            Span::raw(type_value),
        ]),
        Line::from(vec![
            field_label("Justification", focus == Focus::Justification),
            Span::raw(format!(
                "{}{}",
                draft.justification,
                cursor(Focus::Justification)
            )),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Create Request ]", submit_style),
        ]),
    ];

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Create Secret Request ")
            .borders(Borders::ALL)
            .border_style(border()),
    );
    frame.render_widget(form, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let body: Vec<Row> = rows(app.panel.requests(), &Local)
        .into_iter()
        .map(|r| Row::new([r.id, r.secret_name, r.secret_type, r.status, r.created]))
        .collect();

    let table = Table::new(
        body,
        [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Secret Requests ")
            .borders(Borders::ALL)
            .border_style(border()),
    );
    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[←→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Type  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit  "),
        Span::styled("[Ctrl-R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Reload  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border()),
        )
        .centered();
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::{RequestId, SecretRequest};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Inner lines of the " Secret Requests " block, border stripped.
    fn table_lines(out: &str) -> Vec<String> {
        out.lines()
            .skip_while(|line| !line.contains(" Secret Requests "))
            .skip(1)
            .take_while(|line| !line.starts_with('└'))
            .map(|line| line.trim_matches(|c| c == '│' || c == ' ').to_string())
            .collect()
    }

    #[test]
    fn empty_listing_shows_headers_only() {
        let out = screen(&App::new());
        let table = table_lines(&out);
        assert!(table.len() >= 2);
        for heading in HEADERS {
            assert!(table[0].contains(heading), "missing {heading}: {}", table[0]);
        }
        assert!(table[1..].iter().all(|line| line.is_empty()));

        assert!(out.contains("[ Create Request ]"));
        assert!(out.contains("No data"));
    }

    #[test]
    fn listing_shows_record() {
        let mut app = App::new();
        app.panel.finish_load::<String>(Ok(vec![SecretRequest {
            id: RequestId::Int(1),
            secret_name: "db-prod".to_string(),
            secret_type: "database".to_string(),
            justification: "x".to_string(),
            status: "pending".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }]));
        let table = table_lines(&screen(&app));
        assert!(table[0].starts_with("ID"));
        assert!(table[1].starts_with('1'));
        assert!(table[1].contains("db-prod"));
        assert!(table[1].contains("database"));
        assert!(table[1].contains("pending"));
        assert!(table[2..].iter().all(|line| line.is_empty()));
    }
}
