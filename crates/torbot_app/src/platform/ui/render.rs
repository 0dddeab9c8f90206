use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use torbot_core::{AppViewModel, FormView, LinkClass, ResultsView, ScreenView};

use super::UiState;

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Main content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0]);
    match &view.screen {
        ScreenView::Form(form) => draw_form(frame, form, chunks[1]),
        ScreenView::Results(results) => draw_results(frame, results, ui, chunks[1]),
    }
    draw_status_bar(frame, view, ui, chunks[2]);
    draw_footer(frame, view, chunks[3]);

    if let Some(message) = &view.notification {
        draw_notification(frame, message, frame.area());
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "TorBot",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(rounded_block().border_style(Style::default().fg(Color::Cyan)))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_form(frame: &mut Frame, form: &FormView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(form.operations.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let input_style = if form.submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let website = Paragraph::new(format!("{}_", form.target_url)).block(
        rounded_block()
            .title("Website")
            .border_style(input_style),
    );
    frame.render_widget(website, chunks[0]);

    let options: Vec<ListItem> = form
        .operations
        .iter()
        .map(|option| {
            let marker = if option.selected { "> " } else { "  " };
            let mut spans = vec![Span::raw(format!("{marker}{}", option.label))];
            if !option.operation.is_wired() {
                spans.push(Span::styled(
                    "  (not available yet)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let style = if option.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();
    frame.render_widget(
        List::new(options).block(rounded_block().title("Option")),
        chunks[1],
    );
}

fn draw_results(frame: &mut Frame, results: &ResultsView, ui: &UiState, area: Rect) {
    let items: Vec<ListItem> = results
        .rows
        .iter()
        .map(|row| {
            ListItem::new(format!("{}. {}", row.ordinal, row.link)).style(link_style(row.class))
        })
        .collect();

    let title = format!(
        "URLs found: {} ({} good, {} bad)",
        results.rows.len(),
        results.good,
        results.bad
    );
    let mut state = ListState::default().with_offset(ui.results_offset);
    frame.render_stateful_widget(
        List::new(items).block(rounded_block().title(title)),
        area,
        &mut state,
    );
}

fn link_style(class: LinkClass) -> Style {
    match class {
        LinkClass::Good => Style::default().fg(Color::Green),
        LinkClass::Bad => Style::default().fg(Color::Red),
    }
}

fn draw_status_bar(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let (phase, style) = match &view.screen {
        ScreenView::Form(form) if form.submitting => (
            "Submitting...",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        ScreenView::Form(_) => ("Editing", Style::default().fg(Color::Cyan)),
        ScreenView::Results(_) => ("Results", Style::default().fg(Color::Green)),
    };
    let status = Paragraph::new(format!("{phase} | endpoint: {}", ui.endpoint))
        .style(style)
        .block(rounded_block());
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let hints = if view.notification.is_some() {
        "Enter/Esc: dismiss"
    } else {
        match view.screen {
            ScreenView::Form(_) => "Type URL | Tab/Up/Down: option | Enter: submit | Esc: quit",
            ScreenView::Results(_) => "Enter/b: back | Up/Down/PgUp/PgDn: scroll | q: quit",
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_notification(frame: &mut Frame, message: &str, area: Rect) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title("Request failed")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block, popup);

    let text = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(text, popup.inner(Margin::new(2, 1)));
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// A rect of `percent_x` by `percent_y` centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
