//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a three-row split: a header banner that is always shown,
//!   the body, and a one-line status bar.
//! * The body is one of three stateless branches (loading, error, post
//!   list) or empty, chosen by [`crate::view::ViewController::state`].
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::post::BlogPost;
use crate::view::ViewState;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(app, frame, header_area);

    match app.view.state() {
        ViewState::Fetching => draw_loading(frame, body_area),
        ViewState::Error(message) => draw_error(message, frame, body_area),
        ViewState::Loaded(posts) => draw_posts(posts, &mut app.list_state, frame, body_area),
        ViewState::Idle => {}
    }

    draw_status_bar(app, frame, status_area);
}

/// Render the banner shown above every branch.
fn draw_header(app: &App, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Blog posts",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(&app.url, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the loading indicator.
fn draw_loading(frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(24)])
        .flex(Flex::Center)
        .areas(row);

    let loading = Paragraph::new("Fetching data…")
        .centered()
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, cell);
}

/// Render a single error message.
fn draw_error(message: &str, frame: &mut Frame, area: Rect) {
    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(error, area);
}

/// Render the scrollable post list, in sequence order.
fn draw_posts(posts: &[BlogPost], state: &mut ListState, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("#{:<4}", post.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        &post.title,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("      {}", post.text.replace('\n', " ")),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(" Posts ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.view.posts().map_or(0, |posts| posts.len());
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(format!("{count} posts"), Style::default().fg(Color::Green)),
        Span::raw("  q: quit  ↑/↓: scroll  Home/End: jump"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
