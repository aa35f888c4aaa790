//! # Terminal User Interface (TUI)
//!
//! Interactive bar chart of a [`Ranking`] using `ratatui`.
//!
//! ## Layout
//!
//! ```text
//! ┌ SELFTIME | profile.json | 12.345s | 50/1234 items ──────────────┐
//! ┌ Summary ─────┐┌ [ Time spent in each item ] ──────────────────────┐
//! │ Total  ...   ││ Item            Milliseconds                      │
//! │ Items  ...   ││ typeck          ███████████████  412.31 ms 41.23% │
//! └──────────────┘└───────────────────────────────────── Milliseconds ┘
//! ┌ Q:Quit /:Search R:Cumulative ?:Help  #1 typeck ... ──────────────┐
//! ```
//!
//! ## View Modes
//!
//! - **Chart** - bar list with keyboard scrolling (default)
//! - **Search** - text input filtering items by label
//! - **Help** - keyboard shortcuts overlay
//!
//! `App::run()` blocks until the user quits, then restores the terminal.

// Overlay builders are long lists of styled lines
#![allow(clippy::too_many_lines)]

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

pub mod chart; // Public for testing
mod summary;
mod theme;

use chart::ChartView;
use summary::SummaryPanel;
use theme::{CAUTION_AMBER, HUD_GREEN, INFO_DIM, RESCALED_CYAN};

use crate::analysis::{format_percentage, Ranking};
use crate::domain::TuiError;

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(HUD_GREEN).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
const STYLE_KEY: Style = Style::new().fg(CAUTION_AMBER);
const STYLE_TEXT: Style = Style::new().fg(ratatui::style::Color::White);

/// Input poll interval; the loop redraws at least this often
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// =============================================================================
// VIEW MODES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Chart,
    Search,
    Help,
}

// =============================================================================
// APP
// =============================================================================

/// Interactive chart of a ranked profile.
///
/// Create with `App::new()` and start with `App::run()`.
pub struct App {
    ranking: Ranking,
    source: String,

    summary_panel: SummaryPanel,
    chart_view: ChartView,

    view_mode: ViewMode,
    search_query: String,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ranking: Ranking, source: impl Into<String>) -> Self {
        let summary_panel = SummaryPanel::new(&ranking);
        let chart_view = ChartView::new(&ranking);

        Self {
            ranking,
            source: source.into(),
            summary_panel,
            chart_view,
            view_mode: ViewMode::Chart,
            search_query: String::new(),
            should_quit: false,
        }
    }

    /// True once the user asked to close the chart
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Read-only access to the chart panel state
    #[must_use]
    pub fn chart(&self) -> &ChartView {
        &self.chart_view
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.view_mode {
            ViewMode::Chart => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.chart_view.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.chart_view.scroll_down(),
                KeyCode::PageUp => self.chart_view.page_up(),
                KeyCode::PageDown => self.chart_view.page_down(),
                KeyCode::Home => self.chart_view.select_first(),
                KeyCode::End => self.chart_view.select_last(),
                KeyCode::Char('/') => {
                    self.search_query.clear();
                    self.view_mode = ViewMode::Search;
                }
                KeyCode::Char('c' | 'C') => {
                    self.search_query.clear();
                    self.chart_view.clear_filter();
                }
                KeyCode::Char('r' | 'R') => self.chart_view.toggle_rescaled(),
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                _ => {}
            },
            ViewMode::Help => {
                // Any key closes help
                self.view_mode = ViewMode::Chart;
            }
            ViewMode::Search => match key {
                KeyCode::Esc => {
                    self.search_query.clear();
                    self.view_mode = ViewMode::Chart;
                    self.chart_view.clear_filter();
                }
                KeyCode::Enter => {
                    self.view_mode = ViewMode::Chart;
                    self.chart_view.apply_filter(&self.search_query);
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                }
                KeyCode::Char(c) => self.search_query.push(c),
                _ => {}
            },
        }
    }

    /// Draw the whole screen into `f`
    pub fn draw(&self, f: &mut Frame) {
        let outer_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Summary | Chart
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled("SELFTIME", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(self.source.clone(), Style::new().fg(CAUTION_AMBER)),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(
                format!("{:.3}s", self.ranking.total_time_seconds),
                Style::new().fg(HUD_GREEN),
            ),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(
                format!("{}/{} items", self.ranking.items.len(), self.ranking.total_items),
                Style::new().fg(HUD_GREEN),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(HUD_GREEN)));
        f.render_widget(header, outer_layout[0]);

        let main_area = outer_layout[1];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25), // Summary panel
                Constraint::Percentage(75), // Chart panel
            ])
            .split(main_area);

        self.summary_panel.render(f, cols[0]);
        self.chart_view.render(f, cols[1]);

        match self.view_mode {
            ViewMode::Search => render_search_overlay(f, main_area, &self.search_query),
            ViewMode::Help => render_help_overlay(f, main_area),
            ViewMode::Chart => {}
        }

        let status = Paragraph::new(vec![self.status_line()])
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(HUD_GREEN)));
        f.render_widget(status, outer_layout[2]);
    }

    /// Key hints plus details of the highlighted item
    fn status_line(&self) -> Line<'static> {
        match self.view_mode {
            ViewMode::Chart => {
                let mode = if self.chart_view.is_filtered() {
                    Span::styled("[Filtered] ", Style::default().fg(CAUTION_AMBER))
                } else {
                    Span::styled("[Ready] ", Style::default().fg(HUD_GREEN))
                };
                let mut spans = vec![
                    Span::styled("Q", STYLE_KEY),
                    Span::styled(":Quit ", STYLE_DIM),
                    Span::styled("/", STYLE_KEY),
                    Span::styled(":Search ", STYLE_DIM),
                    Span::styled("R", STYLE_KEY),
                    Span::styled(":Cumulative ", STYLE_DIM),
                    Span::styled("?", STYLE_KEY),
                    Span::styled(":Help ", STYLE_DIM),
                    mode,
                ];
                if let Some(item) = self.chart_view.get_selected() {
                    spans.push(Span::styled(
                        format!("{} {} ", item.rank, item.label),
                        Style::default().fg(HUD_GREEN),
                    ));
                    spans.push(Span::styled(
                        format!("{:.2} ms {}", item.self_time_ms, format_percentage(item.percentage)),
                        STYLE_TEXT,
                    ));
                    if let Some(count) = item.invocation_count {
                        spans.push(Span::styled(format!(" x{count}"), STYLE_DIM));
                    }
                    if self.chart_view.shows_rescaled() {
                        spans.push(Span::styled(
                            format!(" cumulative {:.2} ms", item.rescaled_ms),
                            Style::default().fg(RESCALED_CYAN),
                        ));
                    }
                }
                Line::from(spans)
            }
            ViewMode::Search => Line::from(vec![
                Span::styled("Enter", STYLE_KEY),
                Span::styled(":Apply ", STYLE_DIM),
                Span::styled("ESC", STYLE_KEY),
                Span::styled(":Cancel ", STYLE_DIM),
                Span::styled("[Search]", Style::default().fg(CAUTION_AMBER)),
            ]),
            ViewMode::Help => Line::from(vec![
                Span::styled("Any key", STYLE_KEY),
                Span::styled(":Close ", STYLE_DIM),
                Span::styled("[Help]", Style::default().fg(HUD_GREEN)),
            ]),
        }
    }

    /// Run the chart until the user quits
    ///
    /// # Errors
    /// Returns an error if terminal setup or rendering fails
    pub fn run(mut self) -> Result<(), TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore the terminal even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), TuiError> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

// =============================================================================
// OVERLAYS
// =============================================================================

fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let height = height_lines.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_search_overlay(f: &mut Frame, area: Rect, query: &str) {
    let popup_area = centered_popup(area, 60, 3);

    let search_widget = Paragraph::new(format!("Search: {query}_"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter Items")
                .style(Style::default().bg(ratatui::style::Color::Black).fg(HUD_GREEN)),
        )
        .style(Style::default().fg(CAUTION_AMBER));

    f.render_widget(Clear, popup_area);
    f.render_widget(search_widget, popup_area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 18);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", STYLE_HEADING)),
        Line::from(Span::styled(
            "  Items ranked by self-time: time spent in the item itself,",
            STYLE_DIM,
        )),
        Line::from(Span::styled("  not in the items it calls. Percentages are of total time.", STYLE_DIM)),
        Line::from(""),
        Line::from(Span::styled("  Cumulative Series", STYLE_HEADING)),
        Line::from(Span::styled(
            "  Remaining self-time below each item, scaled to the largest bar.",
            STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  ↑↓", STYLE_KEY),
            Span::styled(" Select   ", STYLE_TEXT),
            Span::styled("PgUp/PgDn", STYLE_KEY),
            Span::styled(" Page   ", STYLE_TEXT),
            Span::styled("Home/End", STYLE_KEY),
            Span::styled(" Jump", STYLE_TEXT),
        ]),
        Line::from(vec![
            Span::styled("  /", STYLE_KEY),
            Span::styled(" Search   ", STYLE_TEXT),
            Span::styled("C", STYLE_KEY),
            Span::styled(" Clear   ", STYLE_TEXT),
            Span::styled("R", STYLE_KEY),
            Span::styled(" Cumulative   ", STYLE_TEXT),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_TEXT),
        ]),
    ];

    let widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .style(Style::default().bg(ratatui::style::Color::Black).fg(HUD_GREEN)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank_items;
    use crate::profile_data::{ProfileRecord, ProfileReport};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let report = ProfileReport {
            total_time_seconds: 10.0,
            records: vec![
                ProfileRecord { label: "a".into(), self_time_seconds: 5.0, invocation_count: None },
                ProfileRecord { label: "b".into(), self_time_seconds: 3.0, invocation_count: Some(2) },
            ],
        };
        App::new(rank_items(&report, 50), "profile.json")
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let text: String =
            terminal.backend().buffer().content().iter().map(ratatui::buffer::Cell::symbol).collect();
        text
    }

    #[test]
    fn test_draw_shows_percentages() {
        let text = screen_text(&app());
        assert!(text.contains("Time spent in each item"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("30.00%"));
        assert!(text.contains("profile.json"));
    }

    #[test]
    fn test_quit_keys() {
        for key in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut chart = app();
            assert!(!chart.should_quit());
            chart.handle_key(key);
            assert!(chart.should_quit());
        }
    }

    #[test]
    fn test_search_flow_filters_chart() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        app.handle_key(KeyCode::Char('b'));
        app.handle_key(KeyCode::Enter);
        assert!(app.chart().is_filtered());
        assert_eq!(app.chart().items.len(), 1);
        app.handle_key(KeyCode::Char('c'));
        assert!(!app.chart().is_filtered());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_rescaled_toggle_renders_cumulative() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        let text = screen_text(&app);
        assert!(text.contains("cumulative"));
    }
}
