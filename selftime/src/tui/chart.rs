//! Chart panel - horizontal bars of self-time per item.
//!
//! # Rendering Pattern
//!
//! One line per item, bars scaled against the largest self-time:
//! ```text
//!  typeck            ████████████████████   412.31 ms  41.23%
//!  mir_borrowck      ████████▊              180.02 ms  18.00%
//! ```
//!
//! With the cumulative-rescale series enabled (`r`), each item gets a second,
//! dimmed line holding its rescaled value on the same axis.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use super::theme::{bar, severity_color, CAUTION_AMBER, HUD_GREEN, INFO_DIM, RESCALED_CYAN, SEL_LEFT, SEL_RIGHT};
use crate::analysis::{format_percentage, RankedItem, Ranking};

/// Rows moved by PageUp / PageDown
const PAGE_STEP: usize = 10;

/// Longest label shown before truncation
const MAX_LABEL_WIDTH: usize = 48;

/// Columns used by everything except the label and the bar:
/// borders, selection markers, spacing, "123456.78 ms" and "100.00%"
const FIXED_COLUMNS: usize = 2 + 2 + 3 + 13 + 8;

// Pure data operations (filtering logic separated from UI state)

/// Truncate a label for display, adding "..." if too long
fn truncate_for_display(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Filter items by label (case-insensitive substring match)
fn filter_by_label(items: &[RankedItem], query: &str) -> Vec<RankedItem> {
    match query {
        "" => items.to_vec(),
        q => {
            let query_lower = q.to_lowercase();
            items.iter().filter(|i| i.label.to_lowercase().contains(&query_lower)).cloned().collect()
        }
    }
}

/// Calculate scroll offset to keep selected item visible
fn visible_scroll_offset(selected: usize, current_offset: usize, visible_count: usize) -> usize {
    if selected >= current_offset + visible_count {
        selected.saturating_sub(visible_count - 1)
    } else {
        current_offset.min(selected)
    }
}

/// How many items fit in the area (borders and header line excluded)
fn visible_item_count(area: Rect, total_items: usize, lines_per_item: usize) -> usize {
    let available_height = area.height.saturating_sub(3) as usize;
    (available_height / lines_per_item).max(1).min(total_items.max(1))
}

/// Pad `s` with spaces up to `width` characters
fn pad_to(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

/// Horizontal bar chart of ranked items.
///
/// Keeps the unfiltered list so a search can be cleared, and scales every
/// bar against the largest item of the whole ranking so filtering never
/// changes bar lengths.
pub struct ChartView {
    /// First visible item index
    scroll_offset: usize,
    /// Currently highlighted item
    pub selected_index: usize, // Public for testing
    /// Displayed items (may be a filtered subset)
    pub items: Vec<RankedItem>, // Public for testing
    all_items: Vec<RankedItem>,
    filter_active: bool,
    show_rescaled: bool,
    max_ms: f64,
}

impl ChartView {
    #[must_use]
    pub fn new(ranking: &Ranking) -> Self {
        Self {
            scroll_offset: 0,
            selected_index: 0,
            items: ranking.items.clone(),
            all_items: ranking.items.clone(),
            filter_active: false,
            show_rescaled: false,
            max_ms: ranking.max_self_time_ms(),
        }
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(self.selected_index);
    }

    pub fn scroll_down(&mut self) {
        self.selected_index = (self.selected_index + 1).min(self.items.len().saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_STEP);
        self.scroll_offset = self.scroll_offset.min(self.selected_index);
    }

    pub fn page_down(&mut self) {
        self.selected_index =
            (self.selected_index + PAGE_STEP).min(self.items.len().saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.items.len().saturating_sub(1);
    }

    #[must_use]
    pub fn get_selected(&self) -> Option<&RankedItem> {
        self.items.get(self.selected_index)
    }

    pub fn apply_filter(&mut self, query: &str) {
        if query.is_empty() {
            self.clear_filter();
            return;
        }
        self.items = filter_by_label(&self.all_items, query);
        self.filter_active = true;
        self.select_first();
    }

    pub fn clear_filter(&mut self) {
        self.items = self.all_items.clone();
        self.filter_active = false;
        self.select_first();
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filter_active
    }

    pub fn toggle_rescaled(&mut self) {
        self.show_rescaled = !self.show_rescaled;
    }

    #[must_use]
    pub fn shows_rescaled(&self) -> bool {
        self.show_rescaled
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let inner_width = area.width as usize;
        let label_width = self
            .items
            .iter()
            .map(|i| i.label.chars().count())
            .max()
            .unwrap_or(0)
            .clamp("Item".len(), MAX_LABEL_WIDTH)
            .min(inner_width / 3);
        let bar_width = inner_width.saturating_sub(label_width + FIXED_COLUMNS).max(1);

        let lines_per_item = if self.show_rescaled { 2 } else { 1 };
        let display_count = visible_item_count(area, self.items.len(), lines_per_item);
        let scroll_offset =
            visible_scroll_offset(self.selected_index, self.scroll_offset, display_count);

        let mut lines = vec![Line::from(vec![
            Span::raw("  "),
            Span::styled(
                pad_to("Item", label_width),
                Style::default().fg(INFO_DIM).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("Milliseconds", Style::default().fg(INFO_DIM).add_modifier(Modifier::BOLD)),
        ])];

        for (display_idx, item) in
            self.items.iter().skip(scroll_offset).take(display_count).enumerate()
        {
            let is_selected = scroll_offset + display_idx == self.selected_index;
            lines.push(self.render_item_line(item, is_selected, label_width, bar_width));
            if self.show_rescaled {
                lines.push(self.render_rescaled_line(item, label_width, bar_width));
            }
        }

        if self.items.is_empty() {
            lines.push(Line::from(Span::styled("  no items", Style::default().fg(INFO_DIM))));
        }

        let title = if self.filter_active {
            format!(
                "[ Time spent in each item {}/{} ]",
                self.items.len(),
                self.all_items.len()
            )
        } else {
            "[ Time spent in each item ]".to_string()
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .title(title)
                .title_bottom(Line::from(" Milliseconds ").alignment(Alignment::Right))
                .border_style(Style::default().fg(HUD_GREEN)),
        );

        f.render_widget(paragraph, area);
    }

    fn fraction(&self, value_ms: f64) -> f64 {
        if self.max_ms > 0.0 {
            value_ms / self.max_ms
        } else {
            0.0
        }
    }

    fn render_item_line(
        &self,
        item: &RankedItem,
        is_selected: bool,
        label_width: usize,
        bar_width: usize,
    ) -> Line<'static> {
        let (sel_l, sel_r) = if is_selected { (SEL_LEFT, SEL_RIGHT) } else { (" ", " ") };
        let color = severity_color(item.percentage);
        let label_style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(color)
        };
        let label = pad_to(&truncate_for_display(&item.label, label_width), label_width);
        let bar_text = pad_to(&bar(self.fraction(item.self_time_ms), bar_width), bar_width);

        Line::from(vec![
            Span::styled(sel_l, Style::default().fg(CAUTION_AMBER)),
            Span::raw(" "),
            Span::styled(label, label_style),
            Span::raw(" "),
            Span::styled(bar_text, Style::default().fg(color)),
            Span::styled(format!(" {:>9.2} ms", item.self_time_ms), Style::default().fg(INFO_DIM)),
            Span::styled(format!(" {:>7}", format_percentage(item.percentage)), Style::default().fg(color)),
            Span::styled(sel_r, Style::default().fg(CAUTION_AMBER)),
        ])
    }

    fn render_rescaled_line(&self, item: &RankedItem, label_width: usize, bar_width: usize) -> Line<'static> {
        let bar_text = pad_to(&bar(self.fraction(item.rescaled_ms), bar_width), bar_width);
        Line::from(vec![
            Span::raw("  "),
            Span::raw(" ".repeat(label_width)),
            Span::raw(" "),
            Span::styled(bar_text, Style::default().fg(RESCALED_CYAN).add_modifier(Modifier::DIM)),
            Span::styled(format!(" {:>9.2} ms", item.rescaled_ms), Style::default().fg(RESCALED_CYAN)),
        ])
    }
}
