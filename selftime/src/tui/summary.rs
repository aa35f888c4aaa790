//! Summary panel - total time, item coverage and the largest item.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{gauge_bar, severity_color, CAUTION_AMBER, HUD_GREEN, INFO_DIM};
use crate::analysis::{format_percentage, Ranking};

/// Summary panel - totals and coverage of the charted items
pub struct SummaryPanel {
    total_time_seconds: f64,
    shown_items: usize,
    total_items: usize,
    shown_percentage: f64,
    truncated: bool,
    largest: Option<(String, f64)>,
}

impl SummaryPanel {
    pub fn new(ranking: &Ranking) -> Self {
        Self {
            total_time_seconds: ranking.total_time_seconds,
            shown_items: ranking.items.len(),
            total_items: ranking.total_items,
            shown_percentage: ranking.shown_percentage(),
            truncated: ranking.is_truncated(),
            largest: ranking.items.first().map(|item| (item.label.clone(), item.percentage)),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![];

        lines.push(Line::from(vec![
            Span::styled(" Total   ", Style::default().fg(INFO_DIM)),
            Span::styled(format!("{:.3}s", self.total_time_seconds), Style::default().fg(HUD_GREEN)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" Items   ", Style::default().fg(INFO_DIM)),
            Span::styled(
                format!("{}/{}", self.shown_items, self.total_items),
                Style::default().fg(HUD_GREEN),
            ),
        ]));
        lines.push(Line::from(""));

        // How much of the total the chart accounts for
        lines.push(Line::from(Span::styled(" Shown", Style::default().fg(INFO_DIM))));
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(gauge_bar(self.shown_percentage, 10), Style::default().fg(HUD_GREEN)),
            Span::styled(
                format!(" {}", format_percentage(self.shown_percentage)),
                Style::default().fg(HUD_GREEN),
            ),
        ]));
        lines.push(Line::from(""));

        if let Some((ref label, percentage)) = self.largest {
            let color = severity_color(percentage);
            lines.push(Line::from(Span::styled(" Largest", Style::default().fg(INFO_DIM))));
            lines.push(Line::from(Span::styled(
                format!(" {label}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!(" {}", format_percentage(percentage)),
                Style::default().fg(color),
            )));
        }

        let border_color = if self.truncated { CAUTION_AMBER } else { HUD_GREEN };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Summary")
                .border_style(Style::default().fg(border_color)),
        );

        f.render_widget(paragraph, area);
    }
}
