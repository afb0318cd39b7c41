//! History tab: finished collections and their impact.

use crate::mock_data::{HistoryItem, HISTORY};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, list_state: &mut ListState) {
    let t = theme();
    let [title, list] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Donation History", t.title_style())),
        title.inner(Margin::new(2, 0)),
    );

    let items: Vec<ListItem> = HISTORY.iter().map(history_item).collect();
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
        list.inner(Margin::new(1, 0)),
        list_state,
    );
}

fn history_item(item: &HistoryItem) -> ListItem<'static> {
    let t = theme();
    ListItem::new(vec![
        Line::from(vec![
            Span::styled("✔ ", t.success_style()),
            Span::styled(item.donor_name, t.text_style().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled(item.impact, t.title_style()),
        ]),
        Line::from(Span::styled(
            format!("  {}", item.display_date()),
            t.muted_style(),
        )),
        Line::from(""),
    ])
}
