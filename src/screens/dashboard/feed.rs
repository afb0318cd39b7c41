//! Feed tab: greeting, stats and the donations nearby.

use crate::mock_data::{DonationItem, DONATIONS, FEED_STATS, NGO_PROFILE};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::widgets::Button;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

const GREETING_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, list_state: &mut ListState) {
    let t = theme();
    let [greeting, stats, title, list] = Layout::vertical([
        Constraint::Length(GREETING_HEIGHT),
        Constraint::Length(STATS_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let greeting_block = Block::default().style(t.brand_fill_style());
    let inner = greeting_block.inner(greeting);
    frame.render_widget(greeting_block, greeting);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(NGO_PROFILE.greeting()),
            Line::from(Span::styled(
                format!("⌖ {}", NGO_PROFILE.location),
                t.brand_fill_style().remove_modifier(Modifier::BOLD),
            )),
        ])
        .style(t.brand_fill_style()),
        inner.inner(Margin::new(2, 0)),
    );

    render_stats(frame, stats.inner(Margin::new(1, 0)));

    frame.render_widget(
        Paragraph::new(Span::styled("Available Donations Nearby", t.title_style())),
        title.inner(Margin::new(2, 0)),
    );

    let selected = list_state.selected();
    let items: Vec<ListItem> = DONATIONS
        .iter()
        .enumerate()
        .map(|(i, item)| donation_item(item, selected == Some(i)))
        .collect();
    let list_widget = List::new(items)
        .highlight_style(t.highlight_style())
        .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list_widget, list.inner(Margin::new(1, 0)), list_state);
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let t = theme();
    let constraints = FEED_STATS.iter().map(|_| Constraint::Fill(1));
    let cells = Layout::horizontal(constraints).spacing(2).split(area);
    for (stat, cell) in FEED_STATS.iter().zip(cells.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(stat.value, t.title_style())),
            Line::from(Span::styled(stat.label, t.muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_style()),
        );
        frame.render_widget(card, *cell);
    }
}

fn donation_item(item: &DonationItem, selected: bool) -> ListItem<'static> {
    let t = theme();
    let diet_style = if item.is_veg {
        t.success_style()
    } else {
        t.error_style()
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!(" {} ", item.initial()), t.accent_style(item.accent)),
            Span::raw(" "),
            Span::styled(item.donor_name, t.text_style().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(item.diet_label(), diet_style),
            Span::styled(format!(" • {}", item.time_ago()), t.muted_style()),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(item.food_items, t.text_style()),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("Quantity: {}", item.quantity), t.muted_style()),
            Span::raw("   "),
            Span::styled(format!("➤ {}", item.distance()), t.emphasis_style()),
            Span::raw("   "),
            Button::secondary("Claim").focused(selected).span(),
        ]),
        Line::from(""),
    ])
}

