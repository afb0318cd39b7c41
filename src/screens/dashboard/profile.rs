//! Profile tab: organisation card and settings entries.

use crate::mock_data::{NGO_PROFILE, PROFILE_OPTIONS};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, list_state: &mut ListState) {
    let t = theme();
    let [card, list] =
        Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_style());
    let inner = block.inner(card.inner(Margin::new(1, 0)));
    frame.render_widget(block, card.inner(Margin::new(1, 0)));

    let [avatar, details] =
        Layout::horizontal([Constraint::Length(7), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(" {} ", NGO_PROFILE.avatar_initial())),
        ])
        .alignment(Alignment::Center)
        .style(t.brand_fill_style()),
        Rect {
            width: avatar.width.saturating_sub(2),
            ..avatar
        },
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                NGO_PROFILE.name,
                t.text_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("ID: {}", NGO_PROFILE.registration_id),
                t.muted_style(),
            )),
            Line::from(Span::styled(
                format!("☎ {}", NGO_PROFILE.phone),
                t.muted_style(),
            )),
        ]),
        details,
    );

    let items: Vec<ListItem> = PROFILE_OPTIONS
        .iter()
        .map(|option| {
            let style = if *option == "Log Out" {
                t.error_style()
            } else {
                t.text_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", option), style),
                Span::styled("›", t.muted_style()),
            ]))
        })
        .collect();
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
        list.inner(Margin::new(2, 1)),
        list_state,
    );
}
