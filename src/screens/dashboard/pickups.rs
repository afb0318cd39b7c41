//! Pickups tab: accepted donations waiting to be collected.

use crate::mock_data::{PickupItem, PickupStatus, PICKUPS};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::widgets::Button;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

/// Buttons on each pickup card, cycled with the toggle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickupAction {
    #[default]
    Call,
    Navigate,
    MarkCollected,
}

impl PickupAction {
    pub fn label(&self) -> &'static str {
        match self {
            PickupAction::Call => "Call",
            PickupAction::Navigate => "Navigate",
            PickupAction::MarkCollected => "Mark as Collected",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PickupAction::Call => PickupAction::Navigate,
            PickupAction::Navigate => PickupAction::MarkCollected,
            PickupAction::MarkCollected => PickupAction::Call,
        }
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    list_state: &mut ListState,
    action: PickupAction,
) {
    let t = theme();
    let [title, list] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Active Pickups", t.title_style())),
        title.inner(Margin::new(2, 0)),
    );

    let selected = list_state.selected();
    let items: Vec<ListItem> = PICKUPS
        .iter()
        .enumerate()
        .map(|(i, item)| pickup_item(item, (selected == Some(i)).then_some(action)))
        .collect();
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
        list.inner(Margin::new(1, 0)),
        list_state,
    );
}

fn pickup_item(item: &PickupItem, focused_action: Option<PickupAction>) -> ListItem<'static> {
    let t = theme();
    let status_style = match item.status {
        PickupStatus::Accepted => t.emphasis_style(),
        PickupStatus::OnTheWay => t.warning_style(),
    };
    let button = |action: PickupAction| {
        Button::secondary(action.label())
            .focused(focused_action == Some(action))
            .span()
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(item.donor_name, t.text_style().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("({})", item.status.label()), status_style),
        ]),
        Line::from(Span::styled(format!("  {}", item.address), t.muted_style())),
        Line::from(Span::styled(format!("  ☎ {}", item.contact), t.muted_style())),
        Line::from(vec![
            Span::raw("  "),
            button(PickupAction::Call),
            Span::raw(" "),
            button(PickupAction::Navigate),
            Span::raw(" "),
            button(PickupAction::MarkCollected),
        ]),
        Line::from(""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_cycle() {
        let mut action = PickupAction::default();
        let mut seen = vec![action];
        for _ in 0..3 {
            action = action.next();
            seen.push(action);
        }
        assert_eq!(
            seen,
            vec![
                PickupAction::Call,
                PickupAction::Navigate,
                PickupAction::MarkCollected,
                PickupAction::Call
            ]
        );
    }
}
