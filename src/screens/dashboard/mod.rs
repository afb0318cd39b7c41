//! NGO dashboard: a title bar, the active tab and a bottom tab bar.
//!
//! The selected tab lives in the [`NavigationController`]; this screen only
//! keeps list selections, one per tab, so switching tabs does not lose the
//! position inside each list.
//!
//! [`NavigationController`]: crate::state::NavigationController

mod feed;
mod history;
mod pickups;
mod profile;

pub use pickups::PickupAction;

use crate::components::Header;
use crate::keymap::{Action, Keymap};
use crate::mock_data::{DONATIONS, HISTORY, PICKUPS, PROFILE_OPTIONS};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{DashboardTab, NavCommand, Screen as ScreenId};
use crate::styles::theme;
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, ListState, Tabs};

const TAB_BAR_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    feed: ListState,
    pickups: ListState,
    history: ListState,
    profile: ListState,
    pickup_action: PickupAction,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        let selected = |len: usize| {
            let mut state = ListState::default();
            state.select_first_item(len);
            state
        };
        Self {
            feed: selected(DONATIONS.len()),
            pickups: selected(PICKUPS.len()),
            history: selected(HISTORY.len()),
            profile: selected(PROFILE_OPTIONS.len()),
            pickup_action: PickupAction::default(),
        }
    }

    /// Selected row on `tab`, if its list is not empty.
    pub fn selected(&self, tab: DashboardTab) -> Option<usize> {
        self.list(tab).0.selected()
    }

    pub fn pickup_action(&self) -> PickupAction {
        self.pickup_action
    }

    fn list(&self, tab: DashboardTab) -> (&ListState, usize) {
        match tab {
            DashboardTab::Feed => (&self.feed, DONATIONS.len()),
            DashboardTab::Pickups => (&self.pickups, PICKUPS.len()),
            DashboardTab::History => (&self.history, HISTORY.len()),
            DashboardTab::Profile => (&self.profile, PROFILE_OPTIONS.len()),
        }
    }

    fn list_mut(&mut self, tab: DashboardTab) -> (&mut ListState, usize) {
        match tab {
            DashboardTab::Feed => (&mut self.feed, DONATIONS.len()),
            DashboardTab::Pickups => (&mut self.pickups, PICKUPS.len()),
            DashboardTab::History => (&mut self.history, HISTORY.len()),
            DashboardTab::Profile => (&mut self.profile, PROFILE_OPTIONS.len()),
        }
    }

    /// What Enter does on the selected row of `tab`.
    fn activate(&self, tab: DashboardTab) -> ScreenAction {
        let Some(index) = self.selected(tab) else {
            return ScreenAction::None;
        };
        match tab {
            DashboardTab::Feed => ScreenAction::not_available("Claim"),
            DashboardTab::Pickups => ScreenAction::not_available(self.pickup_action.label()),
            // History rows are read-only.
            DashboardTab::History => ScreenAction::None,
            DashboardTab::Profile => PROFILE_OPTIONS
                .get(index)
                .map_or(ScreenAction::None, |option| ScreenAction::not_available(option)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let tab = ctx.navigation.dashboard_tab();

        if let KeyCode::Char(c @ '1'..='4') = key.code {
            let index = c as usize - '1' as usize;
            return DashboardTab::from_index(index)
                .map_or(ScreenAction::None, |t| {
                    ScreenAction::Dispatch(NavCommand::SelectTab(t))
                });
        }

        let Some(action) = ctx.keymap().action_for(&key) else {
            return ScreenAction::None;
        };

        match action {
            Action::MoveLeft | Action::PrevTab => {
                ScreenAction::Dispatch(NavCommand::SelectTab(tab.previous()))
            }
            Action::MoveRight | Action::NextTab => {
                ScreenAction::Dispatch(NavCommand::SelectTab(tab.next()))
            }
            Action::MoveUp | Action::MoveDown | Action::Home | Action::End => {
                let (state, len) = self.list_mut(tab);
                match action {
                    Action::MoveUp => state.move_up_by(1, len),
                    Action::MoveDown => state.move_down_by(1, len),
                    Action::Home => state.select_first_item(len),
                    _ => state.select_last_item(len),
                }
                if tab == DashboardTab::Pickups {
                    self.pickup_action = PickupAction::default();
                }
                ScreenAction::None
            }
            Action::ToggleSelect if tab == DashboardTab::Pickups => {
                self.pickup_action = self.pickup_action.next();
                ScreenAction::None
            }
            Action::Confirm => self.activate(tab),
            Action::Refresh => ScreenAction::not_available("Refresh"),
            _ => ScreenAction::None,
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, active: DashboardTab) {
        let t = theme();
        let titles = DashboardTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.label()));
        let tabs = Tabs::new(titles)
            .select(active.index())
            .style(t.muted_style())
            .highlight_style(t.title_style().add_modifier(Modifier::REVERSED))
            .divider(" ")
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(t.border_style()),
            );
        frame.render_widget(tabs, area);
    }
}

impl Screen for DashboardScreen {
    fn id(&self) -> ScreenId {
        ScreenId::DashboardNgo
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let tab = ctx.navigation.dashboard_tab();
        let [title, body, tab_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(TAB_BAR_HEIGHT),
        ])
        .areas(area);

        Header::render_title_bar(frame, title, tab.label());

        let body = body.inner(Margin::new(0, 1));
        match tab {
            DashboardTab::Feed => feed::render(frame, body, &mut self.feed),
            DashboardTab::Pickups => {
                pickups::render(frame, body, &mut self.pickups, self.pickup_action)
            }
            DashboardTab::History => history::render(frame, body, &mut self.history),
            DashboardTab::Profile => profile::render(frame, body, &mut self.profile),
        }

        self.render_tab_bar(frame, tab_bar, tab);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, ctx)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        keymap.footer_dashboard()
    }
}
