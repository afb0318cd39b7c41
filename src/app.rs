use crate::components::{Footer, HelpOverlay, FOOTER_HEIGHT};
use crate::config::Config;
use crate::keymap::Action;
use crate::screens::{self, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{GlobalState, LoginOutcome, NavCommand, NavigationController, Screen as ScreenId};
use crate::styles::theme;
use crate::tui::Tui;
use crate::widgets::{Toast, ToastWidget};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use tracing::{debug, info};

/// Shown after a donor signs in, since there is no donor dashboard.
pub const DONOR_SIGNED_IN: &str = "Signed in as donor. The donor dashboard is coming soon.";

/// Main application state
pub struct App {
    config: Config,
    navigation: NavigationController,
    global: GlobalState,
    /// Controller for `navigation.current_screen()`.
    screen: Box<dyn Screen>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let navigation = NavigationController::new();
        let mut screen = screens::build(navigation.current_screen());
        screen.on_enter(&ScreenContext::new(&config, &navigation))?;

        let mut global = GlobalState::new();
        global.show_help_overlay = config.show_help_on_start;

        Ok(Self {
            config,
            navigation,
            global,
            screen,
            should_quit: false,
        })
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn global(&self) -> &GlobalState {
        &self.global
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Id of the live screen controller. Always equals the navigation
    /// controller's current screen between events.
    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Entered TUI");

        let tick_rate = self.config.tick_rate();
        let result = loop {
            if let Err(e) = tui.terminal_mut().draw(|frame| self.draw(frame)) {
                break Err(e.into());
            }
            if self.should_quit {
                break Ok(());
            }

            match tui.poll_event(tick_rate) {
                Ok(Some(event)) => {
                    if let Err(e) = self.handle_event(event) {
                        break Err(e);
                    }
                }
                Ok(None) => {}
                Err(e) => break Err(e),
            }
            self.global.expire_toast();
        };

        tui.exit()?;
        info!("Left TUI");
        result
    }

    /// Draws the active screen, the footer and any overlays.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

        let ctx = RenderContext::new(&self.config, &self.navigation);
        if let Err(e) = self.screen.render(frame, body, &ctx) {
            tracing::error!("Failed to render {}: {:#}", self.screen.id().name(), e);
        }

        Footer::render(frame, footer, &self.screen.footer_hint(&self.config.keymap));

        if let Some(toast) = &self.global.toast {
            frame.render_widget(ToastWidget::new(toast), area);
        }

        if self.global.show_help_overlay {
            HelpOverlay::render(frame, area, &self.config.keymap);
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            // Resize and focus changes just trigger the next redraw.
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if is_interrupt(&key) {
            self.should_quit = true;
            return Ok(());
        }

        let action = self.config.keymap.action_for(&key);

        if self.global.show_help_overlay {
            if matches!(
                action,
                Some(Action::Help | Action::Cancel | Action::Confirm | Action::Quit)
            ) {
                self.global.show_help_overlay = false;
            }
            return Ok(());
        }

        if !self.screen.is_input_focused() {
            match action {
                Some(Action::Quit) => {
                    self.should_quit = true;
                    return Ok(());
                }
                Some(Action::Help) => {
                    self.global.toggle_help();
                    return Ok(());
                }
                _ => {}
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.navigation);
        let screen_action = self.screen.handle_event(Event::Key(key), &ctx)?;
        self.apply(screen_action)
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Dispatch(command) => self.dispatch(command)?,
            ScreenAction::Notify(toast) => self.global.show_toast(toast),
        }
        Ok(())
    }

    fn dispatch(&mut self, command: NavCommand) -> Result<()> {
        debug!(?command, "Dispatching navigation command");
        let transition = self.navigation.dispatch(command);

        if transition.login == Some(LoginOutcome::DonorAccepted) {
            self.global.show_toast(Toast::success(DONOR_SIGNED_IN));
        }

        if transition.screen_changed() {
            // A fresh controller drops whatever the old screen had typed.
            self.screen = screens::build(transition.current);
            let ctx = ScreenContext::new(&self.config, &self.navigation);
            self.screen.on_enter(&ctx)?;
        }
        Ok(())
    }
}

/// Ctrl+C quits from anywhere, even while typing.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
