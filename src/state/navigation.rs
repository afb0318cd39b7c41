//! Screen-navigation state machine.
//!
//! The controller owns the only cross-screen state in the application: which
//! screen is visible, which dashboard tab is selected, the last role the user
//! picked, and the inline sign-in error. Screens never touch it directly; they
//! hand it a [`NavCommand`] and the app calls [`NavigationController::dispatch`].
//!
//! ```text
//!                 request_signup(Donor)
//!        ┌────────────────────────────────────┐
//!        │                                    ▼
//!   ┌─────────┐  request_signup(Ngo)   ┌─────────────┐
//!   │  Login  │ ─────────────────────▶ │  SignupNgo  │
//!   └─────────┘ ◀───────────────────── └─────────────┘
//!        │        return_to_login             │ complete_ngo_signup
//!        │ request_login(Ngo, 123/123)        ▼
//!        └──────────────────────────▶ ┌──────────────┐
//!                                     │ DashboardNgo │  Feed | Pickups | History | Profile
//!                                     └──────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Email accepted for the demo NGO account.
pub const NGO_DEMO_EMAIL: &str = "123";
/// Password accepted for the demo NGO account.
pub const NGO_DEMO_PASSWORD: &str = "123";
/// Inline error shown after a rejected NGO sign-in.
pub const INVALID_NGO_CREDENTIALS: &str = "Invalid NGO Credentials (Try 123/123)";

/// Top-level screens of the auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    SignupDonor,
    SignupNgo,
    DashboardNgo,
}

impl Screen {
    /// Human readable name, used in logs and the window title.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::SignupDonor => "Donor Signup",
            Screen::SignupNgo => "NGO Signup",
            Screen::DashboardNgo => "NGO Dashboard",
        }
    }
}

/// Sub-screens of the NGO dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Feed,
    Pickups,
    History,
    Profile,
}

impl DashboardTab {
    /// Tabs in the order they appear in the bottom bar.
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Feed,
        DashboardTab::Pickups,
        DashboardTab::History,
        DashboardTab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Feed => "Feed",
            DashboardTab::Pickups => "Pickups",
            DashboardTab::History => "History",
            DashboardTab::Profile => "Profile",
        }
    }

    /// Position in [`DashboardTab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            DashboardTab::Feed => 0,
            DashboardTab::Pickups => 1,
            DashboardTab::History => 2,
            DashboardTab::Profile => 3,
        }
    }

    /// Tab at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab to the right, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next tab to the left, wrapping around.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Who is using the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Donor,
    Ngo,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Donor => "Donor",
            UserRole::Ngo => "NGO",
        }
    }

    /// The other role.
    pub fn toggled(&self) -> Self {
        match self {
            UserRole::Donor => UserRole::Ngo,
            UserRole::Ngo => UserRole::Donor,
        }
    }
}

/// Donor refinement, only meaningful on the donor signup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DonorType {
    #[default]
    Individual,
    Restaurant,
}

impl DonorType {
    pub fn label(&self) -> &'static str {
        match self {
            DonorType::Individual => "Individual",
            DonorType::Restaurant => "Restaurant",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DonorType::Individual => DonorType::Restaurant,
            DonorType::Restaurant => DonorType::Individual,
        }
    }
}

/// Email and password typed on the login screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match against the demo NGO account. No trimming.
    fn is_ngo_demo_account(&self) -> bool {
        self.email == NGO_DEMO_EMAIL && self.password == NGO_DEMO_PASSWORD
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A transition request emitted by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// "Get Started" on the login screen.
    RequestSignup(UserRole),
    /// "Sign In" on the login screen.
    RequestLogin {
        role: UserRole,
        credentials: Credentials,
    },
    /// Back arrow or "Sign In" on either signup screen.
    ReturnToLogin,
    /// Bottom bar of the NGO dashboard.
    SelectTab(DashboardTab),
    /// Donor/NGO toggle on the login screen.
    SelectRole(UserRole),
    /// "Verify & Sign Up" on the NGO signup screen.
    CompleteNgoSignup,
}

/// Result of a sign-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// NGO credentials matched; the dashboard is now active.
    Entered(Screen),
    /// NGO credentials did not match; the inline error is set.
    Rejected,
    /// Donor sign-in is always accepted but has no destination screen yet.
    DonorAccepted,
}

/// What a dispatched command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: Screen,
    pub current: Screen,
    /// Set only for [`NavCommand::RequestLogin`].
    pub login: Option<LoginOutcome>,
}

impl Transition {
    /// Whether the visible top-level screen is different now.
    pub fn screen_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Holds the active screen and routes transition requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationController {
    current_screen: Screen,
    dashboard_tab: DashboardTab,
    last_selected_role: UserRole,
    login_error: Option<&'static str>,
}

impl NavigationController {
    /// Starts on the login screen with the donor role and the feed tab.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        self.dashboard_tab
    }

    pub fn last_selected_role(&self) -> UserRole {
        self.last_selected_role
    }

    /// Inline error from the last rejected NGO sign-in, if still relevant.
    pub fn login_error(&self) -> Option<&'static str> {
        self.login_error
    }

    /// Opens the signup screen matching `role` and remembers the role.
    pub fn request_signup(&mut self, role: UserRole) {
        self.last_selected_role = role;
        let target = match role {
            UserRole::Ngo => Screen::SignupNgo,
            UserRole::Donor => Screen::SignupDonor,
        };
        self.enter(target);
    }

    /// Attempts a sign-in for `role`.
    ///
    /// NGO sign-in only succeeds for the demo account. Donor sign-in performs
    /// no check at all and leaves the screen where it is, since no donor
    /// destination exists.
    pub fn request_login(&mut self, role: UserRole, credentials: &Credentials) -> LoginOutcome {
        match role {
            UserRole::Ngo if credentials.is_ngo_demo_account() => {
                self.enter(Screen::DashboardNgo);
                LoginOutcome::Entered(Screen::DashboardNgo)
            }
            UserRole::Ngo => {
                debug!("NGO sign-in rejected");
                self.login_error = Some(INVALID_NGO_CREDENTIALS);
                LoginOutcome::Rejected
            }
            UserRole::Donor => {
                info!("Donor sign-in accepted; no donor destination is defined");
                self.login_error = None;
                LoginOutcome::DonorAccepted
            }
        }
    }

    /// Always lands on the login screen. Idempotent.
    pub fn request_return_to_login(&mut self) {
        self.enter(Screen::Login);
    }

    /// Selects a dashboard sub-screen.
    pub fn request_dashboard_tab(&mut self, tab: DashboardTab) {
        if self.dashboard_tab != tab {
            debug!(from = ?self.dashboard_tab, to = ?tab, "Dashboard tab changed");
        }
        self.dashboard_tab = tab;
    }

    /// Records the role picked on the login toggle. The screen does not change.
    pub fn select_role(&mut self, role: UserRole) {
        self.last_selected_role = role;
    }

    /// NGO registration has no backend, so it goes straight to the dashboard.
    pub fn complete_ngo_signup(&mut self) {
        self.enter(Screen::DashboardNgo);
    }

    /// Applies a command and reports what changed.
    pub fn dispatch(&mut self, command: NavCommand) -> Transition {
        let previous = self.current_screen;
        let mut login = None;

        match command {
            NavCommand::RequestSignup(role) => self.request_signup(role),
            NavCommand::RequestLogin { role, credentials } => {
                login = Some(self.request_login(role, &credentials));
            }
            NavCommand::ReturnToLogin => self.request_return_to_login(),
            NavCommand::SelectTab(tab) => self.request_dashboard_tab(tab),
            NavCommand::SelectRole(role) => self.select_role(role),
            NavCommand::CompleteNgoSignup => self.complete_ngo_signup(),
        }

        Transition {
            previous,
            current: self.current_screen,
            login,
        }
    }

    fn enter(&mut self, screen: Screen) {
        if self.current_screen != screen {
            info!(from = self.current_screen.name(), to = screen.name(), "Screen transition");
        }
        // The dashboard keeps its tab only while it is on screen.
        if screen == Screen::DashboardNgo && self.current_screen != Screen::DashboardNgo {
            self.dashboard_tab = DashboardTab::Feed;
        }
        self.current_screen = screen;
        self.login_error = None;
    }
}
