//! Navigation controller workflows, driven through the public API only.

use donate_away::state::{
    Credentials, DashboardTab, LoginOutcome, NavCommand, NavigationController, Screen, UserRole,
    INVALID_NGO_CREDENTIALS,
};

fn ngo_login(nav: &mut NavigationController, email: &str, password: &str) -> LoginOutcome {
    nav.request_login(UserRole::Ngo, &Credentials::new(email, password))
}

#[test]
fn signup_round_trip_then_ngo_login() {
    let mut nav = NavigationController::new();
    assert_eq!(nav.current_screen(), Screen::Login);

    nav.request_signup(UserRole::Ngo);
    assert_eq!(nav.current_screen(), Screen::SignupNgo);
    assert_eq!(nav.last_selected_role(), UserRole::Ngo);

    nav.request_return_to_login();
    assert_eq!(nav.current_screen(), Screen::Login);

    assert_eq!(
        ngo_login(&mut nav, "123", "123"),
        LoginOutcome::Entered(Screen::DashboardNgo)
    );
    assert_eq!(nav.current_screen(), Screen::DashboardNgo);
    assert_eq!(nav.login_error(), None);
}

#[test]
fn every_role_opens_its_signup_screen() {
    for (role, screen) in [
        (UserRole::Donor, Screen::SignupDonor),
        (UserRole::Ngo, Screen::SignupNgo),
    ] {
        let mut nav = NavigationController::new();
        nav.request_signup(role);
        assert_eq!(nav.current_screen(), screen);
        assert_eq!(nav.last_selected_role(), role);
    }
}

#[test]
fn ngo_login_requires_exact_demo_credentials() {
    let near_misses = [
        ("", ""),
        ("123", ""),
        ("", "123"),
        ("123 ", "123"),
        ("123", "1234"),
        ("admin", "123"),
    ];
    for (email, password) in near_misses {
        let mut nav = NavigationController::new();
        assert_eq!(
            ngo_login(&mut nav, email, password),
            LoginOutcome::Rejected,
            "{:?}/{:?} should be rejected",
            email,
            password
        );
        assert_eq!(nav.current_screen(), Screen::Login);
        assert_eq!(nav.login_error(), Some(INVALID_NGO_CREDENTIALS));
    }
}

#[test]
fn error_clears_on_success_and_on_navigation() {
    let mut nav = NavigationController::new();
    ngo_login(&mut nav, "x", "y");
    assert!(nav.login_error().is_some());
    ngo_login(&mut nav, "123", "123");
    assert_eq!(nav.login_error(), None);

    let mut nav = NavigationController::new();
    ngo_login(&mut nav, "x", "y");
    nav.request_signup(UserRole::Donor);
    nav.request_return_to_login();
    assert_eq!(nav.login_error(), None);
}

#[test]
fn donor_login_is_always_accepted_without_moving() {
    for (email, password) in [("", ""), ("someone@mail.com", "secret"), ("123", "123")] {
        let mut nav = NavigationController::new();
        let outcome = nav.request_login(UserRole::Donor, &Credentials::new(email, password));
        assert_eq!(outcome, LoginOutcome::DonorAccepted);
        assert_eq!(nav.current_screen(), Screen::Login);
        assert_eq!(nav.login_error(), None);
    }
}

#[test]
fn return_to_login_is_idempotent() {
    let mut once = NavigationController::new();
    once.request_signup(UserRole::Donor);
    once.request_return_to_login();

    let mut twice = once.clone();
    twice.request_return_to_login();
    assert_eq!(once, twice);
}

#[test]
fn dashboard_tabs_are_set_exactly_and_reset_on_entry() {
    let mut nav = NavigationController::new();
    nav.complete_ngo_signup();
    assert_eq!(nav.current_screen(), Screen::DashboardNgo);

    for tab in DashboardTab::ALL {
        nav.request_dashboard_tab(tab);
        assert_eq!(nav.dashboard_tab(), tab);
        assert_eq!(nav.current_screen(), Screen::DashboardNgo);
    }

    nav.request_return_to_login();
    nav.complete_ngo_signup();
    assert_eq!(nav.dashboard_tab(), DashboardTab::Feed);
}

#[test]
fn dispatch_reports_screen_changes() {
    let mut nav = NavigationController::new();

    let t = nav.dispatch(NavCommand::SelectRole(UserRole::Ngo));
    assert!(!t.screen_changed());
    assert_eq!(nav.last_selected_role(), UserRole::Ngo);

    let t = nav.dispatch(NavCommand::RequestLogin {
        role: UserRole::Ngo,
        credentials: Credentials::new("123", "123"),
    });
    assert!(t.screen_changed());
    assert_eq!(t.previous, Screen::Login);
    assert_eq!(t.current, Screen::DashboardNgo);
    assert_eq!(t.login, Some(LoginOutcome::Entered(Screen::DashboardNgo)));

    let t = nav.dispatch(NavCommand::SelectTab(DashboardTab::History));
    assert!(!t.screen_changed());
    assert_eq!(t.login, None);
}
