//! Pieces shared by the two signup forms.

use crate::styles::theme;
use crate::utils::FormField;
use crate::widgets::Button;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const OTP_BUTTON_WIDTH: u16 = 13;

/// "Already have an account? [ Sign In ]", the way back to login.
pub fn render_sign_in_prompt(frame: &mut Frame, area: Rect, focused: bool) {
    let t = theme();
    let [prompt, button] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Already have an account?", t.muted_style()))
            .alignment(Alignment::Right),
        prompt,
    );
    frame.render_widget(
        Button::secondary("Sign In")
            .focused(focused)
            .alignment(Alignment::Left),
        button,
    );
}

/// OTP text box with the "Get OTP" button to its right.
pub fn render_otp_row(
    frame: &mut Frame,
    area: Rect,
    otp: &FormField,
    field_focused: bool,
    button_focused: bool,
) {
    let [field, button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(OTP_BUTTON_WIDTH)]).areas(area);
    otp.render(frame, field, field_focused);
    frame.render_widget(
        Button::secondary("Get OTP").focused(button_focused),
        Rect {
            y: button.y + button.height / 2,
            height: 1,
            ..button
        },
    );
}

/// Primary button on the second line of a two-line row.
pub fn render_submit(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    frame.render_widget(
        Button::primary(label).focused(focused),
        Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1.min(area.height),
            ..area
        },
    );
}
