use crate::styles::theme;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// Brand name shown on the auth banners.
pub const BRAND: &str = "RED SPADE";

/// Height of the banner drawn by [`Header::render_auth`].
pub const AUTH_HEADER_HEIGHT: u16 = 5;

/// Purple banner at the top of the login and signup screens.
pub struct Header;

impl Header {
    /// Brand line, then the screen title and subtitle, on a filled block.
    pub fn render_auth(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
        let t = theme();
        let block = Block::default().style(t.brand_fill_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                format!("♠ {}", BRAND),
                t.brand_fill_style().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(title.to_string(), t.brand_fill_style())),
            Line::from(Span::styled(
                subtitle.to_string(),
                t.brand_fill_style().remove_modifier(Modifier::BOLD),
            )),
        ];
        let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            content,
        );
    }

    /// One-line bar above the dashboard: brand on the left, section on the right.
    pub fn render_title_bar(frame: &mut Frame, area: Rect, section: &str) {
        let t = theme();
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(section.len() as u16 + 2)])
                .areas(area);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", BRAND), t.title_style())),
            left,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(section.to_string(), t.muted_style()))
                .alignment(Alignment::Right),
            right,
        );
    }
}
