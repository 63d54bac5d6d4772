//! Frame rendering -- scrollback, prompt line, cursor placement.
//!
//! Free functions over a borrowed snapshot of app state, so `terminal.draw`
//! can run without borrow conflicts on the runner. The view is anchored to
//! the newest line unless the user review-scrolled upward.

use ratatui::layout::Position;
use ratatui::text::{Line as TextLine, Span as TextSpan, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use termfolio_core::line::{Line, Span, SpanStyle};

use crate::app::App;
use crate::theme::Theme;


/// Snapshot of everything needed to draw one frame.
pub struct RenderState<'a> {
    pub app: &'a App,
    pub theme: &'a Theme,
}

/// Render the full screen: a bordered window holding the scrollback and
/// the live prompt line.
pub fn render_frame(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.theme.border_style())
        .title(" ~/portfolio ")
        .title_style(state.theme.title_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let session = state.app.session();
    let mut lines: Vec<TextLine> = session
        .scrollback()
        .iter()
        .map(|line| to_text_line(line, state.theme))
        .collect();
    lines.push(prompt_line(
        &session.portfolio().prompt(),
        &state.app.input().text(),
        state.theme,
    ));

    let total = lines.len();
    let height = inner.height as usize;
    // Clamp the review offset so the top of the buffer stays reachable but
    // never over-scrolls.
    let review = state.app.review_offset().min(total.saturating_sub(height));
    let scroll = total.saturating_sub(height).saturating_sub(review);

    let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);

    // The cursor sits after the prompt on the last visible row, but only
    // while the view is live.
    if review == 0 {
        let prompt_cols = session.portfolio().prompt().chars().count() + 1;
        let col = prompt_cols + state.app.input().cursor_pos();
        let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (total.min(height) as u16).saturating_sub(1);
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Convert one scrollback line into styled terminal text.
fn to_text_line<'a>(line: &'a Line, theme: &Theme) -> TextLine<'a> {
    let spans: Vec<TextSpan> = line
        .spans
        .iter()
        .map(|span| match span {
            Span::Text { text, style } => {
                TextSpan::styled(text.as_str(), theme.span_style(*style))
            }
            Span::Link { label, .. } => TextSpan::styled(label.as_str(), theme.link_style()),
        })
        .collect();
    TextLine::from(spans)
}

/// The live input row: prompt label plus the current field contents.
fn prompt_line(prompt: &str, input: &str, theme: &Theme) -> TextLine<'static> {
    TextLine::from(vec![
        TextSpan::styled(prompt.to_string(), theme.span_style(SpanStyle::Prompt)),
        TextSpan::raw(" "),
        TextSpan::styled(input.to_string(), theme.span_style(SpanStyle::Plain)),
    ])
}
