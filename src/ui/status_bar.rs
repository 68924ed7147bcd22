//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Build a status bar line with key hints followed by a message
pub fn build_status_bar_with_message(hints: &[KeyHint], message: &str) -> Line<'static> {
    let mut line = build_status_bar(hints);
    if !message.is_empty() {
        line.spans.push(Span::raw("  "));
        line.spans
            .push(Span::styled(message.to_string(), Style::default().fg(Color::Cyan)));
    }
    line
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar on the last row of the frame
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint], message: &str) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar_with_message(hints, message);
    frame.render_widget(Paragraph::new(status), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_status_bar() {
        let hints = &[
            KeyHint {
                key: "q",
                label: "Quit",
                color: Color::Red,
            },
            KeyHint {
                key: "a",
                label: "Add",
                color: Color::Green,
            },
        ];
        let line = build_status_bar(hints);
        assert_eq!(line.to_string(), " [q] Quit   [a] Add ");
    }

    #[test]
    fn test_message_is_appended() {
        let hints = &[KeyHint {
            key: "q",
            label: "Quit",
            color: Color::Red,
        }];
        let line = build_status_bar_with_message(hints, "3 items");
        assert!(line.to_string().ends_with("  3 items"));
        assert_eq!(build_status_bar_with_message(hints, "").spans.len(), 1);
    }
}
