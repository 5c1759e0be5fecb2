//! Plain-text rendering of a [`FrameView`].

use foodframe_core::FrameView;
use std::fmt::Write;

pub fn render_text(view: &FrameView) -> String {
    let card = match view {
        FrameView::Loading => return "Loading...\n".to_string(),
        FrameView::Card(card) => card,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "{}", card.description);
    if card.input.is_empty() {
        let _ = writeln!(out, "> ({})", card.placeholder);
    } else {
        let _ = writeln!(out, "> {}", card.input);
    }

    if let Some(rec) = &card.recommendation {
        let _ = writeln!(out);
        match card.position {
            Some((at, of)) => {
                let _ = writeln!(out, "{} ({at}/{of})", rec.name);
            }
            None => {
                let _ = writeln!(out, "{}", rec.name);
            }
        }
        let _ = writeln!(out, "  Where: {}", rec.place);
        let _ = writeln!(out, "  {}", rec.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}  {}",
        button("Next Recommendation", card.next_enabled),
        button("View on Map", card.map_enabled)
    );
    if let Some(prompt) = &card.detected_prompt {
        let _ = writeln!(out, "{prompt}");
    }
    out
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("[{label} (disabled)]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodframe_core::{MemoryStore, UrlLog, WidgetController};

    #[test]
    fn loading_placeholder() {
        let frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        assert_eq!(render_text(&frame.view()), "Loading...\n");
    }

    #[test]
    fn card_with_recommendation() {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let _ = frame.on_ready();
        frame.type_city("Tokyo");
        frame.request_recommendations();

        let text = render_text(&frame.view());
        assert!(text.starts_with("Food Recommendations\nRecommendations for Tokyo\n> Tokyo\n"));
        assert!(text.contains("Ramen (1/3)\n  Where: Ichiran\n"));
        assert!(text.contains("[Next Recommendation]  [View on Map]"));
    }

    #[test]
    fn disabled_buttons_without_city() {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let _ = frame.on_ready();
        let text = render_text(&frame.view());
        assert!(text.contains("> (Enter your city)"));
        assert!(text.contains("[Next Recommendation (disabled)]"));
    }
}
