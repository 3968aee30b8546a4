//! # Rendering Module
//!
//! Everything here renders to a `String`; the `print_*` wrappers are the only
//! functions that touch stdout. Column alignment uses display width, so ids
//! with wide characters still line up.

use colored::Colorize;
use uitag::api::TagWidget;
use uitag::attributes::Attributes;
use uitag::commands::session::SessionState;
use uitag::commands::{CmdMessage, MessageLevel};
use uitag::model::{AssignedTag, Origin, TagType};
use uitag::render::board::Board;
use uitag::render::TagRenderer;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 9;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Renders pool, assigned tags and session of a widget.
pub fn render_widget(widget: &TagWidget<Board>) -> String {
    let mut out = String::new();

    let target = match widget.target() {
        Some(target) if widget.renderer().resolve_target(target) => target.to_string(),
        Some(target) => format!(
            "{} (not found; containers: {})",
            target,
            widget.renderer().targets().collect::<Vec<_>>().join(", ")
        ),
        None => "(unset)".to_string(),
    };
    out.push_str(&labeled("target", &target));

    let pool = if widget.available().is_empty() {
        "(empty)".to_string()
    } else {
        widget
            .available()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&labeled("pool", &pool));

    if widget.assigned().is_empty() {
        out.push_str(&labeled("assigned", "(none)"));
    } else {
        out.push_str("assigned\n");
        out.push_str(&render_assigned(widget.assigned()));
    }

    let candidate = widget.candidate();
    let session = match widget.session_state() {
        SessionState::Empty => "empty".to_string(),
        SessionState::IdEntered => format!("id entered ({})", candidate.id),
        SessionState::Ready => format!("ready ({} as {})", candidate.id, candidate.tag_type),
    };
    out.push_str(&labeled("session", &session));

    let hints = widget.hints();
    out.push_str(&labeled(
        "inputs",
        &format!("[{}] [{}]", hints.id_placeholder, hints.type_placeholder),
    ));
    out
}

pub fn render_assigned(tags: &[AssignedTag]) -> String {
    let id_width = tags.iter().map(|t| t.id.as_str().width()).max().unwrap_or(0);
    let type_width = tags
        .iter()
        .map(|t| t.tag_type.as_str().width())
        .max()
        .unwrap_or(0);

    tags.iter()
        .map(|tag| {
            let origin = match tag.origin {
                Origin::Session => "added",
                Origin::Declared => "declared",
            };
            format!(
                "  {}  {}  {}\n",
                pad_to_width(tag.id.as_str(), id_width).yellow(),
                pad_to_width(tag.tag_type.as_str(), type_width),
                origin.dimmed()
            )
        })
        .collect()
}

/// Renders attributes as `name = value` lines under their external names.
pub fn render_attributes(attributes: &Attributes, prefix: &str) -> String {
    let qualified = attributes.qualified(prefix);
    if qualified.is_empty() {
        return "No attributes set.\n".to_string();
    }
    let width = qualified.keys().map(|k| k.width()).max().unwrap_or(0);
    qualified
        .iter()
        .map(|(name, value)| format!("{} = {}\n", pad_to_width(name, width), value))
        .collect()
}

pub fn render_types(types: &[TagType]) -> String {
    types.iter().map(|t| format!("{}\n", t)).collect()
}

fn labeled(label: &str, value: &str) -> String {
    format!("{} {}\n", pad_to_width(label, LABEL_WIDTH - 1), value)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uitag::config::WidgetConfig;
    use uitag::model::TagId;

    fn widget() -> TagWidget<Board> {
        TagWidget::new(Board::new().with_target("tags"), WidgetConfig::default())
    }

    fn tag(id: &str, tag_type: TagType, origin: Origin) -> AssignedTag {
        let id = TagId::new(id).unwrap();
        AssignedTag {
            name: id.display_name(),
            id,
            tag_type,
            origin,
        }
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[]).is_empty());
    }

    #[test]
    fn test_render_messages_multiple() {
        let output = render_messages(&[
            CmdMessage::info("3 tags available"),
            CmdMessage::warning("Nothing to confirm"),
        ]);
        assert!(output.contains("3 tags available"));
        assert!(output.contains("Nothing to confirm"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_empty_widget() {
        let output = render_widget(&widget());
        assert!(output.contains("(unset)"));
        assert!(output.contains("(empty)"));
        assert!(output.contains("(none)"));
        assert!(output.contains("empty"));
    }

    #[test]
    fn test_render_widget_with_state() {
        let mut w = widget();
        w.set_attribute("tags", r##"["#2","#10"]"##).unwrap();
        w.set_attribute("target", "tags").unwrap();
        w.input_id("#2");
        w.input_type("blocked");
        w.confirm().unwrap();
        w.input_id("#10");

        let output = render_widget(&w);
        assert!(output.contains("pool     #10"));
        assert!(output.contains("#2"));
        assert!(output.contains("blocked"));
        assert!(output.contains("added"));
        assert!(output.contains("id entered (#10)"));
        assert!(output.contains("inputs   [#10] [mark as]"));
    }

    #[test]
    fn test_render_missing_target() {
        let mut w = widget();
        w.set_attribute("target", "#sidebar").unwrap();
        let output = render_widget(&w);
        assert!(output.contains("#sidebar (not found; containers: tags)"));
    }

    #[test]
    fn test_render_assigned_aligns_columns() {
        colored::control::set_override(false);
        let output = render_assigned(&[
            tag("#5", TagType::Blocked, Origin::Session),
            tag("#100", TagType::Unassigned, Origin::Declared),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  #5    blocked     added");
        assert_eq!(lines[1], "  #100  unassigned  declared");
    }

    #[test]
    fn test_render_attributes() {
        let mut w = widget();
        assert_eq!(render_attributes(w.attributes(), "data-"), "No attributes set.\n");
        w.set_attribute("target", "tags").unwrap();
        w.input_id("#5");
        let output = render_attributes(w.attributes(), "data-");
        assert!(output.contains("data-id     = #5"));
        assert!(output.contains("data-target = tags"));
    }

    #[test]
    fn test_render_types() {
        let output = render_types(&TagType::SELECTABLE);
        assert!(output.starts_with("unassigned\n"));
        assert!(!output.contains("undefined"));
    }
}
