//! Plain-text rendering of the session view and search results.

use swap_core::{AppViewModel, Item};

pub fn status_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("stage: {:?}", view.stage)];

    let mut flags = Vec::new();
    if view.status.signed_in {
        flags.push("signed in");
    }
    if view.status.verifying_login {
        flags.push("awaiting login code");
    }
    if view.status.verifying_forgot {
        flags.push("awaiting recovery code");
    }
    if view.status.verifying_update {
        flags.push("awaiting new password");
    }
    if view.awaiting_response {
        flags.push("request in flight");
    }
    if !flags.is_empty() {
        lines.push(format!("status: {}", flags.join(", ")));
    }

    let filters = [
        view.item_type.map(|v| format!("type={}", v.label())),
        view.location.map(|v| format!("location={}", v.label())),
        view.condition.map(|v| format!("condition={}", v.label())),
    ];
    let filters: Vec<String> = filters.into_iter().flatten().collect();
    lines.push(format!(
        "query: {:?}{}",
        view.query,
        if filters.is_empty() {
            String::new()
        } else {
            format!(" [{}]", filters.join(", "))
        }
    ));
    lines.push(format!(
        "results: {} shown, {} total",
        view.hit_count, view.total_hits
    ));
    lines
}

pub fn item_lines(items: &[Item]) -> Vec<String> {
    if items.is_empty() {
        return vec!["(no results)".to_string()];
    }
    items
        .iter()
        .map(|item| {
            let icon = item.emoji.map(|e| e.glyph()).unwrap_or("•");
            format!(
                "{icon} {} | {} | {} {} | {}",
                item.title,
                item.item_type.label(),
                item.condition.emoji(),
                item.condition.label(),
                item.location.label()
            )
        })
        .collect()
}
