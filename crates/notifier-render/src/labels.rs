use notifier_events::Label;

/// Render labels as ``[`a`,`b`]``; empty input renders as an empty string.
pub fn labels_markdown(labels: &[Label]) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let titles = labels
        .iter()
        .map(|label| format!("`{}`", label.title))
        .collect::<Vec<_>>()
        .join(",");
    format!("[{titles}]")
}
