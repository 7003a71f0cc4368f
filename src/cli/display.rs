/// Draws `text` inside a box, with an optional title on the top border.
pub fn banner(title: Option<&str>, text: &str) -> String {
    let title = title.map(|t| format!(" {} ", t)).unwrap_or_default();
    let inner = (text.chars().count() + 4).max(title.chars().count() + 2).max(40);
    let pad_total = inner - text.chars().count();
    let left = pad_total / 2;
    let right = pad_total - left;

    let top_fill = inner - title.chars().count();
    let mut out = String::new();
    out.push_str(&format!("┌{}{}┐\n", title, "─".repeat(top_fill)));
    out.push_str(&format!("│{}│\n", " ".repeat(inner)));
    out.push_str(&format!("│{}{}{}│\n", " ".repeat(left), text, " ".repeat(right)));
    out.push_str(&format!("│{}│\n", " ".repeat(inner)));
    out.push_str(&format!("└{}┘", "─".repeat(inner)));
    out
}

/// The header printed before each step of an interactive run.
pub fn step_indicator(step_number: usize, step_id: &str) -> String {
    format!("\n  Step {}: {}\n  {}", step_number, step_id, "─".repeat(40))
}
