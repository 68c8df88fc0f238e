use hubcap_core::CapabilitySet;
use serde_json::Value;

pub struct TableFormatter {
    key_width: usize,
    value_width: usize,
}

impl TableFormatter {
    pub fn new(caps: &CapabilitySet) -> Self {
        let key_width = caps
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(10)
            .clamp(10, 40); // Between "Capability" header min and reasonable terminal width max

        let value_width = caps
            .iter()
            .map(|(_, v)| display_value(v).chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 60);

        Self {
            key_width,
            value_width,
        }
    }

    pub fn print_table(&self, caps: &CapabilitySet) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row("Capability", "Value"));
        println!("{}", self.border('├', '┼', '┤'));
        for (key, value) in caps.iter() {
            println!("{}", self.row(key, &display_value(value)));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row(&self, key: &str, value: &str) -> String {
        format!(
            "│ {} │ {} │",
            truncate(key, self.key_width),
            truncate(value, self.value_width)
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(self.key_width + 2),
            middle,
            "─".repeat(self.value_width + 2),
            right
        )
    }
}

/// Strings print bare; any other JSON value prints as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
