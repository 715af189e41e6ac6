//! Output formatting for the CLI.

use console::{pad_str, style, truncate_str, Alignment, Term};
use parts_catalog::checkout::OrderStatus;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Human-readable line to stdout; suppressed in JSON mode.
    fn line(&self, text: std::fmt::Arguments<'_>) {
        if !self.json {
            println!("{}", text);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(format_args!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.line(format_args!("{} {}", style("✓").green(), msg));
    }

    /// Warnings go to stderr so piped output stays clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are printed in JSON mode too, as `{"error": ..}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    pub fn header(&self, msg: &str) {
        self.line(format_args!("\n{}", style(msg).bold().underlined()));
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.line(format_args!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.line(format_args!("  {} {}", style("•").dim(), item));
    }

    /// Print a table row, clipped to the terminal width.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_str(col, *width, Alignment::Left, Some("…")).into_owned())
            .collect();
        let row = format!("  {}", formatted.join("  "));
        self.line(format_args!("{}", truncate_str(&row, self.term_width(), "")));
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width; wide when not attached to a terminal.
    pub fn term_width(&self) -> usize {
        match self.term.size_checked() {
            Some((_, cols)) => cols as usize,
            None => usize::MAX,
        }
    }
}

/// Stock badge for a product listing.
pub fn stock_badge(stock_quantity: i64) -> String {
    if stock_quantity > 0 {
        style(format!("{} in stock", stock_quantity)).green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}

/// Status badge for order states.
pub fn status_badge(status: OrderStatus) -> String {
    let label = status.as_str();
    match status {
        OrderStatus::Confirmed | OrderStatus::Delivered => style(label).green().to_string(),
        OrderStatus::Pending | OrderStatus::Shipped => style(label).yellow().to_string(),
        OrderStatus::Cancelled => style(label).red().to_string(),
    }
}

/// Format a decimal price the way listings show it.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(45.0), "45.00");
        assert_eq!(format_price(9.999), "10.00");
    }

    #[test]
    fn test_badges_keep_label() {
        console::set_colors_enabled(false);
        assert_eq!(stock_badge(3), "3 in stock");
        assert_eq!(stock_badge(0), "out of stock");
        assert_eq!(status_badge(OrderStatus::Pending), "pending");
    }
}
