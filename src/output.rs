use colored::Colorize;

use crate::pricing::format_price;
use crate::schemas::SkipOption;

/// Formats one skip as a text block for non-interactive output.
pub fn format_skip(skip: &SkipOption, use_color: bool) -> String {
    let title = skip.title();
    let price = format_price(skip.final_price());
    let badge = if skip.is_popular() { " ★ Most popular" } else { "" };

    let mut features = vec![format!("{} day hire period", skip.hire_period_days)];
    if skip.allowed_on_road {
        features.push("Road placement allowed".to_string());
    }
    if skip.allows_heavy_waste {
        features.push("Heavy waste permitted".to_string());
    }
    let features = features.join(" · ");

    if use_color {
        format!(
            "{} {} {}{}\n  {}",
            title.bold(),
            price.bright_yellow(),
            format!("#{}", skip.id).dimmed(),
            badge.bright_magenta(),
            features
        )
    } else {
        format!("{} {} #{}{}\n  {}", title, price, skip.id, badge, features)
    }
}

/// Formats the outcome line printed after the user continues with a skip.
pub fn format_selection(skip: &SkipOption, use_color: bool) -> String {
    let price = format!("{} inc. VAT", format_price(skip.final_price()));
    if use_color {
        format!("{} selected: {}", skip.title().bold(), price.bright_yellow())
    } else {
        format!("{} selected: {}", skip.title(), price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(size: u32, road: bool, heavy: bool) -> SkipOption {
        SkipOption {
            id: 11,
            size,
            price_before_vat: 211.0,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: road,
            allows_heavy_waste: heavy,
        }
    }

    #[test]
    fn test_format_skip_plain() {
        let text = format_skip(&skip(4, true, false), false);
        assert_eq!(
            text,
            "4 Yard Skip £253 #11\n  14 day hire period · Road placement allowed"
        );
    }

    #[test]
    fn test_format_skip_popular_with_all_flags() {
        let text = format_skip(&skip(8, true, true), false);
        assert!(text.starts_with("8 Yard Skip £253 #11 ★ Most popular"));
        assert!(text.contains("Heavy waste permitted"));
    }

    #[test]
    fn test_format_skip_without_flags() {
        let text = format_skip(&skip(6, false, false), false);
        assert!(!text.contains("Road placement"));
        assert!(!text.contains("Heavy waste"));
    }

    #[test]
    fn test_format_selection_plain() {
        assert_eq!(
            format_selection(&skip(4, true, true), false),
            "4 Yard Skip selected: £253 inc. VAT"
        );
    }
}
