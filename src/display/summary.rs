//! Summary display formatting

use crate::reports::SummaryCard;

/// Format the dashboard cards as an aligned block
pub fn format_summary(cards: &[SummaryCard]) -> String {
    let title_width = cards.iter().map(|c| c.title.len()).max().unwrap_or(0);
    let value_width = cards
        .iter()
        .map(|c| c.value.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Statistics summary\n");
    output.push_str(&"=".repeat(title_width + value_width + 4));
    output.push('\n');

    for card in cards {
        output.push_str(&format!(
            "{:<title_width$}  {:>value_width$}  {}\n",
            card.title,
            card.value,
            card.caption,
            title_width = title_width,
            value_width = value_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::summary_cards;
    use crate::services::summarize;
    use crate::storage::seed::demo_records;
    use chrono::NaiveDate;

    #[test]
    fn test_format_summary() {
        let records = demo_records(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let cards = summary_cards(&summarize(&records), "₽", "00:00 MSK");
        let text = format_summary(&cards);

        assert!(text.starts_with("Statistics summary"));
        assert!(text.contains("Total revenue"));
        assert!(text.contains("370 000.00 ₽"));
        assert!(text.contains("across 2 cabinets"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_empty_summary() {
        let cards = summary_cards(&summarize(&[]), "$", "midnight");
        let text = format_summary(&cards);
        assert!(text.contains("0.00 $"));
    }
}
