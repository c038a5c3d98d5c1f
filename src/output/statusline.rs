use crate::output::format::{NumberFormat, format_cost};
use crate::pricing::CostBreakdown;

/// Single line suitable for statusline/tmux integration
/// Format: "Total: $X.XX | Text: $X.XX | Images: $X.XX | Videos: $X.XX"
pub(crate) fn render_statusline(breakdown: &CostBreakdown, number_format: NumberFormat) -> String {
    let parts = [
        format!("Total: {}", format_cost(breakdown.total_cost, number_format)),
        format!("Text: {}", format_cost(breakdown.text_cost, number_format)),
        format!("Images: {}", format_cost(breakdown.image_cost, number_format)),
        format!("Videos: {}", format_cost(breakdown.video_cost, number_format)),
    ];
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PricingInput, TranslationMethod, compute};

    #[test]
    fn statusline_reference_estimate() {
        let breakdown = compute(&PricingInput::defaults(TranslationMethod::TokenBased)).unwrap();
        assert_eq!(
            render_statusline(&breakdown, NumberFormat::default()),
            "Total: $62.52 | Text: $0.02 | Images: $2.50 | Videos: $60.00"
        );
    }

    #[test]
    fn statusline_zero_estimate() {
        assert_eq!(
            render_statusline(&CostBreakdown::default(), NumberFormat::default()),
            "Total: $0.00 | Text: $0.00 | Images: $0.00 | Videos: $0.00"
        );
    }
}
