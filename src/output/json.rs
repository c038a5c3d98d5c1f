use serde::Serialize;

use crate::error::AppError;
use crate::output::format::{NumberFormat, format_cost};
use crate::pricing::{CostBreakdown, PricingInput};

#[derive(Debug, Serialize)]
struct FormattedCosts {
    text_cost: String,
    image_cost: String,
    video_cost: String,
    total_cost: String,
}

#[derive(Debug, Serialize)]
struct EstimateJson<'a> {
    input: &'a PricingInput,
    breakdown: &'a CostBreakdown,
    formatted: FormattedCosts,
}

/// Serialize an estimate; raw costs stay unrounded, `formatted` holds the
/// display strings.
pub(crate) fn output_estimate_json(
    input: &PricingInput,
    breakdown: &CostBreakdown,
    number_format: NumberFormat,
    pretty: bool,
) -> Result<String, AppError> {
    let output = EstimateJson {
        input,
        breakdown,
        formatted: FormattedCosts {
            text_cost: format_cost(breakdown.text_cost, number_format),
            image_cost: format_cost(breakdown.image_cost, number_format),
            video_cost: format_cost(breakdown.video_cost, number_format),
            total_cost: format_cost(breakdown.total_cost, number_format),
        },
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{TranslationMethod, compute};

    #[test]
    fn json_contains_input_breakdown_and_formatted() {
        let input = PricingInput::defaults(TranslationMethod::TokenBased);
        let breakdown = compute(&input).unwrap();
        let json = output_estimate_json(&input, &breakdown, NumberFormat::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("method").is_none());
        assert_eq!(value["input"]["image_count"].as_i64(), Some(50));
        assert_eq!(value["input"]["method"].as_str(), Some("token"));
        let total = value["breakdown"]["total_cost"].as_f64().unwrap();
        assert!((total - 62.52).abs() < 1e-9);
        assert_eq!(value["formatted"]["total_cost"].as_str(), Some("$62.52"));
        assert_eq!(value["formatted"]["image_cost"].as_str(), Some("$2.50"));
    }

    #[test]
    fn compact_json_is_single_line() {
        let input = PricingInput::defaults(TranslationMethod::CharacterBased);
        let breakdown = compute(&input).unwrap();
        let json = output_estimate_json(&input, &breakdown, NumberFormat::default(), false).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json.matches(r#""method":"character""#).count(), 1);
    }
}
