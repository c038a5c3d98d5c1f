use crate::error::InvalidInput;

use super::types::{CostBreakdown, PricingInput};

/// Compute per-category subtotals and the total for `input`.
///
/// Every quantity and unit cost must be a finite, non-negative number; the
/// first offending field (in declaration order) is reported. No rounding is
/// applied.
pub(crate) fn compute(input: &PricingInput) -> Result<CostBreakdown, InvalidInput> {
    let text_quantity = checked_amount("text_quantity", input.text_quantity)?;
    let text_unit_cost = checked_amount("text_unit_cost", input.text_unit_cost)?;
    let image_count = checked_count("image_count", input.image_count)?;
    let image_unit_cost = checked_amount("image_unit_cost", input.image_unit_cost)?;
    let video_seconds = checked_amount("video_seconds", input.video_seconds)?;
    let video_unit_cost = checked_amount("video_unit_cost", input.video_unit_cost)?;

    let text_cost = text_quantity * text_unit_cost;
    let image_cost = image_count * image_unit_cost;
    let video_cost = video_seconds * video_unit_cost;

    Ok(CostBreakdown {
        text_cost,
        image_cost,
        video_cost,
        total_cost: text_cost + image_cost + video_cost,
    })
}

fn checked_amount(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::new(
            field,
            format!("must be a finite number (got {value})"),
        ));
    }
    if value < 0.0 {
        return Err(InvalidInput::new(
            field,
            format!("must be non-negative (got {value})"),
        ));
    }
    // -0.0 passes the sign check; keep it from surfacing as "-0.00"
    Ok(value.abs())
}

fn checked_count(field: &'static str, value: i64) -> Result<f64, InvalidInput> {
    if value < 0 {
        return Err(InvalidInput::new(
            field,
            format!("must be non-negative (got {value})"),
        ));
    }
    Ok(value as f64)
}
