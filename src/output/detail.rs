use std::fmt::Write;

use crate::output::format::{
    MEDIA_RATE_DECIMALS, NumberFormat, TEXT_RATE_DECIMALS, format_cost, format_decimal,
    format_money, format_number, format_quantity,
};
use crate::pricing::{CostBreakdown, PricingInput, TranslationMethod};

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the detailed per-category report
pub(crate) fn render_breakdown(
    input: &PricingInput,
    breakdown: &CostBreakdown,
    number_format: NumberFormat,
    use_color: bool,
) -> String {
    let nf = number_format;
    let method = input.method;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n  Text Translation ({}):", method.label());
    let _ = writeln!(
        out,
        "    - {}: {}",
        capitalize(method.unit_plural()),
        format_quantity(input.text_quantity, nf)
    );
    let _ = write!(
        out,
        "    - Cost per {}: {}",
        method.unit(),
        format_money(input.text_unit_cost, TEXT_RATE_DECIMALS, nf)
    );
    if method == TranslationMethod::TokenBased {
        let _ = write!(
            out,
            " ({} per million tokens)",
            format_cost(input.text_unit_cost * 1_000_000.0, nf)
        );
    }
    out.push('\n');
    let _ = writeln!(out, "    - Subtotal: {}", format_cost(breakdown.text_cost, nf));

    let _ = writeln!(out, "\n  Images:");
    let _ = writeln!(
        out,
        "    - Number of images: {}",
        format_number(input.image_count, nf)
    );
    let _ = writeln!(
        out,
        "    - Cost per image: {}",
        format_money(input.image_unit_cost, MEDIA_RATE_DECIMALS, nf)
    );
    let _ = writeln!(out, "    - Subtotal: {}", format_cost(breakdown.image_cost, nf));

    let _ = writeln!(out, "\n  Videos:");
    let _ = writeln!(
        out,
        "    - Duration: {} seconds ({} minutes)",
        format_quantity(input.video_seconds, nf),
        format_decimal(input.video_seconds / 60.0, 1, nf)
    );
    let _ = writeln!(
        out,
        "    - Cost per second: {}",
        format_money(input.video_unit_cost, MEDIA_RATE_DECIMALS, nf)
    );
    let _ = writeln!(out, "    - Subtotal: {}", format_cost(breakdown.video_cost, nf));

    let total = format_cost(breakdown.total_cost, nf);
    if use_color {
        let _ = writeln!(out, "\n  \x1b[1;32mTotal Estimated Cost: {total}\x1b[0m\n");
    } else {
        let _ = writeln!(out, "\n  Total Estimated Cost: {total}\n");
    }
    out
}
