use comfy_table::{Cell, Color};

use crate::output::format::{
    MEDIA_RATE_DECIMALS, NumberFormat, TEXT_RATE_DECIMALS, create_styled_table, format_cost,
    format_duration, format_money, format_number, format_quantity, header_cell, right_cell,
    styled_cell,
};
use crate::pricing::{CostBreakdown, PricingInput};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

/// One resource category as shown in the summary table
struct CategoryRow {
    label: &'static str,
    quantity: String,
    unit_cost: String,
    subtotal: f64,
}

fn category_rows(
    input: &PricingInput,
    breakdown: &CostBreakdown,
    nf: NumberFormat,
) -> [CategoryRow; 3] {
    let unit = input.method.unit();
    [
        CategoryRow {
            label: "Text Translation",
            quantity: format!(
                "{} {}",
                format_quantity(input.text_quantity, nf),
                input.method.unit_plural()
            ),
            unit_cost: format!(
                "{} / {unit}",
                format_money(input.text_unit_cost, TEXT_RATE_DECIMALS, nf)
            ),
            subtotal: breakdown.text_cost,
        },
        CategoryRow {
            label: "Images",
            quantity: format!("{} images", format_number(input.image_count, nf)),
            unit_cost: format!(
                "{} / image",
                format_money(input.image_unit_cost, MEDIA_RATE_DECIMALS, nf)
            ),
            subtotal: breakdown.image_cost,
        },
        CategoryRow {
            label: "Videos",
            quantity: format_duration(input.video_seconds, nf),
            unit_cost: format!(
                "{} / second",
                format_money(input.video_unit_cost, MEDIA_RATE_DECIMALS, nf)
            ),
            subtotal: breakdown.video_cost,
        },
    ]
}

/// Render the cost summary: one row per category plus the total.
pub(crate) fn render_estimate_table(
    input: &PricingInput,
    breakdown: &CostBreakdown,
    opts: TableOptions,
) -> String {
    let c = opts.use_color;
    let nf = opts.number_format;
    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };

    let mut table = create_styled_table();
    if opts.compact {
        table.set_header(vec![header_cell("Category", c), header_cell("Cost", c)]);
    } else {
        table.set_header(vec![
            header_cell("Category", c),
            header_cell("Quantity", c),
            header_cell("Unit Cost", c),
            header_cell("Cost", c),
        ]);
    }

    for row in category_rows(input, breakdown, nf) {
        let mut cells = vec![Cell::new(row.label)];
        if !opts.compact {
            cells.push(Cell::new(&row.quantity));
            cells.push(right_cell(&row.unit_cost, None, false));
        }
        cells.push(right_cell(&format_cost(row.subtotal, nf), green, false));
        table.add_row(cells);
    }

    let mut total = vec![styled_cell("TOTAL COST", cyan, true)];
    if !opts.compact {
        total.extend([Cell::new(""), Cell::new("")]);
    }
    total.push(right_cell(&format_cost(breakdown.total_cost, nf), green, true));
    table.add_row(total);

    format!(
        "\n  Translation Cost Estimate ({})\n\n{table}\n",
        input.method.label()
    )
}
