use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::error::AppError;

/// Decimal places for money amounts (subtotals and totals)
pub(super) const MONEY_DECIMALS: usize = 2;
/// Decimal places for per-token / per-character prices
pub(super) const TEXT_RATE_DECIMALS: usize = 8;
/// Decimal places for per-image / per-second prices
pub(super) const MEDIA_RATE_DECIMALS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "de" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "fr" | "ru" => NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat::default(),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub(super) fn format_number(n: i64, format: NumberFormat) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let digits = n.unsigned_abs().to_string();
    format!("{sign}{}", group_digits(&digits, format.group_sep))
}

/// Fixed-point rendering with locale separators
pub(super) fn format_decimal(value: f64, decimals: usize, format: NumberFormat) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let raw = format!("{:.*}", decimals, value.abs());
    match raw.split_once('.') {
        Some((int_part, frac_part)) => format!(
            "{sign}{}{}{frac_part}",
            group_digits(int_part, format.group_sep),
            format.decimal_sep
        ),
        None => format!("{sign}{}", group_digits(&raw, format.group_sep)),
    }
}

/// Whole quantities print without decimals; fractional ones keep up to two,
/// or up to eight below one hundredth so they never collapse to "0"
pub(super) fn format_quantity(value: f64, format: NumberFormat) -> String {
    if value.fract() == 0.0 {
        return format_decimal(value, 0, format);
    }
    let decimals = if value.abs() < 0.01 { 8 } else { 2 };
    let s = format_decimal(value, decimals, format);
    s.trim_end_matches('0')
        .trim_end_matches(format.decimal_sep)
        .to_string()
}

pub(super) fn format_money(value: f64, decimals: usize, format: NumberFormat) -> String {
    format!("${}", format_decimal(value, decimals, format))
}

pub(super) fn format_cost(cost: f64, format: NumberFormat) -> String {
    format_money(cost, MONEY_DECIMALS, format)
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// "600 seconds (10 min 0 sec)"
pub(super) fn format_duration(seconds: f64, format: NumberFormat) -> String {
    // Split at display precision so a rounded-up remainder carries into minutes
    let total = round_hundredths(seconds);
    let minutes = (total / 60.0).floor();
    let rest = round_hundredths(total - minutes * 60.0);
    format!(
        "{} seconds ({} min {} sec)",
        format_quantity(seconds, format),
        format_quantity(minutes, format),
        format_quantity(rest, format)
    )
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}
