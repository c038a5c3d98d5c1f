mod detail;
mod format;
mod json;
mod statusline;
mod table;

pub(crate) use detail::render_breakdown;
pub(crate) use format::NumberFormat;
pub(crate) use json::output_estimate_json;
pub(crate) use statusline::render_statusline;
pub(crate) use table::{TableOptions, render_estimate_table};
