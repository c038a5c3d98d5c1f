mod calculator;
mod types;

pub(crate) use calculator::compute;
pub(crate) use types::{CostBreakdown, PricingInput, TranslationMethod};
