/// Default text size when estimating LLM (token-based) translation
pub(crate) const DEFAULT_TOKENS: f64 = 10_000.0;
/// $2 per million tokens
pub(crate) const DEFAULT_COST_PER_TOKEN: f64 = 0.000002;

/// Default text size when estimating a traditional (character-based) service
pub(crate) const DEFAULT_CHARACTERS: f64 = 50_000.0;
pub(crate) const DEFAULT_COST_PER_CHARACTER: f64 = 0.00001;

pub(crate) const DEFAULT_IMAGES: i64 = 50;
pub(crate) const DEFAULT_COST_PER_IMAGE: f64 = 0.05;

pub(crate) const DEFAULT_VIDEO_SECONDS: f64 = 600.0;
pub(crate) const DEFAULT_COST_PER_VIDEO_SECOND: f64 = 0.10;

/// Environment variable holding a tracing filter directive
pub(crate) const LOG_ENV: &str = "EDCOST_LOG";
