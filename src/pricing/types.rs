use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{
    DEFAULT_CHARACTERS, DEFAULT_COST_PER_CHARACTER, DEFAULT_COST_PER_IMAGE,
    DEFAULT_COST_PER_TOKEN, DEFAULT_COST_PER_VIDEO_SECOND, DEFAULT_IMAGES, DEFAULT_TOKENS,
    DEFAULT_VIDEO_SECONDS,
};
use crate::error::InvalidInput;

/// How text translation is billed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) enum TranslationMethod {
    /// LLM translation, charged per token
    #[default]
    #[serde(rename = "token")]
    TokenBased,
    /// Traditional translation service, charged per character
    #[serde(rename = "character")]
    CharacterBased,
}

impl TranslationMethod {
    pub(crate) fn unit(self) -> &'static str {
        match self {
            TranslationMethod::TokenBased => "token",
            TranslationMethod::CharacterBased => "character",
        }
    }

    pub(crate) fn unit_plural(self) -> &'static str {
        match self {
            TranslationMethod::TokenBased => "tokens",
            TranslationMethod::CharacterBased => "characters",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            TranslationMethod::TokenBased => "LLM (Token-based)",
            TranslationMethod::CharacterBased => "Traditional Service (Character-based)",
        }
    }

    pub(crate) fn default_quantity(self) -> f64 {
        match self {
            TranslationMethod::TokenBased => DEFAULT_TOKENS,
            TranslationMethod::CharacterBased => DEFAULT_CHARACTERS,
        }
    }

    pub(crate) fn default_unit_cost(self) -> f64 {
        match self {
            TranslationMethod::TokenBased => DEFAULT_COST_PER_TOKEN,
            TranslationMethod::CharacterBased => DEFAULT_COST_PER_CHARACTER,
        }
    }
}

impl fmt::Display for TranslationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

impl FromStr for TranslationMethod {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" | "tokens" | "llm" | "token-based" => Ok(TranslationMethod::TokenBased),
            "character" | "characters" | "char" | "chars" | "traditional"
            | "character-based" => Ok(TranslationMethod::CharacterBased),
            _ => Err(InvalidInput::new(
                "method",
                format!("unknown translation method \"{s}\" (expected token or character)"),
            )),
        }
    }
}

/// Quantities and unit prices for one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PricingInput {
    pub(crate) method: TranslationMethod,
    /// Tokens or characters, depending on `method`
    pub(crate) text_quantity: f64,
    pub(crate) text_unit_cost: f64,
    pub(crate) image_count: i64,
    pub(crate) image_unit_cost: f64,
    pub(crate) video_seconds: f64,
    pub(crate) video_unit_cost: f64,
}

impl PricingInput {
    /// Built-in starting values for the given billing method
    pub(crate) fn defaults(method: TranslationMethod) -> Self {
        PricingInput {
            method,
            text_quantity: method.default_quantity(),
            text_unit_cost: method.default_unit_cost(),
            image_count: DEFAULT_IMAGES,
            image_unit_cost: DEFAULT_COST_PER_IMAGE,
            video_seconds: DEFAULT_VIDEO_SECONDS,
            video_unit_cost: DEFAULT_COST_PER_VIDEO_SECOND,
        }
    }
}

/// Per-category subtotals and their sum, in dollars (unrounded)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub(crate) struct CostBreakdown {
    pub(crate) text_cost: f64,
    pub(crate) image_cost: f64,
    pub(crate) video_cost: f64,
    pub(crate) total_cost: f64,
}
