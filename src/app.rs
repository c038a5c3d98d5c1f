use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{AppError, InvalidInput};
use crate::output::{
    NumberFormat, TableOptions, output_estimate_json, render_breakdown, render_estimate_table,
    render_statusline,
};
use crate::pricing::{PricingInput, TranslationMethod, compute};
use crate::utils::filter_json;

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

/// Build the estimator input: command-line flag, then config file, then the
/// built-in default for each field. Text defaults follow the resolved method.
///
/// `cli` is expected to have been merged with `config` already, so the
/// method comes from the CLI alone.
pub(crate) fn resolve_input(cli: &Cli, config: &Config) -> Result<PricingInput, InvalidInput> {
    let method = match cli.method.as_deref() {
        Some(raw) => raw.parse::<TranslationMethod>()?,
        None => TranslationMethod::default(),
    };
    let base = PricingInput::defaults(method);

    let (config_quantity, config_rate) = match method {
        TranslationMethod::TokenBased => (config.quantities.tokens, config.rates.token),
        TranslationMethod::CharacterBased => {
            (config.quantities.characters, config.rates.character)
        }
    };

    Ok(PricingInput {
        method,
        text_quantity: cli
            .text_units
            .or(config_quantity)
            .unwrap_or(base.text_quantity),
        text_unit_cost: cli.text_rate.or(config_rate).unwrap_or(base.text_unit_cost),
        image_count: cli
            .images
            .or(config.quantities.images)
            .unwrap_or(base.image_count),
        image_unit_cost: cli
            .image_rate
            .or(config.rates.image)
            .unwrap_or(base.image_unit_cost),
        video_seconds: cli
            .video_seconds
            .or(config.quantities.video_seconds)
            .unwrap_or(base.video_seconds),
        video_unit_cost: cli
            .video_rate
            .or(config.rates.video_second)
            .unwrap_or(base.video_unit_cost),
    })
}

/// Resolve, compute and print one estimate in the requested presentation
pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let input = resolve_input(cli, config)?;
    tracing::debug!(?input, "resolved estimator input");

    let breakdown = compute(&input)?;
    tracing::debug!(?breakdown, "computed cost breakdown");

    let command = cli.command();
    // --jq only makes sense on JSON, so it implies --json
    if cli.json || cli.jq.is_some() {
        let pretty = command != Commands::Statusline;
        let json = output_estimate_json(&input, &breakdown, number_format, pretty)?;
        return print_json(&json, cli.jq.as_deref());
    }

    let use_color = cli.use_color();
    match command {
        Commands::Estimate => print!(
            "{}",
            render_estimate_table(
                &input,
                &breakdown,
                TableOptions {
                    use_color,
                    compact: cli.compact,
                    number_format,
                },
            )
        ),
        Commands::Breakdown => print!(
            "{}",
            render_breakdown(&input, &breakdown, number_format, use_color)
        ),
        Commands::Statusline => println!("{}", render_statusline(&breakdown, number_format)),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("edcost").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn builtin_defaults_without_flags_or_config() {
        let input = resolve_input(&cli(&[]), &Config::default()).unwrap();
        assert_eq!(input, PricingInput::defaults(TranslationMethod::TokenBased));
    }

    #[test]
    fn character_method_switches_text_defaults() {
        let input = resolve_input(&cli(&["-m", "character"]), &Config::default()).unwrap();
        assert_eq!(input.method, TranslationMethod::CharacterBased);
        assert_eq!(input.text_quantity, 50_000.0);
        assert_eq!(input.text_unit_cost, 0.00001);
    }

    #[test]
    fn flags_override_config_and_defaults() {
        let config: Config = toml::from_str(
            "[quantities]\ntokens = 20000\nimages = 10\n[rates]\nimage = 0.5\nvideo_second = 0.3\n",
        )
        .unwrap();
        let input = resolve_input(&cli(&["--images", "7", "--text-rate", "0.000004"]), &config)
            .unwrap();
        assert_eq!(input.text_quantity, 20_000.0);
        assert_eq!(input.text_unit_cost, 0.000004);
        assert_eq!(input.image_count, 7);
        assert_eq!(input.image_unit_cost, 0.5);
        assert_eq!(input.video_seconds, 600.0);
        assert_eq!(input.video_unit_cost, 0.3);
    }

    #[test]
    fn config_text_values_follow_method() {
        let config: Config = toml::from_str(
            "[quantities]\ntokens = 1\ncharacters = 2\n[rates]\ntoken = 0.1\ncharacter = 0.2\n",
        )
        .unwrap();
        let tokens = resolve_input(&cli(&[]), &config).unwrap();
        assert_eq!((tokens.text_quantity, tokens.text_unit_cost), (1.0, 0.1));
        let chars = resolve_input(&cli(&["-m", "chars"]), &config).unwrap();
        assert_eq!((chars.text_quantity, chars.text_unit_cost), (2.0, 0.2));
    }

    #[test]
    fn unknown_method_is_invalid_input() {
        let err = resolve_input(&cli(&["-m", "pages"]), &Config::default()).unwrap_err();
        assert_eq!(err.field, "method");
    }

    #[test]
    fn run_rejects_negative_flag() {
        let err = run(&cli(&["--video-seconds", "-1"]), &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput(InvalidInput {
                field: "video_seconds",
                ..
            })
        ));
    }

    #[test]
    fn run_rejects_unsupported_locale() {
        let err = run(&cli(&["--locale", "xx"]), &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLocale { .. }));
    }
}
