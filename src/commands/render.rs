use log::info;

use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, validate_config};
use crate::input::load_chart;
use crate::output::{OutputFormat, create_formatter};
use crate::segment::{SegmentBarConfig, SegmentBarRenderer};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, write_output};

/// Everything needed to render, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub config: Config,
    pub renderer: SegmentBarRenderer,
}

impl RenderSettings {
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.config.output.format
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.output.title
    }
}

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    let settings = match resolve_render_settings(args, cli) {
        Ok(settings) => settings,
        Err(e) => {
            report_error(&e);
            return EXIT_CONFIG_ERROR;
        }
    };

    let chart = match load_chart(args.input.as_deref()) {
        Ok(chart) => chart,
        Err(e) => {
            report_error(&e);
            return EXIT_INPUT_ERROR;
        }
    };

    match run_render_impl(args, &settings, chart) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load config and fold the render flags into it.
///
/// # Errors
/// Returns an error if the config cannot be loaded or the result fails validation.
pub fn resolve_render_settings(args: &RenderArgs, cli: &Cli) -> Result<RenderSettings> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;
    let renderer = config.renderer()?;
    Ok(RenderSettings { config, renderer })
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(width) = &args.width {
        config.render.width.clone_from(width);
    }
    if let Some(height) = &args.height {
        config.render.height.clone_from(height);
    }
    if let Some(locale) = args.locale {
        config.render.locale = locale;
    }
    if let Some(threshold) = args.small_threshold {
        config.render.small_threshold = threshold;
    }
    if let Some(policy) = args.zero_total {
        config.render.zero_total = policy;
    }
    if let Some(mount) = args.mount {
        config.render.mount = mount;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(title) = &args.title {
        config.output.title.clone_from(title);
    }
}

/// Render `chart` and write it out.
///
/// Dimensions come from the CLI first, then the chart input, then config.
///
/// # Errors
/// Returns an error if formatting fails or the output cannot be written.
pub fn run_render_impl(
    args: &RenderArgs,
    settings: &RenderSettings,
    mut chart: SegmentBarConfig,
) -> Result<()> {
    if let Some(width) = &args.width {
        chart.width = Some(width.clone());
    }
    if let Some(height) = &args.height {
        chart.height = Some(height.clone());
    }
    settings.config.apply_dimensions(&mut chart);

    let formatter = create_formatter(
        settings.format(),
        settings.renderer.clone(),
        settings.title(),
    );
    let output = formatter.format(&chart)?;

    info!(
        "Rendered {} segments as {}",
        chart.data.len(),
        settings.format()
    );
    write_output(args.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
