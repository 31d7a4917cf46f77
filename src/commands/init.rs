use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SegmentBarError};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SegmentBarError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# segment-bar configuration file
version = "1"

[render]
# Bar size as CSS lengths, used when the chart input does not set them
width = "100%"
height = "60px"

# Locale for value labels: en-US, en-GB, de-DE, fr-FR, es-ES, de-CH, plain
locale = "en-US"

# Segments narrower than this percentage get the `segment-small` class
small_threshold = 5.0

# All-zero input: "zero-width" renders 0% segments, "propagate" renders NaN
zero_total = "zero-width"

# "append" keeps existing children of the bar element, "replace" clears them
mount = "append"

# Fallback colors for segments without an explicit color, cycled in order
# palette = [
#     "#ffd6e0", "#ffe9d6", "#fff7c2", "#d9f8c4", "#cde8ff",
#     "#e6d3ff", "#d3f3ff", "#f9d5ff", "#e9ecef", "#f3ffe3",
# ]

[output]
# html, fragment, svg or json
format = "html"

# Document title for html and svg output
title = "Segment Bar"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
