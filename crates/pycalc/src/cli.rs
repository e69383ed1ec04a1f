//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{CalcConfig, ConfigResult, Size};

/// PyCalc: a keypad calculator for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pycalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write log events to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Text shown when an evaluation fails
    #[arg(long, value_name = "TEXT")]
    pub error_marker: Option<String>,

    /// Rows taken by the display, border included
    #[arg(long, value_name = "ROWS")]
    pub display_height: Option<u16>,

    /// Columns per keypad button
    #[arg(long, value_name = "COLS")]
    pub button_width: Option<u16>,

    /// Rows per keypad button
    #[arg(long, value_name = "ROWS")]
    pub button_height: Option<u16>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Applies the overrides to `base`, resizes the window to fit and
    /// validates the result
    pub fn apply_to(&self, base: CalcConfig) -> ConfigResult<CalcConfig> {
        let mut config = base;
        if let Some(marker) = &self.error_marker {
            config = config.with_error_marker(marker.clone());
        }
        if let Some(height) = self.display_height {
            config = config.with_display_height(height);
        }

        let button = Size::new(
            self.button_width.unwrap_or(config.button_size.width),
            self.button_height.unwrap_or(config.button_size.height),
        );
        let config = config.with_button_size(button).fit_window();
        config.validate()?;
        Ok(config)
    }

    /// The configuration the window opens with
    pub fn config(&self) -> ConfigResult<CalcConfig> {
        self.apply_to(CalcConfig::default())
    }
}
