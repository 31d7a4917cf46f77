pub mod config;
mod context;
pub mod init;
pub mod render;

pub use config::{format_config, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{RenderSettings, resolve_render_settings, run_render, run_render_impl};
