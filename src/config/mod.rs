mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{CONFIG_VERSION, Config, OutputConfig, RenderConfig};
pub use validation::{is_css_color, is_css_length, validate_config};
