//! Configuration management

mod defaults;
mod settings;

pub use defaults::default_items;
pub use settings::{BarConfig, CONFIG_VERSION};
