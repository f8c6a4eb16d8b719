mod manager;

pub use manager::{ConfigFile, ConfigManager, ResolveOptions, TranslationConfig, resolve_config};
