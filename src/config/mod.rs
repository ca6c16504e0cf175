pub mod config_load;
pub mod config_types;

pub use config_load::{Config, PROJECT_ENV};
pub use config_types::{
    AppConfig, ChaosGameConfig, GraphingConfig, MongeConfig, NapoleonConfig, PtolemyConfig,
    TrigonometryConfig, VivianiConfig, WindowConfig,
};
