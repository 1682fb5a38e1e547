// src/config/mod.rs

pub mod settings;

pub use settings::{get_config_path, AppConfig, DatasetLocation, DATASET_ENV_VAR};
