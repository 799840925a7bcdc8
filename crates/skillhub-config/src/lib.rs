//! Client configuration for the Skill Hub CLI.
//!
//! Provides a kubeconfig-style YAML file with named connection contexts,
//! plus the well-known directories the CLI stores its session and logs in.
//!
//! Server resolution order: `--server` / `SKILLHUB_API_URL`, the current
//! context, then `http://localhost:8080`.

pub mod client;
pub mod discovery;
pub mod error;

pub use client::{
    client_config_path, load_client_config, load_client_config_from, save_client_config,
    save_client_config_to, AuthConfig, ClientConfig, ClientDefaults, Connection, Context,
    ResolvedFrom, DEFAULT_SERVER,
};
pub use discovery::{log_dir, xdg_config_dir, API_URL_ENV, CONFIG_DIR_ENV};
pub use error::{ConfigError, Result};
