use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
pub mod models;
pub use models::*;

/// Environment variable prefix for overrides, e.g. `SCHEDULER__API__BASE_URL`.
pub const ENV_PREFIX: &str = "SCHEDULER";

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. built-in defaults,
/// 2. `config/default.{toml,yaml,json}`,
/// 3. `config/<RUN_ENV>.{toml,yaml,json}` (`RUN_ENV` defaults to `debug`),
/// 4. `SCHEDULER__*` environment variables (after `.env` has been loaded).
///
/// The config directory is `SCHEDULER_CONFIG_DIR` if set, otherwise the
/// workspace `config/` directory, otherwise `./config`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    load_config_from(&config_dir())
}

/// Loads the configuration from an explicit directory. Missing files are not an error.
pub fn load_config_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let default_path = dir.join("default");
    let env_path = dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("dev_data.purge_event_ids")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("SCHEDULER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let workspace_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config");
    if workspace_config.is_dir() {
        return workspace_config;
    }
    PathBuf::from("config")
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` wins, then a first command line argument that starts with
/// `.env`, then `.env` in the working directory. Loading happens once per
/// process; a missing file is ignored.
///
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
