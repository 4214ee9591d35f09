pub mod paths;
pub mod settings;

use std::path::Path;

pub use paths::AppPaths;
pub use settings::{MissingNamePolicy, Settings};

use crate::error::{AppError, AppResult};

/// Loads settings from `explicit` when given, otherwise from the per-user
/// config directory. Only an explicitly named file has to exist.
pub fn load_settings(explicit: Option<&Path>) -> AppResult<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "settings file `{}` does not exist",
                path.display()
            )));
        }
        return settings::load(path);
    }

    match AppPaths::discover() {
        Ok(paths) => settings::load(&paths.settings_file()),
        Err(err) => {
            tracing::debug!("skipping user settings: {err}");
            Ok(Settings::default())
        }
    }
}
