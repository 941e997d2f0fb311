//! Settings and catalog loading shared by every command.

use std::fs;
use std::path::{Path, PathBuf};

use windef_catalog::{CatalogError, DynamicCatalog, TypeCatalog, catalog};
use windef_core::Settings;

/// Settings-related flags, already mapped onto the two axes.
#[derive(Debug, Default)]
pub struct SettingsArgs {
    pub word_size_is_64: Option<bool>,
    pub is_unicode_build: Option<bool>,
    pub config: Option<PathBuf>,
    pub catalogs: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid catalog file {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Settings from the config file (or the host default), with flags on top.
pub fn load_settings(args: &SettingsArgs) -> Result<Settings, LoadError> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_json(&read(path)?).map_err(|source| LoadError::Settings {
            path: path.clone(),
            source,
        })?,
        None => Settings::host(),
    };
    if let Some(word_size_is_64) = args.word_size_is_64 {
        settings = settings.with_word_size_64(word_size_is_64);
    }
    if let Some(is_unicode_build) = args.is_unicode_build {
        settings = settings.with_unicode(is_unicode_build);
    }
    log::debug!("active settings: {settings}");
    Ok(settings)
}

/// The builtin catalog, or a copy of it extended with every `--catalog` file.
pub fn load_catalog(args: &SettingsArgs) -> Result<Box<dyn TypeCatalog>, LoadError> {
    if args.catalogs.is_empty() {
        return Ok(Box::new(catalog()));
    }

    let mut dynamic = DynamicCatalog::from_builtin();
    for path in &args.catalogs {
        let count = dynamic
            .extend_from_json(&read(path)?)
            .map_err(|source| LoadError::Catalog {
                path: path.clone(),
                source,
            })?;
        log::info!("loaded {count} aliases from {}", path.display());
    }
    Ok(Box::new(dynamic))
}

/// Load settings and catalog, exiting with an error message on failure.
pub fn require(args: &SettingsArgs) -> (Settings, Box<dyn TypeCatalog>) {
    match load_settings(args).and_then(|settings| Ok((settings, load_catalog(args)?))) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Suggest a catalog alias for a likely typo.
pub fn suggest_alias(catalog: &dyn TypeCatalog, input: &str) -> Option<String> {
    let input_upper = input.to_uppercase();
    catalog
        .entries()
        .map(|(name, _)| (name, levenshtein(name, &input_upper)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
