use std::path::PathBuf;

use windef_catalog::parse_fn_decls;

use super::loader::{SettingsArgs, require};

pub struct SigArgs {
    pub decls_path: PathBuf,
    pub settings: SettingsArgs,
}

pub fn run(args: SigArgs) {
    let (settings, catalog) = require(&args.settings);

    let source = match std::fs::read_to_string(&args.decls_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: failed to read {}: {}", args.decls_path.display(), e);
            std::process::exit(1);
        }
    };

    let resolved = parse_fn_decls(&source)
        .and_then(|decls| catalog.resolve_fn_decls(&decls, settings));
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!("resolved {} functions under {settings}", resolved.len());
    match serde_json::to_string_pretty(&resolved) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
