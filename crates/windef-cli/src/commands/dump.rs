use windef_catalog::TypeCatalog;
use windef_catalog::dump::{dump_table, raw_entries, resolve_all};
use windef_core::{Colors, Settings};

use super::loader::{SettingsArgs, require};

pub struct DumpArgs {
    pub json: bool,
    pub raw: bool,
    pub settings: SettingsArgs,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let (settings, catalog) = require(&args.settings);

    let rendered = if args.raw {
        to_json(&raw_entries(&*catalog))
    } else if args.json {
        resolve_all(&*catalog, settings)
            .map_err(|e| e.to_string())
            .and_then(|map| to_json(&map))
    } else {
        render_table(&*catalog, settings, Colors::new(args.color))
    };

    match rendered {
        Ok(out) => print!("{}", out),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

fn render_table(catalog: &dyn TypeCatalog, settings: Settings, c: Colors) -> Result<String, String> {
    dump_table(catalog, settings, c, |_, _| true).map_err(|e| e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| e.to_string())
}
