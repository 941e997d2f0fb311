use windef_catalog::dump::dump_table;
use windef_core::{Colors, EntryKind};

use super::loader::{SettingsArgs, require};

pub struct ListArgs {
    pub kind: Option<String>,
    pub settings: SettingsArgs,
    pub color: bool,
}

pub fn run(args: ListArgs) {
    let (settings, catalog) = require(&args.settings);

    // clap restricts --kind to known names
    let kind = args.kind.as_deref().and_then(EntryKind::from_name);

    let table = dump_table(&*catalog, settings, Colors::new(args.color), |_, entry| {
        kind.is_none_or(|kind| entry.kind() == kind)
    });
    match table {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
