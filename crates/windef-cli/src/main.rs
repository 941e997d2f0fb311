mod cli;
mod commands;

use cli::{DumpParams, ListParams, ResolveParams, SigParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("resolve", m)) => {
            let params = ResolveParams::from_matches(m);
            commands::resolve::run(params.into());
        }
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("sig", m)) => {
            let params = SigParams::from_matches(m);
            commands::sig::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
