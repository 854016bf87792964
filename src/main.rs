// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, paths, Flags, Screen};

const HELP: &str = "\
folio - personal portfolio

USAGE:
  folio [OPTIONS]

OPTIONS:
  --screen <NAME>       Screen to open: home, projects, experience, contact
  --config-dir <PATH>   Directory holding settings.toml
  --data-dir <PATH>     Directory holding local storage
  --diagnostics-out <PATH>
                        Write the diagnostics journal (JSON) here on exit
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let screen: Option<Screen> = match args.opt_value_from_str("--screen") {
        Ok(screen) => screen,
        Err(err) => {
            log::warn!("Ignoring --screen: {err}");
            None
        }
    };
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_default();
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or_default();
    let diagnostics_out: Option<String> = args
        .opt_value_from_str("--diagnostics-out")
        .unwrap_or_default();

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    app::run(Flags {
        data_dir,
        config_dir,
        screen,
        diagnostics_out,
    })
}
