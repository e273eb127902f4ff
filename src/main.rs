// SPDX-License-Identifier: MPL-2.0

use calico_gallery::app;

const HELP: &str = "\
calico_gallery - desktop showcase for Calico Aquatics

USAGE:
  calico_gallery [OPTIONS]

OPTIONS:
  --gallery-dir <DIR>   Directory scanned for gallery images
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
  -V, --version         Print the version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("calico_gallery {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let gallery_dir = args.opt_value_from_str("--gallery-dir").unwrap_or(None);
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or(None);

    app::paths::init_cli_overrides(gallery_dir, config_dir);

    app::run()
}
