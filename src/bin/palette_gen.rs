//! palette-gen - print harmony palettes for a base color.
//!
//! ```text
//! palette-gen [COLOR] [SCHEME] [--css]
//! ```
//!
//! COLOR defaults to the configured base color; SCHEME is `all` or a
//! category name.

use palette_gen::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load_or_default(
        dirs::config_dir().map(|p| p.join("palette-gen/config.yaml")).unwrap_or_default(),
    );

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let css = args.iter().any(|a| a == "--css");
    args.retain(|a| a != "--css");

    let mut palette = Palette::from_config(&config)?;
    if let Some(color) = args.first() {
        palette.set_base(color);
    }
    if let Some(scheme) = args.get(1) {
        palette.set_active(scheme.parse::<ActiveScheme>()?);
    }

    if css {
        println!("{}", palette.css_variables());
        return Ok(());
    }

    for item in palette.grid() {
        println!(
            "{:<14} {}  {:<24} {}",
            item.var_name,
            item.hex,
            palette_gen::export::lch_label(item.lch),
            item.category
        );
    }

    Ok(())
}
