use alchemy_engine::logging::{init_logging, LoggingConfig};
use alchemy_engine::text::FontSystem;
use alchemy_studio::ensure_parent_dir;
use alchemy_studio::icon::{generate_icon, IconConfig};

const ICON_DIR: &str = "chrome-extension/icons";

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    for config in IconConfig::standard_set(ICON_DIR) {
        ensure_parent_dir(&config.output)?;
        generate_icon(&config, &mut fonts)?;
        println!("✓ Icon created: {}", config.output.display());
    }
    println!("All icons generated.");
    Ok(())
}
