use alchemy_engine::logging::{init_logging, LoggingConfig};
use alchemy_engine::text::FontSystem;
use alchemy_studio::ensure_parent_dir;
use alchemy_studio::poster::{generate_poster, PosterConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = PosterConfig::default();
    ensure_parent_dir(&config.output)?;

    let mut fonts = FontSystem::new();
    let report = generate_poster(&config, &mut fonts)?;
    print!("{report}");
    Ok(())
}
