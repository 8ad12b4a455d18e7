use crate::config::LnConfig;
use crate::errors::LnError;

/// Layers `ln.*`, `ln.local.*` and `LN__*` environment variables over the
/// defaults, e.g. `LN__MIN_LEVEL=info` or `LN__TAG=caller-location`.
pub fn load_config() -> Result<LnConfig, LnError> {
    let _ = dotenvy::dotenv();

    let builder = ::config::Config::builder()
        .add_source(::config::File::with_name("ln").required(false))
        .add_source(::config::File::with_name("ln.local").required(false))
        .add_source(
            ::config::Environment::with_prefix("LN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    let cfg: LnConfig = builder.build()?.try_deserialize()?;
    log::info!(
        "ln config loaded: min_level={}, tag={:?}",
        cfg.min_level,
        cfg.tag
    );

    Ok(cfg)
}
