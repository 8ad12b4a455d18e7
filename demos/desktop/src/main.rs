use std::io;
use std::sync::Arc;

use ln::{ln_args, ln_d, ln_wtf, Ln, LnError, LogCrateSink};

fn main() -> Result<(), LnError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let config = ln::load_config().unwrap_or_else(|e| {
        log::warn!("falling back to default ln config: {e}");
        ln::LnConfig::default()
    });
    let ln = Ln::from_config(&config, Arc::new(LogCrateSink));
    let ui = ln.tagged("MainActivity");

    ln.v("user click at %d, %d", ln_args!(120, 48))?;
    ln.d("server responded with %d: %s", ln_args!(200, "OK"))?;
    ui.i("frame time %.2fms", ln_args!(16.6667))?;

    let missing = io::Error::new(io::ErrorKind::NotFound, "tiles.db");
    ln.e_err(&missing);
    ln_d!(ln, "cache size {} entries", 1024);
    ln_wtf!(ui, err = &missing; "UH-OH! {}", "no offline cache");

    Ok(())
}
