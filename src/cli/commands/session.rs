use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::Session;

pub struct SessionOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub retries: Option<u32>,
}

pub async fn run_session(options: SessionOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let resolved = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            model: options.model,
            retries: options.retries,
        },
        &manager.load_or_default(),
    )?;

    let mut session = Session::new(resolved);
    session.run().await
}
