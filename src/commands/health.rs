use owo_colors::OwoColorize;

use crate::error::{ExplorerError, Result};
use crate::remote::ItemSource;

use super::App;

pub async fn cmd_health(app: &App) -> Result<()> {
    let health = app.source.health().await?;
    if health.is_ok() {
        println!("{} {}", "ok".green(), app.source.base_url());
        Ok(())
    } else {
        let status = match health.detail {
            Some(detail) => format!("{}: {detail}", health.status),
            None => health.status,
        };
        Err(ExplorerError::Unhealthy {
            url: app.source.base_url().to_string(),
            status,
        })
    }
}
