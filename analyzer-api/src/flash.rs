use analyzer_ui::Flash;
use tower_sessions::Session;

const FLASH_KEY: &str = "flash";

/// Queues a message for the next rendered page. A session failure only costs the message.
pub async fn push(session: &Session, flash: Flash) {
    let mut flashes: Vec<Flash> = session
        .get(FLASH_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    flashes.push(flash);

    if let Err(e) = session.insert(FLASH_KEY, flashes).await {
        tracing::warn!("Failed to store flash message: {}", e);
    }
}

/// Drains the queued messages.
pub async fn take(session: &Session) -> Vec<Flash> {
    match session.remove::<Vec<Flash>>(FLASH_KEY).await {
        Ok(flashes) => flashes.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read flash messages: {}", e);
            Vec::new()
        }
    }
}
