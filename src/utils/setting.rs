// dbbackupd/src/utils/setting.rs
use sqlx::Connection;
use sqlx::mysql::MySqlConnection;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Best-effort connectivity probe against the configured database, run once
/// before the first cycle. The daemon starts either way; individual cycles
/// surface their own dump failures.
pub async fn check_db_connection(db: &DatabaseConfig) -> bool {
    let url = match db.connection_url() {
        Ok(url) => url,
        Err(e) => {
            warn!("❌ {:#}", e);
            return false;
        }
    };

    match MySqlConnection::connect(url.as_str()).await {
        Ok(conn) => {
            let _ = conn.close().await;
            info!(
                "✅ Database {} is reachable at {}:{}",
                db.name, db.host, db.port
            );
            true
        }
        Err(e) => {
            warn!(
                "❌ Could not reach database {} at {}:{}: {}",
                db.name, db.host, db.port, e
            );
            false
        }
    }
}
