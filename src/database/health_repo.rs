use sqlx::SqlitePool;

const SQL_PING: &str = "SELECT 1";

pub async fn ping(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query_scalar::<_, i64>(SQL_PING)
        .fetch_one(pool)
        .await
        .map(|_| ())
}
