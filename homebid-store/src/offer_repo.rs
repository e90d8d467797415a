use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use homebid_core::offer::{Offer, OfferSubmission};
use homebid_core::repository::{OfferStore, PersistenceError};

pub struct PostgresOfferStore {
    pool: PgPool,
}

impl PostgresOfferStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: Uuid,
    realtor_name: String,
    offer_amount: f64,
    is_cash: bool,
    contingencies: String,
    closing_time: i64,
    is_valid: bool,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Offer {
            id: row.id,
            realtor_name: row.realtor_name,
            offer_amount: row.offer_amount,
            is_cash: row.is_cash,
            contingencies: row.contingencies,
            closing_time: row.closing_time,
            is_valid: row.is_valid,
        }
    }
}

fn persistence_err(err: sqlx::Error) -> PersistenceError {
    tracing::error!("offer store error: {err}");
    PersistenceError(err.to_string())
}

#[async_trait]
impl OfferStore for PostgresOfferStore {
    async fn create(&self, submission: OfferSubmission) -> Result<Uuid, PersistenceError> {
        let offer = submission.into_offer(Uuid::new_v4());

        // Explicit transaction: a failed insert rolls back cleanly.
        let mut tx = self.pool.begin().await.map_err(persistence_err)?;

        sqlx::query(
            r#"
            INSERT INTO offers (id, realtor_name, offer_amount, is_cash, contingencies, closing_time, is_valid)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(offer.id)
        .bind(&offer.realtor_name)
        .bind(offer.offer_amount)
        .bind(offer.is_cash)
        .bind(&offer.contingencies)
        .bind(offer.closing_time)
        .bind(offer.is_valid)
        .execute(&mut *tx)
        .await
        .map_err(persistence_err)?;

        tx.commit().await.map_err(persistence_err)?;

        Ok(offer.id)
    }

    async fn list_all(&self) -> Result<Vec<Offer>, PersistenceError> {
        let rows = sqlx::query_as::<_, OfferRow>(
            r#"
            SELECT id, realtor_name, offer_amount, is_cash, contingencies, closing_time, is_valid
            FROM offers
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(persistence_err)?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }
}
