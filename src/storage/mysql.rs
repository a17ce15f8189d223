//! MySQL-backed calculation store.
//!
//! The appliance list is stored as a JSON array in a TEXT column; scalar
//! fields map to their own columns. The schema is applied on connect so a
//! fresh database works without migrations.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{MySql, QueryBuilder, Row};
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::model::{Appliance, Calculation, CalculationPatch, NewCalculation};

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS calculations (
    id VARCHAR(36) PRIMARY KEY,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    cost_per_kwh DOUBLE NOT NULL,
    appliances TEXT NOT NULL,
    customer_name TEXT NULL,
    customer_email TEXT NULL,
    customer_phone TEXT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Calculation store backed by a MySQL connection pool.
pub struct MySqlStorage {
    pool: MySqlPool,
}

impl MySqlStorage {
    /// Connects to the database and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the pool cannot be established within
    /// `timeout` or the schema statement fails.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self, StorageError> {
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(timeout)
            .connect(url)
            .await?;
        sqlx::query(CREATE_TABLE_SQL).execute(&pool).await?;
        Ok(Self { pool })
    }
}

fn row_to_calculation(row: &MySqlRow) -> Result<Calculation, StorageError> {
    let appliances_json: String = row.try_get("appliances")?;
    let appliances: Vec<Appliance> = serde_json::from_str(&appliances_json)?;
    Ok(Calculation {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        cost_per_kwh: row.try_get("cost_per_kwh")?,
        appliances,
        customer_name: row.try_get("customer_name")?,
        customer_email: row.try_get("customer_email")?,
        customer_phone: row.try_get("customer_phone")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

/// Builds the dynamic `UPDATE` for the supplied patch fields, or `None`
/// when the patch is empty.
fn build_update(
    id: &str,
    patch: &CalculationPatch,
) -> Result<Option<QueryBuilder<'static, MySql>>, StorageError> {
    if patch.is_empty() {
        return Ok(None);
    }

    let mut builder: QueryBuilder<'static, MySql> = QueryBuilder::new("UPDATE calculations SET ");
    {
        let mut fields = builder.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(location) = &patch.location {
            fields
                .push("location = ")
                .push_bind_unseparated(location.clone());
        }
        if let Some(cost_per_kwh) = patch.cost_per_kwh {
            fields
                .push("cost_per_kwh = ")
                .push_bind_unseparated(cost_per_kwh);
        }
        if let Some(appliances) = &patch.appliances {
            fields
                .push("appliances = ")
                .push_bind_unseparated(serde_json::to_string(appliances)?);
        }
        if let Some(customer_name) = &patch.customer_name {
            fields
                .push("customer_name = ")
                .push_bind_unseparated(customer_name.clone());
        }
        if let Some(customer_email) = &patch.customer_email {
            fields
                .push("customer_email = ")
                .push_bind_unseparated(customer_email.clone());
        }
        if let Some(customer_phone) = &patch.customer_phone {
            fields
                .push("customer_phone = ")
                .push_bind_unseparated(customer_phone.clone());
        }
    }
    builder.push(" WHERE id = ").push_bind(id.to_owned());
    Ok(Some(builder))
}

#[async_trait]
impl Storage for MySqlStorage {
    async fn get(&self, id: &str) -> Result<Option<Calculation>, StorageError> {
        let row = sqlx::query("SELECT * FROM calculations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_calculation).transpose()
    }

    async fn list(&self) -> Result<Vec<Calculation>, StorageError> {
        let rows = sqlx::query("SELECT * FROM calculations ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_calculation).collect()
    }

    async fn create(&self, new: NewCalculation) -> Result<Calculation, StorageError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();
        let appliances_json = serde_json::to_string(&new.appliances)?;

        sqlx::query(
            "INSERT INTO calculations \
             (id, name, location, cost_per_kwh, appliances, \
              customer_name, customer_email, customer_phone, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new.name)
        .bind(&new.location)
        .bind(new.cost_per_kwh)
        .bind(&appliances_json)
        .bind(&new.customer_name)
        .bind(&new.customer_email)
        .bind(&new.customer_phone)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Calculation {
            id,
            name: new.name,
            location: new.location,
            cost_per_kwh: new.cost_per_kwh,
            appliances: new.appliances,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            created_at,
        })
    }

    async fn update(
        &self,
        id: &str,
        patch: CalculationPatch,
    ) -> Result<Option<Calculation>, StorageError> {
        if self.get(id).await?.is_none() {
            return Ok(None);
        }
        if let Some(mut builder) = build_update(id, &patch)? {
            builder.build().execute(&self.pool).await?;
        }
        self.get(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
