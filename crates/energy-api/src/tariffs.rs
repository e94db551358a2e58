// File: crates/energy-api/src/tariffs.rs
// Summary: Tariff CRUD and rate lookups.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, NewTariff, Tariff};

impl ApiClient {
    pub async fn tariffs(&self) -> Result<Vec<Tariff>> {
        self.get("/tariffs/").await
    }

    pub async fn active_tariffs(&self) -> Result<Vec<Tariff>> {
        self.get("/tariffs/active").await
    }

    /// The tariff applying at the current hour.
    pub async fn current_tariff(&self) -> Result<Tariff> {
        self.get("/tariffs/current").await
    }

    pub async fn tariff(&self, id: i64) -> Result<Tariff> {
        self.get(&format!("/tariffs/{id}")).await
    }

    pub async fn create_tariff(&self, tariff: &NewTariff) -> Result<Ack> {
        self.post("/tariffs/", tariff).await
    }

    pub async fn update_tariff(&self, id: i64, tariff: &NewTariff) -> Result<Ack> {
        self.put(&format!("/tariffs/{id}"), tariff).await
    }

    pub async fn delete_tariff(&self, id: i64) -> Result<Ack> {
        self.delete(&format!("/tariffs/{id}")).await
    }
}
