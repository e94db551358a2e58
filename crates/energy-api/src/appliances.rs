// File: crates/energy-api/src/appliances.rs
// Summary: Appliance CRUD and consumption aggregates.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, Appliance, ApplianceCreated, ApplianceStats, NewAppliance};

impl ApiClient {
    pub async fn appliances(&self) -> Result<Vec<Appliance>> {
        self.get("/appliances/").await
    }

    pub async fn appliance(&self, id: i64) -> Result<Appliance> {
        self.get(&format!("/appliances/{id}")).await
    }

    /// The heaviest consumers, largest first.
    pub async fn top_appliances(&self) -> Result<Vec<Appliance>> {
        self.get("/appliances/top").await
    }

    pub async fn appliance_stats(&self) -> Result<ApplianceStats> {
        self.get("/appliances/stats").await
    }

    pub async fn create_appliance(&self, appliance: &NewAppliance) -> Result<Ack<ApplianceCreated>> {
        self.post("/appliances/", appliance).await
    }

    pub async fn update_appliance(&self, id: i64, appliance: &NewAppliance) -> Result<Ack> {
        self.put(&format!("/appliances/{id}"), appliance).await
    }

    pub async fn delete_appliance(&self, id: i64) -> Result<Ack> {
        self.delete(&format!("/appliances/{id}")).await
    }
}
