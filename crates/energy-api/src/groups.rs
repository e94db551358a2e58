// File: crates/energy-api/src/groups.rs
// Summary: Appliance group CRUD.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, Appliance, ApplianceGroup, NewGroup};

impl ApiClient {
    pub async fn groups(&self) -> Result<Vec<ApplianceGroup>> {
        self.get("/groups/").await
    }

    pub async fn group(&self, id: i64) -> Result<ApplianceGroup> {
        self.get(&format!("/groups/{id}")).await
    }

    /// Appliances assigned to one group.
    pub async fn group_appliances(&self, id: i64) -> Result<Vec<Appliance>> {
        self.get(&format!("/groups/{id}/appliances")).await
    }

    pub async fn create_group(&self, group: &NewGroup) -> Result<Ack> {
        self.post("/groups/", group).await
    }

    pub async fn update_group(&self, id: i64, group: &NewGroup) -> Result<Ack> {
        self.put(&format!("/groups/{id}"), group).await
    }

    pub async fn delete_group(&self, id: i64) -> Result<Ack> {
        self.delete(&format!("/groups/{id}")).await
    }
}
