use crate::client::Client;
use crate::resources::tasks::Address;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hub {
    pub id: String,
    pub name: String,
    pub teams: Vec<String>,
    pub address: Address,
}

pub struct HubsService<'a> {
    client: &'a Client,
}

impl<'a> HubsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the organization's hubs.
    /// https://docs.onfleet.com/reference#list-hubs
    pub async fn list(&self) -> Result<Vec<Hub>> {
        self.client.get("hubs").await
    }
}
