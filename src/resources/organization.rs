use crate::client::Client;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub name: String,
    pub email: String,
    pub timezone: String,
    pub country: String,
    pub delegatees: Vec<String>,
}

pub struct OrganizationService<'a> {
    client: &'a Client,
}

impl<'a> OrganizationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the organization owning the API key.
    /// https://docs.onfleet.com/reference#get-details
    pub async fn get(&self) -> Result<Organization> {
        self.client.get("organization").await
    }
}
