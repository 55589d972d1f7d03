use crate::client::Client;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Admin {
    pub id: String,
    pub name: String,
}

pub struct AdminsService<'a> {
    client: &'a Client,
}

impl<'a> AdminsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the organization's administrators.
    /// https://docs.onfleet.com/reference#list-administrators
    pub async fn list(&self) -> Result<Vec<Admin>> {
        self.client.get("admins").await
    }
}
