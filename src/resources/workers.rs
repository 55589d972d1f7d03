use crate::client::Client;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub name: String,
    pub phone: String,
    pub on_duty: bool,
    pub teams: Vec<String>,
    pub tasks: Vec<String>,
    pub metadata: Vec<Value>,
}

pub struct WorkersService<'a> {
    client: &'a Client,
}

impl<'a> WorkersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the organization's workers.
    /// https://docs.onfleet.com/reference#list-workers
    pub async fn list(&self) -> Result<Vec<Worker>> {
        self.client.get("workers").await
    }
}
