use crate::client::Client;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub name: String,
    pub hub: Option<String>,
    pub workers: Vec<String>,
    pub managers: Vec<String>,
    pub tasks: Vec<String>,
}

pub struct TeamsService<'a> {
    client: &'a Client,
}

impl<'a> TeamsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the organization's teams.
    /// https://docs.onfleet.com/reference#list-teams
    pub async fn list(&self) -> Result<Vec<Team>> {
        self.client.get("teams").await
    }
}
