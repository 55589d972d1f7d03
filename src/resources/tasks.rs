use crate::client::Client;
use crate::utils::error::{OnfleetError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task as returned by the API.
///
/// Referential fields (`worker`, `merchant`, `executor`, ...) are opaque
/// identifiers validated only by the remote service. Fields whose shapes
/// Onfleet leaves undocumented are kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub organization: String,
    pub short_id: String,
    #[serde(rename = "trackingURL")]
    pub tracking_url: String,
    pub worker: String,
    pub merchant: String,
    pub executor: String,
    pub creator: String,
    pub dependencies: Vec<Value>,
    pub state: i64,
    pub complete_after: i64,
    pub complete_before: Value,
    pub pickup_task: bool,
    pub notes: String,
    pub completion_details: CompletionDetails,
    pub feedback: Vec<Value>,
    pub metadata: Vec<Value>,
    pub overrides: Overrides,
    pub container: Container,
    pub recipients: Vec<Recipient>,
    pub destination: Destination,
    pub did_auto_assign: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionDetails {
    pub events: Vec<Value>,
    pub time: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
    #[serde(rename = "recipientSkipSMSNotifications")]
    pub recipient_skip_sms_notifications: Value,
    pub recipient_notes: Value,
    pub recipient_name: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub r#type: String,
    pub worker: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipient {
    pub id: String,
    pub organization: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub name: String,
    pub phone: String,
    pub notes: String,
    #[serde(rename = "skipSMSNotifications")]
    pub skip_sms_notifications: bool,
    pub metadata: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub time_created: i64,
    pub time_last_modified: i64,
    pub address: Address,
    pub notes: String,
    pub metadata: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub number: String,
    pub street: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Task lifecycle state, as the `state` query filter encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Unassigned,
    Assigned,
    Active,
    Completed,
}

impl TaskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Unassigned => "0",
            TaskState::Assigned => "1",
            TaskState::Active => "2",
            TaskState::Completed => "3",
        }
    }
}

/// Filters for listing tasks. `from` is a lower creation-time bound in
/// unix milliseconds and is always sent; states and worker only when set.
#[derive(Debug, Clone, Default)]
pub struct TaskListOptions {
    pub from: i64,
    pub states: Vec<TaskState>,
    pub worker: Option<String>,
}

impl TaskListOptions {
    pub(crate) fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("from", &self.from.to_string());
        for state in &self.states {
            query.append_pair("state", state.as_str());
        }
        if let Some(worker) = &self.worker {
            query.append_pair("worker", worker);
        }
        query.finish()
    }
}

/// Fields accepted when creating or updating a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskPayload {
    pub destination: Destination,
    pub recipients: Vec<Recipient>,
    pub complete_after: i64,
    pub notes: String,
    pub container: Container,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskCreatePayload {
    pub tasks: Vec<TaskPayload>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskError {
    pub status_code: i64,
    pub error: i64,
    pub message: String,
    pub cause: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TaskBatchItemError {
    pub error: TaskError,
    #[allow(dead_code)]
    pub task: TaskPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TaskBatchResponse {
    pub tasks: Vec<Task>,
    pub errors: Vec<TaskBatchItemError>,
}

pub struct TasksService<'a> {
    client: &'a Client,
}

impl<'a> TasksService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List tasks, optionally filtered by creation time, state and worker.
    /// https://docs.onfleet.com/reference#list-tasks
    pub async fn list(&self, opts: Option<&TaskListOptions>) -> Result<Vec<Task>> {
        let path = match opts {
            Some(opts) => format!("tasks?{}", opts.to_query()),
            None => "tasks".to_string(),
        };
        self.client.get(&path).await
    }

    /// Create tasks in batch.
    /// https://docs.onfleet.com/reference#create-tasks-in-batch
    ///
    /// When the API reports any per-item error, the first error message is
    /// returned and tasks the API did create are discarded. The remote
    /// call may therefore have partially succeeded even though this
    /// returns an error; callers should not treat the error as a
    /// guarantee that nothing was created.
    pub async fn create(&self, payload: &TaskCreatePayload) -> Result<Vec<Task>> {
        let response: TaskBatchResponse = self.client.post("tasks/batch", payload).await?;

        if let Some(first) = response.errors.first() {
            return Err(OnfleetError::BatchError(first.error.message.clone()));
        }

        Ok(response.tasks)
    }

    /// Update a task.
    /// https://docs.onfleet.com/reference#update-task
    pub async fn update(&self, task_id: &str, payload: &TaskPayload) -> Result<Task> {
        self.client.put(&format!("tasks/{}", task_id), payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_always_carries_from() {
        let opts = TaskListOptions::default();
        assert_eq!(opts.to_query(), "from=0");
    }

    #[test]
    fn test_query_repeats_state_per_entry() {
        let opts = TaskListOptions {
            from: 1700000000000,
            states: vec![TaskState::Unassigned, TaskState::Active],
            worker: None,
        };
        assert_eq!(opts.to_query(), "from=1700000000000&state=0&state=2");
    }

    #[test]
    fn test_query_includes_worker_when_set() {
        let opts = TaskListOptions {
            from: 5,
            states: Vec::new(),
            worker: Some("worker_1".to_string()),
        };
        assert_eq!(opts.to_query(), "from=5&worker=worker_1");
    }

    #[test]
    fn test_task_payload_json_round_trip() {
        let payload = TaskPayload {
            destination: Destination {
                address: Address {
                    number: "2829".to_string(),
                    street: "Vallejo St".to_string(),
                    city: "San Francisco".to_string(),
                    state: "CA".to_string(),
                    postal_code: "94123".to_string(),
                    country: "United States".to_string(),
                    ..Address::default()
                },
                notes: "ring the bell".to_string(),
                ..Destination::default()
            },
            recipients: vec![Recipient {
                name: "Blas Silkovich".to_string(),
                phone: "+14155550101".to_string(),
                skip_sms_notifications: true,
                ..Recipient::default()
            }],
            complete_after: 1700000000,
            notes: "leave at the door".to_string(),
            container: Container {
                r#type: "WORKER".to_string(),
                worker: "worker_1".to_string(),
            },
        };

        let json = serde_json::to_string(&payload).unwrap();
        let decoded: TaskPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_wire_field_names_match_api_casing() {
        let payload = TaskPayload {
            complete_after: 42,
            ..TaskPayload::default()
        };
        let json: Value = serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();

        assert_eq!(json["completeAfter"], 42);
        assert!(json["recipients"][0].is_null());

        let recipient_json = serde_json::to_value(Recipient::default()).unwrap();
        assert!(recipient_json.get("skipSMSNotifications").is_some());

        let task_json = serde_json::to_value(Task::default()).unwrap();
        assert!(task_json.get("trackingURL").is_some());
        assert!(task_json.get("shortId").is_some());
    }

    #[test]
    fn test_task_decodes_with_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"id":"t_1","completeAfter":1700000000}"#).unwrap();
        assert_eq!(task.id, "t_1");
        assert_eq!(task.complete_after, 1700000000);
        assert_eq!(task.state, 0);
        assert!(task.complete_before.is_null());
    }

    #[test]
    fn test_batch_response_decodes_errors() {
        let raw = r#"{
            "tasks": [{"id": "t_ok"}],
            "errors": [{
                "error": {"statusCode": 400, "error": 1000, "message": "Address invalid", "cause": "destination"},
                "task": {"notes": "bad one"}
            }]
        }"#;
        let response: TaskBatchResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.tasks.len(), 1);
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].error.message, "Address invalid");
    }

    #[test]
    fn test_task_state_strings() {
        assert_eq!(TaskState::Unassigned.as_str(), "0");
        assert_eq!(TaskState::Assigned.as_str(), "1");
        assert_eq!(TaskState::Active.as_str(), "2");
        assert_eq!(TaskState::Completed.as_str(), "3");
    }
}
