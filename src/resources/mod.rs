pub mod admins;
pub mod hubs;
pub mod organization;
pub mod tasks;
pub mod teams;
pub mod workers;

pub use admins::{Admin, AdminsService};
pub use hubs::{Hub, HubsService};
pub use organization::{Organization, OrganizationService};
pub use tasks::{
    Address, CompletionDetails, Container, Destination, Overrides, Recipient, Task,
    TaskCreatePayload, TaskError, TaskListOptions, TaskPayload, TaskState, TasksService,
};
pub use teams::{Team, TeamsService};
pub use workers::{Worker, WorkersService};
