//! Supervisor jobs (`jobs/`).

use hasupervisor_core::Lenient;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// Conditions a job checks before it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCondition {
    AutoUpdate,
    FreeSpace,
    Frozen,
    Haos,
    Healthy,
    HostNetwork,
    InternetHost,
    InternetSystem,
    MountAvailable,
    OsAgent,
    PluginsUpdated,
    Running,
    SupervisorUpdated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: Option<String>,
    pub reference: Option<String>,
    #[serde(with = "uuid::serde::simple")]
    pub uuid: Uuid,
    pub progress: f64,
    pub stage: Option<String>,
    pub done: Option<bool>,
    pub errors: Vec<JobError>,
    pub created: Timestamp,
    pub child_jobs: Vec<Job>,
}

/// Response of `GET jobs/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobsInfo {
    pub ignore_conditions: Vec<Lenient<JobCondition>>,
    pub jobs: Vec<Job>,
}

/// Body of `POST jobs/options`. Only conditions this client knows can be sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsOptions {
    pub ignore_conditions: Vec<JobCondition>,
}

request_models!(JobsOptions);
response_models!(Job, JobsInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use hasupervisor_core::{RequestModel, ResponseModel, to_wire};
    use serde_json::{Value, json};

    #[test]
    fn test_jobs_info_round_trip() {
        let data = json!({
            "ignore_conditions": ["free_space", "time_travel"],
            "jobs": [
                {
                    "name": "backup_manager_full_backup",
                    "reference": "89cc71e6",
                    "uuid": "2febe59311f94d6fba36482e4b25ad2a",
                    "progress": 12.5,
                    "stage": "addons",
                    "done": false,
                    "errors": [],
                    "created": "2024-05-31T16:00:00+00:00",
                    "child_jobs": [
                        {
                            "name": "backup_store_addons",
                            "reference": null,
                            "uuid": "6c2e0a7bf0a24fc1b7c89d3b0c6a2a5e",
                            "progress": 0.5,
                            "stage": null,
                            "done": true,
                            "errors": [{"type": "BackupError", "message": "Backup was interrupted"}],
                            "created": "2024-05-31T16:00:01+00:00",
                            "child_jobs": []
                        }
                    ]
                }
            ]
        });
        let info = JobsInfo::from_wire(data.clone()).unwrap();
        assert_eq!(info.ignore_conditions[0], JobCondition::FreeSpace);
        assert_eq!(info.ignore_conditions[1].unknown(), Some("time_travel"));
        let child = &info.jobs[0].child_jobs[0];
        assert_eq!(child.errors[0].error_type, "BackupError");
        assert_eq!(child.uuid.simple().to_string(), "6c2e0a7bf0a24fc1b7c89d3b0c6a2a5e");
        assert_eq!(Value::Object(to_wire(&info).unwrap()), data);
    }

    #[test]
    fn test_jobs_options_encoding() {
        let options = JobsOptions {
            ignore_conditions: vec![JobCondition::Healthy, JobCondition::InternetHost],
        };
        assert_eq!(
            Value::Object(options.to_wire().unwrap()),
            json!({"ignore_conditions": ["healthy", "internet_host"]})
        );
    }
}
