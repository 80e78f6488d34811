use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::OnceCell;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AdmissionOutcome {
    Accepted,
    ElectorNotFound,
    AlreadyVoted,
    DirectoryUnavailable,
    Internal,
}

impl AdmissionOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AdmissionOutcome::Accepted => "accepted",
            AdmissionOutcome::ElectorNotFound => "elector_not_found",
            AdmissionOutcome::AlreadyVoted => "already_voted",
            AdmissionOutcome::DirectoryUnavailable => "directory_unavailable",
            AdmissionOutcome::Internal => "internal",
        }
    }
}

static METRICS: OnceCell<Mutex<HashMap<AdmissionOutcome, u64>>> = OnceCell::new();

fn get() -> &'static Mutex<HashMap<AdmissionOutcome, u64>> {
    METRICS.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn record_admission(outcome: AdmissionOutcome) {
    let mut m = get().lock().expect("metrics mutex poisoned");
    *m.entry(outcome).or_insert(0) += 1;
}

pub fn snapshot_as_json() -> serde_json::Value {
    use serde_json::json;
    let m = get().lock().expect("metrics mutex poisoned");

    let admissions: Vec<serde_json::Value> = m
        .iter()
        .map(|(outcome, count)| json!({ "outcome": outcome.as_str(), "count": count }))
        .collect();

    json!({ "admission_total": admissions })
}
