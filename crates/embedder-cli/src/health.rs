//! Health report for the one-time model-load check.

use serde::Serialize;

/// Outcome of a model-load attempt.
///
/// Exactly one of two shapes is ever produced:
/// `{"status":"OK","model":"Loaded"}` or `{"status":"Error","message":"..."}`.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum HealthReport {
    #[serde(rename = "OK")]
    Ok { model: String },

    #[serde(rename = "Error")]
    Error { message: String },
}

impl HealthReport {
    /// Report for a successful load.
    pub fn loaded() -> Self {
        HealthReport::Ok {
            model: "Loaded".to_string(),
        }
    }

    /// Collapse a load attempt into a report.
    pub fn from_load<T, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::loaded(),
            Err(e) => HealthReport::Error {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_shape() {
        let json = serde_json::to_string(&HealthReport::loaded()).unwrap();
        assert_eq!(json, r#"{"status":"OK","model":"Loaded"}"#);
    }

    #[test]
    fn test_error_shape() {
        let report = HealthReport::from_load(Err::<(), String>("weights missing".to_string()));
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"status":"Error","message":"weights missing"}"#);
    }

    #[test]
    fn test_from_load_success() {
        let report = HealthReport::from_load(Ok::<_, String>(42));
        assert!(matches!(report, HealthReport::Ok { .. }));
    }

    #[test]
    fn test_error_message_is_non_empty() {
        let report = HealthReport::from_load(Err::<(), String>("boom".to_string()));
        match report {
            HealthReport::Error { message } => assert!(!message.is_empty()),
            _ => panic!("expected error report"),
        }
    }
}
