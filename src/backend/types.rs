//! Wire types shared with the prediction service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Threshold the service applies when it does not report one
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Label the service uses for a positive verdict
pub const PHISHING_LABEL: &str = "phishing";

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub url: String,
}

impl CheckRequest {
    /// Build a request from raw user input, or `None` when nothing is left after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            None
        } else {
            Some(Self { url: url.to_string() })
        }
    }
}

/// Successful verdict from the prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    pub label: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl CheckResult {
    pub fn is_phishing(&self) -> bool {
        self.label.eq_ignore_ascii_case(PHISHING_LABEL)
    }

    /// Probability as a percentage with two decimals, e.g. `"93.00"`.
    pub fn probability_percent(&self) -> String {
        format!("{:.2}", self.probability * 100.0)
    }

    /// Reported threshold; a missing or zero value shows the service default.
    pub fn display_threshold(&self) -> f64 {
        self.threshold
            .filter(|t| *t != 0.0)
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Reject payloads that decoded but do not describe a usable verdict.
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("label is empty".to_string());
        }
        if !is_unit_interval(self.probability) {
            return Err(format!("probability {} is outside 0..1", self.probability));
        }
        if let Some(threshold) = self.threshold {
            if !is_unit_interval(threshold) {
                return Err(format!("threshold {} is outside 0..1", threshold));
            }
        }
        Ok(())
    }
}

fn is_unit_interval(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Error body returned with non-2xx responses
///
/// `detail` is usually a string, but request validation errors carry a
/// list of `{"loc": .., "msg": ..}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckError {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl CheckError {
    /// Human-readable detail, or `None` when there is nothing to show.
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            Value::Null => return None,
            Value::String(detail) => detail.trim().to_string(),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    Value::Array(items.clone()).to_string()
                } else {
                    msgs.join("; ")
                }
            }
            other => other.to_string(),
        };
        (!message.is_empty()).then_some(message)
    }
}

/// Response of `GET /healthz`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verdict(label: &str, probability: f64, threshold: Option<f64>) -> CheckResult {
        CheckResult {
            url: "http://a.co".to_string(),
            label: label.to_string(),
            probability,
            threshold,
        }
    }

    #[test]
    fn test_request_from_input_trims() {
        let request = CheckRequest::from_input("  http://a.co \n").unwrap();
        assert_eq!(request.url, "http://a.co");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"url":"http://a.co"}"#
        );
    }

    #[test]
    fn test_request_from_blank_input() {
        assert!(CheckRequest::from_input("").is_none());
        assert!(CheckRequest::from_input(" \t\n").is_none());
    }

    #[test]
    fn test_phishing_label_is_case_insensitive() {
        assert!(verdict("phishing", 0.9, None).is_phishing());
        assert!(verdict("PHISHING", 0.9, None).is_phishing());
        assert!(!verdict("legit", 0.1, None).is_phishing());
        assert!(!verdict("phishing-ish", 0.9, None).is_phishing());
    }

    #[test]
    fn test_result_decodes_without_threshold() {
        let body = r#"{"url":"http://a.co","label":"legit","probability":0.12}"#;
        let result: CheckResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.threshold, None);
        assert_eq!(result.display_threshold(), DEFAULT_THRESHOLD);
        assert_eq!(result.probability_percent(), "12.00");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(verdict("phishing", 0.93, Some(0.6)).validate().is_ok());
        assert!(verdict("phishing", 1.5, None).validate().is_err());
        assert!(verdict("phishing", f64::NAN, None).validate().is_err());
        assert!(verdict("phishing", 0.5, Some(-0.1)).validate().is_err());
        assert!(verdict("  ", 0.5, None).validate().is_err());
    }

    #[test]
    fn test_zero_threshold_shows_default() {
        assert_eq!(verdict("legit", 0.1, Some(0.0)).display_threshold(), DEFAULT_THRESHOLD);
        assert_eq!(verdict("legit", 0.1, Some(0.45)).display_threshold(), 0.45);
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let err: CheckError = serde_json::from_str("{}").unwrap();
        assert_eq!(err.message(), None);
        let err: CheckError = serde_json::from_str(r#"{"detail":null}"#).unwrap();
        assert_eq!(err.message(), None);
        let err: CheckError = serde_json::from_str(r#"{"detail":"bad url"}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some("bad url"));
        let err: CheckError = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_validation_error_detail_list() {
        let body = r#"{"detail":[{"loc":["body","url"],"msg":"field required"},{"msg":"str type expected"}]}"#;
        let err: CheckError = serde_json::from_str(body).unwrap();
        assert_eq!(
            err.message().as_deref(),
            Some("field required; str type expected")
        );

        let err: CheckError = serde_json::from_str(r#"{"detail":[1,2]}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some("[1,2]"));
        let err: CheckError = serde_json::from_str(r#"{"detail":{"code":7}}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some(r#"{"code":7}"#));
    }
}
