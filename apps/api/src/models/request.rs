use serde::{Deserialize, Serialize};

/// Where the posting comes from. Non-blank `text` wins over `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPostingInput {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub job_posting: JobPostingInput,
    #[serde(default)]
    pub resume_text: Option<String>,
}

impl AnalyzeRequest {
    /// Resume text worth aligning against; blank resumes count as "not supplied".
    pub fn resume(&self) -> Option<&str> {
        self.resume_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Posting text as ingested, with the URL it came from (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPosting {
    pub text: String,
    pub source_url: Option<String>,
    /// Why the URL could not be fetched; `text` then holds a placeholder.
    pub fetch_error: Option<String>,
}

impl RawPosting {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: None,
            fetch_error: None,
        }
    }

    pub fn fetched(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: Some(url.into()),
            fetch_error: None,
        }
    }

    /// Degraded posting: analysis still runs over the placeholder text.
    pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            text: format!("Error fetching URL: {reason}"),
            source_url: Some(url.into()),
            fetch_error: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_missing_optionals() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"job_posting": {"text": "Rust engineer"}}"#).unwrap();
        assert_eq!(req.job_posting.text.as_deref(), Some("Rust engineer"));
        assert!(req.job_posting.url.is_none());
        assert!(req.resume().is_none());
    }

    #[test]
    fn test_blank_resume_is_not_supplied() {
        let req = AnalyzeRequest {
            job_posting: JobPostingInput::default(),
            resume_text: Some("   \n".to_string()),
        };
        assert!(req.resume().is_none());
    }

    #[test]
    fn test_fetch_failed_posting_carries_placeholder() {
        let posting = RawPosting::fetch_failed("https://jobs.example.com/1", "timed out");
        assert_eq!(posting.text, "Error fetching URL: timed out");
        assert_eq!(posting.fetch_error.as_deref(), Some("timed out"));
        assert_eq!(posting.source_url.as_deref(), Some("https://jobs.example.com/1"));
    }
}
