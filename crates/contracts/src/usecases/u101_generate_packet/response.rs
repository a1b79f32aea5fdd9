use serde::{Deserialize, Serialize};

/// Packet generator reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePacketResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the page does once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Go to the generated document
    Navigate(String),
    /// Tell the user what went wrong
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_response(response: GeneratePacketResponse) -> Self {
        match (response.success, response.file_url) {
            (true, Some(url)) if !url.is_empty() => SubmitOutcome::Navigate(url),
            (true, _) => SubmitOutcome::Failed("Error: no file URL returned".to_string()),
            (false, _) => SubmitOutcome::Failed(format!(
                "Error: {}",
                response.message.unwrap_or_else(|| "unknown error".to_string())
            )),
        }
    }

    pub fn from_transport_error(error: &str) -> Self {
        SubmitOutcome::Failed(format!("Error generating PDF packet: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_navigates() {
        let resp: GeneratePacketResponse =
            serde_json::from_str(r#"{"success": true, "file_url": "/download/packet_1.pdf"}"#)
                .unwrap();
        assert_eq!(
            SubmitOutcome::from_response(resp),
            SubmitOutcome::Navigate("/download/packet_1.pdf".to_string())
        );
    }

    #[test]
    fn test_failure_surfaces_message() {
        let resp: GeneratePacketResponse =
            serde_json::from_str(r#"{"success": false, "message": "disk full"}"#).unwrap();
        assert_eq!(
            SubmitOutcome::from_response(resp),
            SubmitOutcome::Failed("Error: disk full".to_string())
        );
    }

    #[test]
    fn test_success_without_url_is_failure() {
        let resp = GeneratePacketResponse {
            success: true,
            file_url: None,
            message: None,
        };
        assert!(matches!(SubmitOutcome::from_response(resp), SubmitOutcome::Failed(_)));
    }

    #[test]
    fn test_transport_error() {
        assert_eq!(
            SubmitOutcome::from_transport_error("HTTP 500"),
            SubmitOutcome::Failed("Error generating PDF packet: HTTP 500".to_string())
        );
    }
}
