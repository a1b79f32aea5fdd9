use crate::shared::api_utils::api_url;
use contracts::usecases::u101_generate_packet::{GeneratePacketRequest, GeneratePacketResponse};
use gloo_net::http::Request;

const PROCESS_PATH: &str = "/api/process";

/// Post the serialized form to the packet generator
pub async fn generate_packet(
    request: &GeneratePacketRequest,
) -> Result<GeneratePacketResponse, String> {
    let response = Request::post(&api_url(PROCESS_PATH))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    // Error replies still carry {success: false, message}
    let status = response.status();
    match response.json::<GeneratePacketResponse>().await {
        Ok(body) => Ok(body),
        Err(_) if !response.ok() => Err(format!("HTTP {}", status)),
        Err(e) => Err(format!("Failed to parse response: {}", e)),
    }
}
