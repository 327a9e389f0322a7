//! Blocking download of the target image

use crate::io::error::{MosaicError, Result, file_system_error};
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Download `url` and write the response body verbatim to `destination`
///
/// The body is not inspected; a successful response carrying something other
/// than an image only fails later, when the file is decoded.
///
/// # Errors
///
/// Returns an error if:
/// - The request fails at the transport level or exceeds `timeout`
/// - The server answers with a non-success status
/// - The destination file cannot be written
pub fn download_image(url: &str, destination: &Path, timeout: Duration) -> Result<u64> {
    tracing::info!(url, destination = %destination.display(), "downloading target image");

    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    let response = agent.get(url).call().map_err(|e| fetch_error(url, &e))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| MosaicError::Fetch {
            url: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
    }
    std::fs::write(destination, &body)
        .map_err(|e| file_system_error(destination, "write download", e))?;

    tracing::debug!(bytes = body.len(), "download complete");
    Ok(body.len() as u64)
}

fn fetch_error(url: &str, error: &ureq::Error) -> MosaicError {
    let reason = match error {
        ureq::Error::Status(code, response) => {
            format!("server responded with status {code} {}", response.status_text())
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    };
    MosaicError::Fetch {
        url: url.to_string(),
        reason,
    }
}
