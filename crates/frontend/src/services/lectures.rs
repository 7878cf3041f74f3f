use gloo_net::http::Request;

use crate::state::LecturesAction;

pub struct LecturesService;

impl LecturesService {
    /// Fetch the generated artifact once. Every failure becomes
    /// `LecturesAction::Failed`; nothing here surfaces to the viewer.
    pub async fn load(url: &str) -> LecturesAction {
        let response = match Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return LecturesAction::Failed(format!("Request failed: {:?}", e)),
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => LecturesAction::from_response(status, &body),
            Err(e) => LecturesAction::Failed(format!("Failed to read response: {:?}", e)),
        }
    }
}
