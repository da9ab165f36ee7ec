use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::core::App;
use crate::app::models::{SearchRequest, WalletSnapshot};
use crate::config::StalePolicy;
use crate::constants::INPUT_MAX_LEN;
use crate::error::FetchError;
use crate::wallet::WalletHoldings;

impl App {
    pub fn input_char(&mut self, c: char) {
        if !c.is_control() && self.address_input.chars().count() < INPUT_MAX_LEN {
            self.address_input.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        self.address_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.address_input.clear();
    }

    pub fn paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.input_char(c);
        }
    }

    /// The submit control is disabled while a fetch is loading or the field is blank.
    pub fn can_submit(&self) -> bool {
        !self.snapshot.is_loading() && !self.address_input.trim().is_empty()
    }

    /// Enters the loading phase for `address` and issues a new request id.
    pub fn begin_fetch(&mut self, address: String) -> SearchRequest {
        self.latest_request += 1;
        self.last_address = Some(address.clone());
        self.snapshot = std::mem::take(&mut self.snapshot).into_loading();
        SearchRequest {
            id: self.latest_request,
            address,
        }
    }

    /// Applies a finished fetch. Returns `false` when the result was discarded
    /// as stale.
    pub fn complete_fetch(
        &mut self,
        request_id: u64,
        result: Result<WalletHoldings, FetchError>,
    ) -> bool {
        if self.stale_policy == StalePolicy::LatestRequest && request_id != self.latest_request {
            debug!(
                request_id,
                latest = self.latest_request,
                "discarding result of superseded search"
            );
            return false;
        }

        self.snapshot = match result {
            Ok(holdings) => WalletSnapshot::ready(holdings),
            Err(e) => {
                warn!(request_id, error = %e, "wallet fetch failed");
                std::mem::take(&mut self.snapshot).into_failed(e.to_string())
            }
        };
        self.reset_selection();
        true
    }

    /// Starts the fetch pipeline for `address` on a background task.
    ///
    /// Earlier in-flight fetches are left running; each one writes its own
    /// completion back through `complete_fetch`.
    pub async fn fetch_wallet_data(app: Arc<Mutex<App>>, address: String) -> JoinHandle<()> {
        let (request, client) = {
            let mut app_guard = app.lock().await;
            let request = app_guard.begin_fetch(address);
            (request, app_guard.client.clone())
        };
        info!(request_id = request.id, address = %request.address, "starting wallet fetch");

        tokio::spawn(async move {
            let result = client.fetch_wallet_data(&request.address).await;
            let mut app_guard = app.lock().await;
            app_guard.complete_fetch(request.id, result);
        })
    }

    /// Form submission: fetches the trimmed input if the submit control is enabled.
    pub async fn submit_form(app: Arc<Mutex<App>>) -> Option<JoinHandle<()>> {
        let address = {
            let app_guard = app.lock().await;
            if !app_guard.can_submit() {
                return None;
            }
            app_guard.address_input.trim().to_string()
        };
        Some(App::fetch_wallet_data(app, address).await)
    }
}
