//! BeaconApi - HTTP client for the simulator backend
//!
//! Thin typed wrapper over `reqwest`. Every call maps failures onto the
//! crate error taxonomy: no response is [`Error::Network`], a non-2xx status
//! is [`Error::Http`] and an unexpected body is [`Error::Decode`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::chain::{BeaconBlock, BeaconState, Commitment, HeadBlock, Shard};
use crate::domain::simulator::{
    BidWithData, ConfigUpdate, DataCommitmentRequest, RequestLog, SimulatorConfig,
};
use crate::domain::situation::Situation;
use crate::domain::slot_window::{PageWindow, Slot};
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size used to ask for a whole list in one request
const WHOLE_LIST_COUNT: u64 = u32::MAX as u64;

/// What part of a slot-keyed list to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchScope {
    /// Everything the backend has
    All,
    /// One `{count, page}` window
    Window(PageWindow),
}

impl FetchScope {
    fn window(&self) -> PageWindow {
        match self {
            FetchScope::All => PageWindow::new(WHOLE_LIST_COUNT, 0),
            FetchScope::Window(window) => *window,
        }
    }
}

/// Typed client for one simulator server
#[derive(Clone)]
pub struct BeaconApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl std::fmt::Debug for BeaconApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeaconApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BeaconApi {
    /// Create a client for `base_url` (e.g. `http://localhost:3030`)
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Invalid {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn paged_url(&self, path: &str, scope: FetchScope) -> String {
        let window = scope.window();
        format!(
            "{}{}?count={}&page={}",
            self.base_url,
            path,
            window.count(),
            window.page()
        )
    }

    fn slot_process_url(&self, situation: Situation, slot: Slot) -> String {
        self.url(&format!(
            "/simulator/slot/{}/{}",
            situation.path_segment(),
            slot
        ))
    }

    fn check(url: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.clone(),
                source,
            })?;
        let response = Self::check(&url, response)?;
        response
            .json::<T>()
            .await
            .map_err(|source| Error::Decode { url, source })
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        debug!(%url, "POST");
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        Self::check(url, response)
    }

    /// `GET /beacon/blocks/head`; `None` before genesis is processed
    pub async fn head_slot(&self) -> Result<Option<Slot>> {
        let head: Option<HeadBlock> = self.get_json(self.url("/beacon/blocks/head")).await?;
        Ok(head.map(|block| block.slot))
    }

    /// `GET /beacon/blocks?count&page`
    pub async fn blocks(&self, scope: FetchScope) -> Result<Vec<BeaconBlock>> {
        self.get_json(self.paged_url("/beacon/blocks", scope)).await
    }

    /// `GET /beacon/finalized_blocks?count&page`
    pub async fn finalized_blocks(&self, scope: FetchScope) -> Result<Vec<BeaconBlock>> {
        self.get_json(self.paged_url("/beacon/finalized_blocks", scope))
            .await
    }

    /// `GET /beacon/states?count&page`
    pub async fn states(&self, scope: FetchScope) -> Result<Vec<BeaconState>> {
        self.get_json(self.paged_url("/beacon/states", scope)).await
    }

    /// `GET /utils/request_logs`
    pub async fn request_logs(&self) -> Result<Vec<RequestLog>> {
        self.get_json(self.url("/utils/request_logs")).await
    }

    /// `GET /config`
    pub async fn config(&self) -> Result<SimulatorConfig> {
        self.get_json(self.url("/config")).await
    }

    /// `POST /config`
    pub async fn update_config(&self, update: &ConfigUpdate) -> Result<()> {
        self.post(&self.url("/config"), Some(update)).await?;
        Ok(())
    }

    /// `POST /utils/data_commitment`
    pub async fn data_commitment(&self, data: &[u8]) -> Result<Commitment> {
        let url = self.url("/utils/data_commitment");
        let response = self
            .post(&url, Some(&DataCommitmentRequest::from_bytes(data)))
            .await?;
        response
            .json::<Commitment>()
            .await
            .map_err(|source| Error::Decode { url, source })
    }

    /// `POST /shards/{shard}/bid_with_data`
    pub async fn bid_with_data(&self, shard: Shard, body: &BidWithData) -> Result<()> {
        let url = self.url(&format!("/shards/{shard}/bid_with_data"));
        self.post(&url, Some(body)).await?;
        Ok(())
    }

    /// `POST /simulator/slot/{situation}/{slot}`
    pub async fn process_slot(&self, situation: Situation, slot: Slot) -> Result<()> {
        self.post::<()>(&self.slot_process_url(situation, slot), None)
            .await?;
        Ok(())
    }

    /// `POST /simulator/init`
    pub async fn init_simulator(&self) -> Result<()> {
        self.post::<()>(&self.url("/simulator/init"), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::runtime::run_in_tokio;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with a canned HTTP response; returns the base URL
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 2048];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn json_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn api() -> BeaconApi {
        BeaconApi::new("http://localhost:3030/").expect("client")
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(api().base_url(), "http://localhost:3030");
    }

    #[test]
    fn window_is_sent_as_count_and_page() {
        let url = api().paged_url("/beacon/states", FetchScope::Window(PageWindow::new(25, 3)));
        assert_eq!(url, "http://localhost:3030/beacon/states?count=25&page=3");
    }

    #[test]
    fn whole_list_uses_single_large_page() {
        let url = api().paged_url("/beacon/blocks", FetchScope::All);
        assert_eq!(
            url,
            format!("http://localhost:3030/beacon/blocks?count={}&page=0", u32::MAX)
        );
    }

    #[test]
    fn slot_processing_path_carries_situation_segment() {
        assert_eq!(
            api().slot_process_url(Situation::WithoutBeaconChainFinality, 42),
            "http://localhost:3030/simulator/slot/process_without_beacon_chain_finality/42"
        );
        assert_eq!(
            api().slot_process_url(Situation::Normal, 1),
            "http://localhost:3030/simulator/slot/process/1"
        );
    }

    #[test]
    fn server_error_status_maps_to_http_error() {
        let result = futures::executor::block_on(run_in_tokio(async {
            let base = serve_once(json_response("500 Internal Server Error", "")).await;
            BeaconApi::new(&base).expect("client").states(FetchScope::All).await
        }));
        assert!(matches!(result, Err(Error::Http { status: 500, .. })));
    }

    #[test]
    fn unexpected_body_maps_to_decode_error() {
        let result = futures::executor::block_on(run_in_tokio(async {
            let base = serve_once(json_response("200 OK", r#"{"not":"a list"}"#)).await;
            BeaconApi::new(&base).expect("client").blocks(FetchScope::All).await
        }));
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn well_formed_reply_is_decoded() {
        let result = futures::executor::block_on(run_in_tokio(async {
            let base = serve_once(json_response("200 OK", "[]")).await;
            BeaconApi::new(&base).expect("client").request_logs().await
        }));
        assert!(matches!(result, Ok(logs) if logs.is_empty()));
    }

    #[test]
    fn closed_port_maps_to_network_error() {
        let result = futures::executor::block_on(run_in_tokio(async {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let addr = listener.local_addr().expect("local addr");
            drop(listener);
            BeaconApi::new(&format!("http://{addr}"))
                .expect("client")
                .head_slot()
                .await
        }));
        let err = result.expect_err("nothing listens on the port");
        assert!(err.is_network(), "unexpected error: {err}");
    }
}
