//! Simulator - Control-plane payloads of the simulator API

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::chain::{Commitment, Gwei, Shard};
use super::slot_window::Slot;

/// Simulator settings behind `GET /config`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Whether slots are processed automatically
    pub auto: bool,
    /// Seconds per slot in auto mode
    pub slot_time: u64,
    /// Probability of a random failure per slot, `0.0..=1.0`
    pub failure_rate: f32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            auto: false,
            slot_time: 12,
            failure_rate: 0.0,
        }
    }
}

/// Partial update for `POST /config`; unset fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_rate: Option<f32>,
}

impl ConfigUpdate {
    pub fn auto(auto: bool) -> Self {
        Self {
            auto: Some(auto),
            ..Default::default()
        }
    }

    /// Apply on top of a known config (optimistic local update)
    pub fn apply_to(&self, config: &mut SimulatorConfig) {
        if let Some(auto) = self.auto {
            config.auto = auto;
        }
        if let Some(slot_time) = self.slot_time {
            config.slot_time = slot_time;
        }
        if let Some(failure_rate) = self.failure_rate {
            config.failure_rate = failure_rate;
        }
    }
}

/// One line of `GET /utils/request_logs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLog {
    pub log_id: u64,
    pub date: String,
    pub endpoint: String,
}

/// Body of `POST /utils/data_commitment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataCommitmentRequest {
    /// Base64 of the raw blob
    pub data: String,
}

impl DataCommitmentRequest {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: STANDARD.encode(bytes),
        }
    }
}

/// Fee bid for including a blob in a shard at a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub shard: Shard,
    pub slot: Slot,
    pub commitment: Commitment,
    pub fee: Gwei,
}

/// Body of `POST /shards/{shard}/bid_with_data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidWithData {
    pub bid: Bid,
    /// Base64 of the blob the commitment was computed over
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bytes::Bytes;

    #[test]
    fn partial_config_update_omits_unset_fields() {
        let body = serde_json::to_string(&ConfigUpdate::auto(true)).expect("encode");
        assert_eq!(body, r#"{"auto":true}"#);
    }

    #[test]
    fn config_update_applies_only_set_fields() {
        let mut config = SimulatorConfig {
            auto: false,
            slot_time: 6,
            failure_rate: 0.25,
        };
        ConfigUpdate {
            slot_time: Some(2),
            ..Default::default()
        }
        .apply_to(&mut config);

        assert!(!config.auto);
        assert_eq!(config.slot_time, 2);
        assert_eq!(config.failure_rate, 0.25);
    }

    #[test]
    fn data_commitment_request_is_base64() {
        let request = DataCommitmentRequest::from_bytes(b"mousse");
        assert_eq!(request.data, "bW91c3Nl");
    }

    #[test]
    fn bid_with_data_matches_wire_shape() {
        let body = BidWithData {
            bid: Bid {
                shard: 0,
                slot: 1,
                commitment: Commitment {
                    point: Bytes::new(vec![138, 242]),
                    length: 1,
                },
                fee: 0,
            },
            data: "bW91c3Nl".to_string(),
        };
        let json = serde_json::to_string(&body).expect("encode");
        assert_eq!(
            json,
            r#"{"bid":{"shard":0,"slot":1,"commitment":{"point":[138,242],"length":1},"fee":0},"data":"bW91c3Nl"}"#
        );
    }

    #[test]
    fn decodes_request_logs() {
        let logs: Vec<RequestLog> = serde_json::from_str(
            r#"[{"log_id":0,"date":"2021-03-01 10:00:00","endpoint":"POST /simulator/init"}]"#,
        )
        .expect("decode");
        assert_eq!(logs[0].endpoint, "POST /simulator/init");
    }
}
