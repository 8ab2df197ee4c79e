//! Chain - Beacon chain records served by the simulator

use serde::{Deserialize, Serialize};

use super::bytes::Bytes;
use super::slot_window::{Slot, SlotRecord};

pub type Epoch = u64;
pub type Shard = u64;
pub type Gwei = u64;

/// Data commitment: a point plus the number of points committed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub point: Bytes,
    pub length: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardHeader {
    pub slot: Slot,
    pub shard: Shard,
    pub commitment: Commitment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedShardHeader {
    pub message: ShardHeader,
    pub signature: Bytes,
}

/// Shard header waiting in the beacon state for confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingShardHeader {
    pub slot: Slot,
    pub shard: Shard,
    pub commitment: Commitment,
    pub root: Bytes,
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Bytes,
}

/// A beacon block, or a placeholder for a slot without one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlock {
    pub slot: Slot,
    #[serde(default)]
    pub parent_root: Option<Bytes>,
    #[serde(default)]
    pub state_root: Option<Bytes>,
    #[serde(default)]
    pub shard_headers: Vec<SignedShardHeader>,
}

impl BeaconBlock {
    /// Rendered as a missed slot: nothing was proposed, or nothing was included
    pub fn is_missed(&self) -> bool {
        self.state_root.is_none() || self.shard_headers.is_empty()
    }
}

impl SlotRecord for BeaconBlock {
    fn slot(&self) -> Slot {
        self.slot
    }

    fn placeholder(slot: Slot) -> Self {
        Self {
            slot,
            parent_root: None,
            state_root: None,
            shard_headers: Vec::new(),
        }
    }

    fn is_placeholder(&self) -> bool {
        self.parent_root.is_none() && self.state_root.is_none() && self.shard_headers.is_empty()
    }
}

/// Beacon state after processing a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconState {
    pub slot: Slot,
    #[serde(default)]
    pub finalized_checkpoint: Option<Checkpoint>,
    #[serde(default)]
    pub shard_gasprice: Option<Gwei>,
    #[serde(default)]
    pub current_epoch_pending_shard_headers: Vec<PendingShardHeader>,
    #[serde(default)]
    pub previous_epoch_pending_shard_headers: Vec<PendingShardHeader>,
    /// One list of confirmed commitments per shard
    #[serde(default)]
    pub grandparent_epoch_confirmed_commitments: Vec<Vec<Commitment>>,
}

impl BeaconState {
    /// Number of confirmed commitments across all shards
    pub fn grandparent_commitment_count(&self) -> usize {
        self.grandparent_epoch_confirmed_commitments
            .iter()
            .map(Vec::len)
            .sum()
    }
}

impl SlotRecord for BeaconState {
    fn slot(&self) -> Slot {
        self.slot
    }

    fn placeholder(slot: Slot) -> Self {
        Self {
            slot,
            finalized_checkpoint: None,
            shard_gasprice: None,
            current_epoch_pending_shard_headers: Vec::new(),
            previous_epoch_pending_shard_headers: Vec::new(),
            grandparent_epoch_confirmed_commitments: Vec::new(),
        }
    }

    fn is_placeholder(&self) -> bool {
        self.finalized_checkpoint.is_none() && self.shard_gasprice.is_none()
    }
}

/// Response of `GET /beacon/blocks/head`; only the slot is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HeadBlock {
    pub slot: Slot,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_JSON: &str = r#"{
        "slot": 4,
        "parent_root": "0x0101010101010101010101010101010101010101010101010101010101010101",
        "state_root": [2, 2, 2, 2],
        "shard_headers": [{
            "message": {"slot": 4, "shard": 7, "commitment": {"point": [138, 242], "length": 3}},
            "signature": [9, 9]
        }]
    }"#;

    #[test]
    fn decodes_block_with_mixed_byte_encodings() {
        let block: BeaconBlock = serde_json::from_str(BLOCK_JSON).expect("decode block");
        assert_eq!(block.slot, 4);
        assert_eq!(block.parent_root.as_ref().map(|r| r.as_slice().len()), Some(32));
        assert_eq!(block.shard_headers.len(), 1);
        assert_eq!(block.shard_headers[0].message.shard, 7);
        assert_eq!(block.shard_headers[0].message.commitment.length, 3);
        assert!(!block.is_placeholder());
        assert!(!block.is_missed());
    }

    #[test]
    fn block_without_headers_is_missed_but_not_placeholder() {
        let block: BeaconBlock =
            serde_json::from_str(r#"{"slot": 2, "parent_root": [1], "state_root": [2], "shard_headers": []}"#)
                .expect("decode block");
        assert!(block.is_missed());
        assert!(!block.is_placeholder());
    }

    #[test]
    fn block_placeholder_is_missed() {
        let block = BeaconBlock::placeholder(11);
        assert_eq!(block.slot(), 11);
        assert!(block.is_placeholder());
        assert!(block.is_missed());
    }

    #[test]
    fn decodes_state_and_counts_commitments() {
        let json = r#"{
            "slot": 33,
            "finalized_checkpoint": {"epoch": 0, "root": [0, 0]},
            "shard_gasprice": 8,
            "current_epoch_pending_shard_headers": [
                {"slot": 33, "shard": 1, "commitment": {"point": [1], "length": 1}, "root": [3], "confirmed": false}
            ],
            "previous_epoch_pending_shard_headers": [],
            "grandparent_epoch_confirmed_commitments": [[{"point": [1], "length": 1}], [], [{"point": [2], "length": 4}]]
        }"#;
        let state: BeaconState = serde_json::from_str(json).expect("decode state");
        assert_eq!(state.shard_gasprice, Some(8));
        assert_eq!(state.current_epoch_pending_shard_headers.len(), 1);
        assert_eq!(state.grandparent_commitment_count(), 2);
        assert!(!state.is_placeholder());
        assert!(BeaconState::placeholder(33).is_placeholder());
    }

    #[test]
    fn head_response_ignores_other_fields() {
        let head: Option<HeadBlock> = serde_json::from_str(BLOCK_JSON).expect("decode head");
        assert_eq!(head, Some(HeadBlock { slot: 4 }));

        let none: Option<HeadBlock> = serde_json::from_str("null").expect("decode null head");
        assert_eq!(none, None);
    }
}
