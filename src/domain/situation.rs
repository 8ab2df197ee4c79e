//! Situation - Slot processing scenarios offered by the simulator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the simulator should process the next slots.
///
/// Each variant maps to one path segment of
/// `POST /simulator/slot/{segment}/{slot}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Situation {
    /// Everything proposed, included and confirmed
    #[default]
    Normal,
    WithoutShardDataInclusion,
    WithoutShardBlobProposal,
    WithoutShardHeaderInclusion,
    WithoutShardHeaderConfirmation,
    WithoutBeaconChainFinality,
    WithoutBeaconBlockProposal,
    /// Each slot picks a failure at random
    Random,
}

impl Situation {
    /// Wire path segment
    pub fn path_segment(&self) -> &'static str {
        match self {
            Situation::Normal => "process",
            Situation::WithoutShardDataInclusion => "process_without_shard_data_inclusion",
            Situation::WithoutShardBlobProposal => "process_without_shard_blob_proposal",
            Situation::WithoutShardHeaderInclusion => "process_without_shard_header_inclusion",
            Situation::WithoutShardHeaderConfirmation => {
                "process_without_shard_header_confirmation"
            }
            Situation::WithoutBeaconChainFinality => "process_without_beacon_chain_finality",
            Situation::WithoutBeaconBlockProposal => "process_without_beacon_block_proposal",
            Situation::Random => "process_random",
        }
    }

    /// Translation key for the radio label
    pub fn label_key(&self) -> &'static str {
        match self {
            Situation::Normal => "situation.normal",
            Situation::WithoutShardDataInclusion => "situation.without_shard_data_inclusion",
            Situation::WithoutShardBlobProposal => "situation.without_shard_blob_proposal",
            Situation::WithoutShardHeaderInclusion => "situation.without_shard_header_inclusion",
            Situation::WithoutShardHeaderConfirmation => {
                "situation.without_shard_header_confirmation"
            }
            Situation::WithoutBeaconChainFinality => "situation.without_beacon_chain_finality",
            Situation::WithoutBeaconBlockProposal => "situation.without_beacon_block_proposal",
            Situation::Random => "situation.random",
        }
    }

    pub fn all() -> &'static [Situation] {
        &[
            Situation::Normal,
            Situation::WithoutShardDataInclusion,
            Situation::WithoutShardBlobProposal,
            Situation::WithoutShardHeaderInclusion,
            Situation::WithoutShardHeaderConfirmation,
            Situation::WithoutBeaconChainFinality,
            Situation::WithoutBeaconBlockProposal,
            Situation::Random,
        ]
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Situation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Situation::all()
            .iter()
            .copied()
            .find(|situation| situation.path_segment() == s)
            .ok_or_else(|| format!("unknown situation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_situation_has_a_distinct_segment() {
        let mut segments: Vec<_> = Situation::all().iter().map(Situation::path_segment).collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), 8);
    }

    #[test]
    fn segments_parse_back() {
        for situation in Situation::all() {
            assert_eq!(situation.path_segment().parse::<Situation>(), Ok(*situation));
        }
        assert!("process_sideways".parse::<Situation>().is_err());
    }

    #[test]
    fn normal_processing_uses_plain_segment() {
        assert_eq!(Situation::default(), Situation::Normal);
        assert_eq!(Situation::Normal.to_string(), "process");
        assert_eq!(Situation::Random.path_segment(), "process_random");
    }
}
