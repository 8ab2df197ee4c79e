//! ProcessingState - Slot processor and bid forms
//!
//! Both forms validate on every edit and again whenever the head advances,
//! so a slot that was valid a moment ago is flagged as soon as the chain
//! passes it. Submission is refused while any field is invalid.

use std::fmt;

use crate::domain::chain::{Commitment, Gwei, Shard};
use crate::domain::simulator::{Bid, BidWithData};
use crate::domain::situation::Situation;
use crate::domain::slot_window::Slot;
use crate::error::Error;

/// Inline error for one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotANumber,
    /// Slot is not after the current head
    NotAfterHead { head: Slot },
    /// No data file has been committed yet
    MissingCommitment,
    /// Number outside the accepted range
    OutOfRange,
}

impl FieldError {
    /// Translation key of the inline message
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "validation.required",
            FieldError::NotANumber => "validation.not_a_number",
            FieldError::NotAfterHead { .. } => "validation.slot_not_after_head",
            FieldError::MissingCommitment => "validation.missing_commitment",
            FieldError::OutOfRange => "validation.out_of_range",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "value is required"),
            FieldError::NotANumber => write!(f, "not a non-negative integer"),
            FieldError::NotAfterHead { head } => {
                write!(f, "slot must be greater than current slot {head}")
            }
            FieldError::MissingCommitment => write!(f, "no data commitment computed"),
            FieldError::OutOfRange => write!(f, "value out of range"),
        }
    }
}

impl From<FieldError> for Error {
    fn from(error: FieldError) -> Self {
        Error::Validation {
            message: error.to_string(),
        }
    }
}

pub fn parse_number(input: &str) -> Result<u64, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    trimmed.parse().map_err(|_| FieldError::NotANumber)
}

/// A target slot must be strictly after the known head
pub fn validate_slot(input: &str, head: Option<Slot>) -> Result<Slot, FieldError> {
    let slot = parse_number(input)?;
    match head {
        Some(head) if slot <= head => Err(FieldError::NotAfterHead { head }),
        _ => Ok(slot),
    }
}

/// `POST /simulator/slot/{situation}/{slot}` form
#[derive(Debug, Clone, Default)]
pub struct SlotForm {
    pub input: String,
    pub situation: Situation,
    error: Option<FieldError>,
    touched: bool,
}

impl SlotForm {
    /// Error to show inline; untouched empty fields stay quiet
    pub fn error(&self) -> Option<FieldError> {
        if self.touched { self.error } else { None }
    }

    fn revalidate(&mut self, head: Option<Slot>) {
        self.error = validate_slot(&self.input, head).err();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidErrors {
    pub shard: Option<FieldError>,
    pub slot: Option<FieldError>,
    pub fee: Option<FieldError>,
    pub commitment: Option<FieldError>,
}

impl BidErrors {
    pub fn is_empty(&self) -> bool {
        self.shard.is_none()
            && self.slot.is_none()
            && self.fee.is_none()
            && self.commitment.is_none()
    }

    fn first(&self) -> Option<FieldError> {
        self.shard.or(self.slot).or(self.fee).or(self.commitment)
    }
}

/// Data file, commitment preview and bid fields
#[derive(Debug, Clone, Default)]
pub struct BidForm {
    pub shard_input: String,
    pub slot_input: String,
    pub fee_input: String,
    pub file_path: String,
    commitment: Option<Commitment>,
    /// Base64 of the file the commitment was computed over
    data: Option<String>,
    errors: BidErrors,
    touched: bool,
}

impl BidForm {
    pub fn commitment(&self) -> Option<&Commitment> {
        self.commitment.as_ref()
    }

    pub fn errors(&self) -> BidErrors {
        if self.touched {
            self.errors
        } else {
            BidErrors::default()
        }
    }

    fn revalidate(&mut self, head: Option<Slot>) {
        self.errors = BidErrors {
            shard: parse_number(&self.shard_input).err(),
            slot: validate_slot(&self.slot_input, head).err(),
            fee: parse_number(&self.fee_input).err(),
            commitment: self
                .commitment
                .is_none()
                .then_some(FieldError::MissingCommitment),
        };
    }

    fn build(&self, head: Option<Slot>) -> Result<(Shard, BidWithData), FieldError> {
        let shard: Shard = parse_number(&self.shard_input)?;
        let slot = validate_slot(&self.slot_input, head)?;
        let fee: Gwei = parse_number(&self.fee_input)?;
        let (Some(commitment), Some(data)) = (&self.commitment, &self.data) else {
            return Err(FieldError::MissingCommitment);
        };
        Ok((
            shard,
            BidWithData {
                bid: Bid {
                    shard,
                    slot,
                    commitment: commitment.clone(),
                    fee,
                },
                data: data.clone(),
            },
        ))
    }
}

/// Which request is in flight, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    ProcessSlot,
    InitSimulator,
    ComputeCommitment,
    SubmitBid,
}

#[derive(Debug, Default)]
pub struct ProcessingState {
    head: Option<Slot>,
    slot_form: SlotForm,
    bid_form: BidForm,
    pending: Option<PendingAction>,
}

impl ProcessingState {
    pub fn head(&self) -> Option<Slot> {
        self.head
    }

    pub fn slot_form(&self) -> &SlotForm {
        &self.slot_form
    }

    pub fn bid_form(&self) -> &BidForm {
        &self.bid_form
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// New head snapshot; both forms are validated again
    pub fn set_head(&mut self, head: Option<Slot>) {
        if self.head == head {
            return;
        }
        self.head = head;
        self.slot_form.revalidate(head);
        self.bid_form.revalidate(head);
    }

    pub fn set_slot_input(&mut self, input: impl Into<String>) {
        self.slot_form.input = input.into();
        self.slot_form.touched = true;
        self.slot_form.revalidate(self.head);
    }

    pub fn set_situation(&mut self, situation: Situation) {
        self.slot_form.situation = situation;
    }

    pub fn can_process_slot(&self) -> bool {
        self.pending.is_none() && validate_slot(&self.slot_form.input, self.head).is_ok()
    }

    /// Validated `(situation, slot)`, or the field error now shown inline
    pub fn slot_submission(&mut self) -> Result<(Situation, Slot), FieldError> {
        self.slot_form.touched = true;
        self.slot_form.revalidate(self.head);
        match self.slot_form.error {
            Some(error) => Err(error),
            None => validate_slot(&self.slot_form.input, self.head)
                .map(|slot| (self.slot_form.situation, slot)),
        }
    }

    pub fn set_shard_input(&mut self, input: impl Into<String>) {
        self.bid_form.shard_input = input.into();
        self.bid_form.revalidate(self.head);
    }

    pub fn set_bid_slot_input(&mut self, input: impl Into<String>) {
        self.bid_form.slot_input = input.into();
        self.bid_form.revalidate(self.head);
    }

    pub fn set_fee_input(&mut self, input: impl Into<String>) {
        self.bid_form.fee_input = input.into();
        self.bid_form.revalidate(self.head);
    }

    /// A different file invalidates the previous commitment
    pub fn set_file_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.bid_form.file_path {
            self.bid_form.commitment = None;
            self.bid_form.data = None;
        }
        self.bid_form.file_path = path;
        self.bid_form.revalidate(self.head);
    }

    pub fn set_commitment(&mut self, commitment: Commitment, data: String) {
        self.bid_form.commitment = Some(commitment);
        self.bid_form.data = Some(data);
        self.bid_form.revalidate(self.head);
    }

    pub fn can_submit_bid(&self) -> bool {
        self.pending.is_none() && self.bid_form.build(self.head).is_ok()
    }

    /// Validated bid body, or the first field error (all errors shown inline)
    pub fn bid_submission(&mut self) -> Result<(Shard, BidWithData), FieldError> {
        self.bid_form.touched = true;
        self.bid_form.revalidate(self.head);
        if let Some(error) = self.bid_form.errors.first() {
            return Err(error);
        }
        self.bid_form.build(self.head)
    }

    pub fn begin(&mut self, action: PendingAction) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }

    pub fn finish(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bytes::Bytes;

    fn commitment() -> Commitment {
        Commitment {
            point: Bytes::new(vec![0xab; 4]),
            length: 16,
        }
    }

    #[test]
    fn slot_must_be_after_head() {
        assert_eq!(
            validate_slot("5", Some(5)),
            Err(FieldError::NotAfterHead { head: 5 })
        );
        assert_eq!(validate_slot("3", Some(5)), Err(FieldError::NotAfterHead { head: 5 }));
        assert_eq!(validate_slot("6", Some(5)), Ok(6));
        assert_eq!(validate_slot("0", None), Ok(0));
    }

    #[test]
    fn slot_must_be_numeric() {
        assert_eq!(validate_slot("", None), Err(FieldError::Required));
        assert_eq!(validate_slot("  ", None), Err(FieldError::Required));
        assert_eq!(validate_slot("abc", None), Err(FieldError::NotANumber));
        assert_eq!(validate_slot("-1", None), Err(FieldError::NotANumber));
        assert_eq!(validate_slot(" 12 ", None), Ok(12));
    }

    #[test]
    fn untouched_slot_form_shows_no_error() {
        let state = ProcessingState::default();
        assert_eq!(state.slot_form().error(), None);
        assert!(!state.can_process_slot());
    }

    #[test]
    fn head_advance_invalidates_entered_slot() {
        let mut state = ProcessingState::default();
        state.set_head(Some(4));
        state.set_slot_input("5");
        assert!(state.can_process_slot());
        assert_eq!(state.slot_form().error(), None);

        state.set_head(Some(5));
        assert!(!state.can_process_slot());
        assert_eq!(
            state.slot_form().error(),
            Some(FieldError::NotAfterHead { head: 5 })
        );
        assert!(state.slot_submission().is_err());
    }

    #[test]
    fn slot_submission_carries_situation() {
        let mut state = ProcessingState::default();
        state.set_slot_input("9");
        state.set_situation(Situation::Random);
        assert_eq!(state.slot_submission(), Ok((Situation::Random, 9)));
    }

    #[test]
    fn bid_needs_commitment() {
        let mut state = ProcessingState::default();
        state.set_shard_input("1");
        state.set_bid_slot_input("2");
        state.set_fee_input("100");
        assert!(!state.can_submit_bid());
        assert_eq!(state.bid_submission(), Err(FieldError::MissingCommitment));

        state.set_file_path("/tmp/blob.bin");
        state.set_commitment(commitment(), "AAEC".to_string());
        let (shard, body) = state.bid_submission().expect("valid bid");
        assert_eq!(shard, 1);
        assert_eq!(body.bid.slot, 2);
        assert_eq!(body.bid.fee, 100);
        assert_eq!(body.data, "AAEC");
    }

    #[test]
    fn changing_file_drops_commitment() {
        let mut state = ProcessingState::default();
        state.set_file_path("a.bin");
        state.set_commitment(commitment(), "AA==".to_string());
        state.set_file_path("a.bin");
        assert!(state.bid_form().commitment().is_some());

        state.set_file_path("b.bin");
        assert!(state.bid_form().commitment().is_none());
    }

    #[test]
    fn bid_errors_appear_after_submit_attempt() {
        let mut state = ProcessingState::default();
        state.set_fee_input("lots");
        assert!(state.bid_form().errors().is_empty());

        assert_eq!(state.bid_submission(), Err(FieldError::Required));
        let errors = state.bid_form().errors();
        assert_eq!(errors.shard, Some(FieldError::Required));
        assert_eq!(errors.fee, Some(FieldError::NotANumber));
        assert_eq!(errors.commitment, Some(FieldError::MissingCommitment));
    }

    #[test]
    fn one_action_at_a_time() {
        let mut state = ProcessingState::default();
        state.set_slot_input("1");
        assert!(state.begin(PendingAction::ProcessSlot));
        assert!(!state.begin(PendingAction::SubmitBid));
        assert!(!state.can_process_slot());
        state.finish();
        assert!(state.can_process_slot());
    }

    #[test]
    fn field_error_maps_to_validation_error() {
        let error: Error = FieldError::NotAfterHead { head: 2 }.into();
        assert!(matches!(error, Error::Validation { .. }));
    }
}
