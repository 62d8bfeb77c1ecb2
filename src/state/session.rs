use thiserror::Error;
use uuid::Uuid;

use crate::state::slot::PlayerSlot;

/// Placeholder shown when the match screen is reached without entry handoff.
pub const PLACEHOLDER_PLAYER_ONE: &str = "PLAYER 1";
/// Placeholder for the second slot.
pub const PLACEHOLDER_PLAYER_TWO: &str = "PLAYER 2";

/// Identifies one of the two player slots of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotIndex {
    /// First player slot.
    One,
    /// Second player slot.
    Two,
}

impl SlotIndex {
    /// Parse the 1-based slot number used on the API surface.
    pub fn from_position(position: u8) -> Option<Self> {
        match position {
            1 => Some(SlotIndex::One),
            2 => Some(SlotIndex::Two),
            _ => None,
        }
    }
}

/// Names carried from the entry screen to the match screen.
///
/// Explicit sum type instead of implicit absence checks: either the entry
/// screen handed over two confirmed names, or the match screen was reached
/// directly and placeholders are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchContext {
    /// Context present: two confirmed names from the entry screen.
    Named {
        /// First player's confirmed name.
        player_one: String,
        /// Second player's confirmed name.
        player_two: String,
    },
    /// Context absent; render and submit the placeholder names.
    Placeholder,
}

impl MatchContext {
    /// The two names to render and submit.
    pub fn names(&self) -> (&str, &str) {
        match self {
            MatchContext::Named {
                player_one,
                player_two,
            } => (player_one.as_str(), player_two.as_str()),
            MatchContext::Placeholder => (PLACEHOLDER_PLAYER_ONE, PLACEHOLDER_PLAYER_TWO),
        }
    }

    /// Whether this context is the placeholder fallback.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, MatchContext::Placeholder)
    }
}

/// Where a match ticket stands with respect to the resolution command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// No command in flight; outcome actions are enabled.
    Idle,
    /// Exactly one resolution command is in flight; actions are disabled.
    InFlight,
    /// The outcome was recorded; this ticket is spent.
    Completed,
}

/// One match handed off from the entry screen (or reached directly).
#[derive(Debug, Clone)]
pub struct MatchTicket {
    /// Read-only name context for this match.
    pub context: MatchContext,
    /// Idempotency key, stable across manual retries of this ticket.
    pub submission_id: Uuid,
    /// Current submission phase.
    pub submission: SubmissionPhase,
}

impl MatchTicket {
    fn new(context: MatchContext) -> Self {
        Self {
            context,
            submission_id: Uuid::new_v4(),
            submission: SubmissionPhase::Idle,
        }
    }
}

/// Why the match start gate refused to open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// At least one slot has not completed identity resolution.
    #[error("player {position} has not confirmed a name")]
    Unconfirmed {
        /// 1-based slot position.
        position: u8,
    },
}

/// Why a submission could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// A resolution command for this ticket is already in flight.
    #[error("a match result submission is already in progress")]
    AlreadyInFlight,
    /// This ticket's outcome was already recorded.
    #[error("this match result has already been recorded")]
    AlreadyRecorded,
}

/// Server-side stand-in for one browser tab walking the three screens.
#[derive(Debug, Clone, Default)]
pub struct ScreenSession {
    player_one: PlayerSlot,
    player_two: PlayerSlot,
    current_match: Option<MatchTicket>,
}

impl ScreenSession {
    /// Fresh session with both slots empty and no match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a slot by position.
    pub fn slot(&self, index: SlotIndex) -> &PlayerSlot {
        match index {
            SlotIndex::One => &self.player_one,
            SlotIndex::Two => &self.player_two,
        }
    }

    /// Mutably borrow a slot by position.
    pub fn slot_mut(&mut self, index: SlotIndex) -> &mut PlayerSlot {
        match index {
            SlotIndex::One => &mut self.player_one,
            SlotIndex::Two => &mut self.player_two,
        }
    }

    /// Whether the start gate is open: both slots confirmed, nothing else.
    pub fn can_start(&self) -> bool {
        self.player_one.confirmed_name().is_some() && self.player_two.confirmed_name().is_some()
    }

    /// Open the gate and hand the confirmed names off as a new match ticket.
    ///
    /// The handoff is one-shot read-only context: later slot edits do not
    /// touch a ticket that was already created.
    pub fn start_match(&mut self) -> Result<&MatchTicket, GateError> {
        let player_one = self
            .player_one
            .confirmed_name()
            .ok_or(GateError::Unconfirmed { position: 1 })?
            .to_string();
        let player_two = self
            .player_two
            .confirmed_name()
            .ok_or(GateError::Unconfirmed { position: 2 })?
            .to_string();

        Ok(self.current_match.insert(MatchTicket::new(MatchContext::Named {
            player_one,
            player_two,
        })))
    }

    /// Context of the current ticket, or the placeholder fallback.
    pub fn match_context(&self) -> MatchContext {
        self.current_match
            .as_ref()
            .map(|ticket| ticket.context.clone())
            .unwrap_or(MatchContext::Placeholder)
    }

    /// Submission phase of the current ticket, idle when none exists yet.
    pub fn submission_phase(&self) -> SubmissionPhase {
        self.current_match
            .as_ref()
            .map(|ticket| ticket.submission)
            .unwrap_or(SubmissionPhase::Idle)
    }

    /// Claim the right to issue exactly one resolution command.
    ///
    /// Reaching the match screen without a ticket lazily creates one with
    /// placeholder names, matching the direct-navigation fallback. Returns
    /// the names and the ticket's idempotency key.
    pub fn begin_submission(&mut self) -> Result<(String, String, Uuid), SubmissionError> {
        let ticket = self
            .current_match
            .get_or_insert_with(|| MatchTicket::new(MatchContext::Placeholder));

        match ticket.submission {
            SubmissionPhase::InFlight => return Err(SubmissionError::AlreadyInFlight),
            SubmissionPhase::Completed => return Err(SubmissionError::AlreadyRecorded),
            SubmissionPhase::Idle => ticket.submission = SubmissionPhase::InFlight,
        }

        let (player_one, player_two) = ticket.context.names();
        Ok((
            player_one.to_string(),
            player_two.to_string(),
            ticket.submission_id,
        ))
    }

    /// Record the outcome of the in-flight command.
    ///
    /// Failure returns the ticket to idle so the user can manually retry
    /// with the same idempotency key; success spends the ticket.
    pub fn finish_submission(&mut self, success: bool) {
        if let Some(ticket) = self.current_match.as_mut() {
            ticket.submission = if success {
                SubmissionPhase::Completed
            } else {
                SubmissionPhase::Idle
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::slot::SubmitAction;

    fn confirm(session: &mut ScreenSession, index: SlotIndex, name: &str) {
        let SubmitAction::Lookup(token) = session.slot_mut(index).submit(name) else {
            panic!("expected a lookup");
        };
        assert!(session.slot_mut(index).complete_lookup(&token, false));
    }

    #[test]
    fn gate_stays_closed_until_both_slots_confirm() {
        let mut session = ScreenSession::new();
        assert!(!session.can_start());
        assert_eq!(
            session.start_match().unwrap_err(),
            GateError::Unconfirmed { position: 1 }
        );

        confirm(&mut session, SlotIndex::One, "ALICE");
        assert!(!session.can_start());
        assert_eq!(
            session.start_match().unwrap_err(),
            GateError::Unconfirmed { position: 2 }
        );

        confirm(&mut session, SlotIndex::Two, "BOB");
        assert!(session.can_start());
    }

    #[test]
    fn start_match_hands_off_confirmed_names() {
        let mut session = ScreenSession::new();
        confirm(&mut session, SlotIndex::One, " alice ");
        confirm(&mut session, SlotIndex::Two, "bob");

        let ticket = session.start_match().unwrap();
        assert_eq!(ticket.context.names(), ("ALICE", "BOB"));
        assert_eq!(ticket.submission, SubmissionPhase::Idle);
    }

    #[test]
    fn handoff_is_one_shot() {
        let mut session = ScreenSession::new();
        confirm(&mut session, SlotIndex::One, "ALICE");
        confirm(&mut session, SlotIndex::Two, "BOB");
        session.start_match().unwrap();

        // Clearing a slot afterwards must not rewrite the ticket's context.
        session.slot_mut(SlotIndex::One).change_name();
        assert_eq!(session.match_context().names(), ("ALICE", "BOB"));
    }

    #[test]
    fn missing_context_falls_back_to_placeholders() {
        let mut session = ScreenSession::new();
        assert_eq!(
            session.match_context().names(),
            (PLACEHOLDER_PLAYER_ONE, PLACEHOLDER_PLAYER_TWO)
        );

        let (p1, p2, _) = session.begin_submission().unwrap();
        assert_eq!((p1.as_str(), p2.as_str()), ("PLAYER 1", "PLAYER 2"));
    }

    #[test]
    fn in_flight_guard_blocks_a_second_command() {
        let mut session = ScreenSession::new();
        session.begin_submission().unwrap();
        assert_eq!(
            session.begin_submission().unwrap_err(),
            SubmissionError::AlreadyInFlight
        );
    }

    #[test]
    fn failure_reopens_the_ticket_with_the_same_key() {
        let mut session = ScreenSession::new();
        let (_, _, first_key) = session.begin_submission().unwrap();
        session.finish_submission(false);

        let (_, _, retry_key) = session.begin_submission().unwrap();
        assert_eq!(first_key, retry_key);
    }

    #[test]
    fn success_spends_the_ticket() {
        let mut session = ScreenSession::new();
        session.begin_submission().unwrap();
        session.finish_submission(true);

        assert_eq!(
            session.begin_submission().unwrap_err(),
            SubmissionError::AlreadyRecorded
        );
    }

    #[test]
    fn slot_positions_parse_one_based() {
        assert_eq!(SlotIndex::from_position(1), Some(SlotIndex::One));
        assert_eq!(SlotIndex::from_position(2), Some(SlotIndex::Two));
        assert_eq!(SlotIndex::from_position(0), None);
        assert_eq!(SlotIndex::from_position(3), None);
    }
}
