use thiserror::Error;

/// Phases a player name slot moves through during identity resolution.
///
/// A name is only usable to start a match from one of the two confirmed
/// phases; `Pending` and `Conflict` expose nothing upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPhase {
    /// No usable input; nothing exposed upward.
    Empty,
    /// Input submitted, store lookup in flight.
    Pending {
        /// Normalized candidate name awaiting the lookup result.
        name: String,
    },
    /// Lookup found no existing player; the name is confirmed as new.
    ConfirmedNew {
        /// Normalized name exposed upward.
        name: String,
    },
    /// The user confirmed they are the existing player of that name.
    ConfirmedReturning {
        /// Normalized name exposed upward.
        name: String,
    },
    /// Lookup found an existing player; waiting for a yes/no from the user.
    Conflict {
        /// Normalized name the existing player record collides with.
        name: String,
    },
}

/// What the caller must do after submitting raw input to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Input was empty after trimming; the slot was reset.
    Reset,
    /// The slot already holds this confirmed name; nothing to do.
    AlreadyConfirmed,
    /// Issue exactly one store lookup, then feed the result back with the token.
    Lookup(LookupToken),
}

/// Lifetime token tying an in-flight lookup to the slot state that issued it.
///
/// The slot bumps its epoch whenever the input changes or the slot is
/// cleared, so a result arriving for a stale token is discarded instead of
/// overwriting newer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupToken {
    /// Normalized name to look up.
    pub name: String,
    epoch: u64,
}

/// Error returned when a conflict decision arrives outside the conflict phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slot is not awaiting a conflict decision")]
pub struct NotInConflict;

/// One player name input with its resolution state machine.
#[derive(Debug, Clone)]
pub struct PlayerSlot {
    phase: SlotPhase,
    epoch: u64,
}

impl Default for PlayerSlot {
    fn default() -> Self {
        Self {
            phase: SlotPhase::Empty,
            epoch: 0,
        }
    }
}

impl PlayerSlot {
    /// Fresh slot in the empty phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim surrounding whitespace and upper-case the remainder.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> &SlotPhase {
        &self.phase
    }

    /// Name exposed upward, present only in the confirmed phases.
    pub fn confirmed_name(&self) -> Option<&str> {
        match self.phase() {
            SlotPhase::ConfirmedNew { name } | SlotPhase::ConfirmedReturning { name } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// Handle a blur/submit of raw input.
    ///
    /// Empty-after-trim input always resets the slot, retracting any
    /// previously confirmed value. Re-submitting an unchanged confirmed name
    /// is idempotent and issues no lookup. Anything else moves the slot to
    /// pending and hands the caller a token for exactly one lookup.
    pub fn submit(&mut self, raw: &str) -> SubmitAction {
        let name = Self::normalize(raw);

        if name.is_empty() {
            self.reset();
            return SubmitAction::Reset;
        }

        if self.confirmed_name() == Some(name.as_str()) {
            return SubmitAction::AlreadyConfirmed;
        }

        self.epoch += 1;
        self.phase = SlotPhase::Pending { name: name.clone() };
        SubmitAction::Lookup(LookupToken {
            name,
            epoch: self.epoch,
        })
    }

    /// Feed a lookup result back into the slot.
    ///
    /// Returns `false` when the token is stale (the slot was edited or
    /// cleared while the lookup was in flight); the result is then discarded
    /// and the slot is left untouched.
    pub fn complete_lookup(&mut self, token: &LookupToken, found: bool) -> bool {
        if token.epoch != self.epoch {
            return false;
        }
        let SlotPhase::Pending { name } = &self.phase else {
            return false;
        };

        let name = name.clone();
        self.phase = if found {
            SlotPhase::Conflict { name }
        } else {
            SlotPhase::ConfirmedNew { name }
        };
        true
    }

    /// Apply the user's yes/no answer to a name conflict.
    ///
    /// "Yes, this is me" confirms the returning player; "no" clears the slot
    /// entirely so nothing is exposed upward.
    pub fn resolve_conflict(&mut self, accept: bool) -> Result<&SlotPhase, NotInConflict> {
        let SlotPhase::Conflict { name } = &self.phase else {
            return Err(NotInConflict);
        };
        let name = name.clone();

        if accept {
            self.phase = SlotPhase::ConfirmedReturning { name };
        } else {
            self.reset();
        }
        Ok(self.phase())
    }

    /// Explicit change-name action: return to empty and retract the name.
    pub fn change_name(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.epoch += 1;
        self.phase = SlotPhase::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_is_empty() {
        let slot = PlayerSlot::new();
        assert_eq!(slot.phase(), &SlotPhase::Empty);
        assert_eq!(slot.confirmed_name(), None);
    }

    #[test]
    fn normalization_trims_and_uppercases() {
        assert_eq!(PlayerSlot::normalize("  alice "), "ALICE");
        assert_eq!(PlayerSlot::normalize("BoB"), "BOB");
        assert_eq!(PlayerSlot::normalize("   "), "");
    }

    #[test]
    fn whitespace_only_input_resets_even_when_confirmed() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("alice") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, false));
        assert_eq!(slot.confirmed_name(), Some("ALICE"));

        assert_eq!(slot.submit("   "), SubmitAction::Reset);
        assert_eq!(slot.phase(), &SlotPhase::Empty);
        assert_eq!(slot.confirmed_name(), None);
    }

    #[test]
    fn unknown_name_confirms_as_new() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        assert_eq!(slot.phase(), &SlotPhase::Pending { name: "ALICE".into() });

        assert!(slot.complete_lookup(&token, false));
        assert_eq!(slot.phase(), &SlotPhase::ConfirmedNew { name: "ALICE".into() });
        assert_eq!(slot.confirmed_name(), Some("ALICE"));
    }

    #[test]
    fn known_name_conflicts_until_accepted() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("alice ") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, true));
        assert_eq!(slot.phase(), &SlotPhase::Conflict { name: "ALICE".into() });
        assert_eq!(slot.confirmed_name(), None);

        let phase = slot.resolve_conflict(true).unwrap().clone();
        assert_eq!(phase, SlotPhase::ConfirmedReturning { name: "ALICE".into() });
        assert_eq!(slot.confirmed_name(), Some("ALICE"));
    }

    #[test]
    fn rejecting_a_conflict_clears_the_slot() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("bob") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, true));

        slot.resolve_conflict(false).unwrap();
        assert_eq!(slot.phase(), &SlotPhase::Empty);
        assert_eq!(slot.confirmed_name(), None);
    }

    #[test]
    fn conflict_decision_outside_conflict_is_rejected() {
        let mut slot = PlayerSlot::new();
        assert_eq!(slot.resolve_conflict(true), Err(NotInConflict));
        assert_eq!(slot.phase(), &SlotPhase::Empty);
    }

    #[test]
    fn resubmitting_confirmed_name_issues_no_lookup() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, false));

        assert_eq!(slot.submit(" alice"), SubmitAction::AlreadyConfirmed);
        assert_eq!(slot.confirmed_name(), Some("ALICE"));
    }

    #[test]
    fn editing_a_confirmed_name_goes_back_through_pending() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, false));

        let SubmitAction::Lookup(_) = slot.submit("BOB") else {
            panic!("expected a new lookup for the edited name");
        };
        assert_eq!(slot.phase(), &SlotPhase::Pending { name: "BOB".into() });
        assert_eq!(slot.confirmed_name(), None);
    }

    #[test]
    fn stale_lookup_result_is_discarded() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(stale) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        // The input is edited while the first lookup is still in flight.
        let SubmitAction::Lookup(fresh) = slot.submit("BOB") else {
            panic!("expected a lookup");
        };

        assert!(!slot.complete_lookup(&stale, true));
        assert_eq!(slot.phase(), &SlotPhase::Pending { name: "BOB".into() });

        assert!(slot.complete_lookup(&fresh, false));
        assert_eq!(slot.confirmed_name(), Some("BOB"));
    }

    #[test]
    fn lookup_result_after_clear_is_discarded() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        slot.change_name();

        assert!(!slot.complete_lookup(&token, true));
        assert_eq!(slot.phase(), &SlotPhase::Empty);
    }

    #[test]
    fn change_name_retracts_a_confirmed_name() {
        let mut slot = PlayerSlot::new();
        let SubmitAction::Lookup(token) = slot.submit("ALICE") else {
            panic!("expected a lookup");
        };
        assert!(slot.complete_lookup(&token, true));
        slot.resolve_conflict(true).unwrap();

        slot.change_name();
        assert_eq!(slot.phase(), &SlotPhase::Empty);
        assert_eq!(slot.confirmed_name(), None);
    }
}
