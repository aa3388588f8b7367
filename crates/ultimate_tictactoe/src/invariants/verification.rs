//! Formal verification of invariants using the Kani model checker.
//!
//! Run with `cargo kani -p ultimate_tictactoe`.

#[cfg(kani)]
mod proofs {
    use crate::{GameSession, Invariant, InvariantSet, MarkBalanceInvariant, SessionInvariants};

    /// Any sequence of accepted moves keeps every session invariant.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_session_invariants_after_moves() {
        let mut session = GameSession::new();
        for _ in 0..4 {
            let index: usize = kani::any();
            let _ = session.play_move(index);
        }
        assert!(
            SessionInvariants::check_all(&session).is_ok(),
            "Session invariants violated"
        );
    }

    /// Rejected moves leave the board untouched.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_rejected_move_is_noop() {
        let mut session = GameSession::new();
        let _ = session.play_move(4);
        let before = *session.board();
        let index: usize = kani::any();
        kani::assume(index == 4 || index >= 9);
        assert!(session.play_move(index).is_err());
        assert_eq!(*session.board(), before);
        assert!(<MarkBalanceInvariant as Invariant<crate::Board>>::holds(session.board()));
    }
}
