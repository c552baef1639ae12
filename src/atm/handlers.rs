//! # Transaction Handlers
//!
//! The validation pipeline and balance mutations behind the ATM UI.
//!
//! Every request, whatever its outcome, ends with a balance re-sync to the
//! acting actor so the client view is never stale. The pipeline itself is a
//! result-returning function; [`handle_action`] adds the unconditional
//! trailing re-sync and maps the outcome to feedback cues:
//!
//! - parse/validation failures (bad amount, unknown operation) abort with
//!   the re-sync only - no cue;
//! - an executed operation plays the success or failure cue after the
//!   re-sync.
//!
//! Requests are handled to completion inside the world actor's event loop,
//! so the read-validate-mutate sequence below never interleaves with another
//! request and no balance lock is needed.

use tracing::{debug, info, warn};

use crate::atm::actions::{RawAmount, RawTargetId, TransactionKind};
use crate::atm::error::TransactionError;
use crate::locale::Locale;
use crate::model::{ActorId, BalanceStore, CurrencyField};
use crate::notify::{AudioCue, Notifier};

/// Lookup over the currently connected actors, used to resolve transfer
/// targets by their wire id.
pub trait ActorDirectory {
    /// First connected actor whose id matches `key` (string-normalized
    /// comparison). Ids are unique, so this is effectively an exact match.
    fn resolve(&self, key: &str) -> Option<ActorId>;

    fn display_name(&self, id: ActorId) -> Option<String>;
}

/// Handles one transaction request from `actor`. Returns `true` when the
/// operation applied.
pub fn handle_action<S, N>(
    store: &mut S,
    notifier: &N,
    locale: &Locale,
    actor: ActorId,
    kind: &str,
    amount: &RawAmount,
    target: Option<&RawTargetId>,
) -> bool
where
    S: BalanceStore + ActorDirectory,
    N: Notifier + ?Sized,
{
    let result = execute(store, notifier, locale, actor, kind, amount, target);

    // Every exit path re-syncs the acting actor's balance view.
    if let Some(balance) = store.get(actor) {
        notifier.sync_balance(actor, balance);
    }

    match result {
        Ok(kind) => {
            info!(%actor, %kind, "Transaction applied");
            notifier.cue(actor, AudioCue::success());
            true
        }
        Err(
            error @ (TransactionError::InvalidAmount
            | TransactionError::NonPositiveAmount
            | TransactionError::UnknownOperation(_)),
        ) => {
            debug!(%actor, %error, "Transaction request discarded");
            false
        }
        Err(error) => {
            warn!(%actor, %error, "Transaction rejected");
            notifier.cue(actor, AudioCue::failure());
            false
        }
    }
}

/// The validation pipeline. Any `Err` leaves every balance untouched.
fn execute<S, N>(
    store: &mut S,
    notifier: &N,
    locale: &Locale,
    actor: ActorId,
    kind: &str,
    amount: &RawAmount,
    target: Option<&RawTargetId>,
) -> Result<TransactionKind, TransactionError>
where
    S: BalanceStore + ActorDirectory,
    N: Notifier + ?Sized,
{
    let amount = amount.parse().ok_or(TransactionError::InvalidAmount)?;
    if amount <= 0.0 {
        return Err(TransactionError::NonPositiveAmount);
    }

    let kind = TransactionKind::parse(kind)
        .ok_or_else(|| TransactionError::UnknownOperation(kind.to_string()))?;

    match kind {
        TransactionKind::Deposit => {
            exchange(store, actor, CurrencyField::Cash, CurrencyField::Bank, amount)?
        }
        TransactionKind::Withdraw => {
            exchange(store, actor, CurrencyField::Bank, CurrencyField::Cash, amount)?
        }
        TransactionKind::TransferBank => {
            transfer(store, notifier, locale, actor, target, CurrencyField::Bank, amount)?
        }
        TransactionKind::TransferCash => {
            transfer(store, notifier, locale, actor, target, CurrencyField::Cash, amount)?
        }
    }
    Ok(kind)
}

/// Moves `amount` between the two fields of one actor's own balance.
fn exchange<S: BalanceStore>(
    store: &mut S,
    actor: ActorId,
    from: CurrencyField,
    to: CurrencyField,
    amount: f64,
) -> Result<(), TransactionError> {
    check_funds(store, actor, from, amount)?;
    store.sub(actor, from, amount);
    store.add(actor, to, amount);
    Ok(())
}

/// Moves `amount` of `field` from the requester to another connected actor
/// and notifies the receiving side.
fn transfer<S, N>(
    store: &mut S,
    notifier: &N,
    locale: &Locale,
    actor: ActorId,
    target: Option<&RawTargetId>,
    field: CurrencyField,
    amount: f64,
) -> Result<(), TransactionError>
where
    S: BalanceStore + ActorDirectory,
    N: Notifier + ?Sized,
{
    let key = target
        .map(RawTargetId::as_key)
        .ok_or_else(|| TransactionError::UnknownTarget("<none>".to_string()))?;
    let target = store
        .resolve(&key)
        .ok_or(TransactionError::UnknownTarget(key))?;
    if target == actor {
        return Err(TransactionError::SelfTransfer);
    }

    check_funds(store, actor, field, amount)?;
    store.sub(actor, field, amount);
    store.add(target, field, amount);

    let from = store.display_name(actor).unwrap_or_else(|| actor.to_string());
    notifier.message(target, locale.received_funds(amount, &from));
    Ok(())
}

fn check_funds<S: BalanceStore>(
    store: &S,
    actor: ActorId,
    field: CurrencyField,
    requested: f64,
) -> Result<(), TransactionError> {
    let available = store
        .get(actor)
        .map(|balance| balance.get(field))
        .unwrap_or(0.0);
    if available < requested {
        return Err(TransactionError::InsufficientFunds {
            field,
            requested,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Balance, Vec3, ZoneId};
    use crate::notify::{Outbound, RecordingNotifier};
    use crate::world::{Session, SessionStore};

    fn store_with(actors: &[(u32, &str, f64, f64)]) -> SessionStore {
        let mut store = SessionStore::default();
        for &(id, name, cash, bank) in actors {
            store.insert(Session {
                id: ActorId(id),
                name: name.to_string(),
                position: Vec3::default(),
                zone: ZoneId(1),
                balance: Balance::new(cash, bank),
            });
        }
        store
    }

    fn run(
        store: &mut SessionStore,
        notifier: &RecordingNotifier,
        actor: u32,
        kind: &str,
        amount: RawAmount,
        target: Option<RawTargetId>,
    ) -> bool {
        handle_action(
            store,
            notifier,
            &Locale::default(),
            ActorId(actor),
            kind,
            &amount,
            target.as_ref(),
        )
    }

    #[test]
    fn deposit_moves_cash_to_bank() {
        let mut store = store_with(&[(1, "Alice", 100.0, 0.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(&mut store, &notifier, 1, "deposit", 50.0.into(), None);

        assert!(ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(50.0, 50.0)));
        assert_eq!(
            notifier.sent_to(ActorId(1)),
            vec![
                Outbound::BalanceSync {
                    balance: Balance::new(50.0, 50.0)
                },
                Outbound::Cue {
                    cue: AudioCue::success()
                },
            ]
        );
    }

    #[test]
    fn withdraw_rejects_insufficient_bank() {
        let mut store = store_with(&[(1, "Alice", 0.0, 30.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(&mut store, &notifier, 1, "withdraw", 50.0.into(), None);

        assert!(!ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(0.0, 30.0)));
        assert_eq!(
            notifier.sent_to(ActorId(1)),
            vec![
                Outbound::BalanceSync {
                    balance: Balance::new(0.0, 30.0)
                },
                Outbound::Cue {
                    cue: AudioCue::failure()
                },
            ]
        );
    }

    #[test]
    fn deposit_then_withdraw_round_trips() {
        let mut store = store_with(&[(1, "Alice", 80.0, 20.0)]);
        let notifier = RecordingNotifier::new();

        assert!(run(&mut store, &notifier, 1, "deposit", 25.0.into(), None));
        assert!(run(&mut store, &notifier, 1, "withdraw", 25.0.into(), None));

        assert_eq!(store.get(ActorId(1)), Some(Balance::new(80.0, 20.0)));
    }

    #[test]
    fn non_numeric_amount_syncs_without_cue() {
        let mut store = store_with(&[(1, "Alice", 100.0, 0.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(&mut store, &notifier, 1, "deposit", "lots".into(), None);

        assert!(!ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(100.0, 0.0)));
        assert_eq!(
            notifier.sent_to(ActorId(1)),
            vec![Outbound::BalanceSync {
                balance: Balance::new(100.0, 0.0)
            }],
            "sync-only abort must not play a cue"
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_discarded() {
        let mut store = store_with(&[(1, "Alice", 100.0, 0.0)]);
        let notifier = RecordingNotifier::new();

        assert!(!run(&mut store, &notifier, 1, "deposit", 0.0.into(), None));
        assert!(!run(&mut store, &notifier, 1, "deposit", (-5.0).into(), None));
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(100.0, 0.0)));
    }

    #[test]
    fn unknown_operation_syncs_without_cue() {
        let mut store = store_with(&[(1, "Alice", 100.0, 0.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(&mut store, &notifier, 1, "rob", 10.0.into(), None);

        assert!(!ok);
        assert_eq!(
            notifier.sent_to(ActorId(1)),
            vec![Outbound::BalanceSync {
                balance: Balance::new(100.0, 0.0)
            }]
        );
    }

    #[test]
    fn bank_transfer_conserves_total_and_messages_target() {
        let mut store = store_with(&[(1, "Alice", 0.0, 200.0), (2, "Bob", 0.0, 10.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(
            &mut store,
            &notifier,
            1,
            "transfer",
            75.0.into(),
            Some(RawTargetId::Number(2)),
        );

        assert!(ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(0.0, 125.0)));
        assert_eq!(store.get(ActorId(2)), Some(Balance::new(0.0, 85.0)));
        assert_eq!(
            notifier.sent_to(ActorId(2)),
            vec![Outbound::Message {
                text: "You received $75 from Alice.".to_string()
            }]
        );
    }

    #[test]
    fn cash_transfer_uses_the_cash_field() {
        let mut store = store_with(&[(1, "Alice", 40.0, 0.0), (2, "Bob", 5.0, 0.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(
            &mut store,
            &notifier,
            1,
            "transferCash",
            "15".into(),
            Some(RawTargetId::Text("2".to_string())),
        );

        assert!(ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(25.0, 0.0)));
        assert_eq!(store.get(ActorId(2)), Some(Balance::new(20.0, 0.0)));
    }

    #[test]
    fn self_transfer_always_fails_without_mutation() {
        let mut store = store_with(&[(1, "Alice", 0.0, 200.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(
            &mut store,
            &notifier,
            1,
            "transfer",
            10.0.into(),
            Some(RawTargetId::Number(1)),
        );

        assert!(!ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(0.0, 200.0)));
    }

    #[test]
    fn missing_or_unknown_target_fails_with_cue() {
        let mut store = store_with(&[(1, "Alice", 0.0, 200.0)]);
        let notifier = RecordingNotifier::new();

        assert!(!run(&mut store, &notifier, 1, "transfer", 10.0.into(), None));
        assert!(!run(
            &mut store,
            &notifier,
            1,
            "transfer",
            10.0.into(),
            Some(RawTargetId::Number(99)),
        ));

        assert_eq!(store.get(ActorId(1)), Some(Balance::new(0.0, 200.0)));
        let cues = notifier
            .sent_to(ActorId(1))
            .into_iter()
            .filter(|payload| matches!(payload, Outbound::Cue { .. }))
            .count();
        assert_eq!(cues, 2);
    }

    #[test]
    fn transfer_with_insufficient_funds_leaves_both_untouched() {
        let mut store = store_with(&[(1, "Alice", 0.0, 50.0), (2, "Bob", 0.0, 10.0)]);
        let notifier = RecordingNotifier::new();

        let ok = run(
            &mut store,
            &notifier,
            1,
            "transfer",
            75.0.into(),
            Some(RawTargetId::Number(2)),
        );

        assert!(!ok);
        assert_eq!(store.get(ActorId(1)), Some(Balance::new(0.0, 50.0)));
        assert_eq!(store.get(ActorId(2)), Some(Balance::new(0.0, 10.0)));
        assert!(notifier.sent_to(ActorId(2)).is_empty());
    }
}
