//! One complete draw: registry, engine, notifications.

use santa_engine::AssignmentEngine;
use santa_registry::{ParticipantRecord, Registry};
use tracing::info;

use crate::config::DrawConfig;
use crate::error::{Error, Result};
use crate::notify::{with_country_prefix, Notifier};

/// Outcome of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSummary {
    /// Participants in the draw
    pub participants: usize,
    /// Engine attempts needed
    pub attempts: usize,
    /// Notifications handed to the notifier
    pub notified: usize,
}

/// Register `records`, draw an assignment and notify every assignor.
///
/// Nothing is sent unless the whole assignment succeeds.
pub fn run<N>(
    records: Vec<ParticipantRecord>,
    config: &DrawConfig,
    notifier: &mut N,
) -> Result<DrawSummary>
where
    N: Notifier + ?Sized,
{
    let registry = Registry::from_records(records)?;
    info!(participants = registry.len(), "participants registered");

    let mut engine = match config.seed {
        Some(seed) => AssignmentEngine::seeded(seed),
        None => AssignmentEngine::from_entropy(),
    }
    .with_config(config.engine());
    let assignment = engine.assign(&registry)?;

    let mut notified = 0;
    for (assignor, recipient) in assignment.iter() {
        let contact = with_country_prefix(assignor.contact(), config.country_prefix.as_deref());
        let message = config.template.render(assignor.name(), recipient.name());
        notifier
            .send(&contact, &message)
            .map_err(|e| Error::Notify(format!("{}: {e}", assignor.name())))?;
        notified += 1;
    }

    Ok(DrawSummary {
        participants: registry.len(),
        attempts: assignment.attempts(),
        notified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ConsoleNotifier;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn send(&mut self, _contact: &str, _message: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("provider down")))
        }
    }

    fn seeded(seed: u64) -> DrawConfig {
        DrawConfig {
            seed: Some(seed),
            country_prefix: Some("+34".to_string()),
            ..DrawConfig::default()
        }
    }

    fn trio() -> Vec<ParticipantRecord> {
        vec![
            ParticipantRecord::new("Ana", "600111222").excluding(["Luis"]),
            ParticipantRecord::new("Luis", "600333444"),
            ParticipantRecord::new("Marta", "+44700555666"),
        ]
    }

    #[test]
    fn every_assignor_is_notified_once() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        let summary = run(trio(), &seeded(5), &mut notifier).unwrap();

        assert_eq!(summary.participants, 3);
        assert_eq!(summary.notified, 3);

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("+34600111222: Ana, you are the secret santa of "));
        assert!(lines[1].starts_with("+34600333444: Luis,"));
        assert!(lines[2].starts_with("+44700555666: Marta,"));
        assert!(!lines[0].ends_with("Luis"));
    }

    #[test]
    fn infeasible_draw_sends_nothing() {
        let records = vec![
            ParticipantRecord::new("Ana", "1").excluding(["Luis"]),
            ParticipantRecord::new("Luis", "2"),
        ];
        let mut notifier = ConsoleNotifier::new(Vec::new());

        let err = run(records, &seeded(1), &mut notifier).unwrap_err();
        assert!(matches!(err, Error::Engine(_)));
        assert!(notifier.into_inner().is_empty());
    }

    #[test]
    fn duplicate_names_rejected() {
        let records = vec![
            ParticipantRecord::new("Ana", "1"),
            ParticipantRecord::new("Ana", "2"),
        ];
        let err = run(records, &seeded(1), &mut ConsoleNotifier::new(Vec::new())).unwrap_err();
        assert!(matches!(
            err,
            Error::Registry(santa_registry::Error::DuplicateName(_))
        ));
    }

    #[test]
    fn notifier_failure_names_assignor() {
        let err = run(trio(), &seeded(1), &mut FailingNotifier).unwrap_err();
        match err {
            Error::Notify(reason) => assert!(reason.starts_with("Ana: ")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let mut first = ConsoleNotifier::new(Vec::new());
        let mut second = ConsoleNotifier::new(Vec::new());
        run(trio(), &seeded(11), &mut first).unwrap();
        run(trio(), &seeded(11), &mut second).unwrap();
        assert_eq!(first.into_inner(), second.into_inner());
    }
}
