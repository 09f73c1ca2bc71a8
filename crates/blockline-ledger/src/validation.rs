use blockline_crypto::HashLinker;
use blockline_types::Entry;

use crate::error::ValidationFailure;

/// Pure checks over candidate entries. Never reads or mutates a ledger.
pub struct EntryValidator;

impl EntryValidator {
    /// Check `candidate` against its claimed predecessor.
    ///
    /// Checks run in order and the first failure is reported:
    /// 1. sequence continuity
    /// 2. link continuity
    /// 3. content integrity (recomputed fingerprint)
    pub fn check(candidate: &Entry, previous: &Entry) -> Result<(), ValidationFailure> {
        let expected = previous.sequence_number.checked_add(1);
        if expected != Some(candidate.sequence_number) {
            return Err(ValidationFailure::SequenceDiscontinuity {
                expected: expected.unwrap_or(u64::MAX),
                found: candidate.sequence_number,
            });
        }

        if candidate.previous_fingerprint != Some(previous.fingerprint) {
            return Err(ValidationFailure::BrokenLink {
                sequence: candidate.sequence_number,
            });
        }

        if !HashLinker::verify(candidate) {
            return Err(ValidationFailure::FingerprintMismatch {
                sequence: candidate.sequence_number,
            });
        }

        Ok(())
    }

    /// Pass/fail form of [`check`](Self::check).
    pub fn is_valid(candidate: &Entry, previous: &Entry) -> bool {
        Self::check(candidate, previous).is_ok()
    }

    /// Genesis must sit at seq 0, carry no link, and hash correctly.
    pub fn validate_genesis(entry: &Entry) -> Result<(), ValidationFailure> {
        if !entry.is_genesis() {
            return Err(ValidationFailure::MalformedGenesis);
        }
        if !HashLinker::verify(entry) {
            return Err(ValidationFailure::FingerprintMismatch {
                sequence: entry.sequence_number,
            });
        }
        Ok(())
    }

    /// Walk a whole candidate ledger: genesis shape, then every adjacent pair.
    pub fn validate_sequence(entries: &[Entry]) -> Result<(), ValidationFailure> {
        let Some(genesis) = entries.first() else {
            return Err(ValidationFailure::EmptySequence);
        };
        Self::validate_genesis(genesis).map_err(|failure| ValidationFailure::AtPosition {
            position: 0,
            failure: Box::new(failure),
        })?;

        for (index, pair) in entries.windows(2).enumerate() {
            Self::check(&pair[1], &pair[0]).map_err(|failure| {
                ValidationFailure::AtPosition {
                    position: index + 1,
                    failure: Box::new(failure),
                }
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blockline_types::Fingerprint;
    use proptest::prelude::*;

    use super::*;
    use crate::factory::EntryFactory;

    fn chain(len: usize) -> Vec<Entry> {
        let factory = EntryFactory::default();
        let mut entries = vec![factory.create_genesis()];
        for i in 1..len {
            let prev = entries.last().unwrap();
            let next = factory
                .create_next(prev, format!("user-{i}"), i as i64, "pending")
                .unwrap();
            entries.push(next);
        }
        entries
    }

    #[test]
    fn factory_output_is_valid() {
        let entries = chain(2);
        assert!(EntryValidator::is_valid(&entries[1], &entries[0]));
    }

    #[test]
    fn sequence_off_by_one_is_rejected() {
        let entries = chain(2);
        let mut candidate = entries[1].clone();
        candidate.sequence_number = 2;
        candidate.fingerprint = HashLinker::fingerprint(&candidate);

        assert_eq!(
            EntryValidator::check(&candidate, &entries[0]),
            Err(ValidationFailure::SequenceDiscontinuity {
                expected: 1,
                found: 2
            })
        );
        assert!(!EntryValidator::is_valid(&candidate, &entries[0]));
    }

    #[test]
    fn wrong_link_is_rejected() {
        let entries = chain(2);
        let mut candidate = entries[1].clone();
        candidate.previous_fingerprint = Some(Fingerprint::from_hash([3; 32]));
        candidate.fingerprint = HashLinker::fingerprint(&candidate);

        assert_eq!(
            EntryValidator::check(&candidate, &entries[0]),
            Err(ValidationFailure::BrokenLink { sequence: 1 })
        );
    }

    #[test]
    fn missing_link_is_rejected() {
        let entries = chain(2);
        let mut candidate = entries[1].clone();
        candidate.previous_fingerprint = None;
        candidate.fingerprint = HashLinker::fingerprint(&candidate);

        assert_eq!(
            EntryValidator::check(&candidate, &entries[0]),
            Err(ValidationFailure::BrokenLink { sequence: 1 })
        );
    }

    #[test]
    fn tampered_content_is_rejected() {
        let entries = chain(2);
        let mut candidate = entries[1].clone();
        candidate.transaction_status = "completed".into();

        assert_eq!(
            EntryValidator::check(&candidate, &entries[0]),
            Err(ValidationFailure::FingerprintMismatch { sequence: 1 })
        );
    }

    #[test]
    fn predecessor_at_max_sequence_has_no_successor() {
        let entries = chain(2);
        let mut previous = entries[0].clone();
        previous.sequence_number = u64::MAX;
        assert!(!EntryValidator::is_valid(&entries[1], &previous));
    }

    #[test]
    fn genesis_checks() {
        let entries = chain(1);
        EntryValidator::validate_genesis(&entries[0]).unwrap();

        let mut linked = entries[0].clone();
        linked.previous_fingerprint = Some(Fingerprint::zero());
        assert_eq!(
            EntryValidator::validate_genesis(&linked),
            Err(ValidationFailure::MalformedGenesis)
        );

        let mut tampered = entries[0].clone();
        tampered.owner_id = "mallory".into();
        assert_eq!(
            EntryValidator::validate_genesis(&tampered),
            Err(ValidationFailure::FingerprintMismatch { sequence: 0 })
        );
    }

    #[test]
    fn whole_sequence_validates() {
        EntryValidator::validate_sequence(&chain(5)).unwrap();
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            EntryValidator::validate_sequence(&[]),
            Err(ValidationFailure::EmptySequence)
        );
    }

    #[test]
    fn sequence_reports_first_bad_position() {
        let mut entries = chain(4);
        entries[2].transaction_status = "reversed".into();

        let err = EntryValidator::validate_sequence(&entries).unwrap_err();
        assert_eq!(
            err,
            ValidationFailure::AtPosition {
                position: 2,
                failure: Box::new(ValidationFailure::FingerprintMismatch { sequence: 2 }),
            }
        );
    }

    proptest! {
        #[test]
        fn any_single_field_mutation_is_detected(field in 0usize..7, seed in any::<u8>()) {
            let entries = chain(2);
            let mut candidate = entries[1].clone();
            let suffix = format!("-{seed}");
            match field {
                0 => candidate.sequence_number += 1 + u64::from(seed),
                1 => candidate.owner_id.push_str(&suffix),
                2 => candidate.created_at.push_str(&suffix),
                3 => candidate.transaction_id = candidate.transaction_id.wrapping_add(1 + i64::from(seed)),
                4 => candidate.transaction_status.push_str(&suffix),
                5 => candidate.fingerprint = Fingerprint::from_hash([seed.wrapping_add(1); 32]),
                _ => candidate.previous_fingerprint = Some(Fingerprint::from_hash([seed; 32])),
            }
            prop_assert!(!EntryValidator::is_valid(&candidate, &entries[0]));
        }
    }
}
