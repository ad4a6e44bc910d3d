//! Typing into a mounted panel: debounce, minimum length, stale batches.

use livesuggest::{Catalog, SessionConfig, SuggestionSession};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn mounted() -> SuggestionSession {
    SuggestionSession::new(Catalog::reference(), SessionConfig::default()).unwrap()
}

#[test]
fn burst_of_keystrokes_ranks_once() {
    let t0 = Instant::now();
    let mut session = mounted();

    let mut fired = 0;
    for (i, prefix) in ["k", "ku", "kub", "kube", "kuber", "kubernetes"].iter().enumerate() {
        let at = t0 + ms(80 * i as u64);
        session.input(prefix, at);
        if session.poll(at).is_some() {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);

    let deadline = session.deadline().unwrap();
    let batch = session.poll(deadline).unwrap();
    assert_eq!(batch.query, "kubernetes");
    assert_eq!(batch.generation, 6);
    assert_eq!(
        batch.results[0].document.title,
        "Kubernetes Deployment Best Practices"
    );
    assert!(batch.confidence > 0.0);
    assert!(session.poll(deadline + ms(1000)).is_none());
}

#[test]
fn stale_batch_is_detected() {
    let t0 = Instant::now();
    let mut session = mounted();

    session.input("docker", t0);
    let batch = session.poll(t0 + ms(300)).unwrap();
    assert!(session.is_current(&batch));

    session.input("docker compose", t0 + ms(310));
    assert!(!session.is_current(&batch));

    let fresh = session.poll(t0 + ms(610)).unwrap();
    assert!(session.is_current(&fresh));
    assert_eq!(fresh.results[0].document.title, "Docker Compose Best Practices");
}

#[test]
fn custom_config_is_honored() {
    let t0 = Instant::now();
    let config = SessionConfig {
        debounce: ms(50),
        min_query_len: 6,
        ..SessionConfig::default()
    };
    let mut session = SuggestionSession::new(Catalog::reference(), config).unwrap();

    session.input("dock", t0);
    let batch = session.poll(t0 + ms(50)).unwrap();
    assert!(batch.is_empty());

    session.input("docker", t0 + ms(60));
    let batch = session.poll(t0 + ms(110)).unwrap();
    assert!(!batch.is_empty());
}

#[test]
fn cancel_discards_pending_input() {
    let t0 = Instant::now();
    let mut session = mounted();
    session.input("kubernetes", t0);
    session.cancel();
    assert!(session.poll(t0 + ms(1000)).is_none());
}
