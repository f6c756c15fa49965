//! Chart series derived from the history
//!
//! Pure read-side projections. The chart widgets plot these values as-is;
//! percentages are rounded to one decimal place.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Flip, History, Outcome, Session};

/// Sessions need more flips than this to appear in the per-session chart
pub const MIN_SESSION_FLIPS: usize = 10;

/// Length of the recent flips strip
pub const RECENT_FLIPS: usize = 10;

/// Heads/tails split for the bias gauge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bias {
    pub heads: usize,
    pub tails: usize,
    pub total: usize,
    pub percent_heads: f64,
    pub percent_tails: f64,
}

/// Cumulative split after a given flip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomePoint {
    /// 1-based flip number
    pub flip_index: usize,
    pub heads: f64,
    pub tails: f64,
}

/// Final split of one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    pub session: String,
    pub heads: f64,
    pub tails: f64,
}

/// How often a heads streak of a given length occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakFrequency {
    pub streak_length: u32,
    pub frequency: usize,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(part as f64 / total as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn split(heads: usize, total: usize) -> Bias {
    let tails = total - heads;
    Bias {
        heads,
        tails,
        total,
        percent_heads: percent(heads, total),
        percent_tails: percent(tails, total),
    }
}

fn count_heads(flips: &[Flip]) -> usize {
    flips.iter().filter(|f| f.result.is_heads()).count()
}

/// Heads vs tails share of a run of flips (usually the current session)
pub fn bias(flips: &[Flip]) -> Bias {
    split(count_heads(flips), flips.len())
}

/// All-time heads vs tails share across every session
pub fn bias_over_history(history: &History) -> Bias {
    let heads = history.sessions.iter().map(|s| s.count(Outcome::Heads)).sum();
    split(heads, history.total_flips())
}

/// Running heads/tails percentage after every flip of a session
pub fn outcomes_over_session(session: &Session) -> Vec<OutcomePoint> {
    let mut heads = 0;
    session
        .flips
        .iter()
        .enumerate()
        .map(|(i, flip)| {
            if flip.result.is_heads() {
                heads += 1;
            }
            let total = i + 1;
            OutcomePoint {
                flip_index: total,
                heads: percent(heads, total),
                tails: percent(total - heads, total),
            }
        })
        .collect()
}

/// Final split of each session with more than `min_flips` flips.
///
/// Labels count only the sessions that made the cut.
pub fn outcomes_by_session(history: &History, min_flips: usize) -> Vec<SessionOutcome> {
    history
        .sessions
        .iter()
        .filter(|s| s.len() > min_flips)
        .enumerate()
        .map(|(i, s)| {
            let b = bias(&s.flips);
            SessionOutcome {
                session: format!("Session {}", i + 1),
                heads: b.percent_heads,
                tails: b.percent_tails,
            }
        })
        .collect()
}

fn tally_streaks(flips: &[Flip], counts: &mut BTreeMap<u32, usize>) {
    let mut run = 0;
    for flip in flips {
        if flip.result.is_heads() {
            run += 1;
        } else if run > 0 {
            *counts.entry(run).or_default() += 1;
            run = 0;
        }
    }
    // A run still open at the end counts too
    if run > 0 {
        *counts.entry(run).or_default() += 1;
    }
}

fn into_series(counts: BTreeMap<u32, usize>) -> Vec<StreakFrequency> {
    counts
        .into_iter()
        .map(|(streak_length, frequency)| StreakFrequency {
            streak_length,
            frequency,
        })
        .collect()
}

/// Histogram of maximal heads runs, shortest first
pub fn streak_frequencies(flips: &[Flip]) -> Vec<StreakFrequency> {
    let mut counts = BTreeMap::new();
    tally_streaks(flips, &mut counts);
    into_series(counts)
}

/// Streak histogram over every session. Runs never span two sessions.
pub fn streak_frequencies_over_history(history: &History) -> Vec<StreakFrequency> {
    let mut counts = BTreeMap::new();
    for session in &history.sessions {
        tally_streaks(&session.flips, &mut counts);
    }
    into_series(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::model::Outcome::{Heads as H, Tails as T};

    fn session_of(results: &[Outcome]) -> Session {
        let mut session = Session::new("s");
        for &r in results {
            session.push(Flip::untimed(r));
        }
        session
    }

    fn freq(streak_length: u32, frequency: usize) -> StreakFrequency {
        StreakFrequency {
            streak_length,
            frequency,
        }
    }

    #[test]
    fn test_bias_empty_session() {
        let b = bias(&Session::new("empty").flips);
        assert_eq!(b.total, 0);
        assert_eq!(b.percent_heads, 0.0);
        assert_eq!(b.percent_tails, 0.0);
    }

    #[test]
    fn test_bias_rounds_to_one_decimal() {
        let b = bias(&session_of(&[H, T, T]).flips);
        assert_eq!(b.heads, 1);
        assert_eq!(b.tails, 2);
        assert_eq!(b.percent_heads, 33.3);
        assert_eq!(b.percent_tails, 66.7);
    }

    #[test]
    fn test_bias_over_history_spans_sessions() {
        let mut history = History::new();
        history.push_session(session_of(&[H, H, H]));
        history.push_session(session_of(&[T]));
        history.push_session(Session::new("empty"));

        let all_time = bias_over_history(&history);
        assert_eq!(all_time.heads, 3);
        assert_eq!(all_time.tails, 1);
        assert_eq!(all_time.total, 4);
        assert_eq!(all_time.percent_heads, 75.0);
        assert_eq!(all_time.percent_tails, 25.0);

        // Differs from the current session's gauge
        let current = bias(&history.current().unwrap().flips);
        assert_eq!(current.total, 0);
        assert_eq!(bias_over_history(&History::new()), Bias::default());
    }

    #[test]
    fn test_outcomes_over_session() {
        let points = outcomes_over_session(&session_of(&[H, T, H, H]));
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].flip_index, 1);
        assert_eq!(points[0].heads, 100.0);
        assert_eq!(points[1].heads, 50.0);
        assert_eq!(points[3].heads, 75.0);
        assert_eq!(points[3].tails, 25.0);
    }

    #[test]
    fn test_outcomes_by_session_skips_short_sessions() {
        let mut history = History::new();
        history.push_session(session_of(&[H; 11]));
        history.push_session(session_of(&[H, T]));
        history.push_session(session_of(&[T; 12]));

        let series = outcomes_by_session(&history, MIN_SESSION_FLIPS);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].session, "Session 1");
        assert_eq!(series[0].heads, 100.0);
        assert_eq!(series[1].session, "Session 2");
        assert_eq!(series[1].tails, 100.0);
    }

    #[test]
    fn test_streak_frequencies() {
        let session = session_of(&[H, H, T, H, T, T, H, H, H, T, H]);
        assert_eq!(
            streak_frequencies(&session.flips),
            vec![freq(1, 2), freq(2, 1), freq(3, 1)]
        );
        assert!(streak_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_streaks_do_not_span_sessions() {
        let mut history = History::new();
        history.push_session(session_of(&[T, H, H]));
        history.push_session(session_of(&[H, T]));

        assert_eq!(
            streak_frequencies_over_history(&history),
            vec![freq(1, 1), freq(2, 1)]
        );
    }

    proptest! {
        #[test]
        fn prop_streak_histogram_counts_every_head(results in prop::collection::vec(any::<bool>(), 0..100)) {
            let outcomes: Vec<_> = results.iter().map(|&h| if h { H } else { T }).collect();
            let session = session_of(&outcomes);
            let series = streak_frequencies(&session.flips);

            let heads: usize = series.iter().map(|f| f.streak_length as usize * f.frequency).sum();
            prop_assert_eq!(heads, session.count(H));
            let longest = series.last().map(|f| f.streak_length).unwrap_or(0);
            prop_assert_eq!(longest, session.record);
        }

        #[test]
        fn prop_bias_sums_to_hundred(results in prop::collection::vec(any::<bool>(), 1..100)) {
            let outcomes: Vec<_> = results.iter().map(|&h| if h { H } else { T }).collect();
            let b = bias(&session_of(&outcomes).flips);
            prop_assert!((b.percent_heads + b.percent_tails - 100.0).abs() <= 0.1 + 1e-9);
        }
    }
}
