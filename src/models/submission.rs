use serde::{Deserialize, Serialize};

/// Wire value the exam client sends when the per-question timer expires.
pub const TIMEOUT_SENTINEL: i64 = -1;

/// One answer for one question of an attempt.
///
/// On the wire: `-1` for a timeout, an index for a single selection, an
/// array of indices for a multiple selection. Anything else is kept as
/// `Invalid` and graded as a wrong answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSubmission", into = "RawSubmission")]
pub enum Submission {
    Timeout,
    Single(usize),
    Multiple(Vec<usize>),
    Invalid(serde_json::Value),
}

impl Submission {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Submission::Timeout)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSubmission {
    Index(i64),
    Indices(Vec<i64>),
    Other(serde_json::Value),
}

impl From<RawSubmission> for Submission {
    fn from(raw: RawSubmission) -> Self {
        match raw {
            RawSubmission::Index(TIMEOUT_SENTINEL) => Submission::Timeout,
            RawSubmission::Index(idx) => usize::try_from(idx)
                .map(Submission::Single)
                .unwrap_or_else(|_| Submission::Invalid(idx.into())),
            RawSubmission::Indices(indices) => {
                let converted: Result<Vec<usize>, _> =
                    indices.iter().map(|&idx| usize::try_from(idx)).collect();
                match converted {
                    Ok(valid) => Submission::Multiple(valid),
                    Err(_) => Submission::Invalid(indices.into()),
                }
            }
            RawSubmission::Other(value) => Submission::Invalid(value),
        }
    }
}

impl From<Submission> for RawSubmission {
    fn from(submission: Submission) -> Self {
        match submission {
            Submission::Timeout => RawSubmission::Index(TIMEOUT_SENTINEL),
            Submission::Single(idx) => RawSubmission::Index(idx as i64),
            Submission::Multiple(indices) => {
                RawSubmission::Indices(indices.into_iter().map(|idx| idx as i64).collect())
            }
            Submission::Invalid(value) => RawSubmission::Other(value),
        }
    }
}
