use serde::{Deserialize, Serialize};

/// One recognition hypothesis for the currently-spoken utterance.
///
/// The recognition service revises its guess as more audio arrives: interim
/// fragments are provisional and superseded by the next hypothesis for the
/// same utterance, while a final fragment is confirmed and will not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub is_final: bool,
    pub text: String,
}

impl TranscriptFragment {
    /// A provisional hypothesis, replaced by whatever the service says next.
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            is_final: false,
            text: text.into(),
        }
    }

    /// A confirmed hypothesis that will not be revised further.
    pub fn final_result(text: impl Into<String>) -> Self {
        Self {
            is_final: true,
            text: text.into(),
        }
    }
}
