use std::fmt;

/// Stages a single transcription passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Validated,
    Resampling,
    Transcribing,
    Cleanup,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validated => "VALIDATED",
            PipelineStage::Resampling => "RESAMPLING",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Cleanup => "CLEANUP",
            PipelineStage::Done => "DONE",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
