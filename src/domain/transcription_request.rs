use std::fmt;

/// Why a candidate file name was refused before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestNameError {
    #[error("file name does not carry the required extension")]
    UnsupportedExtension,
    #[error("file name is not a plain file name")]
    InvalidName,
}

/// A file name that names exactly one entry inside the audio directory and
/// carries the required source extension.
///
/// Every derived name (resampled audio, transcript) keeps the same stem, so
/// none of them can point outside their directory either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    file_name: String,
    stem_len: usize,
}

impl TranscriptionRequest {
    pub fn parse(candidate: &str, required_extension: &str) -> Result<Self, RequestNameError> {
        let suffix = format!(".{required_extension}");
        let Some(stem) = candidate.strip_suffix(suffix.as_str()) else {
            return Err(RequestNameError::UnsupportedExtension);
        };

        if stem.is_empty() || candidate.contains(['/', '\\', '\0']) {
            return Err(RequestNameError::InvalidName);
        }

        Ok(Self {
            file_name: candidate.to_string(),
            stem_len: stem.len(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file name without the source extension.
    pub fn stem(&self) -> &str {
        &self.file_name[..self.stem_len]
    }

    pub fn resampled_file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.stem())
    }

    pub fn result_file_name(&self) -> String {
        format!("{}.txt", self.stem())
    }
}

impl fmt::Display for TranscriptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}
