use std::path::Path;
use failure::Error;

#[derive(Fail, Debug)]
pub enum ExportError {
    #[fail(display = "Failed to fetch event from {}", url)]
    EventFetchError { url: String, #[cause] cause: Error },
    #[fail(display = "Failed to write CSV to {}", path)]
    OutputError { path: String, #[cause] cause: Error },
}

impl ExportError {
    pub fn output(path: &Path, cause: Error) -> ExportError {
        ExportError::OutputError { path: path.display().to_string(), cause }
    }
}
