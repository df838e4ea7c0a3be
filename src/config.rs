use std::path::PathBuf;

/// Where the record set is read from at startup
///
/// Records are supplied exactly once, before the first query; the index is
/// never extended afterwards, so the source is consumed during startup and
/// plays no further role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordSource {
    /// Read one record per line from the given file
    File(PathBuf),
    /// Read a count line followed by that many record lines from the console
    Interactive,
}

impl RecordSource {
    /// Select the source from an optional command-line path
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => RecordSource::File(path),
            None => RecordSource::Interactive,
        }
    }
}

impl Default for RecordSource {
    fn default() -> Self {
        RecordSource::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_interactive() {
        assert_eq!(RecordSource::default(), RecordSource::Interactive);
    }

    #[test]
    fn test_from_path_selects_file_source() {
        let source = RecordSource::from_path(Some(PathBuf::from("people.txt")));
        assert_eq!(source, RecordSource::File(PathBuf::from("people.txt")));

        assert_eq!(RecordSource::from_path(None), RecordSource::Interactive);
    }
}
