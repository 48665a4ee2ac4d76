use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

/// Load a matcher file as a raw JSON tree.
///
/// The matcher format is shared with other tools and mostly irrelevant
/// here; only the disabled-strip section is ever queried, and that
/// traversal tolerates any missing subtree.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Value, Box<dyn Error>> {
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_arbitrary_json() -> Result<(), Box<dyn Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"DSD": {{"U1": {{"front": {{"disable": [1]}}}}}}, "unrelated": 7}}"#)?;
        let tree = from_json_file(file.path())?;
        assert_eq!(tree["DSD"]["U1"]["front"]["disable"][0], 1);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(from_json_file("/no/such/matcher.json").is_err());
    }
}
