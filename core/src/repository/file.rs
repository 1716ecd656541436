use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde_json;

use crate::model::tracker::TrackerState;
use crate::repository::traits::StateRepository;

const DEFAULT_FILE_NAME: &str = "state.json";

#[derive(Clone)]
pub struct FileStateRepository {
    file_path: PathBuf,
}

impl FileStateRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".studytrack")
            }
        };
        fs::create_dir_all(&path)?; // Ensure the directory exists
        path.push(DEFAULT_FILE_NAME);

        Ok(FileStateRepository { file_path: path })
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self) -> Result<Option<TrackerState>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        // A document that no longer parses counts as absent, not as an error
        match serde_json::from_reader(reader) {
            Ok(state) => Ok(Some(state)),
            Err(_) => Ok(None),
        }
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("studytrack-test-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let repo = FileStateRepository::new(Some(temp_dir("missing"))).unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let repo = FileStateRepository::new(Some(temp_dir("roundtrip"))).unwrap();

        let mut state = TrackerState::new(4);
        state.add_time(crate::model::day::Weekday::Monday);
        repo.save(&state).unwrap();

        assert_eq!(repo.load().unwrap(), Some(state));
    }

    #[test]
    fn test_malformed_file_loads_as_none() {
        let dir = temp_dir("malformed");
        let repo = FileStateRepository::new(Some(dir.clone())).unwrap();
        fs::write(dir.join(DEFAULT_FILE_NAME), "{ not json").unwrap();

        assert_eq!(repo.load().unwrap(), None);
    }
}
