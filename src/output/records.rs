use crate::Result;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Path of a work's record file inside the output directory
pub fn record_path(output_dir: &Path, work_id: &str) -> PathBuf {
    output_dir.join(format!("ao3_{}.json", work_id))
}

/// Serializes a record to pretty JSON at the given path
///
/// Overwrites any existing file at that path.
pub fn write_record<T: Serialize>(record: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    write_atomic(path, json.as_bytes())
}

/// Writes an identifier list, one id per line
pub fn write_id_list(ids: &[String], path: &Path) -> Result<()> {
    let mut content = ids.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    write_atomic(path, content.as_bytes())
}

/// Write-then-rename so readers never observe a partial document
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, bytes)?;
    std::fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Chapter, Work};
    use tempfile::tempdir;

    fn sample_work() -> Work {
        Work {
            work_id: "79779056".to_string(),
            url: "https://archiveofourown.org/works/79779056".to_string(),
            title: "Two Parts".to_string(),
            author: "writer".to_string(),
            total_chapters: 2,
            chapters_fetched: 2,
            chapters: vec![
                Chapter {
                    chapter_id: "1".to_string(),
                    chapter_title: "Chapter 1".to_string(),
                    content: "One.".to_string(),
                },
                Chapter {
                    chapter_id: "2".to_string(),
                    chapter_title: "Chapter 2".to_string(),
                    content: "Two.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_work_round_trip() {
        let dir = tempdir().unwrap();
        let path = record_path(dir.path(), "79779056");

        let work = sample_work();
        write_record(&work, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let read_back: Work = serde_json::from_str(&content).unwrap();
        assert_eq!(read_back, work);
    }

    #[test]
    fn test_overwrites_existing_record() {
        let dir = tempdir().unwrap();
        let path = record_path(dir.path(), "1");

        std::fs::write(&path, "stale").unwrap();
        write_record(&sample_work(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('{'));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = record_path(dir.path(), "2");
        write_record(&sample_work(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["ao3_2.json"]);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_subdir").join("ao3_3.json");
        assert!(write_record(&sample_work(), &path).is_err());
    }

    #[test]
    fn test_id_list_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_ids.txt");

        write_id_list(&["1".to_string(), "22".to_string()], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n22\n");

        write_id_list(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_record_path_layout() {
        assert_eq!(
            record_path(Path::new("out"), "42"),
            Path::new("out/ao3_42.json")
        );
    }
}
