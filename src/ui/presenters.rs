use crate::catalog::models::GameEntry;
use crate::error::LaunchError;

pub fn present_entry_row(entry: &GameEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        entry.display_name(),
        entry.display_cat(),
        entry.path,
        entry.display_desc()
    )
}

pub fn present_launch_error(error: &LaunchError) -> String {
    format!("{}: {}", error.title(), error.detail().replace('\n', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn entry_row_uses_display_defaults() {
        let entry: GameEntry =
            serde_json::from_str(r#"{"path": "/games/doom"}"#).expect("entry should parse");
        assert_eq!(present_entry_row(&entry), "Unnamed\tGeneral\t/games/doom\t");
    }

    #[test]
    fn launch_error_fits_on_one_line() {
        let error = LaunchError::NotFound(PathBuf::from("/games/missing"));
        assert_eq!(
            present_launch_error(&error),
            "Executable not found: Path doesn't exist: /games/missing"
        );
    }
}
