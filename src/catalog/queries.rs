use crate::catalog::models::GameEntry;

/// Entries whose name contains `query`, ignoring case and surrounding
/// whitespace, paired with their catalog index. An empty query keeps the whole
/// catalog in order.
pub fn filter_by_name<'a>(entries: &'a [GameEntry], query: &str) -> Vec<(usize, &'a GameEntry)> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry
                .name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}

pub fn find_by_name<'a>(entries: &'a [GameEntry], name: &str) -> Option<(usize, &'a GameEntry)> {
    entries
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.name.as_deref() == Some(name))
}

/// Row-major grid cell for the card at `index`.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}

/// How many cards of `card_width` fit side by side, never less than one.
pub fn column_count(available_width: f32, card_width: f32, spacing: f32) -> usize {
    if card_width <= 0.0 || !available_width.is_finite() {
        return 1;
    }
    let fitted = ((available_width + spacing) / (card_width + spacing)).floor();
    if fitted < 1.0 {
        1
    } else {
        fitted as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<GameEntry> {
        let mut unnamed = GameEntry::new("", "/games/unnamed");
        unnamed.name = None;
        vec![
            GameEntry::new("Doom", "/games/doom"),
            GameEntry::new("Quake", "/games/quake"),
            GameEntry::new("Doom II", "/games/doom2"),
            unnamed,
        ]
    }

    fn names(entries: &[(usize, &GameEntry)]) -> Vec<String> {
        entries
            .iter()
            .map(|(_, entry)| entry.display_name().to_string())
            .collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let entries = catalog();
        let filtered = filter_by_name(&entries, "");
        assert_eq!(names(&filtered), vec!["Doom", "Quake", "Doom II", "Unnamed"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let entries = catalog();
        let doom = filter_by_name(&entries, "dOOm");
        assert_eq!(names(&doom), vec!["Doom", "Doom II"]);
        assert_eq!(doom[1].0, 2);
        assert_eq!(names(&filter_by_name(&entries, "  ake ")), vec!["Quake"]);
        assert!(filter_by_name(&entries, "zork").is_empty());
    }

    #[test]
    fn entries_without_name_only_match_empty_query() {
        let entries = catalog();
        let filtered = filter_by_name(&entries, "unnamed");
        assert!(filtered.is_empty());
    }

    #[test]
    fn find_by_name_is_exact() {
        let entries = catalog();
        let (index, entry) = find_by_name(&entries, "Doom II").expect("entry should exist");
        assert_eq!(index, 2);
        assert_eq!(entry.path, "/games/doom2");
        assert!(find_by_name(&entries, "doom").is_none());
    }

    #[test]
    fn grid_position_is_row_major() {
        assert_eq!(grid_position(0, 2), (0, 0));
        assert_eq!(grid_position(1, 2), (0, 1));
        assert_eq!(grid_position(2, 2), (1, 0));
        assert_eq!(grid_position(7, 3), (2, 1));
        assert_eq!(grid_position(3, 0), (3, 0));
    }

    #[test]
    fn column_count_never_drops_below_one() {
        assert_eq!(column_count(100.0, 400.0, 40.0), 1);
        assert_eq!(column_count(840.0, 400.0, 40.0), 2);
        assert_eq!(column_count(1279.0, 400.0, 40.0), 2);
        assert_eq!(column_count(1280.0, 400.0, 40.0), 3);
        assert_eq!(column_count(f32::INFINITY, 400.0, 40.0), 1);
    }
}
