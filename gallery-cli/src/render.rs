//! Plain-text rendering of the current page and selection.

use std::fmt::Write;

use gallery_lib::api::Page;
use gallery_lib::api::Paginator;
use gallery_lib::model::Artwork;
use gallery_lib::selection::SelectionManager;
use gallery_lib::selection::SelectionState;
use gallery_lib::session::LoadState;

const COLUMNS: &[(&str, usize)] = &[
    ("Id", 8),
    ("Title", 32),
    ("Origin", 16),
    ("Artist", 28),
    ("Inscriptions", 20),
    ("Dates", 11),
];

/// Renders the page as a table with a checkbox column.
pub fn page_table(page: &Page<Artwork>, selection: &SelectionManager) -> String {
    let mut out = String::new();
    let paginator = Paginator::new(page.page_index(), page.page_size(), page.total_count());

    let _ = writeln!(out, "{}", page_heading(&paginator, page.len()));

    let header_box = checkbox(selection.all_visible_selected(page));
    let _ = write!(out, "{} ", header_box);
    for (name, width) in COLUMNS {
        let _ = write!(out, "{} ", fit(name, *width));
    }
    out.push('\n');

    if page.is_empty() {
        out.push_str("    (no records)\n");
        return out;
    }

    for artwork in page.records() {
        let cells = [
            artwork.id.to_string(),
            artwork.title.clone(),
            artwork.place_of_origin.clone(),
            artwork.artist_display.clone(),
            artwork.inscriptions.clone(),
            dates(artwork),
        ];
        let _ = write!(out, "{} ", checkbox(selection.state().contains(artwork.id)));
        for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
            let _ = write!(out, "{} ", fit(cell, *width));
        }
        out.push('\n');
    }
    out
}

/// "Page 2 of 834 (records 13-24 of 10000)".
pub fn page_heading(paginator: &Paginator, len: usize) -> String {
    let first = paginator.first_offset() + 1;
    let last = paginator.first_offset() + len as u64;
    if len == 0 {
        format!(
            "Page {} of {} (no records, {} total)",
            paginator.page_index,
            paginator.page_count(),
            paginator.total_count
        )
    } else {
        format!(
            "Page {} of {} (records {}-{} of {})",
            paginator.page_index,
            paginator.page_count(),
            first,
            last,
            paginator.total_count
        )
    }
}

/// Selected ids and the select-N target.
pub fn selection_status(state: &SelectionState) -> String {
    let mut out = String::new();
    let ids = state.sorted_ids();

    if ids.is_empty() {
        out.push_str("Selected IDs: None");
    } else {
        let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let _ = write!(out, "Selected IDs ({}): {}", ids.len(), joined.join(", "));
    }

    if let Some(target) = state.pending_target() {
        let _ = write!(out, "\nTarget N: {}", target);
        match state.deficit() {
            0 => out.push_str(" (met)"),
            outstanding => {
                let _ = write!(out, " ({} outstanding, visit more pages)", outstanding);
            }
        }
    }
    out
}

/// One-line load state, or `None` when idle.
pub fn load_status(state: &LoadState) -> Option<String> {
    match state {
        LoadState::Idle => None,
        LoadState::Loading { page_index } => Some(format!("Loading page {}...", page_index)),
        LoadState::Failed {
            page_index,
            message,
        } => Some(format!(
            "Failed to load page {}: {} ('reload' to retry)",
            page_index, message
        )),
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn dates(artwork: &Artwork) -> String {
    match (artwork.date_start, artwork.date_end) {
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        (Some(year), None) | (None, Some(year)) => year.to_string(),
        (None, None) => String::new(),
    }
}

/// Single line, truncated with an ellipsis and padded to `width` chars.
fn fit(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let count = flat.chars().count();
    if count > width {
        let mut cut: String = flat.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", flat, " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_lib::model::RecordId;

    fn sample_page() -> Page<Artwork> {
        let mut first = Artwork::new(RecordId::new(11), "The Bedroom");
        first.artist_display = "Vincent van Gogh\nDutch, 1853-1890".to_string();
        first.date_start = Some(1889);
        first.date_end = Some(1889);
        let second = Artwork::new(RecordId::new(12), "Untitled");
        Page::new(1, 2, vec![first, second], 4)
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("a\nb", 3), "a b");
    }

    #[test]
    fn test_dates() {
        let mut artwork = Artwork::new(RecordId::new(1), "");
        assert_eq!(dates(&artwork), "");
        artwork.date_start = Some(1850);
        assert_eq!(dates(&artwork), "1850");
        artwork.date_end = Some(1855);
        assert_eq!(dates(&artwork), "1850-1855");
    }

    #[test]
    fn test_page_table_marks_selected_rows() {
        let page = sample_page();
        let mut selection = SelectionManager::new();
        selection.apply_page_edit(&page, [RecordId::new(12)]);

        let table = page_table(&page, &selection);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Page 1 of 2 (records 1-2 of 4)");
        assert!(lines[1].starts_with("[ ] Id"));
        assert!(lines[2].starts_with("[ ] 11"));
        assert!(lines[2].contains("Vincent van Gogh Dutch"));
        assert!(lines[3].starts_with("[x] 12"));

        selection.apply_toggle_all(&page, true);
        assert!(page_table(&page, &selection).lines().nth(1).unwrap().starts_with("[x] Id"));
    }

    #[test]
    fn test_selection_status() {
        let page = sample_page();
        let mut selection = SelectionManager::new();
        assert_eq!(selection_status(selection.state()), "Selected IDs: None");

        selection.request_select_first_n(3);
        selection.reconcile_target(&page);
        assert_eq!(
            selection_status(selection.state()),
            "Selected IDs (2): 11, 12\nTarget N: 3 (1 outstanding, visit more pages)"
        );
    }

    #[test]
    fn test_load_status() {
        assert_eq!(load_status(&LoadState::Idle), None);
        assert_eq!(
            load_status(&LoadState::Loading { page_index: 3 }).unwrap(),
            "Loading page 3..."
        );
    }
}
