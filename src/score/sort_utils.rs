use std::ops::Range;

use crate::model::LeaderboardEntry;

fn sort_key(entry: &LeaderboardEntry) -> (u8, u32) {
    match (entry.status.is_special(), entry.combined_total) {
        (false, Some(total)) => (0, total),
        (false, None) => (1, 0),
        (true, _) => (2, 0),
    }
}

/// Known totals ascending, then completed rows without a usable total, then
/// special statuses. The sort is stable so equal keys keep source order.
pub fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by_key(sort_key);
}

/// Index ranges of the tie groups in an already sorted slice. Special rows
/// and rows without a total always form groups of one.
#[must_use]
pub fn tie_groups(entries: &[LeaderboardEntry]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < entries.len() {
        let first = &entries[start];
        let len = match first.combined_total {
            Some(total) if first.is_completed() => entries[start..]
                .iter()
                .take_while(|e| e.is_completed() && e.combined_total == Some(total))
                .count(),
            _ => 1,
        };
        groups.push(start..start + len);
        start += len;
    }
    groups
}

/// Labels completed rows with their position; every member of a tie group
/// gets `T` plus the position of the group's first member. Special rows keep
/// the token they were built with.
pub fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    for group in tie_groups(entries) {
        if entries[group.start].status.is_special() {
            continue;
        }
        let position = group.start + 1;
        let label = if group.len() > 1 {
            format!("T{position}")
        } else {
            position.to_string()
        };
        for entry in &mut entries[group] {
            entry.display_rank.clone_from(&label);
        }
    }
}
