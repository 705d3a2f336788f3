//! Post text for job announcements.

use jobboard_entity::Job;

/// Maximum post length accepted by Twitter.
pub const TWEET_MAX_CHARS: usize = 280;

/// Announcement text: position, organization and the public job link.
pub fn announcement(job: &Job, base_url: &str) -> String {
    format!(
        "New job: {} at {}\n{}/jobs/{}",
        job.position,
        job.organization,
        base_url.trim_end_matches('/'),
        job.id
    )
}

/// Shortens `text` to `max` characters, ending with an ellipsis when cut.
///
/// The job link sits at the end of an announcement, so the cut is taken
/// out of the first line to keep the link intact when possible.
pub fn truncate_post(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    if let Some((head, link)) = text.rsplit_once('\n') {
        let link_len = link.chars().count();
        // ellipsis + newline
        if link_len + 2 <= max {
            let keep = max - link_len - 2;
            let head: String = head.chars().take(keep).collect();
            return format!("{head}…\n{link}");
        }
    }

    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
