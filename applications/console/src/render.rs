//! Text rendering for controller outcomes
//!
//! Pure functions from results to lines; the console decides where the
//! lines go. List entries are indented by two spaces.

use vidplay_playback::{FlagReport, PlaybackState, PlayerError, PlayerEvent, PlaylistView, SearchResults, VideoListing};

const INDENT: &str = "  ";

pub const GREETING: &str = "Hello and welcome to vidplay, what would you like to do?";
pub const FAREWELL: &str = "vidplay has now terminated its execution. Thank you and goodbye!";
pub const PROMPT: &str = "VIDPLAY> ";
pub const INVALID_COMMAND: &str = "Please enter a valid command, type HELP for a list of available commands.";

pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// One line per playback transition
pub fn event(event: &PlayerEvent) -> String {
    match event {
        PlayerEvent::Started { title, .. } => format!("Playing video: {title}"),
        PlayerEvent::Stopped { title, .. } => format!("Stopping video: {title}"),
        PlayerEvent::Paused { title, .. } => format!("Pausing video: {title}"),
        PlayerEvent::Resumed { title, .. } => format!("Continuing video: {title}"),
    }
}

/// Failure line: `"{context}: {error}"`
///
/// `NoVideosAvailable` and `AlreadyPaused` read as plain notices and are
/// printed without context.
pub fn failure(context: &str, error: &PlayerError) -> String {
    match error {
        PlayerError::NoVideosAvailable | PlayerError::AlreadyPaused(_) => error.to_string(),
        _ => format!("{context}: {error}"),
    }
}

pub fn video_count(count: usize) -> String {
    format!("{count} videos in the library")
}

/// Video followed by its flag, if any
pub fn listing(listing: &VideoListing) -> String {
    match &listing.flag_reason {
        Some(reason) => format!("{} - FLAGGED (reason: {reason})", listing.video),
        None => listing.video.to_string(),
    }
}

pub fn all_videos(listings: &[VideoListing]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(listings.iter().map(|l| format!("{INDENT}{}", listing(l))));
    lines
}

pub fn now_playing(state: &PlaybackState) -> String {
    match state {
        PlaybackState::Idle => "No video is currently playing".to_string(),
        PlaybackState::Playing(video) => format!("Currently playing: {video}"),
        PlaybackState::Paused(video) => format!("Currently playing: {video} - PAUSED"),
    }
}

pub fn all_playlists(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|name| format!("{INDENT}{name}")));
    lines
}

pub fn playlist(requested: &str, view: &PlaylistView) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {requested}")];
    if view.videos.is_empty() {
        lines.push(format!("{INDENT}No videos here yet"));
    } else {
        lines.extend(view.videos.iter().map(|l| format!("{INDENT}{}", listing(l))));
    }
    lines
}

/// Numbered result lines, or the no-results notice
pub fn search_results(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No search results for {}", results.query())];
    }
    let mut lines = vec![format!("Here are the results for {}:", results.query())];
    lines.extend(
        results
            .numbered()
            .map(|(number, video)| format!("{INDENT}{number}) {video}")),
    );
    lines
}

pub fn flagged(report: &FlagReport) -> String {
    format!(
        "Successfully flagged video: {} (reason: {})",
        report.video.title, report.reason
    )
}
