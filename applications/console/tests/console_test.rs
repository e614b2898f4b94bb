//! Integration tests for the console
//!
//! Each test feeds a scripted session through `Console::run` against the
//! bundled library and checks the exact transcript.

use std::io::Cursor;
use vidplay_console::{build_controller, Console, ConsoleConfig};

// ===== Test Helpers =====

const GREETING: &str = "Hello and welcome to vidplay, what would you like to do?";
const FAREWELL: &str = "vidplay has now terminated its execution. Thank you and goodbye!";

fn run_with(config: &ConsoleConfig, script: &str) -> Vec<String> {
    let controller = build_controller(config).unwrap();
    let mut console = Console::new(controller, Cursor::new(script.as_bytes().to_vec()), Vec::new())
        .with_search_prompt(config.prompt.search_selection);
    console.run().unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    output
        .lines()
        .map(|line| line.trim_start_matches("VIDPLAY> ").to_string())
        .collect()
}

/// Transcript between the greeting and the farewell
fn session(script: &str) -> Vec<String> {
    let lines = run_with(&ConsoleConfig::default(), script);
    assert_eq!(lines.first().map(String::as_str), Some(GREETING));
    assert_eq!(lines.last().map(String::as_str), Some(FAREWELL));
    lines[1..lines.len() - 1].to_vec()
}

// ===== Session =====

#[test]
fn test_exit_and_end_of_input_both_say_goodbye() {
    assert!(session("EXIT\nNUMBER_OF_VIDEOS\n").is_empty());
    assert_eq!(session("NUMBER_OF_VIDEOS"), vec!["5 videos in the library"]);
}

#[test]
fn test_invalid_commands() {
    assert_eq!(
        session("REWIND\nPLAY\nstop now\n\nEXIT\n"),
        vec![
            "Please enter a valid command, type HELP for a list of available commands.",
            "Please enter a valid command, type HELP for a list of available commands.",
            "Please enter a valid command, type HELP for a list of available commands.",
        ]
    );
}

#[test]
fn test_help_lists_commands() {
    let lines = session("help\nEXIT\n");
    assert_eq!(lines[0], "Available commands:");
    assert!(lines.iter().any(|l| l.trim_start().starts_with("FLAG_VIDEO")));
}

// ===== Playback =====

#[test]
fn test_playing_over_current_video_stops_it_first() {
    assert_eq!(
        session("PLAY amazing_cats_video_id\nPLAY funny_dogs_video_id\nSHOW_PLAYING\nEXIT\n"),
        vec![
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Playing video: Funny Dogs",
            "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal]",
        ]
    );
}

#[test]
fn test_pause_continue_stop() {
    assert_eq!(
        session(
            "PLAY nothing_video_id\nPAUSE\nPAUSE\nSHOW_PLAYING\nCONTINUE\nCONTINUE\nSTOP\nSTOP\nEXIT\n"
        ),
        vec![
            "Playing video: Video about nothing",
            "Pausing video: Video about nothing",
            "Video already paused: Video about nothing",
            "Currently playing: Video about nothing (nothing_video_id) [] - PAUSED",
            "Continuing video: Video about nothing",
            "Cannot continue video: Video is not paused",
            "Stopping video: Video about nothing",
            "Cannot stop video: No video is currently playing",
        ]
    );
}

#[test]
fn test_play_unknown_video() {
    assert_eq!(
        session("PLAY does_not_exist\nPAUSE\nEXIT\n"),
        vec![
            "Cannot play video: Video does not exist",
            "Cannot pause video: No video is currently playing",
        ]
    );
}

#[test]
fn test_play_random_with_everything_flagged() {
    let script = "FLAG_VIDEO funny_dogs_video_id\n\
                  FLAG_VIDEO amazing_cats_video_id\n\
                  FLAG_VIDEO another_cat_video_id\n\
                  FLAG_VIDEO life_at_google_video_id\n\
                  FLAG_VIDEO nothing_video_id\n\
                  PLAY_RANDOM\n\
                  EXIT\n";
    let lines = session(script);
    assert_eq!(lines.last().map(String::as_str), Some("No videos available"));
}

#[test]
fn test_seeded_random_play_is_repeatable() {
    let mut config = ConsoleConfig::default();
    config.playback.random_seed = Some(3);

    let first = run_with(&config, "PLAY_RANDOM\nEXIT\n");
    let second = run_with(&config, "PLAY_RANDOM\nEXIT\n");
    assert_eq!(first, second);
    assert!(first[1].starts_with("Playing video: "));
}

// ===== Playlists =====

#[test]
fn test_playlist_names_ignore_case() {
    assert_eq!(
        session(
            "CREATE_PLAYLIST my_PLAYlist\n\
             CREATE_PLAYLIST MY_PLAYLIST\n\
             ADD_TO_PLAYLIST MY_playlist amazing_cats_video_id\n\
             ADD_TO_PLAYLIST my_playlist amazing_cats_video_id\n\
             SHOW_ALL_PLAYLISTS\n\
             SHOW_PLAYLIST my_playlist\n\
             EXIT\n"
        ),
        vec![
            "Successfully created new playlist: my_PLAYlist",
            "Cannot create playlist: A playlist with the same name already exists",
            "Added video to MY_playlist: Amazing Cats",
            "Cannot add video to my_playlist: Video already added",
            "Showing all playlists:",
            "  my_PLAYlist",
            "Showing playlist: my_playlist",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
        ]
    );
}

#[test]
fn test_remove_clear_delete() {
    assert_eq!(
        session(
            "CREATE_PLAYLIST mix\n\
             ADD_TO_PLAYLIST mix funny_dogs_video_id\n\
             REMOVE_FROM_PLAYLIST mix amazing_cats_video_id\n\
             REMOVE_FROM_PLAYLIST mix funny_dogs_video_id\n\
             ADD_TO_PLAYLIST mix life_at_google_video_id\n\
             CLEAR_PLAYLIST mix\n\
             SHOW_PLAYLIST mix\n\
             DELETE_PLAYLIST mix\n\
             DELETE_PLAYLIST mix\n\
             SHOW_ALL_PLAYLISTS\n\
             EXIT\n"
        ),
        vec![
            "Successfully created new playlist: mix",
            "Added video to mix: Funny Dogs",
            "Cannot remove video from mix: Video is not in playlist",
            "Removed video from mix: Funny Dogs",
            "Added video to mix: Life at Google",
            "Successfully removed all videos from mix",
            "Showing playlist: mix",
            "  No videos here yet",
            "Deleted playlist: mix",
            "Cannot delete playlist mix: Playlist does not exist",
            "No playlists exist yet",
        ]
    );
}

// ===== Search =====

#[test]
fn test_search_selection_plays_numbered_result() {
    assert_eq!(
        session("SEARCH_VIDEOS_WITH_TAG #CAT\n2\nEXIT\n"),
        vec![
            "Here are the results for #CAT:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Another Cat Video",
        ]
    );
}

#[test]
fn test_search_selection_anything_else_is_no() {
    let lines = session("SEARCH_VIDEOS cat\nmaybe\nSEARCH_VIDEOS cat\n0\nSHOW_PLAYING\nEXIT\n");
    assert_eq!(lines.last().map(String::as_str), Some("No video is currently playing"));
    assert!(!lines.iter().any(|l| l.starts_with("Playing video")));
}

#[test]
fn test_search_excludes_flagged_and_reports_empty() {
    assert_eq!(
        session("FLAG_VIDEO funny_dogs_video_id\nSEARCH_VIDEOS_WITH_TAG #dog\nSEARCH_VIDEOS zebra\nEXIT\n"),
        vec![
            "Successfully flagged video: Funny Dogs (reason: Not supplied)",
            "No search results for #dog",
            "No search results for zebra",
        ]
    );
}

#[test]
fn test_search_without_prompt() {
    let mut config = ConsoleConfig::default();
    config.prompt.search_selection = false;

    let lines = run_with(&config, "SEARCH_VIDEOS google\nPLAY_RANDOM_TYPO\nEXIT\n");
    assert_eq!(
        lines[1..3],
        [
            "Here are the results for google:".to_string(),
            "  1) Life at Google (life_at_google_video_id) [#google #career]".to_string(),
        ]
    );
    // The next line is read as a command, not as an answer
    assert_eq!(
        lines[3],
        "Please enter a valid command, type HELP for a list of available commands."
    );
}

// ===== Moderation =====

#[test]
fn test_flagging_current_video_stops_it() {
    assert_eq!(
        session(
            "PLAY amazing_cats_video_id\n\
             FLAG_VIDEO amazing_cats_video_id dont like cats\n\
             PLAY amazing_cats_video_id\n\
             FLAG_VIDEO amazing_cats_video_id again\n\
             SHOW_ALL_VIDEOS\n\
             EXIT\n"
        ),
        vec![
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Successfully flagged video: Amazing Cats (reason: dont like cats)",
            "Cannot play video: Video is currently flagged (reason: dont like cats)",
            "Cannot flag video: Video is already flagged",
            "Here's a list of all available videos:",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont like cats)",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Video about nothing (nothing_video_id) []",
        ]
    );
}

#[test]
fn test_allow_restores_playback() {
    assert_eq!(
        session(
            "ALLOW_VIDEO funny_dogs_video_id\n\
             FLAG_VIDEO funny_dogs_video_id\n\
             ADD_TO_PLAYLIST nope funny_dogs_video_id\n\
             CREATE_PLAYLIST dogs\n\
             ADD_TO_PLAYLIST dogs funny_dogs_video_id\n\
             ALLOW_VIDEO funny_dogs_video_id\n\
             PLAY funny_dogs_video_id\n\
             ALLOW_VIDEO missing_id\n\
             EXIT\n"
        ),
        vec![
            "Cannot remove flag from video: Video is not flagged",
            "Successfully flagged video: Funny Dogs (reason: Not supplied)",
            "Cannot add video to nope: Playlist does not exist",
            "Successfully created new playlist: dogs",
            "Cannot add video to dogs: Video is currently flagged (reason: Not supplied)",
            "Successfully removed flag from video: Funny Dogs",
            "Playing video: Funny Dogs",
            "Cannot remove flag from video: Video does not exist",
        ]
    );
}
