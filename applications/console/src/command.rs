//! Console command parsing
//!
//! One line of input maps to one `Command`. The keyword is matched
//! case-insensitively; arguments keep their original case.

use std::str::FromStr;
use thiserror::Error;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, id: String },
    RemoveFromPlaylist { name: String, id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    /// Reason is every word after the id, joined by single spaces
    FlagVideo { id: String, reason: String },
    AllowVideo { id: String },
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{keyword} expects {expected} argument(s), got {got}")]
    Arity {
        keyword: &'static str,
        expected: usize,
        got: usize,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => {
                exact::<0>("NUMBER_OF_VIDEOS", &args)?;
                Self::NumberOfVideos
            }
            "SHOW_ALL_VIDEOS" => {
                exact::<0>("SHOW_ALL_VIDEOS", &args)?;
                Self::ShowAllVideos
            }
            "PLAY" => {
                let [id] = exact::<1>("PLAY", &args)?;
                Self::Play { id }
            }
            "PLAY_RANDOM" => {
                exact::<0>("PLAY_RANDOM", &args)?;
                Self::PlayRandom
            }
            "STOP" => {
                exact::<0>("STOP", &args)?;
                Self::Stop
            }
            "PAUSE" => {
                exact::<0>("PAUSE", &args)?;
                Self::Pause
            }
            "CONTINUE" => {
                exact::<0>("CONTINUE", &args)?;
                Self::Continue
            }
            "SHOW_PLAYING" => {
                exact::<0>("SHOW_PLAYING", &args)?;
                Self::ShowPlaying
            }
            "CREATE_PLAYLIST" => {
                let [name] = exact::<1>("CREATE_PLAYLIST", &args)?;
                Self::CreatePlaylist { name }
            }
            "ADD_TO_PLAYLIST" => {
                let [name, id] = exact::<2>("ADD_TO_PLAYLIST", &args)?;
                Self::AddToPlaylist { name, id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [name, id] = exact::<2>("REMOVE_FROM_PLAYLIST", &args)?;
                Self::RemoveFromPlaylist { name, id }
            }
            "CLEAR_PLAYLIST" => {
                let [name] = exact::<1>("CLEAR_PLAYLIST", &args)?;
                Self::ClearPlaylist { name }
            }
            "DELETE_PLAYLIST" => {
                let [name] = exact::<1>("DELETE_PLAYLIST", &args)?;
                Self::DeletePlaylist { name }
            }
            "SHOW_PLAYLIST" => {
                let [name] = exact::<1>("SHOW_PLAYLIST", &args)?;
                Self::ShowPlaylist { name }
            }
            "SHOW_ALL_PLAYLISTS" => {
                exact::<0>("SHOW_ALL_PLAYLISTS", &args)?;
                Self::ShowAllPlaylists
            }
            "SEARCH_VIDEOS" => {
                let [term] = exact::<1>("SEARCH_VIDEOS", &args)?;
                Self::SearchVideos { term }
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                let [tag] = exact::<1>("SEARCH_VIDEOS_WITH_TAG", &args)?;
                Self::SearchVideosWithTag { tag }
            }
            "FLAG_VIDEO" => match args.split_first() {
                Some((id, reason)) => Self::FlagVideo {
                    id: (*id).to_string(),
                    reason: reason.join(" "),
                },
                None => {
                    return Err(CommandError::Arity {
                        keyword: "FLAG_VIDEO",
                        expected: 1,
                        got: 0,
                    })
                }
            },
            "ALLOW_VIDEO" => {
                let [id] = exact::<1>("ALLOW_VIDEO", &args)?;
                Self::AllowVideo { id }
            }
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}

fn exact<const N: usize>(keyword: &'static str, args: &[&str]) -> Result<[String; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Arity {
            keyword,
            expected: N,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

/// Text printed for HELP
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
