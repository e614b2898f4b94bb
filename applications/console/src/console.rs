//! Interactive console
//!
//! Reads one command per line and writes the rendered outcome. Input and
//! output are generic so a session can be driven from a script or a test.

use std::io::{BufRead, Write};
use tracing::debug;
use vidplay_playback::{Controller, PlayerError, SearchResults};

use crate::{
    command::{Command, HELP_TEXT},
    error::Result,
    render,
};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end over a `Controller`
pub struct Console<R, W> {
    controller: Controller,
    input: R,
    output: W,
    search_prompt: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(controller: Controller, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
            search_prompt: true,
        }
    }

    /// Ask for a number after non-empty search results (default on)
    #[must_use]
    pub fn with_search_prompt(mut self, enabled: bool) -> Self {
        self.search_prompt = enabled;
        self
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        self.line(render::GREETING)?;

        loop {
            write!(self.output, "{}", render::PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }

        self.line(render::FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Execute a single command line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected input");
                self.line(render::INVALID_COMMAND)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "Executing");
        self.dispatch(command)
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::NumberOfVideos => {
                let count = self.controller.video_count();
                self.line(&render::video_count(count))?;
            }
            Command::ShowAllVideos => {
                let listings = self.controller.list_all();
                self.lines(&render::all_videos(&listings))?;
            }
            Command::Play { id } => {
                let outcome = self.controller.play(&id).map(drop);
                self.report(outcome, "Cannot play video")?;
            }
            Command::PlayRandom => {
                let outcome = self.controller.play_random().map(drop);
                self.report(outcome, "Cannot play video")?;
            }
            Command::Stop => {
                let outcome = self.controller.stop().map(drop);
                self.report(outcome, "Cannot stop video")?;
            }
            Command::Pause => {
                let outcome = self.controller.pause().map(drop);
                self.report(outcome, "Cannot pause video")?;
            }
            Command::Continue => {
                let outcome = self.controller.resume().map(drop);
                self.report(outcome, "Cannot continue video")?;
            }
            Command::ShowPlaying => {
                let text = render::now_playing(self.controller.now_playing());
                self.line(&text)?;
            }
            Command::CreatePlaylist { name } => match self.controller.create_playlist(&name) {
                Ok(display) => self.line(&format!("Successfully created new playlist: {display}"))?,
                Err(e) => self.line(&render::failure("Cannot create playlist", &e))?,
            },
            Command::AddToPlaylist { name, id } => match self.controller.add_to_playlist(&name, &id) {
                Ok(video) => self.line(&format!("Added video to {name}: {}", video.title))?,
                Err(e) => self.line(&render::failure(&format!("Cannot add video to {name}"), &e))?,
            },
            Command::RemoveFromPlaylist { name, id } => {
                match self.controller.remove_from_playlist(&name, &id) {
                    Ok(video) => self.line(&format!("Removed video from {name}: {}", video.title))?,
                    Err(e) => {
                        self.line(&render::failure(&format!("Cannot remove video from {name}"), &e))?;
                    }
                }
            }
            Command::ClearPlaylist { name } => match self.controller.clear_playlist(&name) {
                Ok(()) => self.line(&format!("Successfully removed all videos from {name}"))?,
                Err(e) => self.line(&render::failure(&format!("Cannot clear playlist {name}"), &e))?,
            },
            Command::DeletePlaylist { name } => match self.controller.delete_playlist(&name) {
                Ok(()) => self.line(&format!("Deleted playlist: {name}"))?,
                Err(e) => self.line(&render::failure(&format!("Cannot delete playlist {name}"), &e))?,
            },
            Command::ShowPlaylist { name } => match self.controller.show_playlist(&name) {
                Ok(view) => self.lines(&render::playlist(&name, &view))?,
                Err(e) => self.line(&render::failure(&format!("Cannot show playlist {name}"), &e))?,
            },
            Command::ShowAllPlaylists => {
                let names = self.controller.list_playlists();
                self.lines(&render::all_playlists(&names))?;
            }
            Command::SearchVideos { term } => {
                let results = self.controller.search(&term);
                self.offer_results(&results)?;
            }
            Command::SearchVideosWithTag { tag } => {
                let results = self.controller.search_by_tag(&tag);
                self.offer_results(&results)?;
            }
            Command::FlagVideo { id, reason } => {
                let outcome = self.controller.flag_video(&id, &reason);
                self.flush_events()?;
                match outcome {
                    Ok(report) => self.line(&render::flagged(&report))?,
                    Err(e) => self.line(&render::failure("Cannot flag video", &e))?,
                }
            }
            Command::AllowVideo { id } => match self.controller.allow_video(&id) {
                Ok(video) => self.line(&format!("Successfully removed flag from video: {}", video.title))?,
                Err(e) => self.line(&render::failure("Cannot remove flag from video", &e))?,
            },
            Command::Help => self.line(HELP_TEXT)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Print transitions, then the failure if there was one
    fn report(&mut self, outcome: std::result::Result<(), PlayerError>, context: &str) -> Result<()> {
        self.flush_events()?;
        if let Err(e) = outcome {
            self.line(&render::failure(context, &e))?;
        }
        Ok(())
    }

    fn offer_results(&mut self, results: &SearchResults) -> Result<()> {
        self.lines(&render::search_results(results))?;
        if results.is_empty() || !self.search_prompt {
            return Ok(());
        }

        self.lines(&render::SELECTION_PROMPT)?;
        self.output.flush()?;

        // End of input or anything that is not a number means "no".
        let Some(answer) = self.read_line()? else {
            return Ok(());
        };
        let Ok(number) = answer.trim().parse::<usize>() else {
            debug!(answer = answer.trim(), "Selection declined");
            return Ok(());
        };

        let outcome = self.controller.play_by_index(results, number).map(drop);
        self.report(outcome, "Cannot play video")
    }

    fn flush_events(&mut self) -> Result<()> {
        for event in self.controller.drain_events() {
            self.line(&render::event(&event))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }
}
