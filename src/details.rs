//! Details overlay: which item is being inspected and its trailer player

use std::io;
use std::process::{Child, Command, Stdio};

use tracing::{info, warn};

/// Something that can play a media URL
pub trait Playback {
    fn start(&mut self, url: &str) -> io::Result<()>;
    fn stop(&mut self);
    fn is_playing(&mut self) -> bool;
}

/// Plays through an external player process (ffplay, mpv, vlc...)
pub struct ExternalPlayer {
    command: String,
    child: Option<Child>,
}

impl ExternalPlayer {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            child: None,
        }
    }

    pub fn set_command(&mut self, command: &str) {
        self.command = command.to_string();
    }

    fn program(&self) -> &str {
        let command = self.command.trim();
        if command.is_empty() {
            "ffplay"
        } else {
            command
        }
    }
}

impl Playback for ExternalPlayer {
    fn start(&mut self, url: &str) -> io::Result<()> {
        // Only one trailer at a time
        self.stop();

        let program = self.program().to_string();
        let mut cmd = Command::new(&program);
        if program.to_lowercase().contains("ffplay") {
            cmd.args(["-autoexit", "-loglevel", "error"]);
        }

        // On Windows, hide the console window for ffplay
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            if program.to_lowercase().contains("ffplay") {
                cmd.creation_flags(CREATE_NO_WINDOW);
            }
        }

        let child = cmd
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        info!(player = %program, url, pid = child.id(), "trailer started");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait(); // Reap the process
            info!("trailer stopped");
        }
    }

    fn is_playing(&mut self) -> bool {
        match self.child.as_mut().map(|c| c.try_wait()) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_))) | Some(Err(_)) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

impl Drop for ExternalPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The overlay's media element
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerState {
    /// No source attached
    Hidden,
    /// Source attached and shown; playback may or may not be running
    Loaded { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Closed,
    Open {
        item_id: &'static str,
        autoplay: bool,
        player: PlayerState,
    },
}

/// Overlay lifecycle plus the playback it owns
pub struct DetailsController<P: Playback> {
    state: Overlay,
    playback: P,
    trailer_url: String,
}

impl<P: Playback> DetailsController<P> {
    pub fn new(playback: P, trailer_url: &str) -> Self {
        Self {
            state: Overlay::Closed,
            playback,
            trailer_url: trailer_url.to_string(),
        }
    }

    pub fn state(&self) -> &Overlay {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, Overlay::Open { .. })
    }

    /// Id of the item currently inspected
    pub fn current(&self) -> Option<&'static str> {
        match self.state {
            Overlay::Open { item_id, .. } => Some(item_id),
            Overlay::Closed => None,
        }
    }

    pub fn set_trailer_url(&mut self, url: &str) {
        self.trailer_url = url.to_string();
    }

    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    /// Inspect an item. The player starts hidden even when autoplay is requested.
    pub fn open(&mut self, item_id: &'static str, autoplay: bool) {
        self.playback.stop();
        self.state = Overlay::Open {
            item_id,
            autoplay,
            player: PlayerState::Hidden,
        };
    }

    /// The overlay's play button: attach the trailer, and start it right
    /// away if the overlay was opened with autoplay.
    pub fn trigger_play(&mut self) -> io::Result<()> {
        let Overlay::Open { autoplay, player, .. } = &mut self.state else {
            return Ok(());
        };

        *player = PlayerState::Loaded {
            url: self.trailer_url.clone(),
        };

        if *autoplay {
            self.playback.start(&self.trailer_url)?;
        }
        Ok(())
    }

    /// Explicit start from the loaded player
    pub fn start_playback(&mut self) -> io::Result<()> {
        match &self.state {
            Overlay::Open {
                player: PlayerState::Loaded { url },
                ..
            } => {
                let url = url.clone();
                self.playback.start(&url)
            }
            _ => {
                warn!("start requested without a loaded trailer");
                Ok(())
            }
        }
    }

    pub fn stop_playback(&mut self) {
        self.playback.stop();
    }

    pub fn is_playing(&mut self) -> bool {
        self.playback.is_playing()
    }

    pub fn close(&mut self) {
        if self.is_open() {
            self.playback.stop();
            self.state = Overlay::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePlayback {
        playing: Option<String>,
        starts: usize,
        fail: bool,
    }

    impl Playback for FakePlayback {
        fn start(&mut self, url: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no player"));
            }
            self.starts += 1;
            self.playing = Some(url.to_string());
            Ok(())
        }

        fn stop(&mut self) {
            self.playing = None;
        }

        fn is_playing(&mut self) -> bool {
            self.playing.is_some()
        }
    }

    const TRAILER: &str = "https://example.com/trailer.mp4";

    fn controller() -> DetailsController<FakePlayback> {
        DetailsController::new(FakePlayback::default(), TRAILER)
    }

    #[test]
    fn test_open_starts_with_hidden_player() {
        let mut details = controller();
        assert_eq!(details.state(), &Overlay::Closed);

        details.open("dune", true);
        assert_eq!(
            details.state(),
            &Overlay::Open {
                item_id: "dune",
                autoplay: true,
                player: PlayerState::Hidden
            }
        );
        assert!(!details.is_playing());
    }

    #[test]
    fn test_play_without_autoplay_only_loads() {
        let mut details = controller();
        details.open("her", false);
        details.trigger_play().unwrap();

        assert!(matches!(
            details.state(),
            Overlay::Open { player: PlayerState::Loaded { url }, .. } if url == TRAILER
        ));
        assert!(!details.is_playing());

        details.start_playback().unwrap();
        assert!(details.is_playing());
    }

    #[test]
    fn test_play_with_autoplay_starts() {
        let mut details = controller();
        details.open("her", true);
        details.trigger_play().unwrap();
        assert!(details.is_playing());
        assert_eq!(details.playback_mut().starts, 1);
    }

    #[test]
    fn test_close_stops_playback() {
        let mut details = controller();
        details.open("matrix", true);
        details.trigger_play().unwrap();
        assert!(details.is_playing());

        details.close();
        assert_eq!(details.state(), &Overlay::Closed);
        assert!(!details.is_playing());
        assert_eq!(details.current(), None);
    }

    #[test]
    fn test_reopen_resets_player() {
        let mut details = controller();
        details.open("matrix", true);
        details.trigger_play().unwrap();

        details.open("dune", false);
        assert!(!details.is_playing());
        assert_eq!(details.current(), Some("dune"));
        assert!(matches!(
            details.state(),
            Overlay::Open { player: PlayerState::Hidden, .. }
        ));
    }

    #[test]
    fn test_play_when_closed_does_nothing() {
        let mut details = controller();
        details.trigger_play().unwrap();
        details.start_playback().unwrap();
        assert_eq!(details.state(), &Overlay::Closed);
        assert_eq!(details.playback_mut().starts, 0);
    }

    #[test]
    fn test_spawn_failure_keeps_overlay_open() {
        let mut details = DetailsController::new(
            FakePlayback {
                fail: true,
                ..Default::default()
            },
            TRAILER,
        );
        details.open("dune", true);
        assert!(details.trigger_play().is_err());
        assert!(details.is_open());
        assert!(!details.is_playing());
    }
}
