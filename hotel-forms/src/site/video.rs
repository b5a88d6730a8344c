//! Background video playlist

pub use crate::dom::VideoSurface;

/// Id of the element playing the background video
pub const VIDEO_ELEMENT_ID: &str = "rotating-video";

/// Plays a playlist in order, starting over after the last clip
///
/// [`Self::start`] plays the first clip and advances on every `ended`
/// event. [`Self::play_next`] drives a surface by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRotation {
    playlist: Vec<String>,
    next: usize,
}

impl VideoRotation {
    /// Returns `None` for an empty playlist
    #[must_use]
    pub fn new(playlist: Vec<String>) -> Option<Self> {
        if playlist.is_empty() {
            return None;
        }
        Some(Self { playlist, next: 0 })
    }

    /// Clip the next call to [`Self::play_next`] will start
    #[must_use]
    pub fn peek_next(&self) -> &str {
        &self.playlist[self.next]
    }

    /// Play the first clip on `video` and keep rotating as clips end
    ///
    /// Returns the clip started.
    pub fn start<V>(mut self, video: &V) -> String
    where
        V: VideoSurface + Send + 'static,
    {
        let first = self.play_next(video).to_string();
        video.on_ended(Box::new(move |video: &V| {
            self.play_next(video);
        }));
        tracing::debug!(src = %first, "video rotation started");
        first
    }

    /// Switch the surface to the next clip and advance
    pub fn play_next<S: VideoSurface + ?Sized>(&mut self, surface: &S) -> &str {
        let current = self.next;
        self.next = (self.next + 1) % self.playlist.len();

        let src = &self.playlist[current];
        surface.pause();
        surface.set_source(src);
        surface.load();
        surface.play_when_ready();
        tracing::trace!(src = %src, "video switched");
        src
    }
}
