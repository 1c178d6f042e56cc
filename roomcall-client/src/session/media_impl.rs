use crate::sdk::{MediaTrack, VideoSdk};
use crate::session::{CallSession, apply_selection};
use roomcall_core::MediaKind;
use tracing::debug;

impl<S: VideoSdk> CallSession<S> {
    /// Flips the preference for `kind` and applies it to the local tracks of
    /// that kind. Returns the new preference.
    pub fn toggle_media(&self, kind: MediaKind) -> bool {
        let enabled = !self.media().is_enabled(kind);
        self.set_media_enabled(kind, enabled);
        self.media().is_enabled(kind)
    }

    /// Enables or disables the already-acquired tracks of `kind`; nothing is
    /// re-acquired. Before connecting this only records which kinds to capture,
    /// and a capture still pending picks the preference up once it completes.
    pub fn set_media_enabled(&self, kind: MediaKind, enabled: bool) {
        if kind == MediaKind::Data {
            debug!("Data tracks cannot be toggled");
            return;
        }

        let (tracks, media) = {
            let mut inner = self.inner.borrow_mut();
            inner.media.set(kind, enabled);
            let tracks: Vec<S::Track> = inner
                .local_tracks
                .iter()
                .filter(|track| track.kind() == kind)
                .cloned()
                .collect();
            (tracks, inner.media)
        };
        apply_selection(&tracks, media);

        debug!(
            "Local {} {} ({} track(s))",
            kind,
            if enabled { "enabled" } else { "disabled" },
            tracks.len()
        );
    }
}
