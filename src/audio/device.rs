use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::catalog::probe_duration;
use crate::error::{PlayerError, Result};

use super::sink::create_sink_at;
use super::transport::{Transport, Voice, VoiceSource};
use super::types::{MediaBackend, MediaHandle};

/// Media backend playing through the default output device.
pub struct RodioBackend {
    stream: Rc<OutputStream>,
}

impl RodioBackend {
    pub fn open_default() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self {
            stream: Rc::new(stream),
        })
    }
}

impl MediaBackend for RodioBackend {
    fn create(&self, resource: &Path) -> Result<Box<dyn MediaHandle>> {
        let (sink, total) = create_sink_at(&self.stream, resource, Duration::ZERO)?;
        let duration = total
            .or_else(|| probe_duration(resource))
            .unwrap_or(Duration::ZERO);
        debug!(?resource, ?duration, "prepared handle");

        let source = FileSource {
            stream: Rc::clone(&self.stream),
            resource: resource.to_path_buf(),
        };
        Ok(Box::new(Transport::new(source, sink, duration)))
    }
}

/// Reopens one file on the shared output stream.
struct FileSource {
    stream: Rc<OutputStream>,
    resource: PathBuf,
}

impl VoiceSource for FileSource {
    type Voice = Sink;

    fn open_at(&self, start_at: Duration) -> Result<Sink> {
        create_sink_at(&self.stream, &self.resource, start_at).map(|(sink, _)| sink)
    }
}

impl Voice for Sink {
    fn play(&self) {
        Sink::play(self);
    }

    fn pause(&self) {
        Sink::pause(self);
    }

    fn stop(&self) {
        Sink::stop(self);
    }

    fn position(&self) -> Duration {
        self.get_pos()
    }

    fn is_drained(&self) -> bool {
        self.empty()
    }

    fn try_seek(&self, to: Duration) -> Result<()> {
        Sink::try_seek(self, to).map_err(|e| PlayerError::Seek(e.to_string()))
    }
}
