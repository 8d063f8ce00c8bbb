//! In-memory media and volume services with a manually advanced clock.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::audio::{HandleState, MediaBackend, MediaHandle};
use crate::error::{PlayerError, Result};
use crate::volume::VolumeControl;

#[derive(Debug, Default)]
pub struct FakeTrack {
    pub position: u64,
    pub duration: u64,
    pub state: HandleState,
    pub completed: bool,
    pub fail_prepare: bool,
    pub releases: usize,
    pub seeks: Vec<u64>,
}

pub type SharedTrack = Rc<RefCell<FakeTrack>>;

/// Let `ms` of playback time pass on `track`.
pub fn advance(track: &SharedTrack, ms: u64) {
    let mut t = track.borrow_mut();
    if t.state != HandleState::Playing {
        return;
    }
    t.position = (t.position + ms).min(t.duration);
    if t.position == t.duration {
        t.state = HandleState::Completed;
        t.completed = true;
    }
}

#[derive(Default)]
struct World {
    durations: HashMap<PathBuf, u64>,
    handles: Vec<SharedTrack>,
}

/// Creates `FakeHandle`s; clones share the same record of created handles.
#[derive(Clone, Default)]
pub struct FakeBackend {
    world: Rc<RefCell<World>>,
}

impl FakeBackend {
    pub fn with_tracks(tracks: &[(&str, u64)]) -> Self {
        let backend = Self::default();
        for (path, duration) in tracks {
            backend.insert(path, *duration);
        }
        backend
    }

    /// Make `path` openable from now on.
    pub fn insert(&self, path: &str, duration: u64) {
        self.world
            .borrow_mut()
            .durations
            .insert(PathBuf::from(path), duration);
    }

    pub fn handles(&self) -> Vec<SharedTrack> {
        self.world.borrow().handles.clone()
    }

    pub fn last(&self) -> SharedTrack {
        self.world
            .borrow()
            .handles
            .last()
            .cloned()
            .expect("no handle created")
    }
}

impl MediaBackend for FakeBackend {
    fn create(&self, resource: &Path) -> Result<Box<dyn MediaHandle>> {
        let mut world = self.world.borrow_mut();
        let Some(&duration) = world.durations.get(resource) else {
            return Err(PlayerError::Decode {
                path: resource.to_path_buf(),
                reason: "unknown fake resource".to_string(),
            });
        };
        let track = Rc::new(RefCell::new(FakeTrack {
            duration,
            ..FakeTrack::default()
        }));
        world.handles.push(Rc::clone(&track));
        Ok(Box::new(FakeHandle { track }))
    }
}

pub struct FakeHandle {
    track: SharedTrack,
}

impl MediaHandle for FakeHandle {
    fn start(&mut self) {
        let mut t = self.track.borrow_mut();
        match t.state {
            HandleState::Prepared | HandleState::Paused => t.state = HandleState::Playing,
            HandleState::Completed => {
                t.position = 0;
                t.state = HandleState::Playing;
            }
            _ => {}
        }
    }

    fn pause(&mut self) {
        let mut t = self.track.borrow_mut();
        if t.state == HandleState::Playing {
            t.state = HandleState::Paused;
        }
    }

    fn stop(&mut self) {
        let mut t = self.track.borrow_mut();
        if t.state != HandleState::Released {
            t.state = HandleState::Stopped;
        }
        t.position = 0;
    }

    fn prepare(&mut self) -> Result<()> {
        let mut t = self.track.borrow_mut();
        if t.fail_prepare || t.state == HandleState::Released {
            return Err(PlayerError::Prepare("fake prepare failure".to_string()));
        }
        t.state = HandleState::Prepared;
        t.position = 0;
        Ok(())
    }

    fn release(&mut self) {
        let mut t = self.track.borrow_mut();
        t.state = HandleState::Released;
        t.releases += 1;
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<()> {
        let mut t = self.track.borrow_mut();
        match t.state {
            HandleState::Stopped | HandleState::Released => return Ok(()),
            HandleState::Completed => t.state = HandleState::Paused,
            _ => {}
        }
        t.seeks.push(position_ms);
        t.position = position_ms.min(t.duration);
        Ok(())
    }

    fn current_position(&self) -> u64 {
        self.track.borrow().position
    }

    fn duration(&self) -> u64 {
        self.track.borrow().duration
    }

    fn is_playing(&self) -> bool {
        self.track.borrow().state == HandleState::Playing
    }

    fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.track.borrow_mut().completed)
    }
}

/// Device volume stored in a shared cell, readable after the controller owns it.
#[derive(Clone)]
pub struct FakeVolume {
    pub level: Rc<Cell<u32>>,
    pub max: u32,
    pub fail: bool,
}

impl FakeVolume {
    pub fn new(level: u32, max: u32) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
            max,
            fail: false,
        }
    }
}

impl VolumeControl for FakeVolume {
    fn max(&self) -> u32 {
        self.max
    }

    fn current(&self) -> Result<u32> {
        if self.fail {
            return Err(PlayerError::Volume("fake volume failure".to_string()));
        }
        Ok(self.level.get())
    }

    fn set_current(&mut self, level: u32) -> Result<()> {
        if self.fail {
            return Err(PlayerError::Volume("fake volume failure".to_string()));
        }
        self.level.set(level);
        Ok(())
    }
}
