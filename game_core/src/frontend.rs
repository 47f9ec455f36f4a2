//! Seams to the platform: keyboard, sound and drawing.
//!
//! The simulation never touches a device directly. A front end implements
//! these traits and hands them to [`crate::run`].

use std::io;
use std::path::Path;

/// Sound effects the game can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    HitPaddle,
    HitWall,
    PointScored,
}

impl SoundId {
    pub const ALL: [SoundId; 3] = [SoundId::HitPaddle, SoundId::HitWall, SoundId::PointScored];

    /// File name of the sample, relative to the sound directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundId::HitPaddle => "paddle_hit.wav",
            SoundId::HitWall => "wall_hit.wav",
            SoundId::PointScored => "point_scored.wav",
        }
    }
}

/// Snapshot of the keys the game cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub quit: bool,
}

impl KeyState {
    /// Paddle direction: -1 = up, 1 = down, 0 when neither or both are held
    pub fn direction(&self) -> i8 {
        let mut dir = 0;
        if self.up {
            dir -= 1;
        }
        if self.down {
            dir += 1;
        }
        dir
    }
}

pub trait InputSource {
    /// Drain pending input and report the keys held this frame
    fn poll(&mut self) -> io::Result<KeyState>;
}

pub trait AudioSink {
    fn load_sound(&mut self, id: SoundId, path: &Path) -> io::Result<()>;

    /// Fire and forget. Unknown or unloaded sounds are ignored.
    fn play_sound(&mut self, id: SoundId);
}

/// Load every game sound from `dir`. A sound that fails to load stays
/// silent for the session; that is logged, not fatal.
pub fn load_sounds<A: AudioSink + ?Sized>(audio: &mut A, dir: &Path) -> usize {
    let mut loaded = 0;
    for id in SoundId::ALL {
        let path = dir.join(id.file_name());
        match audio.load_sound(id, &path) {
            Ok(()) => loaded += 1,
            Err(e) => log::warn!("Failed to load {:?} from {}: {}", id, path.display(), e),
        }
    }
    loaded
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WALL: Color = Color::rgb(200, 200, 200);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in playfield units, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}

/// Frame drawing surface. Calls between `clear` and `present` build one frame.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn render_text(&mut self, text: &str, x: f32, y: f32);
    fn present(&mut self) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_direction() {
        let mut keys = KeyState::default();
        assert_eq!(keys.direction(), 0);
        keys.up = true;
        assert_eq!(keys.direction(), -1);
        keys.down = true;
        assert_eq!(keys.direction(), 0, "Both keys cancel out");
        keys.up = false;
        assert_eq!(keys.direction(), 1);
    }

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center(15.0, 300.0, 5.0, 40.0);
        assert_eq!(rect, Rect::new(12.5, 280.0, 5.0, 40.0));
    }

    struct PickyAudio {
        loaded: HashSet<SoundId>,
    }

    impl AudioSink for PickyAudio {
        fn load_sound(&mut self, id: SoundId, path: &Path) -> io::Result<()> {
            if path.ends_with("wall_hit.wav") {
                return Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
            }
            self.loaded.insert(id);
            Ok(())
        }

        fn play_sound(&mut self, _id: SoundId) {}
    }

    #[test]
    fn test_load_sounds_skips_failures() {
        let mut audio = PickyAudio {
            loaded: HashSet::new(),
        };
        let loaded = load_sounds(&mut audio, Path::new("sounds"));

        assert_eq!(loaded, 2);
        assert!(audio.loaded.contains(&SoundId::HitPaddle));
        assert!(audio.loaded.contains(&SoundId::PointScored));
        assert!(!audio.loaded.contains(&SoundId::HitWall));
    }
}
