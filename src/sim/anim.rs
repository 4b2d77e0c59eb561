//! Sprite animation clips and playback
//!
//! The registry holds immutable clip definitions keyed by `AnimKey`. Each
//! sprite carries an `Animator` that plays one clip at a time.

use crate::assets;

/// Clip names used by the player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimKey {
    /// Running left (frames 0-3)
    Left,
    /// Facing the camera, idle (frame 4)
    Turn,
    /// Running right (frames 5-8)
    Right,
}

impl AnimKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimKey::Left => "left",
            AnimKey::Turn => "turn",
            AnimKey::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(AnimKey::Left),
            "turn" | "idle" => Some(AnimKey::Turn),
            "right" => Some(AnimKey::Right),
            _ => None,
        }
    }
}

/// An animation clip bound to sprite sheet frames
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub key: AnimKey,
    /// Sprite sheet this clip reads from
    pub sheet: &'static str,
    /// Frame indices in playback order
    pub frames: Vec<u32>,
    /// Frames per second
    pub frame_rate: f32,
    /// Restart from the first frame after the last one
    pub looped: bool,
}

impl Clip {
    /// Seconds each frame stays on screen
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

/// Registry of reusable clip definitions
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    clips: Vec<Clip>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self { clips: Vec::new() }
    }

    /// The player's three clips
    pub fn player() -> Self {
        let mut registry = Self::new();
        registry.register(Clip {
            key: AnimKey::Left,
            sheet: assets::DUDE,
            frames: (0..=3).collect(),
            frame_rate: 10.0,
            looped: true,
        });
        registry.register(Clip {
            key: AnimKey::Turn,
            sheet: assets::DUDE,
            frames: vec![4],
            frame_rate: 20.0,
            looped: false,
        });
        registry.register(Clip {
            key: AnimKey::Right,
            sheet: assets::DUDE,
            frames: (5..=8).collect(),
            frame_rate: 10.0,
            looped: true,
        });
        registry
    }

    /// Add a clip, replacing any clip with the same key
    pub fn register(&mut self, clip: Clip) {
        if let Some(existing) = self.clips.iter_mut().find(|c| c.key == clip.key) {
            *existing = clip;
        } else {
            self.clips.push(clip);
        }
    }

    pub fn get(&self, key: AnimKey) -> Option<&Clip> {
        self.clips.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Playback state for one sprite
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animator {
    current: Option<AnimKey>,
    cursor: usize,
    elapsed: f32,
    playing: bool,
    frame: u32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a clip from its first frame.
    ///
    /// With `ignore_if_playing`, does nothing if that clip is already playing.
    /// Returns true if playback (re)started.
    pub fn play(
        &mut self,
        registry: &AnimationRegistry,
        key: AnimKey,
        ignore_if_playing: bool,
    ) -> bool {
        if ignore_if_playing && self.playing && self.current == Some(key) {
            return false;
        }
        let Some(clip) = registry.get(key) else {
            log::warn!("No animation registered for '{}'", key.as_str());
            return false;
        };

        self.current = Some(key);
        self.cursor = 0;
        self.elapsed = 0.0;
        self.playing = true;
        self.frame = clip.frames.first().copied().unwrap_or(0);
        true
    }

    /// Advance playback by `dt` seconds
    pub fn advance(&mut self, registry: &AnimationRegistry, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(clip) = self.current.and_then(|key| registry.get(key)) else {
            return;
        };
        if clip.frames.is_empty() {
            self.playing = false;
            return;
        }

        let frame_duration = clip.frame_duration();
        self.elapsed += dt;
        while self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;
            self.cursor += 1;
            if self.cursor >= clip.frames.len() {
                if clip.looped {
                    self.cursor = 0;
                } else {
                    self.cursor = clip.frames.len() - 1;
                    self.playing = false;
                    break;
                }
            }
        }
        self.frame = clip.frames[self.cursor];
    }

    pub fn current_key(&self) -> Option<AnimKey> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Sprite sheet frame currently shown
    pub fn current_frame(&self) -> u32 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_clips() {
        let registry = AnimationRegistry::player();
        assert_eq!(registry.len(), 3);

        let left = registry.get(AnimKey::Left).unwrap();
        assert_eq!(left.frames, vec![0, 1, 2, 3]);
        assert_eq!(left.frame_rate, 10.0);
        assert!(left.looped);

        let turn = registry.get(AnimKey::Turn).unwrap();
        assert_eq!(turn.frames, vec![4]);
        assert_eq!(turn.frame_rate, 20.0);
        assert!(!turn.looped);

        let right = registry.get(AnimKey::Right).unwrap();
        assert_eq!(right.frames, vec![5, 6, 7, 8]);
        assert!(right.looped);
    }

    #[test]
    fn test_key_names() {
        for key in [AnimKey::Left, AnimKey::Turn, AnimKey::Right] {
            assert_eq!(AnimKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(AnimKey::from_name("idle"), Some(AnimKey::Turn));
        assert_eq!(AnimKey::from_name("jump"), None);
    }

    #[test]
    fn test_ignore_if_playing() {
        let registry = AnimationRegistry::player();
        let mut animator = Animator::new();

        assert!(animator.play(&registry, AnimKey::Left, true));
        animator.advance(&registry, 0.15);
        assert_eq!(animator.current_frame(), 1);

        // Same clip again does not restart
        assert!(!animator.play(&registry, AnimKey::Left, true));
        assert_eq!(animator.current_frame(), 1);

        // Without the flag it restarts
        assert!(animator.play(&registry, AnimKey::Left, false));
        assert_eq!(animator.current_frame(), 0);
    }

    #[test]
    fn test_looping_clip_wraps() {
        let registry = AnimationRegistry::player();
        let mut animator = Animator::new();
        animator.play(&registry, AnimKey::Right, true);

        // 4 frames at 10 fps: 0.45s lands on the first frame again
        animator.advance(&registry, 0.45);
        assert!(animator.is_playing());
        assert_eq!(animator.current_frame(), 5);
    }

    #[test]
    fn test_single_frame_clip_stops() {
        let registry = AnimationRegistry::player();
        let mut animator = Animator::new();
        animator.play(&registry, AnimKey::Turn, false);
        assert_eq!(animator.current_frame(), 4);

        animator.advance(&registry, 0.1);
        assert!(!animator.is_playing());
        assert_eq!(animator.current_frame(), 4);
        assert_eq!(animator.current_key(), Some(AnimKey::Turn));
    }

    #[test]
    fn test_unregistered_clip() {
        let registry = AnimationRegistry::new();
        let mut animator = Animator::new();
        assert!(!animator.play(&registry, AnimKey::Left, false));
        assert_eq!(animator.current_key(), None);
    }
}
