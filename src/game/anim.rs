//! Player animation clips
//!
//! Named frame sequences on the ship spritesheet. `turn` is a single static
//! frame; `left` and `right` cycle two banking frames at 10 fps. Playback is
//! a cursor over the clip, restarted only when the clip actually changes
//! (matching "play if not already playing" semantics).

/// The ship animation clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipAnim {
    /// Neutral attitude, static frame
    Turn,
    /// Banking left
    Left,
    /// Banking right
    Right,
}

impl ShipAnim {
    /// Frame indices into the player spritesheet for this clip.
    pub fn frames(self) -> &'static [u16] {
        match self {
            ShipAnim::Turn => &[0],
            ShipAnim::Left => &[1, 2],
            ShipAnim::Right => &[1, 2],
        }
    }

    /// Playback rate in frames per second. Static clips return 0.
    pub fn fps(self) -> f32 {
        match self {
            ShipAnim::Turn => 0.0,
            ShipAnim::Left | ShipAnim::Right => 10.0,
        }
    }
}

/// Playback state for one sprite's animation.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    current: ShipAnim,
    /// Seconds since the current clip started
    cursor: f32,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            current: ShipAnim::Turn,
            cursor: 0.0,
        }
    }

    /// Switch to a clip. A no-op if the clip is already playing.
    pub fn play(&mut self, anim: ShipAnim) {
        if self.current != anim {
            self.current = anim;
            self.cursor = 0.0;
        }
    }

    /// Advance playback.
    pub fn tick(&mut self, dt: f32) {
        self.cursor += dt;
    }

    pub fn current(&self) -> ShipAnim {
        self.current
    }

    /// The spritesheet frame to draw right now.
    pub fn frame(&self) -> u16 {
        let frames = self.current.frames();
        let fps = self.current.fps();
        if fps <= 0.0 || frames.len() < 2 {
            return frames[0];
        }
        let idx = (self.cursor * fps) as usize % frames.len();
        frames[idx]
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_is_static_frame_zero() {
        let mut player = AnimationPlayer::new();
        player.tick(5.0);
        assert_eq!(player.frame(), 0);
    }

    #[test]
    fn test_left_cycles_at_ten_fps() {
        let mut player = AnimationPlayer::new();
        player.play(ShipAnim::Left);
        assert_eq!(player.frame(), 1);

        // One frame at 10 fps lasts 0.1 s
        player.tick(0.1);
        assert_eq!(player.frame(), 2);
        player.tick(0.1);
        assert_eq!(player.frame(), 1);
    }

    #[test]
    fn test_replay_does_not_restart_clip() {
        let mut player = AnimationPlayer::new();
        player.play(ShipAnim::Right);
        player.tick(0.1);
        assert_eq!(player.frame(), 2);

        // Playing the same clip again each frame must not reset the cursor
        player.play(ShipAnim::Right);
        assert_eq!(player.frame(), 2);
    }

    #[test]
    fn test_clip_change_restarts_cursor() {
        let mut player = AnimationPlayer::new();
        player.play(ShipAnim::Left);
        player.tick(0.1);
        player.play(ShipAnim::Turn);
        player.play(ShipAnim::Left);
        assert_eq!(player.frame(), 1);
    }
}
