//! Input to motion mapping
//!
//! Runs once per tick after contacts are handled. Horizontal priority is
//! left, then right, then idle; the jump check is independent of it.

use super::anim::{AnimKey, AnimationRegistry};
use super::state::Player;
use super::tick::TickInput;
use crate::consts::{PLAYER_JUMP_VELOCITY, PLAYER_RUN_SPEED};

/// Which horizontal branch ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionBranch {
    Left,
    Right,
    Idle,
}

/// What one mapping step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionOutcome {
    pub branch: MotionBranch,
    /// The branch's clip was (re)started this tick
    pub clip_restarted: bool,
    /// Jump impulse applied this tick
    pub jumped: bool,
}

/// Player is standing on something
#[inline]
pub fn is_grounded(player: &Player) -> bool {
    player.body.touching.down
}

/// Set player velocity and animation from the held keys
pub fn apply_input(
    player: &mut Player,
    anims: &AnimationRegistry,
    input: &TickInput,
) -> MotionOutcome {
    let (branch, clip_restarted) = if input.left {
        player.body.set_velocity_x(-PLAYER_RUN_SPEED);
        (MotionBranch::Left, player.animator.play(anims, AnimKey::Left, true))
    } else if input.right {
        player.body.set_velocity_x(PLAYER_RUN_SPEED);
        (MotionBranch::Right, player.animator.play(anims, AnimKey::Right, true))
    } else {
        player.body.set_velocity_x(0.0);
        // Idle always restarts, no "already playing" check
        (MotionBranch::Idle, player.animator.play(anims, AnimKey::Turn, false))
    };

    let jumped = input.up && is_grounded(player);
    if jumped {
        player.body.set_velocity_y(PLAYER_JUMP_VELOCITY);
    }

    MotionOutcome {
        branch,
        clip_restarted,
        jumped,
    }
}
