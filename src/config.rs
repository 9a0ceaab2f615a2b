/// Tunable parameters for one run of the game.

use std::time::Duration;

use crate::entities::SpriteSizes;
use crate::error::{Result, SidewaysError};

pub const DEFAULT_AREA_WIDTH: i32 = 800;
pub const DEFAULT_AREA_HEIGHT: i32 = 560;
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 60;
pub const DEFAULT_LIVES: u32 = 2;
pub const DEFAULT_RESPAWN_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_GAMEOVER_DELAY: Duration = Duration::from_secs(2);

pub const DEFAULT_SPRITES: SpriteSizes = SpriteSizes {
    player: (30, 20),
    player_shot: (10, 6),
    alien: (30, 20),
    alien_shot: (8, 8),
};

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub area_width: i32,
    pub area_height: i32,
    pub sprites: SpriteSizes,
    pub frames_per_second: u32,
    pub lives: u32,
    /// How long a dead player stays down before respawning.
    pub respawn_delay: Duration,
    /// How long the game-over screen stays up before a restart.
    pub gameover_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            area_width: DEFAULT_AREA_WIDTH,
            area_height: DEFAULT_AREA_HEIGHT,
            sprites: DEFAULT_SPRITES,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            lives: DEFAULT_LIVES,
            respawn_delay: DEFAULT_RESPAWN_DELAY,
            gameover_delay: DEFAULT_GAMEOVER_DELAY,
        }
    }
}

impl GameConfig {
    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.frames_per_second == 0 {
            return Err(SidewaysError::InvalidConfig(
                "frames per second must be at least 1".to_string(),
            ));
        }
        if self.area_width <= 0 || self.area_height <= 0 {
            return Err(SidewaysError::InvalidConfig(format!(
                "play area {}x{} is empty",
                self.area_width, self.area_height
            )));
        }
        let sprites = [
            ("player", self.sprites.player),
            ("player shot", self.sprites.player_shot),
            ("alien", self.sprites.alien),
            ("alien shot", self.sprites.alien_shot),
        ];
        for (name, (w, h)) in sprites {
            if w <= 0 || h <= 0 {
                return Err(SidewaysError::InvalidConfig(format!(
                    "{name} sprite {w}x{h} is empty"
                )));
            }
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}
