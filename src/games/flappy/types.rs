//! Flappy Bird data structures.
//!
//! The game simulates in a fixed 800x600 pixel world regardless of the
//! terminal size; the scene scales it down at render time. Integer
//! positions and velocities keep every tick exactly reproducible.

use rand::Rng;

/// World dimensions.
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

/// Height of the ground strip at the bottom of the world.
pub const GROUND_HEIGHT: i32 = 40;

/// Bird fixed horizontal position and size.
pub const BIRD_X: i32 = 100;
pub const BIRD_WIDTH: i32 = 40;
pub const BIRD_HEIGHT: i32 = 30;

/// Bird vertical start position for a fresh round.
pub const BIRD_START_Y: i32 = 250;

/// Gravity (velocity change per tick, positive = downward).
pub const GRAVITY: i32 = 1;

/// Flap impulse -- sets velocity directly (negative = upward), not additive.
pub const FLAP_IMPULSE: i32 = -12;

/// Bird y is clamped here on ceiling contact; velocity zeroed, round continues.
pub const CEILING_Y: i32 = 5;

/// Highest bird y counted as ground contact, which ends the round.
pub const BIRD_MAX_Y: i32 = SCREEN_HEIGHT - BIRD_HEIGHT - GROUND_HEIGHT;

/// The collision box is inset this much on every side for forgiving play.
pub const HITBOX_INSET: i32 = 5;

/// Vertical gap between the upper and lower pipe of a pair.
pub const PIPE_GAP: i32 = 250;

/// Pipe width in world pixels.
pub const PIPE_WIDTH: i32 = 70;

/// Horizontal scroll speed in pixels per tick.
pub const PIPE_SPEED: i32 = 3;

/// A new pair spawns this far to the right of the last one.
pub const PIPE_SPACING: i32 = 350;

/// When the rightmost pair's x drops below this, the next pair spawns.
pub const SPAWN_THRESHOLD_X: i32 = 350;

/// Upper pipe height band; the gap placement is randomized within it.
pub const MIN_PIPE_HEIGHT: i32 = 60;
pub const MAX_PIPE_HEIGHT: i32 = 300;

/// Physics tick interval driven by the event loop.
pub const TICK_INTERVAL_MS: u64 = 20;

/// An axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict-overlap intersection test (touching edges do not collide).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// One pipe obstacle: an upper and a lower rectangle sharing x and width,
/// separated by [`PIPE_GAP`].
#[derive(Debug, Clone)]
pub struct PipePair {
    /// X position of the pair's left edge.
    pub x: i32,
    /// Height of the upper pipe. The gap spans from here to here + PIPE_GAP.
    pub top_height: i32,
    /// Whether the bird has passed this pair (for scoring).
    pub scored: bool,
}

impl PipePair {
    /// The upper pipe rectangle, hanging from the top of the world.
    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0, PIPE_WIDTH, self.top_height)
    }

    /// The lower pipe rectangle, reaching down to the bottom of the world.
    pub fn lower_rect(&self) -> Rect {
        let top = self.top_height + PIPE_GAP;
        Rect::new(self.x, top, PIPE_WIDTH, SCREEN_HEIGHT - top)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    /// Bird vertical position (top edge of the bird box).
    pub bird_y: i32,
    /// Current vertical velocity in pixels/tick (positive = downward).
    pub bird_vel: i32,
    /// Active pipe pairs, ordered left to right.
    pub pipes: Vec<PipePair>,
    /// Pipes passed this round.
    pub score: u32,
    /// Best score of any round this process. Never cleared by reset.
    pub high_score: u32,
    /// False until the player starts the round. Physics paused while false.
    pub started: bool,
    /// True once the bird hit a pipe or the ground.
    pub over: bool,
}

impl FlappyGame {
    /// Create a fresh game, seeded with its initial pipes.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self {
            bird_y: BIRD_START_Y,
            bird_vel: 0,
            pipes: Vec::new(),
            score: 0,
            high_score: 0,
            started: false,
            over: false,
        };
        game.reset(rng);
        game
    }

    /// Full bird bounding box.
    pub fn bird_rect(&self) -> Rect {
        Rect::new(BIRD_X, self.bird_y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    /// Collision box, shrunk by [`HITBOX_INSET`] on every side.
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            BIRD_X + HITBOX_INSET,
            self.bird_y + HITBOX_INSET,
            BIRD_WIDTH - 2 * HITBOX_INSET,
            BIRD_HEIGHT - 2 * HITBOX_INSET,
        )
    }

    /// Transition from waiting to running. Idempotent once running, and a
    /// no-op after the round is over.
    pub fn start(&mut self) {
        if !self.over {
            self.started = true;
        }
    }

    /// Push a new pair with a randomized gap placement. Spawns at the right
    /// edge when the field is empty, otherwise [`PIPE_SPACING`] past the
    /// rightmost pair.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let x = match self.pipes.last() {
            Some(last) => last.x + PIPE_SPACING,
            None => SCREEN_WIDTH,
        };
        self.pipes.push(PipePair {
            x,
            top_height: rng.gen_range(MIN_PIPE_HEIGHT..MAX_PIPE_HEIGHT),
            scored: false,
        });
    }

    /// Start a new round: bird back to the start position, score zeroed,
    /// field reseeded with two pairs at the right edge. High score survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.bird_y = BIRD_START_Y;
        self.bird_vel = 0;
        self.score = 0;
        self.started = false;
        self.over = false;

        self.pipes.clear();
        // Both initial pairs sit at the right edge with independent heights.
        for _ in 0..2 {
            self.pipes.push(PipePair {
                x: SCREEN_WIDTH,
                top_height: rng.gen_range(MIN_PIPE_HEIGHT..MAX_PIPE_HEIGHT),
                scored: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = rand::thread_rng();
        let game = FlappyGame::new(&mut rng);
        assert_eq!(game.bird_y, BIRD_START_Y);
        assert_eq!(game.bird_vel, 0);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 0);
        assert!(!game.started);
        assert!(!game.over);
        assert_eq!(game.pipes.len(), 2);
    }

    #[test]
    fn test_initial_pipes_at_right_edge() {
        let mut rng = rand::thread_rng();
        let game = FlappyGame::new(&mut rng);
        for pipe in &game.pipes {
            assert_eq!(pipe.x, SCREEN_WIDTH);
            assert!(pipe.top_height >= MIN_PIPE_HEIGHT);
            assert!(pipe.top_height < MAX_PIPE_HEIGHT);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn test_pair_heights_fill_screen() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        for _ in 0..50 {
            game.spawn_pipe(&mut rng);
        }
        for pipe in &game.pipes {
            let upper = pipe.upper_rect();
            let lower = pipe.lower_rect();
            assert_eq!(upper.height + PIPE_GAP + lower.height, SCREEN_HEIGHT);
            assert_eq!(upper.x, lower.x);
            assert_eq!(upper.width, lower.width);
        }
    }

    #[test]
    fn test_spawn_pipe_spacing() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        game.pipes.clear();
        game.spawn_pipe(&mut rng);
        assert_eq!(game.pipes[0].x, SCREEN_WIDTH);
        game.spawn_pipe(&mut rng);
        assert_eq!(game.pipes[1].x, SCREEN_WIDTH + PIPE_SPACING);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(!a.intersects(&Rect::new(20, 20, 5, 5)));
        // Touching edges do not overlap.
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    }

    #[test]
    fn test_hitbox_inset() {
        let mut rng = rand::thread_rng();
        let game = FlappyGame::new(&mut rng);
        let full = game.bird_rect();
        let hit = game.hitbox();
        assert_eq!(hit.x, full.x + HITBOX_INSET);
        assert_eq!(hit.y, full.y + HITBOX_INSET);
        assert_eq!(hit.width, full.width - 2 * HITBOX_INSET);
        assert_eq!(hit.height, full.height - 2 * HITBOX_INSET);
    }

    #[test]
    fn test_start_noop_when_over() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        game.over = true;
        game.start();
        assert!(!game.started);
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        game.score = 7;
        game.high_score = 7;
        game.over = true;
        game.reset(&mut rng);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 7);
        assert!(!game.over);
        assert!(!game.started);
        assert_eq!(game.pipes.len(), 2);
    }
}
