//! Game logic for Flappy Bird.

use super::types::{
    FlappyGame, BIRD_MAX_Y, BIRD_X, CEILING_Y, FLAP_IMPULSE, GRAVITY, PIPE_SPEED, PIPE_WIDTH,
    SPAWN_THRESHOLD_X,
};
use rand::Rng;

/// Input actions for Flappy Bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Up, or Enter). Also starts a waiting round and restarts
    /// a finished one.
    Flap,
    /// Restart (R). Only honored after the round is over.
    Restart,
    /// Any other key.
    Other,
}

/// Process player input. The flap key doubles as start and restart, so a
/// single key carries the whole round lifecycle.
pub fn process_input<R: Rng>(game: &mut FlappyGame, input: FlappyInput, rng: &mut R) {
    match input {
        FlappyInput::Flap => {
            if game.over {
                game.reset(rng);
            } else if !game.started {
                // Starting press does not apply an impulse.
                game.start();
            } else {
                game.bird_vel = FLAP_IMPULSE;
            }
        }
        FlappyInput::Restart => {
            if game.over {
                game.reset(rng);
            }
        }
        FlappyInput::Other => {}
    }
}

/// Process one physics tick (called every 20ms from the event loop).
/// Applies gravity, scrolls and spawns pipes, then checks collisions and
/// scoring. Does nothing while waiting to start or after the round ended.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if !game.started || game.over {
        return;
    }

    game.bird_vel += GRAVITY;
    game.bird_y += game.bird_vel;

    advance_pipes(game, rng);
    check_collisions(game);
    // Scoring runs even on the tick that ended the round.
    update_score(game);
}

/// Scroll pipes left, drop pairs fully past the left edge, and spawn the
/// next pair once the rightmost one crosses the spawn threshold.
fn advance_pipes<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
    }
    game.pipes.retain(|p| p.x + PIPE_WIDTH >= 0);

    let needs_spawn = match game.pipes.last() {
        Some(last) => last.x < SPAWN_THRESHOLD_X,
        None => true,
    };
    if needs_spawn {
        game.spawn_pipe(rng);
    }
}

/// Ground contact ends the round. Ceiling contact only clamps position and
/// zeroes velocity. Otherwise the shrunk bird box is tested against every
/// pipe rectangle.
fn check_collisions(game: &mut FlappyGame) {
    if game.bird_y >= BIRD_MAX_Y {
        game.bird_y = BIRD_MAX_Y;
        game.over = true;
        return;
    }

    if game.bird_y <= CEILING_Y {
        game.bird_y = CEILING_Y;
        game.bird_vel = 0;
    }

    let hitbox = game.hitbox();
    for pipe in &game.pipes {
        if hitbox.intersects(&pipe.upper_rect()) || hitbox.intersects(&pipe.lower_rect()) {
            game.over = true;
            return;
        }
    }
}

/// Score every pair whose right edge the bird has passed, once per pair.
fn update_score(game: &mut FlappyGame) {
    for pipe in &mut game.pipes {
        if !pipe.scored && BIRD_X > pipe.x + PIPE_WIDTH {
            pipe.scored = true;
            game.score += 1;
            if game.score > game.high_score {
                game.high_score = game.score;
            }
        }
    }
}
