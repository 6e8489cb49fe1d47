//! Property tests over whole sessions

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::state::{BrickId, GameState, Paddle};
use super::tick::{InputSample, Outcome, Tick};
use crate::settings::{PaddlePolicy, Settings};

fn remaining(state: &GameState) -> BTreeSet<BrickId> {
    state.bricks.iter().map(|b| b.id).collect()
}

proptest! {
    #[test]
    fn paddle_always_inside_playfield(pointer in -1.0e6f32..1.0e6) {
        let paddle = Paddle::from_pointer(pointer, 640.0);
        prop_assert!(paddle.x >= 0.0);
        prop_assert!(paddle.x <= 540.0);
    }

    #[test]
    fn repeated_tick_only_moves_paddle(first in -100.0f32..800.0, second in -100.0f32..800.0) {
        let mut state = GameState::default();
        state.advance(Tick(1), Some(InputSample::pointer(first))).unwrap();
        let held = state.ball.pos;

        state.advance(Tick(1), Some(InputSample::pointer(second))).unwrap();
        prop_assert_eq!(state.ball.pos, held);
        prop_assert_eq!(state.paddle.x, Paddle::from_pointer(second, 640.0).x);
    }

    #[test]
    fn speed_and_score_track_destroyed_bricks(
        pointers in prop::collection::vec(0.0f32..640.0, 1..400),
        split in any::<bool>(),
        repeat_every in 2u64..9,
    ) {
        let settings = Settings {
            paddle_policy: if split { PaddlePolicy::Split } else { PaddlePolicy::Simple },
            ..Settings::default()
        };
        let mut state = GameState::new(settings);
        let start_speed = state.ball.speed;
        let mut destroyed: BTreeSet<BrickId> = BTreeSet::new();
        let mut last_speed = start_speed;
        let mut game_overs = 0;

        for (i, &x) in pointers.iter().enumerate() {
            // Some ticks repeat the previous timestamp
            let t = i as u64 - (i as u64 % repeat_every == 1) as u64;
            let before = remaining(&state);
            match state.advance(Tick(t), Some(InputSample::pointer(x))) {
                Ok(Outcome::Frame(frame)) => {
                    prop_assert_eq!(frame.score, state.score);
                    prop_assert_eq!(frame.bricks().len(), state.bricks.len());
                }
                Ok(Outcome::GameOver { final_score }) => {
                    prop_assert_eq!(final_score, state.score);
                    game_overs += 1;
                }
                Err(_) => {
                    prop_assert_eq!(game_overs, 1);
                    break;
                }
            }

            let after = remaining(&state);
            prop_assert!(after.is_subset(&before));
            for id in before.difference(&after) {
                prop_assert!(destroyed.insert(*id), "brick destroyed twice");
            }
            prop_assert!(after.is_disjoint(&destroyed));

            prop_assert!(state.ball.speed >= last_speed);
            last_speed = state.ball.speed;
            prop_assert_eq!(state.ball.speed, start_speed + destroyed.len() as f32);
            prop_assert_eq!(state.score, destroyed.len() as u64);
        }

        prop_assert!(game_overs <= 1);
    }
}
