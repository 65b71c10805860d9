use game_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_intent(rng: &mut StdRng) -> PaddleIntent {
    PaddleIntent::new(rng.gen_bool(0.5), rng.gen_bool(0.5))
}

#[test]
fn test_paddle_stays_in_bounds_for_any_input_sequence() {
    let config = Config::new();
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..200 {
        let start_y = rng.gen_range(0.0..=config.paddle_max_y());
        let mut paddle = Paddle::new(PlayerSlot::Left, config.paddle_x(PlayerSlot::Left), start_y);

        for _ in 0..500 {
            update_paddle(&mut paddle, random_intent(&mut rng), &config);
            assert!(
                paddle.y >= 0.0 && paddle.y <= config.paddle_max_y(),
                "Paddle left the court: y={} (started at {})",
                paddle.y,
                start_y
            );
        }
    }
}

#[test]
fn test_paddle_can_reach_both_edges() {
    let config = Config::new();
    let mut paddle = Paddle::spawn(PlayerSlot::Right, &config);

    for _ in 0..200 {
        update_paddle(&mut paddle, PaddleIntent::new(true, false), &config);
    }
    assert_eq!(paddle.y, 0.0);

    for _ in 0..200 {
        update_paddle(&mut paddle, PaddleIntent::new(false, true), &config);
    }
    assert_eq!(paddle.y, config.paddle_max_y());
}

#[test]
fn test_ball_speed_magnitude_never_changes() {
    let config = Config::new();
    let mut game = Match::new(config.clone(), MatchConfig::new("L", "R", u32::MAX));
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20_000 {
        game.advance([random_intent(&mut rng), random_intent(&mut rng)]);
        let vel = game.ball().vel;
        assert_eq!(vel.x.abs(), config.ball_speed, "dx magnitude changed: {vel:?}");
        assert_eq!(vel.y.abs(), config.ball_speed, "dy magnitude changed: {vel:?}");
        for slot in PlayerSlot::ALL {
            let y = game.paddle(slot).y;
            assert!(y >= 0.0 && y <= config.paddle_max_y());
        }
    }
}

#[test]
fn test_each_exit_scores_exactly_one_point() {
    let config = Config::new();
    let mut game = Match::new(config.clone(), MatchConfig::new("L", "R", u32::MAX));
    let mut rng = StdRng::seed_from_u64(99);
    let mut previous = game.score();

    for _ in 0..20_000 {
        game.advance([random_intent(&mut rng), random_intent(&mut rng)]);
        let score = game.score();
        let gained = (score.left - previous.left) + (score.right - previous.right);

        match game.events().scored {
            Some(slot) => {
                assert_eq!(gained, 1, "One point per exit");
                assert_eq!(score.get(slot), previous.get(slot) + 1);
                assert_eq!(game.ball().pos, config.center(), "Ball back in the centre");
                assert_eq!(game.ball().vel.y, config.ball_speed, "Serve always heads down");
            }
            None => assert_eq!(gained, 0, "No points without an exit"),
        }
        previous = score;
    }
}

#[test]
fn test_ball_at_left_edge_moving_right_does_not_score() {
    let config = Config::new();
    let left = Paddle::new(
        PlayerSlot::Left,
        config.paddle_x(PlayerSlot::Left),
        config.paddle_max_y(),
    );
    let right = Paddle::spawn(PlayerSlot::Right, &config);
    let mut ball = Ball::new(Vec2::new(-4.0, 100.0), Vec2::new(4.0, 4.0));
    let mut score = Score::new();
    let mut events = Events::new();

    update_ball(&mut ball, &left, &right, &mut score, &config, &mut events);

    assert_eq!(ball.pos.x, 0.0);
    assert_eq!(score, Score::new(), "Right player must not score");
    assert_eq!(events.scored, None);
}

#[test]
fn test_left_paddle_overlap_forces_rightward_speed() {
    let config = Config::new();
    let right = Paddle::spawn(PlayerSlot::Right, &config);
    let paddle_face = config.paddle_x(PlayerSlot::Left) + config.paddle_width;

    for dx in [config.ball_speed, -config.ball_speed] {
        // Ball lands exactly on the paddle face and top edge this tick
        let start = Vec2::new(paddle_face - dx, 200.0 - config.ball_speed);
        let left = Paddle::new(PlayerSlot::Left, config.paddle_x(PlayerSlot::Left), 200.0);
        let mut ball = Ball::new(start, Vec2::new(dx, config.ball_speed));
        let mut score = Score::new();
        let mut events = Events::new();

        update_ball(&mut ball, &left, &right, &mut score, &config, &mut events);

        assert_eq!(ball.pos, Vec2::new(paddle_face, 200.0));
        assert_eq!(ball.vel.x, config.ball_speed, "dx forced positive (was {dx})");
        assert_eq!(events.paddle_hit, Some(PlayerSlot::Left));
    }
}

#[test]
fn test_right_player_wins_after_three_exits() {
    let config = Config::new();
    let mut left = Paddle::new(
        PlayerSlot::Left,
        config.paddle_x(PlayerSlot::Left),
        config.paddle_max_y(),
    );
    let mut right = Paddle::spawn(PlayerSlot::Right, &config);
    let mut score = Score::new();
    let mut events = Events::new();
    let winning_score = 3;

    for exit in 1..=3 {
        let mut ball = Ball::new(Vec2::new(2.0, 60.0), Vec2::new(-4.0, 4.0));
        update_paddle(&mut left, PaddleIntent::idle(), &config);
        update_paddle(&mut right, PaddleIntent::idle(), &config);
        events.clear();
        update_ball(&mut ball, &left, &right, &mut score, &config, &mut events);

        assert_eq!(events.scored, Some(PlayerSlot::Right));
        let winner = score.has_winner(winning_score);
        if exit < 3 {
            assert_eq!(winner, None, "Finished too early on exit {exit}");
        } else {
            assert_eq!(winner, Some(PlayerSlot::Right));
        }
    }
    assert_eq!(score, Score { left: 0, right: 3 });
}

#[test]
fn test_simultaneous_threshold_goes_to_left() {
    let score = Score { left: 7, right: 7 };
    assert_eq!(score.has_winner(7), Some(PlayerSlot::Left));
    assert_eq!(score.has_winner(8), None);
}

#[test]
fn test_match_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(2024);
    let script: Vec<[PaddleIntent; 2]> = (0..5_000)
        .map(|_| [random_intent(&mut rng), random_intent(&mut rng)])
        .collect();

    let play = || {
        let mut game = Match::new(Config::new(), MatchConfig::new("L", "R", 1_000));
        for intents in &script {
            game.advance(*intents);
        }
        (game.score(), *game.ball(), *game.paddle(PlayerSlot::Left))
    };

    assert_eq!(play(), play(), "Same inputs, same match");
}
