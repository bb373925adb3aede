//! Property tests over arbitrary small inputs.
//!
//! Every property is stated against the public API only: producers,
//! controller and recording surface.

use proptest::prelude::*;
use sortstep::prelude::*;
use sortstep::trace::StepTrace;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Bubble),
        Just(Algorithm::Insertion),
        Just(Algorithm::Selection),
    ]
}

fn values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 0..16)
}

proptest! {
    #[test]
    fn drained_controller_shows_sorted_sequence(algorithm in algorithm(), input in values()) {
        let mut player = PlaybackController::new(RecordingSurface::new(), algorithm);
        player.load(input.clone()).expect("load");
        player.start().expect("start");
        while !matches!(player.advance().expect("advance"), Advance::Finished { .. }) {}

        let mut expected = input;
        expected.sort_unstable();
        prop_assert_eq!(player.sequence(), expected.as_slice());
        prop_assert_eq!(&player.surface().frame().values, &expected);
    }

    #[test]
    fn surface_mirrors_producer_after_every_step(algorithm in algorithm(), input in values()) {
        let mut player = PlaybackController::new(RecordingSurface::new(), algorithm);
        player.load(input).expect("load");
        player.start().expect("start");
        while let Advance::Stepped { step, .. } = player.advance().expect("advance") {
            prop_assert_eq!(player.surface().frame().values.as_slice(), player.sequence());
            prop_assert_eq!(&player.surface().frame().highlights, &step.highlight_indices);
        }
    }

    #[test]
    fn reset_restores_pristine(
        algorithm in algorithm(),
        input in values(),
        advances in 0usize..200,
    ) {
        let mut player = PlaybackController::new(RecordingSurface::new(), algorithm);
        player.load(input.clone()).expect("load");
        player.start().expect("start");
        for _ in 0..advances {
            if player.advance().is_err() {
                break;
            }
        }

        player.reset().expect("reset");
        prop_assert_eq!(player.run_state(), RunState::Idle);
        prop_assert_eq!(player.step_count(), 0);
        prop_assert_eq!(player.sequence(), input.as_slice());
        prop_assert_eq!(&player.surface().frame().values, &input);
        prop_assert!(player.surface().frame().highlights.is_empty());
    }

    #[test]
    fn render_is_idempotent(input in values(), highlights in prop::collection::vec(0usize..16, 0..3)) {
        let mut once = RecordingSurface::new();
        once.render(&input, &highlights).expect("render");

        let mut twice = RecordingSurface::new();
        twice.render(&input, &highlights).expect("render");
        twice.render(&input, &highlights).expect("render");

        prop_assert_eq!(once.frame(), twice.frame());
    }

    #[test]
    fn trace_checksum_is_reproducible(algorithm in algorithm(), input in values()) {
        let a = StepTrace::record(algorithm, &input);
        let b = StepTrace::record(algorithm, &input);
        prop_assert_eq!(a.checksum().expect("checksum"), b.checksum().expect("checksum"));
        prop_assert_eq!(a.counts().steps, a.steps.len());
    }
}
