//! Scheduler behavior with the real unit kinds.

use std::rc::Rc;

use tui_starfield::core::{
    Canvas, FrameArt, FrameCycle, Pilot, Scheduler, Shot, ShotStage, SimpleRng, TickOutcome,
    Twinkle, Unit,
};
use tui_starfield::types::{Movement, Position};

fn shot_of(scheduler: &Scheduler) -> Option<&Shot> {
    scheduler.units().find_map(|u| match u {
        Unit::Shot(s) => Some(s),
        _ => None,
    })
}

fn pilot_of(scheduler: &Scheduler) -> &Pilot {
    scheduler
        .units()
        .find_map(|u| match u {
            Unit::Pilot(p) => Some(p),
            _ => None,
        })
        .expect("pilot registered")
}

fn square_frames() -> Vec<Rc<FrameArt>> {
    vec![
        Rc::new(FrameArt::load("###\n###\n###").unwrap()),
        Rc::new(FrameArt::load("@@@\n@@@\n@@@").unwrap()),
    ]
}

#[test]
fn shot_dies_after_27_flight_ticks() {
    let mut canvas = Canvas::new(20, 100);
    let mut scheduler: Scheduler = Scheduler::new();
    scheduler.register_required(Shot::with_velocity(
        Position::new(8.0, 80.0),
        Movement::new(-0.3, 0.0),
    ));

    // Muzzle flash.
    for _ in 0..2 {
        assert_eq!(scheduler.tick(&mut canvas, Movement::NONE), TickOutcome::Running);
    }
    assert_eq!(shot_of(&scheduler).unwrap().stage(), ShotStage::Flight);

    for flight_tick in 1..=26 {
        assert_eq!(
            scheduler.tick(&mut canvas, Movement::NONE),
            TickOutcome::Running,
            "died early at flight tick {flight_tick}"
        );
        let shot = shot_of(&scheduler).unwrap();
        assert!(shot.position().row > 0.0);
        assert!(shot.position().cell().0 >= 0);
    }

    assert_eq!(scheduler.tick(&mut canvas, Movement::NONE), TickOutcome::Finished);
    assert!(shot_of(&scheduler).is_none(), "dead shot was not pruned");
    assert!(canvas.cells().iter().all(|c| c.ch != '|'));
}

#[test]
fn registration_order_is_stable_across_ticks() {
    let mut canvas = Canvas::new(5, 5);
    let mut scheduler: Scheduler = Scheduler::new();
    let mut rng = SimpleRng::new(8);
    let a = scheduler.register(Twinkle::new(Position::new(1.0, 1.0), '+', &mut rng));
    let b = scheduler.register(Twinkle::new(Position::new(1.0, 1.0), ':', &mut rng));
    let c = scheduler.register(Twinkle::new(Position::new(1.0, 1.0), '*', &mut rng));

    for _ in 0..2 {
        scheduler.tick(&mut canvas, Movement::NONE);
        assert_eq!(scheduler.ids().collect::<Vec<_>>(), vec![a, b, c]);
        // The last registered star always paints over the shared cell.
        assert_eq!(canvas.get(1, 1).unwrap().ch, '*');
    }
}

#[test]
fn movement_is_clamped_per_axis_through_the_scheduler() {
    let mut canvas = Canvas::new(10, 10);
    let mut scheduler: Scheduler = Scheduler::new();
    scheduler.register(Pilot::new(
        Position::new(5.0, 5.0),
        FrameCycle::new(square_frames()).unwrap(),
    ));

    scheduler.tick(&mut canvas, Movement::new(1.0, 100.0));
    assert_eq!(pilot_of(&scheduler).position(), Position::new(6.0, 5.0));
}

#[test]
fn pilot_frames_alternate_even_when_stuck() {
    let mut canvas = Canvas::new(10, 10);
    let mut scheduler: Scheduler = Scheduler::new();
    scheduler.register(Pilot::new(
        Position::new(7.0, 7.0),
        FrameCycle::new(square_frames()).unwrap(),
    ));

    let mut seen = Vec::new();
    for _ in 0..5 {
        scheduler.tick(&mut canvas, Movement::new(1.0, 2.0));
        seen.push(pilot_of(&scheduler).frame_index().unwrap());
    }
    assert_eq!(seen, vec![0, 1, 0, 1, 0]);
    assert_eq!(pilot_of(&scheduler).position(), Position::new(7.0, 7.0));
}

#[test]
fn twinkles_keep_independent_phases() {
    let mut canvas = Canvas::new(5, 5);
    let mut scheduler: Scheduler = Scheduler::new();
    scheduler.register(Twinkle::with_phase(
        Position::new(1.0, 1.0),
        '*',
        0,
        1,
        SimpleRng::new(1),
    ));
    scheduler.register(Twinkle::with_phase(
        Position::new(2.0, 2.0),
        '*',
        0,
        4,
        SimpleRng::new(2),
    ));

    scheduler.tick(&mut canvas, Movement::NONE);
    let phases: Vec<usize> = scheduler
        .units()
        .filter_map(|u| match u {
            Unit::Twinkle(t) => Some(t.phase()),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![1, 0]);
}

#[test]
fn pilot_and_shot_share_the_canvas_without_ghosts() {
    let mut canvas = Canvas::new(20, 40);
    let mut scheduler: Scheduler = Scheduler::new();
    scheduler.register_required(Shot::new(Position::new(10.0, 20.0)));
    scheduler.register(Pilot::new(
        Position::new(11.0, 19.0),
        FrameCycle::new(square_frames()).unwrap(),
    ));

    let mut outcome = TickOutcome::Running;
    let mut ticks = 0;
    while outcome == TickOutcome::Running {
        outcome = scheduler.tick(&mut canvas, Movement::new(0.0, -2.0));
        ticks += 1;
        let sprite_cells = canvas
            .cells()
            .iter()
            .filter(|c| c.ch == '#' || c.ch == '@')
            .count();
        assert_eq!(sprite_cells, 9, "tick {ticks}");
        assert!(ticks < 100);
    }
}
