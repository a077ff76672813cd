//! End-to-end settlement scenarios through the public engine API.

use golf_wager::domain::{
    ActiveMode, AuxState, GameSetup, MatchFormat, ModeConfig, ModeTag, Money, NassauConfig,
    NinesConfig, Player, PlayerId, PressMatch, ScoreMatrix, SkinsConfig, SoloCall, VegasConfig,
    WolfChoice, WolfConfig,
};
use golf_wager::engine::settle;
use golf_wager::orchestration::with_auto_presses;

fn m(v: i64) -> Money {
    Money::from_int(v)
}

fn pid(id: &str) -> PlayerId {
    PlayerId::new(id)
}

fn setup_for(ids: &[&str]) -> GameSetup {
    GameSetup::new(ids.iter().map(|id| Player::new(*id, *id, 0)).collect())
}

fn nassau(auto_press: bool) -> ActiveMode {
    ActiveMode::new(ModeConfig::Nassau(NassauConfig {
        front: m(5),
        back: m(5),
        overall: m(10),
        format: MatchFormat::Match,
        use_handicap: false,
        auto_press,
        press_trigger: 2,
    }))
}

#[test]
fn nassau_auto_press_settles_base_and_press_separately() {
    let setup = setup_for(&["a", "b"]).with_mode(nassau(true));
    let scores = ScoreMatrix::default()
        .with_row(&pid("a"), &[4, 4, 4, 3, 5, 5, 5, 5, 5])
        .with_row(&pid("b"), &[5, 5, 5, 4, 5, 5, 5, 5, 5]);

    let aux = with_auto_presses(&setup, &scores, &AuxState::default());
    let ranges: Vec<(usize, usize)> = aux
        .presses
        .iter()
        .map(|p| (p.start_hole, p.end_hole))
        .collect();
    assert_eq!(ranges, vec![(2, 8), (4, 8)]);

    // Base front won 5, first press won 5, second press halved.
    let result = settle(&setup, &scores, &aux);
    assert_eq!(result.amount(&pid("a")), m(10));
    assert_eq!(result.amount(&pid("b")), m(-10));

    let without_presses = settle(&setup, &scores, &AuxState::default());
    assert_eq!(without_presses.amount(&pid("a")), m(5));
}

#[test]
fn press_is_settled_independently_of_base_back_nine() {
    let setup = setup_for(&["a", "b"]).with_mode(nassau(false));
    let mut a_row = [4_u8; 18];
    a_row[9] = 3;
    a_row[12] = 5;
    a_row[13] = 5;
    let scores = ScoreMatrix::default()
        .with_row(&pid("a"), &a_row)
        .with_row(&pid("b"), &[4; 18]);

    let base = settle(&setup, &scores, &AuxState::default());
    // Front halved, back and overall to b.
    assert_eq!(base.amount(&pid("b")), m(15));

    let aux = AuxState {
        presses: vec![PressMatch {
            start_hole: 12,
            end_hole: 16,
            mode: ModeTag::Nassau,
            bet: m(5),
            pair: None,
        }],
        ..Default::default()
    };
    let pressed = settle(&setup, &scores, &aux);
    assert_eq!(pressed.amount(&pid("b")), m(20));
    assert_eq!(pressed.amount(&pid("a")), m(-20));
}

#[test]
fn vegas_birdie_team_reads_low_digit_first() {
    let setup = setup_for(&["a1", "a2", "b1", "b2"]).with_mode(ActiveMode::new(
        ModeConfig::Vegas(VegasConfig {
            team_a: vec![pid("a1"), pid("a2")],
            team_b: vec![pid("b1"), pid("b2")],
            bet_per_point: m(1),
            use_handicap: false,
            flip_on_birdie: false,
        }),
    ));
    // Hole 0 is a par 4: 35 against 55.
    let scores = ScoreMatrix::default()
        .with_row(&pid("a1"), &[3])
        .with_row(&pid("a2"), &[5])
        .with_row(&pid("b1"), &[5])
        .with_row(&pid("b2"), &[5]);

    let result = settle(&setup, &scores, &AuxState::default());
    assert_eq!(result.amount(&pid("a1")), m(20));
    assert_eq!(result.amount(&pid("a2")), m(20));
    assert_eq!(result.amount(&pid("b1")), m(-20));
    assert_eq!(result.amount(&pid("b2")), m(-20));
}

#[test]
fn lone_wolf_collects_double_from_each_opponent() {
    let setup = setup_for(&["w", "x", "y", "z"]).with_mode(ActiveMode::new(ModeConfig::Wolf(
        WolfConfig {
            bet: m(3),
            use_handicap: false,
            rotation: vec![],
            last_place_tiebreak: Default::default(),
        },
    )));
    let scores = ScoreMatrix::default()
        .with_row(&pid("w"), &[4])
        .with_row(&pid("x"), &[5])
        .with_row(&pid("y"), &[5])
        .with_row(&pid("z"), &[5]);
    let mut aux = AuxState::default();
    aux.wolf
        .insert(0, WolfChoice::lone(pid("w"), SoloCall::AfterDrives));

    let result = settle(&setup, &scores, &aux);
    assert_eq!(result.amount(&pid("w")), m(18));
    for other in ["x", "y", "z"] {
        assert_eq!(result.amount(&pid(other)), m(-6));
    }
}

#[test]
fn empty_round_is_all_zero() {
    let ids = ["a", "b", "c", "d"];
    let setup = setup_for(&ids)
        .with_mode(nassau(true))
        .with_mode(ActiveMode::new(ModeConfig::Skins(SkinsConfig {
            bet: m(2),
            use_handicap: false,
            carryover: true,
        })))
        .with_mode(ActiveMode::new(ModeConfig::Nines(NinesConfig {
            bet_per_point: m(1),
            use_handicap: false,
        })));

    let result = settle(&setup, &ScoreMatrix::default(), &AuxState::default());
    assert_eq!(result.net.len(), ids.len());
    assert!(result.net.values().all(Money::is_zero));
    assert!(result
        .by_mode
        .values()
        .flat_map(|amounts| amounts.values())
        .all(Money::is_zero));
}

#[test]
fn nines_all_tied_splits_evenly() {
    let setup = setup_for(&["a", "b", "c", "d"]).with_mode(ActiveMode::new(ModeConfig::Nines(
        NinesConfig {
            bet_per_point: m(1),
            use_handicap: false,
        },
    )));
    let tied = ["a", "b", "c", "d"]
        .iter()
        .fold(ScoreMatrix::default(), |acc, id| acc.with_row(&pid(id), &[4]));
    let result = settle(&setup, &tied, &AuxState::default());
    assert!(result.net.values().all(Money::is_zero));

    let spread = ScoreMatrix::default()
        .with_row(&pid("a"), &[3])
        .with_row(&pid("b"), &[4])
        .with_row(&pid("c"), &[5])
        .with_row(&pid("d"), &[6]);
    let result = settle(&setup, &spread, &AuxState::default());
    assert_eq!(result.amount(&pid("a")), m(3));
    assert_eq!(result.amount(&pid("b")), m(1));
    assert_eq!(result.amount(&pid("c")), m(-1));
    assert_eq!(result.amount(&pid("d")), m(-3));
}

#[test]
fn skins_tie_carries_to_next_hole() {
    let setup = setup_for(&["a", "b", "c"]).with_mode(ActiveMode::new(ModeConfig::Skins(
        SkinsConfig {
            bet: m(1),
            use_handicap: false,
            carryover: true,
        },
    )));
    let scores = ScoreMatrix::default()
        .with_row(&pid("a"), &[4, 3])
        .with_row(&pid("b"), &[4, 4])
        .with_row(&pid("c"), &[5, 4]);

    let result = settle(&setup, &scores, &AuxState::default());
    assert_eq!(result.amount(&pid("a")), m(4));
    assert_eq!(result.amount(&pid("b")), m(-2));
    assert_eq!(result.amount(&pid("c")), m(-2));
}

#[test]
fn modes_add_up_in_combined_net() {
    let setup = setup_for(&["a", "b", "c"])
        .with_mode(ActiveMode::new(ModeConfig::Skins(SkinsConfig {
            bet: m(1),
            use_handicap: false,
            carryover: true,
        })))
        .with_mode(ActiveMode::new(ModeConfig::Nines(NinesConfig {
            bet_per_point: m(1),
            use_handicap: false,
        })));
    let scores = ScoreMatrix::default()
        .with_row(&pid("a"), &[3])
        .with_row(&pid("b"), &[4])
        .with_row(&pid("c"), &[5]);

    let result = settle(&setup, &scores, &AuxState::default());
    // Skins: a +2. Nines with three players: 5/3/1 points.
    assert_eq!(result.mode_amount(ModeTag::Skins, &pid("a")), m(2));
    assert_eq!(result.mode_amount(ModeTag::Nines, &pid("a")), m(2));
    assert_eq!(result.amount(&pid("a")), m(4));
    assert_eq!(result.amount(&pid("c")), m(-3));
    assert!(result.total().is_zero());
}
