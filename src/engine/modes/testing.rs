//! Shared fixtures for evaluator unit tests.

use crate::domain::{Money, Player, PlayerId};

pub fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|n| PlayerId::new(*n)).collect()
}

pub fn scratch(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n, *n, 0)).collect()
}

pub fn m(v: i64) -> Money {
    Money::from_int(v)
}
