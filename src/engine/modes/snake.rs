//! Snake: whoever three-putted last holds the snake and pays everyone.

use crate::domain::{ModeTag, PlayerId, SnakeConfig, HOLES};

use crate::engine::{Ledger, ModeResult, RoundView};

/// Current holder and the number of three-putts so far, counting only
/// participants.
pub fn holder<'a>(participants: &[PlayerId], view: &RoundView<'a>) -> Option<(&'a PlayerId, i64)> {
    let mut count = 0_i64;
    let mut last = None;
    for (_, putters) in view.aux.three_putts.range(..HOLES) {
        for putter in putters.iter().filter(|p| participants.contains(p)) {
            count += 1;
            last = Some(putter);
        }
    }
    last.map(|p| (p, count))
}

pub fn evaluate(config: &SnakeConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Snake, participants);
    if let Some((holder, count)) = holder(participants, view) {
        let stake = if config.escalating {
            config.bet.times(count)
        } else {
            config.bet
        };
        ledger.pay_each(holder, stake);
    }
    ledger.into_result()
}
