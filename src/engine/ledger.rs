//! Transfer ledger every evaluator settles through.
//!
//! Money only ever moves from one participant to another, so a ledger's
//! balances always sum to exactly zero.

use crate::domain::{ModeTag, Money, PlayerId};
use std::collections::BTreeMap;

use super::ModeResult;

pub struct Ledger {
    mode: ModeTag,
    balances: BTreeMap<PlayerId, Money>,
}

impl Ledger {
    /// A ledger with a zero balance for every participant.
    pub fn new(mode: ModeTag, participants: &[PlayerId]) -> Self {
        Self {
            mode,
            balances: participants
                .iter()
                .map(|p| (p.clone(), Money::zero()))
                .collect(),
        }
    }

    pub fn is_participant(&self, player: &PlayerId) -> bool {
        self.balances.contains_key(player)
    }

    /// Move `amount` from `payer` to `payee`.
    ///
    /// Transfers involving a non-participant, or a player paying themself,
    /// are dropped.
    pub fn transfer(&mut self, payer: &PlayerId, payee: &PlayerId, amount: Money) {
        if payer == payee || amount.is_zero() {
            return;
        }
        if !self.is_participant(payer) || !self.is_participant(payee) {
            return;
        }
        if let Some(balance) = self.balances.get_mut(payer) {
            *balance -= amount;
        }
        if let Some(balance) = self.balances.get_mut(payee) {
            *balance += amount;
        }
    }

    /// `payer` pays `amount` to every other participant.
    pub fn pay_each(&mut self, payer: &PlayerId, amount: Money) {
        let others: Vec<PlayerId> = self.others(payer);
        for other in &others {
            self.transfer(payer, other, amount);
        }
    }

    /// `payee` collects `amount` from every other participant.
    pub fn collect_from_each(&mut self, payee: &PlayerId, amount: Money) {
        let others: Vec<PlayerId> = self.others(payee);
        for other in &others {
            self.transfer(other, payee, amount);
        }
    }

    /// Every loser pays every winner `amount`.
    pub fn settle_pairwise(&mut self, winners: &[PlayerId], losers: &[PlayerId], amount: Money) {
        for loser in losers {
            for winner in winners {
                self.transfer(loser, winner, amount);
            }
        }
    }

    /// Equal-size sides: each winner receives `amount`, each loser pays
    /// `amount`, paired by roster position. Unequal sides settle nothing.
    pub fn settle_sides(&mut self, winners: &[PlayerId], losers: &[PlayerId], amount: Money) {
        if winners.len() != losers.len() {
            return;
        }
        for (winner, loser) in winners.iter().zip(losers) {
            self.transfer(loser, winner, amount);
        }
    }

    /// Every player with more points collects the difference times `unit`
    /// from every player with fewer.
    pub fn settle_points(&mut self, points: &BTreeMap<PlayerId, i64>, unit: Money) {
        for (high, &hp) in points {
            for (low, &lp) in points {
                if hp > lp {
                    self.transfer(low, high, unit.times(hp - lp));
                }
            }
        }
    }

    /// Reach the given per-player balances through direct transfers, largest
    /// debtor paying largest creditor first. Targets that do not sum to zero
    /// are not settled.
    pub fn settle_balances(&mut self, targets: &BTreeMap<PlayerId, Money>) {
        let total: Money = targets.values().sum();
        if !total.is_zero() {
            return;
        }
        let mut creditors: Vec<(PlayerId, Money)> = targets
            .iter()
            .filter(|(_, m)| m.is_positive())
            .map(|(p, m)| (p.clone(), *m))
            .collect();
        let mut debtors: Vec<(PlayerId, Money)> = targets
            .iter()
            .filter(|(_, m)| m.is_negative())
            .map(|(p, m)| (p.clone(), m.abs()))
            .collect();
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let amount = debtors[i].1.min(creditors[j].1);
            self.transfer(&debtors[i].0, &creditors[j].0, amount);
            debtors[i].1 -= amount;
            creditors[j].1 -= amount;
            if debtors[i].1.is_zero() {
                i += 1;
            }
            if creditors[j].1.is_zero() {
                j += 1;
            }
        }
    }

    fn others(&self, player: &PlayerId) -> Vec<PlayerId> {
        self.balances
            .keys()
            .filter(|p| *p != player)
            .cloned()
            .collect()
    }

    pub fn into_result(self) -> ModeResult {
        ModeResult {
            mode: self.mode,
            net: self.balances,
        }
    }
}
