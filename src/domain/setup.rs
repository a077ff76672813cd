//! Round setup: players plus the active modes and their tunable options.
//!
//! This is validated shape, not logic. `GameSetup::validate` is what a caller
//! runs before the round starts; the engine itself never rejects a setup and
//! degrades malformed pieces to zero instead.

use crate::domain::{AuxState, ModeTag, Money, Player, PlayerId, TroubleKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Largest accepted stake, in whole currency units.
pub const MAX_STAKE: i64 = 1_000_000;

/// Largest accepted hammer multiplier.
pub const MAX_HAMMER: u32 = 64;

fn default_true() -> bool {
    true
}

fn default_press_trigger() -> u32 {
    2
}

/// Match play (holes won) or stroke play (totals).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    #[default]
    Match,
    Stroke,
}

/// Who picks first on holes 17 and 18 when several players share last place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastPlaceTiebreak {
    /// Earliest in the tee rotation.
    #[default]
    RotationOrder,
    /// Latest in the tee rotation.
    ReverseRotationOrder,
    /// Highest handicap, then rotation order.
    HighestHandicap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinsConfig {
    pub bet: Money,
    #[serde(default)]
    pub use_handicap: bool,
    #[serde(default = "default_true")]
    pub carryover: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NassauConfig {
    pub front: Money,
    pub back: Money,
    pub overall: Money,
    #[serde(default)]
    pub format: MatchFormat,
    #[serde(default)]
    pub use_handicap: bool,
    #[serde(default)]
    pub auto_press: bool,
    #[serde(default = "default_press_trigger")]
    pub press_trigger: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadConfig {
    pub bet: Money,
    #[serde(default)]
    pub format: MatchFormat,
    #[serde(default)]
    pub use_handicap: bool,
    #[serde(default)]
    pub auto_press: bool,
    #[serde(default = "default_press_trigger")]
    pub press_trigger: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBallConfig {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub bet: Money,
    #[serde(default)]
    pub format: MatchFormat,
    #[serde(default)]
    pub use_handicap: bool,
    #[serde(default)]
    pub auto_press: bool,
    #[serde(default = "default_press_trigger")]
    pub press_trigger: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VegasConfig {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub bet_per_point: Money,
    #[serde(default)]
    pub use_handicap: bool,
    #[serde(default)]
    pub flip_on_birdie: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScotchConfig {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub bet_per_point: Money,
    #[serde(default)]
    pub use_handicap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NinesConfig {
    pub bet_per_point: Money,
    #[serde(default)]
    pub use_handicap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoBangoBongoConfig {
    pub bet_per_point: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfConfig {
    pub bet: Money,
    #[serde(default)]
    pub use_handicap: bool,
    /// Tee order. Empty means participant order.
    #[serde(default)]
    pub rotation: Vec<PlayerId>,
    #[serde(default)]
    pub last_place_tiebreak: LastPlaceTiebreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankerConfig {
    pub bet: Money,
    #[serde(default)]
    pub use_handicap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeConfig {
    pub bet: Money,
    /// Stake grows by one bet per three-putt.
    #[serde(default)]
    pub escalating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RabbitConfig {
    pub bet: Money,
    /// One rabbit per nine instead of one for the round.
    #[serde(default)]
    pub per_nine: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArniesConfig {
    pub bet: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleConfig {
    pub bet: Money,
    /// Per-kind overrides of `bet`.
    #[serde(default)]
    pub values: BTreeMap<TroubleKind, Money>,
}

impl TroubleConfig {
    pub fn value_of(&self, kind: TroubleKind) -> Money {
        self.values.get(&kind).copied().unwrap_or(self.bet)
    }
}

fn default_eagle_dots() -> i64 {
    2
}

fn default_one_dot() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotsConfig {
    pub bet_per_dot: Money,
    #[serde(default = "default_eagle_dots")]
    pub eagle: i64,
    #[serde(default = "default_one_dot")]
    pub birdie: i64,
    #[serde(default = "default_one_dot")]
    pub sandy: i64,
    #[serde(default = "default_one_dot")]
    pub greenie: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestToPinConfig {
    pub bet: Money,
    #[serde(default)]
    pub must_make_par: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcesAndDeucesConfig {
    pub bet: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxManConfig {
    pub bet: Money,
    /// Strokes over par each player is allowed before paying tax.
    /// Defaults to the handicap strokes received on the settled holes.
    #[serde(default)]
    pub tax_lines: BTreeMap<PlayerId, i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StablefordConfig {
    pub bet_per_point: Money,
    #[serde(default)]
    pub use_handicap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaConfig {
    pub bet_per_point: Money,
    #[serde(default)]
    pub quota_overrides: BTreeMap<PlayerId, i32>,
}

/// Tag-matched configuration for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeConfig {
    Skins(SkinsConfig),
    Nassau(NassauConfig),
    HeadToHead(HeadToHeadConfig),
    BestBall(BestBallConfig),
    Vegas(VegasConfig),
    Scotch(ScotchConfig),
    Nines(NinesConfig),
    BingoBangoBongo(BingoBangoBongoConfig),
    Wolf(WolfConfig),
    Banker(BankerConfig),
    Snake(SnakeConfig),
    Rabbit(RabbitConfig),
    Arnies(ArniesConfig),
    Trouble(TroubleConfig),
    Dots(DotsConfig),
    ClosestToPin(ClosestToPinConfig),
    AcesAndDeuces(AcesAndDeucesConfig),
    TaxMan(TaxManConfig),
    Stableford(StablefordConfig),
    Quota(QuotaConfig),
}

impl ModeConfig {
    pub fn tag(&self) -> ModeTag {
        match self {
            ModeConfig::Skins(_) => ModeTag::Skins,
            ModeConfig::Nassau(_) => ModeTag::Nassau,
            ModeConfig::HeadToHead(_) => ModeTag::HeadToHead,
            ModeConfig::BestBall(_) => ModeTag::BestBall,
            ModeConfig::Vegas(_) => ModeTag::Vegas,
            ModeConfig::Scotch(_) => ModeTag::Scotch,
            ModeConfig::Nines(_) => ModeTag::Nines,
            ModeConfig::BingoBangoBongo(_) => ModeTag::BingoBangoBongo,
            ModeConfig::Wolf(_) => ModeTag::Wolf,
            ModeConfig::Banker(_) => ModeTag::Banker,
            ModeConfig::Snake(_) => ModeTag::Snake,
            ModeConfig::Rabbit(_) => ModeTag::Rabbit,
            ModeConfig::Arnies(_) => ModeTag::Arnies,
            ModeConfig::Trouble(_) => ModeTag::Trouble,
            ModeConfig::Dots(_) => ModeTag::Dots,
            ModeConfig::ClosestToPin(_) => ModeTag::ClosestToPin,
            ModeConfig::AcesAndDeuces(_) => ModeTag::AcesAndDeuces,
            ModeConfig::TaxMan(_) => ModeTag::TaxMan,
            ModeConfig::Stableford(_) => ModeTag::Stableford,
            ModeConfig::Quota(_) => ModeTag::Quota,
        }
    }

    /// Two-sided team rosters, for the modes that have them.
    pub fn teams(&self) -> Option<(&[PlayerId], &[PlayerId])> {
        match self {
            ModeConfig::BestBall(c) => Some((&c.team_a, &c.team_b)),
            ModeConfig::Vegas(c) => Some((&c.team_a, &c.team_b)),
            ModeConfig::Scotch(c) => Some((&c.team_a, &c.team_b)),
            _ => None,
        }
    }

    /// Every configured stake, for shape validation.
    fn stakes(&self) -> Vec<Money> {
        match self {
            ModeConfig::Skins(c) => vec![c.bet],
            ModeConfig::Nassau(c) => vec![c.front, c.back, c.overall],
            ModeConfig::HeadToHead(c) => vec![c.bet],
            ModeConfig::BestBall(c) => vec![c.bet],
            ModeConfig::Vegas(c) => vec![c.bet_per_point],
            ModeConfig::Scotch(c) => vec![c.bet_per_point],
            ModeConfig::Nines(c) => vec![c.bet_per_point],
            ModeConfig::BingoBangoBongo(c) => vec![c.bet_per_point],
            ModeConfig::Wolf(c) => vec![c.bet],
            ModeConfig::Banker(c) => vec![c.bet],
            ModeConfig::Snake(c) => vec![c.bet],
            ModeConfig::Rabbit(c) => vec![c.bet],
            ModeConfig::Arnies(c) => vec![c.bet],
            ModeConfig::Trouble(c) => {
                let mut stakes = vec![c.bet];
                stakes.extend(c.values.values().copied());
                stakes
            }
            ModeConfig::Dots(c) => vec![c.bet_per_dot],
            ModeConfig::ClosestToPin(c) => vec![c.bet],
            ModeConfig::AcesAndDeuces(c) => vec![c.bet],
            ModeConfig::TaxMan(c) => vec![c.bet],
            ModeConfig::Stableford(c) => vec![c.bet_per_point],
            ModeConfig::Quota(c) => vec![c.bet_per_point],
        }
    }

    fn press_trigger(&self) -> Option<u32> {
        match self {
            ModeConfig::Nassau(c) if c.auto_press => Some(c.press_trigger),
            ModeConfig::HeadToHead(c) if c.auto_press => Some(c.press_trigger),
            ModeConfig::BestBall(c) if c.auto_press => Some(c.press_trigger),
            _ => None,
        }
    }
}

/// One active mode and, optionally, the subset of players in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMode {
    pub config: ModeConfig,
    /// Players in this mode. All players when absent. Team modes use the
    /// union of their rosters instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<PlayerId>>,
}

impl ActiveMode {
    pub fn new(config: ModeConfig) -> Self {
        ActiveMode {
            config,
            participants: None,
        }
    }

    pub fn with_participants(mut self, participants: Vec<PlayerId>) -> Self {
        self.participants = Some(participants);
        self
    }

    pub fn tag(&self) -> ModeTag {
        self.config.tag()
    }

    /// Players taking part, in `players` order, unknown ids dropped.
    pub fn participants_in(&self, players: &[Player]) -> Vec<PlayerId> {
        let wanted: Option<BTreeSet<&PlayerId>> = match self.config.teams() {
            Some((a, b)) => Some(a.iter().chain(b.iter()).collect()),
            None => self.participants.as_ref().map(|ps| ps.iter().collect()),
        };
        players
            .iter()
            .map(|p| &p.id)
            .filter(|id| wanted.as_ref().map_or(true, |w| w.contains(id)))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("setup has no players")]
    NoPlayers,
    #[error("setup has {count} players, at most {max} allowed")]
    TooManyPlayers { count: usize, max: usize },
    #[error("duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),
    #[error("{mode}: unknown player {player}")]
    UnknownPlayer { mode: ModeTag, player: PlayerId },
    #[error("{mode}: invalid teams: {reason}")]
    InvalidTeams { mode: ModeTag, reason: String },
    #[error("{mode}: invalid participants: {reason}")]
    InvalidParticipants { mode: ModeTag, reason: String },
    #[error("{mode}: bet amounts must not be negative")]
    NegativeBet { mode: ModeTag },
    #[error("{mode}: bet amounts must not exceed {}", MAX_STAKE)]
    StakeTooLarge { mode: ModeTag },
    #[error("{mode}: press trigger must be at least 1")]
    InvalidPressTrigger { mode: ModeTag },
    #[error("{mode}: hammer on hole {hole} exceeds x{}", MAX_HAMMER)]
    HammerTooLarge { mode: ModeTag, hole: usize },
}

fn check_stake(mode: ModeTag, stake: &Money) -> Result<(), SetupError> {
    if stake.is_negative() {
        return Err(SetupError::NegativeBet { mode });
    }
    if *stake > Money::from_int(MAX_STAKE) {
        return Err(SetupError::StakeTooLarge { mode });
    }
    Ok(())
}

/// Players and active modes, assembled once per round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSetup {
    pub players: Vec<Player>,
    #[serde(default)]
    pub modes: Vec<ActiveMode>,
}

impl GameSetup {
    pub fn new(players: Vec<Player>) -> Self {
        GameSetup {
            players,
            modes: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: ActiveMode) -> Self {
        self.modes.push(mode);
        self
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Players taking part in `mode`, in setup order, unknown ids dropped.
    pub fn participants(&self, mode: &ActiveMode) -> Vec<PlayerId> {
        mode.participants_in(&self.players)
    }

    /// Caller-level shape validation.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self, max_players: usize) -> Result<(), SetupError> {
        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if self.players.len() > max_players {
            return Err(SetupError::TooManyPlayers {
                count: self.players.len(),
                max: max_players,
            });
        }

        let mut seen = BTreeSet::new();
        for player in &self.players {
            if !seen.insert(&player.id) {
                return Err(SetupError::DuplicatePlayer(player.id.clone()));
            }
        }

        for mode in &self.modes {
            self.validate_mode(mode, &seen)?;
        }
        Ok(())
    }

    /// Stakes and multipliers carried in aux state: press bets, banker
    /// overrides and hammers.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate_aux(&self, aux: &AuxState) -> Result<(), SetupError> {
        for press in &aux.presses {
            check_stake(press.mode, &press.bet)?;
        }
        for choice in aux.banker.values() {
            if let Some(stake) = &choice.bet_override {
                check_stake(ModeTag::Banker, stake)?;
            }
        }
        if let Some(h) = aux.hammers.iter().find(|h| h.multiplier > MAX_HAMMER) {
            return Err(SetupError::HammerTooLarge {
                mode: h.mode,
                hole: h.hole,
            });
        }
        Ok(())
    }

    fn validate_mode(
        &self,
        mode: &ActiveMode,
        known: &BTreeSet<&PlayerId>,
    ) -> Result<(), SetupError> {
        let tag = mode.tag();

        for stake in mode.config.stakes() {
            check_stake(tag, &stake)?;
        }
        if mode.config.press_trigger() == Some(0) {
            return Err(SetupError::InvalidPressTrigger { mode: tag });
        }

        if let Some(listed) = &mode.participants {
            if let Some(unknown) = listed.iter().find(|p| !known.contains(p)) {
                return Err(SetupError::UnknownPlayer {
                    mode: tag,
                    player: unknown.clone(),
                });
            }
        }

        if let Some((a, b)) = mode.config.teams() {
            validate_teams(tag, a, b, known)?;
            if tag == ModeTag::Vegas && (a.len() != 2 || b.len() != 2) {
                return Err(SetupError::InvalidTeams {
                    mode: tag,
                    reason: "vegas needs two players per team".to_string(),
                });
            }
        }

        let count = self.participants(mode).len();
        match &mode.config {
            ModeConfig::Nines(_) if !(2..=4).contains(&count) => {
                return Err(SetupError::InvalidParticipants {
                    mode: tag,
                    reason: format!("nines needs 2 to 4 players, got {}", count),
                });
            }
            ModeConfig::Wolf(c) => {
                if count < 3 {
                    return Err(SetupError::InvalidParticipants {
                        mode: tag,
                        reason: format!("wolf needs at least 3 players, got {}", count),
                    });
                }
                if let Some(unknown) = c.rotation.iter().find(|p| !known.contains(p)) {
                    return Err(SetupError::UnknownPlayer {
                        mode: tag,
                        player: unknown.clone(),
                    });
                }
            }
            _ if count < 2 => {
                return Err(SetupError::InvalidParticipants {
                    mode: tag,
                    reason: "at least 2 players required".to_string(),
                });
            }
            _ => {}
        }
        Ok(())
    }
}

fn validate_teams(
    tag: ModeTag,
    a: &[PlayerId],
    b: &[PlayerId],
    known: &BTreeSet<&PlayerId>,
) -> Result<(), SetupError> {
    if a.is_empty() || b.is_empty() {
        return Err(SetupError::InvalidTeams {
            mode: tag,
            reason: "both teams need at least one player".to_string(),
        });
    }
    if a.len() != b.len() {
        return Err(SetupError::InvalidTeams {
            mode: tag,
            reason: format!("team sizes differ ({} vs {})", a.len(), b.len()),
        });
    }
    if let Some(unknown) = a.iter().chain(b.iter()).find(|p| !known.contains(p)) {
        return Err(SetupError::UnknownPlayer {
            mode: tag,
            player: unknown.clone(),
        });
    }
    let mut seen = BTreeSet::new();
    for p in a.iter().chain(b.iter()) {
        if !seen.insert(p) {
            return Err(SetupError::InvalidTeams {
                mode: tag,
                reason: format!("{} appears more than once", p),
            });
        }
    }
    Ok(())
}
