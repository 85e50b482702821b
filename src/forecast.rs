use std::collections::BTreeMap;
use std::fmt;

use crate::adjustments::AdjustmentMap;
use crate::error::ModelError;

/// One of the three possible match results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Classify a candidate score pair.
    pub fn from_scores(home: i64, away: i64) -> Self {
        if home > away {
            Outcome::HomeWin
        } else if away > home {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::HomeWin => "Home Win",
            Outcome::AwayWin => "Away Win",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Win/draw/loss percentages, normalized to sum to 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeDistribution {
    pub home_win: f64,
    pub away_win: f64,
    pub draw: f64,
}

impl OutcomeDistribution {
    /// Percentage for a single outcome.
    pub fn pct(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::HomeWin => self.home_win,
            Outcome::AwayWin => self.away_win,
            Outcome::Draw => self.draw,
        }
    }
}

/// Full forecast for a matchup.
#[derive(Clone, Debug)]
pub struct MatchForecast {
    /// Outcome of the single highest-weighted score pair
    pub best_outcome: Outcome,

    /// That outcome's normalized percentage
    pub best_outcome_pct: f64,

    /// Normalized win/draw/loss split
    pub outcomes: OutcomeDistribution,

    /// Normalized distribution over combined final scores
    pub total_points: BTreeMap<i64, f64>,
}

/// Combine two teams' line probabilities into a joint outcome forecast.
///
/// Every home line is crossed with every away line; each pair is weighted by
/// the product of the two exceedance probabilities and its head-to-head
/// factor. The weights are folded into win/draw/loss buckets and into
/// total-points buckets, and the two partitions are normalized to
/// percentages independently.
///
/// The headline outcome is that of the single heaviest pair, not of the
/// heaviest bucket: a lone dominant draw pair can headline even while the
/// away-win bucket holds more total mass. Ties keep the first pair seen in
/// ascending `(home, away)` order, so reruns are bit-identical.
///
/// # Arguments
/// * `home` - Home team's line probabilities
/// * `away` - Away team's line probabilities
/// * `adjustments` - Sparse head-to-head factors, neutral for absent pairs
///
/// # Returns
/// `MatchForecast`, or a degenerate-distribution error when no pair carries
/// any weight.
pub fn forecast(
    home: &BTreeMap<i64, f64>,
    away: &BTreeMap<i64, f64>,
    adjustments: &AdjustmentMap,
) -> Result<MatchForecast, ModelError> {
    // Materialize the full contribution list first; the folds below then
    // never depend on mutation order.
    let mut contributions = Vec::with_capacity(home.len() * away.len());
    for (&home_score, &home_prob) in home {
        for (&away_score, &away_prob) in away {
            let weight = home_prob * away_prob * adjustments.factor(home_score, away_score);
            contributions.push((home_score, away_score, weight));
        }
    }

    let mut best: Option<(Outcome, f64)> = None;
    for &(home_score, away_score, weight) in &contributions {
        if best.map_or(true, |(_, best_weight)| weight > best_weight) {
            best = Some((Outcome::from_scores(home_score, away_score), weight));
        }
    }
    let Some((best_outcome, _)) = best else {
        return Err(ModelError::ZeroMass);
    };

    let mut home_mass = 0.0;
    let mut away_mass = 0.0;
    let mut draw_mass = 0.0;
    let mut points_mass: BTreeMap<i64, f64> = BTreeMap::new();
    for &(home_score, away_score, weight) in &contributions {
        match Outcome::from_scores(home_score, away_score) {
            Outcome::HomeWin => home_mass += weight,
            Outcome::AwayWin => away_mass += weight,
            Outcome::Draw => draw_mass += weight,
        }
        *points_mass.entry(home_score + away_score).or_insert(0.0) += weight;
    }

    let outcome_total = home_mass + away_mass + draw_mass;
    if outcome_total <= 0.0 {
        return Err(ModelError::ZeroMass);
    }
    let outcomes = OutcomeDistribution {
        home_win: home_mass / outcome_total * 100.0,
        away_win: away_mass / outcome_total * 100.0,
        draw: draw_mass / outcome_total * 100.0,
    };

    let points_total: f64 = points_mass.values().sum();
    if points_total <= 0.0 {
        return Err(ModelError::ZeroMass);
    }
    let total_points = points_mass
        .into_iter()
        .map(|(points, mass)| (points, mass / points_total * 100.0))
        .collect();

    Ok(MatchForecast {
        best_outcome,
        best_outcome_pct: outcomes.pct(best_outcome),
        outcomes,
        total_points,
    })
}
