//! Matchcast - two-team match outcome forecasting from recent scoring form.
//!
//! Models each team's scoring as normally distributed around its recent
//! average, converts the team's historical score lines into exceedance
//! probabilities, and crosses the two teams' lines into win/draw/loss and
//! total-points distributions, with optional head-to-head adjustment
//! factors applied per score pair.

pub mod adjustments;
pub mod console;
pub mod error;
pub mod export;
pub mod forecast;
pub mod line_prob;
pub mod team;

pub use adjustments::AdjustmentMap;
pub use console::{collect_adjustments, parse_scores, prompt_line, prompt_scores};
pub use error::ModelError;
pub use export::{run_dir, write_report};
pub use forecast::{forecast, MatchForecast, Outcome, OutcomeDistribution};
pub use line_prob::line_probabilities;
pub use team::{summarize, TeamStats};
