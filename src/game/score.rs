use tracing::info;

use crate::error::ScoreError;
use crate::result::{RoundResult, RoundScore, ScoreKind};
use crate::seat::Team;

use super::{Game, GameState};

/// Tricks the calling team needs to make its bid.
const TRICKS_TO_MAKE: u8 = 3;

/// Scores a round from the calling team's trick count.
///
/// Three or four tricks earn the calling team 1 point and all five (a march)
/// earn 2. Fewer than three is a euchre: the defending team earns 2.
#[must_use]
pub const fn score_round(calling_team: Team, calling_team_tricks: u8) -> RoundScore {
    if calling_team_tricks >= 5 {
        RoundScore {
            team: calling_team,
            points: 2,
            kind: ScoreKind::March,
        }
    } else if calling_team_tricks >= TRICKS_TO_MAKE {
        RoundScore {
            team: calling_team,
            points: 1,
            kind: ScoreKind::Made,
        }
    } else {
        RoundScore {
            team: calling_team.opponent(),
            points: 2,
            kind: ScoreKind::Euchred,
        }
    }
}

impl Game {
    /// Scores the finished round and passes the deal to the left.
    ///
    /// Hands and tricks stay readable until the next round is dealt.
    ///
    /// # Errors
    ///
    /// Returns an error unless all five tricks have been played.
    pub fn finish_round(&mut self) -> Result<RoundResult, ScoreError> {
        if self.state != GameState::RoundOver {
            return Err(ScoreError::InvalidState);
        }
        let trump = self.trump.ok_or(ScoreError::InvalidState)?;
        let caller = self.caller.ok_or(ScoreError::InvalidState)?;

        let tricks = [self.team_tricks(Team::One), self.team_tricks(Team::Two)];
        let calling_team = caller.team();
        let score = score_round(calling_team, tricks[calling_team.index()]);

        let total = &mut self.points[score.team.index()];
        *total = total.saturating_add(score.points);

        let winner = self.winner();
        info!(
            team = score.team.index() + 1,
            points = score.points,
            kind = ?score.kind,
            team_one = self.points[0],
            team_two = self.points[1],
            "round scored"
        );

        self.dealer = self.dealer.left();
        self.state = if winner.is_some() {
            GameState::GameOver
        } else {
            GameState::WaitingForDeal
        };

        Ok(RoundResult {
            trump,
            caller,
            tricks,
            score,
            points: self.points,
            winner,
        })
    }
}
