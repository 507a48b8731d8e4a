use crate::error::{Result, require_text};
use crate::model::{Grade, Score};
use std::collections::BTreeMap;

/// Scores recorded per student identifier. Identifiers are not checked
/// against any student repository.
#[derive(Clone, Debug, Default)]
pub struct ScoreBook {
    scores: BTreeMap<String, Vec<Score>>,
}

impl ScoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores for the same subject accumulate, they never replace each other.
    pub fn add_score(&mut self, student_id: &str, score: Score) -> Result<()> {
        require_text("student_id", student_id)?;
        self.scores
            .entry(student_id.to_owned())
            .or_default()
            .push(score);
        Ok(())
    }

    pub fn student_scores(&self, student_id: &str) -> Result<Vec<Score>> {
        require_text("student_id", student_id)?;
        Ok(self.scores.get(student_id).cloned().unwrap_or_default())
    }

    /// Mean of the student's points, or 0 if the student has no score.
    pub fn average(&self, student_id: &str) -> Result<f64> {
        require_text("student_id", student_id)?;
        Ok(self.scores.get(student_id).map_or(0.0, |s| mean(s)))
    }

    pub fn grade(&self, points: f64) -> Grade {
        Grade::from_points(points)
    }

    /// Best averages first. Equal averages are ordered by student identifier.
    pub fn top_students(&self, count: usize) -> Vec<(String, f64)> {
        let mut averages = self
            .scores
            .iter()
            .map(|(id, scores)| (id.clone(), mean(scores)))
            .collect::<Vec<_>>();
        averages.sort_by(|(ia, a), (ib, b)| b.total_cmp(a).then_with(|| ia.cmp(ib)));
        averages.truncate(count);
        averages
    }

    pub fn all_scores(&self) -> BTreeMap<String, Vec<Score>> {
        self.scores.clone()
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(scores: &[Score]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(Score::points).sum::<f64>() / scores.len() as f64
    }
}
