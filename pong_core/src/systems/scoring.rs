use crate::{Display, MatchScore, Side};

/// Score counters plus the labels that show them
#[derive(Debug, Clone, Copy)]
pub struct ScoreTracker<T> {
    score: MatchScore,
    labels: [T; 2],
}

impl<T: Copy> ScoreTracker<T> {
    pub fn new(left_label: T, right_label: T) -> Self {
        Self {
            score: MatchScore::new(),
            labels: [left_label, right_label],
        }
    }

    pub fn score(&self) -> MatchScore {
        self.score
    }

    pub fn label(&self, side: Side) -> T {
        self.labels[side.index()]
    }

    /// Award a point and push the new count to that side's label
    pub fn point_scored<D>(&mut self, display: &mut D, side: Side) -> MatchScore
    where
        D: Display<Text = T>,
    {
        let score = self.score.point_scored(side);
        display.set_text(self.label(side), &score.get(side).to_string());
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeadlessArcade, TextStyle};
    use glam::Vec2;

    fn setup() -> (HeadlessArcade, ScoreTracker<hecs::Entity>) {
        let mut arcade = HeadlessArcade::new();
        let style = TextStyle {
            font: "65px Arial".to_string(),
            fill: "#878787".to_string(),
            origin: Vec2::ZERO,
        };
        let left = arcade.add_text(Vec2::new(492.0, 400.0), "0", &style);
        let right = arcade.add_text(Vec2::new(532.0, 400.0), "0", &style);
        (arcade, ScoreTracker::new(left, right))
    }

    #[test]
    fn test_point_scored_updates_label() {
        let (mut arcade, mut tracker) = setup();

        let score = tracker.point_scored(&mut arcade, Side::Right);

        assert_eq!(score, MatchScore { left: 0, right: 1 });
        assert_eq!(arcade.text(tracker.label(Side::Right)).as_deref(), Some("1"));
        assert_eq!(
            arcade.text(tracker.label(Side::Left)).as_deref(),
            Some("0"),
            "Other label must not change"
        );
    }

    #[test]
    fn test_points_accumulate_per_side() {
        let (mut arcade, mut tracker) = setup();
        for _ in 0..4 {
            tracker.point_scored(&mut arcade, Side::Left);
        }
        tracker.point_scored(&mut arcade, Side::Right);

        assert_eq!(tracker.score(), MatchScore { left: 4, right: 1 });
        assert_eq!(arcade.text(tracker.label(Side::Left)).as_deref(), Some("4"));
        assert_eq!(arcade.text(tracker.label(Side::Right)).as_deref(), Some("1"));
    }
}
