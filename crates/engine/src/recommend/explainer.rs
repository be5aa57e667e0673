//! Generate human-readable text for recommendations.

use super::{FitSignal, RankedRecommendation};

/// Render the score and fit signals as one line.
pub fn render_fit_summary(score: u8, signals: &[FitSignal]) -> String {
    let mut parts = vec![format!("{}% skill match", score)];

    for signal in signals {
        let part = match signal {
            FitSignal::LocationFit { location } => format!("Location fit: {}", location),
            FitSignal::EducationMatch { .. } => "Education match".to_string(),
            FitSignal::InterestMatch { interests } => {
                if interests.len() == 1 {
                    format!("Matches your interest: {}", interests[0])
                } else {
                    format!("Matches your interests: {}", interests.join(", "))
                }
            }
        };
        parts.push(part);
    }

    parts.join("; ")
}

/// Render the top `n` recommendations by rank for a notification.
///
/// One line per recommendation: `"{title} at {organization} - {score}% match"`.
pub fn render_digest(recommendations: &[RankedRecommendation], n: usize) -> String {
    let mut by_rank: Vec<&RankedRecommendation> = recommendations.iter().collect();
    by_rank.sort_by_key(|rec| rec.rank);

    by_rank
        .into_iter()
        .take(n)
        .map(|rec| {
            format!(
                "{} at {} - {}% match",
                rec.opportunity.title, rec.opportunity.organization, rec.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
