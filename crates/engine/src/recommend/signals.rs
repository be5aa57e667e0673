//! Fit signals: location, education and interest overlap.

use super::FitSignal;
use crate::opportunity::Opportunity;
use crate::profile::Profile;

const REMOTE: &str = "Remote";

/// Detect qualitative fit between a profile and an opportunity.
///
/// Signals are returned in a fixed order: location, education, interests.
pub fn detect_fit_signals(profile: &Profile, opportunity: &Opportunity) -> Vec<FitSignal> {
    let mut signals = Vec::new();

    if let Some(location) = location_fit(profile, opportunity) {
        signals.push(FitSignal::LocationFit { location });
    }

    let meets_education = opportunity
        .min_education
        .map_or(true, |min| profile.education() >= min);
    if meets_education {
        signals.push(FitSignal::EducationMatch {
            education: profile.education(),
        });
    }

    let interests = interest_matches(profile, opportunity);
    if !interests.is_empty() {
        signals.push(FitSignal::InterestMatch { interests });
    }

    signals
}

fn location_fit(profile: &Profile, opportunity: &Opportunity) -> Option<String> {
    let wanted = profile.location().to_lowercase();
    if !wanted.is_empty() && opportunity.location.to_lowercase().contains(&wanted) {
        return Some(profile.location().to_string());
    }
    opportunity.is_remote().then(|| REMOTE.to_string())
}

fn interest_matches(profile: &Profile, opportunity: &Opportunity) -> Vec<String> {
    let text = words(&format!("{} {}", opportunity.title, opportunity.description));
    if text.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<String> = profile
        .interests()
        .iter()
        .chain(profile.preferred_domains().iter())
        .filter(|interest| {
            let phrase = words(interest);
            !phrase.is_empty() && text.windows(phrase.len()).any(|w| w == phrase.as_slice())
        })
        .cloned()
        .collect();
    matched.sort();
    matched.dedup();
    matched
}

/// Lower-cased alphanumeric words.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
