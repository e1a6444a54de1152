use crate::core::keywords::normalize;
use crate::models::{KeywordKind, KeywordSet, Venue};

/// Points awarded per signal for one keyword kind.
///
/// Tag matches combine a flat award with a multiple of the tag's own
/// declared weight; the other signals are fixed point values.
#[derive(Debug, Clone, Copy)]
pub struct SignalWeights {
    pub tag_flat: f64,
    pub tag_weight_factor: f64,
    pub name: f64,
    pub description: f64,
    pub activity: f64,
}

/// Weight constants for the scoring formula.
///
/// Two presets exist: `keyword_prioritized` (the default) makes primary
/// action keywords dominate, so "kart" outranks "ce soir" by two orders of
/// magnitude; `uniform` scores every keyword kind with the same flat
/// weights. Both share one code path in [`score_venue`].
#[derive(Debug, Clone, Copy)]
pub struct ScoringProfile {
    pub primary: SignalWeights,
    pub generic: SignalWeights,
    pub context: SignalWeights,
    pub open_bonus: f64,
    pub proximity_base: f64,
    pub proximity_decay_per_km: f64,
}

impl ScoringProfile {
    pub fn keyword_prioritized() -> Self {
        Self {
            primary: SignalWeights {
                tag_flat: 150.0,
                tag_weight_factor: 0.0,
                name: 60.0,
                description: 30.0,
                activity: 100.0,
            },
            generic: SignalWeights {
                tag_flat: 0.0,
                tag_weight_factor: 10.0,
                name: 20.0,
                description: 10.0,
                activity: 25.0,
            },
            context: SignalWeights {
                tag_flat: 0.0,
                tag_weight_factor: 1.0,
                name: 5.0,
                description: 2.0,
                activity: 0.0,
            },
            open_bonus: 15.0,
            proximity_base: 50.0,
            proximity_decay_per_km: 2.0,
        }
    }

    pub fn uniform() -> Self {
        let flat = SignalWeights {
            tag_flat: 0.0,
            tag_weight_factor: 10.0,
            name: 20.0,
            description: 10.0,
            activity: 25.0,
        };
        Self {
            primary: flat,
            generic: flat,
            context: flat,
            open_bonus: 15.0,
            proximity_base: 50.0,
            proximity_decay_per_km: 2.0,
        }
    }

    /// Look up a profile by its config name. Unknown names get the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "uniform" => Self::uniform(),
            _ => Self::keyword_prioritized(),
        }
    }

    fn for_kind(&self, kind: KeywordKind) -> &SignalWeights {
        match kind {
            KeywordKind::Primary => &self.primary,
            KeywordKind::Generic => &self.generic,
            KeywordKind::Context => &self.context,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::keyword_prioritized()
    }
}

/// Output of scoring a single venue.
#[derive(Debug, Clone)]
pub struct VenueScore {
    pub thematic_score: f64,
    pub matched_tags: Vec<String>,
}

/// Substring containment in both directions, so "biere" matches "bieres"
/// and "karting" matches "kart". Both sides must already be normalized.
#[inline]
fn text_matches(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Compute a venue's thematic score for the extracted keywords.
///
/// The thematic score is the relevance gate: venues scoring 0 are excluded
/// from results entirely. It deliberately excludes the proximity bonus,
/// which only shapes ranking among already-relevant venues. The open-now
/// bonus is only granted on top of an existing score, so being open never
/// makes an off-theme venue relevant.
pub fn score_venue(
    venue: &Venue,
    keywords: &KeywordSet,
    is_open: bool,
    profile: &ScoringProfile,
) -> VenueScore {
    let mut thematic = 0.0;
    let mut matched_tags: Vec<String> = Vec::new();

    let name = normalize(&venue.name);
    let description = venue
        .description
        .as_deref()
        .map(normalize)
        .unwrap_or_default();
    let activities: Vec<String> = venue.activities.iter().map(|a| normalize(a)).collect();
    let tags: Vec<String> = venue.tags.iter().map(|t| normalize(&t.label)).collect();

    for keyword in &keywords.all {
        let weights = profile.for_kind(keywords.kind_of(keyword));

        for (normalized, tag) in tags.iter().zip(&venue.tags) {
            if !normalized.is_empty() && text_matches(normalized, keyword) {
                thematic += weights.tag_flat + f64::from(tag.weight) * weights.tag_weight_factor;
                // A tag counts once in the match list even when several
                // keywords hit it.
                if !matched_tags.contains(&tag.label) {
                    matched_tags.push(tag.label.clone());
                }
            }
        }

        if !name.trim().is_empty() && text_matches(name.trim(), keyword) {
            thematic += weights.name;
        }
        if !description.trim().is_empty() && text_matches(description.trim(), keyword) {
            thematic += weights.description;
        }
        for activity in &activities {
            if !activity.trim().is_empty() && text_matches(activity.trim(), keyword) {
                thematic += weights.activity;
            }
        }
    }

    if is_open && thematic > 0.0 {
        thematic += profile.open_bonus;
    }

    VenueScore {
        thematic_score: thematic,
        matched_tags,
    }
}

/// Bonus for geographic closeness, linear decay down to zero.
///
/// Applied by the engine only when the venue is already relevant and both
/// coordinate pairs exist; it feeds the final score, never the thematic one.
#[inline]
pub fn proximity_bonus(distance_km: f64, profile: &ScoringProfile) -> f64 {
    (profile.proximity_base - profile.proximity_decay_per_km * distance_km).max(0.0)
}
