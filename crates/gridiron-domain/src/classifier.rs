//! Tier classification rules
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! | # | Condition | Tier |
//! |---|-----------|------|
//! | 1 | membership is FCS | FCS |
//! | 2 | team has an override | forced tier |
//! | 3 | conference is in the P5 set | P5 |
//! | 4 | conference is in the G5 set | G5 |
//! | 5 | membership is FBS | G5 |
//! | 6 | anything else | FCS |
//!
//! Membership beats everything, so an FCS program in a power conference's
//! affiliate list still classifies as FCS. Overrides beat the conference
//! lookup. An FBS team with no recognized conference lands in G5, never FCS.

use crate::{ConferenceAlignment, Membership, TeamSeason, Tier};

/// Which rule produced a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierRule {
    /// Rule 1: division membership is FCS
    DivisionFcs,

    /// Rule 2: team identity has a forced tier
    IdentityOverride,

    /// Rule 3: conference is a power conference
    PowerConference,

    /// Rule 4: conference is a Group of Five conference
    GroupConference,

    /// Rule 5: FBS team in an unrecognized or no conference
    FbsFallback,

    /// Rule 6: nothing known about the team
    UnknownFallback,
}

impl TierRule {
    /// Short description of the rule
    pub fn describe(&self) -> &'static str {
        match self {
            TierRule::DivisionFcs => "FCS membership",
            TierRule::IdentityOverride => "team override",
            TierRule::PowerConference => "P5 conference",
            TierRule::GroupConference => "G5 conference",
            TierRule::FbsFallback => "FBS without recognized conference",
            TierRule::UnknownFallback => "no membership or recognized conference",
        }
    }
}

/// A tier together with the rule that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierDecision {
    /// The resulting tier
    pub tier: Tier,

    /// The rule that fired
    pub rule: TierRule,
}

impl TierDecision {
    fn new(tier: Tier, rule: TierRule) -> Self {
        Self { tier, rule }
    }
}

/// Classify a team into a tier for one season
///
/// # Examples
///
/// ```
/// use gridiron_domain::{classify_team_tier, ConferenceAlignment, Membership, Tier};
///
/// let alignment = ConferenceAlignment::standard();
/// let tier = classify_team_tier("alabama", Some(Membership::fbs()), Some("SEC"), &alignment);
/// assert_eq!(tier, Tier::P5);
/// ```
pub fn classify_team_tier(
    team_id: &str,
    membership: Option<Membership>,
    conference: Option<&str>,
    alignment: &ConferenceAlignment,
) -> Tier {
    explain_team_tier(team_id, membership, conference, alignment).tier
}

/// Classify a team and report which rule fired
pub fn explain_team_tier(
    team_id: &str,
    membership: Option<Membership>,
    conference: Option<&str>,
    alignment: &ConferenceAlignment,
) -> TierDecision {
    if membership.is_some_and(|m| m.is_fcs()) {
        return TierDecision::new(Tier::Fcs, TierRule::DivisionFcs);
    }

    if let Some(forced) = alignment.override_for(team_id) {
        return TierDecision::new(forced, TierRule::IdentityOverride);
    }

    if let Some(conference) = conference {
        if alignment.is_p5_conference(conference) {
            return TierDecision::new(Tier::P5, TierRule::PowerConference);
        }
        if alignment.is_g5_conference(conference) {
            return TierDecision::new(Tier::G5, TierRule::GroupConference);
        }
    }

    if membership.is_some_and(|m| m.is_fbs()) {
        return TierDecision::new(Tier::G5, TierRule::FbsFallback);
    }

    TierDecision::new(Tier::Fcs, TierRule::UnknownFallback)
}

/// Classify a season snapshot
pub fn classify_snapshot(snapshot: &TeamSeason, alignment: &ConferenceAlignment) -> TierDecision {
    explain_team_tier(
        snapshot.team_id.as_str(),
        snapshot.membership,
        snapshot.conference.as_deref(),
        alignment,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::team::DivisionLevel;
    use proptest::prelude::*;

    fn membership_strategy() -> impl Strategy<Value = Option<Membership>> {
        prop_oneof![
            Just(None),
            Just(Some(Membership::from(DivisionLevel::Fbs))),
            Just(Some(Membership::from(DivisionLevel::Fcs))),
        ]
    }

    fn conference_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("SEC".to_string())),
            Just(Some("Sun Belt".to_string())),
            "[A-Za-z -]{0,16}".prop_map(Some),
        ]
    }

    proptest! {
        /// Property: identical inputs give identical decisions
        #[test]
        fn test_classification_is_deterministic(
            team in "[a-z-]{1,12}",
            membership in membership_strategy(),
            conference in conference_strategy(),
        ) {
            let alignment = ConferenceAlignment::standard();
            let first = explain_team_tier(&team, membership, conference.as_deref(), &alignment);
            let second = explain_team_tier(&team, membership, conference.as_deref(), &alignment);
            prop_assert_eq!(first, second);
        }

        /// Property: FCS membership always yields FCS
        #[test]
        fn test_fcs_membership_always_fcs(
            team in "[a-z-]{1,12}",
            conference in conference_strategy(),
        ) {
            let alignment = ConferenceAlignment::standard().with_override(team.clone(), Tier::P5);
            let membership = Some(Membership::fcs());
            let tier = classify_team_tier(&team, membership, conference.as_deref(), &alignment);
            prop_assert_eq!(tier, Tier::Fcs);
        }

        /// Property: FBS membership never yields FCS without an override forcing it
        #[test]
        fn test_fbs_membership_never_fcs(
            team in "[a-z-]{1,12}",
            conference in conference_strategy(),
        ) {
            let alignment = ConferenceAlignment::standard();
            let membership = Some(Membership::fbs());
            let tier = classify_team_tier(&team, membership, conference.as_deref(), &alignment);
            prop_assert_ne!(tier, Tier::Fcs);
        }
    }
}
