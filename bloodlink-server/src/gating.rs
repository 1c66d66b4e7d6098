//! Role/completion gating
//!
//! The redirect rules between the profile-creation page and the two role
//! areas, consolidated into one pure function instead of being spread across
//! page components. Evaluated on every navigation; no terminal state.

use shared::models::{Member, MemberRole};

/// Profile-creation page
pub const PROFILE_PAGE: &str = "/";
/// Donor area
pub const DONOR_AREA: &str = "/donor";
/// Recipient area
pub const RECIPIENT_AREA: &str = "/recipient";

/// Gating state derived from the caller's profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileState {
    NoProfile,
    Incomplete,
    Donor,
    Recipient,
}

pub fn classify(profile: Option<&Member>) -> ProfileState {
    match profile {
        None => ProfileState::NoProfile,
        Some(m) if !m.profile_completed => ProfileState::Incomplete,
        Some(m) => match m.role {
            MemberRole::Donor => ProfileState::Donor,
            MemberRole::Recipient => ProfileState::Recipient,
        },
    }
}

fn role_area(state: ProfileState) -> &'static str {
    match state {
        ProfileState::Donor => DONOR_AREA,
        _ => RECIPIENT_AREA,
    }
}

/// Where the caller should be sent from `current_path`, or `None` to stay.
///
/// - No profile on a role area → the profile-creation page.
/// - A completed profile on the creation page → the role area (the form is
///   never re-shown).
/// - The wrong role on a role area → the correct area.
pub fn route_for(profile: Option<&Member>, current_path: &str) -> Option<&'static str> {
    let state = classify(profile);
    match current_path {
        PROFILE_PAGE => match state {
            ProfileState::Donor | ProfileState::Recipient => Some(role_area(state)),
            // No profile, or an incomplete one: stay on the form
            _ => None,
        },
        DONOR_AREA => match state {
            ProfileState::NoProfile => Some(PROFILE_PAGE),
            ProfileState::Recipient => Some(RECIPIENT_AREA),
            _ => None,
        },
        RECIPIENT_AREA => match state {
            ProfileState::NoProfile => Some(PROFILE_PAGE),
            ProfileState::Donor => Some(DONOR_AREA),
            _ => None,
        },
        // Unknown paths have no gating rule
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BloodType, Gender};

    fn member(role: MemberRole, completed: bool) -> Member {
        Member {
            id: 1,
            user_id: 1,
            role,
            blood_type: BloodType::OPositive,
            age: 25,
            gender: Gender::Other,
            location: "Multan".to_string(),
            location_permission_granted: true,
            latitude: None,
            longitude: None,
            phone: "03001234567".to_string(),
            bio: String::new(),
            profile_completed: completed,
            created_at: 0,
        }
    }

    #[test]
    fn no_profile_is_sent_to_the_form_from_role_areas() {
        assert_eq!(route_for(None, DONOR_AREA), Some(PROFILE_PAGE));
        assert_eq!(route_for(None, RECIPIENT_AREA), Some(PROFILE_PAGE));
        assert_eq!(route_for(None, PROFILE_PAGE), None);
    }

    #[test]
    fn completed_profile_never_sees_the_form_again() {
        let donor = member(MemberRole::Donor, true);
        assert_eq!(route_for(Some(&donor), PROFILE_PAGE), Some(DONOR_AREA));
        let recipient = member(MemberRole::Recipient, true);
        assert_eq!(
            route_for(Some(&recipient), PROFILE_PAGE),
            Some(RECIPIENT_AREA)
        );
    }

    #[test]
    fn wrong_role_is_redirected_to_its_own_area() {
        let donor = member(MemberRole::Donor, true);
        assert_eq!(route_for(Some(&donor), RECIPIENT_AREA), Some(DONOR_AREA));
        assert_eq!(route_for(Some(&donor), DONOR_AREA), None);

        let recipient = member(MemberRole::Recipient, true);
        assert_eq!(route_for(Some(&recipient), DONOR_AREA), Some(RECIPIENT_AREA));
        assert_eq!(route_for(Some(&recipient), RECIPIENT_AREA), None);
    }

    #[test]
    fn incomplete_profile_stays_on_the_form() {
        // Unreachable under current creation semantics (creation always
        // completes the profile), kept for the state machine's sake
        let incomplete = member(MemberRole::Donor, false);
        assert_eq!(route_for(Some(&incomplete), PROFILE_PAGE), None);
        assert_eq!(route_for(Some(&incomplete), DONOR_AREA), None);
    }

    #[test]
    fn unknown_paths_are_left_alone() {
        let donor = member(MemberRole::Donor, true);
        assert_eq!(route_for(Some(&donor), "/about"), None);
        assert_eq!(route_for(None, "/about"), None);
    }
}
