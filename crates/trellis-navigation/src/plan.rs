//! Navigation planning
//!
//! Picks the cheapest browser primitive that moves the current document to the
//! requested URL. Planning is pure; executing the plan is up to the caller.

use crate::location::resolve_url;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationPlan {
    /// Assign the fragment (including `#`, or empty) on the current location
    SetHash(String),
    /// Load the absolute URL as a new document
    FullReload(String),
    /// Push a history entry for the absolute URL without reloading
    PushState(String),
}

pub fn plan_navigation(current_href: &str, target: &str) -> Result<NavigationPlan> {
    let current = resolve_url(current_href, current_href)?;
    let destination = resolve_url(current_href, target)?;

    let plan = if target.starts_with('#') {
        NavigationPlan::SetHash(destination.hash)
    } else if current.host != destination.host && !destination.host.is_empty() {
        NavigationPlan::FullReload(destination.href)
    } else if destination.pathname == current.pathname && destination.search == current.search {
        NavigationPlan::SetHash(destination.hash)
    } else {
        NavigationPlan::PushState(destination.href)
    };

    tracing::debug!(from = %current_href, to = %target, plan = ?plan, "Planned navigation");

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = "https://app.example/orders?page=2";

    #[test]
    fn test_fragment_only() {
        assert_eq!(
            plan_navigation(CURRENT, "#section").unwrap(),
            NavigationPlan::SetHash("#section".to_string())
        );
    }

    #[test]
    fn test_cross_origin() {
        assert_eq!(
            plan_navigation("https://app.example/", "https://other-host.example/path").unwrap(),
            NavigationPlan::FullReload("https://other-host.example/path".to_string())
        );
    }

    #[test]
    fn test_same_page_different_fragment() {
        assert_eq!(
            plan_navigation(CURRENT, "/orders?page=2#summary").unwrap(),
            NavigationPlan::SetHash("#summary".to_string())
        );
        assert_eq!(
            plan_navigation("https://app.example/orders#summary", "/orders").unwrap(),
            NavigationPlan::SetHash(String::new())
        );
    }

    #[test]
    fn test_same_origin_push() {
        assert_eq!(
            plan_navigation(CURRENT, "/orders?page=3").unwrap(),
            NavigationPlan::PushState("https://app.example/orders?page=3".to_string())
        );
        assert_eq!(
            plan_navigation(CURRENT, "https://app.example/settings").unwrap(),
            NavigationPlan::PushState("https://app.example/settings".to_string())
        );
    }

    #[test]
    fn test_host_less_destination_stays_in_page() {
        // No host means no cross-origin reload.
        assert!(matches!(
            plan_navigation(CURRENT, "mailto:someone@app.example").unwrap(),
            NavigationPlan::PushState(_)
        ));
    }

    #[test]
    fn test_port_is_part_of_host() {
        assert!(matches!(
            plan_navigation("http://localhost:3000/", "http://localhost:4000/").unwrap(),
            NavigationPlan::FullReload(_)
        ));
    }
}
