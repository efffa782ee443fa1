//! Common types used across the front-end.
//!
//! # Categories
//!
//! - **Navigation Types** - menu entries and their route paths
//! - **Form Types** - display-only lead form fields
//! - **Breadcrumb Types** - the trail under the hero title
//! - **Error Types** - the few things that can go wrong in the browser

use thiserror::Error;

// =============================================================================
// Navigation Types
// =============================================================================

/// Labels shown in both the desktop list and the mobile panel, in order.
pub const NAV_LABELS: [&str; 4] = ["Home", "About", "Services", "Contact Us"];

/// A single navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown to the visitor
    pub label: &'static str,
    /// Route the link points to
    pub path: String,
}

impl NavItem {
    /// Build an item whose path is derived from its label.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            path: nav_path(label),
        }
    }
}

/// Route path for a navigation label.
///
/// `Home` is the site root; any other label becomes `/` followed by the
/// label lower-cased with every whitespace character removed.
pub fn nav_path(label: &str) -> String {
    if label == "Home" {
        return "/".to_string();
    }

    let slug: String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("/{}", slug)
}

/// The fixed navigation menu.
pub fn nav_items() -> Vec<NavItem> {
    NAV_LABELS.into_iter().map(NavItem::new).collect()
}

// =============================================================================
// Form Types
// =============================================================================

/// HTML input type of a lead form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Text,
    Email,
}

impl InputKind {
    /// Value for the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Number => "number",
            InputKind::Text => "text",
            InputKind::Email => "email",
        }
    }
}

/// A display-only field of the lead form.
///
/// Fields carry no value and no validation. The `*` in a label is a visual
/// hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

/// The four fields of the "Request Web Development" form, in display order.
pub fn lead_form_fields() -> [FormField; 4] {
    [
        FormField {
            label: "Amount (₹) *",
            kind: InputKind::Number,
            placeholder: "Enter amount",
        },
        FormField {
            label: "Full Name *",
            kind: InputKind::Text,
            placeholder: "Enter your full name",
        },
        FormField {
            label: "Email Address *",
            kind: InputKind::Email,
            placeholder: "Enter your email",
        },
        FormField {
            label: "Phone Number",
            kind: InputKind::Text,
            placeholder: "Enter your phone number",
        },
    ]
}

// =============================================================================
// Breadcrumb Types
// =============================================================================

/// Trail rendered under the hero title: `Home › {current}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub home_label: &'static str,
    pub home_path: &'static str,
    pub separator: &'static str,
    /// Current page, shown verbatim
    pub current: String,
}

/// Breadcrumb to render, or `None` when the page hides it.
pub fn breadcrumb_trail(show: bool, current: &str) -> Option<Breadcrumb> {
    show.then(|| Breadcrumb {
        home_label: "Home",
        home_path: "/",
        separator: "›",
        current: current.to_string(),
    })
}

// =============================================================================
// Error Types
// =============================================================================

/// Front-end errors.
///
/// Only browser plumbing can fail; rendering itself never does.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SiteError {
    /// No `window` object (not running in a browser).
    #[error("No window available")]
    NoWindow,

    /// The DOM rejected an event listener registration or removal.
    #[error("Event listener error: {0}")]
    Listener(String),
}

/// Result type alias for front-end operations.
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths() {
        assert_eq!(nav_path("Home"), "/");
        assert_eq!(nav_path("About"), "/about");
        assert_eq!(nav_path("Services"), "/services");
        assert_eq!(nav_path("Contact Us"), "/contactus");
    }

    #[test]
    fn test_nav_path_strips_all_whitespace() {
        assert_eq!(nav_path("Our  Work\tNow"), "/ourworknow");
    }

    #[test]
    fn test_nav_items_order() {
        let items = nav_items();
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Services", "Contact Us"]);
        assert_eq!(items[3].path, "/contactus");
    }

    #[test]
    fn test_lead_form_fields() {
        let fields = lead_form_fields();
        assert_eq!(fields[0].kind.as_str(), "number");
        assert_eq!(fields[1].placeholder, "Enter your full name");
        assert_eq!(fields[2].kind, InputKind::Email);
        assert_eq!(fields[3].label, "Phone Number");
        assert_eq!(fields[3].kind.as_str(), "text");
    }

    #[test]
    fn test_breadcrumb_hidden() {
        assert_eq!(breadcrumb_trail(false, "About Us"), None);
    }

    #[test]
    fn test_breadcrumb_shown_verbatim() {
        let trail = breadcrumb_trail(true, "Web Design").unwrap();
        assert_eq!(trail.current, "Web Design");
        assert_eq!(trail.home_label, "Home");
        assert_eq!(trail.home_path, "/");
        assert_eq!(trail.separator, "›");
    }

    #[test]
    fn test_error_display() {
        let err = SiteError::Listener("denied".into());
        assert_eq!(err.to_string(), "Event listener error: denied");
    }
}
