//! Flight Data aircraft logo.

use leptos::prelude::*;

/// Sizing applied when the caller passes no class.
pub const DEFAULT_LOGO_CLASS: &str = "h-8 w-8";

/// Stylized aircraft mark.
///
/// Every stroke and fill uses `currentColor`, so a text color class on the
/// logo (or an ancestor) recolors the whole glyph. A caller-supplied `class`
/// replaces [`DEFAULT_LOGO_CLASS`]; the geometry is fixed.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Logo class="w-6 h-6 text-white" /> }
/// ```
#[component]
pub fn Logo(
    /// CSS classes for the root `<svg>`.
    #[prop(default = DEFAULT_LOGO_CLASS)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg">
            // Body
            <path d="M50 15 L50 85" stroke="currentColor" stroke-width="3" stroke-linecap="round" />

            // Wings
            <path d="M25 40 L75 40" stroke="currentColor" stroke-width="4" stroke-linecap="round" />
            <path d="M30 65 L70 65" stroke="currentColor" stroke-width="3" stroke-linecap="round" />

            // Nose cone
            <circle cx="50" cy="15" r="3" fill="currentColor" />

            // Wing tips
            <circle cx="25" cy="40" r="2" fill="currentColor" />
            <circle cx="75" cy="40" r="2" fill="currentColor" />
            <circle cx="30" cy="65" r="1.5" fill="currentColor" />
            <circle cx="70" cy="65" r="1.5" fill="currentColor" />

            // Vertical stabilizer
            <path d="M50 75 L45 90 L55 90 Z" fill="currentColor" />

            // Flight path trails
            <path d="M20 25 Q30 30 40 25" stroke="currentColor" stroke-width="1.5" opacity="0.6" stroke-linecap="round" fill="none" />
            <path d="M60 25 Q70 30 80 25" stroke="currentColor" stroke-width="1.5" opacity="0.6" stroke-linecap="round" fill="none" />

            // Speed lines
            <path d="M10 35 L20 35" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />
            <path d="M10 45 L18 45" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />
            <path d="M10 55 L16 55" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />

            <path d="M80 35 L90 35" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />
            <path d="M82 45 L90 45" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />
            <path d="M84 55 L90 55" stroke="currentColor" stroke-width="1" opacity="0.4" stroke-linecap="round" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_fragment;

    /// Split rendered logo markup into its root tag and the geometry inside it.
    fn split_root(html: &str) -> (&str, &str) {
        let end = html.find('>').expect("root tag");
        html.split_at(end + 1)
    }

    #[test]
    fn test_default_class() {
        let html = render_fragment(|| view! { <Logo /> });
        let (root, _) = split_root(&html);

        assert!(root.starts_with("<svg"));
        assert!(root.contains(r#"class="h-8 w-8""#));
        assert!(root.contains(r#"viewBox="0 0 100 100""#));
    }

    #[test]
    fn test_class_override_replaces_default() {
        let html = render_fragment(|| view! { <Logo class="w-6 h-6 text-white" /> });
        let (root, _) = split_root(&html);

        assert!(root.contains(r#"class="w-6 h-6 text-white""#));
        assert!(!root.contains("h-8 w-8"));
    }

    #[test]
    fn test_geometry_independent_of_class() {
        let default = render_fragment(|| view! { <Logo /> });
        let small = render_fragment(|| view! { <Logo class="w-5 h-5 text-white" /> });

        let (_, default_body) = split_root(&default);
        let (_, small_body) = split_root(&small);
        assert_eq!(default_body, small_body);
        assert_eq!(default_body.matches("<circle").count(), 5);
        assert_eq!(default_body.matches("<path").count(), 12);
    }
}
