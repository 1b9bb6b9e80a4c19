//! Document shell for guest-facing pages.

use leptos::prelude::*;

/// Settings for [`GuestLayout`] that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Value of `<html lang>`.
    pub lang: String,
    /// Href of the compiled stylesheet.
    pub stylesheet: String,
}

impl LayoutOptions {
    /// Options for a locale with the stylesheet served under `static_prefix`.
    pub fn new(lang: impl Into<String>, static_prefix: &str) -> Self {
        Self {
            lang: lang.into(),
            stylesheet: format!("{}/app.css", static_prefix.trim_end_matches('/')),
        }
    }
}

/// `<html>` document wrapping a guest page.
#[component]
pub fn GuestLayout(
    #[prop(into)] lang: String,
    #[prop(into)] title: String,
    #[prop(into)] stylesheet: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang=lang>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet />
            </head>
            <body class="font-sans text-gray-900 antialiased">
                {children()}
            </body>
        </html>
    }
}
