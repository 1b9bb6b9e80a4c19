//! Guest landing page.
//!
//! The page is a pure function of a [`WelcomeContext`]: which named routes
//! exist, whether the visitor is signed in, the translator and the year.
//!
//! # Sections
//!
//! - [`Navigation`]: brand and session links
//! - [`Hero`]: headline and trial link
//! - [`Features`]: the six feature cards
//! - [`CallToAction`]: closing trial band
//! - [`Footer`]: brand and copyright

mod cta;
mod features;
mod footer;
mod hero;
mod nav;

pub use cta::CallToAction;
pub use features::{FEATURES_ANCHOR, Features};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navigation;

use std::sync::Arc;

use leptos::prelude::*;

use crate::i18n::SharedTranslator;
use crate::routes::{self, RouteTable};
use crate::ui::components::GridPattern;
use crate::ui::layout::{GuestLayout, LayoutOptions};
use crate::ui::{render_document, render_fragment};

/// Link targets the page may show.
///
/// `login` and `register` are `None` when the route is not registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    pub login: Option<String>,
    pub register: Option<String>,
    pub dashboard: String,
}

impl NavLinks {
    /// Resolve links against the route table. The dashboard is a plain path.
    pub fn from_routes(routes: &RouteTable, dashboard_path: &str) -> Self {
        Self {
            login: routes.route(routes::LOGIN),
            register: routes.route(routes::REGISTER),
            dashboard: routes.url(dashboard_path),
        }
    }
}

/// Everything the landing page depends on.
#[derive(Debug, Clone)]
pub struct WelcomeContext {
    pub links: NavLinks,
    pub authenticated: bool,
    /// Copyright year.
    pub year: i32,
    pub translator: SharedTranslator,
}

#[component]
pub fn WelcomePage(ctx: WelcomeContext) -> impl IntoView {
    let WelcomeContext {
        links,
        authenticated,
        year,
        translator,
    } = ctx;
    let register = links.register.clone();

    view! {
        <div class="bg-gradient-to-br from-sky-50 to-blue-100 min-h-screen">
            <div class="relative overflow-hidden">
                <div class="absolute inset-0 opacity-5">
                    <GridPattern />
                </div>

                <Navigation links=links authenticated=authenticated translator={Arc::clone(&translator)} />
                <Hero register={register.clone()} translator={Arc::clone(&translator)} />

                <div class="absolute inset-x-0 bottom-0 h-64 bg-gradient-to-t from-white to-transparent"></div>
            </div>

            <Features translator={Arc::clone(&translator)} />
            <CallToAction register=register translator={Arc::clone(&translator)} />
            <Footer year=year translator=translator />
        </div>
    }
}

/// Render the page body without a document shell.
pub fn render_welcome(ctx: &WelcomeContext) -> String {
    let ctx = ctx.clone();
    render_fragment(move || view! { <WelcomePage ctx=ctx /> })
}

/// Render the page inside the guest layout, including the doctype.
pub fn render_welcome_document(ctx: &WelcomeContext, layout: &LayoutOptions) -> String {
    let title = ctx.translator.resolve("Flight Data");
    let lang = layout.lang.clone();
    let stylesheet = layout.stylesheet.clone();
    let ctx = ctx.clone();

    render_document(move || {
        view! {
            <GuestLayout lang=lang title=title stylesheet=stylesheet>
                <WelcomePage ctx=ctx />
            </GuestLayout>
        }
    })
}
