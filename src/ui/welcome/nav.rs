//! Top navigation bar.

use leptos::prelude::*;

use super::NavLinks;
use crate::i18n::SharedTranslator;
use crate::ui::components::Logo;

const NAV_LINK: &str = "text-gray-600 hover:text-gray-900 font-medium transition-colors";
const NAV_CTA: &str =
    "bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors font-medium";

/// Brand plus the session-dependent links.
///
/// Session links only exist when a login route is registered:
/// - signed in: Dashboard
/// - guest: Sign In, and Get Started when registration is open
#[component]
pub fn Navigation(links: NavLinks, authenticated: bool, translator: SharedTranslator) -> impl IntoView {
    let t = |key: &str| translator.resolve(key);
    let NavLinks {
        login,
        register,
        dashboard,
    } = links;

    let session_links = login.map(|login| {
        let inner = if authenticated {
            view! {
                <a href=dashboard class=NAV_LINK>
                    {t("Dashboard")}
                </a>
            }
            .into_any()
        } else {
            let get_started = register.map(|register| {
                view! {
                    <a href=register class=NAV_CTA>
                        {t("Get Started")}
                    </a>
                }
            });
            view! {
                <a href=login class=NAV_LINK>
                    {t("Sign In")}
                </a>
                {get_started}
            }
            .into_any()
        };

        view! { <div class="flex items-center gap-4">{inner}</div> }
    });

    view! {
        <nav class="relative z-10 px-6 pt-8">
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-blue-600 rounded-lg flex items-center justify-center">
                        <Logo class="w-6 h-6 text-white" />
                    </div>
                    <h1 class="text-2xl font-bold text-gray-900">{t("Flight Data")}</h1>
                </div>

                {session_links}
            </div>
        </nav>
    }
}
