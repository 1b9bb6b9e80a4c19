//! The six product feature cards.

use leptos::prelude::*;

use crate::i18n::SharedTranslator;
use crate::ui::components::{
    ChartBarIcon, CogIcon, MapIcon, MapPinIcon, ShieldCheckIcon, UsersIcon,
};

/// Anchor target of the hero's "Learn More" link.
pub const FEATURES_ANCHOR: &str = "features";

#[component]
pub fn Features(translator: SharedTranslator) -> impl IntoView {
    let t = |key: &str| translator.resolve(key);

    view! {
        <div id=FEATURES_ANCHOR class="bg-white py-20">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h3 class="text-3xl font-bold text-gray-900 mb-4">{t("Everything You Need")}</h3>
                    <p class="text-xl text-gray-600">{t("Comprehensive tools for modern aviation management")}</p>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    <FeatureCard
                        tile="bg-blue-100"
                        title={t("Real-time Flight Tracking")}
                        description={t("Monitor aircraft positions, flight paths, and status updates with live GPS tracking and comprehensive flight data.")}
                    >
                        <MapPinIcon class="text-blue-600" />
                    </FeatureCard>

                    <FeatureCard
                        tile="bg-green-100"
                        title={t("Crew Scheduling")}
                        description={t("Efficiently manage pilot and crew assignments, track certifications, and ensure compliance with regulations.")}
                    >
                        <UsersIcon class="text-green-600" />
                    </FeatureCard>

                    <FeatureCard
                        tile="bg-purple-100"
                        title={t("Aircraft Maintenance")}
                        description={t("Track maintenance schedules, inspection requirements, and service history to ensure airworthiness and safety.")}
                    >
                        <CogIcon class="text-purple-600" />
                    </FeatureCard>

                    <FeatureCard
                        tile="bg-orange-100"
                        title={t("Route Planning")}
                        description={t("Optimize flight paths, calculate fuel requirements, and plan efficient routes with weather and airspace considerations.")}
                    >
                        <MapIcon class="text-orange-600" />
                    </FeatureCard>

                    <FeatureCard
                        tile="bg-red-100"
                        title={t("Analytics & Reporting")}
                        description={t("Generate detailed reports on flight operations, costs, efficiency metrics, and compliance documentation.")}
                    >
                        <ChartBarIcon class="text-red-600" />
                    </FeatureCard>

                    <FeatureCard
                        tile="bg-teal-100"
                        title={t("Safety Management")}
                        description={t("Comprehensive safety protocols, incident reporting, and risk assessment tools to maintain the highest safety standards.")}
                    >
                        <ShieldCheckIcon class="text-teal-600" />
                    </FeatureCard>
                </div>
            </div>
        </div>
    }
}

/// Single card: tinted icon tile, title, description.
#[component]
fn FeatureCard(
    /// Background class of the icon tile.
    tile: &'static str,
    title: String,
    description: String,
    children: Children,
) -> impl IntoView {
    let tile_classes = format!("w-12 h-12 {tile} rounded-lg flex items-center justify-center mb-6");

    view! {
        <div class="bg-gray-50 rounded-xl p-8 hover:shadow-lg transition-shadow">
            <div class=tile_classes>{children()}</div>
            <h4 class="text-xl font-semibold text-gray-900 mb-4">{title}</h4>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
