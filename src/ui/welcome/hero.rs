use leptos::prelude::*;

use super::features::FEATURES_ANCHOR;
use crate::i18n::SharedTranslator;

/// Headline with the trial and "learn more" calls to action.
#[component]
pub fn Hero(register: Option<String>, translator: SharedTranslator) -> impl IntoView {
    let t = |key: &str| translator.resolve(key);

    let learn_more = format!("#{FEATURES_ANCHOR}");

    let trial = register.map(|register| {
        view! {
            <a href=register class="bg-blue-600 text-white px-8 py-4 rounded-lg hover:bg-blue-700 transition-colors font-semibold text-lg">
                {t("Start Free Trial")}
            </a>
        }
    });

    view! {
        <div class="relative z-10 px-6 pt-20 pb-32">
            <div class="max-w-7xl mx-auto text-center">
                <h2 class="text-5xl lg:text-6xl font-bold text-gray-900 mb-6">
                    {t("Professional Flight Management")}
                </h2>
                <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
                    {t("Streamline your aviation operations with comprehensive flight tracking, crew scheduling, and aircraft management in one powerful platform.")}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    {trial}
                    <a href=learn_more class="bg-white text-gray-900 px-8 py-4 rounded-lg hover:bg-gray-50 transition-colors font-semibold text-lg border border-gray-200">
                        {t("Learn More")}
                    </a>
                </div>
            </div>
        </div>
    }
}
