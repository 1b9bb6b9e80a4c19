use leptos::prelude::*;

use crate::i18n::SharedTranslator;

/// Closing call-to-action band.
#[component]
pub fn CallToAction(register: Option<String>, translator: SharedTranslator) -> impl IntoView {
    let t = |key: &str| translator.resolve(key);

    let trial = register.map(|register| {
        view! {
            <a href=register class="bg-white text-blue-600 px-8 py-4 rounded-lg hover:bg-gray-100 transition-colors font-semibold text-lg inline-block">
                {t("Start Your Free Trial Today")}
            </a>
        }
    });

    view! {
        <div class="bg-blue-600 py-20">
            <div class="max-w-4xl mx-auto text-center px-6">
                <h3 class="text-3xl font-bold text-white mb-4">{t("Ready to Streamline Your Flight Operations?")}</h3>
                <p class="text-xl text-blue-100 mb-8">{t("Join thousands of aviation professionals who trust Flight Data for their management needs.")}</p>
                {trial}
            </div>
        </div>
    }
}
