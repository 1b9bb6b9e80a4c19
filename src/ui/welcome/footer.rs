use leptos::prelude::*;

use crate::i18n::SharedTranslator;
use crate::ui::components::Logo;

#[component]
pub fn Footer(year: i32, translator: SharedTranslator) -> impl IntoView {
    let brand = translator.resolve("Flight Data");
    let copyright = format!(
        "© {year} {brand}. {}",
        translator.resolve("All rights reserved.")
    );

    view! {
        <footer class="bg-gray-900 py-12">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="flex items-center gap-3 mb-4 md:mb-0">
                        <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center">
                            <Logo class="w-5 h-5 text-white" />
                        </div>
                        <span class="text-xl font-bold text-white">{brand}</span>
                    </div>
                    <p class="text-gray-400 text-sm">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
