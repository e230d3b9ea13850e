use leptos::prelude::*;

use crate::content::{
    CausesSection, DiagnosisSection, FutureSection, OverviewSection, SymptomsSection,
    TreatmentsSection,
};
use crate::ui_state::{ActiveSection, ExclusiveSelect, ExclusiveToggle, MenuState, SectionId};
use crate::viewport::SectionTracker;

/// One entry of the navigation bar. Active state and the mobile
/// close-on-navigate side effect are the only behavior; everything else is
/// styling.
#[component]
fn NavLink(
    section: SectionId,
    active: ReadSignal<ActiveSection>,
    set_menu: WriteSignal<MenuState>,
    #[prop(optional)] mobile: bool,
) -> impl IntoView {
    let is_active = move || active.get().is_active(section);
    view! {
        <a
            href=format!("#{}", section.anchor())
            on:click=move |_| {
                if mobile {
                    set_menu.update(MenuState::close);
                }
            }
            class=move || format!(
                "relative px-3 py-2 rounded-md text-sm font-medium transition-colors duration-300 {} {}",
                if is_active() {
                    "text-[#3D405B] font-semibold"
                } else {
                    "text-gray-600 hover:text-[#3D405B]"
                },
                if mobile { "block text-base" } else { "" },
            )
        >
            {section.nav_label()}
            <Show when=move || is_active() && !mobile>
                <span class="absolute bottom-[-4px] left-0 w-full h-[2px] bg-[#81B29A]"></span>
            </Show>
        </a>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = signal(ActiveSection::page_load());
    let (menu, set_menu) = signal(MenuState::default());
    let (symptom_tabs, set_symptom_tabs) = signal(ExclusiveSelect::default());
    let (treatment_tabs, set_treatment_tabs) = signal(ExclusiveSelect::default());
    let (accordion, set_accordion) = signal(ExclusiveToggle::closed());

    // The tracker lives exactly as long as the mounted sections. Dropping it
    // disconnects the observer, so no intersection callback can outlive the
    // view it reports into.
    let tracker = StoredValue::new_local(None::<SectionTracker>);
    Effect::new(move |_| {
        let t = SectionTracker::new(move |id| set_active.update(|a| a.activate(id)))
            .expect("host platform lacks IntersectionObserver support");
        for section in SectionId::ALL {
            let Some(element) = document().get_element_by_id(section.anchor()) else {
                panic!(
                    "nav link '#{}' has no mounted section element",
                    section.anchor()
                );
            };
            t.observe(&element);
        }
        tracker.set_value(Some(t));
    });
    on_cleanup(move || tracker.set_value(None));

    view! {
        <header class="bg-white/80 backdrop-blur-md sticky top-0 z-50 shadow-sm">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        <span class="font-bold text-xl text-[#3D405B]">"🧠 Párkinson Interactivo"</span>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {SectionId::ALL.into_iter().map(|section| view! {
                                <NavLink section=section active=active set_menu=set_menu />
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu.update(MenuState::toggle)
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none"
                        >
                            <span class="sr-only">"Abrir menú principal"</span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7" />
                            </svg>
                        </button>
                    </div>
                </div>
            </nav>
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {SectionId::ALL.into_iter().map(|section| view! {
                            <NavLink section=section active=active set_menu=set_menu mobile=true />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>
        </header>

        <main class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
            <OverviewSection />
            <hr class="my-16 border-gray-200" />
            <CausesSection />
            <hr class="my-16 border-gray-200" />
            <SymptomsSection
                tabs=symptom_tabs
                set_tabs=set_symptom_tabs
                accordion=accordion
                set_accordion=set_accordion
            />
            <hr class="my-16 border-gray-200" />
            <DiagnosisSection />
            <hr class="my-16 border-gray-200" />
            <TreatmentsSection tabs=treatment_tabs set_tabs=set_treatment_tabs />
            <hr class="my-16 border-gray-200" />
            <FutureSection />
        </main>

        <footer class="bg-white mt-16">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 text-center text-gray-500">
                <p>"© 2025 Parkinson Interactivo. Creado para fines informativos y educativos."</p>
                <p class="text-xs mt-1">
                    "Este contenido se basa en un análisis científico compilado y no sustituye el consejo médico profesional."
                </p>
            </div>
        </footer>
    }
}
