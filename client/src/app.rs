use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use leads_shared::{Effect, PageEvent, PageState};

use crate::animation::KEYFRAMES;
use crate::card::MemberGrid;
use crate::chrome::{Backdrop, Footer, NavBar};
use crate::loader;
use crate::popup::MemberPopup;
use crate::timeline::Timeline;

/// Page state shared with every child component through context.
#[derive(Clone, Copy)]
pub(crate) struct PageStore(pub RwSignal<PageState>);

/// Apply one event and run whatever effects it produced.
/// Dropped silently once the page has been unmounted.
pub(crate) fn dispatch(state: RwSignal<PageState>, event: PageEvent) {
    let effects = state.try_update(|current| {
        let (next, effects) = std::mem::take(current).apply(event);
        *current = next;
        effects
    });
    if let Some(effects) = effects {
        run_effects(state, effects);
    }
}

fn run_effects(state: RwSignal<PageState>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchDataset { path } => {
                spawn_local(async move {
                    let event = match loader::fetch_dataset(path).await {
                        Ok(dataset) => {
                            web_sys::console::info_1(
                                &format!("team dataset loaded: {} members", dataset.total_members())
                                    .into(),
                            );
                            PageEvent::Loaded(dataset)
                        }
                        Err(e) => PageEvent::LoadFailed(e),
                    };
                    dispatch(state, event);
                });
            }
            Effect::LogError(message) => {
                web_sys::console::error_1(&format!("Error: {message}").into());
            }
        }
    }
}

/// The team showcase page.
#[component]
pub fn App() -> impl IntoView {
    let (initial, effects) = PageState::mount();
    let state = RwSignal::new(initial);
    provide_context(PageStore(state));
    run_effects(state, effects);

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let era = Memo::new(move |_| state.with(|s| s.era));
    let partition = Memo::new(move |_| state.with(|s| s.partition()));
    let leadership = Signal::derive(move || partition.with(|p| p.leadership.clone()));
    let other = Signal::derive(move || partition.with(|p| p.other.clone()));

    view! {
        <style>{KEYFRAMES}</style>
        <div style="min-height: 100vh; display: flex; flex-direction: column; background: linear-gradient(to right, #f9fcff, #e6f5ff);">
            <NavBar active_section=String::new() scroll_to_section=|_| {} />

            <main style="flex-grow: 1; padding-top: 80px; position: relative; overflow: hidden;">
                <Backdrop />

                <div style="max-width: 1200px; margin: 0 auto; padding: 32px 16px; position: relative;">
                    <div style="text-align: center; margin-bottom: 64px; animation: leads-drop-in 0.8s ease-out both;">
                        <h1 style="font-size: clamp(2.25rem, 7vw, 6rem); font-weight: 700; margin: 0;">
                            <span style="background: linear-gradient(to right, #3b82f6, #4b5563, #3b82f6); -webkit-background-clip: text; background-clip: text; color: transparent;">
                                "Meet Our Leads"
                            </span>
                        </h1>
                    </div>

                    <Timeline />

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div style="display: flex; justify-content: center; align-items: center; height: 256px;">
                                <div style="width: 56px; height: 56px; border: 4px solid #3b82f6; border-top-color: transparent; border-radius: 9999px; animation: leads-spin 1s linear infinite;" />
                            </div>
                        }
                    >
                        <MemberGrid members=leadership era=era max_columns=4 />
                        <MemberGrid members=other era=era max_columns=3 />
                    </Show>
                </div>
            </main>

            <Footer />
            <MemberPopup />
        </div>
    }
}
