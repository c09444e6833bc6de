use leptos::prelude::*;

use leads_shared::{Era, PageEvent};

use crate::animation::{TIMELINE_STAGGER_SECS, hover_scale, stagger};
use crate::app::{PageStore, dispatch};
use crate::icons::SPARKLES_SVG;

/// Era selector. Switching eras only changes which loaded group is shown.
#[component]
pub fn Timeline() -> impl IntoView {
    let dots = Era::ALL
        .into_iter()
        .map(|era| view! { <TimelineDot era /> })
        .collect_view();

    view! {
        <div style="position: relative; margin-bottom: 128px;">
            <div style="position: absolute; left: 0; right: 0; top: 50%; height: 2px; transform-origin: left; animation: leads-grow-x 0.8s ease-in-out both;">
                <div style="position: absolute; inset: 0; background: linear-gradient(to right, #bfdbfe, #e5e7eb, #bfdbfe); background-size: 200% 100%; animation: leads-shimmer 5s ease-in-out infinite;" />
            </div>
            <div style="position: relative; display: flex; justify-content: center; align-items: center; gap: clamp(64px, 10vw, 128px);">
                {dots}
            </div>
        </div>
    }
}

#[component]
fn TimelineDot(era: Era) -> impl IntoView {
    let PageStore(state) = expect_context();
    let is_active = Memo::new(move |_| state.with(|s| s.is_active(era)));
    let hovered = RwSignal::new(false);
    let delay = stagger(era.index(), TIMELINE_STAGGER_SECS);
    let label_delay = format!("{:.2}s", era.index() as f64 * TIMELINE_STAGGER_SECS + 0.2);

    view! {
        <div
            style="position: relative; display: flex; flex-direction: column; align-items: center; animation: leads-fade-up 0.5s ease-out both;"
            style:animation-delay=delay
        >
            <button
                title=era.label()
                style="position: relative; margin-bottom: 32px; cursor: pointer; background: none; border: none; padding: 0; transition: transform 0.2s ease;"
                style:transform=move || hover_scale(hovered.get())
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
                on:click=move |_| dispatch(state, PageEvent::SelectEra(era))
            >
                <div
                    style="position: absolute; inset: -16px; border-radius: 9999px; background: #dbeafe; transition: transform 0.3s ease, opacity 0.3s ease;"
                    style:transform=move || if is_active.get() { "scale(1.2)" } else { "scale(1)" }
                    style:opacity=move || if is_active.get() { "0.2" } else { "0" }
                />
                <div
                    style="position: relative; width: 32px; height: 32px; border-radius: 9999px; display: flex; align-items: center; justify-content: center;"
                    style:background=move || {
                        if is_active.get() {
                            "linear-gradient(to right, #3b82f6, #4b5563)"
                        } else {
                            "#bfdbfe"
                        }
                    }
                    style:animation=move || {
                        if is_active.get() { "leads-pulse 0.5s ease-in-out infinite" } else { "none" }
                    }
                >
                    <Show when=move || is_active.get()>
                        <div style="position: absolute; inset: -8px; border: 2px solid #60a5fa; border-radius: 9999px; animation: leads-ring 1.5s ease-in-out infinite;" />
                    </Show>
                    <span
                        style="display: block; width: 16px; height: 16px;"
                        style:color=move || if is_active.get() { "#fff" } else { "#3b82f6" }
                        style:opacity=move || if is_active.get() { "1" } else { "0.5" }
                        inner_html=SPARKLES_SVG
                    />
                </div>
            </button>

            <div
                style="position: absolute; top: 100%; text-align: center; animation: leads-fade-up 0.5s ease-out both;"
                style:animation-delay=label_delay
            >
                <span
                    style="font-weight: 700; white-space: nowrap;"
                    style:color=move || if is_active.get() { "#2563eb" } else { "#60a5fa" }
                >
                    {era.label()}
                </span>
            </div>
        </div>
    }
}
