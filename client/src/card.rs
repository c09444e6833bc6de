use leptos::prelude::*;

use leads_shared::{Era, PageEvent, TeamMember, card_key};

use crate::animation::{CARD_STAGGER_SECS, stagger};
use crate::app::{PageStore, dispatch};
use crate::chrome::MemberImage;
use crate::colors::{ACCENT, SLATE, gradient_css};

/// Responsive grid of member cards, in the order given.
#[component]
pub fn MemberGrid(
    #[prop(into)] members: Signal<Vec<TeamMember>>,
    #[prop(into)] era: Signal<Era>,
    max_columns: usize,
) -> impl IntoView {
    let columns = format!(
        "display: grid; grid-template-columns: repeat(auto-fill, minmax(max(240px, calc((100% - {gaps}px) / {max_columns})), 1fr)); gap: 32px; max-width: 1152px; margin: 0 auto 48px;",
        gaps = (max_columns.saturating_sub(1)) * 32,
    );

    view! {
        <div style=columns>
            <For
                each=move || {
                    let era = era.get();
                    members
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(move |(index, member)| (card_key(era, &member), index, member))
                }
                key=|(key, _, _)| key.clone()
                children=move |(_, index, member)| view! { <MemberCard member index /> }
            />
        </div>
    }
}

/// Clickable card: picture, name and role. Hover only changes emphasis.
#[component]
pub fn MemberCard(member: TeamMember, index: usize) -> impl IntoView {
    let PageStore(state) = expect_context();
    let hovered = RwSignal::new(false);

    let src = member.image_src().to_string();
    let name = member.title.clone();
    let alt = member.title.clone();
    let role = member.subtitle.clone();
    let on_click = move |_| dispatch(state, PageEvent::CardClicked(member.clone()));

    view! {
        <div
            style="position: relative; cursor: pointer; animation: leads-rise-in 0.6s ease-out both;"
            style:animation-delay=stagger(index, CARD_STAGGER_SECS)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:click=on_click
        >
            <div
                style="position: relative; overflow: hidden; border-radius: 12px; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); transition: box-shadow 0.3s ease;"
                style:box-shadow=move || {
                    if hovered.get() {
                        "0 20px 25px -5px rgba(0,0,0,0.1), 0 8px 10px -6px rgba(0,0,0,0.1)"
                    } else {
                        "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -4px rgba(0,0,0,0.1)"
                    }
                }
            >
                <div
                    style="position: absolute; inset: 0; background: linear-gradient(to bottom right, rgba(59,130,246,0.1), rgba(75,85,99,0.1), rgba(59,130,246,0.1)); transition: opacity 0.3s ease;"
                    style:opacity=move || if hovered.get() { "1" } else { "0" }
                />
                <div
                    style="position: relative; padding: 24px; display: flex; flex-direction: column; align-items: center; gap: 24px; transition: transform 0.3s ease;"
                    style:transform=move || if hovered.get() { "translateY(-10px)" } else { "translateY(0)" }
                >
                    <div
                        style="position: relative; width: 128px; height: 128px; transition: transform 0.3s ease;"
                        style:transform=move || {
                            if hovered.get() { "scale(1.1) translateY(5px)" } else { "none" }
                        }
                    >
                        <div
                            style="position: absolute; inset: 0; border-radius: 12px;"
                            style:background=gradient_css(ACCENT, SLATE, 1.0)
                            style:animation=move || {
                                if hovered.get() { "leads-frame-spin 4s linear infinite" } else { "none" }
                            }
                        />
                        <div style="position: absolute; inset: 4px; z-index: 1; overflow: hidden; border-radius: 12px; background: #fff;">
                            <MemberImage src=src alt=alt />
                            <div
                                style="position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), rgba(0,0,0,0), transparent); transition: opacity 0.3s ease;"
                                style:opacity=move || if hovered.get() { "1" } else { "0" }
                            />
                        </div>
                    </div>

                    <div
                        style="text-align: center; position: relative; transition: transform 0.3s ease;"
                        style:transform=move || if hovered.get() { "translateY(-5px)" } else { "none" }
                    >
                        <h3 style="font-size: 1.25rem; font-weight: 700; margin: 0;">
                            <span style="background: linear-gradient(to right, #2563eb, #4b5563); -webkit-background-clip: text; background-clip: text; color: transparent;">
                                {name}
                            </span>
                        </h3>
                        <p style="font-size: 0.875rem; color: #2563eb; margin: 4px 0 0;">{role}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
