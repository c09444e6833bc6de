use leptos::prelude::*;

use crate::animation::{PARTICLE_COUNT, PARTICLE_STAGGER_SECS, particle_position, stagger};
use crate::colors::{ACCENT, rgba_css};

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("events", "Events"),
    ("contact", "Contact"),
];

/// Site navigation. Sections link back to the home page; `scroll_to_section`
/// lets a single-page host intercept them.
#[component]
pub fn NavBar(active_section: String, scroll_to_section: fn(&str)) -> impl IntoView {
    let links = NAV_SECTIONS
        .iter()
        .map(|&(id, label)| {
            let color = if active_section == id { "#2563eb" } else { "#1f2937" };
            view! {
                <a
                    href=format!("/#{id}")
                    style="text-decoration: none; font-weight: 500;"
                    style:color=color
                    on:click=move |_| scroll_to_section(id)
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav style="position: fixed; top: 0; left: 0; right: 0; z-index: 40; height: 64px; display: flex; align-items: center; justify-content: space-between; padding: 0 24px; background: rgba(255,255,255,0.7); backdrop-filter: blur(8px);">
            <a href="/" style="font-weight: 700; font-size: 1.125rem; color: #1e3a8a; text-decoration: none;">"Home"</a>
            <div style="display: flex; gap: 24px;">
                {links}
                <a href="/team" style="text-decoration: none; font-weight: 500; color: #2563eb;">"Team"</a>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer style="padding: 24px 16px; text-align: center; font-size: 0.875rem; color: #6b7280;">
            "Built by the team, for the team."
        </footer>
    }
}

/// Image that covers its positioned container.
#[component]
pub fn MemberImage(src: String, alt: String) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            loading="lazy"
            style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;"
        />
    }
}

/// Drifting dot pattern plus floating particles behind the page content.
#[component]
pub fn Backdrop() -> impl IntoView {
    let dot = rgba_css(ACCENT.0, ACCENT.1, ACCENT.2, 1.0);
    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            let (left, top) = particle_position(i);
            view! {
                <div
                    style="position: absolute; width: 4px; height: 4px; border-radius: 9999px; opacity: 0; animation: leads-float 2s ease-in-out infinite;"
                    style:left=format!("{left:.1}%")
                    style:top=format!("{top:.1}%")
                    style:background=dot.clone()
                    style:animation-delay=stagger(i, PARTICLE_STAGGER_SECS)
                />
            }
        })
        .collect_view();

    view! {
        <div
            style="position: absolute; inset: 0; opacity: 0.05; background-size: 50px 50px; animation: leads-dots 5s linear infinite alternate;"
            style:background-image=format!("radial-gradient(circle, {dot} 1px, transparent 1px)")
        />
        {particles}
    }
}
