use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leads_shared::{ClickRegion, PageEvent, TeamMember};

use crate::animation::POPUP_EXIT_MS;
use crate::app::{PageStore, dispatch};
use crate::chrome::MemberImage;
use crate::icons::{self, CLOSE_SVG};

/// Member detail overlay.
///
/// The page state closes immediately; `shown` keeps the last member around
/// for the fade-out so the exit animation never delays the transition.
#[component]
pub fn MemberPopup() -> impl IntoView {
    let PageStore(state) = expect_context();
    let open_member = Memo::new(move |_| state.with(|s| s.popup.member().cloned()));
    let shown = RwSignal::new(None::<TeamMember>);
    let leaving = RwSignal::new(false);

    // Hold the timeout handle so a reopen cancels a pending fade-out.
    let exit_timeout = Rc::new(RefCell::new(None::<Timeout>));

    Effect::new({
        let exit_timeout = Rc::clone(&exit_timeout);
        move |_| {
            if let Some(timeout) = exit_timeout.borrow_mut().take() {
                timeout.cancel();
            }
            match open_member.get() {
                Some(member) => {
                    leaving.set(false);
                    shown.set(Some(member));
                }
                None => {
                    if shown.get_untracked().is_none() {
                        return;
                    }
                    leaving.set(true);
                    let timeout = Timeout::new(POPUP_EXIT_MS, move || {
                        shown.set(None);
                        leaving.set(false);
                    });
                    *exit_timeout.borrow_mut() = Some(timeout);
                }
            }
        }
    });

    let on_backdrop = move |_| dispatch(state, PageEvent::PopupClicked(ClickRegion::Backdrop));
    let on_panel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        dispatch(state, PageEvent::PopupClicked(ClickRegion::Panel));
    };
    let on_close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        dispatch(state, PageEvent::PopupClicked(ClickRegion::CloseControl));
    };

    move || {
        shown.get().map(|member| {
            let src = member.image_src().to_string();
            let links = member
                .profile_links()
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url.to_string()
                            target="_blank"
                            rel="noopener noreferrer"
                            title=link.kind.label()
                            style="color: #3b82f6; transition: color 0.2s ease;"
                            inner_html=icons::profile_icon(link.kind)
                        />
                    }
                })
                .collect_view();

            view! {
                <div
                    style="position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 16px; background: rgba(0,0,0,0.5); backdrop-filter: blur(4px); transition: opacity 0.2s ease; animation: leads-fade-in 0.2s ease-out both;"
                    style:opacity=move || if leaving.get() { "0" } else { "1" }
                    style:pointer-events=move || if leaving.get() { "none" } else { "auto" }
                    on:click=on_backdrop
                >
                    <div
                        style="position: relative; width: 100%; max-width: 448px; padding: 32px; border-radius: 24px; background: #fff; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); animation: leads-pop-in 0.3s ease-out both;"
                        on:click=on_panel
                    >
                        <button
                            title="Close"
                            style="position: absolute; top: 16px; right: 16px; background: none; border: none; cursor: pointer; color: #6b7280;"
                            inner_html=CLOSE_SVG
                            on:click=on_close
                        />
                        <div style="display: flex; flex-direction: column; align-items: center; gap: 24px;">
                            <div style="position: relative; width: 192px; height: 192px; overflow: hidden; border-radius: 9999px; border: 4px solid #3b82f6; animation: leads-spin-in 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;">
                                <MemberImage src=src alt=member.title.clone() />
                            </div>
                            <div style="text-align: center;">
                                <h3 style="font-size: 1.5rem; font-weight: 700; color: #1e3a8a; border: 1px solid #e5e7eb; border-radius: 9999px; padding: 12px; margin: 0 0 8px; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);">
                                    {member.title.clone()}
                                </h3>
                                <p style="display: inline-block; font-size: 1.25rem; color: #1d4ed8; border: 1px solid #e5e7eb; border-radius: 9999px; padding: 8px; margin: 0; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);">
                                    {member.subtitle.clone()}
                                </p>
                            </div>
                        </div>
                        <div style="display: flex; justify-content: center; gap: 16px; margin-top: 24px;">
                            {links}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
