use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::config;
use crate::content::{self, NavLink};
use crate::controllers::scroll_spy::{CloseReason, NavState};
use crate::observer;

pub enum NavAction {
    SectionEntered(String),
    ScrollOffset(f64),
    ToggleMenu,
    CloseMenu(CloseReason),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: std::rc::Rc<Self>, action: NavAction) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NavAction::SectionEntered(id) => next.section_entered(&id),
            NavAction::ScrollOffset(y) => next.scroll_offset(y, config::SCROLL_ELEVATION_PX),
            NavAction::ToggleMenu => {
                next.toggle_menu();
                true
            }
            NavAction::CloseMenu(reason) => {
                let closed = next.close_menu(reason);
                if closed {
                    info!("mobile menu closed: {}", reason.as_str());
                }
                closed
            }
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

fn node_ref_contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref
        .get()
        .map_or(false, |owner| owner.contains(target))
}

/// Fixed pill navbar: brand, scroll-spied section links, quote CTA and the
/// collapsible mobile menu.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer_eq(|| NavState::new(content::SECTION_IDS));
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();

    // Scroll elevation + scroll spy, alive for the navbar's lifetime.
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

                if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::wrap(Box::new({
                        let nav = nav.clone();
                        move || {
                            if let Some(window) = web_sys::window() {
                                if let Ok(y) = window.scroll_y() {
                                    nav.dispatch(NavAction::ScrollOffset(y));
                                }
                            }
                        }
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        cleanups.push(Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        }));
                    }
                }

                let on_enter = {
                    let nav = nav.clone();
                    Callback::from(move |id: String| nav.dispatch(NavAction::SectionEntered(id)))
                };
                match observer::watch_sections(content::SECTION_IDS, config::SPY_ROOT_MARGIN, on_enter)
                {
                    Ok(handle) => cleanups.push(Box::new(move || drop(handle))),
                    // Without a spy the first link stays highlighted.
                    Err(err) => warn!("scroll spy unavailable: {:?}", err),
                }

                move || {
                    for cleanup in cleanups {
                        cleanup();
                    }
                }
            },
            (),
        );
    }

    // Outside-click and Escape close the menu. Registered only while the
    // menu is open, deregistered as soon as it closes or the navbar unmounts.
    {
        let menu_open = nav.menu_open();
        let nav = nav.clone();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with_deps(
            move |open| {
                let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let click_callback = Closure::wrap(Box::new({
                            let nav = nav.clone();
                            move |event: MouseEvent| {
                                let target =
                                    event.target().and_then(|t| t.dyn_into::<Node>().ok());
                                if !node_ref_contains(&menu_ref, target.as_ref())
                                    && !node_ref_contains(&button_ref, target.as_ref())
                                {
                                    nav.dispatch(NavAction::CloseMenu(CloseReason::OutsideClick));
                                }
                            }
                        })
                            as Box<dyn FnMut(MouseEvent)>);
                        if document
                            .add_event_listener_with_callback_and_bool(
                                "mousedown",
                                click_callback.as_ref().unchecked_ref(),
                                true,
                            )
                            .is_ok()
                        {
                            let document = document.clone();
                            cleanups.push(Box::new(move || {
                                let _ = document.remove_event_listener_with_callback_and_bool(
                                    "mousedown",
                                    click_callback.as_ref().unchecked_ref(),
                                    true,
                                );
                            }));
                        }

                        let key_callback = Closure::wrap(Box::new({
                            let nav = nav.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == "Escape" {
                                    nav.dispatch(NavAction::CloseMenu(CloseReason::EscapeKey));
                                }
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        if document
                            .add_event_listener_with_callback(
                                "keydown",
                                key_callback.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            cleanups.push(Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    key_callback.as_ref().unchecked_ref(),
                                );
                            }));
                        }
                    }
                }

                move || {
                    for cleanup in cleanups {
                        cleanup();
                    }
                }
            },
            menu_open,
        );
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_on_link = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::CloseMenu(CloseReason::LinkActivated));
        })
    };

    let desktop_link = |link: &NavLink| {
        let is_active = nav.active_anchor() == link.anchor;
        html! {
            <li key={link.anchor}>
                <a
                    href={format!("#{}", link.anchor)}
                    class={classes!("nav-link", is_active.then(|| "active"))}
                >
                    { link.label }
                </a>
            </li>
        }
    };

    let mobile_link = |link: &NavLink| {
        html! {
            <li key={link.anchor}>
                <a
                    href={format!("#{}", link.anchor)}
                    class="mobile-link"
                    onclick={close_on_link.clone()}
                >
                    { link.label }
                </a>
            </li>
        }
    };

    html! {
        <header class="site-header">
            <div class="nav-container">
                <div class={classes!("nav-pill", nav.scrolled().then(|| "scrolled"))}>
                    <a href="#home" class="nav-brand">
                        <img src="/images/logo.png" width="40" height="40" alt="Akwaba logo" />
                        <span class="nav-brand-text">
                            <span class="nav-brand-name">{"AKWABA CONSTRUCTION"}</span>
                            <span class="nav-brand-tag">{"Ponts & Routes"}</span>
                        </span>
                    </a>

                    <span class="nav-divider"></span>

                    <ul class="nav-links">
                        { for content::NAV_LINKS.iter().map(desktop_link) }
                    </ul>

                    <a href="#quote" class="nav-cta">{"Demander un Devis"}</a>

                    <button
                        ref={button_ref.clone()}
                        type="button"
                        aria-label="Ouvrir le menu"
                        aria-expanded={nav.menu_open().to_string()}
                        aria-controls="mobile-menu"
                        class={classes!("burger", nav.menu_open().then(|| "open"))}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div
                    ref={menu_ref.clone()}
                    id="mobile-menu"
                    class={classes!("mobile-menu", nav.menu_open().then(|| "open"))}
                >
                    <ul>
                        { for content::NAV_LINKS.iter().map(mobile_link) }
                        <li class="mobile-cta-row">
                            <a href="#quote" class="mobile-cta" onclick={close_on_link.clone()}>
                                {"Demander un Devis"}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 16px;
                    left: 0;
                    right: 0;
                    z-index: 50;
                }

                .nav-container {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 16px;
                }

                .nav-pill {
                    position: relative;
                    z-index: 50;
                    display: flex;
                    align-items: stretch;
                    height: 64px;
                    border-radius: 9999px;
                    background: #ffffff;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.12);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .nav-pill.scrolled {
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    padding: 0 24px;
                    text-decoration: none;
                }

                .nav-brand img {
                    border-radius: 50%;
                    background: rgba(33, 79, 122, 0.1);
                    padding: 4px;
                }

                .nav-brand-text {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.2;
                }

                .nav-brand-name {
                    font-weight: 800;
                    color: #214f7a;
                    letter-spacing: 0.03em;
                }

                .nav-brand-tag {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #64748b;
                }

                .nav-divider {
                    width: 1px;
                    height: 100%;
                    background: #e2e8f0;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 40px;
                    margin: 0 auto;
                    padding: 0 24px;
                    list-style: none;
                    font-size: 17px;
                    font-weight: 500;
                }

                .nav-link {
                    color: #1e293b;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #214f7a;
                }

                .nav-cta {
                    margin-left: auto;
                    display: inline-flex;
                    align-items: center;
                    height: 100%;
                    padding: 0 32px;
                    background: #214f7a;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }

                .burger {
                    display: none;
                    margin-left: auto;
                    padding: 0 16px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger span {
                    display: block;
                    height: 2px;
                    width: 24px;
                    background: #1e293b;
                    transition: transform 0.25s ease, opacity 0.25s ease;
                }

                .burger span + span {
                    margin-top: 6px;
                }

                .burger.open span:nth-child(1) {
                    transform: translateY(8px) rotate(45deg);
                }

                .burger.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger.open span:nth-child(3) {
                    transform: translateY(-8px) rotate(-45deg);
                }

                .mobile-menu {
                    position: absolute;
                    left: 16px;
                    right: 16px;
                    top: 100%;
                    margin-top: 8px;
                    z-index: 40;
                    border-radius: 16px;
                    background: #ffffff;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.12);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    overflow: hidden;
                    max-height: 0;
                    opacity: 0;
                    transform: translateY(-8px);
                    transition: max-height 0.28s cubic-bezier(0.22, 1, 0.36, 1),
                        opacity 0.28s cubic-bezier(0.22, 1, 0.36, 1),
                        transform 0.28s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .mobile-menu.open {
                    max-height: 420px;
                    opacity: 1;
                    transform: translateY(0);
                }

                .mobile-menu ul {
                    list-style: none;
                    margin: 0;
                    padding: 8px 0;
                }

                .mobile-link {
                    display: block;
                    padding: 12px 16px;
                    color: #1e293b;
                    text-decoration: none;
                }

                .mobile-link:hover {
                    background: #f8fafc;
                }

                .mobile-cta-row {
                    padding: 12px;
                }

                .mobile-cta {
                    display: inline-flex;
                    justify-content: center;
                    align-items: center;
                    width: 100%;
                    height: 44px;
                    border-radius: 9999px;
                    background: #214f7a;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }

                @media (max-width: 767px) {
                    .nav-brand-text,
                    .nav-divider,
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }

                    .burger {
                        display: block;
                    }
                }

                @media (min-width: 768px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
