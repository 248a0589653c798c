use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content;
use crate::controllers::tabs::{ServiceId, TabPanel};

pub enum TabAction {
    Select(ServiceId),
    FinishExit,
}

impl Reducible for TabPanel {
    type Action = TabAction;

    fn reduce(self: std::rc::Rc<Self>, action: TabAction) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TabAction::Select(id) => next.select(id),
            TabAction::FinishExit => {
                next.finish_exit();
                true
            }
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

fn service_icon(id: ServiceId) -> Html {
    match id {
        ServiceId::Ponts => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="service-icon">
                <path stroke-width="1.7" stroke-linecap="round" d="M3 18V9m18 9V9" />
                <path stroke-width="1.7" d="M3 12c6 0 12-6 18 0" />
                <path stroke-width="1.7" d="M3 15c6 0 12-6 18 0" />
                <path stroke-width="1.7" d="M2 18h20" />
            </svg>
        },
        ServiceId::Voiries => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="service-icon">
                <path stroke-width="1.7" d="M7 21 9 3h6l2 18" />
                <path stroke-width="1.7" stroke-linecap="round" d="M12 5v3m0 3v3m0 3v3" />
            </svg>
        },
        ServiceId::Etudes => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="service-icon">
                <rect x="6" y="4" width="12" height="16" rx="2" stroke-width="1.7" />
                <path stroke-width="1.7" d="M9 4.5h6a2 2 0 0 1 2 2V8H7V6.5a2 2 0 0 1 2-2Z" />
                <path stroke-width="1.7" stroke-linecap="round" d="M9 12h6M9 16h6" />
            </svg>
        },
    }
}

/// Three service cards on the left, one detail pane on the right. Changing
/// the selection plays the old pane's exit animation, then mounts the new
/// pane (keyed by id) with its enter animation.
#[function_component(ServicesTabs)]
pub fn services_tabs() -> Html {
    let panel = use_reducer_eq(TabPanel::default);

    // Sequences exit -> enter: while a pane is leaving, schedule the swap
    // for when its exit animation ends. Re-selecting mid-exit reschedules,
    // so the swap always lands on the latest selection.
    {
        let panel = panel.clone();
        let deps = (panel.leaving(), panel.selected());
        use_effect_with_deps(
            move |(leaving, _)| {
                let timeout = leaving.then(|| {
                    Timeout::new(config::TAB_EXIT_MS, move || {
                        panel.dispatch(TabAction::FinishExit);
                    })
                });
                move || {
                    if let Some(timeout) = timeout {
                        timeout.cancel();
                    }
                }
            },
            deps,
        );
    }

    let current = content::service(panel.shown());

    let selector = |service: &content::Service| {
        let selected = service.id == panel.selected();
        let onclick = {
            let panel = panel.clone();
            let id = service.id;
            Callback::from(move |_: MouseEvent| panel.dispatch(TabAction::Select(id)))
        };
        html! {
            <button
                key={service.id.as_str()}
                class={classes!("service-card", selected.then(|| "selected"))}
                {onclick}
            >
                <span class="service-icon-box">{ service_icon(service.id) }</span>
                <span class="service-card-title">{ service.title }</span>
            </button>
        }
    };

    html! {
        <div class="services-tabs">
            <div class="service-cards">
                { for content::SERVICES.iter().map(selector) }
            </div>

            <div class="service-detail">
                <div class="service-detail-media">
                    <div
                        key={current.id.as_str()}
                        class={classes!("tab-pane", panel.leaving().then(|| "leaving"))}
                    >
                        <img
                            src={current.image}
                            alt={current.title}
                            style={format!("object-position: {};", current.object_position)}
                        />
                    </div>
                </div>

                <div class="service-detail-body">
                    <h3>{ current.title }</h3>
                    <p>{ current.blurb }</p>

                    <div class="service-bullets">
                        <ul>
                            { for current.bullets_left.iter().map(|b| html! { <li key={*b}>{ *b }</li> }) }
                        </ul>
                        <ul>
                            { for current.bullets_right.iter().map(|b| html! { <li key={*b}>{ *b }</li> }) }
                        </ul>
                    </div>

                    <a href="#quote" class="service-more">{"En savoir plus ▸"}</a>
                </div>
            </div>

            <style>
                {r#"
                .services-tabs {
                    display: grid;
                    gap: 24px;
                }

                .service-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .service-card {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    width: 100%;
                    border-radius: 16px;
                    border: 1px solid #e2e8f0;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    cursor: pointer;
                    padding: 0;
                    transition: border-color 0.2s ease, background 0.2s ease, color 0.2s ease;
                }

                .service-card:hover {
                    border-color: #cbd5e1;
                }

                .service-card.selected {
                    background: #0f172a;
                    color: #ffffff;
                    border-color: #0f172a;
                    box-shadow: 0 0 0 2px #93c5fd;
                }

                .service-icon-box {
                    display: grid;
                    place-items: center;
                    height: 64px;
                    width: 64px;
                    flex-shrink: 0;
                    border-radius: 16px;
                    background: rgba(251, 191, 36, 0.9);
                    color: #0f172a;
                }

                .service-card.selected .service-icon-box {
                    background: #fbbf24;
                }

                .service-icon {
                    height: 28px;
                    width: 28px;
                }

                .service-card-title {
                    text-align: left;
                    font-weight: 500;
                    font-size: 1rem;
                    padding-right: 16px;
                }

                .service-detail {
                    border-radius: 24px;
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    overflow: hidden;
                }

                .service-detail-media {
                    position: relative;
                    height: 224px;
                    overflow: hidden;
                }

                .tab-pane {
                    position: absolute;
                    inset: 0;
                    animation: paneIn 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .tab-pane.leaving {
                    animation: paneOut 0.3s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                }

                .tab-pane img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                @keyframes paneIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes paneOut {
                    from { opacity: 1; transform: translateY(0); }
                    to { opacity: 0; transform: translateY(-12px); }
                }

                .service-detail-body {
                    padding: 32px;
                }

                .service-detail-body h3 {
                    font-size: 1.75rem;
                    font-weight: 600;
                    margin: 0;
                }

                .service-detail-body > p {
                    margin-top: 12px;
                    color: #475569;
                }

                .service-bullets {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 8px 32px;
                    margin-top: 24px;
                    color: #1e293b;
                }

                .service-bullets ul {
                    margin: 0;
                    padding-left: 20px;
                }

                .service-bullets li {
                    padding: 2px 0;
                }

                .service-more {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    margin-top: 24px;
                    border-radius: 9999px;
                    background: #fbbf24;
                    padding: 10px 20px;
                    font-weight: 600;
                    color: #0f172a;
                    text-decoration: none;
                    transition: opacity 0.2s ease;
                }

                .service-more:hover {
                    opacity: 0.9;
                }

                @media (min-width: 640px) {
                    .service-detail-media { height: 288px; }
                    .service-bullets { grid-template-columns: 1fr 1fr; }
                }

                @media (min-width: 768px) {
                    .services-tabs {
                        grid-template-columns: 5fr 7fr;
                    }
                    .service-detail-media { height: 320px; }
                }

                @media (min-width: 1024px) {
                    .services-tabs {
                        grid-template-columns: 4fr 8fr;
                    }
                    .service-detail-media { height: 384px; }
                }
                "#}
            </style>
        </div>
    }
}
