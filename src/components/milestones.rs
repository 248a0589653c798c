use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::reveal::{Reveal, RevealKind};
use crate::content;

/// Company figures banner. Stacked cards on mobile, a full-width band on
/// desktop; each figure counts up once when it scrolls into view.
#[function_component(Milestones)]
pub fn milestones() -> Html {
    let figure = |m: &content::Milestone| {
        html! {
            <>
                <div class="milestone-value">
                    <CountUp to={m.target} />
                    <span>{ m.suffix }</span>
                </div>
                <p class="milestone-label">{ m.label }</p>
            </>
        }
    };

    html! {
        <section id="milestones" aria-label="Nos chiffres">
            <div class="milestones-mobile">
                { for content::MILESTONES.iter().enumerate().map(|(i, m)| html! {
                    <Reveal key={m.label} delay_ms={(i as u32 + 1) * 100} class="milestone-card">
                        { figure(m) }
                    </Reveal>
                }) }
            </div>

            <div class="milestones-band">
                <Reveal kind={RevealKind::FadeUp} threshold={0.3}>
                    <div class="milestones-grid">
                        { for content::MILESTONES.iter().map(|m| html! {
                            <div key={m.label} class="milestone-cell">
                                { figure(m) }
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .milestones-mobile {
                    max-width: 1200px;
                    margin: -64px auto 0;
                    padding: 0 16px;
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .milestone-card {
                    border-radius: 16px;
                    background: #214f7a;
                    color: #ffffff;
                    padding: 24px;
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                }

                .milestone-value {
                    font-size: 2.25rem;
                    font-weight: 800;
                    letter-spacing: -0.02em;
                }

                .milestone-label {
                    margin: 4px 0 0;
                    color: rgba(255, 255, 255, 0.9);
                }

                .milestones-band {
                    display: none;
                    background: #214f7a;
                    color: #ffffff;
                }

                .milestones-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                }

                .milestone-cell {
                    padding: 32px;
                    text-align: center;
                }

                .milestone-cell + .milestone-cell {
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                }

                @media (min-width: 768px) {
                    .milestones-mobile { display: none; }
                    .milestones-band { display: block; }
                    .milestone-value { font-size: 2.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
