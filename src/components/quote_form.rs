use gloo_timers::callback::Timeout;
use log::info;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::config;
use crate::content;

/// Quote request form. Submission never leaves the page: default handling
/// is prevented and a local acknowledgment is shown for a few seconds.
#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let submitted = use_state(|| false);

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("quote request acknowledged locally");
            submitted.set(true);
        })
    };

    // Auto-dismiss the acknowledgment; cancelled if the form unmounts first.
    {
        let submitted = submitted.clone();
        let shown = *submitted;
        use_effect_with_deps(
            move |shown| {
                let timeout = shown.then(|| {
                    let submitted = submitted.clone();
                    Timeout::new(config::FORM_ACK_DISMISS_MS, move || submitted.set(false))
                });
                move || {
                    if let Some(timeout) = timeout {
                        timeout.cancel();
                    }
                }
            },
            shown,
        );
    }

    html! {
        <form class="quote-form" {onsubmit}>
            <div class="quote-grid">
                <input required={true} placeholder="Nom complet" />
                <input required={true} type="email" placeholder="Email" />
                <input class="span-2" placeholder="Téléphone" />
                <select class="span-2" required={true}>
                    <option value="" disabled={true} selected={true}>{"Choisir un service"}</option>
                    { for content::SERVICES.iter().map(|s| html! {
                        <option key={s.id.as_str()} value={s.id.as_str()}>{ s.title }</option>
                    }) }
                </select>
                <textarea class="span-2" rows="5" placeholder="Décrivez votre projet..."></textarea>
            </div>

            <button type="submit" class="quote-submit">{"Envoyer la demande"}</button>

            {
                if *submitted {
                    html! {
                        <p class="quote-ack" role="status">
                            {"Merci ! Nous vous contacterons rapidement."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .quote-form {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 24px;
                    border: 1px solid #e2e8f0;
                }

                .quote-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 16px;
                }

                .quote-form input,
                .quote-form select,
                .quote-form textarea {
                    border: 1px solid #e2e8f0;
                    border-radius: 4px;
                    padding: 8px 12px;
                    font: inherit;
                    color: #0f172a;
                }

                .quote-submit {
                    margin-top: 24px;
                    padding: 12px 20px;
                    border: none;
                    border-radius: 4px;
                    background: #214f7a;
                    color: #ffffff;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                }

                .quote-submit:hover {
                    opacity: 0.92;
                }

                .quote-ack {
                    margin: 16px 0 0;
                    padding: 12px 16px;
                    border-radius: 8px;
                    background: #ecfdf5;
                    border: 1px solid #a7f3d0;
                    color: #065f46;
                    animation: ackIn 0.3s ease-out;
                }

                @keyframes ackIn {
                    from { opacity: 0; transform: translateY(6px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (min-width: 768px) {
                    .quote-grid { grid-template-columns: 1fr 1fr; }
                    .quote-grid .span-2 { grid-column: span 2; }
                }
                "#}
            </style>
        </form>
    }
}
