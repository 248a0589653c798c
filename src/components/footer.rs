use web_sys::js_sys;
use web_sys::SubmitEvent;
use yew::prelude::*;

/// Footer with brand line, contact details and the newsletter signup. The
/// signup is local-only: it prevents the browser submit and flips a flag.
#[function_component(Footer)]
pub fn footer() -> Html {
    let subscribed = use_state(|| false);

    let onsubmit = {
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            subscribed.set(true);
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer id="footer" class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Akwaba Construction"}</h3>
                    <p class="footer-muted">
                        {"Ponts, routes et infrastructures de confiance en Côte d’Ivoire et en Guinée."}
                    </p>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <p>{"Abidjan, CI • Conakry, GN"}</p>
                    <p>{"+225 00 00 00 00 • +224 000 00 00"}</p>
                    <p>{"contact@akwaba-construction.com"}</p>
                </div>

                <div>
                    <h4>{"Newsletter"}</h4>
                    {
                        if *subscribed {
                            html! { <p class="footer-ack">{"Merci, inscription confirmée !"}</p> }
                        } else {
                            html! {
                                <form class="footer-form" {onsubmit}>
                                    <input type="email" required={true} placeholder="Votre email" aria-label="Adresse email" />
                                    <button type="submit">{"S’inscrire"}</button>
                                </form>
                            }
                        }
                    }
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {} Akwaba Construction. Tous droits réservés.", year) }</p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: #e2e8f0;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 56px 16px;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                    align-items: start;
                }

                .site-footer h3 {
                    color: #ffffff;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0;
                }

                .site-footer h4 {
                    color: #ffffff;
                    font-weight: 600;
                    margin: 0 0 12px;
                }

                .site-footer p {
                    margin: 0 0 4px;
                    font-size: 0.9rem;
                }

                .footer-muted {
                    margin-top: 12px;
                    opacity: 0.8;
                    max-width: 48ch;
                }

                .footer-form {
                    display: flex;
                    gap: 8px;
                }

                .footer-form input {
                    flex: 1;
                    border: none;
                    border-radius: 4px;
                    padding: 8px 12px;
                    color: #0f172a;
                    font: inherit;
                }

                .footer-form button {
                    border: none;
                    border-radius: 4px;
                    padding: 8px 16px;
                    background: #214f7a;
                    color: #ffffff;
                    font: inherit;
                    cursor: pointer;
                }

                .footer-ack {
                    color: #a7f3d0;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .footer-bottom p {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 20px 16px;
                    font-size: 0.8rem;
                    opacity: 0.75;
                }

                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </footer>
    }
}
