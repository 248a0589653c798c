use log::info;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::milestones::Milestones;
use crate::components::quote_form::QuoteForm;
use crate::components::reveal::{Reveal, RevealKind};
use crate::components::services_tabs::ServicesTabs;
use crate::content;

fn hero() -> Html {
    html! {
        <section id="home" class="section hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <Reveal threshold={0.4}>
                        <h1>{"Construire des Ponts & Routes Durables"}</h1>
                    </Reveal>
                    <Reveal threshold={0.4} delay_ms={150}>
                        <p class="hero-lead">
                            {"De la conception à la réalisation, nous livrons des infrastructures \
                              robustes qui connectent les communautés et soutiennent l’économie régionale."}
                        </p>
                    </Reveal>
                    <Reveal threshold={0.4} delay_ms={300}>
                        <div class="hero-actions">
                            <a href="#projects" class="hero-button light">{"Voir nos projets"}</a>
                            <a href="#quote" class="hero-button dark">{"Demander un devis"}</a>
                        </div>
                    </Reveal>
                </div>

                <Reveal threshold={0.4} class="hero-media">
                    <div class="hero-frame">
                        <div class="hero-photo">
                            <img src="/images/bridge-1.jpg" alt="Pont moderne" />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <Reveal class="about-copy">
                    <h2>{"Excellence à chaque étape"}</h2>
                    <p>
                        {"Implantée en Côte d’Ivoire et en Guinée, Akwaba Construction conçoit et \
                          réalise des ponts, routes et ouvrages d’art avec une exigence de qualité, \
                          de sécurité et de durabilité. Notre équipe pluridisciplinaire accompagne \
                          les maîtres d’ouvrage publics et privés, de l’étude à la livraison."}
                    </p>
                    <ul class="about-checklist">
                        <li>{"✔️ 20+ ans d’expérience"}</li>
                        <li>{"✔️ Normes internationales"}</li>
                        <li>{"✔️ Ingénierie & design"}</li>
                        <li>{"✔️ Délais maîtrisés"}</li>
                    </ul>
                </Reveal>

                <Reveal class="about-media">
                    <img src="/images/about-1.jpg" alt="Équipe sur chantier" />
                </Reveal>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="section services">
            <div class="container">
                <Reveal>
                    <h2 class="section-title light">{"Solutions que nous offrons"}</h2>
                </Reveal>
                <div class="services-body">
                    <ServicesTabs />
                </div>
            </div>
        </section>
    }
}

fn projects() -> Html {
    html! {
        <section id="projects" class="section projects">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Nos Réalisations"}</h2>
                </Reveal>

                <div class="projects-grid">
                    { for content::PROJECTS.iter().enumerate().map(|(i, p)| html! {
                        <Reveal key={p.title} delay_ms={100 + i as u32 * 250} threshold={0.25} class="project-card">
                            <figure>
                                <div class="project-photo">
                                    <img src={p.image} alt={p.title} />
                                </div>
                                <figcaption>
                                    <h3>{ p.title }</h3>
                                    <p>{ p.text }</p>
                                </figcaption>
                            </figure>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn ceo() -> Html {
    html! {
        <section id="ceo" class="section ceo">
            <div aria-hidden="true" class="ceo-blobs">
                <svg viewBox="0 0 1200 800" preserveAspectRatio="xMidYMid slice">
                    <defs>
                        <radialGradient
                            id="blobA"
                            cx="0"
                            cy="0"
                            r="1"
                            gradientUnits="userSpaceOnUse"
                            gradientTransform="translate(280 260) rotate(18) scale(620 420)"
                        >
                            <stop stop-color="#214f7a" stop-opacity="0.80" />
                            <stop offset="1" stop-color="#214f7a" stop-opacity="0" />
                        </radialGradient>
                        <radialGradient
                            id="blobB"
                            cx="0"
                            cy="0"
                            r="1"
                            gradientUnits="userSpaceOnUse"
                            gradientTransform="translate(980 520) rotate(-22) scale(520 360)"
                        >
                            <stop stop-color="#214f7a" stop-opacity="0.40" />
                            <stop offset="1" stop-color="#214f7a" stop-opacity="0" />
                        </radialGradient>
                        <linearGradient id="wash" x1="0" y1="0" x2="0" y2="1">
                            <stop offset="0" stop-color="#214f7a" stop-opacity="0.06" />
                            <stop offset="1" stop-color="#214f7a" stop-opacity="0" />
                        </linearGradient>
                        <filter id="blur60">
                            <feGaussianBlur stdDeviation="40" />
                        </filter>
                    </defs>
                    <rect width="1200" height="800" fill="url(#wash)" />
                    <g filter="url(#blur60)">
                        <rect width="1200" height="800" fill="url(#blobA)" />
                        <rect width="1200" height="800" fill="url(#blobB)" />
                    </g>
                </svg>
            </div>

            <div class="container ceo-grid">
                <div class="ceo-intro">
                    <p class="ceo-kicker">{"PDG d'AKOUABA GROUP"}</p>
                    <h3>{"Mr. Moussa Marena"}</h3>
                </div>

                <div class="ceo-portrait-col">
                    <div class="ceo-portrait">
                        <img src="/images/akwaba-ceo.jpg" alt="CEO d’Akwaba Construction" />
                    </div>
                </div>

                <div class="ceo-vision">
                    <h4>{"« Notre vision »"}</h4>
                    <p>
                        {"« Chez Akouaba Group, nous bâtissons des ouvrages qui servent les \
                          communautés pendant des décennies. Notre priorité est simple : sécurité \
                          irréprochable, qualité mesurable et respect des délais. Nous investissons \
                          dans l’ingénierie, la formation et des contrôles rigoureux pour que chaque \
                          pont, route et ouvrage d’art améliore durablement la mobilité et la vie \
                          locale. »"}
                    </p>
                </div>
            </div>
        </section>
    }
}

fn team() -> Html {
    html! {
        <section id="team" class="section team">
            <div class="container">
                <Reveal class="team-intro">
                    <p class="team-kicker">{"Notre Équipe"}</p>
                    <p class="team-lead">
                        {"Des spécialistes passionnés par les infrastructures durables en \
                          Côte d’Ivoire et en Guinée."}
                    </p>
                </Reveal>

                <div class="team-grid">
                    { for content::TEAM.iter().enumerate().map(|(i, m)| html! {
                        <Reveal key={m.name} delay_ms={i as u32 * 160} class="team-card">
                            <article>
                                <div class="team-photo">
                                    <img src={m.image} alt={m.name} />
                                </div>
                                <div class="team-meta">
                                    <h3>{ m.name }</h3>
                                    <p>{ m.role }</p>
                                </div>
                            </article>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn quote() -> Html {
    html! {
        <section id="quote" class="section quote">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Demander un Devis"}</h2>
                </Reveal>

                <div class="quote-layout">
                    <Reveal>
                        <QuoteForm />
                    </Reveal>
                    <Reveal kind={RevealKind::Fade} class="quote-media">
                        <img src="/images/logo.png" alt="Contact Akwaba" />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Rendering home page");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="page">
            { hero() }
            { about() }
            <Milestones />
            { services() }
            { projects() }
            { ceo() }
            { team() }
            { quote() }
            <Footer />

            <style>
                {r#"
                :root {
                    --primary: #214f7a;
                    --amber: #fbbf24;
                    --ink: #0f172a;
                }

                * {
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: 'Poppins', system-ui, -apple-system, 'Segoe UI', sans-serif;
                    color: var(--ink);
                    -webkit-font-smoothing: antialiased;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 16px;
                }

                .section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 96px 0 48px;
                }

                .section-title {
                    font-size: 2rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 0;
                }

                .section-title.light {
                    color: #ffffff;
                }

                /* Scroll-driven reveals */
                .reveal {
                    will-change: opacity, transform;
                }

                .reveal-up {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                        transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .reveal-fade {
                    opacity: 0;
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }

                /* Hero */
                .hero {
                    position: relative;
                    background: var(--primary);
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 40px;
                    align-items: center;
                    padding-top: 96px;
                }

                .hero-copy {
                    color: #ffffff;
                }

                .hero-copy h1 {
                    font-size: 2.5rem;
                    font-weight: 800;
                    line-height: 1.15;
                    margin: 0;
                }

                .hero-lead {
                    margin-top: 16px;
                    font-size: 1.125rem;
                    opacity: 0.95;
                }

                .hero-actions {
                    margin-top: 32px;
                    display: flex;
                    gap: 16px;
                }

                .hero-button {
                    padding: 12px 20px;
                    border-radius: 4px;
                    text-decoration: none;
                    font-weight: 500;
                }

                .hero-button.light {
                    background: rgba(255, 255, 255, 0.9);
                    color: var(--ink);
                }

                .hero-button.light:hover {
                    background: #ffffff;
                }

                .hero-button.dark {
                    background: var(--ink);
                    color: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }

                .hero-button.dark:hover {
                    opacity: 0.9;
                }

                .hero-frame {
                    position: relative;
                    max-width: 576px;
                    margin: 0 auto;
                    border-radius: 36px;
                    background: #ffffff;
                    padding: 8px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .hero-frame::before {
                    content: '';
                    position: absolute;
                    inset: -8px;
                    border-radius: 44px;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    pointer-events: none;
                }

                .hero-photo {
                    height: 320px;
                    border-radius: 28px;
                    overflow: hidden;
                }

                .hero-photo img,
                .about-media img,
                .project-photo img,
                .ceo-portrait img,
                .team-photo img,
                .quote-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                /* About */
                .about {
                    background: #ffffff;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 40px;
                    align-items: center;
                    padding-top: 96px;
                }

                .about-copy h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    margin: 0;
                }

                .about-copy p {
                    margin-top: 16px;
                    color: #475569;
                }

                .about-checklist {
                    margin: 24px 0 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 12px;
                    font-size: 0.95rem;
                }

                .about-media {
                    height: 300px;
                    border-radius: 12px;
                    overflow: hidden;
                }

                /* Services */
                .services {
                    background: var(--primary);
                    scroll-margin-top: 112px;
                }

                .services-body {
                    margin-top: 40px;
                }

                /* Projects */
                .projects {
                    background: #ffffff;
                }

                .projects-grid {
                    margin-top: 48px;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                    justify-items: center;
                }

                .project-card {
                    width: 100%;
                    max-width: 420px;
                }

                .project-card figure {
                    margin: 0;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid #e2e8f0;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    transition: box-shadow 0.3s ease;
                }

                .project-card figure:hover {
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.1);
                }

                .project-photo {
                    height: 256px;
                }

                .project-card figcaption {
                    padding: 24px;
                }

                .project-card h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .project-card figcaption p {
                    margin: 4px 0 0;
                    font-size: 0.875rem;
                    color: #475569;
                }

                /* CEO */
                .ceo {
                    position: relative;
                    overflow: hidden;
                }

                .ceo-blobs {
                    position: absolute;
                    inset: -96px -80px;
                    z-index: -1;
                    pointer-events: none;
                }

                .ceo-blobs svg {
                    width: 100%;
                    height: 100%;
                }

                .ceo-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 40px;
                    align-items: center;
                    padding-top: 96px;
                }

                .ceo-kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin: 0;
                }

                .ceo-intro h3 {
                    margin: 12px 0 0;
                    font-size: 1.75rem;
                    font-style: italic;
                    font-weight: 500;
                }

                .ceo-portrait {
                    max-width: 640px;
                    margin: 0 auto;
                    height: 560px;
                    border-radius: 36px;
                    overflow: hidden;
                    background: #ffffff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    border: 1px solid rgba(0, 0, 0, 0.1);
                }

                .ceo-vision h4 {
                    margin: 0;
                    font-weight: 600;
                }

                .ceo-vision p {
                    margin-top: 12px;
                    color: #334155;
                }

                /* Team */
                .team {
                    background: linear-gradient(
                        90deg,
                        hsla(209, 57%, 30%, 1) 14%,
                        hsla(338, 75%, 64%, 1) 72%,
                        hsla(14, 92%, 86%, 1) 100%
                    );
                }

                .team-intro {
                    text-align: center;
                    color: #ffffff;
                }

                .team-kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 1.125rem;
                    opacity: 0.9;
                    margin: 0;
                }

                .team-lead {
                    margin: 12px auto 0;
                    max-width: 42rem;
                    opacity: 0.9;
                }

                .team-grid {
                    margin-top: 40px;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 20px;
                }

                .team-card article {
                    border-radius: 16px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.1);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                }

                .team-photo {
                    height: 192px;
                }

                .team-meta {
                    padding: 16px;
                    text-align: center;
                }

                .team-meta h3 {
                    margin: 0;
                    font-weight: 600;
                    color: var(--ink);
                }

                .team-meta p {
                    margin: 2px 0 0;
                    font-size: 0.875rem;
                    color: #475569;
                }

                /* Quote */
                .quote {
                    background: #f8fafc;
                }

                .quote-layout {
                    margin-top: 40px;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                }

                .quote-media {
                    height: 256px;
                    border-radius: 12px;
                    overflow: hidden;
                }

                @media (min-width: 640px) {
                    .project-photo { height: 288px; }
                    .team-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (min-width: 768px) {
                    html {
                        scroll-snap-type: y mandatory;
                    }

                    .section {
                        scroll-snap-align: start;
                        padding-top: 48px;
                    }

                    .site-footer {
                        scroll-snap-align: end;
                    }

                    .hero-grid,
                    .about-grid,
                    .quote-layout {
                        grid-template-columns: 1fr 1fr;
                    }

                    .hero-copy h1 { font-size: 3.5rem; }
                    .hero-photo { height: 420px; }
                    .about-media { height: 420px; }
                    .section-title { font-size: 2.25rem; }
                    .projects-grid { grid-template-columns: repeat(2, 1fr); }
                    .quote-media { height: auto; }

                    .ceo-grid {
                        grid-template-columns: 1fr 2fr 1fr;
                        padding-top: 0;
                    }

                    .ceo-portrait { height: 720px; }
                }

                @media (min-width: 1024px) {
                    .projects-grid { grid-template-columns: repeat(3, 1fr); }
                    .team-grid { grid-template-columns: repeat(3, 1fr); }
                }

                @media (min-width: 1280px) {
                    .team-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </main>
    }
}
