//! Static site content: navigation links, the service catalog, projects,
//! team and milestone figures. All copy is French, matching the audience.

use crate::controllers::tabs::ServiceId;

#[derive(Clone, Copy, PartialEq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

/// Links shown in the navbar. The quote CTA is rendered separately.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "home", label: "Accueil" },
    NavLink { anchor: "about", label: "À propos" },
    NavLink { anchor: "services", label: "Services" },
    NavLink { anchor: "projects", label: "Projets" },
];

/// Every section id the scroll spy observes, in page order. The first entry
/// is the default active anchor.
pub const SECTION_IDS: &[&str] = &[
    "home", "about", "services", "projects", "ceo", "team", "quote",
];

#[derive(Clone, Copy, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
    /// CSS object-position fine-tuning the image crop.
    pub object_position: &'static str,
    pub bullets_left: &'static [&'static str],
    pub bullets_right: &'static [&'static str],
}

pub const SERVICES: &[Service; 3] = &[
    Service {
        id: ServiceId::Ponts,
        title: "Construction de Ponts",
        blurb: "Conception et réalisation d’ouvrages d’art durables : fondations, \
                superstructures, tabliers et équipements.",
        image: "/images/services-1.jpg",
        object_position: "50% 50%",
        bullets_left: &["Ponts routiers", "Ouvrages d’art", "Appareils d’appui"],
        bullets_right: &["Passerelles", "Tabliers & culées", "Étanchéité & joints"],
    },
    Service {
        id: ServiceId::Voiries,
        title: "Routes & Voiries",
        blurb: "Traçage, terrassement, drainage, revêtements et signalisation pour \
                routes urbaines et interurbaines.",
        image: "/images/services-2.jpg",
        object_position: "50% 50%",
        bullets_left: &["Routes urbaines", "Routes interurbaines", "Ronds-points"],
        bullets_right: &["Drainage & assainissement", "Signalisation", "Revêtements"],
    },
    Service {
        id: ServiceId::Etudes,
        title: "Études & Conseil",
        blurb: "Études techniques, management de projet, contrôle qualité & sécurité \
                (HSE) de bout en bout.",
        image: "/images/services-3.jpg",
        // Nudge the crop upward so the subject's head stays in frame.
        object_position: "35% 5%",
        bullets_left: &["Ingénierie", "Pilotage", "Contrôle HSE"],
        bullets_right: &["Optimisation coûts/délais", "Audit technique", "AMO/MOE"],
    },
];

/// Total lookup: `ServiceId` is closed, so every id has a catalog entry.
pub fn service(id: ServiceId) -> &'static Service {
    SERVICES
        .iter()
        .find(|service| service.id == id)
        .unwrap_or(&SERVICES[0])
}

#[derive(Clone, Copy, PartialEq)]
pub struct Milestone {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { target: 20, suffix: "+", label: "ans d'expérience" },
    Milestone { target: 1000, suffix: "+", label: "projets" },
    Milestone { target: 85, suffix: "%", label: "clients satisfaits" },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        image: "/images/projects-1.jpg",
        title: "Pont côtier - Abidjan",
        text: "Ouvrage d’art reliant deux communes.",
    },
    Project {
        image: "/images/projects-2.jpg",
        title: "Route nationale - Kindia",
        text: "Réhabilitation sur 45 km, drainage complet.",
    },
    Project {
        image: "/images/projects-3.jpg",
        title: "Passerelle urbaine - Conakry",
        text: "Sécurité piétonne et fluidité du trafic.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Aïcha Kouamé", role: "Cheffe de projet", image: "/images/aicha.jpg" },
    TeamMember { name: "Moussa Camara", role: "Ingénieur civil", image: "/images/moussa.webp" },
    TeamMember { name: "Fatou Diarra", role: "Architecte", image: "/images/fatou.jpg" },
    TeamMember { name: "Ibrahima Touré", role: "Responsable HSE", image: "/images/ibrahima.webp" },
    TeamMember { name: "Nana Traoré", role: "Conductrice de travaux", image: "/images/nana.jpg" },
    TeamMember { name: "Sékou Diallo", role: "Topographe", image: "/images/sekou.jpg" },
    TeamMember { name: "Mariame Bamba", role: "Cheffe de chantier", image: "/images/mariame.webp" },
    TeamMember { name: "Yao N’Guessan", role: "Dessinatrice", image: "/images/yao.webp" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_id_has_a_catalog_entry() {
        for id in ServiceId::ALL {
            assert_eq!(service(id).id, id);
        }
    }

    #[test]
    fn nav_links_point_at_observed_sections() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.anchor),
                "nav link {} has no matching section",
                link.anchor
            );
        }
    }
}
