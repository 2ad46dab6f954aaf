#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub services: &'static [&'static str],
}

pub static SERVICE_PILLARS: &[ServicePillar] = &[
    ServicePillar {
        icon: "fas fa-film",
        title: "Post-Production",
        subtitle: "Craft & Polish",
        services: &["Advanced Editing", "Color Grading", "Sound Design"],
    },
    ServicePillar {
        icon: "fas fa-gear",
        title: "Operations",
        subtitle: "Systems & Workflow",
        services: &["Workflow Architecture", "Asset Management", "Festival Deliverables"],
    },
    ServicePillar {
        icon: "fas fa-arrow-trend-up",
        title: "Digital Growth",
        subtitle: "Scale & Preserve",
        services: &[
            "Cultural Archive Digitization",
            "Social-First Video Strategy",
            "Content Optimization",
        ],
    },
];

/// Audiences listed under the hero headline.
pub static TRUST_BADGES: &[(&str, &str)] = &[
    ("fas fa-film", "Cinemas"),
    ("fas fa-clapperboard", "Cultural organizations"),
    ("fas fa-landmark", "Production companies"),
];
