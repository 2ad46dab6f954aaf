/// A floating tool badge, positioned in percent of the constellation box.
#[derive(Debug, Clone, PartialEq)]
pub struct TechIcon {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub x: f64,
    pub y: f64,
    /// Entrance delay in seconds.
    pub delay: f64,
    pub float_class: &'static str,
}

pub static TECH_ICONS: &[TechIcon] = &[
    TechIcon { name: "Premiere Pro", abbreviation: "Pr", x: 15.0, y: 25.0, delay: 0.0, float_class: "float-slow" },
    TechIcon { name: "DaVinci Resolve", abbreviation: "DR", x: 75.0, y: 20.0, delay: 0.2, float_class: "float-medium" },
    TechIcon { name: "After Effects", abbreviation: "Ae", x: 25.0, y: 70.0, delay: 0.4, float_class: "float-fast" },
    TechIcon { name: "Frame.io", abbreviation: "Fr", x: 85.0, y: 65.0, delay: 0.6, float_class: "float-slow" },
    TechIcon { name: "Notion", abbreviation: "N", x: 50.0, y: 45.0, delay: 0.8, float_class: "float-medium" },
    TechIcon { name: "Slack", abbreviation: "Sl", x: 40.0, y: 15.0, delay: 1.0, float_class: "float-fast" },
    TechIcon { name: "Figma", abbreviation: "Fi", x: 60.0, y: 75.0, delay: 1.2, float_class: "float-slow" },
    TechIcon { name: "Airtable", abbreviation: "At", x: 10.0, y: 50.0, delay: 1.4, float_class: "float-medium" },
];
