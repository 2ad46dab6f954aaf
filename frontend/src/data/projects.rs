#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cinema,
    PostProduction,
    Operations,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cinema, Category::PostProduction, Category::Operations];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Cinema => "cinema",
            Category::PostProduction => "post-prod",
            Category::Operations => "operations",
        }
    }

    /// Badge text in the project overlay.
    pub fn label(self) -> &'static str {
        match self {
            Category::Cinema => "Cinema & Culture",
            Category::PostProduction => "Post-Production",
            Category::Operations => "Operations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Cinema => "fas fa-play",
            Category::PostProduction => "fas fa-layer-group",
            Category::Operations => "fas fa-calendar",
        }
    }
}

/// Gallery selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Work",
            CategoryFilter::Only(Category::Cinema) => "Cinema & Culture",
            CategoryFilter::Only(Category::PostProduction) => "Post-Prod & Polish",
            CategoryFilter::Only(Category::Operations) => "Operations & Strategy",
        }
    }
}

/// Filter buttons, in display order.
pub const FILTERS: [CategoryFilter; 4] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::Cinema),
    CategoryFilter::Only(Category::PostProduction),
    CategoryFilter::Only(Category::Operations),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub details: Option<&'static str>,
    pub image: &'static str,
    pub video: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    pub organization: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub role: Option<&'static str>,
    pub link: &'static str,
}

impl Project {
    pub fn description(&self) -> &'static str {
        self.details.unwrap_or(self.summary)
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

/// Projects matching `filter`, in table order.
pub fn filter_projects(filter: CategoryFilter, table: &[Project]) -> Vec<&Project> {
    table.iter().filter(|project| filter.matches(project.category)).collect()
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 11,
        title: "The 31st European Film Weeks",
        category: Category::Operations,
        summary: "Strategic curation and audience engagement for a nationwide cinematic tour",
        details: Some("A comprehensive curation mockup for the 31st edition of European Film Weeks in Morocco. This project focuses on \"Neo-Noir in the 21st Century,\" selecting 8 flagship films that bridge European technical style with Mediterranean narratives. Includes a complete digital identity: newsletter layouts, audience engagement graphics, and a strategic plan for post-screening talkbacks to increase event retention."),
        image: "/assets/images/program_poster.png",
        video: None,
        tags: &["Curation", "Event Design", "Cultural Mediation", "Newsletter Strategy"],
        year: "2026",
        organization: Some("EU Delegation to Morocco / Cultural Centers"),
        duration: Some("2 months"),
        role: Some("Head Curator & Programmer"),
        link: "https://drive.google.com/file/d/1U_yREjoiZJhzOilUpW9dnWEpCaTUHi4l/view?usp=sharing",
    },
    Project {
        id: 12,
        title: "The Gnawa Resonance",
        category: Category::PostProduction,
        summary: "Strategic ethnographic dossier on Trans-Saharan musical diaspora",
        details: Some("A comprehensive production \"intel\" dossier mapping the \"Route of Souls\" from West Africa to Morocco. This project synthesizes the historical, musical, and spiritual DNA of Gnawa culture into a visual pre-production bible for non-fiction filmmakers and cultural organizations."),
        image: "/assets/images/program_poster2.png",
        video: None,
        tags: &["Cultural Strategy", "Ethnography", "Canva", "Archive Research"],
        year: "2025",
        organization: Some("Independent Research Project"),
        duration: Some("3 months"),
        role: Some("Cultural Researcher & Strategist"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 13,
        title: "The Workflow Architecture",
        category: Category::Operations,
        summary: "A visual architecture for high-volume media asset management",
        details: Some("An end-to-end technical blueprint designed for documentary production houses. This project maps the movement of data from the camera sensor to long-term cold storage. It includes a custom naming convention standard, proxy workflow for remote editing, and a multi-stage backup protocol (3-2-1 rule) to ensure zero data loss."),
        image: "/assets/images/program_poster4.png",
        video: None,
        tags: &["Notion", "Airtable", "Frame.io", "Workflow Design"],
        year: "2025",
        organization: Some("Internal Systems Lab"),
        duration: Some("1 month"),
        role: Some("Workflow Architect"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 14,
        title: "The Chromatic Narrative",
        category: Category::PostProduction,
        summary: "Technical color grading showcase: Transforming LOG footage into cinematic moods",
        details: Some("A comprehensive study in visual storytelling through color. This project demonstrates the transformation of raw, high-dynamic-range LOG footage into three distinct cinematic looks: \"Sahara Gold\" (Warm/Heritage), \"Atlas Dusk\" (Cool/Melancholy), and \"Street Verité\" (Neutral/Organic). Focus on skin tone preservation and color consistency across multiple cameras."),
        image: "/assets/images/program_poster3.png",
        video: Some("https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"),
        tags: &["DaVinci Resolve", "Color Grading", "Post-Production"],
        year: "2024",
        organization: Some("Technical Craft Series"),
        duration: Some("2 weeks"),
        role: Some("Colorist"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 15,
        title: "The \"One-to-Many\" Social Engine",
        category: Category::Cinema,
        summary: "A multi-platform optimization framework for long-form cinema",
        details: Some("A case study in asset multiplication. This project demonstrates how one 60-minute documentary or interview is systematically \"sliced\" into 20+ high-performing vertical assets. It covers hook-point analysis, mobile-first color grading, and automated captioning workflows to maximize organic reach and audience retention."),
        image: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=800&q=80",
        video: None,
        tags: &["Social-First", "Content Strategy", "Adobe Premiere", "CapCut Desktop"],
        year: "2025",
        organization: Some("Digital Growth Lab"),
        duration: Some("Ongoing"),
        role: Some("Content Strategist / Lead Editor"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 16,
        title: "The Impact Blueprint",
        category: Category::Operations,
        summary: "A strategic campaign dossier designed to drive legislative and social change",
        details: Some("A professional impact producing framework created for a documentary on environmental sustainability. This project includes a detailed audience targeting map, a partnership ecosystem of 15+ NGOs, and a \"Call-to-Action\" funnel designed to turn viewers into advocates. It utilizes a 2026 \"Social ROI\" metric to prove the tangible effect of storytelling on public policy."),
        image: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&q=80",
        video: None,
        tags: &["Impact Producing", "Advocacy Strategy", "Campaign Design", "Public Policy"],
        year: "2026",
        organization: Some("Earth Advocacy Media"),
        duration: Some("6 months"),
        role: Some("Impact Producer"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 17,
        title: "The Visual Identity & Brand Bible",
        category: Category::Cinema,
        summary: "A comprehensive branding framework for independent film properties",
        details: Some("A master design system created for a high-end cinematic series. This project involved the development of a custom typographic system, color theory application, and a visual tone-of-voice guide. It ensures that every touchpoint, from the film poster to the social media assets, maintains a cohesive, premium aesthetic that appeals to Tier-1 festival programmers."),
        image: "https://images.unsplash.com/photo-1509343256512-d77a5cb3791b?w=800&q=80",
        video: None,
        tags: &["Creative Direction", "Typography", "Brand Strategy", "Adobe Illustrator"],
        year: "2025",
        organization: Some("Aesthetic Cinema Lab"),
        duration: Some("3 months"),
        role: Some("Creative Director"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 18,
        title: "The Hybrid Stream Architecture",
        category: Category::Operations,
        summary: "Engineering a low-latency, multi-camera remote production pipeline",
        details: Some("A technical blueprint for a high-end hybrid event. This project involved designing a 4-camera SRT (Secure Reliable Transport) pipeline to connect remote interviewees in London and New York to a central hub in Morocco. The system prioritized 1080p60 quality with sub-500ms latency, utilizing hardware encoders and a cloud-based video switcher for global distribution."),
        image: "https://images.unsplash.com/photo-1540655037529-dec987208707?w=800&q=80",
        video: None,
        tags: &["SRT Protocol", "vMix", "Cloud Production", "Network Engineering"],
        year: "2026",
        organization: Some("Real-Time Media Group"),
        duration: Some("1 month"),
        role: Some("Technical Director"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
    Project {
        id: 19,
        title: "The Media Mentorship Framework",
        category: Category::Cinema,
        summary: "An internal training system for standardizing cinematic quality across junior teams",
        details: Some("A comprehensive curriculum and SOP (Standard Operating Procedure) library developed to onboard junior editors and camera operators. This project includes interactive workshops on \"The Moroccan Aesthetic,\" technical guides for data management, and a peer-review system that ensures all studio output meets Tier-1 international standards."),
        image: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=800&q=80",
        video: None,
        tags: &["Team Leadership", "SOP Design", "Creative Direction", "Talent Development"],
        year: "2026",
        organization: Some("Cinema Academy Morocco"),
        duration: Some("Ongoing"),
        role: Some("Head of Content / Lead Mentor"),
        link: "https://drive.google.com/file/d/YOUR_LINK_HERE/view?usp=sharing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_the_whole_table_in_order() {
        let all = filter_projects(CategoryFilter::All, PROJECTS);
        assert_eq!(all.len(), PROJECTS.len());
        assert_eq!(ids(&all), PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn single_category_keeps_table_order() {
        let operations = filter_projects(CategoryFilter::Only(Category::Operations), PROJECTS);
        assert_eq!(ids(&operations), vec![11, 13, 16, 18]);

        let post = filter_projects(CategoryFilter::Only(Category::PostProduction), PROJECTS);
        assert_eq!(ids(&post), vec![12, 14]);
    }

    #[test]
    fn every_filter_yields_an_ordered_subsequence() {
        for filter in FILTERS {
            let picked = filter_projects(filter, PROJECTS);
            let mut table = PROJECTS.iter();
            for project in &picked {
                assert!(filter.matches(project.category));
                assert!(table.any(|p| p.id == project.id), "{:?} out of order", filter);
            }
            let expected = PROJECTS.iter().filter(|p| filter.matches(p.category)).count();
            assert_eq!(picked.len(), expected);
        }
    }

    #[test]
    fn categories_partition_the_table() {
        let total: usize = Category::ALL
            .iter()
            .map(|c| filter_projects(CategoryFilter::Only(*c), PROJECTS).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn unmatched_category_gives_empty_result() {
        let only_cinema = &PROJECTS[4..5];
        assert!(filter_projects(CategoryFilter::Only(Category::Operations), only_cinema).is_empty());
        assert!(filter_projects(CategoryFilter::All, &[]).is_empty());
    }

    #[test]
    fn ids_are_unique_and_lookup_works() {
        let mut seen: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PROJECTS.len());
        assert_eq!(find_project(14).map(|p| p.title), Some("The Chromatic Narrative"));
        assert!(find_project(1).is_none());
    }

    #[test]
    fn description_falls_back_to_summary() {
        let mut project = PROJECTS[0].clone();
        assert_eq!(project.description(), project.details.unwrap());
        project.details = None;
        assert_eq!(project.description(), project.summary);
        assert!(find_project(14).unwrap().has_video());
    }

    #[test]
    fn filter_slugs_match_category_slugs() {
        let slugs: Vec<&str> = FILTERS.iter().map(|f| f.slug()).collect();
        assert_eq!(slugs, vec!["all", "cinema", "post-prod", "operations"]);
    }
}
