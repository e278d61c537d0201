//! Showreel categories, the services catalog and the portfolio filter.

use fnv::FnvHashMap;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;

/// Portfolio / showreel filter. `all` matches every item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => Filter::All,
            other => Filter::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(c) => c,
        }
    }

    /// Items without a category only show under `all`.
    pub fn shows(&self, item_category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => item_category == Some(c.as_str()),
        }
    }
}

/// Counts filter applications so delayed show/hide steps from an earlier
/// click can tell they have been superseded. Clones share the counter.
#[derive(Clone, Debug, Default)]
pub struct FilterEpoch(Rc<Cell<u64>>);

impl FilterEpoch {
    /// Start a new application; returns its ticket.
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    #[inline]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

pub fn category_message(filter: &Filter) -> String {
    let scope = match filter {
        Filter::All => "complete portfolio".to_string(),
        Filter::Category(c) => format!("{c} portfolio"),
    };
    format!(
        "🎯 Filtering showreel by: {}\n\nShowing projects from our {}.",
        filter.as_str().to_uppercase(),
        scope
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDetails {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 5],
}

impl ServiceDetails {
    pub fn message(&self) -> String {
        let features = self
            .features
            .iter()
            .map(|f| format!("• {f}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "🎬 {title}\n\n{desc}\n\n✨ Key Features:\n{features}\n\n🚀 Ready to bring your vision to life? Contact us to discuss your {lower} needs!",
            title = self.title,
            desc = self.description,
            lower = self.title.to_lowercase(),
        )
    }
}

const SERVICES: [(&str, ServiceDetails); 6] = [
    (
        "compositing",
        ServiceDetails {
            title: "VFX Compositing",
            description: "Industry-leading compositing techniques for seamless integration of multiple visual elements including live-action footage, CGI, and practical effects.",
            features: [
                "Multi-layer compositing and blending",
                "Color correction and grading integration",
                "Digital matte painting compositing",
                "Atmospheric and lighting effects",
                "Final shot assembly and delivery",
            ],
        },
    ),
    (
        "environments",
        ServiceDetails {
            title: "Digital Environments",
            description: "Breathtaking digital worlds and set extensions that transport audiences to impossible locations.",
            features: [
                "Photorealistic environment creation",
                "Set extension and augmentation",
                "Matte paintings and digital backdrops",
                "3D environment modeling and lighting",
                "Weather and atmospheric effects",
            ],
        },
    ),
    (
        "characters",
        ServiceDetails {
            title: "Character Animation",
            description: "Lifelike digital characters and creatures that deliver compelling performances.",
            features: [
                "Motion capture and facial animation",
                "Keyframe character animation",
                "Creature design and rigging",
                "Performance capture integration",
                "Digital double creation",
            ],
        },
    ),
    (
        "virtual",
        ServiceDetails {
            title: "Virtual Production",
            description: "Next-generation filmmaking technology for real-time rendering and LED wall integration.",
            features: [
                "Real-time rendering pipelines",
                "LED wall content creation",
                "Virtual camera systems",
                "Live compositing workflows",
                "On-set visualization tools",
            ],
        },
    ),
    (
        "particles",
        ServiceDetails {
            title: "Particle Effects",
            description: "Dynamic simulations for fire, water, destruction, and magical effects.",
            features: [
                "Fluid simulation (water, smoke, fire)",
                "Destruction and debris systems",
                "Magical and supernatural effects",
                "Weather simulation systems",
                "Custom particle behaviors",
            ],
        },
    ),
    (
        "grading",
        ServiceDetails {
            title: "Color Grading",
            description: "Professional color correction and creative grading for enhanced visual storytelling.",
            features: [
                "Technical color correction",
                "Creative look development",
                "HDR and wide gamut workflows",
                "Match grading and consistency",
                "Final delivery formatting",
            ],
        },
    ),
];

fn catalog() -> &'static FnvHashMap<&'static str, ServiceDetails> {
    static CATALOG: OnceLock<FnvHashMap<&'static str, ServiceDetails>> = OnceLock::new();
    CATALOG.get_or_init(|| SERVICES.iter().cloned().collect())
}

/// Look up a service card's `data-service` slug.
pub fn service_details(slug: &str) -> Option<&'static ServiceDetails> {
    catalog().get(slug)
}

/// Text scraped from a clicked portfolio item; missing parts fall back to labels.
#[derive(Clone, Debug, Default)]
pub struct ProjectCard {
    pub title: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
}

impl ProjectCard {
    pub fn message(&self) -> String {
        let pick = |v: &Option<String>, fallback: &'static str| -> String {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        format!(
            "🎬 {}\n\n{}\nCategory: {}\n\n✨ Project Highlights:\n• Award-winning visual effects work\n• Collaboration with industry leaders\n• Cutting-edge VFX techniques\n• Photorealistic results\n• Seamless integration with live-action\n\n🚀 Interested in similar work? Contact us to discuss your project vision!",
            pick(&self.title, "Project"),
            pick(&self.client, "Client"),
            pick(&self.category, "Category"),
        )
    }
}

pub const SHOWREEL_LOADED_MESSAGE: &str = "🎬 Showreel Demo Loaded\n\nThis premium showreel would showcase our latest VFX work including blockbuster films, commercial projects, and cutting-edge visual effects demonstrations.";
