use std::{collections::HashSet, fmt, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::routes;

pub static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("embedded content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error("stat value {0:?} must start with a whole number")]
    BadStat(String),
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
    #[error("duplicate service slug {0:?}")]
    DuplicateService(String),
    #[error("service slug must not be empty")]
    EmptySlug,
    #[error("testimonial {id} has rating {rating}, expected 0-5")]
    RatingOutOfRange { id: u32, rating: u8 },
    #[error("skill {name:?} has level {level}, expected 0-100")]
    LevelOutOfRange { name: String, level: u8 },
    #[error("there must be at least one testimonial")]
    NoTestimonials,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub demo_link: String,
    pub source_link: String,
}

impl Project {
    pub fn path(&self) -> String {
        routes::project_path(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
    pub rating: u8,
    pub project: String,
}

pub const MAX_RATING: u8 = 5;

impl Testimonial {
    pub fn role(&self) -> String {
        format!("{}, {}", self.position, self.company)
    }

    /// One flag per star slot, `true` where the star is filled.
    pub fn star_slots(rating: u8) -> [bool; MAX_RATING as usize] {
        std::array::from_fn(|i| i < rating as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Code,
    Palette,
    Smartphone,
    Globe,
    Zap,
    Briefcase,
}

impl ServiceIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Code => "💻",
            ServiceIcon::Palette => "🎨",
            ServiceIcon::Smartphone => "📱",
            ServiceIcon::Globe => "🌐",
            ServiceIcon::Zap => "⚡",
            ServiceIcon::Briefcase => "💼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub basic: String,
    pub standard: String,
    pub premium: String,
}

impl Pricing {
    pub fn tiers(&self) -> [(&'static str, &str); 3] {
        [
            ("Basic", &self.basic),
            ("Standard", &self.standard),
            ("Premium", &self.premium),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub icon: ServiceIcon,
    pub highlights: Vec<String>,
    pub description: String,
    pub process: Vec<ProcessStep>,
    pub technologies: Vec<String>,
    pub benefits: Vec<String>,
    pub pricing: Pricing,
    pub faqs: Vec<Faq>,
}

impl Service {
    pub fn path(&self) -> String {
        routes::service_path(&self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedSkill {
    pub name: String,
    pub level: u8,
    pub color: String,
}

/// Radius of the progress ring drawn for a featured skill.
pub const SKILL_RING_RADIUS: f64 = 40.0;

impl FeaturedSkill {
    pub fn circumference() -> f64 {
        2.0 * std::f64::consts::PI * SKILL_RING_RADIUS
    }

    /// Stroke offset that leaves `level` percent of the ring drawn.
    pub fn dash_offset(&self) -> f64 {
        let circumference = Self::circumference();
        circumference - (self.level as f64 / 100.0) * circumference
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub featured: Vec<FeaturedSkill>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: StatValue,
    pub label: String,
}

/// A counter such as `50+` or `95%`, split into the number that counts up and
/// the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatValue {
    pub target: u32,
    pub suffix: String,
}

impl StatValue {
    /// The counter as it reads partway through counting up.
    pub fn at(&self, current: u32) -> String {
        format!("{current}{}", self.suffix)
    }
}

impl TryFrom<String> for StatValue {
    type Error = ContentError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let target = raw[..split]
            .parse()
            .map_err(|_| ContentError::BadStat(raw.clone()))?;
        Ok(Self {
            target,
            suffix: raw[split..].to_string(),
        })
    }
}

impl From<StatValue> for String {
    fn from(value: StatValue) -> Self {
        value.to_string()
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.target, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub value: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub home_stats: Vec<Stat>,
    pub review_stats: Vec<Stat>,
    pub timeline: Vec<TimelineEntry>,
    pub process_steps: Vec<NumberedStep>,
    pub contact_channels: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
        }
    }
}

/// Outcome of looking up `/services/:slug`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceRoute<'a> {
    Detail(&'a Service),
    Redirect(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    pub skills: Skills,
    pub site: Site,
}

fn read<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}

impl Catalog {
    pub fn load() -> Result<Self, ContentError> {
        let catalog = Self {
            projects: read("projects.json")?,
            testimonials: read("testimonials.json")?,
            services: read("services.json")?,
            skills: read("skills.json")?,
            site: read("site.json")?,
        };
        catalog.validate()?;
        log::debug!(
            "content loaded: {} projects, {} services, {} testimonials",
            catalog.projects.len(),
            catalog.services.len(),
            catalog.testimonials.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        if let Some(p) = self.projects.iter().find(|p| !ids.insert(p.id)) {
            return Err(ContentError::DuplicateProject(p.id));
        }

        let mut slugs = HashSet::new();
        for service in &self.services {
            if service.slug.is_empty() {
                return Err(ContentError::EmptySlug);
            }
            if !slugs.insert(service.slug.as_str()) {
                return Err(ContentError::DuplicateService(service.slug.clone()));
            }
        }

        if self.testimonials.is_empty() {
            return Err(ContentError::NoTestimonials);
        }
        if let Some(t) = self.testimonials.iter().find(|t| t.rating > MAX_RATING) {
            return Err(ContentError::RatingOutOfRange {
                id: t.id,
                rating: t.rating,
            });
        }

        let levels = self
            .skills
            .categories
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| (&s.name, s.level)))
            .chain(self.skills.featured.iter().map(|s| (&s.name, s.level)));
        for (name, level) in levels {
            if level > 100 {
                return Err(ContentError::LevelOutOfRange {
                    name: name.clone(),
                    level,
                });
            }
        }
        Ok(())
    }

    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Unknown slugs send the visitor back to the listing instead of an error
    /// page.
    pub fn resolve_service(&self, slug: &str) -> ServiceRoute<'_> {
        match self.service(slug) {
            Some(service) => ServiceRoute::Detail(service),
            None => ServiceRoute::Redirect(routes::SERVICES),
        }
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Parses the raw `:id` route segment before looking it up.
    pub fn project_by_param(&self, param: &str) -> Option<&Project> {
        param.parse().ok().and_then(|id| self.project(id))
    }

    pub fn projects(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Up to `limit` projects for the home page: featured ones first, topped
    /// up with the rest in catalog order.
    pub fn showcase_projects(&self, limit: usize) -> Vec<&Project> {
        let (featured, rest): (Vec<_>, Vec<_>) = self.projects.iter().partition(|p| p.featured);
        featured.into_iter().chain(rest).take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_loads() {
        let catalog = catalog();
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.testimonials.len(), 6);
        assert_eq!(catalog.services.len(), 6);
        assert_eq!(catalog.skills.categories.len(), 4);
        assert_eq!(catalog.site.process_steps.len(), 6);
        assert_eq!(*CATALOG, catalog);
    }

    #[test]
    fn test_service_slug_resolution() {
        let catalog = catalog();
        match catalog.resolve_service("web-development") {
            ServiceRoute::Detail(service) => {
                assert_eq!(service.title, "Web Development");
                assert_eq!(service.path(), "/services/web-development");
            }
            ServiceRoute::Redirect(_) => panic!("web-development should resolve"),
        }
        assert_eq!(
            catalog.resolve_service("does-not-exist"),
            ServiceRoute::Redirect("/services")
        );
    }

    #[test]
    fn test_every_service_is_complete() {
        for service in &catalog().services {
            assert!(!service.process.is_empty(), "{}", service.slug);
            assert!(!service.technologies.is_empty(), "{}", service.slug);
            assert!(!service.benefits.is_empty(), "{}", service.slug);
            assert!(!service.faqs.is_empty(), "{}", service.slug);
            assert_eq!(service.pricing.tiers()[0].0, "Basic");
        }
    }

    #[test]
    fn test_project_filters() {
        let catalog = catalog();
        assert_eq!(catalog.projects(ProjectFilter::All).len(), 6);
        let featured = catalog.projects(ProjectFilter::Featured);
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_home_showcase_fills_four_slots() {
        let catalog = catalog();
        let titles = catalog
            .showcase_projects(4)
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "E-commerce Platform",
                "SaaS Dashboard",
                "Mobile App UI",
                "Portfolio Website"
            ]
        );
        assert_eq!(catalog.showcase_projects(2).len(), 2);
        assert_eq!(catalog.showcase_projects(10).len(), 6);
    }

    #[test]
    fn test_stat_values_split_number_and_suffix() {
        let catalog = catalog();
        let first = &catalog.site.home_stats[0].value;
        assert_eq!((first.target, first.suffix.as_str()), (50, "+"));
        assert_eq!(first.at(17), "17+");
        assert_eq!(first.to_string(), "50+");

        let plain = StatValue::try_from("12".to_string()).expect("digits only");
        assert_eq!((plain.target, plain.suffix.as_str()), (12, ""));
        let percent = StatValue::try_from("95%".to_string()).expect("percent");
        assert_eq!(percent.at(95), "95%");

        assert_eq!(
            StatValue::try_from("many".to_string()),
            Err(ContentError::BadStat("many".to_string()))
        );
        assert!(serde_json::from_str::<Stat>(r#"{"value": "+5", "label": "x"}"#).is_err());
    }

    #[test]
    fn test_project_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.project_by_param("2").map(|p| p.title.as_str()),
            Some("SaaS Dashboard")
        );
        assert!(catalog.project_by_param("99").is_none());
        assert!(catalog.project_by_param("abc").is_none());
        assert!(catalog.project_by_param("-1").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut catalog = catalog();
        catalog.projects[1].id = catalog.projects[0].id;
        assert_eq!(
            catalog.validate(),
            Err(ContentError::DuplicateProject(catalog.projects[0].id))
        );

        let mut catalog = super::tests::catalog();
        catalog.services[2].slug = "web-development".to_string();
        assert_eq!(
            catalog.validate(),
            Err(ContentError::DuplicateService("web-development".to_string()))
        );
    }

    #[test]
    fn test_ranges_are_enforced() {
        let mut catalog = catalog();
        catalog.testimonials[0].rating = 6;
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::RatingOutOfRange { rating: 6, .. })
        ));

        let mut catalog = super::tests::catalog();
        catalog.skills.categories[0].skills[0].level = 101;
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::LevelOutOfRange { level: 101, .. })
        ));

        let mut catalog = super::tests::catalog();
        catalog.testimonials.clear();
        assert_eq!(catalog.validate(), Err(ContentError::NoTestimonials));
    }

    #[test]
    fn test_stars_and_rings() {
        let catalog = catalog();
        let four_star = catalog
            .testimonials
            .iter()
            .find(|t| t.rating == 4)
            .expect("there is a four star review");
        assert_eq!(
            Testimonial::star_slots(four_star.rating),
            [true, true, true, true, false]
        );
        assert_eq!(Testimonial::star_slots(0), [false; 5]);
        assert_eq!(catalog.testimonials[0].role(), "CEO, TechVision Inc.");

        let full = FeaturedSkill {
            name: "x".to_string(),
            level: 100,
            color: "#000".to_string(),
        };
        assert!(full.dash_offset().abs() < 1e-9);
        let half = FeaturedSkill { level: 50, ..full };
        assert!((half.dash_offset() - FeaturedSkill::circumference() / 2.0).abs() < 1e-9);
    }
}
