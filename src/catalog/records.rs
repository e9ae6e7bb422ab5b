use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Subject area a course belongs to
///
/// Deserialized from the display label (e.g. "Cloud Computing") so catalog
/// files read the same way the catalog is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CourseCategory {
    Programming,
    Cybersecurity,
    #[serde(rename = "Cloud Computing")]
    CloudComputing,
    Networking,
    Design,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
}

impl CourseCategory {
    /// Every category, in catalog presentation order
    pub const ALL: [CourseCategory; 6] = [
        CourseCategory::Programming,
        CourseCategory::Cybersecurity,
        CourseCategory::CloudComputing,
        CourseCategory::Networking,
        CourseCategory::Design,
        CourseCategory::BusinessAdministration,
    ];

    /// Display label, also used as the filter value
    pub fn label(self) -> &'static str {
        match self {
            CourseCategory::Programming => "Programming",
            CourseCategory::Cybersecurity => "Cybersecurity",
            CourseCategory::CloudComputing => "Cloud Computing",
            CourseCategory::Networking => "Networking",
            CourseCategory::Design => "Design",
            CourseCategory::BusinessAdministration => "Business Administration",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseCategory {
    type Err = String;

    /// Exact, case-sensitive match on the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Valid options are: all, Programming, Cybersecurity, Cloud Computing, Networking, Design, Business Administration",
                    s
                )
            })
    }
}

/// Kind of learning resource attached to a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Document to read
    Pdf,
    /// Video tutorial
    Video,
    /// External web page
    Link,
    /// Downloadable archive or tool
    Download,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Pdf,
        ResourceType::Video,
        ResourceType::Link,
        ResourceType::Download,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Pdf => "pdf",
            ResourceType::Video => "video",
            ResourceType::Link => "link",
            ResourceType::Download => "download",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ResourceType::Pdf),
            "video" => Ok(ResourceType::Video),
            "link" => Ok(ResourceType::Link),
            "download" => Ok(ResourceType::Download),
            _ => Err(format!(
                "Invalid resource type '{}'. Valid options are: all, pdf, video, link, download",
                s
            )),
        }
    }
}

/// A course offered by the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    /// Unique identifier within the catalog (e.g., "1")
    pub id: String,
    pub name: String,
    pub description: String,
    /// Expected duration in hours (always positive)
    pub hours: f64,
    pub category: CourseCategory,
    /// Completion percentage 0-100; `None` means not started or not tracked
    #[serde(default)]
    pub progress: Option<u8>,
}

/// A learning resource belonging to one course
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    /// Identifier, unique within the owning course
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
    /// The only field that changes at runtime (see `toggle_completion`)
    #[serde(default)]
    pub completed: bool,
}

/// The resources of a single course, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceSet {
    pub course_id: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A category card
///
/// `course_count` is denormalized: it is what the catalog advertises, not a
/// count of the courses loaded in memory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub course_count: u32,
    pub icon: String,
    pub color: String,
}
