use yew::AttrValue;

/// Fixed page content, built once at startup and passed down as props
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub club_name: AttrValue,
    pub signup_url: AttrValue,
    pub discord_url: AttrValue,
    /// Where the generated lecture artifact is served from
    pub lectures_url: AttrValue,
}

impl SiteConfig {
    pub fn tjhsst() -> Self {
        Self {
            club_name: AttrValue::Static("TJHSST Dev Club"),
            signup_url: AttrValue::Static("https://ion.tjhsst.edu/eighth/activity/12"),
            discord_url: AttrValue::Static("https://discord.gg/j4A8pDje"),
            lectures_url: AttrValue::Static(lecture_types::ARTIFACT_FILENAME),
        }
    }
}
