use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub code_link: &'static str,
    pub demo_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    /// Plain text symbol; devicon has no icons for these.
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub site_title: &'static str,
}

/// Shown on certificate cards.
pub const AWARD_GLYPH: &str = "★";
/// Marks links that open in a new tab.
pub const EXTERNAL_LINK_GLYPH: &str = "↗";

/// Section ids rendered on the page, in order.
pub const SECTION_IDS: [&str; 4] = ["home", "certificates", "portfolio", "contact"];

static PROFILE: Profile = Profile {
    name: "Sarah",
    role: "Web Developer",
    tagline: "I craft beautiful, functional websites and applications with attention to detail and user experience.",
    site_title: "Portfolio",
};

static CERTIFICATES: [Certificate; 3] = [
    Certificate {
        id: 1,
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "December 2023",
        description: "Professional certification validating expertise in designing distributed systems and deploying applications on AWS infrastructure.",
        link: "#",
    },
    Certificate {
        id: 2,
        title: "Meta Frontend Developer",
        issuer: "Meta (formerly Facebook)",
        date: "October 2023",
        description: "Advanced certification in modern frontend development, including React, responsive design, and performance optimization.",
        link: "#",
    },
    Certificate {
        id: 3,
        title: "Google Cloud Professional",
        issuer: "Google",
        date: "August 2023",
        description: "Comprehensive certification covering cloud architecture, security, and deployment of scalable applications.",
        link: "#",
    },
];

static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A fully responsive e-commerce platform with product filtering, cart functionality, and payment integration.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        code_link: "#",
        demo_link: "#",
    },
    Project {
        id: 2,
        title: "Dashboard UI",
        description: "An interactive admin dashboard with data visualization, user management, and real-time updates.",
        tags: &["React", "TypeScript", "Chart.js", "Firebase"],
        code_link: "#",
        demo_link: "#",
    },
    Project {
        id: 3,
        title: "Blog Platform",
        description: "A modern blog platform with markdown support, commenting system, and user authentication.",
        tags: &["Next.js", "GraphQL", "PostgreSQL", "AWS"],
        code_link: "#",
        demo_link: "#",
    },
];

/// Extra copy shown under a project's description in the modal.
pub const PROJECT_DETAIL_BLURB: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam in dui mauris. \
Vivamus hendrerit arcu sed erat molestie vehicula. Sed auctor neque eu tellus \
rhoncus ut eleifend nibh porttitor. Ut in nulla enim. Phasellus molestie magna \
non est bibendum non venenatis nisl tempor. Suspendisse dictum feugiat nisl ut dapibus.";

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
        icon: "devicon-instagram-plain",
    },
];

// "about" has no section of its own; the link is kept so the menu matches the footer.
static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        anchor: "home",
    },
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Certificates",
        anchor: "certificates",
    },
    NavItem {
        label: "Projects",
        anchor: "portfolio",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

static CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "contact@sarahdev.com",
        glyph: "✉",
    },
    ContactDetail {
        label: "Phone",
        value: "+1 (555) 123-4567",
        glyph: "☎",
    },
    ContactDetail {
        label: "Location",
        value: "San Francisco, CA",
        glyph: "⌖",
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn certificates() -> &'static [Certificate] {
    &CERTIFICATES
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn social_links() -> &'static [SocialLink] {
    &SOCIAL_LINKS
}

pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

pub fn contact_details() -> &'static [ContactDetail] {
    &CONTACT_DETAILS
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Year shown in the footer, taken from the timestamp stamped by `build.rs`.
pub fn copyright_year() -> i32 {
    year_from_timestamp(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_from_timestamp(ts: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(ts).ok().map(|dt| dt.year())
}
