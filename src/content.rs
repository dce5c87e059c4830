//! Static page copy: profile, navigation, skills, projects, stats.

use crate::page::Section;

/// Named accent colors; the palette resolves them per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Cyan,
    Blue,
    Teal,
    Purple,
    Green,
    Yellow,
    Fuchsia,
    Emerald,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
    /// Header gradient, start and end.
    pub gradient: (Accent, Accent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub badge: &'static str,
    pub greeting: &'static str,
    /// Intro sentence split around the highlighted experience figure.
    pub intro: (&'static str, &'static str, &'static str),
    /// `mailto:` target.
    pub email: &'static str,
    /// Address shown next to the mail icon.
    pub email_label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Jayaprakash T",
    initials: "JP",
    badge: "Open to new opportunities",
    greeting: "Hi, I'm",
    intro: (
        "Frontend Developer with ",
        "3.5+ years",
        " of experience crafting pixel-perfect, immersive digital experiences using modern web technologies.",
    ),
    email: "hello@example.com",
    email_label: "jayaprakash@example.com",
};

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        anchor: "#about",
        section: Section::About,
    },
    NavLink {
        label: "Skills",
        anchor: "#skills",
        section: Section::Skills,
    },
    NavLink {
        label: "Projects",
        anchor: "#projects",
        section: Section::Projects,
    },
    NavLink {
        label: "Contact",
        anchor: "#contact",
        section: Section::Contact,
    },
];

pub const HERO_ACTIONS: [(&str, Section); 2] = [
    ("Explore My Work ↗", Section::Projects),
    ("Let's Talk", Section::Contact),
];

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Experience",
        value: "3.5+",
        suffix: "Years",
    },
    Stat {
        label: "Projects",
        value: "25+",
        suffix: "Completed",
    },
    Stat {
        label: "Expertise",
        value: "100%",
        suffix: "Frontend",
    },
    Stat {
        label: "Availability",
        value: "24/7",
        suffix: "Support",
    },
];

pub const SKILLS_TITLE: (&str, &str) = ("Technical ", "Arsenal");
pub const SKILLS_SUBTITLE: &str =
    "My preferred weapons of choice for conquering the digital frontier.";

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "React",
        icon: "</>",
        level: "Expert",
        accent: Accent::Cyan,
    },
    Skill {
        name: "TypeScript",
        icon: ">_",
        level: "Advanced",
        accent: Accent::Blue,
    },
    Skill {
        name: "Tailwind CSS",
        icon: "◐",
        level: "Expert",
        accent: Accent::Teal,
    },
    Skill {
        name: "Next.js",
        icon: "◍",
        level: "Advanced",
        accent: Accent::Purple,
    },
    Skill {
        name: "Node.js",
        icon: "▣",
        level: "Intermediate",
        accent: Accent::Green,
    },
    Skill {
        name: "Animation",
        icon: "✦",
        level: "Creative",
        accent: Accent::Yellow,
    },
];

pub const PROJECTS_TITLE: (&str, &str) = ("Featured ", "Projects");
pub const PROJECTS_SUBTITLE: &str = "A selection of my best work.";
pub const PROJECTS_GITHUB: &str = "View Github ⌥";
pub const PROJECT_LINK: &str = "View Case Study ↗";

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Dashboard",
        description: "A high-performance analytics dashboard featuring real-time data visualization and dark mode.",
        tags: &["React", "Recharts", "Firebase"],
        icon: "▦",
        gradient: (Accent::Cyan, Accent::Blue),
    },
    Project {
        title: "AI Chat Interface",
        description: "A glassmorphic chat application integrated with LLM APIs, featuring streaming responses.",
        tags: &["Next.js", "Tailwind", "OpenAI API"],
        icon: "✦",
        gradient: (Accent::Fuchsia, Accent::Purple),
    },
    Project {
        title: "SaaS Landing Page",
        description: "A conversion-optimized landing page with complex scroll animations and 3D elements.",
        tags: &["React", "Three.js", "Framer Motion"],
        icon: "⚡",
        gradient: (Accent::Emerald, Accent::Teal),
    },
];

pub const CONTACT_TITLE: (&str, &str) = ("Let's create something", "extraordinary");
pub const CONTACT_BLURB: &str = "Ready to take your digital presence to the next level? I'm currently available for freelance projects and full-time roles.";
pub const SOCIALS: [&str; 3] = ["Github", "LinkedIn", "Website"];

pub const SUBMIT_LABEL: &str = "Send Message ➤";
pub const SUBMITTING_LABEL: &str = "Sending...";

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_BODY: &str =
    "Thank you for reaching out. I'll get back to you as soon as possible.";
pub const SUCCESS_CLOSE: &str = "Close";

pub const FAILURE_TITLE: &str = "Message Not Sent";

/// Footer line for the given year.
pub fn footer_text(year: i32) -> String {
    format!(
        "© {} {}. Built with Rust, ratatui & ♥.",
        year, PROFILE.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_cover_every_section_in_order() {
        let sections: Vec<Section> = NAV_LINKS.iter().map(|l| l.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        assert!(NAV_LINKS.iter().all(|l| l.anchor.starts_with('#')));
    }

    #[test]
    fn test_tables_match_page_copy() {
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(STATS.len(), 4);
        assert!(PROJECTS.iter().all(|p| p.tags.len() == 3));
    }

    #[test]
    fn test_footer_text() {
        let text = footer_text(2026);
        assert!(text.starts_with("© 2026 Jayaprakash T."));
    }
}
