//! Static page content compiled into the bundle.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER: &str = "Simphiwe Asanda";
pub const TAGLINE: &str = "Software developer building reliable, well-tested web applications.";

/// Section ids in page order; nav links point at these.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0–100; rendered as the level bar's `data-level`.
    pub level: u8,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Software Developer",
        company: "Freelance",
        period: "2023 - Present",
        highlights: &[
            "Built responsive websites and web apps for small businesses",
            "Integrated third-party APIs for forms, payments and email",
        ],
    },
    Experience {
        role: "Junior Developer (Internship)",
        company: "Tech Solutions",
        period: "2022 - 2023",
        highlights: &[
            "Maintained internal dashboards and reporting tools",
            "Wrote automated tests for existing services",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "This site: a static portfolio with dark mode, reveal animations and a contact form.",
        tech: &["Rust", "Leptos", "WebAssembly"],
        link: None,
    },
    Project {
        title: "Task Tracker",
        description: "A small task manager with local persistence and drag-and-drop ordering.",
        tech: &["JavaScript", "HTML", "CSS"],
        link: None,
    },
    Project {
        title: "Inventory API",
        description: "REST API for stock tracking with authentication and reporting endpoints.",
        tech: &["Python", "SQL"],
        link: None,
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        icon: "fa-code",
        skills: &[
            Skill { name: "HTML & CSS", level: 90 },
            Skill { name: "JavaScript", level: 80 },
            Skill { name: "Rust / WebAssembly", level: 65 },
        ],
    },
    SkillCategory {
        name: "Backend",
        icon: "fa-server",
        skills: &[
            Skill { name: "Python", level: 75 },
            Skill { name: "SQL", level: 70 },
        ],
    },
    SkillCategory {
        name: "Tools",
        icon: "fa-tools",
        skills: &[
            Skill { name: "Git", level: 85 },
            Skill { name: "Linux", level: 70 },
        ],
    },
];
