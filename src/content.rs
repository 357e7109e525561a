pub const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@example.com";
pub const CONTACT_EMAIL: &str = "hello@example.com";
pub const CONTACT_LOCATION: &str = "Philadelphia, PA";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "A modern e-commerce platform built with Next.js and Stripe integration.",
        tags: &["Next.js", "Stripe", "Tailwind CSS"],
        image: "/images/ecommerce-platform.svg",
        link: "https://github.com/yourusername/ecommerce-platform",
    },
    Project {
        title: "Portfolio Website",
        description: "A minimalist portfolio website for a photographer showcasing their work.",
        tags: &["React", "Framer Motion", "CSS Grid"],
        image: "/images/portfolio-website.svg",
        link: "https://github.com/yourusername/portfolio-website",
    },
    Project {
        title: "Dashboard UI",
        description: "An admin dashboard with dark mode, charts, and responsive design.",
        tags: &["TypeScript", "React", "Recharts"],
        image: "/images/dashboard-ui.svg",
        link: "https://github.com/yourusername/dashboard-ui",
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "Next.js",
    "TypeScript",
    "Tailwind CSS",
    "UI/UX Design",
    "Responsive Design",
    "Accessibility",
    "Performance",
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_is_fully_populated() {
        assert!(!PROJECTS.is_empty());

        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tags.is_empty());
            assert!(project.image.starts_with('/'));
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn project_titles_are_unique() {
        for (index, project) in PROJECTS.iter().enumerate() {
            for other in &PROJECTS[index + 1..] {
                assert_ne!(project.title, other.title);
            }
        }
    }

    #[test]
    fn social_links_point_outward() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{} is not external", link.label);
        }
    }
}
