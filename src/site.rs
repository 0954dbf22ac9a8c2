//! Site copy, navigation and service listings.

#[derive(Debug)]
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
    pub location: &'static str,
    pub founded: u16,
    pub copyright_year: u16,
    pub links: Links,
    pub main_nav: &'static [NavItem],
    pub service_categories: &'static [ServiceCategory],
    /// Flat list shown on the home page.
    pub services: &'static [Service],
}

#[derive(Debug)]
pub struct Links {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub email: &'static str,
}

#[derive(Debug)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Debug)]
pub struct ServiceCategory {
    pub category: &'static str,
    pub description: &'static str,
    pub services: &'static [Service],
}

#[derive(Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.links.email)
    }

    pub fn nav_item(&self, href: &str) -> Option<&NavItem> {
        self.main_nav.iter().find(|item| item.href == href)
    }
}

const TECHNOLOGY_CONSULTING: Service = Service {
    title: "Technology Consulting",
    description: "Strategic advice on technology choices, architecture decisions, and digital transformation.",
    features: &[
        "Technology stack selection",
        "Vendor evaluation",
        "Security assessment",
        "Scalability planning",
    ],
};

const PROTOTYPING: Service = Service {
    title: "Prototyping & Proof of Concept",
    description: "Rapid development of prototypes and proof-of-concept solutions to validate your ideas.",
    features: &[
        "MVP development",
        "Technical feasibility analysis",
        "Market validation support",
        "Investor-ready demos",
    ],
};

const FRACTIONAL_CTO: Service = Service {
    title: "Fractional CTO",
    description: "Strategic technology leadership on-demand, providing executive-level guidance without the full-time commitment.",
    features: &[
        "Technology strategy development",
        "Team building and scaling",
        "Technical due diligence",
        "Architecture review and planning",
    ],
};

const ENGINEERING_LEADERSHIP: Service = Service {
    title: "Engineering Leadership",
    description: "Expert management of engineering teams to deliver high-quality software on time and within budget.",
    features: &[
        "Team mentorship and growth",
        "Process optimization",
        "Agile transformation",
        "Performance management",
    ],
};

const TECHNOLOGY_MAINTENANCE: Service = Service {
    title: "Technology Maintenance",
    description: "Ongoing support and maintenance of your technology infrastructure and applications.",
    features: &[
        "System monitoring and optimization",
        "Security updates and patches",
        "Performance tuning",
        "Technical debt management",
    ],
};

const SOFTWARE_DEVELOPMENT: Service = Service {
    title: "Software Development",
    description: "Full-stack development services using modern technologies and best practices.",
    features: &[
        "Web application development",
        "API design and implementation",
        "Cloud architecture",
        "DevOps and CI/CD",
    ],
};

const ENGINEERING_MENTORSHIP: Service = Service {
    title: "Engineering Mentorship",
    description: "Personalized guidance for specific technical challenges and career situations.",
    features: &[
        "Technical problem-solving",
        "Code review and best practices",
        "Architecture decisions",
        "Leadership skill development",
    ],
};

const CAREER_GUIDANCE: Service = Service {
    title: "Career Guidance",
    description: "Strategic career planning and development for engineering professionals.",
    features: &[
        "Career path planning",
        "Interview preparation",
        "Skill gap analysis",
        "Leadership transition support",
    ],
};

pub static SITE: SiteConfig = SiteConfig {
    name: "Clarkston Technology Group",
    tagline: "Your Technology Partner at Every Level",
    description: "Technology partnership for startups, businesses, and engineering professionals. From strategic guidance to hands-on development.",
    url: "https://www.clarkstontechnology.com",
    og_image: "https://www.clarkstontechnology.com/og.jpg",
    location: "Atlanta, GA",
    founded: 2004,
    copyright_year: 2024,
    links: Links {
        linkedin: "https://www.linkedin.com/company/clarkston-technology-group",
        github: "https://github.com/clarkstontechnology",
        email: "john@clarkstontechnology.com",
    },
    main_nav: &[
        NavItem {
            title: "Home",
            href: "/",
        },
        NavItem {
            title: "Services",
            href: "/services",
        },
        NavItem {
            title: "About",
            href: "/about",
        },
        NavItem {
            title: "Case Studies",
            href: "/case-studies",
        },
        NavItem {
            title: "Blog",
            href: "/blog",
        },
        NavItem {
            title: "Contact",
            href: "/contact",
        },
    ],
    service_categories: &[
        ServiceCategory {
            category: "For Startups & Ideas",
            description: "Transform your vision into reality with strategic technology guidance and rapid prototyping.",
            services: &[TECHNOLOGY_CONSULTING, PROTOTYPING],
        },
        ServiceCategory {
            category: "For Businesses Using Technology",
            description: "Scale your technology operations with executive leadership and comprehensive development services.",
            services: &[
                FRACTIONAL_CTO,
                ENGINEERING_LEADERSHIP,
                TECHNOLOGY_MAINTENANCE,
                SOFTWARE_DEVELOPMENT,
            ],
        },
        ServiceCategory {
            category: "For Engineering Managers & Engineers",
            description: "Advance your career with personalized mentorship and strategic guidance.",
            services: &[ENGINEERING_MENTORSHIP, CAREER_GUIDANCE],
        },
    ],
    services: &[
        FRACTIONAL_CTO,
        ENGINEERING_LEADERSHIP,
        SOFTWARE_DEVELOPMENT,
        TECHNOLOGY_CONSULTING,
    ],
};

pub fn site() -> &'static SiteConfig {
    &SITE
}
