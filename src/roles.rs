// src/roles.rs
//! Target roles the analysis service knows how to score against

pub const TARGET_ROLES: &[(&str, &[&str])] = &[
    (
        "Software Development",
        &[
            "Frontend Developer",
            "Backend Developer",
            "Full Stack Developer",
            "Software Engineer",
            "Mobile App Developer (iOS/Android)",
            "Game Developer",
            "Embedded Systems Engineer",
            "Blockchain Developer",
        ],
    ),
    (
        "Data & AI",
        &[
            "Data Scientist",
            "Data Engineer",
            "Data Analyst",
            "Machine Learning Engineer",
            "AI Research Engineer",
            "Business Intelligence (BI) Developer",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "DevOps Engineer",
            "Cloud Architect",
            "Site Reliability Engineer (SRE)",
            "System Administrator",
        ],
    ),
    (
        "Design & Product",
        &[
            "UI/UX Designer",
            "Product Manager",
            "Product Designer",
            "Graphic Designer",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "Cybersecurity Analyst",
            "Ethical Hacker / Pen Tester",
            "Security Engineer",
        ],
    ),
    (
        "Management & Business",
        &[
            "Project Manager",
            "Business Analyst",
            "HR Manager",
            "Talent Acquisition Specialist",
            "Marketing Manager",
            "Sales Executive",
            "Customer Success Manager",
        ],
    ),
    ("Testing", &["QA Engineer", "Automation Test Engineer"]),
];

/// Every role, sorted
pub fn all_roles() -> Vec<&'static str> {
    let mut roles: Vec<&'static str> = TARGET_ROLES
        .iter()
        .flat_map(|(_, roles)| roles.iter().copied())
        .collect();
    roles.sort_unstable();
    roles
}

pub fn is_known_role(role: &str) -> bool {
    TARGET_ROLES
        .iter()
        .any(|(_, roles)| roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
}
