use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{
    content::{About, Education, Experience, Paragraph, Project, Segment, SkillCategory},
    motion::{EXPERIENCE_POINTS, SECTION_CHILDREN, SKILL_TAGS},
    scroll::Section,
};

const CATEGORY_GLYPHS: [&str; 4] = ["◈", "◇", "◆", "◉"];

/// A page section that plays its entrance animation the first time it
/// scrolls into view, and stays revealed afterwards.
#[component]
pub fn AnimatedSection(section: Section, title: &'static str, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node_ref);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed(true);
        }
    });
    let number = section.nav_number().unwrap_or_default();

    view! {
        <section
            id=section.id()
            node_ref=node_ref
            class=move || if revealed() { "section revealed" } else { "section" }
        >
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">
                        <span class="section-number">{format!("{number:02}.")}</span>
                        " "
                        {title}
                        <span class="title-underline"></span>
                    </h2>
                </div>
                {children()}
            </div>
        </section>
    }
}

pub fn paragraph_view(paragraph: Paragraph, highlight_class: &'static str) -> impl IntoView {
    paragraph
        .into_iter()
        .map(|segment| match segment {
            Segment::Highlight { highlight } => {
                Either::Left(view! { <span class=highlight_class>{highlight}</span> })
            }
            Segment::Text(text) => Either::Right(text),
        })
        .collect_view()
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <AnimatedSection section=Section::About title="About Me">
            <div class="about-grid">
                <div class="about-text">
                    {about
                        .paragraphs
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| {
                            view! {
                                <p class="reveal" style=SECTION_CHILDREN.style(0, i)>
                                    {paragraph_view(p, "highlight")}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="about-stats">
                    {about
                        .stats
                        .into_iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <div class="stat-card reveal" style=SECTION_CHILDREN.style(0, i)>
                                    <span class="stat-number">{stat.value}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn ExperienceSection(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <AnimatedSection section=Section::Experience title="Experience">
            <div class="timeline">
                {experience
                    .into_iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        view! {
                            <div class="timeline-item reveal" style=SECTION_CHILDREN.style(0, i)>
                                <div class="timeline-marker">
                                    <span class="marker-dot"></span>
                                    <span class="marker-line"></span>
                                </div>
                                <div class="timeline-content">
                                    <div class="exp-header">
                                        <div>
                                            <h3 class="exp-role">{exp.role}</h3>
                                            <p class="exp-company">
                                                {exp.company} " "
                                                <span class="exp-location">"• " {exp.location}</span>
                                            </p>
                                        </div>
                                        <span class="exp-period">{exp.period}</span>
                                    </div>
                                    <ul class="exp-points">
                                        {exp
                                            .points
                                            .into_iter()
                                            .enumerate()
                                            .map(|(j, point)| {
                                                view! {
                                                    <li class="reveal-slide" style=EXPERIENCE_POINTS.style(0, j)>
                                                        {point}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <AnimatedSection section=Section::Projects title="Projects">
            <div class="projects-masonry">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <article class="project-card reveal" style=SECTION_CHILDREN.style(0, i)>
                                <div class="project-icon">
                                    <i class="extra-folder"></i>
                                </div>
                                <div class="project-content">
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-description">{project.description}</p>
                                    <div class="project-tech">
                                        {project
                                            .tech
                                            .into_iter()
                                            .map(|tech| view! { <span class="tech-pill">{tech}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="project-arrow">"→"</div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <AnimatedSection section=Section::Skills title="Skills & Technologies">
            <div class="skills-showcase">
                {skills
                    .into_iter()
                    .enumerate()
                    .map(|(cat_index, group)| {
                        let glyph = CATEGORY_GLYPHS[cat_index % CATEGORY_GLYPHS.len()];
                        view! {
                            <div class="skill-group reveal" style=SECTION_CHILDREN.style(0, cat_index)>
                                <h3 class="skill-category">
                                    <span class="category-icon">{glyph}</span>
                                    {group.category}
                                </h3>
                                <div class="skill-tags">
                                    {group
                                        .skills
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, skill)| {
                                            view! {
                                                <span
                                                    class="skill-tag reveal-pop"
                                                    style=SKILL_TAGS.style(cat_index, i)
                                                >
                                                    {skill}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn EducationSection(education: Vec<Education>) -> impl IntoView {
    view! {
        <AnimatedSection section=Section::Education title="Education">
            <div class="education-grid">
                {education
                    .into_iter()
                    .enumerate()
                    .map(|(i, edu)| {
                        view! {
                            <div class="education-card reveal" style=SECTION_CHILDREN.style(0, i)>
                                <div class="edu-badge">
                                    <i class="extra-graduation"></i>
                                </div>
                                <div class="edu-content">
                                    <h3 class="edu-degree">{edu.degree}</h3>
                                    <p class="edu-institution">{edu.institution}</p>
                                    <span class="edu-period">{edu.period}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}
