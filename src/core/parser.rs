use chrono::{Datelike, Utc};

use super::contact;
use super::education;
use super::experience;
use super::identity;
use super::models::ParsedProfile;
use super::projects;
use super::skills;

pub struct ResumeParser {
    now_year: i32,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            now_year: Utc::now().year(),
        }
    }

    pub fn with_year(now_year: i32) -> Self {
        Self { now_year }
    }

    pub fn parse(&self, text: &str) -> ParsedProfile {
        let mut profile = ParsedProfile::default();

        // Name first; experience entries matching it are discarded below.
        let full_name = identity::extract_name(text).unwrap_or_default();
        let (first, middle, last) = identity::split_name(&full_name);
        profile.first_name = first;
        profile.middle_name = middle;
        profile.last_name = last;

        profile.email = contact::extract_email(text).unwrap_or_default();
        profile.contact_number = contact::extract_phone(text).unwrap_or_default();
        profile.linkedin_url = contact::extract_linkedin(text).unwrap_or_default();
        profile.github_url = contact::extract_github(text).unwrap_or_default();
        profile.portfolio_url = contact::extract_portfolio(text).unwrap_or_default();
        profile.address = contact::extract_address(text).unwrap_or_default();

        let education_record = education::extract_education(text, self.now_year);
        profile.college_name = education_record.college_name;
        profile.degree = education_record.degree;
        profile.university_name = education_record.university_name;
        profile.specialization = education_record.specialization;
        profile.graduation_year = education_record.graduation_year;
        profile.start_year = education_record.start_year;
        profile.end_year = education_record.end_year;
        profile.location = education_record.location;
        profile.cgpa = education_record.cgpa;
        profile.education_level = education::classify_level(text);

        profile.skills = skills::extract_skills(text);
        profile.technical_skills = skills::extract_technical_skills(text);
        profile.soft_skills = skills::extract_soft_skills(text);
        profile.languages = skills::extract_languages(text);
        profile.certifications = skills::extract_certifications(text);

        profile.projects = projects::extract_projects(text);

        let mut experiences = experience::extract_work_experience(text);
        if !full_name.is_empty() {
            experiences.retain(|entry| entry.company != full_name && entry.position != full_name);
            if experiences.is_empty() {
                experiences.push(super::models::WorkExperience::placeholder());
            }
        }
        profile.work_experiences = experiences;

        profile.experience = experience::calculate_experience(text, self.now_year);

        profile
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Q. Public
Contact: jane@example.com
Phone: +1 555 123 4567
linkedin: linkedin.com/in/janeq
github.com/janeq

Education
State University
B.Tech in Computer Science
2014 - 2018
CGPA: 8.5/10

Technical Skills
Backend: Rust, Go
Databases: PostgreSQL

Work Experience
Acme Corp 2018 - 2020
- Built the billing pipeline
Globex 2021 - Present
- On-call lead

Projects
Project: Inventory Tracker
Warehouse tracking tool.
Technologies: Rust

Certifications
- AWS Solutions Architect
";

    #[test]
    fn parse_is_idempotent_under_fixed_year() {
        let parser = ResumeParser::with_year(2026);
        assert_eq!(parser.parse(SAMPLE), parser.parse(SAMPLE));
    }

    #[test]
    fn parse_empty_input_yields_all_defaults() {
        let profile = ResumeParser::with_year(2026).parse("");
        assert_eq!(profile, ParsedProfile::default());
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].name, "Project");
        assert_eq!(profile.work_experiences.len(), 1);
        assert_eq!(profile.work_experiences[0].company, "");
    }

    #[test]
    fn parse_splits_top_line_name() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.middle_name, "Q.");
        assert_eq!(profile.last_name, "Public");
    }

    #[test]
    fn parse_extracts_contact_fields() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.contact_number, "+1 555 123 4567");
        assert_eq!(profile.linkedin_url, "https://linkedin.com/in/janeq");
        assert_eq!(profile.github_url, "https://github.com/janeq");
    }

    #[test]
    fn parse_sums_experience_ranges() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.experience, (2020 - 2018) + (2026 - 2021));
    }

    #[test]
    fn parse_keeps_sections_isolated() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.university_name, "State University");
        assert!(!profile.college_name.contains("Acme"));
        assert!(!profile.college_name.contains("Globex"));
        let companies: Vec<&str> = profile
            .work_experiences
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Acme Corp", "Globex"]);
        assert!(companies.iter().all(|c| !c.contains("University")));
    }

    #[test]
    fn parse_emits_project_placeholder_without_a_section() {
        let profile =
            ResumeParser::with_year(2026).parse("Jane Public\njane@example.com\nno projects");
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].name, "Project");
    }

    #[test]
    fn parse_fills_education_and_skills() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.degree, "B.Tech");
        assert_eq!(profile.specialization, "Computer Science");
        assert_eq!(profile.start_year, "2014");
        assert_eq!(profile.end_year, "2018");
        assert_eq!(profile.graduation_year, "2018");
        assert_eq!(profile.cgpa, "8.5/10");
        assert_eq!(profile.education_level, "Graduate");
        assert!(profile.technical_skills.contains("Rust"));
        assert!(profile.technical_skills.contains("PostgreSQL"));
        assert_eq!(profile.certifications, "AWS Solutions Architect");
    }

    #[test]
    fn parse_extracts_projects_from_sample() {
        let profile = ResumeParser::with_year(2026).parse(SAMPLE);
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].name, "Inventory Tracker");
        assert_eq!(profile.projects[0].technologies, "Rust");
    }
}
