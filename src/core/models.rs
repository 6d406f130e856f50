use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProfile {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    pub address: String,
    pub college_name: String,
    pub degree: String,
    pub university_name: String,
    pub specialization: String,
    pub graduation_year: String,
    pub start_year: String,
    pub end_year: String,
    pub location: String,
    pub cgpa: String,
    pub education_level: String,
    pub skills: String,
    pub technical_skills: String,
    pub soft_skills: String,
    pub languages: String,
    pub projects: Vec<Project>,
    pub work_experiences: Vec<WorkExperience>,
    pub certifications: String,
    pub experience: u32,
}

impl Default for ParsedProfile {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            contact_number: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            portfolio_url: String::new(),
            address: String::new(),
            college_name: String::new(),
            degree: String::new(),
            university_name: String::new(),
            specialization: String::new(),
            graduation_year: String::new(),
            start_year: String::new(),
            end_year: String::new(),
            location: String::new(),
            cgpa: String::new(),
            education_level: String::new(),
            skills: String::new(),
            technical_skills: String::new(),
            soft_skills: String::new(),
            languages: String::new(),
            projects: vec![Project::placeholder()],
            work_experiences: vec![WorkExperience::placeholder()],
            certifications: String::new(),
            experience: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub github_link: String,
    pub live_link: String,
    pub start_date: String,
    pub end_date: String,
    pub role: String,
}

impl Project {
    pub fn placeholder() -> Self {
        Self {
            name: "Project".to_string(),
            description: String::new(),
            technologies: String::new(),
            github_link: String::new(),
            live_link: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            role: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
    pub responsibilities: String,
    pub achievements: String,
}

impl WorkExperience {
    pub fn placeholder() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            location: String::new(),
            description: String::new(),
            responsibilities: String::new(),
            achievements: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub college_name: String,
    pub degree: String,
    pub university_name: String,
    pub specialization: String,
    pub graduation_year: String,
    pub start_year: String,
    pub end_year: String,
    pub location: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}
