// tests/support/builders.rs
use profile_service::application::commands::profiles::{
    AddEducationCommand, AddExperienceCommand, UpsertProfileCommand,
};
use serde_json::{Value, json};

pub fn upsert_command(githubusername: &str) -> UpsertProfileCommand {
    UpsertProfileCommand {
        githubusername: Some(githubusername.to_string()),
        ..UpsertProfileCommand::default()
    }
}

pub fn experience_command(title: &str, company: &str, from: &str) -> AddExperienceCommand {
    AddExperienceCommand {
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        from: Some(from.to_string()),
        ..AddExperienceCommand::default()
    }
}

pub fn education_command(school: &str) -> AddEducationCommand {
    AddEducationCommand {
        school: Some(school.to_string()),
        degree: Some("BSc".to_string()),
        fieldofstudy: Some("Computer Science".to_string()),
        from: Some("2015-09-01".to_string()),
        ..AddEducationCommand::default()
    }
}

pub fn profile_body(githubusername: &str) -> Value {
    json!({
        "githubusername": githubusername,
        "status": "Developer",
        "skills": "rust, sql , docker",
        "website": "https://example.test"
    })
}

pub fn experience_body(title: &str) -> Value {
    json!({
        "title": title,
        "company": "Acme",
        "location": "Remote",
        "from": "2020-01-15",
        "current": true
    })
}

pub fn education_body(school: &str) -> Value {
    json!({
        "school": school,
        "degree": "MSc",
        "fieldofstudy": "Mathematics",
        "from": "2012-09-01T00:00:00Z",
        "to": "2014-06-30"
    })
}
