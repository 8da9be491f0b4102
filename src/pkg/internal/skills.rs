use std::sync::RwLock;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::prelude::{Error, Result};

/// Process-wide skill reference data: category name to an ordered skill
/// list, seeded at startup and mutable only by appending to an existing
/// category. Scoped per instance; application skills are free-form strings
/// and are never checked against this.
pub struct SkillTaxonomy {
    categories: RwLock<Vec<(String, Vec<String>)>>,
}

/// Point-in-time copy of the taxonomy; serializes as a JSON object that
/// preserves category and skill order.
pub struct TaxonomySnapshot(Vec<(String, Vec<String>)>);

impl Serialize for TaxonomySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

impl SkillTaxonomy {
    pub fn seeded() -> Self {
        let seed = [
            (
                "programming",
                vec![
                    "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Swift",
                    "Kotlin", "TypeScript", "HTML", "CSS", "SQL", "R", "Scala", "Rust", "Dart",
                ],
            ),
            (
                "frameworks",
                vec![
                    "React", "Angular", "Vue.js", "Node.js", "Express", "Django", "Flask",
                    "Spring", "Laravel", "Ruby on Rails", "ASP.NET", "jQuery", "Bootstrap",
                    "Tailwind CSS",
                ],
            ),
            (
                "databases",
                vec![
                    "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQLite",
                    "Microsoft SQL Server", "Firebase", "Cassandra", "Elasticsearch",
                ],
            ),
            (
                "devops",
                vec![
                    "Docker", "Kubernetes", "AWS", "Azure", "Google Cloud", "CI/CD", "Jenkins",
                    "Git", "Terraform", "Ansible", "Linux", "Nginx", "Apache",
                ],
            ),
            (
                "softSkills",
                vec![
                    "Communication", "Teamwork", "Problem Solving", "Leadership",
                    "Time Management", "Adaptability", "Creativity", "Work Ethic",
                    "Critical Thinking", "Conflict Resolution",
                ],
            ),
        ];
        let categories = seed
            .into_iter()
            .map(|(category, skills)| {
                (
                    category.to_string(),
                    skills.into_iter().map(String::from).collect(),
                )
            })
            .collect();
        SkillTaxonomy {
            categories: RwLock::new(categories),
        }
    }

    pub fn snapshot(&self) -> TaxonomySnapshot {
        let categories = self.categories.read().expect("taxonomy lock poisoned");
        TaxonomySnapshot(categories.clone())
    }

    pub fn append(&self, category: &str, skill: &str) -> Result<()> {
        let mut categories = self.categories.write().expect("taxonomy lock poisoned");
        let Some((_, skills)) = categories.iter_mut().find(|(name, _)| name == category) else {
            return Err(Error::validation("category", "Invalid category"));
        };
        if skills.iter().any(|existing| existing == skill) {
            return Err(Error::Conflict("Skill already exists in this category"));
        }
        skills.push(skill.to_string());
        tracing::info!("added skill {} to category {}", skill, category);
        Ok(())
    }
}
