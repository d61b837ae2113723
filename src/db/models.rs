use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Stored representation of a job listing in the `jobs` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

/// Subset of job fields to overwrite; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub url: Option<String>,
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.company.is_none()
            && self.url.is_none()
    }

    /// Body of a `$set` update containing only the present fields
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        let fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("company", &self.company),
            ("url", &self.url),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                set.insert(name, value.clone());
            }
        }
        set
    }

    pub fn to_update_document(&self) -> Document {
        doc! { "$set": self.to_set_document() }
    }

    #[cfg(test)]
    pub fn apply_to(&self, job: &mut JobDocument) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(company) = &self.company {
            job.company = company.clone();
        }
        if let Some(url) = &self.url {
            job.url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JobDocument {
        JobDocument {
            id: Some(ObjectId::new()),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            company: "Acme".to_string(),
            url: "acme.com/jobs/1".to_string(),
        }
    }

    #[test]
    fn set_document_only_contains_present_fields() {
        let patch = JobPatch {
            title: Some("Staff Engineer".to_string()),
            url: Some("acme.com/jobs/2".to_string()),
            ..Default::default()
        };

        assert_eq!(
            patch.to_update_document(),
            doc! { "$set": { "title": "Staff Engineer", "url": "acme.com/jobs/2" } }
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(JobPatch::default().is_empty());
        assert!(JobPatch::default().to_set_document().is_empty());
    }

    #[test]
    fn apply_to_keeps_absent_fields() {
        let mut job = sample();
        let before = job.clone();

        JobPatch {
            company: Some("Globex".to_string()),
            ..Default::default()
        }
        .apply_to(&mut job);

        assert_eq!(job.company, "Globex");
        assert_eq!(job.title, before.title);
        assert_eq!(job.description, before.description);
        assert_eq!(job.url, before.url);
        assert_eq!(job.id, before.id);
    }

    #[test]
    fn new_documents_serialize_without_an_id() {
        let job = JobDocument { id: None, ..sample() };
        let document = mongodb::bson::to_document(&job).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Engineer");
    }
}
