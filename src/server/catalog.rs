//! Static enumerations backing the plan-request input form
//!
//! No business logic here; these only feed dropdowns in the UI.

use serde_json::{json, Value};

/// Advertised service feature list, shared by `/` and `/health`
pub const FEATURES: [&str; 5] = [
    "Multi-course study planning",
    "Priority-based extra revision time (15% more for high priority courses)",
    "Overall intensity adjustment",
    "Date-based scheduling",
    "AI-powered planning with GROQ",
];

/// Suggested academic goals
pub fn goals() -> Value {
    json!([
        "Prepare for Final Exams",
        "Complete Course Project",
        "Study for Midterm Exams",
        "Prepare for Certification",
        "Master Specific Topics",
        "Improve Grades"
    ])
}

/// Student background levels
pub fn backgrounds() -> Value {
    json!([
        { "id": "beginner", "label": "Beginner" },
        { "id": "intermediate", "label": "Intermediate" },
        { "id": "advanced", "label": "Advanced" }
    ])
}

/// Daily time budget ranges
pub fn time_options() -> Value {
    json!([
        { "id": "1-2", "label": "1-2 hours/day" },
        { "id": "2-3", "label": "2-3 hours/day" },
        { "id": "3-4", "label": "3-4 hours/day" },
        { "id": "4+", "label": "4+ hours/day" }
    ])
}

/// Intensity / difficulty levels
pub fn difficulties() -> Value {
    json!([
        { "id": "easy", "label": "Easy" },
        { "id": "medium", "label": "Medium" },
        { "id": "hard", "label": "Hard" }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(goals().as_array().unwrap().len(), 6);
        assert_eq!(backgrounds().as_array().unwrap().len(), 3);
        assert_eq!(time_options().as_array().unwrap().len(), 4);

        let levels = difficulties();
        let ids: Vec<&str> = levels
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["easy", "medium", "hard"]);
    }
}
