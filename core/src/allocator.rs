//! Proportional study-time allocation across weighted courses
//!
//! Each course carries a 1-100 weight expressing relative priority. The
//! allocator splits the daily hour budget proportionally and assigns a
//! priority tier; HIGH-tier courses additionally get an informational
//! 15% extra-revision figure that is not subtracted from the others.

use serde::{Deserialize, Serialize};

/// Weight assumed when a course omits its weight or supplies one
/// outside the 1-100 range
pub const DEFAULT_WEIGHT: u32 = 50;

/// Extra revision share granted to HIGH-tier courses
pub const HIGH_PRIORITY_BONUS: f64 = 0.15;

/// Course or overall plan difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Priority tier derived from a course weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
}

impl PriorityTier {
    /// HIGH when weight > 70, MEDIUM when 40 < weight <= 70, else LOW
    pub fn from_weight(weight: u32) -> Self {
        if weight > 70 {
            PriorityTier::High
        } else if weight > 40 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTier::Low => write!(f, "LOW"),
            PriorityTier::Medium => write!(f, "MEDIUM"),
            PriorityTier::High => write!(f, "HIGH"),
        }
    }
}

/// Course topics as submitted by the client
///
/// The web form sends either a JSON array or a single comma-separated
/// string; both normalize to an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topics {
    List(Vec<String>),
    Text(String),
}

impl Topics {
    /// Normalized topic list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Topics::List(items) => items.clone(),
            Topics::Text(text) => text
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl Default for Topics {
    fn default() -> Self {
        Topics::List(Vec::new())
    }
}

/// A course as submitted in a plan request, immutable once validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub topics: Topics,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Course {
    /// Declared weight, falling back to the default when absent or out
    /// of the 1-100 range
    pub fn effective_weight(&self) -> u32 {
        match self.weight {
            Some(w) if (1..=100).contains(&w) => w,
            _ => DEFAULT_WEIGHT,
        }
    }
}

/// A course annotated with its computed share of the daily budget
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedCourse {
    pub name: String,
    pub topics: Vec<String>,
    pub weight: u32,
    pub difficulty: Difficulty,
    pub daily_hours: f64,
    /// Rounded share of the daily budget, 0-100
    pub percentage: u32,
    pub priority: PriorityTier,
}

impl AllocatedCourse {
    /// Extra revision hours; nonzero only for HIGH-tier courses
    pub fn extra_revision_hours(&self) -> f64 {
        match self.priority {
            PriorityTier::High => self.daily_hours * HIGH_PRIORITY_BONUS,
            _ => 0.0,
        }
    }

    /// Base hours plus the HIGH-tier revision bonus
    pub fn total_daily_hours(&self) -> f64 {
        self.daily_hours + self.extra_revision_hours()
    }
}

/// Split `daily_hours` across `courses` proportionally to their weights.
///
/// Pure and deterministic. Callers must reject empty course lists before
/// reaching this point; validation guarantees it for HTTP traffic.
pub fn allocate(courses: &[Course], daily_hours: f64) -> Vec<AllocatedCourse> {
    let total_weight: u32 = courses.iter().map(Course::effective_weight).sum();

    courses
        .iter()
        .map(|course| {
            let weight = course.effective_weight();
            let share = f64::from(weight) / f64::from(total_weight);
            AllocatedCourse {
                name: course.name.clone(),
                topics: course.topics.to_list(),
                weight,
                difficulty: course.difficulty,
                daily_hours: daily_hours * share,
                percentage: (share * 100.0).round() as u32,
                priority: PriorityTier::from_weight(weight),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, weight: Option<u32>) -> Course {
        Course {
            name: name.to_string(),
            topics: Topics::default(),
            weight,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_priority_tier_boundaries() {
        assert_eq!(PriorityTier::from_weight(40), PriorityTier::Low);
        assert_eq!(PriorityTier::from_weight(41), PriorityTier::Medium);
        assert_eq!(PriorityTier::from_weight(70), PriorityTier::Medium);
        assert_eq!(PriorityTier::from_weight(71), PriorityTier::High);
    }

    #[test]
    fn test_allocation_sums_to_budget() {
        let courses = vec![
            course("A", Some(80)),
            course("B", Some(55)),
            course("C", Some(25)),
        ];
        let allocated = allocate(&courses, 6.0);

        let hours: f64 = allocated.iter().map(|c| c.daily_hours).sum();
        assert!((hours - 6.0).abs() < 1e-9);

        let percent: u32 = allocated.iter().map(|c| c.percentage).sum();
        assert!((99..=101).contains(&percent));
    }

    #[test]
    fn test_reference_allocation() {
        let courses = vec![
            course("Operating Systems", Some(80)),
            course("Database Systems", Some(60)),
            course("Data Structures", Some(40)),
        ];
        let allocated = allocate(&courses, 3.0);

        assert_eq!(allocated[0].percentage, 44);
        assert_eq!(allocated[1].percentage, 33);
        assert_eq!(allocated[2].percentage, 22);

        assert!((allocated[0].daily_hours - 1.3333).abs() < 0.001);
        assert!((allocated[1].daily_hours - 1.0).abs() < 0.001);
        assert!((allocated[2].daily_hours - 0.6667).abs() < 0.001);

        assert_eq!(allocated[0].priority, PriorityTier::High);
        assert_eq!(allocated[1].priority, PriorityTier::Medium);
        assert_eq!(allocated[2].priority, PriorityTier::Low);

        assert!((allocated[0].extra_revision_hours() - 0.2).abs() < 0.001);
        assert_eq!(allocated[1].extra_revision_hours(), 0.0);
        assert_eq!(allocated[2].extra_revision_hours(), 0.0);

        assert!((allocated[0].total_daily_hours() - 1.3333 * 1.15).abs() < 0.001);
    }

    #[test]
    fn test_default_weights_split_equally() {
        let courses = vec![course("A", None), course("B", Some(500)), course("C", None)];
        let allocated = allocate(&courses, 3.0);

        for c in &allocated {
            assert_eq!(c.weight, DEFAULT_WEIGHT);
            assert!((c.daily_hours - 1.0).abs() < 1e-9);
            assert_eq!(c.priority, PriorityTier::Medium);
        }
    }

    #[test]
    fn test_topics_from_comma_string() {
        let topics = Topics::Text("Trees, Graphs,  Sorting Algorithms,".to_string());
        assert_eq!(topics.to_list(), vec!["Trees", "Graphs", "Sorting Algorithms"]);
    }
}
