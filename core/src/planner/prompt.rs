//! Prompt templating for the study-plan completion request
//!
//! Builds the single natural-language instruction sent to the model:
//! the computed allocation table, the concrete study dates, the
//! intensity level and the exact JSON shape the reply must follow.

use super::PlanRequest;
use crate::allocator::{AllocatedCourse, PriorityTier};
use crate::dates::StudyDate;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::fmt::Write;

/// Fixed system message for every completion request
pub const SYSTEM_PROMPT: &str = "You are a Multi-Course Study Planner Assistant. You MUST return \
ONLY valid JSON. Create balanced schedules that include multiple courses each day with extra \
revision time for high priority courses. Account for overall intensity level.";

/// Trivial prompt used by the connectivity probe
pub const PROBE_PROMPT: &str = r#"Return {"status": "OK", "message": "API is working"}"#;

fn course_lines(allocation: &[AllocatedCourse]) -> String {
    let mut out = String::new();
    for course in allocation {
        let extra = match course.priority {
            PriorityTier::High => {
                format!(" [+{:.1}h for revision]", course.extra_revision_hours())
            }
            _ => String::new(),
        };
        let _ = write!(
            out,
            "\n- {} ({}% of daily time = ~{:.1} hours/day{})\n  Topics: {}\n  Difficulty: {}\n  Priority: {}/100 ({})",
            course.name,
            course.percentage,
            course.daily_hours,
            extra,
            course.topics.join(", "),
            course.difficulty,
            course.weight,
            course.priority,
        );
    }
    out
}

fn schedule_lines(dates: &[StudyDate]) -> String {
    dates
        .iter()
        .map(|d| format!("Day {}: {} ({})", d.day_number, d.day, d.date))
        .collect::<Vec<_>>()
        .join("\n")
}

fn high_priority_lines(allocation: &[AllocatedCourse]) -> String {
    let lines: Vec<String> = allocation
        .iter()
        .filter(|c| c.priority == PriorityTier::High)
        .map(|c| {
            format!(
                "- {}: {:.1}h base + {:.1}h revision = {:.1}h total",
                c.name,
                c.daily_hours,
                c.extra_revision_hours(),
                c.total_daily_hours()
            )
        })
        .collect();
    if lines.is_empty() {
        "None".to_string()
    } else {
        lines.join("\n")
    }
}

fn courses_json(allocation: &[AllocatedCourse]) -> Value {
    Value::Array(
        allocation
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "topics": c.topics,
                    "weight": c.weight,
                    "difficulty": c.difficulty,
                    "priorityLevel": c.priority,
                    "allocatedPercentage": c.percentage,
                    "dailyHours": c.daily_hours,
                    "extraRevisionTime": revision_field(c),
                    "totalDailyTime": format!("{:.2}", c.total_daily_hours()),
                })
            })
            .collect(),
    )
}

fn time_allocation_json(allocation: &[AllocatedCourse], total_days: u32) -> Value {
    Value::Array(
        allocation
            .iter()
            .map(|c| {
                json!({
                    "course": c.name,
                    "percentage": c.percentage,
                    "priorityLevel": c.priority,
                    "dailyBaseHours": c.daily_hours,
                    "extraRevisionHours": revision_field(c),
                    "totalDailyTime": format!("{:.2}", c.total_daily_hours()),
                    "weeklyHours": format!("{:.2}", c.total_daily_hours() * f64::from(total_days)),
                })
            })
            .collect(),
    )
}

fn revision_field(course: &AllocatedCourse) -> Value {
    match course.priority {
        PriorityTier::High => json!(format!("{:.2}", course.extra_revision_hours())),
        _ => json!(0),
    }
}

fn high_priority_extra_json(allocation: &[AllocatedCourse]) -> Value {
    Value::Array(
        allocation
            .iter()
            .filter(|c| c.priority == PriorityTier::High)
            .map(|c| {
                json!({
                    "course": c.name,
                    "extraTimeHours": format!("{:.2}", c.extra_revision_hours()),
                    "extraTimePercentage": "15%",
                    "reason": "High priority course gets extra revision time",
                })
            })
            .collect(),
    )
}

/// Build the full plan-generation instruction
pub fn build_plan_prompt(
    request: &PlanRequest,
    allocation: &[AllocatedCourse],
    dates: &[StudyDate],
    today: NaiveDate,
) -> String {
    let preferred_days = request.preferred_days.join(", ");
    let high_priority_names: Vec<&str> = allocation
        .iter()
        .filter(|c| c.priority == PriorityTier::High)
        .map(|c| c.name.as_str())
        .collect();
    let first_day = dates.first().map(|d| d.day.clone()).unwrap_or_else(|| "Monday".to_string());
    let first_date = dates
        .first()
        .map(|d| d.date.to_string())
        .unwrap_or_else(|| today.to_string());

    format!(
        r#"You are an Expert Multi-Course Study Planner. Create a detailed {total_days}-day study plan for MULTIPLE courses.

CRITICAL REQUIREMENTS:
1. The student is studying {course_count} different courses/subjects
2. Allocate study time proportionally based on course priority/weights
3. For courses with HIGH priority (weight > 70), allocate EXTRA REVISION TIME (15-20% extra time)
4. Balance courses across the week - don't focus on one course only
5. Include mixed sessions where appropriate (review of multiple courses)
6. Schedule ONLY on these specific days: {preferred_days}
7. Account for OVERALL PLAN INTENSITY: {intensity}

OVERVIEW:
ACADEMIC GOAL: {goal}
STUDY DURATION: {total_days} days
DAILY STUDY TIME: {daily_hours} hours per day
OVERALL PLAN INTENSITY: {intensity}
AVAILABLE DAYS: {preferred_days}
PREFERRED TIME SLOTS: {preferred_times}

COURSES WITH TIME ALLOCATION:
{course_lines}

STUDY DAY SCHEDULE:
{schedule_lines}

INSTRUCTIONS:
1. Create a BALANCED schedule that includes ALL courses
2. Each day should include sessions from MULTIPLE courses
3. Distribute difficult topics across different days
4. For HIGH PRIORITY courses (weight > 70), include extra revision sessions (15-20% more time)
5. Include review sessions that combine related topics from different courses
6. Consider course difficulty when allocating time (harder courses get more time)
7. Include short breaks between sessions
8. Schedule based on preferred time slots: {preferred_times}
9. Ensure total daily study time is approximately {daily_hours} hours
10. Account for OVERALL PLAN INTENSITY: {intensity}:
    - If intensity is "easy": More breaks, lighter sessions
    - If intensity is "medium": Balanced approach
    - If intensity is "hard": Dense sessions, fewer breaks, more focus

HIGH PRIORITY COURSES EXTRA TIME ALLOCATION:
{high_priority_lines}

Return ONLY valid JSON in this format:
{{
  "goal": "{goal}",
  "totalDays": {total_days},
  "dailyHours": {daily_hours},
  "overallIntensity": "{intensity}",
  "courses": {courses_json},
  "timeAllocation": {time_allocation_json},
  "description": "Brief overview explaining how courses are balanced with priority-based extra revision time",
  "dailySchedule": [
    {{
      "day": 1,
      "dayOfWeek": "{first_day}",
      "date": "{first_date}",
      "totalHours": {daily_hours},
      "focus": "Primary focus for today - mention which courses",
      "coursesCovered": ["Course1", "Course2"],
      "highPrioritySessions": ["Course with high priority gets extra revision"],
      "sessions": [
        {{
          "time": "09:00 - 10:30",
          "course": "Course Name",
          "topic": "Specific Topic",
          "activity": "Study activity description",
          "duration": 1.5,
          "type": "study",
          "priority": "normal"
        }}
      ],
      "breaks": [
        {{
          "time": "10:30 - 11:00",
          "duration": 0.5,
          "activity": "Break / Refresh"
        }}
      ],
      "milestone": "Today's learning objectives across courses"
    }}
  ],
  "courseBalance": {{
    "strategy": "Explain how courses are balanced with priority-based extra time",
    "highPriorityExtraTime": {high_priority_extra_json},
    "recommendations": ["Recommendation 1", "Recommendation 2"]
  }},
  "recommendations": ["Study tip 1", "Study tip 2"],
  "studyTips": ["Multi-course study tip 1", "Multi-course study tip 2"],
  "priorityBasedFeatures": {{
    "highPriorityExtraRevision": true,
    "extraTimePercentage": "15%",
    "appliedToCourses": {applied_courses_json}
  }}
}}

IMPORTANT:
1. Each day MUST include sessions from AT LEAST 2 different courses.
2. HIGH PRIORITY courses (weight > 70) get 15-20% extra time for revision.
3. Account for OVERALL PLAN INTENSITY in session density and breaks.
4. Balance is key!
5. Today's date is {today}."#,
        total_days = request.days,
        course_count = request.courses.len(),
        preferred_days = preferred_days,
        intensity = request.difficulty,
        goal = request.goal,
        daily_hours = request.daily_hours,
        preferred_times = request.preferred_times,
        course_lines = course_lines(allocation),
        schedule_lines = schedule_lines(dates),
        high_priority_lines = high_priority_lines(allocation),
        courses_json = courses_json(allocation),
        time_allocation_json = time_allocation_json(allocation, request.days),
        high_priority_extra_json = high_priority_extra_json(allocation),
        applied_courses_json = json!(high_priority_names),
        first_day = first_day,
        first_date = first_date,
        today = today,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::dates::study_dates;
    use crate::planner::sample_request;

    #[test]
    fn test_prompt_embeds_computed_values() {
        let request = sample_request();
        let allocation = allocate(&request.courses, request.daily_hours);
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let dates = study_dates(request.days, &request.preferred_days, start);

        let prompt = build_plan_prompt(&request, &allocation, &dates, start);

        assert!(prompt.contains("ACADEMIC GOAL: Prepare for Final Exams"));
        assert!(prompt.contains("Operating Systems (44% of daily time"));
        assert!(prompt.contains("[+0.2h for revision]"));
        assert!(prompt.contains("Day 1: Monday (2025-09-01)"));
        assert!(prompt.contains("OVERALL PLAN INTENSITY: medium"));
        assert!(prompt.contains(r#""appliedToCourses": ["Operating Systems"]"#));
        assert!(prompt.contains("Today's date is 2025-09-01"));
    }

    #[test]
    fn test_prompt_without_high_priority_courses() {
        let mut request = sample_request();
        for course in &mut request.courses {
            course.weight = Some(50);
        }
        let allocation = allocate(&request.courses, request.daily_hours);
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let dates = study_dates(request.days, &request.preferred_days, start);

        let prompt = build_plan_prompt(&request, &allocation, &dates, start);

        assert!(prompt.contains("HIGH PRIORITY COURSES EXTRA TIME ALLOCATION:\nNone"));
        assert!(prompt.contains(r#""appliedToCourses": []"#));
    }
}
